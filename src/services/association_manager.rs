//! # 연관 관계 관리자
//!
//! 영화와 감독/출연진/스튜디오 사이의 다대다 관계, 사용자와 영화 사이의
//! 일대다 관계를 일관된 상태로 유지합니다.
//!
//! ## 쓰기 순서
//!
//! 관리자는 먼저 기록할 레코드([`PendingLink`] 또는 소유자가 지정된 [`Movie`])를
//! 만들어 반환하고, 실제 쓰기는 엔티티 서비스가 다음 순서로 수행합니다.
//!
//! ```text
//! 1. 부모 엔티티 확인 (없으면 NotFound)
//! 2. 자식 엔티티 저장 (대리 키 할당)
//! 3. 링크 행 기록 (PendingLink → LinkStore)
//! ```
//!
//! 여러 문서에 걸친 트랜잭션을 사용하지 않으므로, 3단계가 실패하면 자식 엔티티는
//! 연결되지 않은 채 남고 에러가 그대로 호출자에게 전달됩니다.
//!
//! ## 중복 링크
//!
//! 이미 연결된 쌍을 다시 연결하면 아무 것도 쓰지 않고 [`LinkOutcome::AlreadyLinked`]를
//! 반환합니다. 단일 링크 해제는 제공하지 않으며, 링크는 양쪽 엔티티 중 하나가
//! 삭제될 때만 함께 제거됩니다.

use std::sync::Arc;
use log::{debug, info};
use crate::core::errors::{AppError, AppResult};
use crate::domain::entities::{
    CastMember, Director, Entity, Link, Movie, MovieMember, Relation, Studio, User,
};
use crate::repositories::{LinkStore, MovieStore};

/// 영화와 연결되는 멤버 타입별 링크 진입점
///
/// 서비스는 [`AssociationManager::link_movie_member`]만 호출하고,
/// 실제 레코드는 타입에 맞는 `link_movie_director` / `link_movie_cast_member` /
/// `link_movie_studio`가 만듭니다.
pub trait LinkedMember: MovieMember {
    fn link_with(associations: &AssociationManager, movie: &Movie, member: &Self) -> AppResult<PendingLink>;
}

impl LinkedMember for Director {
    fn link_with(associations: &AssociationManager, movie: &Movie, member: &Self) -> AppResult<PendingLink> {
        associations.link_movie_director(movie, member)
    }
}

impl LinkedMember for CastMember {
    fn link_with(associations: &AssociationManager, movie: &Movie, member: &Self) -> AppResult<PendingLink> {
        associations.link_movie_cast_member(movie, member)
    }
}

impl LinkedMember for Studio {
    fn link_with(associations: &AssociationManager, movie: &Movie, member: &Self) -> AppResult<PendingLink> {
        associations.link_movie_studio(movie, member)
    }
}

/// 기록 대기 중인 링크 행
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PendingLink {
    pub relation: Relation,
    pub link: Link,
}

/// 링크 기록 결과
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkOutcome {
    Created,
    AlreadyLinked,
}

pub struct AssociationManager {
    links: Arc<dyn LinkStore>,
    movies: Arc<dyn MovieStore>,
}

fn unsaved<T: Entity>() -> AppError {
    AppError::InternalError(format!("저장되지 않은 {}는 연결할 수 없습니다", T::NAME))
}

impl AssociationManager {
    pub fn new(links: Arc<dyn LinkStore>, movies: Arc<dyn MovieStore>) -> Self {
        Self { links, movies }
    }

    /// 멤버 타입에 맞는 `link_movie_*` 연산으로 링크 레코드를 만듭니다.
    pub fn link_movie_member<T: LinkedMember>(&self, movie: &Movie, member: &T) -> AppResult<PendingLink> {
        T::link_with(self, movie, member)
    }

    /// 양쪽 모두 식별자가 할당된 상태여야 합니다.
    fn pending_link<T: MovieMember>(&self, movie: &Movie, member: &T) -> AppResult<PendingLink> {
        let mid = movie.mid.ok_or_else(unsaved::<Movie>)?;
        let key = *member.key().ok_or_else(unsaved::<T>)?;

        Ok(PendingLink {
            relation: T::RELATION,
            link: Link::new(mid, key),
        })
    }

    pub fn link_movie_director(&self, movie: &Movie, director: &Director) -> AppResult<PendingLink> {
        self.pending_link(movie, director)
    }

    pub fn link_movie_cast_member(&self, movie: &Movie, cast_member: &CastMember) -> AppResult<PendingLink> {
        self.pending_link(movie, cast_member)
    }

    pub fn link_movie_studio(&self, movie: &Movie, studio: &Studio) -> AppResult<PendingLink> {
        self.pending_link(movie, studio)
    }

    /// 링크 행을 한 번만 기록합니다.
    pub async fn write(&self, pending: PendingLink) -> AppResult<LinkOutcome> {
        let PendingLink { relation, link } = pending;

        if self.links.insert(relation, link).await? {
            info!("{} 링크 생성: mid={} {}={}", relation.table(), link.mid, relation.member_field(), link.member);
            Ok(LinkOutcome::Created)
        } else {
            debug!("{} 링크가 이미 존재합니다: mid={} {}={}", relation.table(), link.mid, relation.member_field(), link.member);
            Ok(LinkOutcome::AlreadyLinked)
        }
    }

    /// 영화의 소유 사용자를 지정합니다.
    ///
    /// 일대다 관계이므로 영화 쪽 외래 키 하나만 바뀝니다.
    /// 반환된 영화를 저장하는 것은 호출자의 책임입니다.
    pub fn attach_user_to_movie(&self, user: &User, mut movie: Movie) -> Movie {
        movie.owner = Some(user.username.clone());
        movie
    }

    /// 영화에 연결된 멤버 키
    pub async fn member_keys<T: MovieMember>(&self, mid: i64) -> AppResult<Vec<i64>> {
        self.links.members_of(T::RELATION, mid).await
    }

    /// 멤버에 연결된 영화 키
    pub async fn movie_keys<T: MovieMember>(&self, member: i64) -> AppResult<Vec<i64>> {
        self.links.movies_of(T::RELATION, member).await
    }

    pub async fn movies_owned_by(&self, user: &User) -> AppResult<Vec<Movie>> {
        self.movies.find_by_owner(&user.username).await
    }

    /// 영화의 모든 링크 행을 제거합니다. 연결된 엔티티는 삭제하지 않습니다.
    pub async fn detach_movie(&self, mid: i64) -> AppResult<u64> {
        let mut removed = 0;

        for relation in Relation::ALL {
            removed += self.links.remove_movie(relation, mid).await?;
        }

        debug!("Movie {} 링크 {}건 제거", mid, removed);
        Ok(removed)
    }

    pub async fn detach_member<T: MovieMember>(&self, key: i64) -> AppResult<u64> {
        let removed = self.links.remove_member(T::RELATION, key).await?;

        debug!("{} {} 링크 {}건 제거", T::NAME, key, removed);
        Ok(removed)
    }

    /// 사용자가 소유한 영화의 외래 키를 비웁니다. 영화 자체는 남습니다.
    pub async fn detach_user(&self, username: &str) -> AppResult<u64> {
        let detached = self.movies.clear_owner(username).await?;

        debug!("User {} 소유 영화 {}건 해제", username, detached);
        Ok(detached)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repositories::{EntityStore, InMemoryLinkStore, InMemoryStore};

    fn manager() -> (AssociationManager, Arc<InMemoryStore<Movie>>) {
        let movies = Arc::new(InMemoryStore::<Movie>::new());
        let manager = AssociationManager::new(Arc::new(InMemoryLinkStore::new()), movies.clone());
        (manager, movies)
    }

    fn saved_movie(mid: i64) -> Movie {
        let mut movie = Movie::new("Inception");
        movie.mid = Some(mid);
        movie
    }

    #[test]
    fn test_link_requires_persisted_entities() {
        let (manager, _) = manager();

        let err = manager
            .link_movie_director(&saved_movie(1), &Director::new("Chris", "Nolan"))
            .unwrap_err();

        assert!(matches!(err, AppError::InternalError(_)));
    }

    #[test]
    fn test_link_record_targets_member_relation() {
        let (manager, _) = manager();
        let mut studio = Studio::new("Syncopy");
        studio.sid = Some(3);

        let pending = manager.link_movie_studio(&saved_movie(1), &studio).unwrap();

        assert_eq!(pending.relation, Relation::MovieStudio);
        assert_eq!(pending.link, Link::new(1, 3));
    }

    #[test]
    fn test_generic_link_uses_each_member_relation() {
        let (manager, _) = manager();
        let movie = saved_movie(2);
        let mut director = Director::new("Chris", "Nolan");
        director.did = Some(4);
        let mut cast_member = CastMember::new("Elliot", "Page");
        cast_member.cmid = Some(5);
        let mut studio = Studio::new("Syncopy");
        studio.sid = Some(6);

        let relations = [
            manager.link_movie_member(&movie, &director).unwrap(),
            manager.link_movie_member(&movie, &cast_member).unwrap(),
            manager.link_movie_member(&movie, &studio).unwrap(),
        ];

        assert_eq!(relations[0], manager.link_movie_director(&movie, &director).unwrap());
        assert_eq!(relations[1].relation, Relation::MovieCastMember);
        assert_eq!(relations[1].link, Link::new(2, 5));
        assert_eq!(relations[2].relation, Relation::MovieStudio);
    }

    #[actix_web::test]
    async fn test_write_is_symmetric_and_deduplicated() {
        let (manager, _) = manager();
        let mut cast_member = CastMember::new("Elliot", "Page");
        cast_member.cmid = Some(9);
        let pending = manager.link_movie_cast_member(&saved_movie(1), &cast_member).unwrap();

        assert_eq!(manager.write(pending).await.unwrap(), LinkOutcome::Created);
        assert_eq!(manager.write(pending).await.unwrap(), LinkOutcome::AlreadyLinked);

        assert_eq!(manager.member_keys::<CastMember>(1).await.unwrap(), vec![9]);
        assert_eq!(manager.movie_keys::<CastMember>(9).await.unwrap(), vec![1]);
    }

    #[actix_web::test]
    async fn test_detach_movie_clears_every_relation() {
        let (manager, _) = manager();
        let mut director = Director::new("Chris", "Nolan");
        director.did = Some(1);
        let mut studio = Studio::new("Syncopy");
        studio.sid = Some(1);
        let movie = saved_movie(1);
        manager.write(manager.link_movie_director(&movie, &director).unwrap()).await.unwrap();
        manager.write(manager.link_movie_studio(&movie, &studio).unwrap()).await.unwrap();

        assert_eq!(manager.detach_movie(1).await.unwrap(), 2);
        assert!(manager.movie_keys::<Director>(1).await.unwrap().is_empty());
    }

    #[actix_web::test]
    async fn test_attach_user_sets_owner() {
        let (manager, movies) = manager();
        let date = chrono::NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let user = User::new("alice", "Alice", "Kim", "p1", date, date);

        let movie = manager.attach_user_to_movie(&user, Movie::new("Inception"));
        movies.save(movie).await.unwrap();

        let owned = manager.movies_owned_by(&user).await.unwrap();
        assert_eq!(owned.len(), 1);
        assert_eq!(owned[0].owner.as_deref(), Some("alice"));
    }
}
