//! # 영화 멤버 서비스
//!
//! 감독, 출연진, 스튜디오는 모두 영화와 다대다 관계를 맺는 같은 형태의 엔티티이므로
//! 하나의 제네릭 서비스로 처리합니다.
//!
//! ```text
//! create_for_movie(mid, director)
//!   ├─ 1. MovieService::get_by_id(mid)           ─ 없으면 NotFound, 아무 것도 저장하지 않음
//!   ├─ 2. EntityStore::save(director)            ─ did 할당
//!   └─ 3. AssociationManager::link_movie_director ─ movie_director 행 기록
//! ```

use std::sync::Arc;
use log::info;
use crate::core::errors::AppResult;
use crate::domain::entities::{CastMember, Director, Movie, Studio};
use crate::repositories::EntityStore;
use crate::services::association_manager::{AssociationManager, LinkedMember};
use crate::services::crud::EntityCrud;
use crate::services::movies::MovieService;

pub type DirectorService = MemberService<Director>;
pub type CastMemberService = MemberService<CastMember>;
pub type StudioService = MemberService<Studio>;

pub struct MemberService<T: LinkedMember> {
    crud: EntityCrud<T>,
    movies: Arc<MovieService>,
    associations: Arc<AssociationManager>,
}

impl<T: LinkedMember> MemberService<T> {
    pub fn new(
        store: Arc<dyn EntityStore<T>>,
        movies: Arc<MovieService>,
        associations: Arc<AssociationManager>,
    ) -> Self {
        Self {
            crud: EntityCrud::new(store),
            movies,
            associations,
        }
    }

    pub async fn get_all(&self) -> AppResult<Vec<T>> {
        self.crud.get_all().await
    }

    /// 영화에 연결된 멤버 목록
    ///
    /// # 반환값
    ///
    /// * `Ok(Vec<T>)` - 연결된 멤버 (없으면 빈 목록)
    /// * `Err(AppError::NotFound)` - 영화가 존재하지 않음
    pub async fn get_all_for_movie(&self, mid: i64) -> AppResult<Vec<T>> {
        self.movies.get_by_id(mid).await?;
        let keys = self.associations.member_keys::<T>(mid).await?;

        self.crud.store().find_many(&keys).await
    }

    pub async fn get_by_id(&self, key: i64) -> AppResult<T> {
        self.crud.get_by_id(&key).await
    }

    /// 멤버에 연결된 영화 목록 (역방향 조회)
    pub async fn get_movies(&self, key: i64) -> AppResult<Vec<Movie>> {
        self.get_by_id(key).await?;
        let mids = self.associations.movie_keys::<T>(key).await?;

        self.movies.get_many(&mids).await
    }

    pub async fn create(&self, member: T) -> AppResult<T> {
        self.crud.create(member).await
    }

    /// 영화에 연결된 멤버를 생성합니다.
    ///
    /// 영화가 존재하지 않으면 아무 것도 저장하지 않습니다.
    pub async fn create_for_movie(&self, mid: i64, member: T) -> AppResult<T> {
        let movie = self.movies.get_by_id(mid).await?;

        let created = self.crud.create(member).await?;
        let pending = self.associations.link_movie_member(&movie, &created)?;
        self.associations.write(pending).await?;

        info!("{} 생성 후 Movie {}에 연결", T::NAME, mid);
        Ok(created)
    }

    pub async fn update(&self, key: i64, details: T::Details) -> AppResult<T> {
        self.crud.update(&key, details).await
    }

    /// 링크 행을 먼저 제거한 뒤 멤버를 삭제합니다. 연결된 영화는 남습니다.
    pub async fn delete(&self, key: i64) -> AppResult<()> {
        let member = self.get_by_id(key).await?;

        self.associations.detach_member::<T>(key).await?;
        self.crud.remove(&member).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::{PersonDetails, User};
    use crate::repositories::{InMemoryLinkStore, InMemoryStore};
    use crate::services::users::UserService;

    struct Fixture {
        movies: Arc<MovieService>,
        directors: DirectorService,
        studios: StudioService,
    }

    fn fixture() -> Fixture {
        let movie_store = Arc::new(InMemoryStore::<Movie>::new());
        let associations = Arc::new(AssociationManager::new(
            Arc::new(InMemoryLinkStore::new()),
            movie_store.clone(),
        ));
        let users = Arc::new(UserService::new(
            Arc::new(InMemoryStore::<User>::new()),
            associations.clone(),
        ));
        let movies = Arc::new(MovieService::new(movie_store, users, associations.clone()));

        Fixture {
            directors: DirectorService::new(
                Arc::new(InMemoryStore::<Director>::new()),
                movies.clone(),
                associations.clone(),
            ),
            studios: StudioService::new(
                Arc::new(InMemoryStore::<Studio>::new()),
                movies.clone(),
                associations,
            ),
            movies,
        }
    }

    #[actix_web::test]
    async fn test_create_for_movie_links_both_sides() {
        let fx = fixture();
        let movie = fx.movies.create(Movie::new("Inception")).await.unwrap();
        assert_eq!(movie.mid, Some(1));

        let director = fx
            .directors
            .create_for_movie(1, Director::new("Chris", "Nolan"))
            .await
            .unwrap();

        assert_eq!(director.did, Some(1));
        assert_eq!(fx.directors.get_all_for_movie(1).await.unwrap(), vec![director]);
        assert_eq!(fx.directors.get_movies(1).await.unwrap(), vec![movie]);
    }

    #[actix_web::test]
    async fn test_create_for_missing_movie_persists_nothing() {
        let fx = fixture();

        let err = fx
            .studios
            .create_for_movie(99, Studio::new("Syncopy"))
            .await
            .unwrap_err();

        assert_eq!(err.to_string(), "Movie With the mid: 99 does not exist!");
        assert!(fx.studios.get_all().await.unwrap().is_empty());
    }

    #[actix_web::test]
    async fn test_missing_studio_message() {
        let fx = fixture();

        let err = fx.studios.get_by_id(99).await.unwrap_err();

        assert_eq!(err.to_string(), "Studio With the sid: 99 does not exist!");
    }

    #[actix_web::test]
    async fn test_movie_delete_keeps_members() {
        let fx = fixture();
        fx.movies.create(Movie::new("Inception")).await.unwrap();
        fx.directors
            .create_for_movie(1, Director::new("Chris", "Nolan"))
            .await
            .unwrap();

        fx.movies.delete(1).await.unwrap();

        assert!(fx.directors.get_by_id(1).await.is_ok());
        assert!(fx.directors.get_movies(1).await.unwrap().is_empty());
    }

    #[actix_web::test]
    async fn test_member_delete_keeps_movies() {
        let fx = fixture();
        fx.movies.create(Movie::new("Inception")).await.unwrap();
        fx.directors
            .create_for_movie(1, Director::new("Chris", "Nolan"))
            .await
            .unwrap();

        fx.directors.delete(1).await.unwrap();

        assert!(fx.movies.get_by_id(1).await.is_ok());
        assert!(fx.directors.get_all_for_movie(1).await.unwrap().is_empty());
    }

    #[actix_web::test]
    async fn test_update_preserves_links() {
        let fx = fixture();
        fx.movies.create(Movie::new("Inception")).await.unwrap();
        fx.directors
            .create_for_movie(1, Director::new("Chris", "Nolan"))
            .await
            .unwrap();

        let updated = fx
            .directors
            .update(1, PersonDetails {
                first_name: "Christopher".to_string(),
                last_name: "Nolan".to_string(),
            })
            .await
            .unwrap();

        assert_eq!(updated.first_name, "Christopher");
        assert_eq!(fx.directors.get_all_for_movie(1).await.unwrap(), vec![updated]);
    }

    #[actix_web::test]
    async fn test_get_movies_for_missing_member_is_not_found() {
        let fx = fixture();

        let err = fx.directors.get_movies(7).await.unwrap_err();

        assert_eq!(err.to_string(), "Director With the did: 7 does not exist!");
    }
}
