//! # 영화 관리 서비스 구현
//!
//! 영화 엔티티의 CRUD와 사용자 기준(부모 스코프) 조회/생성을 담당합니다.
//!
//! ```text
//! create_for_user("alice", movie)
//!   ├─ 1. UserService::get_by_id("alice")          ─ 없으면 NotFound
//!   ├─ 2. AssociationManager::attach_user_to_movie ─ fk_user 지정
//!   └─ 3. MovieStore::save                          ─ mid 할당
//! ```

use std::sync::Arc;
use log::info;
use crate::core::errors::AppResult;
use crate::domain::entities::{Movie, MovieDetails};
use crate::repositories::MovieStore;
use crate::services::association_manager::AssociationManager;
use crate::services::crud::EntityCrud;
use crate::services::users::UserService;

pub struct MovieService {
    crud: EntityCrud<Movie, dyn MovieStore>,
    users: Arc<UserService>,
    associations: Arc<AssociationManager>,
}

impl MovieService {
    pub fn new(
        store: Arc<dyn MovieStore>,
        users: Arc<UserService>,
        associations: Arc<AssociationManager>,
    ) -> Self {
        Self {
            crud: EntityCrud::new(store),
            users,
            associations,
        }
    }

    pub async fn get_all(&self) -> AppResult<Vec<Movie>> {
        self.crud.get_all().await
    }

    /// 사용자가 소유한 영화 목록
    ///
    /// # 반환값
    ///
    /// * `Ok(Vec<Movie>)` - 소유 영화 (없으면 빈 목록)
    /// * `Err(AppError::NotFound)` - 사용자가 존재하지 않음
    pub async fn get_all_for_user(&self, username: &str) -> AppResult<Vec<Movie>> {
        let user = self.users.get_by_id(username).await?;

        self.associations.movies_owned_by(&user).await
    }

    pub async fn get_by_id(&self, mid: i64) -> AppResult<Movie> {
        self.crud.get_by_id(&mid).await
    }

    /// 키 목록에 해당하는 영화들. 존재하지 않는 키는 건너뜁니다.
    pub async fn get_many(&self, mids: &[i64]) -> AppResult<Vec<Movie>> {
        self.crud.store().find_many(mids).await
    }

    /// 소유자 없는 영화를 생성합니다.
    pub async fn create(&self, movie: Movie) -> AppResult<Movie> {
        self.crud.create(movie).await
    }

    /// 사용자 소유의 영화를 생성합니다.
    ///
    /// 사용자가 존재하지 않으면 아무 것도 저장하지 않습니다.
    pub async fn create_for_user(&self, username: &str, movie: Movie) -> AppResult<Movie> {
        let user = self.users.get_by_id(username).await?;

        let movie = self.associations.attach_user_to_movie(&user, movie);
        let created = self.crud.create(movie).await?;

        info!("User {} 소유 영화 생성: mid={:?}", user.username, created.mid);
        Ok(created)
    }

    /// 제목, 상영 시간, 장르, 개봉일만 갱신합니다. 소유자와 연관 관계는 유지됩니다.
    pub async fn update(&self, mid: i64, details: MovieDetails) -> AppResult<Movie> {
        self.crud.update(&mid, details).await
    }

    /// 영화 삭제
    ///
    /// 링크 행을 먼저 제거한 뒤 영화를 삭제합니다.
    /// 연결되어 있던 감독, 출연진, 스튜디오, 사용자는 그대로 남습니다.
    pub async fn delete(&self, mid: i64) -> AppResult<()> {
        let movie = self.get_by_id(mid).await?;

        self.associations.detach_movie(mid).await?;
        self.crud.remove(&movie).await
    }
}
