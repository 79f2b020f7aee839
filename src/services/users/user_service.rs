//! # 사용자 관리 서비스 구현
//!
//! 사용자 계정의 조회, 등록, 수정, 삭제를 담당합니다.
//!
//! 사용자는 호출자가 지정한 `username`을 자연 키로 사용하므로,
//! 이미 존재하는 username으로 등록하면 기존 계정을 새 값으로 덮어씁니다.
//! 삭제 시에는 해당 사용자가 소유한 영화의 외래 키를 먼저 비운 뒤 계정을 제거합니다.

use std::sync::Arc;
use log::info;
use crate::core::errors::AppResult;
use crate::domain::entities::{User, UserDetails};
use crate::repositories::EntityStore;
use crate::services::association_manager::AssociationManager;
use crate::services::crud::EntityCrud;

/// 사용자 관리 비즈니스 로직 서비스
///
/// ## 에러 처리
///
/// - **NotFound**: `User With the username: {username} does not exist!`
/// - **ValidationError**: username이 비어 있음
pub struct UserService {
    crud: EntityCrud<User>,
    associations: Arc<AssociationManager>,
}

impl UserService {
    pub fn new(store: Arc<dyn EntityStore<User>>, associations: Arc<AssociationManager>) -> Self {
        Self {
            crud: EntityCrud::new(store),
            associations,
        }
    }

    pub async fn get_all(&self) -> AppResult<Vec<User>> {
        self.crud.get_all().await
    }

    /// username으로 사용자 조회
    ///
    /// # 반환값
    ///
    /// * `Ok(User)` - 사용자 엔티티
    /// * `Err(AppError::NotFound)` - 해당 username의 사용자가 존재하지 않음
    pub async fn get_by_id(&self, username: &str) -> AppResult<User> {
        self.crud.get_by_id(&username.to_string()).await
    }

    /// 새 사용자 계정 생성
    ///
    /// # 인자
    ///
    /// * `user` - username이 채워진 사용자 엔티티
    ///
    /// # 반환값
    ///
    /// * `Ok(User)` - 저장된 사용자 (같은 username이 있었다면 덮어쓴 결과)
    /// * `Err(AppError::ValidationError)` - username 누락
    pub async fn create(&self, user: User) -> AppResult<User> {
        let start_time = std::time::Instant::now();

        let created = self.crud.create(user).await?;

        info!("Total user creation took: {:?}", start_time.elapsed());
        Ok(created)
    }

    /// 비밀번호와 이메일만 갱신합니다.
    ///
    /// 이름, 생성일, 최근 접속일은 변경되지 않습니다.
    pub async fn update(&self, username: &str, details: UserDetails) -> AppResult<User> {
        self.crud.update(&username.to_string(), details).await
    }

    /// 사용자 계정 삭제
    ///
    /// 소유한 영화는 삭제되지 않고 소유자 없는 영화로 남습니다.
    pub async fn delete(&self, username: &str) -> AppResult<()> {
        let user = self.get_by_id(username).await?;

        let detached = self.associations.detach_user(&user.username).await?;
        if detached > 0 {
            info!("사용자 {}의 영화 {}건 소유 해제", user.username, detached);
        }

        self.crud.remove(&user).await
    }
}
