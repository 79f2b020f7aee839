//! # 저장소 계약
//!
//! 엔티티 타입별 영구 저장 추상화를 정의합니다.
//! 서비스 계층은 구체 구현(메모리, MongoDB)을 모른 채 trait 객체로만 저장소를 사용합니다.
//!
//! | trait | 역할 |
//! |-------|------|
//! | [`EntityStore`] | 엔티티 하나의 CRUD (find-all, find-by-id, save, delete) |
//! | [`MovieStore`] | 영화 전용 확장: 소유 사용자 기준 조회/해제 |
//! | [`LinkStore`] | 다대다 링크 테이블 |

use async_trait::async_trait;
use crate::core::errors::AppResult;
use crate::domain::entities::{Entity, Link, Movie, Relation};

/// 엔티티 저장소
///
/// `save`는 upsert 입니다. 식별자가 없으면 새 행을 삽입하고
/// (대리 키 엔티티는 새 키를 할당), 식별자가 있으면 해당 행을 갱신합니다.
#[async_trait]
pub trait EntityStore<T: Entity>: Send + Sync {
    /// 저장된 모든 엔티티 (순서는 보장하지 않음)
    async fn find_all(&self) -> AppResult<Vec<T>>;

    async fn find_by_id(&self, key: &T::Key) -> AppResult<Option<T>>;

    /// 여러 키를 한 번에 조회합니다. 존재하지 않는 키는 건너뜁니다.
    async fn find_many(&self, keys: &[T::Key]) -> AppResult<Vec<T>> {
        let mut found = Vec::with_capacity(keys.len());

        for key in keys {
            if let Some(entity) = self.find_by_id(key).await? {
                found.push(entity);
            }
        }

        Ok(found)
    }

    /// 저장 후 식별자가 채워진 엔티티를 반환합니다.
    async fn save(&self, entity: T) -> AppResult<T>;

    /// 행이 이미 없으면 `NotFound`를 반환합니다.
    async fn delete(&self, entity: &T) -> AppResult<()>;
}

/// 영화 저장소 확장
///
/// User→Movie 일대다 관계는 영화 행의 외래 키로만 표현되므로
/// 사용자 기준 조회와 해제는 영화 저장소가 담당합니다.
#[async_trait]
pub trait MovieStore: EntityStore<Movie> {
    async fn find_by_owner(&self, username: &str) -> AppResult<Vec<Movie>>;

    /// 해당 사용자가 소유한 영화의 외래 키를 비우고 변경된 영화 수를 반환합니다.
    async fn clear_owner(&self, username: &str) -> AppResult<u64>;
}

/// 다대다 링크 테이블 저장소
#[async_trait]
pub trait LinkStore: Send + Sync {
    /// 링크 행을 추가합니다. 이미 존재하는 쌍이면 `false`를 반환합니다.
    async fn insert(&self, relation: Relation, link: Link) -> AppResult<bool>;

    /// 영화에 연결된 반대편 키 목록
    async fn members_of(&self, relation: Relation, mid: i64) -> AppResult<Vec<i64>>;

    /// 반대편 엔티티에 연결된 영화 키 목록
    async fn movies_of(&self, relation: Relation, member: i64) -> AppResult<Vec<i64>>;

    async fn remove_movie(&self, relation: Relation, mid: i64) -> AppResult<u64>;

    async fn remove_member(&self, relation: Relation, member: i64) -> AppResult<u64>;
}
