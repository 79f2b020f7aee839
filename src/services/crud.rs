//! 엔티티 공통 CRUD 처리
//!
//! 모든 엔티티 서비스가 공유하는 조회/생성/수정/삭제 흐름입니다.
//! 존재하지 않는 식별자는 항상 [`AppError::NotFound`]로 보고합니다.

use std::marker::PhantomData;
use std::sync::Arc;
use log::{debug, info};
use crate::core::errors::{AppError, AppResult};
use crate::domain::entities::Entity;
use crate::repositories::EntityStore;

/// 저장소 하나에 대한 "or-404" CRUD 연산 묶음
///
/// `S`는 기본적으로 `dyn EntityStore<T>`이며, 영화처럼 확장 저장소 trait이 필요한
/// 경우 `dyn MovieStore`를 지정합니다.
pub struct EntityCrud<T: Entity, S: ?Sized + EntityStore<T> = dyn EntityStore<T>> {
    store: Arc<S>,
    _entity: PhantomData<fn() -> T>,
}

impl<T: Entity, S: ?Sized + EntityStore<T>> EntityCrud<T, S> {
    pub fn new(store: Arc<S>) -> Self {
        Self { store, _entity: PhantomData }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub async fn get_all(&self) -> AppResult<Vec<T>> {
        self.store.find_all().await
    }

    pub async fn get_by_id(&self, key: &T::Key) -> AppResult<T> {
        debug!("{} 조회: {}={}", T::NAME, T::ID_FIELD, key);

        self.store
            .find_by_id(key)
            .await?
            .ok_or_else(|| AppError::not_found::<T>(key))
    }

    /// 엔티티를 단독으로 저장합니다.
    ///
    /// 저장소의 `save`를 그대로 따르므로, 호출자가 지정한 자연 키의 행이 이미 있으면
    /// 그 행을 덮어씁니다.
    pub async fn create(&self, entity: T) -> AppResult<T> {
        let created = self.store.save(entity).await?;

        if let Some(key) = created.key() {
            info!("{} 생성 완료: {}={}", T::NAME, T::ID_FIELD, key);
        }

        Ok(created)
    }

    /// 허용된 필드만 복사한 뒤 다시 저장합니다.
    pub async fn update(&self, key: &T::Key, details: T::Details) -> AppResult<T> {
        let mut entity = self.get_by_id(key).await?;
        entity.apply_details(details);

        let updated = self.store.save(entity).await?;
        info!("{} 수정 완료: {}={}", T::NAME, T::ID_FIELD, key);

        Ok(updated)
    }

    /// 존재가 확인된 엔티티를 저장소에서 제거합니다.
    pub async fn remove(&self, entity: &T) -> AppResult<()> {
        self.store.delete(entity).await?;

        if let Some(key) = entity.key() {
            info!("{} 삭제 완료: {}={}", T::NAME, T::ID_FIELD, key);
        }

        Ok(())
    }
}
