//! # 메모리 저장소 구현
//!
//! 프로세스 메모리에 엔티티와 링크 테이블을 보관하는 저장소입니다.
//! 테스트와 `STORE_BACKEND=memory` 실행에서 사용되며,
//! MongoDB 구현과 동일한 계약(upsert, 삭제 시 NotFound, 키 재사용 금지)을 따릅니다.

use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};
use async_trait::async_trait;
use log::debug;
use crate::core::errors::{AppError, AppResult};
use crate::domain::entities::{Entity, Link, Movie, Relation};
use super::store::{EntityStore, LinkStore, MovieStore};

fn poisoned(name: &str) -> AppError {
    AppError::InternalError(format!("{} 저장소 잠금이 손상되었습니다", name))
}

/// 엔티티 타입 하나를 위한 메모리 저장소
///
/// 대리 키는 1부터 증가하는 시퀀스에서 할당하며, 삭제 후에도 재사용하지 않습니다.
pub struct InMemoryStore<T: Entity> {
    rows: RwLock<BTreeMap<T::Key, T>>,
    sequence: AtomicI64,
}

impl<T: Entity> InMemoryStore<T> {
    pub fn new() -> Self {
        Self {
            rows: RwLock::new(BTreeMap::new()),
            sequence: AtomicI64::new(1),
        }
    }

    fn read(&self) -> AppResult<RwLockReadGuard<'_, BTreeMap<T::Key, T>>> {
        self.rows.read().map_err(|_| poisoned(T::NAME))
    }

    fn write(&self) -> AppResult<RwLockWriteGuard<'_, BTreeMap<T::Key, T>>> {
        self.rows.write().map_err(|_| poisoned(T::NAME))
    }

    fn generate_key(&self) -> AppResult<T::Key> {
        T::key_from_sequence(self.sequence.fetch_add(1, Ordering::SeqCst))
            .ok_or_else(|| AppError::ValidationError(format!("{} is required", T::ID_FIELD)))
    }
}

impl<T: Entity> Default for InMemoryStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl<T: Entity> EntityStore<T> for InMemoryStore<T> {
    async fn find_all(&self) -> AppResult<Vec<T>> {
        Ok(self.read()?.values().cloned().collect())
    }

    async fn find_by_id(&self, key: &T::Key) -> AppResult<Option<T>> {
        Ok(self.read()?.get(key).cloned())
    }

    async fn save(&self, mut entity: T) -> AppResult<T> {
        let key = match entity.key() {
            Some(key) => key.clone(),
            None => {
                let key = self.generate_key()?;
                entity.set_key(key.clone());
                key
            }
        };

        debug!("{} 저장: {}={}", T::NAME, T::ID_FIELD, key);
        self.write()?.insert(key, entity.clone());

        Ok(entity)
    }

    async fn delete(&self, entity: &T) -> AppResult<()> {
        let key = entity
            .key()
            .ok_or_else(|| AppError::ValidationError(format!("{} is required", T::ID_FIELD)))?;

        match self.write()?.remove(key) {
            Some(_) => Ok(()),
            None => Err(AppError::not_found::<T>(key)),
        }
    }
}

#[async_trait]
impl MovieStore for InMemoryStore<Movie> {
    async fn find_by_owner(&self, username: &str) -> AppResult<Vec<Movie>> {
        Ok(self
            .read()?
            .values()
            .filter(|movie| movie.owner.as_deref() == Some(username))
            .cloned()
            .collect())
    }

    async fn clear_owner(&self, username: &str) -> AppResult<u64> {
        let mut rows = self.write()?;
        let mut cleared = 0;

        for movie in rows.values_mut() {
            if movie.owner.as_deref() == Some(username) {
                movie.owner = None;
                cleared += 1;
            }
        }

        Ok(cleared)
    }
}

/// 메모리 링크 테이블
///
/// 관계별로 `(mid, member)` 집합을 보관하므로 같은 쌍은 한 번만 저장됩니다.
#[derive(Default)]
pub struct InMemoryLinkStore {
    tables: RwLock<HashMap<Relation, BTreeSet<Link>>>,
}

impl InMemoryLinkStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn select<F>(&self, relation: Relation, f: F) -> AppResult<Vec<i64>>
    where
        F: Fn(&Link) -> Option<i64>,
    {
        let tables = self.tables.read().map_err(|_| poisoned(relation.table()))?;

        Ok(tables
            .get(&relation)
            .map(|links| links.iter().filter_map(&f).collect())
            .unwrap_or_default())
    }

    fn remove_where<F>(&self, relation: Relation, f: F) -> AppResult<u64>
    where
        F: Fn(&Link) -> bool,
    {
        let mut tables = self.tables.write().map_err(|_| poisoned(relation.table()))?;

        let Some(links) = tables.get_mut(&relation) else {
            return Ok(0);
        };

        let before = links.len();
        links.retain(|link| !f(link));

        Ok((before - links.len()) as u64)
    }
}

#[async_trait]
impl LinkStore for InMemoryLinkStore {
    async fn insert(&self, relation: Relation, link: Link) -> AppResult<bool> {
        let mut tables = self.tables.write().map_err(|_| poisoned(relation.table()))?;

        Ok(tables.entry(relation).or_default().insert(link))
    }

    async fn members_of(&self, relation: Relation, mid: i64) -> AppResult<Vec<i64>> {
        self.select(relation, |link| (link.mid == mid).then_some(link.member))
    }

    async fn movies_of(&self, relation: Relation, member: i64) -> AppResult<Vec<i64>> {
        self.select(relation, |link| (link.member == member).then_some(link.mid))
    }

    async fn remove_movie(&self, relation: Relation, mid: i64) -> AppResult<u64> {
        self.remove_where(relation, |link| link.mid == mid)
    }

    async fn remove_member(&self, relation: Relation, member: i64) -> AppResult<u64> {
        self.remove_where(relation, |link| link.member == member)
    }
}
