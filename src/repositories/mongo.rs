//! # MongoDB 저장소 구현
//!
//! 엔티티 타입마다 하나의 컬렉션을, 다대다 관계마다 하나의 링크 컬렉션을 사용합니다.
//!
//! ## 컬렉션 구성
//!
//! | 컬렉션 | 내용 | 인덱스 |
//! |--------|------|--------|
//! | `movie`, `director`, `cast_member`, `studio`, `users` | 엔티티 문서 | 식별자 필드 UNIQUE |
//! | `movie_director`, `movie_cast_member`, `movie_studio` | `(mid, member)` 링크 문서 | 복합 UNIQUE |
//! | `counters` | 컬렉션별 대리 키 시퀀스 | `_id` |
//!
//! ## 대리 키 할당
//!
//! MongoDB에는 자동 증가 컬럼이 없으므로 `counters` 컬렉션의 문서를
//! `$inc` + upsert로 원자적으로 증가시켜 새 키를 얻습니다.
//! 시퀀스는 감소하지 않으므로 삭제된 키가 다시 할당되지 않습니다.

use std::marker::PhantomData;
use std::sync::Arc;
use async_trait::async_trait;
use futures_util::TryStreamExt;
use log::{debug, info};
use mongodb::{
    bson::{doc, to_bson, Document},
    options::{FindOneAndUpdateOptions, IndexOptions, ReplaceOptions, ReturnDocument, UpdateOptions},
    Collection, IndexModel,
};
use crate::core::errors::{AppError, AppResult, ErrorContext};
use crate::db::Database;
use crate::domain::entities::{Entity, Link, Movie, Relation};
use super::store::{EntityStore, LinkStore, MovieStore};

const COUNTERS_COLLECTION: &str = "counters";
const OWNER_FIELD: &str = "fk_user";

/// 엔티티 타입 하나를 위한 MongoDB 저장소
pub struct MongoStore<T: Entity> {
    db: Arc<Database>,
    _entity: PhantomData<fn() -> T>,
}

impl<T: Entity> MongoStore<T> {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db, _entity: PhantomData }
    }

    fn collection(&self) -> Collection<T> {
        self.db.entity_collection::<T>()
    }

    fn key_filter(key: &T::Key) -> AppResult<Document> {
        let value = to_bson(key).with_context(|| format!("{} 식별자 변환 실패", T::NAME))?;

        let mut filter = Document::new();
        filter.insert(T::ID_FIELD, value);
        Ok(filter)
    }

    /// `counters` 컬렉션에서 다음 시퀀스 값을 가져옵니다.
    async fn next_sequence(&self) -> AppResult<i64> {
        let counters = self.db.documents(COUNTERS_COLLECTION);
        let name = T::COLLECTION;

        let options = FindOneAndUpdateOptions::builder()
            .upsert(true)
            .return_document(ReturnDocument::After)
            .build();

        let counter = counters
            .find_one_and_update(doc! { "_id": name }, doc! { "$inc": { "seq": 1_i64 } })
            .with_options(options)
            .await
            .in_collection(COUNTERS_COLLECTION)?
            .ok_or_else(|| AppError::DatabaseError(format!("{} 시퀀스를 읽을 수 없습니다", name)))?;

        counter.get_i64("seq").in_collection(COUNTERS_COLLECTION)
    }

    /// 식별자 필드의 유니크 인덱스를 생성합니다.
    ///
    /// 애플리케이션 초기화 시점에 한 번 호출합니다.
    pub async fn create_indexes(&self) -> AppResult<()> {
        let mut keys = Document::new();
        keys.insert(T::ID_FIELD, 1);

        let index = IndexModel::builder()
            .keys(keys)
            .options(IndexOptions::builder()
                .unique(true)
                .name(format!("{}_unique", T::ID_FIELD))
                .build())
            .build();

        self.collection()
            .create_index(index)
            .await
            .in_collection(T::COLLECTION)?;

        Ok(())
    }
}

#[async_trait]
impl<T: Entity> EntityStore<T> for MongoStore<T> {
    async fn find_all(&self) -> AppResult<Vec<T>> {
        let cursor = self.collection()
            .find(doc! {})
            .await
            .in_collection(T::COLLECTION)?;

        cursor.try_collect::<Vec<T>>().await.in_collection(T::COLLECTION)
    }

    async fn find_by_id(&self, key: &T::Key) -> AppResult<Option<T>> {
        self.collection()
            .find_one(Self::key_filter(key)?)
            .await
            .in_collection(T::COLLECTION)
    }

    async fn find_many(&self, keys: &[T::Key]) -> AppResult<Vec<T>> {
        if keys.is_empty() {
            return Ok(Vec::new());
        }

        let values = to_bson(keys).with_context(|| format!("{} 식별자 변환 실패", T::NAME))?;
        let mut filter = Document::new();
        filter.insert(T::ID_FIELD, doc! { "$in": values });

        let cursor = self.collection()
            .find(filter)
            .await
            .in_collection(T::COLLECTION)?;

        cursor.try_collect::<Vec<T>>().await.in_collection(T::COLLECTION)
    }

    async fn save(&self, mut entity: T) -> AppResult<T> {
        match entity.key().cloned() {
            Some(key) => {
                let options = ReplaceOptions::builder().upsert(true).build();

                self.collection()
                    .replace_one(Self::key_filter(&key)?, &entity)
                    .with_options(options)
                    .await
                    .in_collection(T::COLLECTION)?;

                debug!("{} 갱신: {}={}", T::NAME, T::ID_FIELD, key);
            }
            None => {
                let key = T::key_from_sequence(self.next_sequence().await?)
                    .ok_or_else(|| AppError::ValidationError(format!("{} is required", T::ID_FIELD)))?;
                entity.set_key(key.clone());

                self.collection()
                    .insert_one(&entity)
                    .await
                    .in_collection(T::COLLECTION)?;

                debug!("{} 생성: {}={}", T::NAME, T::ID_FIELD, key);
            }
        }

        Ok(entity)
    }

    async fn delete(&self, entity: &T) -> AppResult<()> {
        let key = entity
            .key()
            .ok_or_else(|| AppError::ValidationError(format!("{} is required", T::ID_FIELD)))?;

        let result = self.collection()
            .delete_one(Self::key_filter(key)?)
            .await
            .in_collection(T::COLLECTION)?;

        if result.deleted_count == 0 {
            return Err(AppError::not_found::<T>(key));
        }

        Ok(())
    }
}

#[async_trait]
impl MovieStore for MongoStore<Movie> {
    async fn find_by_owner(&self, username: &str) -> AppResult<Vec<Movie>> {
        let mut filter = Document::new();
        filter.insert(OWNER_FIELD, username);

        let cursor = self.collection()
            .find(filter)
            .await
            .in_collection(Movie::COLLECTION)?;

        cursor.try_collect::<Vec<Movie>>().await.in_collection(Movie::COLLECTION)
    }

    async fn clear_owner(&self, username: &str) -> AppResult<u64> {
        let mut filter = Document::new();
        filter.insert(OWNER_FIELD, username);
        let mut unset = Document::new();
        unset.insert(OWNER_FIELD, "");

        let result = self.collection()
            .update_many(filter, doc! { "$unset": unset })
            .await
            .in_collection(Movie::COLLECTION)?;

        Ok(result.modified_count)
    }
}

/// MongoDB 링크 테이블 저장소
///
/// 링크 문서는 `{ mid, <member_field> }` 형태이며, 삽입은 `$setOnInsert` upsert로
/// 수행되어 이미 존재하는 쌍은 다시 쓰지 않습니다.
pub struct MongoLinkStore {
    db: Arc<Database>,
}

impl MongoLinkStore {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    fn collection(&self, relation: Relation) -> Collection<Document> {
        self.db.documents(relation.table())
    }

    fn link_document(relation: Relation, link: Link) -> Document {
        let mut document = doc! { "mid": link.mid };
        document.insert(relation.member_field(), link.member);
        document
    }

    async fn select(&self, relation: Relation, filter: Document, field: &str) -> AppResult<Vec<i64>> {
        let documents: Vec<Document> = self.collection(relation)
            .find(filter)
            .await
            .in_collection(relation.table())?
            .try_collect()
            .await
            .in_collection(relation.table())?;

        documents
            .iter()
            .map(|document| {
                document
                    .get_i64(field)
                    .in_collection(relation.table())
            })
            .collect()
    }

    /// 관계별 `(mid, member)` 복합 유니크 인덱스를 생성합니다.
    pub async fn create_indexes(&self) -> AppResult<()> {
        for relation in Relation::ALL {
            let mut keys = doc! { "mid": 1 };
            keys.insert(relation.member_field(), 1);

            let index = IndexModel::builder()
                .keys(keys)
                .options(IndexOptions::builder()
                    .unique(true)
                    .name(format!("{}_pair_unique", relation.table()))
                    .build())
                .build();

            self.collection(relation)
                .create_index(index)
                .await
                .in_collection(relation.table())?;

            info!("링크 인덱스 생성: {}", relation.table());
        }

        Ok(())
    }
}

#[async_trait]
impl LinkStore for MongoLinkStore {
    async fn insert(&self, relation: Relation, link: Link) -> AppResult<bool> {
        let document = Self::link_document(relation, link);
        let options = UpdateOptions::builder().upsert(true).build();

        let result = self.collection(relation)
            .update_one(document.clone(), doc! { "$setOnInsert": document })
            .with_options(options)
            .await
            .in_collection(relation.table())?;

        Ok(result.upserted_id.is_some())
    }

    async fn members_of(&self, relation: Relation, mid: i64) -> AppResult<Vec<i64>> {
        self.select(relation, doc! { "mid": mid }, relation.member_field()).await
    }

    async fn movies_of(&self, relation: Relation, member: i64) -> AppResult<Vec<i64>> {
        let mut filter = Document::new();
        filter.insert(relation.member_field(), member);

        self.select(relation, filter, "mid").await
    }

    async fn remove_movie(&self, relation: Relation, mid: i64) -> AppResult<u64> {
        let result = self.collection(relation)
            .delete_many(doc! { "mid": mid })
            .await
            .in_collection(relation.table())?;

        Ok(result.deleted_count)
    }

    async fn remove_member(&self, relation: Relation, member: i64) -> AppResult<u64> {
        let mut filter = Document::new();
        filter.insert(relation.member_field(), member);

        let result = self.collection(relation)
            .delete_many(filter)
            .await
            .in_collection(relation.table())?;

        Ok(result.deleted_count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{DatabaseConfig, StoreBackend};
    use crate::domain::entities::{Director, User};

    fn config(database_name: String) -> DatabaseConfig {
        DatabaseConfig {
            uri: std::env::var("MONGODB_URI").unwrap_or_else(|_| "mongodb://localhost:27017".to_string()),
            database_name,
            backend: StoreBackend::Mongo,
        }
    }

    #[test]
    fn test_link_document_uses_member_field() {
        let document = MongoLinkStore::link_document(Relation::MovieCastMember, Link::new(1, 9));

        assert_eq!(document, doc! { "mid": 1_i64, "cmid": 9_i64 });
    }

    #[test]
    fn test_key_filter_matches_id_field() {
        assert_eq!(MongoStore::<Movie>::key_filter(&7).unwrap(), doc! { "mid": 7_i64 });
        assert_eq!(
            MongoStore::<User>::key_filter(&"alice".to_string()).unwrap(),
            doc! { "username": "alice" }
        );
    }

    #[actix_web::test]
    async fn test_find_many_without_keys_skips_query() {
        let db = Database::connect(&config("movie_catalog_unit".to_string())).await.unwrap();
        let store = MongoStore::<Director>::new(Arc::new(db));

        assert!(store.find_many(&[]).await.unwrap().is_empty());
    }

    #[actix_web::test]
    #[ignore] // 실제 MongoDB 필요 (MONGODB_URI): cargo test -- --ignored
    async fn test_stores_against_live_server() {
        let name = format!("movie_catalog_it_{}", chrono::Utc::now().timestamp_millis());
        let db = Arc::new(Database::new(&config(name)).await.unwrap());
        let directors = MongoStore::<Director>::new(db.clone());
        let movies = MongoStore::<Movie>::new(db.clone());
        let links = MongoLinkStore::new(db.clone());
        directors.create_indexes().await.unwrap();
        movies.create_indexes().await.unwrap();
        links.create_indexes().await.unwrap();

        // $inc 시퀀스는 삭제 후에도 키를 재사용하지 않음
        let first = directors.save(Director::new("Chris", "Nolan")).await.unwrap();
        let second = directors.save(Director::new("Denis", "Villeneuve")).await.unwrap();
        assert_eq!((first.did, second.did), (Some(1), Some(2)));
        directors.delete(&second).await.unwrap();
        let third = directors.save(Director::new("Greta", "Gerwig")).await.unwrap();
        assert_eq!(third.did, Some(3));
        assert!(directors.delete(&second).await.unwrap_err().is_not_found());

        // $setOnInsert upsert는 같은 쌍을 한 번만 기록
        assert!(links.insert(Relation::MovieDirector, Link::new(1, 1)).await.unwrap());
        assert!(!links.insert(Relation::MovieDirector, Link::new(1, 1)).await.unwrap());
        assert_eq!(links.members_of(Relation::MovieDirector, 1).await.unwrap(), vec![1]);
        assert_eq!(links.movies_of(Relation::MovieDirector, 1).await.unwrap(), vec![1]);
        assert_eq!(links.remove_member(Relation::MovieDirector, 1).await.unwrap(), 1);

        // $unset으로 소유자만 해제
        let mut owned = Movie::new("Inception");
        owned.owner = Some("alice".to_string());
        let owned = movies.save(owned).await.unwrap();
        assert_eq!(movies.find_by_owner("alice").await.unwrap().len(), 1);
        assert_eq!(movies.clear_owner("alice").await.unwrap(), 1);
        let reloaded = movies.find_by_id(&owned.mid.unwrap()).await.unwrap().unwrap();
        assert_eq!(reloaded.owner, None);

        db.get_database().drop().await.unwrap();
    }
}
