//! Database Connection Management Module
//!
//! MongoDB 데이터베이스 연결 관리를 담당하는 모듈입니다.
//! 연결 정보는 [`DatabaseConfig`]에서 가져옵니다.
//!
//! # 기본 사용법
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use crate::config::DatabaseConfig;
//! use crate::core::container::ServiceContainer;
//! use crate::db::Database;
//!
//! let database = Arc::new(Database::new(&DatabaseConfig::from_env()).await?);
//! let container = ServiceContainer::with_mongo(database).await?;
//! ```

use mongodb::{bson::Document, options::ClientOptions, Client, Collection};
use log::info;
use crate::config::DatabaseConfig;
use crate::domain::entities::Entity;

/// MongoDB 데이터베이스 연결 래퍼
///
/// 저장소 계층은 이 구조체를 통해 컬렉션에 접근합니다.
#[derive(Clone)]
pub struct Database {
    /// MongoDB 클라이언트 인스턴스
    client: Client,
    /// 사용할 데이터베이스 이름
    database_name: String,
}

impl Database {
    /// 새 MongoDB 데이터베이스 연결을 생성합니다.
    ///
    /// 클라이언트를 초기화하고 `ping` 명령으로 연결 상태를 검증합니다.
    pub async fn new(config: &DatabaseConfig) -> Result<Self, Box<dyn std::error::Error>> {
        let database = Self::connect(config).await?;

        // 연결 테스트
        database
            .get_database()
            .run_command(mongodb::bson::doc! { "ping": 1 })
            .await?;

        info!("✅ MongoDB 연결 성공: {}", config.database_name);

        Ok(database)
    }

    /// 클라이언트만 구성하고 서버 연결은 첫 명령 시점으로 미룹니다.
    pub async fn connect(config: &DatabaseConfig) -> Result<Self, mongodb::error::Error> {
        let mut client_options = ClientOptions::parse(&config.uri).await?;

        // 애플리케이션 이름 설정 (모니터링 및 로깅에 유용)
        client_options.app_name = Some("movie_catalog".to_string());

        Ok(Self {
            client: Client::with_options(client_options)?,
            database_name: config.database_name.clone(),
        })
    }

    /// MongoDB 데이터베이스 인스턴스를 반환합니다.
    pub fn get_database(&self) -> mongodb::Database {
        self.client.database(&self.database_name)
    }

    /// 엔티티 타입의 컬렉션 (`T::COLLECTION`)
    pub fn entity_collection<T: Entity>(&self) -> Collection<T> {
        self.get_database().collection::<T>(T::COLLECTION)
    }

    /// 타입 없는 문서 컬렉션 (링크 테이블, `counters`)
    pub fn documents(&self, name: &str) -> Collection<Document> {
        self.get_database().collection::<Document>(name)
    }

    pub fn database_name(&self) -> &str {
        &self.database_name
    }
}
