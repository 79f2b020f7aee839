//! 데이터 및 서버 설정 관리 모듈
//!
//! 실행 환경, 서버 바인딩, 저장소 백엔드, Rate Limiting 설정을 관리합니다.
//! 모든 값은 환경 변수에서 읽으며, 값이 없거나 파싱에 실패하면 기본값을 사용합니다.

use std::env;
use log::error;

/// 실행 환경
#[derive(Debug, Clone, PartialEq)]
pub enum Environment {
    Development,
    Test,
    Staging,
    Production,
}

impl Environment {
    /// `ENVIRONMENT` 환경 변수에서 현재 환경을 결정합니다.
    ///
    /// 값이 없으면 운영 환경으로 간주합니다.
    pub fn current() -> Self {
        Self::from_str(&env::var("ENVIRONMENT").unwrap_or_else(|_| "production".to_string()))
    }

    pub fn from_str(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "development" | "dev" => Environment::Development,
            "test" | "testing" => Environment::Test,
            "staging" | "stage" => Environment::Staging,
            _ => Environment::Production,
        }
    }
}

/// HTTP 서버 바인딩 설정
pub struct ServerConfig;

impl ServerConfig {
    pub fn port() -> u16 {
        env::var("PORT")
            .unwrap_or_else(|_| "8080".to_string())
            .parse()
            .unwrap_or(8080)
    }

    pub fn host() -> String {
        env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string())
    }

    pub fn bind_address() -> String {
        format!("{}:{}", Self::host(), Self::port())
    }

    pub fn workers() -> usize {
        env::var("SERVER_WORKERS")
            .ok()
            .and_then(|w| w.parse().ok())
            .filter(|w| *w > 0)
            .unwrap_or(4)
    }
}

/// 엔티티 저장소 백엔드 종류
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StoreBackend {
    /// MongoDB 컬렉션 (기본값)
    Mongo,
    /// 프로세스 메모리 (재시작 시 데이터 소실)
    Memory,
}

impl StoreBackend {
    pub fn from_str(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "memory" | "in-memory" | "inmemory" => StoreBackend::Memory,
            _ => StoreBackend::Mongo,
        }
    }

    /// `STORE_BACKEND`가 없을 때 환경별 기본 백엔드
    ///
    /// 테스트 환경은 외부 MongoDB 없이 실행되도록 메모리 저장소를 사용합니다.
    pub fn default_for(environment: &Environment) -> Self {
        match environment {
            Environment::Test => StoreBackend::Memory,
            _ => StoreBackend::Mongo,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            StoreBackend::Mongo => "mongo",
            StoreBackend::Memory => "memory",
        }
    }
}

/// 데이터베이스 연결 설정
///
/// ## 환경 변수
/// - `MONGODB_URI`: MongoDB 연결 URI (기본값: "mongodb://localhost:27017")
/// - `DATABASE_NAME`: 데이터베이스 이름 (기본값: "movie_catalog_dev")
/// - `STORE_BACKEND`: `mongo` 또는 `memory` (기본값: [`StoreBackend::default_for`])
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub uri: String,
    pub database_name: String,
    pub backend: StoreBackend,
}

impl DatabaseConfig {
    pub fn from_env() -> Self {
        Self {
            uri: env::var("MONGODB_URI")
                .unwrap_or_else(|_| "mongodb://localhost:27017".to_string()),
            database_name: env::var("DATABASE_NAME")
                .unwrap_or_else(|_| "movie_catalog_dev".to_string()),
            backend: env::var("STORE_BACKEND")
                .map(|b| StoreBackend::from_str(&b))
                .unwrap_or_else(|_| StoreBackend::default_for(&Environment::current())),
        }
    }
}

/// Rate Limiting 설정 구조체
#[derive(Debug, Clone, PartialEq)]
pub struct RateLimitConfig {
    pub per_second: u64,
    pub burst_size: u32,
}

impl RateLimitConfig {
    /// 환경변수에서 Rate Limiting 설정을 로드합니다
    ///
    /// * `RATE_LIMIT_PER_SECOND` - 초당 허용 요청 수 (기본값: 100)
    /// * `RATE_LIMIT_BURST_SIZE` - 버스트 허용량 (기본값: 200)
    pub fn from_env() -> Self {
        let per_second = env::var("RATE_LIMIT_PER_SECOND")
            .unwrap_or_else(|_| "100".to_string())
            .parse::<u64>()
            .unwrap_or_else(|e| {
                error!("RATE_LIMIT_PER_SECOND 파싱 실패: {}. 기본값 100 사용", e);
                100
            });

        let burst_size = env::var("RATE_LIMIT_BURST_SIZE")
            .unwrap_or_else(|_| "200".to_string())
            .parse::<u32>()
            .unwrap_or_else(|e| {
                error!("RATE_LIMIT_BURST_SIZE 파싱 실패: {}. 기본값 200 사용", e);
                200
            });

        Self { per_second, burst_size }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_environment_from_string() {
        assert_eq!(
            Environment::from_str("development"),
            Environment::Development
        );
        assert_eq!(Environment::from_str("test"), Environment::Test);
        assert_eq!(Environment::from_str("stage"), Environment::Staging);
        assert_eq!(Environment::from_str("production"), Environment::Production);
        assert_eq!(Environment::from_str("unknown"), Environment::Production);
    }

    #[test]
    fn test_store_backend_from_string() {
        assert_eq!(StoreBackend::from_str("memory"), StoreBackend::Memory);
        assert_eq!(StoreBackend::from_str("In-Memory"), StoreBackend::Memory);
        assert_eq!(StoreBackend::from_str("mongo"), StoreBackend::Mongo);
        assert_eq!(StoreBackend::from_str("anything"), StoreBackend::Mongo);
    }

    #[test]
    fn test_store_backend_default_per_environment() {
        assert_eq!(StoreBackend::default_for(&Environment::Test), StoreBackend::Memory);
        assert_eq!(StoreBackend::default_for(&Environment::Development), StoreBackend::Mongo);
        assert_eq!(StoreBackend::default_for(&Environment::Production), StoreBackend::Mongo);
    }

    #[test]
    fn test_server_config_defaults() {
        if env::var("PORT").is_err() {
            assert_eq!(ServerConfig::port(), 8080);
        }

        if env::var("HOST").is_err() {
            assert_eq!(ServerConfig::host(), "127.0.0.1");
        }
    }

    #[test]
    fn test_rate_limit_defaults() {
        if env::var("RATE_LIMIT_PER_SECOND").is_err() && env::var("RATE_LIMIT_BURST_SIZE").is_err() {
            assert_eq!(
                RateLimitConfig::from_env(),
                RateLimitConfig { per_second: 100, burst_size: 200 }
            );
        }
    }
}
