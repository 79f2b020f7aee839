//! 영화 카탈로그 서비스 메인 애플리케이션
//!
//! Actix-web 기반의 HTTP 서버를 구동하고 저장소와 서비스를 초기화합니다.
//! `STORE_BACKEND`에 따라 MongoDB 또는 메모리 저장소를 사용합니다.

use std::sync::Arc;
use actix_cors::Cors;
use actix_web::http::header;
use actix_web::{middleware, App, HttpServer};
use actix_governor::{Governor, GovernorConfigBuilder};
use dotenv::dotenv;
use env_logger::Env;
use log::{error, info};
use movie_catalog_backend::config::{
    DatabaseConfig, Environment, RateLimitConfig, ServerConfig, StoreBackend,
};
use movie_catalog_backend::core::container::ServiceContainer;
use movie_catalog_backend::db::Database;
use movie_catalog_backend::routes::{configure_all_routes, resource_paths};
use movie_catalog_backend::utils::display_terminal::{
    print_banner, print_resources, print_startup_summary, print_storage,
};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // 환경 설정 및 로깅 초기화
    load_env_file();
    init_logging();

    print_banner("MOVIE CATALOG BACKEND");
    info!("🚀 영화 카탈로그 서비스 시작중... ({:?})", Environment::current());

    let database_config = DatabaseConfig::from_env();

    let container = match initialize_container(&database_config).await {
        Ok(container) => container,
        Err(e) => {
            error!("서비스 초기화 실패: {}", e);
            return Err(std::io::Error::other(e.to_string()));
        }
    };
    print_storage(database_config.backend.as_str(), storage_target(&database_config));
    print_resources(&resource_paths());

    start_http_server(container, database_config.backend).await
}

/// 저장소 백엔드를 선택해 서비스 컨테이너를 구성합니다
///
/// # Errors
///
/// * MongoDB 연결 또는 인덱스 생성 실패
async fn initialize_container(
    config: &DatabaseConfig,
) -> Result<ServiceContainer, Box<dyn std::error::Error>> {
    match config.backend {
        StoreBackend::Memory => Ok(ServiceContainer::in_memory()),
        StoreBackend::Mongo => {
            info!("📡 데이터베이스 연결 중...");
            let database = Arc::new(Database::new(config).await?);

            Ok(ServiceContainer::with_mongo(database).await?)
        }
    }
}

fn storage_target(config: &DatabaseConfig) -> &str {
    match config.backend {
        StoreBackend::Memory => "process memory",
        StoreBackend::Mongo => &config.database_name,
    }
}

/// HTTP 서버를 구성하고 실행합니다
///
/// Rate Limiting, CORS, 로깅, 경로 정규화 미들웨어를 포함합니다.
///
/// # Errors
///
/// * `std::io::Error` - Rate Limiting 설정 오류, 포트 바인딩 실패 또는 서버 실행 오류
async fn start_http_server(container: ServiceContainer, backend: StoreBackend) -> std::io::Result<()> {
    let bind_address = ServerConfig::bind_address();

    info!("🌐 서버가 http://{} 에서 실행중입니다", bind_address);
    info!("📍 Health check: http://{}/health", bind_address);

    // Rate Limiting 설정
    let rate_limit_config = RateLimitConfig::from_env();
    let governor_conf = GovernorConfigBuilder::default()
        .requests_per_second(rate_limit_config.per_second)
        .burst_size(rate_limit_config.burst_size)
        .use_headers()
        .finish()
        .ok_or_else(|| std::io::Error::other("Rate Limiting 설정이 올바르지 않습니다"))?;

    info!(
        "🛡️ Rate Limiting 활성화: 초당 {}요청, 버스트 {}개",
        rate_limit_config.per_second,
        rate_limit_config.burst_size
    );

    print_startup_summary(backend.as_str(), &bind_address);

    HttpServer::new(move || {
        let container = container.clone();

        App::new()
            // Rate Limiting 미들웨어 (가장 먼저 적용)
            .wrap(Governor::new(&governor_conf))
            .wrap(configure_cors())
            .wrap(middleware::Logger::default())
            .wrap(middleware::NormalizePath::trim())
            .configure(|cfg| container.register(cfg))
            .configure(configure_all_routes)
    })
        .bind(&bind_address)?
        .workers(ServerConfig::workers())
        .run()
        .await
}

/// 환경별 설정 파일을 로드합니다
///
/// * `PROFILE=dev` - .env.dev 파일 로드 (기본값)
/// * `PROFILE=prod` - .env.prod 파일 로드
/// * 기타 - 기본 .env 파일 로드
fn load_env_file() {
    let profile = std::env::var("PROFILE").unwrap_or_else(|_| "dev".to_string());

    info!("Current profile: {}", profile);

    match profile.as_str() {
        "prod" => match dotenv::from_filename(".env.prod") {
            Ok(_) => info!(".env.prod 파일 로드 됨"),
            Err(e) => error!(".env.prod 파일 로드 실패: {}", e),
        },
        "dev" => match dotenv::from_filename(".env.dev") {
            Ok(_) => info!(".env.dev 파일 로드 됨"),
            Err(e) => error!(".env.dev 파일 로드 실패: {}", e),
        },
        _ => {
            dotenv().ok();
            info!("기본 .env 파일 로드");
        }
    }
}

/// 로깅 시스템을 초기화합니다
///
/// * `RUST_LOG` - 로깅 레벨 설정 (기본값: "info,actix_web=debug")
fn init_logging() {
    env_logger::init_from_env(Env::default().default_filter_or("info,actix_web=debug"));
}

/// CORS 설정을 구성합니다
///
/// 로컬 프론트엔드 개발 서버(3000)와 자체 서버(8080)의 Origin을 허용합니다.
fn configure_cors() -> Cors {
    Cors::default()
        .allowed_origin("http://localhost:3000")
        .allowed_origin("http://127.0.0.1:3000")
        .allowed_origin("http://localhost:8080")
        .allowed_origin("http://127.0.0.1:8080")
        .allowed_methods(vec!["GET", "POST", "PUT", "DELETE", "OPTIONS"])
        .allowed_headers(vec![
            header::ACCEPT,
            header::CONTENT_TYPE,
        ])
        .max_age(3600)
}
