//! # Configuration Module
//!
//! 카탈로그 서비스의 설정 관리를 담당하는 모듈입니다.
//! 환경 변수 기반의 설정값들을 타입이 있는 접근자로 제공합니다.
//!
//! ## 환경 변수 설정 가이드
//!
//! ```bash
//! # 서버 설정
//! export HOST="127.0.0.1"
//! export PORT="8080"
//! export SERVER_WORKERS="4"
//!
//! # 저장소 설정
//! export ENVIRONMENT="development"      # development | test | staging | production
//! export STORE_BACKEND="mongo"          # mongo | memory (미설정 시 test 환경은 memory)
//! export MONGODB_URI="mongodb://localhost:27017"
//! export DATABASE_NAME="movie_catalog_dev"
//!
//! # Rate Limiting
//! export RATE_LIMIT_PER_SECOND="100"
//! export RATE_LIMIT_BURST_SIZE="200"
//! ```
//!
//! `PROFILE` 값(`dev`, `prod`)에 따라 `.env.dev` 또는 `.env.prod` 파일이 먼저 로드됩니다.

pub mod data_config;

pub use data_config::*;
