//! 영화 카탈로그 서비스 백엔드
//!
//! 영화와 감독, 출연진, 스튜디오, 사용자를 관리하는 REST 서비스입니다.
//! 영화와 구성원 사이의 다대다 연결, 사용자의 영화 소유 관계를 함께 다룹니다.
//!
//! # Features
//!
//! - **영화 관리**: 영화 CRUD, 사용자 소유 영화 생성과 조회
//! - **구성원 관리**: 감독/출연진/스튜디오 CRUD, 영화 기준 생성과 양방향 조회
//! - **사용자 관리**: 사용자 CRUD, 비밀번호와 이메일 수정
//! - **저장소 선택**: MongoDB 또는 메모리 저장소 (`STORE_BACKEND`)
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │   HTTP Routes   │ ← REST API 엔드포인트
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Handlers     │ ← 요청 검증, DTO 변환
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Services     │ ← CRUD, 연결 관리 (AssociationManager)
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │  Repositories   │ ← EntityStore / LinkStore
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ MongoDB │ Memory│ ← 저장소
//! └─────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use movie_catalog_backend::core::container::ServiceContainer;
//! use movie_catalog_backend::domain::entities::{Director, Movie};
//!
//! let container = ServiceContainer::in_memory();
//!
//! let movie = container.movies.create(Movie::new("Inception")).await?;
//! let nolan = container.directors.create_for_movie(1, Director::new("Chris", "Nolan")).await?;
//! ```

pub mod core;
pub mod config;
pub mod db;
pub mod domain;
pub mod repositories;
pub mod services;
pub mod utils;
pub mod routes;
pub mod handlers;
