//! # HTTP Request Handlers Module
//!
//! HTTP 요청을 서비스 호출로 변환하고, 결과를 DTO로 직렬화하는 핸들러들입니다.
//! 서비스는 [`ServiceContainer`](crate::core::container::ServiceContainer)가 등록한
//! `web::Data<T>`로 전달받습니다.
//!
//! ## 아키텍처 위치
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//!   Client (Browser, API Client)
//! └─────────────────────┬───────────────────────┘
//!                       │ HTTP Request/Response
//! ┌─────────────────────▼───────────────────────┐
//!   Handlers (이 모듈) - DTO 검증 및 변환           ← Web Layer
//! ├─────────────────────────────────────────────┤
//!   Services - CRUD, 연관 관계                     ← Service Layer
//! ├─────────────────────────────────────────────┤
//!   Repositories - 메모리 / MongoDB               ← Repository Layer
//! └─────────────────────────────────────────────┘
//! ```
//!
//! ## 에러 응답
//!
//! 모든 핸들러는 `Result<HttpResponse, AppError>`를 반환하며,
//! 본문/쿼리/경로 추출 실패도 아래 설정을 통해 같은 `{"error": ...}` 형식의 400 응답이 됩니다.

use actix_web::web;
use log::warn;
use validator::Validate;
use crate::core::errors::AppError;

pub mod members;
pub mod movies;
pub mod users;

/// 요청 본문을 꺼내 `validator` 규칙을 검사합니다.
pub(crate) fn validated<T: Validate>(payload: web::Json<T>) -> Result<T, AppError> {
    let payload = payload.into_inner();

    payload
        .validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    Ok(payload)
}

/// JSON 본문 파싱 실패를 `ValidationError`로 변환합니다.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, req| {
        warn!("잘못된 요청 본문 {}: {}", req.path(), err);
        AppError::ValidationError(err.to_string()).into()
    })
}

pub fn query_config() -> web::QueryConfig {
    web::QueryConfig::default().error_handler(|err, req| {
        warn!("잘못된 쿼리 {}: {}", req.path(), err);
        AppError::ValidationError(err.to_string()).into()
    })
}

pub fn path_config() -> web::PathConfig {
    web::PathConfig::default().error_handler(|err, req| {
        warn!("잘못된 경로 파라미터 {}: {}", req.path(), err);
        AppError::ValidationError(err.to_string()).into()
    })
}
