//! 애플리케이션 전역에서 사용하는 에러 시스템
//!
//! 카탈로그 서비스의 통합 에러 처리 시스템입니다.
//! `thiserror`와 `actix_web::ResponseError`를 사용하여 서비스 계층에서 발생한
//! 에러를 그대로 HTTP 응답으로 변환합니다.
//!
//! ## NotFound 메시지 형식
//!
//! 조회, 수정, 삭제, 부모 엔티티 확인 단계에서 식별자에 해당하는 행이 없으면
//! 다음 형식의 메시지를 가진 [`AppError::NotFound`]가 발생합니다.
//!
//! ```text
//! <EntityName> With the <idFieldName>: <key> does not exist!
//! ```
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::core::errors::{AppError, AppResult};
//! use crate::domain::entities::Studio;
//!
//! fn require_studio(found: Option<Studio>, sid: i64) -> AppResult<Studio> {
//!     found.ok_or_else(|| AppError::not_found::<Studio>(&sid))
//! }
//! ```

use std::fmt::Display;
use thiserror::Error;
use crate::domain::entities::Entity;

/// 애플리케이션 전역 에러 타입
///
/// 코어 로직이 직접 발생시키는 에러는 `NotFound` 하나이며,
/// 나머지는 경계 계층(검증)이나 저장소(데이터베이스)에서 발생합니다.
#[derive(Error, Debug)]
pub enum AppError {
    /// 데이터베이스 관련 에러 (500 Internal Server Error)
    #[error("Database error: {0}")]
    DatabaseError(String),

    /// 입력값 검증 에러 (400 Bad Request)
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// 리소스 찾을 수 없음 에러 (404 Not Found)
    #[error("{entity} With the {id_field}: {key} does not exist!")]
    NotFound {
        entity: &'static str,
        id_field: &'static str,
        key: String,
    },

    /// 내부 서버 에러 (500 Internal Server Error)
    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl AppError {
    /// 엔티티 타입의 이름과 식별자 필드명으로 `NotFound` 에러를 만듭니다.
    pub fn not_found<T: Entity>(key: &impl Display) -> Self {
        AppError::NotFound {
            entity: T::NAME,
            id_field: T::ID_FIELD,
            key: key.to_string(),
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, AppError::NotFound { .. })
    }
}

impl actix_web::ResponseError for AppError {
    /// HTTP 에러 응답을 생성합니다.
    ///
    /// 각 에러 타입을 적절한 HTTP 상태 코드와 JSON 응답으로 변환합니다.
    fn error_response(&self) -> actix_web::HttpResponse {
        use actix_web::http::StatusCode;

        let status = match self {
            AppError::ValidationError(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound { .. } => StatusCode::NOT_FOUND,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };

        actix_web::HttpResponse::build(status)
            .json(serde_json::json!({
                "error": self.to_string()
            }))
    }
}

/// 편의성을 위한 Result 타입 별칭
pub type AppResult<T> = Result<T, AppError>;

/// 외부 라이브러리 에러를 AppError로 변환하는 확장 trait
///
/// 저장소 구현은 드라이버 에러에 컬렉션 이름을 붙여 `DatabaseError`로 올립니다.
///
/// ```rust,ignore
/// let cursor = collection.find(doc! {}).await.in_collection("movie")?;
/// // Database error: movie: <driver message>
/// ```
pub trait ErrorContext<T> {
    /// 컬렉션 이름을 붙여 `DatabaseError`로 변환합니다.
    fn in_collection(self, collection: &str) -> AppResult<T>;

    /// 지연 평가된 메시지를 붙여 `InternalError`로 변환합니다.
    fn with_context<F>(self, f: F) -> AppResult<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ErrorContext<T> for Result<T, E>
where
    E: Display,
{
    fn in_collection(self, collection: &str) -> AppResult<T> {
        self.map_err(|e| AppError::DatabaseError(format!("{}: {}", collection, e)))
    }

    fn with_context<F>(self, f: F) -> AppResult<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| AppError::InternalError(format!("{}: {}", f(), e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::ResponseError;
    use crate::domain::entities::{Studio, User};

    #[test]
    fn test_not_found_message_format() {
        let error = AppError::not_found::<Studio>(&99);

        assert_eq!(error.to_string(), "Studio With the sid: 99 does not exist!");
        assert!(error.is_not_found());
    }

    #[test]
    fn test_not_found_message_with_natural_key() {
        let error = AppError::not_found::<User>(&"alice");

        assert_eq!(error.to_string(), "User With the username: alice does not exist!");
    }

    #[test]
    fn test_validation_error_response() {
        let error = AppError::ValidationError("title is required".to_string());
        let response = error.error_response();

        assert_eq!(response.status(), actix_web::http::StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_not_found_error_response() {
        let error = AppError::not_found::<Studio>(&1);
        let response = error.error_response();

        assert_eq!(response.status(), actix_web::http::StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_driver_error_gets_collection_name() {
        let result: Result<(), &str> = Err("connection reset");

        match result.in_collection("movie_director") {
            Err(AppError::DatabaseError(msg)) => {
                assert_eq!(msg, "movie_director: connection reset");
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_with_context_is_internal() {
        let result: Result<(), &str> = Err("bad key");
        let error = result.with_context(|| "Movie 식별자 변환 실패".to_string()).unwrap_err();

        assert_eq!(error.error_response().status(), actix_web::http::StatusCode::INTERNAL_SERVER_ERROR);
    }
}
