//! # Core Module
//!
//! 서비스 전반에서 공유하는 핵심 기능을 제공합니다.
//!
//! ## 모듈 구성
//!
//! ### [`container`] - 서비스 컨테이너
//! - **ServiceContainer**: 저장소 선택(메모리/MongoDB)과 서비스 연결
//! - **명시적 의존성**: 모든 서비스는 생성자로 `Arc<T>` 의존성을 전달받음
//! - **Actix 통합**: `register()`로 `web::Data<T>` 등록
//!
//! ### [`errors`] - 통합 에러 처리
//! - **AppError**: 애플리케이션 전역 에러 타입 정의
//! - **HTTP 통합**: Actix-Web ResponseError 구현 (404/400/500)
//! - **자동 변환**: thiserror 기반 에러 메시지
//!
//! ## 에러 처리
//!
//! ```rust,ignore
//! use crate::core::errors::AppError;
//!
//! // 핸들러에서 자동 HTTP 응답 변환
//! async fn get_studio(
//!     studios: web::Data<StudioService>,
//!     sid: web::Path<i64>,
//! ) -> Result<HttpResponse, AppError> {
//!     let studio = studios.get_by_id(sid.into_inner()).await?;
//!     Ok(HttpResponse::Ok().json(StudioResponse::from(studio)))
//! }
//! ```
//!
//! 존재하지 않는 스튜디오를 조회하면 다음 응답이 반환됩니다.
//!
//! ```text
//! HTTP/1.1 404 Not Found
//! {"error": "Studio With the sid: 99 does not exist!"}
//! ```

pub mod container;
pub mod errors;

pub use container::*;
pub use errors::*;
