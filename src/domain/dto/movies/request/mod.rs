//! # 영화 관련 요청 DTO 모듈
//!
//! 요청 본문은 camelCase 필드명을 사용하며, `validator`로 필수 필드를 검증합니다.
//! 검증 실패는 핸들러에서 `AppError::ValidationError`(400)로 변환됩니다.

pub mod movie_request;

pub use movie_request::{MovieQuery, MovieRequest};
