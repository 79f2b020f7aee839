//! 사용자 관리 서비스 모듈
//!
//! 사용자 계정 등록, 조회, 수정, 삭제를 담당합니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::services::users::UserService;
//!
//! let user = user_service.get_by_id("alice").await?;
//! ```

pub mod user_service;

pub use user_service::UserService;
