//! # Domain Module
//!
//! 카탈로그의 엔티티([`entities`])와 API 경계의 DTO([`dto`])를 정의합니다.

pub mod dto;
pub mod entities;

pub use entities::*;
