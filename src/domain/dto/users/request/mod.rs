//! # 사용자 관련 요청 DTO 모듈
//!
//! 클라이언트로부터 받은 JSON 데이터를 구조화된 Rust 타입으로 변환하고 검증합니다.
//!
//! ## 검증 계층
//!
//! 1. **구문 검증**: JSON 구조와 타입 일치성 (`serde`, 실패 시 400)
//! 2. **형식 검증**: 공백 여부, 이메일 형식 (`validator`, 실패 시 400)
//! 3. **존재 검증**: 수정/삭제 대상 username (서비스 계층, 실패 시 404)

pub mod create_user_request;

pub use create_user_request::{CreateUserRequest, UpdateUserRequest, UsernameQuery};
