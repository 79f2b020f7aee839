//! # 사용자 관련 응답 DTO 모듈
//!
//! ## JSON 응답 예제
//!
//! ```json
//! {
//!   "username": "alice",
//!   "firstName": "Alice",
//!   "lastName": "Kim",
//!   "password": "p2",
//!   "email": "b@x.com",
//!   "creationDate": "2024-01-01",
//!   "lastAccessDate": "2024-01-01"
//! }
//! ```

pub mod user_response;

pub use user_response::UserResponse;
