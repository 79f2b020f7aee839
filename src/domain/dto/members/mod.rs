//! # Movie Member Data Transfer Objects Module
//!
//! 감독과 출연진은 같은 요청 형태(`PersonRequest`)를 공유하고,
//! 응답은 각자의 식별자 필드(`did`, `cmid`, `sid`)를 가집니다.

pub mod request;
pub mod response;

pub use request::*;
pub use response::*;
