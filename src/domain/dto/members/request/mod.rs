//! 감독, 출연진, 스튜디오 요청 DTO 모듈

pub mod member_request;

pub use member_request::{PersonRequest, StudioRequest};
