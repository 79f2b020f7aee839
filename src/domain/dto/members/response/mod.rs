//! 감독, 출연진, 스튜디오 응답 DTO 모듈

pub mod member_response;

pub use member_response::{CastMemberResponse, DirectorResponse, StudioResponse};
