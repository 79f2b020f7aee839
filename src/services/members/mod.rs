//! 영화 멤버(감독, 출연진, 스튜디오) 서비스 모듈

pub mod member_service;

pub use member_service::{CastMemberService, DirectorService, MemberService, StudioService};
