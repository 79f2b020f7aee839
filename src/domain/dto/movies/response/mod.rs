//! 영화 관련 응답 DTO 모듈

pub mod movie_response;

pub use movie_response::MovieResponse;
