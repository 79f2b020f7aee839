//! 영화 관리 서비스 모듈

pub mod movie_service;

pub use movie_service::MovieService;
