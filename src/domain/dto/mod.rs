//! # Data Transfer Objects (DTO) Module
//!
//! API 경계에서 데이터를 전송하기 위한 객체들을 정의하는 모듈입니다.
//! 엔티티는 저장소 표현(snake_case, 소유자 외래 키 포함)을 그대로 유지하고,
//! 클라이언트와 주고받는 JSON은 이 모듈의 DTO가 담당합니다.
//!
//! ## 설계 원칙
//!
//! - **camelCase 필드명**: `firstName`, `releaseDate`, `lastAccessDate`
//! - **식별자 보호**: 요청 DTO에는 대리 키(`mid`, `did`, `cmid`, `sid`) 필드가 없음
//! - **외래 키 은닉**: 영화 소유자와 연관 컬렉션은 응답에 포함하지 않음
//! - **입력 검증**: `validator` derive, 실패 시 400 Bad Request
//!
//! ## 모듈 구조
//!
//! ```text
//! dto/
//! ├── common/      # DeletedResponse
//! ├── members/     # 감독, 출연진, 스튜디오
//! ├── movies/      # 영화
//! └── users/       # 사용자
//! ```
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use actix_web::{web, HttpResponse};
//! use validator::Validate;
//! use crate::domain::dto::movies::{MovieRequest, MovieResponse};
//!
//! #[post("")]
//! pub async fn create_movie(
//!     movies: web::Data<MovieService>,
//!     payload: web::Json<MovieRequest>,
//! ) -> Result<HttpResponse, AppError> {
//!     payload.validate().map_err(|e| AppError::ValidationError(e.to_string()))?;
//!
//!     let movie = movies.create(payload.into_inner().into_entity()).await?;
//!     Ok(HttpResponse::Ok().json(MovieResponse::from(movie)))
//! }
//! ```

pub mod common;
pub mod members;
pub mod movies;
pub mod users;
