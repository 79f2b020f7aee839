//! # Movie HTTP Handlers
//!
//! | 메서드 | 경로 | 설명 | 상태 코드 |
//! |--------|------|------|-----------|
//! | `GET` | `/api/v1/movie` | 영화 목록 | 200 OK |
//! | `POST` | `/api/v1/movie` | 소유자 없는 영화 생성 | 200 OK |
//! | `GET` | `/api/v1/movie/{mid}` | 영화 조회 | 200 / 404 |
//! | `PUT` | `/api/v1/movie/{mid}` | 영화 수정 | 200 / 404 |
//! | `DELETE` | `/api/v1/movie/{mid}` | 영화 삭제 | 200 / 404 |
//!
//! 영화 기준 멤버 조회/생성(`/api/v1/movie/director?mid=` 등)은 [`super::members`]에 있습니다.

use actix_web::{delete, get, post, put, web, HttpResponse};
use crate::core::errors::AppError;
use crate::domain::dto::common::DeletedResponse;
use crate::domain::dto::movies::{MovieRequest, MovieResponse};
use crate::domain::entities::Movie;
use crate::services::MovieService;
use super::validated;

pub(crate) fn movie_list(movies: Vec<Movie>) -> HttpResponse {
    HttpResponse::Ok().json(movies.into_iter().map(MovieResponse::from).collect::<Vec<_>>())
}

#[get("")]
pub async fn list_movies(
    movies: web::Data<MovieService>,
) -> Result<HttpResponse, AppError> {
    Ok(movie_list(movies.get_all().await?))
}

/// 영화 생성 핸들러
///
/// # 요청 본문
///
/// ```json
/// { "title": "Inception", "genre": "Sci-Fi", "releaseDate": "2010-07-16" }
/// ```
#[post("")]
pub async fn create_movie(
    movies: web::Data<MovieService>,
    payload: web::Json<MovieRequest>,
) -> Result<HttpResponse, AppError> {
    let request = validated(payload)?;

    let created = movies.create(request.into_entity()).await?;

    Ok(HttpResponse::Ok().json(MovieResponse::from(created)))
}

#[get("/{mid}")]
pub async fn get_movie(
    movies: web::Data<MovieService>,
    mid: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let movie = movies.get_by_id(mid.into_inner()).await?;

    Ok(HttpResponse::Ok().json(MovieResponse::from(movie)))
}

#[put("/{mid}")]
pub async fn update_movie(
    movies: web::Data<MovieService>,
    mid: web::Path<i64>,
    payload: web::Json<MovieRequest>,
) -> Result<HttpResponse, AppError> {
    let request = validated(payload)?;

    let updated = movies.update(mid.into_inner(), request.into_details()).await?;

    Ok(HttpResponse::Ok().json(MovieResponse::from(updated)))
}

/// 영화 삭제 핸들러
///
/// 연결된 감독/출연진/스튜디오와의 링크만 제거되고 해당 엔티티는 남습니다.
#[delete("/{mid}")]
pub async fn delete_movie(
    movies: web::Data<MovieService>,
    mid: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    movies.delete(mid.into_inner()).await?;

    Ok(HttpResponse::Ok().json(DeletedResponse::deleted()))
}
