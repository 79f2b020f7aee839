//! # User Management HTTP Handlers
//!
//! | 메서드 | 경로 | 설명 | 상태 코드 |
//! |--------|------|------|-----------|
//! | `GET` | `/api/v1/users` | 사용자 목록 | 200 OK |
//! | `POST` | `/api/v1/users` | 사용자 생성 (같은 username은 덮어씀) | 200 / 400 |
//! | `GET` | `/api/v1/users/movie?username=` | 사용자 소유 영화 목록 | 200 / 404 |
//! | `POST` | `/api/v1/users/movie?username=` | 사용자 소유 영화 생성 | 200 / 404 |
//! | `GET` | `/api/v1/users/{username}` | 사용자 조회 | 200 / 404 |
//! | `PUT` | `/api/v1/users/{username}` | 비밀번호, 이메일 수정 | 200 / 404 |
//! | `DELETE` | `/api/v1/users/{username}` | 사용자 삭제 | 200 / 404 |
//!
//! `/movie` 경로는 `/{username}`보다 먼저 등록됩니다.

use actix_web::{delete, get, post, put, web, HttpResponse};
use log::info;
use crate::core::errors::AppError;
use crate::domain::dto::common::DeletedResponse;
use crate::domain::dto::movies::{MovieRequest, MovieResponse};
use crate::domain::dto::users::{CreateUserRequest, UpdateUserRequest, UserResponse, UsernameQuery};
use crate::services::{MovieService, UserService};
use crate::utils::string_utils::validate_required_string;
use super::movies::movie_list;
use super::validated;

#[get("")]
pub async fn list_users(
    users: web::Data<UserService>,
) -> Result<HttpResponse, AppError> {
    let found = users.get_all().await?;

    Ok(HttpResponse::Ok().json(found.into_iter().map(UserResponse::from).collect::<Vec<_>>()))
}

/// 사용자 생성 핸들러
///
/// # 요청 본문
///
/// ```json
/// {
///   "username": "alice",
///   "firstName": "Alice",
///   "lastName": "Kim",
///   "password": "p1",
///   "creationDate": "2024-01-01",
///   "lastAccessDate": "2024-01-01"
/// }
/// ```
///
/// # 에러 응답
///
/// - `400 Bad Request`: 필수 필드 누락, 이메일 형식 오류
///
/// 이미 존재하는 username이면 기존 계정을 요청 값으로 덮어씁니다.
#[post("")]
pub async fn create_user(
    users: web::Data<UserService>,
    payload: web::Json<CreateUserRequest>,
) -> Result<HttpResponse, AppError> {
    let request = validated(payload)?;

    let created = users.create(request.into_entity()).await?;

    Ok(HttpResponse::Ok().json(UserResponse::from(created)))
}

#[get("/movie")]
pub async fn list_user_movies(
    movies: web::Data<MovieService>,
    query: web::Query<UsernameQuery>,
) -> Result<HttpResponse, AppError> {
    let username = validate_required_string(&query.username, "username")?;

    Ok(movie_list(movies.get_all_for_user(&username).await?))
}

/// 사용자 소유 영화 생성 핸들러
///
/// 사용자가 없으면 404를 반환하며 영화도 저장되지 않습니다.
#[post("/movie")]
pub async fn create_user_movie(
    movies: web::Data<MovieService>,
    query: web::Query<UsernameQuery>,
    payload: web::Json<MovieRequest>,
) -> Result<HttpResponse, AppError> {
    let username = validate_required_string(&query.username, "username")?;
    let request = validated(payload)?;

    let created = movies
        .create_for_user(&username, request.into_entity())
        .await?;

    Ok(HttpResponse::Ok().json(MovieResponse::from(created)))
}

#[get("/{username}")]
pub async fn get_user(
    users: web::Data<UserService>,
    username: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let user = users.get_by_id(&username).await?;

    Ok(HttpResponse::Ok().json(UserResponse::from(user)))
}

/// 사용자 수정 핸들러
///
/// 본문의 `password`, `email`만 반영하고 나머지 필드는 무시합니다.
#[put("/{username}")]
pub async fn update_user(
    users: web::Data<UserService>,
    username: web::Path<String>,
    payload: web::Json<UpdateUserRequest>,
) -> Result<HttpResponse, AppError> {
    let request = validated(payload)?;

    let updated = users.update(&username, request.into_details()).await?;

    Ok(HttpResponse::Ok().json(UserResponse::from(updated)))
}

#[delete("/{username}")]
pub async fn delete_user(
    users: web::Data<UserService>,
    username: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    users.delete(&username).await?;
    info!("사용자 삭제 요청 처리: {}", username);

    Ok(HttpResponse::Ok().json(DeletedResponse::deleted()))
}
