//! # Routes Module
//!
//! 모든 HTTP 엔드포인트를 애플리케이션에 등록합니다.
//!
//! ## 라우트 구성
//!
//! ```text
//! /health
//! /api/v1/movie                     ← 영화 CRUD
//! /api/v1/movie/director?mid=       ← 영화 기준 감독 목록/생성 (정적 경로 우선 등록)
//! /api/v1/movie/castMember?mid=
//! /api/v1/movie/studio?mid=
//! /api/v1/director[/{did}[/movie]]
//! /api/v1/castMember[/{cmid}[/movie]]
//! /api/v1/studio[/{sid}[/movie]]
//! /api/v1/users                     ← 사용자 CRUD
//! /api/v1/users/movie?username=     ← 사용자 소유 영화 목록/생성 (정적 경로 우선 등록)
//! ```

use actix_web::{get, web, HttpResponse};
use chrono::Utc;
use serde_json::json;
use crate::domain::entities::{CastMember, Director, Studio};
use crate::handlers::{self, members};
use crate::handlers::members::MemberResource;

/// 모든 라우트를 설정합니다
///
/// # Examples
///
/// ```rust,ignore
/// use actix_web::App;
///
/// let container = ServiceContainer::in_memory();
/// let app = App::new()
///     .configure(|cfg| container.register(cfg))
///     .configure(configure_all_routes);
/// ```
pub fn configure_all_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(handlers::json_config())
        .app_data(handlers::query_config())
        .app_data(handlers::path_config());

    cfg.service(health_check);

    configure_movie_routes(cfg);
    configure_member_routes(cfg);
    configure_user_routes(cfg);
}

fn configure_movie_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/movie")
            .service(members::movie_member_resource::<Director>())
            .service(members::movie_member_resource::<CastMember>())
            .service(members::movie_member_resource::<Studio>())
            .service(handlers::movies::list_movies)
            .service(handlers::movies::create_movie)
            .service(handlers::movies::get_movie)
            .service(handlers::movies::update_movie)
            .service(handlers::movies::delete_movie),
    );
}

fn configure_member_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(members::member_scope::<Director>())
        .service(members::member_scope::<CastMember>())
        .service(members::member_scope::<Studio>());
}

fn configure_user_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/users")
            .service(handlers::users::list_user_movies)
            .service(handlers::users::create_user_movie)
            .service(handlers::users::list_users)
            .service(handlers::users::create_user)
            .service(handlers::users::get_user)
            .service(handlers::users::update_user)
            .service(handlers::users::delete_user),
    );
}

/// 노출되는 리소스의 기본 경로 목록 (시작 화면 출력용)
pub fn resource_paths() -> Vec<String> {
    let mut paths = vec!["/api/v1/movie".to_string()];
    paths.extend(
        [Director::PATH, CastMember::PATH, Studio::PATH]
            .iter()
            .map(|path| format!("/api/v1/{}", path)),
    );
    paths.push("/api/v1/users".to_string());
    paths
}

#[get("/health")]
async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(json!({
        "status": "healthy",
        "service": "movie_catalog_backend",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": Utc::now().to_rfc3339(),
    }))
}

#[cfg(test)]
mod tests {
    use actix_web::http::StatusCode;
    use actix_web::{test, App};
    use serde_json::{json, Value};
    use super::*;
    use crate::core::container::ServiceContainer;

    macro_rules! test_app {
        () => {{
            let container = ServiceContainer::in_memory();
            test::init_service(
                App::new()
                    .configure(|cfg| container.register(cfg))
                    .configure(configure_all_routes),
            )
            .await
        }};
    }

    fn alice() -> Value {
        json!({
            "username": "alice",
            "firstName": "Alice",
            "lastName": "Kim",
            "password": "p1",
            "creationDate": "2024-01-01",
            "lastAccessDate": "2024-01-01"
        })
    }

    #[actix_web::test]
    async fn test_resource_paths_cover_every_entity() {
        let paths = resource_paths();

        assert_eq!(paths.len(), 5);
        assert!(paths.contains(&"/api/v1/castMember".to_string()));
        assert_eq!(paths.last().map(String::as_str), Some("/api/v1/users"));
    }

    #[actix_web::test]
    async fn test_health_check() {
        let app = test_app!();

        let req = test::TestRequest::get().uri("/health").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body["status"], "healthy");
    }

    #[actix_web::test]
    async fn test_create_director_for_movie_scenario() {
        let app = test_app!();

        let req = test::TestRequest::post()
            .uri("/api/v1/movie")
            .set_json(json!({ "title": "Inception" }))
            .to_request();
        let movie: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(movie["mid"], 1);

        let req = test::TestRequest::post()
            .uri("/api/v1/movie/director?mid=1")
            .set_json(json!({ "firstName": "Chris", "lastName": "Nolan" }))
            .to_request();
        let director: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(director["did"], 1);

        let req = test::TestRequest::get().uri("/api/v1/movie/director?mid=1").to_request();
        let directors: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(directors, json!([{ "did": 1, "firstName": "Chris", "lastName": "Nolan" }]));

        let req = test::TestRequest::get().uri("/api/v1/director/1/movie").to_request();
        let movies: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(movies.as_array().map(Vec::len), Some(1));
        assert_eq!(movies[0]["title"], "Inception");
    }

    #[actix_web::test]
    async fn test_missing_studio_maps_to_404() {
        let app = test_app!();

        let req = test::TestRequest::delete().uri("/api/v1/studio/99").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"], "Studio With the sid: 99 does not exist!");
    }

    #[actix_web::test]
    async fn test_create_member_for_missing_movie_is_404() {
        let app = test_app!();

        let req = test::TestRequest::post()
            .uri("/api/v1/movie/castMember?mid=5")
            .set_json(json!({ "firstName": "Elliot", "lastName": "Page" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);

        let req = test::TestRequest::get().uri("/api/v1/castMember").to_request();
        let cast: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(cast, json!([]));
    }

    #[actix_web::test]
    async fn test_delete_movie_returns_deleted_flag() {
        let app = test_app!();
        let req = test::TestRequest::post()
            .uri("/api/v1/movie")
            .set_json(json!({ "title": "Heat" }))
            .to_request();
        test::call_service(&app, req).await;

        let req = test::TestRequest::delete().uri("/api/v1/movie/1").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body, json!({ "deleted": true }));

        let req = test::TestRequest::get().uri("/api/v1/movie/1").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    #[actix_web::test]
    async fn test_invalid_payloads_are_bad_requests() {
        let app = test_app!();

        let req = test::TestRequest::post()
            .uri("/api/v1/movie")
            .set_json(json!({ "genre": "Drama" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: Value = test::read_body_json(resp).await;
        assert!(body["error"].is_string());

        let req = test::TestRequest::post()
            .uri("/api/v1/studio")
            .set_json(json!({ "name": "   " }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let req = test::TestRequest::get().uri("/api/v1/movie/director").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn test_user_update_scenario() {
        let app = test_app!();
        let req = test::TestRequest::post().uri("/api/v1/users").set_json(alice()).to_request();
        test::call_service(&app, req).await;

        let req = test::TestRequest::put()
            .uri("/api/v1/users/alice")
            .set_json(json!({ "password": "p2", "email": "b@x.com", "firstName": "ignored" }))
            .to_request();
        let user: Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(user["password"], "p2");
        assert_eq!(user["email"], "b@x.com");
        assert_eq!(user["firstName"], "Alice");
    }

    #[actix_web::test]
    async fn test_posting_existing_username_overwrites() {
        let app = test_app!();
        let req = test::TestRequest::post().uri("/api/v1/users").set_json(alice()).to_request();
        test::call_service(&app, req).await;

        let mut replacement = alice();
        replacement["firstName"] = json!("Alicia");
        replacement["password"] = json!("p9");
        let req = test::TestRequest::post().uri("/api/v1/users").set_json(replacement).to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let req = test::TestRequest::get().uri("/api/v1/users/alice").to_request();
        let user: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(user["firstName"], "Alicia");
        assert_eq!(user["password"], "p9");

        let req = test::TestRequest::get().uri("/api/v1/users").to_request();
        let users: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(users.as_array().map(Vec::len), Some(1));
    }

    #[actix_web::test]
    async fn test_user_movies_survive_user_delete() {
        let app = test_app!();
        let req = test::TestRequest::post().uri("/api/v1/users").set_json(alice()).to_request();
        test::call_service(&app, req).await;

        let req = test::TestRequest::post()
            .uri("/api/v1/users/movie?username=alice")
            .set_json(json!({ "title": "Inception" }))
            .to_request();
        let movie: Value = test::call_and_read_body_json(&app, req).await;
        assert!(movie.get("fk_user").is_none());

        let req = test::TestRequest::get().uri("/api/v1/users/movie?username=alice").to_request();
        let owned: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(owned.as_array().map(Vec::len), Some(1));

        let req = test::TestRequest::delete().uri("/api/v1/users/alice").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let req = test::TestRequest::get().uri("/api/v1/movie/1").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let req = test::TestRequest::get().uri("/api/v1/users/movie?username=alice").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }
}
