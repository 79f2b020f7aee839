//! # Movie Member HTTP Handlers
//!
//! 감독(`director`), 출연진(`castMember`), 스튜디오(`studio`)는 같은 엔드포인트 구성을 가지므로
//! [`MemberResource`]로 타입별 DTO만 지정하고 핸들러는 제네릭으로 공유합니다.
//!
//! | 메서드 | 경로 | 설명 |
//! |--------|------|------|
//! | `GET` / `POST` | `/api/v1/{member}` | 목록 / 단독 생성 |
//! | `GET` / `PUT` / `DELETE` | `/api/v1/{member}/{id}` | 조회 / 수정 / 삭제 |
//! | `GET` | `/api/v1/{member}/{id}/movie` | 연결된 영화 목록 |
//! | `GET` / `POST` | `/api/v1/movie/{member}?mid=` | 영화 기준 목록 / 생성 후 연결 |

use actix_web::{web, HttpResponse, Resource, Scope};
use serde::de::DeserializeOwned;
use serde::Serialize;
use validator::Validate;
use crate::core::errors::AppError;
use crate::domain::dto::common::DeletedResponse;
use crate::domain::dto::members::{
    CastMemberResponse, DirectorResponse, PersonRequest, StudioRequest, StudioResponse,
};
use crate::domain::dto::movies::MovieQuery;
use crate::domain::entities::{CastMember, Director, Studio};
use crate::services::{LinkedMember, MemberService};
use super::movies::movie_list;
use super::validated;

/// 멤버 엔티티의 HTTP 표현
pub trait MemberResource: LinkedMember {
    /// URL 경로 세그먼트
    const PATH: &'static str;

    type Request: DeserializeOwned + Validate + 'static;
    type Response: Serialize + From<Self>;

    fn from_request(request: Self::Request) -> Self;

    fn into_details(request: Self::Request) -> Self::Details;
}

impl MemberResource for Director {
    const PATH: &'static str = "director";

    type Request = PersonRequest;
    type Response = DirectorResponse;

    fn from_request(request: PersonRequest) -> Self {
        Director::from(request)
    }

    fn into_details(request: PersonRequest) -> Self::Details {
        request.into_details()
    }
}

impl MemberResource for CastMember {
    const PATH: &'static str = "castMember";

    type Request = PersonRequest;
    type Response = CastMemberResponse;

    fn from_request(request: PersonRequest) -> Self {
        CastMember::from(request)
    }

    fn into_details(request: PersonRequest) -> Self::Details {
        request.into_details()
    }
}

impl MemberResource for Studio {
    const PATH: &'static str = "studio";

    type Request = StudioRequest;
    type Response = StudioResponse;

    fn from_request(request: StudioRequest) -> Self {
        Studio::from(request)
    }

    fn into_details(request: StudioRequest) -> Self::Details {
        request.into_details()
    }
}

fn member_list<T: MemberResource>(members: Vec<T>) -> HttpResponse {
    HttpResponse::Ok().json(members.into_iter().map(T::Response::from).collect::<Vec<_>>())
}

fn member_body<T: MemberResource>(member: T) -> HttpResponse {
    HttpResponse::Ok().json(T::Response::from(member))
}

pub async fn list_members<T: MemberResource>(
    service: web::Data<MemberService<T>>,
) -> Result<HttpResponse, AppError> {
    Ok(member_list(service.get_all().await?))
}

pub async fn create_member<T: MemberResource>(
    service: web::Data<MemberService<T>>,
    payload: web::Json<T::Request>,
) -> Result<HttpResponse, AppError> {
    let request = validated(payload)?;

    let created = service.create(T::from_request(request)).await?;

    Ok(member_body(created))
}

pub async fn get_member<T: MemberResource>(
    service: web::Data<MemberService<T>>,
    key: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    Ok(member_body(service.get_by_id(key.into_inner()).await?))
}

pub async fn update_member<T: MemberResource>(
    service: web::Data<MemberService<T>>,
    key: web::Path<i64>,
    payload: web::Json<T::Request>,
) -> Result<HttpResponse, AppError> {
    let request = validated(payload)?;

    let updated = service.update(key.into_inner(), T::into_details(request)).await?;

    Ok(member_body(updated))
}

pub async fn delete_member<T: MemberResource>(
    service: web::Data<MemberService<T>>,
    key: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    service.delete(key.into_inner()).await?;

    Ok(HttpResponse::Ok().json(DeletedResponse::deleted()))
}

/// 멤버에 연결된 영화 목록
pub async fn list_member_movies<T: MemberResource>(
    service: web::Data<MemberService<T>>,
    key: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    Ok(movie_list(service.get_movies(key.into_inner()).await?))
}

pub async fn list_members_for_movie<T: MemberResource>(
    service: web::Data<MemberService<T>>,
    query: web::Query<MovieQuery>,
) -> Result<HttpResponse, AppError> {
    Ok(member_list(service.get_all_for_movie(query.mid).await?))
}

/// 멤버를 생성하고 `mid` 영화에 연결합니다.
///
/// 영화가 없으면 404를 반환하며 멤버도 저장되지 않습니다.
pub async fn create_member_for_movie<T: MemberResource>(
    service: web::Data<MemberService<T>>,
    query: web::Query<MovieQuery>,
    payload: web::Json<T::Request>,
) -> Result<HttpResponse, AppError> {
    let request = validated(payload)?;

    let created = service
        .create_for_movie(query.mid, T::from_request(request))
        .await?;

    Ok(member_body(created))
}

/// `/api/v1/{member}` 스코프
pub fn member_scope<T: MemberResource>() -> Scope {
    web::scope(&format!("/api/v1/{}", T::PATH))
        .service(
            web::resource("")
                .route(web::get().to(list_members::<T>))
                .route(web::post().to(create_member::<T>)),
        )
        .service(
            web::resource("/{id}")
                .route(web::get().to(get_member::<T>))
                .route(web::put().to(update_member::<T>))
                .route(web::delete().to(delete_member::<T>)),
        )
        .service(web::resource("/{id}/movie").route(web::get().to(list_member_movies::<T>)))
}

/// `/api/v1/movie` 스코프 아래의 `/{member}?mid=` 리소스
pub fn movie_member_resource<T: MemberResource>() -> Resource {
    web::resource(format!("/{}", T::PATH))
        .route(web::get().to(list_members_for_movie::<T>))
        .route(web::post().to(create_member_for_movie::<T>))
}
