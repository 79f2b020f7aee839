//! # 사용자 생성/수정 요청 DTO
//!
//! ## 검증 규칙
//!
//! ### 사용자명 (`username`)
//! - 공백이 아닌 문자열 (자연 키이므로 서버가 생성하지 않음)
//!
//! ### 이름 (`firstName`, `lastName`), 비밀번호 (`password`)
//! - 공백이 아닌 문자열
//!
//! ### 이메일 (`email`)
//! - 선택 항목, 값이 있으면 이메일 형식
//!
//! ### 날짜 (`creationDate`, `lastAccessDate`)
//! - `YYYY-MM-DD` 형식의 필수 항목

use chrono::NaiveDate;
use serde::Deserialize;
use validator::Validate;
use crate::domain::entities::{User, UserDetails};
use crate::utils::string_utils::{deserialize_optional_string, not_blank};

/// 새로운 사용자 계정 생성을 위한 요청 DTO
///
/// # JSON 예제
///
/// ```json
/// {
///   "username": "alice",
///   "firstName": "Alice",
///   "lastName": "Kim",
///   "password": "p1",
///   "email": "alice@example.com",
///   "creationDate": "2024-01-01",
///   "lastAccessDate": "2024-01-01"
/// }
/// ```
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserRequest {
    #[validate(custom(function = "not_blank"))]
    pub username: String,

    #[validate(custom(function = "not_blank"))]
    pub first_name: String,

    #[validate(custom(function = "not_blank"))]
    pub last_name: String,

    #[validate(custom(function = "not_blank"))]
    pub password: String,

    #[serde(default, deserialize_with = "deserialize_optional_string")]
    #[validate(email(message = "유효한 이메일 주소를 입력해주세요"))]
    pub email: Option<String>,

    pub creation_date: NaiveDate,

    pub last_access_date: NaiveDate,
}

impl CreateUserRequest {
    pub fn into_entity(self) -> User {
        User {
            username: self.username.trim().to_string(),
            first_name: self.first_name.trim().to_string(),
            last_name: self.last_name.trim().to_string(),
            password: self.password,
            email: self.email,
            creation_date: self.creation_date,
            last_access_date: self.last_access_date,
        }
    }
}

/// 사용자 수정 요청 DTO
///
/// 비밀번호와 이메일만 반영됩니다. 본문에 다른 필드가 있어도 무시합니다.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUserRequest {
    #[validate(custom(function = "not_blank"))]
    pub password: String,

    #[serde(default, deserialize_with = "deserialize_optional_string")]
    #[validate(email(message = "유효한 이메일 주소를 입력해주세요"))]
    pub email: Option<String>,
}

impl UpdateUserRequest {
    pub fn into_details(self) -> UserDetails {
        UserDetails {
            password: self.password,
            email: self.email,
        }
    }
}

/// 사용자 기준 조회/생성 쿼리 (`?username=alice`)
#[derive(Debug, Clone, Deserialize)]
pub struct UsernameQuery {
    pub username: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_request_maps_every_field() {
        let request: CreateUserRequest = serde_json::from_str(r#"{
            "username": "alice",
            "firstName": "Alice",
            "lastName": "Kim",
            "password": "p1",
            "email": "alice@example.com",
            "creationDate": "2024-01-01",
            "lastAccessDate": "2024-02-01"
        }"#).unwrap();
        assert!(request.validate().is_ok());

        let user = request.into_entity();

        assert_eq!(user.username, "alice");
        assert_eq!(user.email.as_deref(), Some("alice@example.com"));
        assert_eq!(user.last_access_date, NaiveDate::from_ymd_opt(2024, 2, 1).unwrap());
    }

    #[test]
    fn test_invalid_email_fails_validation() {
        let request: CreateUserRequest = serde_json::from_str(r#"{
            "username": "alice",
            "firstName": "Alice",
            "lastName": "Kim",
            "password": "p1",
            "email": "not-an-email",
            "creationDate": "2024-01-01",
            "lastAccessDate": "2024-01-01"
        }"#).unwrap();

        assert!(request.validate().is_err());
    }

    #[test]
    fn test_update_request_ignores_other_fields() {
        let request: UpdateUserRequest = serde_json::from_str(
            r#"{"password": "p2", "email": "b@x.com", "firstName": "ignored"}"#,
        )
        .unwrap();
        assert!(request.validate().is_ok());

        let details = request.into_details();

        assert_eq!(details.password, "p2");
        assert_eq!(details.email.as_deref(), Some("b@x.com"));
    }
}
