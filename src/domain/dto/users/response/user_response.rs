use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use crate::domain::entities::User;

/// 사용자 응답 DTO
///
/// 소유한 영화 목록은 포함하지 않으며 `/api/v1/users/movie?username=`으로 조회합니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    pub password: String,
    pub email: Option<String>,
    pub creation_date: NaiveDate,
    pub last_access_date: NaiveDate,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        let User {
            username,
            first_name,
            last_name,
            password,
            email,
            creation_date,
            last_access_date,
        } = user;

        Self {
            username,
            first_name,
            last_name,
            password,
            email,
            creation_date,
            last_access_date,
        }
    }
}
