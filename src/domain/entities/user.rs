use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use super::Entity;

/// 사용자 엔티티
///
/// 다른 엔티티와 달리 호출자가 지정한 `username`을 자연 키로 사용합니다.
/// 저장소는 사용자 식별자를 생성하지 않으며, 삭제된 username은 다시 생성할 수 있습니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    pub password: String,
    #[serde(default)]
    pub email: Option<String>,
    pub creation_date: NaiveDate,
    pub last_access_date: NaiveDate,
}

/// 사용자 update 시 복사되는 필드 (비밀번호, 이메일)
#[derive(Debug, Clone, PartialEq)]
pub struct UserDetails {
    pub password: String,
    pub email: Option<String>,
}

impl User {
    pub fn new(
        username: impl Into<String>,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        password: impl Into<String>,
        creation_date: NaiveDate,
        last_access_date: NaiveDate,
    ) -> Self {
        Self {
            username: username.into(),
            first_name: first_name.into(),
            last_name: last_name.into(),
            password: password.into(),
            email: None,
            creation_date,
            last_access_date,
        }
    }

    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }
}

impl Entity for User {
    type Key = String;
    type Details = UserDetails;

    const NAME: &'static str = "User";
    const ID_FIELD: &'static str = "username";
    const COLLECTION: &'static str = "users";

    fn key(&self) -> Option<&String> {
        if self.username.is_empty() {
            None
        } else {
            Some(&self.username)
        }
    }

    fn set_key(&mut self, key: String) {
        self.username = key;
    }

    // 자연 키는 생성하지 않음
    fn key_from_sequence(_sequence: i64) -> Option<String> {
        None
    }

    fn apply_details(&mut self, details: UserDetails) {
        self.password = details.password;
        self.email = details.email;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> User {
        let date = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        User::new("alice", "Alice", "Kim", "p1", date, date).with_email("a@x.com")
    }

    #[test]
    fn test_user_never_generates_key() {
        assert_eq!(User::key_from_sequence(1), None);
    }

    #[test]
    fn test_empty_username_has_no_key() {
        let mut user = sample();
        user.username.clear();

        assert!(user.key().is_none());
    }

    #[test]
    fn test_apply_details_only_touches_password_and_email() {
        let mut user = sample();
        let before = user.clone();

        user.apply_details(UserDetails {
            password: "p2".to_string(),
            email: Some("b@x.com".to_string()),
        });

        assert_eq!(user.password, "p2");
        assert_eq!(user.email.as_deref(), Some("b@x.com"));
        assert_eq!(user.username, before.username);
        assert_eq!(user.first_name, before.first_name);
        assert_eq!(user.creation_date, before.creation_date);
    }
}
