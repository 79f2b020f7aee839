use chrono::NaiveDate;
use serde::Deserialize;
use validator::Validate;
use crate::domain::entities::{Movie, MovieDetails};
use crate::utils::string_utils::{deserialize_optional_string, not_blank};

/// 영화 생성/수정 요청 DTO
///
/// 생성(`POST`)과 수정(`PUT`) 모두 같은 본문을 사용합니다.
/// `mid`와 소유자는 요청으로 지정할 수 없습니다.
///
/// # JSON 예제
///
/// ```json
/// {
///   "title": "Inception",
///   "length": "148 min",
///   "genre": "Sci-Fi",
///   "releaseDate": "2010-07-16"
/// }
/// ```
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct MovieRequest {
    #[validate(custom(function = "not_blank"))]
    pub title: String,

    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub length: Option<String>,

    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub genre: Option<String>,

    #[serde(default)]
    pub release_date: Option<NaiveDate>,
}

impl MovieRequest {
    pub fn into_entity(self) -> Movie {
        let MovieRequest { title, length, genre, release_date } = self;

        Movie {
            mid: None,
            title: title.trim().to_string(),
            length,
            genre,
            release_date,
            owner: None,
        }
    }

    pub fn into_details(self) -> MovieDetails {
        let MovieRequest { title, length, genre, release_date } = self;

        MovieDetails {
            title: title.trim().to_string(),
            length,
            genre,
            release_date,
        }
    }
}

/// 영화 기준 조회/생성 쿼리 (`?mid=1`)
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct MovieQuery {
    pub mid: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_camel_case_payload() {
        let request: MovieRequest = serde_json::from_str(
            r#"{"title": "Inception", "genre": "Sci-Fi", "releaseDate": "2010-07-16"}"#,
        )
        .unwrap();

        assert!(request.validate().is_ok());

        let movie = request.into_entity();
        assert_eq!(movie.mid, None);
        assert_eq!(movie.genre.as_deref(), Some("Sci-Fi"));
        assert_eq!(movie.release_date, NaiveDate::from_ymd_opt(2010, 7, 16));
        assert_eq!(movie.owner, None);
    }

    #[test]
    fn test_blank_title_fails_validation() {
        let request: MovieRequest = serde_json::from_str(r#"{"title": "  "}"#).unwrap();

        assert!(request.validate().is_err());
    }

    #[test]
    fn test_identity_and_owner_cannot_be_injected() {
        let request: MovieRequest = serde_json::from_str(
            r#"{"mid": 42, "fk_user": "mallory", "title": "Heat"}"#,
        )
        .unwrap();

        let movie = request.into_entity();
        assert_eq!(movie.mid, None);
        assert_eq!(movie.owner, None);
    }
}
