use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use super::Entity;

/// 영화 엔티티
///
/// 카탈로그의 중심 엔티티로, 감독/출연진/스튜디오와 다대다 관계를 맺고
/// 최대 한 명의 소유 사용자를 가집니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Movie {
    /// 시스템이 할당하는 식별자 (저장 전에는 None)
    #[serde(default)]
    pub mid: Option<i64>,
    pub title: String,
    #[serde(default)]
    pub length: Option<String>,
    #[serde(default)]
    pub genre: Option<String>,
    #[serde(default)]
    pub release_date: Option<NaiveDate>,
    /// 소유 사용자의 username (User→Movie 외래 키)
    #[serde(rename = "fk_user", default, skip_serializing_if = "Option::is_none")]
    pub owner: Option<String>,
}

/// 영화 update 시 복사되는 필드
#[derive(Debug, Clone, PartialEq)]
pub struct MovieDetails {
    pub title: String,
    pub length: Option<String>,
    pub genre: Option<String>,
    pub release_date: Option<NaiveDate>,
}

impl Movie {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            mid: None,
            title: title.into(),
            length: None,
            genre: None,
            release_date: None,
            owner: None,
        }
    }

    pub fn with_genre(mut self, genre: impl Into<String>) -> Self {
        self.genre = Some(genre.into());
        self
    }

    pub fn with_length(mut self, length: impl Into<String>) -> Self {
        self.length = Some(length.into());
        self
    }

    pub fn with_release_date(mut self, release_date: NaiveDate) -> Self {
        self.release_date = Some(release_date);
        self
    }
}

impl Entity for Movie {
    type Key = i64;
    type Details = MovieDetails;

    const NAME: &'static str = "Movie";
    const ID_FIELD: &'static str = "mid";
    const COLLECTION: &'static str = "movie";

    fn key(&self) -> Option<&i64> {
        self.mid.as_ref()
    }

    fn set_key(&mut self, key: i64) {
        self.mid = Some(key);
    }

    fn key_from_sequence(sequence: i64) -> Option<i64> {
        Some(sequence)
    }

    fn apply_details(&mut self, details: MovieDetails) {
        let MovieDetails { title, length, genre, release_date } = details;

        self.title = title;
        self.length = length;
        self.genre = genre;
        self.release_date = release_date;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_details_keeps_identity_and_owner() {
        let mut movie = Movie::new("Inception").with_genre("Sci-Fi");
        movie.mid = Some(7);
        movie.owner = Some("alice".to_string());

        movie.apply_details(MovieDetails {
            title: "Tenet".to_string(),
            length: Some("150 min".to_string()),
            genre: None,
            release_date: NaiveDate::from_ymd_opt(2020, 8, 26),
        });

        assert_eq!(movie.mid, Some(7));
        assert_eq!(movie.owner.as_deref(), Some("alice"));
        assert_eq!(movie.title, "Tenet");
        assert_eq!(movie.genre, None);
        assert_eq!(movie.length.as_deref(), Some("150 min"));
    }

    #[test]
    fn test_owner_is_stored_as_foreign_key_column() {
        let mut movie = Movie::new("Heat");
        movie.owner = Some("bob".to_string());

        let value = serde_json::to_value(&movie).unwrap();

        assert_eq!(value["fk_user"], "bob");
        assert!(value.get("owner").is_none());
    }
}
