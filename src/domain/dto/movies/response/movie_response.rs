use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use crate::domain::entities::Movie;

/// 영화 응답 DTO
///
/// 소유 사용자(외래 키)와 연관 컬렉션은 노출하지 않습니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MovieResponse {
    pub mid: Option<i64>,
    pub title: String,
    pub length: Option<String>,
    pub genre: Option<String>,
    pub release_date: Option<NaiveDate>,
}

impl From<Movie> for MovieResponse {
    fn from(movie: Movie) -> Self {
        let Movie { mid, title, length, genre, release_date, .. } = movie;

        Self { mid, title, length, genre, release_date }
    }
}
