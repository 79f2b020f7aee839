use serde::{Deserialize, Serialize};
use super::{Entity, MovieMember, Relation};

/// 감독 엔티티
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Director {
    #[serde(default)]
    pub did: Option<i64>,
    pub first_name: String,
    pub last_name: String,
}

/// 이름을 가진 엔티티(감독, 출연진)의 update 필드
#[derive(Debug, Clone, PartialEq)]
pub struct PersonDetails {
    pub first_name: String,
    pub last_name: String,
}

impl Director {
    pub fn new(first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        Self {
            did: None,
            first_name: first_name.into(),
            last_name: last_name.into(),
        }
    }
}

impl Entity for Director {
    type Key = i64;
    type Details = PersonDetails;

    const NAME: &'static str = "Director";
    const ID_FIELD: &'static str = "did";
    const COLLECTION: &'static str = "director";

    fn key(&self) -> Option<&i64> {
        self.did.as_ref()
    }

    fn set_key(&mut self, key: i64) {
        self.did = Some(key);
    }

    fn key_from_sequence(sequence: i64) -> Option<i64> {
        Some(sequence)
    }

    fn apply_details(&mut self, details: PersonDetails) {
        self.first_name = details.first_name;
        self.last_name = details.last_name;
    }
}

impl MovieMember for Director {
    const RELATION: Relation = Relation::MovieDirector;
}
