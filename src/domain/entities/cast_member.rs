use serde::{Deserialize, Serialize};
use super::{Entity, MovieMember, PersonDetails, Relation};

/// 출연진 엔티티
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CastMember {
    #[serde(default)]
    pub cmid: Option<i64>,
    pub first_name: String,
    pub last_name: String,
}

impl CastMember {
    pub fn new(first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        Self {
            cmid: None,
            first_name: first_name.into(),
            last_name: last_name.into(),
        }
    }
}

impl Entity for CastMember {
    type Key = i64;
    type Details = PersonDetails;

    const NAME: &'static str = "CastMember";
    const ID_FIELD: &'static str = "cmid";
    const COLLECTION: &'static str = "cast_member";

    fn key(&self) -> Option<&i64> {
        self.cmid.as_ref()
    }

    fn set_key(&mut self, key: i64) {
        self.cmid = Some(key);
    }

    fn key_from_sequence(sequence: i64) -> Option<i64> {
        Some(sequence)
    }

    fn apply_details(&mut self, details: PersonDetails) {
        self.first_name = details.first_name;
        self.last_name = details.last_name;
    }
}

impl MovieMember for CastMember {
    const RELATION: Relation = Relation::MovieCastMember;
}
