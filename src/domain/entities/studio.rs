use serde::{Deserialize, Serialize};
use super::{Entity, MovieMember, Relation};

/// 스튜디오 엔티티
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Studio {
    #[serde(default)]
    pub sid: Option<i64>,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct StudioDetails {
    pub name: String,
}

impl Studio {
    pub fn new(name: impl Into<String>) -> Self {
        Self { sid: None, name: name.into() }
    }
}

impl Entity for Studio {
    type Key = i64;
    type Details = StudioDetails;

    const NAME: &'static str = "Studio";
    const ID_FIELD: &'static str = "sid";
    const COLLECTION: &'static str = "studio";

    fn key(&self) -> Option<&i64> {
        self.sid.as_ref()
    }

    fn set_key(&mut self, key: i64) {
        self.sid = Some(key);
    }

    fn key_from_sequence(sequence: i64) -> Option<i64> {
        Some(sequence)
    }

    fn apply_details(&mut self, details: StudioDetails) {
        self.name = details.name;
    }
}

impl MovieMember for Studio {
    const RELATION: Relation = Relation::MovieStudio;
}
