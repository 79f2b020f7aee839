use serde::{Deserialize, Serialize};
use crate::domain::entities::{CastMember, Director, Studio};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DirectorResponse {
    pub did: Option<i64>,
    pub first_name: String,
    pub last_name: String,
}

impl From<Director> for DirectorResponse {
    fn from(director: Director) -> Self {
        let Director { did, first_name, last_name } = director;
        Self { did, first_name, last_name }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CastMemberResponse {
    pub cmid: Option<i64>,
    pub first_name: String,
    pub last_name: String,
}

impl From<CastMember> for CastMemberResponse {
    fn from(cast_member: CastMember) -> Self {
        let CastMember { cmid, first_name, last_name } = cast_member;
        Self { cmid, first_name, last_name }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StudioResponse {
    pub sid: Option<i64>,
    pub name: String,
}

impl From<Studio> for StudioResponse {
    fn from(studio: Studio) -> Self {
        let Studio { sid, name } = studio;
        Self { sid, name }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cast_member_uses_camel_case() {
        let mut cast_member = CastMember::new("Elliot", "Page");
        cast_member.cmid = Some(3);

        let value = serde_json::to_value(CastMemberResponse::from(cast_member)).unwrap();

        assert_eq!(value, serde_json::json!({
            "cmid": 3,
            "firstName": "Elliot",
            "lastName": "Page"
        }));
    }
}
