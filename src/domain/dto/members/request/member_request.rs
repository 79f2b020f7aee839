use serde::Deserialize;
use validator::Validate;
use crate::domain::entities::{CastMember, Director, PersonDetails, Studio, StudioDetails};
use crate::utils::string_utils::not_blank;

/// 감독/출연진 생성·수정 요청 DTO
///
/// ```json
/// { "firstName": "Chris", "lastName": "Nolan" }
/// ```
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct PersonRequest {
    #[validate(custom(function = "not_blank"))]
    pub first_name: String,

    #[validate(custom(function = "not_blank"))]
    pub last_name: String,
}

impl PersonRequest {
    pub fn into_details(self) -> PersonDetails {
        PersonDetails {
            first_name: self.first_name.trim().to_string(),
            last_name: self.last_name.trim().to_string(),
        }
    }
}

impl From<PersonRequest> for Director {
    fn from(request: PersonRequest) -> Self {
        let PersonDetails { first_name, last_name } = request.into_details();
        Director::new(first_name, last_name)
    }
}

impl From<PersonRequest> for CastMember {
    fn from(request: PersonRequest) -> Self {
        let PersonDetails { first_name, last_name } = request.into_details();
        CastMember::new(first_name, last_name)
    }
}

/// 스튜디오 생성·수정 요청 DTO
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct StudioRequest {
    #[validate(custom(function = "not_blank"))]
    pub name: String,
}

impl StudioRequest {
    pub fn into_details(self) -> StudioDetails {
        StudioDetails { name: self.name.trim().to_string() }
    }
}

impl From<StudioRequest> for Studio {
    fn from(request: StudioRequest) -> Self {
        Studio::new(request.into_details().name)
    }
}
