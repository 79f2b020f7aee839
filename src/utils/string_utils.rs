//! # 문자열 유틸리티
//!
//! 요청 DTO의 문자열 필드를 검증하고 정리하는 함수들입니다.

use serde::Deserialize;
use validator::ValidationError;
use crate::core::errors::AppError;

/// 필수 문자열 필드 검증 및 정리
///
/// 빈 문자열이나 공백만 있는 경우 ValidationError를 반환하고,
/// 유효한 문자열인 경우 앞뒤 공백을 제거한 문자열을 반환합니다.
///
/// # 인자
/// * `value` - 검증할 문자열
/// * `field_name` - 필드명 (에러 메시지용)
///
/// # 예제
/// ```rust,ignore
/// use crate::utils::string_utils::validate_required_string;
///
/// assert_eq!(validate_required_string("  alice  ", "username").unwrap(), "alice");
/// assert!(validate_required_string("   ", "username").is_err());
/// ```
pub fn validate_required_string(value: &str, field_name: &str) -> Result<String, AppError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(AppError::ValidationError(format!("{} is required", field_name)));
    }
    Ok(trimmed.to_string())
}

/// 선택적 문자열 필드 정리
///
/// 값이 없거나 공백뿐이면 None, 그 외에는 앞뒤 공백을 제거한 값을 반환합니다.
pub fn clean_optional_string(value: Option<String>) -> Option<String> {
    value.and_then(|s| {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    })
}

pub fn is_valid_string(value: &str) -> bool {
    !value.trim().is_empty()
}

/// `validator`의 `custom` 검증 함수
///
/// ```rust,ignore
/// #[validate(custom(function = "not_blank"))]
/// pub title: String,
/// ```
pub fn not_blank(value: &str) -> Result<(), ValidationError> {
    if is_valid_string(value) {
        Ok(())
    } else {
        Err(ValidationError::new("blank").with_message("must not be blank".into()))
    }
}

/// 선택적 문자열 필드를 위한 serde deserializer
///
/// `#[serde(default, deserialize_with = "deserialize_optional_string")]`와 함께 사용하며,
/// 빈 문자열이나 공백만 있는 값은 None으로 변환합니다.
///
/// ```text
/// {"genre": "  Sci-Fi  "} → Some("Sci-Fi")
/// {"genre": ""}           → None
/// {"genre": null}         → None
/// ```
pub fn deserialize_optional_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(clean_optional_string(opt))
}
