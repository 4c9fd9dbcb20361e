pub mod ai_dto;
pub mod attempt_dto;
pub mod auth_dto;
pub mod quiz_dto;

use serde::Deserialize;
use validator::ValidationError;

use crate::models::draft::Difficulty;

// Trims strings and turns empty ones into None
pub(crate) fn trim_optional_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let opt: Option<String> = Option::deserialize(deserializer)?;
    Ok(opt.and_then(|s| {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    }))
}

pub(crate) fn trim_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    Ok(s.trim().to_string())
}

pub(crate) fn validate_difficulty(value: &str) -> Result<(), ValidationError> {
    value.parse::<Difficulty>().map(|_| ()).map_err(|_| {
        let mut err = ValidationError::new("difficulty");
        err.message = Some("Difficulty must be one of: easy, medium, hard".into());
        err
    })
}
