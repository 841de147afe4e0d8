use std::borrow::Cow;
use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::ValidationError;

/// Query parameters shared by the list endpoints.
#[derive(Debug, Default, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct ListParams {
    /// Maximum number of recent records to return. Out-of-range values are clamped.
    pub limit: Option<i64>,
    /// ISO week such as `2025-W07`.
    pub cycle_key: Option<String>,
}

impl ListParams {
    pub fn limit_or(&self, default: i64, max: i64) -> i64 {
        self.limit.map_or(default, |limit| limit.clamp(1, max))
    }

    /// Requested cycle key, ignoring blank values.
    pub fn cycle_key(&self) -> Option<&str> {
        self.cycle_key
            .as_deref()
            .map(str::trim)
            .filter(|key| !key.is_empty())
    }
}

/// Error body returned by every endpoint.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<Object>)]
    pub issues: Option<serde_json::Value>,
}

pub(crate) fn validation_error(code: &'static str, message: &'static str) -> ValidationError {
    let mut error = ValidationError::new(code);
    error.message = Some(Cow::Borrowed(message));
    error
}

/// Player ids must be positive and listed once.
pub(crate) fn validate_player_ids(ids: &[i32]) -> Result<(), ValidationError> {
    if ids.iter().any(|id| *id < 1) {
        return Err(validation_error(
            "invalid_player_id",
            "Player ids must be positive integers",
        ));
    }

    let unique: HashSet<i32> = ids.iter().copied().collect();
    if unique.len() != ids.len() {
        return Err(validation_error(
            "duplicate_player_id",
            "Player ids must be unique",
        ));
    }

    Ok(())
}

/// An explicit cycle key must hold 1 to 32 characters once trimmed.
pub(crate) fn validate_cycle_key(key: &str) -> Result<(), ValidationError> {
    let len = key.trim().chars().count();
    if len == 0 {
        return Err(validation_error(
            "blank_cycle_key",
            "Cycle key must not be blank",
        ));
    }
    if len > 32 {
        return Err(validation_error(
            "cycle_key_too_long",
            "Cycle key must be at most 32 characters",
        ));
    }

    Ok(())
}
