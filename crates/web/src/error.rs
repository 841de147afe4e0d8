use axum::{
    Json,
    extract::rejection::{JsonRejection, PathRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::{Map, Value, json};
use std::fmt;
use storage::{error::StorageError, roster::RosterError, services::draw_engine::DrawError};
use validator::ValidationErrors;

/// Web layer errors
#[derive(Debug)]
pub enum WebError {
    Storage(StorageError),
    Validation(ValidationErrors),
    Roster(RosterError),
    Draw(DrawError),
    BadRequest(String),
}

impl fmt::Display for WebError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Storage(e) => write!(f, "Storage error: {}", e),
            Self::Validation(e) => write!(f, "Validation error: {}", e),
            Self::Roster(e) => write!(f, "Roster error: {}", e),
            Self::Draw(e) => write!(f, "Draw error: {}", e),
            Self::BadRequest(msg) => write!(f, "Bad request: {}", msg),
        }
    }
}

impl IntoResponse for WebError {
    fn into_response(self) -> Response {
        let status_code = match &self {
            Self::Storage(StorageError::NotFound) => StatusCode::NOT_FOUND,
            Self::Storage(StorageError::ConstraintViolation(_)) => StatusCode::CONFLICT,
            Self::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::Validation(_) | Self::Roster(_) | Self::Draw(_) | Self::BadRequest(_) => {
                StatusCode::BAD_REQUEST
            }
        };

        let body = match &self {
            Self::Storage(StorageError::NotFound) => {
                json!({
                    "message": "Resource not found"
                })
            }
            Self::Storage(StorageError::ConstraintViolation(msg)) => {
                json!({
                    "message": msg
                })
            }
            Self::Storage(e) => {
                tracing::error!("Storage error: {:?}", e);
                json!({
                    "message": "An internal error occurred"
                })
            }
            Self::Validation(errors) => {
                json!({
                    "message": "Validation failed",
                    "issues": validation_issues(errors)
                })
            }
            Self::Roster(e) => {
                json!({
                    "message": e.to_string()
                })
            }
            Self::Draw(e) => {
                json!({
                    "message": e.to_string()
                })
            }
            Self::BadRequest(msg) => {
                json!({
                    "message": msg
                })
            }
        };

        (status_code, Json(body)).into_response()
    }
}

/// Groups validation messages by the request's camelCase field names.
fn validation_issues(errors: &ValidationErrors) -> Value {
    let mut issues = Map::new();

    for (field, errors) in errors.field_errors() {
        let messages = errors
            .iter()
            .map(|e| {
                e.message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| e.code.to_string())
            })
            .map(Value::String)
            .collect();

        let key = if field == "__all__" {
            "payload".to_string()
        } else {
            camel_case(&field)
        };
        issues.insert(key, Value::Array(messages));
    }

    Value::Object(issues)
}

fn camel_case(field: &str) -> String {
    let mut out = String::with_capacity(field.len());
    let mut upper = false;
    for c in field.chars() {
        if c == '_' {
            upper = true;
        } else if upper {
            out.extend(c.to_uppercase());
            upper = false;
        } else {
            out.push(c);
        }
    }
    out
}

impl From<StorageError> for WebError {
    fn from(error: StorageError) -> Self {
        Self::Storage(error)
    }
}

impl From<ValidationErrors> for WebError {
    fn from(error: ValidationErrors) -> Self {
        Self::Validation(error)
    }
}

impl From<RosterError> for WebError {
    fn from(error: RosterError) -> Self {
        Self::Roster(error)
    }
}

impl From<DrawError> for WebError {
    fn from(error: DrawError) -> Self {
        Self::Draw(error)
    }
}

impl From<JsonRejection> for WebError {
    fn from(rejection: JsonRejection) -> Self {
        Self::BadRequest(rejection.body_text())
    }
}

impl From<QueryRejection> for WebError {
    fn from(rejection: QueryRejection) -> Self {
        Self::BadRequest(rejection.body_text())
    }
}

impl From<PathRejection> for WebError {
    fn from(rejection: PathRejection) -> Self {
        Self::BadRequest(rejection.body_text())
    }
}

pub type WebResult<T> = Result<T, WebError>;
