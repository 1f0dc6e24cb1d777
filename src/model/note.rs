use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::errors::RestError;

/// A stored note.
///
/// `title` and `content` are kept as raw JSON values: the API only checks
/// that both keys were sent, never what type they carry, and echoes them
/// back untouched.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
pub struct Note {
    /// Assigned by the store; unique for the process lifetime.
    pub id: u64,
    pub title: Value,
    pub content: Value,
}

/// A create/update payload that passed validation.
#[derive(Debug, Clone)]
pub struct NoteDraft {
    pub title: Value,
    pub content: Value,
}

impl NoteDraft {
    /// Accepts any JSON object carrying both keys; extra keys are ignored
    /// and value types are not checked. Everything else is a bad request.
    pub fn from_body(body: Option<Value>) -> Result<Self, RestError> {
        let Some(Value::Object(mut fields)) = body else {
            return Err(RestError::InvalidBody);
        };

        match (fields.remove("title"), fields.remove("content")) {
            (Some(title), Some(content)) => Ok(Self { title, content }),
            _ => Err(RestError::MissingFields),
        }
    }
}
