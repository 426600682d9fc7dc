use crate::extract::record::Validation;
use serde_json::Value;

/// Check whether `response` parses as JSON.
pub fn validate_json(response: &str) -> Validation {
    let length = response.chars().count();
    if response.is_empty() {
        return Validation {
            valid: false,
            error: Some("empty response".to_string()),
            length,
        };
    }

    match serde_json::from_str::<Value>(response) {
        Ok(_) => Validation {
            valid: true,
            error: None,
            length,
        },
        Err(e) => Validation {
            valid: false,
            error: Some(e.to_string()),
            length,
        },
    }
}
