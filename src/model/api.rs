use serde::{Deserialize, Serialize};

/// Error body returned by the backend when a request is rejected.
///
/// Depending on the controller the backend reports the reason as either `error` or
/// `message`.
#[derive(Serialize, Deserialize, Debug, Default)]
pub struct ErrorDto {
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

impl ErrorDto {
    /// Extracts the human readable reason from a raw response body.
    ///
    /// Falls back to the raw body when it is not a JSON error object, and to `None` when the
    /// body is empty.
    pub fn message_from_body(body: &str) -> Option<String> {
        if let Ok(dto) = serde_json::from_str::<ErrorDto>(body) {
            if let Some(message) = dto.error.or(dto.message) {
                return Some(message);
            }
        }

        let trimmed = body.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::ErrorDto;

    #[test]
    fn prefers_error_field() {
        let body = r#"{"error":"Email already registered","message":"ignored"}"#;
        assert_eq!(
            ErrorDto::message_from_body(body).as_deref(),
            Some("Email already registered")
        );
    }

    #[test]
    fn falls_back_to_message_field() {
        let body = r#"{"message":"NGO not found"}"#;
        assert_eq!(
            ErrorDto::message_from_body(body).as_deref(),
            Some("NGO not found")
        );
    }

    #[test]
    fn uses_raw_text_when_not_json() {
        assert_eq!(
            ErrorDto::message_from_body("Bad Gateway\n").as_deref(),
            Some("Bad Gateway")
        );
        assert_eq!(ErrorDto::message_from_body("  "), None);
    }
}
