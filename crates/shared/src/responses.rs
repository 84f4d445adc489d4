//! Error classification for responses

use serde::{Deserialize, Serialize};

/// Error classification codes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    /// Request was malformed or could not be parsed
    BadRequest,
    /// Referenced character or task does not exist
    NotFound,
    /// Request data failed validation
    ValidationError,
    /// Unexpected failure while handling the request
    InternalError,

    /// Unknown variant for forward compatibility
    #[serde(other)]
    Unknown,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_are_snake_case() {
        let json = serde_json::to_string(&ErrorCode::NotFound).unwrap();
        assert_eq!(json, "\"not_found\"");
    }

    #[test]
    fn unknown_codes_deserialize_to_unknown() {
        let code: ErrorCode = serde_json::from_str("\"rate_limit_exceeded\"").unwrap();
        assert_eq!(code, ErrorCode::Unknown);
    }
}
