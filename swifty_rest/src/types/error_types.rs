use serde::{Deserialize, Serialize};

/// Error body returned by the service on non-2xx responses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Error {
    pub status: u16,
    /// Service error code, e.g. `E_INPUT_ILLEGAL_ARGUMENTS`.
    #[serde(default)]
    pub code: Option<String>,
    pub message: String,
    #[serde(default)]
    pub details: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_error_body() {
        let body = r#"{
            "status": 401,
            "code": "E_BAD_CREDENTIALS",
            "message": "Authentication failed.",
            "details": "The user name or password is incorrect."
        }"#;
        let err: Error = serde_json::from_str(body).unwrap();
        assert_eq!(err.status, 401);
        assert_eq!(err.code.as_deref(), Some("E_BAD_CREDENTIALS"));
        assert_eq!(err.details.as_deref(), Some("The user name or password is incorrect."));
    }

    #[test]
    fn code_and_details_are_optional() {
        let err: Error = serde_json::from_str(r#"{"status":500,"message":"boom"}"#).unwrap();
        assert_eq!(err.code, None);
        assert_eq!(err.details, None);
    }
}
