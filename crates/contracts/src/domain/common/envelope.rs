use serde::{Deserialize, Serialize};

/// Response wrapper: every backend response carries its payload under `data`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataEnvelope<T> {
    pub data: T,
}

/// Error body returned by the backend on rejected requests
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ApiErrorBody {
    pub message: Option<String>,
    pub error: Option<String>,
}

impl ApiErrorBody {
    /// Backend-provided message, preferring `message` over `error`
    pub fn into_message(self) -> Option<String> {
        self.message
            .or(self.error)
            .filter(|m| !m.trim().is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_body_prefers_message() {
        let body: ApiErrorBody =
            serde_json::from_str(r#"{"message":"Name taken","error":"Conflict"}"#).unwrap();
        assert_eq!(body.into_message().as_deref(), Some("Name taken"));

        let body: ApiErrorBody = serde_json::from_str(r#"{"error":"Conflict"}"#).unwrap();
        assert_eq!(body.into_message().as_deref(), Some("Conflict"));

        let body: ApiErrorBody = serde_json::from_str(r#"{"message":""}"#).unwrap();
        assert_eq!(body.into_message(), None);
    }
}
