//! From trait implementations for BhashaError conversions

use super::types::BhashaError;

impl From<std::io::Error> for BhashaError {
    fn from(error: std::io::Error) -> Self {
        Self::io(error.to_string())
    }
}

impl From<serde_json::Error> for BhashaError {
    fn from(error: serde_json::Error) -> Self {
        Self::json(error.to_string())
    }
}

impl From<reqwest::Error> for BhashaError {
    fn from(error: reqwest::Error) -> Self {
        // The request URL carries the credential as a query parameter
        let error = error.without_url();
        match error.status() {
            Some(status) => Self::from_status(status.as_u16(), error.to_string()),
            None => Self::network(error.to_string()),
        }
    }
}
