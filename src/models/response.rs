//! Common API response envelope

use chrono::Utc;
use serde::Serialize;

/// Uniform API response wrapper.
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    /// Whether the request succeeded
    pub success: bool,
    /// Response payload (present on success)
    pub data: Option<T>,
    /// Human-readable status message
    pub message: String,
    /// Response timestamp (RFC 3339, UTC)
    pub timestamp: String,
}

impl<T> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            message: "Success".to_string(),
            timestamp: Utc::now().to_rfc3339(),
        }
    }

    pub fn error(message: String) -> Self {
        Self {
            success: false,
            data: None,
            message,
            timestamp: Utc::now().to_rfc3339(),
        }
    }
}
