//! The `{ "message": ... }` body used for every non-resource response.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn internal_error() -> Self {
        Self::new("Internal server error")
    }

    pub fn delete_failed() -> Self {
        Self::new("Failed to delete")
    }

    pub fn deleted() -> Self {
        Self::new("Deleted as requested")
    }

    pub fn not_found() -> Self {
        Self::new("Entry Not Found")
    }
}
