//! Wire response helper.
//!
//! Success responses carry the raw data payload; error responses (and bare
//! acknowledgements) carry a `{"message": string}` body.

use serde::{Deserialize, Serialize};

/// The `{"message"}` wire body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageBody {
    pub message: String,
}

impl MessageBody {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    // Canonical bodies per status category.
    pub fn bad_request() -> Self {
        Self::new("Bad Request")
    }

    pub fn unauthorized() -> Self {
        Self::new("Unauthorized")
    }

    pub fn forbidden() -> Self {
        Self::new("Forbidden")
    }

    pub fn not_found() -> Self {
        Self::new("Not Found")
    }

    pub fn internal_error() -> Self {
        Self::new("Internal Server Error")
    }
}
