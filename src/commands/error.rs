//! Host Command Errors

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum NuiError {
    #[error("NUI {name} payload could not be encoded: {reason}")]
    Encode { name: String, reason: String },

    #[error("NUI {name} request failed: {reason}")]
    Transport { name: String, reason: String },

    #[error("NUI {name} failed: {status} {body}")]
    Status { name: String, status: u16, body: String },

    #[error("NUI {name} reply did not match the expected shape: {reason}")]
    Decode { name: String, reason: String },
}

impl NuiError {
    pub fn transport(name: &str, reason: impl Into<String>) -> Self {
        Self::Transport {
            name: name.to_string(),
            reason: reason.into(),
        }
    }
}
