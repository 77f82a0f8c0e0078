//! User-visible messages (errors surfaced from failed operations).
//!
//! A [`UiMessageManager`] is shared by reference between screens. It owns the
//! pending queue and shows one message at a time; screens only mirror the
//! currently visible message into their state.

mod manager;

pub use manager::{MessageSubscription, UiMessageManager, HANDOFF_GAP};

use serde::Serialize;
use uuid::Uuid;

use crate::error::OperationError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UiMessage {
    pub id: Uuid,
    pub message: String,
    /// Operation that produced the message, if any.
    pub source: Option<String>,
}

impl UiMessage {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            message: message.into(),
            source: None,
        }
    }

    pub fn from_error(operation: &str, error: &OperationError) -> Self {
        Self {
            id: Uuid::new_v4(),
            message: error.to_string(),
            source: Some(operation.to_string()),
        }
    }
}
