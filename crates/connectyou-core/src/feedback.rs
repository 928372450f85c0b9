//! Feedback submission payload and the backend acknowledgement.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::CoreError;

pub const MIN_RATING: u8 = 1;
pub const MAX_RATING: u8 = 5;

/// Body of `POST /feedback`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedbackPayload {
    pub rating: u8,
    pub comment: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub store_id: Option<i64>,
}

impl FeedbackPayload {
    /// Builds and validates a payload.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::InvalidFeedback`] when the rating is outside
    /// 1..=5 or the comment is blank.
    pub fn new(
        rating: u8,
        comment: impl Into<String>,
        store_id: Option<i64>,
    ) -> Result<Self, CoreError> {
        let payload = Self {
            rating,
            comment: comment.into(),
            store_id,
        };
        payload.validate()?;
        Ok(payload)
    }

    /// # Errors
    ///
    /// Returns [`CoreError::InvalidFeedback`] describing the first problem found.
    pub fn validate(&self) -> Result<(), CoreError> {
        if !(MIN_RATING..=MAX_RATING).contains(&self.rating) {
            return Err(CoreError::InvalidFeedback(format!(
                "rating must be between {MIN_RATING} and {MAX_RATING}, got {}",
                self.rating
            )));
        }
        if self.comment.trim().is_empty() {
            return Err(CoreError::InvalidFeedback("comment must not be empty".into()));
        }
        Ok(())
    }
}

/// Acknowledgement returned by the backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedbackReceipt {
    pub message: String,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub timestamp: Option<NaiveDateTime>,
}
