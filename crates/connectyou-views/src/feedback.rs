//! Feedback form state machine.

use connectyou_client::{GatewayError, StoreApiClient};
use connectyou_core::{CoreError, FeedbackPayload, FeedbackReceipt, MAX_RATING, MIN_RATING};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FeedbackState {
    /// `problem` holds the last validation failure, if any.
    Editing { problem: Option<String> },
    Submitting,
    Submitted { message: String },
    Failed { message: String },
}

/// Draft plus submission state. The draft survives a failed submission.
#[derive(Debug, Clone)]
pub struct FeedbackForm {
    rating: u8,
    comment: String,
    store_id: Option<i64>,
    state: FeedbackState,
}

impl Default for FeedbackForm {
    fn default() -> Self {
        Self::new()
    }
}

impl FeedbackForm {
    #[must_use]
    pub fn new() -> Self {
        Self {
            rating: MAX_RATING,
            comment: String::new(),
            store_id: None,
            state: FeedbackState::Editing { problem: None },
        }
    }

    pub fn set_rating(&mut self, rating: u8) {
        self.rating = rating;
    }

    pub fn set_comment(&mut self, comment: impl Into<String>) {
        self.comment = comment.into();
    }

    pub fn set_store(&mut self, store_id: Option<i64>) {
        self.store_id = store_id;
    }

    #[must_use]
    pub fn state(&self) -> &FeedbackState {
        &self.state
    }

    #[must_use]
    pub fn comment(&self) -> &str {
        &self.comment
    }

    #[must_use]
    pub fn rating(&self) -> u8 {
        self.rating
    }

    /// Validates the draft and moves to `Submitting`.
    ///
    /// # Errors
    ///
    /// Returns the validation error and stays in `Editing` when the draft is
    /// invalid or the form is not currently being edited.
    pub fn begin_submit(&mut self) -> Result<FeedbackPayload, CoreError> {
        if !matches!(self.state, FeedbackState::Editing { .. }) {
            return Err(CoreError::InvalidFeedback(
                "form is not accepting a submission right now".into(),
            ));
        }
        match FeedbackPayload::new(self.rating, self.comment.trim(), self.store_id) {
            Ok(payload) => {
                self.state = FeedbackState::Submitting;
                Ok(payload)
            }
            Err(e) => {
                self.state = FeedbackState::Editing {
                    problem: Some(e.to_string()),
                };
                Err(e)
            }
        }
    }

    pub fn finish_submit(&mut self, result: Result<FeedbackReceipt, GatewayError>) {
        self.state = match result {
            Ok(receipt) => {
                tracing::info!(status = ?receipt.status, "feedback accepted");
                FeedbackState::Submitted {
                    message: receipt.message,
                }
            }
            Err(e) => {
                tracing::warn!(error = %e, "feedback submission failed");
                FeedbackState::Failed {
                    message: e.to_string(),
                }
            }
        };
    }

    /// Runs one submission through `client`.
    pub async fn submit(&mut self, client: &StoreApiClient) -> &FeedbackState {
        if let Ok(payload) = self.begin_submit() {
            let result = client.submit_feedback(&payload).await;
            self.finish_submit(result);
        }
        &self.state
    }

    /// Returns a failed form to `Editing`, keeping the draft.
    pub fn retry(&mut self) -> bool {
        if matches!(self.state, FeedbackState::Failed { .. }) {
            self.state = FeedbackState::Editing { problem: None };
            true
        } else {
            false
        }
    }

    /// Clears the draft for a new entry.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    #[must_use]
    pub fn render(&self) -> String {
        let stars = "\u{2b50}".repeat(usize::from(self.rating.min(MAX_RATING)));
        let mut out = format!(
            "Customer Support & Feedback\n\n  Rating ({MIN_RATING}-{MAX_RATING}): {} {stars}\n  Comment: {}\n",
            self.rating, self.comment
        );
        if let Some(id) = self.store_id {
            out.push_str(&format!("  Store: #{id}\n"));
        }
        out.push('\n');
        match &self.state {
            FeedbackState::Editing { problem: None } => out.push_str("[ Submit Feedback ]\n"),
            FeedbackState::Editing {
                problem: Some(problem),
            } => {
                out.push_str(&format!("{problem}\n[ Submit Feedback ]\n"));
            }
            FeedbackState::Submitting => out.push_str("Submitting\u{2026}\n"),
            FeedbackState::Submitted { message } => {
                out.push_str(&format!("\u{2714} {message}\n"));
            }
            FeedbackState::Failed { message } => {
                out.push_str(&format!("\u{2718} {message}\nRetry to edit and send again.\n"));
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;

    #[test]
    fn blank_comment_stays_editing_with_problem() {
        let mut form = FeedbackForm::new();
        form.set_comment("   ");
        assert!(form.begin_submit().is_err());
        assert!(matches!(
            form.state(),
            FeedbackState::Editing { problem: Some(p) } if p.contains("comment")
        ));
    }

    #[test]
    fn out_of_range_rating_is_rejected() {
        let mut form = FeedbackForm::new();
        form.set_comment("ok");
        form.set_rating(0);
        assert!(form.begin_submit().is_err());
        form.set_rating(6);
        assert!(form.begin_submit().is_err());
    }

    #[test]
    fn failure_then_retry_keeps_draft() {
        let mut form = FeedbackForm::new();
        form.set_rating(3);
        form.set_comment("Slow checkout");
        form.begin_submit().unwrap();
        assert_eq!(form.state(), &FeedbackState::Submitting);

        // A second submit while one is in flight is refused.
        assert!(form.begin_submit().is_err());

        form.finish_submit(Err(GatewayError::Status {
            status: 500,
            message: "Failed to submit feedback".into(),
        }));
        assert!(form.render().contains("Failed to submit feedback"));

        assert!(form.retry());
        assert_eq!(form.state(), &FeedbackState::Editing { problem: None });
        assert_eq!(form.comment(), "Slow checkout");
        assert_eq!(form.rating(), 3);
        assert!(!form.retry(), "retry only applies to a failed form");
    }

    #[test]
    fn reset_clears_draft() {
        let mut form = FeedbackForm::new();
        form.set_comment("hi");
        form.set_store(Some(2));
        form.reset();
        assert_eq!(form.comment(), "");
        assert!(!form.render().contains("Store: #"));
    }

    #[tokio::test]
    async fn submit_posts_payload_and_shows_receipt() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/feedback"))
            .and(body_json(json!({"rating": 4, "comment": "Great selection", "storeId": 2})))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "message": "Feedback submitted successfully",
                "status": "success"
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = StoreApiClient::with_base_url(&server.uri(), None, "test").unwrap();
        let mut form = FeedbackForm::new();
        form.set_rating(4);
        form.set_comment("  Great selection ");
        form.set_store(Some(2));

        let state = form.submit(&client).await.clone();
        assert_eq!(
            state,
            FeedbackState::Submitted {
                message: "Feedback submitted successfully".into()
            }
        );
    }

    #[tokio::test]
    async fn invalid_draft_never_reaches_server() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;

        let client = StoreApiClient::with_base_url(&server.uri(), None, "test").unwrap();
        let mut form = FeedbackForm::new();
        let state = form.submit(&client).await;
        assert!(matches!(state, FeedbackState::Editing { problem: Some(_) }));
    }
}
