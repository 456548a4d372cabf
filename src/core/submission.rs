//! Lead submission flow
//!
//! Ties validation, the outbound POST and the user-facing feedback
//! together. [`LeadForm`] is the form's state machine; the HTTP call sits
//! behind [`LeadTransport`] so the browser uses `fetch` while tests use an
//! in-memory fake.

use std::future::Future;

use chrono::NaiveDate;
use serde::Deserialize;

use super::lead::{FieldErrors, LeadField, LeadRequest};
use super::notice::Notice;

/// Lead collection endpoint used when none is configured
pub const DEFAULT_LEAD_ENDPOINT: &str = "https://whimsical-jelly-f75900.netlify.app/api/lead";

pub const SUCCESS_MESSAGE: &str = "Form submitted successfully!";
pub const REJECTED_MESSAGE: &str = "Failed to submit form";
pub const TRANSPORT_FAILURE_MESSAGE: &str = "Something went wrong. Please try again.";

/// Errors raised before a response is available
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum TransportError {
    #[error("Failed to encode request: {0}")]
    Encode(String),

    #[error("Network error: {0}")]
    Network(String),
}

/// Status and raw body of a completed HTTP exchange
#[derive(Debug, Clone, PartialEq)]
pub struct TransportResponse {
    pub status: u16,
    pub body: String,
}

impl TransportResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// Response whose body may not have been readable. The status alone
    /// still decides the outcome, so an unreadable body counts as empty.
    pub fn with_body<E>(status: u16, body: Result<String, E>) -> Self {
        Self {
            status,
            body: body.unwrap_or_default(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Sends a JSON document to an HTTP endpoint with a single POST
pub trait LeadTransport {
    /// POST `body` to `url` with `Content-Type: application/json`
    fn post_json(
        &self,
        url: &str,
        body: String,
    ) -> impl Future<Output = Result<TransportResponse, TransportError>>;
}

/// How a submission attempt ended
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    /// 2xx response
    Accepted,
    /// Non-2xx response; one message per field-level error the server
    /// reported, empty when the body had no usable error list
    Rejected { status: u16, messages: Vec<String> },
    /// The request never completed
    TransportFailed(TransportError),
}

#[derive(Debug, Deserialize)]
struct RejectionBody {
    errors: Vec<RejectionEntry>,
}

#[derive(Debug, Deserialize)]
struct RejectionEntry {
    message: Option<String>,
}

/// Pull `errors[].message` out of a rejection body. Anything that does not
/// match `{ "errors": [{ "message": "..." }] }` yields no messages.
pub fn rejection_messages(body: &str) -> Vec<String> {
    serde_json::from_str::<RejectionBody>(body)
        .map(|parsed| {
            parsed
                .errors
                .into_iter()
                .filter_map(|entry| entry.message)
                .filter(|message| !message.trim().is_empty())
                .collect()
        })
        .unwrap_or_default()
}

pub fn interpret_response(response: &TransportResponse) -> SubmitOutcome {
    if response.is_success() {
        SubmitOutcome::Accepted
    } else {
        SubmitOutcome::Rejected {
            status: response.status,
            messages: rejection_messages(&response.body),
        }
    }
}

/// Serialize and send a validated request, classifying the result
pub async fn send_lead<T: LeadTransport>(
    transport: &T,
    url: &str,
    request: &LeadRequest,
) -> SubmitOutcome {
    let body = match serde_json::to_string(request) {
        Ok(body) => body,
        Err(e) => return SubmitOutcome::TransportFailed(TransportError::Encode(e.to_string())),
    };

    match transport.post_json(url, body).await {
        Ok(response) => interpret_response(&response),
        Err(e) => SubmitOutcome::TransportFailed(e),
    }
}

/// Result of pressing the submit button
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitStart {
    /// Validation failed; hints are on the form, nothing is sent
    Blocked,
    /// A submission is already in flight
    Busy,
    /// Go ahead and send this snapshot of the form
    Ready(LeadRequest),
}

/// Quote form state: entered values, per-field hints and the in-flight flag
#[derive(Debug, Clone, PartialEq)]
pub struct LeadForm {
    request: LeadRequest,
    errors: FieldErrors,
    submitting: bool,
}

impl LeadForm {
    pub fn new(today: NaiveDate) -> Self {
        Self {
            request: LeadRequest::new(today),
            errors: FieldErrors::new(),
            submitting: false,
        }
    }

    pub fn request(&self) -> &LeadRequest {
        &self.request
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    /// User edited a field; its stale hint goes away
    pub fn set_field(&mut self, field: LeadField, value: String) {
        self.request.set_field(field, value);
        self.errors.clear(field);
    }

    /// Re-check one field (e.g. on blur) and update its hint
    pub fn check_field(&mut self, field: LeadField, today: NaiveDate) {
        match self.request.validate_field(field, today) {
            Ok(()) => self.errors.clear(field),
            Err(error) => self.errors.insert(field, error),
        }
    }

    /// Validate and, if everything passes, enter the submitting state
    pub fn begin_submit(&mut self, today: NaiveDate) -> SubmitStart {
        if self.submitting {
            return SubmitStart::Busy;
        }
        match self.request.validate(today) {
            Ok(()) => {
                self.errors = FieldErrors::new();
                self.submitting = true;
                SubmitStart::Ready(self.request.clone())
            }
            Err(errors) => {
                self.errors = errors;
                SubmitStart::Blocked
            }
        }
    }

    /// Leave the submitting state and produce the notices to show.
    /// Entered values survive every outcome except acceptance.
    pub fn finish_submit(&mut self, outcome: &SubmitOutcome, today: NaiveDate) -> Vec<Notice> {
        self.submitting = false;
        match outcome {
            SubmitOutcome::Accepted => {
                self.request = LeadRequest::new(today);
                self.errors = FieldErrors::new();
                vec![Notice::success(SUCCESS_MESSAGE)]
            }
            SubmitOutcome::Rejected { messages, .. } if !messages.is_empty() => {
                messages.iter().map(Notice::error).collect()
            }
            SubmitOutcome::Rejected { .. } => vec![Notice::error(REJECTED_MESSAGE)],
            SubmitOutcome::TransportFailed(_) => vec![Notice::error(TRANSPORT_FAILURE_MESSAGE)],
        }
    }

    /// Run the whole flow against a transport. Returns the outcome (if a
    /// request was sent) and the notices to display.
    pub async fn submit<T: LeadTransport>(
        &mut self,
        transport: &T,
        url: &str,
        today: NaiveDate,
    ) -> (Option<SubmitOutcome>, Vec<Notice>) {
        let SubmitStart::Ready(request) = self.begin_submit(today) else {
            return (None, Vec::new());
        };
        let outcome = send_lead(transport, url, &request).await;
        let notices = self.finish_submit(&outcome, today);
        (Some(outcome), notices)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::lead::FieldError;
    use crate::core::notice::NoticeKind;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 18).unwrap()
    }

    fn filled_form() -> LeadForm {
        let mut form = LeadForm::new(today());
        form.set_field(LeadField::Name, "Ravi Kumar".to_string());
        form.set_field(LeadField::Email, "ravi@example.com".to_string());
        form.set_field(LeadField::Phone, "9876543210".to_string());
        form.set_field(LeadField::MovingFrom, "Mumbai".to_string());
        form.set_field(LeadField::MovingTo, "Bangalore".to_string());
        form.set_field(LeadField::MovingDate, "2026-10-30".to_string());
        form
    }

    #[test]
    fn test_response_success_range() {
        assert!(TransportResponse::new(200, "").is_success());
        assert!(TransportResponse::new(204, "").is_success());
        assert!(!TransportResponse::new(199, "").is_success());
        assert!(!TransportResponse::new(302, "").is_success());
        assert!(!TransportResponse::new(400, "").is_success());
        assert!(!TransportResponse::new(503, "").is_success());
    }

    #[test]
    fn test_unreadable_body_is_classified_by_status() {
        let accepted = TransportResponse::with_body(200, Err::<String, _>("stream closed"));
        assert_eq!(accepted.body, "");
        assert_eq!(interpret_response(&accepted), SubmitOutcome::Accepted);

        let rejected = TransportResponse::with_body(500, Err::<String, _>("stream closed"));
        assert_eq!(
            interpret_response(&rejected),
            SubmitOutcome::Rejected {
                status: 500,
                messages: Vec::new()
            }
        );

        let read = TransportResponse::with_body(201, Ok::<_, ()>("ok".to_string()));
        assert_eq!(read.body, "ok");
    }

    #[test]
    fn test_accepted_with_unreadable_body_resets_form() {
        let mut form = filled_form();
        assert!(matches!(form.begin_submit(today()), SubmitStart::Ready(_)));

        let response = TransportResponse::with_body(200, Err::<String, _>("aborted"));
        let notices = form.finish_submit(&interpret_response(&response), today());

        assert_eq!(notices, vec![Notice::success(SUCCESS_MESSAGE)]);
        assert_eq!(form.request(), &LeadRequest::new(today()));
        assert!(!form.is_submitting());
    }

    #[test]
    fn test_rejection_messages_structured() {
        let body = r#"{"errors":[{"message":"Phone already used"},{"message":"Email blocked"}]}"#;
        assert_eq!(
            rejection_messages(body),
            vec!["Phone already used".to_string(), "Email blocked".to_string()]
        );
    }

    #[test]
    fn test_rejection_messages_unstructured() {
        assert!(rejection_messages("").is_empty());
        assert!(rejection_messages("<html>502 Bad Gateway</html>").is_empty());
        assert!(rejection_messages(r#"{"error":"nope"}"#).is_empty());
        assert!(rejection_messages(r#"{"errors":"nope"}"#).is_empty());
        assert!(rejection_messages(r#"{"errors":[]}"#).is_empty());
    }

    #[test]
    fn test_rejection_messages_skip_unusable_entries() {
        let body = r#"{"errors":[{"field":"phone"},{"message":""},{"message":"Bad date"}]}"#;
        assert_eq!(rejection_messages(body), vec!["Bad date".to_string()]);
    }

    #[test]
    fn test_interpret_response() {
        assert_eq!(
            interpret_response(&TransportResponse::new(201, "{}")),
            SubmitOutcome::Accepted
        );
        assert_eq!(
            interpret_response(&TransportResponse::new(500, "oops")),
            SubmitOutcome::Rejected {
                status: 500,
                messages: Vec::new()
            }
        );
    }

    #[test]
    fn test_begin_submit_blocks_invalid_form() {
        let mut form = filled_form();
        form.set_field(LeadField::Email, "not-an-email".to_string());
        assert_eq!(form.begin_submit(today()), SubmitStart::Blocked);
        assert!(!form.is_submitting());
        assert_eq!(
            form.errors().get(LeadField::Email),
            Some(FieldError::InvalidEmail)
        );
    }

    #[test]
    fn test_begin_submit_rejects_duplicate() {
        let mut form = filled_form();
        assert!(matches!(form.begin_submit(today()), SubmitStart::Ready(_)));
        assert!(form.is_submitting());
        assert_eq!(form.begin_submit(today()), SubmitStart::Busy);
    }

    #[test]
    fn test_set_field_clears_hint() {
        let mut form = LeadForm::new(today());
        assert_eq!(form.begin_submit(today()), SubmitStart::Blocked);
        assert!(form.errors().get(LeadField::Name).is_some());
        form.set_field(LeadField::Name, "R".to_string());
        assert!(form.errors().get(LeadField::Name).is_none());
        assert!(form.errors().get(LeadField::Phone).is_some());
    }

    #[test]
    fn test_check_field() {
        let mut form = LeadForm::new(today());
        form.set_field(LeadField::Phone, "12ab".to_string());
        form.check_field(LeadField::Phone, today());
        assert_eq!(
            form.errors().message(LeadField::Phone).as_deref(),
            Some("Phone must be 10 digits")
        );
        form.set_field(LeadField::Phone, "9876543210".to_string());
        form.check_field(LeadField::Phone, today());
        assert!(form.errors().get(LeadField::Phone).is_none());
    }

    #[test]
    fn test_finish_submit_always_clears_submitting() {
        let outcomes = [
            SubmitOutcome::Accepted,
            SubmitOutcome::Rejected {
                status: 400,
                messages: vec!["x".to_string()],
            },
            SubmitOutcome::Rejected {
                status: 500,
                messages: Vec::new(),
            },
            SubmitOutcome::TransportFailed(TransportError::Network("offline".to_string())),
        ];
        for outcome in outcomes {
            let mut form = filled_form();
            assert!(matches!(form.begin_submit(today()), SubmitStart::Ready(_)));
            form.finish_submit(&outcome, today());
            assert!(!form.is_submitting(), "stuck submitting after {outcome:?}");
        }
    }

    #[test]
    fn test_finish_submit_accepted_resets_form() {
        let mut form = filled_form();
        form.begin_submit(today());
        let notices = form.finish_submit(&SubmitOutcome::Accepted, today());
        assert_eq!(notices, vec![Notice::success(SUCCESS_MESSAGE)]);
        assert_eq!(form.request(), &LeadRequest::new(today()));
    }

    #[test]
    fn test_finish_submit_rejected_keeps_values() {
        let mut form = filled_form();
        let before = form.request().clone();
        form.begin_submit(today());
        let notices = form.finish_submit(
            &SubmitOutcome::Rejected {
                status: 422,
                messages: vec!["Phone already used".to_string(), "Too far".to_string()],
            },
            today(),
        );
        assert_eq!(notices.len(), 2);
        assert!(notices.iter().all(|n| n.kind == NoticeKind::Error));
        assert_eq!(notices[0].message, "Phone already used");
        assert_eq!(form.request(), &before);
    }

    #[test]
    fn test_finish_submit_generic_messages() {
        let mut form = filled_form();
        form.begin_submit(today());
        let notices = form.finish_submit(
            &SubmitOutcome::Rejected {
                status: 500,
                messages: Vec::new(),
            },
            today(),
        );
        assert_eq!(notices, vec![Notice::error(REJECTED_MESSAGE)]);

        form.begin_submit(today());
        let notices = form.finish_submit(
            &SubmitOutcome::TransportFailed(TransportError::Network("dns".to_string())),
            today(),
        );
        assert_eq!(notices, vec![Notice::error(TRANSPORT_FAILURE_MESSAGE)]);
        assert_eq!(form.request().name, "Ravi Kumar");
    }

    #[test]
    fn test_transport_error_display() {
        assert_eq!(
            TransportError::Network("timed out".to_string()).to_string(),
            "Network error: timed out"
        );
    }
}
