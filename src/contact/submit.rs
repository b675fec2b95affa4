use serde::Deserialize;
use thiserror::Error;

use super::form::{ContactSubmission, ValidationError};
use crate::config;

pub const DEFAULT_SUCCESS: &str = "Thank you for contacting us! We will get back to you within 24 hours.";
pub const DEFAULT_FAILURE: &str = "Something went wrong. Please try again.";

/// What the endpoint answers, whatever the HTTP status.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ContactResponse {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
}

/// The request never produced a readable answer.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{0}")]
pub struct TransportError(pub String);

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitError {
    #[error(transparent)]
    Invalid(#[from] ValidationError),
    #[error("Network error. Please check your connection and try again.")]
    Network(#[from] TransportError),
    #[error("{0}")]
    Rejected(String),
}

/// Sends a validated submission somewhere. The browser implementation lives
/// in `components::contact_form`; tests plug in a mock.
pub trait ContactTransport {
    async fn post(
        &self,
        submission: &ContactSubmission,
        csrf_token: Option<&str>,
    ) -> Result<ContactResponse, TransportError>;
}

/// Validates, posts and interprets the answer. Returns the success text to
/// show. Nothing is sent when validation fails.
pub async fn submit<T: ContactTransport>(
    transport: &T,
    submission: &ContactSubmission,
    csrf_token: Option<&str>,
) -> Result<String, SubmitError> {
    submission.validate()?;

    let response = transport.post(submission, csrf_token).await?;
    let message = response.message.filter(|m| !m.is_empty());
    if response.success {
        Ok(message.unwrap_or_else(|| DEFAULT_SUCCESS.to_string()))
    } else {
        Err(SubmitError::Rejected(
            message.unwrap_or_else(|| DEFAULT_FAILURE.to_string()),
        ))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormMessage {
    pub kind: MessageKind,
    pub text: String,
    /// Success messages go away on their own; errors stay until the next submit.
    pub hide_after_ms: Option<u32>,
}

impl FormMessage {
    pub fn from_result(result: &Result<String, SubmitError>) -> Self {
        match result {
            Ok(text) => Self {
                kind: MessageKind::Success,
                text: text.clone(),
                hide_after_ms: Some(config::SUCCESS_MESSAGE_MS),
            },
            Err(err) => Self {
                kind: MessageKind::Error,
                text: err.to_string(),
                hide_after_ms: None,
            },
        }
    }

    pub fn class(&self) -> &'static str {
        match self.kind {
            MessageKind::Success => "form-message success",
            MessageKind::Error => "form-message error",
        }
    }
}

/// The single message area under the form.
///
/// Every `show` carries a ticket; a delayed `expire` only clears the message
/// it was scheduled for, so an old timer cannot hide a newer message.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MessageSlot {
    ticket: u32,
    message: Option<FormMessage>,
}

impl MessageSlot {
    pub fn show(&mut self, message: FormMessage, ticket: u32) {
        self.ticket = ticket;
        self.message = Some(message);
    }

    pub fn expire(&mut self, ticket: u32) {
        if self.ticket == ticket {
            self.message = None;
        }
    }

    pub fn current(&self) -> Option<&FormMessage> {
        self.message.as_ref()
    }
}

/// What the form does once an answer is in. Only a success clears the
/// fields; on any error the user keeps what they typed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitOutcome {
    pub clear_fields: bool,
    pub message: FormMessage,
}

impl SubmitOutcome {
    pub fn from_result(result: &Result<String, SubmitError>) -> Self {
        Self {
            clear_fields: result.is_ok(),
            message: FormMessage::from_result(result),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use pretty_assertions::assert_eq;
    use std::cell::{Cell, RefCell};

    struct MockEndpoint {
        reply: Result<ContactResponse, TransportError>,
        calls: Cell<u32>,
        last_token: RefCell<Option<String>>,
    }

    impl MockEndpoint {
        fn replying(reply: Result<ContactResponse, TransportError>) -> Self {
            Self {
                reply,
                calls: Cell::new(0),
                last_token: RefCell::new(None),
            }
        }
    }

    impl ContactTransport for MockEndpoint {
        async fn post(
            &self,
            _submission: &ContactSubmission,
            csrf_token: Option<&str>,
        ) -> Result<ContactResponse, TransportError> {
            self.calls.set(self.calls.get() + 1);
            *self.last_token.borrow_mut() = csrf_token.map(str::to_string);
            self.reply.clone()
        }
    }

    fn ok(message: &str) -> Result<ContactResponse, TransportError> {
        Ok(ContactResponse {
            success: true,
            message: Some(message.to_string()),
        })
    }

    fn valid() -> ContactSubmission {
        ContactSubmission {
            name: "Alfred".into(),
            email: "alfred@example.com".into(),
            phone: "+971501234567".into(),
            service: "hydraulic".into(),
            message: "Quote please".into(),
        }
    }

    #[test]
    fn empty_message_never_hits_the_network() {
        let endpoint = MockEndpoint::replying(ok("ok"));
        let mut form = valid();
        form.message.clear();

        let result = block_on(submit(&endpoint, &form, Some("tok")));
        assert_eq!(result, Err(SubmitError::Invalid(ValidationError::MissingRequired)));
        assert_eq!(endpoint.calls.get(), 0);
        assert_eq!(FormMessage::from_result(&result).text, "Please fill in all required fields.");
    }

    #[test]
    fn malformed_email_never_hits_the_network() {
        let endpoint = MockEndpoint::replying(ok("ok"));
        let mut form = valid();
        form.email = "not-an-email".into();

        let result = block_on(submit(&endpoint, &form, None));
        assert_eq!(endpoint.calls.get(), 0);
        let message = FormMessage::from_result(&result);
        assert_eq!(message.kind, MessageKind::Error);
        assert_eq!(message.text, "Please enter a valid email address.");
    }

    #[test]
    fn success_shows_server_text_then_hides_after_five_seconds() {
        let endpoint = MockEndpoint::replying(ok("ok"));
        let result = block_on(submit(&endpoint, &valid(), Some("abc123")));
        assert_eq!(result, Ok("ok".to_string()));
        assert_eq!(endpoint.calls.get(), 1);
        assert_eq!(endpoint.last_token.borrow().as_deref(), Some("abc123"));

        let message = FormMessage::from_result(&result);
        assert_eq!(message.class(), "form-message success");
        assert_eq!(message.hide_after_ms, Some(5000));

        let mut slot = MessageSlot::default();
        slot.show(message, 1);
        assert_eq!(slot.current().map(|m| m.text.as_str()), Some("ok"));
        slot.expire(1);
        assert_eq!(slot.current(), None);
    }

    #[test]
    fn success_clears_the_form_and_schedules_the_hide() {
        let endpoint = MockEndpoint::replying(ok("ok"));
        let result = block_on(submit(&endpoint, &valid(), None));
        assert_eq!(
            SubmitOutcome::from_result(&result),
            SubmitOutcome {
                clear_fields: true,
                message: FormMessage {
                    kind: MessageKind::Success,
                    text: "ok".into(),
                    hide_after_ms: Some(5000),
                },
            }
        );
    }

    #[test]
    fn failures_keep_what_was_typed() {
        let rejected = MockEndpoint::replying(Ok(ContactResponse {
            success: false,
            message: None,
        }));
        let outcome = SubmitOutcome::from_result(&block_on(submit(&rejected, &valid(), None)));
        assert!(!outcome.clear_fields);
        assert_eq!(outcome.message.hide_after_ms, None);

        let offline = MockEndpoint::replying(Err(TransportError("offline".into())));
        let outcome = SubmitOutcome::from_result(&block_on(submit(&offline, &valid(), None)));
        assert!(!outcome.clear_fields);
        assert_eq!(outcome.message.kind, MessageKind::Error);
    }

    #[test]
    fn success_without_text_uses_the_default() {
        let endpoint = MockEndpoint::replying(Ok(ContactResponse {
            success: true,
            message: None,
        }));
        assert_eq!(block_on(submit(&endpoint, &valid(), None)), Ok(DEFAULT_SUCCESS.to_string()));
    }

    #[test]
    fn server_rejection_is_shown_verbatim_and_sticks() {
        let endpoint = MockEndpoint::replying(Ok(ContactResponse {
            success: false,
            message: Some("Please fill in all required fields correctly.".into()),
        }));
        let result = block_on(submit(&endpoint, &valid(), None));
        let message = FormMessage::from_result(&result);
        assert_eq!(message.text, "Please fill in all required fields correctly.");
        assert_eq!(message.hide_after_ms, None);

        let silent = MockEndpoint::replying(Ok(ContactResponse {
            success: false,
            message: None,
        }));
        let result = block_on(submit(&silent, &valid(), None));
        assert_eq!(FormMessage::from_result(&result).text, DEFAULT_FAILURE);
    }

    #[test]
    fn transport_failure_gives_the_generic_network_message() {
        let endpoint = MockEndpoint::replying(Err(TransportError("connection refused".into())));
        let result = block_on(submit(&endpoint, &valid(), None));
        assert_eq!(
            FormMessage::from_result(&result).text,
            "Network error. Please check your connection and try again."
        );
    }

    #[test]
    fn stale_expiry_does_not_hide_a_newer_message() {
        let mut slot = MessageSlot::default();
        slot.show(FormMessage::from_result(&Ok("sent".into())), 1);
        slot.show(
            FormMessage::from_result(&Err(SubmitError::Rejected("nope".into()))),
            2,
        );
        slot.expire(1);
        assert_eq!(slot.current().map(|m| m.text.as_str()), Some("nope"));
    }

    #[test]
    fn response_parses_with_or_without_message() {
        let full: ContactResponse = serde_json::from_str(r#"{"success":true,"message":"ok"}"#).unwrap();
        assert_eq!(full.message.as_deref(), Some("ok"));
        let bare: ContactResponse =
            serde_json::from_str(r#"{"success":false,"errors":{"email":["bad"]}}"#).unwrap();
        assert!(!bare.success);
        assert_eq!(bare.message, None);
    }
}
