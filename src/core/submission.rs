//! Contact form submission lifecycle.
//!
//! [`ContactForm`] owns the field values, the "not a robot" acknowledgment and
//! the last submission status. A submission is split into [`ContactForm::begin_submit`]
//! and [`ContactForm::resolve`] so that reactive callers can release the form
//! state while the request is in flight; [`ContactForm::submit`] chains both
//! around a [`ContactTransport`].

use serde::Deserialize;

use super::form::{FormData, FormField};
use super::i18n::Translations;

/// Relative path of the mail-sending endpoint
pub const SEND_EMAIL_ENDPOINT: &str = "/api/send-email";

/// Lifecycle phase of the form
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Phase {
    #[default]
    Idle,
    Submitting,
    Resolved,
}

/// Why a submission failed, resolved to text at display time
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ErrorNotice {
    /// Message supplied by the endpoint, shown verbatim
    Server(String),
    /// Non-success response without a usable message
    Generic,
    /// The request never completed
    Connection,
}

/// Result of the last submission attempt
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SubmissionStatus {
    #[default]
    None,
    Success,
    Error(ErrorNotice),
}

impl SubmissionStatus {
    /// Text to show for this status in the given language, `None` when nothing is shown
    pub fn message(&self, t: &Translations) -> Option<String> {
        match self {
            SubmissionStatus::None => None,
            SubmissionStatus::Success => Some(t.success_message.to_string()),
            SubmissionStatus::Error(ErrorNotice::Server(msg)) => Some(msg.clone()),
            SubmissionStatus::Error(ErrorNotice::Generic) => Some(t.error_message.to_string()),
            SubmissionStatus::Error(ErrorNotice::Connection) => {
                Some(t.connection_error.to_string())
            }
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, SubmissionStatus::Success)
    }

    pub fn is_error(&self) -> bool {
        matches!(self, SubmissionStatus::Error(_))
    }
}

/// Failure to complete a request
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TransportError {
    #[error("Request failed: {0}")]
    Request(String),

    #[error("No transport available in this build")]
    Unavailable,
}

/// Submission errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SubmissionError {
    #[error("Acknowledgment checkbox is not checked")]
    GuardRejection,

    #[error("A submission is already in progress")]
    InFlight,

    #[error("No submission is in progress")]
    NotSubmitting,

    #[error("Endpoint rejected the submission with status {status}")]
    ServerRejection {
        status: u16,
        message: Option<String>,
    },

    #[error(transparent)]
    Transport(#[from] TransportError),
}

/// What the endpoint answered
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EndpointResponse {
    pub status: u16,
    /// Optional `error` field of the JSON body
    pub error: Option<String>,
}

impl EndpointResponse {
    pub fn new(status: u16) -> Self {
        Self {
            status,
            error: None,
        }
    }

    pub fn with_error(status: u16, error: impl Into<String>) -> Self {
        Self {
            status,
            error: Some(error.into()),
        }
    }

    /// Same rule as `fetch`'s `Response.ok`
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Error body returned by the endpoint
#[derive(Debug, Default, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub error: Option<String>,
}

impl ErrorBody {
    /// Parse a response body; anything unparseable counts as "no message"
    pub fn parse(body: &str) -> Self {
        serde_json::from_str(body).unwrap_or_default()
    }
}

/// Sends a filled-in form to the mail endpoint.
///
/// Implementations issue exactly one request per call and never retry.
#[allow(async_fn_in_trait)]
pub trait ContactTransport {
    async fn send(&self, payload: &FormData) -> Result<EndpointResponse, TransportError>;
}

/// Browser transport posting JSON with `fetch`
#[derive(Debug, Clone, Copy)]
pub struct FetchTransport {
    endpoint: &'static str,
}

impl FetchTransport {
    pub fn new(endpoint: &'static str) -> Self {
        Self { endpoint }
    }
}

impl Default for FetchTransport {
    fn default() -> Self {
        Self::new(SEND_EMAIL_ENDPOINT)
    }
}

impl ContactTransport for FetchTransport {
    #[cfg(not(feature = "ssr"))]
    async fn send(&self, payload: &FormData) -> Result<EndpointResponse, TransportError> {
        use gloo_net::http::Request;

        let request = Request::post(self.endpoint)
            .header("Content-Type", "application/json")
            .json(payload)
            .map_err(|e| TransportError::Request(e.to_string()))?;

        let response = request
            .send()
            .await
            .map_err(|e| TransportError::Request(e.to_string()))?;

        let status = response.status();
        if response.ok() {
            return Ok(EndpointResponse::new(status));
        }

        // The error body is optional; an unreadable one falls back to the generic message
        let error = match response.text().await {
            Ok(body) => ErrorBody::parse(&body).error,
            Err(_) => None,
        };

        Ok(EndpointResponse { status, error })
    }

    #[cfg(feature = "ssr")]
    async fn send(&self, _payload: &FormData) -> Result<EndpointResponse, TransportError> {
        let _ = self.endpoint;
        Err(TransportError::Unavailable)
    }
}

/// Form state and submission state machine
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub data: FormData,
    pub acknowledged: bool,
    pub phase: Phase,
    pub status: SubmissionStatus,
}

impl ContactForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_submitting(&self) -> bool {
        self.phase == Phase::Submitting
    }

    /// Apply an input event for the field with HTML name `name`.
    ///
    /// Returns `false` when the change was ignored: unknown field, or a submission is running.
    pub fn handle_change(&mut self, name: &str, raw: &str) -> bool {
        if self.is_submitting() {
            return false;
        }
        match FormField::from_name(name) {
            Some(field) => {
                self.data.apply_change(field, raw);
                true
            }
            None => false,
        }
    }

    /// Update the acknowledgment checkbox; ignored while submitting
    pub fn set_acknowledged(&mut self, checked: bool) -> bool {
        if self.is_submitting() {
            return false;
        }
        self.acknowledged = checked;
        true
    }

    /// Start a submission and return the payload to send.
    ///
    /// Rejects without touching any state when the acknowledgment is unset or
    /// a submission is already running.
    pub fn begin_submit(&mut self) -> Result<FormData, SubmissionError> {
        if self.is_submitting() {
            return Err(SubmissionError::InFlight);
        }
        if !self.acknowledged {
            return Err(SubmissionError::GuardRejection);
        }

        self.status = SubmissionStatus::None;
        self.phase = Phase::Submitting;
        Ok(self.data.clone())
    }

    /// Apply the outcome of the request started by [`begin_submit`](Self::begin_submit).
    ///
    /// Field values and the acknowledgment are only cleared on success, so a
    /// failed attempt can be retried as is. Outside of `Submitting` the
    /// outcome is discarded and nothing changes.
    pub fn resolve(
        &mut self,
        outcome: Result<EndpointResponse, TransportError>,
    ) -> Result<(), SubmissionError> {
        if !self.is_submitting() {
            return Err(SubmissionError::NotSubmitting);
        }
        self.phase = Phase::Resolved;

        match outcome {
            Ok(response) if response.is_success() => {
                self.status = SubmissionStatus::Success;
                self.data.clear();
                self.acknowledged = false;
                Ok(())
            }
            Ok(response) => {
                let message = response.error.filter(|msg| !msg.is_empty());
                self.status = SubmissionStatus::Error(match &message {
                    Some(msg) => ErrorNotice::Server(msg.clone()),
                    None => ErrorNotice::Generic,
                });
                Err(SubmissionError::ServerRejection {
                    status: response.status,
                    message,
                })
            }
            Err(e) => {
                self.status = SubmissionStatus::Error(ErrorNotice::Connection);
                Err(SubmissionError::Transport(e))
            }
        }
    }

    /// Run a whole submission against `transport`
    pub async fn submit<T: ContactTransport>(
        &mut self,
        transport: &T,
    ) -> Result<(), SubmissionError> {
        let payload = self.begin_submit()?;
        let outcome = transport.send(&payload).await;
        self.resolve(outcome)
    }
}
