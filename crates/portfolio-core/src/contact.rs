//! Contact form pipeline: validation, then delivery to the third-party
//! form endpoint.
//!
//! Validation always runs client-side first; an invalid message is never
//! sent. Delivery goes through the [`FormTransport`] seam so the desktop
//! shell can use the real HTTP transport while tests use a recording fake.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::PortfolioError;

/// An outbound contact-form submission.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

/// One validation or endpoint failure for a single field.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

/// Field-level errors, in field declaration order.
///
/// The UI surfaces a single representative error: the first one.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FieldErrors {
    errors: Vec<FieldError>,
}

impl FieldErrors {
    pub fn push(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.errors.push(FieldError {
            field: field.into(),
            message: message.into(),
        });
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// The representative error shown to the user.
    pub fn first(&self) -> Option<&FieldError> {
        self.errors.first()
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldError> {
        self.errors.iter()
    }

    /// Messages recorded against one field.
    pub fn for_field(&self, field: &str) -> Vec<&str> {
        self.errors
            .iter()
            .filter(|e| e.field == field)
            .map(|e| e.message.as_str())
            .collect()
    }
}

impl std::fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut first = true;
        for e in &self.errors {
            if !first {
                write!(f, "; ")?;
            }
            write!(f, "{}: {}", e.field, e.message)?;
            first = false;
        }
        Ok(())
    }
}

impl FromIterator<FieldError> for FieldErrors {
    fn from_iter<T: IntoIterator<Item = FieldError>>(iter: T) -> Self {
        Self {
            errors: iter.into_iter().collect(),
        }
    }
}

impl ContactMessage {
    /// Client-side validation, mirroring the site's form schema: name at
    /// least 2 characters, a plausible email, subject at least 5, message at
    /// least 10. Counts are characters, not bytes.
    pub fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::default();

        if self.name.trim().chars().count() < 2 {
            errors.push("name", "Name must be at least 2 characters");
        }
        if !is_plausible_email(self.email.trim()) {
            errors.push("email", "Invalid email address");
        }
        if self.subject.trim().chars().count() < 5 {
            errors.push("subject", "Subject must be at least 5 characters");
        }
        if self.message.trim().chars().count() < 10 {
            errors.push("message", "Message must be at least 10 characters");
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

/// Minimal email shape check: one `@`, non-empty local part, and a domain
/// with a dot that is neither first nor last.
fn is_plausible_email(s: &str) -> bool {
    let Some((local, domain)) = s.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') || s.contains(char::is_whitespace) {
        return false;
    }
    match domain.rfind('.') {
        Some(dot) => dot > 0 && dot < domain.len() - 1,
        None => false,
    }
}

/// What came back from the form endpoint.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The endpoint accepted the submission.
    Accepted,
    /// The endpoint rejected it with field-level errors.
    Rejected(FieldErrors),
}

/// Delivery seam for the outbound submission.
#[async_trait]
pub trait FormTransport: Send + Sync {
    async fn deliver(&self, message: &ContactMessage) -> Result<SubmitOutcome, PortfolioError>;
}

/// Response body from the Formspree-style endpoint.
#[derive(Debug, Deserialize)]
struct EndpointResponse {
    #[serde(default)]
    ok: bool,
    #[serde(default)]
    errors: Vec<FieldError>,
}

/// Real transport: JSON POST to the configured Formspree form.
pub struct FormspreeTransport {
    endpoint: String,
    client: reqwest::Client,
}

impl FormspreeTransport {
    /// `form_id` is the endpoint's form identifier, e.g. `xzzebeek`.
    pub fn new(form_id: &str) -> Self {
        Self {
            endpoint: format!("https://formspree.io/f/{form_id}"),
            client: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl FormTransport for FormspreeTransport {
    async fn deliver(&self, message: &ContactMessage) -> Result<SubmitOutcome, PortfolioError> {
        let response = self
            .client
            .post(&self.endpoint)
            .header(reqwest::header::ACCEPT, "application/json")
            .json(message)
            .send()
            .await?;

        let status = response.status();
        let bytes = response.bytes().await?;
        let body: EndpointResponse = serde_json::from_slice(&bytes)?;

        if body.ok && status.is_success() {
            tracing::info!("contact form delivered");
            Ok(SubmitOutcome::Accepted)
        } else {
            tracing::error!(%status, errors = body.errors.len(), "contact form rejected");
            Ok(SubmitOutcome::Rejected(
                body.errors.into_iter().collect(),
            ))
        }
    }
}

/// Validates and delivers contact messages, at most one delivery per
/// submission. Double-submission while a delivery is pending is prevented by
/// the UI disabling the control; this service is stateless.
pub struct ContactService<T: FormTransport> {
    transport: T,
}

impl<T: FormTransport> ContactService<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    /// Validate, then deliver. A validation failure returns
    /// [`PortfolioError::Validation`] without touching the transport.
    pub async fn submit(
        &self,
        message: &ContactMessage,
    ) -> Result<SubmitOutcome, PortfolioError> {
        message.validate().map_err(PortfolioError::Validation)?;
        self.transport.deliver(message).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_message() -> ContactMessage {
        ContactMessage {
            name: "Ada Lovelace".into(),
            email: "ada@example.com".into(),
            subject: "Analytical engines".into(),
            message: "I have a project in mind for your consideration.".into(),
        }
    }

    #[test]
    fn valid_message_passes() {
        assert!(valid_message().validate().is_ok());
    }

    #[test]
    fn empty_name_yields_a_single_name_error() {
        let msg = ContactMessage {
            name: String::new(),
            ..valid_message()
        };
        let errors = msg.validate().unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.first().unwrap().field, "name");
    }

    #[test]
    fn representative_error_is_the_first_declared_field() {
        let msg = ContactMessage::default();
        let errors = msg.validate().unwrap_err();
        assert_eq!(errors.len(), 4);
        assert_eq!(errors.first().unwrap().field, "name");
    }

    #[test]
    fn whitespace_only_fields_do_not_count() {
        let msg = ContactMessage {
            subject: "    \t ".into(),
            ..valid_message()
        };
        let errors = msg.validate().unwrap_err();
        assert_eq!(errors.for_field("subject").len(), 1);
    }

    #[test]
    fn email_shapes() {
        let good = ["a@b.co", "first.last@sub.domain.org", "x+tag@y.io"];
        let bad = ["", "plain", "@x.co", "a@b", "a@.co", "a@b.", "a b@c.co", "a@b@c.co"];

        for email in good {
            assert!(is_plausible_email(email), "{email} should be accepted");
        }
        for email in bad {
            assert!(!is_plausible_email(email), "{email} should be rejected");
        }
    }

    #[test]
    fn malformed_endpoint_body_maps_to_a_serialization_error() {
        let decode = |bytes: &[u8]| -> Result<EndpointResponse, PortfolioError> {
            Ok(serde_json::from_slice(bytes)?)
        };

        let err = decode(b"<html>502 Bad Gateway</html>").unwrap_err();
        assert!(matches!(err, PortfolioError::Serialization(_)));

        let body = decode(br#"{"ok":false,"errors":[{"field":"email","message":"bad"}]}"#).unwrap();
        assert!(!body.ok);
        assert_eq!(body.errors.len(), 1);
    }

    #[test]
    fn field_errors_display_joins_entries() {
        let mut errors = FieldErrors::default();
        errors.push("name", "too short");
        errors.push("email", "invalid");
        assert_eq!(errors.to_string(), "name: too short; email: invalid");
    }
}
