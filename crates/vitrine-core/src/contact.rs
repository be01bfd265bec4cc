//! The contact service: validate a submission and relay it by email.
//!
//! Unlike the chat path, failures here surface to the caller -- nothing
//! can safely "fake" sending an email, so a broken relay reports itself
//! along with the direct-contact address instead of pretending.

use vitrine_types::contact::{
    is_valid_email, ContactAck, ContactError, ContactRequest, DeliveryError,
};

/// Message shown by front ends when a required field is blank, before any
/// network call is made.
pub const INCOMPLETE_FORM_MESSAGE: &str = "Please fill in every field before sending.";

/// Client-side pre-submission check: every field non-blank after trimming.
pub fn form_is_complete(fields: &[&str]) -> bool {
    fields.iter().all(|field| !field.trim().is_empty())
}

/// Outbound delivery port. The SMTP adapter lives in vitrine-infra.
pub trait ContactDelivery: Send + Sync {
    fn deliver(
        &self,
        request: &ContactRequest,
    ) -> impl std::future::Future<Output = Result<(), DeliveryError>> + Send;
}

/// Validate raw form fields into a [`ContactRequest`].
///
/// All four fields must be non-empty after trimming and the email must
/// pass the shallow pattern check. Pure; shared by the service and tests.
pub fn validate_submission(
    name: &str,
    email: &str,
    subject: &str,
    message: &str,
) -> Result<ContactRequest, ContactError> {
    let (name, email, subject, message) =
        (name.trim(), email.trim(), subject.trim(), message.trim());

    if name.is_empty() || email.is_empty() || subject.is_empty() || message.is_empty() {
        return Err(ContactError::MissingFields);
    }
    if !is_valid_email(email) {
        return Err(ContactError::InvalidEmail);
    }

    Ok(ContactRequest {
        name: name.to_string(),
        email: email.to_string(),
        subject: subject.to_string(),
        message: message.to_string(),
    })
}

/// Stateless contact-form handler over an optional delivery relay.
///
/// `relay` is `None` when SMTP was not fully configured at startup; every
/// valid submission then reports service-unavailable with the direct
/// address rather than silently dropping mail.
pub struct ContactService<D> {
    relay: Option<D>,
    contact_email: String,
}

impl<D: ContactDelivery> ContactService<D> {
    pub fn new(relay: Option<D>, contact_email: impl Into<String>) -> Self {
        Self {
            relay,
            contact_email: contact_email.into(),
        }
    }

    /// Whether the delivery relay is configured.
    pub fn is_live(&self) -> bool {
        self.relay.is_some()
    }

    /// Validate and relay one submission.
    pub async fn submit(
        &self,
        name: &str,
        email: &str,
        subject: &str,
        message: &str,
    ) -> Result<ContactAck, ContactError> {
        let request = validate_submission(name, email, subject, message)?;

        let Some(relay) = &self.relay else {
            tracing::warn!("contact submission received but no relay is configured");
            return Err(self.unavailable());
        };

        match relay.deliver(&request).await {
            Ok(()) => Ok(ContactAck::sent()),
            Err(err) => {
                tracing::warn!(error = %err, "contact relay failed");
                Err(self.unavailable())
            }
        }
    }

    fn unavailable(&self) -> ContactError {
        ContactError::Unavailable {
            contact: self.contact_email.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;

    struct RecordingRelay {
        deliveries: AtomicUsize,
        fail: bool,
    }

    impl RecordingRelay {
        fn new(fail: bool) -> Self {
            Self {
                deliveries: AtomicUsize::new(0),
                fail,
            }
        }
    }

    impl ContactDelivery for RecordingRelay {
        async fn deliver(&self, _request: &ContactRequest) -> Result<(), DeliveryError> {
            self.deliveries.fetch_add(1, Ordering::SeqCst);
            if self.fail {
                Err(DeliveryError::Relay("550 rejected".to_string()))
            } else {
                Ok(())
            }
        }
    }

    #[test]
    fn validation_requires_every_field() {
        assert!(matches!(
            validate_submission("Ada", "ada@example.com", "  ", "hi"),
            Err(ContactError::MissingFields)
        ));
        assert!(matches!(
            validate_submission("", "", "", ""),
            Err(ContactError::MissingFields)
        ));
    }

    #[test]
    fn validation_checks_the_email_shape() {
        assert!(matches!(
            validate_submission("Ada", "not-an-email", "Hi", "hello"),
            Err(ContactError::InvalidEmail)
        ));
        let ok = validate_submission("Ada", " ada@example.com ", "Hi", "hello").unwrap();
        assert_eq!(ok.email, "ada@example.com");
    }

    #[test]
    fn form_precheck_matches_the_required_rule() {
        assert!(form_is_complete(&["Ada", "ada@example.com", "Hi", "hello"]));
        assert!(!form_is_complete(&["Ada", "ada@example.com", " ", "hello"]));
        assert!(INCOMPLETE_FORM_MESSAGE.contains("every field"));
    }

    #[tokio::test]
    async fn valid_submission_is_relayed_once() {
        let service = ContactService::new(Some(RecordingRelay::new(false)), "owner@example.dev");
        let ack = service
            .submit("Ada", "ada@example.com", "Hello", "Nice site!")
            .await
            .unwrap();
        assert_eq!(ack.status, "ok");
        assert_eq!(
            service.relay.as_ref().unwrap().deliveries.load(Ordering::SeqCst),
            1
        );
    }

    #[tokio::test]
    async fn missing_relay_surfaces_unavailable_with_the_direct_address() {
        let service: ContactService<RecordingRelay> = ContactService::new(None, "owner@example.dev");
        let err = service
            .submit("Ada", "ada@example.com", "Hello", "Nice site!")
            .await
            .unwrap_err();
        match err {
            ContactError::Unavailable { contact } => assert_eq!(contact, "owner@example.dev"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[tokio::test]
    async fn relay_failure_surfaces_unavailable() {
        let service = ContactService::new(Some(RecordingRelay::new(true)), "owner@example.dev");
        let err = service
            .submit("Ada", "ada@example.com", "Hello", "Nice site!")
            .await
            .unwrap_err();
        assert!(matches!(err, ContactError::Unavailable { .. }));
    }

    #[tokio::test]
    async fn invalid_submissions_never_reach_the_relay() {
        let service = ContactService::new(Some(RecordingRelay::new(false)), "owner@example.dev");
        let _ = service.submit("Ada", "bad-email", "Hello", "hi").await;
        assert_eq!(
            service.relay.as_ref().unwrap().deliveries.load(Ordering::SeqCst),
            0
        );
    }
}
