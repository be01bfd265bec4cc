//! SMTP contact relay.
//!
//! Implements [`ContactDelivery`] by piping an RFC-822 message through the
//! system `curl` binary's SMTP support: `smtps://` for implicit-TLS port
//! 465, `smtp://` with STARTTLS (`--ssl-reqd`) otherwise. Credentials come
//! from the startup [`SmtpConfig`]; the relay exists only when that config
//! was complete.

use std::process::Stdio;

use secrecy::ExposeSecret;
use tokio::io::AsyncWriteExt;
use tokio::process::Command;

use vitrine_core::contact::ContactDelivery;
use vitrine_types::config::SmtpConfig;
use vitrine_types::contact::{ContactRequest, DeliveryError};

/// Longest subject line forwarded to the mailbox, prefix included.
const MAX_SUBJECT_CHARS: usize = 180;

/// Outbound SMTP relay for contact submissions.
pub struct SmtpRelay {
    config: SmtpConfig,
}

impl SmtpRelay {
    pub fn new(config: SmtpConfig) -> Self {
        Self { config }
    }

    /// The curl URL for this relay. Port 465 is implicit TLS.
    fn relay_url(&self) -> String {
        if self.config.port == 465 {
            format!("smtps://{}:{}", self.config.host, self.config.port)
        } else {
            format!("smtp://{}:{}", self.config.host, self.config.port)
        }
    }

    /// Tagged, length-capped subject line.
    fn subject(subject: &str) -> String {
        format!("[Portfolio] {subject}")
            .chars()
            .take(MAX_SUBJECT_CHARS)
            .collect()
    }

    /// The full message: headers plus a plain-text body that leads with
    /// the sender's own name and address so replies have context even
    /// without the Reply-To header.
    fn mail_body(&self, request: &ContactRequest) -> String {
        format!(
            "From: {from}\r\nTo: {to}\r\nReply-To: {reply_to}\r\nSubject: {subject}\r\n\
             Content-Type: text/plain; charset=utf-8\r\n\r\n\
             Name: {name}\r\nEmail: {email}\r\n\r\n{message}",
            from = self.config.from,
            to = self.config.to,
            reply_to = request.email,
            subject = Self::subject(&request.subject),
            name = request.name,
            email = request.email,
            message = request.message,
        )
    }
}

impl ContactDelivery for SmtpRelay {
    async fn deliver(&self, request: &ContactRequest) -> Result<(), DeliveryError> {
        let body = self.mail_body(request);

        tracing::info!(
            host = %self.config.host,
            port = self.config.port,
            "relaying contact submission"
        );

        let mut child = Command::new("curl")
            .args([
                "--ssl-reqd",
                "--url",
                &self.relay_url(),
                "--user",
                &format!("{}:{}", self.config.user, self.config.pass.expose_secret()),
                "--mail-from",
                &self.config.from,
                "--mail-rcpt",
                &self.config.to,
                "-T",
                "-",
            ])
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| DeliveryError::Relay(format!("failed to spawn curl: {e}")))?;

        if let Some(mut stdin) = child.stdin.take() {
            stdin
                .write_all(body.as_bytes())
                .await
                .map_err(|e| DeliveryError::Relay(format!("failed to write message: {e}")))?;
        }

        let output = child
            .wait_with_output()
            .await
            .map_err(|e| DeliveryError::Relay(e.to_string()))?;

        if output.status.success() {
            Ok(())
        } else {
            let stderr = String::from_utf8_lossy(&output.stderr);
            Err(DeliveryError::Relay(stderr.into_owned()))
        }
    }
}
