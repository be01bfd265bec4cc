//! Process-wide configuration values.
//!
//! Everything here is constructed once at startup and passed by reference
//! into the services, never looked up ambiently: the chat gateway and the
//! contact service are testable with injected live-mode or degraded-mode
//! configurations without touching the process environment.

use secrecy::SecretString;

/// Description of the portfolio owner the assistant speaks for.
///
/// Feeds the fixed system prompt and both fallback reply catalogs.
#[derive(Debug, Clone)]
pub struct Persona {
    pub name: String,
    /// Direct-contact address used in fallback replies and delivery
    /// failure messages.
    pub email: String,
    pub skills: String,
    pub projects: String,
    pub experience: String,
}

impl Default for Persona {
    fn default() -> Self {
        Self {
            name: "Asha Venkat".to_string(),
            email: "asha@ashavenkat.dev".to_string(),
            skills: "Rust and TypeScript backends, React/Next.js front ends, \
                     and LLM integration tooling"
                .to_string(),
            projects: "an LLM-assisted interview screener, a virtual try-on \
                       room, a fitness community platform, and a self-hosted \
                       food delivery stack"
                .to_string(),
            experience: "software engineering internships at two product \
                         studios, most recently on platform tooling"
                .to_string(),
        }
    }
}

/// Upstream completion service settings.
///
/// `api_key` presence selects the process-wide mode: `Some` means live
/// calls, `None` means fallback-only. The mode never changes per request.
pub struct UpstreamConfig {
    pub api_key: Option<SecretString>,
    pub model: String,
    /// Override for the provider base URL (testing or proxies).
    pub base_url: Option<String>,
    /// Request timeout in seconds; `None` leaves the transport default.
    pub timeout_secs: Option<u64>,
}

impl UpstreamConfig {
    pub const DEFAULT_MODEL: &'static str = "gpt-4.1-mini";

    /// Whether a credential is configured (live mode).
    pub fn is_live(&self) -> bool {
        self.api_key.is_some()
    }
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model: Self::DEFAULT_MODEL.to_string(),
            base_url: None,
            timeout_secs: None,
        }
    }
}

/// SMTP relay settings for the contact path.
///
/// All-or-nothing: the relay runs only when every field is present, so an
/// instance of this struct is already proof the path is configured.
pub struct SmtpConfig {
    pub host: String,
    pub port: u16,
    pub user: String,
    pub pass: SecretString,
    /// Destination inbox for contact submissions.
    pub to: String,
    /// Envelope sender; defaults to `user` when not set separately.
    pub from: String,
}

/// HTTP server settings.
#[derive(Debug, Clone)]
pub struct HttpConfig {
    pub host: String,
    pub port: u16,
    /// Exact-match CORS allow-list; empty means permissive.
    pub allowed_origins: Vec<String>,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 5000,
            allowed_origins: Vec::new(),
        }
    }
}

/// The complete immutable application configuration.
///
/// None of the optional pieces are required for startup; absence toggles
/// the degraded mode of the corresponding feature.
#[derive(Default)]
pub struct AppConfig {
    pub persona: Persona,
    pub upstream: UpstreamConfig,
    pub smtp: Option<SmtpConfig>,
    pub http: HttpConfig,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_upstream_is_fallback_only() {
        let upstream = UpstreamConfig::default();
        assert!(!upstream.is_live());
        assert_eq!(upstream.model, "gpt-4.1-mini");
        assert!(upstream.timeout_secs.is_none());
    }

    #[test]
    fn credential_presence_selects_live_mode() {
        let upstream = UpstreamConfig {
            api_key: Some(SecretString::from("sk-test")),
            ..UpstreamConfig::default()
        };
        assert!(upstream.is_live());
    }

    #[test]
    fn default_config_starts_degraded_everywhere() {
        let config = AppConfig::default();
        assert!(!config.upstream.is_live());
        assert!(config.smtp.is_none());
        assert_eq!(config.http.port, 5000);
    }

    #[test]
    fn persona_default_has_contact_address() {
        let persona = Persona::default();
        assert!(persona.email.contains('@'));
        assert!(!persona.skills.is_empty());
    }
}
