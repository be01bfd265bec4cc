//! Environment-based configuration loading.
//!
//! The environment is read exactly once at process start into an immutable
//! [`AppConfig`]; services receive the value by reference and never look
//! up variables ambiently. Absence of a credential group degrades the
//! corresponding feature instead of failing startup.
//!
//! `from_lookup` takes the variable source as a closure so tests can
//! inject a map instead of mutating the process environment.

use secrecy::SecretString;

use vitrine_types::config::{AppConfig, HttpConfig, Persona, SmtpConfig, UpstreamConfig};

/// Load the application configuration from the process environment.
pub fn load_from_env() -> AppConfig {
    from_lookup(|key| std::env::var(key).ok())
}

/// Build an [`AppConfig`] from an arbitrary variable source.
pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> AppConfig {
    let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

    let api_key = get("OPENAI_API_KEY").map(SecretString::from);
    if api_key.is_none() {
        tracing::warn!("OPENAI_API_KEY missing, chat will use fallback replies only");
    }

    let upstream = UpstreamConfig {
        api_key,
        model: get("OPENAI_MODEL").unwrap_or_else(|| UpstreamConfig::DEFAULT_MODEL.to_string()),
        base_url: get("OPENAI_BASE_URL"),
        timeout_secs: get("UPSTREAM_TIMEOUT_SECS").and_then(|v| v.parse().ok()),
    };

    let smtp = smtp_from_lookup(&get);
    if smtp.is_none() {
        tracing::warn!("SMTP not fully configured, contact submissions will be reported unavailable");
    }

    let http = HttpConfig {
        allowed_origins: get("ALLOWED_ORIGINS")
            .map(|raw| {
                raw.split(',')
                    .map(|origin| origin.trim().to_string())
                    .filter(|origin| !origin.is_empty())
                    .collect()
            })
            .unwrap_or_default(),
        ..HttpConfig::default()
    };

    AppConfig {
        persona: Persona::default(),
        upstream,
        smtp,
        http,
    }
}

/// All-or-nothing SMTP settings: every required variable must be present
/// and the port must parse, or the contact path runs degraded.
fn smtp_from_lookup(get: &impl Fn(&str) -> Option<String>) -> Option<SmtpConfig> {
    let host = get("SMTP_HOST")?;
    let port = get("SMTP_PORT")?.parse().ok()?;
    let user = get("SMTP_USER")?;
    let pass = get("SMTP_PASS")?;
    let to = get("CONTACT_TO_EMAIL").unwrap_or_else(|| user.clone());
    let from = get("CONTACT_FROM_EMAIL").unwrap_or_else(|| user.clone());

    Some(SmtpConfig {
        host,
        port,
        user,
        pass: SecretString::from(pass),
        to,
        from,
    })
}
