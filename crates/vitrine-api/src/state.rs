//! Application state wiring the services together.
//!
//! AppState pins the generic core services to the concrete infra
//! implementations and holds them behind `Arc` for the handlers. All
//! construction happens once, consuming the startup configuration.

use std::sync::Arc;
use std::time::Duration;

use vitrine_core::contact::ContactService;
use vitrine_core::gateway::ChatGateway;
use vitrine_infra::llm::openai::OpenAiCompletionClient;
use vitrine_infra::mail::SmtpRelay;
use vitrine_types::config::AppConfig;

/// Concrete type aliases for the service generics pinned to infra.
pub type ConcreteGateway = ChatGateway<OpenAiCompletionClient>;
pub type ConcreteContactService = ContactService<SmtpRelay>;

/// Shared application state used by the REST handlers.
#[derive(Clone)]
pub struct AppState {
    pub gateway: Arc<ConcreteGateway>,
    pub contact: Arc<ConcreteContactService>,
}

impl AppState {
    /// Wire the services, consuming the startup configuration.
    pub fn init(config: AppConfig) -> Self {
        let AppConfig {
            persona,
            upstream,
            smtp,
            http: _,
        } = config;

        let timeout = upstream.timeout_secs.map(Duration::from_secs);
        let base_url = upstream.base_url;
        let client = upstream.api_key.map(|api_key| {
            let client = OpenAiCompletionClient::new(api_key, timeout);
            match base_url {
                Some(base_url) => client.with_base_url(base_url),
                None => client,
            }
        });

        let gateway = ChatGateway::new(&persona, upstream.model.clone(), client);
        tracing::info!(
            live = gateway.is_live(),
            model = %upstream.model,
            "chat gateway initialized"
        );

        let relay = smtp.map(SmtpRelay::new);
        let contact = ContactService::new(relay, persona.email);

        Self {
            gateway: Arc::new(gateway),
            contact: Arc::new(contact),
        }
    }
}
