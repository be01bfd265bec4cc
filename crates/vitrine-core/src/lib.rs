//! Business logic for the Vitrine portfolio backend.
//!
//! This crate defines the "ports" (the `CompletionClient`, `ReplyTransport`,
//! and `ContactDelivery` traits) that the infrastructure layer implements,
//! plus the components built on them: the chat gateway, the client chat
//! session, the fallback reply synthesis, and the contact service. It
//! depends only on `vitrine-types` -- never on HTTP or process crates.

pub mod contact;
pub mod fallback;
pub mod gateway;
pub mod llm;
pub mod session;
