//! Shared domain types for Vitrine.
//!
//! This crate contains the types used across the Vitrine portfolio backend:
//! chat entries and wire contracts, upstream completion shapes, contact form
//! types, configuration values, and their error taxonomies.
//!
//! Zero infrastructure dependencies -- only serde, uuid, secrecy, thiserror.

pub mod chat;
pub mod config;
pub mod contact;
pub mod llm;
