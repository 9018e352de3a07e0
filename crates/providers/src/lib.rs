//! Completion provider implementations for Sandy.
//!
//! The provider implements the `sandy_core::Provider` trait against any
//! OpenAI-compatible endpoint. `select` builds the one named by
//! configuration, and the gateway puts a uniform contract in front of it.

pub mod gateway;
pub mod openai_compat;
pub mod select;

pub use gateway::{Completion, CompletionGateway};
pub use openai_compat::OpenAiCompatProvider;
pub use select::default_provider;
