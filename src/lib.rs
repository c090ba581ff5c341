//! Ghibli Art Proxy library
//!
//! Modules:
//! - `api`: Axum HTTP handlers and router setup used by the binary.
//! - `stability`: Thin client and payloads for the Stability AI generation API.
//! - `prompt`: Prompt text and style preset construction.
//! - `utils`: Image decoding, square resizing and JPEG re-encoding.
//! - `service`: Glue that prepares a request and hands it to the client.
//! - `config`: Env-driven configuration loader.
//! - `error`: Common error type and alias.
//!
//! Re-exports are provided for common types: `Config`, `StabilityClient`,
//! `PromptConstructor`, and `GhibliArtService`.
pub mod api;
pub mod stability;
pub mod prompt;
pub mod utils;
pub mod service;
pub mod config;
pub mod error;

pub use config::Config;
pub use stability::client::StabilityClient;
pub use prompt::constructor::PromptConstructor;
pub use service::GhibliArtService;
