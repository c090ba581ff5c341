//! Stability AI REST v1 binding.
pub mod client;
pub mod request;
