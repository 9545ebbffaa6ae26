//! Pushover notification library
//!
//! Builds, validates and sends a single message to the Pushover
//! messages API:
//! - `request`: raw inputs, validation and form encoding
//! - `client`: HTTP delivery and response interpretation
//! - `commands`: the send flow used by the `pushover` binary

pub mod client;
pub mod commands;
pub mod config;
pub mod error;
pub mod priority;
pub mod request;
pub mod sound;

// Re-export common types
pub use client::{Delivery, PushoverClient, Quota};
pub use config::ClientConfig;
pub use error::{Error, Result};
pub use priority::Priority;
pub use request::{FieldPolicy, NotificationRequest, RequestDraft};
pub use sound::Sound;
