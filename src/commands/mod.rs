//! Command implementations
//!
//! The flows driven by the `pushover` binary.

pub mod send;
