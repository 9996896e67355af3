//! Cross-cutting services for the ZapFit app.
//!
//! - **config**: application settings and the process-wide config instance
//! - **errors**: validation and configuration error types

pub mod config;
pub mod errors;
