//! Utility Functions and Cross-Cutting Concerns
//!
//! - **console_macros**: WASM-compatible logging macros for browser console output
//! - **platform**: Document helpers for theme and language (web feature only)
//! - **style**: Conditional class helpers for the form controls

pub mod console_macros;
pub mod platform;
pub mod style;

pub use platform::*;
