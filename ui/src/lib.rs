//! This crate contains the UI for the ZapFit student registration page.

pub mod app;
pub use app::ZapFitApp;

pub mod components;
pub mod features;
pub mod services;
pub mod utils;
