//! User Interface Components
//!
//! This module contains the Dioxus components for the registration page:
//!
//! - **forms**: The student registration form and its field controls
//! - **calendar**: Bounded birth-date picker with month/year dropdowns
//! - **display**: Toasts, spinner, mode toggle, icons and the decorative background
//! - **inputs**: Text input, form items and validation messages
//! - **layout**: Theme provider and page header

pub mod calendar;
pub mod display;
pub mod forms;
pub mod inputs;
pub mod layout;
