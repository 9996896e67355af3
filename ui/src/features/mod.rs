//! Feature state: everything here is plain Rust driven by actions, with no
//! dioxus imports, so it can be exercised by native unit tests.

pub mod calendar;
pub mod registration;
pub mod theme;
pub mod toast;
