//! Browser Document Helpers
//!
//! Small wrappers over `web_sys` used by the page shell: reading the
//! system colour-scheme preference, applying the resolved theme to the root
//! element and setting the document language. Without the `web` feature
//! these are no-ops.

use crate::features::theme::Appearance;

#[cfg(feature = "web")]
use crate::console_debug;
#[cfg(feature = "web")]
use web_sys::window;

/// Whether the OS/browser asks for a dark colour scheme
#[cfg(feature = "web")]
pub fn system_prefers_dark() -> bool {
    const DARK_SCHEME_QUERY: &str = "(prefers-color-scheme: dark)";

    window()
        .and_then(|w| w.match_media(DARK_SCHEME_QUERY).ok().flatten())
        .map(|query| query.matches())
        .unwrap_or(false)
}

#[cfg(not(feature = "web"))]
pub fn system_prefers_dark() -> bool {
    false
}

/// Put the appearance class on `<html>` so the stylesheet variables switch
#[cfg(feature = "web")]
pub fn apply_appearance(appearance: Appearance) {
    let Some(root) = window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
    else {
        return;
    };

    let classes = root.class_list();
    let _ = classes.toggle_with_force("dark", appearance == Appearance::Dark);
    let _ = classes.toggle_with_force("light", appearance == Appearance::Light);
    let _ = root.set_attribute("style", &format!("color-scheme: {}", appearance.css_class()));
    console_debug!("[Theme] Applied appearance: {}", appearance.css_class());
}

#[cfg(not(feature = "web"))]
pub fn apply_appearance(_appearance: Appearance) {}

/// Set the `lang` attribute on `<html>`
#[cfg(feature = "web")]
pub fn set_document_language(lang: &str) {
    if let Some(root) = window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
    {
        let _ = root.set_attribute("lang", lang);
    }
}

#[cfg(not(feature = "web"))]
pub fn set_document_language(_lang: &str) {}
