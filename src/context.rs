//! Shared context for the portfolio app.
//!
//! The theme store and its reactive mirror are provided at the root and
//! read through these hooks. The store is the single writer of record; the
//! signal exists so components re-render when the theme changes.

use std::sync::Arc;

use dioxus::prelude::*;
use portfolio_core::theme::{Theme, ThemeStore};

/// Hook to access the owned theme store (persist + notify).
pub fn use_theme_store() -> Arc<ThemeStore> {
    use_context::<Arc<ThemeStore>>()
}

/// Hook to access the reactive theme value.
pub fn use_theme() -> Signal<Theme> {
    use_context::<Signal<Theme>>()
}

/// Desktop stand-in for the OS color-scheme preference: an environment
/// variable holding `light` or `dark`. Absent or malformed means no hint.
pub fn system_theme_hint() -> Option<Theme> {
    std::env::var("PORTFOLIO_SYSTEM_THEME").ok()?.parse().ok()
}
