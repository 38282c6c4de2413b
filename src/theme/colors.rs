//! Color constants for both themes.
//!
//! Dark is the default scheme; the light values are swapped in through
//! CSS custom properties when `data-theme="light"` is set on the root.

#![allow(dead_code)]

// === DARK (default) ===
pub const DARK_BG: &str = "#0b1120";
pub const DARK_BG_ALT: &str = "#111a2e";
pub const DARK_SURFACE: &str = "#16213b";
pub const DARK_BORDER: &str = "#24314f";
pub const DARK_TEXT: &str = "#e7ecf6";
pub const DARK_TEXT_MUTED: &str = "rgba(231, 236, 246, 0.65)";

// === LIGHT ===
pub const LIGHT_BG: &str = "#f8fafc";
pub const LIGHT_BG_ALT: &str = "#eef2f8";
pub const LIGHT_SURFACE: &str = "#ffffff";
pub const LIGHT_BORDER: &str = "#dbe2ee";
pub const LIGHT_TEXT: &str = "#101828";
pub const LIGHT_TEXT_MUTED: &str = "rgba(16, 24, 40, 0.65)";

// === ACCENT (shared) ===
pub const ACCENT: &str = "#3b82f6";
pub const ACCENT_STRONG: &str = "#2563eb";
pub const ACCENT_SOFT: &str = "rgba(59, 130, 246, 0.15)";

// === SEMANTIC ===
pub const SUCCESS: &str = "#22c55e";
pub const DANGER: &str = "#ef4444";
