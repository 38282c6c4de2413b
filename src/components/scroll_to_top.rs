//! Scroll reset on navigation.
//!
//! Each page change scrolls the window back to the top, otherwise the new
//! page enters at whatever offset the old one was scrolled to.

use dioxus::document;
use dioxus::prelude::*;

#[component]
pub fn ScrollToTop(path: ReadOnlySignal<String>) -> Element {
    use_effect(move || {
        // Subscribe to path changes; the value itself is unused
        let _ = path();
        document::eval("window.scrollTo({ top: 0, left: 0, behavior: 'instant' });");
    });

    rsx! {}
}
