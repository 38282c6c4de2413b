//! Page transition wrapper.
//!
//! Drives the core [`TransitionMachine`] from route changes and renders the
//! single mounted page with a phase class the stylesheet animates. The
//! machine decides ordering and cancellation; this component only supplies
//! the timers and the markup.

use dioxus::prelude::*;

use portfolio_core::routes::{Page, RouteTable};
use portfolio_core::transition::{TransitionMachine, TransitionPhase};

use crate::pages::{About, Blog, Contact, Home, NotFound, Projects, Skills};

/// Must match the `page-out` animation duration in the stylesheet.
const EXIT_MS: u64 = 220;
/// Must match the `page-in` animation duration in the stylesheet.
const ENTER_MS: u64 = 320;

/// Wraps the routed page in an enter/exit animation keyed by the path.
#[component]
pub fn PageTransition(path: ReadOnlySignal<String>) -> Element {
    let mut machine = use_signal(|| {
        TransitionMachine::new(path.peek().clone(), !crate::reduced_motion())
    });
    // Bumped on every machine change so stale timers from abandoned
    // transitions fall through harmlessly.
    let mut epoch: Signal<u64> = use_signal(|| 0);

    // Route changes drive the machine.
    use_effect(move || {
        let to = path();
        let changed = {
            let mut m = machine.write();
            let before = m.clone();
            m.navigate(to);
            *m != before
        };
        if changed {
            epoch += 1;
        }
    });

    // Timed phase completion. Reruns whenever the machine changes; the
    // epoch guard drops timers that a newer navigation superseded.
    use_effect(move || {
        let phase = machine.read().phase();
        let delay = match phase {
            TransitionPhase::Exiting => EXIT_MS,
            TransitionPhase::Entering => ENTER_MS,
            TransitionPhase::Visible => return,
        };
        let at = *epoch.peek();

        spawn(async move {
            tokio::time::sleep(std::time::Duration::from_millis(delay)).await;
            if *epoch.peek() != at {
                return;
            }
            {
                let mut m = machine.write();
                match phase {
                    TransitionPhase::Exiting => m.exit_finished(),
                    TransitionPhase::Entering => m.enter_finished(),
                    TransitionPhase::Visible => {}
                }
            }
            epoch += 1;
        });
    });

    let m = machine.read();
    let mounted = m.mounted().to_string();
    let phase_class = match m.phase() {
        TransitionPhase::Entering => "page-enter",
        TransitionPhase::Visible => "page-visible",
        TransitionPhase::Exiting => "page-exit",
    };
    let page = RouteTable::new().resolve(&mounted);

    rsx! {
        div {
            key: "{mounted}",
            class: "page-shell {phase_class}",
            {render_page(page, &mounted)}
        }
    }
}

fn render_page(page: Page, path: &str) -> Element {
    match page {
        Page::Home => rsx! { Home {} },
        Page::About => rsx! { About {} },
        Page::Projects => rsx! { Projects {} },
        Page::Skills => rsx! { Skills {} },
        Page::Contact => rsx! { Contact {} },
        Page::Blog => rsx! { Blog {} },
        Page::NotFound => {
            let segments: Vec<String> = path
                .trim_start_matches('/')
                .split('/')
                .map(String::from)
                .collect();
            rsx! { NotFound { segments } }
        }
    }
}
