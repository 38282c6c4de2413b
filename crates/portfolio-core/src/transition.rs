//! Page-transition state machine.
//!
//! Navigation hands off between pages through three phases: the outgoing
//! page exits, then the incoming page enters, then it is visible. The
//! machine is driven by discrete events from the UI layer (`navigate`,
//! `exit_finished`, `enter_finished`); it owns no timers itself, which keeps
//! the ordering and cancellation rules testable.
//!
//! Guarantees:
//! - Exactly one page is mounted at any time ([`TransitionMachine::mounted`]).
//! - The previous page's exit is scheduled before the next page's enter
//!   becomes visible.
//! - A navigation arriving mid-flight abandons the in-flight transition and
//!   starts the new target's enter immediately. Nothing is queued.
//! - With motion disabled, navigation is an immediate swap with no
//!   intermediate phase.

/// Where the active page is in its animated handoff.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TransitionPhase {
    /// The incoming page is animating in.
    Entering,
    /// The page is settled and interactive.
    Visible,
    /// The outgoing page is animating out; the target waits off-screen.
    Exiting,
}

/// Transition state for the currently routed page.
#[derive(Clone, Debug, PartialEq)]
pub struct TransitionMachine {
    current: String,
    phase: TransitionPhase,
    /// Target path while the previous page is still exiting.
    pending: Option<String>,
    animated: bool,
}

impl TransitionMachine {
    /// Start at `initial` with no transition in flight. The first page does
    /// not exit from anything, so it begins `Entering` (or `Visible` when
    /// animation is off, e.g. reduced motion is requested).
    pub fn new(initial: impl Into<String>, animated: bool) -> Self {
        Self {
            current: initial.into(),
            phase: if animated {
                TransitionPhase::Entering
            } else {
                TransitionPhase::Visible
            },
            pending: None,
            animated,
        }
    }

    pub fn phase(&self) -> TransitionPhase {
        self.phase
    }

    /// The path of the single page currently mounted. While the old page is
    /// exiting that is still the old page; otherwise it is the current one.
    pub fn mounted(&self) -> &str {
        &self.current
    }

    /// The navigation target, if a handoff is still in flight.
    pub fn pending(&self) -> Option<&str> {
        self.pending.as_deref()
    }

    /// React to a path change. A change always triggers a new transition,
    /// even when the resolved page is the same fallback component.
    pub fn navigate(&mut self, to: impl Into<String>) {
        let to = to.into();
        if to == self.current && self.pending.is_none() {
            return;
        }

        if !self.animated {
            self.current = to;
            self.phase = TransitionPhase::Visible;
            self.pending = None;
            return;
        }

        match self.phase {
            // Settled page: schedule its exit, hold the target until the
            // exit finishes.
            TransitionPhase::Visible => {
                tracing::debug!(from = %self.current, to = %to, "starting page transition");
                self.pending = Some(to);
                self.phase = TransitionPhase::Exiting;
            }
            // In-flight transition: abandon it and enter the new target
            // immediately. No queueing of multiple pending transitions.
            TransitionPhase::Exiting | TransitionPhase::Entering => {
                tracing::debug!(
                    abandoned = %self.pending.as_deref().unwrap_or(&self.current),
                    to = %to,
                    "abandoning in-flight transition"
                );
                self.pending = None;
                self.current = to;
                self.phase = TransitionPhase::Entering;
            }
        }
    }

    /// The outgoing page's exit animation completed: mount the target and
    /// begin its enter.
    pub fn exit_finished(&mut self) {
        if self.phase != TransitionPhase::Exiting {
            return;
        }
        if let Some(next) = self.pending.take() {
            self.current = next;
        }
        self.phase = TransitionPhase::Entering;
    }

    /// The incoming page's enter animation completed: the page is settled.
    pub fn enter_finished(&mut self) {
        if self.phase == TransitionPhase::Entering {
            self.phase = TransitionPhase::Visible;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settled(path: &str) -> TransitionMachine {
        let mut m = TransitionMachine::new(path, true);
        m.enter_finished();
        m
    }

    #[test]
    fn navigation_exits_before_entering() {
        let mut m = settled("/");
        m.navigate("/about");

        // Old page still mounted while it exits
        assert_eq!(m.phase(), TransitionPhase::Exiting);
        assert_eq!(m.mounted(), "/");
        assert_eq!(m.pending(), Some("/about"));

        m.exit_finished();
        assert_eq!(m.phase(), TransitionPhase::Entering);
        assert_eq!(m.mounted(), "/about");
        assert_eq!(m.pending(), None);

        m.enter_finished();
        assert_eq!(m.phase(), TransitionPhase::Visible);
    }

    #[test]
    fn rapid_navigation_leaves_only_final_target_mounted() {
        let mut m = settled("/");
        m.navigate("/about");
        m.navigate("/projects");

        // The in-flight exit to /about is abandoned; /projects enters now
        assert_eq!(m.phase(), TransitionPhase::Entering);
        assert_eq!(m.mounted(), "/projects");
        assert_eq!(m.pending(), None);

        m.enter_finished();
        assert_eq!(m.mounted(), "/projects");
        assert_eq!(m.phase(), TransitionPhase::Visible);
    }

    #[test]
    fn navigation_during_enter_swaps_target_immediately() {
        let mut m = settled("/");
        m.navigate("/about");
        m.exit_finished();
        assert_eq!(m.phase(), TransitionPhase::Entering);

        m.navigate("/skills");
        assert_eq!(m.phase(), TransitionPhase::Entering);
        assert_eq!(m.mounted(), "/skills");
        assert_eq!(m.pending(), None);
    }

    #[test]
    fn stale_exit_event_after_abandonment_is_harmless() {
        let mut m = settled("/");
        m.navigate("/about");
        m.navigate("/projects");

        // A timer from the abandoned exit may still fire
        m.exit_finished();
        assert_eq!(m.mounted(), "/projects");
        assert_ne!(m.phase(), TransitionPhase::Exiting);
    }

    #[test]
    fn same_path_does_not_retrigger() {
        let mut m = settled("/about");
        m.navigate("/about");
        assert_eq!(m.phase(), TransitionPhase::Visible);
    }

    #[test]
    fn path_change_to_same_fallback_still_transitions() {
        // Both paths resolve to the 404 page, but the path changed, so a
        // transition runs anyway.
        let mut m = settled("/missing-one");
        m.navigate("/missing-two");
        assert_eq!(m.phase(), TransitionPhase::Exiting);
        assert_eq!(m.pending(), Some("/missing-two"));
    }

    #[test]
    fn reduced_motion_collapses_to_immediate_swap() {
        let mut m = TransitionMachine::new("/", false);
        assert_eq!(m.phase(), TransitionPhase::Visible);

        m.navigate("/about");
        assert_eq!(m.phase(), TransitionPhase::Visible);
        assert_eq!(m.mounted(), "/about");
        assert_eq!(m.pending(), None);
    }

    #[test]
    fn phase_events_out_of_order_do_nothing() {
        let mut m = settled("/");
        m.exit_finished();
        m.enter_finished();
        assert_eq!(m.phase(), TransitionPhase::Visible);
        assert_eq!(m.mounted(), "/");
    }
}
