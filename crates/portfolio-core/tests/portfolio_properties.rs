//! Observable-behavior tests over the public API
//!
//! These cover the guarantees the site is built around: route fallback,
//! theme idempotence, validate-before-send on the contact form, sitemap
//! shape, and single-mount through rapid navigation.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use chrono::NaiveDate;
use portfolio_core::contact::{
    ContactMessage, ContactService, FormTransport, SubmitOutcome,
};
use portfolio_core::theme::{FileThemeStorage, Theme, ThemeStorage, ThemeStore};
use portfolio_core::{
    Page, PortfolioError, RouteTable, SitemapConfig, TransitionMachine, TransitionPhase,
};

// ============================================================================
// Routing
// ============================================================================

#[test]
fn each_defined_route_renders_exactly_one_page() {
    let table = RouteTable::new();

    let expected = [
        ("/", Page::Home),
        ("/about", Page::About),
        ("/projects", Page::Projects),
        ("/skills", Page::Skills),
        ("/contact", Page::Contact),
        ("/blog", Page::Blog),
    ];

    for (path, page) in expected {
        assert_eq!(table.resolve(path), page);
    }
}

#[test]
fn undefined_paths_render_the_fallback_page() {
    let table = RouteTable::new();
    assert_eq!(table.resolve("/admin"), Page::NotFound);
    assert_eq!(table.resolve("/blog/2024"), Page::NotFound);
    assert_eq!(table.resolve("not-even-a-path"), Page::NotFound);
}

// ============================================================================
// Theme
// ============================================================================

#[test]
fn toggling_twice_restores_the_stored_preference() {
    let dir = tempfile::tempdir().unwrap();
    let storage = FileThemeStorage::new(dir.path());
    storage.store(Theme::Light).unwrap();

    let store = ThemeStore::open(FileThemeStorage::new(dir.path()), Some(Theme::Dark), None);
    assert_eq!(store.get(), Theme::Light);

    store.toggle();
    store.toggle();

    assert_eq!(store.get(), Theme::Light);
    assert_eq!(FileThemeStorage::new(dir.path()).load(), Some(Theme::Light));
}

#[test]
fn preference_survives_a_store_reopen() {
    let dir = tempfile::tempdir().unwrap();

    {
        let store = ThemeStore::open(FileThemeStorage::new(dir.path()), None, None);
        store.set(Theme::Light);
    }

    let reopened = ThemeStore::open(FileThemeStorage::new(dir.path()), Some(Theme::Dark), None);
    assert_eq!(reopened.get(), Theme::Light);
}

// ============================================================================
// Contact form
// ============================================================================

/// Transport that records every delivery and returns a fixed outcome.
struct RecordingTransport {
    deliveries: Arc<AtomicUsize>,
    outcome: SubmitOutcome,
}

impl RecordingTransport {
    fn accepting() -> (Self, Arc<AtomicUsize>) {
        let deliveries = Arc::new(AtomicUsize::new(0));
        (
            Self {
                deliveries: deliveries.clone(),
                outcome: SubmitOutcome::Accepted,
            },
            deliveries,
        )
    }
}

#[async_trait]
impl FormTransport for RecordingTransport {
    async fn deliver(&self, _message: &ContactMessage) -> Result<SubmitOutcome, PortfolioError> {
        self.deliveries.fetch_add(1, Ordering::SeqCst);
        Ok(self.outcome.clone())
    }
}

fn valid_message() -> ContactMessage {
    ContactMessage {
        name: "Grace Hopper".into(),
        email: "grace@example.com".into(),
        subject: "Compiler work".into(),
        message: "Would you be interested in collaborating on a compiler?".into(),
    }
}

#[tokio::test]
async fn empty_name_never_reaches_the_transport() {
    let (transport, deliveries) = RecordingTransport::accepting();
    let service = ContactService::new(transport);

    let message = ContactMessage {
        name: String::new(),
        ..valid_message()
    };

    let err = service.submit(&message).await.unwrap_err();
    let PortfolioError::Validation(errors) = err else {
        panic!("expected a validation error");
    };

    // Exactly one surfaced message, and it references the name field
    assert_eq!(errors.len(), 1);
    assert_eq!(errors.first().unwrap().field, "name");
    assert_eq!(deliveries.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn valid_submission_delivers_exactly_once() {
    let (transport, deliveries) = RecordingTransport::accepting();
    let service = ContactService::new(transport);

    let outcome = service.submit(&valid_message()).await.unwrap();
    assert_eq!(outcome, SubmitOutcome::Accepted);
    assert_eq!(deliveries.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn endpoint_rejection_is_reported_not_an_error() {
    let mut errors = portfolio_core::FieldErrors::default();
    errors.push("email", "should be an email");
    let transport = RecordingTransport {
        deliveries: Arc::new(AtomicUsize::new(0)),
        outcome: SubmitOutcome::Rejected(errors),
    };
    let service = ContactService::new(transport);

    let outcome = service.submit(&valid_message()).await.unwrap();
    let SubmitOutcome::Rejected(errors) = outcome else {
        panic!("expected rejection");
    };
    assert_eq!(errors.for_field("email"), vec!["should be an email"]);
}

// ============================================================================
// Sitemap
// ============================================================================

#[test]
fn sitemap_has_one_entry_per_defined_route() {
    let config = SitemapConfig::default();
    assert_eq!(config.routes.len(), 6);

    let date = NaiveDate::from_ymd_opt(2026, 1, 15).unwrap();
    let xml = config.render(date);
    assert_eq!(xml.matches("<url>").count(), 6);
}

#[test]
fn regeneration_differs_only_in_lastmod() {
    let config = SitemapConfig::default();
    let a = config.render(NaiveDate::from_ymd_opt(2026, 1, 15).unwrap());
    let b = config.render(NaiveDate::from_ymd_opt(2026, 2, 20).unwrap());

    assert_ne!(a, b);
    assert_eq!(
        a.replace("2026-01-15", "DATE"),
        b.replace("2026-02-20", "DATE"),
    );
}

// ============================================================================
// Transitions
// ============================================================================

#[test]
fn rapid_navigation_mounts_only_the_last_target() {
    let mut machine = TransitionMachine::new("/", true);
    machine.enter_finished();

    machine.navigate("/about");
    machine.navigate("/projects");

    assert_eq!(machine.mounted(), "/projects");
    assert_eq!(machine.pending(), None);

    machine.enter_finished();
    assert_eq!(machine.phase(), TransitionPhase::Visible);
    assert_eq!(machine.mounted(), "/projects");
}

#[test]
fn transition_resolves_through_the_route_table_consistently() {
    let table = RouteTable::new();
    let mut machine = TransitionMachine::new("/", true);
    machine.enter_finished();

    machine.navigate("/nowhere");
    assert_eq!(table.resolve(machine.pending().unwrap()), Page::NotFound);

    machine.exit_finished();
    machine.enter_finished();
    assert_eq!(table.resolve(machine.mounted()), Page::NotFound);

    // A second unknown path still transitions, to the same fallback page
    machine.navigate("/elsewhere");
    assert_eq!(machine.phase(), TransitionPhase::Exiting);
}
