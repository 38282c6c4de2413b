//! Portfolio Core Library
//!
//! UI-independent logic behind the portfolio desktop app: the route table,
//! the page-transition state machine, the theme store, the contact-form
//! pipeline, and the sitemap generator, plus the static site content they
//! all draw from.
//!
//! ## Overview
//!
//! The desktop shell (the `portfolio` package) is a thin Dioxus layer over
//! this crate. Everything with observable behavior lives here so it can be
//! tested without a window:
//!
//! - **Routing**: exact-path matching with a guaranteed not-found fallback
//! - **Transitions**: an explicit entering/visible/exiting machine with
//!   cancellation, so exactly one page is ever mounted
//! - **Theme**: an observed light/dark store persisted beneath the data dir
//! - **Contact**: validate-first form delivery to a third-party endpoint
//! - **Sitemap**: XML generation over the fixed route list
//!
//! ## Quick Start
//!
//! ```
//! use portfolio_core::routes::{Page, RouteTable};
//!
//! let table = RouteTable::new();
//! assert_eq!(table.resolve("/projects"), Page::Projects);
//! assert_eq!(table.resolve("/no-such-page"), Page::NotFound);
//! ```

pub mod contact;
pub mod content;
pub mod error;
pub mod routes;
pub mod sitemap;
pub mod theme;
pub mod transition;

// Re-exports
pub use contact::{ContactMessage, ContactService, FieldErrors, FormTransport, SubmitOutcome};
pub use error::PortfolioError;
pub use routes::{Page, RouteTable};
pub use sitemap::SitemapConfig;
pub use theme::{Theme, ThemeStore};
pub use transition::{TransitionMachine, TransitionPhase};
