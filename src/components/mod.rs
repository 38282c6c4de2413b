//! UI components for the portfolio app.

mod contact_form;
mod footer;
mod icons;
mod navbar;
mod page_transition;
mod project_card;
mod scroll_to_top;

pub use contact_form::ContactForm;
pub use footer::Footer;
pub use icons::icon;
pub use navbar::Navbar;
pub use page_transition::PageTransition;
pub use project_card::ProjectCard;
pub use scroll_to_top::ScrollToTop;
