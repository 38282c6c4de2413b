//! Error types for the portfolio core

use thiserror::Error;

use crate::contact::FieldErrors;

/// Main error type for portfolio core operations
#[derive(Error, Debug)]
pub enum PortfolioError {
    /// Submission rejected before delivery by client-side validation
    #[error("Validation failed: {0}")]
    Validation(FieldErrors),

    /// Outbound form delivery failed at the transport level
    #[error("Delivery error: {0}")]
    Delivery(#[from] reqwest::Error),

    /// Error decoding the form endpoint's response body
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// General I/O error (sitemap output, theme file)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
