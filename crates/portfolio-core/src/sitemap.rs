//! Sitemap generation over the fixed route list.
//!
//! Regenerated on demand from static configuration: the site base URL plus
//! the defined routes with their update-frequency hints and priority
//! weights. Output is deterministic for a given date; only the embedded
//! `lastmod` field changes between runs.

use std::path::Path;

use chrono::NaiveDate;

use crate::content;
use crate::error::PortfolioError;
use crate::routes::{RouteEntry, ROUTES};

/// Static configuration the sitemap is rendered from.
#[derive(Clone, Debug)]
pub struct SitemapConfig {
    pub base_url: String,
    pub routes: Vec<RouteEntry>,
}

impl Default for SitemapConfig {
    fn default() -> Self {
        Self {
            base_url: content::SITE_URL.to_string(),
            routes: ROUTES.to_vec(),
        }
    }
}

impl SitemapConfig {
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }

    /// Render the urlset XML with `last_modified` stamped on every entry.
    pub fn render(&self, last_modified: NaiveDate) -> String {
        let date = last_modified.format("%Y-%m-%d");
        let base = self.base_url.trim_end_matches('/');

        let mut xml = String::from("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
        xml.push_str("<urlset xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\">\n");

        for route in &self.routes {
            // The root route maps to the bare base URL plus "/"
            let loc = if route.path == "/" {
                format!("{base}/")
            } else {
                format!("{base}{}", route.path)
            };
            xml.push_str("  <url>\n");
            xml.push_str(&format!("    <loc>{loc}</loc>\n"));
            xml.push_str(&format!("    <lastmod>{date}</lastmod>\n"));
            xml.push_str(&format!(
                "    <changefreq>{}</changefreq>\n",
                route.change_frequency
            ));
            xml.push_str(&format!("    <priority>{:.1}</priority>\n", route.priority));
            xml.push_str("  </url>\n");
        }

        xml.push_str("</urlset>");
        xml
    }

    /// Render with today's date and write to `path`, creating parent
    /// directories as needed.
    pub fn write(&self, path: impl AsRef<Path>) -> Result<(), PortfolioError> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let today = chrono::Local::now().date_naive();
        std::fs::write(path, self.render(today))?;
        tracing::info!(path = %path.display(), routes = self.routes.len(), "sitemap written");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixed_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 8, 29).unwrap()
    }

    #[test]
    fn six_routes_produce_six_url_entries() {
        let xml = SitemapConfig::default().render(fixed_date());
        assert_eq!(xml.matches("<url>").count(), 6);
        assert_eq!(xml.matches("</url>").count(), 6);
    }

    #[test]
    fn rendering_is_idempotent_for_a_fixed_date() {
        let config = SitemapConfig::default();
        assert_eq!(config.render(fixed_date()), config.render(fixed_date()));
    }

    #[test]
    fn entries_carry_loc_lastmod_changefreq_and_priority() {
        let config = SitemapConfig::with_base_url("https://example.com");
        let xml = config.render(fixed_date());

        assert!(xml.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?>"));
        assert!(xml.contains("<loc>https://example.com/</loc>"));
        assert!(xml.contains("<loc>https://example.com/about</loc>"));
        assert!(xml.contains("<lastmod>2026-08-29</lastmod>"));
        assert!(xml.contains("<changefreq>weekly</changefreq>"));
        assert!(xml.contains("<priority>1.0</priority>"));
        assert!(xml.contains("<priority>0.6</priority>"));
        assert!(xml.ends_with("</urlset>"));
    }

    #[test]
    fn trailing_slash_on_base_url_does_not_double() {
        let xml = SitemapConfig::with_base_url("https://example.com/").render(fixed_date());
        assert!(xml.contains("<loc>https://example.com/about</loc>"));
        assert!(!xml.contains("com//about"));
    }

    #[test]
    fn write_creates_parent_directories() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("public").join("sitemap.xml");

        SitemapConfig::default().write(&out).unwrap();
        let written = std::fs::read_to_string(&out).unwrap();
        assert_eq!(written.matches("<url>").count(), 6);
    }
}
