//! Route table for the portfolio site.
//!
//! Matching is exact-string: there are no path parameters anywhere in this
//! site, so resolution is a walk over the six defined routes with a
//! guaranteed `NotFound` fallback. An unmatched path is not an error.

use std::fmt;

/// The pages of the site, one per route plus the fallback.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Page {
    Home,
    About,
    Projects,
    Skills,
    Contact,
    Blog,
    NotFound,
}

impl Page {
    /// Navbar / footer label for this page.
    pub fn label(&self) -> &'static str {
        match self {
            Page::Home => "Home",
            Page::About => "About",
            Page::Projects => "Projects",
            Page::Skills => "Skills",
            Page::Contact => "Contact",
            Page::Blog => "Blog",
            Page::NotFound => "Not Found",
        }
    }
}

/// How often a route's content is expected to change, for the sitemap.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChangeFrequency {
    Weekly,
    Monthly,
    Yearly,
}

impl fmt::Display for ChangeFrequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ChangeFrequency::Weekly => "weekly",
            ChangeFrequency::Monthly => "monthly",
            ChangeFrequency::Yearly => "yearly",
        };
        f.write_str(s)
    }
}

/// A defined route: a path, the page it renders, and sitemap metadata.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RouteEntry {
    pub path: &'static str,
    pub page: Page,
    pub change_frequency: ChangeFrequency,
    pub priority: f32,
}

/// The six defined routes. The fallback is not listed; it matches everything
/// else and never appears in the sitemap.
pub const ROUTES: &[RouteEntry] = &[
    RouteEntry {
        path: "/",
        page: Page::Home,
        change_frequency: ChangeFrequency::Weekly,
        priority: 1.0,
    },
    RouteEntry {
        path: "/about",
        page: Page::About,
        change_frequency: ChangeFrequency::Monthly,
        priority: 0.8,
    },
    RouteEntry {
        path: "/projects",
        page: Page::Projects,
        change_frequency: ChangeFrequency::Monthly,
        priority: 0.8,
    },
    RouteEntry {
        path: "/skills",
        page: Page::Skills,
        change_frequency: ChangeFrequency::Monthly,
        priority: 0.7,
    },
    RouteEntry {
        path: "/contact",
        page: Page::Contact,
        change_frequency: ChangeFrequency::Yearly,
        priority: 0.6,
    },
    RouteEntry {
        path: "/blog",
        page: Page::Blog,
        change_frequency: ChangeFrequency::Weekly,
        priority: 0.7,
    },
];

/// Exact-match route table over [`ROUTES`].
#[derive(Clone, Copy, Debug, Default)]
pub struct RouteTable;

impl RouteTable {
    pub fn new() -> Self {
        RouteTable
    }

    /// Resolve a request path to a page. Unmatched paths fall back to
    /// [`Page::NotFound`]; this is normal operation, never a failure.
    pub fn resolve(&self, path: &str) -> Page {
        ROUTES
            .iter()
            .find(|route| route.path == path)
            .map(|route| route.page)
            .unwrap_or(Page::NotFound)
    }

    /// The defined routes, in navigation order.
    pub fn entries(&self) -> &'static [RouteEntry] {
        ROUTES
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn every_defined_route_resolves_to_its_page() {
        let table = RouteTable::new();
        for route in ROUTES {
            assert_eq!(table.resolve(route.path), route.page);
        }
    }

    #[test]
    fn unmatched_paths_fall_back_to_not_found() {
        let table = RouteTable::new();
        for path in ["/missing", "/about/", "/ABOUT", "", "/projects/1"] {
            assert_eq!(table.resolve(path), Page::NotFound);
        }
    }

    #[test]
    fn route_paths_are_unique() {
        let paths: HashSet<_> = ROUTES.iter().map(|r| r.path).collect();
        assert_eq!(paths.len(), ROUTES.len());
    }

    #[test]
    fn fallback_page_is_never_a_defined_route() {
        assert!(ROUTES.iter().all(|r| r.page != Page::NotFound));
    }
}
