//! Fixture data for the demo page.

use crate::features::navbar::state::NavLink;
use crate::features::search::lookup::{SearchError, SearchResult, matches_term};
use gloo::console;
use gloo_timers::future::TimeoutFuture;

const CATALOG: &str = r#"[
    {"id": "accordion", "title": "Accordion", "description": "Single or multiple expandable sections", "link": "/services"},
    {"id": "sidebar", "title": "Sidebar", "description": "Collapsible icon rail with tooltips", "link": "/services"},
    {"id": "navbar", "title": "Navbar", "description": "Sticky header with a mobile drawer", "link": "/services"},
    {"id": "search", "title": "Search", "description": "Debounced lookup with a results dropdown", "link": "/services"},
    {"id": "theme", "title": "Theme toggle", "description": "Light and dark mode stored in localStorage", "link": "/services"},
    {"id": "about", "title": "About Kestrel", "description": "Who builds these components", "link": "/about"},
    {"id": "blog", "title": "Blog", "description": "Release notes and component deep dives", "link": "/blog"},
    {"id": "pricing", "title": "Pricing", "description": "Plans for teams of every size", "link": "/pricing"},
    {"id": "contact", "title": "Contact", "description": "Reach the maintainers", "link": "/contact"}
]"#;

const LATENCY_MS: u32 = 150;

pub(crate) fn nav_links() -> Vec<NavLink> {
    vec![
        NavLink::new("Home", "/"),
        NavLink::new("About", "/about"),
        NavLink::new("Services", "/services"),
        NavLink::new("Blog", "/blog"),
        NavLink::new("Contact", "/contact"),
        NavLink::external("External", "https://example.com"),
    ]
}

/// Filters the bundled catalog after a short delay. The term `offline`
/// simulates a failing backend.
#[allow(clippy::future_not_send)]
pub(crate) async fn catalog_lookup(term: String) -> Result<Vec<SearchResult>, SearchError> {
    TimeoutFuture::new(LATENCY_MS).await;
    if term.trim().eq_ignore_ascii_case("offline") {
        return Err(SearchError::Lookup("catalog unavailable".to_string()));
    }
    let catalog: Vec<SearchResult> = serde_json::from_str(CATALOG)?;
    let hits: Vec<SearchResult> = catalog
        .into_iter()
        .filter(|result| matches_term(result, &term))
        .collect();
    console::log!("catalog lookup", term, hits.len().to_string());
    Ok(hits)
}
