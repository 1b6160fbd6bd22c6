//! Portfolio Context
//!
//! Shared state provided via Leptos Context API.

use leptos::prelude::*;
use web_viewport::SmoothScroller;

use crate::controller::NavController;
use crate::models::SectionId;

/// Controller used by the running page
pub type PageNav = NavController<SmoothScroller>;

/// App-wide handles provided via context
#[derive(Clone, Copy)]
pub struct PortfolioContext {
    /// Active section and section visibility
    pub nav: PageNav,
    /// Delay between successive skill bars filling in
    pub stagger_ms: u32,
}

impl PortfolioContext {
    pub fn new(nav: PageNav, stagger_ms: u32) -> Self {
        Self { nav, stagger_ms }
    }

    /// Navigate to a known section
    pub fn go(&self, section: SectionId) {
        self.nav.navigate_to(section.as_str());
    }
}

/// Get the portfolio context
pub fn use_portfolio() -> PortfolioContext {
    expect_context::<PortfolioContext>()
}
