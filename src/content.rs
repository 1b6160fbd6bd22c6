//! Portfolio Content
//!
//! Static content and site configuration, embedded at compile time and
//! parsed once at startup.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::models::{ContactChannel, Experience, Profile, Project, SectionId, Skill, SocialLink};

const EMBEDDED: &str = include_str!("../content/portfolio.json");

/// Errors raised while loading content
#[derive(Debug, Clone, PartialEq)]
pub enum ContentError {
    Parse(String),
    Invalid(String),
}

impl std::fmt::Display for ContentError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ContentError::Parse(msg) => write!(f, "Parse error: {}", msg),
            ContentError::Invalid(msg) => write!(f, "Invalid content: {}", msg),
        }
    }
}

impl std::error::Error for ContentError {}

/// Page-level settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Wordmark in the navigation bar
    pub brand: String,
    /// Section highlighted before any navigation
    pub default_section: SectionId,
    /// Sections shown in the nav bar and observed, in page order
    pub sections: Vec<SectionId>,
    /// Fraction of a section that must be on screen to reveal it
    pub visibility_threshold: f64,
    /// Delay between successive skill bars filling in
    pub stagger_ms: u32,
    pub footer: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            brand: "Portfolio.".to_string(),
            default_section: SectionId::Home,
            sections: SectionId::ALL.to_vec(),
            visibility_threshold: web_viewport::DEFAULT_THRESHOLD,
            stagger_ms: 200,
            footer: String::new(),
        }
    }
}

impl SiteConfig {
    /// Threshold clamped to [0, 1]; non-finite values fall back to the default
    pub fn visibility_threshold(&self) -> f64 {
        if self.visibility_threshold.is_finite() {
            self.visibility_threshold.clamp(0.0, 1.0)
        } else {
            web_viewport::DEFAULT_THRESHOLD
        }
    }
}

/// Everything the page renders
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PortfolioContent {
    #[serde(default)]
    pub site: SiteConfig,
    pub profile: Profile,
    #[serde(default)]
    pub skills: Vec<Skill>,
    #[serde(default)]
    pub projects: Vec<Project>,
    #[serde(default)]
    pub experience: Vec<Experience>,
    #[serde(default)]
    pub contact: Vec<ContactChannel>,
    #[serde(default)]
    pub social: Vec<SocialLink>,
}

impl PortfolioContent {
    /// Content bundled with the binary
    pub fn embedded() -> Result<Self, ContentError> {
        Self::from_json(EMBEDDED)
    }

    pub fn from_json(raw: &str) -> Result<Self, ContentError> {
        let content: Self = serde_json::from_str(raw).map_err(|e| ContentError::Parse(e.to_string()))?;
        content.validate()?;
        Ok(content)
    }

    /// Check the section list can drive navigation
    pub fn validate(&self) -> Result<(), ContentError> {
        let site = &self.site;
        if site.sections.is_empty() {
            return Err(ContentError::Invalid("no sections configured".to_string()));
        }

        let mut seen = HashSet::new();
        if let Some(dup) = site.sections.iter().find(|id| !seen.insert(**id)) {
            return Err(ContentError::Invalid(format!("section '{}' listed twice", dup)));
        }

        if !site.sections.contains(&site.default_section) {
            return Err(ContentError::Invalid(format!(
                "default section '{}' is not in the section list",
                site.default_section
            )));
        }
        Ok(())
    }

    /// Fallback used when the bundled content is unusable
    pub fn fallback() -> Self {
        let mut content = Self::default();
        content.profile.name = "Portfolio".to_string();
        content
    }
}
