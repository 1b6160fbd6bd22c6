//! Portfolio Models
//!
//! Section identifiers and the static content records rendered by the page.

use std::fmt;
use std::str::FromStr;

use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};
use serde::{Deserialize, Deserializer, Serialize};

// ========================
// Sections
// ========================

/// A navigable page region. The DOM id of each `<section>` is `as_str()`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionId {
    #[default]
    Home,
    About,
    Skills,
    Projects,
    Experience,
    Contact,
}

impl SectionId {
    /// All sections in page order
    pub const ALL: [SectionId; 6] = [
        SectionId::Home,
        SectionId::About,
        SectionId::Skills,
        SectionId::Projects,
        SectionId::Experience,
        SectionId::Contact,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            SectionId::Home => "home",
            SectionId::About => "about",
            SectionId::Skills => "skills",
            SectionId::Projects => "projects",
            SectionId::Experience => "experience",
            SectionId::Contact => "contact",
        }
    }

    /// Navigation label
    pub fn label(self) -> &'static str {
        match self {
            SectionId::Home => "Home",
            SectionId::About => "About",
            SectionId::Skills => "Skills",
            SectionId::Projects => "Projects",
            SectionId::Experience => "Experience",
            SectionId::Contact => "Contact",
        }
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownSection(pub String);

impl fmt::Display for UnknownSection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Unknown section: {}", self.0)
    }
}

impl std::error::Error for UnknownSection {}

impl FromStr for SectionId {
    type Err = UnknownSection;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SectionId::ALL
            .into_iter()
            .find(|id| id.as_str() == s)
            .ok_or_else(|| UnknownSection(s.to_string()))
    }
}

// ========================
// Content
// ========================

/// Skill level as a percentage, clamped to 0..=100 whenever it is built
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct Proficiency(u8);

impl Proficiency {
    pub const MAX: u8 = 100;

    pub fn new(level: i64) -> Self {
        Self(level.clamp(0, Self::MAX as i64) as u8)
    }

    fn from_f64(level: f64) -> Self {
        if level.is_nan() {
            return Self(0);
        }
        Self(level.round().clamp(0.0, Self::MAX as f64) as u8)
    }

    pub fn percent(self) -> u8 {
        self.0
    }
}

impl<'de> Deserialize<'de> for Proficiency {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        f64::deserialize(deserializer).map(Proficiency::from_f64)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Skill {
    pub name: String,
    pub level: Proficiency,
    /// CSS gradient/colour class for the bar
    #[serde(default)]
    pub accent: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub accent: String,
    /// Icon key, see [`icon_glyph`]
    #[serde(default)]
    pub icon: String,
    #[serde(default)]
    pub link: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Experience {
    pub role: String,
    pub company: String,
    pub period: String,
    pub description: String,
    #[serde(default)]
    pub accent: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Highlight {
    pub label: String,
    #[serde(default)]
    pub icon: String,
    #[serde(default)]
    pub accent: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stat {
    pub value: String,
    pub label: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContactKind {
    Email,
    Phone,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContactChannel {
    pub kind: ContactKind,
    pub value: String,
    /// Pre-filled subject for email links
    #[serde(default)]
    pub subject: Option<String>,
}

impl ContactChannel {
    pub fn title(&self) -> &'static str {
        match self.kind {
            ContactKind::Email => "Email",
            ContactKind::Phone => "Phone",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self.kind {
            ContactKind::Email => icon_glyph("mail"),
            ContactKind::Phone => icon_glyph("phone"),
        }
    }

    /// `mailto:` / `tel:` URL for the channel
    pub fn href(&self) -> String {
        match self.kind {
            ContactKind::Email => match self.subject.as_deref().filter(|s| !s.is_empty()) {
                Some(subject) => format!(
                    "mailto:{}?subject={}",
                    self.value.trim(),
                    utf8_percent_encode(subject, NON_ALPHANUMERIC)
                ),
                None => format!("mailto:{}", self.value.trim()),
            },
            ContactKind::Phone => {
                let dialable: String = self
                    .value
                    .chars()
                    .filter(|c| c.is_ascii_digit() || *c == '+')
                    .collect();
                format!("tel:{}", dialable)
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SocialKind {
    Github,
    Linkedin,
    #[serde(other)]
    Other,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SocialLink {
    pub kind: SocialKind,
    pub url: String,
    #[serde(default)]
    pub label: Option<String>,
}

impl SocialLink {
    /// Accessible name for the icon-only link
    pub fn display_label(&self) -> String {
        if let Some(label) = &self.label {
            return label.clone();
        }
        match self.kind {
            SocialKind::Github => "GitHub".to_string(),
            SocialKind::Linkedin => "LinkedIn".to_string(),
            SocialKind::Other => self.url.clone(),
        }
    }

    pub fn icon(&self) -> &'static str {
        match self.kind {
            SocialKind::Github => icon_glyph("github"),
            SocialKind::Linkedin => icon_glyph("linkedin"),
            SocialKind::Other => icon_glyph("link"),
        }
    }
}

/// Biography shown in the hero and about sections
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    #[serde(default)]
    pub greeting: String,
    #[serde(default)]
    pub headline: String,
    #[serde(default)]
    pub tagline: String,
    /// Avatar image path, served as a static asset
    #[serde(default)]
    pub avatar: Option<String>,
    /// Downloadable résumé path
    #[serde(default)]
    pub resume: Option<String>,
    /// About paragraphs (inline markdown)
    #[serde(default)]
    pub about: Vec<String>,
    #[serde(default)]
    pub highlights: Vec<Highlight>,
    #[serde(default)]
    pub stats: Vec<Stat>,
}

/// Text glyph for an icon key; unknown keys get a neutral mark
pub fn icon_glyph(key: &str) -> &'static str {
    match key {
        "code" => "💻",
        "footprints" => "👣",
        "movie" => "🎬",
        "bag" => "🛍️",
        "users" => "🤝",
        "zap" => "⚡",
        "mail" => "✉️",
        "phone" => "📞",
        "github" => "🐙",
        "linkedin" => "💼",
        "link" => "🔗",
        "download" => "⬇",
        "arrow" => "→",
        _ => "✦",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_section_round_trips_through_str() {
        for id in SectionId::ALL {
            assert_eq!(id.as_str().parse::<SectionId>(), Ok(id));
        }
        assert_eq!(
            "Projects".parse::<SectionId>(),
            Err(UnknownSection("Projects".to_string()))
        );
        assert!("nonexistent".parse::<SectionId>().is_err());
        assert_eq!(SectionId::default(), SectionId::Home);
    }

    #[test]
    fn test_proficiency_clamps() {
        assert_eq!(Proficiency::new(150).percent(), 100);
        assert_eq!(Proficiency::new(-3).percent(), 0);
        assert_eq!(Proficiency::new(85).percent(), 85);

        let skills: Vec<Skill> = serde_json::from_str(
            r#"[{"name":"A","level":120},{"name":"B","level":-5},{"name":"C","level":64.6}]"#,
        )
        .unwrap();
        let levels: Vec<u8> = skills.iter().map(|s| s.level.percent()).collect();
        assert_eq!(levels, vec![100, 0, 65]);
    }

    #[test]
    fn test_contact_hrefs() {
        let email = ContactChannel {
            kind: ContactKind::Email,
            value: "me@example.com".to_string(),
            subject: Some("Let's talk".to_string()),
        };
        assert_eq!(email.href(), "mailto:me@example.com?subject=Let%27s%20talk");

        let phone = ContactChannel {
            kind: ContactKind::Phone,
            value: "+94 77 677 1741".to_string(),
            subject: None,
        };
        assert_eq!(phone.href(), "tel:+94776771741");
        assert_eq!(phone.title(), "Phone");
    }

    #[test]
    fn test_social_kind_falls_back_to_other() {
        let link: SocialLink =
            serde_json::from_str(r#"{"kind":"mastodon","url":"https://example.social/@me"}"#).unwrap();
        assert_eq!(link.kind, SocialKind::Other);
        assert_eq!(link.display_label(), "https://example.social/@me");
        assert_eq!(link.icon(), "🔗");
    }
}
