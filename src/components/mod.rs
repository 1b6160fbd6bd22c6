//! UI Components
//!
//! Page sections and the shared fade-in wrapper.

mod reveal;
mod nav_bar;
mod hero;
mod about;
mod skills;
mod projects;
mod experience;
mod contact;
mod footer;

pub use reveal::{PageSection, Reveal, SectionTitle};
pub use nav_bar::NavBar;
pub use hero::HeroSection;
pub use about::AboutSection;
pub use skills::SkillsSection;
pub use projects::ProjectsSection;
pub use experience::ExperienceSection;
pub use contact::ContactSection;
pub use footer::Footer;
