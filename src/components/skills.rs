//! Skills Section Component
//!
//! Proficiency bars that grow to their level once the section is visible,
//! one after another.

use leptos::prelude::*;

use crate::context::use_portfolio;
use crate::models::{SectionId, Skill};

use super::{PageSection, Reveal, SectionTitle};

/// Bar width for a skill given whether its section has been seen
pub fn bar_width(skill: &Skill, visible: bool) -> String {
    if visible {
        format!("{}%", skill.level.percent())
    } else {
        "0%".to_string()
    }
}

/// Transition delay for the bar at `index`
pub fn bar_delay(index: usize, stagger_ms: u32) -> String {
    format!("{}ms", index as u64 * stagger_ms as u64)
}

#[component]
pub fn SkillsSection(skills: Vec<Skill>) -> impl IntoView {
    let ctx = use_portfolio();

    let bars = skills
        .into_iter()
        .enumerate()
        .map(|(index, skill)| {
            let label = format!("{}%", skill.level.percent());
            let bar_class = format!("skill-bar {}", skill.accent);
            let name = skill.name.clone();
            let width = move || bar_width(&skill, ctx.nav.is_visible(SectionId::Skills));
            view! {
                <div class="skill">
                    <div class="skill-header">
                        <span class="skill-name">{name}</span>
                        <span class="skill-level">{label}</span>
                    </div>
                    <div class="skill-track">
                        <div
                            class=bar_class
                            style:width=width
                            style:transition-delay=bar_delay(index, ctx.stagger_ms)
                        ></div>
                    </div>
                </div>
            }
        })
        .collect_view();

    view! {
        <PageSection section=SectionId::Skills class="alt">
            <Reveal section=SectionId::Skills>
                <SectionTitle text="Skills & Expertise" />
                <div class="skill-list">{bars}</div>
            </Reveal>
        </PageSection>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Proficiency;

    fn skill(level: i64) -> Skill {
        Skill {
            name: "Rust".to_string(),
            level: Proficiency::new(level),
            accent: String::new(),
        }
    }

    #[test]
    fn test_bar_width_waits_for_visibility() {
        assert_eq!(bar_width(&skill(80), false), "0%");
        assert_eq!(bar_width(&skill(80), true), "80%");
        assert_eq!(bar_width(&skill(400), true), "100%");
    }

    #[test]
    fn test_bar_delay_staggers() {
        assert_eq!(bar_delay(0, 200), "0ms");
        assert_eq!(bar_delay(3, 200), "600ms");
    }
}
