//! About Section Component

use leptos::prelude::*;

use crate::markdown::parse_markdown_inline;
use crate::models::{icon_glyph, Profile, SectionId};

use super::{PageSection, Reveal, SectionTitle};

#[component]
pub fn AboutSection(profile: Profile) -> impl IntoView {
    let paragraphs = profile
        .about
        .iter()
        .map(|text| {
            let html = parse_markdown_inline(text);
            view! { <p class="about-text" inner_html=html></p> }
        })
        .collect_view();

    let highlights = profile
        .highlights
        .into_iter()
        .map(|h| {
            view! {
                <div class=format!("highlight-chip {}", h.accent)>
                    <span class="chip-icon">{icon_glyph(&h.icon)}</span>
                    <span>{h.label}</span>
                </div>
            }
        })
        .collect_view();

    let stats = profile
        .stats
        .into_iter()
        .map(|stat| {
            view! {
                <div class="stat-card">
                    <h3 class="stat-value">{stat.value}</h3>
                    <p class="stat-label">{stat.label}</p>
                </div>
            }
        })
        .collect_view();

    view! {
        <PageSection section=SectionId::About>
            <Reveal section=SectionId::About>
                <SectionTitle text="About Me" />
                <div class="about-grid">
                    <div>
                        {paragraphs}
                        <div class="highlight-list">{highlights}</div>
                    </div>
                    <div class="stat-list">{stats}</div>
                </div>
            </Reveal>
        </PageSection>
    }
}
