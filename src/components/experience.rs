//! Experience Section Component
//!
//! Vertical timeline of roles.

use leptos::prelude::*;

use crate::models::{Experience, SectionId};

use super::{PageSection, Reveal, SectionTitle};

#[component]
pub fn ExperienceSection(experience: Vec<Experience>) -> impl IntoView {
    let count = experience.len();

    let entries = experience
        .into_iter()
        .enumerate()
        .map(|(index, exp)| {
            let connector = (index + 1 < count).then(|| view! { <div class="timeline-connector"></div> });
            view! {
                <div class="timeline-entry">
                    <div class="timeline-row">
                        <div class=format!("timeline-dot {}", exp.accent)></div>
                        <div class="timeline-card">
                            <div class="timeline-head">
                                <h3 class="timeline-role">{exp.role}</h3>
                                <span class="timeline-period">{exp.period}</span>
                            </div>
                            <h4 class="timeline-company">{exp.company}</h4>
                            <p class="timeline-description">{exp.description}</p>
                        </div>
                    </div>
                    {connector}
                </div>
            }
        })
        .collect_view();

    view! {
        <PageSection section=SectionId::Experience class="alt">
            <Reveal section=SectionId::Experience>
                <SectionTitle text="Experience" />
                {if count == 0 {
                    view! { <p class="empty-state">"Experience coming soon."</p> }.into_any()
                } else {
                    view! { <div class="timeline">{entries}</div> }.into_any()
                }}
            </Reveal>
        </PageSection>
    }
}
