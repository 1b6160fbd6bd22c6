//! Projects Section Component

use leptos::prelude::*;

use crate::models::{icon_glyph, Project, SectionId};

use super::{PageSection, Reveal, SectionTitle};

#[component]
fn ProjectCard(project: Project) -> impl IntoView {
    let Project {
        title,
        description,
        tags,
        accent,
        icon,
        link,
    } = project;

    let tag_views = tags
        .into_iter()
        .map(|tag| view! { <span class="project-tag">{tag}</span> })
        .collect_view();

    // Cards without a link get a label instead of a dead anchor
    let action = match link {
        Some(href) => view! {
            <a class="project-link" href=href target="_blank" rel="noopener noreferrer">
                <span>"View Project"</span>
                <span class="btn-icon">{icon_glyph("link")}</span>
            </a>
        }
        .into_any(),
        None => view! { <span class="project-link disabled">"Coming soon"</span> }.into_any(),
    };

    view! {
        <div class="project-card">
            <div class=format!("project-wash {}", accent) aria-hidden="true"></div>
            <div class="project-body">
                <div class=format!("project-icon {}", accent)>{icon_glyph(&icon)}</div>
                <h3 class="project-title">{title}</h3>
                <p class="project-description">{description}</p>
                <div class="project-tags">{tag_views}</div>
                {action}
            </div>
        </div>
    }
}

#[component]
pub fn ProjectsSection(projects: Vec<Project>) -> impl IntoView {
    view! {
        <PageSection section=SectionId::Projects>
            <Reveal section=SectionId::Projects>
                <SectionTitle text="Featured Projects" />
                <div class="project-grid">
                    <For
                        each=move || projects.clone()
                        key=|project| project.title.clone()
                        children=move |project| view! { <ProjectCard project=project /> }
                    />
                </div>
            </Reveal>
        </PageSection>
    }
}
