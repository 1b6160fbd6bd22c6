//! Hero Section Component
//!
//! Avatar, name, headline and the call-to-action buttons.

use leptos::prelude::*;

use crate::context::use_portfolio;
use crate::models::{icon_glyph, Profile, SectionId};

use super::PageSection;

#[component]
pub fn HeroSection(profile: Profile) -> impl IntoView {
    let ctx = use_portfolio();
    let Profile {
        name,
        greeting,
        headline,
        tagline,
        avatar,
        resume,
        ..
    } = profile;

    let avatar_view = avatar.map(|src| {
        view! {
            <div class="hero-avatar-ring">
                <div class="hero-avatar">
                    <img src=src alt=name.clone() />
                </div>
            </div>
        }
    });

    let resume_view = resume.map(|href| {
        view! {
            <a class="hero-btn download" href=href download="">
                "Download My Resume"
                <span class="btn-icon">{icon_glyph("download")}</span>
            </a>
        }
    });

    let greeting_view = (!greeting.is_empty()).then(|| view! { <h1 class="hero-title">{greeting}</h1> });

    view! {
        <PageSection section=SectionId::Home class="hero">
            <div class="hero-glow" aria-hidden="true"></div>
            <div class="hero-content">
                {avatar_view}
                {greeting_view}
                <h1 class="hero-title">{name}</h1>
                <p class="hero-headline">{headline}</p>
                <p class="hero-tagline">{tagline}</p>

                <div class="hero-actions">
                    <button class="hero-btn primary" on:click=move |_| ctx.go(SectionId::Projects)>
                        "View My Work"
                        <span class="btn-icon">{icon_glyph("arrow")}</span>
                    </button>
                    <button class="hero-btn outline" on:click=move |_| ctx.go(SectionId::Contact)>
                        "Get In Touch"
                    </button>
                    {resume_view}
                </div>
            </div>
        </PageSection>
    }
}
