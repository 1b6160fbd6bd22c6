//! Portfolio App
//!
//! Root component: navigation bar plus the stacked page sections.

use leptos::prelude::*;
use web_viewport::{IntersectionWatcher, SmoothScroller};

use crate::components::{
    AboutSection, ContactSection, ExperienceSection, Footer, HeroSection, NavBar, ProjectsSection,
    SkillsSection,
};
use crate::content::PortfolioContent;
use crate::context::{PageNav, PortfolioContext};
use crate::models::SectionId;
use crate::nav::NavState;

#[component]
pub fn App(content: PortfolioContent) -> impl IntoView {
    let PortfolioContent {
        site,
        profile,
        skills,
        projects,
        experience,
        contact,
        social,
    } = content;

    let nav = PageNav::new(
        NavState::new(site.sections.clone(), site.default_section),
        SmoothScroller,
    );
    provide_context(PortfolioContext::new(nav, site.stagger_ms));

    let threshold = site.visibility_threshold();
    nav.attach_on_mount(move |on_change| IntersectionWatcher::connect(threshold, on_change));

    let sections = site.sections.clone();
    let shows = move |id: SectionId| sections.contains(&id);

    view! {
        <div class="portfolio">
            <NavBar brand=site.brand.clone() sections=site.sections.clone() />

            {shows(SectionId::Home).then(|| view! { <HeroSection profile=profile.clone() /> })}
            {shows(SectionId::About).then(|| view! { <AboutSection profile=profile.clone() /> })}
            {shows(SectionId::Skills).then(|| view! { <SkillsSection skills=skills /> })}
            {shows(SectionId::Projects).then(|| view! { <ProjectsSection projects=projects /> })}
            {shows(SectionId::Experience).then(|| view! { <ExperienceSection experience=experience /> })}
            {shows(SectionId::Contact).then(|| view! { <ContactSection contact=contact social=social /> })}

            <Footer text=site.footer.clone() />
        </div>
    }
}
