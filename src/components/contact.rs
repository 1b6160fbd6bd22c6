//! Contact Section Component
//!
//! Email/phone cards and social icon links.

use leptos::prelude::*;

use crate::models::{ContactChannel, SectionId, SocialLink};

use super::{PageSection, Reveal, SectionTitle};

#[component]
pub fn ContactSection(contact: Vec<ContactChannel>, social: Vec<SocialLink>) -> impl IntoView {
    let cards = contact
        .into_iter()
        .map(|channel| {
            view! {
                <a class="contact-card" href=channel.href()>
                    <div class="contact-icon">{channel.icon()}</div>
                    <h3 class="contact-title">{channel.title()}</h3>
                    <p class="contact-value">{channel.value.clone()}</p>
                </a>
            }
        })
        .collect_view();

    let links = social
        .into_iter()
        .map(|link| {
            view! {
                <a
                    class="social-link"
                    href=link.url.clone()
                    target="_blank"
                    rel="noopener noreferrer"
                    aria-label=link.display_label()
                    title=link.display_label()
                >
                    {link.icon()}
                </a>
            }
        })
        .collect_view();

    view! {
        <PageSection section=SectionId::Contact>
            <Reveal section=SectionId::Contact>
                <SectionTitle text="Let's Work Together" />
                <p class="contact-intro">
                    "Ready to bring your ideas to life? Let's discuss how we can create something amazing together."
                </p>
                <div class="contact-grid">{cards}</div>
                <div class="social-list">{links}</div>
            </Reveal>
        </PageSection>
    }
}
