//! Reveal Components
//!
//! Section shell and the fade-in wrapper driven by section visibility.

use leptos::prelude::*;

use crate::context::use_portfolio;
use crate::models::SectionId;

/// `<section>` carrying the DOM id the viewport observer watches
#[component]
pub fn PageSection(
    section: SectionId,
    #[prop(into, optional)] class: String,
    children: Children,
) -> impl IntoView {
    let class = if class.is_empty() {
        "page-section".to_string()
    } else {
        format!("page-section {}", class)
    };

    view! {
        <section id=section.as_str() class=class>
            {children()}
        </section>
    }
}

/// Fades and slides its children in once `section` has been seen
#[component]
pub fn Reveal(section: SectionId, children: Children) -> impl IntoView {
    let ctx = use_portfolio();
    let reveal_class = move || {
        if ctx.nav.is_visible(section) { "reveal visible" } else { "reveal" }
    };

    view! {
        <div class=reveal_class>
            {children()}
        </div>
    }
}

/// Gradient section heading
#[component]
pub fn SectionTitle(#[prop(into)] text: String) -> impl IntoView {
    view! { <h2 class="section-title">{text}</h2> }
}
