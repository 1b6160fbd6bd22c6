//! Navigation Bar Component
//!
//! Fixed top bar with one button per section; highlights the active one.

use leptos::prelude::*;

use crate::context::use_portfolio;
use crate::models::SectionId;

#[component]
pub fn NavBar(
    #[prop(into)] brand: String,
    sections: Vec<SectionId>,
) -> impl IntoView {
    let ctx = use_portfolio();

    view! {
        <nav class="nav-bar">
            <div class="nav-inner">
                <button class="nav-brand" on:click=move |_| ctx.go(SectionId::Home)>
                    {brand}
                </button>
                <div class="nav-links">
                    {sections
                        .into_iter()
                        .map(move |id| {
                            let link_class = move || {
                                if ctx.nav.active_section() == id { "nav-link active" } else { "nav-link" }
                            };
                            view! {
                                <button class=link_class on:click=move |_| ctx.go(id)>
                                    {id.label()}
                                </button>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </nav>
    }
}
