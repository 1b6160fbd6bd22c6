//! Footer Component

use leptos::prelude::*;

#[component]
pub fn Footer(#[prop(into)] text: String) -> impl IntoView {
    view! {
        <footer class="page-footer">
            <p>{text}</p>
        </footer>
    }
}
