//! About page: static content.

use leptos::prelude::*;

#[component]
pub fn AboutPage() -> impl IntoView {
    view! { <h3>"About"</h3> }
}
