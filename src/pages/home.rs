//! Home page: static content.

use leptos::prelude::*;

#[component]
pub fn HomePage() -> impl IntoView {
    view! { <h3>"Home"</h3> }
}
