//! Catch-all page for unmatched paths.

use leptos::prelude::*;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! { <h3>"Not Found"</h3> }
}
