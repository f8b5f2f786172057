//! User detail page.

#[cfg(test)]
#[path = "user_detail_test.rs"]
mod user_detail_test;

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::net::api;
use crate::net::types::User;

/// User detail page: reads `:id` from the route and renders a structured
/// dump of the fetched user. A missing id fails in the fetcher before
/// any network call and surfaces through the error boundary.
#[component]
pub fn UserDetailPage() -> impl IntoView {
    let params = use_params_map();

    let user = LocalResource::new(move || {
        let id = params.read().get("id").unwrap_or_default();
        async move { api::fetch_user(&id).await }
    });

    view! {
        <div>
            <h3>"User Detail"</h3>
            <Suspense fallback=move || view! { <p>"Loading..."</p> }>
                {move || {
                    user.get().map(|result| {
                        result.map(|user| view! { <pre>{user_dump(&user)}</pre> })
                    })
                }}
            </Suspense>
        </div>
    }
}

/// Pretty-printed JSON dump of the user, every fetched field included.
pub(crate) fn user_dump(user: &User) -> String {
    serde_json::to_string_pretty(user).unwrap_or_else(|_| String::new())
}
