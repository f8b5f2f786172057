//! Access gate for protected routes.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::Redirect;

use crate::routes::RouteTable;
use crate::state::session::SessionState;

/// Renders its children only for an authenticated session; otherwise
/// performs a client-side redirect to the login page, replacing the
/// history entry rather than pushing one.
#[component]
pub fn RequireAuth(children: ChildrenFn) -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let table = expect_context::<RouteTable>();
    let login_href = table.login_href();

    view! {
        <Show
            when=move || session.get().authenticated
            fallback=move || {
                view! {
                    <Redirect
                        path=login_href.clone()
                        options=NavigateOptions {
                            replace: true,
                            ..NavigateOptions::default()
                        }
                    />
                }
            }
        >
            {children()}
        </Show>
    }
}
