//! Login page: a single trigger for the login action.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;

use crate::routes::{Page, RouteTable};
use crate::state::session::{self, SessionState};

/// Login page. The button persists the session flag, flips the session
/// context, and forces a full-page navigation to the users list.
#[component]
pub fn LoginPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let table = expect_context::<RouteTable>();
    let target = post_login_href(&table);

    let on_login = move |_| {
        session::persist_login();
        session.update(SessionState::login);

        #[cfg(feature = "hydrate")]
        {
            if let Some(window) = web_sys::window() {
                let _ = window.location().set_href(&target);
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = &target;
        }
    };

    view! {
        <div>
            <h1>"Login"</h1>
            <button on:click=on_login>"Login"</button>
        </div>
    }
}

/// Where a fresh login lands: the users list.
pub(crate) fn post_login_href(table: &RouteTable) -> String {
    table
        .href(Page::Users)
        .unwrap_or_else(|| table.login_href())
}
