//! Users list page.
//!
//! SYSTEM CONTEXT
//! ==============
//! The first protected route. The collection fetch starts on mount; the
//! enclosing layout's error boundary handles fetch failures, and the
//! suspense fallback covers the pending window.

#[cfg(test)]
#[path = "users_test.rs"]
mod users_test;

use leptos::prelude::*;

use crate::net::api;
use crate::net::types::User;
use crate::routes::RouteTable;

/// Users page: a navigable list of user names linking to per-user
/// detail paths.
#[component]
pub fn UsersPage() -> impl IntoView {
    let table = expect_context::<RouteTable>();
    let users = LocalResource::new(|| api::fetch_users());

    view! {
        <div>
            <h1>"Users"</h1>
            <Suspense fallback=move || view! { <p>"Loading..."</p> }>
                {move || {
                    users.get().map(|result| {
                        result.map(|list| {
                            view! {
                                <ul>
                                    {user_links(&table, &list)
                                        .into_iter()
                                        .map(|(href, name)| {
                                            view! { <li><a href=href>{name}</a></li> }
                                        })
                                        .collect::<Vec<_>>()}
                                </ul>
                            }
                        })
                    })
                }}
            </Suspense>
        </div>
    }
}

/// (href, display name) pairs for the list, in API order.
pub(crate) fn user_links(table: &RouteTable, users: &[User]) -> Vec<(String, String)> {
    users
        .iter()
        .map(|user| {
            (
                table.user_detail_href(&user.id.to_string()),
                user.name.clone(),
            )
        })
        .collect()
}
