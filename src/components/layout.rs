//! Route layout: nav bar, error boundary, and the nested outlet.

use leptos::prelude::*;
use leptos_router::components::Outlet;

use crate::components::error_view::ErrorView;
use crate::routes::RouteTable;

/// Shell around every routed page. Nav links come from the route table;
/// fetch or render failures in the subtree surface through the error
/// boundary as [`ErrorView`] instead of unwinding the whole app.
#[component]
pub fn Layout() -> impl IntoView {
    let table = expect_context::<RouteTable>();
    let entries = table.nav_entries();

    view! {
        <nav>
            <ul>
                {entries
                    .into_iter()
                    .map(|(label, href)| view! { <li><a href=href>{label}</a></li> })
                    .collect::<Vec<_>>()}
            </ul>
        </nav>
        <ErrorBoundary fallback=|errors| view! { <ErrorView errors/> }>
            <Outlet/>
        </ErrorBoundary>
        <hr/>
    }
}
