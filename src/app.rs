//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment, WildcardSegment,
    components::{ParentRoute, Route, Router, Routes},
};

use crate::components::guard::RequireAuth;
use crate::components::layout::Layout;
use crate::pages::{
    about::AboutPage, home::HomePage, login::LoginPage, not_found::NotFoundPage,
    user_detail::UserDetailPage, users::UsersPage,
};
use crate::routes::RouteTable;
use crate::state::session::SessionState;

/// Root application component.
///
/// Builds the route table (validated at startup), provides the session
/// and table contexts, and wires the router. The `<Routes>` below mirror
/// [`RouteTable::standard`] segment for segment; the table remains the
/// source for hrefs and gate decisions.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let table = RouteTable::standard();
    provide_context(RwSignal::new(SessionState::from_storage()));
    provide_context(table.clone());

    view! {
        <Title text="router7"/>

        <Router base=table.base()>
            <Routes fallback=NotFoundPage>
                <ParentRoute path=StaticSegment("") view=Layout>
                    <Route path=StaticSegment("") view=HomePage/>
                    <Route path=StaticSegment("about") view=AboutPage/>
                    <Route path=StaticSegment("login") view=LoginPage/>
                    <Route
                        path=StaticSegment("users")
                        view=|| view! { <RequireAuth><UsersPage/></RequireAuth> }
                    />
                    <Route
                        path=(StaticSegment("user"), ParamSegment("id"))
                        view=|| view! { <RequireAuth><UserDetailPage/></RequireAuth> }
                    />
                    <Route path=WildcardSegment("any") view=NotFoundPage/>
                </ParentRoute>
            </Routes>
        </Router>
    }
}
