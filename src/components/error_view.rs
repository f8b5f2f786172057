//! Error view rendered by the route-level error boundary.

#[cfg(test)]
#[path = "error_view_test.rs"]
mod error_view_test;

use leptos::error::Errors;
use leptos::prelude::*;

/// Generic message shown when the propagated error has no usable text.
const FALLBACK_MESSAGE: &str = "Something went wrong";

/// Displays the message of the first error collected by the enclosing
/// `ErrorBoundary`, falling back to a generic string.
#[component]
pub fn ErrorView(errors: ArcRwSignal<Errors>) -> impl IntoView {
    #[cfg(feature = "hydrate")]
    {
        let errors = errors.clone();
        Effect::new(move || {
            for (_, err) in errors.get() {
                log::error!("route error: {err}");
            }
        });
    }

    let message = move || display_message(first_error_message(errors.get()));

    view! {
        <div>
            <h1>"Error!"</h1>
            <p>{message}</p>
        </div>
    }
}

fn first_error_message(errors: Errors) -> Option<String> {
    errors.into_iter().next().map(|(_, err)| err.to_string())
}

/// The user-visible message: the error's own text when present,
/// otherwise [`FALLBACK_MESSAGE`].
pub(crate) fn display_message(raw: Option<String>) -> String {
    match raw {
        Some(msg) if !msg.trim().is_empty() => msg,
        _ => FALLBACK_MESSAGE.to_owned(),
    }
}
