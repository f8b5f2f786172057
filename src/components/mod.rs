//! Shared UI components: the route layout, the access gate, and the
//! error view rendered by the route-level error boundary.

pub mod error_view;
pub mod guard;
pub mod layout;
