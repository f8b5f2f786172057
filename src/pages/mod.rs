//! Page modules for route-level screens.
//!
//! Each page owns its route-scoped data fetch (if any) and renders the
//! result; gating and error display live in `components`.

pub mod about;
pub mod home;
pub mod login;
pub mod not_found;
pub mod user_detail;
pub mod users;
