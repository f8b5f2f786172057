//! Small browser-facing helpers shared across pages and components.

pub mod storage;
