//! Browser localStorage glue.
//!
//! Centralizes the hydrate-only read/write behavior so callers do not
//! repeat web-sys plumbing. Native builds no-op: reads see an absent
//! value and writes are dropped.

/// Read the raw string stored under `key`, if any.
pub fn read_item(key: &str) -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten())?;
        storage.get_item(key).ok().flatten()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = key;
        None
    }
}

/// Store `value` under `key`. Best-effort; failures are ignored.
pub fn write_item(key: &str, value: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) {
            let _ = storage.set_item(key, value);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (key, value);
    }
}
