//! Durable storage for the session token.
//!
//! DESIGN
//! ======
//! Exactly one `localStorage` entry, keyed by [`STORAGE_KEY`], holding the
//! raw token string. Storage failures are ignored: a browser that refuses
//! localStorage simply behaves as if no session were persisted. Non-browser
//! builds back the same API with a thread-local slot so the session state
//! machine is testable under plain `cargo test`.

#[cfg(test)]
#[path = "token_store_test.rs"]
mod token_store_test;

/// localStorage key under which the raw session token lives.
pub const STORAGE_KEY: &str = "token";

#[cfg(not(feature = "csr"))]
thread_local! {
    static STORED_TOKEN: std::cell::RefCell<Option<String>> =
        const { std::cell::RefCell::new(None) };
}

/// Persist `token`, overwriting any previous value.
pub fn save(token: &str) {
    #[cfg(feature = "csr")]
    {
        if let Some(storage) = local_storage() {
            let _ = storage.set_item(STORAGE_KEY, token);
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        STORED_TOKEN.with(|slot| *slot.borrow_mut() = Some(token.to_owned()));
    }
}

/// The persisted token, if any.
pub fn read() -> Option<String> {
    #[cfg(feature = "csr")]
    {
        local_storage().and_then(|storage| storage.get_item(STORAGE_KEY).ok().flatten())
    }
    #[cfg(not(feature = "csr"))]
    {
        STORED_TOKEN.with(|slot| slot.borrow().clone())
    }
}

/// Remove the persisted token. Idempotent.
pub fn clear() {
    #[cfg(feature = "csr")]
    {
        if let Some(storage) = local_storage() {
            let _ = storage.remove_item(STORAGE_KEY);
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        STORED_TOKEN.with(|slot| *slot.borrow_mut() = None);
    }
}

#[cfg(feature = "csr")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}
