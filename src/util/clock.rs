//! Wall-clock access for token expiry checks.
//!
//! Session code takes `now` as an explicit parameter wherever the result
//! matters for correctness; this module only supplies the ambient reading at
//! the call sites that kick those paths off.

#[cfg(test)]
#[path = "clock_test.rs"]
mod clock_test;

/// Current time in whole seconds since the Unix epoch.
///
/// Token expiry claims are second-resolution, so nothing finer is needed.
pub fn now_secs() -> u64 {
    #[cfg(feature = "csr")]
    {
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let secs = (js_sys::Date::now() / 1000.0) as u64;
        secs
    }
    #[cfg(not(feature = "csr"))]
    {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map_or(0, |elapsed| elapsed.as_secs())
    }
}
