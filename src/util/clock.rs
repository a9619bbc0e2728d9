//! Wall-clock access that works in the browser and on the host.

/// Seconds since the Unix epoch.
///
/// `std::time::SystemTime` panics on `wasm32-unknown-unknown`, so browser
/// builds read `Date.now()` instead.
#[allow(clippy::cast_possible_truncation)]
pub fn now_unix_secs() -> i64 {
    #[cfg(feature = "csr")]
    {
        (js_sys::Date::now() / 1000.0) as i64
    }
    #[cfg(not(feature = "csr"))]
    {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map_or(0, |d| i64::try_from(d.as_secs()).unwrap_or(i64::MAX))
    }
}
