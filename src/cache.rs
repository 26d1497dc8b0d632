// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
//
// SPDX-License-Identifier: MIT

//! `Cache-Control` policy for served cards.

/// Shortest allowed lifetime: four hours.
pub const MIN_CACHE_SECONDS: u64 = 4 * 60 * 60;
/// Longest allowed lifetime: one day.
pub const MAX_CACHE_SECONDS: u64 = 24 * 60 * 60;
/// Window during which a stale card may still be served.
const STALE_WHILE_REVALIDATE: u64 = MAX_CACHE_SECONDS;

/// Clamps the requested lifetime into `[4h, 1d]`; `None` means four hours.
pub fn cache_seconds(requested: Option<u64,>,) -> u64
{
    requested.unwrap_or(MIN_CACHE_SECONDS,).clamp(MIN_CACHE_SECONDS, MAX_CACHE_SECONDS,)
}

/// Builds the `Cache-Control` header value for a card.
///
/// Browsers keep the card for half the lifetime, shared caches for all of it.
///
/// ```
/// use repocard::cache::cache_control;
///
/// assert_eq!(
///     cache_control(None),
///     "max-age=7200, s-maxage=14400, stale-while-revalidate=86400"
/// );
/// ```
pub fn cache_control(requested: Option<u64,>,) -> String
{
    let seconds = cache_seconds(requested,);
    format!(
        "max-age={}, s-maxage={seconds}, stale-while-revalidate={STALE_WHILE_REVALIDATE}",
        seconds / 2
    )
}
