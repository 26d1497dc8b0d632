// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
//
// SPDX-License-Identifier: MIT

//! Compact number and age labels for the stat row.

use chrono::{DateTime, Utc};

const SECONDS_PER_MINUTE: i64 = 60;
const SECONDS_PER_HOUR: i64 = 60 * SECONDS_PER_MINUTE;
const SECONDS_PER_DAY: i64 = 24 * SECONDS_PER_HOUR;
const SECONDS_PER_MONTH: i64 = 30 * SECONDS_PER_DAY;
const SECONDS_PER_YEAR: i64 = 365 * SECONDS_PER_DAY;

/// Formats a count with a `k` suffix from one thousand upwards.
///
/// One decimal is kept and dropped when it is zero. Once the rounded value
/// reaches a thousand kilo the same rule switches to an `M` suffix, so large
/// counts never render as `1000k`.
///
/// ```
/// use repocard::format::k_formatter;
///
/// assert_eq!(k_formatter(999), "999");
/// assert_eq!(k_formatter(1000), "1k");
/// assert_eq!(k_formatter(1500), "1.5k");
/// assert_eq!(k_formatter(2_000_000), "2M");
/// ```
pub fn k_formatter(value: u64,) -> String
{
    if value < 1_000 {
        return value.to_string();
    }

    let kilo_tenths = value.saturating_add(50,) / 100;
    if kilo_tenths < 10_000 {
        return with_suffix(kilo_tenths, 'k',);
    }

    let mega_tenths = value.saturating_add(50_000,) / 100_000;
    with_suffix(mega_tenths, 'M',)
}

fn with_suffix(tenths: u64, suffix: char,) -> String
{
    let whole = tenths / 10;
    match tenths % 10 {
        0 => format!("{whole}{suffix}"),
        fraction => format!("{whole}.{fraction}{suffix}"),
    }
}

/// Renders the time elapsed between `then` and `now` as its largest whole
/// unit: `Ny`, `Nmo`, `Nd`, `Nh`, `Nm`, or `Ns`.
///
/// Years count as 365 days and months as 30 days. Timestamps in the future
/// clamp to `0s`.
///
/// ```
/// use chrono::{Duration, Utc};
/// use repocard::format::format_age;
///
/// let now = Utc::now();
/// assert_eq!(format_age(now - Duration::days(400), now), "1y");
/// assert_eq!(format_age(now - Duration::hours(5), now), "5h");
/// ```
pub fn format_age(then: DateTime<Utc,>, now: DateTime<Utc,>,) -> String
{
    let seconds = (now - then).num_seconds().max(0,);

    let units = [
        (SECONDS_PER_YEAR, "y",),
        (SECONDS_PER_MONTH, "mo",),
        (SECONDS_PER_DAY, "d",),
        (SECONDS_PER_HOUR, "h",),
        (SECONDS_PER_MINUTE, "m",),
    ];

    for (unit_seconds, suffix,) in units {
        let count = seconds / unit_seconds;
        if count >= 1 {
            return format!("{count}{suffix}");
        }
    }

    format!("{seconds}s")
}

#[cfg(test)]
mod tests
{
    use chrono::{Duration, TimeZone};

    use super::*;

    #[test]
    fn small_counts_are_literal()
    {
        assert_eq!(k_formatter(0,), "0");
        assert_eq!(k_formatter(42,), "42");
        assert_eq!(k_formatter(999,), "999");
    }

    #[test]
    fn thousands_use_one_trimmed_decimal()
    {
        assert_eq!(k_formatter(1_000,), "1k");
        assert_eq!(k_formatter(1_049,), "1k");
        assert_eq!(k_formatter(1_050,), "1.1k");
        assert_eq!(k_formatter(1_500,), "1.5k");
        assert_eq!(k_formatter(12_345,), "12.3k");
        assert_eq!(k_formatter(999_949,), "999.9k");
    }

    #[test]
    fn millions_switch_to_mega_suffix()
    {
        assert_eq!(k_formatter(999_950,), "1M");
        assert_eq!(k_formatter(2_000_000,), "2M");
        assert_eq!(k_formatter(2_340_000,), "2.3M");
        assert!(k_formatter(u64::MAX,).ends_with('M'));
    }

    fn at(days: i64, seconds: i64,) -> (DateTime<Utc,>, DateTime<Utc,>,)
    {
        let now = Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0,).unwrap();
        (now - Duration::days(days,) - Duration::seconds(seconds,), now,)
    }

    #[test]
    fn four_hundred_days_is_one_year()
    {
        let (then, now,) = at(400, 0,);
        assert_eq!(format_age(then, now,), "1y");
    }

    #[test]
    fn picks_largest_whole_unit()
    {
        let cases = [
            (at(800, 0,), "2y",),
            (at(364, 0,), "12mo",),
            (at(45, 0,), "1mo",),
            (at(29, 0,), "29d",),
            (at(0, 3 * 3600 + 59,), "3h",),
            (at(0, 61,), "1m",),
            (at(0, 59,), "59s",),
            (at(0, 0,), "0s",),
        ];
        for ((then, now,), expected,) in cases {
            assert_eq!(format_age(then, now,), expected);
        }
    }

    #[test]
    fn future_timestamps_clamp_to_zero()
    {
        let (now, _,) = at(0, 0,);
        assert_eq!(format_age(now + Duration::days(3,), now,), "0s");
    }
}
