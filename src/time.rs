//! Date/time recognition for the `Time` conversion target.
//!
//! Parsing walks [`TimeLayout::DEFAULTS`] in order and keeps the first layout
//! that accepts the input. Layouts without zone information resolve to UTC.
//!
//! Zone abbreviations such as `MST` or `GMT` are accepted wherever a layout
//! names one, but they carry no offset: the time is always read as UTC.
//! Only numeric offsets (`-0700`, `+02:00`) shift the result.

use crate::{Error, Result};
use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Utc};
use tracing::trace;

/// A recognized date/time layout.
///
/// The numeric `YYYY-MM-DD` layouts accept fractional seconds. Zone
/// abbreviations resolve to UTC in every layout that allows them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TimeLayout {
    /// `2006-01-02 15:04:05`, fractional seconds optional
    DateTime,
    /// `2006-01-02 15:04:05 -0700 MST`, fractional seconds and zone name optional
    DateTimeZone,
    /// `2006-01-02T15:04:05Z07:00`, fractional seconds optional
    Rfc3339,
    /// `Mon Jan _2 15:04:05 2006`
    Ansic,
    /// `Mon Jan _2 15:04:05 MST 2006`
    UnixDate,
    /// `Mon Jan 02 15:04:05 -0700 2006`
    RubyDate,
    /// `02 Jan 06 15:04 MST`
    Rfc822,
    /// `02 Jan 06 15:04 -0700`
    Rfc822Z,
    /// `Mon, 02 Jan 2006 15:04:05 MST`
    Rfc1123,
    /// `Mon, 02 Jan 2006 15:04:05 -0700`
    Rfc1123Z,
    /// `3:04PM`
    Kitchen,
}

impl TimeLayout {
    /// Layouts in the order they are attempted.
    pub const DEFAULTS: [TimeLayout; 11] = [
        TimeLayout::DateTime,
        TimeLayout::DateTimeZone,
        TimeLayout::Rfc3339,
        TimeLayout::Ansic,
        TimeLayout::UnixDate,
        TimeLayout::RubyDate,
        TimeLayout::Rfc822,
        TimeLayout::Rfc822Z,
        TimeLayout::Rfc1123,
        TimeLayout::Rfc1123Z,
        TimeLayout::Kitchen,
    ];

    /// Attempts to parse `input` with this layout.
    #[must_use]
    pub fn parse(&self, input: &str) -> Option<DateTime<FixedOffset>> {
        match self {
            TimeLayout::DateTime => naive_utc(input, "%Y-%m-%d %H:%M:%S%.f"),
            TimeLayout::DateTimeZone => {
                let numeric = strip_zone_name(input);
                DateTime::parse_from_str(numeric, "%Y-%m-%d %H:%M:%S%.f %z")
                    .or_else(|_| DateTime::parse_from_str(numeric, "%Y-%m-%d %H:%M:%S%.f %:z"))
                    .ok()
            }
            TimeLayout::Rfc3339 => {
                if input.as_bytes().get(10) != Some(&b'T') {
                    return None;
                }
                DateTime::parse_from_rfc3339(input).ok()
            }
            TimeLayout::Ansic => naive_utc(input, "%a %b %e %H:%M:%S %Y"),
            TimeLayout::UnixDate => {
                let fields: Vec<&str> = input.split_whitespace().collect();
                match fields.as_slice() {
                    [wd, mon, day, clock, zone, year] if is_zone_name(zone) => naive_utc(
                        &format!("{} {} {} {} {}", wd, mon, day, clock, year),
                        "%a %b %e %H:%M:%S %Y",
                    ),
                    _ => None,
                }
            }
            TimeLayout::RubyDate => {
                DateTime::parse_from_str(input, "%a %b %d %H:%M:%S %z %Y").ok()
            }
            TimeLayout::Rfc822 => {
                let stripped = strip_zone_name(input);
                if stripped.len() == input.len() {
                    return None;
                }
                naive_utc(stripped, "%d %b %y %H:%M")
            }
            TimeLayout::Rfc822Z => DateTime::parse_from_str(input, "%d %b %y %H:%M %z").ok(),
            TimeLayout::Rfc1123 => {
                let stripped = strip_zone_name(input);
                if stripped.len() == input.len() {
                    return None;
                }
                naive_utc(stripped, "%a, %d %b %Y %H:%M:%S")
            }
            TimeLayout::Rfc1123Z => {
                DateTime::parse_from_str(input, "%a, %d %b %Y %H:%M:%S %z").ok()
            }
            TimeLayout::Kitchen => {
                let time = NaiveTime::parse_from_str(input, "%I:%M%p").ok()?;
                let date = NaiveDate::from_ymd_opt(0, 1, 1)?;
                Some(Utc.from_utc_datetime(&date.and_time(time)).into())
            }
        }
    }
}

/// Seconds from the Unix epoch back to `0001-01-01T00:00:00Z`.
const ZERO_TIME_SECS: i64 = -62_135_596_800;

/// Returns the zero-value time, `0001-01-01T00:00:00Z`.
#[must_use]
pub fn zero_time() -> DateTime<FixedOffset> {
    Utc.timestamp_opt(ZERO_TIME_SECS, 0)
        .single()
        .unwrap_or_default()
        .into()
}

/// Returns `true` if `input` is an all-zero date/time skeleton such as
/// `0000-00-00` or `0000-00-00T00:00:00Z`.
#[must_use]
pub fn is_zero_skeleton(input: &str) -> bool {
    let digits: String = input
        .trim()
        .chars()
        .map(|c| match c {
            '-' | ':' | ' ' | 'T' | 'Z' => '0',
            other => other,
        })
        .collect();

    matches!(digits.parse::<i64>(), Ok(0))
}

/// Parses `input` as a date/time.
///
/// `"now"` yields the current instant and zero skeletons yield
/// [`zero_time`]; everything else must match one of the
/// [`TimeLayout::DEFAULTS`].
///
/// # Errors
///
/// Returns [`Error::UnparseableTime`] if no rule accepts the input.
pub fn parse_time(input: &str) -> Result<DateTime<FixedOffset>> {
    if input == "now" {
        return Ok(Utc::now().into());
    }

    if is_zero_skeleton(input) {
        return Ok(zero_time());
    }

    let trimmed = input.trim();
    for layout in TimeLayout::DEFAULTS {
        if let Some(dt) = layout.parse(trimmed) {
            trace!(?layout, input, "matched time layout");
            return Ok(dt);
        }
    }

    Err(Error::UnparseableTime(input.to_string()))
}

fn naive_utc(input: &str, format: &str) -> Option<DateTime<FixedOffset>> {
    NaiveDateTime::parse_from_str(input, format)
        .ok()
        .map(|naive| Utc.from_utc_datetime(&naive).into())
}

fn is_zone_name(s: &str) -> bool {
    !s.is_empty() && s.chars().all(|c| c.is_ascii_alphabetic())
}

/// Drops a trailing alphabetic zone abbreviation such as ` MST`.
fn strip_zone_name(input: &str) -> &str {
    match input.rsplit_once(' ') {
        Some((head, tail)) if is_zone_name(tail) => head,
        _ => input,
    }
}
