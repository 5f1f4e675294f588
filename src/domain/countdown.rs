use chrono::{DateTime, Local, LocalResult, NaiveDate, NaiveDateTime, TimeZone};
use std::fmt;

const MS_PER_SECOND: i64 = 1_000;
const MS_PER_MINUTE: i64 = 60 * MS_PER_SECOND;
const MS_PER_HOUR: i64 = 60 * MS_PER_MINUTE;
const MS_PER_DAY: i64 = 24 * MS_PER_HOUR;

/// Datetime forms accepted besides the plain YYYY-MM-DD date
const FALLBACK_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M",
];

/// Remaining time until the target, broken into display buckets.
///
/// Always the floor decomposition of max(0, target - now): days is
/// unbounded, hours < 24, minutes < 60, seconds < 60. All zeros once the
/// target has been reached or passed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TimeLeft {
    pub days: u64,
    pub hours: u64,
    pub minutes: u64,
    pub seconds: u64,
}

impl TimeLeft {
    pub const ZERO: TimeLeft = TimeLeft {
        days: 0,
        hours: 0,
        minutes: 0,
        seconds: 0,
    };

    /// Decompose a millisecond difference into day/hour/minute/second
    /// buckets. Non-positive input collapses to zero. Truncating division
    /// only, so the result understates the remaining time by up to one
    /// second.
    pub fn from_millis(diff_ms: i64) -> Self {
        if diff_ms <= 0 {
            return Self::ZERO;
        }

        Self {
            days: (diff_ms / MS_PER_DAY) as u64,
            hours: ((diff_ms / MS_PER_HOUR) % 24) as u64,
            minutes: ((diff_ms / MS_PER_MINUTE) % 60) as u64,
            seconds: ((diff_ms / MS_PER_SECOND) % 60) as u64,
        }
    }

    pub fn is_zero(&self) -> bool {
        *self == Self::ZERO
    }

    /// Total remaining whole seconds (for the one-line `show` output and
    /// for checking tick-to-tick behavior)
    pub fn total_seconds(&self) -> u64 {
        self.days * 86_400 + self.hours * 3_600 + self.minutes * 60 + self.seconds
    }
}

impl fmt::Display for TimeLeft {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}d {:02}:{:02}:{:02}",
            self.days, self.hours, self.minutes, self.seconds
        )
    }
}

/// Parse a target date string into a local instant.
///
/// The primary form is a bare calendar date ("YYYY-MM-DD"), taken as local
/// midnight of that day. A few datetime forms are accepted as fallbacks.
/// Anything else is None - an unparsable target is "no countdown", never
/// an error.
pub fn parse_target_date(s: &str) -> Option<DateTime<Local>> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }

    if let Ok(date) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return local_midnight(date);
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Local));
    }

    for format in FALLBACK_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, format) {
            if let Some(resolved) = resolve_local(dt) {
                return Some(resolved);
            }
        }
    }

    None
}

/// Local midnight of a calendar date. Some zones skip midnight on DST
/// transition days; fall back to the first valid hour in that case.
fn local_midnight(date: NaiveDate) -> Option<DateTime<Local>> {
    let midnight = date.and_hms_opt(0, 0, 0)?;
    resolve_local(midnight).or_else(|| {
        let one_am = date.and_hms_opt(1, 0, 0)?;
        resolve_local(one_am)
    })
}

fn resolve_local(dt: NaiveDateTime) -> Option<DateTime<Local>> {
    match Local.from_local_datetime(&dt) {
        LocalResult::Single(t) => Some(t),
        LocalResult::Ambiguous(earliest, _) => Some(earliest),
        LocalResult::None => None,
    }
}

/// Compute the remaining time from a raw date string and the current time.
///
/// Pure function of its two inputs: empty or unparsable strings and past
/// targets all yield the zero TimeLeft.
pub fn compute_time_left(date_str: &str, now: DateTime<Local>) -> TimeLeft {
    let Some(target) = parse_target_date(date_str) else {
        return TimeLeft::ZERO;
    };

    TimeLeft::from_millis(target.timestamp_millis() - now.timestamp_millis())
}
