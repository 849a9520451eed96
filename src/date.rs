//! Day-boundary arithmetic and pattern-based date formatting

use chrono::{DateTime, Datelike, Local, NaiveDateTime, NaiveTime, TimeZone, Timelike};
use once_cell::sync::Lazy;
use regex::Regex;
use tracing::trace;

/// Hours in a day
pub const DAY_HOURS: i64 = 24;
/// Minutes in a day
pub const DAY_MINUTES: i64 = DAY_HOURS * 60;
/// Seconds in a day
pub const DAY_SECONDS: i64 = DAY_MINUTES * 60;
/// Milliseconds in a day
pub const DAY_MILLIS: i64 = DAY_SECONDS * 1000;

/// Millisecond timestamp of midnight on the day of `date`, shifted by
/// `day_offset` whole days.
///
/// Midnight is taken in the time zone of `date`. If a DST transition skips
/// midnight, the first instant of that day is used instead.
pub fn wee_time<Tz: TimeZone>(date: &DateTime<Tz>, day_offset: i64) -> i64 {
    let midnight = date.date_naive().and_time(NaiveTime::MIN);
    let wee = match date.timezone().from_local_datetime(&midnight).earliest() {
        Some(start) => start.timestamp_millis(),
        None => {
            let since_midnight = date.time() - NaiveTime::MIN;
            date.timestamp_millis() - since_midnight.num_milliseconds()
        }
    };
    wee + day_offset * DAY_MILLIS
}

/// True when both dates fall on the same calendar day
pub fn is_same_day<Tz1: TimeZone, Tz2: TimeZone>(date: &DateTime<Tz1>, another: &DateTime<Tz2>) -> bool {
    wee_time(date, 0) == wee_time(another, 0)
}

/// True when `date` falls on the current local day
pub fn is_today<Tz: TimeZone>(date: &DateTime<Tz>) -> bool {
    is_same_day(&date.with_timezone(&Local), &Local::now())
}

/// True when `date` lies within `[start, end]`, bounds included
pub fn is_in_date<Tz: TimeZone>(date: &DateTime<Tz>, start: &DateTime<Tz>, end: &DateTime<Tz>) -> bool {
    date >= start && date <= end
}

/// Number of calendar days between the local dates of `a` and `b`, always
/// non-negative
pub fn day_difference<Tz: TimeZone>(a: &DateTime<Tz>, b: &DateTime<Tz>) -> i64 {
    (a.date_naive() - b.date_naive()).num_days().abs()
}

type FieldFn = fn(&NaiveDateTime) -> u32;

static YEAR_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"y+").unwrap());

// Order matters: month is tried before minute
static FIELD_REGEXES: Lazy<Vec<(Regex, FieldFn)>> = Lazy::new(|| {
    let fields: [(&str, FieldFn); 7] = [
        ("M+", |d| d.month()),
        ("d+", |d| d.day()),
        ("h+", |d| d.hour()),
        ("m+", |d| d.minute()),
        ("s+", |d| d.second()),
        ("q+", |d| (d.month() + 2) / 3),
        ("S", |d| d.nanosecond() / 1_000_000 % 1000),
    ];
    fields
        .into_iter()
        .map(|(pattern, field)| (Regex::new(pattern).unwrap(), field))
        .collect()
});

/// Formats `date` by substituting the first run of each pattern letter.
///
/// | Letters | Field |
/// |---|---|
/// | `y+` | year, keeping the last N digits (`yyyy` → `2019`, `yy` → `19`) |
/// | `M+` | month |
/// | `d+` | day of month |
/// | `h+` | hour, 24-hour clock |
/// | `m+` | minute |
/// | `s+` | second |
/// | `q+` | quarter |
/// | `S` | milliseconds |
///
/// A single letter prints the bare number, a longer run pads it to two digits.
/// Only the first run of each letter is replaced; everything else is copied
/// through.
///
/// ```
/// use chrono::{FixedOffset, TimeZone};
/// use href_kit::date::format_date;
///
/// let date = FixedOffset::east_opt(8 * 3600).unwrap()
///     .with_ymd_and_hms(2019, 9, 30, 14, 30, 20).unwrap();
/// assert_eq!(format_date(&date, "yyyy-MM-dd hh:mm:ss"), "2019-09-30 14:30:20");
/// ```
pub fn format_date<Tz: TimeZone>(date: &DateTime<Tz>, pattern: &str) -> String {
    let local = date.naive_local();
    let mut formatted = pattern.to_string();

    if let Some(run) = YEAR_REGEX.find(&formatted) {
        let year = local.year().to_string();
        let width = run.len();
        let start = if width <= 4 {
            (4 - width).min(year.len())
        } else {
            year.len().saturating_sub(width - 4)
        };
        formatted.replace_range(run.range(), &year[start..]);
    }

    for (regex, field) in FIELD_REGEXES.iter() {
        if let Some(run) = regex.find(&formatted) {
            let value = field(&local);
            let text = if run.len() == 1 {
                value.to_string()
            } else {
                format!("{:02}", value % 100)
            };
            formatted.replace_range(run.range(), &text);
        }
    }

    trace!("Formatted {:?} as {:?}", pattern, formatted);
    formatted
}
