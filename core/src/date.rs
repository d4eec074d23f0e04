// SPDX-FileCopyrightText: 2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;
use std::sync::OnceLock;

use jiff::civil::{self, DateTime, Time};
use jiff::fmt::strtime;
use jiff::tz::{Offset, TimeZone};
use jiff::{Span, Timestamp, Zoned};
use regex::Regex;

use crate::DateParseError;

/// The moment an unset date stands for: `0001-01-01T00:00:00` UTC.
const ZERO_MOMENT: DateTime = civil::datetime(1, 1, 1, 0, 0, 0, 0);

const MIN_YEAR: i64 = -9999;
const MAX_YEAR: i64 = 9999;

/// A calendar date with day precision.
///
/// The date wraps a moment truncated to midnight of its calendar day, normalized to UTC. A
/// `Date::default()` is *unset*: it is reported by [`Date::is_zero`] and otherwise behaves like
/// `0001-01-01`, so accessors, comparisons and rendering never fail.
///
/// Equality and ordering compare the stored moments.
#[derive(Debug, Clone, Copy, Default)]
pub struct Date {
    base: Option<DateTime>,
}

impl Date {
    /// The current moment in UTC.
    ///
    /// NOTE: The time of day is kept, so two calls made on the same day are not equal. Use
    /// [`Date::today`] for a truncated value.
    pub fn now() -> Self {
        Self {
            base: Some(Timestamp::now().to_zoned(TimeZone::UTC).datetime()),
        }
    }

    /// The current calendar day in UTC, truncated to midnight.
    pub fn today() -> Self {
        Self::from_timestamp(Timestamp::now())
    }

    /// Midnight UTC of the calendar day `moment` falls on in its own time zone.
    pub fn from_moment(moment: &Zoned) -> Self {
        Self::from_civil(moment.date())
    }

    /// Midnight UTC of the calendar day `timestamp` falls on in UTC.
    pub fn from_timestamp(timestamp: Timestamp) -> Self {
        Self::from_moment(&timestamp.to_zoned(TimeZone::UTC))
    }

    /// Midnight UTC of `year-month-day`.
    ///
    /// Values outside their usual ranges are normalized: month 13 is January of the next year,
    /// day 0 is the last day of the previous month. Years are clamped to `-9999..=9999`.
    pub fn from_ymd(year: i32, month: i32, day: i32) -> Self {
        let first = first_of_month(i64::from(year), i64::from(month) - 1);
        let date = match Span::new().try_days(i64::from(day) - 1) {
            Ok(span) => first.saturating_add(span),
            Err(_) if day > 0 => civil::Date::MAX,
            Err(_) => civil::Date::MIN,
        };
        Self::from_civil(date)
    }

    fn from_civil(date: civil::Date) -> Self {
        Self {
            base: Some(date.to_datetime(Time::midnight())),
        }
    }

    /// Whether the date is unset or holds the zero moment.
    pub fn is_zero(&self) -> bool {
        match self.base {
            None => true,
            Some(dt) => dt == ZERO_MOMENT,
        }
    }

    /// The stored moment as UTC wall-clock time.
    pub fn moment(&self) -> DateTime {
        self.base.unwrap_or(ZERO_MOMENT)
    }

    /// Year component.
    pub fn year(&self) -> i16 {
        self.moment().year()
    }

    /// Month component, 1-12.
    pub fn month(&self) -> i8 {
        self.moment().month()
    }

    /// Day component, 1-31.
    pub fn day(&self) -> i8 {
        self.moment().day()
    }

    pub fn after(&self, other: &Date) -> bool {
        self.moment() > other.moment()
    }

    pub fn before(&self, other: &Date) -> bool {
        self.moment() < other.moment()
    }

    pub fn equals(&self, other: &Date) -> bool {
        self.moment() == other.moment()
    }

    /// Whether both dates are in the same month of the same year.
    pub fn year_month_equal(&self, other: &Date) -> bool {
        self.year() == other.year() && self.month() == other.month()
    }

    /// Whether this date falls in an earlier month than `other`.
    ///
    /// Only the year and the month are compared, the day is ignored: two dates of the same month
    /// are never before one another.
    pub fn day_before(&self, other: &Date) -> bool {
        if self.year() < other.year() {
            return true;
        }

        self.year() == other.year() && self.month() < other.month()
    }

    /// Whether this date falls in the same or an earlier month than `other`.
    pub fn day_before_or_equals(&self, other: &Date) -> bool {
        self.year_month_equal(other) || self.day_before(other)
    }

    /// The first day of the month `months` months after this one, which may be negative.
    pub fn add_months_reset_day(&self, months: i32) -> Date {
        let year = i64::from(self.year());
        let month_index = i64::from(self.month()) - 1 + i64::from(months);
        Self::from_civil(first_of_month(year, month_index))
    }

    /// Renders the date with a strftime-style `layout`, as a moment in UTC.
    ///
    /// The rendering is lazy and lenient: a directive jiff cannot render is written out as is.
    /// Use [`Date::try_format`] to reject such layouts.
    ///
    /// NOTE: `-9999-01-01` and `9999-12-31` have no timestamp and render as civil times, so zone
    /// directives such as `%z` are written out as is for them. [`Date::try_format`] renders them
    /// with a UTC offset.
    pub fn format<'f, F: 'f + ?Sized + AsRef<[u8]>>(&self, layout: &'f F) -> strtime::Display<'f> {
        let dt = self.moment();
        match dt.to_zoned(TimeZone::UTC) {
            Ok(zoned) => zoned.strftime(layout),
            Err(_) => dt.strftime(layout),
        }
    }

    /// Renders the date with a strftime-style `layout`, as a moment in UTC.
    ///
    /// Fails on a malformed or unsupported directive.
    pub fn try_format(&self, layout: impl AsRef<[u8]>) -> Result<String, jiff::Error> {
        let dt = self.moment();
        match dt.to_zoned(TimeZone::UTC) {
            Ok(zoned) => strtime::format(layout, &zoned),
            Err(_) => {
                let mut tm = strtime::BrokenDownTime::from(dt);
                tm.set_offset(Some(Offset::UTC));
                tm.to_string(layout)
            }
        }
    }
}

/// The first day of the month `month_index` months after January of `year`.
fn first_of_month(year: i64, month_index: i64) -> civil::Date {
    let total = year.saturating_mul(12).saturating_add(month_index);
    let year = total.div_euclid(12);
    let month = total.rem_euclid(12) + 1;

    let clamped = year.clamp(MIN_YEAR, MAX_YEAR);
    if clamped != year {
        tracing::warn!(year, clamped, "year outside the supported range, clamping");
    }

    // Both components are in range after clamping.
    civil::date(clamped as i16, month as i8, 1)
}

impl PartialEq for Date {
    fn eq(&self, other: &Self) -> bool {
        self.equals(other)
    }
}

impl Eq for Date {}

impl Hash for Date {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.moment().hash(state);
    }
}

impl PartialOrd for Date {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Date {
    fn cmp(&self, other: &Self) -> Ordering {
        self.moment().cmp(&other.moment())
    }
}

/// Renders as `Mon D, YYYY`, e.g. `Oct 4, 2021`.
impl fmt::Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let dt = self.moment();
        write!(f, "{} {}, {:04}", dt.strftime("%b"), dt.day(), dt.year())
    }
}

/// Parses the `YYYY-M-D` layout: four year digits, one or two month and day digits.
impl FromStr for Date {
    type Err = DateParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        const RE: &str = r"^([0-9]{4})-([0-9]{1,2})-([0-9]{1,2})$";
        static REGEX: OnceLock<Regex> = OnceLock::new();
        let re = REGEX.get_or_init(|| Regex::new(RE).expect("date layout regex must compile"));

        let layout_error = || DateParseError::Layout {
            input: s.to_string(),
        };
        let captures = re.captures(s).ok_or_else(layout_error)?;
        let year = captures[1].parse().map_err(|_| layout_error())?;
        let month = captures[2].parse().map_err(|_| layout_error())?;
        let day = captures[3].parse().map_err(|_| layout_error())?;

        civil::Date::new(year, month, day)
            .map(Self::from_civil)
            .map_err(|source| DateParseError::Invalid {
                input: s.to_string(),
                source,
            })
    }
}

impl From<civil::Date> for Date {
    fn from(date: civil::Date) -> Self {
        Self::from_civil(date)
    }
}

impl From<Timestamp> for Date {
    fn from(timestamp: Timestamp) -> Self {
        Self::from_timestamp(timestamp)
    }
}

impl From<&Zoned> for Date {
    fn from(moment: &Zoned) -> Self {
        Self::from_moment(moment)
    }
}
