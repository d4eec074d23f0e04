// SPDX-FileCopyrightText: 2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::fmt;

use crate::{Date, PeriodError, PeriodSide};

/// The position of a date relative to a range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RangePosition {
    /// The date is before the start of the range.
    Before,

    /// The date is within the range.
    InRange,

    /// The date is after the end of the range.
    After,

    /// The range is empty, e.g., start date is after end date.
    InvalidRange,
}

/// A closed range of dates, inclusive at both ends.
///
/// Any pair of dates makes a range. A range whose start is after its end, or whose ends are both
/// unset, is empty.
#[derive(Debug, Clone, Copy, Default)]
pub struct Range {
    start: Date,
    end: Date,
}

impl Range {
    /// A range that represents "no period". Check it with [`Range::is_empty`], not by its dates.
    pub fn empty() -> Self {
        Self::new(Date::from_ymd(1970, 1, 3), Date::from_ymd(1970, 1, 2))
    }

    pub fn new(start: Date, end: Date) -> Self {
        Self { start, end }
    }

    /// Parses a period from two dates in the `YYYY-M-D` layout.
    pub fn parse_period(from: &str, to: &str) -> Result<Self, PeriodError> {
        let start = parse_side(PeriodSide::From, from)?;
        let end = parse_side(PeriodSide::To, to)?;
        Ok(Self::new(start, end))
    }

    /// Parses a period given as exactly two dates, `[from, to]`.
    pub fn parse_period_from_slice<S: AsRef<str>>(parts: &[S]) -> Result<Self, PeriodError> {
        match parts {
            [from, to] => Self::parse_period(from.as_ref(), to.as_ref()),
            _ => Err(PeriodError::Argument { count: parts.len() }),
        }
    }

    pub fn start(&self) -> Date {
        self.start
    }

    pub fn end(&self) -> Date {
        self.end
    }

    /// Month of the start date, 1-12.
    pub fn start_month(&self) -> i8 {
        self.start.month()
    }

    /// Month of the end date, 1-12.
    pub fn end_month(&self) -> i8 {
        self.end.month()
    }

    pub fn is_empty(&self) -> bool {
        if self.start.is_zero() && self.end.is_zero() {
            return true;
        }

        self.start.after(&self.end)
    }

    /// Whether `date` lies between the start and the end, both included.
    ///
    /// NOTE: This only compares the boundaries, check [`Range::is_empty`] first if it matters.
    pub fn includes(&self, date: &Date) -> bool {
        !date.before(&self.start) && !date.after(&self.end)
    }

    pub fn equals(&self, other: &Range) -> bool {
        self.start.equals(&other.start) && self.end.equals(&other.end)
    }

    /// Determines the position of `date` relative to the range.
    pub fn position(&self, date: &Date) -> RangePosition {
        if self.is_empty() {
            RangePosition::InvalidRange
        } else if date.before(&self.start) {
            RangePosition::Before
        } else if date.after(&self.end) {
            RangePosition::After
        } else {
            RangePosition::InRange
        }
    }
}

fn parse_side(side: PeriodSide, text: &str) -> Result<Date, PeriodError> {
    text.parse().map_err(|source| {
        tracing::debug!(%side, text, "failed to parse period date");
        PeriodError::Parse { side, source }
    })
}

impl PartialEq for Range {
    fn eq(&self, other: &Self) -> bool {
        self.equals(other)
    }
}

impl Eq for Range {}

impl fmt::Display for Range {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.start, self.end)
    }
}
