// SPDX-FileCopyrightText: 2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::fmt;

/// Errors that can occur when parsing a date in the `YYYY-M-D` layout.
#[derive(Debug, Clone, thiserror::Error)]
pub enum DateParseError {
    /// The input does not match the layout.
    ///
    /// Example: `2021/08/31` or `21-8-31` instead of `2021-8-31`
    #[error("cannot parse `{input}` as YYYY-M-D")]
    Layout {
        /// The rejected input
        input: String,
    },

    /// The input matches the layout but names a day that does not exist.
    ///
    /// Example: `2021-2-30` or `2021-13-1`
    #[error("`{input}` is not a calendar date: {source}")]
    Invalid {
        /// The rejected input
        input: String,
        /// Why the calendar rejected it
        source: jiff::Error,
    },
}

/// Errors returned when building a [`crate::Range`] from text.
#[derive(Debug, Clone, thiserror::Error)]
pub enum PeriodError {
    /// One side of the period could not be parsed.
    #[error("error parsing `{side}` date: {source}")]
    Parse {
        /// Which side failed
        side: PeriodSide,
        /// The underlying parse failure
        source: DateParseError,
    },

    /// The period was not given as exactly two dates.
    #[error("expected `from` and `to` period dates, got {count} value(s)")]
    Argument {
        /// Number of values received
        count: usize,
    },
}

/// The side of a period a date belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PeriodSide {
    /// The first date of the period.
    From,

    /// The last date of the period.
    To,
}

impl fmt::Display for PeriodSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PeriodSide::From => write!(f, "from"),
            PeriodSide::To => write!(f, "to"),
        }
    }
}
