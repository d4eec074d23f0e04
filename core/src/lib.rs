// SPDX-FileCopyrightText: 2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Day-precision dates and closed date ranges.
//!
//! ```
//! use dayspan_core::{Date, Range};
//!
//! let range = Range::parse_period("2021-8-30", "2021-9-2").unwrap();
//! assert!(range.includes(&Date::from_ymd(2021, 9, 1)));
//! assert_eq!(range.to_string(), "Aug 30, 2021 - Sep 2, 2021");
//! ```

mod date;
mod error;
mod range;

pub use crate::date::Date;
pub use crate::error::{DateParseError, PeriodError, PeriodSide};
pub use crate::range::{Range, RangePosition};
