// SPDX-FileCopyrightText: 2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use clap::{Arg, ArgMatches};
use dayspan_core::{Date, DateParseError};

/// Value parser for dates in the `YYYY-M-D` layout.
pub fn parse_date(s: &str) -> Result<Date, DateParseError> {
    s.parse()
}

pub fn arg_date(id: &'static str, help: &'static str) -> Arg {
    Arg::new(id)
        .value_name("DATE")
        .help(help)
        .required(true)
        .value_parser(parse_date)
}

pub fn get_date(matches: &ArgMatches, id: &str) -> Date {
    matches
        .get_one::<Date>(id)
        .copied()
        .expect("date is required")
}
