// SPDX-FileCopyrightText: 2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;

use clap::{ArgMatches, Command, arg, value_parser};
use dayspan_core::Date;

use crate::Config;
use crate::parser::{arg_date, get_date};

/// Moves a date by whole months, landing on the first day of the month.
#[derive(Debug, Clone, Copy)]
pub struct CmdShift {
    pub date: Date,
    pub months: i32,
}

impl CmdShift {
    pub const NAME: &str = "shift";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .about("Move a date by a number of months, resetting the day to the 1st")
            .arg(arg_date("date", "The date to move, as YYYY-M-D"))
            .arg(
                arg!(months: <MONTHS> "Number of months to move, negative to move back")
                    .value_parser(value_parser!(i32))
                    .allow_negative_numbers(true),
            )
    }

    pub fn from(matches: &ArgMatches) -> Self {
        let date = get_date(matches, "date");
        let months = matches
            .get_one::<i32>("months")
            .copied()
            .expect("months is required");
        Self { date, months }
    }

    pub fn run(self, config: &Config) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "shifting date...");
        println!("{}", config.render_date(&self.shifted()));
        Ok(())
    }

    pub fn shifted(&self) -> Date {
        self.date.add_months_reset_day(self.months)
    }
}
