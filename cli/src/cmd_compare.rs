// SPDX-FileCopyrightText: 2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;

use clap::{ArgMatches, Command};
use colored::Colorize;
use dayspan_core::Date;

use crate::Config;
use crate::parser::{arg_date, get_date};

#[derive(Debug, Clone, Copy)]
pub struct CmdCompare {
    pub left: Date,
    pub right: Date,
}

impl CmdCompare {
    pub const NAME: &str = "compare";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .alias("cmp")
            .about("Compare two dates")
            .arg(arg_date("left", "The first date, as YYYY-M-D"))
            .arg(arg_date("right", "The second date, as YYYY-M-D"))
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            left: get_date(matches, "left"),
            right: get_date(matches, "right"),
        }
    }

    pub fn run(self, config: &Config) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "comparing dates...");
        println!(
            "{} {}",
            config.render_date(&self.left).bold(),
            config.render_date(&self.right).bold()
        );
        print!("{}", self.report());
        Ok(())
    }

    /// Each relation between the two dates, one per line.
    pub fn report(&self) -> String {
        let (l, r) = (&self.left, &self.right);
        let relations = [
            ("equals", l.equals(r)),
            ("before", l.before(r)),
            ("after", l.after(r)),
            ("same month", l.year_month_equal(r)),
            ("earlier month", l.day_before(r)),
            ("same or earlier month", l.day_before_or_equals(r)),
        ];

        relations
            .into_iter()
            .map(|(name, value)| format!("{name:<24}{value}\n"))
            .collect()
    }
}
