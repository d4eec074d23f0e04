// SPDX-FileCopyrightText: 2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;

use clap::{Arg, ArgMatches, Command, arg};
use colored::Colorize;
use dayspan_core::{Date, Range, RangePosition};

use crate::Config;
use crate::parser::parse_date;

#[derive(Debug, Clone)]
pub struct CmdPeriod {
    /// The raw `from` and `to` dates, validated when the command runs.
    pub dates: Vec<String>,

    /// The date to locate in the period, today if unset.
    pub on: Option<Date>,
}

impl CmdPeriod {
    pub const NAME: &str = "period";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .alias("range")
            .about("Inspect the period between two dates")
            .arg(
                Arg::new("dates")
                    .value_name("DATE")
                    .help("The `from` and `to` dates of the period, as YYYY-M-D")
                    .num_args(1..)
                    .required(true),
            )
            .arg(
                arg!(--on <DATE> "The date to locate in the period, defaults to today")
                    .value_parser(parse_date),
            )
    }

    pub fn from(matches: &ArgMatches) -> Self {
        let dates = matches
            .get_many::<String>("dates")
            .map(|values| values.cloned().collect())
            .unwrap_or_default();
        let on = matches.get_one::<Date>("on").copied();
        Self { dates, on }
    }

    pub fn run(self, config: &Config) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "inspecting period...");
        let range = Range::parse_period_from_slice(&self.dates)?;
        let on = self.on.unwrap_or_else(Date::today);
        print!("{}", Self::report(config, &range, &on));
        Ok(())
    }

    fn report(config: &Config, range: &Range, on: &Date) -> String {
        let period = format!(
            "{} - {}",
            config.render_date(&range.start()),
            config.render_date(&range.end())
        );
        let empty = if range.is_empty() { "yes".yellow() } else { "no".normal() };
        let position = match range.position(on) {
            RangePosition::Before => "before the period".normal(),
            RangePosition::InRange => "in the period".green(),
            RangePosition::After => "after the period".normal(),
            RangePosition::InvalidRange => "outside the empty period".yellow(),
        };

        format!(
            "{:<10}{}\n{:<10}{}\n{:<10}{} - {}\n{:<10}{} is {}\n",
            "Period:",
            period,
            "Empty:",
            empty,
            "Months:",
            range.start_month(),
            range.end_month(),
            "Date:",
            config.render_date(on),
            position,
        )
    }
}
