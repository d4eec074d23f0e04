// SPDX-FileCopyrightText: 2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;

use clap::{ArgMatches, Command};
use dayspan_core::Date;

use crate::Config;

#[derive(Debug, Default, Clone, Copy)]
pub struct CmdToday;

impl CmdToday {
    pub const NAME: &str = "today";

    pub fn command() -> Command {
        Command::new(Self::NAME).about("Show the current date")
    }

    pub fn from(_matches: &ArgMatches) -> Self {
        CmdToday
    }

    pub fn run(self, config: &Config) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "showing the current date...");
        println!("{}", config.render_date(&Date::now()));
        Ok(())
    }
}
