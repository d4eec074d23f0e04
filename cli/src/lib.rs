// SPDX-FileCopyrightText: 2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

mod cli;
mod cmd_compare;
mod cmd_generate_completion;
mod cmd_period;
mod cmd_shift;
mod cmd_today;
mod config;
mod parser;

pub use crate::cli::{Cli, Commands, run};
pub use crate::config::{APP_NAME, Config};
