// SPDX-FileCopyrightText: 2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! dayspan - day-precision dates and periods on the command line

use std::process::ExitCode;

fn main() -> ExitCode {
    dayspan_cli::run()
}
