// SPDX-FileCopyrightText: 2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use dayspan_core::Date;

#[test]
fn displays_abbreviated_month() {
    assert_eq!(Date::from_ymd(2021, 10, 4).to_string(), "Oct 4, 2021");
    assert_eq!(Date::from_ymd(2021, 8, 31).to_string(), "Aug 31, 2021");
}

#[test]
fn displays_zero_date() {
    assert_eq!(Date::default().to_string(), "Jan 1, 0001");
    assert_eq!(Date::from_ymd(1, 1, 1).to_string(), "Jan 1, 0001");
}

#[test]
fn formats_with_layout() {
    let date = Date::from_ymd(2021, 10, 4);
    assert_eq!(date.format("%Y-%m-%d").to_string(), "2021-10-04");
    assert_eq!(date.format("%d/%m/%Y").to_string(), "04/10/2021");
}

#[test]
fn formats_midnight_utc() {
    let date = Date::from_ymd(2021, 10, 4);
    assert_eq!(date.format("%H:%M:%S %z").to_string(), "00:00:00 +0000");
}
