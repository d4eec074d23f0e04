// SPDX-FileCopyrightText: 2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use dayspan_core::{Date, Range};

#[test]
fn includes() {
    let one_day = Range::new(Date::from_ymd(2021, 8, 30), Date::from_ymd(2021, 8, 30));
    let two_days = Range::new(Date::from_ymd(2021, 8, 30), Date::from_ymd(2021, 9, 1));
    let three_days = Range::new(Date::from_ymd(2021, 8, 30), Date::from_ymd(2021, 9, 2));

    let cases = [
        ("empty", Range::empty(), Date::today(), false),
        ("one day", one_day, Date::from_ymd(2021, 8, 30), true),
        ("two days, include start", two_days, Date::from_ymd(2021, 8, 30), true),
        ("two days, include end", two_days, Date::from_ymd(2021, 9, 1), true),
        ("three days", three_days, Date::from_ymd(2021, 9, 1), true),
        ("three days, end", three_days, Date::from_ymd(2021, 9, 2), true),
        ("outside period, before start", three_days, Date::from_ymd(2021, 8, 29), false),
        ("outside period, after end", three_days, Date::from_ymd(2021, 9, 3), false),
    ];
    for (name, range, date, want) in cases {
        assert_eq!(range.includes(&date), want, "{name}");
    }
}

#[test]
fn is_empty() {
    let cases = [
        (Range::default(), true),
        (Range::empty(), true),
        (
            Range::new(Date::from_ymd(2021, 10, 2), Date::from_ymd(2021, 10, 1)),
            true,
        ),
        (
            Range::new(Date::from_ymd(2021, 10, 2), Date::from_ymd(2021, 10, 2)),
            false,
        ),
        (
            Range::new(Date::from_ymd(2021, 10, 2), Date::from_ymd(2021, 10, 3)),
            false,
        ),
    ];
    for (range, want) in cases {
        assert_eq!(range.is_empty(), want, "{range}");
    }
}

#[test]
fn equals() {
    let range = Range::new(Date::from_ymd(2021, 8, 31), Date::from_ymd(2021, 9, 2));
    let same = Range::new(Date::from_ymd(2021, 8, 31), Date::from_ymd(2021, 9, 2));
    let other = Range::new(Date::from_ymd(2021, 8, 31), Date::from_ymd(2021, 9, 3));
    assert!(range.equals(&same));
    assert_eq!(range, same);
    assert!(!range.equals(&other));
    assert_ne!(range, other);
}

#[test]
fn months_of_ends() {
    let range = Range::new(Date::from_ymd(2021, 12, 30), Date::from_ymd(2022, 1, 2));
    assert_eq!(range.start_month(), 12);
    assert_eq!(range.end_month(), 1);
}

#[test]
fn displays_both_ends() {
    let range = Range::new(Date::from_ymd(2021, 10, 1), Date::from_ymd(2021, 10, 4));
    assert_eq!(range.to_string(), "Oct 1, 2021 - Oct 4, 2021");
    assert_eq!(Range::default().to_string(), "Jan 1, 0001 - Jan 1, 0001");
}
