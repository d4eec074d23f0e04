// SPDX-FileCopyrightText: 2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use dayspan_core::Date;

#[test]
fn year_month_equal() {
    let date = Date::from_ymd(2021, 8, 31);
    let cases = [
        (Date::from_ymd(2021, 8, 31), true),
        (Date::from_ymd(2021, 8, 1), true),
        (Date::from_ymd(2021, 9, 1), false),
        (Date::from_ymd(2021, 7, 1), false),
        (Date::from_ymd(2020, 8, 31), false),
        (Date::from_ymd(2022, 8, 31), false),
    ];
    for (arg, want) in cases {
        assert_eq!(date.year_month_equal(&arg), want, "{date} vs {arg}");
    }
}

#[test]
fn day_before_or_equals() {
    let cases = [
        // the same day
        (Date::from_ymd(2021, 8, 31), Date::from_ymd(2021, 8, 31), true),
        // one day before
        (Date::from_ymd(2021, 7, 31), Date::from_ymd(2021, 8, 1), true),
        // one month before
        (Date::from_ymd(2021, 7, 1), Date::from_ymd(2021, 8, 1), true),
        // one year before
        (Date::from_ymd(2020, 8, 1), Date::from_ymd(2021, 8, 1), true),
        // one day after
        (Date::from_ymd(2021, 9, 1), Date::from_ymd(2021, 8, 31), false),
    ];
    for (date, arg, want) in cases {
        assert_eq!(date.day_before_or_equals(&arg), want, "{date} vs {arg}");
    }
}

#[test]
fn day_before() {
    let cases = [
        // one day after
        (Date::from_ymd(2021, 9, 1), Date::from_ymd(2021, 8, 31), false),
        // the same day
        (Date::from_ymd(2021, 8, 31), Date::from_ymd(2021, 8, 31), false),
        // one day before and an earlier month
        (Date::from_ymd(2021, 7, 31), Date::from_ymd(2021, 8, 1), true),
        // one month before
        (Date::from_ymd(2021, 7, 31), Date::from_ymd(2021, 8, 31), true),
        // one year before
        (Date::from_ymd(2020, 8, 1), Date::from_ymd(2021, 8, 1), true),
    ];
    for (date, arg, want) in cases {
        assert_eq!(date.day_before(&arg), want, "{date} vs {arg}");
    }
}

#[test]
fn day_before_ignores_day_within_month() {
    let early = Date::from_ymd(2021, 8, 1);
    let late = Date::from_ymd(2021, 8, 31);
    assert!(!early.day_before(&late));
    assert!(!late.day_before(&early));
}

#[test]
fn day_before_with_earlier_year_and_later_month() {
    let date = Date::from_ymd(2020, 12, 31);
    let arg = Date::from_ymd(2021, 1, 1);
    assert!(date.day_before(&arg));
    assert!(!arg.day_before(&date));
}

#[test]
fn equals() {
    let cases = [
        // the same day
        (Date::from_ymd(2021, 8, 31), Date::from_ymd(2021, 8, 31), true),
        // one day after
        (Date::from_ymd(2021, 9, 1), Date::from_ymd(2021, 8, 31), false),
        // one day before and an earlier month
        (Date::from_ymd(2021, 7, 31), Date::from_ymd(2021, 8, 1), false),
        // one month before
        (Date::from_ymd(2021, 7, 31), Date::from_ymd(2021, 8, 31), false),
        // one year before
        (Date::from_ymd(2020, 8, 1), Date::from_ymd(2021, 8, 1), false),
    ];
    for (date, arg, want) in cases {
        assert_eq!(date.equals(&arg), want, "{date} vs {arg}");
        assert_eq!(date == arg, want, "{date} vs {arg}");
    }
}

#[test]
fn before_and_after() {
    let earlier = Date::from_ymd(2021, 8, 31);
    let later = Date::from_ymd(2021, 9, 1);
    assert!(earlier.before(&later));
    assert!(!earlier.after(&later));
    assert!(later.after(&earlier));
    assert!(!later.before(&earlier));
    assert!(!earlier.before(&earlier));
    assert!(!earlier.after(&earlier));
}

#[test]
fn now_is_after_today() {
    let today = Date::today();
    let now = Date::now();
    assert!(!now.before(&today));
    assert!(now.year_month_equal(&today) || now.after(&today));
}
