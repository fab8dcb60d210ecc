//! Integration tests for `Date`: calendar rules, Julian Day conversion and
//! calendar arithmetic.

use gregor_time::date::{
    before_gregorian_calendar, day_of_week, day_of_year, days_in_month, is_30_days, is_31_days,
    is_leap_year, is_valid,
};
use gregor_time::{Date, Dst, Tm, Weekday};

fn date(y: i32, m: u8, d: u8) -> Date {
    Date::try_new(y, m, d).unwrap()
}

// ─── Calendar rules ───────────────────────────────────────────────────────────

#[test]
fn leap_years() {
    assert!(is_leap_year(2000));
    assert!(!is_leap_year(1900));
    assert!(is_leap_year(2024));
    assert!(!is_leap_year(2023));
    assert!(is_leap_year(0));
    assert!(is_leap_year(-4));
    assert!(!is_leap_year(-100));
    assert!(is_leap_year(-400));
}

#[test]
fn validity_mirrors_constructor() {
    let cases = [
        (2023, 2, 29, false),
        (2024, 2, 29, true),
        (2023, 4, 31, false),
        (2023, 12, 31, true),
        (2023, 0, 1, false),
        (2023, 13, 1, false),
        (2023, 1, 0, false),
        (0, 1, 1, true),
    ];
    for (y, m, d, expected) in cases {
        assert_eq!(is_valid(y, m, d), expected, "is_valid({y}, {m}, {d})");
        assert_eq!(
            Date::new(y, m, d).is_valid(),
            expected,
            "Date::new({y}, {m}, {d})"
        );
        assert_eq!(Date::try_new(y, m, d).is_ok(), expected);
    }
}

#[test]
fn fixed_month_lengths() {
    assert!(is_31_days(1) && is_31_days(7) && is_31_days(8) && is_31_days(12));
    assert!(is_30_days(4) && is_30_days(11));
    assert!(!is_31_days(2) && !is_30_days(2));
    assert!(!is_31_days(13) && !is_30_days(0));
    for m in 1..=12u8 {
        if is_31_days(m) {
            assert_eq!(days_in_month(2023, m), Some(31));
        } else if is_30_days(m) {
            assert_eq!(days_in_month(2023, m), Some(30));
        }
    }
}

#[test]
fn free_field_functions() {
    assert_eq!(day_of_week(2000, 1, 1), Some(Weekday::Saturday));
    assert_eq!(day_of_week(2023, 2, 29), None);
    assert_eq!(day_of_year(2024, 12, 31), Some(365));
    assert_eq!(day_of_year(2024, 2, 30), None);
}

#[test]
fn gregorian_cutover_flag() {
    assert!(before_gregorian_calendar(1582, 10, 14));
    assert!(!before_gregorian_calendar(1582, 10, 15));
    assert!(before_gregorian_calendar(-1, 12, 31));
    assert!(date(1582, 10, 4).is_before_gregorian_calendar());
    assert!(!date(2000, 1, 1).is_before_gregorian_calendar());
    assert!(!Date::INVALID.is_before_gregorian_calendar());
    // The flag is informational: conversion stays proleptic.
    assert_eq!(date(1582, 10, 4).days_to(&date(1582, 10, 15)), Some(11));
}

// ─── Julian Day ───────────────────────────────────────────────────────────────

#[test]
fn known_julian_days() {
    assert_eq!(date(2000, 1, 1).to_julian_day(), Some(2_451_545));
    assert_eq!(date(1858, 11, 17).to_julian_day(), Some(2_400_001));
    assert_eq!(date(1582, 10, 15).to_julian_day(), Some(2_299_161));
    assert_eq!(Date::from_julian_day(2_460_311), date(2024, 1, 1));
}

#[test]
fn bijection_across_centuries() {
    let start = date(1599, 1, 1).to_julian_day().unwrap();
    let end = date(2401, 12, 31).to_julian_day().unwrap();
    let mut expected_weekday = date(1599, 1, 1).day_of_week().unwrap().ordinal();
    for jd in start..=end {
        let d = Date::from_julian_day(jd);
        assert!(d.is_valid(), "JDN {jd} gave an invalid date");
        assert_eq!(d.to_julian_day(), Some(jd));
        let (y, m, dd) = d.ymd().unwrap();
        assert_eq!(Date::new(y, m, dd), d);
        assert_eq!(d.day_of_week().unwrap().ordinal(), expected_weekday);
        expected_weekday = expected_weekday % 7 + 1;
    }
}

#[test]
fn days_to_is_signed() {
    let a = date(2024, 1, 1);
    let b = date(2024, 3, 1);
    assert_eq!(a.days_to(&b), Some(60));
    assert_eq!(b.days_to(&a), Some(-60));
    assert_eq!(a.days_to(&Date::INVALID), None);
}

// ─── Arithmetic ───────────────────────────────────────────────────────────────

#[test]
fn add_days_carries_year() {
    assert_eq!(date(2023, 12, 31).add_days(1), date(2024, 1, 1));
    assert_eq!(date(2024, 1, 1).add_days(-1), date(2023, 12, 31));
    assert_eq!(date(2024, 2, 28).add_days(1), date(2024, 2, 29));
    assert_eq!(date(2023, 2, 28).add_days(1), date(2023, 3, 1));
    assert_eq!(date(1, 1, 1).add_days(-1), date(0, 12, 31));
}

#[test]
fn add_months_clamps() {
    assert_eq!(date(2024, 1, 31).add_months(1), date(2024, 2, 29));
    assert_eq!(date(2023, 1, 31).add_months(1), date(2023, 2, 28));
    assert_eq!(date(2023, 3, 31).add_months(1), date(2023, 4, 30));
    assert_eq!(date(2023, 11, 15).add_months(2), date(2024, 1, 15));
    assert_eq!(date(2023, 1, 15).add_months(-1), date(2022, 12, 15));
    assert_eq!(date(2023, 1, 15).add_months(-25), date(2020, 12, 15));
    assert_eq!(date(2023, 5, 31).add_months(0), date(2023, 5, 31));
    assert_eq!(date(0, 1, 31).add_months(-11), date(-1, 2, 28));
}

#[test]
fn add_years_only_clamps_leap_day() {
    assert_eq!(date(2024, 2, 29).add_years(1), date(2025, 2, 28));
    assert_eq!(date(2024, 2, 29).add_years(4), date(2028, 2, 29));
    assert_eq!(date(2024, 2, 29).add_years(-100), date(1924, 2, 29));
    assert_eq!(date(2024, 2, 29).add_years(-124), date(1900, 2, 28));
    assert_eq!(date(2023, 1, 31).add_years(-2024), date(-1, 1, 31));
}

#[test]
fn arithmetic_leaves_receiver_untouched() {
    let d = date(2024, 1, 31);
    let _ = d.add_days(10);
    let _ = d.add_months(1);
    let _ = d.add_years(1);
    assert_eq!(d, date(2024, 1, 31));
}

#[test]
fn invalid_is_absorbing() {
    let bad = Date::new(2023, 2, 29);
    assert!(!bad.is_valid());
    assert!(!bad.add_days(1).is_valid());
    assert!(!bad.add_months(1).is_valid());
    assert!(!bad.add_years(1).is_valid());
    assert_eq!(bad.year(), None);
    assert_eq!(bad.day_of_week(), None);
    assert_eq!(bad.to_julian_day(), None);
    assert!(bad.ymd().is_err());
}

// ─── Comparison and state ─────────────────────────────────────────────────────

#[test]
fn ordering_follows_calendar() {
    let mut dates = vec![
        date(2024, 1, 2),
        date(-5, 6, 7),
        Date::INVALID,
        date(2023, 12, 31),
        date(2024, 1, 1),
    ];
    dates.sort();
    assert_eq!(
        dates,
        vec![
            Date::INVALID,
            date(-5, 6, 7),
            date(2023, 12, 31),
            date(2024, 1, 1),
            date(2024, 1, 2),
        ]
    );
    assert!(date(2024, 1, 1) <= date(2024, 1, 1));
    assert!(date(2024, 1, 1) > date(2023, 12, 31));
}

#[test]
fn dst_flag_is_not_part_of_equality() {
    let summer = date(2024, 7, 1).with_dst(Dst::InEffect);
    let unknown = date(2024, 7, 1);
    assert_eq!(summer, unknown);
    assert!(!summer.is_dst_flag_same_to(&unknown));
    assert!(summer.is_dst_flag_same_to(&date(2023, 7, 1).with_dst(Dst::from_flag(1))));
    assert_eq!(summer.add_days(1).dst(), Dst::Unknown);
}

#[test]
fn set_date_forces_invalid() {
    let mut d = date(2024, 1, 1);
    assert!(d.set_date(2024, 2, 29, Dst::NotInEffect));
    assert_eq!(d, date(2024, 2, 29));
    assert_eq!(d.dst(), Dst::NotInEffect);

    assert!(!d.set_date(2023, 2, 29, Dst::Unknown));
    assert!(!d.is_valid());
}

#[test]
fn derived_fields() {
    let d = date(2024, 2, 10);
    assert_eq!(d.year(), Some(2024));
    assert_eq!(d.month(), Some(2));
    assert_eq!(d.day(), Some(10));
    assert_eq!(d.days_in_month(), Some(29));
    assert_eq!(d.days_in_year(), Some(366));
    assert_eq!(d.day_of_year(), Some(40));
    assert_eq!(d.day_of_week(), Some(Weekday::Saturday));
}

// ─── Broken-down time ─────────────────────────────────────────────────────────

#[test]
fn tm_roundtrip() {
    let d = date(2024, 12, 25).with_dst(Dst::NotInEffect);
    let tm = d.to_tm().unwrap();
    assert_eq!(tm.tm_year, 124);
    assert_eq!(tm.tm_mon, 11);
    assert_eq!(tm.tm_mday, 25);
    assert_eq!(tm.tm_wday, 3);
    assert_eq!(tm.tm_yday, 359);
    assert_eq!(tm.tm_isdst, 0);
    let back = Date::from_tm(&tm);
    assert_eq!(back, d);
    assert!(back.is_dst_flag_same_to(&d));
    assert_eq!(Date::INVALID.to_tm(), None);
}

#[test]
fn tm_fields_are_revalidated() {
    let base = date(2024, 1, 15).to_tm().unwrap();
    // Producer-supplied weekday and day of year are ignored.
    let lying = Tm {
        tm_wday: 6,
        tm_yday: 300,
        ..base
    };
    assert_eq!(Date::from_tm(&lying).day_of_year(), Some(14));

    for bad in [
        Tm { tm_mon: 12, ..base },
        Tm { tm_mon: -1, ..base },
        Tm { tm_mday: 0, ..base },
        Tm { tm_mday: 32, ..base },
        Tm { tm_mday: 1000, ..base },
        Tm { tm_year: i32::MAX, ..base },
    ] {
        assert!(!Date::from_tm(&bad).is_valid(), "{bad:?} accepted");
    }
}
