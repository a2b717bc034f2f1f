#![forbid(unsafe_code)]
use chrono::{FixedOffset, NaiveDate, TimeZone, Utc};
use plancharge::{
    business_days_between, compute_french_holidays, enumerate_dates, format_iso_week_label,
    get_iso_week, get_iso_year, is_business_day, is_french_holiday, next_business_day,
    calendar::{advance_business_days, NEXT_BUSINESS_DAY_HORIZON},
    DateRange,
};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn easter_2025_scenario() {
    let set = compute_french_holidays(2025).unwrap();
    assert!(set.contains(date(2025, 4, 20)));
    assert!(set.contains(date(2025, 4, 21)));
    assert!(!is_business_day(date(2025, 4, 21), None));
    assert!(is_business_day(date(2025, 4, 22), None));
}

#[test]
fn holiday_check_is_time_of_day_invariant() {
    let midnight = Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap();
    let late = Utc.with_ymd_and_hms(2025, 1, 1, 23, 59, 0).unwrap();
    assert!(is_french_holiday(midnight));
    assert!(is_french_holiday(late));

    // jour local du décalage porté par la valeur
    let paris = FixedOffset::east_opt(2 * 3600).unwrap();
    let bastille = paris.with_ymd_and_hms(2025, 7, 14, 0, 30, 0).unwrap();
    assert!(is_french_holiday(bastille));
}

#[test]
fn iso_weeks_at_year_boundaries() {
    assert_eq!((get_iso_year(date(2025, 1, 1)), get_iso_week(date(2025, 1, 1))), (2025, 1));
    assert_eq!((get_iso_year(date(2026, 12, 31)), get_iso_week(date(2026, 12, 31))), (2026, 53));
    assert_eq!(format_iso_week_label(date(2027, 1, 1)), "2026-53");
    assert_eq!(format_iso_week_label(date(2019, 12, 30)), "2020-01");
}

#[test]
fn business_day_counts() {
    assert_eq!(business_days_between(date(2025, 1, 2), date(2025, 1, 2), None), 1);
    assert_eq!(business_days_between(date(2025, 1, 4), date(2025, 1, 4), None), 0);
    assert_eq!(business_days_between(date(2025, 1, 1), date(2024, 12, 31), None), 0);
    // mai 2025 : 22 jours de semaine, moins 1er, 8 et 29 mai
    assert_eq!(business_days_between(date(2025, 5, 1), date(2025, 5, 31), None), 19);
}

#[test]
fn next_business_day_cases() {
    assert_eq!(next_business_day(date(2025, 1, 10), None), date(2025, 1, 13));
    assert_eq!(next_business_day(date(2025, 8, 14), None), date(2025, 8, 18));
    // 10 jours ouvrés après le jeudi 17 avril 2025 (Lundi de Pâques et 1er mai sautés)
    assert_eq!(advance_business_days(date(2025, 4, 17), 10, None), date(2025, 5, 5));
}

#[test]
fn pathological_holiday_list_hits_horizon() {
    let blocked = enumerate_dates(date(2025, 1, 1), date(2025, 3, 31));
    let start = date(2025, 1, 1);
    let got = next_business_day(start, Some(blocked.as_slice()));
    assert_eq!((got - start).num_days(), i64::from(NEXT_BUSINESS_DAY_HORIZON));
    assert!(!is_business_day(got, Some(blocked.as_slice())));
}

#[test]
fn enumerate_matches_range() {
    let range = DateRange::new(date(2024, 2, 1), date(2024, 3, 1)).unwrap();
    let days = enumerate_dates(range.start(), range.end());
    assert_eq!(days.len() as i64, range.num_days());
    assert_eq!(days, range.iter().collect::<Vec<_>>());
    assert!(enumerate_dates(date(2024, 3, 1), date(2024, 2, 1)).is_empty());
    assert!(DateRange::new(date(2024, 3, 1), date(2024, 2, 1)).is_err());
}
