use crate::model::{IsoWeek, ToCalendarDate};
use chrono::{Datelike, Duration};

/// Numéro de semaine ISO-8601 (1..=53).
///
/// On se place sur le jeudi de la semaine puis on compte les semaines
/// écoulées depuis le 1er janvier de l'année de ce jeudi.
pub fn get_iso_week<D: ToCalendarDate>(date: D) -> u32 {
    let day = date.to_calendar_date();
    let weekday = i64::from(day.weekday().number_from_monday());
    let thursday = day
        .checked_add_signed(Duration::days(4 - weekday))
        .unwrap_or(day);
    (thursday.ordinal() + 6) / 7
}

/// Année ISO : année civile, corrigée aux bords de janvier et décembre.
pub fn get_iso_year<D: ToCalendarDate>(date: D) -> i32 {
    let day = date.to_calendar_date();
    let week = get_iso_week(day);
    match day.month() {
        1 if week >= 52 => day.year() - 1,
        12 if week == 1 => day.year() + 1,
        _ => day.year(),
    }
}

pub fn iso_week<D: ToCalendarDate>(date: D) -> IsoWeek {
    let day = date.to_calendar_date();
    IsoWeek {
        year: get_iso_year(day),
        week: get_iso_week(day),
    }
}

/// Libellé `YYYY-WW` (semaine sur deux chiffres).
pub fn format_iso_week_label<D: ToCalendarDate>(date: D) -> String {
    iso_week(date).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::DateIter;
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn reference_points() {
        assert_eq!(iso_week(date(2025, 1, 1)), IsoWeek { year: 2025, week: 1 });
        assert_eq!(iso_week(date(2024, 12, 30)), IsoWeek { year: 2025, week: 1 });
        assert_eq!(iso_week(date(2026, 12, 31)), IsoWeek { year: 2026, week: 53 });
        assert_eq!(iso_week(date(2027, 1, 1)), IsoWeek { year: 2026, week: 53 });
        assert_eq!(iso_week(date(2027, 1, 4)), IsoWeek { year: 2027, week: 1 });
        assert_eq!(iso_week(date(2021, 1, 3)), IsoWeek { year: 2020, week: 53 });
        assert_eq!(iso_week(date(2023, 1, 1)), IsoWeek { year: 2022, week: 52 });
    }

    #[test]
    fn label_is_zero_padded() {
        assert_eq!(format_iso_week_label(date(2025, 1, 1)), "2025-01");
        assert_eq!(format_iso_week_label(date(2025, 3, 5)), "2025-10");
        assert_eq!(format_iso_week_label(date(2024, 12, 30)), "2025-01");
    }

    #[test]
    fn matches_chrono_for_every_weekday_alignment() {
        // 2000..=2040 couvre les 7 alignements du 1er janvier et du 31 décembre.
        for day in DateIter::new(date(2000, 1, 1), date(2040, 12, 31)) {
            let reference = day.iso_week();
            assert_eq!(get_iso_week(day), reference.week(), "{day}");
            assert_eq!(get_iso_year(day), reference.year(), "{day}");
        }
    }

    #[test]
    fn ignores_time_of_day() {
        let late = date(2024, 12, 29).and_hms_opt(23, 59, 59).unwrap();
        assert_eq!(iso_week(late), IsoWeek { year: 2024, week: 52 });
    }
}
