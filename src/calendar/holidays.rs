use super::types::{CalendarError, Holiday, HolidayKind, HolidaySet};
use crate::model::{CalendarDate, ToCalendarDate};
use chrono::{Datelike, Days, NaiveDate};

/// Mois et jour de Pâques (algorithme grégorien anonyme).
///
/// Purement arithmétique : défini pour toute année, le résultat tombe
/// toujours en mars ou en avril.
pub fn easter_month_day(year: i32) -> (u32, u32) {
    let y = i64::from(year);
    let a = y.rem_euclid(19);
    let b = y.div_euclid(100);
    let c = y.rem_euclid(100);
    let d = b.div_euclid(4);
    let e = b.rem_euclid(4);
    let f = (b + 8).div_euclid(25);
    let g = (b - f + 1).div_euclid(3);
    let h = (19 * a + b - d - g + 15).rem_euclid(30);
    let i = c / 4;
    let k = c % 4;
    let l = (32 + 2 * e + 2 * i - h - k).rem_euclid(7);
    let m = (a + 11 * h + 22 * l) / 451;
    let n = h + l - 7 * m + 114;
    ((n / 31) as u32, (n % 31 + 1) as u32)
}

/// Dimanche de Pâques de l'année `year`.
///
/// Échoue seulement si l'année n'est pas représentable par chrono.
pub fn compute_easter_sunday(year: i32) -> Result<CalendarDate, CalendarError> {
    let (month, day) = easter_month_day(year);
    NaiveDate::from_ymd_opt(year, month, day).ok_or(CalendarError::YearOutOfRange(year))
}

const FIXED: [(u32, u32, HolidayKind); 8] = [
    (1, 1, HolidayKind::NewYear),
    (5, 1, HolidayKind::LabourDay),
    (5, 8, HolidayKind::VictoryDay),
    (7, 14, HolidayKind::BastilleDay),
    (8, 15, HolidayKind::Assumption),
    (11, 1, HolidayKind::AllSaints),
    (11, 11, HolidayKind::Armistice),
    (12, 25, HolidayKind::Christmas),
];

// décalages en jours calendaires depuis le dimanche de Pâques
const EASTER_OFFSETS: [(u64, HolidayKind); 4] = [
    (0, HolidayKind::EasterSunday),
    (1, HolidayKind::EasterMonday),
    (39, HolidayKind::Ascension),
    (50, HolidayKind::WhitMonday),
];

/// Les 11 jours fériés (métropole) de l'année `year`.
///
/// Le dimanche de Pâques fait partie de la liste, même s'il tombe déjà un
/// dimanche : les décomptes en aval supposent 11 entrées par an.
pub fn compute_french_holidays(year: i32) -> Result<HolidaySet, CalendarError> {
    let mut entries = Vec::with_capacity(FIXED.len() + EASTER_OFFSETS.len());

    for (month, day, kind) in FIXED {
        let date =
            NaiveDate::from_ymd_opt(year, month, day).ok_or(CalendarError::YearOutOfRange(year))?;
        entries.push(Holiday { date, kind });
    }

    let easter = compute_easter_sunday(year)?;
    for (offset, kind) in EASTER_OFFSETS {
        let date = easter
            .checked_add_days(Days::new(offset))
            .ok_or(CalendarError::YearOutOfRange(year))?;
        entries.push(Holiday { date, kind });
    }

    Ok(HolidaySet::new(year, entries))
}

/// Vrai si `date` est un jour férié français. L'heure éventuelle est ignorée.
pub fn is_french_holiday<D: ToCalendarDate>(date: D) -> bool {
    let day = date.to_calendar_date();
    compute_french_holidays(day.year())
        .map(|set| set.contains(day))
        .unwrap_or(false)
}

/// Jours fériés compris dans `[start, end]`, triés et sans doublon.
pub fn get_french_holidays_between<S, E>(start: S, end: E) -> Vec<CalendarDate>
where
    S: ToCalendarDate,
    E: ToCalendarDate,
{
    let (start, end) = (start.to_calendar_date(), end.to_calendar_date());
    let mut out = Vec::new();
    if start > end {
        return out;
    }
    for year in start.year()..=end.year() {
        if let Ok(set) = compute_french_holidays(year) {
            out.extend(set.dates().into_iter().filter(|d| start <= *d && *d <= end));
        }
    }
    out.sort_unstable();
    out.dedup();
    out
}
