use super::{DateIter, HolidaySource};
use crate::model::{CalendarDate, ToCalendarDate};
use chrono::{Datelike, Weekday};

/// Nombre maximal de jours explorés par [`next_business_day`].
///
/// Au-delà, la dernière date essayée est renvoyée telle quelle : une liste
/// de fériés couvrant 30 jours consécutifs ou plus donne donc un résultat
/// qui n'est pas un jour ouvré.
pub const NEXT_BUSINESS_DAY_HORIZON: u32 = 30;

pub fn is_weekend<D: ToCalendarDate>(date: D) -> bool {
    matches!(
        date.to_calendar_date().weekday(),
        Weekday::Sat | Weekday::Sun
    )
}

/// Jour ouvré selon une source de fériés quelconque.
pub fn is_business_day_with<D: ToCalendarDate>(date: D, holidays: &dyn HolidaySource) -> bool {
    let day = date.to_calendar_date();
    !is_weekend(day) && !holidays.is_holiday(day)
}

/// Jour ouvré : ni samedi, ni dimanche, ni férié.
///
/// `None` applique les fériés français ; `Some(liste)` les remplace
/// entièrement (liste régionale par exemple).
pub fn is_business_day<D: ToCalendarDate>(date: D, holidays: Option<&[CalendarDate]>) -> bool {
    is_business_day_with(date, &holidays)
}

pub fn business_days_between_with<S, E>(start: S, end: E, holidays: &dyn HolidaySource) -> u32
where
    S: ToCalendarDate,
    E: ToCalendarDate,
{
    let count = DateIter::new(start.to_calendar_date(), end.to_calendar_date())
        .filter(|day| is_business_day_with(*day, holidays))
        .count();
    u32::try_from(count).unwrap_or(u32::MAX)
}

/// Jours ouvrés dans `[start, end]`, bornes incluses. 0 si l'intervalle est inversé.
pub fn business_days_between<S, E>(start: S, end: E, holidays: Option<&[CalendarDate]>) -> u32
where
    S: ToCalendarDate,
    E: ToCalendarDate,
{
    business_days_between_with(start, end, &holidays)
}

pub fn next_business_day_with<D: ToCalendarDate>(
    date: D,
    holidays: &dyn HolidaySource,
) -> CalendarDate {
    let mut current = date.to_calendar_date();
    for _ in 0..NEXT_BUSINESS_DAY_HORIZON {
        let Some(next) = current.succ_opt() else {
            return current;
        };
        current = next;
        if is_business_day_with(current, holidays) {
            return current;
        }
    }
    #[cfg(feature = "logging")]
    tracing::warn!(
        reached = %current,
        horizon = NEXT_BUSINESS_DAY_HORIZON,
        "no business day found within horizon"
    );
    current
}

/// Premier jour ouvré strictement après `date` (voir [`NEXT_BUSINESS_DAY_HORIZON`]).
pub fn next_business_day<D: ToCalendarDate>(
    date: D,
    holidays: Option<&[CalendarDate]>,
) -> CalendarDate {
    next_business_day_with(date, &holidays)
}

pub fn advance_business_days_with<D: ToCalendarDate>(
    date: D,
    n: u32,
    holidays: &dyn HolidaySource,
) -> CalendarDate {
    (0..n).fold(date.to_calendar_date(), |day, _| {
        next_business_day_with(day, holidays)
    })
}

/// Avance de `n` jours ouvrés (`n = 0` renvoie `date`).
pub fn advance_business_days<D: ToCalendarDate>(
    date: D,
    n: u32,
    holidays: Option<&[CalendarDate]>,
) -> CalendarDate {
    advance_business_days_with(date, n, &holidays)
}
