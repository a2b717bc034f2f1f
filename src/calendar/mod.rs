//! Moteur calendrier : fériés français, jours ouvrés, semaines ISO, intervalles.
//!
//! Toutes les fonctions sont pures ; l'heure d'une valeur datée est ignorée
//! (voir [`ToCalendarDate`](crate::model::ToCalendarDate)).

mod business;
mod holidays;
mod iso_week;
mod range;
mod types;

pub use business::{
    advance_business_days, advance_business_days_with, business_days_between,
    business_days_between_with, is_business_day, is_business_day_with, is_weekend,
    next_business_day, next_business_day_with, NEXT_BUSINESS_DAY_HORIZON,
};
pub use holidays::{
    compute_easter_sunday, compute_french_holidays, easter_month_day,
    get_french_holidays_between, is_french_holiday,
};
pub use iso_week::{format_iso_week_label, get_iso_week, get_iso_year, iso_week};
pub use range::{enumerate_dates, DateIter};
pub use types::{CalendarError, Holiday, HolidayKind, HolidaySet};

use crate::model::CalendarDate;
use chrono::Datelike;

/// Source de jours fériés branchable dans les calculs de jours ouvrés.
pub trait HolidaySource: Send + Sync {
    /// Fériés de l'année `year`, triés.
    fn holidays_in_year(&self, year: i32) -> Vec<CalendarDate>;

    fn is_holiday(&self, day: CalendarDate) -> bool {
        self.holidays_in_year(day.year()).contains(&day)
    }
}

impl<T: HolidaySource + ?Sized> HolidaySource for Box<T> {
    fn holidays_in_year(&self, year: i32) -> Vec<CalendarDate> {
        (**self).holidays_in_year(year)
    }

    fn is_holiday(&self, day: CalendarDate) -> bool {
        (**self).is_holiday(day)
    }
}

/// Règles françaises (métropole).
#[derive(Debug, Default, Clone, Copy)]
pub struct FrenchHolidays;

impl HolidaySource for FrenchHolidays {
    fn holidays_in_year(&self, year: i32) -> Vec<CalendarDate> {
        compute_french_holidays(year)
            .map(|set| set.dates())
            .unwrap_or_default()
    }

    fn is_holiday(&self, day: CalendarDate) -> bool {
        is_french_holiday(day)
    }
}

/// Liste explicite de fériés, qui remplace les règles françaises.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct HolidayList {
    dates: Vec<CalendarDate>,
}

impl HolidayList {
    pub fn new(mut dates: Vec<CalendarDate>) -> Self {
        dates.sort_unstable();
        dates.dedup();
        Self { dates }
    }

    pub fn as_slice(&self) -> &[CalendarDate] {
        &self.dates
    }

    pub fn len(&self) -> usize {
        self.dates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }
}

impl HolidaySource for HolidayList {
    fn holidays_in_year(&self, year: i32) -> Vec<CalendarDate> {
        self.dates
            .iter()
            .copied()
            .filter(|d| d.year() == year)
            .collect()
    }

    fn is_holiday(&self, day: CalendarDate) -> bool {
        self.dates.binary_search(&day).is_ok()
    }
}

/// `None` : règles françaises ; `Some(liste)` : la liste seule.
impl HolidaySource for Option<&[CalendarDate]> {
    fn holidays_in_year(&self, year: i32) -> Vec<CalendarDate> {
        match self {
            None => FrenchHolidays.holidays_in_year(year),
            Some(list) => {
                let mut out: Vec<CalendarDate> =
                    list.iter().copied().filter(|d| d.year() == year).collect();
                out.sort_unstable();
                out.dedup();
                out
            }
        }
    }

    fn is_holiday(&self, day: CalendarDate) -> bool {
        match self {
            None => is_french_holiday(day),
            Some(list) => list.contains(&day),
        }
    }
}
