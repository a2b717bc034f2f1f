#![forbid(unsafe_code)]
//! Plan de Charge : moteur calendrier et périodisation.
//!
//! - Jours fériés français (Pâques grégorien, 11 fériés par an).
//! - Jours ouvrés, avance en jours ouvrés, semaines ISO-8601.
//! - Colonnes de grille jour/semaine/mois ; contrôle des fins d'intérim.
//! - Dates calendaires pures : l'heure d'une valeur datée est ignorée.

pub mod cache;
pub mod calendar;
pub mod config;
pub mod grid;
pub mod io;
pub mod model;
pub mod renewal;
pub mod storage;

pub use cache::{Cache, CachedHolidays, TtlCache};
pub use calendar::{
    advance_business_days, business_days_between, compute_easter_sunday, compute_french_holidays,
    enumerate_dates, format_iso_week_label, get_french_holidays_between, get_iso_week,
    get_iso_year, is_business_day, is_french_holiday, next_business_day, CalendarError,
    FrenchHolidays, HolidayList, HolidaySet, HolidaySource,
};
pub use config::Settings;
pub use grid::{build_columns, Column, ColumnKind, Granularity};
pub use model::{CalendarDate, DateRange, Interim, InterimBook, InterimId, IsoWeek, ToCalendarDate};
pub use renewal::{check_renewals, AlertRenderer, RenewalAlert, RenewalOptions, RenewalReport, TextAlert};
pub use storage::{JsonStorage, Storage};
