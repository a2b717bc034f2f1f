//! Colonnes de la grille de planification (jour, semaine ou mois).

use crate::calendar::{
    business_days_between_with, is_business_day_with, is_weekend, iso_week, CalendarError,
    HolidaySource,
};
use crate::model::{CalendarDate, DateRange};
use chrono::{Datelike, Duration, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Granularity {
    #[default]
    Day,
    Week,
    Month,
}

impl FromStr for Granularity {
    type Err = CalendarError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "day" | "jour" => Ok(Granularity::Day),
            "week" | "semaine" => Ok(Granularity::Week),
            "month" | "mois" => Ok(Granularity::Month),
            other => Err(CalendarError::UnknownGranularity(other.to_string())),
        }
    }
}

impl fmt::Display for Granularity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Granularity::Day => "day",
            Granularity::Week => "week",
            Granularity::Month => "month",
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColumnKind {
    Weekday,
    Weekend,
    Holiday,
    /// Colonne agrégée (semaine ou mois).
    Period,
}

impl ColumnKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ColumnKind::Weekday => "weekday",
            ColumnKind::Weekend => "weekend",
            ColumnKind::Holiday => "holiday",
            ColumnKind::Period => "period",
        }
    }
}

/// Colonne de grille : bornes incluses, déjà rognées sur l'intervalle demandé.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Column {
    pub label: String,
    pub start: CalendarDate,
    pub end: CalendarDate,
    pub kind: ColumnKind,
    pub business_days: u32,
}

/// Découpe `range` en colonnes contiguës, dans l'ordre.
pub fn build_columns(
    range: &DateRange,
    granularity: Granularity,
    holidays: &dyn HolidaySource,
) -> Vec<Column> {
    match granularity {
        Granularity::Day => range
            .iter()
            .map(|day| day_column(day, holidays))
            .collect(),
        Granularity::Week => periods(range, week_end, holidays, |start| iso_week(start).to_string()),
        Granularity::Month => periods(range, month_end, holidays, |start| {
            format!("{}-{:02}", start.year(), start.month())
        }),
    }
}

fn day_column(day: CalendarDate, holidays: &dyn HolidaySource) -> Column {
    let kind = if holidays.is_holiday(day) {
        ColumnKind::Holiday
    } else if is_weekend(day) {
        ColumnKind::Weekend
    } else {
        ColumnKind::Weekday
    };
    Column {
        label: day.format("%Y-%m-%d").to_string(),
        start: day,
        end: day,
        kind,
        business_days: u32::from(is_business_day_with(day, holidays)),
    }
}

fn periods(
    range: &DateRange,
    period_end: fn(CalendarDate) -> CalendarDate,
    holidays: &dyn HolidaySource,
    label: impl Fn(CalendarDate) -> String,
) -> Vec<Column> {
    let mut out = Vec::new();
    let mut start = range.start();
    loop {
        let end = period_end(start).min(range.end());
        out.push(Column {
            label: label(start),
            start,
            end,
            kind: ColumnKind::Period,
            business_days: business_days_between_with(start, end, holidays),
        });
        match end.succ_opt() {
            Some(next) if end < range.end() => start = next,
            _ => break,
        }
    }
    out
}

/// Dimanche de la semaine ISO de `day`.
fn week_end(day: CalendarDate) -> CalendarDate {
    let offset = 7 - i64::from(day.weekday().number_from_monday());
    day.checked_add_signed(Duration::days(offset))
        .unwrap_or(NaiveDate::MAX)
}

/// Dernier jour du mois de `day`.
fn month_end(day: CalendarDate) -> CalendarDate {
    let (year, month) = if day.month() == 12 {
        (day.year() + 1, 1)
    } else {
        (day.year(), day.month() + 1)
    };
    NaiveDate::from_ymd_opt(year, month, 1)
        .and_then(|first| first.pred_opt())
        .unwrap_or(NaiveDate::MAX)
}

/// Nombre de jours ouvrés par colonne, utile pour les totaux de charge.
pub fn total_business_days(columns: &[Column]) -> u32 {
    columns.iter().map(|c| c.business_days).sum()
}
