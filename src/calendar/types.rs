use crate::model::CalendarDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Jour férié nommé
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HolidayKind {
    NewYear,
    EasterSunday,
    EasterMonday,
    LabourDay,
    VictoryDay,
    Ascension,
    WhitMonday,
    BastilleDay,
    Assumption,
    AllSaints,
    Armistice,
    Christmas,
}

impl HolidayKind {
    /// Libellé français, tel qu'affiché dans la grille.
    pub fn label(self) -> &'static str {
        match self {
            HolidayKind::NewYear => "Jour de l'an",
            HolidayKind::EasterSunday => "Pâques",
            HolidayKind::EasterMonday => "Lundi de Pâques",
            HolidayKind::LabourDay => "Fête du Travail",
            HolidayKind::VictoryDay => "Victoire 1945",
            HolidayKind::Ascension => "Ascension",
            HolidayKind::WhitMonday => "Lundi de Pentecôte",
            HolidayKind::BastilleDay => "Fête nationale",
            HolidayKind::Assumption => "Assomption",
            HolidayKind::AllSaints => "Toussaint",
            HolidayKind::Armistice => "Armistice 1918",
            HolidayKind::Christmas => "Noël",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Holiday {
    pub date: CalendarDate,
    pub kind: HolidayKind,
}

/// Jours fériés d'une année, triés chronologiquement.
///
/// Contient toujours 11 entrées. Les années où l'Ascension tombe un 1er ou
/// un 8 mai (2008 par ex.) ne comptent que 10 dates distinctes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HolidaySet {
    year: i32,
    entries: Vec<Holiday>,
}

impl HolidaySet {
    pub(super) fn new(year: i32, mut entries: Vec<Holiday>) -> Self {
        entries.sort_by_key(|h| h.date);
        Self { year, entries }
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, day: CalendarDate) -> bool {
        self.entries.iter().any(|h| h.date == day)
    }

    pub fn get(&self, kind: HolidayKind) -> Option<CalendarDate> {
        self.entries.iter().find(|h| h.kind == kind).map(|h| h.date)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Holiday> {
        self.entries.iter()
    }

    /// Dates distinctes, dans l'ordre.
    pub fn dates(&self) -> Vec<CalendarDate> {
        let mut out: Vec<CalendarDate> = self.entries.iter().map(|h| h.date).collect();
        out.dedup();
        out
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CalendarError {
    #[error("invalid date range: {start} is after {end}")]
    InvalidRange {
        start: CalendarDate,
        end: CalendarDate,
    },
    #[error("year out of supported range: {0}")]
    YearOutOfRange(i32),
    #[error("invalid date: {0}")]
    InvalidDate(String),
    #[error("unknown granularity: {0}")]
    UnknownGranularity(String),
}
