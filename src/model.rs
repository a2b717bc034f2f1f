use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use crate::calendar::CalendarError;

/// Date calendaire pure (sans heure ni fuseau).
pub type CalendarDate = NaiveDate;

/// Normalise une valeur datée vers un jour calendaire (l'heure est ignorée).
pub trait ToCalendarDate {
    fn to_calendar_date(&self) -> CalendarDate;
}

impl ToCalendarDate for NaiveDate {
    fn to_calendar_date(&self) -> CalendarDate {
        *self
    }
}

impl ToCalendarDate for NaiveDateTime {
    fn to_calendar_date(&self) -> CalendarDate {
        self.date()
    }
}

/// Pour une valeur zonée, on garde le jour local de son propre décalage.
impl<Tz: TimeZone> ToCalendarDate for DateTime<Tz> {
    fn to_calendar_date(&self) -> CalendarDate {
        self.date_naive()
    }
}

impl<T: ToCalendarDate + ?Sized> ToCalendarDate for &T {
    fn to_calendar_date(&self) -> CalendarDate {
        (**self).to_calendar_date()
    }
}

/// Intervalle de dates inclusif `[start, end]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DateRange {
    start: CalendarDate,
    end: CalendarDate,
}

impl DateRange {
    /// Crée un intervalle en validant que `start <= end`.
    pub fn new(start: CalendarDate, end: CalendarDate) -> Result<Self, CalendarError> {
        if start > end {
            return Err(CalendarError::InvalidRange { start, end });
        }
        Ok(Self { start, end })
    }

    pub fn single(day: CalendarDate) -> Self {
        Self { start: day, end: day }
    }

    pub fn start(&self) -> CalendarDate {
        self.start
    }

    pub fn end(&self) -> CalendarDate {
        self.end
    }

    /// Nombre de jours calendaires couverts (bornes incluses).
    pub fn num_days(&self) -> i64 {
        (self.end - self.start).num_days() + 1
    }

    pub fn contains(&self, day: CalendarDate) -> bool {
        self.start <= day && day <= self.end
    }

    /// Itère chaque jour de l'intervalle, dans l'ordre.
    pub fn iter(&self) -> crate::calendar::DateIter {
        crate::calendar::DateIter::new(self.start, self.end)
    }
}

impl IntoIterator for DateRange {
    type Item = CalendarDate;
    type IntoIter = crate::calendar::DateIter;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Semaine ISO-8601 : (année ISO, numéro de semaine).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct IsoWeek {
    pub year: i32,
    pub week: u32,
}

impl fmt::Display for IsoWeek {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{:02}", self.year, self.week)
    }
}

/// Identifiant fort pour Interim
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct InterimId(String);

impl InterimId {
    pub fn new<S: AsRef<str>>(s: S) -> Self {
        Self(s.as_ref().to_owned())
    }
    pub fn random() -> Self {
        Self(Uuid::new_v4().to_string())
    }
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Contrat d'intérim rattaché à une ressource.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Interim {
    pub id: InterimId,
    pub ressource: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub site: Option<String>,
    pub date_debut: CalendarDate,
    pub date_fin: CalendarDate,
}

impl Interim {
    /// Crée un contrat en validant que `date_fin >= date_debut`.
    pub fn new<R: Into<String>>(
        ressource: R,
        date_debut: CalendarDate,
        date_fin: CalendarDate,
    ) -> Result<Self, CalendarError> {
        if date_fin < date_debut {
            return Err(CalendarError::InvalidRange {
                start: date_debut,
                end: date_fin,
            });
        }
        Ok(Self {
            id: InterimId::random(),
            ressource: ressource.into(),
            site: None,
            date_debut,
            date_fin,
        })
    }

    pub fn with_site<S: Into<String>>(mut self, site: S) -> Self {
        self.site = Some(site.into());
        self
    }

    pub fn period(&self) -> DateRange {
        DateRange {
            start: self.date_debut,
            end: self.date_fin,
        }
    }

    /// Vrai si le contrat couvre `day`.
    pub fn is_active_on(&self, day: CalendarDate) -> bool {
        self.period().contains(day)
    }
}

/// Registre des contrats d'intérim
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct InterimBook {
    pub interims: Vec<Interim>,
}

impl InterimBook {
    pub fn find_by_id<'a>(&'a self, id: &InterimId) -> Option<&'a Interim> {
        self.interims.iter().find(|i| &i.id == id)
    }
}
