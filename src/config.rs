use crate::calendar::{FrenchHolidays, HolidayList, HolidaySource};
use crate::grid::Granularity;
use crate::io;
use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Réglages du moteur, lus depuis un fichier JSON (tous les champs ont un défaut).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub look_ahead_business_days: u32,
    pub granularity: Granularity,
    /// Liste de fériés qui remplace les règles françaises.
    pub holidays_csv: Option<PathBuf>,
    pub cache_ttl_secs: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            look_ahead_business_days: 10,
            granularity: Granularity::Day,
            holidays_csv: None,
            cache_ttl_secs: 3600,
        }
    }
}

impl Settings {
    pub fn validate(&self) -> Result<()> {
        if self.look_ahead_business_days == 0 {
            bail!("look_ahead_business_days must be > 0");
        }
        Ok(())
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let data = fs::read(path).with_context(|| format!("reading config {}", path.display()))?;
        let settings: Settings = serde_json::from_slice(&data)
            .with_context(|| format!("parsing config {}", path.display()))?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(p) => Self::load(p),
            None => Ok(Self::default()),
        }
    }

    pub fn cache_ttl(&self) -> Duration {
        Duration::from_secs(self.cache_ttl_secs)
    }

    /// Source de fériés : la liste CSV si configurée, sinon les règles françaises.
    pub fn holiday_source(&self) -> Result<Box<dyn HolidaySource>> {
        match &self.holidays_csv {
            Some(path) => {
                let list: HolidayList = io::import_holidays_csv(path)
                    .with_context(|| format!("loading holidays {}", path.display()))?;
                Ok(Box::new(list))
            }
            None => Ok(Box::new(FrenchHolidays)),
        }
    }
}
