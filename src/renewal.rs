use crate::calendar::{
    advance_business_days_with, business_days_between_with, is_business_day_with, HolidaySource,
};
use crate::model::{CalendarDate, Interim, InterimId};
use anyhow::{bail, Result};

/// Options du contrôle de fin de contrat.
#[derive(Debug, Clone, Copy)]
pub struct RenewalOptions {
    pub look_ahead_business_days: u32,
    /// Ne rien signaler les jours non ouvrés (le contrôle tourne chaque jour).
    pub skip_non_business_days: bool,
}

impl Default for RenewalOptions {
    fn default() -> Self {
        Self {
            look_ahead_business_days: 10,
            skip_non_business_days: true,
        }
    }
}

/// Alerte générée pour un contrat arrivant à échéance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenewalAlert {
    pub interim_id: InterimId,
    pub ressource: String,
    pub date_fin: CalendarDate,
    pub business_days_left: u32,
    pub content: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenewalReport {
    pub today: CalendarDate,
    pub horizon: CalendarDate,
    pub skipped: bool,
    pub alerts: Vec<RenewalAlert>,
}

/// Permet de customiser le rendu du message (texte, mail, etc.).
pub trait AlertRenderer {
    fn render(&self, interim: &Interim, today: CalendarDate, business_days_left: u32) -> String;
}

/// Gabarit texte simple.
#[derive(Debug, Default, Clone, Copy)]
pub struct TextAlert;

impl AlertRenderer for TextAlert {
    fn render(&self, interim: &Interim, today: CalendarDate, business_days_left: u32) -> String {
        let site = interim
            .site
            .as_deref()
            .map(|s| format!(" ({s})"))
            .unwrap_or_default();
        format!(
            "Contrat d'intérim de {ressource}{site} : fin le {fin}, dans {left} jour(s) ouvré(s).\nContrôle du {today}. Penser au renouvellement.\n",
            ressource = interim.ressource,
            fin = interim.date_fin.format("%d/%m/%Y"),
            left = business_days_left,
            today = today.format("%d/%m/%Y"),
        )
    }
}

/// Signale les contrats dont la fin tombe dans les `look_ahead` prochains jours ouvrés.
pub fn check_renewals(
    interims: &[Interim],
    today: CalendarDate,
    opts: RenewalOptions,
    holidays: &dyn HolidaySource,
    renderer: &dyn AlertRenderer,
) -> Result<RenewalReport> {
    if opts.look_ahead_business_days == 0 {
        bail!("look_ahead_business_days must be positive");
    }

    let horizon = advance_business_days_with(today, opts.look_ahead_business_days, holidays);

    if opts.skip_non_business_days && !is_business_day_with(today, holidays) {
        #[cfg(feature = "logging")]
        tracing::debug!(%today, "not a business day, renewal check skipped");
        return Ok(RenewalReport {
            today,
            horizon,
            skipped: true,
            alerts: Vec::new(),
        });
    }

    let mut alerts: Vec<RenewalAlert> = interims
        .iter()
        .filter(|interim| today <= interim.date_fin && interim.date_fin <= horizon)
        .map(|interim| {
            let left = match today.succ_opt() {
                Some(tomorrow) => business_days_between_with(tomorrow, interim.date_fin, holidays),
                None => 0,
            };
            RenewalAlert {
                interim_id: interim.id.clone(),
                ressource: interim.ressource.clone(),
                date_fin: interim.date_fin,
                business_days_left: left,
                content: renderer.render(interim, today, left),
            }
        })
        .collect();

    alerts.sort_by(|a, b| {
        a.date_fin
            .cmp(&b.date_fin)
            .then_with(|| a.ressource.cmp(&b.ressource))
    });

    #[cfg(feature = "logging")]
    tracing::debug!(%today, %horizon, alerts = alerts.len(), "renewal check done");

    Ok(RenewalReport {
        today,
        horizon,
        skipped: false,
        alerts,
    })
}
