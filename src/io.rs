use crate::calendar::HolidayList;
use crate::grid::Column;
use crate::model::{CalendarDate, Interim};
use crate::renewal::RenewalAlert;
use anyhow::{bail, Context};
use chrono::{DateTime, FixedOffset, NaiveDate};
use csv::{ReaderBuilder, WriterBuilder};
use std::path::Path;

/// Import de contrats d'intérim depuis CSV: header `ressource,date_debut,date_fin[,site]`
pub fn import_interims_csv<P: AsRef<Path>>(path: P) -> anyhow::Result<Vec<Interim>> {
    let mut rdr = ReaderBuilder::new().has_headers(true).from_path(path)?;
    let mut out = Vec::new();
    for rec in rdr.records() {
        let rec = rec?;
        let ressource = rec.get(0).context("missing ressource")?.trim();
        if ressource.is_empty() {
            bail!("invalid interim row (empty ressource)");
        }
        let debut = parse_day(rec.get(1).context("missing date_debut")?.trim())
            .with_context(|| format!("invalid date_debut for {ressource}"))?;
        let fin = parse_day(rec.get(2).context("missing date_fin")?.trim())
            .with_context(|| format!("invalid date_fin for {ressource}"))?;
        let mut interim = Interim::new(ressource, debut, fin)
            .with_context(|| format!("invalid contract period for {ressource}"))?;
        if let Some(site) = rec.get(3) {
            let site = site.trim();
            if !site.is_empty() {
                interim = interim.with_site(site);
            }
        }
        out.push(interim);
    }
    Ok(out)
}

/// Import d'une liste de fériés: header `date[,label]`
pub fn import_holidays_csv<P: AsRef<Path>>(path: P) -> anyhow::Result<HolidayList> {
    let mut rdr = ReaderBuilder::new().has_headers(true).from_path(path)?;
    let mut dates = Vec::new();
    for rec in rdr.records() {
        let rec = rec?;
        let raw = rec.get(0).context("missing date")?.trim();
        if raw.is_empty() {
            continue;
        }
        dates.push(parse_day(raw)?);
    }
    Ok(HolidayList::new(dates))
}

/// Jour calendaire : `YYYY-MM-DD`, `DD/MM/YYYY` ou RFC3339 (heure ignorée).
pub fn parse_day(raw: &str) -> anyhow::Result<CalendarDate> {
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Ok(date);
    }
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%d/%m/%Y") {
        return Ok(date);
    }
    let dt: DateTime<FixedOffset> = DateTime::parse_from_rfc3339(raw)
        .with_context(|| format!("invalid date/datetime: {raw}"))?;
    Ok(dt.date_naive())
}

/// Export CSV des colonnes: header `label,start,end,kind,business_days`
pub fn export_columns_csv<P: AsRef<Path>>(path: P, columns: &[Column]) -> anyhow::Result<()> {
    let mut w = WriterBuilder::new().has_headers(true).from_path(path)?;
    w.write_record(["label", "start", "end", "kind", "business_days"])?;
    for c in columns {
        let start = c.start.to_string();
        let end = c.end.to_string();
        let days = c.business_days.to_string();
        w.write_record([
            c.label.as_str(),
            start.as_str(),
            end.as_str(),
            c.kind.as_str(),
            days.as_str(),
        ])?;
    }
    w.flush()?;
    Ok(())
}

/// Export CSV des alertes: header `interim_id,ressource,date_fin,business_days_left`
pub fn export_alerts_csv<P: AsRef<Path>>(path: P, alerts: &[RenewalAlert]) -> anyhow::Result<()> {
    let mut w = WriterBuilder::new().has_headers(true).from_path(path)?;
    w.write_record(["interim_id", "ressource", "date_fin", "business_days_left"])?;
    for a in alerts {
        let fin = a.date_fin.to_string();
        let left = a.business_days_left.to_string();
        w.write_record([
            a.interim_id.as_str(),
            a.ressource.as_str(),
            fin.as_str(),
            left.as_str(),
        ])?;
    }
    w.flush()?;
    Ok(())
}
