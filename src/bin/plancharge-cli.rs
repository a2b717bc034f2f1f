#![forbid(unsafe_code)]
use anyhow::{Context, Result};
use chrono::{Datelike, Local};
use plancharge::{
    cache::{CachedHolidays, TtlCache},
    calendar::{
        advance_business_days_with, business_days_between_with, compute_french_holidays,
        enumerate_dates, format_iso_week_label, is_business_day_with, HolidaySource,
    },
    config::Settings,
    grid::{build_columns, total_business_days, Granularity},
    io,
    model::DateRange,
    renewal::{check_renewals, RenewalOptions, TextAlert},
    storage::{JsonStorage, Storage},
};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
#[cfg(feature = "logging")]
use tracing_subscriber::{fmt::Subscriber, EnvFilter};

/// CLI du plan de charge : fériés, jours ouvrés, semaines ISO, grille, intérims
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Cli {
    /// Active les logs (feature `logging`)
    #[arg(long, global = true)]
    log: bool,

    /// Fichier de réglages JSON
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Registre JSON des contrats d'intérim
    #[arg(long, global = true, default_value = "interims.json")]
    book: String,

    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Lister les jours fériés d'une année ou d'un intervalle
    Holidays {
        #[arg(long, conflicts_with_all = ["start", "end"])]
        year: Option<i32>,
        #[arg(long, requires = "end")]
        start: Option<String>,
        #[arg(long, requires = "start")]
        end: Option<String>,
    },

    /// Indiquer si une date est un jour ouvré
    BusinessDay {
        #[arg(long)]
        date: String,
    },

    /// Compter les jours ouvrés d'un intervalle (bornes incluses)
    Count {
        #[arg(long)]
        start: String,
        #[arg(long)]
        end: String,
    },

    /// Avancer de N jours ouvrés
    Next {
        #[arg(long)]
        date: String,
        #[arg(long, default_value_t = 1)]
        n: u32,
    },

    /// Semaine ISO d'une date (YYYY-WW)
    Week {
        #[arg(long)]
        date: String,
    },

    /// Énumérer les dates d'un intervalle
    Dates {
        #[arg(long)]
        start: String,
        #[arg(long)]
        end: String,
    },

    /// Générer les colonnes de la grille de planification
    Grid {
        #[arg(long)]
        start: String,
        #[arg(long)]
        end: String,
        /// day|week|month (ou jour|semaine|mois)
        #[arg(long)]
        granularity: Option<String>,
        #[arg(long)]
        out_csv: Option<String>,
    },

    /// Importer des contrats d'intérim depuis un CSV
    ImportInterims {
        #[arg(long)]
        csv: String,
    },

    /// Signaler les intérims arrivant à échéance
    CheckRenewals {
        /// Date du contrôle (défaut : aujourd'hui)
        #[arg(long)]
        today: Option<String>,
        /// Export CSV des alertes (optionnel)
        #[arg(long)]
        report: Option<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    #[cfg(feature = "logging")]
    if cli.log {
        let _ = Subscriber::builder()
            .with_env_filter(EnvFilter::from_default_env())
            .try_init();
    }

    let settings = Settings::load_or_default(cli.config.as_deref())?;
    let holidays = CachedHolidays::new(
        settings.holiday_source()?,
        TtlCache::new(settings.cache_ttl()),
    );

    let code = match cli.cmd {
        Commands::Holidays { year, start, end } => {
            match (year, start, end) {
                (_, Some(start), Some(end)) => {
                    let start = io::parse_day(&start)?;
                    let end = io::parse_day(&end)?;
                    for y in start.year()..=end.year() {
                        for day in holidays.holidays_in_year(y) {
                            if start <= day && day <= end {
                                println!("{day}");
                            }
                        }
                    }
                }
                (year, _, _) => {
                    let year = year.unwrap_or_else(|| Local::now().year());
                    if settings.holidays_csv.is_none() {
                        let set = compute_french_holidays(year)?;
                        for h in set.iter() {
                            println!("{} | {}", h.date, h.kind.label());
                        }
                    } else {
                        for day in holidays.holidays_in_year(year) {
                            println!("{day}");
                        }
                    }
                }
            }
            0
        }
        Commands::BusinessDay { date } => {
            let day = io::parse_day(&date)?;
            println!("{}", is_business_day_with(day, &holidays));
            0
        }
        Commands::Count { start, end } => {
            let start = io::parse_day(&start)?;
            let end = io::parse_day(&end)?;
            println!("{}", business_days_between_with(start, end, &holidays));
            0
        }
        Commands::Next { date, n } => {
            let day = io::parse_day(&date)?;
            println!("{}", advance_business_days_with(day, n, &holidays));
            0
        }
        Commands::Week { date } => {
            let day = io::parse_day(&date)?;
            println!("{}", format_iso_week_label(day));
            0
        }
        Commands::Dates { start, end } => {
            let start = io::parse_day(&start)?;
            let end = io::parse_day(&end)?;
            for day in enumerate_dates(start, end) {
                println!("{day}");
            }
            0
        }
        Commands::Grid {
            start,
            end,
            granularity,
            out_csv,
        } => {
            let range = DateRange::new(io::parse_day(&start)?, io::parse_day(&end)?)?;
            let granularity: Granularity = match granularity {
                Some(g) => g.parse()?,
                None => settings.granularity,
            };
            let columns = build_columns(&range, granularity, &holidays);
            if let Some(path) = out_csv {
                io::export_columns_csv(path, &columns)?;
            }
            for c in &columns {
                println!(
                    "{} | {} → {} | {} | {}",
                    c.label,
                    c.start,
                    c.end,
                    c.kind.as_str(),
                    c.business_days
                );
            }
            println!("total: {} jour(s) ouvré(s)", total_business_days(&columns));
            0
        }
        Commands::ImportInterims { csv } => {
            let storage = JsonStorage::open(&cli.book)?;
            let mut book = storage.load_or_default()?;
            let interims = io::import_interims_csv(&csv)
                .with_context(|| format!("importing {csv}"))?;
            let imported = interims.len();
            book.interims.extend(interims);
            storage.save(&book)?;
            println!("{imported} contrat(s) importé(s)");
            0
        }
        Commands::CheckRenewals { today, report } => {
            let storage = JsonStorage::open(&cli.book)?;
            let book = storage.load_or_default()?;
            let today = match today {
                Some(raw) => io::parse_day(&raw)?,
                None => Local::now().date_naive(),
            };
            let opts = RenewalOptions {
                look_ahead_business_days: settings.look_ahead_business_days,
                ..RenewalOptions::default()
            };
            let result = check_renewals(&book.interims, today, opts, &holidays, &TextAlert)?;
            if result.skipped {
                println!("{today} n'est pas un jour ouvré : contrôle ignoré");
                0
            } else if result.alerts.is_empty() {
                println!("OK: aucun contrat à renouveler avant le {}", result.horizon);
                0
            } else {
                eprintln!("Found {} contract(s) ending by {}", result.alerts.len(), result.horizon);
                for a in &result.alerts {
                    print!("{}", a.content);
                }
                if let Some(path) = report {
                    io::export_alerts_csv(path, &result.alerts)?;
                }
                // Code 2 = WARNING
                2
            }
        }
    };

    std::process::exit(code);
}
