#![forbid(unsafe_code)]
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::tempdir;

fn cli() -> Command {
    Command::cargo_bin("plancharge-cli").unwrap()
}

#[test]
fn week_label() {
    cli()
        .args(["week", "--date", "2024-12-30"])
        .assert()
        .success()
        .stdout("2025-01\n");
}

#[test]
fn business_day_and_count() {
    cli()
        .args(["business-day", "--date", "21/04/2025"])
        .assert()
        .success()
        .stdout("false\n");
    cli()
        .args(["count", "--start", "2025-01-01", "--end", "2025-01-31"])
        .assert()
        .success()
        .stdout("22\n");
}

#[test]
fn next_skips_holiday_and_weekend() {
    cli()
        .args(["next", "--date", "2025-08-14"])
        .assert()
        .success()
        .stdout("2025-08-18\n");
}

#[test]
fn holidays_for_year_are_labelled() {
    cli()
        .args(["holidays", "--year", "2025"])
        .assert()
        .success()
        .stdout(predicate::str::contains("2025-04-20 | Pâques"))
        .stdout(predicate::str::contains("2025-06-09 | Lundi de Pentecôte"));
}

#[test]
fn grid_rejects_unknown_granularity() {
    cli()
        .args([
            "grid",
            "--start",
            "2025-01-01",
            "--end",
            "2025-01-31",
            "--granularity",
            "trimestre",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown granularity"));
}

#[test]
fn grid_by_month_prints_total() {
    cli()
        .args(["grid", "--start", "2025-01-01", "--end", "2025-02-28", "--granularity", "mois"])
        .assert()
        .success()
        .stdout(predicate::str::contains("2025-01 | 2025-01-01 → 2025-01-31 | period | 22"))
        .stdout(predicate::str::contains("total: 42 jour(s) ouvré(s)"));
}

#[test]
fn config_holiday_list_replaces_french_rules() {
    let dir = tempdir().unwrap();
    let holidays = dir.path().join("holidays.csv");
    fs::write(&holidays, "date,label\n2025-04-22,Fête locale\n").unwrap();
    let config = dir.path().join("config.json");
    fs::write(
        &config,
        format!("{{\"holidays_csv\": {:?}}}", holidays.to_string_lossy()),
    )
    .unwrap();

    let config = config.to_string_lossy().to_string();
    cli()
        .args(["--config", &config, "business-day", "--date", "2025-04-21"])
        .assert()
        .success()
        .stdout("true\n");
    cli()
        .args(["--config", &config, "business-day", "--date", "2025-04-22"])
        .assert()
        .success()
        .stdout("false\n");
}

#[test]
fn import_then_check_renewals() {
    let dir = tempdir().unwrap();
    let csv = dir.path().join("interims.csv");
    fs::write(
        &csv,
        "ressource,date_debut,date_fin,site\nDupont,2025-02-03,2025-04-25,Lyon\nBernard,2025-03-03,2025-06-30,\n",
    )
    .unwrap();
    let book = dir.path().join("interims.json").to_string_lossy().to_string();
    let report = dir.path().join("alerts.csv");

    cli()
        .args(["--book", &book, "import-interims", "--csv"])
        .arg(&csv)
        .assert()
        .success()
        .stdout("2 contrat(s) importé(s)\n");

    cli()
        .args(["--book", &book, "check-renewals", "--today", "2025-04-17", "--report"])
        .arg(&report)
        .assert()
        .code(2)
        .stdout(predicate::str::contains("Dupont (Lyon)"))
        .stdout(predicate::str::contains("Bernard").not());

    let written = fs::read_to_string(&report).unwrap();
    assert_eq!(written.lines().count(), 2);

    cli()
        .args(["--book", &book, "check-renewals", "--today", "2025-04-19"])
        .assert()
        .success()
        .stdout(predicate::str::contains("contrôle ignoré"));
}
