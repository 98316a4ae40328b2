use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;
use std::fs;

mod common;
use common::TestHome;

#[test]
fn test_init_creates_roster_with_header() {
    let home = TestHome::new("init_roster");

    home.cmd()
        .args(["--test", "init"])
        .assert()
        .success()
        .stdout(contains("initialization completed"));

    let roster = fs::read_to_string(home.roster()).unwrap();
    assert_eq!(roster.trim_end(), "ID,Name,Grade,Section");

    // test mode leaves no configuration file behind
    assert!(!home.dir.join("rattendance.conf").exists());
}

#[test]
fn test_init_twice_keeps_roster_rows() {
    let home = TestHome::new("init_twice");
    home.init_with_students();

    home.cmd().args(["--test", "init"]).assert().success();

    let roster = fs::read_to_string(home.roster()).unwrap();
    assert_eq!(roster.lines().count(), 3);
}

#[test]
fn test_reg_and_list() {
    let home = TestHome::new("reg_list");
    home.init_with_students();

    let roster = fs::read_to_string(home.roster()).unwrap();
    assert!(roster.contains("04A1B2C3,Ada Lovelace,10,B"));

    home.cmd()
        .arg("list")
        .assert()
        .success()
        .stdout(contains("04A1B2C3"))
        .stdout(contains("Ada Lovelace"))
        .stdout(contains("99FF00EE"))
        .stdout(contains("0 of 2 students present"));
}

#[test]
fn test_reg_duplicate_fails() {
    let home = TestHome::new("reg_dup");
    home.init_with_students();

    home.cmd()
        .args(["reg", "04A1B2C3", "Someone", "9", "C"])
        .assert()
        .failure()
        .stderr(contains("already registered"));

    let roster = fs::read_to_string(home.roster()).unwrap();
    assert_eq!(roster.lines().count(), 3);
}

#[test]
fn test_reg_blank_field_fails() {
    let home = TestHome::new("reg_blank");

    home.cmd()
        .args(["reg", "ABCD", "Ada", "", "B"])
        .assert()
        .failure()
        .stderr(contains("Missing field: Grade"));
}

#[test]
fn test_scan_unknown_card_is_not_fatal() {
    let home = TestHome::new("scan_unknown");
    home.init_with_students();

    home.cmd()
        .args(["scan", "DEADBEEF"])
        .assert()
        .success()
        .stdout(contains("Unknown card: DEADBEEF"))
        .stdout(contains("reg DEADBEEF"));

    assert!(!home.attendance().exists());
}

#[test]
fn test_scan_known_card_checks_in() {
    let home = TestHome::new("scan_known");
    home.init_with_students();

    home.cmd()
        .args(["scan", "99FF00EE"])
        .assert()
        .success()
        .stdout(contains("IN:"))
        .stdout(contains("Bob"));

    let attendance = fs::read_to_string(home.attendance()).unwrap();
    let lines: Vec<&str> = attendance.lines().collect();
    assert_eq!(lines[0], "Date,ID,Name,Grade,Section,TimeIn,TimeOut");
    assert_eq!(lines.len(), 2);
    assert!(lines[1].contains(",99FF00EE,Bob,11,A,"));
    assert!(lines[1].ends_with(','));
}

#[test]
fn test_run_replay_records_in_and_out() {
    let home = TestHome::new("run_replay");
    home.init_with_students();

    let input = home.replay_file(&[
        "RFID Reader Initialized",
        "Module version 0x92",
        "04A1B2C3",
        "Connection lost? no",
        "12345678",
        "04A1B2C3",
        "99FF00EE",
    ]);

    home.cmd()
        .args(["run", "--input", &input])
        .assert()
        .success()
        .stdout(contains("Loaded 2 students from database"))
        .stdout(contains("IN:"))
        .stdout(contains("OUT:"))
        .stdout(contains("Unknown card: 12345678"))
        .stdout(contains("1 of 2 students still marked present"));

    let attendance = fs::read_to_string(home.attendance()).unwrap();
    let rows: Vec<Vec<&str>> = attendance
        .lines()
        .skip(1)
        .map(|l| l.split(',').collect())
        .collect();

    assert_eq!(rows.len(), 3);
    // Ada in, Ada out, Bob in
    assert_eq!(rows[0][1], "04A1B2C3");
    assert_eq!(rows[0][6], "");
    assert_eq!(rows[1][1], "04A1B2C3");
    assert_eq!(rows[1][5], rows[0][5]);
    assert!(rows[1][6] >= rows[1][5]);
    assert_eq!(rows[2][1], "99FF00EE");
    assert_eq!(rows[2][6], "");
}

#[test]
fn test_run_with_roster_override() {
    let home = TestHome::new("run_override");
    let roster = home.dir.join("custom_roster.csv");
    fs::write(&roster, "ID,Name,Grade,Section\nCAFE01,Cy,9,C\nBROKEN,row\n").unwrap();
    let roster = roster.to_string_lossy().to_string();

    let input = home.replay_file(&["CAFE01"]);

    home.cmd()
        .args(["--roster", &roster, "run", "--input", &input])
        .assert()
        .success()
        .stdout(contains("Skipped 1 incomplete roster rows"))
        .stdout(contains("Loaded 1 students from database"));

    assert!(home.read("attendance.csv").contains("CAFE01,Cy,9,C"));
}

#[test]
fn test_run_on_missing_port_fails() {
    let home = TestHome::new("run_bad_port");
    home.init_with_students();

    home.cmd()
        .args(["--port", "/dev/does-not-exist-rattendance", "run"])
        .assert()
        .failure()
        .stderr(contains("Error connecting to reader on /dev/does-not-exist-rattendance"));
}

#[test]
fn test_history_filters() {
    let home = TestHome::new("history");
    home.init_with_students();

    let input = home.replay_file(&["04A1B2C3", "04A1B2C3", "99FF00EE"]);
    home.cmd()
        .args(["run", "--input", &input])
        .assert()
        .success();

    let today = chrono::Local::now().format("%Y-%m-%d").to_string();

    home.cmd()
        .args(["history", "--date", &today])
        .assert()
        .success()
        .stdout(contains("3 rows"));

    home.cmd()
        .args(["history", "--kind", "out"])
        .assert()
        .success()
        .stdout(contains("Ada Lovelace"))
        .stdout(contains("1 rows"))
        .stdout(contains("Bob").not());

    home.cmd()
        .args(["history", "--id", "99FF00EE"])
        .assert()
        .success()
        .stdout(contains("1 rows"));

    home.cmd()
        .args(["history", "--date", "1999-01-01"])
        .assert()
        .success()
        .stdout(contains("No attendance rows found."));

    home.cmd()
        .args(["history", "--date", "yesterday"])
        .assert()
        .failure()
        .stderr(contains("Invalid date format: yesterday"));
}

#[test]
fn test_history_skips_truncated_row() {
    let home = TestHome::new("history_truncated");
    home.init_with_students();
    fs::write(
        home.attendance(),
        "Date,ID,Name,Grade,Section,TimeIn,TimeOut\n\
         2025-09-01,04A1B2C3,Ada Lovelace,10,B,08:00:00,\n\
         2025-09-01,99FF00EE,Bo\n",
    )
    .unwrap();

    home.cmd()
        .args(["history"])
        .assert()
        .success()
        .stdout(contains("Skipped 1 unreadable attendance rows"))
        .stdout(contains("Ada Lovelace"))
        .stdout(contains("1 rows"));
}

#[test]
fn test_log_print_shows_activity() {
    let home = TestHome::new("log_print");
    home.init_with_students();
    home.cmd().args(["scan", "04A1B2C3"]).assert().success();

    home.cmd()
        .args(["log", "--print"])
        .assert()
        .success()
        .stdout(contains("Activity log"))
        .stdout(contains("04A1B2C3"))
        .stdout(contains("Registered Ada Lovelace 10 B"))
        .stdout(contains("IN Ada Lovelace at"));
}

#[test]
fn test_config_check_and_print() {
    let home = TestHome::new("config_check");

    home.cmd()
        .args(["config", "--check"])
        .assert()
        .failure()
        .stderr(contains("configuration file not found"));

    home.cmd().arg("init").assert().success();
    assert!(home.dir.join("rattendance.conf").exists());

    home.cmd()
        .args(["config", "--check"])
        .assert()
        .success()
        .stdout(contains("Configuration file is complete."));

    fs::write(home.dir.join("rattendance.conf"), "port: COM3\n").unwrap();

    home.cmd()
        .args(["config", "--check"])
        .assert()
        .success()
        .stdout(contains("roster_file"));

    home.cmd()
        .args(["--baud", "9600", "config", "--print"])
        .assert()
        .success()
        .stdout(contains("port: COM3"))
        .stdout(contains("baud_rate: 9600"));
}
