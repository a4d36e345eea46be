use assert_cmd::Command;
use httpmock::prelude::*;
use predicates::prelude::*;
use tempfile::TempDir;

fn finreport(data_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("finreport").unwrap();
    cmd.env("FINREPORT_DATA_DIR", data_dir.path())
        .env_remove("FINREPORT_API_URL")
        .env_remove("FINREPORT_USER_ID")
        .env("RUST_LOG", "off");
    cmd
}

const MARCH_BODY: &str =
    r#"{"total_income":5000,"total_expenses":2000,"total_savings":1000,"balance":2000}"#;

#[test]
fn months_lists_every_code() {
    let data_dir = TempDir::new().unwrap();

    finreport(&data_dir)
        .arg("months")
        .assert()
        .success()
        .stdout(predicate::str::contains("01"))
        .stdout(predicate::str::contains("January"))
        .stdout(predicate::str::contains("12"))
        .stdout(predicate::str::contains("December"));
}

#[test]
fn config_save_writes_settings() {
    let data_dir = TempDir::new().unwrap();

    finreport(&data_dir)
        .args(["--user", "42", "config", "--save"])
        .assert()
        .success()
        .stdout(predicate::str::contains("User:           42"));

    let written = std::fs::read_to_string(data_dir.path().join("config.json")).unwrap();
    assert!(written.contains("\"user_id\": \"42\""));
}

#[test]
fn report_show_prints_values() {
    let data_dir = TempDir::new().unwrap();
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET).path("/api/reports/42/2024-03");
        then.status(200)
            .header("content-type", "application/json")
            .body(MARCH_BODY);
    });

    finreport(&data_dir)
        .args(["--api-url", &server.base_url(), "--user", "42"])
        .args(["report", "show", "--month", "March", "--year", "2024"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Report for March 2024"))
        .stdout(predicate::str::contains("Rs. 5000"))
        .stdout(predicate::str::contains("Rs. 1000"));

    mock.assert();
}

#[test]
fn report_show_json() {
    let data_dir = TempDir::new().unwrap();
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/api/reports/1/2024-03");
        then.status(200).body(MARCH_BODY);
    });

    finreport(&data_dir)
        .args(["--api-url", &server.base_url()])
        .args(["report", "show", "-m", "03", "-y", "2024", "--json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"total_income\": 5000,"));
}

#[test]
fn report_show_surfaces_server_error() {
    let data_dir = TempDir::new().unwrap();
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/api/reports/1/2024-04");
        then.status(500);
    });

    finreport(&data_dir)
        .args(["--api-url", &server.base_url()])
        .args(["report", "show", "--month", "04", "--year", "2024"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("HTTP 500"));
}

#[test]
fn report_show_rejects_unknown_month() {
    let data_dir = TempDir::new().unwrap();

    finreport(&data_dir)
        .args(["--api-url", "http://127.0.0.1:9"])
        .args(["report", "show", "--month", "Smarch"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Validation error"));
}

#[test]
fn report_export_writes_pdf() {
    let data_dir = TempDir::new().unwrap();
    let out_dir = TempDir::new().unwrap();
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/api/reports/1/2024-07");
        then.status(200).body(MARCH_BODY);
    });

    finreport(&data_dir)
        .args(["--api-url", &server.base_url()])
        .args(["report", "export", "--month", "07", "--year", "2024", "--output"])
        .arg(out_dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Financial_Report_2024-07.pdf"))
        .stdout(predicate::str::contains("1 page"));

    let pdf = std::fs::read(out_dir.path().join("Financial_Report_2024-07.pdf")).unwrap();
    assert!(pdf.starts_with(b"%PDF"));
}

#[test]
fn empty_api_url_is_rejected() {
    let data_dir = TempDir::new().unwrap();

    finreport(&data_dir)
        .args(["--api-url", "", "report", "show", "--month", "03"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("api_base_url must not be empty"));
}
