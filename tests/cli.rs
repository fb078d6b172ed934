mod common;

use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::process::Command;

#[test]
fn cli_shows_help() {
    let mut cmd = Command::cargo_bin("eds").unwrap();
    cmd.arg("--help");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("eds"))
        .stdout(predicate::str::contains("emissions"));
}

#[test]
fn packages_prints_one_per_line() {
    let mock = common::spawn(200, r#"{"success":true,"result":["co2emisprog","elspotprices"]}"#);
    let mut cmd = Command::cargo_bin("eds").unwrap();
    cmd.args(["--base-url", mock.base_url.as_str(), "packages"]);
    cmd.assert()
        .success()
        .stdout("co2emisprog\nelspotprices\n");
    assert_eq!(mock.requests()[0].path, "/package_list");
}

#[test]
fn tags_saved_as_json() {
    let mock = common::spawn(200, r#"{"success":true,"result":["co2","wind"]}"#);
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("tags.json");
    let mut cmd = Command::cargo_bin("eds").unwrap();
    cmd.args(["tags", "--out"])
        .arg(&out)
        .args(["--base-url", mock.base_url.as_str()]);
    cmd.assert()
        .success()
        .stderr(predicate::str::contains("Saved 2 rows"));
    let v: Vec<String> = serde_json::from_str(&std::fs::read_to_string(&out).unwrap()).unwrap();
    assert_eq!(v, vec!["co2", "wind"]);
}

#[test]
fn status_error_exits_nonzero_with_status_line() {
    let mock = common::spawn(404, "{}");
    let mut cmd = Command::cargo_bin("eds").unwrap();
    cmd.args(["--base-url", mock.base_url.as_str(), "tag-info", "nope"]);
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("404 Not Found"));
}

#[test]
fn unreachable_api_exits_nonzero() {
    let mut cmd = Command::cargo_bin("eds").unwrap();
    cmd.args(["--base-url", common::dead_base_url().as_str(), "categories"]);
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("fetch categories"));
}

#[test]
fn emissions_prints_response() {
    let mock = common::spawn(200, r#"{"success":true,"result":{"records":[{"CO2Emission":99}]}}"#);
    let mut cmd = Command::cargo_bin("eds").unwrap();
    cmd.args(["--base-url", mock.base_url.as_str(), "emissions", "--region", "DK2"]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("\"CO2Emission\": 99"));
    assert_eq!(mock.requests()[0].path, "/datastore_search_sql");
}
