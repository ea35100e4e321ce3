use assert_cmd::cargo::{self};
use predicates::str::contains;

#[test]
fn prints_help() {
    let mut cmd = cargo::cargo_bin_cmd!("pageform");
    cmd.arg("--help")
        .assert()
        .success()
        .stdout(contains("pageform"))
        .stdout(contains("--fixture"));
}

#[test]
fn prints_page_schema() {
    let mut cmd = cargo::cargo_bin_cmd!("pageform");
    cmd.arg("--print-schema")
        .assert()
        .success()
        .stdout(contains("formFields"));
}

#[test]
fn reports_missing_fixture_before_starting() {
    let mut cmd = cargo::cargo_bin_cmd!("pageform");
    cmd.args(["--fixture", "does-not-exist.json"])
        .assert()
        .failure()
        .stderr(contains("input (fixture)"));
}

#[test]
fn rejects_fixture_with_base_url() {
    let mut cmd = cargo::cargo_bin_cmd!("pageform");
    cmd.args(["--fixture", "pages.json", "--base-url", "http://localhost"])
        .assert()
        .failure()
        .stderr(contains("cannot be used with"));
}
