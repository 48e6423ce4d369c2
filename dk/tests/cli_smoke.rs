use assert_cmd::Command;
use predicates::str::contains;

#[test]
fn dk_help_works() {
    Command::cargo_bin("dk")
        .expect("binary")
        .arg("--help")
        .assert()
        .success()
        .stdout(contains("weekly done list"));
}

#[test]
fn dk_version_works() {
    Command::cargo_bin("dk")
        .expect("binary")
        .arg("--version")
        .assert()
        .success();
}

#[test]
fn dk_rejects_unknown_flag() {
    Command::cargo_bin("dk")
        .expect("binary")
        .arg("--definitely-not-a-flag")
        .assert()
        .failure();
}
