#![allow(deprecated)]

use assert_cmd::cargo::cargo_bin;
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

fn addrbook_cmd(home: &Path) -> Command {
    let mut cmd = Command::new(cargo_bin("addrbook"));
    cmd.env("ADDRBOOK_HOME", home).env("NO_COLOR", "1");
    cmd
}

fn data_file(home: &Path) -> PathBuf {
    home.join("contacts.txt")
}

fn add(home: &Path, first: &str, last: &str, email: &str) {
    addrbook_cmd(home)
        .args(["add", "--first", first, "--last", last, "--email", email])
        .assert()
        .success();
}

#[test]
fn add_then_list_persists_one_line_per_contact() {
    let temp = TempDir::new().unwrap();
    let home = temp.path();

    addrbook_cmd(home)
        .args([
            "add",
            "--first",
            " Amy ",
            "--last",
            "Lee",
            "--address",
            "1 High St",
            "--mobile",
            "0700",
            "--email",
            "amy@x.io",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Contact added: Amy Lee"));

    assert_eq!(
        fs::read_to_string(data_file(home)).unwrap(),
        "Amy,Lee,1 High St,0700,,amy@x.io,\n"
    );

    addrbook_cmd(home)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("1. Amy Lee"))
        .stdout(predicate::str::contains("saved"));
}

#[test]
fn naked_run_lists_and_reports_empty_book() {
    let temp = TempDir::new().unwrap();
    addrbook_cmd(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("No contacts found."));
    assert!(!data_file(temp.path()).exists());
}

#[test]
fn add_reads_fields_from_stdin() {
    let temp = TempDir::new().unwrap();
    let home = temp.path();

    addrbook_cmd(home)
        .arg("add")
        .write_stdin("Bob\nZane\n2 Low Rd\n0711\n\nbob@x.io\nbob.png\n")
        .assert()
        .success();

    assert_eq!(
        fs::read_to_string(data_file(home)).unwrap(),
        "Bob,Zane,2 Low Rd,0711,,bob@x.io,bob.png\n"
    );
}

#[test]
fn add_cancelled_by_end_of_input_writes_nothing() {
    let temp = TempDir::new().unwrap();
    let home = temp.path();

    addrbook_cmd(home)
        .arg("add")
        .write_stdin("Bob\nZane\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Cancelled"));

    assert!(!data_file(home).exists());
}

#[test]
fn add_rejects_all_empty_contact() {
    let temp = TempDir::new().unwrap();
    addrbook_cmd(temp.path())
        .args(["add", "--first", "  "])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Contact is empty"));
    assert!(!data_file(temp.path()).exists());
}

#[test]
fn sorted_and_filtered_views_keep_canonical_numbers() {
    let temp = TempDir::new().unwrap();
    let home = temp.path();
    add(home, "bob", "adams", "bob@x.io");
    add(home, "Amy", "Zane", "amy@x.io");

    // insertion sorts by first name: Amy is 1, bob is 2
    let output = addrbook_cmd(home)
        .args(["sort", "last", "--json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let listed: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(listed[0]["index"], 2);
    assert_eq!(listed[0]["contact"]["last_name"], "adams");
    assert_eq!(listed[1]["index"], 1);

    addrbook_cmd(home)
        .args(["filter", "ZANE"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1. Amy Zane"))
        .stdout(predicate::str::contains("bob").not());

    addrbook_cmd(home)
        .args(["search", "nobody"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No contacts match"));
}

#[test]
fn delete_by_number_and_by_name() {
    let temp = TempDir::new().unwrap();
    let home = temp.path();
    add(home, "Amy", "Lee", "a@x");
    add(home, "Bob", "Zane", "b@x");
    add(home, "Cal", "Moss", "c@x");

    addrbook_cmd(home)
        .args(["delete", "-y", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Contact deleted (2): Bob Zane"));

    addrbook_cmd(home)
        .args(["rm", "-y", "cal", "moss"])
        .assert()
        .success();

    assert_eq!(
        fs::read_to_string(data_file(home)).unwrap(),
        "Amy,Lee,,,,a@x,\n"
    );
}

#[test]
fn delete_out_of_range_changes_nothing() {
    let temp = TempDir::new().unwrap();
    let home = temp.path();
    add(home, "Amy", "Lee", "a@x");
    let before = fs::read_to_string(data_file(home)).unwrap();

    addrbook_cmd(home)
        .args(["delete", "-y", "5"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("out of range"));

    assert_eq!(fs::read_to_string(data_file(home)).unwrap(), before);
}

#[test]
fn delete_without_confirmation_is_cancelled() {
    let temp = TempDir::new().unwrap();
    let home = temp.path();
    add(home, "Amy", "Lee", "a@x");

    addrbook_cmd(home)
        .args(["delete", "1"])
        .write_stdin("n\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Operation cancelled."));

    assert!(fs::read_to_string(data_file(home))
        .unwrap()
        .contains("Amy"));
}

#[test]
fn ambiguous_name_is_an_error() {
    let temp = TempDir::new().unwrap();
    let home = temp.path();
    add(home, "Bob", "Zane", "b@x");
    add(home, "Bobby", "Tables", "t@x");

    addrbook_cmd(home)
        .args(["view", "bob"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("matches 2 contacts"));

    addrbook_cmd(home)
        .args(["view", "bob", "zane"])
        .assert()
        .success()
        .stdout(predicate::str::contains("b@x"))
        .stdout(predicate::str::contains("(none)"));
}

#[test]
fn edit_overwrites_given_fields_in_place() {
    let temp = TempDir::new().unwrap();
    let home = temp.path();
    add(home, "Amy", "Lee", "a@x");
    add(home, "Bob", "Zane", "b@x");

    addrbook_cmd(home)
        .args(["edit", "1", "--first", "Zoe", "--mobile", "0799"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Contact updated (1): Zoe Lee"));

    // position is kept even though the first name now sorts last
    assert_eq!(
        fs::read_to_string(data_file(home)).unwrap(),
        "Zoe,Lee,,0799,,a@x,\nBob,Zane,,,,b@x,\n"
    );
}

#[test]
fn clear_erases_everything() {
    let temp = TempDir::new().unwrap();
    let home = temp.path();
    add(home, "Amy", "Lee", "a@x");
    add(home, "Bob", "Zane", "b@x");

    addrbook_cmd(home)
        .args(["clear", "-y"])
        .assert()
        .success()
        .stdout(predicate::str::contains("All entries erased (2 contact(s))."));

    assert_eq!(fs::read_to_string(data_file(home)).unwrap(), "");

    addrbook_cmd(home)
        .args(["clear", "-y"])
        .assert()
        .success()
        .stdout(predicate::str::contains("already empty"));
}

#[test]
fn malformed_lines_are_quarantined_on_next_save() {
    let temp = TempDir::new().unwrap();
    let home = temp.path();
    fs::write(data_file(home), "Amy,Lee,,,,a@x,\nbroken,line\n").unwrap();

    addrbook_cmd(home)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Amy Lee"))
        .stderr(predicate::str::contains("Skipped 1 malformed line(s)"));

    // a read-only command leaves the file alone
    assert!(!home.join("contacts.txt.rejected").exists());

    add(home, "Bob", "Zane", "b@x");

    assert_eq!(
        fs::read_to_string(home.join("contacts.txt.rejected")).unwrap(),
        "broken,line\n"
    );
    assert_eq!(
        fs::read_to_string(data_file(home)).unwrap(),
        "Amy,Lee,,,,a@x,\nBob,Zane,,,,b@x,\n"
    );
}

#[test]
fn fail_policy_refuses_to_load() {
    let temp = TempDir::new().unwrap();
    let home = temp.path();
    fs::write(data_file(home), "broken\n").unwrap();

    addrbook_cmd(home)
        .args(["config", "malformed-lines", "fail"])
        .assert()
        .success()
        .stdout(predicate::str::contains("malformed-lines set to fail"));

    addrbook_cmd(home)
        .args(["add", "--first", "Amy"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("line 1"));

    assert_eq!(fs::read_to_string(data_file(home)).unwrap(), "broken\n");
}

#[test]
fn check_reports_bad_lines_and_fails() {
    let temp = TempDir::new().unwrap();
    let home = temp.path();
    fs::write(data_file(home), "Amy,Lee,,,,a@x,\na,b,c\n").unwrap();

    addrbook_cmd(home)
        .arg("check")
        .assert()
        .failure()
        .stdout(predicate::str::contains("line 2: expected 7 fields, found 3"));
}

#[test]
fn file_flag_and_path_command() {
    let temp = TempDir::new().unwrap();
    let home = temp.path();
    let other = temp.path().join("elsewhere").join("book.txt");

    addrbook_cmd(home)
        .args(["path"])
        .assert()
        .success()
        .stdout(predicate::str::contains("contacts.txt"));

    addrbook_cmd(home)
        .args(["add", "--first", "Amy", "--file"])
        .arg(&other)
        .assert()
        .success();

    assert!(other.exists());
    assert!(!data_file(home).exists());
}

#[test]
fn config_shows_defaults_and_rejects_unknown_keys() {
    let temp = TempDir::new().unwrap();
    let home = temp.path();

    addrbook_cmd(home)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("malformed-lines = quarantine"))
        .stdout(predicate::str::contains("data-file = contacts.txt"));

    addrbook_cmd(home)
        .args(["config", "colour", "blue"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("Unknown config key: colour"));
}

#[test]
fn comma_in_a_value_warns() {
    let temp = TempDir::new().unwrap();
    addrbook_cmd(temp.path())
        .args(["add", "--first", "Amy", "--address", "1 High St, Leeds"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Address contains a comma or line break",
        ));
}

#[test]
fn unreadable_line_does_not_block_add() {
    let temp = TempDir::new().unwrap();
    let home = temp.path();
    fs::write(data_file(home), b"Jos\xe9,Lee,,,,,\n").unwrap();

    add(home, "Amy", "Lee", "a@x");

    assert_eq!(
        fs::read_to_string(data_file(home)).unwrap(),
        "Amy,Lee,,,,a@x,\n"
    );
    assert_eq!(
        fs::read(home.join("contacts.txt.rejected")).unwrap(),
        b"Jos\xe9,Lee,,,,,\n".to_vec()
    );
}
