//! Integration tests for add, show, list and categories

use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

mod common;
use common::quill_cmd;

fn init_collection() -> TempDir {
    let temp = TempDir::new().unwrap();
    quill_cmd().arg("init").arg(temp.path()).assert().success();
    temp
}

#[test]
fn test_add_then_list_preserves_order() {
    let temp = init_collection();

    quill_cmd()
        .current_dir(temp.path())
        .args(["add", "First new quote", "Alpha"])
        .assert()
        .success();

    quill_cmd()
        .current_dir(temp.path())
        .args(["add", "Second new quote", "Beta"])
        .assert()
        .success();

    let listing = quill_cmd()
        .current_dir(temp.path())
        .arg("list")
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let listing = String::from_utf8(listing).unwrap();

    let first = listing.find("First new quote").unwrap();
    let second = listing.find("Second new quote").unwrap();
    assert!(first < second);
    // Seeds come before user additions.
    assert!(listing.find("great work").unwrap() < first);
}

#[test]
fn test_add_duplicate_text_fails() {
    let temp = init_collection();

    quill_cmd()
        .current_dir(temp.path())
        .args(["add", "Only once", "Alpha"])
        .assert()
        .success();

    quill_cmd()
        .current_dir(temp.path())
        .args(["add", "Only once", "Beta"])
        .assert()
        .failure()
        .code(5)
        .stderr(predicate::str::contains("already exists"));
}

#[test]
fn test_add_empty_text_fails() {
    let temp = init_collection();

    quill_cmd()
        .current_dir(temp.path())
        .args(["add", "   ", "Alpha"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("must not be empty"));
}

#[test]
fn test_show_with_category_is_deterministic() {
    let temp = init_collection();

    quill_cmd()
        .current_dir(temp.path())
        .args(["add", "Solo quote", "Unique"])
        .assert()
        .success();

    quill_cmd()
        .current_dir(temp.path())
        .args(["show", "--category", "Unique"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Solo quote"))
        .stdout(predicate::str::contains("Unique"));
}

#[test]
fn test_show_filter_is_sticky() {
    let temp = init_collection();

    quill_cmd()
        .current_dir(temp.path())
        .args(["add", "Solo quote", "Unique"])
        .assert()
        .success();

    quill_cmd()
        .current_dir(temp.path())
        .args(["show", "--category", "Unique"])
        .assert()
        .success();

    // Without a flag, the saved filter still applies.
    quill_cmd()
        .current_dir(temp.path())
        .arg("show")
        .assert()
        .success()
        .stdout(predicate::str::contains("Solo quote"));

    // The filter survives in the state slot.
    let state = fs::read_to_string(temp.path().join(".quill/state.toml")).unwrap();
    assert!(state.contains("Unique"));
}

#[test]
fn test_show_category_all_clears_filter() {
    let temp = init_collection();

    quill_cmd()
        .current_dir(temp.path())
        .args(["add", "Solo quote", "Unique"])
        .assert()
        .success();

    quill_cmd()
        .current_dir(temp.path())
        .args(["show", "--category", "Unique"])
        .assert()
        .success();

    quill_cmd()
        .current_dir(temp.path())
        .args(["show", "--category", "all"])
        .assert()
        .success();

    let state = fs::read_to_string(temp.path().join(".quill/state.toml")).unwrap();
    assert!(!state.contains("last_filter"));
}

#[test]
fn test_show_unknown_category_fails() {
    let temp = init_collection();

    quill_cmd()
        .current_dir(temp.path())
        .args(["show", "--category", "Nonexistent"])
        .assert()
        .failure()
        .code(4)
        .stderr(predicate::str::contains("No quotes in category"));
}

#[test]
fn test_show_empty_store_fails() {
    let temp = init_collection();

    // A corrupt store loads as empty with a warning rather than crashing.
    fs::write(temp.path().join(".quill/quotes.json"), "not json {").unwrap();

    quill_cmd()
        .current_dir(temp.path())
        .arg("show")
        .assert()
        .failure()
        .code(3)
        .stderr(predicate::str::contains("Warning"))
        .stderr(predicate::str::contains("empty"));
}

#[test]
fn test_bare_invocation_shows_a_quote() {
    let temp = init_collection();

    quill_cmd()
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("—"));
}

#[test]
fn test_categories_lists_unique_sorted() {
    let temp = init_collection();

    quill_cmd()
        .current_dir(temp.path())
        .args(["add", "Another wise one", "Wisdom"])
        .assert()
        .success();

    quill_cmd()
        .current_dir(temp.path())
        .arg("categories")
        .assert()
        .success()
        .stdout(predicate::str::contains("Inspiration\nWisdom\n"));
}

#[test]
fn test_list_with_category_filter() {
    let temp = init_collection();

    quill_cmd()
        .current_dir(temp.path())
        .args(["list", "--category", "Wisdom"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Strive not to be a success"))
        .stdout(predicate::str::contains("great work").not());
}

#[test]
fn test_quill_root_env_override() {
    let temp = init_collection();
    let elsewhere = TempDir::new().unwrap();

    let mut cmd = quill_cmd();
    cmd.current_dir(elsewhere.path())
        .env("QUILL_ROOT", temp.path())
        .arg("categories")
        .assert()
        .success()
        .stdout(predicate::str::contains("Wisdom"));
}
