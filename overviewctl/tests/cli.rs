use std::fs;

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use tempfile::{TempDir, tempdir};

/// Command isolated from the caller's config environment and working
/// directory.
fn overviewctl(dir: &TempDir) -> assert_cmd::Command {
    let mut cmd = cargo_bin_cmd!("overviewctl");
    cmd.current_dir(dir.path())
        .env_remove("OVERVIEW_CONFIG_PATH")
        .env_remove("OVERVIEW_CONFIG_JSON")
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn help_lists_subcommands() {
    let dir = tempdir().expect("tempdir");
    let out = overviewctl(&dir)
        .arg("--help")
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let text = String::from_utf8_lossy(&out);
    assert!(text.contains("show"), "help missing 'show'");
    assert!(text.contains("script"), "help missing 'script'");
    assert!(text.contains("--config"), "help missing --config");
}

#[test]
fn show_renders_sample_gallery() {
    let dir = tempdir().expect("tempdir");
    overviewctl(&dir)
        .arg("show")
        .assert()
        .success()
        .stdout(predicate::str::contains("Standard Card"))
        .stdout(predicate::str::contains("Personal Card"))
        .stdout(predicate::str::contains("Page 1 of 3"))
        .stdout(predicate::str::contains("Owner: Owen Smith"));
}

#[test]
fn show_with_page_moves_selection_without_scrolling() {
    let dir = tempdir().expect("tempdir");
    overviewctl(&dir)
        .args(["show", "--page", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("> selected 3 (page 2)"))
        .stdout(predicate::str::contains("scroll ->").not())
        .stdout(predicate::str::contains("Type: Premium"));
}

#[test]
fn show_rejects_out_of_range_page() {
    let dir = tempdir().expect("tempdir");
    overviewctl(&dir)
        .args(["show", "--page", "5"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("out of range"));
}

#[test]
fn script_replays_gestures_with_custom_labels() {
    let dir = tempdir().expect("tempdir");
    let config = dir.path().join("gallery.toml");
    fs::write(&config, "[labels]\nempty_gallery = \"Wallet is empty\"\n")
        .unwrap();
    let script = dir.path().join("gestures.txt");
    fs::write(&script, "# walk the gallery\nswipe 1\nselect 3\nclear\nshow\n")
        .unwrap();

    overviewctl(&dir)
        .arg("--config")
        .arg(&config)
        .arg("script")
        .arg(&script)
        .assert()
        .success()
        .stdout(predicate::str::contains("> selected 2 (page 1)"))
        .stdout(predicate::str::contains("> scroll -> page 2"))
        .stdout(predicate::str::contains("> selection cleared"))
        .stdout(predicate::str::contains("Wallet is empty"));
}

#[test]
fn script_from_stdin_reports_bad_line() {
    let dir = tempdir().expect("tempdir");
    overviewctl(&dir)
        .args(["script", "-"])
        .write_stdin("swipe 1\nfly away\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("line 2"));
}

#[test]
fn config_card_file_is_found_from_another_directory() {
    let config_dir = tempdir().expect("tempdir");
    fs::write(
        config_dir.path().join("cards.toml"),
        r#"
[[cards]]
id = "travel"
owner_name = "Ada Lovelace"
number = "1111 2222 3333 4444"
image_url = "https://example.test/travel.jpg"
custom_name = "Travel"
"#,
    )
    .unwrap();
    let config = config_dir.path().join("gallery.toml");
    fs::write(&config, "cards = { file = \"cards.toml\" }\n").unwrap();

    let workdir = tempdir().expect("tempdir");
    overviewctl(&workdir)
        .arg("--config")
        .arg(&config)
        .arg("show")
        .assert()
        .success()
        .stdout(predicate::str::contains("Owner: Ada Lovelace"))
        .stdout(predicate::str::contains("Travel"));
}
