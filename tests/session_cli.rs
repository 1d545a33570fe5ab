use assert_cmd::Command;
use predicates::prelude::PredicateBooleanExt;
use predicates::prelude::*;
use std::path::Path;

fn aether(config_dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("aether").unwrap();
    cmd.env("NO_COLOR", "1")
        .env_remove("RUST_LOG")
        .arg("--config-dir")
        .arg(config_dir);
    cmd
}

#[test]
fn test_session_starts_with_welcome_notes() {
    let temp_dir = tempfile::tempdir().unwrap();

    aether(temp_dir.path())
        .write_stdin("list\nresolve about linking\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Welcome to AetherNotes"))
        .stdout(predicate::str::contains("[[about linking]] -> About Linking"));
}

#[test]
fn test_no_welcome_starts_empty() {
    let temp_dir = tempfile::tempdir().unwrap();

    aether(temp_dir.path())
        .arg("--no-welcome")
        .write_stdin("list\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("No notes found."));
}

#[test]
fn test_linking_shows_up_in_graph() {
    let temp_dir = tempfile::tempdir().unwrap();
    let script = "\
new
edit . '<h1>Foo</h1><p>first</p>'
new
edit . '<h1>Bar</h1><p>see [[Foo]] and [[Missing]]</p>'
graph --json
";

    aether(temp_dir.path())
        .arg("--no-welcome")
        .write_stdin(script)
        .assert()
        .success()
        .stdout(predicate::str::contains("Note saved: Bar (1 links)"))
        .stdout(predicate::str::contains("\"edges\""))
        .stdout(predicate::str::contains("\"title\": \"Foo\""));
}

#[test]
fn test_graph_renders_mermaid() {
    let temp_dir = tempfile::tempdir().unwrap();

    aether(temp_dir.path())
        .write_stdin("graph\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("graph TD;"))
        .stdout(predicate::str::contains("classDef textNode"))
        .stdout(predicate::str::contains("Welcome to AetherNotes (out 1, in 1) -> About Linking"))
        .stdout(predicate::str::contains("2 notes, 2 links"));
}

#[test]
fn test_errors_do_not_end_the_session() {
    let temp_dir = tempfile::tempdir().unwrap();

    aether(temp_dir.path())
        .arg("--no-welcome")
        .write_stdin("frobnicate\nview 7\nnew sketch\nsummarize\nlist\n")
        .assert()
        .success()
        .stderr(predicate::str::contains("frobnicate"))
        .stderr(predicate::str::contains("Index 7 not found"))
        .stderr(predicate::str::contains("only available for text notes"))
        .stdout(predicate::str::contains("Untitled sketch note"));
}

#[test]
fn test_pending_transcription_applied_at_exit() {
    let temp_dir = tempfile::tempdir().unwrap();
    let memo = temp_dir.path().join("memo.txt");
    std::fs::write(&memo, "remember the milk\n").unwrap();

    let script = format!("new audio\nrecord . {}\nquit\n", memo.display());

    aether(temp_dir.path())
        .arg("--no-welcome")
        .write_stdin(script)
        .assert()
        .success()
        .stdout(predicate::str::contains("Requested transcription"))
        .stdout(predicate::str::contains("Transcription complete: Audio Note - "));
}

#[test]
fn test_summary_after_delete_is_discarded() {
    let temp_dir = tempfile::tempdir().unwrap();
    let script = "\
new
edit . '<h1>Plan</h1><p>Ship it. Then rest.</p>'
summarize
rm .
wait
list
";

    aether(temp_dir.path())
        .arg("--no-welcome")
        .write_stdin(script)
        .assert()
        .success()
        .stdout(predicate::str::contains("Summary discarded: the note was deleted"))
        .stdout(predicate::str::contains("No notes found."));
}

#[test]
fn test_config_persists_between_sessions() {
    let temp_dir = tempfile::tempdir().unwrap();

    aether(temp_dir.path())
        .write_stdin("config seed-welcome false\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("seed-welcome set to false"));
    assert!(temp_dir.path().join("config.json").exists());

    aether(temp_dir.path())
        .write_stdin("list\nconfig seed-welcome\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("No notes found."))
        .stdout(predicate::str::contains("seed-welcome = false"))
        .stdout(predicate::str::contains("Welcome to AetherNotes").not());
}

#[test]
fn test_script_file() {
    let temp_dir = tempfile::tempdir().unwrap();
    let script = temp_dir.path().join("session.txt");
    std::fs::write(
        &script,
        "# comment lines are skipped\nnew text\nedit . \"<p>Scripted</p>\"\nview\n",
    )
    .unwrap();

    aether(temp_dir.path())
        .arg("--no-welcome")
        .arg("--script")
        .arg(&script)
        .assert()
        .success()
        .stdout(predicate::str::contains("<p>Scripted</p>"));
}

#[test]
fn test_missing_script_fails_startup() {
    let temp_dir = tempfile::tempdir().unwrap();

    aether(temp_dir.path())
        .arg("--script")
        .arg(temp_dir.path().join("nope.txt"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error:"));
}
