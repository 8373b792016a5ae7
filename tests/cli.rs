use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::fs;
use std::path::PathBuf;

fn sample_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("samples")
        .join(name)
}

#[test]
fn demo_runs_all_three_programs() {
    let mut cmd = cargo_bin_cmd!("tinylang");
    cmd.arg("demo");

    let output_pred = predicate::str::contains("Tokens for program 1:")
        .and(predicate::str::contains("(KEYWORD, int)"))
        .and(predicate::str::contains("(RBRACE, })"))
        .and(predicate::str::contains("(NUMBER, 3.14)"))
        .and(predicate::str::contains("Recognition for program 3:"));

    cmd.assert().success().stdout(output_pred);
}

#[test]
fn demo_can_hide_tokens() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("tinylang.toml");
    fs::write(&config, "[demo]\nshow_tokens = false\n").unwrap();

    let mut cmd = cargo_bin_cmd!("tinylang");
    cmd.arg("demo").arg("--config").arg(&config);

    let output_pred = predicate::str::contains("Tokens for")
        .not()
        .and(predicate::str::contains("Recognition completed successfully!").count(3));

    cmd.assert().success().stdout(output_pred);
}

#[test]
fn check_accepts_valid_sample() {
    let mut cmd = cargo_bin_cmd!("tinylang");
    cmd.arg("check").arg(sample_path("04-nested-blocks.tl"));

    cmd.assert()
        .success()
        .stdout(predicate::str::starts_with("ok: 7 statement(s)"));
}

#[test]
fn check_reports_syntax_error() {
    let mut cmd = cargo_bin_cmd!("tinylang");
    cmd.arg("check").arg(sample_path("90-missing-identifier.tl"));

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("expected IDENTIFIER, found ASSIGN"));
}

#[test]
fn check_reports_lexical_error() {
    let mut cmd = cargo_bin_cmd!("tinylang");
    cmd.arg("check").arg(sample_path("91-unrecognized-character.tl"));

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Unrecognized character '@'"));
}

#[test]
fn check_accepts_deeply_nested_program() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("deep.tl");
    let depth = 20_000;
    fs::write(
        &path,
        format!("{}{}", "if (x > 0) {\n".repeat(depth), "}\n".repeat(depth)),
    )
    .unwrap();

    let mut cmd = cargo_bin_cmd!("tinylang");
    cmd.arg("check").arg(&path);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("max depth 20000"));
}

#[test]
fn process_uses_explicit_format() {
    let mut cmd = cargo_bin_cmd!("tinylang");
    cmd.arg("process")
        .arg(sample_path("03-float-declaration.tl"))
        .arg("check-json");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("\"declarations\": 1"));
}

#[test]
fn process_defaults_to_token_simple() {
    let mut cmd = cargo_bin_cmd!("tinylang");
    cmd.arg("process").arg(sample_path("03-float-declaration.tl"));

    cmd.assert()
        .success()
        .stdout(predicate::str::starts_with("(KEYWORD, float)\n(IDENTIFIER, y)\n"));
}

#[test]
fn process_prints_tokens_before_lexical_error() {
    let mut cmd = cargo_bin_cmd!("tinylang");
    cmd.arg("process")
        .arg(sample_path("91-unrecognized-character.tl"))
        .arg("token-simple");

    cmd.assert()
        .failure()
        .stdout("(IDENTIFIER, x)\n")
        .stderr(predicate::str::contains("Unrecognized character '@'"));
}

#[test]
fn process_rejects_unknown_format() {
    let mut cmd = cargo_bin_cmd!("tinylang");
    cmd.arg("process")
        .arg(sample_path("03-float-declaration.tl"))
        .arg("ast-tag");

    cmd.assert()
        .failure()
        .stderr(
            predicate::str::contains("Invalid stage: ast")
                .and(predicate::str::contains("token-simple")),
        );
}

#[test]
fn formats_lists_all_formats() {
    let mut cmd = cargo_bin_cmd!("tinylang");
    cmd.arg("formats");

    cmd.assert().success().stdout(
        predicate::str::contains("token-simple")
            .and(predicate::str::contains("token-json"))
            .and(predicate::str::contains("check-simple"))
            .and(predicate::str::contains("check-json")),
    );
}
