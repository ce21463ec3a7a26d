//! Integration tests for stratagen-cli.
//!
//! Every test runs the real binary in a temporary project with answers
//! piped on stdin, so the line prompter is used.

use std::fs;
use std::path::Path;

use assert_cmd::Command;
use assert_cmd::cargo;
use predicates::prelude::*;
use tempfile::TempDir;

const STRATEGY_DIR: &str = "app/Strategies/PaymentMethod";

/// pay/restore, CreditCard/DebitCard, then the pipeline answer.
fn payment_answers(pipeline: &str) -> String {
    format!("pay\nrestore\n\nCreditCard\nDebitCard\n\n{pipeline}\n")
}

/// The binary, isolated from the caller's config and stub directories.
fn stratagen(project: &TempDir) -> Command {
    let mut cmd = cargo::cargo_bin_cmd!("stratagen");
    cmd.current_dir(project.path())
        .env("XDG_CONFIG_HOME", project.path().join(".xdg"))
        .env("HOME", project.path())
        .env_remove("STRATAGEN_STUBS_DIR")
        .env_remove("RUST_LOG");
    cmd
}

fn files_under(dir: &Path) -> Vec<String> {
    let mut out = Vec::new();
    let mut pending = vec![dir.to_path_buf()];
    while let Some(next) = pending.pop() {
        for entry in fs::read_dir(&next).unwrap() {
            let path = entry.unwrap().path();
            if path.is_dir() {
                pending.push(path);
            } else {
                out.push(path.strip_prefix(dir).unwrap().display().to_string());
            }
        }
    }
    out.sort();
    out
}

#[test]
fn test_help_flag() {
    cargo::cargo_bin_cmd!("stratagen")
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Strategy pattern scaffolding"))
        .stdout(predicate::str::contains("make"));
}

#[test]
fn test_short_help_flag() {
    cargo::cargo_bin_cmd!("stratagen")
        .arg("-h")
        .assert()
        .success()
        .stdout(predicate::str::contains("Strategy pattern scaffolding"))
        .stdout(predicate::str::contains("Usage: stratagen"));
}

#[test]
fn test_version_flag() {
    cargo::cargo_bin_cmd!("stratagen")
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_make_help_lists_flags() {
    cargo::cargo_bin_cmd!("stratagen")
        .args(["make", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--dry-run"))
        .stdout(predicate::str::contains("--strict"))
        .stdout(predicate::str::contains("--project-root"));
}

#[test]
fn test_make_writes_four_files_without_pipeline() {
    let project = TempDir::new().unwrap();

    stratagen(&project)
        .args(["make", "PaymentMethod"])
        .write_stdin(payment_answers("no"))
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Created app/Strategies/PaymentMethod/Contracts/PaymentMethodStrategyContract.php",
        ))
        .stdout(predicate::str::contains("Strategy PaymentMethod created (4 files)"));

    let base = project.path().join(STRATEGY_DIR);
    assert_eq!(
        files_under(&base),
        [
            "Contracts/PaymentMethodStrategyContract.php",
            "Factories/PaymentMethodFactory.php",
            "Implementations/CreditCard.php",
            "Implementations/DebitCard.php",
        ]
    );

    let contract = fs::read_to_string(base.join("Contracts/PaymentMethodStrategyContract.php")).unwrap();
    assert!(contract.contains("namespace App\\Strategies\\PaymentMethod\\Contracts;"));
    assert!(contract.contains("public function pay(): void;"));
    assert!(!contract.contains("getPipelines"));

    let factory = fs::read_to_string(base.join("Factories/PaymentMethodFactory.php")).unwrap();
    assert!(factory.contains("'DebitCard' => new DebitCard(),"));
}

#[test]
fn test_make_with_pipeline_writes_five_files() {
    let project = TempDir::new().unwrap();

    stratagen(&project)
        .args(["make", "PaymentMethod"])
        .write_stdin(payment_answers("yes"))
        .assert()
        .success()
        .stdout(predicate::str::contains("(5 files)"));

    let base = project.path().join(STRATEGY_DIR);
    assert!(base.join("Pipelines/PaymentMethodPipeline.php").is_file());
    let contract = fs::read_to_string(base.join("Contracts/PaymentMethodStrategyContract.php")).unwrap();
    assert!(contract.contains("public function getPipelines(): array;"));
}

#[test]
fn test_make_asks_for_the_name_when_omitted() {
    let project = TempDir::new().unwrap();

    stratagen(&project)
        .arg("make")
        .write_stdin("PaymentMethod\n\n\n")
        .assert()
        .success()
        .stderr(predicate::str::contains("What is the strategy name?"));

    assert_eq!(
        files_under(&project.path().join(STRATEGY_DIR)),
        ["Contracts/PaymentMethodStrategyContract.php"]
    );
}

#[test]
fn test_existing_strategy_aborts_without_writing() {
    let project = TempDir::new().unwrap();
    stratagen(&project)
        .args(["make", "PaymentMethod"])
        .write_stdin(payment_answers("no"))
        .assert()
        .success();

    let contract = project
        .path()
        .join(STRATEGY_DIR)
        .join("Contracts/PaymentMethodStrategyContract.php");
    fs::write(&contract, "edited").unwrap();

    stratagen(&project)
        .args(["make", "PaymentMethod"])
        .write_stdin(payment_answers("yes"))
        .assert()
        .success()
        .stdout(predicate::str::contains("Strategy PaymentMethod already exists. Aborting."))
        .stderr(predicate::str::contains("method name").not());

    assert_eq!(fs::read_to_string(&contract).unwrap(), "edited");
    assert!(!project.path().join(STRATEGY_DIR).join("Pipelines").exists());
}

#[test]
fn test_project_root_flag() {
    let project = TempDir::new().unwrap();
    let elsewhere = TempDir::new().unwrap();

    stratagen(&project)
        .args(["make", "Billing/PaymentMethod", "--project-root"])
        .arg(elsewhere.path())
        .write_stdin("charge\n\nStripe\n\nno\n")
        .assert()
        .success();

    let base = elsewhere.path().join("app/Strategies/PaymentMethod");
    let stripe = fs::read_to_string(base.join("Implementations/Stripe.php")).unwrap();
    assert!(stripe.contains("namespace App\\Strategies\\PaymentMethod\\Implementations;"));
    assert!(!elsewhere.path().join("app/Strategies/Billing").exists());
    assert!(!project.path().join("app").exists());
}

#[test]
fn test_nested_name_collides_with_existing_class_directory() {
    let project = TempDir::new().unwrap();
    fs::create_dir_all(project.path().join(STRATEGY_DIR)).unwrap();

    stratagen(&project)
        .args(["make", "Billing/PaymentMethod"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Strategy PaymentMethod already exists. Aborting."));

    assert!(!project.path().join("app/Strategies/Billing").exists());
    assert!(files_under(&project.path().join(STRATEGY_DIR)).is_empty());
}

#[test]
fn test_project_override_stub_wins() {
    let project = TempDir::new().unwrap();
    let stubs = project.path().join("stubs/laravel-strategy");
    fs::create_dir_all(&stubs).unwrap();
    fs::write(stubs.join("strategy-contract.stub"), "<?php // {{ name }} custom\n").unwrap();

    stratagen(&project)
        .args(["make", "PaymentMethod"])
        .write_stdin("\n\n")
        .assert()
        .success();

    let contract = fs::read_to_string(
        project
            .path()
            .join(STRATEGY_DIR)
            .join("Contracts/PaymentMethodStrategyContract.php"),
    )
    .unwrap();
    assert_eq!(contract, "<?php // PaymentMethod custom\n");
}

#[test]
fn test_dry_run_writes_nothing() {
    let project = TempDir::new().unwrap();

    stratagen(&project)
        .args(["make", "PaymentMethod", "--dry-run"])
        .write_stdin(payment_answers("no"))
        .assert()
        .success()
        .stdout(predicate::str::contains("Dry run"))
        .stdout(predicate::str::contains("Implementations/CreditCard.php"));

    assert!(!project.path().join("app").exists());
}

#[test]
fn test_suspicious_names_warn_but_generate() {
    let project = TempDir::new().unwrap();

    stratagen(&project)
        .args(["make", "PaymentMethod"])
        .write_stdin("pay-now\n\n\nno\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("method 'pay-now' is not a valid identifier"));

    assert!(
        project
            .path()
            .join(STRATEGY_DIR)
            .join("Contracts/PaymentMethodStrategyContract.php")
            .is_file()
    );
}

#[test]
fn test_make_json_output() {
    let project = TempDir::new().unwrap();

    let assert = stratagen(&project)
        .args(["--output-format", "json", "make", "PaymentMethod"])
        .write_stdin(payment_answers("no"))
        .assert()
        .success();

    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    let value: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(value["outcome"], "created");
    assert_eq!(value["strategy"], "PaymentMethod");
    assert_eq!(value["files"].as_array().unwrap().len(), 4);
}

#[test]
fn test_env_overrides_app_dir() {
    let project = TempDir::new().unwrap();

    stratagen(&project)
        .env("STRATAGEN_PROJECT__APP_DIR", "src")
        .args(["make", "PaymentMethod"])
        .write_stdin("\n\n")
        .assert()
        .success();

    assert!(
        project
            .path()
            .join("src/Strategies/PaymentMethod/Contracts/PaymentMethodStrategyContract.php")
            .is_file()
    );
}

#[test]
fn test_list_json_reports_origins() {
    let project = TempDir::new().unwrap();
    let stubs = project.path().join("stubs/laravel-strategy");
    fs::create_dir_all(&stubs).unwrap();
    fs::write(stubs.join("strategy-factory.stub"), "x").unwrap();

    let assert = stratagen(&project)
        .args(["list", "--format", "json"])
        .assert()
        .success();

    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    let value: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    let rows = value.as_array().unwrap();
    assert_eq!(rows.len(), 4);
    assert_eq!(rows[0]["id"], "strategy-contract");
    assert_eq!(rows[0]["origin"]["kind"], "bundled");
    assert_eq!(rows[2]["id"], "strategy-factory");
    assert_eq!(rows[2]["origin"]["kind"], "override");
}

#[test]
fn test_list_table_warns_about_unknown_stubs() {
    let project = TempDir::new().unwrap();
    let stubs = project.path().join("stubs/laravel-strategy");
    fs::create_dir_all(&stubs).unwrap();
    fs::write(stubs.join("strategy-contrat.stub"), "typo").unwrap();

    stratagen(&project)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("strategy-pipeline.stub"))
        .stdout(predicate::str::contains("bundled"))
        .stdout(predicate::str::contains("is not a known stub"));
}

#[test]
fn test_config_get_and_path() {
    let project = TempDir::new().unwrap();

    stratagen(&project)
        .args(["config", "get", "project.root_namespace"])
        .assert()
        .success()
        .stdout(predicate::str::contains("project.root_namespace = \"App\""));

    stratagen(&project)
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains("config.toml").or(predicate::str::contains(".stratagen.toml")));
}

#[test]
fn test_init_local_then_config_is_read() {
    let project = TempDir::new().unwrap();

    stratagen(&project)
        .args(["init", "--local"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Configuration created"));

    let path = project.path().join(".stratagen.toml");
    let text = fs::read_to_string(&path).unwrap();
    assert!(text.contains("root_namespace = \"App\""));

    fs::write(&path, text.replace("\"App\"", "\"Acme\"")).unwrap();
    stratagen(&project)
        .args(["config", "get", "project.root_namespace"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"Acme\""));

    // existing file without --force is left alone
    stratagen(&project)
        .args(["init", "--local"])
        .assert()
        .success()
        .stdout(predicate::str::contains("already exists"));
    assert!(fs::read_to_string(&path).unwrap().contains("Acme"));
}

#[test]
fn test_completions_bash() {
    cargo::cargo_bin_cmd!("stratagen")
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("stratagen"));
}
