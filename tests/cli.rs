mod common;

use std::process::{Command, Output};

use common::{TestResult, TestingEnv};

fn harvest(vars: Vec<(&'static str, String)>) -> Output {
    Command::new(env!("CARGO_BIN_EXE_harvest"))
        .arg("get-projects")
        .envs(vars)
        .env("RUST_LOG", "off")
        .output()
        .unwrap()
}

#[test]
fn prints_projects() -> TestResult {
    let env = TestingEnv::new();
    let mock = env.get_json_from_file("/projects", "resources/projects.json");

    let output = harvest(env.vars());

    mock.assert_hits(1);
    assert!(output.status.success());
    assert_eq!(
        String::from_utf8(output.stdout)?,
        "Id: 14308069, Name: Online Store - Phase 1\nId: 14307913, Name: Marketing Website\n"
    );

    Ok(())
}

#[test]
fn invalid_json_terminates_abnormally() -> TestResult {
    let env = TestingEnv::new();
    env.get_json("/projects", "not json at all");

    let output = harvest(env.vars());

    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    assert!(String::from_utf8(output.stderr)?.contains("Failed to deserialize the response"));

    Ok(())
}

#[test]
fn transport_failure_is_printed() -> TestResult {
    let vars = vec![
        ("HARVEST_ACCOUNT_ID", common::ACCOUNT_ID.to_string()),
        ("ACCESS_TOKEN", common::TOKEN.to_string()),
        ("HARVEST_API_URL", String::from("http://127.0.0.1:9/v2/")),
    ];

    let output = harvest(vars);

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout)?;
    assert!(stdout.contains("Failed to get valid response from server"));
    assert_eq!(stdout.lines().count(), 1);

    Ok(())
}

#[test]
fn missing_env_file_fails() -> TestResult {
    let output = Command::new(env!("CARGO_BIN_EXE_harvest"))
        .args(["get-projects", "--env-file", "resources/does-not-exist.env"])
        .env("RUST_LOG", "off")
        .output()?;

    assert!(!output.status.success());
    assert!(String::from_utf8(output.stderr)?.contains("does-not-exist.env"));

    Ok(())
}

#[test]
fn credentials_from_env_file() -> TestResult {
    let env = TestingEnv::new();
    let mock = env.get_json_from_file("/projects", "resources/projects_empty.json");

    let path = std::env::temp_dir().join(format!("harvest-cli-{}.env", env.port()));
    let contents = env
        .vars()
        .into_iter()
        .map(|(key, val)| format!("{key}=\"{val}\"\n"))
        .collect::<String>();
    std::fs::write(&path, contents)?;

    let output = Command::new(env!("CARGO_BIN_EXE_harvest"))
        .arg("get-projects")
        .arg("--env-file")
        .arg(&path)
        .env_remove("HARVEST_ACCOUNT_ID")
        .env_remove("ACCESS_TOKEN")
        .env_remove("HARVEST_API_URL")
        .env("RUST_LOG", "off")
        .output()?;
    std::fs::remove_file(&path)?;

    mock.assert_hits(1);
    assert!(output.status.success());
    assert!(output.stdout.is_empty());

    Ok(())
}
