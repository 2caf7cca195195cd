//! Integration tests for CLI functionality

use assert_cmd::Command;
use predicates::prelude::*;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Get path to compiled binary
fn github_users_bin() -> &'static std::path::Path {
    assert_cmd::cargo::cargo_bin!("github-users")
}

/// Command with no token or API URL inherited from the environment
fn github_users() -> Command {
    let mut cmd = Command::new(github_users_bin());
    cmd.env_remove("GITHUB_TOKEN").env_remove("GITHUB_API_URL");
    cmd
}

/// Mock GitHub with org `acme` holding alice ("Alice A") and bob (no name)
async fn mock_github() -> MockServer {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/user"))
        .and(header("authorization", "Bearer good-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({ "login": "me" })))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/user/orgs"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!([{ "login": "acme", "id": 1 }])),
        )
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/orgs/acme/members"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
            { "login": "alice", "id": 10 },
            { "login": "bob", "id": 11 }
        ])))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/users/alice"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "login": "alice", "name": "Alice A"
        })))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/users/bob"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "login": "bob", "name": null
        })))
        .mount(&server)
        .await;

    server
}

/// Test that help flag works
#[test]
fn test_help_flag() {
    github_users()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Prints out a list of users in the given GitHub organization",
        ))
        .stdout(predicate::str::contains("--github-token"))
        .stdout(predicate::str::contains("--field-names"));
}

/// Test that short help flag works
#[test]
fn test_short_help_flag() {
    github_users().arg("-h").assert().success();
}

/// Test that version flag works
#[test]
fn test_version_flag() {
    github_users()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("github-users"))
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

/// Test invalid format argument
#[test]
fn test_invalid_format() {
    github_users()
        .args(["acme", "-t", "token", "-f", "yaml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("yaml"));
}

/// Test that the token is required
#[test]
fn test_missing_token() {
    github_users()
        .arg("acme")
        .assert()
        .failure()
        .stderr(predicate::str::contains("--github-token"));
}

/// Blank token is rejected before any request
#[test]
fn test_blank_token() {
    github_users()
        .args(["acme", "-t", " ", "--api-url", "http://127.0.0.1:9", "-q"])
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Configuration error"));
}

/// Invalid token fails before any organization lookup
#[tokio::test(flavor = "multi_thread")]
async fn test_invalid_token_exits_non_zero() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/user"))
        .respond_with(ResponseTemplate::new(401))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/user/orgs"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
        .expect(0)
        .mount(&server)
        .await;

    github_users()
        .args(["acme", "-t", "bad-token", "--api-url", &server.uri(), "-q"])
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Authentication failed"));
}

/// Token falls back to the GITHUB_TOKEN environment variable
#[tokio::test(flavor = "multi_thread")]
async fn test_token_from_environment() {
    let server = mock_github().await;

    github_users()
        .env("GITHUB_TOKEN", "good-token")
        .args(["acme", "--api-url", &server.uri(), "-f", "json", "-n", "login", "-q"])
        .assert()
        .success()
        .stdout("[{\"login\": \"alice\"}, {\"login\": \"bob\"}]\n");
}

/// CSV export into a file
#[tokio::test(flavor = "multi_thread")]
async fn test_csv_to_file() {
    let server = mock_github().await;
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("users.csv");
    std::fs::write(&file, "stale content from an earlier run\n").unwrap();

    github_users()
        .args(["acme", "-t", "good-token", "--api-url", &server.uri(), "-f", "csv", "-q"])
        .arg("-o")
        .arg(&file)
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    assert_eq!(
        std::fs::read_to_string(&file).unwrap(),
        "\"name\",\"login\"\n\"Alice A\",\"alice\"\n\"\",\"bob\"\n"
    );
}

/// Default format is the pretty-printed one
#[tokio::test(flavor = "multi_thread")]
async fn test_default_pprint_to_stdout() {
    let server = mock_github().await;

    let output = github_users()
        .args(["acme", "-t", "good-token", "--api-url", &server.uri(), "-q"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.ends_with("]\n"));
    let parsed: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(parsed.as_array().unwrap().len(), 2);
    assert_eq!(parsed[0]["name"], "Alice A");
    assert_eq!(parsed[1]["name"], "");
}

/// Unknown organization fails without writing output
#[tokio::test(flavor = "multi_thread")]
async fn test_unknown_organization() {
    let server = mock_github().await;
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("users.csv");

    github_users()
        .args(["nope", "-t", "good-token", "--api-url", &server.uri(), "-f", "csv", "-q"])
        .arg("-o")
        .arg(&file)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Organization 'nope' not found"));

    assert!(!file.exists());
}
