use assert_cmd::Command;
use predicates::prelude::*;

fn shortly() -> Command {
    let mut cmd = Command::cargo_bin("shortly-cli").expect("binary should build");
    // Keep the test hermetic: no ambient configuration leaks in
    cmd.env_remove("SHORTLY_API_URL")
        .env_remove("SHORTLY_API_KEY")
        .env_remove("SHORTLY_USE_MOCK_API")
        .env_remove("SHORTLY_ENABLE_ANALYTICS")
        .env_remove("SHORTLY_ENV");
    cmd
}

#[test]
fn help_lists_subcommands() {
    shortly()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("shorten"))
        .stdout(predicate::str::contains("expand"))
        .stdout(predicate::str::contains("stats"))
        .stdout(predicate::str::contains("config"));
}

#[test]
fn mock_shorten_prints_short_link() {
    shortly()
        .args(["--mock", "shorten", "https://example.com/a/b"])
        .assert()
        .success()
        .stdout(predicate::str::contains("short.ly/"))
        .stdout(predicate::str::contains("https://example.com/a/b"));
}

#[test]
fn mock_shorten_rejects_invalid_url() {
    shortly()
        .args(["--mock", "shorten", "notaurl"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "Please enter a valid URL (must start with http:// or https://)",
        ));
}

#[test]
fn stats_requires_analytics_flag() {
    shortly()
        .args(["--mock", "stats", "abc123"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Analytics are disabled"));
}

#[test]
fn mock_expand_prints_stored_link() {
    shortly()
        .args(["--mock", "expand", "abc123"])
        .assert()
        .success()
        .stdout(predicate::str::contains("short.ly/abc123"));
}

#[test]
fn config_show_renders_resolved_settings() {
    shortly()
        .env("SHORTLY_API_URL", "https://api.short.ly")
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("https://api.short.ly"))
        .stdout(predicate::str::contains("Retry attempts"));
}

#[test]
fn production_without_api_url_fails_fast() {
    shortly()
        .env("SHORTLY_ENV", "production")
        .args(["config", "show"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("SHORTLY_API_URL"));
}
