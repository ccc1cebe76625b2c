//! Integration tests for the NFS client probe

use std::process::Command;

use check_nfs_client::config::ProbeConfig;
use check_nfs_client::health::{
    self, HealthCheckRunner, HealthResult, StatusLevel, SystemCheck, checks::*,
};

fn plugin() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_check_nfs_client"));
    cmd.env_remove("RUST_LOG").env_remove("CHECK_NFS_PROFILE");
    cmd
}

#[test]
fn test_end_to_end_parse_and_report() {
    let result = health::parse_nfsstat_output("  write: 42\n  read: 7\n");

    assert_eq!(result.status, StatusLevel::Ok);
    assert_eq!(result.exit_code(), 0);
    assert_eq!(result.perfdata, "write=42c read=7c ");
    assert_eq!(result.details, vec!["write: 42", "read: 7"]);
    assert_eq!(
        health::format_report(&result),
        "OK: nfsstat output successfully parsed|write=42c read=7c \nwrite: 42\nread: 7\n"
    );
}

#[test]
fn test_empty_output_reports_warning() {
    let result = health::parse_nfsstat_output("");

    assert_eq!(result.status, StatusLevel::Warning);
    assert_eq!(result.exit_code(), 1);
    assert!(result.text.contains("empty"));
}

#[test]
fn test_metric_count_matches_perfdata_tokens() {
    let lines: Vec<String> = (0..25).map(|i| format!("  op: {}", i * 3)).collect();
    let output = lines.join("\n") + "\n";

    let result = health::parse_nfsstat_output(&output);

    assert_eq!(result.perfdata.split_whitespace().count(), 25);
    assert!(result.perfdata.split_whitespace().all(|t| t.ends_with('c')));
    assert_eq!(result.details.len(), 25);
    assert_eq!(result.details[24], "op: 72");
}

#[test]
fn test_exit_code_mapping() {
    for (code, expected) in [(0, 0), (1, 1), (2, 2), (3, 3), (4, 3), (-7, 3)] {
        let result = HealthResult::new(StatusLevel::from_code(code), "x");
        assert_eq!(result.exit_code(), expected, "status code {}", code);
    }
}

#[test]
fn test_nfs_client_check_metadata() {
    let check = NfsClientCheck::default();

    assert_eq!(check.name(), "NFS Client");
    assert!(check.description().is_some());
}

#[cfg(unix)]
#[test]
fn test_runner_reports_check_result() {
    let config = ProbeConfig {
        command: vec!["echo".into(), "calls:".into(), "12".into()],
        ..ProbeConfig::default()
    };

    let report = HealthCheckRunner::new(NfsClientCheck::new(config)).run();

    assert!(report.is_healthy(), "Probe failed: {:?}", report.result);
    assert_eq!(report.exit_code(), 0);
    let result = report.result.as_ref().unwrap();
    assert_eq!(result.perfdata, "calls=12c ");
}

#[test]
fn test_version_flag_exits_zero() {
    let output = plugin().arg("--version").output().unwrap();

    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.starts_with("check_nfs_client Version "));
    assert!(stdout.contains("Build time: "));
}

#[cfg(unix)]
#[test]
fn test_binary_reports_configured_command() {
    let output = plugin()
        .env("CHECK_NFS__COMMAND", "echo read: 7")
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(
        String::from_utf8(output.stdout).unwrap(),
        "OK: nfsstat output successfully parsed|read=7c \nread: 7\n"
    );
}

#[cfg(unix)]
#[test]
fn test_binary_fails_fast_on_command_failure() {
    let output = plugin().env("CHECK_NFS__COMMAND", "false").output().unwrap();

    assert_eq!(output.status.code(), Some(1));
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.starts_with("command failed: false"));
}

#[test]
fn test_binary_reports_missing_command() {
    let output = plugin()
        .env("CHECK_NFS__COMMAND", "definitely-not-a-real-binary-4711")
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.starts_with("failed to start definitely-not-a-real-binary-4711"));
}

#[cfg(unix)]
#[test]
fn test_binary_runs_single_word_boolean_command() {
    // `true` prints nothing, so the run ends in the empty-output warning
    let output = plugin().env("CHECK_NFS__COMMAND", "true").output().unwrap();

    assert_eq!(output.status.code(), Some(1));
    assert_eq!(
        String::from_utf8(output.stdout).unwrap(),
        "WARNING: nfsstat output was empty|\n"
    );
}

#[cfg(unix)]
#[test]
fn test_binary_honours_quoted_command_arguments() {
    let output = plugin()
        .env("CHECK_NFS__COMMAND", "sh -c 'echo \"  read: 7\"; echo \"  write: 42\"'")
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(
        String::from_utf8(output.stdout).unwrap(),
        "OK: nfsstat output successfully parsed|read=7c write=42c \nread: 7\nwrite: 42\n"
    );
}
