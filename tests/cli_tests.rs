use regex::Regex;
use std::fs;
use std::io::Write;
use std::process::{Command, Output, Stdio};

fn neff(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_neff"))
        .args(args)
        .output()
        .expect("Failed to execute binary")
}

fn coefficient_of(stdout: &str) -> f64 {
    let re = Regex::new(r"(-?\d+\.\d{3}) \(Ideal range: 1\.20-1\.22\)").unwrap();
    let caps = re
        .captures(stdout)
        .unwrap_or_else(|| panic!("no coefficient in output:\n{}", stdout));
    caps[1].parse().unwrap()
}

#[test]
fn test_cli_defaults() {
    let out = neff(&["calculate"]);
    assert!(out.status.success());
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert_eq!(coefficient_of(&stdout), 0.714);
    assert!(stdout.contains("BELOW IDEAL RANGE"));
}

#[test]
fn test_cli_flags_reach_evaluator() {
    let out = neff(&[
        "calculate",
        "--max-incisor",
        "5",
        "--max-canine",
        "5",
        "--mand-incisor",
        "6",
        "--mand-canine",
        "6.1",
    ]);
    assert!(out.status.success());
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert_eq!(coefficient_of(&stdout), 1.21);
    assert!(stdout.contains("IDEAL RELATIONSHIP (1.20-1.22)"));
    assert!(stdout.contains("outside the usual"));
}

#[test]
fn test_cli_zero_sum_fails() {
    let out = neff(&["calculate", "--max-incisor", "0", "--max-canine", "0"]);
    assert_eq!(out.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("Maxillary sum cannot be zero"));
    assert!(out.stdout.is_empty());
}

#[test]
fn test_cli_non_numeric_is_a_usage_error() {
    let out = neff(&["calculate", "--max-incisor", "wide"]);
    assert_eq!(out.status.code(), Some(2));
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("invalid value 'wide'"));
    assert!(out.stdout.is_empty());
}

#[test]
fn test_cli_json_keeps_non_finite_values() {
    let out = neff(&["calculate", "--max-incisor", "NaN", "--format", "json"]);
    assert!(out.status.success());
    let v: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    assert_eq!(v["coefficient"], "NaN");
    assert_eq!(v["maxillarySum"], "NaN");
    assert_eq!(v["mandibularSum"], 11.5);
    assert_eq!(v["band"], "AboveIdeal");
}

#[test]
fn test_cli_negative_infinity_flag() {
    let out = neff(&["calculate", "--mand-canine", "-inf", "--format", "json"]);
    assert!(out.status.success());
    let v: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    assert_eq!(v["coefficient"], "-inf");
    assert_eq!(v["band"], "BelowIdeal");
}

#[test]
fn test_cli_json_with_input_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("m.json");
    fs::write(&path, r#"{ "max_incisor": 5.0, "max_canine": 5.0, "mand_incisor": 7.0 }"#).unwrap();

    let out = neff(&[
        "calculate",
        "--input",
        path.to_str().unwrap(),
        "--mand-canine",
        "7",
        "--format",
        "json",
    ]);
    assert!(out.status.success());
    let v: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    assert_eq!(v["coefficient"], 1.4);
    assert_eq!(v["band"], "AboveIdeal");
}

#[test]
fn test_cli_info_panel() {
    let out = neff(&["info"]);
    assert!(out.status.success());
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.starts_with("NEFF'S ANTERIOR COEFFICIENT ANALYSIS INFORMATION"));
    assert!(stdout.contains("- Normal range: 1.20 to 1.22"));
    for heading in ["Measurement Instructions", "Technique Notes", "Common Findings"] {
        assert!(stdout.contains(heading), "missing section {}", heading);
    }
    assert!(!stdout.contains("Technique Notes:"));
}

#[test]
fn test_cli_interactive_session() {
    let mut child = Command::new(env!("CARGO_BIN_EXE_neff"))
        .arg("interactive")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .spawn()
        .expect("Failed to spawn binary");

    child
        .stdin
        .take()
        .unwrap()
        .write_all(b"set max-incisor 0\nset max-canine 0\ncalc\nreset\ncalc\nquit\n")
        .unwrap();
    let out = child.wait_with_output().unwrap();
    assert!(out.status.success());

    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains("Maxillary sum cannot be zero"));
    assert_eq!(coefficient_of(&stdout), 0.714);
}

#[test]
fn test_cli_help_describes_debug_flag() {
    let out = neff(&["calculate", "--help"]);
    assert!(out.status.success());
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains("Log debug detail to stderr"));
}
