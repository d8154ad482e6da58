use std::process::{Command, Output};
use tinyfetch::ui::banner::{DECORATION, GENIE_STRINGS};

fn tinyfetch(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_tinyfetch"))
        .args(args)
        .env("NO_COLOR", "1")
        .output()
        .expect("failed to run tinyfetch")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

#[test]
fn test_version() {
    let output = tinyfetch(&["-v"]);
    assert!(output.status.success());
    assert_eq!(
        stdout(&output),
        format!("tinyfetch v{}\n", env!("CARGO_PKG_VERSION"))
    );
}

#[test]
fn test_help() {
    let output = tinyfetch(&["--help"]);
    assert!(output.status.success());
    let text = stdout(&output);
    assert!(text.contains(DECORATION));
    assert!(text.contains("usage: tinyfetch"));
}

#[test]
fn test_unknown_argument_prints_help() {
    for arg in ["--bogus", "bogus"] {
        let output = tinyfetch(&[arg]);
        assert_eq!(output.status.code(), Some(1));
        let text = stdout(&output);
        assert!(text.contains("tinyfetch: Unknown command line argument."));
        assert!(text.contains("usage: tinyfetch"));
    }
}

#[test]
fn test_message_without_text() {
    let output = tinyfetch(&["-m"]);
    assert_eq!(output.status.code(), Some(1));
    assert_eq!(stdout(&output), "no message provided.\n");
}

#[test]
fn test_message_with_text() {
    let output = tinyfetch(&["-m", "hello"]);
    assert!(output.status.success());
    let text = stdout(&output);
    assert_eq!(
        text.lines().next(),
        Some(format!("{} hello", DECORATION).as_str())
    );
}

#[test]
fn test_first_argument_wins() {
    let output = tinyfetch(&["-v", "--json"]);
    assert!(output.status.success());
    assert!(stdout(&output).starts_with("tinyfetch v"));
}

#[test]
fn test_genie() {
    let output = tinyfetch(&["--genie"]);
    assert!(output.status.success());
    let text = stdout(&output);
    let message = text
        .trim_end()
        .strip_prefix(&format!("{} ", DECORATION))
        .unwrap();
    assert!(GENIE_STRINGS.contains(&message));
}

#[test]
fn test_json_is_valid() {
    let output = tinyfetch(&["--json"]);
    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert!(value.get("ram").is_some());
    assert!(value.get("identity").is_some());
}

#[test]
fn test_full_report_runs() {
    let output = tinyfetch(&[]);
    assert!(output.status.success());
    assert!(stdout(&output).contains("Distro:   "));
}

#[test]
fn test_color_without_colorizer() {
    let output = Command::new(env!("CARGO_BIN_EXE_tinyfetch"))
        .arg("--color")
        .env("PATH", "")
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(1));
    assert_eq!(
        stdout(&output),
        "lolcat is not installed! cannot print using colors.\n"
    );
}

#[test]
fn test_message_starting_with_dash() {
    let output = tinyfetch(&["-m", "-hello", "--bogus"]);
    assert!(output.status.success());
    assert_eq!(
        stdout(&output).lines().next(),
        Some(format!("{} -hello", DECORATION).as_str())
    );
}

#[test]
fn test_trailing_arguments_ignored() {
    let output = tinyfetch(&["-o", "--bogus"]);
    assert!(output.status.success());
    assert!(stdout(&output).starts_with("OS:       "));
}
