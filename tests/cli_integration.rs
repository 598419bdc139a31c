// CLI integration tests for the demo dispatcher.
use std::process::Command;

fn cmd() -> Command {
    let exe = env!("CARGO_BIN_EXE_motifs");
    Command::new(exe)
}

fn stdout_of(args: &[&str]) -> (i32, String) {
    let output = cmd().args(args).output().expect("run motifs");
    let code = output.status.code().expect("exit code");
    (code, String::from_utf8_lossy(&output.stdout).to_string())
}

#[test]
fn every_demo_token_runs_and_exits_zero() {
    for token in [
        "template_method",
        "factory_method",
        "singleton",
        "singleton2",
        "adapter",
        "adapter2",
    ] {
        let (code, stdout) = stdout_of(&[token]);
        assert_eq!(code, 0, "token {token}");
        assert!(stdout.starts_with("hello "), "token {token}: {stdout}");
    }
}

#[test]
fn missing_token_is_a_noop_with_exit_zero() {
    let (code, stdout) = stdout_of(&[]);
    assert_eq!(code, 0);
    assert!(stdout.is_empty());
}

#[test]
fn unknown_token_is_a_noop_with_exit_zero() {
    let (code, stdout) = stdout_of(&["observer"]);
    assert_eq!(code, 0);
    assert!(stdout.is_empty());
}

#[test]
fn unknown_flag_is_a_usage_error() {
    let output = cmd().arg("--nope").output().expect("run motifs");
    assert_eq!(output.status.code().unwrap(), 2);
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("error"));
}

#[test]
fn template_method_emits_list_before_table() {
    let (code, stdout) = stdout_of(&["template_method"]);
    assert_eq!(code, 0);
    let dl_end = stdout.find("</dl>").expect("list footer");
    let table = stdout.find("<table>").expect("table header");
    assert!(dl_end < table);
}

#[test]
fn factory_method_runs_from_any_working_directory() {
    let temp = tempfile::tempdir().expect("tempdir");
    let output = cmd()
        .arg("factory_method")
        .current_dir(temp.path())
        .output()
        .expect("run motifs");
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("CSV FILE READER"));
    assert!(stdout.contains("XML FILE READER"));
    assert!(stdout.contains("rejected:"));
    assert!(stdout.contains("Sample.txt"));
}

#[test]
fn singleton_sequential_accesses_agree() {
    let (code, stdout) = stdout_of(&["singleton"]);
    assert_eq!(code, 0);
    assert!(stdout.trim_end().ends_with("true"), "{stdout}");
}

#[test]
fn singleton2_shows_the_race_and_the_eager_fix() {
    let (code, stdout) = stdout_of(&["singleton2"]);
    assert_eq!(code, 0);

    let racy_ids: Vec<_> = stdout
        .lines()
        .filter_map(|line| line.strip_prefix("racy: "))
        .collect();
    let eager_ids: Vec<_> = stdout
        .lines()
        .filter_map(|line| line.strip_prefix("eager: "))
        .collect();
    assert_eq!(racy_ids.len(), 3);
    assert_eq!(eager_ids.len(), 3);

    // The racy policy loses uniqueness when first accesses overlap.
    let distinct_racy = racy_ids.iter().any(|id| *id != racy_ids[0]);
    assert!(distinct_racy, "racy callers should observe different ids: {stdout}");

    assert!(eager_ids.iter().all(|id| *id == eager_ids[0]));
}

#[test]
fn adapter_strategies_are_observably_identical() {
    let (code_a, stdout_a) = stdout_of(&["adapter"]);
    let (code_b, stdout_b) = stdout_of(&["adapter2"]);
    assert_eq!(code_a, 0);
    assert_eq!(code_b, 0);
    assert_eq!(stdout_a.as_bytes(), stdout_b.as_bytes());
}

#[test]
fn completions_script_is_emitted() {
    let output = cmd()
        .args(["--completions", "bash"])
        .output()
        .expect("run motifs");
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("motifs"));
}

#[test]
fn help_exits_zero() {
    let output = cmd().arg("--help").output().expect("run motifs");
    assert_eq!(output.status.code().unwrap(), 0);
}
