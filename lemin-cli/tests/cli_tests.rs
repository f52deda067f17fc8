//! End-to-end tests for the `lemin` binary: feed a farm file on disk,
//! check stdout/exit code.

use std::io::Write;
use std::process::Command;

fn write_fixture(name: &str, contents: &str) -> std::path::PathBuf {
    let mut path = std::env::temp_dir();
    path.push(format!("lemin-cli-test-{name}-{}.txt", std::process::id()));
    let mut file = std::fs::File::create(&path).unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    path
}

#[test]
fn succeeds_on_direct_edge_and_echoes_input() {
    let input = "1\n##start\ns 0 0\n##end\ne 1 0\ns-e\n";
    let path = write_fixture("direct", input);

    let output = Command::new(env!("CARGO_BIN_EXE_lemin"))
        .arg(&path)
        .output()
        .expect("binary runs");

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.starts_with(input));
    assert!(stdout.trim_end().ends_with("L1-e"));

    std::fs::remove_file(path).ok();
}

#[test]
fn reports_error_on_unreachable_end() {
    let input = "1\n##start\ns 0 0\n##end\ne 1 0\n";
    let path = write_fixture("unreachable", input);

    let output = Command::new(env!("CARGO_BIN_EXE_lemin"))
        .arg(&path)
        .output()
        .expect("binary runs");

    assert!(!output.status.success());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert_eq!(stderr.trim_end(), "ERROR: no valid paths found");

    std::fs::remove_file(path).ok();
}

#[test]
fn reports_error_on_malformed_input() {
    let input = "not a number\n";
    let path = write_fixture("malformed", input);

    let output = Command::new(env!("CARGO_BIN_EXE_lemin"))
        .arg(&path)
        .output()
        .expect("binary runs");

    assert!(!output.status.success());
    let stderr = String::from_utf8(output.stderr).unwrap();
    // The canonical message is exact and discards the parser's detail
    // string entirely — it must not leak into stderr.
    assert_eq!(stderr.trim_end(), "ERROR: invalid data format");

    std::fs::remove_file(path).ok();
}
