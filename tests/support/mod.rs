use assert_cmd::{cargo::cargo_bin_cmd, Command};
use std::path::PathBuf;
use tempfile::TempDir;

/// Get a Command for compass
pub fn compass() -> Command {
    cargo_bin_cmd!("compass")
}

pub fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

/// compass pointed at the fixture CSVs, run from an empty directory
///
/// The returned TempDir must outlive the command.
pub fn campus() -> (TempDir, Command) {
    let dir = TempDir::new().unwrap();
    let mut cmd = compass();
    cmd.current_dir(dir.path())
        .arg("--edges")
        .arg(fixture("edges.csv"))
        .arg("--classes")
        .arg(fixture("classes.csv"));
    (dir, cmd)
}

/// Run `lines` as a script on stdin and return stdout
pub fn run_script(lines: &[&str]) -> String {
    let (_dir, mut cmd) = campus();
    let output = cmd
        .arg("run")
        .write_stdin(lines.join("\n"))
        .output()
        .unwrap();
    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8(output.stdout).unwrap()
}
