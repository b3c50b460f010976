use assert_cmd::prelude::*;
use std::fs;
use std::path::Path;
use std::process::Command;

const EXAMPLE: &str = "4\nA 2 B 4 C 1\nB 1 C -2\nC 0\nD 0\n";

fn write_input(dir: &Path, text: &str) -> std::path::PathBuf {
    let path = dir.join("graph.txt");
    fs::write(&path, text).expect("write input");
    path
}

#[test]
fn cli_writes_default_output_files_into_working_directory() {
    let tmp = tempfile::tempdir().expect("tempdir");
    let input = write_input(tmp.path(), EXAMPLE);

    let exe = assert_cmd::cargo_bin!("bellman");
    let assert = Command::new(exe)
        .current_dir(tmp.path())
        .arg(&input)
        .assert()
        .success();

    let stdout = String::from_utf8_lossy(&assert.get_output().stdout).into_owned();
    for stage in ["load", "compute", "write"] {
        assert!(
            stdout.contains(&format!("[timing] stage={stage} ")),
            "missing {stage} timing in {stdout:?}"
        );
    }

    assert_eq!(
        fs::read_to_string(tmp.path().join("output.txt")).expect("read output.txt"),
        "A:0\nB:4\nC:1\nD:INF\n"
    );
    assert_eq!(
        fs::read_to_string(tmp.path().join("paths.txt")).expect("read paths.txt"),
        "A:\nB:A\nC:A\n"
    );
}

#[test]
fn cli_honours_output_overrides_and_quiet() {
    let tmp = tempfile::tempdir().expect("tempdir");
    let input = write_input(tmp.path(), "2\nsrc 1 dst -7\ndst 0\n");
    let dist = tmp.path().join("d.txt");
    let paths = tmp.path().join("p.txt");

    let exe = assert_cmd::cargo_bin!("bellman");
    let assert = Command::new(exe)
        .current_dir(tmp.path())
        .args([
            "--quiet",
            "--out",
            dist.to_string_lossy().as_ref(),
            "--paths-out",
            paths.to_string_lossy().as_ref(),
            input.to_string_lossy().as_ref(),
        ])
        .assert()
        .success();

    assert!(assert.get_output().stdout.is_empty());
    assert_eq!(fs::read_to_string(&dist).expect("read d.txt"), "src:0\ndst:-7\n");
    assert_eq!(fs::read_to_string(&paths).expect("read p.txt"), "src:\ndst:src\n");
    assert!(!tmp.path().join("output.txt").exists());
}

#[test]
fn cli_prints_adjacency_when_asked() {
    let tmp = tempfile::tempdir().expect("tempdir");
    let input = write_input(tmp.path(), EXAMPLE);

    let exe = assert_cmd::cargo_bin!("bellman");
    let assert = Command::new(exe)
        .current_dir(tmp.path())
        .args(["--quiet", "--print-adjacency"])
        .arg(&input)
        .assert()
        .success();

    assert_eq!(
        String::from_utf8_lossy(&assert.get_output().stdout),
        "A->B:4,C:1,\nB->C:-2,\nC->\nD->\n"
    );
}

#[test]
fn cli_without_arguments_prints_usage() {
    let exe = assert_cmd::cargo_bin!("bellman");
    let assert = Command::new(exe).assert().failure();
    let stderr = String::from_utf8_lossy(&assert.get_output().stderr).into_owned();
    assert!(stderr.contains("USAGE"), "stderr: {stderr:?}");
}

#[test]
fn cli_fails_on_missing_input_file() {
    let tmp = tempfile::tempdir().expect("tempdir");
    let exe = assert_cmd::cargo_bin!("bellman");
    let assert = Command::new(exe)
        .current_dir(tmp.path())
        .arg("does-not-exist.txt")
        .assert()
        .failure();
    let stderr = String::from_utf8_lossy(&assert.get_output().stderr).into_owned();
    assert!(stderr.contains("does-not-exist.txt"), "stderr: {stderr:?}");
    assert!(!tmp.path().join("output.txt").exists());
}

#[test]
fn cli_fails_on_non_positive_vertex_count() {
    let tmp = tempfile::tempdir().expect("tempdir");
    let input = write_input(tmp.path(), "0\n");

    let exe = assert_cmd::cargo_bin!("bellman");
    let assert = Command::new(exe)
        .current_dir(tmp.path())
        .arg(&input)
        .assert()
        .failure();
    let stderr = String::from_utf8_lossy(&assert.get_output().stderr).into_owned();
    assert!(stderr.contains("vertex count must be positive"), "stderr: {stderr:?}");
}
