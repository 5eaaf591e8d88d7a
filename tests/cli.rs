use std::{fs, path::PathBuf};

use assert_cmd::cargo::cargo_bin_cmd;
use tempfile::TempDir;

fn write_input(contents: &str) -> (TempDir, PathBuf) {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("graph.txt");
    fs::write(&path, contents).expect("write input");
    (dir, path)
}

fn stdout_of(output: &std::process::Output) -> String {
    String::from_utf8(output.stdout.clone()).expect("utf8 stdout")
}

fn stderr_of(output: &std::process::Output) -> String {
    String::from_utf8(output.stderr.clone()).expect("utf8 stderr")
}

#[test]
fn bowtie_is_cactus() {
    let (_dir, path) = write_input("1 = 2 3\n2 = 3\n3 = 4 5\n4 = 5\n");
    let output = cargo_bin_cmd!("cactus")
        .arg(&path)
        .assert()
        .success()
        .get_output()
        .clone();

    let stdout = stdout_of(&output);
    assert!(stdout.starts_with("The graph is a cactus.\n"));
    assert!(stdout.contains("(2 blocks: 0 bridges, 2 cycles)"));
}

#[test]
fn shared_edge_is_not_cactus() {
    let (_dir, path) = write_input("# two triangles sharing edge 2-3\n1 = 2 3\n2 = 3 4\n3 = 4\n");
    let output = cargo_bin_cmd!("cactus")
        .arg(&path)
        .assert()
        .success()
        .get_output()
        .clone();

    let stdout = stdout_of(&output);
    assert!(stdout.starts_with("The graph is not a cactus.\n"));
    assert!(stdout.contains("Vertices [2, 3]"));
}

#[test]
fn verbose_lists_blocks() {
    let (_dir, path) = write_input("1 = 2\n2 = 3 4\n3 = 4\n");
    let output = cargo_bin_cmd!("cactus")
        .arg("--verbose")
        .arg(&path)
        .assert()
        .success()
        .get_output()
        .clone();

    let stdout = stdout_of(&output);
    assert!(stdout.contains("(bridge) --\nVertex 1, neighbors: 2\nVertex 2, neighbors: 1\n"));
    assert!(stdout.contains("(cycle) --\nVertex 2, neighbors: 3 4\n"));
}

#[test]
fn reads_stdin() {
    let output = cargo_bin_cmd!("cactus")
        .arg("-")
        .write_stdin("1 = 2\n2 = 3\n")
        .assert()
        .success()
        .get_output()
        .clone();

    assert!(stdout_of(&output).starts_with("The graph is a cactus.\n"));
}

#[test]
fn mirrored_listing_is_accepted() {
    let (_dir, path) = write_input("1 = 2 3\n2 = 1 3\n3 = 1 2\n");
    cargo_bin_cmd!("cactus").arg(&path).assert().success();
}

#[test]
fn disconnected_graph_fails() {
    let (_dir, path) = write_input("1 = 2\n3 = 4\n");
    let output = cargo_bin_cmd!("cactus")
        .arg(&path)
        .assert()
        .code(1)
        .get_output()
        .clone();

    assert!(stdout_of(&output).is_empty());
    assert!(stderr_of(&output).contains("not connected"));
}

#[test]
fn self_loop_fails() {
    let (_dir, path) = write_input("1 = 1\n");
    let output = cargo_bin_cmd!("cactus")
        .arg(&path)
        .assert()
        .code(1)
        .get_output()
        .clone();

    assert!(stderr_of(&output).contains("self-loop at vertex 1"));
}

#[test]
fn duplicate_edge_fails() {
    let (_dir, path) = write_input("1 = 2 2\n");
    let output = cargo_bin_cmd!("cactus")
        .arg(&path)
        .assert()
        .code(1)
        .get_output()
        .clone();

    assert!(stderr_of(&output).contains("already exists"));
}

#[test]
fn malformed_line_fails() {
    let (_dir, path) = write_input("1 = 2\n2 - 3\n");
    let output = cargo_bin_cmd!("cactus")
        .arg(&path)
        .assert()
        .code(1)
        .get_output()
        .clone();

    assert!(stderr_of(&output).contains("line 2"));
}

#[test]
fn missing_start_vertex_fails() {
    let (_dir, path) = write_input("1 = 2\n");
    cargo_bin_cmd!("cactus")
        .args(["--start", "9"])
        .arg(&path)
        .assert()
        .code(1);
}

#[test]
fn missing_file_is_io_error() {
    let dir = tempfile::tempdir().expect("tempdir");
    cargo_bin_cmd!("cactus")
        .arg(dir.path().join("does-not-exist.txt"))
        .assert()
        .code(2);
}

#[test]
fn missing_argument_is_usage_error() {
    cargo_bin_cmd!("cactus").assert().code(2);
}

#[test]
fn writes_dot_file() {
    let (dir, path) = write_input("1 = 2 3\n2 = 3 4\n3 = 4\n");
    let dot = dir.path().join("blocks.dot");
    cargo_bin_cmd!("cactus")
        .arg("--dot")
        .arg(&dot)
        .arg(&path)
        .assert()
        .success();

    let contents = fs::read_to_string(&dot).expect("dot file");
    assert!(contents.starts_with("graph {\n"));
    assert!(contents.contains("subgraph cluster_1"));
    assert!(contents.contains("v2[style=filled, color=red];v3[style=filled, color=red];"));
}

#[test]
fn invalid_utf8_is_malformed_input() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("graph.txt");
    fs::write(&path, b"1 = 2\n\xff\xfe = 1\n").expect("write input");

    let output = cargo_bin_cmd!("cactus")
        .arg(&path)
        .assert()
        .code(1)
        .get_output()
        .clone();

    assert!(stderr_of(&output).contains("line 2"));
}
