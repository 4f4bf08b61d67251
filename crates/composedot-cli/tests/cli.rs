use std::fs;
use std::process::{Command, Output};

use composedot::{ComposeDotOptions, run_main};
use composedot_error::ErrorKind;
use pretty_assertions::assert_eq;
use tempfile::tempdir;

fn fixture_source() -> &'static str {
    r#"
version: "3"
networks:
  backend:
services:
  web:
    ports: ["80:80"]
    networks: [backend]
    depends_on: [db]
  db:
"#
}

fn write_fixture(contents: &str) -> (tempfile::TempDir, String) {
    let dir = tempdir().expect("tempdir");
    let file_path = dir.path().join("docker-compose.yml");
    fs::write(&file_path, contents).expect("write fixture");
    (dir, file_path.display().to_string())
}

fn composedot(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_composedot"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("spawn composedot")
}

#[test]
fn run_main_renders_fixture() {
    let (_dir, file) = write_fixture(fixture_source());

    let output = run_main(&ComposeDotOptions::new(&file)).expect("render fixture");
    assert!(output.starts_with("digraph {\n"), "{output}");
    assert!(output.contains("  web -> backend [dir=\"none\"];\n"), "{output}");
    assert!(
        output.contains("  web -> db [style=\"dashed\", label=\"depends_on\"];\n"),
        "{output}"
    );
    assert!(output.ends_with("}\n"));
}

#[test]
fn run_main_uses_project_name() {
    let (_dir, file) = write_fixture(fixture_source());

    let output = run_main(&ComposeDotOptions::new(&file).with_project("shop-stack"))
        .expect("render fixture");
    assert!(output.starts_with("digraph shop_stack {\n"), "{output}");
}

#[test]
fn run_main_missing_file() {
    let dir = tempdir().expect("tempdir");
    let missing = dir.path().join("nope.yml");

    let err = run_main(&ComposeDotOptions::new(missing)).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::FileNotFound);
}

#[test]
fn run_main_invalid_yaml() {
    let (_dir, file) = write_fixture("services:\n  web: [\n");

    let err = run_main(&ComposeDotOptions::new(&file)).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::ParseFailed);
}

#[test]
fn binary_writes_graph_to_stdout() {
    let (_dir, file) = write_fixture(fixture_source());

    let out = composedot(&[&file]);
    assert!(out.status.success(), "{out:?}");
    let stdout = String::from_utf8(out.stdout).expect("utf8 stdout");
    let expected = run_main(&ComposeDotOptions::new(&file)).expect("render fixture");
    assert_eq!(stdout, expected);
}

#[test]
fn binary_without_arguments_is_usage_error() {
    let out = composedot(&[]);
    assert_eq!(out.status.code(), Some(2));
    assert!(out.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("Usage"), "{stderr}");
}

#[test]
fn binary_with_extra_arguments_is_usage_error() {
    let out = composedot(&["a.yml", "b.yml"]);
    assert_eq!(out.status.code(), Some(2));
    assert!(out.stdout.is_empty());
}

#[test]
fn binary_missing_file_is_io_error() {
    let dir = tempdir().expect("tempdir");
    let missing = dir.path().join("nope.yml");

    let out = composedot(&[&missing.display().to_string()]);
    assert_eq!(out.status.code(), Some(1));
    assert!(out.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("FileNotFound"), "{stderr}");
}

#[test]
fn binary_invalid_yaml_is_parse_error() {
    let (_dir, file) = write_fixture("services: [\n");

    let out = composedot(&[&file]);
    assert_eq!(out.status.code(), Some(1));
    assert!(out.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("ParseFailed"), "{stderr}");
}

#[test]
fn binary_help_succeeds() {
    let out = composedot(&["--help"]);
    assert!(out.status.success());
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains("FILE"), "{stdout}");
}
