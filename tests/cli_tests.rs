use std::fs;
use std::path::Path;
use std::process::{Command, Output};

fn run_cli(args: &[&str]) -> Output {
    Command::new("cargo")
        .args(["run", "--quiet", "--bin", "yaml2props", "--"])
        .args(args)
        .current_dir(env!("CARGO_MANIFEST_DIR"))
        .output()
        .expect("Failed to execute yaml2props")
}

fn write_input(dir: &Path, name: &str, yaml: &str) -> String {
    let path = dir.join(name);
    fs::write(&path, yaml).unwrap();
    path.to_str().unwrap().to_string()
}

#[test]
fn test_converts_file_to_derived_path() {
    let temp_dir = tempfile::tempdir().unwrap();
    let input = write_input(
        temp_dir.path(),
        "config.yaml",
        "server:\n  host: localhost\n  port: 8080\ndebug: true\n",
    );

    let output = run_cli(&[&input]);
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(output.status.success(), "conversion failed: {}", stderr);
    assert!(stderr.contains("Properties file generated"));

    let properties_path = temp_dir.path().join("config.properties");
    assert!(properties_path.exists(), "Output file was not created");
    assert_eq!(
        fs::read_to_string(properties_path).unwrap(),
        "server.host=localhost\nserver.port=8080\ndebug=true\n"
    );
}

#[test]
fn test_no_arguments_fails_with_usage() {
    let output = run_cli(&[]);
    assert!(!output.status.success());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Usage"), "expected usage message: {}", stderr);
}

#[test]
fn test_extra_arguments_fail_and_write_nothing() {
    let temp_dir = tempfile::tempdir().unwrap();
    let first = write_input(temp_dir.path(), "one.yaml", "a: 1\n");
    let second = write_input(temp_dir.path(), "two.yaml", "b: 2\n");

    let output = run_cli(&[&first, &second]);
    assert!(!output.status.success());
    assert!(!temp_dir.path().join("one.properties").exists());
    assert!(!temp_dir.path().join("two.properties").exists());
}

#[test]
fn test_missing_input_fails() {
    let temp_dir = tempfile::tempdir().unwrap();
    let absent = temp_dir.path().join("absent.yaml");

    let output = run_cli(&[absent.to_str().unwrap()]);
    assert!(!output.status.success());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("failed to read"), "stderr was: {}", stderr);
    assert!(!temp_dir.path().join("absent.properties").exists());
}

#[test]
fn test_non_mapping_input_fails() {
    let temp_dir = tempfile::tempdir().unwrap();
    let input = write_input(temp_dir.path(), "list.yaml", "- a\n- b\n");

    let output = run_cli(&[&input]);
    assert!(!output.status.success());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("mapping"), "stderr was: {}", stderr);
}

#[test]
fn test_output_flag_overrides_derived_path() {
    let temp_dir = tempfile::tempdir().unwrap();
    let input = write_input(temp_dir.path(), "config.yaml", "key: value\n");
    let target = temp_dir.path().join("custom.props");

    let output = run_cli(&[&input, "-o", target.to_str().unwrap()]);
    assert!(
        output.status.success(),
        "conversion failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    assert!(!temp_dir.path().join("config.properties").exists());
    assert_eq!(fs::read_to_string(target).unwrap(), "key=value\n");
}

#[test]
fn test_sort_keys_flag() {
    let temp_dir = tempfile::tempdir().unwrap();
    let input = write_input(temp_dir.path(), "config.yaml", "zebra: 1\napple: 2\n");

    let output = run_cli(&[&input, "--sort-keys"]);
    assert!(output.status.success());
    assert_eq!(
        fs::read_to_string(temp_dir.path().join("config.properties")).unwrap(),
        "apple=2\nzebra=1\n"
    );
}

#[test]
fn test_separator_flag() {
    let temp_dir = tempfile::tempdir().unwrap();
    let input = write_input(temp_dir.path(), "config.yaml", "outer:\n  inner: 1\n");

    let output = run_cli(&[&input, "--separator", "_"]);
    assert!(output.status.success());
    assert_eq!(
        fs::read_to_string(temp_dir.path().join("config.properties")).unwrap(),
        "outer_inner=1\n"
    );
}

#[test]
fn test_empty_document_writes_empty_file() {
    let temp_dir = tempfile::tempdir().unwrap();
    let input = write_input(temp_dir.path(), "empty.yaml", "{}\n");

    let output = run_cli(&[&input]);
    assert!(output.status.success());
    assert_eq!(
        fs::read_to_string(temp_dir.path().join("empty.properties")).unwrap(),
        ""
    );
}
