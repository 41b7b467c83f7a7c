use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::fs;
use tempfile::tempdir;

#[test]
fn convert_csv_to_json() {
    let dir = tempdir().unwrap();
    let input_path = dir.path().join("data.csv");
    fs::write(&input_path, "Month,Sales\nJan,100\nFeb,120\n").unwrap();

    let mut cmd = cargo_bin_cmd!("chart");
    cmd.arg("convert")
        .arg(input_path.as_os_str())
        .arg("--to")
        .arg("json");

    let output = cmd.assert().success().get_output().stdout.clone();
    let stdout = String::from_utf8(output).unwrap();
    let value: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(value["labels"][0], "Jan");
    assert_eq!(value["datasets"][0]["data"][1], 120.0);
}

#[test]
fn implicit_convert_subcommand() {
    let dir = tempdir().unwrap();
    let input_path = dir.path().join("data.csv");
    fs::write(&input_path, "X,A\na,1\n").unwrap();

    let mut cmd = cargo_bin_cmd!("chart");
    cmd.arg(input_path.as_os_str()).arg("--to").arg("markdown");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("| a | 1 |"));
}

#[test]
fn missing_to_uses_configured_default() {
    let dir = tempdir().unwrap();
    let input_path = dir.path().join("data.json");
    fs::write(
        &input_path,
        r#"{"labels":["a"],"datasets":[{"label":"S","data":[1]}]}"#,
    )
    .unwrap();

    let config_path = dir.path().join("chart.toml");
    fs::write(
        &config_path,
        r#"[export]
default_format = "tsv"
"#,
    )
    .unwrap();

    let mut cmd = cargo_bin_cmd!("chart");
    cmd.arg("convert")
        .arg(input_path.as_os_str())
        .arg("--config")
        .arg(config_path.as_os_str());

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Category\tS"));
}

#[test]
fn extension_less_input_is_sniffed() {
    let dir = tempdir().unwrap();
    let input_path = dir.path().join("pasted");
    fs::write(&input_path, "X\tA\na\t7\n").unwrap();

    let mut cmd = cargo_bin_cmd!("chart");
    cmd.arg("convert")
        .arg(input_path.as_os_str())
        .arg("--to")
        .arg("csv");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("a,7"));
}

#[test]
fn convert_writes_output_file() {
    let dir = tempdir().unwrap();
    let input_path = dir.path().join("data.csv");
    let output_path = dir.path().join("out.md");
    fs::write(&input_path, "X,A\na,1\n").unwrap();

    let mut cmd = cargo_bin_cmd!("chart");
    cmd.arg(input_path.as_os_str())
        .arg("--to")
        .arg("markdown")
        .arg("-o")
        .arg(output_path.as_os_str());

    cmd.assert().success();
    let written = fs::read_to_string(&output_path).unwrap();
    assert!(written.contains("| --- |"));
}

#[test]
fn hierarchy_to_csv_fails_cleanly() {
    let dir = tempdir().unwrap();
    let input_path = dir.path().join("tree.json");
    fs::write(
        &input_path,
        r#"{"name":"root","value":1,"children":[{"name":"leaf","value":1,"children":[]}]}"#,
    )
    .unwrap();

    let mut cmd = cargo_bin_cmd!("chart");
    cmd.arg("convert")
        .arg(input_path.as_os_str())
        .arg("--to")
        .arg("csv");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Serialization error"));
}

#[test]
fn detect_reports_format() {
    let dir = tempdir().unwrap();
    let input_path = dir.path().join("mystery");
    fs::write(
        &input_path,
        "| a | b |\n| --- | --- |\n| x | 1 |\n",
    )
    .unwrap();

    let mut cmd = cargo_bin_cmd!("chart");
    cmd.arg("detect").arg(input_path.as_os_str());

    cmd.assert()
        .success()
        .stdout(predicate::str::diff("markdown\n"));
}

#[test]
fn detect_honors_file_extension() {
    let dir = tempdir().unwrap();
    let input_path = dir.path().join("data.tsv");
    // comma-heavy content would sniff as CSV; the extension wins
    fs::write(&input_path, "a,b,c\n1,2,3\n").unwrap();

    let mut cmd = cargo_bin_cmd!("chart");
    cmd.arg("detect").arg(input_path.as_os_str());

    cmd.assert()
        .success()
        .stdout(predicate::str::diff("tsv\n"));
}

#[test]
fn sample_defaults_to_json() {
    let mut cmd = cargo_bin_cmd!("chart");
    cmd.arg("sample").arg("flow");

    let output = cmd.assert().success().get_output().stdout.clone();
    let value: serde_json::Value = serde_json::from_str(&String::from_utf8(output).unwrap()).unwrap();
    assert!(value["nodes"].is_array());
    assert!(value["links"].is_array());
}

#[test]
fn list_formats() {
    let mut cmd = cargo_bin_cmd!("chart");
    cmd.arg("--list-formats");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("csv"))
        .stdout(predicate::str::contains("markdown"));
}

#[test]
fn missing_input_errors() {
    let mut cmd = cargo_bin_cmd!("chart");
    cmd.arg("convert").arg("/nonexistent/data.csv");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Error reading file"));
}
