use assert_cmd::Command;
use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;
use serde_json::Value;
use tempfile::TempDir;

fn cmd() -> Command {
    Command::new(assert_cmd::cargo::cargo_bin!("btconfig"))
}

fn repo_root() -> std::path::PathBuf {
    let manifest = std::path::Path::new(env!("CARGO_MANIFEST_DIR"));
    manifest
        .parent()
        .and_then(|p| p.parent())
        .expect("repo root")
        .to_path_buf()
}

fn fixture(name: &str) -> std::path::PathBuf {
    repo_root().join("tests").join("fixtures").join(name)
}

#[test]
fn help_supports_scan_and_inspect() {
    cmd().arg("scan").arg("--help").assert().success();
    cmd()
        .arg("inspect")
        .arg("--help")
        .assert()
        .success()
        .stdout(contains("--tag-attribute"));
}

#[test]
fn long_version_carries_build_metadata() {
    cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn missing_input_prints_error_and_hint() {
    let temp = TempDir::new().expect("tempdir");
    let missing = temp.path().join("missing.xml");

    cmd()
        .arg("scan")
        .arg(&missing)
        .assert()
        .code(2)
        .stderr(contains("error: input file not found").and(contains("hint:")));
}

#[test]
fn backup_database_is_scanned_regardless_of_extension() {
    let temp = TempDir::new().expect("tempdir");
    let input = temp.path().join("bt_config.old");
    std::fs::copy(fixture("bt_config.xml"), &input).expect("copy fixture");

    cmd()
        .arg("scan")
        .arg(&input)
        .assert()
        .success()
        .stdout(contains("Local adapter: 22:22:CC:31:2D:B5"));
}

#[test]
fn non_xml_content_fails_to_parse() {
    let temp = TempDir::new().expect("tempdir");
    let input = temp.path().join("bt_config.conf");
    std::fs::write(&input, "[Adapter]\n<N1></N2>\n").expect("write input");

    cmd()
        .arg("scan")
        .arg(&input)
        .assert()
        .code(2)
        .stderr(contains("error: failed to parse"));
}

#[test]
fn text_output_lists_records_and_summary() {
    cmd()
        .arg("scan")
        .arg(fixture("bt_config.xml"))
        .assert()
        .success()
        .stdout(
            contains("\tAdapter")
                .and(contains("Local adapter: 22:22:CC:31:2D:B5"))
                .and(contains("Audio Sink"))
                .and(contains("No address conflicts")),
        );
}

#[test]
fn json_stdout_is_valid_report() {
    let output = cmd()
        .arg("scan")
        .arg(fixture("bt_config.xml"))
        .arg("--json")
        .arg("--pretty")
        .output()
        .expect("run btconfig");
    assert!(output.status.success());

    let json: Value = serde_json::from_slice(&output.stdout).expect("valid json");
    assert_eq!(json["report_version"], 1);
    assert_eq!(json["tool"]["name"], "btconfig");
    assert_eq!(json["local_adapter"], "22:22:CC:31:2D:B5");
    assert_eq!(json["records"].as_array().map(Vec::len), Some(3));
    assert_eq!(json["conflicts"].as_array().map(Vec::len), Some(0));
}

#[test]
fn report_file_is_written() {
    let temp = TempDir::new().expect("tempdir");
    let report = temp.path().join("out").join("report.json");

    cmd()
        .arg("scan")
        .arg(fixture("conflict.xml"))
        .arg("-o")
        .arg(&report)
        .assert()
        .success()
        .stderr(contains("OK: report written"));

    let data = std::fs::read_to_string(&report).expect("read report");
    let json: Value = serde_json::from_str(&data).expect("valid json");
    assert_eq!(json["conflicts"][0], "AA:BB:CC:DD:EE:FF");
    assert_eq!(json["addresses"].as_array().map(Vec::len), Some(2));
}

#[test]
fn quiet_suppresses_report_notice() {
    let temp = TempDir::new().expect("tempdir");
    let report = temp.path().join("report.json");

    cmd()
        .arg("scan")
        .arg(fixture("bt_config.xml"))
        .arg("-o")
        .arg(&report)
        .arg("--quiet")
        .assert()
        .success()
        .stderr(contains("OK: report written").not());
    assert!(report.exists());
}

#[test]
fn report_path_must_differ_from_input() {
    let temp = TempDir::new().expect("tempdir");
    let input = temp.path().join("bt_config.xml");
    std::fs::copy(fixture("bt_config.xml"), &input).expect("copy fixture");

    cmd()
        .arg("scan")
        .arg(&input)
        .arg("-o")
        .arg(&input)
        .assert()
        .code(2)
        .stderr(contains("report path must differ from input"));
}

#[test]
fn strict_fails_on_conflicts() {
    cmd()
        .arg("scan")
        .arg(fixture("conflict.xml"))
        .assert()
        .success()
        .stdout(contains("Address conflicts (1):"));

    cmd()
        .arg("scan")
        .arg(fixture("conflict.xml"))
        .arg("--strict")
        .assert()
        .code(2)
        .stdout(contains("AA:BB:CC:DD:EE:FF"))
        .stderr(contains("error: address conflicts detected"));
}

#[test]
fn truncated_document_prints_partial_report_then_fails() {
    cmd()
        .arg("scan")
        .arg(fixture("truncated.xml"))
        .assert()
        .code(2)
        .stdout(contains("00:1A:7D:DA:71:13"))
        .stderr(contains("error: failed to parse").and(contains("hint:")));
}

#[test]
fn glob_input_resolves_single_match() {
    let temp = TempDir::new().expect("tempdir");
    std::fs::copy(fixture("conflict.xml"), temp.path().join("bt_config.xml"))
        .expect("copy fixture");
    let pattern = temp.path().join("bt_*.xml");

    cmd()
        .arg("scan")
        .arg(pattern)
        .assert()
        .success()
        .stdout(contains("Known addresses (2):"));
}

#[test]
fn glob_input_rejects_multiple_matches() {
    let temp = TempDir::new().expect("tempdir");
    std::fs::copy(fixture("conflict.xml"), temp.path().join("a.xml")).expect("copy fixture");
    std::fs::copy(fixture("conflict.xml"), temp.path().join("b.xml")).expect("copy fixture");
    let pattern = temp.path().join("*.xml");

    cmd()
        .arg("scan")
        .arg(pattern)
        .assert()
        .code(2)
        .stderr(contains("multiple files match pattern"));
}

#[test]
fn uuid_lookup_resolves_names() {
    cmd()
        .arg("uuid")
        .arg("110a")
        .arg("0x1812")
        .arg("ffff")
        .assert()
        .success()
        .stdout(
            contains("110a Audio Source")
                .and(contains("1812 Human Interface Device"))
                .and(contains("ffff Unknown")),
        );
}

#[test]
fn uuid_rejects_invalid_hex() {
    cmd()
        .arg("uuid")
        .arg("zz")
        .assert()
        .code(2)
        .stderr(contains("invalid UUID 'zz'"));
}
