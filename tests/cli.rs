use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::io::Write;

#[test]
fn parse_prints_canonical_string_by_default() {
    let mut cmd = cargo_bin_cmd!("crs");
    cmd.arg("parse").arg("O[Si]A[Ac](O,L)");

    cmd.assert().success().stdout("A[Ac](L,O)O[Si]\n");
}

#[test]
fn parse_with_treeviz_format() {
    let mut cmd = cargo_bin_cmd!("crs");
    cmd.arg("parse").arg("A[Ac](O)").arg("--format").arg("treeviz");

    let output_pred = predicate::str::starts_with("⧉ A[Ac](O)\n")
        .and(predicate::str::contains("├─ A · atmosphere ⇄ O"))
        .and(predicate::str::contains("│ └─ Ac · atmospheric-chemistry"));
    cmd.assert().success().stdout(output_pred);
}

#[test]
fn parse_with_unknown_format_fails() {
    let mut cmd = cargo_bin_cmd!("crs");
    cmd.arg("parse").arg("A(O)").arg("-f").arg("xml");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Format 'xml' not found"));
}

#[test]
fn strict_parse_reports_positions() {
    let mut cmd = cargo_bin_cmd!("crs");
    cmd.arg("parse").arg("A(o)").arg("--strict");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Unexpected character 'o' at 0:2"));
}

#[test]
fn normalize_is_lenient() {
    let mut cmd = cargo_bin_cmd!("crs");
    cmd.arg("normalize").arg("L(A)A(O,x)");

    cmd.assert().success().stdout("A(L,O)\n");
}

#[test]
fn validate_accepts_well_formed_string() {
    let mut cmd = cargo_bin_cmd!("crs");
    cmd.arg("validate").arg("A[Ac[Ae]](L,O)O[Si]");

    cmd.assert().success().stdout("A[Ac[Ae]](L,O)O[Si]\n");
}

#[test]
fn validate_rejects_two_parents() {
    let mut cmd = cargo_bin_cmd!("crs");
    cmd.arg("validate").arg("A[C]B[C]");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Realm C is embedded in more than one realm"));
}

#[test]
fn generate_reads_graph_json_from_stdin() {
    let mut cmd = cargo_bin_cmd!("crs");
    cmd.arg("generate").arg("-").write_stdin(
        r#"{"edges": [["Si", "O"], ["Ac", "A"]], "pairs": [["O", "A"], ["L", "A"]]}"#,
    );

    cmd.assert().success().stdout("A[Ac](L,O)O[Si]\n");
}

#[test]
fn generate_rejects_bad_json() {
    let mut cmd = cargo_bin_cmd!("crs");
    cmd.arg("generate").arg("-").write_stdin(r#"{"edges": [["si", "O"]]}"#);

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("invalid graph JSON"));
}

#[test]
fn convert_model_description() {
    let mut model = tempfile::NamedTempFile::new().unwrap();
    write!(
        model,
        r#"{{
            "embedded_components": [["aerosol", "atmosphere"], ["sea-ice", "ocean"]],
            "coupling_groups": [["atmosphere", "land-surface", "ocean"]]
        }}"#
    )
    .unwrap();

    let mut cmd = cargo_bin_cmd!("crs");
    cmd.arg("convert").arg(model.path());

    cmd.assert().success().stdout("A[Ae](L,O)L(O)O[Si]\n");
}

#[test]
fn convert_uses_configured_vocabulary() {
    let mut config = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
    writeln!(config, "[vocabulary.realms]\nriver = \"Rr\"").unwrap();

    let mut cmd = cargo_bin_cmd!("crs");
    cmd.arg("--config")
        .arg(config.path())
        .arg("convert")
        .arg("-")
        .write_stdin(r#"{"coupling_groups": [["river", "ocean"]]}"#);

    cmd.assert().success().stdout("O(Rr)\n");
}

#[test]
fn config_file_sets_default_format() {
    let mut config = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
    writeln!(config, "[output]\nformat = \"json\"").unwrap();

    let mut cmd = cargo_bin_cmd!("crs");
    cmd.arg("parse").arg("A(O)").arg("--config").arg(config.path());

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("\"pairs\""));
}

#[test]
fn list_formats() {
    let mut cmd = cargo_bin_cmd!("crs");
    cmd.arg("list-formats");

    let output_pred = predicate::str::contains("crs")
        .and(predicate::str::contains("json"))
        .and(predicate::str::contains("treeviz"))
        .and(predicate::str::contains("yaml"));
    cmd.assert().success().stdout(output_pred);
}

#[test]
fn list_realms() {
    let mut cmd = cargo_bin_cmd!("crs");
    cmd.arg("list-realms");

    let output_pred = predicate::str::contains("Ob  ocean-biogeochemistry   #287271")
        .and(predicate::str::contains("A   atmosphere              #e76f51"));
    cmd.assert().success().stdout(output_pred);
}

#[test]
fn configured_realms_are_listed_and_named() {
    let mut config = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
    writeln!(config, "[vocabulary.realms]\nriver = \"Rr\"").unwrap();

    let mut cmd = cargo_bin_cmd!("crs");
    cmd.arg("--config").arg(config.path()).arg("list-realms");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Rr  river                   #94a3b8"));

    let mut cmd = cargo_bin_cmd!("crs");
    cmd.arg("--config")
        .arg(config.path())
        .arg("parse")
        .arg("O(Rr)")
        .arg("--format")
        .arg("treeviz");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("└─ Rr · river ⇄ O"));
}
