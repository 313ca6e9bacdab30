use assert_cmd::Command;
use predicates::prelude::*;
use std::io::Write;
use tempfile::NamedTempFile;

const PANEL: &str = "2\nACGTACGGTTCA\n3\nA 2\nACGT\nAAAA\nB 1\nCGGTTC\nC 3\nACG\nTTT\nCAT\n";

fn panel_file(text: &str) -> NamedTempFile {
    let mut f = NamedTempFile::new().unwrap();
    f.write_all(text.as_bytes()).unwrap();
    f
}

fn gene_screen() -> Command {
    Command::cargo_bin("gene-screen").unwrap()
}

#[test]
fn run_writes_text_ranking_to_stdout() {
    let input = panel_file(PANEL);
    gene_screen()
        .arg("run")
        .arg(input.path())
        .assert()
        .success()
        .stdout("B->100%\nA->50%\nC->33%\n");
}

#[test]
fn run_min_match_override_changes_ranking() {
    let input = panel_file(PANEL);
    gene_screen()
        .arg("run")
        .arg(input.path())
        .args(["--min-match", "1"])
        .assert()
        .success()
        .stdout("A->100%\nB->100%\nC->100%\n");
}

#[test]
fn run_writes_output_file() {
    let input = panel_file(PANEL);
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("result.txt");
    gene_screen()
        .arg("run")
        .arg(input.path())
        .arg("-o")
        .arg(&out)
        .args(["-t", "2"])
        .assert()
        .success()
        .stdout("");
    assert_eq!(std::fs::read_to_string(out).unwrap(), "B->100%\nA->50%\nC->33%\n");
}

#[test]
fn run_json_format() {
    let input = panel_file(PANEL);
    let output = gene_screen()
        .arg("run")
        .arg(input.path())
        .args(["--format", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let v: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(v["min_match_len"], 2);
    assert_eq!(v["reference_len"], 12);
    assert_eq!(v["results"].as_array().unwrap().len(), 3);
    assert_eq!(v["results"][0]["name"], "B");
    assert_eq!(v["results"][2]["percent"], 33);
}

#[test]
fn run_empty_disease_policy_and_strict_mode() {
    let input = panel_file("1 ACGT 2 E 0 F 1 ACGT");
    gene_screen()
        .arg("run")
        .arg(input.path())
        .assert()
        .success()
        .stdout("F->100%\nE->0%\n");

    gene_screen()
        .arg("run")
        .arg(input.path())
        .arg("--strict")
        .assert()
        .failure()
        .stderr(predicate::str::contains("has no genes"));
}

#[test]
fn run_rejects_invalid_gene_symbol() {
    let input = panel_file("1 ACGT 1 D 1 ACGN");
    gene_screen()
        .arg("run")
        .arg(input.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid symbol 'N'"));
}

#[test]
fn run_rejects_truncated_panel() {
    let input = panel_file("1 ACGT 2 D 1 ACGT");
    gene_screen()
        .arg("run")
        .arg(input.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("expected disease name"));
}

#[test]
fn run_missing_input_file() {
    gene_screen()
        .args(["run", "/nonexistent/panel.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot open input"));
}

#[test]
fn stats_reports_automaton_size() {
    let input = panel_file("1 ACC 1 D 2 A C");
    gene_screen()
        .arg("stats")
        .arg(input.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("reference_len: 3"))
        .stdout(predicate::str::contains("states: 5"))
        .stdout(predicate::str::contains("genes: 2"));
}
