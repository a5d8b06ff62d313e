use std::fs;
use std::path::PathBuf;

use assert_cmd::Command;
use predicates::prelude::*;
use predicates::str::contains;
use tempfile::TempDir;

const PAYLOAD: &str = r#"{
  "idea": "Subscription meal kits for busy nurses",
  "report": {
    "success_probability": 64,
    "best_location": "Austin, TX",
    "market_analysis": "- Market size: $4.2B in the US\n- Demand grows 12% year over year among shift workers",
    "target_audience": "- Nurses working rotating shifts in urban hospitals",
    "revenue_model": "- Weekly subscription revenue of $90k in year one",
    "competition_analysis": "- HelloFresh dominates general meal kits",
    "cost_structure": "- Staff salaries and kitchen rent dominate costs\n- Paid ads budget: $40k",
    "go_to_market": "- Partner with hospital HR teams\n- Launch referral program in month two"
  },
  "critique": "Churn risk is high because meal kits face a competitive market.",
  "evaluation_metrics": {"overall_confidence": 0.7, "total_tokens": 4200},
  "hallucination_report": {"risk_level": "low"},
  "similar_ideas": ["Meal prep for truckers"],
  "sources_used": ["USDA food spending survey"]
}"#;

fn cmd() -> Command {
    Command::cargo_bin("fdash").unwrap()
}

/// Temp dir holding a payload and an empty config file.
fn fixture() -> (TempDir, PathBuf, PathBuf) {
    let dir = TempDir::new().unwrap();
    let payload = dir.path().join("payload.json");
    let config = dir.path().join("config.json");
    fs::write(&payload, PAYLOAD).unwrap();
    fs::write(&config, "{}").unwrap();
    (dir, payload, config)
}

#[test]
fn help_lists_commands() {
    cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(contains("render"))
        .stdout(contains("analyze"))
        .stdout(contains("export"));
}

#[test]
fn render_text_dashboard() {
    let (_dir, payload, config) = fixture();
    cmd()
        .arg("--config")
        .arg(&config)
        .arg("render")
        .arg(&payload)
        .assert()
        .success()
        .stdout(contains("STARTUP FEASIBILITY DASHBOARD"))
        .stdout(contains("Subscription meal kits for busy nurses"))
        .stdout(contains("64.0%"))
        .stdout(contains("Austin, TX"))
        .stdout(contains("0-3 Months"));
}

#[test]
fn render_json_dashboard() {
    let (_dir, payload, config) = fixture();
    let output = cmd()
        .arg("--config")
        .arg(&config)
        .args(["render", "--format", "json"])
        .arg(&payload)
        .output()
        .unwrap();

    assert!(output.status.success());
    let dashboard: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(
        dashboard["header"]["title"],
        "Subscription meal kits for busy nurses"
    );
    assert_eq!(dashboard["kpis"].as_array().unwrap().len(), 4);
    assert_eq!(dashboard["kpis"][1]["value"], "LOW");
}

#[test]
fn render_csv_data_points() {
    let (_dir, payload, config) = fixture();
    cmd()
        .arg("--config")
        .arg(&config)
        .args(["render", "--format", "csv"])
        .arg(&payload)
        .assert()
        .success()
        .stdout(contains("panel,label,value"))
        .stdout(contains("Market size"));
}

#[test]
fn render_to_file() {
    let (dir, payload, config) = fixture();
    let out = dir.path().join("dashboard.json");
    cmd()
        .arg("--config")
        .arg(&config)
        .args(["render", "--format", "json", "--output"])
        .arg(&out)
        .arg(&payload)
        .assert()
        .success();

    let written = fs::read_to_string(&out).unwrap();
    assert!(written.contains("Austin, TX"));
}

#[test]
fn render_missing_file_fails() {
    let (dir, _payload, config) = fixture();
    cmd()
        .arg("--config")
        .arg(&config)
        .arg("render")
        .arg(dir.path().join("missing.json"))
        .assert()
        .failure()
        .stderr(contains("Input file not found"));
}

#[test]
fn render_reads_stdin() {
    let (_dir, _payload, config) = fixture();
    cmd()
        .arg("--config")
        .arg(&config)
        .args(["render", "-"])
        .write_stdin(r#"{"idea": "Drone delivery for islands"}"#)
        .assert()
        .success()
        .stdout(contains("Drone delivery for islands"))
        .stdout(contains("No explicit numeric or key-value data found"));
}

#[test]
fn export_writes_report() {
    let (dir, payload, _config) = fixture();
    let out = dir.path().join("report.txt");
    cmd()
        .arg("export")
        .arg(&payload)
        .arg("--output")
        .arg(&out)
        .assert()
        .success()
        .stdout(contains("Report downloaded"));

    let text = fs::read_to_string(&out).unwrap();
    assert!(text.starts_with("STARTUP FEASIBILITY REPORT"));
    assert!(text.contains("IDEA: Subscription meal kits for busy nurses"));
    assert!(text.contains("SUCCESS PROBABILITY: 64%"));
    assert!(text.contains("=== EXPERT CRITIQUE ==="));
}

#[test]
fn export_to_stdout() {
    let (_dir, payload, _config) = fixture();
    cmd()
        .args(["export", "--stdout"])
        .arg(&payload)
        .assert()
        .success()
        .stdout(contains("=== GO-TO-MARKET STRATEGY ==="));
}

#[test]
fn batch_writes_outputs_and_summary() {
    let (dir, _payload, config) = fixture();
    let out_dir = dir.path().join("out");
    let pattern = dir.path().join("payload*.json");
    cmd()
        .arg("--config")
        .arg(&config)
        .arg("batch")
        .arg(pattern.to_str().unwrap())
        .arg("--output-dir")
        .arg(&out_dir)
        .arg("--summary")
        .assert()
        .success();

    assert!(out_dir.join("payload.json").exists());
    let summary = fs::read_to_string(out_dir.join("summary.csv")).unwrap();
    assert!(summary.starts_with("file,idea,success_probability"));
    assert!(summary.contains("payload.json"));
    assert!(summary.contains("success"));
}

#[test]
fn batch_without_matches_fails() {
    let (dir, _payload, config) = fixture();
    cmd()
        .arg("--config")
        .arg(&config)
        .arg("batch")
        .arg(dir.path().join("*.nothing").to_str().unwrap())
        .assert()
        .failure()
        .stderr(contains("No matching files"));
}

#[test]
fn config_init_get_and_set() {
    let dir = TempDir::new().unwrap();
    let config = dir.path().join("fdash").join("config.json");

    cmd()
        .arg("--config")
        .arg(&config)
        .args(["config", "init"])
        .assert()
        .success();
    assert!(config.exists());

    cmd()
        .arg("--config")
        .arg(&config)
        .args(["config", "get", "api.timeout_secs"])
        .assert()
        .success()
        .stdout(contains("180"));

    cmd()
        .arg("--config")
        .arg(&config)
        .args(["config", "set", "display.data_point_limit", "10"])
        .assert()
        .success();

    cmd()
        .arg("--config")
        .arg(&config)
        .args(["config", "get", "display.data_point_limit"])
        .assert()
        .success()
        .stdout(contains("10"));
}

#[test]
fn config_set_rejects_unknown_key() {
    let dir = TempDir::new().unwrap();
    let config = dir.path().join("config.json");

    cmd()
        .arg("--config")
        .arg(&config)
        .args(["config", "set", "api.retries", "3"])
        .assert()
        .failure()
        .stderr(contains("Configuration key not found"));
}

#[test]
fn config_path_reports_missing_file() {
    let dir = TempDir::new().unwrap();
    let config = dir.path().join("config.json");

    cmd()
        .arg("--config")
        .arg(&config)
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(contains("not created"))
        .stdout(predicate::str::contains("config.json"));
}
