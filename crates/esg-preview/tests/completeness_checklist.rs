use esg_preview::preview::{
    estimate_completeness, BatchPreviewImporter, KeyMetric, PreviewEngine, RiskLevel,
    SupplierMetrics,
};
use serde_json::json;

fn metrics(value: serde_json::Value) -> SupplierMetrics {
    serde_json::from_value(value).expect("metrics deserialize")
}

fn fully_disclosed() -> serde_json::Value {
    json!({
        "revenue": 1000,
        "total_emissions": 50,
        "renewable_energy_percent": 40,
        "water_usage": 10,
        "waste_generated": 5,
        "injury_rate": 1.2,
        "training_hours": 20,
        "living_wage_ratio": 1.1,
        "gender_diversity_percent": 45,
        "board_diversity": 0.4,
        "board_independence": 60,
        "transparency_score": 0.7,
        "anti_corruption_policy": true
    })
}

#[test]
fn full_disclosure_passes_every_check() {
    let result = estimate_completeness(&metrics(fully_disclosed()));

    assert_eq!(result.present, 12);
    assert_eq!(result.total, 12);
    assert_eq!(result.ratio, 1.0);
    assert!(result.missing.is_empty());
    assert!(result.cap_warning().is_none());
}

#[test]
fn textual_policy_flag_is_not_a_disclosure() {
    let mut record = fully_disclosed();
    record["anti_corruption_policy"] = json!("true");

    let result = estimate_completeness(&metrics(record));

    assert_eq!(result.present, 11);
    assert_eq!(result.missing, vec![KeyMetric::AntiCorruptionPolicy]);
    assert!((result.ratio - 11.0 / 12.0).abs() < 1e-12);
}

#[test]
fn empty_record_discloses_nothing_and_warns() {
    let result = estimate_completeness(&SupplierMetrics::default());

    assert_eq!(result.present, 0);
    assert_eq!(result.total, 12);
    assert_eq!(result.ratio, 0.0);
    assert_eq!(result.missing.len(), 12);
    let warning = result.cap_warning().expect("warning below threshold");
    assert!(warning.contains("scores may be capped at 50 if below 70%"));
}

#[test]
fn zero_values_count_as_disclosed() {
    let result = estimate_completeness(&metrics(json!({
        "revenue": 10,
        "co2_emissions": 0,
        "injury_rate": 0,
        "board_independence": 0,
        "anti_corruption_policy": false
    })));

    assert_eq!(result.present, 4);
    assert!(!result.missing.contains(&KeyMetric::EmissionIntensity));
}

#[test]
fn intensity_checks_need_positive_revenue() {
    let mut record = fully_disclosed();
    record["revenue"] = json!(0);

    let result = estimate_completeness(&metrics(record));

    assert_eq!(result.present, 9);
    for check in [
        KeyMetric::EmissionIntensity,
        KeyMetric::WaterIntensity,
        KeyMetric::WasteIntensity,
    ] {
        assert!(result.missing.contains(&check));
    }
}

#[test]
fn engine_preview_attaches_cap_warning_only_below_threshold() {
    let engine = PreviewEngine::new();

    let sparse = engine.preview(&SupplierMetrics::neutral());
    assert!(sparse.completeness.below_cap_threshold());
    assert!(sparse.cap_warning.is_some());

    let disclosed = engine.preview(&metrics(fully_disclosed()));
    assert!(disclosed.cap_warning.is_none());
}

#[test]
fn batch_import_reads_a_csv_file() {
    let path = std::env::temp_dir().join(format!(
        "esg-preview-batch-{}.csv",
        std::process::id()
    ));
    std::fs::write(
        &path,
        "supplier_name,energy_efficiency,waste_management_score,pollution_control,renewable_energy_percent,revenue,total_emissions\n\
         Fjord Paper,0.9,0.9,0.9,90,500,12\n\
         Delta Plastics,0.1,0.1,0.1,5,,\n",
    )
    .expect("write fixture");

    let report = BatchPreviewImporter::default()
        .import_path(&path)
        .expect("batch imports");
    std::fs::remove_file(&path).ok();

    assert_eq!(report.summary.rows, 2);
    assert_eq!(report.rows[0].name.as_deref(), Some("Fjord Paper"));
    assert_eq!(report.rows[0].preview.environmental, 0.9);
    assert_eq!(report.rows[1].preview.risk_level, RiskLevel::Critical);
    assert_eq!(report.summary.below_completeness_threshold, 2);
    assert!(report.summary.mean_overall > 0.0);
}

#[test]
fn batch_import_reports_missing_files() {
    let missing = std::env::temp_dir().join("esg-preview-does-not-exist.csv");
    assert!(BatchPreviewImporter::default().import_path(missing).is_err());
}
