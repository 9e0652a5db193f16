use crate::infra::load_metrics;
use chrono::Utc;
use clap::Args;
use esg_preview::error::AppError;
use esg_preview::preview::{
    BatchPreviewImporter, BatchPreviewReport, ContributingFactor, MetricValue, PreviewEngine,
    SupplierMetrics, SupplierPreview,
};
use esg_preview::suppliers::{
    InMemorySupplierRepository, SupplierPreviewService, SupplierRecord, SupplierSubmission,
};
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Args, Debug, Default)]
pub(crate) struct ScoreArgs {
    /// JSON file holding supplier metrics. Defaults to the neutral form state.
    #[arg(long)]
    pub(crate) input: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub(crate) struct BatchArgs {
    /// CSV export whose headers are supplier metric names
    #[arg(long)]
    pub(crate) csv: PathBuf,
    /// Maximum number of rows to accept
    #[arg(long, default_value_t = esg_preview::preview::DEFAULT_ROW_LIMIT)]
    pub(crate) row_limit: usize,
}

pub(crate) fn run_score_preview(args: ScoreArgs) -> Result<(), AppError> {
    let metrics = load_metrics(args.input.as_deref())?;
    let preview = PreviewEngine::new().preview(&metrics);
    render_preview("Supplier preview", &preview);
    Ok(())
}

pub(crate) fn run_batch_preview(args: BatchArgs) -> Result<(), AppError> {
    let report = BatchPreviewImporter::new(args.row_limit).import_path(&args.csv)?;
    render_batch_report(&report);
    Ok(())
}

pub(crate) fn run_demo() -> Result<(), AppError> {
    let service = SupplierPreviewService::new(Arc::new(InMemorySupplierRepository::default()));

    println!(
        "ESG supplier preview demo ({})",
        Utc::now().format("%Y-%m-%d %H:%M UTC")
    );

    let neutral = PreviewEngine::new().preview(&SupplierMetrics::neutral());
    render_preview("Neutral form state", &neutral);

    for submission in demo_submissions() {
        let record = service.register(submission)?;
        render_record(&record);
    }

    let listing = service.list()?;
    println!("\nRegistered suppliers");
    for record in &listing {
        let view = record.summary_view();
        println!(
            "- {} {}: {:.0}% overall | {} risk | {:.0}% complete{}",
            view.id.0,
            view.name,
            view.overall * 100.0,
            view.risk_level.label(),
            view.completeness_ratio * 100.0,
            if view.may_be_capped {
                " | may be capped"
            } else {
                ""
            }
        );
    }

    Ok(())
}

fn number(value: f64) -> Option<MetricValue> {
    Some(MetricValue::Number(value))
}

fn demo_submissions() -> Vec<SupplierSubmission> {
    let disclosed = SupplierMetrics {
        energy_efficiency: number(0.82),
        waste_management_score: number(0.74),
        pollution_control: number(0.68),
        renewable_energy_percent: number(64.0),
        wage_fairness: number(0.77),
        human_rights_index: number(0.85),
        diversity_inclusion_score: number(0.58),
        community_engagement: number(0.61),
        worker_safety: number(0.9),
        injury_rate: number(0.8),
        training_hours: number(32.0),
        gender_diversity_percent: number(41.0),
        living_wage_ratio: number(1.15),
        transparency_score: number(0.79),
        corruption_risk: number(0.12),
        board_diversity: number(0.45),
        ethics_program: number(0.83),
        compliance_systems: number(0.76),
        board_independence: number(70.0),
        anti_corruption_policy: Some(MetricValue::Flag(true)),
        revenue: number(42_000_000.0),
        total_emissions: number(18_500.0),
        water_usage: number(120_000.0),
        waste_generated: number(950.0),
        ..SupplierMetrics::default()
    };

    let partial = SupplierMetrics {
        energy_efficiency: number(0.41),
        waste_management_score: number(0.35),
        pollution_control: number(0.52),
        renewable_energy_percent: number(12.0),
        wage_fairness: number(0.48),
        human_rights_index: number(0.55),
        worker_safety: number(0.38),
        transparency_score: number(0.3),
        corruption_risk: number(0.6),
        anti_corruption_policy: Some(MetricValue::Text("pending".to_string())),
        revenue: number(3_400_000.0),
        co2_emissions: number(7_200.0),
        ..SupplierMetrics::default()
    };

    vec![
        SupplierSubmission {
            name: "Northwind Components".to_string(),
            country: Some("DE".to_string()),
            industry: Some("Electronics".to_string()),
            metrics: disclosed,
        },
        SupplierSubmission {
            name: "Harbor Logistics".to_string(),
            country: Some("SG".to_string()),
            industry: Some("Freight".to_string()),
            metrics: partial,
        },
    ]
}

fn render_record(record: &SupplierRecord) {
    let title = match (&record.country, &record.industry) {
        (Some(country), Some(industry)) => {
            format!("{} ({}, {}) [{}]", record.name, industry, country, record.id.0)
        }
        _ => format!("{} [{}]", record.name, record.id.0),
    };
    render_preview(&title, &record.preview);
}

pub(crate) fn render_preview(title: &str, preview: &SupplierPreview) {
    let score = &preview.score;
    println!("\n{title}");
    println!(
        "- Environmental {:.2} | Social {:.2} | Governance {:.2}",
        score.environmental, score.social, score.governance
    );
    println!(
        "- Overall {:.2} ({} risk)",
        score.overall,
        score.risk_level.label()
    );
    render_factors("Top strengths", &score.top_positive);
    render_factors("Needs attention", &score.top_negative);
    println!("- {}", score.explanation_text);

    let completeness = &preview.completeness;
    println!(
        "- Data completeness {}/{} ({:.0}%)",
        completeness.present,
        completeness.total,
        completeness.ratio * 100.0
    );
    if !completeness.missing.is_empty() {
        let missing: Vec<&str> = completeness
            .missing
            .iter()
            .map(|metric| metric.label())
            .collect();
        println!("  missing: {}", missing.join(", "));
    }
    if let Some(warning) = &preview.cap_warning {
        println!("  note: {warning}");
    }
}

fn render_factors(heading: &str, factors: &[ContributingFactor]) {
    if factors.is_empty() {
        return;
    }
    println!("- {heading}:");
    for factor in factors {
        println!(
            "  - {} [{}] {:.0}% (impact {:.3})",
            factor.label,
            factor.pillar.label(),
            factor.value * 100.0,
            factor.impact
        );
    }
}

pub(crate) fn render_batch_report(report: &BatchPreviewReport) {
    println!("Batch preview ({} suppliers)", report.summary.rows);
    for row in &report.rows {
        let name = row.name.as_deref().unwrap_or("(unnamed)");
        println!(
            "- row {} {}: {:.2} overall | {} risk | {}/{} disclosed",
            row.row,
            name,
            row.preview.overall,
            row.preview.risk_level.label(),
            row.completeness.present,
            row.completeness.total
        );
    }

    let summary = &report.summary;
    println!(
        "Mean overall {:.2} | low {} | medium {} | high {} | critical {}",
        summary.mean_overall,
        summary.low_risk,
        summary.medium_risk,
        summary.high_risk,
        summary.critical_risk
    );
    if summary.below_completeness_threshold > 0 {
        println!(
            "{} suppliers are below the completeness threshold and may be score-capped",
            summary.below_completeness_threshold
        );
    }
}
