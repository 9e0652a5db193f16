use super::factors::ContributingFactor;
use super::scorer::{PillarScores, RiskLevel};
use super::weights::Pillar;

/// Shown while the form still holds its neutral defaults.
pub const NEUTRAL_EXPLANATION: &str =
    "Adjust the supplier metrics to preview how the ESG score and risk level respond.";

const NEUTRAL_OVERALL: f64 = 0.50;

/// Whole percentage, rounded half-up like the scores themselves.
fn percent(value: f64) -> String {
    format!("{:.0}%", (value * 100.0 + 0.5).floor())
}

fn describe(factors: &[ContributingFactor]) -> String {
    factors
        .iter()
        .map(|factor| format!("{} ({})", factor.label, percent(factor.value)))
        .collect::<Vec<_>>()
        .join(", ")
}

/// The pillar holding a strict maximum, if any.
pub(crate) fn leading_pillar(scores: &PillarScores) -> Option<Pillar> {
    let [first, second, third] = Pillar::ordered();
    for (candidate, others) in [
        (first, [second, third]),
        (second, [first, third]),
        (third, [first, second]),
    ] {
        let value = scores.get(candidate);
        if others.iter().all(|other| value > scores.get(*other)) {
            return Some(candidate);
        }
    }
    None
}

pub(crate) fn explain(
    scores: &PillarScores,
    risk_level: RiskLevel,
    positive: &[ContributingFactor],
    negative: &[ContributingFactor],
) -> String {
    if scores.overall == NEUTRAL_OVERALL {
        return NEUTRAL_EXPLANATION.to_string();
    }

    let mut sentences = vec![format!(
        "Overall ESG score is {} ({} risk).",
        percent(scores.overall),
        risk_level.label().to_lowercase()
    )];

    if !positive.is_empty() {
        sentences.push(format!("Key strengths: {}.", describe(positive)));
    }

    if !negative.is_empty() {
        sentences.push(format!("Areas for improvement: {}.", describe(negative)));
    }

    if let Some(pillar) = leading_pillar(scores) {
        sentences.push(format!(
            "{} performance is the strongest pillar.",
            pillar.label()
        ));
    }

    sentences.join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::preview::weights::MetricKey;

    fn factor(metric: MetricKey, pillar: Pillar, value: f64) -> ContributingFactor {
        ContributingFactor {
            metric,
            label: metric.label().to_string(),
            pillar,
            value,
            effective_weight: 0.1,
            impact: value * 0.1,
            is_positive: value > 0.6,
            is_risk: metric.is_risk(),
        }
    }

    fn scores(environmental: f64, social: f64, governance: f64, overall: f64) -> PillarScores {
        PillarScores {
            environmental,
            social,
            governance,
            overall,
        }
    }

    #[test]
    fn neutral_overall_uses_placeholder() {
        let text = explain(&scores(0.5, 0.5, 0.5, 0.5), RiskLevel::Medium, &[], &[]);
        assert_eq!(text, NEUTRAL_EXPLANATION);
    }

    #[test]
    fn ties_make_no_pillar_claim() {
        assert_eq!(leading_pillar(&scores(0.7, 0.7, 0.4, 0.6)), None);
        assert_eq!(
            leading_pillar(&scores(0.3, 0.7, 0.4, 0.47)),
            Some(Pillar::Social)
        );
    }

    #[test]
    fn reports_percentage_and_lowercase_tier() {
        let text = explain(&scores(0.2, 0.3, 0.9, 0.47), RiskLevel::High, &[], &[]);
        assert!(text.starts_with("Overall ESG score is 47% (high risk)."));
        assert!(text.ends_with("Governance performance is the strongest pillar."));
        assert!(!text.contains("Key strengths"));
    }

    #[test]
    fn names_contributors_with_half_up_percentages() {
        let positive = [
            factor(MetricKey::HumanRightsIndex, Pillar::Social, 0.925),
            factor(MetricKey::EthicsProgram, Pillar::Governance, 0.875),
        ];
        let negative = [factor(MetricKey::WorkerSafety, Pillar::Social, 0.125)];

        let text = explain(
            &scores(0.6, 0.6, 0.6, 0.6),
            RiskLevel::Medium,
            &positive,
            &negative,
        );

        assert_eq!(
            text,
            "Overall ESG score is 60% (medium risk). \
             Key strengths: Human Rights (93%), Ethics Program (88%). \
             Areas for improvement: Worker Safety (13%)."
        );
    }
}
