// src/core/detector.rs

use std::time::Duration;

use rand::Rng;
use tracing::info;

use crate::core::classifier::{KeywordClassifier, RiskClassifier};
use crate::core::models::{AnalysisResult, RiskTier};

/// Confidence is purely cosmetic and re-rolled on every run.
const CONFIDENCE_RANGE: std::ops::RangeInclusive<u8> = 70..=99;

const HIGH_RISK_THREATS: &[&str] = &["Threatening language", "Intimidation tactics"];
const MEDIUM_RISK_THREATS: &[&str] = &["Verbal abuse", "Insulting language"];

const RECOMMENDATIONS: &[&str] = &[
    "Document this message with screenshots",
    "Block the sender if continuing",
    "Report to platform administrators",
    "Consider contacting authorities if threats escalate",
];

fn threats_for(tier: RiskTier) -> &'static [&'static str] {
    match tier {
        RiskTier::High => HIGH_RISK_THREATS,
        RiskTier::Medium => MEDIUM_RISK_THREATS,
        RiskTier::Low => &[],
    }
}

/// Builds an `AnalysisResult` for `text` using the given classifier and random source.
pub fn analyze_message<C, R>(text: &str, classifier: &C, rng: &mut R) -> AnalysisResult
where
    C: RiskClassifier + ?Sized,
    R: Rng,
{
    let risk = classifier.classify(text);
    AnalysisResult {
        risk,
        confidence: rng.random_range(CONFIDENCE_RANGE),
        threats: threats_for(risk).iter().map(|s| s.to_string()).collect(),
        recommendations: RECOMMENDATIONS.iter().map(|s| s.to_string()).collect(),
    }
}

/// Simulates a model round-trip: waits `delay`, then classifies `text`.
pub async fn run_analysis(text: &str, delay: Duration) -> AnalysisResult {
    info!(chars = text.chars().count(), "Starting harassment analysis.");
    tokio::time::sleep(delay).await;
    let result = analyze_message(text, &KeywordClassifier, &mut rand::rng());
    info!(risk = %result.risk, confidence = result.confidence, "Harassment analysis finished.");
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn analyze(text: &str) -> AnalysisResult {
        analyze_message(text, &KeywordClassifier, &mut StdRng::seed_from_u64(7))
    }

    #[test]
    fn insult_is_medium_with_verbal_abuse_labels() {
        let result = analyze("You are stupid");
        assert_eq!(result.risk, RiskTier::Medium);
        assert_eq!(result.threats, vec!["Verbal abuse", "Insulting language"]);
        assert!(result.advisory().is_none());
    }

    #[test]
    fn hurt_is_high_with_threat_labels() {
        let result = analyze("I will hurt you");
        assert_eq!(result.risk, RiskTier::High);
        assert_eq!(result.threats, vec!["Threatening language", "Intimidation tactics"]);
        assert!(result.advisory().is_some());
    }

    #[test]
    fn friendly_message_is_low_without_threats() {
        let result = analyze("Have a nice day");
        assert_eq!(result.risk, RiskTier::Low);
        assert!(result.threats.is_empty());
    }

    #[test]
    fn recommendations_do_not_depend_on_tier() {
        let low = analyze("hello");
        let high = analyze("a threat");
        assert_eq!(low.recommendations.len(), 4);
        assert_eq!(low.recommendations, high.recommendations);
    }

    #[test]
    fn confidence_stays_in_range() {
        let mut rng = StdRng::seed_from_u64(42);
        for i in 0..500 {
            let text = if i % 2 == 0 { "weird" } else { "fine" };
            let result = analyze_message(text, &KeywordClassifier, &mut rng);
            assert!((70..=99).contains(&result.confidence), "got {}", result.confidence);
        }
    }

    #[test]
    fn custom_classifiers_drive_the_threat_list() {
        struct AlwaysHigh;
        impl RiskClassifier for AlwaysHigh {
            fn classify(&self, _text: &str) -> RiskTier {
                RiskTier::High
            }
        }
        let result = analyze_message("kind words", &AlwaysHigh, &mut StdRng::seed_from_u64(1));
        assert_eq!(result.risk, RiskTier::High);
        assert_eq!(result.threats.len(), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn run_analysis_waits_for_the_delay() {
        let start = tokio::time::Instant::now();
        let result = run_analysis("threat", Duration::from_millis(2000)).await;
        assert!(start.elapsed() >= Duration::from_millis(2000));
        assert_eq!(result.risk, RiskTier::High);
    }
}
