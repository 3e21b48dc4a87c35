// src/core/classifier.rs

use tracing::debug;
use crate::core::models::RiskTier;

/// Maps free-form text to a harassment risk tier.
///
/// Callers only depend on this trait, so the keyword matcher below can be
/// swapped for a real model without touching them.
pub trait RiskClassifier {
    fn classify(&self, text: &str) -> RiskTier;
}

/// Keywords that push a message into the high tier.
const HIGH_RISK_KEYWORDS: &[&str] = &["threat", "hurt"];
/// Keywords that push a message into the medium tier.
const MEDIUM_RISK_KEYWORDS: &[&str] = &["stupid", "weird"];

/// Case-insensitive substring classifier.
#[derive(Debug, Default, Clone, Copy)]
pub struct KeywordClassifier;

impl RiskClassifier for KeywordClassifier {
    fn classify(&self, text: &str) -> RiskTier {
        let lowered = text.to_lowercase();
        let contains_any = |keywords: &[&str]| keywords.iter().any(|k| lowered.contains(k));

        let tier = if contains_any(HIGH_RISK_KEYWORDS) {
            RiskTier::High
        } else if contains_any(MEDIUM_RISK_KEYWORDS) {
            RiskTier::Medium
        } else {
            RiskTier::Low
        };
        debug!(%tier, "Keyword classification done.");
        tier
    }
}
