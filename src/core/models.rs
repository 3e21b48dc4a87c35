// src/core/models.rs

use serde::{Deserialize, Serialize};
use strum::Display;

// --- Modelli Rilevatore Molestie ---
// Harassment Detector Models

/// The severity tier assigned to an analyzed message.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum RiskTier {
    Low,
    Medium,
    High,
}

/// The outcome of a single harassment analysis run.
///
/// A fresh value is built for every run and replaces the previous one wholesale.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AnalysisResult {
    pub risk: RiskTier,
    /// Cosmetic percentage in `70..=99`; it is not derived from the input.
    pub confidence: u8,
    pub threats: Vec<String>,
    pub recommendations: Vec<String>,
}

impl AnalysisResult {
    /// Extra guidance shown only for high-risk messages.
    pub fn advisory(&self) -> Option<&'static str> {
        match self.risk {
            RiskTier::High => Some(
                "This message contains potential threats. Consider immediate action and contact authorities if necessary.",
            ),
            _ => None,
        }
    }
}

// --- Modelli Scanner Privacy ---
// Privacy Scanner Models

/// Per-category finding of the privacy scanner.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ScanStatus {
    Safe,
    Warning,
    Danger,
}

/// One category of the privacy scan report.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ScanResult {
    pub platform: String,
    pub status: ScanStatus,
    pub issues: Vec<String>,
    pub recommendations: Vec<String>,
}

impl ScanResult {
    pub fn new(platform: &str, status: ScanStatus, issues: &[&str], recommendations: &[&str]) -> Self {
        Self {
            platform: platform.to_string(),
            status,
            issues: issues.iter().map(|s| s.to_string()).collect(),
            recommendations: recommendations.iter().map(|s| s.to_string()).collect(),
        }
    }
}

// --- Modelli Risorse ---
// Resource Directory Models

/// A crisis-support service listed in the resource directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmergencyContact {
    pub name: &'static str,
    pub description: &'static str,
    pub phone: Option<&'static str>,
    pub website: Option<&'static str>,
    pub available_24h: bool,
}

impl EmergencyContact {
    /// The `tel:` URI used to call this service, if it has a phone entry.
    pub fn dial_uri(&self) -> Option<String> {
        self.phone.map(|phone| format!("tel:{}", phone))
    }
}
