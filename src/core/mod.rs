// src/core/mod.rs

// The `core` module holds everything that is not terminal rendering: the data
// models, the mock analysis pipelines and the static tables they draw from.

/// Data structures shared across the application, such as `AnalysisResult`,
/// `ScanResult` and `EmergencyContact`.
pub mod models;

/// The `RiskClassifier` capability and its keyword-based implementation.
pub mod classifier;

/// Harassment analysis: artificial delay, classification, result assembly.
pub mod detector;

/// Generic runner for tasks that report progress checkpoints.
pub mod staged;

/// The staged mock privacy scanner.
pub mod scanner;

/// Static emergency contacts and safety tips.
pub mod resources;

/// Descriptive copy for each tool tab.
pub mod catalog;

/// Opens `tel:` and web links with the platform handler.
pub mod launcher;
