// src/core/staged.rs

//! A small utility for tasks that report discrete progress checkpoints
//! before producing their final value.

use std::time::Duration;
use tracing::debug;

/// One checkpoint of a staged task.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stage {
    /// Progress reported once this stage completes, in percent.
    pub progress: u8,
    pub label: &'static str,
}

/// Progress notification emitted after each stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StageUpdate {
    /// Zero-based position of the completed stage.
    pub index: usize,
    pub total: usize,
    pub progress: u8,
    pub label: &'static str,
}

/// An ordered list of stages followed by a single result producer.
///
/// Timing policy (`step_delay`) lives here, so callers only wire up the
/// progress callback.
pub struct StagedTask<T> {
    stages: &'static [Stage],
    step_delay: Duration,
    finish: Box<dyn FnOnce() -> T + Send>,
}

impl<T> StagedTask<T> {
    pub fn new<F>(stages: &'static [Stage], step_delay: Duration, finish: F) -> Self
    where
        F: FnOnce() -> T + Send + 'static,
    {
        Self {
            stages,
            step_delay,
            finish: Box::new(finish),
        }
    }

    /// Runs every stage in order, sleeping `step_delay` before each one and
    /// invoking `on_progress` after it, then returns the produced value.
    ///
    /// The task cannot be cancelled once started short of dropping the future.
    pub async fn run<P>(self, mut on_progress: P) -> T
    where
        P: FnMut(StageUpdate),
    {
        let total = self.stages.len();
        for (index, stage) in self.stages.iter().enumerate() {
            tokio::time::sleep(self.step_delay).await;
            debug!(index, progress = stage.progress, label = stage.label, "Stage completed.");
            on_progress(StageUpdate {
                index,
                total,
                progress: stage.progress,
                label: stage.label,
            });
        }
        (self.finish)()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    static STAGES: &[Stage] = &[
        Stage { progress: 50, label: "first" },
        Stage { progress: 100, label: "second" },
    ];

    #[tokio::test(start_paused = true)]
    async fn reports_every_stage_then_returns_the_value() {
        let task = StagedTask::new(STAGES, Duration::from_millis(100), || "done");
        let mut seen = Vec::new();
        let start = tokio::time::Instant::now();

        let value = task.run(|update| seen.push(update)).await;

        assert_eq!(value, "done");
        assert_eq!(seen.len(), 2);
        assert_eq!(seen[0], StageUpdate { index: 0, total: 2, progress: 50, label: "first" });
        assert_eq!(seen[1].progress, 100);
        assert!(start.elapsed() >= Duration::from_millis(200));
    }

    #[tokio::test(start_paused = true)]
    async fn empty_stage_list_finishes_immediately() {
        let task = StagedTask::new(&[], Duration::from_secs(10), || 3);
        let mut calls = 0;
        let start = tokio::time::Instant::now();

        assert_eq!(task.run(|_| calls += 1).await, 3);
        assert_eq!(calls, 0);
        assert_eq!(start.elapsed(), Duration::ZERO);
    }
}
