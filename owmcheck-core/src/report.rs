use chrono::{DateTime, Utc};
use std::{fmt, time::Duration};

use crate::error::CheckError;

/// Pass/fail signal for one scenario. A failure carries the message of the
/// first violated condition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    Passed,
    Failed(String),
}

#[derive(Debug, Clone)]
pub struct Outcome {
    pub scenario: &'static str,
    pub verdict: Verdict,
    pub elapsed: Duration,
}

impl Outcome {
    pub fn new(scenario: &'static str, result: Result<(), CheckError>, elapsed: Duration) -> Self {
        let verdict = match result {
            Ok(()) => Verdict::Passed,
            Err(err) => Verdict::Failed(err.to_string()),
        };

        Self {
            scenario,
            verdict,
            elapsed,
        }
    }

    pub fn passed(&self) -> bool {
        self.verdict == Verdict::Passed
    }
}

/// Outcomes of a full conformance run, in execution order.
#[derive(Debug, Clone)]
pub struct Report {
    pub started_at: DateTime<Utc>,
    pub outcomes: Vec<Outcome>,
}

impl Report {
    pub fn passed_count(&self) -> usize {
        self.outcomes.iter().filter(|o| o.passed()).count()
    }

    pub fn failed_count(&self) -> usize {
        self.outcomes.len() - self.passed_count()
    }

    pub fn all_passed(&self) -> bool {
        self.failed_count() == 0
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "conformance run started {}",
            self.started_at.format("%Y-%m-%d %H:%M:%S UTC")
        )?;

        for outcome in &self.outcomes {
            match &outcome.verdict {
                Verdict::Passed => writeln!(
                    f,
                    "PASS {} ({:.2}s)",
                    outcome.scenario,
                    outcome.elapsed.as_secs_f64()
                )?,
                Verdict::Failed(msg) => writeln!(
                    f,
                    "FAIL {} ({:.2}s): {msg}",
                    outcome.scenario,
                    outcome.elapsed.as_secs_f64()
                )?,
            }
        }

        writeln!(
            f,
            "{} passed, {} failed",
            self.passed_count(),
            self.failed_count()
        )
    }
}
