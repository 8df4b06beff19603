//! Run reports printed by the stress and backpressure commands
//!
//! Reports serialize to JSON with `--json`; otherwise they print as one
//! colored summary line.

use colored::*;
use serde::Serialize;
use std::fmt;

fn verdict(passed: bool) -> ColoredString {
    if passed {
        "PASS".green().bold()
    } else {
        "FAIL".red().bold()
    }
}

/// Outcome of pushing from many threads, then popping from many threads
#[derive(Debug, Clone, Serialize)]
pub struct StressReport {
    pub container: String,
    pub threads: usize,
    pub items_per_thread: usize,
    pub pushed: usize,
    pub popped: usize,
    pub duplicates: usize,
    pub missing: usize,
    pub final_size: usize,
    pub push_ms: u64,
    pub pop_ms: u64,
    pub cancelled: bool,
    pub passed: bool,
    pub finished_at: String,
}

impl StressReport {
    /// Every pushed value came out exactly once and the container ended empty
    pub fn verify(&mut self) -> bool {
        self.passed = !self.cancelled
            && self.duplicates == 0
            && self.missing == 0
            && self.final_size == 0
            && self.popped == self.pushed;
        self.passed
    }
}

impl fmt::Display for StressReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {:<6} {} threads: pushed {} in {} ms, popped {} in {} ms",
            verdict(self.passed),
            self.container.bold(),
            self.threads,
            self.pushed,
            self.push_ms,
            self.popped,
            self.pop_ms
        )?;
        if self.duplicates > 0 || self.missing > 0 || self.final_size > 0 {
            write!(
                f,
                " ({} duplicates, {} missing, {} left behind)",
                self.duplicates, self.missing, self.final_size
            )?;
        }
        if self.cancelled {
            write!(f, " {}", "[cancelled]".yellow())?;
        }
        Ok(())
    }
}

/// Outcome of one producer and one consumer over a bounded blocking queue
#[derive(Debug, Clone, Serialize)]
pub struct BackpressureReport {
    pub capacity: usize,
    pub items: usize,
    pub produced: usize,
    pub consumed: usize,
    pub abandoned: usize,
    pub max_observed: usize,
    pub elapsed_ms: u64,
    pub cancelled: bool,
    pub passed: bool,
    pub finished_at: String,
}

impl BackpressureReport {
    /// The queue never held more than its capacity and nothing was lost
    pub fn verify(&mut self) -> bool {
        self.passed = self.max_observed <= self.capacity && self.consumed == self.produced;
        self.passed
    }
}

impl fmt::Display for BackpressureReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} capacity {}: produced {}/{}, consumed {}, max observed size {} in {} ms",
            verdict(self.passed),
            self.capacity,
            self.produced,
            self.items,
            self.consumed,
            self.max_observed,
            self.elapsed_ms
        )?;
        if self.abandoned > 0 {
            write!(f, " ({} pushes timed out)", self.abandoned)?;
        }
        if self.cancelled {
            write!(f, " {}", "[cancelled]".yellow())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stress_report() -> StressReport {
        StressReport {
            container: "queue".to_string(),
            threads: 2,
            items_per_thread: 3,
            pushed: 6,
            popped: 6,
            duplicates: 0,
            missing: 0,
            final_size: 0,
            push_ms: 1,
            pop_ms: 1,
            cancelled: false,
            passed: false,
            finished_at: "2026-10-17T00:00:00+00:00".to_string(),
        }
    }

    #[test]
    fn test_stress_verification() {
        let mut report = stress_report();
        assert!(report.verify());

        report.missing = 1;
        assert!(!report.verify());
        assert!(!report.passed);
    }

    #[test]
    fn test_cancelled_run_never_passes() {
        let mut report = stress_report();
        report.cancelled = true;
        assert!(!report.verify());
    }

    #[test]
    fn test_json_field_names() {
        let mut report = stress_report();
        report.verify();

        let json: serde_json::Value =
            serde_json::to_value(&report).expect("report should serialize");
        assert_eq!(json["container"], "queue");
        assert_eq!(json["pushed"], 6);
        assert_eq!(json["passed"], true);
    }

    #[test]
    fn test_backpressure_verification() {
        let mut report = BackpressureReport {
            capacity: 4,
            items: 10,
            produced: 10,
            consumed: 10,
            abandoned: 0,
            max_observed: 4,
            elapsed_ms: 3,
            cancelled: false,
            passed: false,
            finished_at: String::new(),
        };
        assert!(report.verify());

        report.max_observed = 5;
        assert!(!report.verify());
    }
}
