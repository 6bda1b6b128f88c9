use crate::app::case::TestCase;
use crate::app::outcome::{TestOutcome, Verdict};
use crate::app::registry::SectionRegistry;
use crate::app::section::TestSection;
use serde_derive::Serialize;
use std::any::Any;
use std::panic::{self, AssertUnwindSafe};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::sleep;
use std::time::{Duration, Instant};

/// Outcomes accumulated across one or more section runs, with derived
/// counters. Never cleared implicitly between runs; clearing is an explicit
/// caller decision.
#[derive(Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RunResult {
    outcomes: Vec<TestOutcome>,
}

impl RunResult {
    pub fn outcomes(&self) -> &[TestOutcome] {
        &self.outcomes
    }

    pub fn total_count(&self) -> usize {
        self.outcomes.len()
    }

    pub fn passed_count(&self) -> usize {
        self.outcomes.iter().filter(|outcome| outcome.passed).count()
    }

    pub fn failed_count(&self) -> usize {
        self.total_count() - self.passed_count()
    }

    pub fn total_duration_ms(&self) -> f64 {
        self.outcomes.iter().map(|outcome| outcome.duration_ms).sum()
    }

    pub fn average_duration_ms(&self) -> f64 {
        match self.total_count() {
            0 => 0.0,
            count => self.total_duration_ms() / count as f64,
        }
    }

    /// `passed / total * 100`, answering 0 for an empty result set.
    pub fn success_rate(&self) -> f64 {
        success_rate(self.passed_count(), self.total_count())
    }

    pub fn has_failures(&self) -> bool {
        self.outcomes.iter().any(|outcome| !outcome.passed)
    }

    pub fn clear(&mut self) {
        self.outcomes.clear();
    }

    fn push(&mut self, outcome: TestOutcome) {
        self.outcomes.push(outcome);
    }
}

/// Executes sections pulled from a [`SectionRegistry`] and aggregates their
/// outcomes. Strictly sequential: one case runs to completion before the next
/// begins, which is the correct policy when the case bodies drive a shared
/// peripheral bus.
pub struct TestRunner {
    results: RunResult,
    pacing: Duration,
    cancelled: Arc<AtomicBool>,
}

impl Default for TestRunner {
    fn default() -> Self {
        Self::new()
    }
}

impl TestRunner {
    pub fn new() -> Self {
        Self::with_pacing(Duration::default())
    }

    /// `pacing` is slept between sections during a full run, mirroring the
    /// settle delays the hardware harnesses insert between peripheral blocks.
    pub fn with_pacing(pacing: Duration) -> Self {
        Self {
            results: RunResult::default(),
            pacing,
            cancelled: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Cooperative cancellation: the flag is checked between case invocations
    /// and between sections, never mid-case.
    pub fn cancel_flag(&self) -> Arc<AtomicBool> {
        Arc::clone(&self.cancelled)
    }

    pub fn results(&self) -> &RunResult {
        &self.results
    }

    pub fn has_failures(&self) -> bool {
        self.results.has_failures()
    }

    /// Empties the accumulated outcomes. Section enabled/timeout state is
    /// untouched; that lives in the registry.
    pub fn clear_results(&mut self) {
        self.results.clear();
    }

    /// Runs a single section. An unknown identifier or a disabled section
    /// yields an empty sequence and leaves the aggregate result untouched.
    pub fn run_section(&mut self, registry: &SectionRegistry, identifier: &str) -> Vec<TestOutcome> {
        self.run_section_inner(registry, identifier, false)
    }

    /// Runs every enabled section in registration order.
    pub fn run_all(&mut self, registry: &SectionRegistry) {
        let identifiers = registry.enabled_identifiers();
        info!("Running {} enabled sections", identifiers.len());
        for (index, identifier) in identifiers.iter().enumerate() {
            if self.is_cancelled() {
                warn!("Cancellation requested, stopping before section '{}'", identifier);
                break;
            }
            if index > 0 && self.pacing > Duration::default() {
                sleep(self.pacing);
            }
            self.run_section_inner(registry, identifier, false);
        }
    }

    /// Runs exactly the given identifiers in the given order. Explicit
    /// selection overrides the enabled flag: the caller asked for these.
    pub fn run_selected(&mut self, registry: &SectionRegistry, identifiers: &[String]) {
        for (index, identifier) in identifiers.iter().enumerate() {
            if self.is_cancelled() {
                warn!("Cancellation requested, stopping before section '{}'", identifier);
                break;
            }
            if index > 0 && self.pacing > Duration::default() {
                sleep(self.pacing);
            }
            self.run_section_inner(registry, identifier, true);
        }
    }

    fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Relaxed)
    }

    fn run_section_inner(
        &mut self,
        registry: &SectionRegistry,
        identifier: &str,
        ignore_enabled: bool,
    ) -> Vec<TestOutcome> {
        let section = match registry.section(identifier) {
            Some(section) => section,
            None => {
                error!("Unknown test section '{}'", identifier);
                return Vec::new();
            }
        };
        if !ignore_enabled && !section.is_enabled() {
            info!("Section '{}' is disabled, skipping", section.display_name());
            return Vec::new();
        }

        info!("=== Running {} ===", section.display_name());
        debug!("{}", section.description());

        let mut section_outcomes = Vec::with_capacity(section.case_count());
        for (index, case) in section.cases().iter().enumerate() {
            if self.is_cancelled() {
                warn!(
                    "Cancellation requested, stopping section '{}'",
                    section.display_name()
                );
                break;
            }
            debug!("Running test {}/{}", index + 1, section.case_count());
            let outcome = execute_case(case, section);
            if outcome.passed {
                info!("{}: PASSED ({:.3} ms)", outcome.name, outcome.duration_ms);
            } else {
                error!(
                    "{}: FAILED ({:.3} ms) {}",
                    outcome.name,
                    outcome.duration_ms,
                    outcome.message.as_deref().unwrap_or("")
                );
            }
            self.results.push(outcome.clone());
            section_outcomes.push(outcome);
        }

        let passed = section_outcomes.iter().filter(|outcome| outcome.passed).count();
        let failed = section_outcomes.len() - passed;
        info!(
            "--- {}: {} passed, {} failed, success rate {:.1}% ---",
            section.display_name(),
            passed,
            failed,
            success_rate(passed, section_outcomes.len())
        );
        section_outcomes
    }
}

fn execute_case(case: &TestCase, section: &TestSection) -> TestOutcome {
    let started = Instant::now();
    let result = panic::catch_unwind(AssertUnwindSafe(|| case.invoke()));
    let elapsed = started.elapsed();

    let mut verdict = match result {
        Ok(verdict) => verdict,
        Err(payload) => Verdict::fail(format!("test body panicked: {}", panic_message(&payload))),
    };
    // The budget is enforced after the fact: pre-empting a case on a worker
    // thread could leave two cases driving the same bus at once.
    if let Some(budget) = section.timeout() {
        if elapsed > budget {
            verdict.passed = false;
            verdict.message = Some(format!(
                "timeout exceeded: ran {} ms against a budget of {} ms",
                elapsed.as_millis(),
                budget.as_millis()
            ));
        }
    }

    TestOutcome {
        name: case.name().to_owned(),
        passed: verdict.passed,
        message: verdict.message,
        duration_ms: elapsed.as_secs_f64() * 1000.0,
    }
}

fn panic_message(payload: &Box<dyn Any + Send>) -> &str {
    if let Some(message) = payload.downcast_ref::<&str>() {
        message
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message
    } else {
        "opaque panic payload"
    }
}

fn success_rate(passed: usize, total: usize) -> f64 {
    match total {
        0 => 0.0,
        total => passed as f64 * 100.0 / total as f64,
    }
}
