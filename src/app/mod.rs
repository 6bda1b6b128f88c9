pub(crate) mod case;
pub(crate) mod error;
pub(crate) mod outcome;
pub(crate) mod registry;
pub(crate) mod runner;
pub(crate) mod section;

use crate::app::registry::SectionRegistry;
use crate::app::runner::{RunResult, TestRunner};
use crate::configuration::manifest::Manifest;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

/// One test session: a populated registry, a runner, and the manifest-supplied
/// overrides applied on top of the registered defaults.
pub struct App {
    name: String,
    registry: SectionRegistry,
    runner: TestRunner,
}

impl App {
    pub fn new(manifest: Manifest, mut registry: SectionRegistry) -> Self {
        for entry in &manifest.sections {
            if let Err(e) = registry.set_enabled(&entry.section, entry.enabled) {
                error!("Cannot apply manifest override: {}", e);
                continue;
            }
            if entry.timeout.is_some() {
                // set_enabled just proved the identifier is known
                let _ = registry.set_timeout(&entry.section, entry.timeout);
            }
        }
        let runner = TestRunner::with_pacing(manifest.pacing.unwrap_or_default());
        App {
            name: manifest.name,
            registry,
            runner,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn cancel_flag(&self) -> Arc<AtomicBool> {
        self.runner.cancel_flag()
    }

    pub fn list_sections(&self) {
        info!("Available test sections of '{}':", self.name);
        for section in self.registry.sections() {
            info!(
                "[{}] {} ({} tests) - {}",
                if section.is_enabled() { "X" } else { " " },
                section.display_name(),
                section.case_count(),
                section.description()
            );
        }
    }

    pub fn run_all(&mut self) {
        info!("Starting test session '{}'", self.name);
        self.runner.run_all(&self.registry);
        self.log_overall_summary();
    }

    pub fn run_selected(&mut self, selections: &[String]) {
        info!(
            "Starting test session '{}' with {} selected sections",
            self.name,
            selections.len()
        );
        let identifiers = self.resolve_selections(selections);
        self.runner.run_selected(&self.registry, &identifiers);
        self.log_overall_summary();
    }

    /// Numeric selections address sections by zero-based registration
    /// position; anything else is taken as an identifier. Unresolvable
    /// selections pass through so the runner reports them as unknown.
    fn resolve_selections(&self, selections: &[String]) -> Vec<String> {
        selections
            .iter()
            .map(|selection| {
                if self.registry.section(selection).is_some() {
                    return selection.clone();
                }
                match selection.parse::<usize>() {
                    Ok(index) => self
                        .registry
                        .identifier_at(index)
                        .map(str::to_owned)
                        .unwrap_or_else(|| selection.clone()),
                    Err(_) => selection.clone(),
                }
            })
            .collect()
    }

    pub fn results(&self) -> &RunResult {
        self.runner.results()
    }

    pub fn has_failures(&self) -> bool {
        self.runner.has_failures()
    }

    fn log_overall_summary(&self) {
        let results = self.runner.results();
        info!("=== Overall summary ===");
        info!("Total tests: {}", results.total_count());
        info!("Passed: {}", results.passed_count());
        info!("Failed: {}", results.failed_count());
        info!("Success rate: {:.1}%", results.success_rate());
        info!("Total execution time: {:.3} ms", results.total_duration_ms());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::case::TestCase;
    use crate::app::outcome::Verdict;
    use crate::configuration::manifest::SectionEntry;
    use std::time::Duration;

    fn manifest_with(sections: Vec<SectionEntry>) -> Manifest {
        Manifest {
            name: "session".to_owned(),
            pacing: None,
            report: None,
            sections,
        }
    }

    fn populated_registry() -> SectionRegistry {
        let mut registry = SectionRegistry::new();
        registry
            .register("basic", "Basic", "", true, None)
            .unwrap();
        registry
            .add_cases("basic", vec![TestCase::new("noop", Verdict::pass)])
            .unwrap();
        registry
            .register("faulty", "Faulty", "", true, None)
            .unwrap();
        registry
            .add_cases("faulty", vec![TestCase::new("boom", || Verdict::fail("boom"))])
            .unwrap();
        registry
    }

    #[test]
    fn test_manifest_overrides_are_applied() {
        let manifest = manifest_with(vec![
            SectionEntry {
                section: "faulty".to_owned(),
                enabled: false,
                timeout: None,
            },
            SectionEntry {
                section: "basic".to_owned(),
                enabled: true,
                timeout: Some(Duration::from_secs(30)),
            },
        ]);
        let mut app = App::new(manifest, populated_registry());
        app.run_all();

        assert_eq!(app.results().total_count(), 1);
        assert!(!app.has_failures());
    }

    #[test]
    fn test_unknown_override_is_not_fatal() {
        let manifest = manifest_with(vec![SectionEntry {
            section: "wifi".to_owned(),
            enabled: false,
            timeout: None,
        }]);
        let mut app = App::new(manifest, populated_registry());
        app.run_all();

        assert_eq!(app.results().total_count(), 2);
        assert!(app.has_failures());
    }

    #[test]
    fn test_selected_sections_run_in_requested_order() {
        let manifest = manifest_with(Vec::new());
        let mut app = App::new(manifest, populated_registry());
        app.run_selected(&["faulty".to_owned(), "basic".to_owned()]);

        let names: Vec<&str> = app
            .results()
            .outcomes()
            .iter()
            .map(|outcome| outcome.name.as_str())
            .collect();
        assert_eq!(names, vec!["boom", "noop"]);
    }

    #[test]
    fn test_sections_can_be_selected_by_position() {
        let manifest = manifest_with(Vec::new());
        let mut app = App::new(manifest, populated_registry());
        app.run_selected(&["1".to_owned()]);

        let names: Vec<&str> = app
            .results()
            .outcomes()
            .iter()
            .map(|outcome| outcome.name.as_str())
            .collect();
        assert_eq!(names, vec!["boom"]);
    }
}
