use crate::app::case::TestCase;
use std::time::Duration;

/// A named, enable/disable-able ordered collection of test cases sharing a
/// theme. Insertion order is execution order. The timeout is a per-case wall
/// time budget; `None` means unbounded.
#[derive(Debug)]
pub struct TestSection {
    identifier: String,
    display_name: String,
    description: String,
    enabled: bool,
    timeout: Option<Duration>,
    cases: Vec<TestCase>,
}

impl TestSection {
    pub(crate) fn new(
        identifier: &str,
        display_name: &str,
        description: &str,
        enabled: bool,
        timeout: Option<Duration>,
    ) -> Self {
        Self {
            identifier: identifier.to_owned(),
            display_name: display_name.to_owned(),
            description: description.to_owned(),
            enabled,
            timeout,
            cases: Vec::new(),
        }
    }

    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }

    pub fn cases(&self) -> &[TestCase] {
        &self.cases
    }

    pub fn case_count(&self) -> usize {
        self.cases.len()
    }

    pub(crate) fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    pub(crate) fn set_timeout(&mut self, timeout: Option<Duration>) {
        self.timeout = timeout;
    }

    // Append-only: cases are populated during setup and never reordered.
    pub(crate) fn push_cases(&mut self, cases: Vec<TestCase>) {
        self.cases.extend(cases);
    }
}
