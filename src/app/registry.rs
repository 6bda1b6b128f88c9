use crate::app::case::TestCase;
use crate::app::error::Error;
use crate::app::section::TestSection;
use indexmap::IndexMap;
use std::time::Duration;

/// Owner of every test section and its configuration state. Backed by an
/// insertion-ordered map so identifier lookup and registration-order iteration
/// go through the same structure. A "run everything" alias is a command-layer
/// concept and never appears here.
#[derive(Debug, Default)]
pub struct SectionRegistry {
    sections: IndexMap<String, TestSection>,
}

impl SectionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a section with an empty case list. Registering an identifier twice
    /// is an error, never a silent overwrite.
    pub fn register(
        &mut self,
        identifier: &str,
        display_name: &str,
        description: &str,
        enabled: bool,
        timeout: Option<Duration>,
    ) -> Result<(), Error> {
        if self.sections.contains_key(identifier) {
            return Err(Error::DuplicateSection(identifier.to_owned()));
        }
        self.sections.insert(
            identifier.to_owned(),
            TestSection::new(identifier, display_name, description, enabled, timeout),
        );
        Ok(())
    }

    /// Appends cases to a previously registered section.
    pub fn add_cases(&mut self, identifier: &str, cases: Vec<TestCase>) -> Result<(), Error> {
        self.section_mut(identifier)?.push_cases(cases);
        Ok(())
    }

    pub fn set_enabled(&mut self, identifier: &str, enabled: bool) -> Result<(), Error> {
        self.section_mut(identifier)?.set_enabled(enabled);
        Ok(())
    }

    pub fn set_timeout(&mut self, identifier: &str, timeout: Option<Duration>) -> Result<(), Error> {
        self.section_mut(identifier)?.set_timeout(timeout);
        Ok(())
    }

    /// Unknown identifiers read as disabled.
    pub fn is_enabled(&self, identifier: &str) -> bool {
        self.sections
            .get(identifier)
            .map(TestSection::is_enabled)
            .unwrap_or(false)
    }

    pub fn case_count(&self, identifier: &str) -> usize {
        self.sections
            .get(identifier)
            .map(TestSection::case_count)
            .unwrap_or(0)
    }

    pub fn section(&self, identifier: &str) -> Option<&TestSection> {
        self.sections.get(identifier)
    }

    /// Identifier at a zero-based registration position.
    pub fn identifier_at(&self, index: usize) -> Option<&str> {
        self.sections
            .get_index(index)
            .map(|(identifier, _)| identifier.as_str())
    }

    /// Identifiers of all enabled sections, in registration order.
    pub fn enabled_identifiers(&self) -> Vec<String> {
        self.sections
            .values()
            .filter(|section| section.is_enabled())
            .map(|section| section.identifier().to_owned())
            .collect()
    }

    pub fn sections(&self) -> impl Iterator<Item = &TestSection> {
        self.sections.values()
    }

    pub fn len(&self) -> usize {
        self.sections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    fn section_mut(&mut self, identifier: &str) -> Result<&mut TestSection, Error> {
        self.sections
            .get_mut(identifier)
            .ok_or_else(|| Error::UnknownSection(identifier.to_owned()))
    }
}
