pub mod model;

use crate::reporter::model::Report;
use std::fs::{create_dir_all, File};
use std::io;
use std::path::Path;

/// Writes the report document as pretty JSON, creating parent directories on
/// demand. The shape of the document is the presentation contract; the
/// numbers all come from the runner's aggregates.
pub fn save_into_file(report: &Report, path: &Path) -> Result<(), io::Error> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            create_dir_all(parent)?;
        }
    }
    let file = File::create(path)?;
    serde_json::to_writer_pretty(file, report).map_err(io::Error::from)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::case::TestCase;
    use crate::app::outcome::Verdict;
    use crate::app::registry::SectionRegistry;
    use crate::app::runner::TestRunner;

    #[test]
    fn test_report_round_trips_through_file() {
        let mut registry = SectionRegistry::new();
        registry
            .register("basic", "Basic", "", true, None)
            .unwrap();
        registry
            .add_cases(
                "basic",
                vec![
                    TestCase::new("passes", Verdict::pass),
                    TestCase::new("fails", || Verdict::fail("boom")),
                ],
            )
            .unwrap();
        let mut runner = TestRunner::new();
        runner.run_all(&registry);

        let report = Report::from_results("smoke", runner.results()).unwrap();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("reports/run.json");
        save_into_file(&report, &path).unwrap();

        let written: serde_json::Value =
            serde_json::from_reader(File::open(&path).unwrap()).unwrap();
        assert_eq!(written["name"], "smoke");
        assert_eq!(written["summary"]["total"], 2);
        assert_eq!(written["summary"]["passed"], 1);
        assert_eq!(written["summary"]["failed"], 1);
        assert_eq!(written["summary"]["successRate"], 50.0);
        assert_eq!(written["outcomes"].as_array().unwrap().len(), 2);
        assert_eq!(written["outcomes"][1]["message"], "boom");
    }
}
