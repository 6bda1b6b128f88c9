use crate::app::outcome::TestOutcome;
use crate::app::runner::RunResult;
use chrono::{DateTime, Utc};
use serde_derive::Serialize;

/// Derived statistics of one run, denormalized for consumers that only want
/// the headline numbers.
#[derive(Debug, Serialize, Clone, Builder)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    total: usize,
    passed: usize,
    failed: usize,
    success_rate: f64,
    total_duration_ms: f64,
    average_duration_ms: f64,
}

impl Summary {
    pub fn builder() -> SummaryBuilder {
        SummaryBuilder::default()
    }
}

/// The exported report document: identity, headline summary, and the ordered
/// outcome sequence exactly as the runner recorded it.
#[derive(Debug, Serialize, Clone, Builder)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    #[builder(default = "uuid::Uuid::new_v4()")]
    uuid: uuid::Uuid,
    #[builder(setter(into))]
    name: String,
    #[builder(default = "Utc::now()")]
    created: DateTime<Utc>,
    summary: Summary,
    outcomes: Vec<TestOutcome>,
}

impl Report {
    pub fn builder() -> ReportBuilder {
        ReportBuilder::default()
    }

    pub fn from_results(name: &str, results: &RunResult) -> Result<Self, String> {
        let summary = Summary::builder()
            .total(results.total_count())
            .passed(results.passed_count())
            .failed(results.failed_count())
            .success_rate(results.success_rate())
            .total_duration_ms(results.total_duration_ms())
            .average_duration_ms(results.average_duration_ms())
            .build()?;
        Report::builder()
            .name(name)
            .summary(summary)
            .outcomes(results.outcomes().to_vec())
            .build()
    }
}
