use serde_derive::Serialize;

/// What a test case body reports about itself: pass/fail plus an optional
/// message. The runner turns this into a [`TestOutcome`] with its own timing.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Verdict {
    pub passed: bool,
    pub message: Option<String>,
}

impl Verdict {
    pub fn pass() -> Self {
        Self {
            passed: true,
            message: None,
        }
    }

    pub fn pass_with<S: Into<String>>(message: S) -> Self {
        Self {
            passed: true,
            message: Some(message.into()),
        }
    }

    pub fn fail<S: Into<String>>(message: S) -> Self {
        Self {
            passed: false,
            message: Some(message.into()),
        }
    }
}

impl From<bool> for Verdict {
    fn from(passed: bool) -> Self {
        Self {
            passed,
            message: None,
        }
    }
}

/// The recorded result of one executed test case. Created by the runner right
/// after the case body returns and immutable afterwards; the runner's
/// wall-clock measurement is authoritative over anything the body reports.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TestOutcome {
    pub name: String,
    pub passed: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub duration_ms: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verdict_constructors() {
        assert_eq!(
            Verdict::pass(),
            Verdict {
                passed: true,
                message: None
            }
        );
        assert_eq!(
            Verdict::fail("boom"),
            Verdict {
                passed: false,
                message: Some("boom".to_owned())
            }
        );
        assert_eq!(Verdict::from(true), Verdict::pass());
    }

    #[test]
    fn test_outcome_serializes_camel_case_and_skips_empty_message() {
        let outcome = TestOutcome {
            name: "sample".to_owned(),
            passed: true,
            message: None,
            duration_ms: 1.5,
        };
        let value = serde_json::to_value(&outcome).unwrap();

        assert_eq!(value["name"], "sample");
        assert_eq!(value["passed"], true);
        assert_eq!(value["durationMs"], 1.5);
        assert!(value.get("message").is_none());
    }
}
