use serde::{Deserialize, Serialize};

use super::enums::TestStatus;

/// Structured interpretation of one diagnostic test in a narrative summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestRecord {
    /// Canonical label of the test. Empty when the heading line was unparseable.
    pub name: String,
    /// Informal nickname from an `(aka "...")` parenthetical. Never `Some("")`.
    pub alias: Option<String>,
    pub icon: String,
    pub importance: String,
    /// Measured value as written, or a localized placeholder.
    pub result: String,
    pub status: TestStatus,
    pub explanation: String,
    pub tip: String,
    pub verdict: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reference_range: Option<String>,
}

/// Full output of one parse: test records in source order plus the closing remark.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParsedSummary {
    pub tests: Vec<TestRecord>,
    pub final_tip: String,
}

impl ParsedSummary {
    /// True when no test section and no final tip were found.
    pub fn is_empty(&self) -> bool {
        self.tests.is_empty() && self.final_tip.is_empty()
    }

    /// Records whose status is not normal, in source order.
    pub fn flagged(&self) -> impl Iterator<Item = &TestRecord> {
        self.tests.iter().filter(|t| t.status != TestStatus::Normal)
    }

    pub fn count_by_status(&self, status: TestStatus) -> usize {
        self.tests.iter().filter(|t| t.status == status).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(name: &str, status: TestStatus) -> TestRecord {
        TestRecord {
            name: name.into(),
            alias: None,
            icon: "🧪".into(),
            importance: String::new(),
            result: "5.2 mmol/L".into(),
            status,
            explanation: String::new(),
            tip: String::new(),
            verdict: String::new(),
            reference_range: None,
        }
    }

    #[test]
    fn empty_summary_is_empty() {
        assert!(ParsedSummary::default().is_empty());
    }

    #[test]
    fn final_tip_alone_is_not_empty() {
        let summary = ParsedSummary {
            tests: vec![],
            final_tip: "Stay hydrated".into(),
        };
        assert!(!summary.is_empty());
    }

    #[test]
    fn flagged_keeps_order_and_skips_normal() {
        let summary = ParsedSummary {
            tests: vec![
                record("Glucose", TestStatus::High),
                record("Sodium", TestStatus::Normal),
                record("Ferritin", TestStatus::Low),
            ],
            final_tip: String::new(),
        };
        let names: Vec<&str> = summary.flagged().map(|t| t.name.as_str()).collect();
        assert_eq!(names, vec!["Glucose", "Ferritin"]);
        assert_eq!(summary.count_by_status(TestStatus::Normal), 1);
        assert_eq!(summary.count_by_status(TestStatus::Low), 1);
    }

    #[test]
    fn json_shape_uses_camel_case() {
        let summary = ParsedSummary {
            tests: vec![record("Glucose", TestStatus::High)],
            final_tip: "Rest well".into(),
        };
        let value = serde_json::to_value(&summary).unwrap();
        assert_eq!(value["finalTip"], "Rest well");
        assert_eq!(value["tests"][0]["status"], "high");
        assert!(value["tests"][0]["alias"].is_null());
        assert!(value["tests"][0].get("referenceRange").is_none());
    }

    #[test]
    fn json_reference_range_serialized_when_present() {
        let mut r = record("Glucose", TestStatus::Normal);
        r.reference_range = Some("3.9-5.5 mmol/L".into());
        let value = serde_json::to_value(&r).unwrap();
        assert_eq!(value["referenceRange"], "3.9-5.5 mmol/L");

        let back: TestRecord = serde_json::from_value(value).unwrap();
        assert_eq!(back, r);
    }
}
