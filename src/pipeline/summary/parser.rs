use crate::models::{Language, ParsedSummary, TestRecord, TestStatus};

use super::classify::classify_status;
use super::fields::{extract_fields, SectionFields};
use super::grammar::{grammar_for, SummaryGrammar};
use super::splitter::{extract_final_tip, split_sections};

/// Parse a narrative lab summary written in `language`.
///
/// Never fails: sparse or malformed text yields sparse records, and text with
/// no test headings yields an empty `tests` list.
pub fn parse_summary(text: &str, language: Language) -> ParsedSummary {
    grammar_for(language).parse(text)
}

pub fn parse_english_summary(text: &str) -> ParsedSummary {
    parse_summary(text, Language::English)
}

pub fn parse_hindi_summary(text: &str) -> ParsedSummary {
    parse_summary(text, Language::Hindi)
}

impl SummaryGrammar {
    /// Parse a narrative with this grammar's marker table.
    pub fn parse(&self, text: &str) -> ParsedSummary {
        let final_tip = extract_final_tip(self, text);
        let tests: Vec<TestRecord> = split_sections(self, text)
            .into_iter()
            .enumerate()
            .map(|(index, section)| self.assemble_record(index, section))
            .collect();

        tracing::debug!(
            language = self.table.code,
            sections = tests.len(),
            flagged = tests.iter().filter(|t| t.status != TestStatus::Normal).count(),
            has_final_tip = !final_tip.is_empty(),
            "Parsed lab summary"
        );

        ParsedSummary { tests, final_tip }
    }

    fn assemble_record(&self, index: usize, section: &str) -> TestRecord {
        let defaults = &self.table.defaults;
        let SectionFields {
            name,
            alias,
            importance,
            results,
            tip,
            verdict,
            reference_range,
        } = extract_fields(self, section);

        let status = classify_status(
            section,
            results.as_ref().map(|r| r.line),
            &self.table.status,
        );

        let (result, explanation) = match &results {
            Some(line) if line.value.is_empty() => (defaults.not_specified, line.explanation),
            Some(line) => (line.value, line.explanation),
            None => {
                tracing::trace!(
                    language = self.table.code,
                    section = index,
                    "No results line, status inferred from section text"
                );
                (defaults.no_reading, None)
            }
        };

        TestRecord {
            name: name.to_string(),
            alias: alias.map(str::to_string),
            icon: defaults.icon.to_string(),
            importance: importance.unwrap_or_default().to_string(),
            result: result.to_string(),
            status,
            explanation: explanation.unwrap_or_default().to_string(),
            tip: tip.unwrap_or_default().to_string(),
            verdict: verdict.unwrap_or_default().to_string(),
            reference_range: reference_range
                .filter(|r| !r.is_empty())
                .map(str::to_string),
        }
    }
}
