//! Compiled per-language patterns.
//!
//! Every pattern runs on the `regex` crate's automata engine, so matching time
//! stays linear in the input no matter how the narrative is crafted.

use std::sync::LazyLock;

use regex::Regex;

use crate::models::Language;

use super::markers::{FieldMarker, MarkerTable, ENGLISH_MARKERS, HINDI_MARKERS};
use super::SummaryError;

/// Emoji are often followed by U+FE0F in model output.
const VARIATION_SELECTOR: &str = r"\x{FE0F}?";

/// Inline whitespace only. Labeled captures must not cross a line break.
const INLINE_WS: &str = r"[^\S\n]";

/// `**Label**:` or `**Label:**`.
const BOLD_CLOSE: &str = r"(?::\*\*|\*\*:)";

static ENGLISH_GRAMMAR: LazyLock<SummaryGrammar> = LazyLock::new(|| {
    SummaryGrammar::compile(ENGLISH_MARKERS).expect("Invalid English marker table")
});

static HINDI_GRAMMAR: LazyLock<SummaryGrammar> = LazyLock::new(|| {
    SummaryGrammar::compile(HINDI_MARKERS).expect("Invalid Hindi marker table")
});

/// Shared compiled grammar for a built-in language.
pub fn grammar_for(language: Language) -> &'static SummaryGrammar {
    match language {
        Language::English => &*ENGLISH_GRAMMAR,
        Language::Hindi => &*HINDI_GRAMMAR,
    }
}

/// A marker table compiled into one independent matcher per field.
#[derive(Debug, Clone)]
pub struct SummaryGrammar {
    pub(super) table: MarkerTable,
    pub(super) heading: Regex,
    pub(super) final_tip: Regex,
    pub(super) name: Regex,
    pub(super) importance: Regex,
    pub(super) results: Regex,
    pub(super) tip: Regex,
    pub(super) verdict: Regex,
    pub(super) reference_range: Option<Regex>,
}

impl SummaryGrammar {
    /// Validate a marker table and build its patterns.
    ///
    /// Fails only for tables a caller assembled incorrectly; the built-in
    /// tables always compile.
    pub fn compile(table: MarkerTable) -> Result<Self, SummaryError> {
        validate_table(&table)?;

        let reference_range = match &table.reference_range {
            Some(marker) => Some(Regex::new(&line_field_pattern(marker))?),
            None => None,
        };

        Ok(Self {
            heading: Regex::new(&heading_pattern(&table.heading))?,
            final_tip: Regex::new(&final_tip_pattern(table.final_tip_glyph))?,
            name: Regex::new(&name_pattern(table.alias_keywords))?,
            importance: Regex::new(&line_field_pattern(&table.importance))?,
            results: Regex::new(&results_pattern(&table.results, table.result_separator))?,
            tip: Regex::new(&line_field_pattern(&table.tip))?,
            verdict: Regex::new(&line_field_pattern(&table.verdict))?,
            reference_range,
            table,
        })
    }

    pub fn table(&self) -> &MarkerTable {
        &self.table
    }
}

fn validate_table(table: &MarkerTable) -> Result<(), SummaryError> {
    validate_marker("heading", &table.heading)?;
    validate_marker("importance", &table.importance)?;
    validate_marker("results", &table.results)?;
    validate_marker("tip", &table.tip)?;
    validate_marker("verdict", &table.verdict)?;
    if let Some(marker) = &table.reference_range {
        validate_marker("reference_range", marker)?;
    }

    if table.final_tip_glyph.trim().is_empty() {
        return Err(invalid("final_tip_glyph", "glyph is empty"));
    }
    validate_words("alias_keywords", table.alias_keywords)?;
    if table.result_separator.is_whitespace() {
        return Err(invalid("result_separator", "separator must not be whitespace"));
    }

    // An empty cue is a substring of every text and would classify everything.
    for (field, cues) in [
        ("status.low_annotations", table.status.low_annotations),
        ("status.low_words", table.status.low_words),
        ("status.high_annotations", table.status.high_annotations),
        ("status.high_words", table.status.high_words),
    ] {
        if cues.iter().any(|c| c.trim().is_empty()) {
            return Err(invalid(field, "cue is empty"));
        }
    }

    if table.defaults.no_reading.trim().is_empty() {
        return Err(invalid("defaults.no_reading", "placeholder is empty"));
    }
    Ok(())
}

fn validate_marker(field: &'static str, marker: &FieldMarker) -> Result<(), SummaryError> {
    if marker.glyph.trim().is_empty() {
        return Err(invalid(field, "glyph is empty"));
    }
    validate_words(field, marker.labels)
}

fn validate_words(field: &'static str, words: &[&str]) -> Result<(), SummaryError> {
    if words.is_empty() {
        return Err(invalid(field, "no labels given"));
    }
    if words.iter().any(|w| w.trim().is_empty()) {
        return Err(invalid(field, "label is empty"));
    }
    Ok(())
}

fn invalid(field: &'static str, reason: &str) -> SummaryError {
    SummaryError::InvalidMarkerTable {
        field,
        reason: reason.to_string(),
    }
}

fn glyph(glyph: &str) -> String {
    format!("{}{}", regex::escape(glyph.trim()), VARIATION_SELECTOR)
}

fn alternation(words: &[&str]) -> String {
    words
        .iter()
        .map(|w| regex::escape(w.trim()))
        .collect::<Vec<_>>()
        .join("|")
}

/// `## 🧪 **Test**:`
fn heading_pattern(marker: &FieldMarker) -> String {
    format!(
        r"(?i)#{{2}}\s+{}\s+\*\*(?:{}){}",
        glyph(marker.glyph),
        alternation(marker.labels),
        BOLD_CLOSE
    )
}

/// `👉 "phrase"`, straight or curly quotes, on one line.
fn final_tip_pattern(tip_glyph: &str) -> String {
    format!(r#"{}\s*["“]([^"”\n]+)["”]"#, glyph(tip_glyph))
}

/// Start of a section: `Hemoglobin (aka "Hb")`.
fn name_pattern(alias_keywords: &[&str]) -> String {
    format!(
        r#"^{ws}*([^(\n]*)(?:\({ws}*(?i:{kw}){ws}+["“]([^"”\n]+)["”]{ws}*\))?"#,
        ws = INLINE_WS,
        kw = alternation(alias_keywords),
    )
}

/// `🧠 **Why this test matters**: rest of line`
fn line_field_pattern(marker: &FieldMarker) -> String {
    format!(
        r"(?i){}{ws}*\*\*(?:{}){}{ws}*([^\n]+)",
        glyph(marker.glyph),
        alternation(marker.labels),
        BOLD_CLOSE,
        ws = INLINE_WS,
    )
}

/// `📊 **Results**: value — explanation`
///
/// Group 1 is the whole line, group 2 the value, group 3 the explanation.
/// Every group may be empty; a blank line is rejected by the field extractor.
fn results_pattern(marker: &FieldMarker, separator: char) -> String {
    let sep = regex::escape(&separator.to_string());
    format!(
        r"(?i){}{ws}*\*\*(?:{}){}{ws}*(([^{sep}\n]*)(?:{sep}{ws}*([^\n]*))?)",
        glyph(marker.glyph),
        alternation(marker.labels),
        BOLD_CLOSE,
        ws = INLINE_WS,
        sep = sep,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::summary::markers::StatusCues;

    #[test]
    fn builtin_grammars_compile() {
        for language in Language::ALL {
            let grammar = grammar_for(language);
            assert!(grammar.reference_range.is_none());
        }
        assert_eq!(grammar_for(Language::English).table().code, "en");
        assert_eq!(grammar_for(Language::Hindi).table().code, "hi");
    }

    #[test]
    fn heading_label_is_case_insensitive() {
        let g = grammar_for(Language::English);
        assert!(g.heading.is_match("## 🧪 **TEST**: Glucose"));
        assert!(g.heading.is_match("## 🧪 **test**: Glucose"));
    }

    #[test]
    fn heading_glyph_is_exact() {
        let g = grammar_for(Language::English);
        assert!(!g.heading.is_match("## 🔬 **Test**: Glucose"));
        assert!(!g.heading.is_match("## **Test**: Glucose"));
    }

    #[test]
    fn heading_tolerates_variation_selector_and_inner_colon() {
        let g = grammar_for(Language::English);
        assert!(g.heading.is_match("## 🧪\u{FE0F} **Test**: Glucose"));
        assert!(g.heading.is_match("## 🧪 **Test:** Glucose"));
    }

    #[test]
    fn labeled_line_does_not_cross_newline() {
        let g = grammar_for(Language::English);
        assert!(g.tip.captures("🩺 **Tiny Tip**:\nnext line").is_none());
        let caps = g.tip.captures("🩺 **Tiny Tip**: walk daily\nnext").unwrap();
        assert_eq!(&caps[1], "walk daily");
    }

    #[test]
    fn results_pattern_splits_on_separator() {
        let g = grammar_for(Language::English);
        let caps = g.results.captures("📊 **Results**: 10 g/dL — slightly low").unwrap();
        assert_eq!(caps[1].trim(), "10 g/dL — slightly low");
        assert_eq!(caps[2].trim(), "10 g/dL");
        assert_eq!(caps[3].trim(), "slightly low");
    }

    #[test]
    fn results_pattern_matches_separator_right_after_label() {
        let g = grammar_for(Language::English);
        let caps = g.results.captures("📊 **Results**:— slightly low").unwrap();
        assert_eq!(&caps[1], "— slightly low");
        assert_eq!(&caps[2], "");
        assert_eq!(&caps[3], "slightly low");
    }

    #[test]
    fn final_tip_does_not_cross_newline() {
        let g = grammar_for(Language::English);
        assert!(g.final_tip.captures("👉 \"Rest well\nmore\"").is_none());
        let caps = g.final_tip.captures("👉 \"Rest\"\nmore").unwrap();
        assert_eq!(&caps[1], "Rest");
    }

    #[test]
    fn hindi_labels_accept_every_nukta_spelling() {
        let g = grammar_for(Language::Hindi);
        assert!(g.importance.is_match("🧠 **यह टेस्ट क्यों \u{91C}\u{93C}रूरी है**: ऑक्सीजन"));
        assert!(g.importance.is_match("🧠 **यह टेस्ट क्यों \u{95B}रूरी है**: ऑक्सीजन"));
        assert!(g.importance.is_match("🧠 **यह टेस्ट क्यों जरूरी है**: ऑक्सीजन"));
        assert!(g.verdict.is_match("🎯 **\u{95E}ैसला और वाइब्स**: ठीक"));
        assert!(g.name.captures(" हीमोग्लोबिन (उर्\u{95E} \"Hb\")").unwrap().get(2).is_some());
    }

    #[test]
    fn custom_table_with_reference_range_compiles() {
        let table = MarkerTable {
            reference_range: Some(FieldMarker {
                glyph: "📏",
                labels: &["Normal Range"],
            }),
            ..ENGLISH_MARKERS
        };
        let g = SummaryGrammar::compile(table).unwrap();
        let re = g.reference_range.as_ref().unwrap();
        let caps = re.captures("📏 **Normal Range**: 12-16 g/dL").unwrap();
        assert_eq!(&caps[1], "12-16 g/dL");
    }

    #[test]
    fn labels_with_regex_metacharacters_are_escaped() {
        let table = MarkerTable {
            tip: FieldMarker {
                glyph: "💡",
                labels: &["Tip (short)?"],
            },
            ..ENGLISH_MARKERS
        };
        let g = SummaryGrammar::compile(table).unwrap();
        assert!(g.tip.is_match("💡 **Tip (short)?**: rest"));
        assert!(!g.tip.is_match("💡 **Tip short**: rest"));
    }

    #[test]
    fn empty_glyph_is_rejected() {
        let table = MarkerTable {
            results: FieldMarker {
                glyph: " ",
                labels: &["Results"],
            },
            ..ENGLISH_MARKERS
        };
        let err = SummaryGrammar::compile(table).unwrap_err();
        assert!(matches!(err, SummaryError::InvalidMarkerTable { field: "results", .. }));
    }

    #[test]
    fn empty_label_list_is_rejected() {
        let table = MarkerTable {
            heading: FieldMarker {
                glyph: "🧪",
                labels: &[],
            },
            ..ENGLISH_MARKERS
        };
        let err = SummaryGrammar::compile(table).unwrap_err();
        assert!(matches!(err, SummaryError::InvalidMarkerTable { field: "heading", .. }));
    }

    #[test]
    fn empty_status_cue_is_rejected() {
        let table = MarkerTable {
            status: StatusCues {
                low_words: &["low", ""],
                ..ENGLISH_MARKERS.status
            },
            ..ENGLISH_MARKERS
        };
        let err = SummaryGrammar::compile(table).unwrap_err();
        assert!(matches!(
            err,
            SummaryError::InvalidMarkerTable { field: "status.low_words", .. }
        ));
    }

    #[test]
    fn whitespace_separator_is_rejected() {
        let table = MarkerTable {
            result_separator: ' ',
            ..ENGLISH_MARKERS
        };
        assert!(SummaryGrammar::compile(table).is_err());
    }
}
