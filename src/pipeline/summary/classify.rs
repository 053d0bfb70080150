use crate::models::TestStatus;

use super::markers::StatusCues;

/// Derive the severity of one test section.
///
/// `results_line` is the full text after the results label (value and
/// explanation), or `None` when the section has no results line. Cues are
/// case-insensitive substrings and the first rule that fires wins:
///
/// 1. a low annotation in the section, or a low word in the results line
/// 2. a high annotation in the section, or a high word in the results line
/// 3. otherwise normal
///
/// Without a results line both kinds of cue are searched in the whole section.
/// Low is always checked before high, and a bare word counts as much as an
/// annotation, so "highlights" in a result reads as high.
pub fn classify_status(section: &str, results_line: Option<&str>, cues: &StatusCues) -> TestStatus {
    let section = section.to_lowercase();
    let words_haystack = match results_line {
        Some(line) => line.to_lowercase(),
        None => section.clone(),
    };

    let has_any = |haystack: &str, needles: &[&str]| {
        needles
            .iter()
            .any(|needle| haystack.contains(needle.to_lowercase().as_str()))
    };

    if has_any(&section, cues.low_annotations) || has_any(&words_haystack, cues.low_words) {
        TestStatus::Low
    } else if has_any(&section, cues.high_annotations) || has_any(&words_haystack, cues.high_words) {
        TestStatus::High
    } else {
        TestStatus::Normal
    }
}
