use super::grammar::SummaryGrammar;

/// Cut the narrative into one fragment per test heading.
///
/// A fragment runs from the end of its heading marker to the start of the next
/// one (or end of text). Text before the first heading is not a test.
pub fn split_sections<'a>(grammar: &SummaryGrammar, text: &'a str) -> Vec<&'a str> {
    let markers: Vec<_> = grammar.heading.find_iter(text).collect();

    markers
        .iter()
        .enumerate()
        .map(|(i, marker)| {
            let end = markers.get(i + 1).map_or(text.len(), |next| next.start());
            &text[marker.end()..end]
        })
        .collect()
}

/// First quoted phrase after the final-tip glyph, searched over the whole text.
pub fn extract_final_tip(grammar: &SummaryGrammar, text: &str) -> String {
    grammar
        .final_tip
        .captures(text)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().trim().to_string())
        .unwrap_or_default()
}
