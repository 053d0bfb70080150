use regex::Regex;

use super::grammar::SummaryGrammar;

/// Raw captures from one test section, borrowed from the narrative.
///
/// Each field is matched on its own; `None` means its marker was not found.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SectionFields<'a> {
    pub name: &'a str,
    pub alias: Option<&'a str>,
    pub importance: Option<&'a str>,
    pub results: Option<ResultLine<'a>>,
    pub tip: Option<&'a str>,
    pub verdict: Option<&'a str>,
    pub reference_range: Option<&'a str>,
}

/// The results line split at the separator. `line` keeps both halves.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultLine<'a> {
    pub line: &'a str,
    pub value: &'a str,
    pub explanation: Option<&'a str>,
}

pub fn extract_fields<'a>(grammar: &SummaryGrammar, section: &'a str) -> SectionFields<'a> {
    let (name, alias) = extract_name(grammar, section);

    SectionFields {
        name,
        alias,
        importance: capture_line(&grammar.importance, section),
        results: extract_results(grammar, section),
        tip: capture_line(&grammar.tip, section),
        verdict: capture_line(&grammar.verdict, section),
        reference_range: grammar
            .reference_range
            .as_ref()
            .and_then(|re| capture_line(re, section)),
    }
}

fn extract_name<'a>(grammar: &SummaryGrammar, section: &'a str) -> (&'a str, Option<&'a str>) {
    let Some(caps) = grammar.name.captures(section) else {
        return ("", None);
    };

    let name = caps.get(1).map_or("", |m| m.as_str().trim());
    let alias = caps
        .get(2)
        .map(|m| m.as_str().trim())
        .filter(|a| !a.is_empty());
    (name, alias)
}

/// First results marker followed by something on its line.
///
/// A marker with nothing but whitespace after it counts as no results line, so
/// `**Results**:` behaves the same with or without trailing spaces.
fn extract_results<'a>(grammar: &SummaryGrammar, section: &'a str) -> Option<ResultLine<'a>> {
    grammar.results.captures_iter(section).find_map(|caps| {
        let line = caps.get(1).map_or("", |m| m.as_str().trim());
        if line.is_empty() {
            return None;
        }

        Some(ResultLine {
            line,
            value: caps.get(2).map_or("", |m| m.as_str().trim()),
            explanation: caps
                .get(3)
                .map(|m| m.as_str().trim())
                .filter(|e| !e.is_empty()),
        })
    })
}

fn capture_line<'a>(re: &Regex, section: &'a str) -> Option<&'a str> {
    re.captures(section)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().trim())
}
