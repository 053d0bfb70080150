//! Marker vocabularies, one table per narrative language.
//!
//! A table is plain data: glyphs, bold labels, status cue words and localized
//! defaults. [`SummaryGrammar::compile`](super::grammar::SummaryGrammar::compile)
//! turns it into patterns; the pipeline itself never branches on language.

use crate::models::Language;

use super::defaults::{SummaryDefaults, ENGLISH_DEFAULTS, HINDI_DEFAULTS};

/// Emoji glyph followed by a bold label, e.g. `📊 **Results**:`.
///
/// `labels` lists accepted spellings of the same label; matching is
/// case-insensitive on the label and exact on the glyph.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldMarker {
    pub glyph: &'static str,
    pub labels: &'static [&'static str],
}

/// Textual cues the status classifier looks for.
///
/// Annotations are searched in the whole section, words in the results line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusCues {
    pub low_annotations: &'static [&'static str],
    pub low_words: &'static [&'static str],
    pub high_annotations: &'static [&'static str],
    pub high_words: &'static [&'static str],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MarkerTable {
    /// Short code used in logs ("en", "hi").
    pub code: &'static str,
    /// Heading that opens each test section, written after `##`.
    pub heading: FieldMarker,
    pub importance: FieldMarker,
    pub results: FieldMarker,
    pub tip: FieldMarker,
    pub verdict: FieldMarker,
    /// Only richer grammars carry a normal-range line.
    pub reference_range: Option<FieldMarker>,
    /// Glyph preceding the quoted closing remark.
    pub final_tip_glyph: &'static str,
    /// Keywords introducing the nickname parenthetical, e.g. `(aka "Hb")`.
    pub alias_keywords: &'static [&'static str],
    /// Splits the results line into result and explanation.
    pub result_separator: char,
    pub status: StatusCues,
    pub defaults: SummaryDefaults,
}

pub const ENGLISH_MARKERS: MarkerTable = MarkerTable {
    code: "en",
    heading: FieldMarker {
        glyph: "🧪",
        labels: &["Test"],
    },
    importance: FieldMarker {
        glyph: "🧠",
        labels: &["Why this test matters"],
    },
    results: FieldMarker {
        glyph: "📊",
        labels: &["Results"],
    },
    tip: FieldMarker {
        glyph: "🩺",
        labels: &["Tiny Tip"],
    },
    verdict: FieldMarker {
        glyph: "🎯",
        labels: &["Verdict & Vibes"],
    },
    reference_range: None,
    final_tip_glyph: "👉",
    alias_keywords: &["aka"],
    result_separator: '—',
    status: StatusCues {
        low_annotations: &["(low)"],
        low_words: &["low"],
        high_annotations: &["(high)"],
        high_words: &["high"],
    },
    defaults: ENGLISH_DEFAULTS,
};

// Nukta letters arrive decomposed (ज + U+093C), precomposed (U+095B, U+095E) or
// without the dot, depending on the model run; every spelling is listed.
pub const HINDI_MARKERS: MarkerTable = MarkerTable {
    code: "hi",
    heading: FieldMarker {
        glyph: "🧪",
        labels: &["टेस्ट", "परीक्षण"],
    },
    importance: FieldMarker {
        glyph: "🧠",
        labels: &[
            "यह टेस्ट क्यों ज़रूरी है",
            "यह टेस्ट क्यों ज़रूरी है",
            "यह टेस्ट क्यों जरूरी है",
        ],
    },
    results: FieldMarker {
        glyph: "📊",
        labels: &["परिणाम", "नतीजे"],
    },
    tip: FieldMarker {
        glyph: "🩺",
        labels: &["छोटी सी सलाह", "छोटी सलाह"],
    },
    verdict: FieldMarker {
        glyph: "🎯",
        labels: &["फ़ैसला और वाइब्स", "फ़ैसला और वाइब्स", "फैसला और वाइब्स"],
    },
    reference_range: None,
    final_tip_glyph: "👉",
    alias_keywords: &["aka", "उर्फ़", "उर्फ़", "उर्फ"],
    result_separator: '—',
    status: StatusCues {
        low_annotations: &["(low)", "(कम)"],
        low_words: &["low", "कम"],
        high_annotations: &[
            "(high)",
            "(ज़्यादा)",
            "(ज़्यादा)",
            "(ज्यादा)",
            "(अधिक)",
        ],
        high_words: &["high", "ज़्यादा", "ज़्यादा", "ज्यादा", "अधिक"],
    },
    defaults: HINDI_DEFAULTS,
};

/// Built-in marker table for a language.
pub fn markers_for(language: Language) -> &'static MarkerTable {
    match language {
        Language::English => &ENGLISH_MARKERS,
        Language::Hindi => &HINDI_MARKERS,
    }
}
