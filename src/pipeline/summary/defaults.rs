//! Fallback literals used when a narrative omits a field.
//!
//! Kept in one place so tests assert against names, not repeated strings.

/// Glyph shown for every test. The narrative grammar carries no per-test icon.
pub const DEFAULT_ICON: &str = "🧪";

pub const EN_NO_READING: &str = "no reading available";
pub const EN_NOT_SPECIFIED: &str = "not specified";

pub const HI_NO_READING: &str = "कोई रीडिंग उपलब्ध नहीं";
pub const HI_NOT_SPECIFIED: &str = "निर्दिष्ट नहीं";

/// Localized values substituted for missing or empty fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SummaryDefaults {
    pub icon: &'static str,
    /// Result used when a section has no results line at all.
    pub no_reading: &'static str,
    /// Result used when the results line is present but its value is blank.
    pub not_specified: &'static str,
}

pub const ENGLISH_DEFAULTS: SummaryDefaults = SummaryDefaults {
    icon: DEFAULT_ICON,
    no_reading: EN_NO_READING,
    not_specified: EN_NOT_SPECIFIED,
};

pub const HINDI_DEFAULTS: SummaryDefaults = SummaryDefaults {
    icon: DEFAULT_ICON,
    no_reading: HI_NO_READING,
    not_specified: HI_NOT_SPECIFIED,
};
