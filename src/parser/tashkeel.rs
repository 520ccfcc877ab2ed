use std::sync::LazyLock;

use clap::ValueEnum;
use regex::Regex;

// Arabic combining diacritics: honorifics U+0617-U+061A, harakat U+064B-U+0652.
static TASHKEEL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\u{0617}-\u{061A}\u{064B}-\u{0652}]").unwrap());

/// Which parts of a record get their diacritics stripped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum TashkeelMode {
    /// Leave all text untouched
    KeepAll,
    /// Strip the hadith body only
    StripBody,
    /// Strip metadata field values only
    StripFields,
    /// Strip body and field values
    StripAll,
}

impl TashkeelMode {
    pub fn strips_body(self) -> bool {
        matches!(self, TashkeelMode::StripBody | TashkeelMode::StripAll)
    }

    pub fn strips_fields(self) -> bool {
        matches!(self, TashkeelMode::StripFields | TashkeelMode::StripAll)
    }
}

/// Remove tashkeel marks; every other codepoint survives in place.
pub fn strip_tashkeel(text: &str) -> String {
    TASHKEEL_RE.replace_all(text, "").into_owned()
}

// ── Tests ──
