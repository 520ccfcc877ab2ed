pub mod fields;
pub mod records;
pub mod tashkeel;

use scraper::Html;
use serde::Serialize;

use fields::Field;
use records::RawRecord;
use tashkeel::{strip_tashkeel, TashkeelMode};

/// Per-call extraction configuration.
#[derive(Debug, Clone)]
pub struct ExtractOptions {
    pub tashkeel: TashkeelMode,
    /// Substituted for any field whose label never appears in a record's
    /// metadata block.
    pub missing_field_default: String,
}

impl Default for ExtractOptions {
    fn default() -> Self {
        ExtractOptions {
            tashkeel: TashkeelMode::KeepAll,
            missing_field_default: String::new(),
        }
    }
}

/// One normalized hadith record. Every field slot is populated after default
/// substitution, so consumers never deal with missing keys.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Hadith {
    pub body: String,
    pub narrator: String,
    pub authenticator: String,
    pub book: String,
    pub verdict: String,
    pub page: String,
}

impl Hadith {
    pub fn field(&self, field: Field) -> &str {
        match field {
            Field::Narrator => &self.narrator,
            Field::Authenticator => &self.authenticator,
            Field::Book => &self.book,
            Field::Verdict => &self.verdict,
            Field::Page => &self.page,
        }
    }
}

/// Three-stage pipeline: fragment → raw (body, spans) pairs → named fields →
/// normalized records.
///
/// Malformed markup degrades to whatever the parser recovers; an empty or
/// recordless fragment yields an empty vec, never an error.
pub fn extract_hadiths(fragment: &str, opts: &ExtractOptions) -> Vec<Hadith> {
    if fragment.trim().is_empty() {
        return Vec::new();
    }
    let doc = Html::parse_fragment(fragment);
    records::collect(&doc)
        .into_iter()
        .map(|raw| materialize(raw, opts))
        .collect()
}

fn materialize(raw: RawRecord, opts: &ExtractOptions) -> Hadith {
    let body = if opts.tashkeel.strips_body() {
        strip_tashkeel(&raw.body)
    } else {
        raw.body
    };

    let map = fields::parse_spans(&raw.spans);
    let value = |field: Field| -> String {
        match map.get(field) {
            Some(v) if opts.tashkeel.strips_fields() => strip_tashkeel(v),
            Some(v) => v.to_string(),
            None => opts.missing_field_default.clone(),
        }
    };

    Hadith {
        narrator: value(Field::Narrator),
        authenticator: value(Field::Authenticator),
        book: value(Field::Book),
        verdict: value(Field::Verdict),
        page: value(Field::Page),
        body,
    }
}

// ── Tests ──
