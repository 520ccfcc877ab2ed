/// Named metadata slots recognized in a hadith info block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Narrator,
    Authenticator,
    Book,
    Verdict,
    Page,
}

impl Field {
    pub const ALL: [Field; 5] = [
        Field::Narrator,
        Field::Authenticator,
        Field::Book,
        Field::Verdict,
        Field::Page,
    ];

    /// Canonical Arabic label, used when rendering records back to markup.
    pub fn label(self) -> &'static str {
        match self {
            Field::Narrator => "الراوي",
            Field::Authenticator => "المحدث",
            Field::Book => "المصدر",
            Field::Verdict => "خلاصة حكم المحدث",
            Field::Page => "الصفحة أو الرقم",
        }
    }
}

// Known labels in match order. Upstream wording varies, so some fields carry
// more than one label. Matched against the start of a span, never by
// containment: a value that merely mentions a label must not rebind the span.
const LABELS: &[(&str, Field)] = &[
    ("الراوي", Field::Narrator),
    ("المحدث", Field::Authenticator),
    ("المصدر", Field::Book),
    ("خلاصة حكم المحدث", Field::Verdict),
    ("خلاصة حكم الحديث", Field::Verdict),
    ("الصفحة أو الرقم", Field::Page),
    ("الرقم", Field::Page),
];

/// One optional slot per field; `None` means the label never appeared.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct FieldMap {
    narrator: Option<String>,
    authenticator: Option<String>,
    book: Option<String>,
    verdict: Option<String>,
    page: Option<String>,
}

impl FieldMap {
    pub fn set(&mut self, field: Field, value: String) {
        let slot = match field {
            Field::Narrator => &mut self.narrator,
            Field::Authenticator => &mut self.authenticator,
            Field::Book => &mut self.book,
            Field::Verdict => &mut self.verdict,
            Field::Page => &mut self.page,
        };
        *slot = Some(value);
    }

    pub fn get(&self, field: Field) -> Option<&str> {
        match field {
            Field::Narrator => self.narrator.as_deref(),
            Field::Authenticator => self.authenticator.as_deref(),
            Field::Book => self.book.as_deref(),
            Field::Verdict => self.verdict.as_deref(),
            Field::Page => self.page.as_deref(),
        }
    }
}

/// Parse metadata spans into named fields.
///
/// Two producer layouts are accepted: a span holding "label: value" text, and
/// a label-only span whose value arrives in the next span. Duplicate labels
/// overwrite (last occurrence wins); spans matching no known label are
/// ignored.
pub fn parse_spans(spans: &[String]) -> FieldMap {
    let mut map = FieldMap::default();
    let mut pending: Option<Field> = None;

    for span in spans {
        let text = span.trim();
        if text.is_empty() {
            continue;
        }

        // Adjacent-span layout: the span after a bare label is its value.
        if let Some(field) = pending.take() {
            map.set(field, text.to_string());
            continue;
        }

        match split_label(text) {
            Some((field, "")) => pending = Some(field),
            Some((field, value)) => map.set(field, value.to_string()),
            None => {}
        }
    }

    // A trailing bare label with no value span resolves to absent.
    map
}

/// Match a known label at the start of a trimmed span.
///
/// "label: value" → (field, value), splitting on the first colon only since
/// values may themselves contain colons. A bare "label" or "label:" span
/// yields an empty value.
fn split_label(text: &str) -> Option<(Field, &str)> {
    for (label, field) in LABELS {
        let Some(rest) = text.strip_prefix(label) else {
            continue;
        };
        let rest = rest.trim_start();
        if rest.is_empty() {
            return Some((*field, ""));
        }
        if let Some(value) = rest.strip_prefix(':') {
            return Some((*field, value.trim()));
        }
        // Label text followed by something other than a colon is a false hit
        // (e.g. a longer word sharing the prefix); try the remaining labels.
    }
    None
}

// ── Tests ──
