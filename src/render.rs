use anyhow::Result;

use crate::parser::fields::Field;
use crate::parser::Hadith;

/// Serialize records as a pretty JSON array.
pub fn to_json(hadiths: &[Hadith]) -> Result<String> {
    Ok(serde_json::to_string_pretty(hadiths)?)
}

/// Render records as the hadith-card markup the web frontend consumes.
///
/// Field spans use the canonical Arabic labels in a fixed order; the info
/// block is omitted entirely when no field survived with a value. Values are
/// emitted verbatim — the upstream fragment is already markup.
pub fn to_html(hadiths: &[Hadith]) -> String {
    let mut out = String::new();

    for hadith in hadiths {
        out.push_str("<div class='hadith-card'>");
        out.push_str("<div class='hadith-text'>");
        out.push_str(&hadith.body);
        out.push_str("</div>");

        let spans: Vec<String> = Field::ALL
            .iter()
            .filter(|&&field| !hadith.field(field).is_empty())
            .map(|&field| {
                format!(
                    "<span><strong>{}:</strong> {}</span>",
                    field.label(),
                    hadith.field(field)
                )
            })
            .collect();

        if !spans.is_empty() {
            out.push_str("<div class='hadith-info'>");
            out.push_str(&spans.concat());
            out.push_str("</div>");
        }

        out.push_str("</div>");
    }

    out
}

// ── Tests ──
