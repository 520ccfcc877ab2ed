use std::sync::LazyLock;

use scraper::{ElementRef, Html, Selector};

// Class markers the upstream puts on record and metadata blocks.
const RECORD_CLASS: &str = "hadith";
const INFO_CLASS: &str = "hadith-info";

static RECORD_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse(".hadith").unwrap());

/// One record block paired with the raw text of its metadata spans.
#[derive(Debug, Clone, PartialEq)]
pub struct RawRecord {
    pub body: String,
    pub spans: Vec<String>,
}

/// Collect (body, metadata spans) pairs from a parsed fragment, in document
/// order. Every record block yields exactly one pair; a record without an
/// info sibling gets empty spans.
pub fn collect(doc: &Html) -> Vec<RawRecord> {
    doc.select(&RECORD_SELECTOR)
        .map(|el| RawRecord {
            body: flat_text(el),
            spans: metadata_spans(el),
        })
        .collect()
}

/// Flattened text content, trimmed.
fn flat_text(el: ElementRef) -> String {
    el.text().collect::<String>().trim().to_string()
}

/// Walk forward through the record's siblings for its info block.
///
/// Non-element nodes (whitespace text, comments) and unmarked elements are
/// walked past. The walk stops at the next record block, which starts a new
/// pair.
fn metadata_spans(record: ElementRef) -> Vec<String> {
    for node in record.next_siblings() {
        let Some(el) = ElementRef::wrap(node) else {
            continue;
        };
        if has_class(el, RECORD_CLASS) {
            break;
        }
        if has_class(el, INFO_CLASS) {
            return el
                .children()
                .filter_map(ElementRef::wrap)
                .map(flat_text)
                .collect();
        }
    }
    Vec::new()
}

fn has_class(el: ElementRef, class: &str) -> bool {
    el.value().classes().any(|c| c == class)
}

// ── Tests ──

#[cfg(test)]
mod tests {
    use super::*;

    fn records(fragment: &str) -> Vec<RawRecord> {
        collect(&Html::parse_fragment(fragment))
    }

    #[test]
    fn pairs_record_with_info_sibling() {
        let recs = records(
            "<div class=\"hadith\">النص</div>\
             <div class=\"hadith-info\"><span>الراوي: أحمد</span><span>المصدر: مسند أحمد</span></div>",
        );
        assert_eq!(recs.len(), 1);
        assert_eq!(recs[0].body, "النص");
        assert_eq!(recs[0].spans, vec!["الراوي: أحمد", "المصدر: مسند أحمد"]);
    }

    #[test]
    fn whitespace_nodes_do_not_break_association() {
        let recs = records(
            "<div class=\"hadith\">النص</div>\n\n   \n\
             <div class=\"hadith-info\"><span>الراوي: أحمد</span></div>",
        );
        assert_eq!(recs.len(), 1);
        assert_eq!(recs[0].spans, vec!["الراوي: أحمد"]);
    }

    #[test]
    fn comments_and_foreign_elements_are_walked_past() {
        let recs = records(
            "<div class=\"hadith\">النص</div>\
             <!-- annotation -->\
             <div class=\"ads\">إعلان</div>\
             <div class=\"hadith-info\"><span>المحدث: مسلم</span></div>",
        );
        assert_eq!(recs.len(), 1);
        assert_eq!(recs[0].spans, vec!["المحدث: مسلم"]);
    }

    #[test]
    fn next_record_ends_the_walk() {
        // The info block belongs to the second record, not the first.
        let recs = records(
            "<div class=\"hadith\">الأول</div>\
             <div class=\"hadith\">الثاني</div>\
             <div class=\"hadith-info\"><span>الراوي: أنس</span></div>",
        );
        assert_eq!(recs.len(), 2);
        assert!(recs[0].spans.is_empty());
        assert_eq!(recs[1].spans, vec!["الراوي: أنس"]);
    }

    #[test]
    fn record_without_info_gets_empty_spans() {
        let recs = records("<div class=\"hadith\">وحيد</div>");
        assert_eq!(recs.len(), 1);
        assert!(recs[0].spans.is_empty());
    }

    #[test]
    fn info_with_no_element_children_gets_empty_spans() {
        let recs = records(
            "<div class=\"hadith\">النص</div>\
             <div class=\"hadith-info\">نص حر بلا عناصر</div>",
        );
        assert_eq!(recs.len(), 1);
        assert!(recs[0].spans.is_empty());
    }

    #[test]
    fn body_text_is_flattened_and_trimmed() {
        let recs = records("<div class=\"hadith\">  قال <a href=\"#\">النبي</a> كذا </div>");
        assert_eq!(recs[0].body, "قال النبي كذا");
    }

    #[test]
    fn multi_class_markers_still_match() {
        let recs = records(
            "<div class=\"hadith rtl\">النص</div>\
             <div class=\"hadith-info extra\"><span>الراوي: أنس</span></div>",
        );
        assert_eq!(recs.len(), 1);
        assert_eq!(recs[0].spans, vec!["الراوي: أنس"]);
    }

    #[test]
    fn document_order_is_preserved() {
        let recs = records(
            "<div class=\"hadith\">أ</div>\
             <div class=\"hadith\">ب</div>\
             <div class=\"hadith\">ج</div>",
        );
        let bodies: Vec<&str> = recs.iter().map(|r| r.body.as_str()).collect();
        assert_eq!(bodies, vec!["أ", "ب", "ج"]);
    }

    #[test]
    fn no_markers_yield_nothing() {
        assert!(records("<p>لا يوجد شيء هنا</p>").is_empty());
        assert!(records("").is_empty());
    }
}
