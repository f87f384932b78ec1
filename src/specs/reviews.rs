// src/specs/reviews.rs
//
// Review listing page → review records.
//
// Two alignment strategies:
// - Flat: each field is collected by its own whole-document scan, then every
//   list is padded with missing entries to the longest one and rows are
//   zipped by position. If one review lacks a field, every later row for that
//   field shifts up by one. Kept as the default so row counts stay
//   reproducible against captured pages.
// - Grouped: find each review container first and run the field rules inside
//   it, so a missing field stays missing in its own row.

use scraper::{ElementRef, Html, Selector};

use crate::config::consts::{MISSING, STAR_MARKER};
use crate::config::options::{ExtractMode, ExtractOptions};
use crate::core::sanitize::{after_last, strip_phrase};
use crate::record::{Field, ReviewRecord};

/// How a matched node's text becomes a field value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Cleanup {
    /// Stripped text as-is (may be empty).
    Plain,
    /// Remove the configured localized date prefix.
    StripDatePrefix,
    /// Keep only if the text carries the star marker; otherwise missing.
    RequireMarker,
    /// Text after the star marker; empty results are dropped.
    AfterMarker,
    /// Review body, rebuilt across an expander when present; empty dropped.
    BodyText,
}

#[derive(Clone, Copy, Debug)]
pub struct FieldRule {
    pub field: Field,
    pub selector: &'static str,
    pub cleanup: Cleanup,
}

/// One rule per field, in column order.
pub const FIELD_RULES: [FieldRule; 5] = [
    FieldRule { field: Field::Name,        selector: "span.a-profile-name", cleanup: Cleanup::Plain },
    FieldRule { field: Field::Date,        selector: "span.review-date",    cleanup: Cleanup::StripDatePrefix },
    FieldRule { field: Field::StarRating,  selector: "span.a-icon-alt",     cleanup: Cleanup::RequireMarker },
    FieldRule { field: Field::ShortReview, selector: "a.review-title",      cleanup: Cleanup::AfterMarker },
    FieldRule { field: Field::LongReview,  selector: "span[class*='a-size-base'][class*='review-text']", cleanup: Cleanup::BodyText },
];

/// Per-review wrappers, most specific first.
pub const CONTAINER_SELECTORS: [&str; 2] = ["div[data-hook='review']", "div.review"];

const EXPANDER_CLASS: &str = "a-expander-header";

/// What a rule made of one matched node.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    Value(String),
    /// Counts as an entry, but holds no value.
    Missing,
    /// Not an entry at all.
    Discard,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Extraction {
    pub records: Vec<ReviewRecord>,
    /// Mode that actually produced the records (Grouped falls back to Flat).
    pub mode: Option<ExtractMode>,
    /// Entries found per field before padding, in `Field::ALL` order.
    pub field_counts: [usize; 5],
}

impl Extraction {
    /// Flat scans disagreed on how many reviews there are.
    pub fn counts_mismatch(&self) -> bool {
        self.field_counts.iter().any(|&c| c != self.field_counts[0])
    }
}

struct CompiledRule {
    rule: FieldRule,
    selector: Option<Selector>,
}

fn compile_rules() -> Vec<CompiledRule> {
    FIELD_RULES.iter()
        .map(|rule| {
            let selector = Selector::parse(rule.selector).ok();
            if selector.is_none() {
                loge!("Extract: bad selector for {:?}: {}", rule.field, rule.selector);
            }
            CompiledRule { rule: *rule, selector }
        })
        .collect()
}

/// Text of all descendant text nodes, each trimmed, empty ones skipped,
/// concatenated without separators.
pub fn stripped_text(el: ElementRef) -> String {
    el.text().map(str::trim).filter(|t| !t.is_empty()).collect()
}

fn has_expander_sibling(el: ElementRef) -> bool {
    el.next_siblings()
        .filter_map(ElementRef::wrap)
        .any(|sib| {
            sib.value().name() == "div"
                && sib.value().attr("class").is_some_and(|c| c.contains(EXPANDER_CLASS))
        })
}

/// Review body. Prefer the first nested span; when the body is cut by a
/// "read more" expander, stitch the container's own text and its span
/// children back together in document order.
fn body_text(el: ElementRef) -> String {
    if has_expander_sibling(el) {
        let parts: Vec<String> = el.children()
            .filter_map(|child| {
                if let Some(t) = child.value().as_text() {
                    return Some(t.trim().to_string());
                }
                let child_el = ElementRef::wrap(child)?;
                (child_el.value().name() == "span").then(|| stripped_text(child_el))
            })
            .filter(|p| !p.is_empty())
            .collect();
        return parts.join(" ");
    }

    let span = Selector::parse("span").ok()
        .and_then(|sel| el.select(&sel).next());
    match span {
        Some(inner) => stripped_text(inner),
        None => stripped_text(el),
    }
}

/// Apply one rule's cleanup to a matched node.
pub fn apply_cleanup(cleanup: Cleanup, el: ElementRef, opts: &ExtractOptions) -> Outcome {
    match cleanup {
        Cleanup::Plain => Outcome::Value(stripped_text(el)),
        Cleanup::StripDatePrefix => Outcome::Value(strip_phrase(&stripped_text(el), &opts.date_prefix)),
        Cleanup::RequireMarker => {
            let text = stripped_text(el);
            if text.contains(STAR_MARKER) { Outcome::Value(text) } else { Outcome::Missing }
        }
        Cleanup::AfterMarker => {
            let text = after_last(&stripped_text(el), STAR_MARKER);
            if text.is_empty() { Outcome::Discard } else { Outcome::Value(text) }
        }
        Cleanup::BodyText => {
            let text = body_text(el);
            if text.is_empty() { Outcome::Discard } else { Outcome::Value(text) }
        }
    }
}

/// Pad every list with missing entries up to the longest. Returns that length.
pub fn pad_to_common_length(lists: &mut [Vec<Option<String>>]) -> usize {
    let max_len = lists.iter().map(Vec::len).max().unwrap_or(0);
    for list in lists.iter_mut() {
        list.resize(max_len, None);
    }
    max_len
}

/// The literal missing marker read back as "no value"; rows with no value
/// at all are dropped.
fn normalize(records: Vec<ReviewRecord>) -> Vec<ReviewRecord> {
    records.into_iter()
        .map(|mut r| {
            for f in Field::ALL {
                if r.get(f) == Some(MISSING) { r.set(f, None); }
            }
            r
        })
        .filter(|r| !r.is_all_missing())
        .collect()
}

/// Five independent whole-document scans, padded and zipped by position.
pub fn extract_flat(html: &str, opts: &ExtractOptions) -> Extraction {
    let doc = Html::parse_document(html);
    let rules = compile_rules();

    let mut lists: Vec<Vec<Option<String>>> = rules.iter()
        .map(|cr| {
            let Some(sel) = cr.selector.as_ref() else { return Vec::new() };
            doc.select(sel)
                .filter_map(|el| match apply_cleanup(cr.rule.cleanup, el, opts) {
                    Outcome::Value(v) => Some(Some(v)),
                    Outcome::Missing => Some(None),
                    Outcome::Discard => None,
                })
                .collect()
        })
        .collect();

    let mut field_counts = [0usize; 5];
    for (cr, l) in rules.iter().zip(&lists) {
        field_counts[cr.rule.field.index()] = l.len();
    }
    logd!("Extract: flat field counts {:?}", field_counts);

    let rows = pad_to_common_length(&mut lists);
    let mut columns: Vec<std::vec::IntoIter<Option<String>>> =
        lists.into_iter().map(Vec::into_iter).collect();

    let mut records = Vec::with_capacity(rows);
    for _ in 0..rows {
        let mut r = ReviewRecord::default();
        for (f, col) in Field::ALL.iter().zip(columns.iter_mut()) {
            r.set(*f, col.next().flatten());
        }
        records.push(r);
    }

    let records = normalize(records);
    Extraction { records, mode: Some(ExtractMode::Flat), field_counts }
}

/// Container-first extraction. `None` when no review container is present.
pub fn extract_grouped(html: &str, opts: &ExtractOptions) -> Option<Extraction> {
    let doc = Html::parse_document(html);
    let rules = compile_rules();

    let containers: Vec<ElementRef> = CONTAINER_SELECTORS.iter()
        .filter_map(|s| Selector::parse(s).ok())
        .map(|sel| doc.select(&sel).collect::<Vec<_>>())
        .find(|found| !found.is_empty())?;

    let mut field_counts = [0usize; 5];
    let mut records = Vec::with_capacity(containers.len());

    for container in containers {
        let mut r = ReviewRecord::default();
        for cr in rules.iter() {
            let Some(sel) = cr.selector.as_ref() else { continue };
            let value = container.select(sel)
                .find_map(|el| match apply_cleanup(cr.rule.cleanup, el, opts) {
                    Outcome::Value(v) => Some(v),
                    _ => None,
                });
            if value.is_some() { field_counts[cr.rule.field.index()] += 1; }
            r.set(cr.rule.field, value);
        }
        records.push(r);
    }
    logd!("Extract: grouped containers={} field counts {:?}", records.len(), field_counts);

    let records = normalize(records);
    Some(Extraction { records, mode: Some(ExtractMode::Grouped), field_counts })
}

/// Extract with the configured mode. Grouped mode falls back to Flat when the
/// page has no recognizable review containers.
pub fn extract(html: &str, opts: &ExtractOptions) -> Extraction {
    match opts.mode {
        ExtractMode::Flat => extract_flat(html, opts),
        ExtractMode::Grouped => extract_grouped(html, opts).unwrap_or_else(|| {
            logf!("Extract: no review containers found, falling back to flat scan");
            extract_flat(html, opts)
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn opts() -> ExtractOptions { ExtractOptions::default() }

    fn fragment(html: &str, selector: &str) -> (Html, Selector) {
        (Html::parse_fragment(html), Selector::parse(selector).unwrap())
    }

    #[test]
    fn star_rating_requires_marker() {
        let (doc, sel) = fragment(r#"<span class="a-icon-alt">4.0 out of 5 stars</span><span class="a-icon-alt">Prime</span>"#, "span.a-icon-alt");
        let got: Vec<Outcome> = doc.select(&sel).map(|el| apply_cleanup(Cleanup::RequireMarker, el, &opts())).collect();
        assert_eq!(got, vec![Outcome::Value(s!("4.0 out of 5 stars")), Outcome::Missing]);
    }

    #[test]
    fn title_drops_rating_prefix_and_empties() {
        let (doc, sel) = fragment(
            r#"<a class="review-title"><i><span class="a-icon-alt">5.0 out of 5 stars</span></i> <span>Great kettle</span></a>
               <a class="review-title"><span class="a-icon-alt">1.0 out of 5 stars</span></a>"#,
            "a.review-title",
        );
        let got: Vec<Outcome> = doc.select(&sel).map(|el| apply_cleanup(Cleanup::AfterMarker, el, &opts())).collect();
        assert_eq!(got, vec![Outcome::Value(s!("Great kettle")), Outcome::Discard]);
    }

    #[test]
    fn date_prefix_is_configurable() {
        let (doc, sel) = fragment(r#"<span class="review-date">Reviewed in the United States on 2 May 2024</span>"#, "span.review-date");
        let mut o = opts();
        o.date_prefix = s!("Reviewed in the United States on ");
        let el = doc.select(&sel).next().unwrap();
        assert_eq!(apply_cleanup(Cleanup::StripDatePrefix, el, &o), Outcome::Value(s!("2 May 2024")));
    }

    #[test]
    fn body_prefers_nested_span() {
        let (doc, sel) = fragment(
            r#"<span class="a-size-base review-text review-text-content"><span> Works well. </span></span>"#,
            FIELD_RULES[4].selector,
        );
        let el = doc.select(&sel).next().unwrap();
        assert_eq!(apply_cleanup(Cleanup::BodyText, el, &opts()), Outcome::Value(s!("Works well.")));
    }

    #[test]
    fn body_is_stitched_across_expander() {
        let html = r#"<div>
            <span class="a-size-base review-text">First part <span>middle</span> last part</span>
            <div class="a-expander-header a-expander-partial-collapse-header">Read more</div>
        </div>"#;
        let (doc, sel) = fragment(html, FIELD_RULES[4].selector);
        let el = doc.select(&sel).next().unwrap();
        assert_eq!(apply_cleanup(Cleanup::BodyText, el, &opts()), Outcome::Value(s!("First part middle last part")));
    }

    #[test]
    fn padding_extends_short_lists() {
        let mut lists = vec![
            vec![Some(s!("a")), Some(s!("b")), Some(s!("c"))],
            vec![Some(s!("x"))],
            vec![],
        ];
        assert_eq!(pad_to_common_length(&mut lists), 3);
        assert!(lists.iter().all(|l| l.len() == 3));
        assert_eq!(lists[1], vec![Some(s!("x")), None, None]);
    }

    #[test]
    fn literal_missing_marker_is_no_value() {
        let html = r#"<span class="a-profile-name">N/A</span><span class="review-date">N/A</span>"#;
        let out = extract_flat(html, &opts());
        assert!(out.records.is_empty());
        assert_eq!(out.field_counts, [1, 1, 0, 0, 0]);
    }
}
