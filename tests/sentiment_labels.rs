// tests/sentiment_labels.rs
use revscope::config::consts::SENTIMENT_COLUMN;
use revscope::error::Error;
use revscope::sentiment::{self, classify, LabelCounts, Scorer, Sentiment, Thresholds, VaderScorer};
use revscope::store::DataSet;

#[test]
fn thresholds_are_exclusive() {
    assert_eq!(classify(0.51), Sentiment::Positive);
    assert_eq!(classify(0.5), Sentiment::Neutral);
    assert_eq!(classify(0.0), Sentiment::Neutral);
    assert_eq!(classify(-0.5), Sentiment::Neutral);
    assert_eq!(classify(-0.51), Sentiment::Negative);
}

#[test]
fn vader_scores_clear_cases() {
    let v = VaderScorer;
    assert!(v.compound("Excellent product, I love it, absolutely wonderful!") > 0.5);
    assert!(v.compound("Terrible quality, it broke and I hate it.") < -0.5);
    assert_eq!(v.compound(""), 0.0);
    assert_eq!(v.compound("   "), 0.0);
}

#[test]
fn end_to_end_labels() {
    let t = Thresholds::default();
    let v = VaderScorer;
    assert_eq!(
        sentiment::label_text(&v, &t, "This product is wonderful and exceeded every expectation"),
        Sentiment::Positive
    );
    assert_eq!(sentiment::label_text(&v, &t, ""), Sentiment::Neutral);
}

/// Fixed scores keyed by text, so table handling is tested apart from the lexicon.
struct Canned;

impl Scorer for Canned {
    fn compound(&self, text: &str) -> f64 {
        match text {
            "good" => 0.8,
            "bad" => -0.9,
            "edge" => 0.5,
            _ => 0.0,
        }
    }
}

fn table() -> DataSet {
    DataSet {
        headers: vec!["Name".into(), "Long_Review".into()],
        rows: vec![
            vec![Some("a".into()), Some("good".into())],
            vec![Some("b".into()), Some("bad".into())],
            vec![Some("c".into()), Some("edge".into())],
            vec![Some("d".into()), None],
        ],
    }
}

#[test]
fn analyze_appends_one_label_per_row() {
    let out = sentiment::analyze(&table(), "Long_Review", &Canned, &Thresholds::default(), None).unwrap();
    assert_eq!(out.headers.last().map(String::as_str), Some(SENTIMENT_COLUMN));
    assert_eq!(out.row_count(), 4);

    let labels: Vec<Option<&str>> = out.column(SENTIMENT_COLUMN).unwrap();
    assert_eq!(labels, vec![Some("Positive"), Some("Negative"), Some("Neutral"), Some("Neutral")]);

    let c = LabelCounts::from_dataset(&out).unwrap();
    assert_eq!((c.positive, c.neutral, c.negative, c.other), (1, 2, 1, 0));
}

#[test]
fn analyze_rejects_unknown_column_and_empty_table() {
    let err = sentiment::analyze(&table(), "Body", &Canned, &Thresholds::default(), None).unwrap_err();
    assert!(matches!(err, Error::MissingColumn(c) if c == "Body"));

    let empty = DataSet::new(vec!["Long_Review".into()]);
    let err = sentiment::analyze(&empty, "Long_Review", &Canned, &Thresholds::default(), None).unwrap_err();
    assert!(matches!(err, Error::MissingPrerequisite(_)));
}
