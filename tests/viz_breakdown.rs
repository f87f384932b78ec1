// tests/viz_breakdown.rs
use revscope::error::Error;
use revscope::sentiment::Sentiment;
use revscope::store::DataSet;
use revscope::viz::{self, XValue};

fn results(rows: &[(&str, &str)]) -> DataSet {
    DataSet {
        headers: vec!["Star_Rating".into(), "Sentiment".into()],
        rows: rows.iter()
            .map(|(stars, label)| vec![Some(stars.to_string()), Some(label.to_string())])
            .collect(),
    }
}

fn sample() -> DataSet {
    results(&[
        ("5.0 out of 5 stars", "Positive"),
        ("5.0 out of 5 stars", "Positive"),
        ("1.0 out of 5 stars", "Negative"),
        ("3.0 out of 5 stars", "Neutral"),
    ])
}

#[test]
fn pie_shares_sum_to_one_hundred() {
    let b = viz::pie_breakdown(&sample()).unwrap();
    assert_eq!(b.total, 4);
    let order: Vec<Sentiment> = b.slices.iter().map(|s| s.label).collect();
    assert_eq!(order, [Sentiment::Positive, Sentiment::Negative, Sentiment::Neutral]);
    assert_eq!(b.slices[0].percent, 50.0);
    let sum: f64 = b.slices.iter().map(|s| s.percent).sum();
    assert!((sum - 100.0).abs() < 1e-9);
}

#[test]
fn pie_keeps_zero_count_labels() {
    let b = viz::pie_breakdown(&results(&[("x", "Positive")])).unwrap();
    assert_eq!(b.slices[1].count, 0);
    assert_eq!(b.slices[2].percent, 0.0);
}

#[test]
fn empty_results_are_an_error() {
    let empty = results(&[]);
    assert!(matches!(viz::pie_breakdown(&empty), Err(Error::EmptyTable)));
    assert!(matches!(viz::histogram(&empty, "Star_Rating"), Err(Error::EmptyTable)));
    assert!(matches!(viz::scatter(&empty, "Star_Rating"), Err(Error::EmptyTable)));
}

#[test]
fn pie_needs_the_label_column() {
    let ds = DataSet { headers: vec!["Name".into()], rows: vec![vec![Some("a".into())]] };
    assert!(matches!(viz::pie_breakdown(&ds), Err(Error::MissingColumn(_))));
}

#[test]
fn histogram_bins_by_value_and_label() {
    let h = viz::histogram(&sample(), "Star_Rating").unwrap();
    let values: Vec<&str> = h.bins.iter().map(|b| b.value.as_str()).collect();
    assert_eq!(values, ["5.0 out of 5 stars", "1.0 out of 5 stars", "3.0 out of 5 stars"]);
    // counts in Positive, Neutral, Negative order
    assert_eq!(h.bins[0].counts, [2, 0, 0]);
    assert_eq!(h.bins[1].counts, [0, 0, 1]);
    assert_eq!(h.max_bin(), 2);
}

#[test]
fn scatter_mixes_numbers_and_categories() {
    let ds = results(&[("4.5", "Positive"), ("n/a", "Neutral"), ("1", "Negative"), ("n/a", "Positive")]);
    let sc = viz::scatter(&ds, "Star_Rating").unwrap();
    assert_eq!(sc.points.len(), 4);
    assert_eq!(sc.points[0].x, XValue::Number(4.5));
    assert_eq!(sc.points[1].x, XValue::Category { index: 0, value: "n/a".into() });
    assert_eq!(sc.points[3].x, XValue::Category { index: 0, value: "n/a".into() });
    assert_eq!(sc.categories, ["n/a"]);
    assert_eq!(viz::label_axis(sc.points[2].y), 0.0);
}

#[test]
fn unknown_column_is_reported() {
    assert!(matches!(viz::histogram(&sample(), "Colour"), Err(Error::MissingColumn(_))));
}
