// tests/export_csv.rs
use std::fs;
use std::path::PathBuf;

use revscope::config::options::{ExportFormat, ExportOptions};
use revscope::file;
use revscope::record::ReviewRecord;
use revscope::sentiment::{self, Thresholds, VaderScorer};
use revscope::session::SessionTable;
use revscope::store;

fn tmp_dir(name: &str) -> PathBuf {
    let mut p = std::env::temp_dir();
    p.push(format!("revscope_export_{}", name));
    let _ = fs::remove_dir_all(&p);
    fs::create_dir_all(&p).unwrap();
    p
}

fn review(name: &str, body: &str) -> ReviewRecord {
    ReviewRecord {
        reviewer_name: Some(name.into()),
        date: Some("1 May 2024".into()),
        star_rating: Some("4.0 out of 5 stars".into()),
        short_review: None,
        long_review: Some(body.into()),
    }
}

fn two_batches() -> SessionTable {
    let mut t = SessionTable::new();
    t.append(vec![review("A", "Works, mostly")]);
    t.append(vec![review("B", "Fine")]);
    t
}

#[test]
fn extracted_file_has_fixed_header_order_and_dash_separator() {
    let export = ExportOptions { out_dir: tmp_dir("extracted"), ..ExportOptions::default() };
    let path = file::export_extracted(&export, &two_batches().snapshot()).unwrap();
    assert!(path.ends_with("Amazon_Extracted_Data.csv"));

    let text = fs::read_to_string(&path).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines[0], "Name,Date,Star_Rating,Short_Review,Long_Review");
    assert_eq!(lines[1], "A,1 May 2024,4.0 out of 5 stars,,\"Works, mostly\"");
    assert_eq!(lines[2], "-,-,-,-,-");
    assert_eq!(lines.len(), 4);
}

#[test]
fn tsv_without_headers() {
    let export = ExportOptions {
        format: ExportFormat::Tsv,
        include_headers: false,
        out_dir: tmp_dir("tsv"),
    };
    let path = file::export_extracted(&export, &two_batches().snapshot()).unwrap();
    assert!(path.ends_with("Amazon_Extracted_Data.tsv"));
    let text = fs::read_to_string(&path).unwrap();
    assert!(text.starts_with("A\t1 May 2024\t"));
}

#[test]
fn results_file_reads_back_with_labels() {
    let export = ExportOptions { out_dir: tmp_dir("results"), ..ExportOptions::default() };
    let ds = two_batches().snapshot();
    let labeled = sentiment::analyze(&ds, "Long_Review", &VaderScorer, &Thresholds::default(), None).unwrap();

    let path = file::export_results(&export, &labeled).unwrap();
    assert!(path.ends_with("Sentiment_Analysis_Results.csv"));

    let back = store::load_path(&path).unwrap().dataset;
    assert_eq!(back.headers.last().map(String::as_str), Some("Sentiment"));
    assert_eq!(back.row_count(), 3);
    // separator row body "-" carries no sentiment
    assert_eq!(back.rows[1][5].as_deref(), Some("Neutral"));
}

#[test]
fn export_creates_missing_directories() {
    let base = tmp_dir("nested");
    let export = ExportOptions { out_dir: base.join("a").join("b"), ..ExportOptions::default() };
    let path = file::export_extracted(&export, &two_batches().snapshot()).unwrap();
    assert!(path.exists());
}
