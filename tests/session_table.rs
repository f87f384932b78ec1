// tests/session_table.rs
use revscope::record::ReviewRecord;
use revscope::session::SessionTable;

fn review(name: &str) -> ReviewRecord {
    ReviewRecord { reviewer_name: Some(name.into()), ..ReviewRecord::default() }
}

#[test]
fn batches_are_separated_but_not_led() {
    let mut t = SessionTable::new();

    let first = t.append(vec![review("a"), review("b")]);
    assert!(!first.separated);
    assert_eq!(first.total_rows, 2);

    let second = t.append(vec![review("c")]);
    assert!(second.separated);
    assert_eq!(second.added, 1);
    assert_eq!(second.total_rows, 4);

    t.append(vec![review("d")]);
    assert_eq!(t.batches(), 3);
    assert_eq!(t.separator_count(), 2);
    assert!(t.rows()[2].is_separator());
    assert_eq!(t.rows()[3].reviewer_name.as_deref(), Some("c"));
}

#[test]
fn empty_batch_still_gets_a_separator() {
    let mut t = SessionTable::new();
    t.append(vec![review("a")]);
    let out = t.append(Vec::new());
    assert!(out.separated);
    assert_eq!(out.added, 0);
    assert_eq!(t.len(), 2);
    assert_eq!(t.separator_count(), 1);
}

#[test]
fn reset_starts_over() {
    let mut t = SessionTable::new();
    t.append(vec![review("a")]);
    t.append(vec![review("b")]);
    t.reset();
    assert!(t.is_empty());
    assert_eq!(t.batches(), 0);

    // first batch after a reset is not separated
    assert!(!t.append(vec![review("c")]).separated);
    assert_eq!(t.snapshot().headers, ["Name", "Date", "Star_Rating", "Short_Review", "Long_Review"]);
}

#[test]
fn snapshot_renders_separator_as_dashes() {
    let mut t = SessionTable::new();
    t.append(vec![review("a")]);
    t.append(vec![review("b")]);
    let ds = t.snapshot();
    assert_eq!(ds.row_count(), 3);
    assert!(ds.rows[1].iter().all(|c| c.as_deref() == Some("-")));
    assert_eq!(ds.rows[0][1], None);
}

#[test]
fn table_view_tracks_appends_and_reset() {
    let mut t = SessionTable::new();
    assert_eq!(t.table().row_count(), 0);
    assert_eq!(t.table().header_count(), 5);

    t.append(vec![review("a")]);
    t.append(vec![review("b"), review("c")]);
    assert_eq!(t.table().row_count(), t.len());
    assert_eq!(t.table(), &t.snapshot());
    assert_eq!(t.table().rows[3][0].as_deref(), Some("c"));

    t.reset();
    assert_eq!(t.table().row_count(), 0);
    assert_eq!(t.table().header_count(), 5);
}
