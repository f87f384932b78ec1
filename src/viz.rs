// src/viz.rs
//
// Chart data for labeled tables. Pure functions of (table, column); the GUI
// paints them in gui::components::charts, the CLI prints them.

use crate::config::consts::SENTIMENT_COLUMN;
use crate::error::{Error, Result};
use crate::sentiment::{LabelCounts, Sentiment};
use crate::store::DataSet;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ChartKind {
    None,
    Pie,
    Scatter,
    Histogram,
}

impl ChartKind {
    pub const ALL: [ChartKind; 4] = [ChartKind::None, ChartKind::Pie, ChartKind::Scatter, ChartKind::Histogram];

    pub fn label(&self) -> &'static str {
        match self {
            ChartKind::None => "None",
            ChartKind::Pie => "Pie Chart",
            ChartKind::Scatter => "Scatter Plot",
            ChartKind::Histogram => "Histogram",
        }
    }

    /// Charts that plot a user-chosen column.
    pub fn needs_column(&self) -> bool {
        matches!(self, ChartKind::Scatter | ChartKind::Histogram)
    }
}

/// Slice order of the proportion chart.
pub const PIE_ORDER: [Sentiment; 3] = [Sentiment::Positive, Sentiment::Negative, Sentiment::Neutral];

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Slice {
    pub label: Sentiment,
    pub count: usize,
    pub percent: f64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Breakdown {
    pub total: usize,
    pub slices: [Slice; 3],
}

/// Share of rows per label, over all rows. All three labels are present even
/// at zero count. An empty table is an error, not a row of NaNs.
pub fn pie_breakdown(ds: &DataSet) -> Result<Breakdown> {
    let counts = LabelCounts::from_dataset(ds)?;
    let total = counts.total();
    if total == 0 {
        return Err(Error::EmptyTable);
    }
    let slice = |label: Sentiment| {
        let count = counts.get(label);
        Slice { label, count, percent: 100.0 * count as f64 / total as f64 }
    };
    Ok(Breakdown { total, slices: PIE_ORDER.map(slice) })
}

const MISSING_BUCKET: &str = "(missing)";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Bin {
    pub value: String,
    /// Row counts per label, in `Sentiment::ALL` order.
    pub counts: [usize; 3],
}

impl Bin {
    pub fn total(&self) -> usize { self.counts.iter().sum() }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Histogram {
    pub column: String,
    pub bins: Vec<Bin>,
}

impl Histogram {
    pub fn max_bin(&self) -> usize {
        self.bins.iter().map(Bin::total).max().unwrap_or(0)
    }
}

fn labels(ds: &DataSet) -> Result<Vec<Option<Sentiment>>> {
    Ok(ds.column(SENTIMENT_COLUMN)?
        .into_iter()
        .map(|c| c.and_then(|s| s.parse().ok()))
        .collect())
}

fn label_slot(s: Sentiment) -> usize {
    match s {
        Sentiment::Positive => 0,
        Sentiment::Neutral => 1,
        Sentiment::Negative => 2,
    }
}

/// Row counts per distinct value of `column`, split by label. Bins keep the
/// order in which values first appear. Unlabeled rows are not counted.
pub fn histogram(ds: &DataSet, column: &str) -> Result<Histogram> {
    if ds.is_empty() {
        return Err(Error::EmptyTable);
    }
    let values = ds.column(column)?;
    let labels = labels(ds)?;

    let mut bins: Vec<Bin> = Vec::new();
    for (v, l) in values.iter().zip(labels) {
        let Some(l) = l else { continue };
        let key = v.unwrap_or(MISSING_BUCKET);
        let ix = match bins.iter().position(|b| b.value == key) {
            Some(ix) => ix,
            None => {
                bins.push(Bin { value: s!(key), counts: [0; 3] });
                bins.len() - 1
            }
        };
        bins[ix].counts[label_slot(l)] += 1;
    }
    Ok(Histogram { column: s!(column), bins })
}

/// X position of a scatter point: numeric when the cell parses, otherwise the
/// index of the category in first-appearance order.
#[derive(Clone, Debug, PartialEq)]
pub enum XValue {
    Number(f64),
    Category { index: usize, value: String },
}

#[derive(Clone, Debug, PartialEq)]
pub struct ScatterPoint {
    pub x: XValue,
    pub y: Sentiment,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Scatter {
    pub column: String,
    pub points: Vec<ScatterPoint>,
    /// Distinct non-numeric values, indexed by `XValue::Category::index`.
    pub categories: Vec<String>,
}

/// One point per labeled row: chosen field on x, label on y.
pub fn scatter(ds: &DataSet, column: &str) -> Result<Scatter> {
    if ds.is_empty() {
        return Err(Error::EmptyTable);
    }
    let values = ds.column(column)?;
    let labels = labels(ds)?;

    let mut categories: Vec<String> = Vec::new();
    let mut points = Vec::with_capacity(values.len());
    for (v, l) in values.iter().zip(labels) {
        let Some(y) = l else { continue };
        let raw = v.unwrap_or(MISSING_BUCKET);
        let x = match raw.trim().parse::<f64>() {
            Ok(n) if n.is_finite() => XValue::Number(n),
            _ => {
                let index = categories.iter().position(|c| c == raw).unwrap_or_else(|| {
                    categories.push(s!(raw));
                    categories.len() - 1
                });
                XValue::Category { index, value: s!(raw) }
            }
        };
        points.push(ScatterPoint { x, y });
    }
    Ok(Scatter { column: s!(column), points, categories })
}

/// Y position of a label on the scatter plot.
pub fn label_axis(s: Sentiment) -> f64 {
    match s {
        Sentiment::Negative => 0.0,
        Sentiment::Neutral => 1.0,
        Sentiment::Positive => 2.0,
    }
}

pub(crate) fn slot_label(slot: usize) -> Sentiment {
    Sentiment::ALL[slot]
}
