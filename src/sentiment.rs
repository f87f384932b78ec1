// src/sentiment.rs
//
// Three-way labelling on top of a compound polarity score in [-1, 1].
// The scorer only produces the score; the thresholds belong to the caller.

use std::fmt;
use std::str::FromStr;

use vader_sentiment::SentimentIntensityAnalyzer;

use crate::config::consts::SENTIMENT_COLUMN;
use crate::config::options::AnalysisOptions;
use crate::error::{Error, Result};
use crate::progress::Progress;
use crate::store::DataSet;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Sentiment {
    Positive,
    Neutral,
    Negative,
}

impl Sentiment {
    pub const ALL: [Sentiment; 3] = [Sentiment::Positive, Sentiment::Neutral, Sentiment::Negative];

    pub fn as_str(&self) -> &'static str {
        match self {
            Sentiment::Positive => "Positive",
            Sentiment::Neutral => "Neutral",
            Sentiment::Negative => "Negative",
        }
    }
}

impl fmt::Display for Sentiment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for Sentiment {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim() {
            "Positive" => Ok(Sentiment::Positive),
            "Neutral" => Ok(Sentiment::Neutral),
            "Negative" => Ok(Sentiment::Negative),
            other => Err(format!("not a sentiment label: {other:?}")),
        }
    }
}

/// Compound polarity for a text. Empty text stands in for a missing value.
pub trait Scorer {
    fn compound(&self, text: &str) -> f64;
}

/// VADER lexicon scorer.
#[derive(Clone, Copy, Debug, Default)]
pub struct VaderScorer;

impl Scorer for VaderScorer {
    fn compound(&self, text: &str) -> f64 {
        if text.trim().is_empty() {
            return 0.0;
        }
        let analyzer = SentimentIntensityAnalyzer::new();
        analyzer
            .polarity_scores(text)
            .get("compound")
            .copied()
            .unwrap_or(0.0)
    }
}

/// Both bounds are exclusive: a score sitting exactly on a threshold is Neutral.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Thresholds {
    pub positive: f64,
    pub negative: f64,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self { positive: 0.5, negative: -0.5 }
    }
}

impl Thresholds {
    pub fn from_options(o: &AnalysisOptions) -> Self {
        Self { positive: o.positive_threshold, negative: o.negative_threshold }
    }

    pub fn classify(&self, score: f64) -> Sentiment {
        if score > self.positive {
            Sentiment::Positive
        } else if score < self.negative {
            Sentiment::Negative
        } else {
            Sentiment::Neutral
        }
    }
}

/// Label with the default thresholds (> 0.5 Positive, < -0.5 Negative).
pub fn classify(score: f64) -> Sentiment {
    Thresholds::default().classify(score)
}

pub fn label_text(scorer: &dyn Scorer, thresholds: &Thresholds, text: &str) -> Sentiment {
    thresholds.classify(scorer.compound(text))
}

/// Copy of `ds` with a `Sentiment` column labelling `column`. Missing cells
/// are scored as empty text.
pub fn analyze(
    ds: &DataSet,
    column: &str,
    scorer: &dyn Scorer,
    thresholds: &Thresholds,
    mut progress: Option<&mut dyn Progress>,
) -> Result<DataSet> {
    if ds.is_empty() {
        return Err(Error::MissingPrerequisite("no data to analyze; extract or load reviews first"));
    }
    let texts = ds.column(column)?;

    if let Some(p) = progress.as_deref_mut() {
        p.log(&format!("Scoring {} row(s) of {column}…", texts.len()));
    }

    let labels: Vec<Option<String>> = texts.iter()
        .map(|t| Some(s!(label_text(scorer, thresholds, t.unwrap_or("")).as_str())))
        .collect();

    let mut out = ds.clone();
    out.push_column(SENTIMENT_COLUMN, labels);

    let counts = LabelCounts::from_dataset(&out)?;
    logf!(
        "Sentiment: column={column} rows={} positive={} neutral={} negative={}",
        out.row_count(), counts.positive, counts.neutral, counts.negative
    );
    Ok(out)
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LabelCounts {
    pub positive: usize,
    pub neutral: usize,
    pub negative: usize,
    /// Cells that are missing or hold something other than a label.
    pub other: usize,
}

impl LabelCounts {
    pub fn from_dataset(ds: &DataSet) -> Result<Self> {
        let mut c = LabelCounts::default();
        for cell in ds.column(SENTIMENT_COLUMN)? {
            match cell.map(str::parse::<Sentiment>) {
                Some(Ok(Sentiment::Positive)) => c.positive += 1,
                Some(Ok(Sentiment::Neutral)) => c.neutral += 1,
                Some(Ok(Sentiment::Negative)) => c.negative += 1,
                _ => c.other += 1,
            }
        }
        Ok(c)
    }

    pub fn get(&self, s: Sentiment) -> usize {
        match s {
            Sentiment::Positive => self.positive,
            Sentiment::Neutral => self.neutral,
            Sentiment::Negative => self.negative,
        }
    }

    pub fn total(&self) -> usize {
        self.positive + self.neutral + self.negative + self.other
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_round_trip_through_text() {
        for s in Sentiment::ALL {
            assert_eq!(s.as_str().parse::<Sentiment>(), Ok(s));
        }
        assert!("positive".parse::<Sentiment>().is_err());
    }

    #[test]
    fn custom_thresholds_shift_the_band() {
        let t = Thresholds { positive: 0.05, negative: -0.05 };
        assert_eq!(t.classify(0.1), Sentiment::Positive);
        assert_eq!(t.classify(0.05), Sentiment::Neutral);
        assert_eq!(t.classify(-0.06), Sentiment::Negative);
    }
}
