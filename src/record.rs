// src/record.rs
//
// One aligned review row. Rows have no identity key: within an extraction
// they correspond to each other by position only.

use crate::config::consts::{REVIEW_HEADERS, SEPARATOR_CELL};
use crate::store::{Cell, DataSet};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Date,
    StarRating,
    ShortReview,
    LongReview,
}

impl Field {
    pub const ALL: [Field; 5] = [Field::Name, Field::Date, Field::StarRating, Field::ShortReview, Field::LongReview];

    /// Column header in exported tables.
    pub fn header(&self) -> &'static str {
        REVIEW_HEADERS[self.index()]
    }

    #[inline]
    pub fn index(&self) -> usize {
        match self {
            Field::Name => 0,
            Field::Date => 1,
            Field::StarRating => 2,
            Field::ShortReview => 3,
            Field::LongReview => 4,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ReviewRecord {
    pub reviewer_name: Option<String>,
    pub date: Option<String>,
    pub star_rating: Option<String>,
    pub short_review: Option<String>,
    pub long_review: Option<String>,
}

impl ReviewRecord {
    /// The all-dash row marking a boundary between extraction batches.
    pub fn separator() -> Self {
        let dash = || Some(s!(SEPARATOR_CELL));
        Self {
            reviewer_name: dash(),
            date: dash(),
            star_rating: dash(),
            short_review: dash(),
            long_review: dash(),
        }
    }

    pub fn is_separator(&self) -> bool {
        Field::ALL.iter().all(|f| self.get(*f) == Some(SEPARATOR_CELL))
    }

    pub fn get(&self, field: Field) -> Option<&str> {
        match field {
            Field::Name => self.reviewer_name.as_deref(),
            Field::Date => self.date.as_deref(),
            Field::StarRating => self.star_rating.as_deref(),
            Field::ShortReview => self.short_review.as_deref(),
            Field::LongReview => self.long_review.as_deref(),
        }
    }

    pub fn set(&mut self, field: Field, value: Option<String>) {
        let slot = match field {
            Field::Name => &mut self.reviewer_name,
            Field::Date => &mut self.date,
            Field::StarRating => &mut self.star_rating,
            Field::ShortReview => &mut self.short_review,
            Field::LongReview => &mut self.long_review,
        };
        *slot = value;
    }

    pub fn is_all_missing(&self) -> bool {
        Field::ALL.iter().all(|f| self.get(*f).is_none())
    }

    pub fn to_cells(&self) -> Vec<Cell> {
        Field::ALL.iter().map(|f| self.get(*f).map(String::from)).collect()
    }
}

/// Headers for a review table, in export order.
pub fn review_headers() -> Vec<String> {
    Field::ALL.iter().map(|f| s!(f.header())).collect()
}

/// Build a review table from records.
pub fn to_dataset(records: &[ReviewRecord]) -> DataSet {
    DataSet {
        headers: review_headers(),
        rows: records.iter().map(ReviewRecord::to_cells).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn headers_follow_field_order() {
        assert_eq!(review_headers(), ["Name", "Date", "Star_Rating", "Short_Review", "Long_Review"]);
        for (i, f) in Field::ALL.iter().enumerate() {
            assert_eq!(f.index(), i);
        }
        assert_eq!(Field::LongReview.header(), "Long_Review");
    }

    #[test]
    fn cells_line_up_with_headers() {
        let r = ReviewRecord { star_rating: Some(s!("4.0 out of 5 stars")), ..ReviewRecord::default() };
        let ds = to_dataset(&[r]);
        let ix = ds.column_index(Field::StarRating.header()).unwrap();
        assert_eq!(ds.rows[0][ix].as_deref(), Some("4.0 out of 5 stars"));
    }
}
