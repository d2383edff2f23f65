//! Date-ordered collection of trade records.

use std::ops::Deref;

use serde::{Deserialize, Serialize};

use super::record::TradeRecord;

/// An owned, date-ordered sequence of [`TradeRecord`]s.
///
/// Construction sorts ascending by date with a stable sort, so records that
/// share a date keep their input order. The container dereferences to
/// `[TradeRecord]`, which is what every aggregation and modelling function
/// accepts.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use trade_core::types::{TradeDataset, TradeRecord};
///
/// let feb = NaiveDate::from_ymd_opt(2023, 2, 1).unwrap();
/// let jan = NaiveDate::from_ymd_opt(2023, 1, 15).unwrap();
/// let dataset = TradeDataset::new(vec![
///     TradeRecord::new(feb, "USA", "China", "Electronics", 100.0, 5.0).unwrap(),
///     TradeRecord::new(jan, "USA", "China", "Electronics", 100.0, 5.0).unwrap(),
/// ]);
/// assert_eq!(dataset[0].date(), jan);
/// assert!(dataset.is_date_ordered());
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "Vec<TradeRecord>", into = "Vec<TradeRecord>")]
pub struct TradeDataset {
    records: Vec<TradeRecord>,
}

impl TradeDataset {
    /// Creates a dataset, sorting the records ascending by date.
    pub fn new(mut records: Vec<TradeRecord>) -> Self {
        records.sort_by_key(TradeRecord::date);
        Self { records }
    }

    /// Creates an empty dataset.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Returns the records as a slice.
    pub fn records(&self) -> &[TradeRecord] {
        &self.records
    }

    /// Consumes the dataset, returning the ordered records.
    pub fn into_records(self) -> Vec<TradeRecord> {
        self.records
    }

    /// Returns `true` if the records are in ascending date order.
    ///
    /// Always holds for a constructed dataset; exposed for callers that
    /// check arbitrary slices via [`is_date_ordered`].
    pub fn is_date_ordered(&self) -> bool {
        is_date_ordered(&self.records)
    }
}

/// Returns `true` if `records` is sorted ascending by date.
pub fn is_date_ordered(records: &[TradeRecord]) -> bool {
    records.windows(2).all(|w| w[0].date() <= w[1].date())
}

impl Deref for TradeDataset {
    type Target = [TradeRecord];

    fn deref(&self) -> &Self::Target {
        &self.records
    }
}

impl From<Vec<TradeRecord>> for TradeDataset {
    fn from(records: Vec<TradeRecord>) -> Self {
        Self::new(records)
    }
}

impl From<TradeDataset> for Vec<TradeRecord> {
    fn from(dataset: TradeDataset) -> Self {
        dataset.records
    }
}

impl FromIterator<TradeRecord> for TradeDataset {
    fn from_iter<I: IntoIterator<Item = TradeRecord>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl IntoIterator for TradeDataset {
    type Item = TradeRecord;
    type IntoIter = std::vec::IntoIter<TradeRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.into_iter()
    }
}

impl<'a> IntoIterator for &'a TradeDataset {
    type Item = &'a TradeRecord;
    type IntoIter = std::slice::Iter<'a, TradeRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
