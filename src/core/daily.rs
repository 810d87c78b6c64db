use std::collections::BTreeMap;

use chrono::NaiveDate;
use indexmap::IndexMap;

use crate::core::primitives::finite_or_zero;
use crate::core::record::RawRecord;

/// Per-day, per-creative profit buckets derived fresh from the record set.
///
/// Days are kept sorted ascending; within a day, creatives keep input
/// encounter order so downstream slot assignment stays deterministic.
/// Rows with unparseable dates are excluded here but still contribute to
/// per-creative totals elsewhere.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DailyProfitTable {
    buckets: BTreeMap<NaiveDate, IndexMap<String, f64>>,
}

impl DailyProfitTable {
    #[must_use]
    pub fn from_records(records: &[RawRecord]) -> Self {
        let mut buckets: BTreeMap<NaiveDate, IndexMap<String, f64>> = BTreeMap::new();

        for record in records {
            let Some(day) = record.day() else {
                continue;
            };
            let profits = buckets.entry(day).or_default();
            *profits.entry(record.creative_key().to_owned()).or_insert(0.0) +=
                finite_or_zero(record.profit);
        }

        Self { buckets }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    #[must_use]
    pub fn day_count(&self) -> usize {
        self.buckets.len()
    }

    /// Ascending reporting days present in the table.
    pub fn days(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        self.buckets.keys().copied()
    }

    #[must_use]
    pub fn day_profits(&self, day: NaiveDate) -> Option<&IndexMap<String, f64>> {
        self.buckets.get(&day)
    }

    /// Whole-range profit totals per creative, in first-seen order.
    #[must_use]
    pub fn totals(&self) -> IndexMap<String, f64> {
        let mut totals: IndexMap<String, f64> = IndexMap::new();
        for profits in self.buckets.values() {
            for (creative, profit) in profits {
                *totals.entry(creative.clone()).or_insert(0.0) += profit;
            }
        }
        totals
    }
}
