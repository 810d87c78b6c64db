use std::cmp::Ordering;

use indexmap::IndexMap;
use serde::Serialize;

use crate::core::primitives::{finite_or_zero, ratio_or_zero};
use crate::core::record::RawRecord;

/// Per-creative totals and derived metrics over the filtered record set.
///
/// Rebuilt whole on every filter change; never mutated in place.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CreativeAggregate {
    pub creative_name: String,
    /// First-seen link among the group's rows.
    pub creative_link: Option<String>,
    pub ad_count: usize,
    pub impressions: f64,
    pub cv: f64,
    pub cost: f64,
    pub revenue: f64,
    pub profit: f64,
    pub cpm: f64,
    pub cpa: f64,
    pub roas: f64,
}

impl CreativeAggregate {
    fn empty(creative_name: &str) -> Self {
        Self {
            creative_name: creative_name.to_owned(),
            creative_link: None,
            ad_count: 0,
            impressions: 0.0,
            cv: 0.0,
            cost: 0.0,
            revenue: 0.0,
            profit: 0.0,
            cpm: 0.0,
            cpa: 0.0,
            roas: 0.0,
        }
    }

    fn absorb(&mut self, record: &RawRecord) {
        self.ad_count += 1;
        self.impressions += finite_or_zero(record.impressions);
        self.cv += finite_or_zero(record.cv);
        self.cost += finite_or_zero(record.cost);
        self.revenue += finite_or_zero(record.revenue);
        self.profit += finite_or_zero(record.profit);
        if self.creative_link.is_none() {
            self.creative_link = record.creative_link.clone();
        }
    }

    fn finalize(mut self) -> Self {
        self.cpm = ratio_or_zero(self.cost, self.impressions) * 1000.0;
        self.cpa = ratio_or_zero(self.cost, self.cv);
        self.roas = ratio_or_zero(self.revenue, self.cost) * 100.0;
        self
    }
}

/// Groups raw rows into per-creative aggregates.
///
/// Pure transform. Groups keep input encounter order while accumulating, and
/// the output is sorted by descending profit with a stable sort so ties keep
/// that encounter order. Empty input yields an empty vector.
#[must_use]
pub fn aggregate(records: &[RawRecord]) -> Vec<CreativeAggregate> {
    let mut groups: IndexMap<&str, CreativeAggregate> = IndexMap::new();

    for record in records {
        let key = record.creative_key();
        groups
            .entry(key)
            .or_insert_with(|| CreativeAggregate::empty(key))
            .absorb(record);
    }

    let mut aggregates: Vec<CreativeAggregate> = groups
        .into_values()
        .map(CreativeAggregate::finalize)
        .collect();

    aggregates.sort_by(|a, b| b.profit.partial_cmp(&a.profit).unwrap_or(Ordering::Equal));
    aggregates
}
