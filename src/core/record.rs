use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::core::primitives::{decimal_to_f64, parse_day, ratio_or_zero};
use crate::error::BoardResult;

/// Group key used for rows whose creative matching found nothing.
pub const UNCLASSIFIED_KEY: &str = "(unclassified)";

/// One normalized ad-performance row, one per ad per reporting period.
///
/// Produced by the external ingestion collaborator and treated as immutable
/// here. Missing numeric fields deserialize to 0 and missing strings to empty,
/// so partially filled spreadsheet rows are coalesced rather than rejected.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RawRecord {
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub account: String,
    #[serde(default)]
    pub person: String,
    #[serde(default)]
    pub ad_name: String,
    #[serde(default)]
    pub ad_set_name: String,
    /// Matched creative asset name; empty means unclassified.
    #[serde(default)]
    pub creative_name: String,
    #[serde(default)]
    pub creative_link: Option<String>,
    #[serde(default)]
    pub impressions: f64,
    #[serde(default)]
    pub cpm: f64,
    #[serde(default)]
    pub cv: f64,
    #[serde(default)]
    pub cost: f64,
    #[serde(default)]
    pub revenue: f64,
    #[serde(default)]
    pub profit: f64,
    #[serde(default)]
    pub roas: f64,
}

impl RawRecord {
    /// Aggregation group key; unclassified rows share one bucket.
    #[must_use]
    pub fn creative_key(&self) -> &str {
        if self.creative_name.is_empty() {
            UNCLASSIFIED_KEY
        } else {
            &self.creative_name
        }
    }

    /// Reporting day, or `None` when the date field does not parse.
    #[must_use]
    pub fn day(&self) -> Option<NaiveDate> {
        parse_day(&self.date)
    }

    /// Sets cost/revenue from exact decimal money and rederives profit/roas.
    ///
    /// Ingestion sources that carry exact currency amounts should prefer this
    /// over lossy pre-converted floats.
    pub fn with_money(mut self, cost: Decimal, revenue: Decimal) -> BoardResult<Self> {
        self.cost = decimal_to_f64(cost, "cost")?;
        self.revenue = decimal_to_f64(revenue, "revenue")?;
        self.profit = self.revenue - self.cost;
        self.roas = ratio_or_zero(self.revenue, self.cost) * 100.0;
        Ok(self)
    }
}
