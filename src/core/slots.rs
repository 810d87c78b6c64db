use std::cmp::Ordering;
use std::collections::HashMap;

use indexmap::IndexMap;
use smallvec::SmallVec;

use crate::core::aggregate::CreativeAggregate;
use crate::core::palette::{FALLBACK_COLOR, color_for_rank};

/// Default maximum of simultaneously rendered lanes per day and sign.
pub const DEFAULT_LANE_CAP: usize = 15;

/// One creative's visual lane within a single day's stack.
#[derive(Debug, Clone, PartialEq)]
pub struct SlotAssignment {
    pub creative: String,
    pub profit: f64,
    /// Lane index within the positive or negative sub-stack.
    pub slot: usize,
}

/// Slot assignments for one day, split by profit sign.
///
/// Creatives beyond the lane cap are reported in `hidden_pos`/`hidden_neg`
/// instead of being silently dropped; their profit stays in the aggregates,
/// only that day's visual lane enumeration omits them.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DaySlots {
    pub pos: Vec<SlotAssignment>,
    pub neg: Vec<SlotAssignment>,
    pub hidden_pos: Vec<String>,
    pub hidden_neg: Vec<String>,
}

impl DaySlots {
    /// Number of creatives with a nonzero profit that received no lane.
    #[must_use]
    pub fn overflow(&self) -> usize {
        self.hidden_pos.len() + self.hidden_neg.len()
    }
}

/// Assigns stack lanes for one day's creative profits.
///
/// Zero-profit creatives occupy no lane. Positives are ranked descending and
/// take `slot = visible_count - 1 - rank`: stacked lanes render bottom-up in
/// array order, so the largest value gets the highest index and lands on top.
/// Negatives are ranked descending (closest to zero first) and take
/// `slot = rank`, keeping the mildest loss adjacent to the zero baseline.
#[must_use]
pub fn assign_day_slots(day_profits: &IndexMap<String, f64>, lane_cap: usize) -> DaySlots {
    let mut positives: SmallVec<[(&str, f64); 16]> = SmallVec::new();
    let mut negatives: SmallVec<[(&str, f64); 16]> = SmallVec::new();

    for (creative, &profit) in day_profits {
        if profit > 0.0 {
            positives.push((creative.as_str(), profit));
        } else if profit < 0.0 {
            negatives.push((creative.as_str(), profit));
        }
    }

    positives.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(Ordering::Equal));
    negatives.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(Ordering::Equal));

    let mut slots = DaySlots::default();

    let visible_pos = positives.len().min(lane_cap);
    for (rank, (creative, profit)) in positives.iter().enumerate() {
        if rank < visible_pos {
            slots.pos.push(SlotAssignment {
                creative: (*creative).to_owned(),
                profit: *profit,
                slot: visible_pos - 1 - rank,
            });
        } else {
            slots.hidden_pos.push((*creative).to_owned());
        }
    }

    let visible_neg = negatives.len().min(lane_cap);
    for (rank, (creative, profit)) in negatives.iter().enumerate() {
        if rank < visible_neg {
            slots.neg.push(SlotAssignment {
                creative: (*creative).to_owned(),
                profit: *profit,
                slot: rank,
            });
        } else {
            slots.hidden_neg.push((*creative).to_owned());
        }
    }

    slots
}

/// Whole-range creative color ranking.
///
/// Creatives are ranked once by total profit over the entire visible date
/// range, never per day, so a creative keeps one color on every day it
/// appears even though its lane index varies day to day.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ColorRanking {
    colors: HashMap<String, &'static str>,
}

impl ColorRanking {
    /// Ranks by the aggregates' order, which is already descending by profit
    /// with stable ties.
    #[must_use]
    pub fn from_aggregates(aggregates: &[CreativeAggregate]) -> Self {
        let colors = aggregates
            .iter()
            .enumerate()
            .map(|(rank, aggregate)| (aggregate.creative_name.clone(), color_for_rank(rank)))
            .collect();
        Self { colors }
    }

    #[must_use]
    pub fn color(&self, creative: &str) -> &'static str {
        self.colors.get(creative).copied().unwrap_or(FALLBACK_COLOR)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }
}
