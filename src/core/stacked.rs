use chrono::NaiveDate;
use serde::Serialize;

use crate::core::daily::DailyProfitTable;
use crate::core::slots::{ColorRanking, assign_day_slots};
use crate::core::types::PlotCalibration;

/// One rendered lane within a day's stack, keyed by slot index.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LaneEntry {
    pub slot: usize,
    pub creative: String,
    pub value: f64,
    pub color: &'static str,
}

/// Render contract for one day of the stacked profit chart.
///
/// `pos`/`neg` are ordered by slot index, which is also the bottom-up render
/// order expected by stacked-bar primitives. `overflow` counts creatives that
/// netted nonzero profit but received no lane under the cap, for a "+N more"
/// indicator.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DayColumn {
    pub day: NaiveDate,
    pub pos: Vec<LaneEntry>,
    pub neg: Vec<LaneEntry>,
    pub overflow: usize,
}

impl DayColumn {
    /// Summed positive lane values.
    #[must_use]
    pub fn pos_total(&self) -> f64 {
        self.pos.iter().map(|lane| lane.value).sum()
    }

    /// Summed negative lane values (<= 0).
    #[must_use]
    pub fn neg_total(&self) -> f64 {
        self.neg.iter().map(|lane| lane.value).sum()
    }
}

/// Projects the daily table into per-day stacked columns.
#[must_use]
pub fn project_stacked(
    table: &DailyProfitTable,
    ranking: &ColorRanking,
    lane_cap: usize,
) -> Vec<DayColumn> {
    table
        .days()
        .filter_map(|day| {
            let profits = table.day_profits(day)?;
            let slots = assign_day_slots(profits, lane_cap);

            let mut pos: Vec<LaneEntry> = slots
                .pos
                .iter()
                .map(|assignment| LaneEntry {
                    slot: assignment.slot,
                    creative: assignment.creative.clone(),
                    value: assignment.profit,
                    color: ranking.color(&assignment.creative),
                })
                .collect();
            pos.sort_by_key(|lane| lane.slot);

            let mut neg: Vec<LaneEntry> = slots
                .neg
                .iter()
                .map(|assignment| LaneEntry {
                    slot: assignment.slot,
                    creative: assignment.creative.clone(),
                    value: assignment.profit,
                    color: ranking.color(&assignment.creative),
                })
                .collect();
            neg.sort_by_key(|lane| lane.slot);

            Some(DayColumn {
                day,
                overflow: slots.overflow(),
                pos,
                neg,
            })
        })
        .collect()
}

/// Maps a pointer x offset to a day-column index.
///
/// Columns are uniform-width and contiguous, one per day in the active range,
/// so the index is direct arithmetic: `floor((x - left) / width * days)`
/// clamped to the last column at the right plot edge. Pointers outside the
/// plot's horizontal bounds, or degenerate geometry, yield `None`.
#[must_use]
pub fn day_index_at(
    pointer_x: f64,
    calibration: PlotCalibration,
    day_count: usize,
) -> Option<usize> {
    if day_count == 0 || !calibration.is_usable() || !pointer_x.is_finite() {
        return None;
    }
    if pointer_x < calibration.origin_x || pointer_x > calibration.origin_x + calibration.plot_width
    {
        return None;
    }

    let ratio = (pointer_x - calibration.origin_x) / calibration.plot_width;
    let index = (ratio * day_count as f64).floor() as usize;
    Some(index.min(day_count - 1))
}
