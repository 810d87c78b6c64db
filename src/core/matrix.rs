use serde::Serialize;

use crate::core::aggregate::CreativeAggregate;
use crate::core::primitives::clamp;

/// Pinned x position for creatives with zero conversions and a net loss.
pub const STALLED_X: f64 = -95.0;

const STALLED_Y_TOP: f64 = -55.0;
const STALLED_Y_BOTTOM: f64 = -95.0;
const STALLED_Y_MID: f64 = -75.0;

/// One matrix bubble in the chart's relative coordinate space.
///
/// `x` and `y` live in [-100, 100], `z` in [0.5, 2.0]. The x axis is
/// mean-relative (distance from typical CV) while the y axis is
/// range-normalized per profit sign. The asymmetry is deliberate: profit
/// crosses zero, so a mean-relative y would be unstable near a zero or
/// negative mean, while CV cannot go below zero.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BubblePoint {
    pub creative: String,
    pub creative_link: Option<String>,
    pub x: f64,
    pub y: f64,
    pub z: f64,
    /// 1 = high-CV/profitable, 2 = high-CV/losing, 3 = low-CV/profitable,
    /// 4 = low-CV/losing. "High" means cv >= mean over cv>0 creatives.
    pub quadrant: u8,
    /// Zero conversions and losing money; pinned to the left edge.
    pub stalled: bool,
    pub cv: f64,
    pub profit: f64,
    pub roas: f64,
}

/// Projects aggregates into matrix bubbles.
///
/// Creatives with cv>0 become regular bubbles; the cv=0/losing sub-population
/// is pinned at `STALLED_X` and stacked by loss magnitude in the lower half.
/// Creatives with cv=0 and profit>=0 carry no signal for this chart and are
/// skipped. Output keeps the aggregates' order.
#[must_use]
pub fn project_matrix(aggregates: &[CreativeAggregate]) -> Vec<BubblePoint> {
    let active: Vec<&CreativeAggregate> = aggregates.iter().filter(|a| a.cv > 0.0).collect();
    let stalled: Vec<&CreativeAggregate> = aggregates
        .iter()
        .filter(|a| a.cv <= 0.0 && a.profit < 0.0)
        .collect();

    let mean_cv = mean(active.iter().map(|a| a.cv));
    let mean_roas = mean(active.iter().map(|a| a.roas));

    let pos_span = span(active.iter().map(|a| a.profit).filter(|p| *p >= 0.0));
    let neg_span = span(active.iter().map(|a| a.profit).filter(|p| *p < 0.0));
    let stalled_span = span(stalled.iter().map(|a| a.profit));

    let mut bubbles = Vec::with_capacity(active.len() + stalled.len());

    for aggregate in &active {
        let x = clamp((aggregate.cv / mean_cv - 1.0) * 50.0, -100.0, 100.0);
        let y = if aggregate.profit >= 0.0 {
            map_span(aggregate.profit, pos_span, 5.0, 95.0, 50.0)
        } else {
            // Mildest loss sits at -5, the worst at -95.
            map_span_inverted(aggregate.profit, neg_span, -5.0, -95.0, -50.0)
        };
        let z = if mean_roas > 0.0 {
            clamp(aggregate.roas / mean_roas, 0.5, 2.0)
        } else {
            1.0
        };
        let high_cv = aggregate.cv >= mean_cv;
        let quadrant = match (high_cv, aggregate.profit >= 0.0) {
            (true, true) => 1,
            (true, false) => 2,
            (false, true) => 3,
            (false, false) => 4,
        };

        bubbles.push(BubblePoint {
            creative: aggregate.creative_name.clone(),
            creative_link: aggregate.creative_link.clone(),
            x,
            y,
            z,
            quadrant,
            stalled: false,
            cv: aggregate.cv,
            profit: aggregate.profit,
            roas: aggregate.roas,
        });
    }

    for aggregate in &stalled {
        let y = map_span_inverted(
            aggregate.profit,
            stalled_span,
            STALLED_Y_TOP,
            STALLED_Y_BOTTOM,
            STALLED_Y_MID,
        );

        bubbles.push(BubblePoint {
            creative: aggregate.creative_name.clone(),
            creative_link: aggregate.creative_link.clone(),
            x: STALLED_X,
            y,
            z: 0.5,
            quadrant: 4,
            stalled: true,
            cv: aggregate.cv,
            profit: aggregate.profit,
            roas: aggregate.roas,
        });
    }

    bubbles
}

fn mean(values: impl Iterator<Item = f64>) -> f64 {
    let mut sum = 0.0;
    let mut count = 0usize;
    for value in values {
        sum += value;
        count += 1;
    }
    if count == 0 { 0.0 } else { sum / count as f64 }
}

fn span(values: impl Iterator<Item = f64>) -> Option<(f64, f64)> {
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    let mut seen = false;
    for value in values {
        min = min.min(value);
        max = max.max(value);
        seen = true;
    }
    seen.then_some((min, max))
}

/// Linear map from `[min, max]` to `[low, high]`; a zero span collapses to
/// `midpoint` so a lone value never divides by zero.
fn map_span(value: f64, span: Option<(f64, f64)>, low: f64, high: f64, midpoint: f64) -> f64 {
    let Some((min, max)) = span else {
        return midpoint;
    };
    if max == min {
        return midpoint;
    }
    low + (value - min) / (max - min) * (high - low)
}

/// Like `map_span`, but the value closest to zero maps to `near` and the most
/// negative to `far`.
fn map_span_inverted(
    value: f64,
    span: Option<(f64, f64)>,
    near: f64,
    far: f64,
    midpoint: f64,
) -> f64 {
    let Some((min, max)) = span else {
        return midpoint;
    };
    if max == min {
        return midpoint;
    }
    near + (max - value) / (max - min) * (far - near)
}
