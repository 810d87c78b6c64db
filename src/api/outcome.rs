use chrono::NaiveDate;
use serde::Serialize;

use crate::interaction::tooltip::{PointId, TooltipEffects};

/// Callback fired when a hit-tested element is activated (clicked).
///
/// Receives the creative name and its link; the receiving side (opening a
/// detail panel) is the host's concern.
pub type ActivationHandler = Box<dyn Fn(&str, Option<&str>)>;

/// Plain tooltip payload consumed by the presentation layer.
///
/// For a stacked day-slot hit, `profit` is that day's lane value and `day` is
/// set; for a bubble hit, `profit` is the creative's whole-range total.
/// The remaining metrics always come from the creative's aggregate.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TooltipContent {
    pub creative: String,
    pub creative_link: Option<String>,
    pub day: Option<NaiveDate>,
    pub profit: f64,
    pub cv: f64,
    pub cost: f64,
    pub revenue: f64,
    pub cpa: f64,
    pub cpm: f64,
    pub roas: f64,
}

/// Result of one pointer-move step.
#[derive(Debug, Clone, PartialEq)]
pub struct PointerOutcome {
    /// `false` when the throttle gate suppressed evaluation for this event.
    pub admitted: bool,
    pub hit: Option<PointId>,
    pub effects: TooltipEffects,
    /// Clamped tooltip anchor, present while the tooltip is visible.
    pub position: Option<(f64, f64)>,
}

impl PointerOutcome {
    #[must_use]
    pub(crate) fn suppressed() -> Self {
        Self {
            admitted: false,
            hit: None,
            effects: TooltipEffects::new(),
            position: None,
        }
    }
}
