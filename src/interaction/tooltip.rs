//! Tooltip lifecycle as an explicit finite-state machine.
//!
//! The pointer crossing the gap between two bars, or travelling from the
//! chart onto the tooltip panel itself, must not flicker the tooltip. Hides
//! are therefore never immediate: a miss arms a grace deadline that a re-hit
//! or panel entry cancels, and only `Tick` past the deadline hides.
//!
//! Time is explicit: every step takes `now_ms` and deadlines are plain state,
//! fired by the caller's tick. No timers, no clock reads.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::types::Viewport;

/// Identity of a hit-tested chart element.
///
/// Content swaps are gated on this identity, not on raw pointer movement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PointId {
    /// One creative's lane on one day of the stacked chart.
    DaySlot {
        day_index: usize,
        slot: usize,
        negative: bool,
    },
    /// One matrix bubble, indexed into the projected bubble array.
    Bubble { index: usize },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TooltipState {
    Hidden,
    Showing(PointId),
    /// Pointer is over the tooltip panel; pending hides are cancelled until
    /// it leaves.
    Pinned(PointId),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TooltipEvent {
    /// Hit-test matched an element under the pointer.
    HitFound(PointId),
    /// Hit-test found nothing under the pointer.
    HitNone,
    /// Pointer entered the tooltip panel's own region.
    PanelEnter,
    /// Pointer left the tooltip panel.
    PanelLeave,
    /// Pointer left the chart's bounding region entirely.
    ChartLeave,
    /// Periodic tick; fires an armed grace deadline that has elapsed.
    Tick,
}

/// Side effects the host should apply after a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TooltipEffect {
    /// The matched identity changed; swap tooltip content.
    ContentChanged(PointId),
    HideScheduled,
    HideCancelled,
    Pinned,
    Unpinned,
    Hidden,
}

pub type TooltipEffects = SmallVec<[TooltipEffect; 2]>;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TooltipController {
    state: TooltipState,
    grace_ms: f64,
    hide_deadline_ms: Option<f64>,
}

impl TooltipController {
    #[must_use]
    pub fn new(grace_ms: f64) -> Self {
        Self {
            state: TooltipState::Hidden,
            grace_ms: grace_ms.max(0.0),
            hide_deadline_ms: None,
        }
    }

    #[must_use]
    pub fn state(&self) -> TooltipState {
        self.state
    }

    /// Currently displayed point, whether pinned or not.
    #[must_use]
    pub fn visible_point(&self) -> Option<PointId> {
        match self.state {
            TooltipState::Hidden => None,
            TooltipState::Showing(point) | TooltipState::Pinned(point) => Some(point),
        }
    }

    #[must_use]
    pub fn hide_pending(&self) -> bool {
        self.hide_deadline_ms.is_some()
    }

    /// Drops all tooltip state.
    ///
    /// For chart swaps, where the displayed point identity belongs to the
    /// outgoing chart and must not survive into the next one.
    pub fn reset(&mut self) -> TooltipEffects {
        let mut effects = TooltipEffects::new();
        self.hide_deadline_ms = None;
        if self.state != TooltipState::Hidden {
            self.state = TooltipState::Hidden;
            effects.push(TooltipEffect::Hidden);
        }
        effects
    }

    /// Applies one event at `now_ms` and returns the effects to perform.
    pub fn step(&mut self, event: TooltipEvent, now_ms: f64) -> TooltipEffects {
        let mut effects = TooltipEffects::new();

        match event {
            TooltipEvent::HitFound(point) => match self.state {
                TooltipState::Pinned(_) => {}
                TooltipState::Hidden => {
                    self.cancel_hide(&mut effects);
                    self.state = TooltipState::Showing(point);
                    effects.push(TooltipEffect::ContentChanged(point));
                }
                TooltipState::Showing(current) => {
                    self.cancel_hide(&mut effects);
                    if current != point {
                        self.state = TooltipState::Showing(point);
                        effects.push(TooltipEffect::ContentChanged(point));
                    }
                }
            },
            TooltipEvent::HitNone | TooltipEvent::ChartLeave => {
                if matches!(self.state, TooltipState::Showing(_)) {
                    self.schedule_hide(now_ms, &mut effects);
                }
            }
            TooltipEvent::PanelEnter => {
                if let TooltipState::Showing(point) = self.state {
                    self.cancel_hide(&mut effects);
                    self.state = TooltipState::Pinned(point);
                    effects.push(TooltipEffect::Pinned);
                }
            }
            TooltipEvent::PanelLeave => {
                if let TooltipState::Pinned(point) = self.state {
                    self.state = TooltipState::Showing(point);
                    effects.push(TooltipEffect::Unpinned);
                    self.schedule_hide(now_ms, &mut effects);
                }
            }
            TooltipEvent::Tick => {
                if matches!(self.hide_deadline_ms, Some(deadline) if now_ms >= deadline) {
                    self.hide_deadline_ms = None;
                    self.state = TooltipState::Hidden;
                    effects.push(TooltipEffect::Hidden);
                }
            }
        }

        effects
    }

    fn schedule_hide(&mut self, now_ms: f64, effects: &mut TooltipEffects) {
        if self.hide_deadline_ms.is_none() {
            self.hide_deadline_ms = Some(now_ms + self.grace_ms);
            effects.push(TooltipEffect::HideScheduled);
        }
    }

    fn cancel_hide(&mut self, effects: &mut TooltipEffects) {
        if self.hide_deadline_ms.take().is_some() {
            effects.push(TooltipEffect::HideCancelled);
        }
    }
}

/// Clamps a tooltip panel anchor so the panel stays inside the container.
///
/// Position updates on every qualifying pointer move regardless of whether
/// content changed.
#[must_use]
pub fn clamp_position(
    x: f64,
    y: f64,
    panel_width: f64,
    panel_height: f64,
    container: Viewport,
) -> (f64, f64) {
    let max_x = (f64::from(container.width) - panel_width).max(0.0);
    let max_y = (f64::from(container.height) - panel_height).max(0.0);
    (x.clamp(0.0, max_x), y.clamp(0.0, max_y))
}
