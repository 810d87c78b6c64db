use tracing::debug;

use crate::core::aggregate::{CreativeAggregate, aggregate};
use crate::core::daily::DailyProfitTable;
use crate::core::matrix::{BubblePoint, project_matrix};
use crate::core::record::RawRecord;
use crate::core::slots::ColorRanking;
use crate::core::stacked::{DayColumn, project_stacked};
use crate::core::types::{PlotCalibration, Viewport};
use crate::error::{BoardError, BoardResult};
use crate::interaction::hit_test::{MatrixHitTester, StackedHitTester};
use crate::interaction::throttle::{FrameDebounce, ThrottleGate};
use crate::interaction::tooltip::{
    PointId, TooltipController, TooltipEffects, TooltipEvent, TooltipState, clamp_position,
};

use super::engine_config::{BoardEngineConfig, ChartKind};
use super::geometry::{build_matrix_geometry, build_stacked_geometry};
use super::outcome::{ActivationHandler, PointerOutcome, TooltipContent};

/// Offset between the pointer and the tooltip panel's anchor corner.
const TOOLTIP_POINTER_OFFSET_PX: f64 = 12.0;

/// Owns every derived structure between raw records and tooltip state.
///
/// All derived data is a pure function of the current record set, the
/// viewport and the calibration; any change rebuilds the affected structures
/// whole and republishes the hit-test geometry in one assignment. Pointer
/// events route throttle gate -> hit test -> tooltip state machine.
pub struct BoardEngine {
    config: BoardEngineConfig,
    records: Vec<RawRecord>,
    aggregates: Vec<CreativeAggregate>,
    daily: DailyProfitTable,
    ranking: ColorRanking,
    day_columns: Vec<DayColumn>,
    bubbles: Vec<BubblePoint>,
    stacked_hit: StackedHitTester,
    matrix_hit: MatrixHitTester,
    tooltip: TooltipController,
    pointer_gate: ThrottleGate,
    resize_debounce: FrameDebounce,
    pending_viewport: Option<Viewport>,
    activation: Option<ActivationHandler>,
}

impl BoardEngine {
    pub fn new(config: BoardEngineConfig) -> BoardResult<Self> {
        let config = config.validate()?;

        Ok(Self {
            config,
            records: Vec::new(),
            aggregates: Vec::new(),
            daily: DailyProfitTable::default(),
            ranking: ColorRanking::default(),
            day_columns: Vec::new(),
            bubbles: Vec::new(),
            stacked_hit: StackedHitTester::default(),
            matrix_hit: MatrixHitTester::default(),
            tooltip: TooltipController::new(config.grace_period_ms),
            pointer_gate: ThrottleGate::new(config.pointer_throttle_ms),
            resize_debounce: FrameDebounce::new(config.resize_frame_ms),
            pending_viewport: None,
            activation: None,
        })
    }

    /// Replaces the filtered record set and rebuilds everything derived.
    pub fn set_records(&mut self, records: Vec<RawRecord>) {
        self.records = records;
        self.recompute_derived();
    }

    /// Registers the activation callback fired by `click`.
    pub fn set_activation_handler(&mut self, handler: ActivationHandler) {
        self.activation = Some(handler);
    }

    /// Switches the active chart and drops tooltip state tied to the old one.
    ///
    /// A `PointId` resolved against one chart's geometry is meaningless in
    /// the other, so any visible tooltip hides immediately.
    pub fn set_chart_kind(&mut self, kind: ChartKind) -> TooltipEffects {
        if self.config.chart_kind == kind {
            return TooltipEffects::new();
        }
        self.config.chart_kind = kind;
        self.tooltip.reset()
    }

    /// Applies a new viewport immediately.
    pub fn set_viewport(&mut self, viewport: Viewport) -> BoardResult<()> {
        if !viewport.is_valid() {
            return Err(BoardError::InvalidViewport {
                width: viewport.width,
                height: viewport.height,
            });
        }
        self.config.viewport = viewport;
        Ok(())
    }

    /// Applies freshly measured plot bounds and rebuilds geometry.
    pub fn set_calibration(&mut self, calibration: PlotCalibration) -> BoardResult<()> {
        self.config.calibration = calibration.validate()?;
        self.rebuild_geometry();
        Ok(())
    }

    /// Records a resize observation; the recompute itself is coalesced to
    /// frame granularity and applied by `tick`.
    pub fn request_resize(
        &mut self,
        viewport: Viewport,
        calibration: PlotCalibration,
        now_ms: f64,
    ) -> BoardResult<()> {
        if !viewport.is_valid() {
            return Err(BoardError::InvalidViewport {
                width: viewport.width,
                height: viewport.height,
            });
        }
        self.config.calibration = calibration.validate()?;
        self.pending_viewport = Some(viewport);
        self.resize_debounce.mark(now_ms);
        Ok(())
    }

    /// Advances time-driven state: applies a due resize and fires an armed
    /// tooltip grace deadline.
    pub fn tick(&mut self, now_ms: f64) -> TooltipEffects {
        if self.resize_debounce.due(now_ms) {
            if let Some(viewport) = self.pending_viewport.take() {
                self.config.viewport = viewport;
                debug!(
                    width = viewport.width,
                    height = viewport.height,
                    "applying debounced resize"
                );
            }
            self.rebuild_geometry();
        }

        self.tooltip.step(TooltipEvent::Tick, now_ms)
    }

    /// Handles one pointer-move event at `now_ms`.
    pub fn pointer_move(&mut self, x: f64, y: f64, now_ms: f64) -> PointerOutcome {
        if !self.pointer_gate.admit(now_ms) {
            return PointerOutcome::suppressed();
        }

        let hit = self.hit_test(x, y);
        let event = match hit {
            Some(point) => TooltipEvent::HitFound(point),
            None => TooltipEvent::HitNone,
        };
        let effects = self.tooltip.step(event, now_ms);

        // Corrupt pointer coordinates miss every hit; they must not leak a
        // NaN anchor either.
        let position = if x.is_finite() && y.is_finite() {
            self.tooltip.visible_point().map(|_| {
                clamp_position(
                    x + TOOLTIP_POINTER_OFFSET_PX,
                    y + TOOLTIP_POINTER_OFFSET_PX,
                    self.config.tooltip_panel_width_px,
                    self.config.tooltip_panel_height_px,
                    self.config.viewport,
                )
            })
        } else {
            None
        };

        PointerOutcome {
            admitted: true,
            hit,
            effects,
            position,
        }
    }

    /// Pointer left the chart's bounding region entirely.
    pub fn pointer_leave(&mut self, now_ms: f64) -> TooltipEffects {
        self.pointer_gate.reset();
        self.tooltip.step(TooltipEvent::ChartLeave, now_ms)
    }

    /// Pointer entered the tooltip panel's own region.
    pub fn tooltip_panel_enter(&mut self, now_ms: f64) -> TooltipEffects {
        self.tooltip.step(TooltipEvent::PanelEnter, now_ms)
    }

    /// Pointer left the tooltip panel.
    pub fn tooltip_panel_leave(&mut self, now_ms: f64) -> TooltipEffects {
        self.tooltip.step(TooltipEvent::PanelLeave, now_ms)
    }

    /// Hit-tests a click and fires the activation callback on a match.
    ///
    /// Clicks are rare, so they bypass the pointer-move throttle.
    pub fn click(&mut self, x: f64, y: f64) -> Option<PointId> {
        let hit = self.hit_test(x, y)?;
        let (creative, link) = self.resolve_creative(hit)?;

        if let Some(handler) = &self.activation {
            handler(&creative, link.as_deref());
        }

        Some(hit)
    }

    #[must_use]
    pub fn records(&self) -> &[RawRecord] {
        &self.records
    }

    #[must_use]
    pub fn aggregates(&self) -> &[CreativeAggregate] {
        &self.aggregates
    }

    #[must_use]
    pub fn day_columns(&self) -> &[DayColumn] {
        &self.day_columns
    }

    #[must_use]
    pub fn bubbles(&self) -> &[BubblePoint] {
        &self.bubbles
    }

    #[must_use]
    pub fn color_ranking(&self) -> &ColorRanking {
        &self.ranking
    }

    #[must_use]
    pub fn config(&self) -> BoardEngineConfig {
        self.config
    }

    #[must_use]
    pub fn tooltip_state(&self) -> TooltipState {
        self.tooltip.state()
    }

    /// Builds the tooltip payload for a matched point.
    #[must_use]
    pub fn tooltip_content(&self, point: PointId) -> Option<TooltipContent> {
        match point {
            PointId::DaySlot {
                day_index,
                slot,
                negative,
            } => {
                let column = self.day_columns.get(day_index)?;
                let lanes = if negative { &column.neg } else { &column.pos };
                let lane = lanes.iter().find(|lane| lane.slot == slot)?;
                let aggregate = self.aggregate_by_name(&lane.creative)?;

                Some(TooltipContent {
                    creative: lane.creative.clone(),
                    creative_link: aggregate.creative_link.clone(),
                    day: Some(column.day),
                    profit: lane.value,
                    cv: aggregate.cv,
                    cost: aggregate.cost,
                    revenue: aggregate.revenue,
                    cpa: aggregate.cpa,
                    cpm: aggregate.cpm,
                    roas: aggregate.roas,
                })
            }
            PointId::Bubble { index } => {
                let bubble = self.bubbles.get(index)?;
                let aggregate = self.aggregate_by_name(&bubble.creative)?;

                Some(TooltipContent {
                    creative: bubble.creative.clone(),
                    creative_link: bubble.creative_link.clone(),
                    day: None,
                    profit: bubble.profit,
                    cv: aggregate.cv,
                    cost: aggregate.cost,
                    revenue: aggregate.revenue,
                    cpa: aggregate.cpa,
                    cpm: aggregate.cpm,
                    roas: aggregate.roas,
                })
            }
        }
    }

    fn hit_test(&self, x: f64, y: f64) -> Option<PointId> {
        match self.config.chart_kind {
            ChartKind::Stacked => self.stacked_hit.hit(x, y),
            ChartKind::Matrix => self.matrix_hit.hit(x, y),
        }
    }

    fn resolve_creative(&self, point: PointId) -> Option<(String, Option<String>)> {
        match point {
            PointId::DaySlot {
                day_index,
                slot,
                negative,
            } => {
                let column = self.day_columns.get(day_index)?;
                let lanes = if negative { &column.neg } else { &column.pos };
                let lane = lanes.iter().find(|lane| lane.slot == slot)?;
                let link = self
                    .aggregate_by_name(&lane.creative)
                    .and_then(|aggregate| aggregate.creative_link.clone());
                Some((lane.creative.clone(), link))
            }
            PointId::Bubble { index } => {
                let bubble = self.bubbles.get(index)?;
                Some((bubble.creative.clone(), bubble.creative_link.clone()))
            }
        }
    }

    fn aggregate_by_name(&self, creative: &str) -> Option<&CreativeAggregate> {
        self.aggregates
            .iter()
            .find(|aggregate| aggregate.creative_name == creative)
    }

    fn recompute_derived(&mut self) {
        self.aggregates = aggregate(&self.records);
        self.daily = DailyProfitTable::from_records(&self.records);
        self.ranking = ColorRanking::from_aggregates(&self.aggregates);
        self.day_columns = project_stacked(&self.daily, &self.ranking, self.config.lane_cap);
        self.bubbles = project_matrix(&self.aggregates);
        self.rebuild_geometry();

        debug!(
            records = self.records.len(),
            creatives = self.aggregates.len(),
            days = self.day_columns.len(),
            bubbles = self.bubbles.len(),
            "rebuilt derived chart data"
        );
    }

    fn rebuild_geometry(&mut self) {
        self.stacked_hit
            .publish(build_stacked_geometry(&self.day_columns, self.config.calibration));
        self.matrix_hit.publish(build_matrix_geometry(
            &self.bubbles,
            self.config.calibration,
            self.config.bubble_base_area_px,
            self.config.hit_padding_px,
            self.config.min_hit_radius_px,
        ));
    }
}
