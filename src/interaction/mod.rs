pub mod throttle;
pub mod tooltip;

pub use hit_test::{
    BubbleGeometry, ColumnGeometry, LaneBand, MatrixGeometry, MatrixHitTester, StackedGeometry,
    StackedHitTester,
};
pub use throttle::{FrameDebounce, ThrottleGate};
pub use tooltip::{
    PointId, TooltipController, TooltipEffect, TooltipEffects, TooltipEvent, TooltipState,
    clamp_position,
};
