pub mod aggregate;
pub mod daily;
pub mod matrix;
pub mod palette;
pub mod primitives;
pub mod record;
pub mod slots;
pub mod stacked;
pub mod types;

pub use aggregate::{CreativeAggregate, aggregate};
pub use daily::DailyProfitTable;
pub use matrix::{BubblePoint, project_matrix};
pub use record::{RawRecord, UNCLASSIFIED_KEY};
pub use slots::{ColorRanking, DaySlots, SlotAssignment, assign_day_slots};
pub use stacked::{DayColumn, LaneEntry, day_index_at, project_stacked};
pub use types::{PlotCalibration, Viewport};
