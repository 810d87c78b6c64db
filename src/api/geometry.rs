//! Forward pixel projection of projected chart data.
//!
//! These builders produce the geometry snapshots the hit testers consume.
//! They run on data change, calibration change and (frame-debounced) resize,
//! never per pointer move.

use std::f64::consts::PI;

use crate::core::matrix::BubblePoint;
use crate::core::stacked::DayColumn;
use crate::core::types::PlotCalibration;
use crate::interaction::hit_test::{
    BubbleGeometry, ColumnGeometry, LaneBand, MatrixGeometry, StackedGeometry,
};

/// Builds per-day lane bands for the stacked chart.
///
/// The value domain always includes zero so the baseline is a real pixel row.
/// Positive lanes stack upward from the baseline in slot order, negative
/// lanes stack downward, matching the bottom-up render order of the columns.
#[must_use]
pub fn build_stacked_geometry(
    columns: &[DayColumn],
    calibration: PlotCalibration,
) -> StackedGeometry {
    let mut value_max = 0.0f64;
    let mut value_min = 0.0f64;
    for column in columns {
        value_max = value_max.max(column.pos_total());
        value_min = value_min.min(column.neg_total());
    }

    let span = value_max - value_min;
    if !calibration.is_usable() || span <= 0.0 {
        return StackedGeometry {
            calibration,
            columns: columns.iter().map(|_| ColumnGeometry::default()).collect(),
        };
    }

    let value_to_y =
        |value: f64| calibration.origin_y + (value_max - value) / span * calibration.plot_height;

    let column_geometries = columns
        .iter()
        .map(|column| {
            let mut bands = Vec::with_capacity(column.pos.len() + column.neg.len());

            let mut running = 0.0;
            for lane in &column.pos {
                let next = running + lane.value;
                bands.push(LaneBand {
                    slot: lane.slot,
                    negative: false,
                    y_top: value_to_y(next),
                    y_bottom: value_to_y(running),
                });
                running = next;
            }

            let mut running = 0.0;
            for lane in &column.neg {
                let next = running + lane.value;
                bands.push(LaneBand {
                    slot: lane.slot,
                    negative: true,
                    y_top: value_to_y(running),
                    y_bottom: value_to_y(next),
                });
                running = next;
            }

            ColumnGeometry { bands }
        })
        .collect();

    StackedGeometry {
        calibration,
        columns: column_geometries,
    }
}

/// Maps matrix bubbles from relative coordinates into pixel space.
///
/// Both matrix axes span [-100, 100]. The rendered radius follows bubble area
/// (`area = base_area * z`, `r = sqrt(area / pi)`); the hit radius adds fixed
/// padding and is floored at `min_hit_radius_px`.
#[must_use]
pub fn build_matrix_geometry(
    bubbles: &[BubblePoint],
    calibration: PlotCalibration,
    bubble_base_area_px: f64,
    hit_padding_px: f64,
    min_hit_radius_px: f64,
) -> MatrixGeometry {
    if !calibration.is_usable() {
        return MatrixGeometry {
            calibration,
            bubbles: Vec::new(),
        };
    }

    let bubble_geometries = bubbles
        .iter()
        .enumerate()
        .map(|(index, bubble)| {
            let center_x =
                calibration.origin_x + (bubble.x + 100.0) / 200.0 * calibration.plot_width;
            let center_y =
                calibration.origin_y + (100.0 - bubble.y) / 200.0 * calibration.plot_height;
            let radius_px = (bubble_base_area_px * bubble.z / PI).sqrt();
            let hit_radius_px = (radius_px + hit_padding_px).max(min_hit_radius_px);

            BubbleGeometry {
                index,
                center_x,
                center_y,
                radius_px,
                hit_radius_px,
            }
        })
        .collect();

    MatrixGeometry {
        calibration,
        bubbles: bubble_geometries,
    }
}
