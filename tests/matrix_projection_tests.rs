use approx::assert_abs_diff_eq;
use creative_board::core::matrix::STALLED_X;
use creative_board::core::{RawRecord, project_matrix, aggregate};

fn record(creative: &str, cv: f64, cost: f64, revenue: f64) -> RawRecord {
    RawRecord {
        date: "2026-08-01".to_owned(),
        creative_name: creative.to_owned(),
        cv,
        cost,
        revenue,
        profit: revenue - cost,
        roas: if cost > 0.0 { revenue / cost * 100.0 } else { 0.0 },
        ..RawRecord::default()
    }
}

#[test]
fn coordinates_stay_clamped_for_extreme_outliers() {
    let records = vec![
        record("whale", 100_000.0, 10.0, 1_000_000.0),
        record("a", 1.0, 10.0, 20.0),
        record("b", 1.0, 10.0, 20.0),
        record("c", 1.0, 10.0, 20.0),
    ];

    let bubbles = project_matrix(&aggregate(&records));
    for bubble in &bubbles {
        assert!(bubble.x >= -100.0 && bubble.x <= 100.0, "x = {}", bubble.x);
        assert!(bubble.y >= -100.0 && bubble.y <= 100.0, "y = {}", bubble.y);
        assert!(bubble.z >= 0.5 && bubble.z <= 2.0, "z = {}", bubble.z);
    }

    let whale = bubbles.iter().find(|b| b.creative == "whale").expect("whale");
    assert_abs_diff_eq!(whale.x, 100.0, epsilon = 1e-9);
    assert_abs_diff_eq!(whale.z, 2.0, epsilon = 1e-9);
}

#[test]
fn x_is_mean_relative_over_converting_creatives() {
    // mean cv = 2.0; cv 3.0 sits (3/2 - 1) * 50 = 25 to the right.
    let records = vec![
        record("hi", 3.0, 100.0, 300.0),
        record("lo", 1.0, 100.0, 300.0),
    ];

    let bubbles = project_matrix(&aggregate(&records));
    let hi = bubbles.iter().find(|b| b.creative == "hi").expect("hi");
    let lo = bubbles.iter().find(|b| b.creative == "lo").expect("lo");

    assert_abs_diff_eq!(hi.x, 25.0, epsilon = 1e-9);
    assert_abs_diff_eq!(lo.x, -25.0, epsilon = 1e-9);
}

#[test]
fn profitable_y_is_range_normalized_into_upper_band() {
    let records = vec![
        record("best", 2.0, 100.0, 500.0),  // profit 400
        record("worst", 2.0, 100.0, 150.0), // profit 50
        record("mid", 2.0, 100.0, 325.0),   // profit 225
    ];

    let bubbles = project_matrix(&aggregate(&records));
    let best = bubbles.iter().find(|b| b.creative == "best").expect("best");
    let worst = bubbles.iter().find(|b| b.creative == "worst").expect("worst");
    let mid = bubbles.iter().find(|b| b.creative == "mid").expect("mid");

    assert_abs_diff_eq!(best.y, 95.0, epsilon = 1e-9);
    assert_abs_diff_eq!(worst.y, 5.0, epsilon = 1e-9);
    assert_abs_diff_eq!(mid.y, 50.0, epsilon = 1e-9);
}

#[test]
fn losing_y_maps_mildest_loss_nearest_zero() {
    let records = vec![
        record("mild", 2.0, 100.0, 90.0),  // profit -10
        record("worst", 2.0, 500.0, 100.0), // profit -400
    ];

    let bubbles = project_matrix(&aggregate(&records));
    let mild = bubbles.iter().find(|b| b.creative == "mild").expect("mild");
    let worst = bubbles.iter().find(|b| b.creative == "worst").expect("worst");

    assert_abs_diff_eq!(mild.y, -5.0, epsilon = 1e-9);
    assert_abs_diff_eq!(worst.y, -95.0, epsilon = 1e-9);
}

#[test]
fn equal_values_collapse_to_sub_range_midpoint() {
    let records = vec![
        record("a", 2.0, 100.0, 200.0),
        record("b", 2.0, 100.0, 200.0),
    ];

    let bubbles = project_matrix(&aggregate(&records));
    for bubble in &bubbles {
        assert_abs_diff_eq!(bubble.y, 50.0, epsilon = 1e-9);
    }
}

#[test]
fn quadrants_split_on_mean_cv_and_profit_sign() {
    let records = vec![
        record("q1", 10.0, 100.0, 300.0), // high cv, profit > 0
        record("q2", 10.0, 300.0, 100.0), // high cv, profit < 0
        record("q3", 1.0, 100.0, 300.0),  // low cv, profit > 0
        record("q4", 1.0, 300.0, 100.0),  // low cv, profit < 0
    ];

    let bubbles = project_matrix(&aggregate(&records));
    for (creative, quadrant) in [("q1", 1), ("q2", 2), ("q3", 3), ("q4", 4)] {
        let bubble = bubbles
            .iter()
            .find(|b| b.creative == creative)
            .expect("bubble present");
        assert_eq!(bubble.quadrant, quadrant, "creative {creative}");
        assert!(!bubble.stalled);
    }
}

#[test]
fn scenario_single_stalled_loser_is_pinned() {
    // cv = 0 and losing money, with no other cv=0 losers: pinned to the left
    // edge at the midpoint of the stalled sub-range.
    let records = vec![
        record("stalled", 0.0, 300.0, 100.0), // profit -200
        record("active", 5.0, 100.0, 300.0),
    ];

    let bubbles = project_matrix(&aggregate(&records));
    let stalled = bubbles
        .iter()
        .find(|b| b.creative == "stalled")
        .expect("stalled bubble");

    assert!(stalled.stalled);
    assert_abs_diff_eq!(stalled.x, STALLED_X, epsilon = 1e-9);
    assert_abs_diff_eq!(stalled.y, -75.0, epsilon = 1e-9);
    assert_eq!(stalled.quadrant, 4);
    assert_abs_diff_eq!(stalled.z, 0.5, epsilon = 1e-9);
}

#[test]
fn stalled_losers_stack_by_loss_magnitude() {
    let records = vec![
        record("worst", 0.0, 900.0, 100.0), // profit -800
        record("mild", 0.0, 150.0, 100.0),  // profit -50
        record("active", 5.0, 100.0, 300.0),
    ];

    let bubbles = project_matrix(&aggregate(&records));
    let worst = bubbles.iter().find(|b| b.creative == "worst").expect("worst");
    let mild = bubbles.iter().find(|b| b.creative == "mild").expect("mild");

    assert!(worst.y < mild.y);
    assert_abs_diff_eq!(worst.x, STALLED_X, epsilon = 1e-9);
    assert_abs_diff_eq!(mild.x, STALLED_X, epsilon = 1e-9);
}

#[test]
fn zero_cv_profitable_creatives_are_skipped() {
    let records = vec![
        record("silent-winner", 0.0, 100.0, 300.0),
        record("active", 5.0, 100.0, 300.0),
    ];

    let bubbles = project_matrix(&aggregate(&records));
    assert_eq!(bubbles.len(), 1);
    assert_eq!(bubbles[0].creative, "active");
}

#[test]
fn zero_mean_roas_yields_neutral_bubble_size() {
    // Revenue-free records: every roas is 0, so the mean is 0 and size falls
    // back to neutral instead of dividing by zero.
    let records = vec![
        record("a", 2.0, 100.0, 0.0),
        record("b", 3.0, 100.0, 0.0),
    ];

    let bubbles = project_matrix(&aggregate(&records));
    for bubble in &bubbles {
        assert_abs_diff_eq!(bubble.z, 1.0, epsilon = 1e-9);
    }
}

#[test]
fn empty_aggregates_project_to_no_bubbles() {
    assert!(project_matrix(&[]).is_empty());
}
