use creative_board::core::Viewport;
use creative_board::interaction::{
    PointId, TooltipController, TooltipEffect, TooltipEvent, TooltipState, clamp_position,
};

const GRACE_MS: f64 = 250.0;

fn point(index: usize) -> PointId {
    PointId::Bubble { index }
}

fn controller() -> TooltipController {
    TooltipController::new(GRACE_MS)
}

#[test]
fn hit_shows_tooltip_with_content() {
    let mut tooltip = controller();
    let effects = tooltip.step(TooltipEvent::HitFound(point(3)), 0.0);

    assert_eq!(tooltip.state(), TooltipState::Showing(point(3)));
    assert!(effects.contains(&TooltipEffect::ContentChanged(point(3))));
}

#[test]
fn content_swaps_only_when_identity_changes() {
    let mut tooltip = controller();
    tooltip.step(TooltipEvent::HitFound(point(1)), 0.0);

    // Re-hitting the same point on later pointer moves is silent.
    let same = tooltip.step(TooltipEvent::HitFound(point(1)), 10.0);
    assert!(same.is_empty());

    let different = tooltip.step(TooltipEvent::HitFound(point(2)), 20.0);
    assert!(different.contains(&TooltipEffect::ContentChanged(point(2))));
    assert_eq!(tooltip.state(), TooltipState::Showing(point(2)));
}

#[test]
fn gap_shorter_than_grace_never_hides() {
    let mut tooltip = controller();
    tooltip.step(TooltipEvent::HitFound(point(0)), 0.0);

    let missed = tooltip.step(TooltipEvent::HitNone, 50.0);
    assert!(missed.contains(&TooltipEffect::HideScheduled));

    // Ticks inside the grace window do nothing.
    assert!(tooltip.step(TooltipEvent::Tick, 100.0).is_empty());
    assert!(tooltip.step(TooltipEvent::Tick, 299.0).is_empty());

    // Re-hit before the deadline cancels the pending hide.
    let rehit = tooltip.step(TooltipEvent::HitFound(point(0)), 299.5);
    assert!(rehit.contains(&TooltipEffect::HideCancelled));
    assert_eq!(tooltip.state(), TooltipState::Showing(point(0)));

    // The stale deadline is gone.
    assert!(tooltip.step(TooltipEvent::Tick, 10_000.0).is_empty());
    assert_eq!(tooltip.state(), TooltipState::Showing(point(0)));
}

#[test]
fn gap_longer_than_grace_hides() {
    let mut tooltip = controller();
    tooltip.step(TooltipEvent::HitFound(point(0)), 0.0);
    tooltip.step(TooltipEvent::HitNone, 50.0);

    let effects = tooltip.step(TooltipEvent::Tick, 50.0 + GRACE_MS);
    assert!(effects.contains(&TooltipEffect::Hidden));
    assert_eq!(tooltip.state(), TooltipState::Hidden);
    assert_eq!(tooltip.visible_point(), None);
}

#[test]
fn repeated_misses_keep_the_first_deadline() {
    let mut tooltip = controller();
    tooltip.step(TooltipEvent::HitFound(point(0)), 0.0);
    tooltip.step(TooltipEvent::HitNone, 50.0);

    // Later misses must not push the deadline back.
    let second_miss = tooltip.step(TooltipEvent::HitNone, 250.0);
    assert!(second_miss.is_empty());

    let effects = tooltip.step(TooltipEvent::Tick, 300.0);
    assert!(effects.contains(&TooltipEffect::Hidden));
}

#[test]
fn panel_entry_pins_and_cancels_pending_hide() {
    let mut tooltip = controller();
    tooltip.step(TooltipEvent::HitFound(point(7)), 0.0);
    tooltip.step(TooltipEvent::HitNone, 10.0);

    let pinned = tooltip.step(TooltipEvent::PanelEnter, 100.0);
    assert!(pinned.contains(&TooltipEffect::Pinned));
    assert!(pinned.contains(&TooltipEffect::HideCancelled));
    assert_eq!(tooltip.state(), TooltipState::Pinned(point(7)));

    // The original deadline passing changes nothing while pinned.
    assert!(tooltip.step(TooltipEvent::Tick, 1_000.0).is_empty());
    assert_eq!(tooltip.state(), TooltipState::Pinned(point(7)));
}

#[test]
fn panel_leave_unpins_and_restarts_grace() {
    let mut tooltip = controller();
    tooltip.step(TooltipEvent::HitFound(point(7)), 0.0);
    tooltip.step(TooltipEvent::PanelEnter, 10.0);

    let unpinned = tooltip.step(TooltipEvent::PanelLeave, 500.0);
    assert!(unpinned.contains(&TooltipEffect::Unpinned));
    assert!(unpinned.contains(&TooltipEffect::HideScheduled));
    assert_eq!(tooltip.state(), TooltipState::Showing(point(7)));

    assert!(tooltip.step(TooltipEvent::Tick, 500.0 + GRACE_MS - 1.0).is_empty());
    let effects = tooltip.step(TooltipEvent::Tick, 500.0 + GRACE_MS);
    assert!(effects.contains(&TooltipEffect::Hidden));
}

#[test]
fn hits_while_pinned_do_not_retarget_content() {
    let mut tooltip = controller();
    tooltip.step(TooltipEvent::HitFound(point(1)), 0.0);
    tooltip.step(TooltipEvent::PanelEnter, 10.0);

    let effects = tooltip.step(TooltipEvent::HitFound(point(2)), 20.0);
    assert!(effects.is_empty());
    assert_eq!(tooltip.state(), TooltipState::Pinned(point(1)));
}

#[test]
fn chart_leave_uses_the_same_delayed_hide() {
    let mut tooltip = controller();
    tooltip.step(TooltipEvent::HitFound(point(0)), 0.0);

    let leave = tooltip.step(TooltipEvent::ChartLeave, 100.0);
    assert!(leave.contains(&TooltipEffect::HideScheduled));
    assert_eq!(tooltip.state(), TooltipState::Showing(point(0)));

    let effects = tooltip.step(TooltipEvent::Tick, 100.0 + GRACE_MS);
    assert!(effects.contains(&TooltipEffect::Hidden));
}

#[test]
fn events_while_hidden_are_inert() {
    let mut tooltip = controller();
    assert!(tooltip.step(TooltipEvent::HitNone, 0.0).is_empty());
    assert!(tooltip.step(TooltipEvent::PanelEnter, 1.0).is_empty());
    assert!(tooltip.step(TooltipEvent::PanelLeave, 2.0).is_empty());
    assert!(tooltip.step(TooltipEvent::Tick, 3.0).is_empty());
    assert_eq!(tooltip.state(), TooltipState::Hidden);
}

#[test]
fn position_clamps_to_container_bounds() {
    let container = Viewport::new(1000, 600);

    // Free space: unchanged.
    assert_eq!(
        clamp_position(100.0, 100.0, 240.0, 160.0, container),
        (100.0, 100.0)
    );
    // Overflowing right/bottom: pushed back inside.
    assert_eq!(
        clamp_position(950.0, 580.0, 240.0, 160.0, container),
        (760.0, 440.0)
    );
    // Negative coordinates clamp to the origin.
    assert_eq!(
        clamp_position(-20.0, -5.0, 240.0, 160.0, container),
        (0.0, 0.0)
    );
}

#[test]
fn panel_larger_than_container_pins_to_origin() {
    let container = Viewport::new(100, 100);
    assert_eq!(
        clamp_position(50.0, 50.0, 240.0, 160.0, container),
        (0.0, 0.0)
    );
}
