#![allow(clippy::clone_on_copy, clippy::float_cmp)]

use super::*;

use crate::hex::Hex;

/// An engine that has adopted a viewport and drained the initial repaint, so
/// each test starts from all-idle gates.
fn settled() -> EngineCore {
    let mut core = EngineCore::new(Layout::default());
    core.on_resize(800.0, 600.0);
    let initial = core.frame();
    assert!(!initial.is_empty());
    core
}

// =============================================================
// Frame coalescing
// =============================================================

#[test]
fn idle_frame_is_empty() {
    let mut core = settled();
    assert!(core.frame().is_empty());
}

#[test]
fn first_pointer_move_requests_a_frame() {
    let mut core = settled();
    assert!(core.on_pointer_move(Point::new(10.0, 10.0)));
}

#[test]
fn moves_between_frames_are_coalesced() {
    let mut core = settled();
    assert!(core.on_pointer_move(Point::new(10.0, 10.0)));
    assert!(!core.on_pointer_move(Point::new(20.0, 20.0)));
    assert!(!core.on_pointer_move(Point::new(30.0, 30.0)));
    core.frame();
    // Only the first move's hex was tracked.
    assert_eq!(core.trail.len(), 1);
    assert!(core.on_pointer_move(Point::new(40.0, 40.0)));
}

#[test]
fn clicks_between_frames_are_coalesced() {
    let mut core = settled();
    assert!(core.on_click(Point::new(5.0, 5.0), Modifiers::default()));
    assert!(!core.on_click(Point::new(5.0, 5.0), Modifiers::default()));
    core.frame();
    // The second click was dropped, so only one raise landed.
    assert_eq!(core.terrain.height_at(Hex::ORIGIN), Some(1));
}

#[test]
fn each_overlay_gates_independently() {
    let mut core = settled();
    assert!(core.on_pointer_move(Point::new(10.0, 10.0)));
    assert!(core.on_click(Point::new(10.0, 10.0), Modifiers::default()));
    let out = core.frame();
    assert!(out.grid.is_none());
    assert!(out.mouse.is_some());
    assert!(out.map.is_some());
}

// =============================================================
// Pointer tracking
// =============================================================

#[test]
fn pointer_move_tracks_the_hex_under_the_cursor() {
    let mut core = settled();
    // (50, 10) sits in cell (1, 0, -1) of the default layout.
    core.on_pointer_move(Point::new(50.0, 10.0));
    let out = core.frame();
    let tracked: Vec<Hex> = core.trail.iter().collect();
    assert_eq!(tracked, vec![Hex::from_axial(1, 0)]);

    let Some(commands) = out.mouse else {
        panic!("mouse overlay produced no commands");
    };
    assert_eq!(commands.len(), 1);
    assert!(commands[0].filled);
    assert_eq!(commands[0].color.as_deref(), Some("blue"));
    assert_eq!(
        commands[0].corners,
        core.layout.polygon_corners(Hex::from_axial(1, 0))
    );
}

#[test]
fn trail_grows_across_frames() {
    let mut core = settled();
    core.on_pointer_move(Point::new(0.0, 0.0));
    core.frame();
    core.on_pointer_move(Point::new(50.0, 10.0));
    let out = core.frame();
    assert_eq!(core.trail.len(), 2);
    let Some(commands) = out.mouse else {
        panic!("mouse overlay produced no commands");
    };
    assert_eq!(commands.len(), 2);
}

#[test]
fn last_pointer_follows_every_event() {
    let mut core = settled();
    assert_eq!(core.last_pointer(), None);
    core.on_pointer_move(Point::new(12.0, 34.0));
    assert_eq!(core.last_pointer(), Some(Point::new(12.0, 34.0)));
    core.on_click(Point::new(56.0, 78.0), Modifiers::default());
    assert_eq!(core.last_pointer(), Some(Point::new(56.0, 78.0)));
}

// =============================================================
// Terrain editing
// =============================================================

#[test]
fn click_raises_the_cell() {
    let mut core = settled();
    core.on_click(Point::new(5.0, 5.0), Modifiers::default());
    let out = core.frame();
    assert_eq!(core.terrain.height_at(Hex::ORIGIN), Some(1));

    let Some(commands) = out.map else {
        panic!("map overlay produced no commands");
    };
    assert_eq!(commands.len(), 1);
    assert!(commands[0].filled);
    assert_eq!(commands[0].color.as_deref(), Some("hsl(125, 60%, 60%)"));
}

#[test]
fn two_framed_clicks_stack() {
    let mut core = settled();
    core.on_click(Point::new(5.0, 5.0), Modifiers::default());
    core.frame();
    core.on_click(Point::new(5.0, 5.0), Modifiers::default());
    core.frame();
    assert_eq!(core.terrain.height_at(Hex::ORIGIN), Some(2));
    assert_eq!(core.terrain.len(), 1);
}

#[test]
fn alt_click_lowers_the_cell() {
    let mut core = settled();
    let alt = Modifiers { alt: true, ..Modifiers::default() };
    core.on_click(Point::new(5.0, 5.0), alt);
    let out = core.frame();
    assert_eq!(core.terrain.height_at(Hex::ORIGIN), Some(-1));
    let Some(commands) = out.map else {
        panic!("map overlay produced no commands");
    };
    assert_eq!(commands[0].color.as_deref(), Some("hsl(115, 40%, 40%)"));
}

#[test]
fn click_resolves_through_the_layout() {
    let mut core = settled();
    core.on_click(Point::new(50.0, 10.0), Modifiers::default());
    core.frame();
    assert_eq!(core.terrain.height_at(Hex::from_axial(1, 0)), Some(1));
}

// =============================================================
// Resize
// =============================================================

#[test]
fn resize_repaints_every_overlay() {
    let mut core = settled();
    assert!(core.on_resize(1024.0, 768.0));
    assert_eq!(core.viewport(), (1024.0, 768.0));
    let out = core.frame();
    assert!(out.grid.is_some());
    assert!(out.mouse.is_some());
    assert!(out.map.is_some());
}

#[test]
fn resize_repaint_mutates_nothing() {
    let mut core = settled();
    core.on_pointer_move(Point::new(50.0, 10.0));
    core.on_click(Point::new(5.0, 5.0), Modifiers::default());
    core.frame();
    let trail_len = core.trail.len();
    let terrain_len = core.terrain.len();

    core.on_resize(1024.0, 768.0);
    core.frame();
    assert_eq!(core.trail.len(), trail_len);
    assert_eq!(core.terrain.len(), terrain_len);
    assert_eq!(core.terrain.height_at(Hex::ORIGIN), Some(1));
}

#[test]
fn resize_while_a_frame_is_pending_still_requests_one_gate() {
    let mut core = settled();
    assert!(core.on_pointer_move(Point::new(10.0, 10.0)));
    // The mouse gate is occupied but grid and map gates still open.
    assert!(core.on_resize(640.0, 480.0));
    let out = core.frame();
    assert!(out.grid.is_some());
    assert!(out.map.is_some());
    // The pending move still wins the mouse gate: the hex is tracked.
    assert_eq!(core.trail.len(), 1);
}

// =============================================================
// Grid output
// =============================================================

#[test]
fn grid_commands_are_stroked_with_the_default_color() {
    let mut core = EngineCore::new(Layout::default());
    core.on_resize(800.0, 600.0);
    let out = core.frame();
    let Some(commands) = out.grid else {
        panic!("grid overlay produced no commands");
    };
    assert!(!commands.is_empty());
    for command in &commands {
        assert!(!command.filled);
        assert_eq!(command.color, None);
    }
}

#[test]
fn fresh_engine_has_zero_viewport_and_empty_grid() {
    let mut core = EngineCore::new(Layout::default());
    assert_eq!(core.viewport(), (0.0, 0.0));
    assert!(core.on_resize(0.0, 0.0));
    let out = core.frame();
    assert_eq!(out.grid, Some(Vec::new()));
}
