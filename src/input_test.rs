#![allow(clippy::clone_on_copy)]

use super::*;

// =============================================================
// FrameGate
// =============================================================

#[test]
fn gate_starts_idle() {
    let gate: FrameGate<u8> = FrameGate::default();
    assert!(!gate.is_pending());
}

#[test]
fn schedule_from_idle_reports_a_new_frame() {
    let mut gate = FrameGate::default();
    assert!(gate.schedule(7));
    assert!(gate.is_pending());
}

#[test]
fn schedule_while_pending_coalesces() {
    let mut gate = FrameGate::default();
    assert!(gate.schedule(7));
    assert!(!gate.schedule(8));
    assert!(!gate.schedule(9));
    // The first payload survives; later ones were dropped.
    assert_eq!(gate.take(), Some(7));
}

#[test]
fn take_returns_the_gate_to_idle() {
    let mut gate = FrameGate::default();
    gate.schedule("repaint");
    assert_eq!(gate.take(), Some("repaint"));
    assert!(!gate.is_pending());
    assert_eq!(gate.take(), None);
}

#[test]
fn take_rearms_scheduling() {
    let mut gate = FrameGate::default();
    assert!(gate.schedule(1));
    gate.take();
    assert!(gate.schedule(2));
    assert_eq!(gate.take(), Some(2));
}

#[test]
fn take_on_an_idle_gate_is_none() {
    let mut gate: FrameGate<Hex> = FrameGate::default();
    assert_eq!(gate.take(), None);
}

// =============================================================
// Modifiers
// =============================================================

#[test]
fn modifiers_default_to_none_held() {
    let modifiers = Modifiers::default();
    assert!(!modifiers.shift);
    assert!(!modifiers.ctrl);
    assert!(!modifiers.alt);
    assert!(!modifiers.meta);
}

// =============================================================
// Frame payloads
// =============================================================

#[test]
fn mouse_frames_compare_by_payload() {
    assert_eq!(
        MouseFrame::Track(Hex::from_axial(1, 2)),
        MouseFrame::Track(Hex::from_axial(1, 2))
    );
    assert_ne!(MouseFrame::Track(Hex::ORIGIN), MouseFrame::Repaint);
}

#[test]
fn map_frames_compare_by_payload() {
    let edit = MapFrame::Edit { location: Hex::ORIGIN, lower: false };
    assert_eq!(edit, MapFrame::Edit { location: Hex::ORIGIN, lower: false });
    assert_ne!(edit, MapFrame::Edit { location: Hex::ORIGIN, lower: true });
    assert_ne!(edit, MapFrame::Repaint);
}
