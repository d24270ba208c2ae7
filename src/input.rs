//! Input model: modifier keys, per-overlay frame payloads, and the
//! frame-coalescing gate.
//!
//! Every overlay redraw is scheduled through a [`FrameGate`]: an event flips
//! the gate from idle to pending (carrying whatever the frame needs), and
//! further events of the same kind are dropped until the frame runs. This is
//! the backpressure policy that bounds redraw work to once per display frame
//! no matter how fast events arrive.

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

use crate::hex::Hex;

/// Keyboard modifier keys held during a pointer event.
#[allow(clippy::struct_excessive_bools)]
#[derive(Debug, Clone, Copy, Default)]
pub struct Modifiers {
    /// Shift key is held.
    pub shift: bool,
    /// Ctrl key is held.
    pub ctrl: bool,
    /// Alt / Option key is held.
    pub alt: bool,
    /// Meta / Command key is held.
    pub meta: bool,
}

/// One-shot scheduling gate: at most one frame pending per overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameGate<T> {
    /// No frame pending; the next event schedules one.
    Idle,
    /// A frame is scheduled and carries its payload; further events are
    /// coalesced away until [`FrameGate::take`] drains it.
    Pending(T),
}

impl<T> Default for FrameGate<T> {
    fn default() -> Self {
        Self::Idle
    }
}

impl<T> FrameGate<T> {
    /// Schedule a frame carrying `payload`.
    ///
    /// Returns whether a frame became newly pending; `false` means the event
    /// was coalesced into the one already scheduled and its payload dropped.
    pub fn schedule(&mut self, payload: T) -> bool {
        if matches!(self, Self::Pending(_)) {
            return false;
        }
        *self = Self::Pending(payload);
        true
    }

    /// Drain the pending payload, returning the gate to idle.
    pub fn take(&mut self) -> Option<T> {
        match std::mem::replace(self, Self::Idle) {
            Self::Pending(payload) => Some(payload),
            Self::Idle => None,
        }
    }

    /// Whether a frame is currently scheduled.
    #[must_use]
    pub fn is_pending(&self) -> bool {
        matches!(self, Self::Pending(_))
    }
}

/// Pending work for the mouse overlay's next frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MouseFrame {
    /// Record the hex under the pointer, then repaint the trail.
    Track(Hex),
    /// Repaint the existing trail as-is (the viewport changed).
    Repaint,
}

/// Pending work for the map overlay's next frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MapFrame {
    /// Raise or lower the clicked cell, then repaint the terrain.
    Edit {
        /// The clicked cell.
        location: Hex,
        /// Lower instead of raise (modifier key was held).
        lower: bool,
    },
    /// Repaint the existing terrain as-is (the viewport changed).
    Repaint,
}
