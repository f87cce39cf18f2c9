//! Input snapshot
//!
//! The host samples its input device once per tick and hands the
//! session this plain boolean snapshot. Fire is a held-state flag; the
//! session turns it into an edge trigger so a held key fires once.

/// Control state for one tick.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InputState {
    /// Rotate counter-clockwise
    pub left: bool,

    /// Rotate clockwise
    pub right: bool,

    /// Accelerate along the current heading
    pub thrust: bool,

    /// Fire trigger (held state; edge detection is the session's job)
    pub fire: bool,
}

impl InputState {
    /// Snapshot with no controls active.
    pub fn idle() -> Self {
        Self::default()
    }
}
