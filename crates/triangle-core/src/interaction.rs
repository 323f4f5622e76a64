//! Pointer drag tracking.
//!
//! Points are in canvas backing-store pixels with Y growing downward. The web
//! front-end maps DOM client coordinates into this space before feeding events
//! in.

use glam::Vec2;

/// A single pointer event as delivered by the host, in arrival order.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PointerInput {
    Down { x: f32, y: f32 },
    Move { x: f32, y: f32 },
    Up,
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum InteractionState {
    #[default]
    Idle,
    Dragging {
        anchor: Vec2,
        current: Vec2,
    },
}

impl InteractionState {
    #[inline]
    pub fn is_dragging(&self) -> bool {
        matches!(self, Self::Dragging { .. })
    }

    /// Starts a drag. Ignored while already dragging so a duplicate down event
    /// cannot re-anchor. Returns whether the state changed.
    pub fn press(&mut self, x: f32, y: f32) -> bool {
        match self {
            Self::Dragging { .. } => false,
            Self::Idle => {
                let p = Vec2::new(x, y);
                *self = Self::Dragging {
                    anchor: p,
                    current: p,
                };
                true
            }
        }
    }

    /// Tracks the live pointer position; no-op while idle.
    pub fn track(&mut self, x: f32, y: f32) -> bool {
        match self {
            Self::Dragging { current, .. } => {
                *current = Vec2::new(x, y);
                true
            }
            Self::Idle => false,
        }
    }

    pub fn release(&mut self) -> bool {
        match self {
            Self::Dragging { .. } => {
                *self = Self::Idle;
                true
            }
            Self::Idle => false,
        }
    }

    pub fn handle(&mut self, input: PointerInput) -> bool {
        match input {
            PointerInput::Down { x, y } => self.press(x, y),
            PointerInput::Move { x, y } => self.track(x, y),
            PointerInput::Up => self.release(),
        }
    }

    /// `current - anchor` in screen space, only while dragging.
    #[inline]
    pub fn screen_delta(&self) -> Option<Vec2> {
        match self {
            Self::Dragging { anchor, current } => Some(*current - *anchor),
            Self::Idle => None,
        }
    }

    #[inline]
    pub fn anchor(&self) -> Option<Vec2> {
        match self {
            Self::Dragging { anchor, .. } => Some(*anchor),
            Self::Idle => None,
        }
    }
}

/// Which pointer owns the current drag. Events from any other pointer id are
/// dropped before they reach `InteractionState`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PointerGate {
    active: Option<i32>,
}

impl PointerGate {
    #[inline]
    pub fn active(&self) -> Option<i32> {
        self.active
    }

    /// Claims the gate for `pointer_id` if no pointer holds it.
    pub fn begin(&mut self, pointer_id: i32) -> bool {
        match self.active {
            Some(_) => false,
            None => {
                self.active = Some(pointer_id);
                true
            }
        }
    }

    #[inline]
    pub fn owns(&self, pointer_id: i32) -> bool {
        self.active == Some(pointer_id)
    }

    /// Releases the gate on up, cancel or lost capture of the owning pointer.
    pub fn end(&mut self, pointer_id: i32) -> bool {
        if self.owns(pointer_id) {
            self.active = None;
            true
        } else {
            false
        }
    }
}
