//! Pointer gesture state.
//!
//! A pointer-down either starts a drag session on a bead or starts rotating
//! the whole assembly. The session lives until the matching pointer-up (or
//! capture loss); only one pointer is tracked at a time.

use crate::bead::BeadId;
use crate::constants::{PITCH_LIMIT, ROTATION_SPEED};
use glam::{Mat4, Vec2};

/// Orientation of the whole assembly, changed by dragging empty space.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct AssemblyRotation {
    /// Rotation about X, clamped to `±PITCH_LIMIT`.
    pub pitch: f32,
    /// Rotation about Y, unbounded.
    pub yaw: f32,
}

impl AssemblyRotation {
    /// Horizontal travel turns about Y, vertical travel tilts about X.
    pub fn apply_drag(&mut self, delta_px: Vec2) {
        self.yaw += delta_px.x * ROTATION_SPEED;
        self.pitch = (self.pitch + delta_px.y * ROTATION_SPEED).clamp(-PITCH_LIMIT, PITCH_LIMIT);
    }

    /// Local-to-world transform of the assembly.
    pub fn model_matrix(&self) -> Mat4 {
        Mat4::from_rotation_x(self.pitch) * Mat4::from_rotation_y(self.yaw)
    }
}

/// Caller-side throttle for the click sound.
#[derive(Clone, Copy, Debug)]
pub struct ClickThrottle {
    pub min_interval_sec: f64,
    last: Option<f64>,
}

impl ClickThrottle {
    pub fn new(min_interval_sec: f64) -> Self {
        Self {
            min_interval_sec,
            last: None,
        }
    }

    /// Whether a click may sound at `now_sec`; records it if so.
    pub fn try_fire(&mut self, now_sec: f64) -> bool {
        match self.last {
            Some(t) if now_sec - t < self.min_interval_sec => false,
            _ => {
                self.last = Some(now_sec);
                true
            }
        }
    }
}

/// One bead drag, from pointer-down to pointer-up.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DragSession {
    pub bead: BeadId,
    pub pointer_id: i32,
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum Gesture {
    #[default]
    Idle,
    Rotating {
        pointer_id: i32,
        last: Vec2,
    },
    Dragging(DragSession),
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PointerDown {
    BeginDrag { bead: BeadId, play_click: bool },
    BeginRotate,
    /// Another pointer already owns the gesture.
    Ignored,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PointerMove {
    /// Project the pointer onto this bead's rod and drag it there.
    Drag { bead: BeadId },
    Rotated,
    /// No gesture in progress; the caller may refresh the hover bead.
    Idle,
    /// Another pointer owns the gesture.
    Ignored,
}

#[derive(Clone, Debug)]
pub struct Interaction {
    gesture: Gesture,
    hover: Option<BeadId>,
    rotation: AssemblyRotation,
    clicks: ClickThrottle,
}

impl Interaction {
    pub fn new(click_interval_sec: f64) -> Self {
        Self {
            gesture: Gesture::Idle,
            hover: None,
            rotation: AssemblyRotation::default(),
            clicks: ClickThrottle::new(click_interval_sec),
        }
    }

    #[inline]
    pub fn gesture(&self) -> Gesture {
        self.gesture
    }

    #[inline]
    pub fn hover(&self) -> Option<BeadId> {
        self.hover
    }

    #[inline]
    pub fn rotation(&self) -> AssemblyRotation {
        self.rotation
    }

    #[inline]
    pub fn dragged_bead(&self) -> Option<BeadId> {
        match self.gesture {
            Gesture::Dragging(s) => Some(s.bead),
            _ => None,
        }
    }

    /// Returns whether the hover bead changed.
    pub fn set_hover(&mut self, hover: Option<BeadId>) -> bool {
        let changed = self.hover != hover;
        self.hover = hover;
        changed
    }

    /// `hit` is the bead under the pointer, if any.
    pub fn pointer_down(
        &mut self,
        pointer_id: i32,
        pos: Vec2,
        hit: Option<BeadId>,
        now_sec: f64,
    ) -> PointerDown {
        if self.gesture != Gesture::Idle {
            return PointerDown::Ignored;
        }
        match hit {
            Some(bead) => {
                self.gesture = Gesture::Dragging(DragSession { bead, pointer_id });
                PointerDown::BeginDrag {
                    bead,
                    play_click: self.clicks.try_fire(now_sec),
                }
            }
            None => {
                self.gesture = Gesture::Rotating {
                    pointer_id,
                    last: pos,
                };
                PointerDown::BeginRotate
            }
        }
    }

    /// Only the pointer that owns the gesture advances it.
    pub fn pointer_move(&mut self, pointer_id: i32, pos: Vec2) -> PointerMove {
        match &mut self.gesture {
            Gesture::Dragging(s) if s.pointer_id != pointer_id => PointerMove::Ignored,
            Gesture::Rotating { pointer_id: owner, .. } if *owner != pointer_id => {
                PointerMove::Ignored
            }
            Gesture::Dragging(s) => PointerMove::Drag { bead: s.bead },
            Gesture::Rotating { last, .. } => {
                self.rotation.apply_drag(pos - *last);
                *last = pos;
                PointerMove::Rotated
            }
            Gesture::Idle => PointerMove::Idle,
        }
    }

    /// Ends the gesture owned by `pointer_id`. Returns the bead whose drag
    /// ended so the caller can snap it.
    pub fn pointer_up(&mut self, pointer_id: i32) -> Option<BeadId> {
        let owner = match self.gesture {
            Gesture::Idle => return None,
            Gesture::Rotating { pointer_id, .. } => pointer_id,
            Gesture::Dragging(s) => s.pointer_id,
        };
        if owner != pointer_id {
            return None;
        }
        let ended = self.dragged_bead();
        self.gesture = Gesture::Idle;
        ended
    }

    pub fn reset_rotation(&mut self) {
        self.rotation = AssemblyRotation::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn throttle_blocks_rapid_repeats() {
        let mut t = ClickThrottle::new(0.06);
        assert!(t.try_fire(1.0));
        assert!(!t.try_fire(1.03));
        assert!(t.try_fire(1.07));
    }
}
