//! Per-tick scratch state.

use abyx_core::EntityHandle;
use abyx_shared::Vec2;

use crate::camera::CameraView;

/// State that lives for exactly one tick. Reset before anything else runs.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct WorldFrame {
    /// Entity under the cursor, chosen by the select phase.
    pub selected: Option<EntityHandle>,
    /// The HUD owns the cursor this tick.
    pub hover_consumed: bool,
    /// Camera as seen by this tick.
    pub view: CameraView,
    /// Cursor in world units.
    pub cursor_world: Vec2,
}

impl WorldFrame {
    /// Clears everything.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
