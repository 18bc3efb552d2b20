//! World camera.
//!
//! Orthographic, centered on its position, `zoom` pixels per world unit. The
//! position chases the player with the same exponential approach the HUD
//! fades use.

use abyx_core::approach_vector;
use abyx_shared::Vec2;

/// Camera that follows a target.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Camera2D {
    position: Vec2,
    zoom: f32,
    follow_rate: f32,
}

impl Camera2D {
    /// Camera at the origin.
    #[must_use]
    pub const fn new(zoom: f32, follow_rate: f32) -> Self {
        Self {
            position: Vec2::ZERO,
            zoom,
            follow_rate,
        }
    }

    /// Current center in world units.
    #[must_use]
    pub const fn position(&self) -> Vec2 {
        self.position
    }

    /// Moves toward `target`. Returns `true` once it has arrived.
    pub fn follow(&mut self, target: Vec2, dt: f32) -> bool {
        let (position, reached) = approach_vector(self.position, target, dt, self.follow_rate);
        self.position = position;
        reached
    }

    /// Jumps to `position`.
    pub fn snap_to(&mut self, position: Vec2) {
        self.position = position;
    }

    /// Frozen view for a window of `viewport` pixels.
    #[must_use]
    pub const fn view(&self, viewport: Vec2) -> CameraView {
        CameraView {
            position: self.position,
            zoom: self.zoom,
            viewport,
        }
    }
}

/// Camera state captured once per tick.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct CameraView {
    /// Center in world units.
    pub position: Vec2,
    /// Pixels per world unit.
    pub zoom: f32,
    /// Window size in pixels.
    pub viewport: Vec2,
}

impl CameraView {
    /// Window pixel (origin bottom-left) to world position.
    #[must_use]
    pub fn screen_to_world(&self, pixel: Vec2) -> Vec2 {
        self.position + (pixel - self.viewport * 0.5) * (1.0 / self.zoom)
    }

    /// World position to window pixel (origin bottom-left).
    #[must_use]
    pub fn world_to_screen(&self, world: Vec2) -> Vec2 {
        (world - self.position) * self.zoom + self.viewport * 0.5
    }
}
