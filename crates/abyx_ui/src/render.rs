//! Render contract.
//!
//! The simulation describes each frame through [`Renderer`] and never reads
//! anything back. [`DrawList`] is the recording implementation: it turns the
//! calls into [`DrawCommand`]s that a backend (or a test) consumes later.

use abyx_shared::Vec2;
use bytemuck::{Pod, Zeroable};

/// RGBA color, components in `[0, 1]`.
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Pod, Zeroable)]
pub struct Color {
    /// Red
    pub r: f32,
    /// Green
    pub g: f32,
    /// Blue
    pub b: f32,
    /// Alpha
    pub a: f32,
}

impl Color {
    /// Opaque white, the neutral tint.
    pub const WHITE: Self = Self::new(1.0, 1.0, 1.0, 1.0);
    /// Selection highlight.
    pub const GREEN: Self = Self::new(0.0, 1.0, 0.0, 1.0);
    /// Structure palette tint.
    pub const RED: Self = Self::new(1.0, 0.0, 0.0, 1.0);
    /// Half-transparent black behind HUD panels.
    pub const PANEL: Self = Self::new(0.0, 0.0, 0.0, 0.5);

    /// Creates a color.
    #[must_use]
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Same color with alpha multiplied by `factor`.
    #[must_use]
    pub fn fade(self, factor: f32) -> Self {
        Self {
            a: self.a * factor,
            ..self
        }
    }

    /// As a GPU-friendly array.
    #[must_use]
    pub fn to_array(self) -> [f32; 4] {
        bytemuck::cast(self)
    }
}

/// Coordinate space of subsequent draw calls.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Space {
    /// World units, through the camera.
    #[default]
    World,
    /// Logical HUD units, origin bottom-left.
    Screen,
}

/// Translation and scale without rotation.
///
/// Builder calls compose in local space: `translate` moves by an offset that
/// is itself scaled by everything applied so far.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transform2D {
    /// Where the local origin lands.
    pub translation: Vec2,
    /// Per-axis scale.
    pub scale: Vec2,
}

impl Default for Transform2D {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Transform2D {
    /// No-op transform.
    pub const IDENTITY: Self = Self {
        translation: Vec2::ZERO,
        scale: Vec2::ONE,
    };

    /// Pure translation.
    #[must_use]
    pub const fn from_translation(translation: Vec2) -> Self {
        Self {
            translation,
            scale: Vec2::ONE,
        }
    }

    /// Moves the local origin by `offset`.
    #[must_use]
    pub fn translate(self, offset: Vec2) -> Self {
        Self {
            translation: self.translation + self.scale.mul_elem(offset),
            ..self
        }
    }

    /// Scales uniformly around the local origin.
    #[must_use]
    pub fn scaled(self, factor: f32) -> Self {
        Self {
            scale: self.scale * factor,
            ..self
        }
    }

    /// Maps a local point.
    #[must_use]
    pub fn apply(self, point: Vec2) -> Vec2 {
        self.translation + self.scale.mul_elem(point)
    }
}

/// Opaque reference to a loaded image.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct ImageHandle(pub u32);

/// One recorded draw call.
#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
    /// Textured quad.
    Image {
        /// Image to sample.
        image: ImageHandle,
        /// Placement of the quad's bottom-left corner.
        transform: Transform2D,
        /// Quad size before scaling.
        size: Vec2,
        /// Multiplied into the texels.
        tint: Color,
        /// Sort layer.
        layer: i32,
        /// Coordinate space.
        space: Space,
    },
    /// Filled rectangle.
    Rect {
        /// Bottom-left corner.
        position: Vec2,
        /// Extent.
        size: Vec2,
        /// Fill.
        color: Color,
        /// Sort layer.
        layer: i32,
        /// Coordinate space.
        space: Space,
    },
    /// Text run.
    Text {
        /// Content.
        text: String,
        /// Baseline start.
        position: Vec2,
        /// Glyph scale.
        scale: f32,
        /// Color.
        color: Color,
        /// Sort layer.
        layer: i32,
        /// Coordinate space.
        space: Space,
    },
}

impl DrawCommand {
    /// Sort layer of the command.
    #[must_use]
    pub fn layer(&self) -> i32 {
        match self {
            Self::Image { layer, .. } | Self::Rect { layer, .. } | Self::Text { layer, .. } => {
                *layer
            }
        }
    }

    /// Coordinate space of the command.
    #[must_use]
    pub fn space(&self) -> Space {
        match self {
            Self::Image { space, .. } | Self::Rect { space, .. } | Self::Text { space, .. } => {
                *space
            }
        }
    }
}

/// What the simulation needs from a rendering backend.
pub trait Renderer {
    /// Draws an image quad.
    fn submit_image(&mut self, image: ImageHandle, transform: Transform2D, size: Vec2, tint: Color);

    /// Draws a filled rectangle.
    fn submit_rect(&mut self, position: Vec2, size: Vec2, color: Color);

    /// Draws text.
    fn submit_text(&mut self, text: &str, position: Vec2, scale: f32, color: Color);

    /// Makes `layer` current until the matching [`Renderer::pop_layer`].
    fn push_layer(&mut self, layer: i32);

    /// Restores the previous layer.
    fn pop_layer(&mut self);

    /// Switches the coordinate space of subsequent calls.
    fn set_space(&mut self, space: Space);
}

/// Records draw calls for one frame.
#[derive(Clone, Debug, Default)]
pub struct DrawList {
    commands: Vec<DrawCommand>,
    layers: Vec<i32>,
    space: Space,
}

impl DrawList {
    /// Creates an empty list in world space on layer 0.
    #[must_use]
    pub fn new() -> Self {
        Self {
            commands: Vec::with_capacity(1024),
            layers: Vec::with_capacity(4),
            space: Space::World,
        }
    }

    /// Recorded commands, in submission order.
    #[must_use]
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Number of recorded commands.
    #[must_use]
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    /// Whether nothing has been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Current sort layer.
    #[must_use]
    pub fn current_layer(&self) -> i32 {
        self.layers.last().copied().unwrap_or(0)
    }

    /// Current coordinate space.
    #[must_use]
    pub fn current_space(&self) -> Space {
        self.space
    }

    /// Commands sorted by layer, stable within a layer.
    #[must_use]
    pub fn sorted(&self) -> Vec<&DrawCommand> {
        let mut sorted: Vec<_> = self.commands.iter().collect();
        sorted.sort_by_key(|command| command.layer());
        sorted
    }

    /// Resets for the next frame.
    pub fn clear(&mut self) {
        self.commands.clear();
        self.layers.clear();
        self.space = Space::World;
    }
}

impl Renderer for DrawList {
    fn submit_image(&mut self, image: ImageHandle, transform: Transform2D, size: Vec2, tint: Color) {
        self.commands.push(DrawCommand::Image {
            image,
            transform,
            size,
            tint,
            layer: self.current_layer(),
            space: self.space,
        });
    }

    fn submit_rect(&mut self, position: Vec2, size: Vec2, color: Color) {
        self.commands.push(DrawCommand::Rect {
            position,
            size,
            color,
            layer: self.current_layer(),
            space: self.space,
        });
    }

    fn submit_text(&mut self, text: &str, position: Vec2, scale: f32, color: Color) {
        self.commands.push(DrawCommand::Text {
            text: text.to_owned(),
            position,
            scale,
            color,
            layer: self.current_layer(),
            space: self.space,
        });
    }

    fn push_layer(&mut self, layer: i32) {
        self.layers.push(layer);
    }

    fn pop_layer(&mut self) {
        self.layers.pop();
    }

    fn set_space(&mut self, space: Space) {
        self.space = space;
    }
}
