//! Input handling.
//!
//! The windowing layer feeds [`InputState`]; the game reads it through the
//! [`InputSource`] contract. Presses are edge-triggered: a just-pressed key
//! keeps reporting as pressed for the rest of the frame until someone calls
//! [`InputSource::consume`].

use abyx_shared::Vec2;

/// Keys and buttons the game reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    /// Move left.
    A,
    /// Toggle the structure palette.
    C,
    /// Move right.
    D,
    /// Move down.
    S,
    /// Move up.
    W,
    /// Toggle the inventory.
    Tab,
    /// Quit.
    Escape,
    /// Primary mouse button.
    MouseLeft,
}

impl Key {
    #[inline]
    const fn bit(self) -> u16 {
        1 << (self as u16)
    }
}

/// What the simulation needs from the input layer.
pub trait InputSource {
    /// Whether `key` is held.
    fn is_key_down(&self, key: Key) -> bool;

    /// Whether `key` went down this frame and has not been consumed.
    fn is_key_just_pressed(&self, key: Key) -> bool;

    /// Marks this frame's press of `key` as handled.
    fn consume(&mut self, key: Key);

    /// Cursor position in window pixels, origin bottom-left.
    fn cursor(&self) -> Vec2;

    /// Window size in pixels.
    fn window_size(&self) -> Vec2;
}

/// Input state for the current frame.
#[derive(Debug, Clone, Default)]
pub struct InputState {
    /// Keys currently held.
    keys_down: u16,
    /// Keys pressed this frame and not yet consumed.
    keys_pressed: u16,
    cursor: Vec2,
    window_size: Vec2,
}

impl InputState {
    /// Creates an input state for a window of the given size.
    #[must_use]
    pub fn new(window_size: Vec2) -> Self {
        Self {
            window_size,
            ..Self::default()
        }
    }

    /// Call at the start of each frame, before feeding new events.
    pub fn begin_frame(&mut self) {
        self.keys_pressed = 0;
    }

    /// Key or button went down.
    pub fn press(&mut self, key: Key) {
        if self.keys_down & key.bit() == 0 {
            self.keys_pressed |= key.bit();
        }
        self.keys_down |= key.bit();
    }

    /// Key or button went up.
    pub fn release(&mut self, key: Key) {
        self.keys_down &= !key.bit();
    }

    /// Cursor moved.
    pub fn set_cursor(&mut self, cursor: Vec2) {
        self.cursor = cursor;
    }

    /// Window resized.
    pub fn set_window_size(&mut self, size: Vec2) {
        self.window_size = size;
    }
}

impl InputSource for InputState {
    fn is_key_down(&self, key: Key) -> bool {
        self.keys_down & key.bit() != 0
    }

    fn is_key_just_pressed(&self, key: Key) -> bool {
        self.keys_pressed & key.bit() != 0
    }

    fn consume(&mut self, key: Key) {
        self.keys_pressed &= !key.bit();
    }

    fn cursor(&self) -> Vec2 {
        self.cursor
    }

    fn window_size(&self) -> Vec2 {
        self.window_size
    }
}
