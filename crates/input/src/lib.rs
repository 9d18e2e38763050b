//! Pointer and hotkey state for the wrecking surface.
//!
//! A thin tracker over the host's raw events: it answers "is the trigger
//! held, where, and did the pointer leave" so the session can map presses
//! to fire/spawn intents without touching windowing code itself.

use glam::Vec2;
use std::collections::HashSet;

/// Per-frame pointer and key state.
#[derive(Debug, Default)]
pub struct PointerState {
    /// Buttons currently held down.
    buttons_held: HashSet<MouseButton>,
    /// Buttons pressed this frame.
    buttons_pressed: HashSet<MouseButton>,
    /// Buttons released this frame.
    buttons_released: HashSet<MouseButton>,

    /// Keys pressed this frame.
    keys_pressed: HashSet<KeyCode>,

    /// Pointer position in surface coordinates.
    position: Vec2,
    /// Whether the pointer is over the interactive surface.
    inside: bool,
    /// Pointer left the surface this frame.
    left_this_frame: bool,
}

impl PointerState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Clear per-frame state. Call at the start of each frame.
    pub fn begin_frame(&mut self) {
        self.buttons_pressed.clear();
        self.buttons_released.clear();
        self.keys_pressed.clear();
        self.left_this_frame = false;
    }

    /// Process a mouse button event.
    pub fn process_mouse_button(&mut self, button: MouseButton, state: ElementState) {
        match state {
            ElementState::Pressed => {
                if !self.buttons_held.contains(&button) {
                    self.buttons_pressed.insert(button);
                }
                self.buttons_held.insert(button);
            }
            ElementState::Released => {
                self.buttons_held.remove(&button);
                self.buttons_released.insert(button);
            }
        }
    }

    /// Process a pointer move in surface coordinates.
    pub fn process_cursor_moved(&mut self, position: (f64, f64)) {
        self.position = Vec2::new(position.0 as f32, position.1 as f32);
        self.inside = true;
    }

    /// Pointer left the surface; held triggers must stop.
    pub fn process_cursor_left(&mut self) {
        self.inside = false;
        self.left_this_frame = true;
    }

    /// Process a key event (weapon hotkeys only).
    pub fn process_key(&mut self, key: KeyCode, state: ElementState) {
        if state == ElementState::Pressed {
            self.keys_pressed.insert(key);
        }
    }

    // Query methods

    /// Current pointer position in surface coordinates.
    pub fn position(&self) -> Vec2 {
        self.position
    }

    pub fn is_inside(&self) -> bool {
        self.inside
    }

    pub fn left_this_frame(&self) -> bool {
        self.left_this_frame
    }

    /// Check if the trigger (left button) was pressed this frame.
    pub fn is_fire_pressed(&self) -> bool {
        self.buttons_pressed.contains(&MouseButton::Left)
    }

    /// Check if the trigger is held.
    pub fn is_fire_held(&self) -> bool {
        self.buttons_held.contains(&MouseButton::Left)
    }

    /// Check if the trigger was released this frame.
    pub fn is_fire_released(&self) -> bool {
        self.buttons_released.contains(&MouseButton::Left)
    }

    /// Weapon hotkey pressed this frame: digits 1–7 map to catalog slots
    /// 0–6.
    pub fn weapon_hotkey(&self) -> Option<usize> {
        const DIGITS: [KeyCode; 7] = [
            KeyCode::Digit1,
            KeyCode::Digit2,
            KeyCode::Digit3,
            KeyCode::Digit4,
            KeyCode::Digit5,
            KeyCode::Digit6,
            KeyCode::Digit7,
        ];
        DIGITS
            .iter()
            .position(|key| self.keys_pressed.contains(key))
    }
}

// Re-export for convenience
pub use winit::event::{ElementState, MouseButton};
pub use winit::keyboard::KeyCode;
