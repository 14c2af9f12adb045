//! The mouse: a single pointer that is always active.

use crate::signal::InputSignal;
use ptr_core::{Host, Pointer, PointerConfig, PointerEvent};

/// Pointer id reserved for the mouse. Fingers are numbered from 1.
pub const MOUSE_POINTER_ID: u32 = 0;

pub struct Mouse {
    pub cursor: Pointer,
}

impl Default for Mouse {
    fn default() -> Self {
        Self::new(&PointerConfig::default())
    }
}

impl Mouse {
    pub fn new(config: &PointerConfig) -> Self {
        let mut cursor = Pointer::new(MOUSE_POINTER_ID, config);
        cursor.active = true;
        Self { cursor }
    }

    pub fn on_down(&mut self, event: &PointerEvent, host: &impl Host) -> InputSignal {
        self.cursor.start(event, host);
        InputSignal::pressed(&self.cursor)
    }

    pub fn on_move(&mut self, event: &PointerEvent, host: &impl Host) {
        self.cursor.move_to(event, host);
        self.cursor.within_game = true;
    }

    /// Release the cursor. A button released without a matching press
    /// (pressed outside the game) emits nothing.
    pub fn on_up(&mut self, event: &PointerEvent, host: &impl Host) -> Option<InputSignal> {
        if self.cursor.is_up() {
            return None;
        }
        self.cursor.stop(event, host);
        Some(InputSignal::released(&self.cursor))
    }

    /// The cursor left the game element. A held button stays held.
    pub fn on_leave(&mut self) {
        self.cursor.within_game = false;
    }

    pub fn update(&mut self, host: &impl Host) {
        self.cursor.update(host);
    }

    pub fn reset(&mut self) {
        self.cursor.reset();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ptr_core::FrameHost;

    #[test]
    fn cursor_is_always_active() {
        let mut mouse = Mouse::default();
        assert!(mouse.cursor.active);
        mouse.reset();
        assert!(mouse.cursor.active);
    }

    #[test]
    fn release_without_press_is_silent() {
        let mut mouse = Mouse::default();
        let host = FrameHost::new(0.0);
        assert_eq!(mouse.on_up(&PointerEvent::at_page(1.0, 1.0), &host), None);
    }

    #[test]
    fn move_marks_within_game_and_leave_clears_it() {
        let mut mouse = Mouse::default();
        let host = FrameHost::new(0.0);
        mouse.on_move(&PointerEvent::at_page(1.0, 1.0), &host);
        assert!(mouse.cursor.within_game);
        mouse.on_leave();
        assert!(!mouse.cursor.within_game);
    }
}
