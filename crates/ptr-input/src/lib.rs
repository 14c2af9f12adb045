pub mod manager;
pub mod mouse;
pub mod signal;
pub mod touch;

pub use manager::{InputManager, RawInput, TouchList};
pub use mouse::{MOUSE_POINTER_ID, Mouse};
pub use signal::InputSignal;
pub use touch::{Finger, Touch};
