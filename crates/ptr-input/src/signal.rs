//! Press/release notifications emitted by the input managers.

use ptr_core::Pointer;
use serde::Serialize;

/// A state transition on one pointer, queued until the game drains it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum InputSignal {
    Pressed { pointer: u32, x: f64, y: f64 },
    Released {
        pointer: u32,
        x: f64,
        y: f64,
        /// How long the pointer was held, in ms.
        duration: f64,
    },
}

impl InputSignal {
    pub fn pressed(p: &Pointer) -> Self {
        Self::Pressed {
            pointer: p.id,
            x: p.x,
            y: p.y,
        }
    }

    pub fn released(p: &Pointer) -> Self {
        Self::Released {
            pointer: p.id,
            x: p.x,
            y: p.y,
            duration: p.duration,
        }
    }

    pub fn pointer_id(&self) -> u32 {
        match self {
            Self::Pressed { pointer, .. } | Self::Released { pointer, .. } => *pointer,
        }
    }
}
