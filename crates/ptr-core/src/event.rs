//! Raw pointer event record.
//!
//! Mirrors the coordinate fields of a browser `MouseEvent` / `Touch`, so it
//! can be filled from `web-sys` or deserialized from forwarded JSON.

use serde::{Deserialize, Serialize};

/// Coordinates of a single mouse event or changed touch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PointerEvent {
    /// Relative to the viewport, excluding scroll offset.
    pub client_x: f64,
    pub client_y: f64,
    /// Relative to the document, including scroll offset.
    pub page_x: f64,
    pub page_y: f64,
    /// Relative to the physical screen.
    pub screen_x: f64,
    pub screen_y: f64,
    /// Browser touch identifier. `None` for mouse events.
    pub identifier: Option<i64>,
}

impl PointerEvent {
    /// An event whose client, page and screen coordinates are all `(x, y)`.
    pub fn at_page(x: f64, y: f64) -> Self {
        Self {
            client_x: x,
            client_y: y,
            page_x: x,
            page_y: y,
            screen_x: x,
            screen_y: y,
            identifier: None,
        }
    }

    pub fn with_identifier(mut self, identifier: i64) -> Self {
        self.identifier = Some(identifier);
        self
    }
}
