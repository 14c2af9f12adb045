//! Browser event → `PointerEvent` / `RawInput` conversion.

use ptr_core::PointerEvent;
use ptr_input::{RawInput, TouchList};
use web_sys::{MouseEvent, Touch, TouchEvent};

pub fn from_mouse_event(ev: &MouseEvent) -> PointerEvent {
    PointerEvent {
        client_x: ev.client_x() as f64,
        client_y: ev.client_y() as f64,
        page_x: ev.page_x() as f64,
        page_y: ev.page_y() as f64,
        screen_x: ev.screen_x() as f64,
        screen_y: ev.screen_y() as f64,
        identifier: None,
    }
}

pub fn from_touch(touch: &Touch) -> PointerEvent {
    PointerEvent {
        client_x: touch.client_x() as f64,
        client_y: touch.client_y() as f64,
        page_x: touch.page_x() as f64,
        page_y: touch.page_y() as f64,
        screen_x: touch.screen_x() as f64,
        screen_y: touch.screen_y() as f64,
        identifier: Some(touch.identifier() as i64),
    }
}

/// The touches that changed in this event (not every touch on the surface).
pub fn changed_touches(ev: &TouchEvent) -> TouchList {
    let list = ev.changed_touches();
    (0..list.length())
        .filter_map(|i| list.get(i))
        .map(|t| from_touch(&t))
        .collect()
}

/// Build a `RawInput` from a DOM event type name and its coordinates.
///
/// Mouse kinds use the first event only.
///
/// # Errors
/// Unknown kinds, or a mouse kind with no event.
pub fn raw_from_kind(kind: &str, events: &[PointerEvent]) -> Result<RawInput, String> {
    let first = || {
        events
            .first()
            .copied()
            .ok_or_else(|| format!("'{kind}' needs one event"))
    };
    let list = || events.iter().copied().collect::<TouchList>();
    Ok(match kind {
        "mousedown" => RawInput::MouseDown(first()?),
        "mousemove" => RawInput::MouseMove(first()?),
        "mouseup" => RawInput::MouseUp(first()?),
        "mouseout" | "mouseleave" => RawInput::MouseLeave(first()?),
        "touchstart" => RawInput::TouchStart(list()),
        "touchmove" => RawInput::TouchMove(list()),
        "touchend" => RawInput::TouchEnd(list()),
        "touchcancel" => RawInput::TouchCancel(list()),
        "touchleave" => RawInput::TouchLeave(list()),
        other => return Err(format!("unknown input kind '{other}'")),
    })
}
