//! WASM bridge: browser mouse/touch events → pointer state.
//!
//! Compiled via `wasm-pack build --target web`. The page registers DOM
//! listeners on the game element and forwards each event together with
//! `performance.now()`; the game reads pointer state back as JSON.

mod convert;

use ptr_core::{FrameHost, InputConfig, PointerEvent, PointerSnapshot};
use ptr_input::{InputManager, RawInput};
use wasm_bindgen::prelude::*;
use web_sys::{MouseEvent, TouchEvent};

pub use convert::raw_from_kind;

/// The JS-facing input controller.
///
/// Owns the input manager and the host clock. Every call stamps the host
/// with the caller-supplied time before touching any pointer.
#[wasm_bindgen]
pub struct PointerInput {
    input: InputManager,
    host: FrameHost,
}

#[wasm_bindgen]
impl PointerInput {
    /// Create a controller. `config_json` is an optional `InputConfig`;
    /// invalid config falls back to defaults.
    #[wasm_bindgen(constructor)]
    pub fn new(config_json: Option<String>) -> Self {
        console_error_panic_hook_setup();

        let config = match config_json.as_deref().map(InputConfig::from_json) {
            Some(Ok(config)) => config,
            Some(Err(e)) => {
                report_error(&format!("{e}; using default input config"));
                InputConfig::default()
            }
            None => InputConfig::default(),
        };

        Self {
            input: InputManager::new(config),
            host: FrameHost::default(),
        }
    }

    /// Page position of the game element (from `getBoundingClientRect` + scroll).
    pub fn set_stage_offset(&mut self, x: f64, y: f64) {
        self.host = self.host.with_offset(x, y);
    }

    // ─── Mouse ───────────────────────────────────────────────────────────

    pub fn mouse_down(&mut self, ev: &MouseEvent, now: f64) {
        self.dispatch(RawInput::MouseDown(convert::from_mouse_event(ev)), now);
    }

    pub fn mouse_move(&mut self, ev: &MouseEvent, now: f64) {
        self.dispatch(RawInput::MouseMove(convert::from_mouse_event(ev)), now);
    }

    pub fn mouse_up(&mut self, ev: &MouseEvent, now: f64) {
        self.dispatch(RawInput::MouseUp(convert::from_mouse_event(ev)), now);
    }

    pub fn mouse_leave(&mut self, ev: &MouseEvent, now: f64) {
        self.dispatch(RawInput::MouseLeave(convert::from_mouse_event(ev)), now);
    }

    // ─── Touch ───────────────────────────────────────────────────────────

    pub fn touch_start(&mut self, ev: &TouchEvent, now: f64) {
        self.dispatch(RawInput::TouchStart(convert::changed_touches(ev)), now);
    }

    pub fn touch_move(&mut self, ev: &TouchEvent, now: f64) {
        self.dispatch(RawInput::TouchMove(convert::changed_touches(ev)), now);
    }

    pub fn touch_end(&mut self, ev: &TouchEvent, now: f64) {
        self.dispatch(RawInput::TouchEnd(convert::changed_touches(ev)), now);
    }

    pub fn touch_cancel(&mut self, ev: &TouchEvent, now: f64) {
        self.dispatch(RawInput::TouchCancel(convert::changed_touches(ev)), now);
    }

    pub fn touch_leave(&mut self, ev: &TouchEvent, now: f64) {
        self.dispatch(RawInput::TouchLeave(convert::changed_touches(ev)), now);
    }

    /// Apply an event forwarded as JSON (e.g. from a worker).
    ///
    /// `kind` is the DOM event type (`"mousedown"`, `"touchmove"`, ...);
    /// `events_json` is an array of `{clientX, pageX, ..., identifier}`.
    /// Returns `false` if either argument is invalid.
    pub fn handle_json(&mut self, kind: &str, events_json: &str, now: f64) -> bool {
        let events: Vec<PointerEvent> = match serde_json::from_str(events_json) {
            Ok(events) => events,
            Err(e) => {
                report_error(&format!("invalid {kind} payload: {e}"));
                return false;
            }
        };
        match raw_from_kind(kind, &events) {
            Ok(raw) => {
                self.dispatch(raw, now);
                true
            }
            Err(e) => {
                report_error(&e);
                false
            }
        }
    }

    // ─── Frame loop ──────────────────────────────────────────────────────

    /// Call once per frame.
    pub fn update(&mut self, now: f64) {
        self.host.now = now;
        self.input.update(&self.host);
    }

    pub fn reset(&mut self) {
        self.input.reset();
    }

    // ─── Queries ─────────────────────────────────────────────────────────

    pub fn is_down(&self) -> bool {
        self.input.is_down()
    }

    /// Whether pointer `id` went down within its just-pressed window.
    pub fn just_pressed(&self, id: u32, now: f64) -> bool {
        let host = FrameHost { now, ..self.host };
        self.input
            .pointer(id)
            .is_some_and(|p| p.just_pressed(&host))
    }

    /// Whether pointer `id` came up within its just-released window.
    pub fn just_released(&self, id: u32, now: f64) -> bool {
        let host = FrameHost { now, ..self.host };
        self.input
            .pointer(id)
            .is_some_and(|p| p.just_released(&host))
    }

    /// JSON array with the state of every active pointer.
    pub fn snapshot_json(&self) -> String {
        let snapshots: Vec<PointerSnapshot> =
            self.input.pointers().map(|p| p.snapshot()).collect();
        serde_json::to_string(&snapshots).unwrap_or_else(|_| "[]".to_string())
    }

    /// Drain queued press/release signals as a JSON array.
    pub fn signals_json(&mut self) -> String {
        let signals = self.input.drain_signals();
        serde_json::to_string(&signals).unwrap_or_else(|_| "[]".to_string())
    }

    /// Ids of every active pointer.
    pub fn active_ids(&self) -> js_sys::Array {
        self.input
            .pointers()
            .map(|p| JsValue::from(p.id))
            .collect()
    }
}

impl PointerInput {
    fn dispatch(&mut self, raw: RawInput, now: f64) {
        self.host.now = now;
        self.input.handle(&raw, &self.host);
    }
}

fn report_error(msg: &str) {
    #[cfg(target_arch = "wasm32")]
    web_sys::console::error_1(&msg.into());
    #[cfg(not(target_arch = "wasm32"))]
    log::error!("{msg}");
}

/// Set up a panic hook that logs to console.error.
fn console_error_panic_hook_setup() {
    #[cfg(target_arch = "wasm32")]
    {
        use std::sync::Once;
        static SET_HOOK: Once = Once::new();
        SET_HOOK.call_once(|| {
            std::panic::set_hook(Box::new(|info| {
                let msg = format!("pointer input panic: {info}");
                web_sys::console::error_1(&msg.into());
            }));
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn invalid_config_falls_back_to_defaults() {
        let input = PointerInput::new(Some(r#"{"maxFingers":0}"#.to_string()));
        assert_eq!(input.input.config, InputConfig::default());
    }

    #[test]
    fn json_mouse_click_round_trip() {
        let mut input = PointerInput::new(None);
        input.set_stage_offset(100.0, 0.0);

        assert!(input.handle_json("mousedown", r#"[{"pageX":150,"pageY":20}]"#, 1000.0));
        assert!(input.is_down());
        assert!(input.just_pressed(0, 1100.0));

        assert!(input.handle_json("mouseup", r#"[{"pageX":150,"pageY":20}]"#, 1250.0));
        assert!(input.just_released(0, 1300.0));

        let signals: serde_json::Value = serde_json::from_str(&input.signals_json()).unwrap();
        assert_eq!(
            signals,
            serde_json::json!([
                { "type": "pressed", "pointer": 0, "x": 50.0, "y": 20.0 },
                { "type": "released", "pointer": 0, "x": 50.0, "y": 20.0, "duration": 250.0 },
            ])
        );
    }

    #[test]
    fn snapshot_lists_active_touches() {
        let mut input = PointerInput::new(None);
        assert!(input.handle_json(
            "touchstart",
            r#"[{"pageX":5,"pageY":6,"identifier":3}]"#,
            0.0
        ));
        input.update(16.0);

        let snaps: serde_json::Value = serde_json::from_str(&input.snapshot_json()).unwrap();
        let snaps = snaps.as_array().unwrap();
        assert_eq!(snaps.len(), 2);
        assert_eq!(snaps[1]["isDown"], true);
        assert_eq!(snaps[1]["frameDuration"], 1);
        assert_eq!(snaps[1]["x"], 5.0);
    }

    #[test]
    fn bad_payload_is_rejected() {
        let mut input = PointerInput::new(None);
        assert!(!input.handle_json("mousedown", "not json", 0.0));
        assert!(!input.handle_json("wheel", "[]", 0.0));
        assert!(!input.is_down());
    }
}
