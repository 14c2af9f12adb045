//! Input manager: routes raw browser input to the mouse and the finger pool.
//!
//! The game feeds every raw event through `handle` and calls `update` once
//! per frame. Press/release transitions queue up as `InputSignal`s until
//! `drain_signals` is called.

use crate::mouse::Mouse;
use crate::signal::InputSignal;
use crate::touch::Touch;
use ptr_core::{Host, InputConfig, Pointer, PointerEvent};
use smallvec::SmallVec;

/// Changed touches carried by one touch event.
pub type TouchList = SmallVec<[PointerEvent; 4]>;

/// A raw input event as delivered by the platform.
#[derive(Debug, Clone, PartialEq)]
pub enum RawInput {
    MouseDown(PointerEvent),
    MouseMove(PointerEvent),
    MouseUp(PointerEvent),
    MouseLeave(PointerEvent),
    TouchStart(TouchList),
    TouchMove(TouchList),
    TouchEnd(TouchList),
    TouchCancel(TouchList),
    TouchLeave(TouchList),
}

impl RawInput {
    pub fn is_mouse(&self) -> bool {
        matches!(
            self,
            Self::MouseDown(_) | Self::MouseMove(_) | Self::MouseUp(_) | Self::MouseLeave(_)
        )
    }
}

pub struct InputManager {
    pub config: InputConfig,
    pub mouse: Mouse,
    pub touch: Touch,
    signals: Vec<InputSignal>,
}

impl Default for InputManager {
    fn default() -> Self {
        Self::new(InputConfig::default())
    }
}

impl InputManager {
    pub fn new(config: InputConfig) -> Self {
        Self {
            mouse: Mouse::new(&config.pointer),
            touch: Touch::new(config.max_fingers, &config.pointer),
            config,
            signals: Vec::new(),
        }
    }

    /// Apply one raw event. Events for a disabled device are dropped.
    pub fn handle(&mut self, input: &RawInput, host: &impl Host) {
        let enabled = if input.is_mouse() {
            self.config.mouse_enabled
        } else {
            self.config.touch_enabled
        };
        if !enabled {
            log::trace!("dropping input for disabled device: {input:?}");
            return;
        }

        match input {
            RawInput::MouseDown(ev) => {
                let signal = self.mouse.on_down(ev, host);
                self.signals.push(signal);
            }
            RawInput::MouseMove(ev) => self.mouse.on_move(ev, host),
            RawInput::MouseUp(ev) => {
                if let Some(signal) = self.mouse.on_up(ev, host) {
                    self.signals.push(signal);
                }
            }
            RawInput::MouseLeave(_) => self.mouse.on_leave(),
            RawInput::TouchStart(evs) => {
                let signals = self.touch.on_start(evs, host);
                self.signals.extend(signals);
            }
            RawInput::TouchMove(evs) => self.touch.on_move(evs, host),
            RawInput::TouchEnd(evs) => {
                let signals = self.touch.on_end(evs, host);
                self.signals.extend(signals);
            }
            RawInput::TouchCancel(evs) => {
                let signals = self.touch.on_cancel(evs, host);
                self.signals.extend(signals);
            }
            RawInput::TouchLeave(evs) => self.touch.on_leave(evs),
        }
    }

    /// Per-frame tick for every pointer.
    pub fn update(&mut self, host: &impl Host) {
        self.mouse.update(host);
        self.touch.update(host);
    }

    /// Release every pointer and discard pending signals.
    pub fn reset(&mut self) {
        self.mouse.reset();
        self.touch.reset();
        self.signals.clear();
    }

    /// Every active pointer: the mouse first, then bound fingers.
    pub fn pointers(&self) -> impl Iterator<Item = &Pointer> {
        std::iter::once(&self.mouse.cursor)
            .chain(self.touch.active_fingers().map(|f| &f.pointer))
            .filter(|p| p.active)
    }

    pub fn pointer(&self, id: u32) -> Option<&Pointer> {
        std::iter::once(&self.mouse.cursor)
            .chain(self.touch.fingers().iter().map(|f| &f.pointer))
            .find(|p| p.id == id)
    }

    /// Whether any pointer is held down.
    pub fn is_down(&self) -> bool {
        self.pointers().any(Pointer::is_down)
    }

    /// Take all queued signals, oldest first.
    pub fn drain_signals(&mut self) -> Vec<InputSignal> {
        std::mem::take(&mut self.signals)
    }
}
