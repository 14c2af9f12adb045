//! Touch input: a fixed pool of fingers bound to browser touch identifiers.
//!
//! Fingers are allocated once. A new touch binds the first inactive finger
//! and releases it again on end/cancel, so pointer ids stay stable for the
//! whole session.

use crate::signal::InputSignal;
use ptr_core::config::MAX_FINGERS_LIMIT;
use ptr_core::{Host, Pointer, PointerConfig, PointerEvent};
use smallvec::SmallVec;

/// A pointer that can be bound to one browser touch at a time.
#[derive(Debug, Clone, PartialEq)]
pub struct Finger {
    pub pointer: Pointer,
    /// Browser identifier of the bound touch. `None` while the finger is free.
    pub identifier: Option<i64>,
}

impl Finger {
    fn new(id: u32, config: &PointerConfig) -> Self {
        Self {
            pointer: Pointer::new(id, config),
            identifier: None,
        }
    }

    fn release(&mut self) {
        self.pointer.active = false;
        self.identifier = None;
    }
}

pub struct Touch {
    fingers: SmallVec<[Finger; 10]>,
}

impl Touch {
    /// Allocate `max_fingers` fingers with pointer ids `1..=max_fingers`.
    /// The pool never exceeds `MAX_FINGERS_LIMIT`.
    pub fn new(max_fingers: usize, config: &PointerConfig) -> Self {
        if max_fingers > MAX_FINGERS_LIMIT {
            log::warn!("finger pool of {max_fingers} clamped to {MAX_FINGERS_LIMIT}");
        }
        let count = max_fingers.min(MAX_FINGERS_LIMIT) as u32;
        let fingers = (1..=count).map(|id| Finger::new(id, config)).collect();
        Self { fingers }
    }

    pub fn fingers(&self) -> &[Finger] {
        &self.fingers
    }

    pub fn active_fingers(&self) -> impl Iterator<Item = &Finger> {
        self.fingers.iter().filter(|f| f.pointer.active)
    }

    pub fn finger_by_identifier(&self, identifier: i64) -> Option<&Finger> {
        self.fingers
            .iter()
            .find(|f| f.identifier == Some(identifier))
    }

    fn slot_for(&self, identifier: i64) -> Option<usize> {
        self.fingers
            .iter()
            .position(|f| f.identifier == Some(identifier))
    }

    fn bound_mut(&mut self, event: &PointerEvent) -> Option<&mut Finger> {
        let identifier = event.identifier?;
        let slot = self.slot_for(identifier)?;
        Some(&mut self.fingers[slot])
    }

    // ─── Event handlers ──────────────────────────────────────────────────

    /// Bind and press a finger for each changed touch.
    pub fn on_start(&mut self, events: &[PointerEvent], host: &impl Host) -> Vec<InputSignal> {
        let mut signals = Vec::with_capacity(events.len());
        for event in events {
            let Some(identifier) = event.identifier else {
                log::warn!("touch start without identifier ignored");
                continue;
            };
            let slot = self
                .slot_for(identifier)
                .or_else(|| self.fingers.iter().position(|f| !f.pointer.active));
            let Some(slot) = slot else {
                log::warn!(
                    "no free finger for touch {identifier} (pool of {})",
                    self.fingers.len()
                );
                continue;
            };

            let finger = &mut self.fingers[slot];
            finger.identifier = Some(identifier);
            finger.pointer.active = true;
            finger.pointer.start(event, host);
            signals.push(InputSignal::pressed(&finger.pointer));
        }
        signals
    }

    /// Move each bound finger. Unknown touches are ignored.
    pub fn on_move(&mut self, events: &[PointerEvent], host: &impl Host) {
        for event in events {
            if let Some(finger) = self.bound_mut(event) {
                finger.pointer.move_to(event, host);
            }
        }
    }

    /// Release and unbind each bound finger.
    pub fn on_end(&mut self, events: &[PointerEvent], host: &impl Host) -> Vec<InputSignal> {
        let mut signals = Vec::with_capacity(events.len());
        for event in events {
            if let Some(finger) = self.bound_mut(event) {
                finger.pointer.stop(event, host);
                finger.release();
                signals.push(InputSignal::released(&finger.pointer));
            }
        }
        signals
    }

    /// The browser cancelled the touches (e.g. a system gesture took over).
    pub fn on_cancel(&mut self, events: &[PointerEvent], host: &impl Host) -> Vec<InputSignal> {
        self.on_end(events, host)
    }

    /// Touches slid off the game element but remain down.
    pub fn on_leave(&mut self, events: &[PointerEvent]) {
        for event in events {
            if let Some(finger) = self.bound_mut(event) {
                finger.pointer.within_game = false;
            }
        }
    }

    pub fn update(&mut self, host: &impl Host) {
        for finger in self.fingers.iter_mut().filter(|f| f.pointer.active) {
            finger.pointer.update(host);
        }
    }

    /// Release every finger, bound or not.
    pub fn reset(&mut self) {
        for finger in &mut self.fingers {
            finger.pointer.reset();
            finger.pointer.within_game = false;
            finger.release();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ptr_core::FrameHost;

    fn touch_at(identifier: i64, x: f64, y: f64) -> PointerEvent {
        PointerEvent::at_page(x, y).with_identifier(identifier)
    }

    #[test]
    fn pool_ids_start_at_one() {
        let touch = Touch::new(3, &PointerConfig::default());
        let ids: Vec<u32> = touch.fingers().iter().map(|f| f.pointer.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
        assert_eq!(touch.active_fingers().count(), 0);
    }

    #[test]
    fn oversized_pool_is_clamped() {
        let touch = Touch::new(usize::MAX, &PointerConfig::default());
        assert_eq!(touch.fingers().len(), MAX_FINGERS_LIMIT);
        assert_eq!(
            touch.fingers().last().map(|f| f.pointer.id),
            Some(MAX_FINGERS_LIMIT as u32)
        );
    }

    #[test]
    fn repeated_start_reuses_bound_finger() {
        let mut touch = Touch::new(2, &PointerConfig::default());
        let host = FrameHost::new(0.0);
        touch.on_start(&[touch_at(5, 0.0, 0.0)], &host);
        touch.on_start(&[touch_at(5, 1.0, 1.0)], &host);
        assert_eq!(touch.active_fingers().count(), 1);
    }

    #[test]
    fn missing_identifier_is_ignored() {
        let mut touch = Touch::new(2, &PointerConfig::default());
        let host = FrameHost::new(0.0);
        let signals = touch.on_start(&[PointerEvent::at_page(0.0, 0.0)], &host);
        assert!(signals.is_empty());
    }
}
