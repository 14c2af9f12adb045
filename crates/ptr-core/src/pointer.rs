//! A single tracked input contact: mouse cursor or touch point.
//!
//! The owning input manager calls `start` / `move_to` / `stop` once per raw
//! event and `update` once per frame. Everything else is a read.
//!
//! Down/up is stored as one flag, so `is_down()` and `is_up()` are always
//! complementary.

use crate::config::PointerConfig;
use crate::event::PointerEvent;
use crate::geom::{circle_contains, circles_overlap, origin_circle};
use crate::host::Host;
use kurbo::{Circle, Point};
use serde::Serialize;

/// Position, press state and timing of one input contact.
#[derive(Debug, Clone, PartialEq)]
pub struct Pointer {
    /// Unique within the owning input manager.
    pub id: u32,

    /// Position relative to the game stage.
    pub x: f64,
    pub y: f64,
    /// Position relative to the viewport, excluding scroll offset.
    pub client_x: f64,
    pub client_y: f64,
    /// Position relative to the viewport, including scroll offset.
    pub page_x: f64,
    pub page_y: f64,
    /// Position relative to the screen.
    pub screen_x: f64,
    pub screen_y: f64,

    /// Same coordinates as `x` / `y`.
    pub point: Point,
    /// Area this pointer covers, centered on `x` / `y`.
    pub circle: Circle,

    down: bool,
    /// Whether the contact is currently over the game.
    pub within_game: bool,
    /// A mouse is always active. A finger is active only while bound to a touch.
    pub active: bool,

    /// Game time of the last press, in ms.
    pub time_down: f64,
    /// Game time of the last release, in ms.
    pub time_up: f64,
    /// Milliseconds since the last press. `stop` sets it to the hold time;
    /// any later move measures from `time_down` again.
    pub duration: f64,
    /// Frames held down.
    pub frame_duration: u32,

    pub just_pressed_rate: f64,
    pub just_released_rate: f64,
}

impl Pointer {
    pub fn new(id: u32, config: &PointerConfig) -> Self {
        Self {
            id,
            x: -1.0,
            y: -1.0,
            client_x: -1.0,
            client_y: -1.0,
            page_x: -1.0,
            page_y: -1.0,
            screen_x: -1.0,
            screen_y: -1.0,
            point: Point::ORIGIN,
            circle: origin_circle(config.hit_radius),
            down: false,
            within_game: false,
            active: false,
            time_down: 0.0,
            time_up: 0.0,
            duration: 0.0,
            frame_duration: 0,
            just_pressed_rate: config.just_pressed_rate,
            just_released_rate: config.just_released_rate,
        }
    }

    pub fn obj_type(&self) -> &'static str {
        "Pointer"
    }

    pub fn is_down(&self) -> bool {
        self.down
    }

    pub fn is_up(&self) -> bool {
        !self.down
    }

    // ─── Event handlers ──────────────────────────────────────────────────

    /// The contact pressed down.
    pub fn start(&mut self, event: &PointerEvent, host: &impl Host) {
        self.move_to(event, host);

        self.frame_duration = 0;
        self.within_game = true;
        self.down = true;
        self.time_down = host.now();
        log::debug!(
            "pointer {} down at ({}, {}) t={}",
            self.id,
            self.x,
            self.y,
            self.time_down
        );
    }

    /// The contact was released. Coordinates keep their last moved value.
    pub fn stop(&mut self, _event: &PointerEvent, host: &impl Host) {
        self.within_game = false;
        self.down = false;

        self.time_up = host.now();
        self.duration = self.time_up - self.time_down;
        log::debug!(
            "pointer {} up after {}ms ({} frames)",
            self.id,
            self.duration,
            self.frame_duration
        );
    }

    /// Copy the event's coordinates and derive stage-relative `x` / `y`.
    pub fn move_to(&mut self, event: &PointerEvent, host: &impl Host) {
        self.client_x = event.client_x;
        self.client_y = event.client_y;

        self.page_x = event.page_x;
        self.page_y = event.page_y;

        self.screen_x = event.screen_x;
        self.screen_y = event.screen_y;

        self.point = host.to_stage(Point::new(self.page_x, self.page_y));
        self.x = self.point.x;
        self.y = self.point.y;
        self.circle.center = self.point;

        // Measured from the last press, even while released.
        self.duration = host.now() - self.time_down;
        log::trace!("pointer {} moved to ({}, {})", self.id, self.x, self.y);
    }

    /// Per-frame tick. Only counts while held down.
    pub fn update(&mut self, host: &impl Host) {
        if self.down {
            self.frame_duration += 1;
            self.duration = host.now() - self.time_down;
        }
    }

    /// Back to the released state with cleared timings. Position is kept.
    pub fn reset(&mut self) {
        self.down = false;
        self.time_down = 0.0;
        self.time_up = 0.0;
        self.duration = 0.0;
        self.frame_duration = 0;
    }

    // ─── Queries ─────────────────────────────────────────────────────────

    /// Pressed within the last `just_pressed_rate` ms and still down.
    pub fn just_pressed(&self, host: &impl Host) -> bool {
        self.just_pressed_within(self.just_pressed_rate, host)
    }

    /// Pressed within the last `duration` ms and still down.
    pub fn just_pressed_within(&self, duration: f64, host: &impl Host) -> bool {
        self.down && self.time_down + duration > host.now()
    }

    /// Released within the last `just_released_rate` ms and still up.
    pub fn just_released(&self, host: &impl Host) -> bool {
        self.just_released_within(self.just_released_rate, host)
    }

    /// Released within the last `duration` ms and still up.
    pub fn just_released_within(&self, duration: f64, host: &impl Host) -> bool {
        !self.down && self.time_up + duration > host.now()
    }

    pub fn hit_area(&self) -> &Circle {
        &self.circle
    }

    /// Whether this pointer's hit area touches `other`.
    pub fn overlaps(&self, other: &Circle) -> bool {
        circles_overlap(&self.circle, other)
    }

    /// Whether `p` (stage space) lies within this pointer's hit area.
    pub fn covers(&self, p: Point) -> bool {
        circle_contains(&self.circle, p)
    }

    pub fn snapshot(&self) -> PointerSnapshot {
        PointerSnapshot {
            id: self.id,
            x: self.x,
            y: self.y,
            client_x: self.client_x,
            client_y: self.client_y,
            page_x: self.page_x,
            page_y: self.page_y,
            screen_x: self.screen_x,
            screen_y: self.screen_y,
            is_down: self.is_down(),
            is_up: self.is_up(),
            within_game: self.within_game,
            active: self.active,
            time_down: self.time_down,
            time_up: self.time_up,
            duration: self.duration,
            frame_duration: self.frame_duration,
        }
    }
}

/// Flat, serializable copy of a pointer's public state.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PointerSnapshot {
    pub id: u32,
    pub x: f64,
    pub y: f64,
    pub client_x: f64,
    pub client_y: f64,
    pub page_x: f64,
    pub page_y: f64,
    pub screen_x: f64,
    pub screen_y: f64,
    pub is_down: bool,
    pub is_up: bool,
    pub within_game: bool,
    pub active: bool,
    pub time_down: f64,
    pub time_up: f64,
    pub duration: f64,
    pub frame_duration: u32,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::FrameHost;

    fn pointer() -> Pointer {
        Pointer::new(0, &PointerConfig::default())
    }

    #[test]
    fn starts_released_with_sentinel_coordinates() {
        let p = pointer();
        assert!(p.is_up());
        assert!(!p.is_down());
        assert_eq!((p.x, p.y), (-1.0, -1.0));
        assert_eq!(p.circle.radius, 1.0);
        assert_eq!(p.obj_type(), "Pointer");
    }

    #[test]
    fn move_after_release_measures_from_last_press() {
        let mut p = pointer();
        let mut host = FrameHost::new(100.0);
        p.start(&PointerEvent::at_page(0.0, 0.0), &host);
        host.now = 250.0;
        p.stop(&PointerEvent::at_page(0.0, 0.0), &host);
        host.now = 900.0;
        assert_eq!(p.duration, 150.0);
        p.move_to(&PointerEvent::at_page(5.0, 5.0), &host);
        assert_eq!(p.duration, 800.0);
    }

    #[test]
    fn update_ignored_while_up() {
        let mut p = pointer();
        let host = FrameHost::new(500.0);
        p.update(&host);
        assert_eq!(p.frame_duration, 0);
        assert_eq!(p.duration, 0.0);
    }

    #[test]
    fn nan_coordinates_propagate() {
        let mut p = pointer();
        let host = FrameHost::new(0.0);
        p.move_to(&PointerEvent::at_page(f64::NAN, 3.0), &host);
        assert!(p.x.is_nan());
        assert_eq!(p.y, 3.0);
    }

    #[test]
    fn snapshot_reports_complementary_flags() {
        let mut p = pointer();
        let host = FrameHost::new(0.0);
        p.start(&PointerEvent::at_page(1.0, 2.0), &host);
        let snap = p.snapshot();
        assert!(snap.is_down);
        assert!(!snap.is_up);
        assert_eq!((snap.x, snap.y), (1.0, 2.0));
    }
}
