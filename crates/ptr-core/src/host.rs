//! The environment a pointer reads from while it updates.
//!
//! Pointers never hold a reference back to the game. Every operation that
//! needs the current time or the stage's page offset receives a `Host`.

use kurbo::{Point, Vec2};

/// Clock and stage placement supplied by the game loop.
pub trait Host {
    /// Current game time in milliseconds.
    fn now(&self) -> f64;

    /// Page coordinates of the game element's top-left corner.
    fn stage_offset(&self) -> Point;

    /// Translate a page-space point into stage space.
    fn to_stage(&self, page: Point) -> Point {
        let offset = self.stage_offset();
        page - Vec2::new(offset.x, offset.y)
    }
}

/// A host with explicitly set time and offset.
///
/// The game loop (or the wasm bridge) stamps `now` once per event or frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameHost {
    pub now: f64,
    pub offset: Point,
}

impl Default for FrameHost {
    fn default() -> Self {
        Self::new(0.0)
    }
}

impl FrameHost {
    pub fn new(now: f64) -> Self {
        Self {
            now,
            offset: Point::ORIGIN,
        }
    }

    pub fn with_offset(mut self, x: f64, y: f64) -> Self {
        self.offset = Point::new(x, y);
        self
    }

    /// Move the clock forward by `ms` milliseconds.
    pub fn advance(&mut self, ms: f64) {
        self.now += ms;
    }
}

impl Host for FrameHost {
    fn now(&self) -> f64 {
        self.now
    }

    fn stage_offset(&self) -> Point {
        self.offset
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn advance_moves_clock() {
        let mut host = FrameHost::new(100.0);
        host.advance(16.5);
        assert_eq!(host.now(), 116.5);
    }

    #[test]
    fn to_stage_subtracts_offset() {
        let host = FrameHost::new(0.0).with_offset(10.0, 20.0);
        assert_eq!(host.to_stage(Point::new(15.0, 25.0)), Point::new(5.0, 5.0));
    }
}
