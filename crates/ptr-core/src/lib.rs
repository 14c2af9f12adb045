pub mod config;
pub mod event;
pub mod geom;
pub mod host;
pub mod pointer;

pub use config::{InputConfig, PointerConfig};
pub use event::PointerEvent;
pub use host::{FrameHost, Host};
pub use pointer::{Pointer, PointerSnapshot};

// Re-export kurbo types so downstream crates don't need a direct dependency
pub use kurbo::{Circle, Point};
