//! Platform layer for the room viewer.
//!
//! This crate provides platform-specific functionality:
//! - Window management via winit
//! - Pointer and wheel input translation

mod input;
mod window;

pub use input::{MouseButton, PointerEvent, PointerTracker, WHEEL_LINE_PX, wheel_delta_y};
pub use window::Window;

// Re-export winit types that users might need
pub use winit::event::WindowEvent;
pub use winit::event_loop::EventLoop;
