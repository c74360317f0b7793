//! Pointer input translation.
//!
//! winit reports button presses without a position and scroll in lines or
//! pixels with "up is positive". The viewer's controller wants DOM-style
//! events instead: every button event carries the cursor position and a
//! positive wheel delta means "scroll down / zoom out".

use glam::Vec2;
use winit::event::{ElementState, MouseScrollDelta, WindowEvent};

/// Pixels per wheel line, matching what browsers report for one notch.
pub const WHEEL_LINE_PX: f32 = 100.0;

/// Mouse button identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
    Other(u16),
}

impl MouseButton {
    /// The button that starts a drag.
    pub fn is_primary(self) -> bool {
        self == MouseButton::Left
    }
}

impl From<winit::event::MouseButton> for MouseButton {
    fn from(button: winit::event::MouseButton) -> Self {
        match button {
            winit::event::MouseButton::Left => MouseButton::Left,
            winit::event::MouseButton::Right => MouseButton::Right,
            winit::event::MouseButton::Middle => MouseButton::Middle,
            winit::event::MouseButton::Back => MouseButton::Other(3),
            winit::event::MouseButton::Forward => MouseButton::Other(4),
            winit::event::MouseButton::Other(id) => MouseButton::Other(id),
        }
    }
}

/// A pointer or wheel event in window pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    Down { button: MouseButton, position: Vec2 },
    Move { position: Vec2 },
    Up { button: MouseButton, position: Vec2 },
    Wheel { delta_y: f32 },
}

/// Tracks the cursor so button events can be stamped with a position.
#[derive(Debug, Default)]
pub struct PointerTracker {
    cursor: Vec2,
}

impl PointerTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Last known cursor position.
    pub fn cursor(&self) -> Vec2 {
        self.cursor
    }

    /// Translate a window event, returning `None` for non-pointer events.
    pub fn translate(&mut self, event: &WindowEvent) -> Option<PointerEvent> {
        match event {
            WindowEvent::CursorMoved { position, .. } => {
                self.cursor = Vec2::new(position.x as f32, position.y as f32);
                Some(PointerEvent::Move {
                    position: self.cursor,
                })
            }
            WindowEvent::MouseInput { state, button, .. } => {
                let button = MouseButton::from(*button);
                Some(match state {
                    ElementState::Pressed => PointerEvent::Down {
                        button,
                        position: self.cursor,
                    },
                    ElementState::Released => PointerEvent::Up {
                        button,
                        position: self.cursor,
                    },
                })
            }
            WindowEvent::MouseWheel { delta, .. } => Some(PointerEvent::Wheel {
                delta_y: wheel_delta_y(*delta),
            }),
            _ => None,
        }
    }
}

/// Convert a winit scroll delta to a DOM-style `deltaY` in pixels.
pub fn wheel_delta_y(delta: MouseScrollDelta) -> f32 {
    match delta {
        MouseScrollDelta::LineDelta(_, y) => -y * WHEEL_LINE_PX,
        MouseScrollDelta::PixelDelta(pos) => -(pos.y as f32),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use winit::dpi::PhysicalPosition;

    #[test]
    fn test_line_delta_scroll_down_is_positive() {
        assert_eq!(wheel_delta_y(MouseScrollDelta::LineDelta(0.0, -1.0)), 100.0);
        assert_eq!(wheel_delta_y(MouseScrollDelta::LineDelta(0.0, 2.0)), -200.0);
    }

    #[test]
    fn test_pixel_delta_is_inverted() {
        let delta = MouseScrollDelta::PixelDelta(PhysicalPosition::new(0.0, 42.0));
        assert_eq!(wheel_delta_y(delta), -42.0);
    }

    #[test]
    fn test_button_conversion() {
        assert_eq!(
            MouseButton::from(winit::event::MouseButton::Left),
            MouseButton::Left
        );
        assert_eq!(
            MouseButton::from(winit::event::MouseButton::Other(7)),
            MouseButton::Other(7)
        );
        assert!(MouseButton::Left.is_primary());
        assert!(!MouseButton::Right.is_primary());
    }
}
