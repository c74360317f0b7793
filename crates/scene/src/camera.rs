//! Viewer camera and the orbit/zoom controller that drives it.

use std::f32::consts::FRAC_PI_2;

use glam::{EulerRot, Quat, Vec2, Vec3};

use roomview_core::{CameraSettings, ControllerSettings};
use roomview_platform::{MouseButton, PointerEvent};

use crate::transform::Transform;

/// A perspective camera on the +Z axis looking down -Z.
#[derive(Clone, Debug)]
pub struct Camera {
    /// Camera position in world space
    pub position: Vec3,
    /// Vertical field of view in radians
    pub fov_y: f32,
    pub aspect: f32,
    pub near: f32,
    pub far: f32,
}

impl Default for Camera {
    fn default() -> Self {
        Self::from_settings(&CameraSettings::default(), 16.0 / 9.0)
    }
}

impl Camera {
    /// Create a camera at the origin from configured projection settings.
    pub fn from_settings(settings: &CameraSettings, aspect: f32) -> Self {
        Self {
            position: Vec3::ZERO,
            fov_y: settings.fov_y_deg.to_radians(),
            aspect,
            near: settings.near,
            far: settings.far,
        }
    }

    /// Update the aspect ratio after a resize.
    pub fn set_aspect(&mut self, aspect: f32) {
        self.aspect = aspect;
    }
}

/// Mutable state shared by the drag and zoom handlers.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct InteractionState {
    pub dragging: bool,
    pub last_pointer: Vec2,
    /// x = pitch (clamped to ±π/2), y = yaw (unbounded)
    pub rotation: Vec2,
    /// Camera distance along the view axis, within the zoom bounds
    pub distance: f32,
}

/// Turns pointer drags into object rotation and wheel steps into camera distance.
///
/// Rotation is applied to the viewed object, not the camera: the camera
/// stays on the +Z axis and only moves in and out.
#[derive(Clone, Debug)]
pub struct OrbitController {
    state: InteractionState,
    pub rotation_speed: f32,
    pub zoom_speed: f32,
    min_zoom: f32,
    max_zoom: f32,
}

impl Default for OrbitController {
    fn default() -> Self {
        Self::new(&ControllerSettings::default())
    }
}

impl OrbitController {
    /// Pitch limit in either direction.
    pub const MAX_PITCH: f32 = FRAC_PI_2;
    /// Wheel pixels to zoom units.
    pub const WHEEL_SCALE: f32 = 0.01;

    /// Build a controller; the initial distance is clamped into the zoom range.
    pub fn new(settings: &ControllerSettings) -> Self {
        let min_zoom = settings.min_zoom.min(settings.max_zoom);
        let max_zoom = settings.max_zoom.max(settings.min_zoom);
        Self {
            state: InteractionState {
                dragging: false,
                last_pointer: Vec2::ZERO,
                rotation: Vec2::ZERO,
                distance: settings.initial_distance.clamp(min_zoom, max_zoom),
            },
            rotation_speed: settings.rotation_speed,
            zoom_speed: settings.zoom_speed,
            min_zoom,
            max_zoom,
        }
    }

    pub fn state(&self) -> &InteractionState {
        &self.state
    }

    pub fn is_dragging(&self) -> bool {
        self.state.dragging
    }

    pub fn rotation(&self) -> Vec2 {
        self.state.rotation
    }

    pub fn distance(&self) -> f32 {
        self.state.distance
    }

    pub fn zoom_bounds(&self) -> (f32, f32) {
        (self.min_zoom, self.max_zoom)
    }

    /// Primary button starts a drag anchored at `position`.
    pub fn pointer_down(&mut self, button: MouseButton, position: Vec2) {
        if button.is_primary() && position.is_finite() {
            self.state.dragging = true;
            self.state.last_pointer = position;
        }
    }

    /// Any button ends the drag.
    pub fn pointer_up(&mut self, _button: MouseButton) {
        self.state.dragging = false;
    }

    /// Rotate while dragging; the pointer is tracked either way so the
    /// first move of a new drag never sees a stale position.
    ///
    /// Non-finite positions are dropped, and a step whose result would not
    /// be finite leaves the rotation untouched.
    pub fn pointer_move(&mut self, position: Vec2) {
        if !position.is_finite() {
            return;
        }
        if self.state.dragging {
            let delta = position - self.state.last_pointer;
            let yaw = self.state.rotation.y + delta.x * self.rotation_speed;
            let pitch = self.state.rotation.x + delta.y * self.rotation_speed;
            if yaw.is_finite() {
                self.state.rotation.y = yaw;
            }
            if !pitch.is_nan() {
                self.state.rotation.x = pitch.clamp(-Self::MAX_PITCH, Self::MAX_PITCH);
            }
        }
        self.state.last_pointer = position;
    }

    /// Zoom proportionally to the current distance, then clamp.
    ///
    /// Non-finite deltas are ignored.
    pub fn wheel(&mut self, delta_y: f32) {
        let step = delta_y * Self::WHEEL_SCALE * self.zoom_speed * self.state.distance;
        if step.is_nan() || !delta_y.is_finite() {
            return;
        }
        self.state.distance = (self.state.distance + step).clamp(self.min_zoom, self.max_zoom);
    }

    /// Dispatch a translated pointer event to the matching handler.
    pub fn handle(&mut self, event: PointerEvent) {
        match event {
            PointerEvent::Down { button, position } => self.pointer_down(button, position),
            PointerEvent::Move { position } => self.pointer_move(position),
            PointerEvent::Up { button, .. } => self.pointer_up(button),
            PointerEvent::Wheel { delta_y } => self.wheel(delta_y),
        }
    }

    /// Per-frame hook. Handlers apply their effect immediately, so there is
    /// nothing to integrate yet.
    pub fn update(&mut self, _dt: f32) {}

    /// Write the current state into the viewed object and the camera.
    pub fn apply(&self, target: &mut Transform, camera: &mut Camera) {
        let rotation = self.state.rotation;
        target.rotation = Quat::from_euler(EulerRot::XYZ, rotation.x, rotation.y, 0.0);
        camera.position = Vec3::new(camera.position.x, camera.position.y, self.state.distance);
    }
}
