//! Transform component for scene nodes.
//!
//! A [`Transform`] is always local to its parent node. World matrices are
//! composed by [`SceneGraph::world_matrix`](crate::SceneGraph::world_matrix),
//! which walks the node's ancestors.
//!
//! # Example
//!
//! ```
//! use roomview_scene::Transform;
//! use glam::Vec3;
//!
//! let t = Transform::new()
//!     .with_position(Vec3::new(0.0, 0.0, 0.01))
//!     .with_euler_degrees([0.0, 0.0, 90.0]);
//!
//! let p = t.local_matrix().transform_point3(Vec3::X);
//! assert!((p - Vec3::new(0.0, 1.0, 0.01)).length() < 1e-5);
//! ```

use glam::{EulerRot, Mat3, Mat4, Quat, Vec3};

/// A transform representing position, rotation, and scale relative to a parent.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transform {
    /// Position in parent space
    pub position: Vec3,
    /// Rotation as a quaternion
    pub rotation: Quat,
    /// Scale factor
    pub scale: Vec3,
}

impl Default for Transform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Transform {
    /// Cosine above which two axes count as aligned in [`Transform::look_at`].
    const ALIGNED_COS: f32 = 0.99;

    pub const IDENTITY: Self = Self {
        position: Vec3::ZERO,
        rotation: Quat::IDENTITY,
        scale: Vec3::ONE,
    };

    /// Create a new transform at the origin.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a transform with the given position.
    pub fn with_position(mut self, position: Vec3) -> Self {
        self.position = position;
        self
    }

    /// Create a transform with the given rotation.
    pub fn with_rotation(mut self, rotation: Quat) -> Self {
        self.rotation = rotation;
        self
    }

    /// Create a transform with the given scale.
    pub fn with_scale(mut self, scale: Vec3) -> Self {
        self.scale = scale;
        self
    }

    /// Create a transform rotated by XYZ Euler angles in radians.
    pub fn with_euler(mut self, radians: [f32; 3]) -> Self {
        self.set_euler(radians);
        self
    }

    /// Create a transform rotated by XYZ Euler angles in degrees.
    pub fn with_euler_degrees(self, degrees: [f32; 3]) -> Self {
        self.with_euler([
            degrees[0].to_radians(),
            degrees[1].to_radians(),
            degrees[2].to_radians(),
        ])
    }

    /// Set the rotation from XYZ Euler angles in radians.
    ///
    /// X is applied first, then Y, then Z (intrinsic), the order used by
    /// authoring tools that export `rotation.set(x, y, z)`.
    pub fn set_euler(&mut self, radians: [f32; 3]) {
        self.rotation = Quat::from_euler(EulerRot::XYZ, radians[0], radians[1], radians[2]);
    }

    /// The rotation as XYZ Euler angles in radians.
    pub fn euler(&self) -> [f32; 3] {
        let (x, y, z) = self.rotation.to_euler(EulerRot::XYZ);
        [x, y, z]
    }

    /// Get the local transformation matrix.
    pub fn local_matrix(&self) -> Mat4 {
        Mat4::from_scale_rotation_translation(self.scale, self.rotation, self.position)
    }

    /// Rotate so that -Z points at `target` (in the same parent space),
    /// keeping the current roll about the aim axis.
    ///
    /// The current up axis is preserved as far as the new aim allows; when it
    /// is nearly aligned with the aim, the current right axis is kept instead.
    /// Does nothing when `target` coincides with the position.
    pub fn look_at(&mut self, target: Vec3) {
        let dir = target - self.position;
        if dir.length_squared() <= f32::EPSILON {
            return;
        }
        let back = -dir.normalize();

        let up = self.up();
        let right = if up.dot(back).abs() < Self::ALIGNED_COS {
            up.cross(back).normalize()
        } else {
            let r = self.right();
            (r - back * r.dot(back)).normalize()
        };
        let up = back.cross(right);
        self.rotation = Quat::from_mat3(&Mat3::from_cols(right, up, back)).normalize();
    }

    /// Get the forward direction vector.
    pub fn forward(&self) -> Vec3 {
        self.rotation * Vec3::NEG_Z
    }

    /// Get the right direction vector.
    pub fn right(&self) -> Vec3 {
        self.rotation * Vec3::X
    }

    /// Get the up direction vector.
    pub fn up(&self) -> Vec3 {
        self.rotation * Vec3::Y
    }
}
