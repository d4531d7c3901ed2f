use glam::Vec2;

/// Bone-local transform: rotation in degrees, translation and scale.
///
/// Used both for the authored setup pose of a bone and for the live pose
/// that animations write into every frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoneTransform {
    /// Rotation in degrees, counter-clockwise.
    pub rotation: f32,
    pub translation: Vec2,
    pub scale: Vec2,
}

impl BoneTransform {
    pub const IDENTITY: Self = Self {
        rotation: 0.0,
        translation: Vec2::ZERO,
        scale: Vec2::ONE,
    };

    #[must_use]
    pub const fn new(rotation: f32, translation: Vec2, scale: Vec2) -> Self {
        Self {
            rotation,
            translation,
            scale,
        }
    }

    /// Returns `true` if every component is finite.
    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.rotation.is_finite() && self.translation.is_finite() && self.scale.is_finite()
    }
}

impl Default for BoneTransform {
    fn default() -> Self {
        Self::IDENTITY
    }
}
