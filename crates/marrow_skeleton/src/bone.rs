use marrow_core::BoneTransform;

/// Authored description of a single bone.
#[derive(Debug, Clone, PartialEq)]
pub struct BoneData {
    pub name: String,
    /// Index of the parent bone. Parents always precede their children.
    pub parent: Option<usize>,
    pub length: f32,
    /// Setup (bind) pose, relative to the parent.
    pub setup: BoneTransform,
}

impl BoneData {
    #[must_use]
    pub fn new(name: impl Into<String>, parent: Option<usize>) -> Self {
        Self {
            name: name.into(),
            parent,
            length: 0.0,
            setup: BoneTransform::IDENTITY,
        }
    }

    #[must_use]
    pub fn with_setup(mut self, setup: BoneTransform) -> Self {
        self.setup = setup;
        self
    }

    #[must_use]
    pub fn with_length(mut self, length: f32) -> Self {
        self.length = length;
        self
    }
}

/// A bone of a live [`Skeleton`](crate::Skeleton).
///
/// The setup pose is copied in when the skeleton is created and never
/// changes; `local` is what animations read-modify-write each frame.
#[derive(Debug, Clone, PartialEq)]
pub struct Bone {
    setup: BoneTransform,
    pub local: BoneTransform,
}

impl Bone {
    #[must_use]
    pub fn new(setup: BoneTransform) -> Self {
        Self {
            setup,
            local: setup,
        }
    }

    #[inline]
    #[must_use]
    pub fn setup(&self) -> &BoneTransform {
        &self.setup
    }

    /// Restores the live transform to the setup pose.
    #[inline]
    pub fn set_to_setup_pose(&mut self) {
        self.local = self.setup;
    }
}
