use std::sync::Arc;

use marrow_animation::Animation;
use marrow_skeleton::{Skeleton, SkeletonData};

/// A fully loaded rig: setup data plus every animation authored for it.
///
/// Both halves are immutable and reference counted, so cloning an asset or
/// instantiating many skeletons from it is cheap.
#[derive(Debug, Clone)]
pub struct SkeletonAsset {
    data: Arc<SkeletonData>,
    animations: Vec<Arc<Animation>>,
}

impl SkeletonAsset {
    #[must_use]
    pub fn new(data: Arc<SkeletonData>, animations: Vec<Arc<Animation>>) -> Self {
        Self { data, animations }
    }

    #[inline]
    #[must_use]
    pub fn data(&self) -> &Arc<SkeletonData> {
        &self.data
    }

    /// Animations sorted by name.
    #[inline]
    #[must_use]
    pub fn animations(&self) -> &[Arc<Animation>] {
        &self.animations
    }

    #[must_use]
    pub fn find_animation(&self, name: &str) -> Option<&Arc<Animation>> {
        self.animations.iter().find(|a| a.name() == name)
    }

    /// Creates a new pose instance at the setup pose.
    #[must_use]
    pub fn instantiate(&self) -> Skeleton {
        Skeleton::new(Arc::clone(&self.data))
    }
}
