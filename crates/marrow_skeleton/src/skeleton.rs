use std::sync::Arc;

use crate::bone::Bone;
use crate::data::SkeletonData;

/// A live pose built from shared [`SkeletonData`].
///
/// One skeleton per on-screen character. The setup data is shared through
/// an `Arc`; only the per-bone live transforms are owned here, so any number
/// of skeletons can be driven by the same animations without synchronization.
///
/// Animations blend additively into the live pose. Call
/// [`set_to_setup_pose`](Self::set_to_setup_pose) before applying a new
/// frame's animations if the previous frame's result must not carry over.
#[derive(Debug, Clone)]
pub struct Skeleton {
    data: Arc<SkeletonData>,
    bones: Vec<Bone>,
}

impl Skeleton {
    #[must_use]
    pub fn new(data: Arc<SkeletonData>) -> Self {
        let bones = data.bones().iter().map(|b| Bone::new(b.setup)).collect();
        log::debug!("Created skeleton with {} bones", data.bones().len());
        Self { data, bones }
    }

    #[inline]
    #[must_use]
    pub fn data(&self) -> &Arc<SkeletonData> {
        &self.data
    }

    /// Live bones, indexed like [`SkeletonData::bones`].
    #[inline]
    #[must_use]
    pub fn bones(&self) -> &[Bone] {
        &self.bones
    }

    #[inline]
    pub fn bones_mut(&mut self) -> &mut [Bone] {
        &mut self.bones
    }

    #[inline]
    #[must_use]
    pub fn bone(&self, index: usize) -> Option<&Bone> {
        self.bones.get(index)
    }

    #[inline]
    pub fn bone_mut(&mut self, index: usize) -> Option<&mut Bone> {
        self.bones.get_mut(index)
    }

    #[must_use]
    pub fn find_bone(&self, name: &str) -> Option<&Bone> {
        self.data.find_bone(name).map(|i| &self.bones[i])
    }

    pub fn find_bone_mut(&mut self, name: &str) -> Option<&mut Bone> {
        let index = self.data.find_bone(name)?;
        self.bones.get_mut(index)
    }

    /// Resets every bone's live transform to its setup pose.
    pub fn set_to_setup_pose(&mut self) {
        for bone in &mut self.bones {
            bone.set_to_setup_pose();
        }
    }
}
