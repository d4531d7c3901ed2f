use rustc_hash::FxHashMap;

use marrow_core::{MarrowError, Result};

use crate::bone::BoneData;
use crate::skin::Skin;
use crate::slot::SlotData;

/// Immutable setup data of a rig.
///
/// Built once through [`SkeletonDataBuilder`] and shared (usually behind an
/// `Arc`) by every [`Skeleton`](crate::Skeleton) instantiated from it.
#[derive(Debug, Clone, Default)]
pub struct SkeletonData {
    bones: Vec<BoneData>,
    slots: Vec<SlotData>,
    skins: Vec<Skin>,
    default_skin: Option<usize>,

    bone_lookup: FxHashMap<String, usize>,
    slot_lookup: FxHashMap<String, usize>,
    skin_lookup: FxHashMap<String, usize>,
}

impl SkeletonData {
    #[must_use]
    pub fn builder() -> SkeletonDataBuilder {
        SkeletonDataBuilder::default()
    }

    /// Bones in hierarchy order (every parent precedes its children).
    #[inline]
    #[must_use]
    pub fn bones(&self) -> &[BoneData] {
        &self.bones
    }

    /// Slots in draw order.
    #[inline]
    #[must_use]
    pub fn slots(&self) -> &[SlotData] {
        &self.slots
    }

    #[inline]
    #[must_use]
    pub fn skins(&self) -> &[Skin] {
        &self.skins
    }

    /// The skin named `"default"`, if one was registered.
    #[must_use]
    pub fn default_skin(&self) -> Option<&Skin> {
        self.default_skin.map(|i| &self.skins[i])
    }

    #[must_use]
    pub fn find_bone(&self, name: &str) -> Option<usize> {
        self.bone_lookup.get(name).copied()
    }

    #[must_use]
    pub fn find_slot(&self, name: &str) -> Option<usize> {
        self.slot_lookup.get(name).copied()
    }

    #[must_use]
    pub fn find_skin(&self, name: &str) -> Option<&Skin> {
        self.skin_lookup.get(name).map(|&i| &self.skins[i])
    }
}

/// Validating builder for [`SkeletonData`].
#[derive(Debug, Default)]
pub struct SkeletonDataBuilder {
    data: SkeletonData,
}

impl SkeletonDataBuilder {
    /// Appends a bone and returns its index.
    ///
    /// The parent, if any, must already have been added.
    pub fn add_bone(&mut self, bone: BoneData) -> Result<usize> {
        if self.data.bone_lookup.contains_key(&bone.name) {
            return Err(MarrowError::DuplicateName {
                kind: "bone",
                name: bone.name,
            });
        }
        if let Some(parent) = bone.parent
            && parent >= self.data.bones.len()
        {
            return Err(MarrowError::ParentNotFound {
                bone: bone.name,
                parent: format!("#{parent}"),
            });
        }
        if !bone.setup.is_finite() || !bone.length.is_finite() {
            return Err(MarrowError::NonFiniteValue {
                context: format!("bone {}", bone.name),
            });
        }

        let index = self.data.bones.len();
        self.data.bone_lookup.insert(bone.name.clone(), index);
        self.data.bones.push(bone);
        Ok(index)
    }

    /// Appends a slot and returns its index.
    pub fn add_slot(&mut self, slot: SlotData) -> Result<usize> {
        if self.data.slot_lookup.contains_key(&slot.name) {
            return Err(MarrowError::DuplicateName {
                kind: "slot",
                name: slot.name,
            });
        }
        if slot.bone >= self.data.bones.len() {
            return Err(MarrowError::BoneNotFound {
                context: format!("slot {}", slot.name),
                name: format!("#{}", slot.bone),
            });
        }

        let index = self.data.slots.len();
        self.data.slot_lookup.insert(slot.name.clone(), index);
        self.data.slots.push(slot);
        Ok(index)
    }

    /// Registers a skin. A skin named `"default"` becomes the default skin.
    pub fn add_skin(&mut self, skin: Skin) -> Result<()> {
        if self.data.skin_lookup.contains_key(&skin.name) {
            return Err(MarrowError::DuplicateName {
                kind: "skin",
                name: skin.name,
            });
        }
        let slot_count = self.data.slots.len();
        let unknown = skin
            .attachments()
            .map(|(slot, _, _)| slot)
            .find(|&slot| slot >= slot_count);
        if let Some(slot) = unknown {
            return Err(MarrowError::SlotNotFound {
                skin: skin.name,
                slot: format!("#{slot}"),
            });
        }

        let index = self.data.skins.len();
        if skin.name == "default" {
            self.data.default_skin = Some(index);
        }
        self.data.skin_lookup.insert(skin.name.clone(), index);
        self.data.skins.push(skin);
        Ok(())
    }

    #[must_use]
    pub fn find_bone(&self, name: &str) -> Option<usize> {
        self.data.find_bone(name)
    }

    #[must_use]
    pub fn find_slot(&self, name: &str) -> Option<usize> {
        self.data.find_slot(name)
    }

    #[must_use]
    pub fn build(self) -> SkeletonData {
        log::debug!(
            "Built skeleton data: {} bones, {} slots, {} skins",
            self.data.bones.len(),
            self.data.slots.len(),
            self.data.skins.len()
        );
        self.data
    }
}
