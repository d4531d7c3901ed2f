//! Skeleton setup data and live pose instances.
//!
//! [`SkeletonData`] is the immutable, shareable description of a rig as it
//! was authored: bones in hierarchy order, slots in draw order, and skins.
//! A [`Skeleton`] is one character's pose built from that data; animations
//! read the setup values and write the live ones.

pub mod bone;
pub mod data;
pub mod skeleton;
pub mod skin;
pub mod slot;

pub use bone::{Bone, BoneData};
pub use data::{SkeletonData, SkeletonDataBuilder};
pub use skeleton::Skeleton;
pub use skin::{Attachment, Skin};
pub use slot::{Color, SlotData};
