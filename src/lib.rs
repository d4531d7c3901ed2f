//! Marrow: a runtime for keyframed 2D skeletal animation.
//!
//! The runtime is split into small crates that this one re-exports:
//!
//! | Module        | Crate              | Contents                                  |
//! |---------------|--------------------|-------------------------------------------|
//! | [`core`]      | `marrow_core`      | errors, angle math, [`BoneTransform`]     |
//! | [`skeleton`]  | `marrow_skeleton`  | setup data and live [`Skeleton`] poses    |
//! | [`animation`] | `marrow_animation` | curves, timelines, actions and the mixer  |
//! | [`assets`]    | `marrow_assets`    | JSON loading into a [`SkeletonAsset`]     |
//!
//! # Example
//!
//! ```rust,ignore
//! use marrow::prelude::*;
//!
//! let asset = SkeletonLoader::default().load_from_path("hero.json")?;
//! let mut skeleton = asset.instantiate();
//!
//! let walk = asset.find_animation("walk").unwrap().clone();
//! let mut mixer = AnimationMixer::new();
//! mixer.add_action(AnimationAction::new(walk));
//!
//! // Each frame:
//! skeleton.set_to_setup_pose();
//! mixer.update(1.0 / 60.0, &mut skeleton);
//! ```

pub use marrow_animation as animation;
pub use marrow_assets as assets;
pub use marrow_core as core;
pub use marrow_skeleton as skeleton;

pub use marrow_animation::{
    Animation, AnimationAction, AnimationMixer, Curve, CurveTable, LoopMode, Timeline,
    TimelineKind,
};
pub use marrow_assets::{LoaderSettings, SkeletonAsset, SkeletonLoader};
pub use marrow_core::{BoneTransform, MarrowError, Result, wrap_degrees};
pub use marrow_skeleton::{Bone, BoneData, Color, Skeleton, SkeletonData, Skin, SlotData};

/// The types most programs need, for glob import.
pub mod prelude {
    pub use crate::{
        Animation, AnimationAction, AnimationMixer, BoneTransform, LoopMode, MarrowError,
        Skeleton, SkeletonAsset, SkeletonLoader,
    };
    pub use glam::Vec2;
}
