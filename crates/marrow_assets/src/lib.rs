//! Loading skeletons and animations from JSON.
//!
//! [`SkeletonLoader`] turns a skeleton file into a [`SkeletonAsset`]: the
//! shared [`SkeletonData`](marrow_skeleton::SkeletonData) plus every
//! [`Animation`](marrow_animation::Animation) defined against it.

pub mod asset;
mod json;
pub mod loader;
pub mod settings;

pub use asset::SkeletonAsset;
pub use loader::SkeletonLoader;
pub use settings::LoaderSettings;
