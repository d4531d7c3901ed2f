//! Loader Configuration
//!
//! Skeleton files are usually authored at one resolution and displayed at
//! another. [`LoaderSettings::scale`] resizes a rig while it is being built,
//! so nothing downstream ever needs to know about it.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use marrow_assets::{LoaderSettings, SkeletonLoader};
//!
//! // Half-size rig
//! let loader = SkeletonLoader::new(LoaderSettings { scale: 0.5 })?;
//! let asset = loader.load_from_path("hero.json")?;
//! ```

use marrow_core::{MarrowError, Result};

/// Options applied while building a skeleton asset.
///
/// # What `scale` touches
///
/// | Field                                   | Scaled |
/// |-----------------------------------------|--------|
/// | bone `length`, `x`, `y`                 | yes    |
/// | attachment `x`, `y`                     | yes    |
/// | attachment `width`, `height`            | if set |
/// | translate keyframe `x`, `y`             | yes    |
/// | any rotation                            | no     |
/// | bone / attachment / keyframe scale      | no     |
///
/// An attachment without a size gets [`Attachment::DEFAULT_SIZE`] unscaled.
///
/// [`Attachment::DEFAULT_SIZE`]: marrow_skeleton::Attachment::DEFAULT_SIZE
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LoaderSettings {
    /// Uniform factor applied to lengths and positions. Must be finite and
    /// greater than zero.
    pub scale: f32,
}

impl Default for LoaderSettings {
    fn default() -> Self {
        Self { scale: 1.0 }
    }
}

impl LoaderSettings {
    pub fn validate(&self) -> Result<()> {
        if self.scale.is_finite() && self.scale > 0.0 {
            Ok(())
        } else {
            Err(MarrowError::InvalidScale(self.scale))
        }
    }
}
