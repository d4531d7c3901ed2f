//! Core types shared by every Marrow crate.
//!
//! - [`errors`]: the crate-wide [`MarrowError`] and [`Result`] alias
//! - [`math`]: angle arithmetic used by rotation timelines
//! - [`transform`]: the bone-local [`BoneTransform`] value type

pub mod errors;
pub mod math;
pub mod transform;

pub use errors::{MarrowError, Result};
pub use math::wrap_degrees;
pub use transform::BoneTransform;
