//! Error Types
//!
//! This module defines the error types used throughout the runtime.
//!
//! # Overview
//!
//! Every failure surfaced by Marrow happens while an asset is being loaded:
//! - I/O and JSON decoding errors
//! - Structural errors (unknown bones, slots or parents, duplicate names)
//! - Keyframe data errors (empty or unsorted timelines, malformed curves)
//!
//! Evaluating an animation never fails. Once an asset has been built, every
//! timeline it contains can be applied at any time without error.
//!
//! # Usage
//!
//! ```rust,ignore
//! use marrow_core::errors::{MarrowError, Result};
//!
//! fn load() -> Result<()> {
//!     Err(MarrowError::InvalidScale(0.0))
//! }
//! ```

use thiserror::Error;

/// The main error type for the Marrow runtime.
#[derive(Error, Debug)]
pub enum MarrowError {
    // ========================================================================
    // I/O & Decoding Errors
    // ========================================================================
    /// File I/O error.
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// JSON parsing error.
    #[error("JSON parse error: {0}")]
    JsonError(#[from] serde_json::Error),

    // ========================================================================
    // Loader Configuration Errors
    // ========================================================================
    /// The loader scale must be finite and greater than zero.
    #[error("Invalid loader scale: {0}")]
    InvalidScale(f32),

    // ========================================================================
    // Structural Errors
    // ========================================================================
    /// Two entries of the same kind share a name.
    #[error("Duplicate {kind} name: {name}")]
    DuplicateName {
        /// What kind of entry was duplicated ("bone", "slot", ...)
        kind: &'static str,
        /// The duplicated name
        name: String,
    },

    /// A bone names a parent that has not been declared before it.
    #[error("Parent bone not found: {parent} (referenced by bone {bone})")]
    ParentNotFound {
        /// The bone declaring the parent
        bone: String,
        /// The missing parent name
        parent: String,
    },

    /// A bone referenced by name does not exist.
    #[error("Bone not found: {name} ({context})")]
    BoneNotFound {
        /// Where the reference was made
        context: String,
        /// The missing bone name
        name: String,
    },

    /// A skin refers to a slot that does not exist.
    #[error("Slot not found: {slot} (referenced by skin {skin})")]
    SlotNotFound {
        /// The skin holding the reference
        skin: String,
        /// The missing slot name
        slot: String,
    },

    /// A slot color is not `RRGGBB` or `RRGGBBAA` hex.
    #[error("Invalid color: {0:?}")]
    InvalidColor(String),

    // ========================================================================
    // Keyframe Data Errors
    // ========================================================================
    /// A keyframe curve is neither a known name nor four control scalars.
    #[error("Invalid curve in animation {animation}, bone {bone}: {value}")]
    InvalidCurve {
        /// Animation name
        animation: String,
        /// Bone name
        bone: String,
        /// The offending curve value
        value: String,
    },

    /// A timeline was declared without any keyframes.
    #[error("Empty {kind} timeline in animation {animation}, bone {bone}")]
    EmptyTimeline {
        /// Animation name
        animation: String,
        /// Bone name
        bone: String,
        /// Timeline kind ("rotate", "translate", "scale")
        kind: &'static str,
    },

    /// Keyframe times go backwards.
    #[error("Keyframe {index} of {kind} timeline in animation {animation}, bone {bone} is out of order")]
    UnsortedKeyframes {
        /// Animation name
        animation: String,
        /// Bone name
        bone: String,
        /// Timeline kind ("rotate", "translate", "scale")
        kind: &'static str,
        /// Index of the first keyframe earlier than its predecessor
        index: usize,
    },

    /// A numeric field is NaN or infinite.
    #[error("Non-finite value in {context}")]
    NonFiniteValue {
        /// Where the value was read
        context: String,
    },
}

/// Alias for `Result<T, MarrowError>`.
pub type Result<T> = std::result::Result<T, MarrowError>;
