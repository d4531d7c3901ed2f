//! Keyframe animation for 2D skeletons.
//!
//! Data (built once, shared read-only):
//! - [`Curve`] / [`CurveTable`]: per-segment easing (linear, stepped, Bezier)
//! - [`Keyframes`]: flat, stride-checked keyframe storage
//! - [`Timeline`]: rotate, translate or scale track for one bone
//! - [`Animation`]: named set of timelines with a derived duration
//!
//! Playback (per skeleton):
//! - [`AnimationAction`]: clock, weight and loop mode for one animation
//! - [`AnimationMixer`]: ordered stack of actions blended into a skeleton

pub mod action;
pub mod animation;
pub mod curve;
pub mod frames;
pub mod mixer;
pub mod search;
pub mod timeline;

pub use action::{AnimationAction, LoopMode};
pub use animation::Animation;
pub use curve::{BEZIER_SEGMENTS, BezierSamples, Curve, CurveTable};
pub use frames::Keyframes;
pub use mixer::AnimationMixer;
pub use search::locate_frame;
pub use timeline::{RotateTimeline, ScaleTimeline, Timeline, TimelineKind, TranslateTimeline};
