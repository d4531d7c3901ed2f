//! Serde model of the JSON skeleton format.
//!
//! Maps are read into `BTreeMap`s so that building an asset from the same
//! file always visits skins, animations and animated bones in the same
//! (name-sorted) order.

use std::collections::BTreeMap;

use serde::Deserialize;

fn one() -> f32 {
    1.0
}

#[derive(Debug, Deserialize)]
pub(crate) struct SkeletonJson {
    #[serde(default)]
    pub bones: Vec<BoneJson>,
    #[serde(default)]
    pub slots: Vec<SlotJson>,
    /// skin name -> slot name -> attachment key -> attachment
    #[serde(default)]
    pub skins: BTreeMap<String, BTreeMap<String, BTreeMap<String, AttachmentJson>>>,
    #[serde(default)]
    pub animations: BTreeMap<String, AnimationJson>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct BoneJson {
    pub name: String,
    pub parent: Option<String>,
    #[serde(default)]
    pub length: f32,
    #[serde(default)]
    pub x: f32,
    #[serde(default)]
    pub y: f32,
    #[serde(default)]
    pub rotation: f32,
    #[serde(default = "one")]
    pub scale_x: f32,
    #[serde(default = "one")]
    pub scale_y: f32,
}

#[derive(Debug, Deserialize)]
pub(crate) struct SlotJson {
    pub name: String,
    pub bone: String,
    pub color: Option<String>,
    pub attachment: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct AttachmentJson {
    pub name: Option<String>,
    #[serde(default)]
    pub x: f32,
    #[serde(default)]
    pub y: f32,
    #[serde(default)]
    pub rotation: f32,
    #[serde(default = "one")]
    pub scale_x: f32,
    #[serde(default = "one")]
    pub scale_y: f32,
    /// Absent sizes fall back to a fixed default that is not scaled.
    pub width: Option<f32>,
    pub height: Option<f32>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct AnimationJson {
    #[serde(default)]
    pub bones: BTreeMap<String, BoneTimelinesJson>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct BoneTimelinesJson {
    pub rotate: Option<Vec<RotateKeyJson>>,
    pub translate: Option<Vec<VectorKeyJson>>,
    pub scale: Option<Vec<VectorKeyJson>>,
    /// Timeline types this runtime does not evaluate.
    #[serde(flatten)]
    pub unknown: BTreeMap<String, serde_json::Value>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RotateKeyJson {
    pub time: f32,
    pub angle: f32,
    pub curve: Option<CurveJson>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct VectorKeyJson {
    pub time: f32,
    #[serde(default)]
    pub x: f32,
    #[serde(default)]
    pub y: f32,
    pub curve: Option<CurveJson>,
}

/// `"stepped"`, `"linear"`, or `[cx1, cy1, cx2, cy2]`.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub(crate) enum CurveJson {
    Named(String),
    Bezier([f32; 4]),
}
