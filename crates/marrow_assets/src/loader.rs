use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use std::sync::Arc;

use glam::Vec2;

use marrow_animation::{
    Animation, CurveTable, Keyframes, RotateTimeline, ScaleTimeline, Timeline, TimelineKind,
    TranslateTimeline,
};
use marrow_core::{BoneTransform, MarrowError, Result};
use marrow_skeleton::{Attachment, BoneData, Color, SkeletonData, Skin, SlotData};

use crate::asset::SkeletonAsset;
use crate::json::{
    AnimationJson, AttachmentJson, CurveJson, RotateKeyJson, SkeletonJson, VectorKeyJson,
};
use crate::settings::LoaderSettings;

/// Builds [`SkeletonAsset`]s from JSON skeleton files.
///
/// Loading is all-or-nothing: any structural problem (unknown bone, bad
/// curve, unsorted keyframes, ...) rejects the whole asset.
#[derive(Debug, Clone, Default)]
pub struct SkeletonLoader {
    settings: LoaderSettings,
}

impl SkeletonLoader {
    pub fn new(settings: LoaderSettings) -> Result<Self> {
        settings.validate()?;
        Ok(Self { settings })
    }

    pub fn with_scale(scale: f32) -> Result<Self> {
        Self::new(LoaderSettings { scale })
    }

    #[must_use]
    pub fn settings(&self) -> &LoaderSettings {
        &self.settings
    }

    pub fn load_from_str(&self, json: &str) -> Result<SkeletonAsset> {
        let raw: SkeletonJson = serde_json::from_str(json)?;
        self.build(raw)
    }

    pub fn load_from_slice(&self, bytes: &[u8]) -> Result<SkeletonAsset> {
        let raw: SkeletonJson = serde_json::from_slice(bytes)?;
        self.build(raw)
    }

    pub fn load_from_reader(&self, reader: impl Read) -> Result<SkeletonAsset> {
        let raw: SkeletonJson = serde_json::from_reader(reader)?;
        self.build(raw)
    }

    pub fn load_from_path(&self, path: impl AsRef<Path>) -> Result<SkeletonAsset> {
        let path = path.as_ref();
        log::debug!("Loading skeleton from {}", path.display());
        let file = File::open(path)?;
        self.load_from_reader(BufReader::new(file))
    }

    fn build(&self, raw: SkeletonJson) -> Result<SkeletonAsset> {
        let scale = self.settings.scale;
        let mut builder = SkeletonData::builder();

        // Bones
        for bone in raw.bones {
            let parent = match bone.parent {
                Some(parent) => Some(builder.find_bone(&parent).ok_or_else(|| {
                    MarrowError::ParentNotFound {
                        bone: bone.name.clone(),
                        parent,
                    }
                })?),
                None => None,
            };

            let setup = BoneTransform::new(
                bone.rotation,
                Vec2::new(bone.x, bone.y) * scale,
                Vec2::new(bone.scale_x, bone.scale_y),
            );
            builder.add_bone(
                BoneData::new(bone.name, parent)
                    .with_setup(setup)
                    .with_length(bone.length * scale),
            )?;
        }

        // Slots
        for slot in raw.slots {
            let bone = builder
                .find_bone(&slot.bone)
                .ok_or_else(|| MarrowError::BoneNotFound {
                    context: format!("slot {}", slot.name),
                    name: slot.bone.clone(),
                })?;

            let mut data = SlotData::new(slot.name, bone);
            if let Some(color) = slot.color {
                data.color = Color::from_hex(&color)?;
            }
            data.attachment = slot.attachment;
            builder.add_slot(data)?;
        }

        // Skins
        for (skin_name, slots) in raw.skins {
            let mut skin = Skin::new(skin_name);
            for (slot_name, attachments) in slots {
                let slot = builder
                    .find_slot(&slot_name)
                    .ok_or_else(|| MarrowError::SlotNotFound {
                        skin: skin.name.clone(),
                        slot: slot_name.clone(),
                    })?;
                for (key, attachment) in attachments {
                    let attachment = self.read_attachment(&key, attachment);
                    skin.add_attachment(slot, key, attachment);
                }
            }
            builder.add_skin(skin)?;
        }

        let data = Arc::new(builder.build());

        // Animations
        let mut animations = Vec::with_capacity(raw.animations.len());
        for (name, animation) in raw.animations {
            let animation = self.read_animation(&data, name, animation)?;
            animations.push(Arc::new(animation));
        }

        log::debug!(
            "Loaded skeleton asset: {} bones, {} slots, {} skins, {} animations",
            data.bones().len(),
            data.slots().len(),
            data.skins().len(),
            animations.len()
        );

        Ok(SkeletonAsset::new(data, animations))
    }

    fn read_attachment(&self, key: &str, raw: AttachmentJson) -> Attachment {
        let scale = self.settings.scale;
        let size = |authored: Option<f32>| {
            authored.map_or(Attachment::DEFAULT_SIZE, |value| value * scale)
        };
        Attachment {
            name: raw.name.unwrap_or_else(|| key.to_string()),
            x: raw.x * scale,
            y: raw.y * scale,
            rotation: raw.rotation,
            scale_x: raw.scale_x,
            scale_y: raw.scale_y,
            width: size(raw.width),
            height: size(raw.height),
        }
    }

    fn read_animation(
        &self,
        data: &SkeletonData,
        name: String,
        raw: AnimationJson,
    ) -> Result<Animation> {
        let mut timelines = Vec::new();

        for (bone_name, bone_timelines) in &raw.bones {
            let bone_index = data
                .find_bone(bone_name)
                .ok_or_else(|| MarrowError::BoneNotFound {
                    context: format!("animation {name}"),
                    name: bone_name.clone(),
                })?;

            let context = |kind| TimelineContext {
                animation: &name,
                bone: bone_name,
                kind,
            };

            if let Some(keys) = &bone_timelines.rotate {
                timelines.push(read_rotate(&context(TimelineKind::Rotate), bone_index, keys)?);
            }
            if let Some(keys) = &bone_timelines.translate {
                timelines.push(read_translate(
                    &context(TimelineKind::Translate),
                    bone_index,
                    keys,
                    self.settings.scale,
                )?);
            }
            if let Some(keys) = &bone_timelines.scale {
                timelines.push(read_scale(&context(TimelineKind::Scale), bone_index, keys)?);
            }
            for kind in bone_timelines.unknown.keys() {
                log::warn!(
                    "Ignoring unsupported {kind:?} timeline on bone {bone_name} in animation {name}"
                );
            }
        }

        let animation = Animation::new(name, timelines);
        log::trace!(
            "Animation {}: {} timelines, duration {}",
            animation.name(),
            animation.timelines().len(),
            animation.duration()
        );
        Ok(animation)
    }
}

/// The timeline currently being read, for error reporting.
struct TimelineContext<'a> {
    animation: &'a str,
    bone: &'a str,
    kind: TimelineKind,
}

impl TimelineContext<'_> {
    fn check_count(&self, count: usize) -> Result<()> {
        if count == 0 {
            return Err(MarrowError::EmptyTimeline {
                animation: self.animation.to_string(),
                bone: self.bone.to_string(),
                kind: self.kind.as_str(),
            });
        }
        Ok(())
    }

    fn check_frames<const S: usize>(&self, frames: &Keyframes<S>) -> Result<()> {
        if !frames.is_finite() {
            return Err(MarrowError::NonFiniteValue {
                context: format!(
                    "{} timeline of bone {} in animation {}",
                    self.kind.as_str(),
                    self.bone,
                    self.animation
                ),
            });
        }
        if let Some(index) = frames.first_unsorted() {
            return Err(MarrowError::UnsortedKeyframes {
                animation: self.animation.to_string(),
                bone: self.bone.to_string(),
                kind: self.kind.as_str(),
                index,
            });
        }
        Ok(())
    }

    fn read_curve(
        &self,
        curves: &mut CurveTable,
        index: usize,
        curve: Option<&CurveJson>,
    ) -> Result<()> {
        let Some(curve) = curve else {
            return Ok(());
        };
        if index >= curves.len() {
            log::warn!(
                "Ignoring curve on last keyframe of {} timeline, bone {} in animation {}",
                self.kind.as_str(),
                self.bone,
                self.animation
            );
            return Ok(());
        }

        match curve {
            CurveJson::Named(name) if name == "stepped" => curves.set_stepped(index),
            CurveJson::Named(name) if name == "linear" => curves.set_linear(index),
            CurveJson::Named(name) => return Err(self.invalid_curve(name.clone())),
            &CurveJson::Bezier([cx1, cy1, cx2, cy2]) => {
                let valid = [cx1, cy1, cx2, cy2].iter().all(|v| v.is_finite())
                    && (0.0..=1.0).contains(&cx1)
                    && (0.0..=1.0).contains(&cx2);
                if !valid {
                    return Err(self.invalid_curve(format!("[{cx1}, {cy1}, {cx2}, {cy2}]")));
                }
                curves.set_bezier(index, cx1, cy1, cx2, cy2);
            }
        }
        Ok(())
    }

    fn invalid_curve(&self, value: String) -> MarrowError {
        MarrowError::InvalidCurve {
            animation: self.animation.to_string(),
            bone: self.bone.to_string(),
            value,
        }
    }
}

fn read_rotate(
    context: &TimelineContext,
    bone_index: usize,
    keys: &[RotateKeyJson],
) -> Result<Timeline> {
    context.check_count(keys.len())?;

    let mut timeline = RotateTimeline::new(bone_index, keys.len());
    for (i, key) in keys.iter().enumerate() {
        timeline.set_frame(i, key.time, key.angle);
        context.read_curve(timeline.curves_mut(), i, key.curve.as_ref())?;
    }
    context.check_frames(timeline.frames())?;
    Ok(timeline.into())
}

fn read_translate(
    context: &TimelineContext,
    bone_index: usize,
    keys: &[VectorKeyJson],
    scale: f32,
) -> Result<Timeline> {
    context.check_count(keys.len())?;

    let mut timeline = TranslateTimeline::new(bone_index, keys.len());
    for (i, key) in keys.iter().enumerate() {
        timeline.set_frame(i, key.time, key.x * scale, key.y * scale);
        context.read_curve(timeline.curves_mut(), i, key.curve.as_ref())?;
    }
    context.check_frames(timeline.frames())?;
    Ok(timeline.into())
}

fn read_scale(
    context: &TimelineContext,
    bone_index: usize,
    keys: &[VectorKeyJson],
) -> Result<Timeline> {
    context.check_count(keys.len())?;

    let mut timeline = ScaleTimeline::new(bone_index, keys.len());
    for (i, key) in keys.iter().enumerate() {
        timeline.set_frame(i, key.time, key.x, key.y);
        context.read_curve(timeline.curves_mut(), i, key.curve.as_ref())?;
    }
    context.check_frames(timeline.frames())?;
    Ok(timeline.into())
}
