//! Bone timelines.
//!
//! A timeline drives one property (rotation, translation or scale) of one
//! bone. Applying a timeline never sets the property outright: it moves the
//! live value toward `setup + keyframe value` by `alpha`, so several
//! animations can be blended into the same pose one after another.
//!
//! | time                          | effect                                  |
//! |-------------------------------|-----------------------------------------|
//! | before the first keyframe     | none                                    |
//! | inside a segment              | eased interpolation of the two keyframes|
//! | at or after the last keyframe | last keyframe value                     |

use glam::Vec2;

use marrow_core::wrap_degrees;
use marrow_skeleton::Skeleton;

use crate::curve::CurveTable;
use crate::frames::Keyframes;

/// Floats per rotate keyframe: `(time, angle)`.
pub const ROTATE_STRIDE: usize = 2;
/// Floats per translate keyframe: `(time, x, y)`.
pub const TRANSLATE_STRIDE: usize = 3;
/// Floats per scale keyframe: `(time, x, y)`.
pub const SCALE_STRIDE: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimelineKind {
    Rotate,
    Translate,
    Scale,
}

impl TimelineKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Rotate => "rotate",
            Self::Translate => "translate",
            Self::Scale => "scale",
        }
    }
}

/// Where a query time falls relative to a timeline's keyframes.
enum Segment<'a, const S: usize> {
    Before,
    After(&'a [f32; S]),
    Between {
        left: &'a [f32; S],
        right: &'a [f32; S],
        percent: f32,
    },
}

fn find_segment<'a, const S: usize>(
    frames: &'a Keyframes<S>,
    curves: &CurveTable,
    time: f32,
) -> Segment<'a, S> {
    let all = frames.frames();
    let (Some(first), Some(last)) = (all.first(), all.last()) else {
        return Segment::Before;
    };

    if time < first[0] {
        return Segment::Before;
    }
    if time >= last[0] {
        return Segment::After(last);
    }

    let index = frames.locate(time);
    let left = &all[index - 1];
    let right = &all[index];
    let percent = 1.0 - (time - right[0]) / (left[0] - right[0]);
    let percent = curves.curve_percent(index - 1, percent);

    Segment::Between {
        left,
        right,
        percent,
    }
}

#[inline]
fn lerp_pair(left: &[f32; 3], right: &[f32; 3], percent: f32) -> Vec2 {
    let a = Vec2::new(left[1], left[2]);
    let b = Vec2::new(right[1], right[2]);
    a + (b - a) * percent
}

// ============================================================================
// Rotate
// ============================================================================

/// Keyframed bone rotation in degrees.
#[derive(Debug, Clone, PartialEq)]
pub struct RotateTimeline {
    bone_index: usize,
    frames: Keyframes<ROTATE_STRIDE>,
    curves: CurveTable,
}

impl RotateTimeline {
    /// # Panics
    /// If `frame_count` is zero.
    #[must_use]
    pub fn new(bone_index: usize, frame_count: usize) -> Self {
        assert!(frame_count > 0, "a timeline needs at least one keyframe");
        Self {
            bone_index,
            frames: Keyframes::new(frame_count),
            curves: CurveTable::new(frame_count - 1),
        }
    }

    pub fn set_frame(&mut self, index: usize, time: f32, angle: f32) {
        self.frames.set_frame(index, [time, angle]);
    }

    #[inline]
    #[must_use]
    pub fn bone_index(&self) -> usize {
        self.bone_index
    }

    #[inline]
    #[must_use]
    pub fn frames(&self) -> &Keyframes<ROTATE_STRIDE> {
        &self.frames
    }

    #[inline]
    #[must_use]
    pub fn curves(&self) -> &CurveTable {
        &self.curves
    }

    #[inline]
    pub fn curves_mut(&mut self) -> &mut CurveTable {
        &mut self.curves
    }

    /// Keyframe angle at `time`, before any setup-pose offset or blending.
    /// `None` before the first keyframe.
    #[must_use]
    pub fn sample(&self, time: f32) -> Option<f32> {
        match find_segment(&self.frames, &self.curves, time) {
            Segment::Before => None,
            Segment::After(last) => Some(last[1]),
            Segment::Between {
                left,
                right,
                percent,
            } => {
                let amount = wrap_degrees(right[1] - left[1]);
                Some(left[1] + amount * percent)
            }
        }
    }

    pub fn apply(&self, skeleton: &mut Skeleton, time: f32, alpha: f32) {
        if alpha == 0.0 {
            return;
        }
        let Some(angle) = self.sample(time) else {
            return;
        };
        let bone = &mut skeleton.bones_mut()[self.bone_index];
        let amount = wrap_degrees(bone.setup().rotation + angle - bone.local.rotation);
        bone.local.rotation += amount * alpha;
    }
}

// ============================================================================
// Translate
// ============================================================================

/// Keyframed bone translation, relative to the setup position.
#[derive(Debug, Clone, PartialEq)]
pub struct TranslateTimeline {
    bone_index: usize,
    frames: Keyframes<TRANSLATE_STRIDE>,
    curves: CurveTable,
}

impl TranslateTimeline {
    /// # Panics
    /// If `frame_count` is zero.
    #[must_use]
    pub fn new(bone_index: usize, frame_count: usize) -> Self {
        assert!(frame_count > 0, "a timeline needs at least one keyframe");
        Self {
            bone_index,
            frames: Keyframes::new(frame_count),
            curves: CurveTable::new(frame_count - 1),
        }
    }

    pub fn set_frame(&mut self, index: usize, time: f32, x: f32, y: f32) {
        self.frames.set_frame(index, [time, x, y]);
    }

    #[inline]
    #[must_use]
    pub fn bone_index(&self) -> usize {
        self.bone_index
    }

    #[inline]
    #[must_use]
    pub fn frames(&self) -> &Keyframes<TRANSLATE_STRIDE> {
        &self.frames
    }

    #[inline]
    #[must_use]
    pub fn curves(&self) -> &CurveTable {
        &self.curves
    }

    #[inline]
    pub fn curves_mut(&mut self) -> &mut CurveTable {
        &mut self.curves
    }

    /// Keyframe offset at `time`. `None` before the first keyframe.
    #[must_use]
    pub fn sample(&self, time: f32) -> Option<Vec2> {
        match find_segment(&self.frames, &self.curves, time) {
            Segment::Before => None,
            Segment::After(last) => Some(Vec2::new(last[1], last[2])),
            Segment::Between {
                left,
                right,
                percent,
            } => Some(lerp_pair(left, right, percent)),
        }
    }

    pub fn apply(&self, skeleton: &mut Skeleton, time: f32, alpha: f32) {
        if alpha == 0.0 {
            return;
        }
        let Some(offset) = self.sample(time) else {
            return;
        };
        let bone = &mut skeleton.bones_mut()[self.bone_index];
        let target = bone.setup().translation + offset;
        bone.local.translation += (target - bone.local.translation) * alpha;
    }
}

// ============================================================================
// Scale
// ============================================================================

/// Keyframed bone scale. Keyframe values are authored against a baseline of
/// `1.0`, so a keyframe of `(1, 1)` leaves the setup scale unchanged.
#[derive(Debug, Clone, PartialEq)]
pub struct ScaleTimeline {
    bone_index: usize,
    frames: Keyframes<SCALE_STRIDE>,
    curves: CurveTable,
}

impl ScaleTimeline {
    /// # Panics
    /// If `frame_count` is zero.
    #[must_use]
    pub fn new(bone_index: usize, frame_count: usize) -> Self {
        assert!(frame_count > 0, "a timeline needs at least one keyframe");
        Self {
            bone_index,
            frames: Keyframes::new(frame_count),
            curves: CurveTable::new(frame_count - 1),
        }
    }

    pub fn set_frame(&mut self, index: usize, time: f32, x: f32, y: f32) {
        self.frames.set_frame(index, [time, x, y]);
    }

    #[inline]
    #[must_use]
    pub fn bone_index(&self) -> usize {
        self.bone_index
    }

    #[inline]
    #[must_use]
    pub fn frames(&self) -> &Keyframes<SCALE_STRIDE> {
        &self.frames
    }

    #[inline]
    #[must_use]
    pub fn curves(&self) -> &CurveTable {
        &self.curves
    }

    #[inline]
    pub fn curves_mut(&mut self) -> &mut CurveTable {
        &mut self.curves
    }

    /// Keyframe scale at `time`. `None` before the first keyframe.
    #[must_use]
    pub fn sample(&self, time: f32) -> Option<Vec2> {
        match find_segment(&self.frames, &self.curves, time) {
            Segment::Before => None,
            Segment::After(last) => Some(Vec2::new(last[1], last[2])),
            Segment::Between {
                left,
                right,
                percent,
            } => Some(lerp_pair(left, right, percent)),
        }
    }

    pub fn apply(&self, skeleton: &mut Skeleton, time: f32, alpha: f32) {
        if alpha == 0.0 {
            return;
        }
        let Some(scale) = self.sample(time) else {
            return;
        };
        let bone = &mut skeleton.bones_mut()[self.bone_index];
        let target = bone.setup().scale - Vec2::ONE + scale;
        bone.local.scale += (target - bone.local.scale) * alpha;
    }
}

// ============================================================================
// Timeline
// ============================================================================

/// Any bone timeline.
#[derive(Debug, Clone, PartialEq)]
pub enum Timeline {
    Rotate(RotateTimeline),
    Translate(TranslateTimeline),
    Scale(ScaleTimeline),
}

impl Timeline {
    /// Blends this timeline's value at `time` into `skeleton` with weight `alpha`.
    #[inline]
    pub fn apply(&self, skeleton: &mut Skeleton, time: f32, alpha: f32) {
        match self {
            Self::Rotate(t) => t.apply(skeleton, time, alpha),
            Self::Translate(t) => t.apply(skeleton, time, alpha),
            Self::Scale(t) => t.apply(skeleton, time, alpha),
        }
    }

    #[must_use]
    pub fn kind(&self) -> TimelineKind {
        match self {
            Self::Rotate(_) => TimelineKind::Rotate,
            Self::Translate(_) => TimelineKind::Translate,
            Self::Scale(_) => TimelineKind::Scale,
        }
    }

    #[must_use]
    pub fn bone_index(&self) -> usize {
        match self {
            Self::Rotate(t) => t.bone_index(),
            Self::Translate(t) => t.bone_index(),
            Self::Scale(t) => t.bone_index(),
        }
    }

    #[must_use]
    pub fn frame_count(&self) -> usize {
        match self {
            Self::Rotate(t) => t.frames().frame_count(),
            Self::Translate(t) => t.frames().frame_count(),
            Self::Scale(t) => t.frames().frame_count(),
        }
    }

    /// Time of the last keyframe, `0.0` for an empty timeline.
    #[must_use]
    pub fn duration(&self) -> f32 {
        let last = match self {
            Self::Rotate(t) => t.frames().last_time(),
            Self::Translate(t) => t.frames().last_time(),
            Self::Scale(t) => t.frames().last_time(),
        };
        last.unwrap_or(0.0)
    }

    #[must_use]
    pub fn curves(&self) -> &CurveTable {
        match self {
            Self::Rotate(t) => t.curves(),
            Self::Translate(t) => t.curves(),
            Self::Scale(t) => t.curves(),
        }
    }
}

impl From<RotateTimeline> for Timeline {
    fn from(timeline: RotateTimeline) -> Self {
        Self::Rotate(timeline)
    }
}

impl From<TranslateTimeline> for Timeline {
    fn from(timeline: TranslateTimeline) -> Self {
        Self::Translate(timeline)
    }
}

impl From<ScaleTimeline> for Timeline {
    fn from(timeline: ScaleTimeline) -> Self {
        Self::Scale(timeline)
    }
}
