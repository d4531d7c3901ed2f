use marrow_skeleton::Skeleton;

use crate::timeline::Timeline;

/// A named, immutable set of timelines.
///
/// Animations hold no playback state and never write to themselves, so a
/// single instance (usually behind an `Arc`) can drive any number of
/// skeletons at once.
#[derive(Debug, Clone, PartialEq)]
pub struct Animation {
    name: String,
    timelines: Vec<Timeline>,
    duration: f32,
}

impl Animation {
    /// Creates an animation. The duration is the latest last-keyframe time
    /// over all timelines.
    #[must_use]
    pub fn new(name: impl Into<String>, timelines: Vec<Timeline>) -> Self {
        let duration = timelines
            .iter()
            .map(Timeline::duration)
            .fold(0.0_f32, f32::max);

        Self {
            name: name.into(),
            timelines,
            duration,
        }
    }

    #[inline]
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    #[must_use]
    pub fn timelines(&self) -> &[Timeline] {
        &self.timelines
    }

    #[inline]
    #[must_use]
    pub fn duration(&self) -> f32 {
        self.duration
    }

    /// Poses `skeleton` at `time` with full weight.
    #[inline]
    pub fn apply(&self, skeleton: &mut Skeleton, time: f32, looping: bool) {
        self.mix(skeleton, time, looping, 1.0);
    }

    /// Blends this animation at `time` into `skeleton` with weight `alpha`.
    ///
    /// With `looping`, `time` is first wrapped into `[0, duration)`.
    /// Timelines are applied in the order they were given to [`new`](Self::new).
    pub fn mix(&self, skeleton: &mut Skeleton, time: f32, looping: bool, alpha: f32) {
        let time = if looping && self.duration != 0.0 {
            self.wrap_time(time)
        } else {
            time
        };

        for timeline in &self.timelines {
            timeline.apply(skeleton, time, alpha);
        }
    }

    #[inline]
    fn wrap_time(&self, time: f32) -> f32 {
        let wrapped = time.rem_euclid(self.duration);
        // rem_euclid can round up to the divisor for tiny negative inputs
        if wrapped >= self.duration { 0.0 } else { wrapped }
    }
}
