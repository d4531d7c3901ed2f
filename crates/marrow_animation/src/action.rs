use std::sync::Arc;

use marrow_skeleton::Skeleton;

use crate::animation::Animation;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoopMode {
    Once,
    #[default]
    Loop,
    PingPong,
}

/// Playback state of one animation on one skeleton.
///
/// The [`Animation`] itself is shared; the action owns the clock.
#[derive(Debug, Clone)]
pub struct AnimationAction {
    animation: Arc<Animation>,

    pub time: f32,
    pub time_scale: f32,
    pub weight: f32,
    pub loop_mode: LoopMode,
    pub paused: bool,
    pub enabled: bool,

    /// Ping-pong playback is on its backward leg.
    reversed: bool,
}

impl AnimationAction {
    #[must_use]
    pub fn new(animation: Arc<Animation>) -> Self {
        Self {
            animation,
            time: 0.0,
            time_scale: 1.0,
            weight: 1.0,
            loop_mode: LoopMode::Loop,
            paused: false,
            enabled: true,
            reversed: false,
        }
    }

    #[must_use]
    pub fn with_weight(mut self, weight: f32) -> Self {
        self.weight = weight;
        self
    }

    #[must_use]
    pub fn with_loop_mode(mut self, loop_mode: LoopMode) -> Self {
        self.loop_mode = loop_mode;
        self
    }

    #[must_use]
    pub fn animation(&self) -> &Arc<Animation> {
        &self.animation
    }

    /// Advances the clock by `dt` seconds.
    pub fn update(&mut self, dt: f32) {
        if self.paused || !self.enabled {
            return;
        }

        let duration = self.animation.duration();
        if duration <= 0.0 {
            return;
        }

        let reversed = self.reversed && self.loop_mode == LoopMode::PingPong;
        let direction = if reversed { -1.0 } else { 1.0 };
        self.time += dt * self.time_scale * direction;

        match self.loop_mode {
            LoopMode::Once => {
                if self.time >= duration || self.time < 0.0 {
                    self.time = self.time.clamp(0.0, duration);
                    self.paused = true;
                    log::debug!("Action {} finished at {}", self.animation.name(), self.time);
                }
            }
            LoopMode::Loop => {
                if self.time >= duration || self.time < 0.0 {
                    let wrapped = self.time.rem_euclid(duration);
                    // tiny negative times round up to the divisor
                    self.time = if wrapped >= duration { 0.0 } else { wrapped };
                }
            }
            LoopMode::PingPong => {
                let double_duration = duration * 2.0;
                let mut t = self.time.rem_euclid(double_duration);
                // landing in the mirrored half means one bounce
                if t > duration {
                    t = double_duration - t;
                    self.reversed = !self.reversed;
                }
                self.time = t;
            }
        }
    }

    /// Blends the animation at the current time into `skeleton` with this
    /// action's weight.
    pub fn apply(&self, skeleton: &mut Skeleton) {
        if !self.enabled {
            return;
        }
        // time is already folded by `update`
        self.animation.mix(skeleton, self.time, false, self.weight);
    }
}
