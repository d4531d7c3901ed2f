use smallvec::SmallVec;

use marrow_skeleton::Skeleton;

use crate::action::AnimationAction;

/// Ordered stack of actions blended into one skeleton.
///
/// Actions are mixed in insertion order, so later actions pull the pose
/// toward their values over earlier ones. The mixer never resets the pose;
/// call [`Skeleton::set_to_setup_pose`] first when the previous frame's
/// result must not carry over.
#[derive(Debug, Clone, Default)]
pub struct AnimationMixer {
    actions: SmallVec<[AnimationAction; 4]>,
}

impl AnimationMixer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an action and returns its index.
    pub fn add_action(&mut self, action: AnimationAction) -> usize {
        log::trace!(
            "Mixer: adding action {} (weight {})",
            action.animation().name(),
            action.weight
        );
        self.actions.push(action);
        self.actions.len() - 1
    }

    #[must_use]
    pub fn actions(&self) -> &[AnimationAction] {
        &self.actions
    }

    pub fn actions_mut(&mut self) -> &mut [AnimationAction] {
        &mut self.actions
    }

    #[must_use]
    pub fn find_action(&self, name: &str) -> Option<&AnimationAction> {
        self.actions.iter().find(|a| a.animation().name() == name)
    }

    pub fn find_action_mut(&mut self, name: &str) -> Option<&mut AnimationAction> {
        self.actions.iter_mut().find(|a| a.animation().name() == name)
    }

    pub fn remove_action(&mut self, index: usize) -> Option<AnimationAction> {
        (index < self.actions.len()).then(|| self.actions.remove(index))
    }

    pub fn clear(&mut self) {
        self.actions.clear();
    }

    /// Advances every action by `dt`, then blends the enabled, weighted ones
    /// into `skeleton`.
    pub fn update(&mut self, dt: f32, skeleton: &mut Skeleton) {
        for action in &mut self.actions {
            action.update(dt);
        }
        self.apply(skeleton);
    }

    /// Blends every enabled action with a positive weight into `skeleton`
    /// without advancing time.
    pub fn apply(&self, skeleton: &mut Skeleton) {
        for action in &self.actions {
            if !action.enabled || action.weight <= 0.0 {
                continue;
            }
            action.apply(skeleton);
        }
    }
}
