//! Interface to the renderer, which displays the cube and animates moves.

use crate::{AnimationDescriptor, Cube, Tick};

/// Interpolation functions.
pub mod interpolate {
    use std::f32::consts::PI;

    /// Function that maps a float from the range 0.0 to 1.0 to another float
    /// from 0.0 to 1.0.
    pub type InterpolateFn = fn(f32) -> f32;

    /// Interpolate linearly.
    pub const LINEAR: InterpolateFn = |x| x;
    /// Interpolate using cosine from 0.0 to PI.
    pub const COSINE: InterpolateFn = |x| (1.0 - (x * PI).cos()) / 2.0;
}

/// Consumer of cube states and move animations.
///
/// Errors returned from a renderer are fatal to the move queue.
pub trait Renderer {
    /// Updates the displayed colors of the cube.
    fn update_cube(&mut self, cube: &Cube) -> eyre::Result<()>;
    /// Starts playing an animation.
    fn send_animation(&mut self, animation: AnimationDescriptor) -> eyre::Result<()>;
    /// Notifies the renderer of the duration of each move, in ticks.
    fn update_turn_time(&mut self, turn_time: u32);
}

/// Fixed-size ring buffer of the most recent animations.
///
/// When full, pushing an animation overwrites the oldest one.
#[derive(Debug, Clone)]
pub struct AnimationRing {
    slots: Vec<Option<AnimationDescriptor>>,
    next: usize,
}
impl Default for AnimationRing {
    fn default() -> Self {
        Self::new(crate::MAX_ANIMATIONS)
    }
}
impl AnimationRing {
    /// Constructs an empty ring that holds up to `capacity` animations.
    ///
    /// A capacity of zero is treated as one.
    pub fn new(capacity: usize) -> Self {
        Self {
            slots: vec![None; capacity.max(1)],
            next: 0,
        }
    }

    /// Returns the maximum number of animations stored at once.
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Adds an animation, overwriting the oldest one if the ring is full.
    pub fn push(&mut self, animation: AnimationDescriptor) {
        self.slots[self.next] = Some(animation);
        self.next = (self.next + 1) % self.slots.len();
    }

    /// Removes all animations.
    pub fn clear(&mut self) {
        self.slots.fill(None);
        self.next = 0;
    }

    /// Returns all stored animations, oldest first.
    pub fn iter(&self) -> impl '_ + Iterator<Item = &AnimationDescriptor> {
        let (newer, older) = self.slots.split_at(self.next);
        older.iter().chain(newer).flatten()
    }

    /// Returns the animations that are still playing at `now`, along with
    /// their eased progress from 0.0 to 1.0.
    pub fn active(
        &self,
        now: Tick,
        turn_time: u32,
    ) -> impl '_ + Iterator<Item = (&AnimationDescriptor, f32)> {
        self.iter().filter_map(move |anim| {
            let elapsed = now.wrapping_sub(anim.start_time);
            (elapsed < turn_time).then(|| (anim, progress(anim, now, turn_time)))
        })
    }
}

/// Returns how far along an animation is at `now`, eased with
/// [`interpolate::COSINE`].
pub fn progress(animation: &AnimationDescriptor, now: Tick, turn_time: u32) -> f32 {
    if turn_time == 0 {
        return 1.0;
    }
    let elapsed = now.wrapping_sub(animation.start_time);
    let t = (elapsed as f32 / turn_time as f32).clamp(0.0, 1.0);
    interpolate::COSINE(t)
}
