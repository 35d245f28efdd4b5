use std::fmt;

use crate::{Direction, Face, FaceletPos, STICKER_COUNT, Tick, sticker_bitmask};

/// Visual axis around which a move is animated.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum AnimationAxis {
    /// Axis through L and R.
    X,
    /// Axis through U and D.
    Y,
    /// Axis through F and B.
    Z,
}
impl fmt::Display for AnimationAxis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::X => write!(f, "x"),
            Self::Y => write!(f, "y"),
            Self::Z => write!(f, "z"),
        }
    }
}

/// Description of a single move, sent to the renderer so that it can animate
/// exactly the stickers that moved.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct AnimationDescriptor {
    /// Visual rotation axis.
    pub axis: AnimationAxis,
    /// Direction around [`Self::axis`].
    pub direction: Direction,
    /// Bitmask of stickers that moved, indexed by [`crate::sticker_index()`].
    pub stickers: u64,
    /// Tick at which the animation starts playing.
    pub start_time: Tick,
}
impl AnimationDescriptor {
    /// Returns whether a sticker is part of the animation.
    pub fn contains(&self, face: Face, pos: FaceletPos) -> bool {
        self.stickers & sticker_bitmask(face, pos) != 0
    }
    /// Returns the number of stickers that move.
    pub fn sticker_count(&self) -> u32 {
        self.stickers.count_ones()
    }
    /// Returns the indices of the stickers that move, in increasing order.
    pub fn sticker_indices(&self) -> impl '_ + Iterator<Item = usize> {
        (0..STICKER_COUNT).filter(|&i| self.stickers >> i & 1 != 0)
    }
}
