//! Move engine for an animated 3x3x3 twisty cube.
//!
//! The engine keeps the sticker state of the cube, applies moves in standard
//! notation, queues moves for timed playback, and generates random shuffles.
//! Displaying the cube is left to a [`Renderer`].

mod animation;
mod cube;
mod engine;
mod error;
mod notation;
mod queue;
mod render;
mod shuffle;
mod table;
mod timing;

pub use prelude::*;

pub use crate::engine::{Rotation, decompose, quarter_turn, rotate};
pub use crate::render::{interpolate, progress};
pub use crate::shuffle::can_follow;
pub use crate::table::RingGroup;
pub use crate::timing::has_elapsed;

/// Prelude of common imports.
pub mod prelude {
    pub use crate::animation::{AnimationAxis, AnimationDescriptor};
    pub use crate::cube::{
        Color, Cube, Face, FaceletPos, STICKER_COUNT, STICKERS_PER_FACE, face_bitmask,
        sticker_bitmask, sticker_index,
    };
    pub use crate::engine::make_move;
    pub use crate::error::{MoveQueueError, ParseMoveError};
    pub use crate::notation::{Direction, Move, MoveFace, format_moves, parse_moves};
    pub use crate::queue::MoveQueue;
    pub use crate::render::{AnimationRing, Renderer};
    pub use crate::shuffle::Shuffler;
    pub use crate::table::RotationAxis;
    pub use crate::timing::TurnTimes;
    pub use crate::{EngineConfig, Tick};
}

/// Millisecond clock value. Wraps around after about 49 days.
pub type Tick = u32;

/// Maximum number of user moves that may be pending at once.
pub const MAX_MOVES: usize = 4;
/// Number of moves in a shuffle.
pub const SHUFFLE_LENGTH: usize = 20;
/// Default duration of a move, in milliseconds.
pub const DEFAULT_TURN_TIME: u32 = 200;
/// Default duration of a move while shuffling, in milliseconds.
pub const DEFAULT_SHUFFLE_TURN_TIME: u32 = 50;
/// Number of animations a renderer keeps around at once.
pub const MAX_ANIMATIONS: usize = 6;

/// Tunable parameters of the move engine.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct EngineConfig {
    /// Maximum number of user moves that may be pending at once.
    pub max_moves: usize,
    /// Number of moves in a shuffle.
    pub shuffle_length: usize,
    /// Duration of each move.
    pub turn_times: TurnTimes,
}
impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            max_moves: MAX_MOVES,
            shuffle_length: SHUFFLE_LENGTH,
            turn_times: TurnTimes::default(),
        }
    }
}

/// Resets `cube` to the solved state and tells the renderer about it.
pub fn reset_cube(cube: &mut Cube, renderer: &mut impl Renderer) -> eyre::Result<()> {
    cube.reset();
    log::debug!("cube reset");
    renderer.update_cube(cube)
}
