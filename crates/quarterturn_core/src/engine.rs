//! Move engine: decomposes moves into primitive quarter turns and applies
//! them to a [`Cube`].

use smallvec::{SmallVec, smallvec};
use strum::IntoEnumIterator;

use crate::{
    AnimationDescriptor, Cube, Direction, FaceletPos, Move, MoveFace, RotationAxis,
    sticker_bitmask,
};

/// Quarter turns of one rotation axis.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Rotation {
    /// Layer to turn.
    pub axis: RotationAxis,
    /// Direction to turn it.
    pub direction: Direction,
}
impl Rotation {
    /// Constructs a rotation.
    pub const fn new(axis: RotationAxis, direction: Direction) -> Self {
        Self { axis, direction }
    }
}

/// Decomposes a move into 1 to 3 rotations of canonical axes.
pub fn decompose(mv: Move) -> SmallVec<[Rotation; 3]> {
    use RotationAxis as A;

    let dir = mv.direction;
    let rev = dir.rev();
    let r = Rotation::new;

    match mv.face {
        MoveFace::U => smallvec![r(A::U, dir)],
        MoveFace::R => smallvec![r(A::R, dir)],
        MoveFace::F => smallvec![r(A::F, dir)],
        MoveFace::D => smallvec![r(A::D, dir)],
        MoveFace::L => smallvec![r(A::L, dir)],
        MoveFace::B => smallvec![r(A::B, dir)],
        MoveFace::M => smallvec![r(A::M, dir)],
        MoveFace::E => smallvec![r(A::E, dir)],
        MoveFace::S => smallvec![r(A::S, dir)],

        // Each slice turns like one of the faces next to it: M like L, E like
        // D, and S like F. Wide moves on the other face turn it backwards.
        MoveFace::u => smallvec![r(A::U, dir), r(A::E, rev)],
        MoveFace::r => smallvec![r(A::R, dir), r(A::M, rev)],
        MoveFace::f => smallvec![r(A::F, dir), r(A::S, dir)],
        MoveFace::d => smallvec![r(A::D, dir), r(A::E, dir)],
        MoveFace::l => smallvec![r(A::L, dir), r(A::M, dir)],
        MoveFace::b => smallvec![r(A::B, dir), r(A::S, rev)],

        MoveFace::x => smallvec![r(A::R, dir), r(A::M, rev), r(A::L, rev)],
        MoveFace::y => smallvec![r(A::U, dir), r(A::E, rev), r(A::D, rev)],
        MoveFace::z => smallvec![r(A::F, dir), r(A::S, dir), r(A::B, rev)],
    }
}

/// Applies one clockwise quarter turn of `axis` to `cube` and returns the
/// bitmask of stickers that moved.
pub fn quarter_turn(cube: &mut Cube, axis: RotationAxis) -> u64 {
    let old = cube.clone();
    let mut stickers = 0;

    let ring = axis.ring_locations();
    for (i, &src) in ring.iter().enumerate() {
        let dst = ring[(i + 3) % ring.len()];
        cube[dst] = old[src];
        stickers |= sticker_bitmask(dst.0, dst.1);
    }

    if let Some(face) = axis.face() {
        for pos in FaceletPos::iter().filter(|&pos| pos != FaceletPos::CENTER) {
            cube[(face, pos.rotate_cw())] = old[(face, pos)];
            stickers |= sticker_bitmask(face, pos);
        }
    }

    stickers
}

/// Applies a rotation, repeating the quarter turn as needed. Returns the
/// bitmask of stickers that moved.
pub fn rotate(cube: &mut Cube, rotation: Rotation) -> u64 {
    (0..rotation.direction.quarter_turns())
        .fold(0, |stickers, _| stickers | quarter_turn(cube, rotation.axis))
}

/// Applies a move to the cube and returns its animation.
///
/// The animation's `start_time` is left at zero for the caller to fill in.
pub fn make_move(cube: &mut Cube, mv: Move) -> AnimationDescriptor {
    let rotations = decompose(mv);

    let first = rotations[0];
    let (axis, reverse) = first.axis.animation_axis();
    let direction = if reverse {
        first.direction.rev()
    } else {
        first.direction
    };

    let stickers = rotations
        .iter()
        .fold(0, |stickers, &rotation| stickers | rotate(cube, rotation));

    log::trace!("applied move {mv} ({} stickers)", stickers.count_ones());

    AnimationDescriptor {
        axis,
        direction,
        stickers,
        start_time: 0,
    }
}
