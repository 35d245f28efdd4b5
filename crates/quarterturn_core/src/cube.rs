//! Facelet model of a 3x3x3 cube.

use std::fmt;
use std::ops::{Index, IndexMut};

use itertools::Itertools;
use strum::{EnumIter, IntoEnumIterator};

/// Sticker color.
///
/// In the solved state, every sticker on face `i` has color `i`.
pub type Color = u8;

/// Number of stickers on one face.
pub const STICKERS_PER_FACE: usize = 9;
/// Number of stickers on the whole cube.
pub const STICKER_COUNT: usize = STICKERS_PER_FACE * Face::COUNT;

/// Face of the cube.
///
/// The discriminant is the face's index in [`Cube`], which is also the color
/// of its stickers in the solved state.
#[derive(EnumIter, Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum Face {
    /// Up.
    U = 0,
    /// Front.
    F = 1,
    /// Right.
    R = 2,
    /// Back.
    B = 3,
    /// Left.
    L = 4,
    /// Down.
    D = 5,
}
impl fmt::Display for Face {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}
impl Face {
    /// Number of faces.
    pub const COUNT: usize = 6;

    /// Returns the index of the face in a [`Cube`].
    pub const fn index(self) -> usize {
        self as usize
    }
    /// Returns the face with the given index, or `None` if it is out of range.
    pub fn from_index(i: usize) -> Option<Self> {
        Self::iter().nth(i)
    }

    /// Returns the face on the other side of the cube.
    #[must_use]
    pub const fn opposite(self) -> Self {
        use Face::*;

        match self {
            U => D,
            F => B,
            R => L,
            B => F,
            L => R,
            D => U,
        }
    }

    /// Returns the notation symbol for the face.
    pub const fn symbol(self) -> char {
        use Face::*;

        match self {
            U => 'U',
            F => 'F',
            R => 'R',
            B => 'B',
            L => 'L',
            D => 'D',
        }
    }
    /// Returns the human-friendly name of the face.
    pub const fn name(self) -> &'static str {
        use Face::*;

        match self {
            U => "Up",
            F => "Front",
            R => "Right",
            B => "Back",
            L => "Left",
            D => "Down",
        }
    }
}

/// Position of a facelet within its face, in row-major order.
///
/// Each face is laid out as seen from outside the cube. The four side faces
/// have U along their top edge; U has B along its top edge and D has F along
/// its top edge.
#[derive(EnumIter, Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
#[allow(missing_docs)]
pub enum FaceletPos {
    TopLeft = 0,
    TopCenter = 1,
    TopRight = 2,
    MiddleLeft = 3,
    MiddleCenter = 4,
    MiddleRight = 5,
    BottomLeft = 6,
    BottomCenter = 7,
    BottomRight = 8,
}
impl FaceletPos {
    /// Center facelet, which never moves when its own face turns.
    pub const CENTER: Self = Self::MiddleCenter;

    /// Returns the index of the facelet within its face.
    pub const fn index(self) -> usize {
        self as usize
    }
    /// Returns the facelet with the given index, or `None` if it is out of
    /// range.
    pub fn from_index(i: usize) -> Option<Self> {
        Self::iter().nth(i)
    }

    /// Returns where this facelet ends up after a clockwise quarter turn of
    /// its own face.
    #[must_use]
    pub const fn rotate_cw(self) -> Self {
        use FaceletPos::*;

        match self {
            TopLeft => TopRight,
            TopCenter => MiddleRight,
            TopRight => BottomRight,
            MiddleRight => BottomCenter,
            BottomRight => BottomLeft,
            BottomCenter => MiddleLeft,
            BottomLeft => TopLeft,
            MiddleLeft => TopCenter,
            MiddleCenter => MiddleCenter,
        }
    }
}

/// Returns the global index (`0..54`) of a sticker.
pub const fn sticker_index(face: Face, pos: FaceletPos) -> usize {
    face.index() * STICKERS_PER_FACE + pos.index()
}
/// Returns a bitmask with only the bit for one sticker set.
pub const fn sticker_bitmask(face: Face, pos: FaceletPos) -> u64 {
    1 << sticker_index(face, pos)
}
/// Returns a bitmask with the bits for all 9 stickers of a face set.
pub const fn face_bitmask(face: Face) -> u64 {
    0o777 << (face.index() * STICKERS_PER_FACE)
}

/// Colored facelets of a 3x3x3 cube.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Cube {
    faces: [[Color; STICKERS_PER_FACE]; Face::COUNT],
}
impl Default for Cube {
    fn default() -> Self {
        let mut ret = Self {
            faces: [[0; STICKERS_PER_FACE]; Face::COUNT],
        };
        ret.reset();
        ret
    }
}
impl Index<(Face, FaceletPos)> for Cube {
    type Output = Color;

    fn index(&self, (face, pos): (Face, FaceletPos)) -> &Self::Output {
        &self.faces[face.index()][pos.index()]
    }
}
impl IndexMut<(Face, FaceletPos)> for Cube {
    fn index_mut(&mut self, (face, pos): (Face, FaceletPos)) -> &mut Self::Output {
        &mut self.faces[face.index()][pos.index()]
    }
}
impl fmt::Display for Cube {
    /// Formats the cube as one line per face, like `U:000000000`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let lines = Face::iter().map(|face| {
            let colors = self.face(face).iter().join("");
            format!("{face}:{colors}")
        });
        write!(f, "{}", lines.format("\n"))
    }
}
impl Cube {
    /// Constructs a solved cube.
    pub fn new() -> Self {
        Self::default()
    }

    /// Resets the cube to the solved state.
    pub fn reset(&mut self) {
        for (color, stickers) in self.faces.iter_mut().enumerate() {
            *stickers = [color as Color; STICKERS_PER_FACE];
        }
    }

    /// Returns the stickers of one face in row-major order.
    pub fn face(&self, face: Face) -> &[Color; STICKERS_PER_FACE] {
        &self.faces[face.index()]
    }
    /// Returns all stickers, ordered by [`sticker_index()`].
    pub fn stickers(&self) -> impl '_ + Iterator<Item = Color> {
        self.faces.iter().flatten().copied()
    }

    /// Returns whether every face is a single color.
    ///
    /// This is also true after whole-cube rotations.
    pub fn is_solved(&self) -> bool {
        self.faces.iter().all(|face| face.iter().all_equal())
    }

    /// Returns how many stickers there are of each color.
    pub fn color_counts(&self) -> [usize; Face::COUNT] {
        let mut ret = [0; Face::COUNT];
        for color in self.stickers() {
            if let Some(count) = ret.get_mut(color as usize) {
                *count += 1;
            }
        }
        ret
    }

    /// Applies a sequence of moves, discarding their animations.
    pub fn apply_all(&mut self, moves: impl IntoIterator<Item = crate::Move>) {
        for mv in moves {
            crate::make_move(self, mv);
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_solved_cube_colors() {
        let cube = Cube::new();
        for face in Face::iter() {
            assert_eq!(*cube.face(face), [face as Color; 9]);
        }
        assert!(cube.is_solved());
        assert_eq!(cube.color_counts(), [9; 6]);
    }

    #[test]
    fn test_reset_after_scribbling() {
        let mut cube = Cube::new();
        cube[(Face::U, FaceletPos::TopLeft)] = 5;
        cube[(Face::D, FaceletPos::CENTER)] = 0;
        assert!(!cube.is_solved());
        cube.reset();
        assert_eq!(cube, Cube::new());
    }

    #[test]
    fn test_sticker_addressing() {
        assert_eq!(sticker_index(Face::U, FaceletPos::TopLeft), 0);
        assert_eq!(sticker_index(Face::F, FaceletPos::TopLeft), 9);
        assert_eq!(sticker_index(Face::D, FaceletPos::BottomRight), 53);
        assert_eq!(sticker_bitmask(Face::F, FaceletPos::TopCenter), 1 << 10);
        assert_eq!(face_bitmask(Face::U), 0o777);
        assert_eq!(face_bitmask(Face::F), 0o777 << 9);

        let all = Face::iter().fold(0, |acc, face| acc | face_bitmask(face));
        assert_eq!(all, (1 << STICKER_COUNT) - 1);
        for face in Face::iter() {
            let from_stickers = FaceletPos::iter()
                .fold(0, |acc, pos| acc | sticker_bitmask(face, pos));
            assert_eq!(from_stickers, face_bitmask(face));
        }
    }

    #[test]
    fn test_facelet_cw_cycle() {
        use FaceletPos::*;

        // Four clockwise turns bring every facelet home.
        for pos in FaceletPos::iter() {
            let rotated = pos.rotate_cw().rotate_cw().rotate_cw().rotate_cw();
            assert_eq!(rotated, pos);
        }
        assert_eq!(FaceletPos::CENTER.rotate_cw(), FaceletPos::CENTER);
        assert_eq!(TopLeft.rotate_cw(), TopRight);
        assert_eq!(MiddleLeft.rotate_cw(), TopCenter);
    }

    #[test]
    fn test_opposite_faces() {
        for face in Face::iter() {
            assert_ne!(face.opposite(), face);
            assert_eq!(face.opposite().opposite(), face);
        }
        assert_eq!(Face::U.opposite(), Face::D);
        assert_eq!(Face::R.opposite(), Face::L);
        assert_eq!(Face::F.opposite(), Face::B);
    }

    #[test]
    fn test_display() {
        let text = Cube::new().to_string();
        assert_eq!(text.lines().next(), Some("U:000000000"));
        assert_eq!(text.lines().last(), Some("D:555555555"));
    }
}
