//! Moves and their notation.

use std::fmt;
use std::str::FromStr;

use itertools::Itertools;
use strum::EnumIter;

use crate::{Face, ParseMoveError};

/// Layer or group of layers turned by a move.
#[allow(non_camel_case_types)]
#[derive(EnumIter, Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum MoveFace {
    /// Up face.
    U,
    /// Right face.
    R,
    /// Front face.
    F,
    /// Down face.
    D,
    /// Left face.
    L,
    /// Back face.
    B,

    /// Up face and E slice.
    u,
    /// Right face and M slice.
    r,
    /// Front face and S slice.
    f,
    /// Down face and E slice.
    d,
    /// Left face and M slice.
    l,
    /// Back face and S slice.
    b,

    /// Middle slice, between L and R, turning like L.
    M,
    /// Equatorial slice, between U and D, turning like D.
    E,
    /// Standing slice, between F and B, turning like F.
    S,

    /// Whole-cube rotation, turning like R.
    x,
    /// Whole-cube rotation, turning like U.
    y,
    /// Whole-cube rotation, turning like F.
    z,
}
impl From<Face> for MoveFace {
    fn from(face: Face) -> Self {
        match face {
            Face::U => Self::U,
            Face::F => Self::F,
            Face::R => Self::R,
            Face::B => Self::B,
            Face::L => Self::L,
            Face::D => Self::D,
        }
    }
}
impl fmt::Display for MoveFace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}
impl MoveFace {
    /// Returns the notation character for the move face.
    pub fn symbol(self) -> char {
        use MoveFace::*;

        match self {
            U => 'U',
            R => 'R',
            F => 'F',
            D => 'D',
            L => 'L',
            B => 'B',
            u => 'u',
            r => 'r',
            f => 'f',
            d => 'd',
            l => 'l',
            b => 'b',
            M => 'M',
            E => 'E',
            S => 'S',
            x => 'x',
            y => 'y',
            z => 'z',
        }
    }
    /// Returns the move face with the given notation character, or `None` if
    /// there is none.
    pub fn from_symbol(c: char) -> Option<Self> {
        use strum::IntoEnumIterator;

        Self::iter().find(|face| face.symbol() == c)
    }

    /// Returns the single outer face turned by this move, if there is exactly
    /// one.
    pub fn outer_face(self) -> Option<Face> {
        use MoveFace::*;

        match self {
            U => Some(Face::U),
            R => Some(Face::R),
            F => Some(Face::F),
            D => Some(Face::D),
            L => Some(Face::L),
            B => Some(Face::B),
            _ => None,
        }
    }
}

/// Direction of a move.
#[derive(EnumIter, Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Clockwise quarter turn, as seen looking at the face.
    #[default]
    Cw,
    /// Counterclockwise quarter turn.
    Ccw,
    /// Half turn.
    Double,
}
impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.suffix())
    }
}
impl Direction {
    /// Returns the reverse direction. Half turns are their own reverse.
    #[must_use]
    pub const fn rev(self) -> Self {
        match self {
            Self::Cw => Self::Ccw,
            Self::Ccw => Self::Cw,
            Self::Double => Self::Double,
        }
    }

    /// Returns the number of clockwise quarter turns equivalent to this
    /// direction.
    pub const fn quarter_turns(self) -> usize {
        match self {
            Self::Cw => 1,
            Self::Double => 2,
            Self::Ccw => 3,
        }
    }

    /// Returns the notation suffix for the direction.
    pub const fn suffix(self) -> &'static str {
        match self {
            Self::Cw => "",
            Self::Ccw => "'",
            Self::Double => "2",
        }
    }
}

/// Move of some layers of the cube.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Move {
    /// Layers to turn.
    pub face: MoveFace,
    /// Direction to turn them.
    pub direction: Direction,
}
impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.face, self.direction)
    }
}
impl FromStr for Move {
    type Err = ParseMoveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let c = chars.next().ok_or(ParseMoveError::Empty)?;
        let face = MoveFace::from_symbol(c).ok_or(ParseMoveError::UnknownFace(c))?;
        let direction = match chars.as_str() {
            "" => Direction::Cw,
            "'" => Direction::Ccw,
            "2" | "2'" => Direction::Double,
            other => return Err(ParseMoveError::BadSuffix(other.to_owned())),
        };
        Ok(Self { face, direction })
    }
}
impl Move {
    /// Constructs a move.
    pub const fn new(face: MoveFace, direction: Direction) -> Self {
        Self { face, direction }
    }

    /// Returns the move that undoes this one.
    #[must_use]
    pub const fn rev(self) -> Self {
        Self {
            face: self.face,
            direction: self.direction.rev(),
        }
    }
}

/// Parses a whitespace-separated sequence of moves, such as `R U R' U'`.
pub fn parse_moves(s: &str) -> Result<Vec<Move>, ParseMoveError> {
    s.split_whitespace().map(str::parse).collect()
}

/// Formats a sequence of moves separated by spaces.
pub fn format_moves<'a>(moves: impl IntoIterator<Item = &'a Move>) -> String {
    moves.into_iter().join(" ")
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use strum::IntoEnumIterator;

    use super::*;

    #[test]
    fn test_move_face_symbols() {
        let symbols: String = MoveFace::iter().map(MoveFace::symbol).collect();
        assert_eq!(symbols, "URFDLBurfdlbMESxyz");
        for face in MoveFace::iter() {
            assert_eq!(MoveFace::from_symbol(face.symbol()), Some(face));
        }
        assert_eq!(MoveFace::from_symbol('Q'), None);
        assert_eq!(MoveFace::from_symbol('X'), None);
    }

    #[test]
    fn test_parse_moves() {
        let moves = parse_moves("R U' r2 M x'  S2'").unwrap();
        assert_eq!(
            moves,
            vec![
                Move::new(MoveFace::R, Direction::Cw),
                Move::new(MoveFace::U, Direction::Ccw),
                Move::new(MoveFace::r, Direction::Double),
                Move::new(MoveFace::M, Direction::Cw),
                Move::new(MoveFace::x, Direction::Ccw),
                Move::new(MoveFace::S, Direction::Double),
            ],
        );
        assert_eq!(format_moves(&moves), "R U' r2 M x' S2");
        assert_eq!(parse_moves("   "), Ok(vec![]));
    }

    #[test]
    fn test_parse_move_errors() {
        assert_eq!("".parse::<Move>(), Err(ParseMoveError::Empty));
        assert_eq!("Q".parse::<Move>(), Err(ParseMoveError::UnknownFace('Q')));
        assert_eq!(
            "R3".parse::<Move>(),
            Err(ParseMoveError::BadSuffix("3".to_owned())),
        );
        assert!(parse_moves("R U X").is_err());
    }

    #[test]
    fn test_direction_reverse() {
        for dir in Direction::iter() {
            assert_eq!(dir.rev().rev(), dir);
            assert_eq!((dir.quarter_turns() + dir.rev().quarter_turns()) % 4, 0);
        }
        assert_eq!(Direction::Double.rev(), Direction::Double);
    }
}
