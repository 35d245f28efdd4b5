//! Translation of typed text into moves.

use quarterturn_core::{Direction, Move, MoveFace};

/// Returns the move for a typed character, or `None` if the character is not
/// bound to a move.
///
/// A lowercase letter turns clockwise and an uppercase letter turns
/// counterclockwise. `X`, `Y`, and `Z` rotate the whole cube.
pub(crate) fn translate_key(c: char) -> Option<Move> {
    let direction = if c.is_ascii_lowercase() {
        Direction::Cw
    } else {
        Direction::Ccw
    };
    let face = match c.to_ascii_uppercase() {
        'U' => MoveFace::U,
        'R' => MoveFace::R,
        'F' => MoveFace::F,
        'D' => MoveFace::D,
        'L' => MoveFace::L,
        'B' => MoveFace::B,
        'X' => MoveFace::x,
        'Y' => MoveFace::y,
        'Z' => MoveFace::z,
        'M' => MoveFace::M,
        'E' => MoveFace::E,
        'S' => MoveFace::S,
        _ => return None,
    };
    Some(Move::new(face, direction))
}
