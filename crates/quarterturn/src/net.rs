//! Printing the cube as an unfolded net.
//!
//! ```text
//!       U
//!     L F R B
//!       D
//! ```

use itertools::Itertools;
use owo_colors::OwoColorize;
use quarterturn_core::{Color, Cube, Face};

/// Display color of each sticker color, indexed by [`Color`].
const STICKER_RGB: [(u8, u8, u8); Face::COUNT] = [
    (255, 255, 255), // white
    (255, 0, 0),     // red
    (0, 0, 255),     // blue
    (255, 128, 0),   // orange
    (0, 255, 0),     // green
    (255, 255, 0),   // yellow
];

/// Faces in the middle band of the net, left to right.
const MIDDLE_BAND: [Face; 4] = [Face::L, Face::F, Face::R, Face::B];

fn sticker(color: Color, colored: bool) -> String {
    let letter = Face::from_index(color as usize).map_or('?', Face::symbol);
    match STICKER_RGB.get(color as usize) {
        Some(&(r, g, b)) if colored => format!(" {letter} ")
            .black()
            .on_truecolor(r, g, b)
            .to_string(),
        _ => format!(" {letter} "),
    }
}

fn face_row(cube: &Cube, face: Face, row: usize, colored: bool) -> String {
    cube.face(face)[row * 3..row * 3 + 3]
        .iter()
        .map(|&color| sticker(color, colored))
        .join("")
}

/// Formats the cube as an unfolded net, one line per row of stickers. Each
/// sticker shows the face whose color it has.
pub(crate) fn format_net(cube: &Cube, colored: bool) -> String {
    let pad = " ".repeat(9);
    let mut lines = vec![];
    for row in 0..3 {
        lines.push(format!("{pad}{}", face_row(cube, Face::U, row, colored)));
    }
    for row in 0..3 {
        lines.push(
            MIDDLE_BAND
                .iter()
                .map(|&face| face_row(cube, face, row, colored))
                .join(""),
        );
    }
    for row in 0..3 {
        lines.push(format!("{pad}{}", face_row(cube, Face::D, row, colored)));
    }
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use quarterturn_core::parse_moves;

    use super::*;

    fn compact(net: &str) -> Vec<String> {
        net.lines().map(|line| line.replace(' ', "")).collect()
    }

    #[test]
    fn test_solved_net() {
        let net = format_net(&Cube::new(), false);
        assert_eq!(
            compact(&net),
            vec![
                "UUU",
                "UUU",
                "UUU",
                "LLLFFFRRRBBB",
                "LLLFFFRRRBBB",
                "LLLFFFRRRBBB",
                "DDD",
                "DDD",
                "DDD",
            ],
        );
        assert_eq!(net.lines().next(), Some("          U  U  U "));
    }

    #[test]
    fn test_net_after_u() {
        let mut cube = Cube::new();
        cube.apply_all(parse_moves("U").unwrap());
        let net = format_net(&cube, false);
        assert_eq!(compact(&net)[3], "FFFRRRBBBLLL");
        assert_eq!(compact(&net)[4], "LLLFFFRRRBBB");
    }

    #[test]
    fn test_colored_net_has_escapes() {
        let net = format_net(&Cube::new(), true);
        assert!(net.contains("\x1b["));
        assert_eq!(net.lines().count(), 9);
    }
}
