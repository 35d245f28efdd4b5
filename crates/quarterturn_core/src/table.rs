//! Static permutation tables for the nine rotation axes.

use strum::EnumIter;

use crate::{AnimationAxis, Face, FaceletPos};

/// Layer that can be given a primitive quarter turn.
///
/// Every move decomposes into quarter turns of these axes.
#[derive(EnumIter, Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum RotationAxis {
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
    /// Middle slice, turning like L.
    M,
    /// Equatorial slice, turning like D.
    E,
    /// Standing slice, turning like F.
    S,
}
impl RotationAxis {
    /// Returns the face whose own stickers turn with this axis, or `None` for
    /// slices.
    pub const fn face(self) -> Option<Face> {
        match self {
            Self::U => Some(Face::U),
            Self::R => Some(Face::R),
            Self::F => Some(Face::F),
            Self::D => Some(Face::D),
            Self::L => Some(Face::L),
            Self::B => Some(Face::B),
            Self::M | Self::E | Self::S => None,
        }
    }

    /// Returns the 4 groups of facelets that cycle under one clockwise quarter
    /// turn, in order. Each group moves into the slot of the next one.
    pub fn ring(self) -> &'static [RingGroup; 4] {
        &RINGS[self as usize]
    }

    /// Returns the 12 facelet locations of the ring, flattened.
    pub fn ring_locations(self) -> [(Face, FaceletPos); 12] {
        let ring = self.ring();
        std::array::from_fn(|i| {
            let group = &ring[i / 3];
            (group.face, group.positions[i % 3])
        })
    }

    /// Returns the visual axis used to animate this rotation, and whether its
    /// direction must be reversed to match that axis.
    pub const fn animation_axis(self) -> (AnimationAxis, bool) {
        match self {
            Self::U => (AnimationAxis::Y, true),
            Self::R => (AnimationAxis::X, false),
            Self::F | Self::S => (AnimationAxis::Z, false),
            Self::D | Self::E => (AnimationAxis::Y, false),
            Self::L | Self::M => (AnimationAxis::X, true),
            Self::B => (AnimationAxis::Z, true),
        }
    }
}

/// Three facelets on one face that move together in a ring.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct RingGroup {
    /// Face the facelets are on.
    pub face: Face,
    /// Facelets, ordered so that the `i`th facelet of one group moves to the
    /// `i`th facelet of the next.
    pub positions: [FaceletPos; 3],
}

const fn group(face: Face, positions: [FaceletPos; 3]) -> RingGroup {
    RingGroup { face, positions }
}

/// Rings indexed by [`RotationAxis`].
static RINGS: [[RingGroup; 4]; 9] = {
    use Face::*;
    use FaceletPos::*;

    const TOP_ROW: [FaceletPos; 3] = [TopLeft, TopCenter, TopRight];
    const MIDDLE_ROW: [FaceletPos; 3] = [MiddleLeft, MiddleCenter, MiddleRight];
    const BOTTOM_ROW: [FaceletPos; 3] = [BottomLeft, BottomCenter, BottomRight];
    const LEFT_COL: [FaceletPos; 3] = [TopLeft, MiddleLeft, BottomLeft];
    const CENTER_COL: [FaceletPos; 3] = [TopCenter, MiddleCenter, BottomCenter];
    const RIGHT_COL: [FaceletPos; 3] = [TopRight, MiddleRight, BottomRight];

    [
        // U
        [
            group(F, TOP_ROW),
            group(L, TOP_ROW),
            group(B, TOP_ROW),
            group(R, TOP_ROW),
        ],
        // R
        [
            group(F, RIGHT_COL),
            group(U, RIGHT_COL),
            group(B, [BottomLeft, MiddleLeft, TopLeft]),
            group(D, RIGHT_COL),
        ],
        // F
        [
            group(U, BOTTOM_ROW),
            group(R, LEFT_COL),
            group(D, [TopRight, TopCenter, TopLeft]),
            group(L, [BottomRight, MiddleRight, TopRight]),
        ],
        // D
        [
            group(F, BOTTOM_ROW),
            group(R, BOTTOM_ROW),
            group(B, BOTTOM_ROW),
            group(L, BOTTOM_ROW),
        ],
        // L
        [
            group(F, LEFT_COL),
            group(D, LEFT_COL),
            group(B, [BottomRight, MiddleRight, TopRight]),
            group(U, LEFT_COL),
        ],
        // B
        [
            group(U, TOP_ROW),
            group(L, [BottomLeft, MiddleLeft, TopLeft]),
            group(D, [BottomRight, BottomCenter, BottomLeft]),
            group(R, RIGHT_COL),
        ],
        // M
        [
            group(F, CENTER_COL),
            group(D, CENTER_COL),
            group(B, [BottomCenter, MiddleCenter, TopCenter]),
            group(U, CENTER_COL),
        ],
        // E
        [
            group(F, MIDDLE_ROW),
            group(R, MIDDLE_ROW),
            group(B, MIDDLE_ROW),
            group(L, MIDDLE_ROW),
        ],
        // S
        [
            group(U, MIDDLE_ROW),
            group(R, CENTER_COL),
            group(D, [MiddleRight, MiddleCenter, MiddleLeft]),
            group(L, [BottomCenter, MiddleCenter, TopCenter]),
        ],
    ]
};

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use strum::IntoEnumIterator;

    use super::*;

    #[test]
    fn test_rings_are_disjoint_and_avoid_own_face() {
        for axis in RotationAxis::iter() {
            let locations = axis.ring_locations();
            let unique: HashSet<_> = locations.iter().collect();
            assert_eq!(unique.len(), 12, "{axis:?} ring has duplicates");

            for group in axis.ring() {
                if let Some(face) = axis.face() {
                    assert_ne!(group.face, face, "{axis:?} ring touches its own face");
                    assert_ne!(group.face, face.opposite(), "{axis:?} ring touches far face");
                }
            }
        }
    }

    #[test]
    fn test_slice_rings_include_centers() {
        for axis in [RotationAxis::M, RotationAxis::E, RotationAxis::S] {
            let centers = axis
                .ring_locations()
                .into_iter()
                .filter(|&(_, pos)| pos == FaceletPos::CENTER)
                .count();
            assert_eq!(centers, 4, "{axis:?}");
        }
        for axis in RotationAxis::iter().filter(|axis| axis.face().is_some()) {
            assert!(
                axis.ring_locations()
                    .into_iter()
                    .all(|(_, pos)| pos != FaceletPos::CENTER),
            );
        }
    }
}
