//! Random shuffle generation.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha12Rng;
use strum::IntoEnumIterator;

use crate::{Direction, Face, Move, MoveFace};

/// Generator of random shuffles.
///
/// The random number generator is seeded the first time a shuffle is
/// generated.
#[derive(Debug, Default, Clone)]
pub struct Shuffler {
    seed: Option<u64>,
    rng: Option<ChaCha12Rng>,
}
impl Shuffler {
    /// Constructs a shuffler seeded from the OS on first use.
    pub fn new() -> Self {
        Self::default()
    }
    /// Constructs a shuffler that always produces the same sequence of
    /// shuffles.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            seed: Some(seed),
            rng: None,
        }
    }

    fn rng(&mut self) -> &mut ChaCha12Rng {
        let seed = self.seed;
        self.rng.get_or_insert_with(|| {
            let seed = seed.unwrap_or_else(|| rand::rng().random());
            log::debug!("seeding shuffle generator with {seed}");
            ChaCha12Rng::seed_from_u64(seed)
        })
    }

    /// Generates `len` random outer-face moves.
    ///
    /// No move turns the same face as the one before it, nor the face
    /// opposite the one two moves before it.
    pub fn generate(&mut self, len: usize) -> Vec<Move> {
        let faces: Vec<Face> = Face::iter().collect();
        let directions: Vec<Direction> = Direction::iter().collect();
        let rng = self.rng();

        let mut ret: Vec<Move> = Vec::with_capacity(len);
        let mut history: Vec<Face> = Vec::with_capacity(len);
        while ret.len() < len {
            let face = faces[rng.random_range(0..faces.len())];
            let direction = directions[rng.random_range(0..directions.len())];
            if !can_follow(&history, face) {
                continue;
            }
            history.push(face);
            ret.push(Move::new(MoveFace::from(face), direction));
        }
        ret
    }
}

/// Returns whether a shuffle move on `face` may come after the moves on
/// `previous`.
pub fn can_follow(previous: &[Face], face: Face) -> bool {
    let last = previous.last().copied();
    let second_last = previous.len().checked_sub(2).map(|i| previous[i]);
    last != Some(face) && second_last.map(Face::opposite) != Some(face)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn faces_of(moves: &[Move]) -> Vec<Face> {
        moves
            .iter()
            .map(|mv| mv.face.outer_face().expect("shuffle move is not an outer face"))
            .collect()
    }

    #[test]
    fn test_shuffle_constraints() {
        for seed in 0..50 {
            let moves = Shuffler::with_seed(seed).generate(crate::SHUFFLE_LENGTH);
            assert_eq!(moves.len(), 20);
            let faces = faces_of(&moves);
            for i in 1..faces.len() {
                assert_ne!(faces[i], faces[i - 1], "seed {seed}, move {i}");
                if i >= 2 {
                    assert_ne!(faces[i], faces[i - 2].opposite(), "seed {seed}, move {i}");
                }
            }
        }
    }

    #[test]
    fn test_seeded_shuffle_is_deterministic() {
        let a = Shuffler::with_seed(42).generate(20);
        let b = Shuffler::with_seed(42).generate(20);
        assert_eq!(a, b);

        let mut shuffler = Shuffler::with_seed(42);
        let first = shuffler.generate(20);
        let second = shuffler.generate(20);
        assert_eq!(first, a);
        assert_ne!(first, second);
    }

    #[test]
    fn test_unseeded_shuffle() {
        let moves = Shuffler::new().generate(5);
        assert_eq!(moves.len(), 5);
        assert!(Shuffler::new().generate(0).is_empty());
    }

    #[test]
    fn test_can_follow() {
        use Face::*;

        assert!(can_follow(&[], U));
        assert!(!can_follow(&[U], U));
        assert!(can_follow(&[U], D));
        assert!(!can_follow(&[U, R], D));
        assert!(can_follow(&[U, R], U));
        assert!(can_follow(&[U, R], F));
    }
}
