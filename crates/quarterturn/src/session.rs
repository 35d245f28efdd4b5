//! Tick-driven main loop.

use eyre::{Result, bail};
use quarterturn_core::{Cube, EngineConfig, Move, MoveQueue, Shuffler, Tick};

use crate::keys::translate_key;
use crate::renderer::HeadlessRenderer;

/// Cube, move queue, and renderer, advanced one frame at a time.
///
/// Time is simulated: each frame advances the clock by a fixed number of
/// milliseconds.
#[derive(Debug)]
pub(crate) struct Session {
    pub cube: Cube,
    pub queue: MoveQueue,
    pub renderer: HeadlessRenderer,
    now: Tick,
    frame_ms: u32,
}
impl Session {
    pub(crate) fn new(
        config: &EngineConfig,
        shuffler: Shuffler,
        max_animations: usize,
        frame_ms: u32,
    ) -> Self {
        Self {
            cube: Cube::new(),
            queue: MoveQueue::with_shuffler(config, shuffler),
            renderer: HeadlessRenderer::new(max_animations, config.turn_times.normal),
            now: 0,
            frame_ms: frame_ms.max(1),
        }
    }

    /// Returns the current tick.
    pub(crate) fn now(&self) -> Tick {
        self.now
    }

    /// Runs one frame. Returns whether a move was applied.
    pub(crate) fn frame(&mut self) -> Result<bool> {
        let moved = self
            .queue
            .update_moves(self.now, &mut self.cube, &mut self.renderer)
            .inspect_err(|e| log::error!("stopping at t={}: {e}", self.now))?;
        self.renderer.draw(self.now);
        self.now = self.now.wrapping_add(self.frame_ms);
        Ok(moved)
    }

    /// Runs frames until no moves are pending.
    pub(crate) fn drain(&mut self) -> Result<()> {
        while !self.queue.is_empty() {
            self.frame()?;
        }
        Ok(())
    }

    /// Queues each move as soon as there is room for it, then plays until
    /// every move has been applied.
    pub(crate) fn play_moves(&mut self, moves: impl IntoIterator<Item = Move>) -> Result<()> {
        if self.queue.max_moves() == 0 {
            bail!("no moves can be queued because queue.max_moves is 0");
        }
        for mv in moves {
            while !self.queue.send_move(mv)? {
                self.frame()?;
            }
        }
        self.drain()
    }

    /// Plays typed text, one keypress per frame. Keypresses that arrive while
    /// the queue is full are dropped.
    ///
    /// Returns the number of dropped moves.
    pub(crate) fn play_keys(&mut self, text: &str) -> Result<usize> {
        let mut dropped = 0;
        for c in text.chars() {
            if let Some(mv) = translate_key(c)
                && !self.queue.send_move(mv)?
            {
                log::info!("dropped {mv}");
                dropped += 1;
            }
            self.frame()?;
        }
        self.drain()?;
        Ok(dropped)
    }

    /// Shuffles the cube and plays the shuffle. Returns the shuffle, or
    /// `None` if moves were already pending.
    pub(crate) fn shuffle(&mut self) -> Result<Option<Vec<Move>>> {
        if !self.queue.shuffle_cube(&mut self.renderer)? {
            return Ok(None);
        }
        let moves = self.queue.iter().copied().collect();
        self.drain()?;
        Ok(Some(moves))
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use quarterturn_core::{TurnTimes, parse_moves};

    use super::*;

    fn session(seed: u64) -> Session {
        Session::new(&EngineConfig::default(), Shuffler::with_seed(seed), 6, 16)
    }

    #[test]
    fn test_play_moves_waits_for_room() {
        let mut s = session(0);
        let commutator = parse_moves("R U R' U'").unwrap();
        s.play_moves(commutator.iter().copied().cycle().take(24)).unwrap();
        assert!(s.queue.is_empty());
        assert_eq!(s.cube, Cube::new());
        assert_eq!(s.renderer.cube_updates(), 24);
        // Only the most recent animations are kept.
        assert_eq!(s.renderer.animations().iter().count(), 6);
    }

    #[test]
    fn test_moves_are_spaced_by_turn_time() {
        let mut s = session(0);
        s.play_moves(parse_moves("F F'").unwrap()).unwrap();
        let starts: Vec<Tick> = s.renderer.animations().iter().map(|a| a.start_time).collect();
        // The second move must wait until strictly after 200 ms. With 16 ms
        // frames, that is the frame at 208 ms.
        assert_eq!(starts, vec![0, 208]);
        assert!(s.now() > 208);
    }

    #[test]
    fn test_play_keys_drops_when_full() {
        let mut s = session(0);
        // Six keypresses in six consecutive frames. The first is applied
        // immediately, the next four fill the queue, and the last is dropped.
        let dropped = s.play_keys("rrrrrr").unwrap();
        assert_eq!(dropped, 1);
        let mut expected = Cube::new();
        expected.apply_all(parse_moves("R R R R R").unwrap());
        assert_eq!(s.cube, expected);
    }

    #[test]
    fn test_play_keys_ignores_unbound_keys() {
        let mut s = session(0);
        assert_eq!(s.play_keys("u ?U").unwrap(), 0);
        assert_eq!(s.cube, Cube::new());
    }

    #[test]
    fn test_shuffle_plays_fast() {
        let mut s = session(5);
        let moves = s.shuffle().unwrap().expect("queue was empty");
        assert_eq!(moves.len(), 20);
        assert_eq!(s.renderer.turn_time(), TurnTimes::default().normal);

        let mut expected = Cube::new();
        expected.apply_all(moves.iter().copied());
        assert_eq!(s.cube, expected);
        // 20 moves at 50 ms each, rounded up to 16 ms frames.
        assert!(s.now() < 20 * 64 + 16);

        let again = session(5).shuffle().unwrap();
        assert_eq!(again, Some(moves));
    }

    #[test]
    fn test_zero_capacity_queue() {
        let config = EngineConfig {
            max_moves: 0,
            ..Default::default()
        };
        let mut s = Session::new(&config, Shuffler::new(), 6, 16);
        assert!(s.play_moves(parse_moves("R").unwrap()).is_err());
    }
}
