//! Queue of pending moves, played back one at a time.

use std::collections::VecDeque;

use crate::{
    Cube, EngineConfig, Move, MoveQueueError, Renderer, Shuffler, Tick, TurnTimes, has_elapsed,
    make_move,
};

/// Queue of moves waiting to be applied to the cube.
///
/// Moves requested by the user go through [`MoveQueue::send_move()`], which
/// drops moves once [`EngineConfig::max_moves`] are pending. Shuffles bypass
/// that limit and play back faster.
#[derive(Debug, Clone)]
pub struct MoveQueue {
    /// Pending moves, oldest first.
    pending: VecDeque<Move>,
    /// Maximum number of pending moves accepted by `send_move()`.
    max_moves: usize,
    /// Number of moves in each shuffle.
    shuffle_length: usize,

    /// Number of pending moves that came from a shuffle.
    shuffle_count: usize,
    /// Value of `shuffle_count` before the last move was applied.
    last_shuffle_count: usize,

    /// Start tick and duration of the move that is playing, or `None` if a
    /// move may be applied immediately.
    playing: Option<(Tick, u32)>,
    turn_times: TurnTimes,
    /// Duration of each move at the current speed.
    current_turn_time: u32,

    shuffler: Shuffler,
}
impl Default for MoveQueue {
    fn default() -> Self {
        Self::new(&EngineConfig::default())
    }
}
impl MoveQueue {
    /// Constructs an empty queue.
    pub fn new(config: &EngineConfig) -> Self {
        Self::with_shuffler(config, Shuffler::new())
    }
    /// Constructs an empty queue that shuffles using `shuffler`.
    pub fn with_shuffler(config: &EngineConfig, shuffler: Shuffler) -> Self {
        Self {
            pending: VecDeque::new(),
            max_moves: config.max_moves,
            shuffle_length: config.shuffle_length,

            shuffle_count: 0,
            last_shuffle_count: 0,

            playing: None,
            turn_times: config.turn_times,
            current_turn_time: config.turn_times.normal,

            shuffler,
        }
    }

    /// Returns the number of pending moves.
    pub fn len(&self) -> usize {
        self.pending.len()
    }
    /// Returns whether there are no pending moves.
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
    /// Returns the pending moves, oldest first.
    pub fn iter(&self) -> impl '_ + Iterator<Item = &Move> {
        self.pending.iter()
    }
    /// Returns the maximum number of pending moves accepted by
    /// [`Self::send_move()`].
    pub fn max_moves(&self) -> usize {
        self.max_moves
    }
    /// Returns the number of pending moves that came from a shuffle.
    pub fn shuffle_count(&self) -> usize {
        self.shuffle_count
    }
    /// Returns the duration of each move at the current speed.
    pub fn current_turn_time(&self) -> u32 {
        self.current_turn_time
    }

    fn push(&mut self, mv: Move) -> Result<(), MoveQueueError> {
        self.pending.try_reserve(1)?;
        self.pending.push_back(mv);
        Ok(())
    }

    /// Adds a move to the back of the queue, unless the queue is full.
    ///
    /// Returns whether the move was added. A move that is not added is
    /// dropped.
    pub fn send_move(&mut self, mv: Move) -> Result<bool, MoveQueueError> {
        if self.pending.len() >= self.max_moves {
            log::trace!("dropping move {mv}; {} moves already queued", self.len());
            return Ok(false);
        }
        self.push(mv)?;
        Ok(true)
    }

    /// Adds a move to the back of the queue, even if it is full.
    pub fn send_move_unlimited(&mut self, mv: Move) -> Result<(), MoveQueueError> {
        self.push(mv)
    }

    /// Applies the next move if enough time has passed since the previous one.
    ///
    /// At most one move is applied per call. Returns whether a move was
    /// applied.
    pub fn update_moves(
        &mut self,
        now: Tick,
        cube: &mut Cube,
        renderer: &mut impl Renderer,
    ) -> Result<bool, MoveQueueError> {
        if let Some((start, duration)) = self.playing {
            if !has_elapsed(now, start, duration) {
                return Ok(false);
            }
            self.playing = None;
        }
        let Some(mv) = self.pending.pop_front() else {
            return Ok(false);
        };

        self.playing = Some((now, self.current_turn_time));

        let mut animation = make_move(cube, mv);
        animation.start_time = now;
        renderer.update_cube(cube).map_err(MoveQueueError::Render)?;
        renderer
            .send_animation(animation)
            .map_err(MoveQueueError::Render)?;

        self.last_shuffle_count = self.shuffle_count;
        self.shuffle_count = self.shuffle_count.saturating_sub(1);
        if self.last_shuffle_count > 0 && self.shuffle_count == 0 {
            log::debug!("shuffle finished");
            self.update_turn_time(renderer);
        }

        Ok(true)
    }

    /// Queues a random shuffle, unless there are already moves pending.
    ///
    /// Returns whether a shuffle was queued.
    pub fn shuffle_cube(&mut self, renderer: &mut impl Renderer) -> Result<bool, MoveQueueError> {
        if !self.pending.is_empty() {
            log::trace!("ignoring shuffle; {} moves already queued", self.len());
            return Ok(false);
        }

        let moves = self.shuffler.generate(self.shuffle_length);
        log::debug!("shuffling with {}", crate::format_moves(&moves));
        for mv in moves {
            self.send_move_unlimited(mv)?;
        }
        self.shuffle_count = self.shuffle_length;
        self.update_turn_time(renderer);
        Ok(true)
    }

    /// Recomputes the turn time and tells the renderer about it.
    fn update_turn_time(&mut self, renderer: &mut impl Renderer) {
        self.current_turn_time = self.turn_times.select(self.shuffle_count);
        log::debug!("turn time is now {}", self.current_turn_time);
        renderer.update_turn_time(self.current_turn_time);
    }

    /// Removes all pending moves.
    pub fn clear(&mut self) {
        self.pending.clear();
        self.shuffle_count = 0;
        self.last_shuffle_count = 0;
        self.current_turn_time = self.turn_times.normal;
    }
}
