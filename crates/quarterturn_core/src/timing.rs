use crate::{DEFAULT_SHUFFLE_TURN_TIME, DEFAULT_TURN_TIME, Tick};

/// Durations of one move, in ticks (milliseconds).
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct TurnTimes {
    /// Duration of a move requested by the user.
    pub normal: u32,
    /// Duration of a move that is part of a shuffle.
    pub shuffle: u32,
}
impl Default for TurnTimes {
    fn default() -> Self {
        Self {
            normal: DEFAULT_TURN_TIME,
            shuffle: DEFAULT_SHUFFLE_TURN_TIME,
        }
    }
}
impl TurnTimes {
    /// Returns the turn time to use while `shuffle_count` shuffle moves are
    /// still pending.
    pub fn select(&self, shuffle_count: usize) -> u32 {
        if shuffle_count > 0 {
            self.shuffle
        } else {
            self.normal
        }
    }
}

/// Returns whether strictly more than `duration` ticks have passed between
/// `start` and `now`, accounting for the tick counter wrapping around.
pub fn has_elapsed(now: Tick, start: Tick, duration: u32) -> bool {
    now.wrapping_sub(start) > duration
}
