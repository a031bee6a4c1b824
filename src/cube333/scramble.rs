//! Random move scrambles.

use super::moves::{Htm, Move333, MoveGenerator};
use crate::moves::MoveSequence;

/// Pick `length` moves uniformly from all 18 face turns. Consecutive moves are not filtered, so
/// the scramble may cancel itself partially.
pub fn scramble(length: usize, rng: &mut fastrand::Rng) -> MoveSequence<Move333> {
    (0..length)
        .map(|_| Htm::MOVE_LIST[rng.usize(..Htm::SIZE)])
        .collect()
}
