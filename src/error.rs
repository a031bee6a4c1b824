//! This module defines general error types used throughout the crate.

use thiserror::Error;

use crate::cube333::{CornerTwist, EdgeFlip};

/// Error type for converting integers to (C like) enums using TryFrom
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum TryFromIntToEnumError {
    /// attempted to convert integer into enum value, but integer was out of bounds
    #[error("attempted to convert integer into enum value, but integer was out of bounds")]
    OutOfBounds,
}

/// Error for building a `CubieCube` out of raw arrays that do not describe a cube reachable by
/// turning faces.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum InvalidCubeError {
    /// One of the values was out of range for its piece or orientation type.
    #[error("a piece or orientation value was out of range")]
    OutOfBounds(#[from] TryFromIntToEnumError),
    /// The edge array did not contain every edge exactly once.
    #[error("edge permutation is not a permutation of the 12 edges")]
    EdgePermutation,
    /// The corner array did not contain every corner exactly once.
    #[error("corner permutation is not a permutation of the 8 corners")]
    CornerPermutation,
    /// The arrays are well formed but the cube cannot be solved, caused by an edge flip, a corner
    /// twist, or permutation parity.
    #[error("the cube is in an unsolvable state")]
    Unsolvable {
        /// The edge flip coset we are in.
        eo: EdgeFlip,
        /// The corner twist coset we are in.
        co: CornerTwist,
        /// Whether we have permutation parity or not.
        perm: bool,
    },
}

/// Error for reading a move or move sequence written in standard notation.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseMoveError {
    /// The token did not name a face turn.
    #[error("`{0}` is not a move")]
    UnknownMove(String),
}

/// A bidirectional search ran out of states without the two frontiers meeting.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("search exhausted {visited} fingerprints without reaching the goal")]
pub struct SearchExhausted {
    /// How many distinct fingerprints were recorded before giving up.
    pub visited: usize,
}

/// Error produced by the phase orchestrator. Both variants indicate a bug in the phase tables
/// rather than a bad input, since every valid cube is solvable.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum SolveError {
    /// A phase search could not reach its goal.
    #[error("phase {phase} search exhausted {visited} fingerprints without reaching the goal")]
    SearchExhausted {
        /// The phase (1 to 4) which failed.
        phase: u8,
        /// How many distinct fingerprints were recorded before giving up.
        visited: usize,
    },
    /// Every phase reached its goal but the final state was not the solved cube.
    #[error("all phases finished but the cube is not solved")]
    NotSolved,
}
