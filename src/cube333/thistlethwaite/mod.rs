//! Thistlethwaite's algorithm. The cube is solved in four phases, each taking it into a smaller
//! subgroup of the cube group:
//!
//! ```text
//! <R, L, F, B, U, D> > <R, L, F2, B2, U, D> > <R, L, F2, B2, U2, D2> > <R2, L2, F2, B2, U2, D2> > 1
//! ```
//!
//! A phase only looks at a fingerprint of the cube, which is enough to tell whether the cube has
//! made it into the next subgroup. Each phase is bridged with a bidirectional breadth first search
//! from the current state to the solved state over fingerprints, so no tables are generated ahead
//! of time.

mod phases;
mod search;

pub use phases::{
    EdgeOrientation, G1Moves, G2Moves, G3Moves, Phase1, Phase2, Phase2Fingerprint, Phase3,
    Phase3Fingerprint, Phase4,
};
pub use search::bidirectional_search;

use std::fmt::Debug;
use std::hash::Hash;

use log::{debug, info};

use super::moves::{Move333, MoveGenerator};
use super::CubieCube;
use crate::error::SolveError;
use crate::moves::MoveSequence;

/// One step of the reduction: the moves it may use and the fingerprint it has to bring to the
/// fingerprint of the solved cube.
pub trait Phase {
    /// Which phase this is, from 1 to 4.
    const NUMBER: u8;
    /// The moves available during this phase.
    type Moves: MoveGenerator;
    /// The projection of the cube that this phase solves.
    type Fingerprint: Clone + Eq + Hash + Debug;

    /// Compute the fingerprint of a cube.
    fn fingerprint(cube: &CubieCube) -> Self::Fingerprint;
}

/// A cube solver that uses Thistlethwaite's four phase algorithm.
#[derive(Debug, Clone, Default)]
pub struct Solver {
    cancel: bool,
}

impl Solver {
    /// Create a solver which returns the phase solutions joined together as they are.
    pub fn new() -> Self {
        Self::default()
    }

    /// Merge moves across phase boundaries, e.g. a phase ending in `R` followed by a phase
    /// starting with `R` gives `R2`.
    #[must_use]
    pub fn with_cancellation(mut self, cancel: bool) -> Self {
        self.cancel = cancel;
        self
    }

    /// Obtain a solving sequence for the cube (such that applying the sequence solves the cube).
    pub fn solve(&self, cube: &CubieCube) -> Result<MoveSequence<Move333>, SolveError> {
        let sol = self.join(self.solve_phases(cube)?);
        info!("solved in {} moves", sol.len());
        Ok(sol)
    }

    /// Join the solutions of each phase into one sequence.
    pub fn join(&self, phases: [MoveSequence<Move333>; 4]) -> MoveSequence<Move333> {
        let sol: MoveSequence<Move333> = phases.into_iter().flatten().collect();
        if self.cancel {
            sol.cancel()
        } else {
            sol
        }
    }

    /// Solve the cube, keeping the moves of each phase separate. Applying the four sequences in
    /// order solves the cube.
    pub fn solve_phases(
        &self,
        cube: &CubieCube,
    ) -> Result<[MoveSequence<Move333>; 4], SolveError> {
        let mut cube = *cube;
        let phases = [
            solve_phase::<Phase1>(&mut cube)?,
            solve_phase::<Phase2>(&mut cube)?,
            solve_phase::<Phase3>(&mut cube)?,
            solve_phase::<Phase4>(&mut cube)?,
        ];

        check_solved(&cube)?;
        Ok(phases)
    }
}

/// Solve a cube with the default [`Solver`].
pub fn solve(cube: &CubieCube) -> Result<MoveSequence<Move333>, SolveError> {
    Solver::new().solve(cube)
}

// Bring `cube` to the goal of phase `P`, leaving it in the resulting state.
fn solve_phase<P: Phase>(cube: &mut CubieCube) -> Result<MoveSequence<Move333>, SolveError> {
    let sol = bidirectional_search(
        cube,
        &CubieCube::SOLVED,
        P::Moves::MOVE_LIST,
        P::fingerprint,
    )
    .map_err(|e| SolveError::SearchExhausted {
        phase: P::NUMBER,
        visited: e.visited,
    })?;

    debug!("phase {}: {} moves ({})", P::NUMBER, sol.len(), sol);
    *cube = cube.make_moves(&sol);
    Ok(sol)
}

// Reaching every phase goal has to leave the whole cube solved, not just its fingerprints.
fn check_solved(cube: &CubieCube) -> Result<(), SolveError> {
    if *cube == CubieCube::SOLVED {
        Ok(())
    } else {
        Err(SolveError::NotSolved)
    }
}
