//! The four phases. Each phase names the moves it may use and a fingerprint: the part of the cube
//! state that the phase is responsible for fixing. A phase is finished once the fingerprint of
//! the cube equals the fingerprint of the solved cube.

use super::Phase;
use crate::cube333::moves::{Htm, Move333, Move333Type, MoveGenerator};
use crate::cube333::{odd_permutation, Corner, CornerTwist, CubieCube, Edge, EdgeFlip};
use crate::mv;

/// Orient the edges, using every move.
pub struct Phase1;
/// Orient the corners and bring the M slice edges into the M slice, using `<R, L, F2, B2, U, D>`.
pub struct Phase2;
/// Bring the E slice edges home, the corners into their tetrads and fix parity, using
/// `<R, L, F2, B2, U2, D2>`.
pub struct Phase3;
/// Solve the cube using half turns only.
pub struct Phase4;

/// The moves generating `<R, L, F2, B2, U, D>`, which never change edge orientation.
pub struct G1Moves;

impl MoveGenerator for G1Moves {
    const SIZE: usize = 14;
    const MOVE_LIST: &'static [Move333] = &[
        mv!(R, 1),
        mv!(L, 1),
        mv!(U, 1),
        mv!(D, 1),
        mv!(R, 2),
        mv!(L, 2),
        mv!(F, 2),
        mv!(B, 2),
        mv!(U, 2),
        mv!(D, 2),
        mv!(R, 3),
        mv!(L, 3),
        mv!(U, 3),
        mv!(D, 3),
    ];
}

/// The moves generating `<R, L, F2, B2, U2, D2>`.
pub struct G2Moves;

impl MoveGenerator for G2Moves {
    const SIZE: usize = 10;
    const MOVE_LIST: &'static [Move333] = &[
        mv!(R, 1),
        mv!(L, 1),
        mv!(R, 2),
        mv!(L, 2),
        mv!(F, 2),
        mv!(B, 2),
        mv!(U, 2),
        mv!(D, 2),
        mv!(R, 3),
        mv!(L, 3),
    ];
}

/// The half turns.
pub struct G3Moves;

impl MoveGenerator for G3Moves {
    const SIZE: usize = 6;
    const MOVE_LIST: &'static [Move333] = &[
        mv!(R, 2),
        mv!(L, 2),
        mv!(F, 2),
        mv!(B, 2),
        mv!(U, 2),
        mv!(D, 2),
    ];
}

// Bit i is set iff the piece in position i satisfies `member`.
fn positions<T: Copy, const N: usize>(arr: &[T; N], member: impl Fn(T) -> bool) -> u16 {
    arr.iter()
        .enumerate()
        .filter(|&(_, &p)| member(p))
        .fold(0, |acc, (i, _)| acc | 1 << i)
}

fn corner_positions(cube: &CubieCube, member: impl Fn(Corner) -> bool) -> u8 {
    // there are only 8 corner positions
    positions(&cube.cp, member) as u8
}

/// Flip of the edge in each position, one bit per position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EdgeOrientation(u16);

/// Corner twists, which positions hold a corner from the UFR tetrad, and which positions hold an
/// M slice edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Phase2Fingerprint {
    co: [CornerTwist; 8],
    ufr_tetrad: u8,
    m_slice: u16,
}

/// Which positions hold an E slice edge, where each corner tetrad and each pair of opposite
/// corners within a tetrad lie, and the parity of the corner permutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Phase3Fingerprint {
    e_slice: u16,
    ufr_tetrad: u8,
    ufr_ubl: u8,
    dbr_dfl: u8,
    ubr_tetrad: u8,
    ubr_ufl: u8,
    dfr_dbl: u8,
    odd_corners: bool,
}

impl Phase for Phase1 {
    const NUMBER: u8 = 1;
    type Moves = Htm;
    type Fingerprint = EdgeOrientation;

    fn fingerprint(cube: &CubieCube) -> EdgeOrientation {
        EdgeOrientation(positions(&cube.eo, |o| o == EdgeFlip::Flipped))
    }
}

impl Phase for Phase2 {
    const NUMBER: u8 = 2;
    type Moves = G1Moves;
    type Fingerprint = Phase2Fingerprint;

    fn fingerprint(cube: &CubieCube) -> Phase2Fingerprint {
        Phase2Fingerprint {
            co: cube.co,
            ufr_tetrad: corner_positions(cube, Corner::ufr_tetrad),
            m_slice: positions(&cube.ep, Edge::m_slice),
        }
    }
}

impl Phase for Phase3 {
    const NUMBER: u8 = 3;
    type Moves = G2Moves;
    type Fingerprint = Phase3Fingerprint;

    fn fingerprint(cube: &CubieCube) -> Phase3Fingerprint {
        use Corner as C;
        // Half turns keep UFR with UBL and DBR with DFL, and likewise in the other tetrad, so
        // each of these pairs has to be in its own half of the tetrad. Parity separates the
        // remaining arrangements that half turns can't reach; half turns are even permutations
        // of the corners.
        Phase3Fingerprint {
            e_slice: positions(&cube.ep, Edge::e_slice),
            ufr_tetrad: corner_positions(cube, C::ufr_tetrad),
            ufr_ubl: corner_positions(cube, |c| matches!(c, C::UFR | C::UBL)),
            dbr_dfl: corner_positions(cube, |c| matches!(c, C::DBR | C::DFL)),
            ubr_tetrad: corner_positions(cube, |c| !c.ufr_tetrad()),
            ubr_ufl: corner_positions(cube, |c| matches!(c, C::UBR | C::UFL)),
            dfr_dbl: corner_positions(cube, |c| matches!(c, C::DFR | C::DBL)),
            odd_corners: odd_permutation(&cube.cp),
        }
    }
}

impl Phase for Phase4 {
    const NUMBER: u8 = 4;
    type Moves = G3Moves;
    type Fingerprint = CubieCube;

    fn fingerprint(cube: &CubieCube) -> CubieCube {
        *cube
    }
}
