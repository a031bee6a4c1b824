//! Types and functions for the 3x3x3 Rubik's cube, represented as the permutation and orientation
//! of its cubies.

pub mod moves;
pub mod scramble;
pub mod thistlethwaite;

use crate::error::{InvalidCubeError, TryFromIntToEnumError};

/// An edge piece, named after its home position. Positions use the same names, so `ep[Edge::UR
/// as usize]` is the edge currently sitting in the UR slot.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[allow(missing_docs)]
pub enum Edge {
    #[default]
    UF,
    UR,
    UB,
    UL,
    FR,
    FL,
    BR,
    BL,
    DF,
    DR,
    DB,
    DL,
}

impl Edge {
    /// Every edge, in index order.
    pub const ARRAY: [Edge; 12] = [
        Edge::UF,
        Edge::UR,
        Edge::UB,
        Edge::UL,
        Edge::FR,
        Edge::FL,
        Edge::BR,
        Edge::BL,
        Edge::DF,
        Edge::DR,
        Edge::DB,
        Edge::DL,
    ];

    /// Whether this edge lives in the slice between the L and R faces.
    pub fn m_slice(self) -> bool {
        matches!(self, Edge::UF | Edge::UB | Edge::DF | Edge::DB)
    }

    /// Whether this edge lives in the slice between the U and D faces.
    pub fn e_slice(self) -> bool {
        matches!(self, Edge::FR | Edge::FL | Edge::BR | Edge::BL)
    }
}

/// A corner piece, named after its home position.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[allow(missing_docs)]
pub enum Corner {
    #[default]
    UFR,
    UBR,
    UBL,
    UFL,
    DFR,
    DBR,
    DBL,
    DFL,
}

impl Corner {
    /// Every corner, in index order.
    pub const ARRAY: [Corner; 8] = [
        Corner::UFR,
        Corner::UBR,
        Corner::UBL,
        Corner::UFL,
        Corner::DFR,
        Corner::DBR,
        Corner::DBL,
        Corner::DFL,
    ];

    /// Whether this corner belongs to the tetrad containing UFR, i.e. the four corners UFR can
    /// reach using half turns only.
    pub fn ufr_tetrad(self) -> bool {
        matches!(self, Corner::UFR | Corner::UBL | Corner::DBR | Corner::DFL)
    }
}

/// The twist of a corner relative to its reference facet.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[allow(missing_docs)]
pub enum CornerTwist {
    #[default]
    Oriented = 0,
    Clockwise = 1,
    AntiClockwise = 2,
}

impl CornerTwist {
    /// Add two twists together.
    pub fn twist_by(self, other: CornerTwist) -> Self {
        match (self as u8 + other as u8) % 3 {
            0 => CornerTwist::Oriented,
            1 => CornerTwist::Clockwise,
            _ => CornerTwist::AntiClockwise,
        }
    }
}

/// The flip of an edge. An edge is oriented if it can be brought home using only R, L, U and D
/// turns.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[allow(missing_docs)]
pub enum EdgeFlip {
    #[default]
    Oriented = 0,
    Flipped = 1,
}

impl EdgeFlip {
    /// Flip the edge.
    pub fn flip(self) -> Self {
        match self {
            EdgeFlip::Oriented => EdgeFlip::Flipped,
            EdgeFlip::Flipped => EdgeFlip::Oriented,
        }
    }

    /// Add two flips together.
    pub fn flip_by(self, other: EdgeFlip) -> Self {
        match other {
            EdgeFlip::Oriented => self,
            EdgeFlip::Flipped => self.flip(),
        }
    }
}

macro_rules! int_enum_conversions {
    ($ty:ty, $array:expr) => {
        impl From<$ty> for u8 {
            fn from(value: $ty) -> u8 {
                value as u8
            }
        }

        impl TryFrom<u8> for $ty {
            type Error = TryFromIntToEnumError;

            fn try_from(value: u8) -> Result<Self, Self::Error> {
                $array
                    .get(value as usize)
                    .copied()
                    .ok_or(TryFromIntToEnumError::OutOfBounds)
            }
        }
    };
}

int_enum_conversions!(Edge, Edge::ARRAY);
int_enum_conversions!(Corner, Corner::ARRAY);
int_enum_conversions!(
    CornerTwist,
    [
        CornerTwist::Oriented,
        CornerTwist::Clockwise,
        CornerTwist::AntiClockwise
    ]
);
int_enum_conversions!(EdgeFlip, [EdgeFlip::Oriented, EdgeFlip::Flipped]);

/// A cube state stored as four arrays indexed by position: which piece sits in each slot, and the
/// orientation of whatever piece sits there.
///
/// Every value of this type is a state reachable from the solved cube. The only ways to obtain one
/// are `CubieCube::SOLVED`, `CubieCube::from_arrays` (which checks) and applying moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CubieCube {
    pub(crate) ep: [Edge; 12],
    pub(crate) cp: [Corner; 8],
    pub(crate) eo: [EdgeFlip; 12],
    pub(crate) co: [CornerTwist; 8],
}

impl Default for CubieCube {
    fn default() -> Self {
        Self::SOLVED
    }
}

impl CubieCube {
    /// The solved cube.
    pub const SOLVED: CubieCube = CubieCube {
        ep: Edge::ARRAY,
        cp: Corner::ARRAY,
        eo: [EdgeFlip::Oriented; 12],
        co: [CornerTwist::Oriented; 8],
    };

    /// Build a cube from raw piece and orientation indices. `ep[i]` is the edge in position `i`
    /// and `eo[i]` its flip, and likewise for corners.
    pub fn from_arrays(
        ep: [u8; 12],
        cp: [u8; 8],
        eo: [u8; 12],
        co: [u8; 8],
    ) -> Result<CubieCube, InvalidCubeError> {
        let cube = CubieCube {
            ep: convert_array(ep)?,
            cp: convert_array(cp)?,
            eo: convert_array(eo)?,
            co: convert_array(co)?,
        };

        if !is_permutation(&cube.ep.map(u8::from)) {
            return Err(InvalidCubeError::EdgePermutation);
        }
        if !is_permutation(&cube.cp.map(u8::from)) {
            return Err(InvalidCubeError::CornerPermutation);
        }
        if cube.illegal() {
            return Err(InvalidCubeError::Unsolvable {
                eo: cube.eo_parity(),
                co: cube.co_parity(),
                perm: cube.perm_parity(),
            });
        }

        Ok(cube)
    }

    /// The edge in each position.
    pub fn ep(&self) -> &[Edge; 12] {
        &self.ep
    }

    /// The corner in each position.
    pub fn cp(&self) -> &[Corner; 8] {
        &self.cp
    }

    /// The flip of the edge in each position.
    pub fn eo(&self) -> &[EdgeFlip; 12] {
        &self.eo
    }

    /// The twist of the corner in each position.
    pub fn co(&self) -> &[CornerTwist; 8] {
        &self.co
    }

    /// Sum of all edge flips. Non-zero means a single edge is flipped.
    pub fn eo_parity(&self) -> EdgeFlip {
        self.eo
            .iter()
            .fold(EdgeFlip::Oriented, |acc, &o| acc.flip_by(o))
    }

    /// Sum of all corner twists. Non-zero means a single corner is twisted.
    pub fn co_parity(&self) -> CornerTwist {
        self.co
            .iter()
            .fold(CornerTwist::Oriented, |acc, &o| acc.twist_by(o))
    }

    /// Whether the edge and corner permutation parities differ, i.e. a lone swap of two pieces.
    pub fn perm_parity(&self) -> bool {
        odd_permutation(&self.ep) != odd_permutation(&self.cp)
    }

    /// Whether this state is unreachable by turning faces.
    pub fn illegal(&self) -> bool {
        self.eo_parity() != EdgeFlip::Oriented
            || self.co_parity() != CornerTwist::Oriented
            || self.perm_parity()
    }
}

fn convert_array<T, const N: usize>(arr: [u8; N]) -> Result<[T; N], TryFromIntToEnumError>
where
    T: TryFrom<u8, Error = TryFromIntToEnumError> + Default + Copy,
{
    let mut out = [T::default(); N];
    for (o, n) in out.iter_mut().zip(arr) {
        *o = T::try_from(n)?;
    }
    Ok(out)
}

fn is_permutation<const N: usize>(arr: &[u8; N]) -> bool {
    let mut seen = [false; N];
    for &n in arr {
        match seen.get_mut(n as usize) {
            Some(s) if !*s => *s = true,
            _ => return false,
        }
    }
    true
}

/// Whether the permutation has an odd number of inversions.
pub(crate) fn odd_permutation<T: Ord>(arr: &[T]) -> bool {
    let inversions = (0..arr.len())
        .flat_map(|i| (i + 1..arr.len()).map(move |j| (i, j)))
        .filter(|&(i, j)| arr[i] > arr[j])
        .count();
    inversions % 2 == 1
}
