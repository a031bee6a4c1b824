//! Moves of the 3x3x3 and their effect on a `CubieCube`.

use super::{CornerTwist, CubieCube};
use crate::error::{ParseMoveError, TryFromIntToEnumError};
use crate::moves::{Cancellation, MoveSequence};

#[cfg(test)]
use proptest_derive::Arbitrary;

/// Represents each type of move. Note that the `Move` struct uses this variable along with a
/// counter to represents move such as R2 or U'.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(test, derive(Arbitrary))]
pub enum Move333Type {
    /// Right
    R,
    /// Left
    L,
    /// Front
    F,
    /// Back
    B,
    /// Up
    U,
    /// Down
    D,
}

impl Move333Type {
    /// Every face, in move code order.
    pub const ARRAY: [Move333Type; 6] = [
        Move333Type::R,
        Move333Type::L,
        Move333Type::F,
        Move333Type::B,
        Move333Type::U,
        Move333Type::D,
    ];

    /// The move type on the face opposite to the given one.
    pub fn opposite(self) -> Move333Type {
        match self {
            Move333Type::R => Move333Type::L,
            Move333Type::L => Move333Type::R,
            Move333Type::U => Move333Type::D,
            Move333Type::D => Move333Type::U,
            Move333Type::F => Move333Type::B,
            Move333Type::B => Move333Type::F,
        }
    }
}

/// A face turn: the face, and how many clockwise quarter turns to make of it. The count is
/// always 1, 2 or 3, so an anti-clockwise move has a count of 3.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(test, derive(Arbitrary))]
pub struct Move333 {
    ty: Move333Type,
    #[cfg_attr(test, proptest(strategy = "1..=3u8"))]
    count: u8,
}

impl Move333 {
    /// Turn `ty` clockwise `count` quarter turns. Counts other than 1, 2 and 3 are rejected.
    pub const fn new(ty: Move333Type, count: u8) -> Result<Move333, TryFromIntToEnumError> {
        if matches!(count, 1..=3) {
            Ok(Move333 { ty, count })
        } else {
            Err(TryFromIntToEnumError::OutOfBounds)
        }
    }

    /// The face being turned.
    pub fn ty(self) -> Move333Type {
        self.ty
    }

    /// The number of clockwise quarter turns, from 1 to 3.
    pub fn count(self) -> u8 {
        self.count
    }
}

impl crate::moves::Move for Move333 {
    fn inverse(self) -> Self {
        Self {
            ty: self.ty,
            count: 4 - self.count,
        }
    }

    fn commutes_with(&self, b: &Self) -> bool {
        self.ty == b.ty || self.ty.opposite() == b.ty
    }

    fn cancel(self, b: Self) -> Cancellation<Self> {
        if self.ty == b.ty {
            let count = (self.count + b.count) % 4;
            if count == 0 {
                Cancellation::NoMove
            } else {
                Cancellation::OneMove(Move333 { ty: self.ty, count })
            }
        } else {
            Cancellation::TwoMove(self, b)
        }
    }
}

// I don't want to have the default derive debug for this!
impl std::fmt::Debug for Move333 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.count {
            1 => write!(f, "{:?}", self.ty),
            3 => write!(f, "{:?}'", self.ty),
            _ => write!(f, "{:?}{}", self.ty, self.count),
        }
    }
}

impl std::fmt::Display for Move333 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Debug::fmt(self, f)
    }
}

impl std::str::FromStr for Move333 {
    type Err = ParseMoveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let unknown = || ParseMoveError::UnknownMove(s.to_owned());
        let mut chars = s.chars();
        let ty = match chars.next() {
            Some('R') => Move333Type::R,
            Some('L') => Move333Type::L,
            Some('F') => Move333Type::F,
            Some('B') => Move333Type::B,
            Some('U') => Move333Type::U,
            Some('D') => Move333Type::D,
            _ => return Err(unknown()),
        };
        let count = match chars.as_str() {
            "" | "1" => 1,
            "2" | "2'" => 2,
            "'" | "3" => 3,
            _ => return Err(unknown()),
        };
        Ok(Move333 { ty, count })
    }
}

/// A trait to classify a type as a move generator. A move generator is a set which can be used to
/// generate a set, i.e. find every combination of moves using moves in the move generator to find
/// unique states.
pub trait MoveGenerator {
    /// The amount of moves that are available in the moveset.
    const SIZE: usize;
    /// A list of all valid moves.
    const MOVE_LIST: &'static [Move333];
}

/// The move code of a move: `face + 6 * (count - 1)` with faces ordered R, L, F, B, U, D. Codes
/// 0 to 5 are quarter turns, 6 to 11 half turns, and 12 to 17 reverse quarter turns.
impl From<Move333> for usize {
    fn from(mv: Move333) -> usize {
        (mv.count as usize - 1) * 6 + mv.ty as usize
    }
}

impl From<Move333> for u8 {
    fn from(mv: Move333) -> u8 {
        (mv.count - 1) * 6 + mv.ty as u8
    }
}

impl TryFrom<usize> for Move333 {
    type Error = TryFromIntToEnumError;

    fn try_from(code: usize) -> Result<Self, Self::Error> {
        Htm::MOVE_LIST
            .get(code)
            .copied()
            .ok_or(TryFromIntToEnumError::OutOfBounds)
    }
}

impl TryFrom<u8> for Move333 {
    type Error = TryFromIntToEnumError;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        Move333::try_from(code as usize)
    }
}

/// Create a move by specifying a move type and move count. Note that you do not need to specify
/// for example Move333Type::R, you only need to specify R. The count is checked at compile time.
#[macro_export]
macro_rules! mv {
    ($ty:ident, $count: expr) => {
        const {
            match Move333::new(Move333Type::$ty, $count) {
                Ok(m) => m,
                Err(_) => panic!("a move turns a face 1, 2 or 3 quarter turns"),
            }
        }
    };
}

/// Type for Half Turn Metric
pub struct Htm;

impl MoveGenerator for Htm {
    const SIZE: usize = 18;
    const MOVE_LIST: &'static [Move333] = &[
        mv!(R, 1),
        mv!(L, 1),
        mv!(F, 1),
        mv!(B, 1),
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
        mv!(F, 3),
        mv!(B, 3),
        mv!(U, 3),
        mv!(D, 3),
    ];
}

impl From<Move333Type> for usize {
    fn from(mv: Move333Type) -> Self {
        mv as usize
    }
}

// Each quarter turn carries the piece at cycle slot k to slot k + 1.
const EDGE_CYCLES: [[usize; 4]; 6] = [
    [1, 6, 9, 4],
    [3, 5, 11, 7],
    [0, 4, 8, 5],
    [2, 7, 10, 6],
    [0, 3, 2, 1],
    [8, 9, 10, 11],
];
const CORNER_CYCLES: [[usize; 4]; 6] = [
    [0, 1, 5, 4],
    [2, 3, 7, 6],
    [3, 0, 4, 7],
    [1, 2, 6, 5],
    [0, 3, 2, 1],
    [4, 5, 6, 7],
];
// Twist added to a corner leaving an even or odd cycle slot, on faces that twist corners.
const CYCLE_TWISTS: [CornerTwist; 2] = [CornerTwist::AntiClockwise, CornerTwist::Clockwise];

impl CubieCube {
    /// Apply an algorithm to a cube
    pub fn make_moves(self, mvs: &MoveSequence<Move333>) -> CubieCube {
        mvs.0.iter().fold(self, |c, &m| c.make_move(m))
    }

    /// Apply a move to a cube.
    pub fn make_move(self, mv: Move333) -> CubieCube {
        (0..mv.count).fold(self, |c, _| c.make_move_type(mv.ty))
    }

    /// Apply a move given by its move code (0 to 17), rejecting codes that don't name a move.
    pub fn apply_move_code(self, code: u8) -> Result<CubieCube, TryFromIntToEnumError> {
        Ok(self.make_move(Move333::try_from(code)?))
    }

    /// Make a single clockwise quarter turn of a face.
    pub fn make_move_type(self, mv: Move333Type) -> CubieCube {
        let edges = EDGE_CYCLES[usize::from(mv)];
        let corners = CORNER_CYCLES[usize::from(mv)];
        // Edge orientation is relative to <R, L, U, D>, so only F and B flip edges
        let flips = matches!(mv, Move333Type::F | Move333Type::B);
        let twists = !matches!(mv, Move333Type::U | Move333Type::D);

        let mut next = self;

        for k in 0..4 {
            let (from, to) = (edges[k], edges[(k + 1) % 4]);
            next.ep[to] = self.ep[from];
            next.eo[to] = if flips {
                self.eo[from].flip()
            } else {
                self.eo[from]
            };
        }

        for k in 0..4 {
            let (from, to) = (corners[k], corners[(k + 1) % 4]);
            next.cp[to] = self.cp[from];
            next.co[to] = if twists {
                self.co[from].twist_by(CYCLE_TWISTS[k % 2])
            } else {
                self.co[from]
            };
        }

        next
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::moves::Move;

    fn from_raw(ep: [u8; 12], cp: [u8; 8], eo: [u8; 12], co: [u8; 8]) -> CubieCube {
        CubieCube::from_arrays(ep, cp, eo, co).unwrap()
    }

    #[test]
    fn face_loop() {
        for ty in Move333Type::ARRAY {
            let mut cube = CubieCube::SOLVED;
            for _ in 0..4 {
                cube = cube.make_move(Move333::new(ty, 1).unwrap());
            }
            assert_eq!(cube, CubieCube::SOLVED);
        }
    }

    #[test]
    fn move_codes() {
        for code in 0..18u8 {
            let m = Move333::try_from(code).unwrap();
            assert_eq!(u8::from(m), code);
            assert_eq!(usize::from(m), code as usize);
        }
        assert_eq!(Move333::try_from(18u8), Err(TryFromIntToEnumError::OutOfBounds));
        assert_eq!(Move333::try_from(255u8), Err(TryFromIntToEnumError::OutOfBounds));
        assert_eq!(
            CubieCube::SOLVED.apply_move_code(18),
            Err(TryFromIntToEnumError::OutOfBounds)
        );
        assert_eq!(Move333::try_from(3u8), Ok(mv!(B, 1)));
        assert_eq!(Move333::try_from(15u8), Ok(mv!(B, 3)));
    }

    #[test]
    fn move_counts() {
        for ty in Move333Type::ARRAY {
            for count in [0, 4, 5, u8::MAX] {
                assert_eq!(Move333::new(ty, count), Err(TryFromIntToEnumError::OutOfBounds));
            }
        }
        assert_eq!(Move333::new(Move333Type::R, 3), Ok(mv!(R, 3)));
        let m = Move333::new(Move333Type::F, 2).unwrap();
        assert_eq!((m.ty(), m.count()), (Move333Type::F, 2));
        assert_eq!(u8::from(m), 8);
    }

    #[test]
    fn inverse_codes() {
        for code in 0..18u8 {
            let inverse = u8::from(Move333::try_from(code).unwrap().inverse());
            let expected = match code {
                0..=5 => code + 12,
                6..=11 => code,
                _ => code - 12,
            };
            assert_eq!(inverse, expected);
        }
    }

    #[test]
    fn b_then_b_prime() {
        let cube = CubieCube::SOLVED.apply_move_code(3).unwrap();
        assert_eq!(
            cube,
            from_raw(
                [0, 1, 6, 3, 4, 5, 10, 2, 8, 9, 7, 11],
                [0, 5, 1, 3, 4, 6, 2, 7],
                [0, 0, 1, 0, 0, 0, 1, 1, 0, 0, 1, 0],
                [0, 1, 2, 0, 0, 2, 1, 0],
            )
        );
        assert_eq!(cube.apply_move_code(15).unwrap(), CubieCube::SOLVED);
    }

    #[test]
    fn f_then_b_prime() {
        let cube = CubieCube::SOLVED.make_moves(&MoveSequence(vec![mv!(F, 1), mv!(B, 3)]));
        assert_eq!(
            cube,
            from_raw(
                [5, 1, 7, 3, 0, 8, 2, 10, 4, 9, 6, 11],
                [3, 2, 6, 7, 0, 1, 5, 4],
                [1, 0, 1, 0, 1, 1, 1, 1, 1, 0, 1, 0],
                [2, 1, 2, 1, 1, 2, 1, 2],
            )
        );
    }

    #[test]
    fn r_then_u_prime() {
        let cube = CubieCube::SOLVED.make_moves(&MoveSequence(vec![mv!(R, 1), mv!(U, 3)]));
        assert_eq!(
            cube,
            from_raw(
                [3, 0, 4, 2, 9, 5, 1, 7, 8, 6, 10, 11],
                [3, 4, 0, 2, 5, 1, 6, 7],
                [0; 12],
                [0, 1, 2, 0, 2, 1, 0, 0],
            )
        );
    }

    #[test]
    fn u_and_d_keep_orientation() {
        let cube = CubieCube::SOLVED.make_moves(&"U D' U2 D2".parse().unwrap());
        assert!(cube.co().iter().all(|&o| o == CornerTwist::Oriented));
        assert!(cube.eo().iter().all(|&o| o == crate::cube333::EdgeFlip::Oriented));
    }

    #[test]
    fn notation() {
        let alg: MoveSequence<Move333> = "R U2 F' B3 D L1".parse().unwrap();
        assert_eq!(
            alg,
            MoveSequence(vec![
                mv!(R, 1),
                mv!(U, 2),
                mv!(F, 3),
                mv!(B, 3),
                mv!(D, 1),
                mv!(L, 1)
            ])
        );
        assert_eq!(alg.to_string(), "R U2 F' B' D L");
        assert_eq!(
            "R X".parse::<MoveSequence<Move333>>(),
            Err(ParseMoveError::UnknownMove("X".to_owned()))
        );
        assert_eq!(
            "R4".parse::<Move333>(),
            Err(ParseMoveError::UnknownMove("R4".to_owned()))
        );
        assert!("".parse::<MoveSequence<Move333>>().unwrap().is_empty());
    }

    use proptest::collection::vec;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn cancel_same_moves(mvs in vec(any::<Move333>(), 0..20).prop_map(MoveSequence)) {
            let cancelled = mvs.clone().cancel();
            assert!(cancelled.len() <= mvs.len());
            assert_eq!(CubieCube::SOLVED.make_moves(&mvs), CubieCube::SOLVED.make_moves(&cancelled));
        }

        #[test]
        fn invert_identity(mvs in vec(any::<Move333>(), 0..20).prop_map(MoveSequence)) {
            let cancelled = mvs.clone().cancel();
            assert_eq!(CubieCube::SOLVED.make_moves(&mvs).make_moves(&mvs.clone().inverse()), CubieCube::SOLVED);
            assert!(cancelled.clone().append(cancelled.inverse()).cancel().is_empty());
        }

        #[test]
        fn cancel_idempotent(mvs in vec(any::<Move333>(), 0..20).prop_map(MoveSequence)) {
            let cancelled = mvs.clone().cancel();
            assert_eq!(cancelled.clone().cancel(), cancelled);
        }

        #[test]
        fn move_then_inverse(mvs in vec(any::<Move333>(), 0..20).prop_map(MoveSequence), m in any::<Move333>()) {
            let cube = CubieCube::SOLVED.make_moves(&mvs);
            assert_eq!(cube.make_move(m).make_move(m.inverse()), cube);
        }

        #[test]
        fn half_turn_involution(mvs in vec(any::<Move333>(), 0..20).prop_map(MoveSequence), code in 6..12u8) {
            let cube = CubieCube::SOLVED.make_moves(&mvs);
            let twice = cube.apply_move_code(code).and_then(|c| c.apply_move_code(code));
            assert_eq!(twice, Ok(cube));
        }

        #[test]
        fn moves_preserve_invariants(mvs in vec(any::<Move333>(), 0..40)) {
            let mut cube = CubieCube::SOLVED;
            for m in mvs {
                cube = cube.make_move(m);
                let rebuilt = CubieCube::from_arrays(
                    cube.ep().map(u8::from),
                    cube.cp().map(u8::from),
                    cube.eo().map(u8::from),
                    cube.co().map(u8::from),
                );
                assert_eq!(rebuilt, Ok(cube));
            }
        }

        #[test]
        fn notation_round_trip(mvs in vec(any::<Move333>(), 0..20).prop_map(MoveSequence)) {
            assert_eq!(mvs.to_string().parse::<MoveSequence<Move333>>(), Ok(mvs));
        }
    }
}
