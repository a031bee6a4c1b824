use thistlethwaite::cube333::moves::{Htm, Move333, MoveGenerator};
use thistlethwaite::cube333::scramble::scramble;
use thistlethwaite::cube333::thistlethwaite::{solve, Solver};
use thistlethwaite::cube333::CubieCube;
use thistlethwaite::error::{InvalidCubeError, ParseMoveError, TryFromIntToEnumError};
use thistlethwaite::moves::MoveSequence;

#[test_log::test]
fn solve_random_scrambles() {
    for seed in 0..6 {
        let alg = scramble(40, &mut fastrand::Rng::with_seed(seed));
        let cube = CubieCube::SOLVED.make_moves(&alg);
        let sol = solve(&cube).unwrap();
        assert_eq!(cube.make_moves(&sol), CubieCube::SOLVED);
    }
}

#[test_log::test]
fn solve_superflip() {
    let alg: MoveSequence<Move333> = "U R2 F B R B2 R U2 L B2 R U' D' R2 F R' L B2 U2 F2"
        .parse()
        .unwrap();
    let cube = CubieCube::SOLVED.make_moves(&alg);
    assert!(cube.eo().iter().all(|&o| u8::from(o) == 1));

    let sol = Solver::new().with_cancellation(true).solve(&cube).unwrap();
    assert_eq!(cube.make_moves(&sol), CubieCube::SOLVED);
}

#[test_log::test]
fn solve_by_move_codes() {
    // F then B', written as move codes
    let cube = [2, 15]
        .into_iter()
        .try_fold(CubieCube::SOLVED, |c, code| c.apply_move_code(code))
        .unwrap();
    let sol = solve(&cube).unwrap();
    let codes: Vec<u8> = sol.0.iter().map(|&m| u8::from(m)).collect();
    assert!(codes.iter().all(|&c| c < 18));

    let solved = codes
        .into_iter()
        .try_fold(cube, |c, code| c.apply_move_code(code))
        .unwrap();
    assert_eq!(solved, CubieCube::SOLVED);

    assert_eq!(
        CubieCube::SOLVED.apply_move_code(18),
        Err(TryFromIntToEnumError::OutOfBounds)
    );
}

#[test_log::test]
fn solve_from_arrays() {
    // R U', entered piece by piece
    let cube = CubieCube::from_arrays(
        [3, 0, 4, 2, 9, 5, 1, 7, 8, 6, 10, 11],
        [3, 4, 0, 2, 5, 1, 6, 7],
        [0; 12],
        [0, 1, 2, 0, 2, 1, 0, 0],
    )
    .unwrap();
    assert_eq!(cube, CubieCube::SOLVED.make_moves(&"R U'".parse().unwrap()));

    let sol = solve(&cube).unwrap();
    assert_eq!(cube.make_moves(&sol), CubieCube::SOLVED);
}

#[test_log::test]
fn reject_bad_input() {
    let mut co = [0; 8];
    co[0] = 1;
    assert!(matches!(
        CubieCube::from_arrays(
            [0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11],
            [0, 1, 2, 3, 4, 5, 6, 7],
            [0; 12],
            co
        ),
        Err(InvalidCubeError::Unsolvable { .. })
    ));

    assert_eq!(
        "R U X".parse::<MoveSequence<Move333>>(),
        Err(ParseMoveError::UnknownMove("X".to_owned()))
    );
}

#[test_log::test]
fn every_move_is_undone() {
    for &m in Htm::MOVE_LIST {
        let cube = CubieCube::SOLVED.make_move(m);
        let sol = solve(&cube).unwrap();
        assert!(!sol.is_empty());
        assert_eq!(cube.make_moves(&sol), CubieCube::SOLVED);
    }
}
