//! Bidirectional breadth first search between two cube states, where states are only told apart
//! by a fingerprint.

use std::collections::{HashMap, VecDeque};
use std::hash::Hash;

use log::{debug, trace};

use crate::cube333::{moves::Move333, CubieCube};
use crate::error::SearchExhausted;
use crate::moves::{Move, MoveSequence};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Direction {
    Forward,
    Backward,
}

#[derive(Debug)]
struct Visit<K> {
    direction: Direction,
    /// The fingerprint this one was discovered from and the move that led here. `None` for the
    /// start and the goal.
    parent: Option<(K, Move333)>,
}

/// Find a sequence of `moves` taking `start` to a state with the same fingerprint as `goal`.
///
/// Both states are expanded breadth first out of one shared queue, so the two frontiers grow in
/// turn. Fingerprints are recorded the first time either side reaches them, and the search stops
/// as soon as one side generates a fingerprint recorded by the other. The path is the chain of
/// moves from the start to the meeting point, followed by the inverted chain from the meeting
/// point back to the goal.
///
/// An error means the fingerprints of `start` and `goal` are not connected by `moves`.
pub fn bidirectional_search<K, F>(
    start: &CubieCube,
    goal: &CubieCube,
    moves: &[Move333],
    fingerprint: F,
) -> Result<MoveSequence<Move333>, SearchExhausted>
where
    K: Clone + Eq + Hash,
    F: Fn(&CubieCube) -> K,
{
    let start_key = fingerprint(start);
    let goal_key = fingerprint(goal);

    if start_key == goal_key {
        return Ok(MoveSequence::default());
    }

    let mut visited: HashMap<K, Visit<K>> = HashMap::new();
    visited.insert(
        start_key.clone(),
        Visit {
            direction: Direction::Forward,
            parent: None,
        },
    );
    visited.insert(
        goal_key.clone(),
        Visit {
            direction: Direction::Backward,
            parent: None,
        },
    );

    let mut queue = VecDeque::from([(*start, start_key), (*goal, goal_key)]);

    while let Some((cube, key)) = queue.pop_front() {
        let direction = visited[&key].direction;

        for &m in moves {
            let next = cube.make_move(m);
            let next_key = fingerprint(&next);

            match visited.get(&next_key) {
                Some(seen) if seen.direction != direction => {
                    debug!("frontiers met after {} fingerprints", visited.len());
                    // Links on the backward side were recorded walking away from the goal, so
                    // the move joining the two sides must be inverted when found from there too.
                    let (forward, bridge, backward) = match direction {
                        Direction::Forward => (key, m, next_key),
                        Direction::Backward => (next_key, m.inverse(), key),
                    };
                    return Ok(reconstruct(&visited, forward, bridge, backward));
                }
                Some(_) => {}
                None => {
                    visited.insert(
                        next_key.clone(),
                        Visit {
                            direction,
                            parent: Some((key.clone(), m)),
                        },
                    );
                    queue.push_back((next, next_key));
                }
            }
        }
    }

    Err(SearchExhausted {
        visited: visited.len(),
    })
}

fn reconstruct<K: Eq + Hash + Clone>(
    visited: &HashMap<K, Visit<K>>,
    forward: K,
    bridge: Move333,
    backward: K,
) -> MoveSequence<Move333> {
    let mut path = Vec::new();

    let mut key = forward;
    while let Some((parent, m)) = &visited[&key].parent {
        path.push(*m);
        key = parent.clone();
    }
    path.reverse();

    path.push(bridge);

    let mut key = backward;
    while let Some((parent, m)) = &visited[&key].parent {
        path.push(m.inverse());
        key = parent.clone();
    }

    trace!("bridging path {:?}", path);
    MoveSequence(path)
}
