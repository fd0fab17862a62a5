//! Admissible pruning heuristics. Each registered heuristic hashes a fixed
//! subset of cubies into a dense range and stores, for every hash value, the
//! number of turns needed to reach a representative of that class from
//! solved. [`Heuristics::get_dist`] combines the active set by taking the max
//! (the sound way to combine several independently admissible lower bounds).

use std::fs;

use crate::cube::{slot, Cube};
use crate::error::Error;
use crate::stack::SearchStack;
use crate::turn::turn;
use crate::constants::N_TURN_TYPES;

/// Which cubies a heuristic hashes, and how.
#[derive(Clone, Copy)]
enum HashKind {
    /// The 6 leading corner slots; the 7th corner and the 8th are determined
    /// by the rest, so hashing 6 of them is already bijective over reachable
    /// corner states.
    Corners,
    /// Four edge/face slots, generically hashed by id (offset by 7 to land
    /// in 1..18) and orientation.
    Projection([usize; 4]),
}

impl HashKind {
    fn hash(&self, cube: &Cube) -> u64 {
        match self {
            HashKind::Corners => hash_corners(cube),
            HashKind::Projection(slots) => hash_projection(cube, *slots),
        }
    }
}

pub struct HeuristicSpec {
    pub name: &'static str,
    kind: HashKind,
    pub size: u64,
    pub instack_optimization: bool,
    pub valid_turns_optimization: bool,
}

/// The complete registry of heuristics this solver knows how to generate and
/// load. `corners` is the only one with both optimizations enabled: it is
/// the only projection that covers every cubie of its type, which is the
/// precondition the in-stack optimization relies on for soundness.
pub static HEURISTICS: &[HeuristicSpec] = &[
    HeuristicSpec {
        name: "corners",
        kind: HashKind::Corners,
        size: 7 * 6 * 5 * 4 * 3 * 2 * 3 * 3 * 3 * 3 * 3 * 3,
        instack_optimization: true,
        valid_turns_optimization: true,
    },
    HeuristicSpec {
        name: "edges1",
        kind: HashKind::Projection([slot::U, slot::UF, slot::DR, slot::BL]),
        size: 18 * 17 * 16 * 15 * 4 * 4 * 4 * 4,
        instack_optimization: false,
        valid_turns_optimization: false,
    },
    HeuristicSpec {
        name: "edges2",
        kind: HashKind::Projection([slot::L, slot::FL, slot::UR, slot::DB]),
        size: 18 * 17 * 16 * 15 * 4 * 4 * 4 * 4,
        instack_optimization: false,
        valid_turns_optimization: false,
    },
    HeuristicSpec {
        name: "edges3",
        kind: HashKind::Projection([slot::D, slot::DF, slot::UL, slot::BR]),
        size: 18 * 17 * 16 * 15 * 4 * 4 * 4 * 4,
        instack_optimization: false,
        valid_turns_optimization: false,
    },
    HeuristicSpec {
        name: "edges4",
        kind: HashKind::Projection([slot::R, slot::FR, slot::DL, slot::UB]),
        size: 18 * 17 * 16 * 15 * 4 * 4 * 4 * 4,
        instack_optimization: false,
        valid_turns_optimization: false,
    },
    HeuristicSpec {
        name: "edges5",
        kind: HashKind::Projection([slot::F, slot::DF, slot::FR, slot::UL]),
        size: 18 * 17 * 16 * 15 * 4 * 4 * 4 * 4,
        instack_optimization: false,
        valid_turns_optimization: false,
    },
    HeuristicSpec {
        name: "edges6",
        kind: HashKind::Projection([slot::B, slot::UB, slot::BR, slot::DL]),
        size: 18 * 17 * 16 * 15 * 4 * 4 * 4 * 4,
        instack_optimization: false,
        valid_turns_optimization: false,
    },
    HeuristicSpec {
        name: "faces1",
        kind: HashKind::Projection([slot::U, slot::D, slot::L, slot::R]),
        size: 18 * 17 * 16 * 15 * 4 * 4 * 4 * 4,
        instack_optimization: false,
        valid_turns_optimization: false,
    },
    HeuristicSpec {
        name: "faces2",
        kind: HashKind::Projection([slot::U, slot::D, slot::F, slot::B]),
        size: 18 * 17 * 16 * 15 * 4 * 4 * 4 * 4,
        instack_optimization: false,
        valid_turns_optimization: false,
    },
];

pub fn find(name: &str) -> Result<&'static HeuristicSpec, Error> {
    HEURISTICS
        .iter()
        .find(|h| h.name == name)
        .ok_or_else(|| Error::UnknownHeuristic(name.to_string()))
}

fn hash_corners(cube: &Cube) -> u64 {
    let mut ids = [0u8; 6];
    let mut orients = [0u8; 6];
    for i in 0..6 {
        ids[i] = cube.cubies[i].id;
        orients[i] = cube.cubies[i].orient;
    }

    let mut result: u64 = 0;
    let mut max: u64 = 1;
    for i in 0..6 {
        result += max * ids[i] as u64;
        max *= 7 - i as u64;
        for j in i + 1..6 {
            if ids[j] > ids[i] {
                ids[j] -= 1;
            }
        }
    }
    for i in 0..6 {
        result += max * orients[i] as u64;
        max *= 3;
    }
    result
}

fn hash_projection(cube: &Cube, slots: [usize; 4]) -> u64 {
    let mut ids = [0u8; 4];
    let mut orients = [0u8; 4];
    for i in 0..4 {
        ids[i] = cube.cubies[slots[i]].id - 7;
        orients[i] = cube.cubies[slots[i]].orient;
    }

    let mut result: u64 = 0;
    let mut max: u64 = 1;
    for i in 0..4 {
        result += max * ids[i] as u64;
        max *= 18 - i as u64;
        for j in i + 1..4 {
            if ids[j] > ids[i] {
                ids[j] -= 1;
            }
        }
    }
    for i in 0..4 {
        result += max * orients[i] as u64;
        max *= 4;
    }
    result
}

/// The iterative-deepening BFS a heuristic table is built from. Terminates
/// once every hash value in `[0, size)` has been committed at its minimum
/// depth, or fails if a round runs away without making progress (evidence
/// the hash is not bijective over the reachable state space).
const MAX_GENERATION_DEPTH: i32 = 40;

pub fn generate(spec: &HeuristicSpec) -> Result<Vec<u8>, Error> {
    let size = spec.size as usize;
    let mut table = vec![0u8; size];
    let mut visited = vec![false; size];
    let mut instack: Vec<i32> = if spec.instack_optimization {
        vec![0; size]
    } else {
        Vec::new()
    };

    let solved = Cube::new_solved();
    let solved_hash = spec.kind.hash(&solved);

    let mut valid_turns = [true; N_TURN_TYPES];
    if spec.valid_turns_optimization {
        for (t, valid) in valid_turns.iter_mut().enumerate() {
            let turned = turn(&solved, t as i32);
            *valid = spec.kind.hash(&turned) != solved_hash;
        }
    }

    let mut stack = SearchStack::new(1000);
    let mut n_visited = 0usize;
    let mut max_depth: i32 = 0;

    while n_visited < size {
        if max_depth > MAX_GENERATION_DEPTH {
            return Err(Error::NotBijective(spec.name.to_string()));
        }
        println!("{} / {}", n_visited, size);
        println!("Searching Depth {}", max_depth);

        stack.clear();
        if spec.instack_optimization {
            instack.iter_mut().for_each(|v| *v = 0);
        }
        stack.push(&solved, 0, 0);

        while let Some(frame) = stack.pop() {
            let hash = spec.kind.hash(&frame.cube);
            if hash >= spec.size {
                return Err(Error::HashOutOfRange {
                    name: spec.name.to_string(),
                    hash,
                    size: spec.size,
                });
            }
            let hash = hash as usize;

            if spec.instack_optimization {
                if instack[hash] != 0 && instack[hash] <= frame.depth {
                    continue;
                }
                instack[hash] = frame.depth;
            }

            if frame.depth != max_depth {
                for t in (0..N_TURN_TYPES as i32).rev() {
                    if spec.valid_turns_optimization && !valid_turns[t as usize] {
                        continue;
                    }
                    let next = turn(&frame.cube, t);
                    stack.push(&next, t, frame.depth + 1);
                }
            } else if !visited[hash] {
                visited[hash] = true;
                table[hash] = frame.depth as u8;
                n_visited += 1;

                if n_visited % 100_000 == 0 {
                    println!("{} / {}", n_visited, size);
                }
                if n_visited >= size {
                    break;
                }
            }
        }

        max_depth += 1;
    }

    Ok(table)
}

pub fn save(name: &str, table: &[u8]) -> Result<(), Error> {
    fs::create_dir_all("heuristics")?;
    fs::write(format!("heuristics/{name}.ht"), table)?;
    Ok(())
}

fn load(spec: &HeuristicSpec) -> Result<Vec<u8>, Error> {
    let path = format!("heuristics/{}.ht", spec.name);
    let bytes =
        fs::read(&path).map_err(|_| Error::HeuristicFileMissing(spec.name.to_string()))?;
    if bytes.len() != spec.size as usize {
        return Err(Error::HeuristicFileShort {
            name: spec.name.to_string(),
            expected: spec.size as usize,
            got: bytes.len(),
        });
    }
    Ok(bytes)
}

/// The set of heuristic tables currently loaded in memory. Any subset may be
/// active; a missing table just weakens the bound, it never fails a solve.
pub struct Heuristics {
    tables: Vec<(&'static HeuristicSpec, Vec<u8>)>,
}

impl Heuristics {
    /// An empty active set: `get_dist` always returns 0.
    pub fn empty() -> Self {
        Heuristics { tables: Vec::new() }
    }

    /// Load every heuristic with a table present on disk; heuristics with no
    /// file are skipped with a warning rather than failing the whole load.
    pub fn load_all() -> Self {
        let mut tables = Vec::new();
        for spec in HEURISTICS {
            match load(spec) {
                Ok(bytes) => tables.push((spec, bytes)),
                Err(_) => eprintln!(
                    "warning: heuristic \"{}\" not available, solving without it",
                    spec.name
                ),
            }
        }
        Heuristics { tables }
    }

    /// A lower bound on the number of turns needed to solve `cube`, or 0 if
    /// no heuristics are loaded.
    pub fn get_dist(&self, cube: &Cube) -> u8 {
        self.tables
            .iter()
            .map(|(spec, table)| table[spec.kind.hash(cube) as usize])
            .max()
            .unwrap_or(0)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn corners_hash_of_solved_is_zero() {
        assert_eq!(hash_corners(&Cube::new_solved()), 0);
    }

    #[test]
    fn corners_hash_changes_after_r() {
        let r = turn(&Cube::new_solved(), 5);
        assert_ne!(hash_corners(&r), 0);
    }

    #[test]
    fn corners_hash_in_range_for_random_scrambles() {
        let spec = find("corners").unwrap();
        let mut cube = Cube::new_solved();
        for t in [5, 0, 17, 22, 9] {
            cube = turn(&cube, t);
            assert!(spec.kind.hash(&cube) < spec.size);
        }
    }

    #[test]
    fn registry_names_are_unique() {
        let mut names: Vec<&str> = HEURISTICS.iter().map(|h| h.name).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), HEURISTICS.len());
    }

    #[test]
    fn empty_active_set_has_zero_distance() {
        assert_eq!(Heuristics::empty().get_dist(&Cube::new_solved()), 0);
    }

    #[test]
    fn unknown_heuristic_name_is_rejected() {
        assert!(find("not-a-real-heuristic").is_err());
    }
}
