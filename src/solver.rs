//! Iterative-deepening depth-first search over the turn graph, pruned by the
//! move-avoidance table and (for `solve`) the active heuristic set.

use crate::constants::{N_TURN_TYPES, NO_TURN, TURN_AVOID_TABLE};
use crate::cube::Cube;
use crate::heuristic::Heuristics;
use crate::solution::SolutionList;
use crate::stack::SearchStack;
use crate::turn::turn;

/// Solves `cube` back to any of the six solved orientations, using `active`
/// to prune the search. An empty [`Heuristics`] set still finds a solution,
/// just more slowly.
pub fn solve(cube: &Cube, active: &Heuristics) -> Vec<i32> {
    search(cube, Some(active), Cube::is_solved)
}

/// Solves `cube` only as far as a cube shape (every edge slot holding an
/// edge, correctly oriented), ignoring heuristics. The admissibility
/// argument for heuristic pruning assumes the goal predicate agrees with
/// "heuristic hash equals solved hash", which does not hold for this weaker
/// predicate.
pub fn solve_to_cube_shape(cube: &Cube) -> Vec<i32> {
    search(cube, None, Cube::is_cube_shape)
}

fn search(cube: &Cube, heuristics_active: Option<&Heuristics>, predicate: fn(&Cube) -> bool) -> Vec<i32> {
    if predicate(cube) {
        return vec![-2];
    }

    let mut stack = SearchStack::new(1000);
    let mut depth: i32 = 1;
    loop {
        println!("Searching Depth {depth}...");
        let solutions = search_at_depth(cube, depth, &mut stack, heuristics_active, predicate, false);
        if solutions.count() > 0 {
            return solutions.get_int_list();
        }
        depth += 1;
    }
}

/// The non-recursive DFS at a single depth bound. Returns every solution
/// found if `multiple_solutions`, otherwise stops at the first.
fn search_at_depth(
    to_solve: &Cube,
    max_depth: i32,
    stack: &mut SearchStack,
    heuristics_active: Option<&Heuristics>,
    predicate: fn(&Cube) -> bool,
    multiple_solutions: bool,
) -> SolutionList {
    let mut solutions = SolutionList::new();
    let mut path = vec![0i32; max_depth as usize];

    let mut current = *to_solve;
    let mut depth: i32 = 0;
    let mut last_turn: i32 = NO_TURN;
    stack.clear();

    loop {
        if depth == max_depth - 1 {
            for t in 0..N_TURN_TYPES as i32 {
                if TURN_AVOID_TABLE[last_turn as usize] & (1u64 << t) != 0 {
                    continue;
                }
                let next = turn(&current, t);
                if predicate(&next) {
                    path[(max_depth - 1) as usize] = t;
                    solutions.add(&path);
                    if !multiple_solutions {
                        return solutions;
                    }
                }
            }
        } else {
            for t in 0..N_TURN_TYPES as i32 {
                if TURN_AVOID_TABLE[last_turn as usize] & (1u64 << t) != 0 {
                    continue;
                }
                let next = turn(&current, t);
                if let Some(h) = heuristics_active {
                    if h.get_dist(&next) as i32 + depth > max_depth + 1 {
                        continue;
                    }
                }
                stack.push(&next, t, depth + 1);
            }
        }

        match stack.pop() {
            Some(frame) => {
                current = frame.cube;
                last_turn = frame.turn;
                depth = frame.depth;
                path[(depth - 1) as usize] = last_turn;
            }
            None => return solutions,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn solved_cube_solves_to_empty() {
        let empty = Heuristics::empty();
        assert_eq!(solve(&Cube::new_solved(), &empty), vec![-2]);
    }

    #[test]
    fn single_r_turn_solves_in_one_move() {
        let empty = Heuristics::empty();
        let scrambled = turn(&Cube::new_solved(), 5);
        let solution = solve(&scrambled, &empty);
        let moves: Vec<i32> = solution.iter().copied().take_while(|&t| t >= 0).collect();
        assert_eq!(moves.len(), 1);
        let mut c = scrambled;
        for &t in &moves {
            c = turn(&c, t);
        }
        assert!(c.is_solved());
    }

    #[test]
    fn solution_is_sound() {
        let empty = Heuristics::empty();
        let scrambled = turn(&turn(&Cube::new_solved(), 0), 21);
        let solution = solve(&scrambled, &empty);
        let mut c = scrambled;
        for &t in solution.iter().take_while(|&&t| t >= 0) {
            c = turn(&c, t);
        }
        assert!(c.is_solved());
    }

    #[test]
    fn cube_shape_solve_accepts_non_identity_orientation() {
        let s_once = turn(&Cube::new_solved(), 20);
        assert!(!s_once.is_cube_shape());
        let solution = solve_to_cube_shape(&s_once);
        let mut c = s_once;
        for &t in solution.iter().take_while(|&&t| t >= 0) {
            c = turn(&c, t);
        }
        assert!(c.is_cube_shape());
    }
}
