//! An explicit LIFO replacing recursion in both heuristic-table generation
//! and the solver's depth-first search. Kept and reused across
//! iterative-deepening rounds via [`SearchStack::clear`] instead of being
//! reallocated.

use crate::cube::Cube;

#[derive(Debug, Clone, Copy)]
pub struct Frame {
    pub cube: Cube,
    pub turn: i32,
    pub depth: i32,
}

#[derive(Debug, Clone)]
pub struct SearchStack {
    frames: Vec<Frame>,
}

impl SearchStack {
    pub fn new(initial_capacity: usize) -> Self {
        SearchStack {
            frames: Vec::with_capacity(initial_capacity),
        }
    }

    pub fn push(&mut self, cube: &Cube, turn: i32, depth: i32) {
        self.frames.push(Frame {
            cube: *cube,
            turn,
            depth,
        });
    }

    pub fn pop(&mut self) -> Option<Frame> {
        self.frames.pop()
    }

    pub fn peek(&self) -> Option<&Frame> {
        self.frames.last()
    }

    pub fn clear(&mut self) {
        self.frames.clear();
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn push_pop_order() {
        let mut s = SearchStack::new(4);
        let solved = Cube::new_solved();
        s.push(&solved, 1, 0);
        s.push(&solved, 2, 1);
        assert_eq!(s.pop().unwrap().turn, 2);
        assert_eq!(s.pop().unwrap().turn, 1);
        assert!(s.pop().is_none());
    }

    #[test]
    fn clear_resets_without_dropping_capacity() {
        let mut s = SearchStack::new(4);
        let solved = Cube::new_solved();
        s.push(&solved, 1, 0);
        s.clear();
        assert!(s.is_empty());
        assert!(s.pop().is_none());
    }

    #[test]
    fn grows_past_initial_capacity() {
        let mut s = SearchStack::new(1);
        let solved = Cube::new_solved();
        for t in 0..200 {
            s.push(&solved, t, 0);
        }
        assert_eq!(s.len(), 200);
    }
}
