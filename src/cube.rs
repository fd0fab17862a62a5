//! Cube state: a fixed 26-cubie representation and the predicates the solver
//! checks it against. The turn algebra itself lives in [`crate::turn`].

use std::fmt;

use crate::turn::turn;

/// Corner slot/id 0..=7, edge slot/id 8..=19, face slot/id 20..=25, in the
/// order used throughout this crate's hash functions and turn tables. Must
/// not be renumbered.
pub mod slot {
    pub const UFL: usize = 0;
    pub const UBL: usize = 1;
    pub const UBR: usize = 2;
    pub const UFR: usize = 3;
    pub const DFL: usize = 4;
    pub const DBL: usize = 5;
    pub const DBR: usize = 6;
    pub const DFR: usize = 7;

    pub const UF: usize = 8;
    pub const UL: usize = 9;
    pub const UB: usize = 10;
    pub const UR: usize = 11;
    pub const FL: usize = 12;
    pub const BL: usize = 13;
    pub const BR: usize = 14;
    pub const FR: usize = 15;
    pub const DF: usize = 16;
    pub const DL: usize = 17;
    pub const DB: usize = 18;
    pub const DR: usize = 19;

    pub const U: usize = 20;
    pub const F: usize = 21;
    pub const L: usize = 22;
    pub const B: usize = 23;
    pub const R: usize = 24;
    pub const D: usize = 25;
}

/// A single physical piece: which cubie (`id`) occupies a slot, and its
/// rotation (`orient`) relative to its home orientation. Corners orient mod
/// 3; edges and faces orient mod 4.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cubie {
    pub id: u8,
    pub orient: u8,
}

/// The full puzzle: 26 cubies indexed by slot id. Corners occupy slots
/// 0..=7, edges 8..=19, faces 20..=25; on a Mixup Cube an edge's `id` may
/// appear in a face slot and vice versa.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cube {
    pub cubies: [Cubie; 26],
}

impl Default for Cube {
    fn default() -> Self {
        Self::new_solved()
    }
}

impl Cube {
    /// Every cubie in its home slot, orientation 0.
    pub fn new_solved() -> Self {
        let mut cubies = [Cubie { id: 0, orient: 0 }; 26];
        for (i, c) in cubies.iter_mut().enumerate() {
            c.id = i as u8;
        }
        Cube { cubies }
    }

    /// Bit-exact copy into `self`. `Cube` is `Copy`, so ordinary assignment
    /// does this already.
    pub fn copy_from(&mut self, src: &Cube) {
        *self = *src;
    }

    /// True if every edge slot holds an edge piece with orientation 0 or 2
    /// (i.e. not rotated 90 degrees out of the slice plane).
    pub fn is_cube_shape(&self) -> bool {
        (slot::UF..=slot::DR).all(|s| {
            let c = self.cubies[s];
            (8..=19).contains(&c.id) && (c.orient == 0 || c.orient == 2)
        })
    }

    /// True if this cube matches any of the six rotational images of the
    /// solved state (placing a different face up), ignoring face-cubie
    /// orientation.
    pub fn is_solved(&self) -> bool {
        SOLVED_IMAGES.iter().any(|image| self.matches_image(image))
    }

    fn matches_image(&self, image: &Cube) -> bool {
        for s in 0..26 {
            let (a, b) = (self.cubies[s], image.cubies[s]);
            if a.id != b.id {
                return false;
            }
            if s < slot::U {
                if a.orient != b.orient {
                    return false;
                }
            }
            // Face slots: orientation is masked out, only identity matters.
        }
        true
    }
}

impl fmt::Display for Cube {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, c) in self.cubies.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "({}, {})", c.id, c.orient)?;
        }
        write!(f, "]")
    }
}

/// Build a rotational image of the solved cube by replaying a turn sequence
/// from solved. A whole-cube rotation about an axis is exactly the
/// simultaneous turning of every layer along that axis by the matching
/// amount.
fn rotated_solved_image(turns: &[i32]) -> Cube {
    let mut c = Cube::new_solved();
    for &t in turns {
        c = turn(&c, t);
    }
    c
}

lazy_static! {
    /// The six whole-cube rotations of the solved state, one per face that
    /// could be "up". Index 0 is the identity (U stays up); the rest are
    /// built from the layer-turn compositions described in the module-level
    /// design notes: F-up is L,R',M^2; D-up is L^2,R^2,M^4; B-up is
    /// L',R,M^6; R-up is F',B,S^6; L-up is F,B',S^2.
    static ref SOLVED_IMAGES: [Cube; 6] = [
        Cube::new_solved(),
        rotated_solved_image(&[4, 17, 21]),
        rotated_solved_image(&[10, 11, 27]),
        rotated_solved_image(&[16, 5, 33]),
        rotated_solved_image(&[14, 3, 35]),
        rotated_solved_image(&[2, 15, 23]),
    ];
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn solved_is_solved() {
        assert!(Cube::new_solved().is_solved());
    }

    #[test]
    fn solved_is_cube_shape() {
        assert!(Cube::new_solved().is_cube_shape());
    }

    #[test]
    fn rotational_images_are_solved() {
        for image in SOLVED_IMAGES.iter() {
            assert!(image.is_solved());
            assert!(image.is_cube_shape());
        }
    }

    #[test]
    fn r_turn_breaks_solved() {
        let r = turn(&Cube::new_solved(), 5);
        assert!(!r.is_solved());
        assert!(r.is_cube_shape());
    }
}
