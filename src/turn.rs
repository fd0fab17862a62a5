//! The 39-turn algebra. Nine primitive operators (U, D, F, B, L, R, M, E, S)
//! are composed by repetition to produce all 39 turn ids; see [`turn`].

use crate::cube::{slot, Cube};

fn rotate(cube: &mut Cube, idx: usize, amount: i32) {
    let c = &mut cube.cubies[idx];
    let modulus: i32 = if idx < 8 { 3 } else { 4 };
    c.orient = (((c.orient as i32 + amount) % modulus + modulus) % modulus) as u8;
}

/// c0's contents move into c1, c1's into c2, c2's into c3, c3's into c0.
fn cycle4(cube: &mut Cube, c0: usize, c1: usize, c2: usize, c3: usize) {
    let tmp = cube.cubies[c3];
    cube.cubies[c3] = cube.cubies[c2];
    cube.cubies[c2] = cube.cubies[c1];
    cube.cubies[c1] = cube.cubies[c0];
    cube.cubies[c0] = tmp;
}

fn cycle8(
    cube: &mut Cube,
    c0: usize,
    c1: usize,
    c2: usize,
    c3: usize,
    c4: usize,
    c5: usize,
    c6: usize,
    c7: usize,
) {
    let tmp = cube.cubies[c7];
    cube.cubies[c7] = cube.cubies[c6];
    cube.cubies[c6] = cube.cubies[c5];
    cube.cubies[c5] = cube.cubies[c4];
    cube.cubies[c4] = cube.cubies[c3];
    cube.cubies[c3] = cube.cubies[c2];
    cube.cubies[c2] = cube.cubies[c1];
    cube.cubies[c1] = cube.cubies[c0];
    cube.cubies[c0] = tmp;
}

fn turn_u(cube: &mut Cube) {
    rotate(cube, slot::U, 1);
    cycle4(cube, slot::UFL, slot::UBL, slot::UBR, slot::UFR);
    cycle4(cube, slot::UF, slot::UL, slot::UB, slot::UR);
}

fn turn_d(cube: &mut Cube) {
    rotate(cube, slot::D, 1);
    cycle4(cube, slot::DFL, slot::DFR, slot::DBR, slot::DBL);
    cycle4(cube, slot::DF, slot::DR, slot::DB, slot::DL);
}

fn turn_f(cube: &mut Cube) {
    rotate(cube, slot::UFL, 1);
    rotate(cube, slot::UFR, 2);
    rotate(cube, slot::DFR, 1);
    rotate(cube, slot::DFL, 2);
    rotate(cube, slot::F, 1);
    cycle4(cube, slot::UFL, slot::UFR, slot::DFR, slot::DFL);
    cycle4(cube, slot::UF, slot::FR, slot::DF, slot::FL);
}

fn turn_b(cube: &mut Cube) {
    rotate(cube, slot::UBR, 1);
    rotate(cube, slot::UBL, 2);
    rotate(cube, slot::DBL, 1);
    rotate(cube, slot::DBR, 2);
    rotate(cube, slot::B, 1);
    cycle4(cube, slot::UBR, slot::UBL, slot::DBL, slot::DBR);
    cycle4(cube, slot::UB, slot::BL, slot::DB, slot::BR);
}

fn turn_l(cube: &mut Cube) {
    rotate(cube, slot::UFL, 2);
    rotate(cube, slot::UBL, 1);
    rotate(cube, slot::DBL, 2);
    rotate(cube, slot::DFL, 1);
    rotate(cube, slot::UL, 2);
    rotate(cube, slot::BL, 2);
    rotate(cube, slot::DL, 2);
    rotate(cube, slot::FL, 2);
    rotate(cube, slot::L, 1);
    cycle4(cube, slot::UFL, slot::DFL, slot::DBL, slot::UBL);
    cycle4(cube, slot::UL, slot::FL, slot::DL, slot::BL);
}

fn turn_r(cube: &mut Cube) {
    rotate(cube, slot::UFR, 1);
    rotate(cube, slot::UBR, 2);
    rotate(cube, slot::DFR, 2);
    rotate(cube, slot::DBR, 1);
    rotate(cube, slot::UR, 2);
    rotate(cube, slot::BR, 2);
    rotate(cube, slot::DR, 2);
    rotate(cube, slot::FR, 2);
    rotate(cube, slot::R, 1);
    cycle4(cube, slot::UFR, slot::UBR, slot::DBR, slot::DFR);
    cycle4(cube, slot::UR, slot::BR, slot::DR, slot::FR);
}

fn turn_m(cube: &mut Cube) {
    rotate(cube, slot::UF, 2);
    rotate(cube, slot::DF, 2);
    rotate(cube, slot::DB, 2);
    rotate(cube, slot::UB, 2);
    cycle8(
        cube, slot::U, slot::UF, slot::F, slot::DF, slot::D, slot::DB, slot::B, slot::UB,
    );
}

fn turn_e(cube: &mut Cube) {
    rotate(cube, slot::FL, 1);
    rotate(cube, slot::BL, 2);
    rotate(cube, slot::BR, 3);
    rotate(cube, slot::FR, 2);
    rotate(cube, slot::F, 1);
    rotate(cube, slot::B, 3);
    cycle8(
        cube, slot::FL, slot::F, slot::FR, slot::R, slot::BR, slot::B, slot::BL, slot::L,
    );
}

fn turn_s(cube: &mut Cube) {
    rotate(cube, slot::UL, 1);
    rotate(cube, slot::UR, 1);
    rotate(cube, slot::DR, 3);
    rotate(cube, slot::DL, 3);
    rotate(cube, slot::U, 1);
    rotate(cube, slot::L, 3);
    rotate(cube, slot::R, 1);
    rotate(cube, slot::D, 3);
    cycle8(
        cube, slot::UL, slot::U, slot::UR, slot::R, slot::DR, slot::D, slot::DL, slot::L,
    );
}

/// Apply turn `t` (`0..=38`) to `cube`, returning the result. Face turns
/// (`t < 18`) repeat their 90-degree primitive `1 + t/6` times; slice turns
/// repeat their 45-degree primitive `1 + (t-18)/3` times.
pub fn turn(cube: &Cube, t: i32) -> Cube {
    let mut out = *cube;
    if t < 18 {
        let repeats = 1 + t / 6;
        let primitive: fn(&mut Cube) = match t % 6 {
            0 => turn_u,
            1 => turn_d,
            2 => turn_f,
            3 => turn_b,
            4 => turn_l,
            _ => turn_r,
        };
        for _ in 0..repeats {
            primitive(&mut out);
        }
    } else {
        let repeats = 1 + (t - 18) / 3;
        let primitive: fn(&mut Cube) = match (t - 18) % 3 {
            0 => turn_m,
            1 => turn_e,
            _ => turn_s,
        };
        for _ in 0..repeats {
            primitive(&mut out);
        }
    }
    out
}

#[cfg(test)]
mod test {
    use super::*;

    fn id_multiset(c: &Cube) -> Vec<u8> {
        let mut ids: Vec<u8> = c.cubies.iter().map(|c| c.id).collect();
        ids.sort_unstable();
        ids
    }

    #[test]
    fn piece_conservation() {
        let solved = Cube::new_solved();
        for t in 0..39 {
            let turned = turn(&solved, t);
            assert_eq!(id_multiset(&turned), (0u8..26).collect::<Vec<_>>(), "turn {t}");
        }
    }

    #[test]
    fn corner_orientation_parity() {
        for t in 0..39 {
            let turned = turn(&Cube::new_solved(), t);
            let sum: i32 = turned.cubies[0..8].iter().map(|c| c.orient as i32).sum();
            assert_eq!(sum % 3, 0, "turn {t}");
        }
    }

    #[test]
    fn edge_slot_orientation_parity() {
        for t in 0..39 {
            let turned = turn(&Cube::new_solved(), t);
            let sum: i32 = turned.cubies[8..20]
                .iter()
                .filter(|c| (8..=19).contains(&c.id))
                .map(|c| c.orient as i32)
                .sum();
            assert_eq!(sum % 2, 0, "turn {t}");
        }
    }

    #[test]
    fn face_turn_order_four() {
        for face in 0..6 {
            let mut c = Cube::new_solved();
            for _ in 0..4 {
                c = turn(&c, face);
            }
            assert_eq!(c, Cube::new_solved(), "face {face}");
        }
    }

    #[test]
    fn slice_turn_order_eight() {
        for slice in 18..21 {
            let mut c = Cube::new_solved();
            for _ in 0..8 {
                c = turn(&c, slice);
            }
            assert_eq!(c, Cube::new_solved(), "slice {slice}");
        }
    }

    #[test]
    fn turn_families_compose() {
        // U once, 3 more times (U'), 2 more times (U2) returns to solved:
        // that's 1 + 3 + 2 = 6, not a multiple of 4, so assert the simpler
        // inverse property instead: U then U' (family 0, then +12) is solved.
        let solved = Cube::new_solved();
        let u_then_uprime = turn(&turn(&solved, 0), 12);
        assert_eq!(u_then_uprime, solved);
    }

    #[test]
    fn m_squared_matches_double_repeat_index() {
        let once_twice = turn(&turn(&Cube::new_solved(), 18), 18);
        let repeated = turn(&Cube::new_solved(), 21);
        assert_eq!(once_twice, repeated);
    }
}
