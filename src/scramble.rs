//! Rendering and parsing turn sequences as human-readable move strings, and
//! generating random scrambles for exercising the solver.

use rand::Rng;

use crate::constants::N_TURN_TYPES;
use crate::error::Error;

const FACE_LETTERS: [char; 6] = ['U', 'D', 'F', 'B', 'L', 'R'];
const SLICE_LETTERS: [char; 3] = ['M', 'E', 'S'];

fn turn_to_str(t: i32) -> String {
    if t < 18 {
        let letter = FACE_LETTERS[(t % 6) as usize];
        match t / 6 {
            0 => letter.to_string(),
            1 => format!("{letter}2"),
            _ => format!("{letter}'"),
        }
    } else {
        let letter = SLICE_LETTERS[((t - 18) % 3) as usize];
        let reps = 1 + (t - 18) / 3;
        if reps == 1 {
            letter.to_string()
        } else {
            format!("{letter}{reps}")
        }
    }
}

fn str_to_turn(word: &str) -> Result<i32, Error> {
    let mut chars = word.chars();
    let letter = chars.next().ok_or_else(|| Error::InvalidTurn(word.to_string()))?;
    let suffix: String = chars.collect();

    if let Some(face) = FACE_LETTERS.iter().position(|&c| c == letter) {
        let family = match suffix.as_str() {
            "" => 0,
            "2" => 1,
            "'" => 2,
            _ => return Err(Error::InvalidTurn(word.to_string())),
        };
        return Ok((family * 6 + face) as i32);
    }

    if let Some(slice) = SLICE_LETTERS.iter().position(|&c| c == letter) {
        let reps: i32 = if suffix.is_empty() {
            1
        } else {
            suffix
                .parse()
                .map_err(|_| Error::InvalidTurn(word.to_string()))?
        };
        if !(1..=7).contains(&reps) {
            return Err(Error::InvalidTurn(word.to_string()));
        }
        return Ok(18 + (reps - 1) * 3 + slice as i32);
    }

    Err(Error::InvalidTurn(word.to_string()))
}

/// Render a turn-index sequence as space-separated move names, e.g.
/// `"R U R' M2"`.
pub fn scramble_to_str(turns: &[i32]) -> String {
    turns
        .iter()
        .map(|&t| turn_to_str(t))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Parse a space-separated move string back into turn indices.
pub fn turns_from_str(s: &str) -> Result<Vec<i32>, Error> {
    s.split_whitespace().map(str_to_turn).collect()
}

/// A uniformly random sequence of `length` turn indices. Does not attempt to
/// avoid redundant consecutive turns; the solver's own move-avoidance table
/// already makes such redundancy harmless, and the point here is exercising
/// input, not an optimal-length scramble.
pub fn gen_scramble(length: usize) -> Vec<i32> {
    let mut rng = rand::thread_rng();
    (0..length)
        .map(|_| rng.gen_range(0..N_TURN_TYPES as i32))
        .collect()
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn face_turns_round_trip() {
        for t in 0..18 {
            assert_eq!(str_to_turn(&turn_to_str(t)).unwrap(), t);
        }
    }

    #[test]
    fn slice_turns_round_trip() {
        for t in 18..39 {
            assert_eq!(str_to_turn(&turn_to_str(t)).unwrap(), t);
        }
    }

    #[test]
    fn known_names() {
        assert_eq!(turn_to_str(0), "U");
        assert_eq!(turn_to_str(6), "U2");
        assert_eq!(turn_to_str(12), "U'");
        assert_eq!(turn_to_str(18), "M");
        assert_eq!(turn_to_str(21), "M2");
        assert_eq!(turn_to_str(38), "S7");
    }

    #[test]
    fn scramble_to_str_joins_with_spaces() {
        assert_eq!(scramble_to_str(&[0, 5, 12]), "U R U'");
    }

    #[test]
    fn invalid_token_is_an_error() {
        assert!(turns_from_str("Q2").is_err());
        assert!(turns_from_str("M8").is_err());
    }

    #[test]
    fn gen_scramble_has_requested_length_and_valid_turns() {
        let s = gen_scramble(25);
        assert_eq!(s.len(), 25);
        assert!(s.iter().all(|&t| (0..39).contains(&t)));
    }
}
