//! Fixed, externally-defined constants shared by the turn engine, heuristic
//! generation and the solver. None of the values here are derived; they are
//! transcribed from the reference turn-index contract and must not be
//! renumbered.

/// Number of distinct turn operators: 6 faces x 3 angles, plus 3 slices x 7
/// repetitions.
pub const N_TURN_TYPES: usize = 39;

/// Sentinel turn id meaning "no previous turn", used to index into
/// [`TURN_AVOID_TABLE`] at the start of a search.
pub const NO_TURN: i32 = 39;

/// `TURN_AVOID_TABLE[prev]` is a bitmask over next-turn ids; a set bit means
/// that next turn is redundant after `prev` and should not be tried. Index 39
/// (no previous turn) avoids nothing.
///
/// Bit-identical to the generated table this crate's search was ported from;
/// do not hand-edit.
pub const TURN_AVOID_TABLE: [u64; 40] = [
    0x24924830c3,
    0x0000002082,
    0x492490c30c,
    0x0000008208,
    0x1249270c30,
    0x0000020820,
    0x24924830c3,
    0x0000002082,
    0x492490c30c,
    0x0000008208,
    0x1249270c30,
    0x0000020820,
    0x24924830c3,
    0x0000002082,
    0x492490c30c,
    0x0000008208,
    0x1249270c30,
    0x0000020820,
    0x1249260820,
    0x2492482082,
    0x4924908208,
    0x1249260820,
    0x2492482082,
    0x4924908208,
    0x1249260820,
    0x2492482082,
    0x4924908208,
    0x1249260820,
    0x2492482082,
    0x4924908208,
    0x1249260820,
    0x2492482082,
    0x4924908208,
    0x1249260820,
    0x2492482082,
    0x4924908208,
    0x1249260820,
    0x2492482082,
    0x4924908208,
    0x0000000000,
];
