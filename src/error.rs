use thiserror::Error;

/// Errors produced by cube parsing, heuristic table IO and generation, and solving.
#[derive(Error, Debug)]
pub enum Error {
    #[error("unknown heuristic \"{0}\"")]
    UnknownHeuristic(String),
    #[error("heuristic table \"{0}\" is not present on disk")]
    HeuristicFileMissing(String),
    #[error("short read/write on heuristic table \"{name}\": expected {expected} bytes, got {got}")]
    HeuristicFileShort {
        name: String,
        expected: usize,
        got: usize,
    },
    #[error("hash value {hash} out of range while generating \"{name}\" (size {size})")]
    HashOutOfRange {
        name: String,
        hash: u64,
        size: u64,
    },
    #[error("heuristic \"{0}\" did not cover its full hash range; hash function is not bijective")]
    NotBijective(String),
    #[error("invalid turn token \"{0}\"")]
    InvalidTurn(String),
    #[error("invalid cube description: {0}")]
    InvalidCubeDescription(String),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
