use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Everything which can go wrong while solving a puzzle
#[derive(Debug, Error)]
pub enum Error {
    /* I/O */
    #[error("Couldn't read {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// Failure to encode or write an output image
    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),

    /* Malformed input */
    /// `line` is 1-indexed
    #[error("Parse error on line {line}: {message}")]
    Parse { line: usize, message: String },
    #[error("Expected a digit at index {index}, found {found:?}")]
    InvalidDigit { index: usize, found: char },
    #[error("Digit {digit} is not a pixel code (expected 0, 1 or 2)")]
    InvalidPixel { digit: u8 },
    #[error("Layer dimensions must be non-zero (got {width}x{height})")]
    ZeroDimensions { width: u32, height: u32 },
    #[error("Layer {layer} is {width}x{height}, which doesn't match the rest of the image")]
    LayerSize {
        layer: usize,
        width: usize,
        height: usize,
    },
    #[error("Orbit map contains a cycle through {0:?}")]
    OrbitCycle(String),

    /* Failures during solving */
    #[error("No layers to analyse")]
    NoLayers,
    #[error("Unknown opcode {opcode} at position {pc}")]
    UnknownOpcode { opcode: i64, pc: usize },
    #[error("Unknown parameter mode {mode} at position {pc}")]
    InvalidMode { mode: i64, pc: usize },
    #[error("Address {address} is out of bounds")]
    OutOfBounds { address: i64 },
    #[error("Arithmetic overflow at position {pc}")]
    Overflow { pc: usize },
    #[error("Program needs more input at position {pc}")]
    MissingInput { pc: usize },
    #[error("Unknown body {0:?}")]
    UnknownBody(String),
    #[error("No solution: {0}")]
    NoSolution(String),
    #[error("No solution exists for day {0}")]
    UnknownDay(u8),
}
