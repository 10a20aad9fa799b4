//! Construction-time errors
//!
//! A running round never fails; only malformed input handed to the
//! constructors is rejected here.

use thiserror::Error;

/// Problems with a strip pattern or layout
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PatternError {
    #[error("pattern has no cells")]
    Empty,
    #[error("strip width must be non-zero")]
    ZeroWidth,
    #[error("pattern length {len} is not a multiple of strip width {width}")]
    NotMultipleOfWidth { len: usize, width: usize },
    #[error("anchor index {index} outside pattern of {len} cells")]
    AnchorOutOfRange { index: usize, len: usize },
    #[error("anchor cell {index} does not produce a tile")]
    AnchorNotTile { index: usize },
    #[error("layout row {row} has {actual} cells, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        actual: usize,
    },
    #[error("unknown layout glyph {glyph:?} in row {row}")]
    UnknownGlyph { glyph: char, row: usize },
}

/// Problems with a simulation config
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid config json: {0}")]
    Json(#[from] serde_json::Error),
    #[error("{name} must be positive, got {value}")]
    NonPositive { name: &'static str, value: f32 },
    #[error("{name} must be finite and not negative, got {value}")]
    Negative { name: &'static str, value: f32 },
    #[error("damping must be in (0, 1], got {0}")]
    Damping(f32),
    #[error(transparent)]
    Pattern(#[from] PatternError),
}
