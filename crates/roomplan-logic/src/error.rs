//! Error types for layout construction and placement.

use crate::config::ConfigIssue;
use crate::direction::Direction;
use std::path::PathBuf;

/// Result type alias
pub type Result<T> = std::result::Result<T, LayoutError>;

/// Why an opening rectangle was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum OpeningRejection {
    #[error("rectangle extends outside the grid")]
    OutOfBounds,
    #[error("rectangle has zero extent")]
    ZeroExtent,
    #[error("rectangle touches a room corner")]
    Corner,
}

/// Layout error types
#[derive(Debug, thiserror::Error)]
pub enum LayoutError {
    /// Grid access outside `[0, width) × [0, length)`. Always a caller defect.
    #[error("cell ({x}, {y}) is outside the {width}×{length} grid")]
    OutOfBounds {
        x: usize,
        y: usize,
        width: usize,
        length: usize,
    },

    /// Door or window that cannot be cut into its wall.
    #[error("invalid opening on {wall} wall at position {position}: {reason}")]
    InvalidOpening {
        wall: Direction,
        position: usize,
        reason: OpeningRejection,
    },

    /// Configuration failed to parse or validate.
    #[error("invalid layout configuration: {}", join_issues(.0))]
    ConfigValidation(Vec<ConfigIssue>),

    /// Configuration file could not be read.
    #[error("cannot read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

fn join_issues(issues: &[ConfigIssue]) -> String {
    issues
        .iter()
        .map(|issue| issue.to_string())
        .collect::<Vec<_>>()
        .join("; ")
}
