//! Error types for grid construction and orientation checks.

use std::fmt;

/// Errors arising from grid construction, configuration, or orientation
/// verification.
///
/// Coordinates and generators are carried as their `Debug` rendering so the
/// error type does not depend on the tiling.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// The tiling declared no directions.
    EmptyUnitSphere,
    /// A direction has no partner in the unit sphere that steps back to the
    /// origin.
    UninvertibleDirection {
        /// The offending direction.
        direction: String,
    },
    /// An orientation generator sent a direction outside the unit sphere.
    OrientationEscapesSphere {
        /// The generator.
        generator: String,
        /// The direction it was applied to.
        direction: String,
        /// Where the direction landed.
        image: String,
    },
    /// An orientation generator sent two directions to the same image.
    OrientationNotBijective {
        /// The generator.
        generator: String,
    },
    /// An orientation generator does not commute with stepping along a path.
    OrientationBreaksPaths {
        /// The generator.
        generator: String,
        /// The path from the origin on which the two sides disagree.
        path: String,
    },
    /// Orientation closure produced more elements than the configured limit.
    GroupTooLarge {
        /// The configured `max_group_order`.
        limit: usize,
    },
    /// A [`GridConfig`](crate::GridConfig) field is out of range.
    InvalidConfig {
        /// What went wrong.
        reason: String,
    },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyUnitSphere => write!(f, "unit sphere must contain at least one direction"),
            Self::UninvertibleDirection { direction } => {
                write!(f, "uninvertible direction: {direction}")
            }
            Self::OrientationEscapesSphere {
                generator,
                direction,
                image,
            } => write!(
                f,
                "orientation {generator} maps direction {direction} outside the unit sphere (to {image})"
            ),
            Self::OrientationNotBijective { generator } => {
                write!(f, "orientation {generator} is not a bijection on the unit sphere")
            }
            Self::OrientationBreaksPaths { generator, path } => {
                write!(f, "orientation {generator} does not commute with path {path}")
            }
            Self::GroupTooLarge { limit } => {
                write!(f, "orientation group exceeds {limit} elements")
            }
            Self::InvalidConfig { reason } => write!(f, "invalid grid config: {reason}"),
        }
    }
}

impl std::error::Error for GridError {}
