//! Grid construction options.

use crate::error::GridError;

/// Options controlling how a [`Grid`](crate::Grid) is built.
///
/// The defaults build the minimal grid: canonical cache, reverse table and
/// canonicalized generators. Orientation closure and verification are
/// opt-in because they cost time proportional to the group order and to
/// `|unit sphere| ^ verify_path_depth` respectively.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GridConfig {
    /// Initial capacity of the coordinate cache. Default: 64.
    pub cache_capacity: usize,
    /// Close the orientation generators into a group during construction.
    /// Default: false.
    pub close_orientations: bool,
    /// Run [`Grid::verify_orientations`](crate::Grid::verify_orientations)
    /// during construction. Default: false.
    pub verify_orientations: bool,
    /// Length of the paths used to check that orientations commute with
    /// stepping. Must be in `1..=6`. Default: 2.
    pub verify_path_depth: usize,
    /// Upper bound on the orientation group order. Must be non-zero.
    /// Default: 4096.
    pub max_group_order: usize,
}

impl GridConfig {
    /// Longest accepted `verify_path_depth`.
    pub const MAX_VERIFY_PATH_DEPTH: usize = 6;

    /// Check that every field is in range.
    pub fn validate(&self) -> Result<(), GridError> {
        if self.verify_path_depth == 0 || self.verify_path_depth > Self::MAX_VERIFY_PATH_DEPTH {
            return Err(GridError::InvalidConfig {
                reason: format!(
                    "verify_path_depth must be in [1, {}], got {}",
                    Self::MAX_VERIFY_PATH_DEPTH,
                    self.verify_path_depth
                ),
            });
        }
        if self.max_group_order == 0 {
            return Err(GridError::InvalidConfig {
                reason: "max_group_order must be at least 1".into(),
            });
        }
        Ok(())
    }
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            cache_capacity: 64,
            close_orientations: false,
            verify_orientations: false,
            verify_path_depth: 2,
            max_group_order: 4096,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_valid() {
        assert!(GridConfig::default().validate().is_ok());
    }

    #[test]
    fn rejects_zero_path_depth() {
        let config = GridConfig {
            verify_path_depth: 0,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(GridError::InvalidConfig { .. })
        ));
    }

    #[test]
    fn rejects_excessive_path_depth() {
        let config = GridConfig {
            verify_path_depth: GridConfig::MAX_VERIFY_PATH_DEPTH + 1,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn rejects_zero_group_order() {
        let config = GridConfig {
            max_group_order: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }
}
