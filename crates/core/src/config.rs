use crate::{
    error::HexResult,
    hex::{HexLayout, HexWrapAround, OffsetType, Orientation},
};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Configuration that describes a finite rectangular grid: how big each cell
/// is, how cells are laid out, and how many rows and columns there are.
/// Every field has a default, so a config file only needs to list the fields
/// it wants to change.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct GridConfig {
    /// Distance from the center of a cell to any of its corners, in world
    /// units. Has to be positive. Zero passes field validation, but is
    /// rejected when building a [HexLayout].
    #[validate(range(min = 0.0))]
    pub outer_radius: f64,

    /// Number of columns in the grid
    #[validate(range(min = 1, max = 10000))]
    pub width: u32,

    /// Number of rows in the grid
    #[validate(range(min = 1, max = 10000))]
    pub height: u32,

    pub orientation: Orientation,
    pub offset_type: OffsetType,

    /// Should walking off one edge of the grid put you on the opposite edge?
    /// If enabled, the staggered dimension (height for pointy grids, width
    /// for flat ones) has to be even.
    pub wrap: bool,
}

impl GridConfig {
    /// Validate the config, then build the layout it describes
    pub fn layout(&self) -> HexResult<HexLayout> {
        self.validate()?;
        HexLayout::new(self.outer_radius, self.orientation, self.offset_type)
    }

    /// Validate the config, then build its wrap-around. `None` if wrapping is
    /// disabled.
    pub fn wrap_around(&self) -> HexResult<Option<HexWrapAround>> {
        self.validate()?;
        if !self.wrap {
            return Ok(None);
        }
        HexWrapAround::new(
            self.width,
            self.height,
            self.offset_type,
            self.orientation,
        )
        .map(Some)
    }
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            outer_radius: 1.0,
            width: 20,
            height: 20,
            orientation: Orientation::Pointy,
            offset_type: OffsetType::Odd,
            wrap: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::HexError;

    #[test]
    fn test_default_is_valid() {
        let config = GridConfig::default();
        assert!(config.validate().is_ok());
        let layout = config.layout().unwrap();
        assert_eq!(layout.orientation, Orientation::Pointy);
        assert_eq!(layout.offset_type, OffsetType::Odd);
        assert_eq!(config.wrap_around().unwrap(), None);
    }

    #[test]
    fn test_wrap_around() {
        let config = GridConfig {
            width: 7,
            height: 6,
            wrap: true,
            ..Default::default()
        };
        let wrap = config.wrap_around().unwrap().unwrap();
        assert_eq!((wrap.width(), wrap.height()), (7, 6));

        let config = GridConfig {
            height: 5,
            ..config
        };
        assert!(matches!(
            config.wrap_around(),
            Err(HexError::InvalidWrapConfiguration { .. })
        ));
    }

    #[test]
    fn test_invalid_fields() {
        let config = GridConfig {
            width: 0,
            ..Default::default()
        };
        assert!(matches!(config.layout(), Err(HexError::InvalidConfig(_))));

        let config = GridConfig {
            outer_radius: -1.0,
            ..Default::default()
        };
        assert!(matches!(config.layout(), Err(HexError::InvalidConfig(_))));

        let config = GridConfig {
            outer_radius: 0.0,
            ..Default::default()
        };
        assert!(matches!(config.layout(), Err(HexError::InvalidMetrics(_))));
    }
}
