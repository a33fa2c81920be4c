//! Error types for the geometry engine. Every variant here represents a
//! violated input contract, i.e. caller misuse. Operations that can
//! legitimately come up empty (no path, no overlap between shapes, etc.) encode
//! that in their return value instead of producing one of these.

use crate::hex::Orientation;
use thiserror::Error;
use validator::ValidationErrors;

/// Shorthand for results produced by this crate
pub type HexResult<T> = Result<T, HexError>;

#[derive(Debug, Error)]
pub enum HexError {
    /// Cube components must always sum to zero
    #[error("Invalid cube coordinate ({x}, {y}, {z}); must be on the plane x+y+z=0")]
    InvalidCoordinate { x: i32, y: i32, z: i32 },

    #[error("Cannot parse cube coordinate from {0:?}; expected \"x,y,z\"")]
    ParseCoordinate(String),

    #[error("Cannot divide a cube coordinate by zero")]
    DivideByZero,

    /// Rotations are only defined in steps of 60 degrees
    #[error("Invalid rotation of {0} degrees; must be a multiple of 60")]
    InvalidRotation(u32),

    #[error("Invalid outer radius {0}; must be a positive finite number")]
    InvalidMetrics(f64),

    /// Wrapping a staggered grid on its staggered axis requires an even
    /// number of lines, otherwise the stagger doesn't line up at the seam
    #[error(
        "Invalid wrap-around dimensions {width}x{height} for {orientation} \
        orientation; both must be in 1..=i32::MAX and the staggered dimension \
        even"
    )]
    InvalidWrapConfiguration {
        width: u32,
        height: u32,
        orientation: Orientation,
    },

    #[error("Invalid triangle: {0}")]
    InvalidTriangle(String),

    #[error("Invalid quadrangle: {0}")]
    InvalidQuadrangle(String),

    #[error("Invalid convex polygon: {0}")]
    InvalidConvexPolygon(String),

    #[error("Invalid polygon: {0}")]
    InvalidPolygon(String),

    /// A bearing didn't land in any angular sector. Only reachable with
    /// non-finite input, anything else is a bug.
    #[error("No direction found for bearing {angle} degrees")]
    NoDirectionFound { angle: f64 },

    #[error("Invalid config: {0}")]
    InvalidConfig(#[from] ValidationErrors),
}
