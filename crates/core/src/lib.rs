//! PhysHex is an exact geometry engine for hexagon grids. Cells are addressed
//! with cube coordinates, and everything on top of that (shapes, lines,
//! rings, flood fills, line of sight, shortest paths) is computed with
//! integer math wherever possible.
//!
//! ```
//! use physhex::{
//!     find_path, CubeCoordinate, HexConvexPolygon, HexRegularHexagon,
//!     HexShape,
//! };
//!
//! let hexagon = HexRegularHexagon::new(CubeCoordinate::ORIGIN, 2).unwrap();
//! assert_eq!(hexagon.range().count(), 19);
//!
//! let far = HexRegularHexagon::new(CubeCoordinate::from_xy(10, -10), 2).unwrap();
//! let overlap =
//!     HexConvexPolygon::intersection(&[hexagon.polygon(), far.polygon()]);
//! assert!(overlap.is_none());
//!
//! let end = CubeCoordinate::from_xy(3, -1);
//! let path = find_path(CubeCoordinate::ORIGIN, end, |_| true).unwrap();
//! assert_eq!(path.len(), 3);
//! ```
//!
//! The grid itself (which cells exist, what's on them) is up to you. Any
//! operation that needs to know about it takes a predicate. See
//! [crate::hex] for the coordinate systems, and [GridConfig] for describing
//! a finite grid.

mod config;
mod error;
mod geometry;
mod hex;
#[cfg(feature = "svg")]
mod render;
mod traversal;
mod util;

pub use crate::{
    config::GridConfig,
    error::{HexError, HexResult},
    geometry::*,
    hex::*,
    traversal::*,
    util::{hexagon_area, triangle_area},
};

#[cfg(feature = "svg")]
pub use crate::render::{cells_to_svg, CellLayer, Color3};
