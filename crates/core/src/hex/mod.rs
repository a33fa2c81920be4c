//! This module holds the basic types of a hexagon grid: coordinates,
//! directions and the mapping to and from continuous space.
//!
//! ## Coordinate Systems
//!
//! PhysHex uses three different coordinate systems. Each one has conversions
//! to the others, but cube coordinates are the canonical one: everything in
//! [crate::geometry] and [crate::traversal] is written in terms of them.
//!
//! ### Cube Coordinates
//!
//! This is the [cube coordinate system defined by Amit Patel](https://www.redblobgames.com/grids/hexagons/#coordinates-cube).
//! Each cell has three integer components (`x`, `y`, and `z`) and **for every
//! cell, `x + y + z = 0`.** A hex grid only has two dimensions, but using
//! three makes the math much simpler: distance, rotation, reflection and line
//! drawing all become symmetric in the three axes.
//!
//! A line of constant `x` (or `y`, or `z`) is a straight row of cells. That
//! gives each axis a pair of opposite edge directions, and it's also why the
//! only polygons we can describe with half-planes are ones whose edges run
//! along those three directions.
//!
//! ### Offset Coordinates
//!
//! A `(col, row)` pair, as you would use to index a rectangular grid stored in
//! memory. Pointy grids are laid out in rows and every other row is pushed
//! half a cell to the east; flat grids are laid out in columns and every other
//! column is pushed half a cell to the north. [OffsetType] picks whether the
//! odd or the even lines get pushed. Offset coordinates only make sense
//! together with an [Orientation] and an [OffsetType].
//!
//! ### World Positions
//!
//! Continuous 2D points, used for rendering and for hit-testing (i.e. which
//! cell did the user click on?). In the following diagram, `o` is the center
//! of the cell `(0, 0, 0)` with odd offsets. With even offsets, the origin
//! cell sits half a cell over (see [HexLayout::to_position]).
//!
//! +-------------------+
//! |        +y         |
//! |         ^         |
//! |         |         |
//! | -x <----o----> +x |
//! |         |         |
//! |         v         |
//! |        -y         |
//! +-------------------+
//!
//! Note that positive y is **up**, like a math textbook and unlike most
//! screen APIs. Renderers need to flip it.

mod collections;
mod coordinate;
mod direction;
mod layout;
mod wrap;

pub use collections::*;
pub use coordinate::*;
pub use direction::*;
pub use layout::*;
pub use wrap::*;
