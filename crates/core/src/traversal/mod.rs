//! Algorithms that walk over the grid: rings and spirals around a cell,
//! flood fill, line of sight and shortest paths.
//!
//! None of these know anything about what's actually on the grid. Instead,
//! each one takes an `exists` predicate that says whether a cell can be
//! visited (or seen through). For anything big, back that predicate with a
//! [crate::hex::CoordinateSet] or a map lookup so each call stays cheap.
//! Predicates are called many times, with no caching in between.

mod flood;
mod path;
mod ring;
mod visibility;

pub use flood::*;
pub use path::*;
pub use ring::*;
pub use visibility::*;
