use crate::hex::CubeCoordinate;
use fnv::FnvBuildHasher;
use indexmap::IndexSet;
use std::collections::{HashMap, HashSet};

/// A set of cells
pub type CoordinateSet = HashSet<CubeCoordinate, FnvBuildHasher>;
/// A map of cells to some `T`
pub type CoordinateMap<T> = HashMap<CubeCoordinate, T, FnvBuildHasher>;
/// An ORDERED set of cells, which remembers insertion order. This has some
/// extra memory overhead, so only use it when the ordering actually matters.
pub type CoordinateIndexSet = IndexSet<CubeCoordinate, FnvBuildHasher>;
