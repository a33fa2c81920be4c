use crate::hex::{CoordinateIndexSet, CubeCoordinate};

/// Get every cell reachable from `center` in at most `movement` steps,
/// moving only through cells that pass `exists`. The center itself is always
/// included, even if it doesn't pass `exists`.
///
/// This is a breadth-first expansion, one ring of steps at a time. The
/// returned set is ordered by step count (center first), and each cell shows
/// up once no matter how many routes lead to it.
pub fn flood<F>(
    center: CubeCoordinate,
    movement: u32,
    exists: F,
) -> CoordinateIndexSet
where
    F: Fn(CubeCoordinate) -> bool,
{
    let mut visited = CoordinateIndexSet::default();
    visited.insert(center);

    let mut frontier = vec![center];
    for _ in 0..movement {
        let mut next_frontier = Vec::new();
        for cell in frontier {
            for neighbor in cell.neighbors().iter().copied() {
                // Order matters here: only check exists for unseen cells
                if !visited.contains(&neighbor) && exists(neighbor) {
                    visited.insert(neighbor);
                    next_frontier.push(neighbor);
                }
            }
        }

        if next_frontier.is_empty() {
            break;
        }
        frontier = next_frontier;
    }

    visited
}
