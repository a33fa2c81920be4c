use crate::hex::{CoordinateMap, CubeCoordinate};
use log::{debug, trace};
use std::{
    cmp::{Ordering, Reverse},
    collections::BinaryHeap,
};

/// A min-priority queue. Items with equal priority come out in the order
/// they went in, so searches built on this are deterministic.
#[derive(Clone, Debug)]
pub struct PriorityQueue<T> {
    heap: BinaryHeap<QueueEntry<T>>,
    /// Incremented on every push, to break ties by insertion order
    sequence: u64,
}

#[derive(Clone, Debug)]
struct QueueEntry<T> {
    priority: u32,
    sequence: u64,
    item: T,
}

impl<T> QueueEntry<T> {
    /// [BinaryHeap] is a max-heap, so flip the ordering to pop the lowest
    /// priority (and then the oldest entry) first
    fn key(&self) -> Reverse<(u32, u64)> {
        Reverse((self.priority, self.sequence))
    }
}

impl<T> PartialEq for QueueEntry<T> {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl<T> Eq for QueueEntry<T> {}

impl<T> Ord for QueueEntry<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key().cmp(&other.key())
    }
}

impl<T> PartialOrd for QueueEntry<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T> PriorityQueue<T> {
    pub fn new() -> Self {
        Self {
            heap: BinaryHeap::new(),
            sequence: 0,
        }
    }

    pub fn push(&mut self, item: T, priority: u32) {
        self.heap.push(QueueEntry {
            priority,
            sequence: self.sequence,
            item,
        });
        self.sequence += 1;
    }

    /// Remove the item with the lowest priority
    pub fn pop(&mut self) -> Option<T> {
        self.heap.pop().map(|entry| entry.item)
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }
}

impl<T> Default for PriorityQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Find the shortest path from `start` to `end` with A*. `neighbors` lists
/// the cells reachable in one move from a cell, `cost` is the price of one
/// move between two adjacent cells, and `heuristic` estimates the remaining
/// cost from a cell to `end` (it must never overestimate, or the path may not
/// be the shortest). Cells that fail `exists` are never entered.
///
/// The path **excludes** `start` and **includes** `end`, so a path to
/// yourself is empty. Returns `None` if `end` can't be reached.
pub fn find_path_with<N, I, C, H, F>(
    start: CubeCoordinate,
    end: CubeCoordinate,
    neighbors: N,
    cost: C,
    heuristic: H,
    exists: F,
) -> Option<Vec<CubeCoordinate>>
where
    N: Fn(CubeCoordinate) -> I,
    I: IntoIterator<Item = CubeCoordinate>,
    C: Fn(CubeCoordinate, CubeCoordinate) -> u32,
    H: Fn(CubeCoordinate, CubeCoordinate) -> u32,
    F: Fn(CubeCoordinate) -> bool,
{
    let mut frontier = PriorityQueue::new();
    let mut came_from: CoordinateMap<CubeCoordinate> = CoordinateMap::default();
    let mut cost_so_far: CoordinateMap<u32> = CoordinateMap::default();
    frontier.push(start, 0);
    cost_so_far.insert(start, 0);

    let mut expanded = 0usize;
    let mut found = false;
    while let Some(current) = frontier.pop() {
        if current == end {
            found = true;
            break;
        }
        expanded += 1;

        let current_cost = cost_so_far[&current];
        for next in neighbors(current) {
            if !exists(next) {
                continue;
            }
            let new_cost = current_cost + cost(current, next);
            let is_better = cost_so_far
                .get(&next)
                .map_or(true, |&old_cost| new_cost < old_cost);
            if is_better {
                cost_so_far.insert(next, new_cost);
                came_from.insert(next, current);
                frontier.push(next, new_cost + heuristic(next, end));
            }
        }
    }
    trace!("A* from {} to {} expanded {} cells", start, end, expanded);

    if !found {
        debug!("No path from {} to {}", start, end);
        return None;
    }
    let path = reconstruct_path(&came_from, start, end);
    debug!(
        "Found path from {} to {} with {} steps",
        start,
        end,
        path.len()
    );
    Some(path)
}

/// Find the shortest path from `start` to `end` through cells that pass
/// `exists`, where every move to an adjacent cell costs 1. See
/// [find_path_with] for the shape of the result.
pub fn find_path<F>(
    start: CubeCoordinate,
    end: CubeCoordinate,
    exists: F,
) -> Option<Vec<CubeCoordinate>>
where
    F: Fn(CubeCoordinate) -> bool,
{
    find_path_with(
        start,
        end,
        CubeCoordinate::neighbors,
        |_, _| 1,
        CubeCoordinate::distance,
        exists,
    )
}

/// Walk back from `end` to `start`, leaving `start` off the path
fn reconstruct_path(
    came_from: &CoordinateMap<CubeCoordinate>,
    start: CubeCoordinate,
    end: CubeCoordinate,
) -> Vec<CubeCoordinate> {
    let mut path = Vec::new();
    let mut current = end;
    while current != start {
        path.push(current);
        match came_from.get(&current) {
            Some(&previous) => current = previous,
            None => break,
        }
    }
    path.reverse();
    path
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hex::CoordinateSet;

    #[test]
    fn test_priority_queue() {
        let mut queue = PriorityQueue::new();
        assert!(queue.is_empty());
        queue.push("c", 3);
        queue.push("a1", 1);
        queue.push("b", 2);
        queue.push("a2", 1);
        queue.push("a3", 1);
        assert_eq!(queue.len(), 5);

        let order: Vec<_> = std::iter::from_fn(|| queue.pop()).collect();
        assert_eq!(order, vec!["a1", "a2", "a3", "b", "c"]);
        assert!(queue.is_empty());
    }

    #[test]
    fn test_find_path_straight() {
        let start = CubeCoordinate::ORIGIN;
        let end = CubeCoordinate::from_xy(3, -3);
        let path = find_path(start, end, |_| true).unwrap();
        assert_eq!(path.len(), 3);
        assert_eq!(path.last(), Some(&end));
        assert!(!path.contains(&start));

        // Every step is one move
        let mut previous = start;
        for cell in &path {
            assert_eq!(previous.distance(*cell), 1);
            previous = *cell;
        }
    }

    #[test]
    fn test_find_path_to_self() {
        let start = CubeCoordinate::from_xy(2, 5);
        assert_eq!(find_path(start, start, |_| true), Some(vec![]));
    }

    #[test]
    fn test_find_path_around_wall() {
        // Wall along x=1 with a gap at y=2
        let gap = CubeCoordinate::from_xy(1, 2);
        let wall: CoordinateSet = (-5..=5)
            .map(|y| CubeCoordinate::from_xy(1, y))
            .filter(|c| *c != gap)
            .collect();
        let end = CubeCoordinate::from_xy(2, 0);
        let path =
            find_path(CubeCoordinate::ORIGIN, end, |c| !wall.contains(&c))
                .unwrap();
        assert_eq!(path.len(), 5);
        assert!(path.contains(&gap));
        assert!(path.iter().all(|c| !wall.contains(c)));
    }

    #[test]
    fn test_find_path_unreachable() {
        let end = CubeCoordinate::from_xy(4, -1);
        let walls: CoordinateSet = end.neighbors().iter().copied().collect();
        // Bounded, otherwise the search would run off forever
        assert_eq!(
            find_path(CubeCoordinate::ORIGIN, end, |c| {
                c.magnitude() <= 8 && !walls.contains(&c)
            }),
            None
        );
    }

    #[test]
    fn test_find_path_with_costs() {
        // Moving into positive-x cells is expensive, so go around them
        let start = CubeCoordinate::from_xy(-2, 0);
        let end = CubeCoordinate::from_xy(2, -2);
        let bounded = |c: CubeCoordinate| c.magnitude() <= 4;
        let path = find_path_with(
            start,
            end,
            CubeCoordinate::neighbors,
            |_, next| if next.x() == 0 && next.y() > -2 { 10 } else { 1 },
            CubeCoordinate::distance,
            bounded,
        )
        .unwrap();
        assert_eq!(path.last(), Some(&end));
        assert!(path.iter().all(|c| !(c.x() == 0 && c.y() > -2)));
    }
}
