//! Frontier strategies for the A* solver.
//!
//! Both strategies tolerate duplicate entries and prune cells that were
//! already expanded only when they reach the front (lazy deletion).

use std::cmp::Ordering;
use std::collections::{BinaryHeap, VecDeque};

use crate::grid::SearchState;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Selects the open set implementation used by a solve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum OpenSetKind {
    /// List stably re-sorted by current f-cost before every pop.
    #[default]
    SortedList,
    /// Min-heap keyed on the f-cost at insertion time.
    BinaryHeap,
}

/// A collection of discovered cells awaiting expansion.
pub trait OpenSet {
    /// Appends `cell` with its current f-cost. Duplicates are allowed.
    fn push(&mut self, cell: usize, estimated_total_cost: f32);

    /// Removes and returns the unvisited entry with the lowest f-cost,
    /// discarding visited entries found on the way.
    fn pop_unvisited(&mut self, state: &SearchState) -> Option<usize>;

    /// Number of entries currently held, duplicates included.
    fn len(&self) -> usize;

    /// Returns true if the open set holds no entries.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Creates an empty open set of the requested kind.
pub fn new_open_set(kind: OpenSetKind) -> Box<dyn OpenSet> {
    match kind {
        OpenSetKind::SortedList => Box::new(SortedList::default()),
        OpenSetKind::BinaryHeap => Box::new(HeapOpenSet::default()),
    }
}

/// Open set that sorts on the live f-cost of each entry.
///
/// Ties keep their relative order, so among equal costs the earliest
/// inserted entry is expanded first.
#[derive(Debug, Default)]
pub struct SortedList {
    entries: VecDeque<usize>,
}

impl OpenSet for SortedList {
    fn push(&mut self, cell: usize, _estimated_total_cost: f32) {
        self.entries.push_back(cell);
    }

    fn pop_unvisited(&mut self, state: &SearchState) -> Option<usize> {
        // `sort_by` on a slice is stable.
        self.entries.make_contiguous().sort_by(|a, b| {
            state
                .get(*a)
                .estimated_total_cost
                .total_cmp(&state.get(*b).estimated_total_cost)
        });
        while let Some(&front) = self.entries.front() {
            if !state.get(front).visited {
                break;
            }
            self.entries.pop_front();
        }
        self.entries.pop_front()
    }

    fn len(&self) -> usize {
        self.entries.len()
    }
}

#[derive(Debug, Clone, Copy)]
struct HeapEntry {
    cost: f32,
    seq: u64,
    cell: usize,
}

impl PartialEq for HeapEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for HeapEntry {}

impl Ord for HeapEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed for min-heap behavior; lower sequence wins ties.
        other
            .cost
            .total_cmp(&self.cost)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for HeapEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Binary-heap open set.
///
/// An entry keeps the f-cost it was pushed with. A cell relaxed later gets a
/// fresh, cheaper entry that surfaces first; the stale one is pruned once the
/// cell is visited.
#[derive(Debug, Default)]
pub struct HeapOpenSet {
    heap: BinaryHeap<HeapEntry>,
    next_seq: u64,
}

impl OpenSet for HeapOpenSet {
    fn push(&mut self, cell: usize, estimated_total_cost: f32) {
        self.heap.push(HeapEntry {
            cost: estimated_total_cost,
            seq: self.next_seq,
            cell,
        });
        self.next_seq += 1;
    }

    fn pop_unvisited(&mut self, state: &SearchState) -> Option<usize> {
        while let Some(entry) = self.heap.pop() {
            if !state.get(entry.cell).visited {
                return Some(entry.cell);
            }
        }
        None
    }

    fn len(&self) -> usize {
        self.heap.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::Grid;

    fn state_with_costs(costs: &[f32]) -> Grid {
        let side = (costs.len() as f64).sqrt() as usize;
        let mut grid = Grid::new(side, side).unwrap();
        for (i, &c) in costs.iter().enumerate() {
            grid.search_state_mut().get_mut(i).estimated_total_cost = c;
        }
        grid
    }

    #[test]
    fn test_sorted_list_pops_lowest_live_cost() {
        let mut grid = state_with_costs(&[5.0, 1.0, 3.0, 2.0]);
        let mut open = SortedList::default();
        for cell in 0..4 {
            open.push(cell, 0.0);
        }
        // Live costs are read at pop time, so a later change reorders entries.
        grid.search_state_mut().get_mut(0).estimated_total_cost = 0.5;

        let state = grid.search_state();
        assert_eq!(open.pop_unvisited(state), Some(0));
        assert_eq!(open.pop_unvisited(state), Some(1));
        assert_eq!(open.len(), 2);
    }

    #[test]
    fn test_sorted_list_prunes_visited_duplicates() {
        let mut grid = state_with_costs(&[1.0, 2.0, 3.0, 4.0]);
        let mut open = SortedList::default();
        open.push(0, 0.0);
        open.push(0, 0.0);
        open.push(2, 0.0);
        grid.search_state_mut().get_mut(0).visited = true;

        assert_eq!(open.pop_unvisited(grid.search_state()), Some(2));
        assert!(open.is_empty(), "Visited duplicates should be discarded");
        assert_eq!(open.pop_unvisited(grid.search_state()), None);
    }

    #[test]
    fn test_sorted_list_ties_keep_insertion_order() {
        let grid = state_with_costs(&[1.0, 1.0, 1.0, 1.0]);
        let mut open = SortedList::default();
        for cell in [3, 1, 2] {
            open.push(cell, 0.0);
        }
        let state = grid.search_state();
        assert_eq!(open.pop_unvisited(state), Some(3));
        assert_eq!(open.pop_unvisited(state), Some(1));
        assert_eq!(open.pop_unvisited(state), Some(2));
    }

    #[test]
    fn test_heap_orders_by_pushed_cost_then_sequence() {
        let grid = state_with_costs(&[0.0; 4]);
        let mut open = HeapOpenSet::default();
        open.push(1, 2.0);
        open.push(2, 1.0);
        open.push(3, 1.0);
        open.push(0, 0.5);

        let state = grid.search_state();
        assert_eq!(open.pop_unvisited(state), Some(0));
        assert_eq!(open.pop_unvisited(state), Some(2));
        assert_eq!(open.pop_unvisited(state), Some(3));
        assert_eq!(open.pop_unvisited(state), Some(1));
        assert_eq!(open.pop_unvisited(state), None);
    }

    #[test]
    fn test_heap_skips_visited_entries() {
        let mut grid = state_with_costs(&[0.0; 4]);
        let mut open = new_open_set(OpenSetKind::BinaryHeap);
        open.push(1, 1.0);
        open.push(1, 3.0);
        open.push(2, 2.0);
        grid.search_state_mut().get_mut(1).visited = true;

        assert_eq!(open.pop_unvisited(grid.search_state()), Some(2));
        assert_eq!(open.pop_unvisited(grid.search_state()), None);
        assert!(open.is_empty());
    }
}
