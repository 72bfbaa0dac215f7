use log::{debug, trace};
use waypath_core::{Board, Cell, CellKey, GridSize, WallMap};

use crate::error::{InvalidInput, SearchError};
use crate::heap::MinHeap;

/// Sentinel distance for cells not (yet) reached.
pub const UNREACHABLE: u32 = u32::MAX;

const NO_PARENT: usize = usize::MAX;

/// Outcome of a [`search`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchResult {
    /// Cells in the order they were settled. Ends with the target when it
    /// was reached.
    pub visited_order: Vec<CellKey>,
    /// Distance from start of each entry in `visited_order`; nondecreasing.
    pub settled_costs: Vec<u32>,
    /// Shortest path from start to target inclusive, or empty.
    pub path: Vec<CellKey>,
    /// Whether `path` is non-empty.
    pub found: bool,
}

impl SearchResult {
    /// The path decoded back to cells.
    pub fn path_cells(&self, size: GridSize) -> Vec<Cell> {
        self.path.iter().map(|&k| size.decode(k)).collect()
    }

    /// The settle order decoded back to cells.
    pub fn visited_cells(&self, size: GridSize) -> Vec<Cell> {
        self.visited_order.iter().map(|&k| size.decode(k)).collect()
    }

    /// Distance at which `key` was settled, if it was.
    pub fn cost_of(&self, key: CellKey) -> Option<u32> {
        self.visited_order
            .iter()
            .position(|&k| k == key)
            .map(|i| self.settled_costs[i])
    }

    /// Number of steps along the path, or `None` if no path was found.
    pub fn path_cost(&self) -> Option<usize> {
        self.path.len().checked_sub(1)
    }
}

fn validate<W: WallMap + ?Sized>(
    size: GridSize,
    start: Cell,
    target: Cell,
    walls: &W,
) -> Result<(), InvalidInput> {
    if !size.is_valid() {
        return Err(InvalidInput::EmptyGrid(size));
    }
    if !size.contains(start) {
        return Err(InvalidInput::StartOutOfBounds(start));
    }
    if !size.contains(target) {
        return Err(InvalidInput::TargetOutOfBounds(target));
    }
    if walls.is_wall(start) {
        return Err(InvalidInput::StartIsWall(start));
    }
    if walls.is_wall(target) {
        return Err(InvalidInput::TargetIsWall(target));
    }
    Ok(())
}

/// Find a shortest 4-connected path from `start` to `target`.
///
/// Every step costs 1. Cells for which `walls` reports a wall are never
/// entered. The search stops as soon as the target is settled, so
/// `visited_order` only covers cells no farther than the target.
///
/// All bookkeeping (distances, predecessors, settled flags) lives in flat
/// vectors indexed by [`CellKey`] and is dropped on return. Equal-distance
/// frontier cells are settled in the order they were discovered, so
/// repeated calls with the same input return identical results.
///
/// # Errors
///
/// [`SearchError::InvalidInput`] if the grid is empty, an endpoint is out of
/// bounds, or an endpoint is a wall. An unreachable target is not an error:
/// the result has `found == false` and an empty path.
pub fn search<W: WallMap + ?Sized>(
    size: GridSize,
    start: Cell,
    target: Cell,
    walls: &W,
) -> Result<SearchResult, SearchError> {
    validate(size, start, target, walls)?;

    let len = size.len();
    let mut dist = vec![UNREACHABLE; len];
    let mut parent = vec![NO_PARENT; len];
    let mut settled = vec![false; len];

    let start_key = size.encode(start);
    let target_key = size.encode(target);

    let mut result = SearchResult::default();
    let mut open: MinHeap<CellKey> = MinHeap::new();
    let mut stale = 0usize;

    dist[start_key.index()] = 0;
    open.push(0, start_key);

    let found = 'search: loop {
        let Some((current_dist, current)) = open.pop_min() else {
            break 'search false;
        };
        let ci = current.index();

        // Superseded by a cheaper entry that was already settled.
        if settled[ci] {
            stale += 1;
            trace!("skipping stale entry {current} at {current_dist}");
            continue;
        }
        settled[ci] = true;
        result.visited_order.push(current);
        result.settled_costs.push(current_dist);

        if current == target_key {
            break 'search true;
        }

        let candidate = current_dist + 1;
        for np in size.neighbors_4(size.decode(current)) {
            if walls.is_wall(np) {
                continue;
            }
            let ni = size.encode(np);
            if candidate < dist[ni.index()] {
                dist[ni.index()] = candidate;
                parent[ni.index()] = ci;
                open.push(candidate, ni);
            }
        }
    };

    if found {
        let mut ci = target_key.index();
        while ci != NO_PARENT {
            result.path.push(CellKey(ci));
            ci = parent[ci];
        }
        result.path.reverse();
    }
    result.found = !result.path.is_empty();

    debug!(
        "search {start} -> {target} on {size}: settled {}, stale {stale}, path {}",
        result.visited_order.len(),
        result.path.len()
    );
    Ok(result)
}

/// Run [`search`] between a board's endpoints, treating its walls as blocked.
pub fn search_board(board: &Board) -> Result<SearchResult, SearchError> {
    search(board.size(), board.start(), board.target(), board)
}
