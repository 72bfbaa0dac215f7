//! Perfect-maze carving.
//!
//! Randomized depth-first ("growing tree, newest cell") carving on a lattice
//! of cells two steps apart. The grid starts fully walled; carving removes a
//! lattice cell and the wall between it and its parent, so the open cells
//! always form a single tree.

use log::debug;
use rand::Rng;
use waypath_core::{Cell, GridSize, WallSet};

/// Two-step lattice moves, in the order up, down, left, right.
const DIRS: [(i32, i32); 4] = [(-2, 0), (2, 0), (0, -2), (0, 2)];

/// Maze generator owning its random source.
///
/// Seed the source (for example with `SeedableRng::seed_from_u64`) to get
/// reproducible layouts.
pub struct MazeGen<R: Rng> {
    pub rng: R,
}

impl<R: Rng> MazeGen<R> {
    /// Create a new generator drawing from `rng`.
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Carve a maze over `size` and return its walls.
    ///
    /// See [`generate`].
    pub fn generate(&mut self, size: GridSize, start: Cell, target: Cell) -> WallSet {
        generate(size, start, target, &mut self.rng)
    }
}

/// Snap `v` onto the odd lattice inside `[0, len)`, preferring `[1, len - 2]`.
fn snap(v: i32, len: i32) -> i32 {
    (v | 1).min(len - 2).max(1).min(len - 1).max(0)
}

/// Carve a perfect maze over `size` and return the remaining walls.
///
/// Carving begins at `start` snapped to the nearest odd coordinates that
/// leave a border row and column. At each step the newest carved cell looks
/// two cells away in each cardinal direction; one still-walled destination is
/// picked uniformly with `rng`, and both it and the cell in between are
/// opened. A cell with no such destination is dropped from the stack.
///
/// `start` and `target` are opened afterwards even when they are off the
/// lattice, so they are never walls in the result. Out-of-bounds endpoints
/// are ignored.
pub fn generate<R: Rng>(
    size: GridSize,
    start: Cell,
    target: Cell,
    rng: &mut R,
) -> WallSet {
    let mut walls = WallSet::filled(size);
    if size.is_empty() {
        return walls;
    }

    let origin = Cell::new(snap(start.row, size.rows), snap(start.col, size.cols));
    walls.remove(origin);
    let mut stack = vec![origin];
    let mut options: Vec<(Cell, Cell)> = Vec::with_capacity(DIRS.len());

    while let Some(&cur) = stack.last() {
        options.clear();
        for (dr, dc) in DIRS {
            let next = cur.shift(dr, dc);
            if size.contains(next) && walls.contains(next) {
                options.push((next, cur.shift(dr / 2, dc / 2)));
            }
        }

        if options.is_empty() {
            stack.pop();
            continue;
        }

        let (next, between) = options[rng.random_range(0..options.len())];
        walls.remove(between);
        walls.remove(next);
        stack.push(next);
    }

    let carved = size.len() - walls.len();
    walls.remove(start);
    walls.remove(target);

    debug!(
        "maze {size} from {origin}: carved {carved}, {} walls left",
        walls.len()
    );
    walls
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{RngCore, SeedableRng};
    use rand_pcg::Pcg32;
    use std::collections::VecDeque;
    use waypath_paths::search;

    /// Always yields zero, so every choice picks the first option.
    struct FirstChoice;

    impl RngCore for FirstChoice {
        fn next_u32(&mut self) -> u32 {
            0
        }

        fn next_u64(&mut self) -> u64 {
            0
        }

        fn fill_bytes(&mut self, dst: &mut [u8]) {
            dst.fill(0);
        }
    }

    fn open_cells(size: GridSize, walls: &WallSet) -> Vec<Cell> {
        size.cells().filter(|&c| !walls.contains(c)).collect()
    }

    fn edges(size: GridSize, walls: &WallSet) -> usize {
        open_cells(size, walls)
            .into_iter()
            .flat_map(|c| [c.shift(1, 0), c.shift(0, 1)])
            .filter(|&n| size.contains(n) && !walls.contains(n))
            .count()
    }

    fn reachable(size: GridSize, walls: &WallSet, from: Cell) -> usize {
        let mut seen = WallSet::new(size);
        let mut queue = VecDeque::from([from]);
        seen.insert(from);
        while let Some(c) = queue.pop_front() {
            for n in size.neighbors_4(c) {
                if !walls.contains(n) && seen.insert(n) {
                    queue.push_back(n);
                }
            }
        }
        seen.len()
    }

    #[test]
    fn scripted_rng_gives_exact_layout() {
        let size = GridSize::new(5, 5);
        let walls = generate(size, Cell::new(1, 1), Cell::new(3, 3), &mut FirstChoice);
        let open = open_cells(size, &walls);
        let expected: Vec<Cell> = [(1, 1), (1, 3), (2, 1), (2, 3), (3, 1), (3, 2), (3, 3)]
            .into_iter()
            .map(Cell::from)
            .collect();
        assert_eq!(open, expected);
        assert_eq!(walls.len(), 18);
    }

    #[test]
    fn endpoints_stay_open() {
        let size = GridSize::new(11, 11);
        let mut mg = MazeGen::new(Pcg32::seed_from_u64(1));
        let walls = mg.generate(size, Cell::new(1, 1), Cell::new(9, 9));
        assert!(!walls.contains(Cell::new(1, 1)));
        assert!(!walls.contains(Cell::new(9, 9)));
        assert!(!walls.is_empty());
    }

    #[test]
    fn off_lattice_endpoints_are_uncarved() {
        let size = GridSize::new(10, 12);
        let (start, target) = (Cell::new(0, 0), Cell::new(9, 10));
        for seed in 0..10 {
            let walls = generate(size, start, target, &mut Pcg32::seed_from_u64(seed));
            assert!(!walls.contains(start));
            assert!(!walls.contains(target));
            assert!(!walls.is_empty());
        }
    }

    #[test]
    fn carved_region_is_a_spanning_tree() {
        let size = GridSize::new(15, 21);
        for seed in 0..20 {
            let mut rng = Pcg32::seed_from_u64(seed);
            let walls = generate(size, Cell::new(1, 1), Cell::new(13, 19), &mut rng);
            let open = open_cells(size, &walls);
            // Connected, and exactly one fewer edge than nodes: no cycles.
            assert_eq!(reachable(size, &walls, Cell::new(1, 1)), open.len());
            assert_eq!(edges(size, &walls), open.len() - 1);
            // All 7x10 lattice cells plus one connector per tree edge.
            assert_eq!(open.len(), 2 * 7 * 10 - 1);
        }
    }

    #[test]
    fn same_seed_same_maze() {
        let size = GridSize::new(13, 17);
        let a = generate(size, Cell::new(3, 5), Cell::new(11, 15), &mut Pcg32::seed_from_u64(42));
        let b = generate(size, Cell::new(3, 5), Cell::new(11, 15), &mut Pcg32::seed_from_u64(42));
        assert_eq!(a, b);
    }

    #[test]
    fn lattice_endpoints_are_connected() {
        let size = GridSize::new(21, 21);
        let (start, target) = (Cell::new(3, 1), Cell::new(19, 17));
        let walls = generate(size, start, target, &mut Pcg32::seed_from_u64(7));
        let res = search(size, start, target, &walls).unwrap();
        assert!(res.found);
        assert!(res.path_cells(size).iter().all(|&c| !walls.contains(c)));
    }

    #[test]
    fn small_grids_do_not_panic() {
        for (rows, cols) in [(1, 1), (1, 4), (2, 2), (3, 3), (2, 7)] {
            let size = GridSize::new(rows, cols);
            let start = Cell::ZERO;
            let target = Cell::new(rows - 1, cols - 1);
            let walls = generate(size, start, target, &mut FirstChoice);
            assert!(!walls.contains(start));
            assert!(!walls.contains(target));
        }
        let walls = generate(GridSize::new(3, 3), Cell::ZERO, Cell::new(2, 2), &mut FirstChoice);
        assert!(!walls.is_empty());
    }

    #[test]
    fn snap_prefers_inner_odd_coordinates() {
        assert_eq!(snap(0, 11), 1);
        assert_eq!(snap(4, 11), 5);
        assert_eq!(snap(10, 11), 9);
        assert_eq!(snap(9, 10), 8);
        assert_eq!(snap(0, 2), 1);
        assert_eq!(snap(0, 1), 0);
    }
}
