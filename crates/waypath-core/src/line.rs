//! Integer line rasterization.

use crate::geom::Cell;

/// Every cell on the discrete line from `from` to `to`, both inclusive.
///
/// Uses an integer error accumulator (Bresenham), so consecutive cells are
/// 8-connected and the result has `max(|Δrow|, |Δcol|) + 1` cells. The line is
/// always traced from the smaller endpoint, which makes
/// `rasterize(b, a)` the exact reverse of `rasterize(a, b)`.
pub fn rasterize(from: Cell, to: Cell) -> Vec<Cell> {
    if to < from {
        let mut cells = trace(to, from);
        cells.reverse();
        cells
    } else {
        trace(from, to)
    }
}

fn trace(from: Cell, to: Cell) -> Vec<Cell> {
    let d_row = (to.row - from.row).abs();
    let d_col = -(to.col - from.col).abs();
    let s_row = if from.row < to.row { 1 } else { -1 };
    let s_col = if from.col < to.col { 1 } else { -1 };
    let mut err = d_row + d_col;

    let mut cells = Vec::with_capacity(d_row.max(-d_col) as usize + 1);
    let mut cur = from;
    loop {
        cells.push(cur);
        if cur == to {
            break;
        }
        let e2 = 2 * err;
        if e2 >= d_col {
            err += d_col;
            cur.row += s_row;
        }
        if e2 <= d_row {
            err += d_row;
            cur.col += s_col;
        }
    }
    cells
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chebyshev(a: Cell, b: Cell) -> i32 {
        (a.row - b.row).abs().max((a.col - b.col).abs())
    }

    #[test]
    fn diagonal() {
        let line = rasterize(Cell::new(0, 0), Cell::new(3, 3));
        assert_eq!(line.len(), 4);
        assert!(line.contains(&Cell::new(1, 1)));
        assert!(line.contains(&Cell::new(2, 2)));
        assert_eq!(line[0], Cell::new(0, 0));
        assert_eq!(line[3], Cell::new(3, 3));
    }

    #[test]
    fn reversed_diagonal_is_exact_reverse() {
        let fwd = rasterize(Cell::new(0, 0), Cell::new(3, 3));
        let mut back = rasterize(Cell::new(3, 3), Cell::new(0, 0));
        back.reverse();
        assert_eq!(fwd, back);
    }

    #[test]
    fn single_cell() {
        assert_eq!(rasterize(Cell::new(4, 2), Cell::new(4, 2)), vec![Cell::new(4, 2)]);
    }

    #[test]
    fn horizontal_and_vertical() {
        let h = rasterize(Cell::new(2, 5), Cell::new(2, 1));
        assert_eq!(
            h,
            vec![
                Cell::new(2, 5),
                Cell::new(2, 4),
                Cell::new(2, 3),
                Cell::new(2, 2),
                Cell::new(2, 1)
            ]
        );
        let v = rasterize(Cell::new(0, 3), Cell::new(2, 3));
        assert_eq!(v, vec![Cell::new(0, 3), Cell::new(1, 3), Cell::new(2, 3)]);
    }

    #[test]
    fn shallow_and_steep_lines_are_connected() {
        let ends = [
            (Cell::new(0, 0), Cell::new(2, 7)),
            (Cell::new(5, 1), Cell::new(0, 3)),
            (Cell::new(3, 9), Cell::new(8, 0)),
            (Cell::new(-2, 4), Cell::new(6, 5)),
        ];
        for (a, b) in ends {
            for (from, to) in [(a, b), (b, a)] {
                let line = rasterize(from, to);
                assert_eq!(line.first(), Some(&from));
                assert_eq!(line.last(), Some(&to));
                assert_eq!(line.len() as i32, chebyshev(from, to) + 1);
                for w in line.windows(2) {
                    assert_eq!(chebyshev(w[0], w[1]), 1, "gap in {from} -> {to}");
                }
            }
            let mut back = rasterize(b, a);
            back.reverse();
            assert_eq!(rasterize(a, b), back);
        }
    }
}
