//! Enumeration of the winning lines of the cube.

use crate::types::{Coord, SIZE};

/// Four cells that win when uniformly marked.
pub type Line = [Coord; SIZE];

/// Number of winning lines in a 4x4x4 cube.
///
/// 48 axis-aligned lines, 24 planar diagonals and 4 space diagonals.
pub const LINE_COUNT: usize = 76;

const LAST: usize = SIZE - 1;

fn line(cell: impl Fn(usize) -> (usize, usize, usize)) -> Line {
    std::array::from_fn(|i| {
        let (z, y, x) = cell(i);
        Coord::at(z, y, x)
    })
}

/// Lists every winning line of the cube, each exactly once.
pub fn winning_lines() -> Vec<Line> {
    let mut lines = Vec::with_capacity(LINE_COUNT);

    // Axis-aligned: one line per axis for every fixed pair of the other two.
    for a in 0..SIZE {
        for b in 0..SIZE {
            lines.push(line(|i| (a, b, i)));
            lines.push(line(|i| (a, i, b)));
            lines.push(line(|i| (i, a, b)));
        }
    }

    // Two diagonals in every layer, for layers along each axis.
    for layer in 0..SIZE {
        lines.push(line(|i| (layer, i, i)));
        lines.push(line(|i| (layer, i, LAST - i)));
        lines.push(line(|i| (i, i, layer)));
        lines.push(line(|i| (i, LAST - i, layer)));
        lines.push(line(|i| (i, layer, i)));
        lines.push(line(|i| (i, layer, LAST - i)));
    }

    // Corner to opposite corner.
    lines.push(line(|i| (i, i, i)));
    lines.push(line(|i| (i, i, LAST - i)));
    lines.push(line(|i| (i, LAST - i, i)));
    lines.push(line(|i| (LAST - i, i, i)));

    lines
}
