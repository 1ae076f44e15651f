//! Core domain types for 4x4x4 tic-tac-toe.

use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use strum::EnumIter;

/// Edge length of the cube.
pub const SIZE: usize = 4;

/// One of the two player identities.
///
/// Serialized as its numeric id (`0` or `1`).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, EnumIter,
)]
#[serde(into = "u8", try_from = "u8")]
pub enum Slot {
    /// Slot 0, moves first.
    First,
    /// Slot 1.
    Second,
}

impl Slot {
    /// Returns the numeric slot id.
    pub fn id(self) -> u8 {
        match self {
            Slot::First => 0,
            Slot::Second => 1,
        }
    }

    /// Looks up a slot by numeric id.
    pub fn from_id(id: i64) -> Option<Self> {
        match id {
            0 => Some(Slot::First),
            1 => Some(Slot::Second),
            _ => None,
        }
    }

    /// Returns the other slot.
    pub fn other(self) -> Self {
        match self {
            Slot::First => Slot::Second,
            Slot::Second => Slot::First,
        }
    }
}

impl std::fmt::Display for Slot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.id())
    }
}

impl From<Slot> for u8 {
    fn from(slot: Slot) -> Self {
        slot.id()
    }
}

/// Numeric value that names no slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
#[display("Unknown slot id {}", _0)]
pub struct UnknownSlot(#[error(not(source))] pub i64);

impl TryFrom<u8> for Slot {
    type Error = UnknownSlot;

    fn try_from(id: u8) -> Result<Self, Self::Error> {
        Slot::from_id(i64::from(id)).ok_or(UnknownSlot(i64::from(id)))
    }
}

/// A cell of the cube.
///
/// Serialized as `0` (empty), `-1` (slot 0's mark) or `1` (slot 1's mark).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(into = "i8", try_from = "i8")]
pub enum Cell {
    /// Nobody has played here.
    #[default]
    Empty,
    /// Marked by a slot.
    Occupied(Slot),
}

impl Cell {
    /// Returns the slot owning this cell, if any.
    pub fn owner(self) -> Option<Slot> {
        match self {
            Cell::Empty => None,
            Cell::Occupied(slot) => Some(slot),
        }
    }
}

impl From<Cell> for i8 {
    fn from(cell: Cell) -> Self {
        match cell {
            Cell::Empty => 0,
            Cell::Occupied(Slot::First) => -1,
            Cell::Occupied(Slot::Second) => 1,
        }
    }
}

/// Encoded value that is not a cell mark.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
#[display("Invalid cell value {}", _0)]
pub struct InvalidCell(#[error(not(source))] pub i8);

impl TryFrom<i8> for Cell {
    type Error = InvalidCell;

    fn try_from(value: i8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Cell::Empty),
            -1 => Ok(Cell::Occupied(Slot::First)),
            1 => Ok(Cell::Occupied(Slot::Second)),
            other => Err(InvalidCell(other)),
        }
    }
}

/// In-bounds cube coordinate, ordered `(z, y, x)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coord {
    z: usize,
    y: usize,
    x: usize,
}

impl Coord {
    /// Creates a coordinate, or `None` if any component is outside `[0, 4)`.
    pub fn new(z: usize, y: usize, x: usize) -> Option<Self> {
        (z < SIZE && y < SIZE && x < SIZE).then_some(Self { z, y, x })
    }

    /// Creates a coordinate from signed components, as they arrive from callers.
    pub fn from_signed(z: i64, y: i64, x: i64) -> Option<Self> {
        let z = usize::try_from(z).ok()?;
        let y = usize::try_from(y).ok()?;
        let x = usize::try_from(x).ok()?;
        Self::new(z, y, x)
    }

    /// Builds a coordinate the caller already knows is in bounds.
    pub(crate) const fn at(z: usize, y: usize, x: usize) -> Self {
        Self { z, y, x }
    }

    /// Layer index.
    pub fn z(self) -> usize {
        self.z
    }

    /// Row index within the layer.
    pub fn y(self) -> usize {
        self.y
    }

    /// Column index within the row.
    pub fn x(self) -> usize {
        self.x
    }

    /// Iterates every coordinate of the cube in `(z, y, x)` order.
    pub fn all() -> impl Iterator<Item = Coord> {
        (0..SIZE).flat_map(|z| {
            (0..SIZE).flat_map(move |y| (0..SIZE).map(move |x| Coord::at(z, y, x)))
        })
    }
}

impl std::fmt::Display for Coord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {}, {})", self.z, self.y, self.x)
    }
}

/// The 4x4x4 cube, indexed `[z][y][x]`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Board {
    cells: [[[Cell; SIZE]; SIZE]; SIZE],
}

impl Board {
    /// Creates an all-empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the cell at `coord`.
    pub fn get(&self, coord: Coord) -> Cell {
        self.cells[coord.z][coord.y][coord.x]
    }

    /// Overwrites the cell at `coord`.
    pub fn set(&mut self, coord: Coord, cell: Cell) {
        self.cells[coord.z][coord.y][coord.x] = cell;
    }

    /// Checks if the cell at `coord` is empty.
    pub fn is_empty(&self, coord: Coord) -> bool {
        self.get(coord) == Cell::Empty
    }

    /// Checks if every cell is marked.
    pub fn is_full(&self) -> bool {
        Coord::all().all(|coord| !self.is_empty(coord))
    }

    /// Number of cells carrying a mark.
    pub fn occupied(&self) -> usize {
        Coord::all().filter(|coord| !self.is_empty(*coord)).count()
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (z, layer) in self.cells.iter().enumerate() {
            if z > 0 {
                writeln!(f)?;
            }
            writeln!(f, "z={}", z)?;
            for row in layer {
                let line: String = row
                    .iter()
                    .map(|cell| match cell {
                        Cell::Empty => '.',
                        Cell::Occupied(Slot::First) => 'X',
                        Cell::Occupied(Slot::Second) => 'O',
                    })
                    .collect();
                writeln!(f, "{}", line)?;
            }
        }
        Ok(())
    }
}
