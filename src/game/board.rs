use crate::config::{BOARD_H, BOARD_W};
use crate::game::{Piece, Shape};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    Empty,
    Filled(Shape),
}

impl Cell {
    pub fn is_empty(self) -> bool {
        matches!(self, Cell::Empty)
    }
}

pub type Row = [Cell; BOARD_W];

const EMPTY_ROW: Row = [Cell::Empty; BOARD_W];

/// Fixed 10x20 well. Row 0 is the top.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    rows: Vec<Row>,
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    pub fn new() -> Self {
        Self {
            rows: vec![EMPTY_ROW; BOARD_H],
        }
    }

    pub fn width(&self) -> usize {
        BOARD_W
    }

    pub fn height(&self) -> usize {
        BOARD_H
    }

    pub fn get(&self, x: usize, y: usize) -> Cell {
        self.rows[y][x]
    }

    pub fn set(&mut self, x: usize, y: usize, value: Cell) {
        self.rows[y][x] = value;
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Cell at signed coordinates, `None` when outside the well.
    pub fn cell_at(&self, x: i32, y: i32) -> Option<Cell> {
        let xu = usize::try_from(x).ok()?;
        let yu = usize::try_from(y).ok()?;
        self.rows.get(yu)?.get(xu).copied()
    }

    /// True only if all four blocks of `piece` are in bounds and empty.
    pub fn can_place(&self, piece: &Piece) -> bool {
        piece
            .cells()
            .iter()
            .all(|&(x, y)| self.cell_at(x, y).is_some_and(Cell::is_empty))
    }

    /// Writes the piece into the grid. The piece must satisfy [`Board::can_place`].
    pub(crate) fn stamp(&mut self, piece: &Piece) {
        for (x, y) in piece.cells() {
            if let (Ok(xu), Ok(yu)) = (usize::try_from(x), usize::try_from(y)) {
                if xu < BOARD_W && yu < BOARD_H && self.rows[yu][xu].is_empty() {
                    self.rows[yu][xu] = Cell::Filled(piece.shape);
                }
            }
        }
    }

    pub fn is_row_full(&self, y: usize) -> bool {
        self.rows[y].iter().all(|c| !c.is_empty())
    }

    /// Drops every full row, keeps the rest in order, and refills from the top.
    /// Returns the number of rows removed.
    pub fn clear_full_rows(&mut self) -> usize {
        let before = self.rows.len();
        self.rows.retain(|row| row.iter().any(|c| c.is_empty()));
        let cleared = before - self.rows.len();
        if cleared > 0 {
            let mut rebuilt = vec![EMPTY_ROW; cleared];
            rebuilt.append(&mut self.rows);
            self.rows = rebuilt;
        }
        cleared
    }

    pub fn filled_cells(&self) -> impl Iterator<Item = (usize, usize, Shape)> + '_ {
        self.rows.iter().enumerate().flat_map(|(y, row)| {
            row.iter().enumerate().filter_map(move |(x, cell)| match cell {
                Cell::Filled(shape) => Some((x, y, *shape)),
                Cell::Empty => None,
            })
        })
    }
}
