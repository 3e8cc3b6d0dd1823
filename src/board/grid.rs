//! Square grid with one stone value per cell

use super::{Pos, Stone};

/// Game board: an N×N grid of cells.
///
/// The size is fixed at construction. Cells are stored row-major;
/// every accessor takes a [`Pos`] that must be in bounds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    size: usize,
    cells: Vec<Stone>,
}

impl Board {
    /// Create an empty board of the given size.
    #[must_use]
    pub fn new(size: usize) -> Self {
        assert!(size > 0, "board size must be positive");
        Self {
            size,
            cells: vec![Stone::Empty; size * size],
        }
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Center cell, used for opening moves and centrality bonuses
    #[inline]
    pub fn center(&self) -> Pos {
        Pos::new(self.size / 2, self.size / 2)
    }

    /// Get stone at position
    #[inline]
    pub fn get(&self, pos: Pos) -> Stone {
        self.cells[pos.row * self.size + pos.col]
    }

    /// Check if position is empty
    #[inline]
    pub fn is_empty_at(&self, pos: Pos) -> bool {
        self.get(pos) == Stone::Empty
    }

    /// Place a stone. The cell must be empty.
    #[inline]
    pub fn place_stone(&mut self, pos: Pos, stone: Stone) {
        debug_assert!(self.is_empty_at(pos), "cell already occupied");
        self.cells[pos.row * self.size + pos.col] = stone;
    }

    /// Remove a stone (search undo)
    #[inline]
    pub fn remove_stone(&mut self, pos: Pos) {
        self.cells[pos.row * self.size + pos.col] = Stone::Empty;
    }

    /// Check signed coordinates against the bounds, for directional scans
    #[inline]
    pub fn in_bounds(&self, row: i32, col: i32) -> bool {
        row >= 0 && row < self.size as i32 && col >= 0 && col < self.size as i32
    }

    /// Total stones on board
    pub fn stone_count(&self) -> usize {
        self.cells.iter().filter(|&&c| c != Stone::Empty).count()
    }

    /// Check if board has no stones at all
    pub fn is_board_empty(&self) -> bool {
        self.cells.iter().all(|&c| c == Stone::Empty)
    }

    /// True iff no empty cell remains
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|&c| c != Stone::Empty)
    }

    /// All positions in raster order (row by row, column by column)
    pub fn positions(&self) -> impl Iterator<Item = Pos> + '_ {
        let size = self.size;
        (0..size).flat_map(move |row| (0..size).map(move |col| Pos::new(row, col)))
    }

    /// Empty cells in raster order
    pub fn empty_cells(&self) -> impl Iterator<Item = Pos> + '_ {
        self.positions().filter(move |&p| self.is_empty_at(p))
    }

    /// Occupied cells with their owners, in raster order
    pub fn occupied_cells(&self) -> impl Iterator<Item = (Pos, Stone)> + '_ {
        self.positions()
            .map(move |p| (p, self.get(p)))
            .filter(|&(_, s)| s != Stone::Empty)
    }

    /// Canonical serialization of the full board contents.
    ///
    /// Used as the whole-position key of the evaluation cache.
    pub fn key(&self) -> String {
        self.cells.iter().map(|c| c.as_char()).collect()
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in 0..self.size {
            for col in 0..self.size {
                write!(f, "{} ", self.get(Pos::new(row, col)))?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
