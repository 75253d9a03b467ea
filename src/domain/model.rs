use serde::{Deserialize, Serialize};

/// Boards are always square, 5 cells per side.
pub const GRID_SIZE: usize = 5;

/// Total cells on a board, including the free space.
pub const CELLS_PER_BOARD: usize = GRID_SIZE * GRID_SIZE;

/// Distinct phrases needed to fill a board around the free space.
pub const PHRASES_PER_BOARD: usize = CELLS_PER_BOARD - 1;

/// Sentinel occupying the center cell of every board.
pub const FREE_SPACE: &str = "FREE SPACE";

/// One 5x5 bingo board, stored row-major.
///
/// Invariant (upheld by the generator): the 24 non-center cells are
/// distinct phrases and the center cell is [`FREE_SPACE`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Board {
    pub rows: Vec<Vec<String>>,
}

impl Board {
    /// Build a board from 25 cells in row-major order.
    pub fn from_cells(cells: Vec<String>) -> Self {
        debug_assert_eq!(cells.len(), CELLS_PER_BOARD);
        let rows = cells
            .chunks(GRID_SIZE)
            .map(|chunk| chunk.to_vec())
            .collect();
        Self { rows }
    }

    pub fn center(&self) -> &str {
        &self.rows[GRID_SIZE / 2][GRID_SIZE / 2]
    }

    /// All cells in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = &str> {
        self.rows.iter().flatten().map(String::as_str)
    }
}

/// The full collection of boards produced in one run.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BoardSet {
    pub boards: Vec<Board>,
}

impl BoardSet {
    pub fn new(boards: Vec<Board>) -> Self {
        Self { boards }
    }

    pub fn len(&self) -> usize {
        self.boards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.boards.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Board> {
        self.boards.iter()
    }
}

/// Document formats a board set can be rendered to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExportFormat {
    Xlsx,
    Pdf,
}
