// patterns.rs - Named Conway patterns and seeded random boards

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use crate::cell::{Cell, ConwayCell, FredkinCell};
use crate::error::LifeResult;
use crate::grid::{Life, TGrid};
use crate::position::Position;

/// Live Conway cells relative to the pattern's top-left corner.
pub struct Pattern {
    pub name: &'static str,
    pub cells: &'static [(isize, isize)],
}

pub const PATTERNS: &[Pattern] = &[
    Pattern {
        name: "Glider",
        cells: &[(0, 1), (1, 2), (2, 0), (2, 1), (2, 2)],
    },
    Pattern {
        name: "Blinker",
        cells: &[(0, 0), (0, 1), (0, 2)],
    },
    Pattern {
        name: "Toad",
        cells: &[(0, 1), (0, 2), (0, 3), (1, 0), (1, 1), (1, 2)],
    },
    Pattern {
        name: "Beacon",
        cells: &[(0, 0), (0, 1), (1, 0), (1, 1), (2, 2), (2, 3), (3, 2), (3, 3)],
    },
    Pattern {
        name: "Pulsar",
        cells: &[
            // Top half
            (0, 2), (0, 3), (0, 4), (0, 8), (0, 9), (0, 10),
            (2, 0), (2, 5), (2, 7), (2, 12),
            (3, 0), (3, 5), (3, 7), (3, 12),
            (4, 0), (4, 5), (4, 7), (4, 12),
            (5, 2), (5, 3), (5, 4), (5, 8), (5, 9), (5, 10),
            // Bottom half (mirrored)
            (7, 2), (7, 3), (7, 4), (7, 8), (7, 9), (7, 10),
            (8, 0), (8, 5), (8, 7), (8, 12),
            (9, 0), (9, 5), (9, 7), (9, 12),
            (10, 0), (10, 5), (10, 7), (10, 12),
            (12, 2), (12, 3), (12, 4), (12, 8), (12, 9), (12, 10),
        ],
    },
    Pattern {
        name: "R-pentomino",
        cells: &[(1, 1), (1, 2), (0, 2), (2, 1), (2, 0)],
    },
    Pattern {
        name: "Gosper Glider Gun",
        cells: &[
            (4, 0), (4, 1), (5, 0), (5, 1),
            (4, 10), (5, 10), (6, 10), (3, 11), (7, 11), (2, 12), (8, 12),
            (2, 13), (8, 13), (5, 14), (3, 15), (7, 15), (4, 16), (5, 16),
            (6, 16), (5, 17), (2, 20), (3, 20), (4, 20), (2, 21), (3, 21),
            (4, 21), (1, 22), (5, 22), (0, 24), (1, 24), (5, 24), (6, 24),
            (2, 34), (3, 34), (2, 35), (3, 35),
        ],
    },
];

impl Pattern {
    /// Case-insensitive lookup by name.
    pub fn find(name: &str) -> Option<&'static Pattern> {
        PATTERNS.iter().find(|p| p.name.eq_ignore_ascii_case(name))
    }

    /// A `rows x cols` Conway board with this pattern's top-left corner at
    /// `origin`. Cells landing off the board are dropped.
    pub fn place(&self, rows: usize, cols: usize, origin: Position) -> LifeResult<Life> {
        let mut grid: TGrid = vec![vec![Cell::from(ConwayCell::new(false)); cols]; rows];
        for &offset in self.cells {
            if let Some((row, col)) = (origin + Position::from(offset)).index(rows, cols) {
                grid[row][col] = Cell::from(ConwayCell::new(true));
            }
        }
        Life::from_grid(grid)
    }
}

/// A board mixing both cell kinds, reproducible from `seed`.
pub fn random_life(rows: usize, cols: usize, seed: u32) -> LifeResult<Life> {
    // Simple pseudo-random generator
    let mut hasher = DefaultHasher::new();
    seed.hash(&mut hasher);
    let mut state = hasher.finish();

    let mut grid = TGrid::with_capacity(rows);
    for _ in 0..rows {
        let mut row = Vec::with_capacity(cols);
        for _ in 0..cols {
            state = state.wrapping_mul(1103515245).wrapping_add(12345);
            // Low LCG bits cycle quickly
            let cell = match (state >> 33) % 6 {
                0 | 1 => Cell::from(ConwayCell::new(true)),
                2     => Cell::from(FredkinCell::new(true, 0)),
                3     => Cell::from(FredkinCell::new(false, 0)),
                _     => Cell::from(ConwayCell::new(false)),
            };
            row.push(cell);
        }
        grid.push(row);
    }
    Life::from_grid(grid)
}
