// grid.rs - The Life board and its two-phase turn

use std::collections::hash_map::DefaultHasher;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use tracing::{debug, trace};

use crate::cell::Cell;
use crate::error::{LifeError, LifeResult};
use crate::position::Position;

pub type TRow = Vec<Cell>;
pub type TGrid = Vec<TRow>;

/// A rectangular board of mixed Conway and Fredkin cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Life {
    grid: TGrid,
    rows: usize,
    cols: usize,
    generation: u64,
    population: usize,
}

impl Life {
    /// Wraps an already-built grid.
    ///
    /// # Errors
    /// `MalformedInput` when the rows differ in length.
    pub fn from_grid(grid: TGrid) -> LifeResult<Self> {
        let rows = grid.len();
        let cols = grid.first().map_or(0, Vec::len);
        if let Some((r, row)) = grid.iter().enumerate().find(|(_, row)| row.len() != cols) {
            return Err(LifeError::malformed(format!(
                "row {r} has {} cells, expected {cols}",
                row.len()
            )));
        }

        let mut life = Self { grid, rows, cols, generation: 0, population: 0 };
        life.population = life.count_population();
        Ok(life)
    }

    /// Reads `rows cols` followed by `rows` lines of `cols` cell characters.
    ///
    /// # Errors
    /// `MalformedInput` for a missing or non-numeric dimension, a row count or
    /// row width that disagrees with the header, or an unknown cell character.
    pub fn parse(input: &str) -> LifeResult<Self> {
        let mut tokens = input.split_whitespace();
        let rows = parse_dimension(tokens.next(), "row count")?;
        let cols = parse_dimension(tokens.next(), "column count")?;

        // Grows with the rows actually present; the header alone is untrusted
        let mut grid = TGrid::new();
        for line in tokens {
            if grid.len() == rows {
                return Err(LifeError::malformed(format!(
                    "more than the declared {rows} rows"
                )));
            }
            let row = line.chars().map(Cell::from_char).collect::<LifeResult<TRow>>()?;
            if row.len() != cols {
                return Err(LifeError::malformed(format!(
                    "row {} has {} cells, expected {cols}",
                    grid.len(),
                    row.len()
                )));
            }
            grid.push(row);
        }
        if grid.len() != rows {
            return Err(LifeError::malformed(format!(
                "found {} rows, expected {rows}",
                grid.len()
            )));
        }

        let mut life = Self::from_grid(grid)?;
        // An empty-row board still keeps its declared width
        life.cols = cols;
        debug!(rows, cols, population = life.population, "board parsed");
        Ok(life)
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn population(&self) -> usize {
        self.population
    }

    pub fn cell(&self, pos: Position) -> Option<&Cell> {
        let (row, col) = pos.index(self.rows, self.cols)?;
        Some(&self.grid[row][col])
    }

    /// Out-of-bounds positions read as dead.
    pub fn is_alive_at(&self, pos: Position) -> bool {
        self.cell(pos).is_some_and(Cell::is_alive)
    }

    /// Live cells among the offsets the cell at `pos` looks at.
    pub fn count_neighbors(&self, pos: Position) -> u8 {
        let Some(cell) = self.cell(pos) else { return 0 };
        let live = cell
            .neighbor_offsets()
            .iter()
            .filter(|&&offset| self.is_alive_at(pos + offset))
            .count();
        // Offset sets hold at most eight entries
        live as u8
    }

    /// Runs one generation: count every cell's neighbors against the current
    /// board, then apply every cell's rule.
    ///
    /// # Errors
    /// `InvalidNeighborCount` if a count could not be stored. Alive flags,
    /// generation and population are untouched in that case.
    pub fn take_turn(&mut self) -> LifeResult<()> {
        // Phase 1: reads only, plus each cell's own neighbor count
        for row in 0..self.rows {
            for col in 0..self.cols {
                let current = Position::new(row as isize, col as isize);
                let count = self.count_neighbors(current);
                self.grid[row][col].set_neighbors(count)?;
            }
        }

        // Phase 2
        for cell in self.grid.iter_mut().flatten() {
            cell.turn();
        }

        self.population = self.count_population();
        self.generation += 1;
        trace!(generation = self.generation, population = self.population, "turn complete");
        Ok(())
    }

    /// Runs exactly `turns` generations.
    pub fn simulate(&mut self, turns: u32) -> LifeResult<()> {
        debug!(turns, from = self.generation, "simulating");
        for _ in 0..turns {
            self.take_turn()?;
        }
        Ok(())
    }

    /// Header line, one glyph line per row, then a blank line.
    pub fn render(&self) -> String {
        self.to_string()
    }

    /// Hash of the glyph grid; equal boards give equal fingerprints.
    pub fn fingerprint(&self) -> u64 {
        let mut hasher = DefaultHasher::new();
        self.rows.hash(&mut hasher);
        self.cols.hash(&mut hasher);
        for cell in self.grid.iter().flatten() {
            cell.glyph().hash(&mut hasher);
        }
        hasher.finish()
    }

    fn count_population(&self) -> usize {
        self.grid.iter().flatten().filter(|cell| cell.is_alive()).count()
    }
}

fn parse_dimension(token: Option<&str>, what: &str) -> LifeResult<usize> {
    let token = token.ok_or_else(|| LifeError::malformed(format!("missing {what}")))?;
    token
        .parse()
        .map_err(|_| LifeError::malformed(format!("{what} {token:?} is not a number")))
}

impl FromStr for Life {
    type Err = LifeError;

    fn from_str(s: &str) -> LifeResult<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for Life {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Generation = {}, Population = {}.", self.generation, self.population)?;
        for row in &self.grid {
            let line: String = row.iter().map(Cell::glyph).collect();
            writeln!(f, "{line}")?;
        }
        writeln!(f)
    }
}
