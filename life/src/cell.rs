// cell.rs - Conway and Fredkin cells, and the Cell sum type the board stores

use crate::error::{LifeError, LifeResult};
use crate::position::{Position, COMPASS, ORTHOGONAL};

/// Largest neighbor count a cell can observe.
pub const MAX_NEIGHBORS: u8 = 8;

/// A live Fredkin cell reaching this age is replaced by a live Conway cell.
pub const PROMOTION_AGE: u32 = 2;

fn check_neighbors(count: u8) -> LifeResult<u8> {
    if count > MAX_NEIGHBORS {
        return Err(LifeError::InvalidNeighborCount(count));
    }
    Ok(count)
}

/// Classic B3/S23 cell looking at all eight compass neighbors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ConwayCell {
    alive: bool,
    neighbors: u8,
}

impl ConwayCell {
    pub const fn new(alive: bool) -> Self {
        Self { alive, neighbors: 0 }
    }

    /// `*` is alive, `.` is dead.
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '*' => Some(Self::new(true)),
            '.' => Some(Self::new(false)),
            _ => None,
        }
    }

    pub fn is_alive(&self) -> bool {
        self.alive
    }

    pub fn neighbors(&self) -> u8 {
        self.neighbors
    }

    pub fn neighbor_offsets(&self) -> &'static [Position] {
        &COMPASS
    }

    pub fn set_neighbors(&mut self, count: u8) -> LifeResult<()> {
        self.neighbors = check_neighbors(count)?;
        Ok(())
    }

    pub fn turn(&mut self) {
        self.alive = match (self.alive, self.neighbors) {
            (_, 3)         => true,        // Birth or survival
            (alive, 2)     => alive,       // Survival only
            _              => false,       // Loneliness or overcrowding
        };
    }

    pub fn glyph(&self) -> char {
        if self.alive { '*' } else { '.' }
    }
}

/// Parity-rule cell looking only at its four orthogonal neighbors, with an age.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FredkinCell {
    alive: bool,
    age: u32,
    neighbors: u8,
}

impl FredkinCell {
    pub const fn new(alive: bool, age: u32) -> Self {
        Self { alive, age, neighbors: 0 }
    }

    /// `-` is dead with age 0, a digit is alive with that age.
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '-' => Some(Self::new(false, 0)),
            _ => c.to_digit(10).map(|age| Self::new(true, age)),
        }
    }

    pub fn is_alive(&self) -> bool {
        self.alive
    }

    pub fn age(&self) -> u32 {
        self.age
    }

    pub fn neighbors(&self) -> u8 {
        self.neighbors
    }

    pub fn neighbor_offsets(&self) -> &'static [Position] {
        &ORTHOGONAL
    }

    pub fn set_neighbors(&mut self, count: u8) -> LifeResult<()> {
        self.neighbors = check_neighbors(count)?;
        Ok(())
    }

    /// Odd count keeps or brings the cell to life, even count kills it.
    /// Only a cell that was already alive ages; age survives death untouched.
    pub fn turn(&mut self) {
        if self.neighbors % 2 == 1 {
            if self.alive {
                self.age += 1;
            }
            self.alive = true;
        } else {
            self.alive = false;
        }
    }

    pub fn glyph(&self) -> char {
        match (self.alive, char::from_digit(self.age, 10)) {
            (false, _)        => '-',
            (true, Some(d))   => d,
            (true, None)      => '+',
        }
    }
}

/// Which rule a cell currently follows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CellKind {
    Conway,
    Fredkin,
}

/// One board cell, holding exactly one concrete kind at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    Conway(ConwayCell),
    Fredkin(FredkinCell),
}

impl Cell {
    /// Builds the cell named by an input character.
    ///
    /// # Errors
    /// `MalformedInput` for characters outside `.*-0123456789`.
    pub fn from_char(c: char) -> LifeResult<Self> {
        ConwayCell::from_char(c)
            .map(Cell::Conway)
            .or_else(|| FredkinCell::from_char(c).map(Cell::Fredkin))
            .ok_or_else(|| LifeError::malformed(format!("unknown cell character {c:?}")))
    }

    pub fn kind(&self) -> CellKind {
        match self {
            Cell::Conway(_)  => CellKind::Conway,
            Cell::Fredkin(_) => CellKind::Fredkin,
        }
    }

    pub fn is_alive(&self) -> bool {
        match self {
            Cell::Conway(c)  => c.is_alive(),
            Cell::Fredkin(f) => f.is_alive(),
        }
    }

    /// Age of a Fredkin cell; Conway cells do not age.
    pub fn age(&self) -> Option<u32> {
        match self {
            Cell::Conway(_)  => None,
            Cell::Fredkin(f) => Some(f.age()),
        }
    }

    pub fn neighbors(&self) -> u8 {
        match self {
            Cell::Conway(c)  => c.neighbors(),
            Cell::Fredkin(f) => f.neighbors(),
        }
    }

    pub fn neighbor_offsets(&self) -> &'static [Position] {
        match self {
            Cell::Conway(c)  => c.neighbor_offsets(),
            Cell::Fredkin(f) => f.neighbor_offsets(),
        }
    }

    /// # Errors
    /// `InvalidNeighborCount` when `count > 8`; the stored count is left as it was.
    pub fn set_neighbors(&mut self, count: u8) -> LifeResult<()> {
        match self {
            Cell::Conway(c)  => c.set_neighbors(count),
            Cell::Fredkin(f) => f.set_neighbors(count),
        }
    }

    /// Applies the held kind's rule, then promotes a Fredkin cell that is
    /// alive at exactly `PROMOTION_AGE` to a fresh live Conway cell.
    pub fn turn(&mut self) {
        *self = match *self {
            Cell::Conway(mut c) => {
                c.turn();
                Cell::Conway(c)
            }
            Cell::Fredkin(mut f) => {
                f.turn();
                if f.is_alive() && f.age() == PROMOTION_AGE {
                    Cell::Conway(ConwayCell::new(true))
                } else {
                    Cell::Fredkin(f)
                }
            }
        };
    }

    pub fn glyph(&self) -> char {
        match self {
            Cell::Conway(c)  => c.glyph(),
            Cell::Fredkin(f) => f.glyph(),
        }
    }
}

impl From<ConwayCell> for Cell {
    fn from(cell: ConwayCell) -> Self {
        Cell::Conway(cell)
    }
}

impl From<FredkinCell> for Cell {
    fn from(cell: FredkinCell) -> Self {
        Cell::Fredkin(cell)
    }
}
