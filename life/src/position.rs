// position.rs - Grid coordinates and compass offsets
//
// Row grows downward (south), column grows rightward (east).

use std::ops::{Add, AddAssign};

/// A `(row, col)` coordinate or offset on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Position {
    pub row: isize,
    pub col: isize,
}

impl Position {
    pub const fn new(row: isize, col: isize) -> Self {
        Self { row, col }
    }

    /// Converts to grid indices when the position lies inside a `rows x cols` board.
    pub fn index(self, rows: usize, cols: usize) -> Option<(usize, usize)> {
        let row = usize::try_from(self.row).ok()?;
        let col = usize::try_from(self.col).ok()?;
        (row < rows && col < cols).then_some((row, col))
    }
}

pub const NORTH:      Position = Position::new(-1,  0);
pub const NORTH_EAST: Position = Position::new(-1,  1);
pub const EAST:       Position = Position::new( 0,  1);
pub const SOUTH_EAST: Position = Position::new( 1,  1);
pub const SOUTH:      Position = Position::new( 1,  0);
pub const SOUTH_WEST: Position = Position::new( 1, -1);
pub const WEST:       Position = Position::new( 0, -1);
pub const NORTH_WEST: Position = Position::new(-1, -1);

/// All eight compass neighbors, clockwise from north.
pub static COMPASS: [Position; 8] = [
    NORTH, NORTH_EAST, EAST, SOUTH_EAST, SOUTH, SOUTH_WEST, WEST, NORTH_WEST,
];

/// The four orthogonal neighbors, clockwise from north.
pub static ORTHOGONAL: [Position; 4] = [NORTH, EAST, SOUTH, WEST];

impl AddAssign for Position {
    fn add_assign(&mut self, other: Self) {
        self.row += other.row;
        self.col += other.col;
    }
}

impl Add for Position {
    type Output = Self;

    fn add(mut self, other: Self) -> Self {
        self += other;
        self
    }
}

impl From<(isize, isize)> for Position {
    fn from((row, col): (isize, isize)) -> Self {
        Self::new(row, col)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_is_componentwise() {
        let p = Position::new(3, -2) + Position::new(-1, 5);
        assert_eq!(p, Position::new(2, 3));
    }

    #[test]
    fn add_commutes_and_associates() {
        let (a, b, c) = (Position::new(1, 2), Position::new(-4, 7), Position::new(0, -9));
        assert_eq!(a + b, b + a);
        assert_eq!((a + b) + c, a + (b + c));
    }

    #[test]
    fn opposite_directions_cancel() {
        assert_eq!(NORTH + SOUTH, Position::default());
        assert_eq!(EAST + WEST, Position::default());
        assert_eq!(NORTH_EAST + SOUTH_WEST, Position::default());
        assert_eq!(NORTH_WEST + SOUTH_EAST, Position::default());
    }

    #[test]
    fn north_decreases_row() {
        assert_eq!(Position::new(5, 5) + NORTH, Position::new(4, 5));
        assert_eq!(Position::new(5, 5) + SOUTH, Position::new(6, 5));
    }

    #[test]
    fn orthogonal_is_subset_of_compass() {
        assert!(ORTHOGONAL.iter().all(|o| COMPASS.contains(o)));
        assert!(ORTHOGONAL.iter().all(|o| o.row == 0 || o.col == 0));
    }

    #[test]
    fn index_rejects_out_of_bounds() {
        assert_eq!(Position::new(0, 0).index(2, 3), Some((0, 0)));
        assert_eq!(Position::new(1, 2).index(2, 3), Some((1, 2)));
        assert_eq!(Position::new(-1, 0).index(2, 3), None);
        assert_eq!(Position::new(0, -1).index(2, 3), None);
        assert_eq!(Position::new(2, 0).index(2, 3), None);
        assert_eq!(Position::new(0, 3).index(2, 3), None);
    }
}
