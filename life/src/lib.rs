//! Two-kind cellular automaton engine.
//!
//! A [`Life`] board holds [`Cell`]s that are either Conway cells (B3/S23 over
//! eight neighbors) or Fredkin cells (odd-parity over four neighbors, with an
//! age). A live Fredkin cell that reaches age 2 turns into a Conway cell.
//!
//! ```
//! use life::Life;
//!
//! let mut life: Life = "3 3\n.*.\n.*.\n.*.".parse().unwrap();
//! life.simulate(1).unwrap();
//! assert_eq!(life.render(), "Generation = 1, Population = 3.\n...\n***\n...\n\n");
//! ```

pub mod cell;
pub mod error;
pub mod grid;
pub mod history;
pub mod patterns;
pub mod position;

pub use cell::{Cell, CellKind, ConwayCell, FredkinCell, MAX_NEIGHBORS, PROMOTION_AGE};
pub use error::{LifeError, LifeResult};
pub use grid::{Life, TGrid, TRow};
pub use history::CycleDetector;
pub use patterns::{random_life, Pattern, PATTERNS};
pub use position::Position;
