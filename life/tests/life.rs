//! Whole-board behavior of the engine.

use life::{CellKind, Life, Position};
use proptest::prelude::*;

fn grid_lines(life: &Life) -> Vec<String> {
    life.render()
        .lines()
        .skip(1)
        .filter(|line| !line.is_empty())
        .map(String::from)
        .collect()
}

fn alive_glyphs(life: &Life) -> usize {
    grid_lines(life)
        .iter()
        .flat_map(|line| line.chars())
        .filter(|&c| c != '.' && c != '-')
        .count()
}

// =============================================================================
// Conway
// =============================================================================

#[test]
fn blinker_flips_after_one_turn() {
    let mut life = Life::parse("3\n3\n.*.\n.*.\n.*.\n").unwrap();
    life.simulate(1).unwrap();
    assert_eq!(grid_lines(&life), ["...", "***", "..."]);
    assert_eq!(life.generation(), 1);
    assert_eq!(life.population(), 3);
}

#[test]
fn blinker_has_period_two() {
    let mut life = Life::parse("3 3\n.*.\n.*.\n.*.").unwrap();
    life.simulate(333).unwrap();
    assert_eq!(grid_lines(&life), ["...", "***", "..."]);
    life.simulate(1).unwrap();
    assert_eq!(grid_lines(&life), [".*.", ".*.", ".*."]);
    assert_eq!(life.render(), "Generation = 334, Population = 3.\n.*.\n.*.\n.*.\n\n");
}

#[test]
fn lone_dead_cell_stays_dead() {
    let mut life = Life::parse("1 1\n.").unwrap();
    for _ in 0..50 {
        life.take_turn().unwrap();
        assert_eq!(grid_lines(&life), ["."]);
    }
    assert_eq!(life.population(), 0);
}

#[test]
fn lone_live_cell_dies() {
    let mut life = Life::parse("1 1\n*").unwrap();
    life.simulate(1).unwrap();
    assert_eq!(life.population(), 0);
}

#[test]
fn birth_survival_and_overcrowding() {
    // Center sees four and dies, lone corners die, edge cells see three and are born
    let mut life = Life::parse("3 3\n*.*\n.*.\n*.*").unwrap();
    life.simulate(1).unwrap();
    assert_eq!(grid_lines(&life), [".*.", "*.*", ".*."]);
}

#[test]
fn block_is_still() {
    let mut life = Life::parse("4 4\n....\n.**.\n.**.\n....").unwrap();
    let before = grid_lines(&life);
    life.simulate(10).unwrap();
    assert_eq!(grid_lines(&life), before);
}

// =============================================================================
// Fredkin
// =============================================================================

#[test]
fn fredkin_pair_ages_by_one() {
    let mut life = Life::parse("1\n2\n90\n").unwrap();
    life.simulate(1).unwrap();
    assert_eq!(grid_lines(&life), ["+1"]);
    assert_eq!(life.cell(Position::new(0, 0)).and_then(|c| c.age()), Some(10));
    assert_eq!(life.cell(Position::new(0, 1)).and_then(|c| c.age()), Some(1));
}

#[test]
fn fredkin_ignores_diagonals() {
    // Diagonal Conway neighbors do not count for the center Fredkin cell
    let mut life = Life::parse("3 3\n*.*\n.5.\n*.*").unwrap();
    life.simulate(1).unwrap();
    assert_eq!(life.cell(Position::new(1, 1)).map(|c| c.is_alive()), Some(false));
}

#[test]
fn fredkin_birth_does_not_age() {
    let mut life = Life::parse("1 2\n-*").unwrap();
    life.simulate(1).unwrap();
    // '-' sees one live neighbor (odd) and is born at age 0; the Conway cell dies
    assert_eq!(grid_lines(&life), ["0."]);
}

#[test]
fn fredkin_promotes_to_conway_at_age_two() {
    let mut life = Life::parse("1 2\n11").unwrap();
    life.simulate(1).unwrap();
    assert_eq!(grid_lines(&life), ["**"]);
    for col in 0..2 {
        assert_eq!(life.cell(Position::new(0, col)).map(|c| c.kind()), Some(CellKind::Conway));
    }

    // Fredkin's rule would keep both alive; Conway's kills them
    life.simulate(1).unwrap();
    assert_eq!(grid_lines(&life), [".."]);
    assert_eq!(life.population(), 0);
}

#[test]
fn mixed_board_renders_every_kind() {
    let life = Life::parse("2 4\n*.-3\n0..-").unwrap();
    assert_eq!(life.render(), "Generation = 0, Population = 3.\n*.-3\n0..-\n\n");
}

// =============================================================================
// Properties
// =============================================================================

fn board_text() -> impl Strategy<Value = String> {
    (1usize..7, 1usize..7).prop_flat_map(|(rows, cols)| {
        prop::collection::vec(
            prop::collection::vec(prop::sample::select(vec!['.', '*', '-', '0', '1', '5', '9']), cols),
            rows,
        )
        .prop_map(move |grid| {
            let body: Vec<String> = grid.into_iter().map(|row| row.into_iter().collect()).collect();
            format!("{rows} {cols}\n{}\n", body.join("\n"))
        })
    })
}

proptest! {
    /// Rendering before any turn reproduces the input grid
    #[test]
    fn prop_render_round_trips(text in board_text()) {
        let life = Life::parse(&text).unwrap();
        let expected: Vec<String> = text.lines().skip(1).map(String::from).collect();
        prop_assert_eq!(grid_lines(&life), expected);
        prop_assert_eq!(life.generation(), 0);
    }

    /// Generation advances exactly once per turn
    #[test]
    fn prop_generation_counts_turns(text in board_text(), turns in 0u32..30) {
        let mut life = Life::parse(&text).unwrap();
        life.simulate(turns).unwrap();
        prop_assert_eq!(life.generation(), u64::from(turns));
    }

    /// Population always matches the live glyphs on the board
    #[test]
    fn prop_population_matches_glyphs(text in board_text(), turns in 0u32..30) {
        let mut life = Life::parse(&text).unwrap();
        for _ in 0..turns {
            life.take_turn().unwrap();
            prop_assert_eq!(life.population(), alive_glyphs(&life));
        }
    }
}
