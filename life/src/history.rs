// history.rs - Spotting repeated board states across generations

use crate::grid::Life;

pub const HISTORY_LEN: usize = 10;

/// Remembers the fingerprints of the last `HISTORY_LEN` boards it was shown.
#[derive(Debug, Clone, Default)]
pub struct CycleDetector {
    history: [u64; HISTORY_LEN],
    count: usize,
}

impl CycleDetector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `life` and returns how many observations ago the same state
    /// was last seen, if it is still in the window.
    pub fn observe(&mut self, life: &Life) -> Option<usize> {
        let current = life.fingerprint();
        let seen = self.count.min(HISTORY_LEN);
        let period = (1..=seen).find(|&back| self.history[(self.count - back) % HISTORY_LEN] == current);

        self.history[self.count % HISTORY_LEN] = current; // Circular buffer
        self.count += 1;
        period
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blinker_repeats_every_two() {
        let mut life = Life::parse("3 3\n.*.\n.*.\n.*.").unwrap();
        let mut detector = CycleDetector::new();
        assert_eq!(detector.observe(&life), None);
        life.take_turn().unwrap();
        assert_eq!(detector.observe(&life), None);
        life.take_turn().unwrap();
        assert_eq!(detector.observe(&life), Some(2));
    }

    #[test]
    fn still_life_repeats_every_one() {
        let mut life = Life::parse("2 2\n**\n**").unwrap();
        let mut detector = CycleDetector::new();
        detector.observe(&life);
        life.take_turn().unwrap();
        assert_eq!(detector.observe(&life), Some(1));
    }

    #[test]
    fn window_is_bounded() {
        // A glider drifting across an open board never repeats a state
        let mut life = crate::patterns::Pattern::find("Glider")
            .unwrap()
            .place(30, 30, crate::position::Position::default())
            .unwrap();
        let mut detector = CycleDetector::new();
        for _ in 0..(HISTORY_LEN * 2) {
            assert_eq!(detector.observe(&life), None);
            life.take_turn().unwrap();
        }
    }
}
