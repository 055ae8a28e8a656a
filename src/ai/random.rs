use rand::rngs::StdRng;
use rand::Rng;
use rand::SeedableRng;

use crate::game::Position;

/// Uniform choice over a set of candidate cells. Swapped for a fixed stub in
/// tests.
pub trait MoveSelector {
    fn choose(&mut self, moves: &[Position]) -> Option<Position>;
}

/// Picks uniformly at random from the candidates.
pub struct UniformSelector {
    rng: StdRng,
}

impl UniformSelector {
    pub fn new() -> Self {
        UniformSelector {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Deterministic selector, the same seed replays the same choices
    pub fn seeded(seed: u64) -> Self {
        UniformSelector {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for UniformSelector {
    fn default() -> Self {
        Self::new()
    }
}

impl MoveSelector for UniformSelector {
    fn choose(&mut self, moves: &[Position]) -> Option<Position> {
        if moves.is_empty() {
            return None;
        }
        let idx = self.rng.random_range(0..moves.len());
        Some(moves[idx])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::BoardModel;

    #[test]
    fn test_uniform_selector_picks_candidate() {
        let mut selector = UniformSelector::new();
        let moves = vec![Position::new(0, 1), Position::new(2, 2)];

        for _ in 0..100 {
            let choice = selector.choose(&moves).unwrap();
            assert!(moves.contains(&choice), "{} is not a candidate", choice);
        }
    }

    #[test]
    fn test_uniform_selector_empty() {
        let mut selector = UniformSelector::new();
        assert_eq!(selector.choose(&[]), None);
    }

    #[test]
    fn test_seeded_selectors_agree() {
        let moves: Vec<_> = BoardModel::new().legal_moves().collect();
        let mut a = UniformSelector::seeded(7);
        let mut b = UniformSelector::seeded(7);
        for _ in 0..20 {
            assert_eq!(a.choose(&moves), b.choose(&moves));
        }
    }

    #[test]
    fn test_uniform_selector_reaches_every_cell() {
        let moves: Vec<_> = BoardModel::new().legal_moves().collect();
        let mut selector = UniformSelector::seeded(42);
        let mut seen = [false; 9];
        for _ in 0..500 {
            seen[selector.choose(&moves).unwrap().index()] = true;
        }
        assert!(seen.iter().all(|&s| s));
    }
}
