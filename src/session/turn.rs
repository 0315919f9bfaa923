//! Turn ownership: whose move it is and how the turn alternates.

use serde::{Deserialize, Serialize};

use crate::core::{GameRng, PlayerId};

/// How the opening player is chosen when a game starts.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum FirstPlayer {
    /// Uniformly random over the two players.
    Random,
    /// A fixed opening player, used by scripted scenarios.
    Fixed(PlayerId),
}

/// Tracks the current player and alternates turns.
///
/// Two states, one symmetric transition (`advance`), no terminal state; the
/// session ends games, not the controller.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnController {
    current: PlayerId,
}

impl TurnController {
    /// Create a controller with player 0 current; `start` picks the real
    /// opening player.
    #[must_use]
    pub fn new() -> Self {
        Self {
            current: PlayerId::new(0),
        }
    }

    /// Set the opening player for a new game.
    pub fn start(&mut self, first: FirstPlayer, rng: &mut GameRng) {
        self.current = match first {
            FirstPlayer::Random => PlayerId::new(rng.gen_bool(0.5) as u8),
            FirstPlayer::Fixed(player) => player,
        };
    }

    /// The player whose turn it is.
    #[must_use]
    pub fn current(&self) -> PlayerId {
        self.current
    }

    /// Hand the turn to the other player.
    pub fn advance(&mut self) {
        self.current = self.current.other();
    }

    /// Force the current player, used when scenario mode places claims out
    /// of normal turn order.
    pub fn set_current(&mut self, player: PlayerId) {
        self.current = player;
    }
}

impl Default for TurnController {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_advance_alternates() {
        let mut turn = TurnController::new();
        let first = turn.current();

        turn.advance();
        assert_eq!(turn.current(), first.other());

        turn.advance();
        assert_eq!(turn.current(), first);
    }

    #[test]
    fn test_fixed_start() {
        let mut rng = GameRng::new(0);
        let mut turn = TurnController::new();

        turn.start(FirstPlayer::Fixed(PlayerId::new(1)), &mut rng);
        assert_eq!(turn.current(), PlayerId::new(1));
    }

    #[test]
    fn test_random_start_is_deterministic_per_seed() {
        let mut rng1 = GameRng::new(99);
        let mut rng2 = GameRng::new(99);
        let mut turn1 = TurnController::new();
        let mut turn2 = TurnController::new();

        for _ in 0..20 {
            turn1.start(FirstPlayer::Random, &mut rng1);
            turn2.start(FirstPlayer::Random, &mut rng2);
            assert_eq!(turn1.current(), turn2.current());
        }
    }

    #[test]
    fn test_random_start_covers_both_players() {
        let mut rng = GameRng::new(5);
        let mut turn = TurnController::new();
        let mut seen = [false; 2];

        for _ in 0..64 {
            turn.start(FirstPlayer::Random, &mut rng);
            seen[turn.current().index()] = true;
        }

        assert!(seen[0] && seen[1]);
    }
}
