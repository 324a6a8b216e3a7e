//! Turn handover.
//!
//! The first seat opens turn 1. Each time play wraps back to the first
//! seat the turn number advances, and every third turn both players'
//! Star income rises by one.

use crate::core::{GameError, PlayerId};
use crate::triggers::{check_traps, GameEvent};

use super::outcome::TurnOutcome;
use super::state::{Game, GamePhase};

/// Income rises on turns divisible by this.
pub const INCOME_STEP_TURNS: u32 = 3;

impl Game {
    /// Leave setup and run the first seat's opening upkeep.
    pub fn start(&mut self) -> Result<TurnOutcome, GameError> {
        match self.phase {
            GamePhase::Setup => {}
            GamePhase::PlayerTurn => return Err(GameError::AlreadyStarted),
            GamePhase::GameOver => return Err(GameError::GameOver),
        }

        self.phase = GamePhase::PlayerTurn;
        self.current = PlayerId::FIRST;
        tracing::info!(
            first = %self.players[PlayerId::FIRST].name,
            second = %self.players[PlayerId::SECOND].name,
            "match started"
        );
        self.log("The battle begins");
        Ok(self.begin_turn(false))
    }

    /// Pass the turn to the other seat.
    pub fn end_turn(&mut self, player: PlayerId) -> Result<TurnOutcome, GameError> {
        self.ensure_turn(player)?;

        self.current = self.current.opponent();
        let mut income_increased = false;
        if self.current == PlayerId::FIRST {
            self.turn_number += 1;
            if self.turn_number % INCOME_STEP_TURNS == 0 {
                for (_, p) in self.players.iter_mut() {
                    p.stars_per_turn += 1;
                }
                income_increased = true;
            }
        }
        Ok(self.begin_turn(income_increased))
    }

    fn begin_turn(&mut self, income_increased: bool) -> TurnOutcome {
        let current = self.current;
        let drawn = self.players[current].start_turn();
        let stars = self.players[current].stars;
        tracing::debug!(turn = self.turn_number, player = %current, stars, "turn start");
        self.log(format!("Turn {}: {}'s turn", self.turn_number, self.players[current].name));

        let traps = check_traps(self, current, &GameEvent::turn_start(current)).activations;
        TurnOutcome {
            current,
            turn_number: self.turn_number,
            income_increased,
            drawn: drawn.map(|card| card.card_id().clone()),
            traps,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::MatchConfig;
    use crate::game::Player;

    fn game() -> Game {
        let config = MatchConfig::default();
        Game::with_players(
            config.clone(),
            [
                Player::new(PlayerId::FIRST, "Ann", &config),
                Player::new(PlayerId::SECOND, "Bea", &config),
            ],
        )
    }

    #[test]
    fn test_start_runs_first_upkeep() {
        let mut game = game();
        let outcome = game.start().unwrap();

        assert_eq!(outcome.current, PlayerId::FIRST);
        assert_eq!(game.player(PlayerId::FIRST).stars, 5);
        assert_eq!(game.player(PlayerId::SECOND).stars, 2);
        assert_eq!(game.start(), Err(GameError::AlreadyStarted));
    }

    #[test]
    fn test_end_turn_requires_owner() {
        let mut game = game();
        assert_eq!(game.end_turn(PlayerId::FIRST), Err(GameError::NotStarted));

        game.start().unwrap();
        assert_eq!(
            game.end_turn(PlayerId::SECOND),
            Err(GameError::WrongTurnOwner {
                expected: PlayerId::FIRST,
                actual: PlayerId::SECOND
            })
        );
    }

    #[test]
    fn test_turn_number_advances_on_wrap() {
        let mut game = game();
        game.start().unwrap();

        game.end_turn(PlayerId::FIRST).unwrap();
        assert_eq!((game.turn_number(), game.current_player()), (1, PlayerId::SECOND));

        let outcome = game.end_turn(PlayerId::SECOND).unwrap();
        assert_eq!((outcome.turn_number, outcome.current), (2, PlayerId::FIRST));
        assert!(!outcome.income_increased);
    }
}
