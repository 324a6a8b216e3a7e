//! Arranged positions.
//!
//! A `Scenario` builds a match that is already under way: chosen turn,
//! chosen seat to move, and seats prepared by hand. It is meant for
//! tests, tutorials and puzzle setups. Once built, the match only changes
//! through `Game` operations like any other.

use crate::core::{MatchConfig, PlayerId};

use super::player::Player;
use super::state::{Game, GamePhase};

/// Builder for a match in progress.
///
/// No upkeep runs on `build`: Stars, hands and monsters are exactly what
/// the seat closures left.
///
/// ```
/// use defend_the_fort::core::{MatchConfig, PlayerId};
/// use defend_the_fort::entities::Monster;
/// use defend_the_fort::game::Scenario;
///
/// let mut game = Scenario::new(MatchConfig::default())
///     .at_turn(2, PlayerId::FIRST)
///     .seat(PlayerId::FIRST, |p| {
///         p.monster_field.place(0, Monster::token("Brute", PlayerId::FIRST, 7, 0, 9)).unwrap();
///     })
///     .build();
///
/// let hit = game.attack_fort(PlayerId::FIRST, 0, PlayerId::SECOND).unwrap();
/// assert_eq!(hit.strike.fort_hp, 93);
/// ```
#[derive(Clone, Debug)]
pub struct Scenario {
    config: MatchConfig,
    players: [Player; 2],
    turn: u32,
    current: PlayerId,
}

impl Scenario {
    /// Two fresh seats named "Ann" and "Bea", turn 1, first seat to move.
    #[must_use]
    pub fn new(config: MatchConfig) -> Self {
        let players = [
            Player::new(PlayerId::FIRST, "Ann", &config),
            Player::new(PlayerId::SECOND, "Bea", &config),
        ];
        Self {
            config,
            players,
            turn: 1,
            current: PlayerId::FIRST,
        }
    }

    /// Turn number and the seat to move.
    #[must_use]
    pub fn at_turn(mut self, turn: u32, current: PlayerId) -> Self {
        self.turn = turn.max(1);
        self.current = current;
        self
    }

    /// Prepare one seat.
    #[must_use]
    pub fn seat(mut self, player: PlayerId, prepare: impl FnOnce(&mut Player)) -> Self {
        prepare(&mut self.players[player.index()]);
        self
    }

    /// The match, mid-turn for the chosen seat.
    #[must_use]
    pub fn build(self) -> Game {
        let mut game = Game::with_players(self.config, self.players);
        game.phase = GamePhase::PlayerTurn;
        game.turn_number = self.turn;
        game.current = self.current;
        game
    }
}
