//! The match: two players, the turn pointer, and the win condition.
//!
//! `Game` is the only mediator of cross-player state changes. Combat,
//! card play and turn handover live in sibling modules as further
//! `impl Game` blocks; this module holds the state, its accessors, the
//! shared gates, and setup.

use im::Vector;
use serde::{Deserialize, Serialize};
use std::rc::Rc;
use std::sync::Arc;

use crate::cards::{CardCatalog, DeckList};
use crate::core::{ActionRecord, BattleLog, GameError, MatchConfig, PlayerId, PlayerMap};
use crate::triggers::{check_traps, GameEvent, SlotRef, TrapActivation};

use super::player::Player;
use super::presentation::{PresentationPort, Presenter};

/// Match lifecycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Players and decks exist; no turn has begun.
    Setup,
    /// Turns alternate.
    PlayerTurn,
    /// A fort fell. Terminal.
    GameOver,
}

/// Full match state.
///
/// Cloning is cheap enough for AI lookahead: hands, decks, graveyards,
/// the log and the history are persistent vectors.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Game {
    pub(crate) players: PlayerMap<Player>,
    pub(crate) current: PlayerId,
    pub(crate) turn_number: u32,
    pub(crate) phase: GamePhase,
    pub(crate) winner: Option<PlayerId>,
    pub(crate) battle_log: BattleLog,
    pub(crate) history: Vector<ActionRecord>,
    pub(crate) action_sequence: u32,
    pub(crate) config: MatchConfig,
    #[serde(skip)]
    pub(crate) presenter: Presenter,
}

impl Game {
    /// A match in setup between two already prepared players.
    #[must_use]
    pub fn with_players(config: MatchConfig, players: [Player; 2]) -> Self {
        let [first, second] = players;
        Self {
            players: PlayerMap::from_pair(first, second),
            current: PlayerId::FIRST,
            turn_number: 1,
            phase: GamePhase::Setup,
            winner: None,
            battle_log: BattleLog::new(config.log_capacity),
            history: Vector::new(),
            action_sequence: 0,
            config,
            presenter: Presenter::default(),
        }
    }

    #[must_use]
    pub fn player(&self, player: PlayerId) -> &Player {
        &self.players[player]
    }

    /// Direct mutable access, bypassing turn gates and trap checks.
    ///
    /// Effect resolution only. Outside the crate, seats change through the
    /// operation methods or `apply`, and arranged positions come from
    /// `Scenario`.
    pub(crate) fn player_mut(&mut self, player: PlayerId) -> &mut Player {
        &mut self.players[player]
    }

    #[must_use]
    pub fn players(&self) -> &PlayerMap<Player> {
        &self.players
    }

    pub(crate) fn players_mut(&mut self) -> &mut PlayerMap<Player> {
        &mut self.players
    }

    #[must_use]
    pub fn current_player(&self) -> PlayerId {
        self.current
    }

    #[must_use]
    pub fn turn_number(&self) -> u32 {
        self.turn_number
    }

    #[must_use]
    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    #[must_use]
    pub fn winner(&self) -> Option<PlayerId> {
        self.winner
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }

    #[must_use]
    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    #[must_use]
    pub fn battle_log(&self) -> &BattleLog {
        &self.battle_log
    }

    /// Committed actions, oldest first.
    #[must_use]
    pub fn history(&self) -> &Vector<ActionRecord> {
        &self.history
    }

    /// Append to the battle log under the current turn.
    pub fn log(&mut self, message: impl Into<String>) {
        self.battle_log.push(self.turn_number, message);
    }

    #[must_use]
    pub fn presenter(&self) -> &Presenter {
        &self.presenter
    }

    /// Attach a presentation port.
    pub fn set_presenter(&mut self, port: Rc<dyn PresentationPort>) {
        self.presenter = Presenter::new(port);
    }

    pub fn detach_presenter(&mut self) {
        self.presenter = Presenter::default();
    }

    /// A copy for hypothetical play. It never notifies the presenter.
    #[must_use]
    pub fn lookahead(&self) -> Game {
        let mut copy = self.clone();
        copy.detach_presenter();
        copy
    }

    /// Reject the call unless `player` may act now.
    pub(crate) fn ensure_turn(&self, player: PlayerId) -> Result<(), GameError> {
        match self.phase {
            GamePhase::Setup => Err(GameError::NotStarted),
            GamePhase::GameOver => Err(GameError::GameOver),
            GamePhase::PlayerTurn if player != self.current => Err(GameError::WrongTurnOwner {
                expected: self.current,
                actual: player,
            }),
            GamePhase::PlayerTurn => Ok(()),
        }
    }

    /// Scan both forts; a destroyed fort hands the match to its opponent.
    ///
    /// Settles at most once. Returns the winner, if any.
    pub fn check_win(&mut self) -> Option<PlayerId> {
        if self.winner.is_some() {
            return self.winner;
        }

        let fallen = self
            .players
            .iter()
            .find(|(_, p)| p.fort.is_destroyed())
            .map(|(id, _)| id)?;
        let winner = fallen.opponent();

        self.winner = Some(winner);
        self.phase = GamePhase::GameOver;
        self.log(format!("{}'s fort falls. {} wins!", fallen, self.players[winner].name));
        tracing::info!(%winner, turn = self.turn_number, "match over");
        self.presenter.game_over(winner);
        Some(winner)
    }

    /// Remove a dead (or dying) monster from the field and fire
    /// `MonsterDestroyed` against its owner's zone.
    pub(crate) fn destroy_monster(
        &mut self,
        at: SlotRef,
        destroyer: Option<SlotRef>,
    ) -> Vec<TrapActivation> {
        let Some(monster) = self.players[at.player].bury_monster(at.slot) else {
            return Vec::new();
        };
        self.log(format!("{}'s {} is destroyed", at.player, monster.name));
        self.presenter.monster_destroyed(at.player, &monster.name);

        check_traps(self, at.player, &GameEvent::monster_destroyed(at, destroyer)).activations
    }
}

/// Builds a match from a catalog, a config and two deck lists.
///
/// ```
/// use defend_the_fort::cards::{standard_catalog, starter_deck};
/// use defend_the_fort::game::{GameBuilder, GamePhase};
/// use std::sync::Arc;
///
/// let game = GameBuilder::new(Arc::new(standard_catalog()))
///     .player("Ann", starter_deck())
///     .player("Bea", starter_deck())
///     .build()
///     .unwrap();
///
/// assert_eq!(game.phase(), GamePhase::Setup);
/// assert_eq!(game.player(defend_the_fort::core::PlayerId::FIRST).hand.len(), 4);
/// ```
pub struct GameBuilder {
    catalog: Arc<CardCatalog>,
    config: MatchConfig,
    seats: Vec<(String, DeckList)>,
}

impl GameBuilder {
    #[must_use]
    pub fn new(catalog: Arc<CardCatalog>) -> Self {
        Self {
            catalog,
            config: MatchConfig::default(),
            seats: Vec::new(),
        }
    }

    #[must_use]
    pub fn config(mut self, config: MatchConfig) -> Self {
        self.config = config;
        self
    }

    #[must_use]
    pub fn seed(mut self, seed: u64) -> Self {
        self.config.seed = seed;
        self
    }

    /// Add the next seat. The first seat added moves first; seats beyond
    /// the second are ignored.
    #[must_use]
    pub fn player(mut self, name: impl Into<String>, deck: DeckList) -> Self {
        self.seats.push((name.into(), deck));
        self
    }

    /// Create both players, load and shuffle their decks, and deal
    /// opening hands. Missing seats get an empty deck.
    pub fn build(self) -> Result<Game, GameError> {
        let mut seats = self.seats.into_iter();
        let mut players = PlayerId::all()
            .map(|id| -> Result<Player, GameError> {
                let (name, deck) = seats
                    .next()
                    .unwrap_or_else(|| (id.to_string(), DeckList::default()));
                let mut player = Player::new(id, name, &self.config);
                player.initialize_deck(&deck, &self.catalog)?;
                for _ in 0..self.config.starting_hand_size {
                    player.draw_card();
                }
                Ok(player)
            })
            .collect::<Result<Vec<_>, _>>()?;

        let second = players.pop().ok_or(GameError::NotStarted)?;
        let first = players.pop().ok_or(GameError::NotStarted)?;
        tracing::debug!(first = %first.name, second = %second.name, "match built");
        Ok(Game::with_players(self.config, [first, second]))
    }
}
