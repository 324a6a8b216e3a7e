//! One match and everything attached to it.
//!
//! `MatchSession` owns the `Game`, the shared card catalog, and an optional
//! AI seat. Front ends drive human seats through `apply` and let the
//! session play AI turns with `run_ai_turn`.

use std::sync::Arc;

use crate::ai::AiPolicy;
use crate::cards::{CardCatalog, DeckList};
use crate::core::{Action, GameError, MatchConfig, PlayerId};

use super::outcome::ActionResult;
use super::state::{Game, GameBuilder};

/// Upper bound on actions one AI turn may commit.
pub const MAX_AI_STEPS: usize = 64;

struct AiSeat {
    seat: PlayerId,
    policy: Box<dyn AiPolicy>,
}

/// A running match.
pub struct MatchSession {
    game: Game,
    catalog: Arc<CardCatalog>,
    ai: Option<AiSeat>,
}

impl MatchSession {
    /// Build and start a two-player match.
    pub fn new(
        catalog: Arc<CardCatalog>,
        config: MatchConfig,
        first: (&str, DeckList),
        second: (&str, DeckList),
    ) -> Result<Self, GameError> {
        let mut game = GameBuilder::new(Arc::clone(&catalog))
            .config(config)
            .player(first.0, first.1)
            .player(second.0, second.1)
            .build()?;
        game.start()?;
        Ok(Self {
            game,
            catalog,
            ai: None,
        })
    }

    /// Hand `seat` to an AI policy.
    #[must_use]
    pub fn with_ai(mut self, seat: PlayerId, policy: impl AiPolicy + 'static) -> Self {
        self.ai = Some(AiSeat {
            seat,
            policy: Box::new(policy),
        });
        self
    }

    #[must_use]
    pub fn game(&self) -> &Game {
        &self.game
    }

    pub fn game_mut(&mut self) -> &mut Game {
        &mut self.game
    }

    #[must_use]
    pub fn catalog(&self) -> &Arc<CardCatalog> {
        &self.catalog
    }

    /// Seat played by the AI, if any.
    #[must_use]
    pub fn ai_seat(&self) -> Option<PlayerId> {
        self.ai.as_ref().map(|ai| ai.seat)
    }

    /// Whether the AI owns the current turn.
    #[must_use]
    pub fn is_ai_turn(&self) -> bool {
        !self.game.is_over() && self.ai_seat() == Some(self.game.current_player())
    }

    /// Perform an action for `player`.
    pub fn apply(&mut self, player: PlayerId, action: &Action) -> Result<ActionResult, GameError> {
        self.game.apply(player, action)
    }

    /// Play the AI's whole turn.
    ///
    /// The policy is asked for a prioritized plan; the first action that
    /// commits is kept and the policy re-plans from the new state. Rejected
    /// actions are skipped. The turn always ends: if nothing commits, or
    /// the step limit is hit, the session passes on the AI's behalf.
    pub fn run_ai_turn(&mut self) -> Vec<ActionResult> {
        let mut results = Vec::new();
        let Some(ai) = &self.ai else {
            return results;
        };
        let seat = ai.seat;
        if !self.is_ai_turn() {
            return results;
        }

        for _ in 0..MAX_AI_STEPS {
            if self.game.is_over() || self.game.current_player() != seat {
                return results;
            }

            let plan = ai.policy.plan(&self.game, seat);
            let mut committed = None;
            for action in &plan {
                match self.game.apply(seat, action) {
                    Ok(result) => {
                        committed = Some(result);
                        break;
                    }
                    Err(err) => tracing::warn!(%seat, ?action, %err, "AI action rejected"),
                }
            }

            match committed {
                Some(result) => results.push(result),
                None => break,
            }
        }

        if !self.game.is_over() && self.game.current_player() == seat {
            match self.game.apply(seat, &Action::EndTurn) {
                Ok(result) => results.push(result),
                Err(err) => tracing::warn!(%seat, %err, "AI could not end its turn"),
            }
        }
        results
    }

    /// Serialize the game. The presentation port is not included.
    pub fn snapshot(&self) -> bincode::Result<Vec<u8>> {
        bincode::serialize(&self.game)
    }

    /// Replace the game with a snapshot, keeping the attached presenter.
    pub fn restore(&mut self, bytes: &[u8]) -> bincode::Result<()> {
        let mut game: Game = bincode::deserialize(bytes)?;
        game.presenter = self.game.presenter.clone();
        self.game = game;
        Ok(())
    }
}

impl std::fmt::Debug for MatchSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MatchSession")
            .field("turn", &self.game.turn_number())
            .field("current", &self.game.current_player())
            .field("ai_seat", &self.ai_seat())
            .field("cards", &self.catalog.len())
            .finish()
    }
}
