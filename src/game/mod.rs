//! The match orchestrator.
//!
//! ## Key Types
//!
//! - [`Player`]: one seat's resources, cards and zones
//! - [`Game`]: both seats, turn pointer, battle log, win condition
//! - [`GameBuilder`]: catalog + decks to a ready match
//! - [`MatchSession`]: a game plus its catalog and optional AI seat
//! - [`PresentationPort`]: optional fire-and-forget render hooks
//! - [`Scenario`]: arranged positions for tests and tutorials
//!
//! Every mutating `Game` operation checks, in order: the match has
//! started, it isn't over, and the caller owns the turn. Rejections are
//! `GameError`s and leave the match untouched.

mod actions;
mod combat;
mod outcome;
mod play;
mod player;
mod presentation;
mod scenario;
mod session;
mod state;
mod turn;

pub use outcome::{
    ActionResult, AttackOutcome, FortAttackOutcome, PlacementOutcome, SpellOutcome, SummonOutcome,
    TrapSetOutcome, TurnOutcome, UpgradeOutcome, UpgradeTarget,
};
pub use player::{Player, BASE_UPGRADES_PER_TURN};
pub use presentation::{PresentationPort, Presenter};
pub use scenario::Scenario;
pub use session::{MatchSession, MAX_AI_STEPS};
pub use state::{Game, GameBuilder, GamePhase};
pub use turn::INCOME_STEP_TURNS;
