//! Core engine types: seats, ids, RNG, configuration, errors, log, actions.
//!
//! These are the building blocks every other module leans on. None of
//! them know about monsters or forts.

pub mod action;
pub mod config;
pub mod entity;
pub mod error;
pub mod log;
pub mod player;
pub mod rng;

pub use action::{Action, ActionRecord};
pub use config::MatchConfig;
pub use entity::InstanceId;
pub use error::GameError;
pub use log::{BattleLog, LogEntry};
pub use player::{PlayerId, PlayerMap, SEAT_COUNT};
pub use rng::{GameRng, GameRngState};
