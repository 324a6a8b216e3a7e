//! Computer opponents.
//!
//! - [`AiPolicy`]: pure decision function over a game view
//! - [`GreedyPolicy`]: heuristic one-ply player
//!
//! Policies only read the game. Hypothetical play, where needed, goes
//! through `Game::lookahead`, which never reaches the presentation layer.

mod policy;

pub use policy::{AiPolicy, GreedyPolicy, FORT_REPAIR_THRESHOLD};
