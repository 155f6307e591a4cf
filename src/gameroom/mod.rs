//! Orchestrator that drives agents through a game.
//!
//! The [`Room`] owns the [`crate::gameplay::GameState`] value and is the only
//! caller of `apply` during a game: the [`Dealer`] supplies dealing actions,
//! [`Agent`]s supply betting decisions, and every agent hears about each
//! transition through [`Event`]s and a fresh [`View`].
mod agent;
mod dealer;
mod event;
mod players;
mod room;
mod view;

pub use agent::*;
pub use dealer::*;
pub use event::*;
pub use players::*;
pub use room::*;
pub use view::*;
