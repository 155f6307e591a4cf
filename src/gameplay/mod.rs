//! The hand and game state machine.
//!
//! [`GameState`] is the only thing that produces a next state. It consults the
//! betting [`Validator`] before touching anything, reallocates [`Pot`]s as
//! chips move, and pays them out through [`Showdown`] once a [`Ranking`] is in.
pub mod action;
pub use action::*;

pub mod audit;

pub mod error;
pub use error::*;

pub mod game;
pub use game::*;

pub mod hand;
pub use hand::*;

pub mod phase;
pub use phase::*;

pub mod player;
pub use player::*;

pub mod pot;
pub use pot::*;

pub mod ranking;
pub use ranking::*;

pub mod rules;
pub use rules::*;

pub mod seat;
pub use seat::*;

pub mod showdown;
pub use showdown::*;

pub mod table;
pub use table::*;
