//! Card primitives.
//!
//! - [`Card`]: A single card as a `(Rank, Suit)` pair encoded in one byte
//! - [`Hole`]: A player's two private cards
//! - [`Board`]: The community cards, in the order they were revealed
//! - [`Deck`]: The ordered remaining cards of a hand, shuffled by seed
pub mod board;
pub use board::*;

pub mod card;
pub use card::*;

pub mod deck;
pub use deck::*;

pub mod hole;
pub use hole::*;

pub mod rank;
pub use rank::*;

pub mod suit;
pub use suit::*;
