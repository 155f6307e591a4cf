use crate::Chips;
use crate::gameplay::Action;
use crate::gameplay::Error;
use crate::gameplay::PlayerId;

/// What the room tells agents.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Event {
    /// An action was applied.
    Play(Action),
    /// An agent's decision was replaced by the fallback.
    Forced { player: PlayerId, action: Action },
    /// Chips paid out when pots were distributed.
    Award { player: PlayerId, chips: Chips },
    /// Sent only to the submitting agent.
    Rejected { player: PlayerId, error: Error },
}

impl std::fmt::Display for Event {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Play(action) => write!(f, "{}", action),
            Self::Forced { player, action } => write!(f, "{} forced {}", player, action),
            Self::Award { player, chips } => write!(f, "{} wins {}", player, chips),
            Self::Rejected { player, error } => write!(f, "{} rejected: {}", player, error),
        }
    }
}
