use super::phase::Phase;

/// Everything the state machine can refuse.
///
/// The first three kinds are rejections of untrusted input: the state the
/// action was applied to is untouched, so the caller may resubmit.
/// `InvalidState` means a transition produced a value that breaks a table
/// invariant. It points at a defect upstream and is not worth retrying.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("invalid action: {0}")]
    InvalidAction(String),
    #[error("action not allowed in {phase}: {reason}")]
    InvalidActionForState { phase: Phase, reason: String },
    #[error("{action} is not expected in {phase}")]
    UnexpectedActionForState { phase: Phase, action: String },
    #[error("invalid state: {0}")]
    InvalidState(String),
    #[error("deck exhausted")]
    DeckExhausted,
}

impl Error {
    /// True when the rejected submission can simply be replaced by another.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            Self::InvalidAction(_)
                | Self::InvalidActionForState { .. }
                | Self::UnexpectedActionForState { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn retryable_kinds() {
        let illegal = Error::InvalidActionForState {
            phase: Phase::PreFlopBetting,
            reason: "check facing a bet".into(),
        };
        assert!(Error::InvalidAction("zero bet".into()).is_retryable());
        assert!(illegal.is_retryable());
        assert!(!Error::InvalidState("chips vanished".into()).is_retryable());
        assert!(!Error::DeckExhausted.is_retryable());
    }

    #[test]
    fn messages_name_the_phase() {
        let err = Error::UnexpectedActionForState {
            phase: Phase::Showdown,
            action: "DEAL FLOP".into(),
        };
        assert!(err.to_string() == "DEAL FLOP is not expected in Showdown");
    }
}
