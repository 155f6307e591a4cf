use super::player::PlayerId;
use super::ranking::Ranking;
use crate::Chips;

/// Every input the state machine understands.
///
/// Dealer actions carry no player; agent actions carry the acting player's
/// id. `bet` on calls and raises is the player's total bet for the round,
/// not the increment.
#[derive(Debug, Clone, PartialEq, Eq)]
#[derive(serde::Serialize, serde::Deserialize)]
pub enum Action {
    PlayerBuysIn { player: PlayerId, stack: Chips },
    StartHand,
    SetBlinds { little: Chips, big: Chips },
    PlaceBlinds,
    ShuffleDeck { seed: u64 },
    DealHoleCards,
    PlayerCalls { player: PlayerId, bet: Chips },
    PlayerRaises { player: PlayerId, bet: Chips },
    PlayerChecks { player: PlayerId },
    PlayerFolds { player: PlayerId },
    DeclareDefaultWinner,
    FinishPreFlopBetting,
    DealFlopCards,
    FinishPostFlopBetting,
    DealTurnCard,
    FinishPostTurnBetting,
    DealRiverCard,
    FinishPostRiverBetting,
    PlayerRevealsHand { player: PlayerId },
    RankHands { ranking: Ranking },
    DistributePots,
    EndGame,
}

impl Action {
    /// The player an agent action is submitted for.
    pub fn player(&self) -> Option<&PlayerId> {
        match self {
            Self::PlayerBuysIn { player, .. }
            | Self::PlayerCalls { player, .. }
            | Self::PlayerRaises { player, .. }
            | Self::PlayerChecks { player }
            | Self::PlayerFolds { player }
            | Self::PlayerRevealsHand { player } => Some(player),
            _ => None,
        }
    }
    pub fn is_check(&self) -> bool {
        matches!(self, Self::PlayerChecks { .. })
    }
    pub fn is_fold(&self) -> bool {
        matches!(self, Self::PlayerFolds { .. })
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::PlayerBuysIn { player, stack } => write!(f, "{player} BUYIN {stack}"),
            Self::StartHand => write!(f, "START HAND"),
            Self::SetBlinds { little, big } => write!(f, "BLINDS {little}/{big}"),
            Self::PlaceBlinds => write!(f, "POST BLINDS"),
            Self::ShuffleDeck { seed } => write!(f, "SHUFFLE {seed}"),
            Self::DealHoleCards => write!(f, "DEAL HOLES"),
            Self::PlayerCalls { player, bet } => write!(f, "{player} CALL  {bet}"),
            Self::PlayerRaises { player, bet } => write!(f, "{player} RAISE {bet}"),
            Self::PlayerChecks { player } => write!(f, "{player} CHECK"),
            Self::PlayerFolds { player } => write!(f, "{player} FOLD"),
            Self::DeclareDefaultWinner => write!(f, "DEFAULT WINNER"),
            Self::FinishPreFlopBetting => write!(f, "FINISH PREFLOP"),
            Self::DealFlopCards => write!(f, "DEAL FLOP"),
            Self::FinishPostFlopBetting => write!(f, "FINISH FLOP"),
            Self::DealTurnCard => write!(f, "DEAL TURN"),
            Self::FinishPostTurnBetting => write!(f, "FINISH TURN"),
            Self::DealRiverCard => write!(f, "DEAL RIVER"),
            Self::FinishPostRiverBetting => write!(f, "FINISH RIVER"),
            Self::PlayerRevealsHand { player } => write!(f, "{player} REVEAL"),
            Self::RankHands { ranking } => write!(f, "RANK {ranking}"),
            Self::DistributePots => write!(f, "DISTRIBUTE"),
            Self::EndGame => write!(f, "END GAME"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn player_of_agent_actions() {
        let alice = PlayerId::from("alice");
        let call = Action::PlayerCalls { player: alice.clone(), bet: 4 };
        assert!(call.player() == Some(&alice));
        assert!(Action::DealFlopCards.player().is_none());
    }

    #[test]
    fn display() {
        let raise = Action::PlayerRaises { player: PlayerId::from("bob"), bet: 12 };
        assert!(raise.to_string() == "bob RAISE 12");
        assert!(Action::SetBlinds { little: 1, big: 2 }.to_string() == "BLINDS 1/2");
    }
}
