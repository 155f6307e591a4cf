/// The phases a hand, and the game around it, moves through.
///
/// `GameState` carries one of these as its tag. Betting phases repeat until
/// their matching `Finish*` action closes the round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[derive(serde::Serialize, serde::Deserialize)]
pub enum Phase {
    StartingGame,
    SettingBlinds,
    PlacingBlinds,
    ShufflingDeck,
    DealingHoleCards,
    PreFlopBetting,
    DealingFlopCards,
    PostFlopBetting,
    DealingTurnCard,
    PostTurnBetting,
    DealingRiverCard,
    PostRiverBetting,
    Showdown,
    DistributingPots,
    PostHand,
    GameOver,
}

impl Phase {
    pub fn is_betting(&self) -> bool {
        matches!(
            self,
            Self::PreFlopBetting | Self::PostFlopBetting | Self::PostTurnBetting | Self::PostRiverBetting
        )
    }
    /// Community card counts allowed in this phase. Pots can be distributed
    /// on any street when everyone else folds.
    pub fn n_board(&self) -> &'static [usize] {
        match self {
            Self::PostFlopBetting | Self::DealingTurnCard => &[3],
            Self::PostTurnBetting | Self::DealingRiverCard => &[4],
            Self::PostRiverBetting | Self::Showdown => &[5],
            Self::DistributingPots => &[0, 3, 4, 5],
            _ => &[0],
        }
    }
    /// Whether hole cards have been dealt by this phase.
    pub fn has_holes(&self) -> bool {
        *self >= Self::PreFlopBetting && *self <= Self::DistributingPots
    }
    /// Whether blinds sit in front of the blind seats untouched.
    pub fn has_posted_blinds(&self) -> bool {
        matches!(self, Self::ShufflingDeck | Self::DealingHoleCards)
    }
    /// Whether hand cards may be face up.
    pub fn has_reveals(&self) -> bool {
        matches!(self, Self::Showdown | Self::DistributingPots)
    }
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}
