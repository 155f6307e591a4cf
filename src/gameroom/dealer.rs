use crate::Chips;
use crate::config::Config;
use crate::gameplay::*;
use rand::Rng;
use rand::SeedableRng;
use rand::rngs::StdRng;

/// Produces every action that is not an agent's decision: starting and
/// ending hands, blinds, shuffles, dealing, closing rounds, showdown reveals,
/// ranking and payouts.
pub struct Dealer {
    rng: StdRng,
    ranker: Box<dyn Ranker + Send>,
    little: Chips,
    big: Chips,
    max_hands: Option<usize>,
    hands: usize,
}

impl From<&Config> for Dealer {
    fn from(config: &Config) -> Self {
        Self {
            rng: StdRng::seed_from_u64(config.seed),
            ranker: Box::new(HighCard),
            little: config.little_blind,
            big: config.big_blind,
            max_hands: config.max_hands,
            hands: 0,
        }
    }
}

impl Dealer {
    pub fn with_ranker<R>(mut self, ranker: R) -> Self
    where
        R: Ranker + Send + 'static,
    {
        self.ranker = Box::new(ranker);
        self
    }
    /// Hands started so far.
    pub fn hands(&self) -> usize {
        self.hands
    }

    /// The dealer's next action, or `None` when an agent must decide
    /// (or the game is over).
    pub fn next(&mut self, state: &GameState) -> Option<Action> {
        match state {
            GameState::StartingGame(table) | GameState::PostHand(table) => Some(self.commence(table)),
            GameState::SettingBlinds(_) => Some(Action::SetBlinds {
                little: self.little,
                big: self.big,
            }),
            GameState::PlacingBlinds(_) => Some(Action::PlaceBlinds),
            GameState::ShufflingDeck(_) => Some(Action::ShuffleDeck {
                seed: self.rng.random(),
            }),
            GameState::DealingHoleCards(_) => Some(Action::DealHoleCards),
            GameState::PreFlopBetting(hand) => Self::close(hand, Action::FinishPreFlopBetting),
            GameState::DealingFlopCards(_) => Some(Action::DealFlopCards),
            GameState::PostFlopBetting(hand) => Self::close(hand, Action::FinishPostFlopBetting),
            GameState::DealingTurnCard(_) => Some(Action::DealTurnCard),
            GameState::PostTurnBetting(hand) => Self::close(hand, Action::FinishPostTurnBetting),
            GameState::DealingRiverCard(_) => Some(Action::DealRiverCard),
            GameState::PostRiverBetting(hand) => Self::close(hand, Action::FinishPostRiverBetting),
            GameState::Showdown(hand) => Some(self.showdown(hand)),
            GameState::DistributingPots(_) => Some(Action::DistributePots),
            GameState::GameOver(_) => None,
        }
    }

    fn commence(&mut self, table: &Table) -> Action {
        let capped = self.max_hands.is_some_and(|max| self.hands >= max);
        if capped || table.funded() < crate::MIN_PLAYERS {
            Action::EndGame
        } else {
            self.hands += 1;
            Action::StartHand
        }
    }
    fn close(hand: &Hand, finish: Action) -> Option<Action> {
        if hand.unfolded() == 1 {
            Some(Action::DeclareDefaultWinner)
        } else if hand.is_closeable() {
            Some(finish)
        } else {
            None
        }
    }
    /// Turns every remaining hand face up in seat order, then ranks them.
    fn showdown(&self, hand: &Hand) -> Action {
        match hand
            .seats()
            .iter()
            .find(|s| !s.is_folded() && !s.is_revealed())
        {
            Some(seat) => Action::PlayerRevealsHand {
                player: seat.id().clone(),
            },
            None => Action::RankHands {
                ranking: self.ranker.rank(&hand.showdown_hands(), hand.board()),
            },
        }
    }
}
