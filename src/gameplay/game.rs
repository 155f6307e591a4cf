use super::action::Action;
use super::error::Error;
use super::hand::Blinds;
use super::hand::Hand;
use super::hand::Seating;
use super::phase::Phase;
use super::player::Player;
use super::player::PlayerId;
use super::ranking::Ranking;
use super::showdown::Award;
use super::table::Table;
use crate::Chips;

/// A hand that has been ranked and is waiting to be paid out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settling {
    hand: Hand,
    ranking: Ranking,
}

impl Settling {
    pub fn hand(&self) -> &Hand {
        &self.hand
    }
    pub fn ranking(&self) -> &Ranking {
        &self.ranking
    }
}

/// The whole game as a value, tagged by phase.
///
/// Each variant holds only what its phase needs. Values are only produced by
/// [`GameState::new`] and [`GameState::apply`], and every produced value has
/// passed the invariant audit, so holding a `GameState` means holding a
/// valid one.
///
/// `apply` never mutates `self`: it works on a copy and either returns the
/// next state or an error, leaving the caller's state as it was.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameState {
    StartingGame(Table),
    SettingBlinds(Seating),
    PlacingBlinds(Hand),
    ShufflingDeck(Hand),
    DealingHoleCards(Hand),
    PreFlopBetting(Hand),
    DealingFlopCards(Hand),
    PostFlopBetting(Hand),
    DealingTurnCard(Hand),
    PostTurnBetting(Hand),
    DealingRiverCard(Hand),
    PostRiverBetting(Hand),
    Showdown(Hand),
    DistributingPots(Settling),
    PostHand(Table),
    GameOver(Table),
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    /// An empty table waiting for buy-ins.
    pub fn new() -> Self {
        Self::StartingGame(Table::default())
    }
    /// A table with everyone already bought in.
    pub fn with_players<I>(players: I) -> Result<Self, Error>
    where
        I: IntoIterator<Item = (PlayerId, Chips)>,
    {
        players
            .into_iter()
            .map(|(player, stack)| Action::PlayerBuysIn { player, stack })
            .try_fold(Self::new(), |state, action| state.apply(&action))
    }

    /// The single entry point for moving the game forward.
    pub fn apply(&self, action: &Action) -> Result<Self, Error> {
        let next = self
            .transition(action)
            .inspect_err(|e| log::trace!("rejected {} in {}: {}", action, self.phase(), e))?;
        next.validate()
            .inspect_err(|e| log::error!("{} in {} broke the table: {}", action, self.phase(), e))?;
        log::debug!("{:<20} {} -> {}", action, self.phase(), next.phase());
        Ok(next)
    }

    /// Runs the invariant audit for this phase.
    pub fn validate(&self) -> Result<(), Error> {
        let phase = self.phase();
        match self {
            Self::StartingGame(table) | Self::PostHand(table) | Self::GameOver(table) => {
                table.audit()
            }
            Self::SettingBlinds(seating) => seating.audit(),
            Self::DistributingPots(settling) => {
                settling.hand.audit(phase)?;
                settling.hand.audit_ranking(&settling.ranking)
            }
            Self::PlacingBlinds(hand)
            | Self::ShufflingDeck(hand)
            | Self::DealingHoleCards(hand)
            | Self::PreFlopBetting(hand)
            | Self::DealingFlopCards(hand)
            | Self::PostFlopBetting(hand)
            | Self::DealingTurnCard(hand)
            | Self::PostTurnBetting(hand)
            | Self::DealingRiverCard(hand)
            | Self::PostRiverBetting(hand)
            | Self::Showdown(hand) => hand.audit(phase),
        }
    }

    fn transition(&self, action: &Action) -> Result<Self, Error> {
        let phase = self.phase();
        match self {
            Self::StartingGame(table) => match action {
                Action::PlayerBuysIn { player, stack } => {
                    Self::buy_in(table, player, *stack).map(Self::StartingGame)
                }
                Action::StartHand => Self::start(phase, table).map(Self::SettingBlinds),
                Action::EndGame => Ok(Self::GameOver(table.clone())),
                _ => Err(self.unexpected(action)),
            },
            Self::SettingBlinds(seating) => match action {
                Action::SetBlinds { little, big } => {
                    Self::blinds(seating, *little, *big).map(Self::PlacingBlinds)
                }
                _ => Err(self.unexpected(action)),
            },
            Self::PlacingBlinds(hand) => match action {
                Action::PlaceBlinds => Self::step(hand, |h| {
                    h.post_blinds();
                    Ok(())
                })
                .map(Self::ShufflingDeck),
                _ => Err(self.unexpected(action)),
            },
            Self::ShufflingDeck(hand) => match action {
                Action::ShuffleDeck { seed } => Self::step(hand, |h| {
                    h.shuffle(*seed);
                    Ok(())
                })
                .map(Self::DealingHoleCards),
                _ => Err(self.unexpected(action)),
            },
            Self::DealingHoleCards(hand) => match action {
                Action::DealHoleCards => Self::step(hand, Hand::deal_holes)
                    .map(Self::PreFlopBetting),
                _ => Err(self.unexpected(action)),
            },
            Self::PreFlopBetting(hand) => match action {
                Action::FinishPreFlopBetting => Self::step(hand, |h| h.finish(phase))
                    .map(Self::DealingFlopCards),
                _ => self.betting(hand, action, Self::PreFlopBetting),
            },
            Self::DealingFlopCards(hand) => match action {
                Action::DealFlopCards => Self::step(hand, |h| h.reveal(3))
                    .map(Self::PostFlopBetting),
                _ => Err(self.unexpected(action)),
            },
            Self::PostFlopBetting(hand) => match action {
                Action::FinishPostFlopBetting => Self::step(hand, |h| h.finish(phase))
                    .map(Self::DealingTurnCard),
                _ => self.betting(hand, action, Self::PostFlopBetting),
            },
            Self::DealingTurnCard(hand) => match action {
                Action::DealTurnCard => Self::step(hand, |h| h.reveal(1))
                    .map(Self::PostTurnBetting),
                _ => Err(self.unexpected(action)),
            },
            Self::PostTurnBetting(hand) => match action {
                Action::FinishPostTurnBetting => Self::step(hand, |h| h.finish(phase))
                    .map(Self::DealingRiverCard),
                _ => self.betting(hand, action, Self::PostTurnBetting),
            },
            Self::DealingRiverCard(hand) => match action {
                Action::DealRiverCard => Self::step(hand, |h| h.reveal(1))
                    .map(Self::PostRiverBetting),
                _ => Err(self.unexpected(action)),
            },
            Self::PostRiverBetting(hand) => match action {
                Action::FinishPostRiverBetting => Self::step(hand, |h| h.finish(phase))
                    .map(Self::Showdown),
                _ => self.betting(hand, action, Self::PostRiverBetting),
            },
            Self::Showdown(hand) => match action {
                Action::PlayerRevealsHand { player } => Self::step(hand, |h| h.show(phase, player))
                    .map(Self::Showdown),
                Action::PlayerFolds { player } => Self::step(hand, |h| h.muck(phase, player))
                    .map(Self::Showdown),
                Action::RankHands { ranking } => {
                    hand.judge(phase, ranking)?;
                    Ok(Self::DistributingPots(Settling {
                        hand: hand.clone(),
                        ranking: ranking.clone(),
                    }))
                }
                _ => Err(self.unexpected(action)),
            },
            Self::DistributingPots(settling) => match action {
                Action::DistributePots => {
                    let table = settling.hand.clone().close(&settling.ranking)?;
                    log::debug!("hand over\n{}", table);
                    Ok(Self::PostHand(table))
                }
                _ => Err(self.unexpected(action)),
            },
            Self::PostHand(table) => match action {
                Action::StartHand => Self::start(phase, table).map(Self::SettingBlinds),
                Action::EndGame => Ok(Self::GameOver(table.clone())),
                _ => Err(self.unexpected(action)),
            },
            Self::GameOver(_) => Err(self.unexpected(action)),
        }
    }

    /// Decisions shared by all four betting rounds.
    fn betting(&self, hand: &Hand, action: &Action, stay: fn(Hand) -> Self) -> Result<Self, Error> {
        let phase = self.phase();
        match action {
            Action::PlayerCalls { .. }
            | Action::PlayerRaises { .. }
            | Action::PlayerChecks { .. }
            | Action::PlayerFolds { .. } => Self::step(hand, |h| h.play(phase, action)).map(stay),
            Action::DeclareDefaultWinner => {
                let mut hand = hand.clone();
                let ranking = hand.concede(phase)?;
                Ok(Self::DistributingPots(Settling { hand, ranking }))
            }
            _ => Err(self.unexpected(action)),
        }
    }

    fn step<F>(hand: &Hand, f: F) -> Result<Hand, Error>
    where
        F: FnOnce(&mut Hand) -> Result<(), Error>,
    {
        let mut hand = hand.clone();
        f(&mut hand)?;
        Ok(hand)
    }

    fn buy_in(table: &Table, player: &PlayerId, stack: Chips) -> Result<Table, Error> {
        let phase = Phase::StartingGame;
        if stack == 0 {
            return Err(Error::InvalidAction("buy-in must be positive".into()));
        }
        if table.players().len() >= crate::MAX_PLAYERS {
            return Err(Error::InvalidActionForState {
                phase,
                reason: format!("table is full at {} players", crate::MAX_PLAYERS),
            });
        }
        if table.stack(player).is_some() {
            return Err(Error::InvalidActionForState {
                phase,
                reason: format!("{} is already seated", player),
            });
        }
        if table.total()?.checked_add(stack).is_none() {
            return Err(Error::InvalidAction(format!("buy-in of {} is too large", stack)));
        }
        let mut table = table.clone();
        table.sit(Player::from((player.clone(), stack)));
        Ok(table)
    }

    fn start(phase: Phase, table: &Table) -> Result<Seating, Error> {
        match table.funded() {
            n if n < crate::MIN_PLAYERS => Err(Error::InvalidActionForState {
                phase,
                reason: format!("{} players with chips, the game must end", n),
            }),
            _ => Ok(Seating::from(table.clone())),
        }
    }

    fn blinds(seating: &Seating, little: Chips, big: Chips) -> Result<Hand, Error> {
        if little == 0 || big == 0 {
            return Err(Error::InvalidAction("blinds must be positive".into()));
        }
        if little > big {
            return Err(Error::InvalidAction(format!(
                "little blind {} above big blind {}",
                little, big
            )));
        }
        Hand::open(seating, Blinds { little, big })
    }

    fn unexpected(&self, action: &Action) -> Error {
        Error::UnexpectedActionForState {
            phase: self.phase(),
            action: action.to_string(),
        }
    }
}

/// Read access.
impl GameState {
    pub fn phase(&self) -> Phase {
        match self {
            Self::StartingGame(_) => Phase::StartingGame,
            Self::SettingBlinds(_) => Phase::SettingBlinds,
            Self::PlacingBlinds(_) => Phase::PlacingBlinds,
            Self::ShufflingDeck(_) => Phase::ShufflingDeck,
            Self::DealingHoleCards(_) => Phase::DealingHoleCards,
            Self::PreFlopBetting(_) => Phase::PreFlopBetting,
            Self::DealingFlopCards(_) => Phase::DealingFlopCards,
            Self::PostFlopBetting(_) => Phase::PostFlopBetting,
            Self::DealingTurnCard(_) => Phase::DealingTurnCard,
            Self::PostTurnBetting(_) => Phase::PostTurnBetting,
            Self::DealingRiverCard(_) => Phase::DealingRiverCard,
            Self::PostRiverBetting(_) => Phase::PostRiverBetting,
            Self::Showdown(_) => Phase::Showdown,
            Self::DistributingPots(_) => Phase::DistributingPots,
            Self::PostHand(_) => Phase::PostHand,
            Self::GameOver(_) => Phase::GameOver,
        }
    }
    pub fn is_over(&self) -> bool {
        matches!(self, Self::GameOver(_))
    }
    /// The hand in flight, from blind posting through distribution.
    pub fn hand(&self) -> Option<&Hand> {
        match self {
            Self::PlacingBlinds(hand)
            | Self::ShufflingDeck(hand)
            | Self::DealingHoleCards(hand)
            | Self::PreFlopBetting(hand)
            | Self::DealingFlopCards(hand)
            | Self::PostFlopBetting(hand)
            | Self::DealingTurnCard(hand)
            | Self::PostTurnBetting(hand)
            | Self::DealingRiverCard(hand)
            | Self::PostRiverBetting(hand)
            | Self::Showdown(hand) => Some(hand),
            Self::DistributingPots(settling) => Some(&settling.hand),
            _ => None,
        }
    }
    pub fn ranking(&self) -> Option<&Ranking> {
        match self {
            Self::DistributingPots(settling) => Some(&settling.ranking),
            _ => None,
        }
    }
    /// Everyone at the table with their current chips behind.
    pub fn table(&self) -> Table {
        match self {
            Self::StartingGame(table) | Self::PostHand(table) | Self::GameOver(table) => {
                table.clone()
            }
            Self::SettingBlinds(seating) => seating.table().clone(),
            _ => {
                let hand = self.hand();
                let mut table = hand.map(|h| h.table().clone()).unwrap_or_default();
                for seat in hand.into_iter().flat_map(Hand::seats) {
                    table.reset_stack(seat.id(), seat.stack());
                }
                table
            }
        }
    }
    /// The player whose betting decision the game is waiting on.
    pub fn actor(&self) -> Option<&PlayerId> {
        match self.phase().is_betting() {
            true => self.hand().and_then(Hand::actor).map(|s| s.id()),
            false => None,
        }
    }

    /// A representative legal set for the player to act: fold, check or
    /// call, and a minimum raise of one big blind over the largest bet,
    /// capped at the player's stack. Empty for anyone else.
    pub fn options(&self, player: &PlayerId) -> Vec<Action> {
        let Some(hand) = self.hand().filter(|_| self.phase().is_betting()) else {
            return Vec::new();
        };
        let Some(seat) = hand.actor().filter(|s| s.id() == player) else {
            return Vec::new();
        };
        let largest = hand.largest();
        let limit = seat.limit();
        let mut options = vec![Action::PlayerFolds {
            player: player.clone(),
        }];
        match largest {
            0 => options.push(Action::PlayerChecks {
                player: player.clone(),
            }),
            _ => options.push(Action::PlayerCalls {
                player: player.clone(),
                bet: largest.min(limit),
            }),
        }
        if limit > largest {
            options.push(Action::PlayerRaises {
                player: player.clone(),
                bet: largest.saturating_add(hand.blinds().big).min(limit),
            });
        }
        options
    }

    /// Payouts the pending distribution would make, without making them.
    pub fn awards(&self) -> Result<Vec<Award>, Error> {
        match self {
            Self::DistributingPots(settling) => settling.hand.settle(&settling.ranking),
            _ => Ok(Vec::new()),
        }
    }
}

impl std::fmt::Display for GameState {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        writeln!(f, "{}", self.phase())?;
        match self.hand() {
            Some(hand) => write!(f, "{}", hand),
            None => write!(f, "{}", self.table()),
        }
    }
}
