use super::action::Action;
use super::error::Error;
use super::phase::Phase;
use super::player::PlayerId;
use super::pot::Contribution;
use super::pot::Pot;
use super::ranking::Ranking;
use super::rules::Validator;
use super::seat::Seat;
use super::seat::State;
use super::showdown::Award;
use super::showdown::Showdown;
use super::table::Table;
use crate::Chips;
use crate::Position;
use crate::cards::Board;
use crate::cards::Deck;
use crate::cards::Hole;

/// Forced bets for a hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[derive(serde::Serialize, serde::Deserialize)]
pub struct Blinds {
    pub little: Chips,
    pub big: Chips,
}

/// Who takes part in the next hand, before blinds are fixed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Seating {
    table: Table,
    seats: Vec<PlayerId>,
}

impl From<Table> for Seating {
    fn from(table: Table) -> Self {
        let seats = table.seating().into_iter().map(|(id, _)| id).collect();
        Self { table, seats }
    }
}

impl Seating {
    pub fn table(&self) -> &Table {
        &self.table
    }
    /// Hand players clockwise from the little blind.
    pub fn seats(&self) -> &[PlayerId] {
        &self.seats
    }
}

/// One hand in flight.
///
/// Seats run clockwise from the little blind: seat 0 posts the little
/// blind, seat 1 the big blind. The table keeps the stacks from before the
/// hand; the seats hold the live ones until pots are distributed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hand {
    table: Table,
    seats: Vec<Seat>,
    blinds: Blinds,
    deck: Deck,
    board: Board,
    pots: Vec<Pot>,
    actor: Option<Position>,
    total: Chips,
}

impl Hand {
    pub fn table(&self) -> &Table {
        &self.table
    }
    pub fn seats(&self) -> &[Seat] {
        &self.seats
    }
    pub fn blinds(&self) -> Blinds {
        self.blinds
    }
    pub fn deck(&self) -> &Deck {
        &self.deck
    }
    pub fn board(&self) -> &Board {
        &self.board
    }
    pub fn pots(&self) -> &[Pot] {
        &self.pots
    }
    /// Chips in play, fixed when the hand opens.
    pub fn total(&self) -> Chips {
        self.total
    }
    /// The seat whose decision the round is waiting on.
    pub fn actor(&self) -> Option<&Seat> {
        self.actor.and_then(|i| self.seats.get(i))
    }
    pub fn actor_position(&self) -> Option<Position> {
        self.actor
    }
    pub fn seat(&self, id: &PlayerId) -> Option<&Seat> {
        self.seats.iter().find(|s| s.id() == id)
    }
    pub fn position(&self, id: &PlayerId) -> Option<Position> {
        self.seats.iter().position(|s| s.id() == id)
    }
    /// Seat ids clockwise from the little blind.
    pub fn order(&self) -> Vec<PlayerId> {
        self.seats.iter().map(|s| s.id().clone()).collect()
    }
    /// Ids of seats still holding cards.
    pub fn contenders(&self) -> Vec<PlayerId> {
        self.seats
            .iter()
            .filter(|s| !s.is_folded())
            .map(|s| s.id().clone())
            .collect()
    }
    pub fn unfolded(&self) -> usize {
        self.seats.iter().filter(|s| !s.is_folded()).count()
    }
    /// Largest bet in front of anyone this round.
    pub fn largest(&self) -> Chips {
        self.seats.iter().map(Seat::bet).max().unwrap_or_default()
    }
    /// Hole cards of every seat still holding cards.
    pub fn showdown_hands(&self) -> Vec<(PlayerId, Hole)> {
        self.seats
            .iter()
            .filter(|s| !s.is_folded())
            .filter_map(|s| s.hole().map(|h| (s.id().clone(), h)))
            .collect()
    }

    /// The round can close: at most one seat holds cards, or nobody owes a decision.
    pub fn is_closeable(&self) -> bool {
        self.unfolded() <= 1 || self.seats.iter().all(|s| !self.must_act(s))
    }
    /// Whether `seat` still owes a decision this round.
    /// A lone seat still betting that already matches the largest bet does not.
    fn must_act(&self, seat: &Seat) -> bool {
        let deciders = self
            .seats
            .iter()
            .filter(|s| s.state() == State::Betting)
            .count();
        self.unfolded() > 1
            && seat.state() == State::Betting
            && (seat.bet() < self.largest() || (!seat.has_acted() && deciders > 1))
    }
    /// First seat clockwise from `from` (inclusive) that owes a decision.
    fn next_actor(&self, from: Position) -> Option<Position> {
        let n = self.seats.len();
        (0..n)
            .map(|i| (from + i) % n)
            .find(|&i| self.must_act(&self.seats[i]))
    }
}

/// Transitions. Each takes a scratch copy; `GameState` throws it away on error.
impl Hand {
    pub(super) fn open(seating: &Seating, blinds: Blinds) -> Result<Self, Error> {
        let seats = seating
            .seats
            .iter()
            .map(|id| {
                seating
                    .table
                    .stack(id)
                    .map(|stack| Seat::from((id.clone(), stack)))
                    .ok_or_else(|| Error::InvalidState(format!("{} is not at the table", id)))
            })
            .collect::<Result<Vec<Seat>, Error>>()?;
        let total = seating.table.total()?;
        Ok(Self {
            table: seating.table.clone(),
            seats,
            blinds,
            deck: Deck::new(),
            board: Board::empty(),
            pots: Vec::new(),
            actor: None,
            total,
        })
    }

    pub(super) fn post_blinds(&mut self) {
        let Blinds { little, big } = self.blinds;
        self.seats[0].bet_to(little);
        self.seats[1].bet_to(big);
    }

    pub(super) fn shuffle(&mut self, seed: u64) {
        self.deck.shuffle(seed);
    }

    /// Two rounds, one card at a time, starting with the little blind.
    pub(super) fn deal_holes(&mut self) -> Result<(), Error> {
        let n = self.seats.len();
        let mut dealt = Vec::with_capacity(n * crate::HOLE_SIZE);
        for _ in 0..n * crate::HOLE_SIZE {
            dealt.push(self.deck.deal_one()?);
        }
        for (i, seat) in self.seats.iter_mut().enumerate() {
            let hole = Hole::try_from((dealt[i], dealt[i + n])).map_err(Error::InvalidState)?;
            seat.reset_hole(hole);
        }
        self.actor = self.next_actor(2 % n);
        Ok(())
    }

    /// Deals `n` community cards and opens a new round at the little blind.
    pub(super) fn reveal(&mut self, n: usize) -> Result<(), Error> {
        for _ in 0..n {
            let card = self.deck.deal_one()?;
            self.board.push(card);
        }
        self.actor = self.next_actor(0);
        Ok(())
    }

    /// A betting decision: call, raise, check or fold.
    pub(super) fn play(&mut self, phase: Phase, action: &Action) -> Result<(), Error> {
        let largest = self.largest();
        match action {
            Action::PlayerFolds { player } => {
                let pos = self.locate(phase, player)?;
                Validator::from((phase, &self.seats[pos], largest)).fold()?;
                if self.unfolded() == 1 {
                    return Err(Self::illegal(phase, "the last player in the hand cannot fold"));
                }
                self.seats[pos].fold();
                self.reallocate()?;
                self.actor = self.next_actor(self.actor.unwrap_or(pos));
            }
            Action::PlayerChecks { player } => {
                let pos = self.to_act(phase, player)?;
                Validator::from((phase, &self.seats[pos], largest)).check()?;
                self.seats[pos].reset_acted(true);
                self.actor = self.next_actor(pos + 1);
            }
            Action::PlayerCalls { player, bet } => {
                let pos = self.to_act(phase, player)?;
                Validator::from((phase, &self.seats[pos], largest)).call(*bet)?;
                self.seats[pos].bet_to(*bet);
                self.seats[pos].reset_acted(true);
                self.actor = self.next_actor(pos + 1);
            }
            Action::PlayerRaises { player, bet } => {
                let pos = self.to_act(phase, player)?;
                Validator::from((phase, &self.seats[pos], largest)).raise(*bet)?;
                self.seats[pos].bet_to(*bet);
                for (i, seat) in self.seats.iter_mut().enumerate() {
                    seat.reset_acted(i == pos);
                }
                self.actor = self.next_actor(pos + 1);
            }
            _ => return Err(Self::illegal(phase, "not a betting decision")),
        }
        Ok(())
    }

    /// Closes the betting round and moves bets into the pots.
    pub(super) fn finish(&mut self, phase: Phase) -> Result<(), Error> {
        if !self.is_closeable() {
            let waiting = self.actor().map(|s| s.id().to_string()).unwrap_or_default();
            return Err(Self::illegal(phase, &format!("still waiting on {}", waiting)));
        }
        self.collect()
    }

    /// Ends the hand early for the one seat nobody contested.
    pub(super) fn concede(&mut self, phase: Phase) -> Result<Ranking, Error> {
        let contenders = self.contenders();
        if contenders.len() != 1 {
            return Err(Self::illegal(phase, &format!("{} players still in", contenders.len())));
        }
        self.collect()?;
        Ok(Ranking::from(vec![contenders]))
    }

    pub(super) fn show(&mut self, phase: Phase, player: &PlayerId) -> Result<(), Error> {
        let pos = self.locate(phase, player)?;
        let seat = &self.seats[pos];
        if seat.is_folded() || seat.is_revealed() {
            return Err(Self::illegal(phase, &format!("{} has nothing to reveal", player)));
        }
        self.seats[pos].reveal();
        Ok(())
    }

    /// Folding an unrevealed hand at showdown.
    pub(super) fn muck(&mut self, phase: Phase, player: &PlayerId) -> Result<(), Error> {
        let pos = self.locate(phase, player)?;
        let seat = &self.seats[pos];
        if seat.is_folded() || seat.is_revealed() {
            return Err(Self::illegal(phase, &format!("{} cannot muck", player)));
        }
        if self.unfolded() == 1 {
            return Err(Self::illegal(phase, "the last player in the hand cannot muck"));
        }
        self.seats[pos].fold();
        self.reallocate()
    }

    /// Checks a ranking against the seats still holding cards.
    pub(super) fn judge(&self, phase: Phase, ranking: &Ranking) -> Result<(), Error> {
        if let Some(hidden) = self
            .seats
            .iter()
            .find(|s| !s.is_folded() && !s.is_revealed())
        {
            return Err(Self::illegal(phase, &format!("{} has not revealed", hidden.id())));
        }
        ranking
            .covers(&self.contenders())
            .map_err(Error::InvalidAction)
    }

    pub fn settle(&self, ranking: &Ranking) -> Result<Vec<Award>, Error> {
        let order = self.order();
        Showdown::from((self.pots.as_slice(), ranking, order.as_slice())).settle()
    }

    /// Pays out, hands the stacks back to the table and moves the button.
    pub(super) fn close(mut self, ranking: &Ranking) -> Result<Table, Error> {
        let awards = self.settle(ranking)?;
        let paid = awards.iter().map(|a| a.chips).sum::<Chips>();
        let potted = self.pots.iter().map(Pot::total).sum::<Chips>();
        if paid != potted {
            return Err(Error::InvalidState(format!("paid {} from {} in pots", paid, potted)));
        }
        for award in awards.iter() {
            if let Some(seat) = self.seats.iter_mut().find(|s| s.id() == &award.player) {
                seat.win(award.chips);
            }
        }
        let mut table = self.table;
        for seat in self.seats.iter() {
            table.reset_stack(seat.id(), seat.stack());
        }
        table.advance();
        Ok(table)
    }

    fn collect(&mut self) -> Result<(), Error> {
        for seat in self.seats.iter_mut() {
            seat.collect();
        }
        self.actor = None;
        self.reallocate()
    }
    fn reallocate(&mut self) -> Result<(), Error> {
        let contributions = self
            .seats
            .iter()
            .map(|s| Contribution {
                player: s.id().clone(),
                chips: s.spent(),
                folded: s.is_folded(),
            })
            .collect::<Vec<_>>();
        self.pots = Pot::allocate(&contributions)?;
        Ok(())
    }
    fn locate(&self, phase: Phase, player: &PlayerId) -> Result<Position, Error> {
        self.position(player)
            .ok_or_else(|| Self::illegal(phase, &format!("{} is not in this hand", player)))
    }
    fn to_act(&self, phase: Phase, player: &PlayerId) -> Result<Position, Error> {
        let pos = self.locate(phase, player)?;
        match self.actor {
            Some(actor) if actor == pos => Ok(pos),
            Some(actor) => Err(Self::illegal(
                phase,
                &format!("{} is waiting on {}", player, self.seats[actor].id()),
            )),
            None => Err(Self::illegal(phase, "betting is closed")),
        }
    }
    fn illegal(phase: Phase, reason: &str) -> Error {
        Error::InvalidActionForState {
            phase,
            reason: reason.to_string(),
        }
    }
}

impl std::fmt::Display for Hand {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        for (i, seat) in self.seats.iter().enumerate() {
            let actor = if Some(i) == self.actor { ">" } else { " " };
            writeln!(f, "{}{}", actor, seat)?;
        }
        for pot in self.pots.iter() {
            writeln!(f, "  pot {}", pot)?;
        }
        write!(f, "  board {}", self.board)
    }
}
