use super::player::PlayerId;
use crate::Chips;
use crate::cards::Hole;

/// A player's place in the current hand.
///
/// # Fields
///
/// - `state`: Betting, Shoving (all-in), or Folding
/// - `stack`: Chips behind (not yet committed)
/// - `bet`: Chips committed this round
/// - `spent`: Chips committed in earlier rounds of this hand
/// - `hole`: Hole cards, once dealt (private)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Seat {
    id: PlayerId,
    state: State,
    stack: Chips,
    bet: Chips,
    spent: Chips,
    hole: Option<Hole>,
    acted: bool,
    revealed: bool,
}

impl From<(PlayerId, Chips)> for Seat {
    fn from((id, stack): (PlayerId, Chips)) -> Self {
        Self {
            id,
            stack,
            bet: 0,
            spent: 0,
            hole: None,
            acted: false,
            revealed: false,
            state: State::Betting,
        }
    }
}

impl Seat {
    pub fn id(&self) -> &PlayerId {
        &self.id
    }
    pub fn state(&self) -> State {
        self.state
    }
    /// Chips behind.
    pub fn stack(&self) -> Chips {
        self.stack
    }
    /// Chips in front this round.
    pub fn bet(&self) -> Chips {
        self.bet
    }
    /// Chips moved to the pots in earlier rounds.
    pub fn spent(&self) -> Chips {
        self.spent
    }
    /// Most this seat can have in front this round.
    pub fn limit(&self) -> Chips {
        self.stack + self.bet
    }
    pub fn hole(&self) -> Option<Hole> {
        self.hole
    }
    pub fn has_acted(&self) -> bool {
        self.acted
    }
    pub fn is_revealed(&self) -> bool {
        self.revealed
    }
    pub fn is_folded(&self) -> bool {
        self.state == State::Folding
    }
    pub fn is_all_in(&self) -> bool {
        self.state == State::Shoving
    }

    /// Raises this round's bet to `total`, moving the difference from the stack.
    /// Callers check `total` against `limit()` first.
    pub fn bet_to(&mut self, total: Chips) {
        let added = total.saturating_sub(self.bet).min(self.stack);
        self.stack -= added;
        self.bet += added;
        if self.stack == 0 {
            self.state = State::Shoving;
        }
    }
    /// Moves this round's bet into the pots.
    pub fn collect(&mut self) {
        self.spent += self.bet;
        self.bet = 0;
        self.acted = false;
    }
    pub fn win(&mut self, chips: Chips) {
        self.stack += chips;
    }
    pub fn fold(&mut self) {
        self.state = State::Folding;
    }
    pub fn reveal(&mut self) {
        self.revealed = true;
    }
    pub fn reset_acted(&mut self, acted: bool) {
        self.acted = acted;
    }
    pub fn reset_hole(&mut self, hole: Hole) {
        self.hole = Some(hole);
    }
}

impl std::fmt::Display for Seat {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{} {:<8} ${:>5} +{:<5}", self.state, self.id, self.stack, self.bet)?;
        match self.hole {
            Some(hole) => write!(f, " {}", hole),
            None => Ok(()),
        }
    }
}

/// Betting status within a hand.
///
/// - `Betting`: still making decisions
/// - `Shoving`: all-in, no more decisions but still in the pots
/// - `Folding`: out of the hand
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[derive(serde::Serialize, serde::Deserialize)]
pub enum State {
    Betting,
    Shoving,
    Folding,
}

impl State {
    /// True if the player is still competing for the pots.
    pub fn is_active(&self) -> bool {
        matches!(self, Self::Betting | Self::Shoving)
    }
}

impl std::fmt::Display for State {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            State::Betting => write!(f, "P"),
            State::Shoving => write!(f, "S"),
            State::Folding => write!(f, "F"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn betting_moves_chips_forward() {
        let mut seat = Seat::from((PlayerId::from("a"), 100));
        seat.bet_to(10);
        seat.bet_to(25);
        assert!(seat.stack() == 75);
        assert!(seat.bet() == 25);
        assert!(seat.limit() == 100);
        seat.collect();
        assert!(seat.bet() == 0);
        assert!(seat.spent() == 25);
    }

    #[test]
    fn emptying_the_stack_is_all_in() {
        let mut seat = Seat::from((PlayerId::from("a"), 5));
        seat.bet_to(5);
        assert!(seat.is_all_in());
        assert!(seat.state().is_active());
    }
}
