use super::error::Error;
use super::phase::Phase;
use super::seat::Seat;
use crate::Chips;

/// Betting legality for one seat facing the round's largest bet.
///
/// Pure: nothing here mutates the hand. `bet` payloads are round totals, and
/// the seat's "stack" for these checks is everything it can have in front
/// this round, `stack + bet`.
pub struct Validator<'a> {
    phase: Phase,
    seat: &'a Seat,
    largest: Chips,
}

impl<'a> From<(Phase, &'a Seat, Chips)> for Validator<'a> {
    fn from((phase, seat, largest): (Phase, &'a Seat, Chips)) -> Self {
        Self {
            phase,
            seat,
            largest,
        }
    }
}

impl Validator<'_> {
    pub fn fold(&self) -> Result<(), Error> {
        if self.seat.is_folded() {
            return self.illegal(format!("{} already folded", self.seat.id()));
        }
        Ok(())
    }
    pub fn check(&self) -> Result<(), Error> {
        self.decides()?;
        if self.largest > 0 {
            return self.illegal(format!("cannot check facing a bet of {}", self.largest));
        }
        Ok(())
    }
    pub fn call(&self, bet: Chips) -> Result<(), Error> {
        Self::positive(bet)?;
        self.decides()?;
        if self.largest == 0 {
            return self.illegal("nothing to call, check instead".into());
        }
        if bet > self.seat.limit() {
            return self.illegal(format!("call of {} exceeds stack {}", bet, self.seat.limit()));
        }
        if bet > self.largest {
            return self.illegal(format!("call of {} exceeds largest bet {}", bet, self.largest));
        }
        if bet < self.largest && bet != self.seat.limit() {
            return self.illegal(format!("short call of {} must be all-in", bet));
        }
        Ok(())
    }
    pub fn raise(&self, bet: Chips) -> Result<(), Error> {
        Self::positive(bet)?;
        self.decides()?;
        if bet > self.seat.limit() {
            return self.illegal(format!("raise to {} exceeds stack {}", bet, self.seat.limit()));
        }
        if bet <= self.largest {
            return self.illegal(format!("raise to {} must exceed {}", bet, self.largest));
        }
        Ok(())
    }

    /// Only seats still betting make decisions.
    fn decides(&self) -> Result<(), Error> {
        match self.seat.is_folded() || self.seat.is_all_in() {
            true => self.illegal(format!("{} has no decision to make", self.seat.id())),
            false => Ok(()),
        }
    }
    fn positive(bet: Chips) -> Result<(), Error> {
        match bet {
            0 => Err(Error::InvalidAction("bet must be positive".into())),
            _ => Ok(()),
        }
    }
    fn illegal(&self, reason: String) -> Result<(), Error> {
        Err(Error::InvalidActionForState {
            phase: self.phase,
            reason,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gameplay::player::PlayerId;

    fn seat(stack: Chips, bet: Chips) -> Seat {
        let mut seat = Seat::from((PlayerId::from("hero"), stack + bet));
        seat.bet_to(bet);
        seat
    }
    fn illegal<T>(result: Result<T, Error>) -> bool {
        matches!(result, Err(Error::InvalidActionForState { .. }))
    }

    #[test]
    fn short_stack_may_call_all_in_only() {
        let seat = seat(5, 0);
        let rules = Validator::from((Phase::PostFlopBetting, &seat, 20));
        assert!(rules.call(5).is_ok());
        assert!(illegal(rules.call(10)));
        assert!(illegal(rules.call(20)));
    }

    #[test]
    fn check_facing_bet_is_illegal() {
        let seat = seat(100, 0);
        assert!(illegal(Validator::from((Phase::PostFlopBetting, &seat, 5)).check()));
        assert!(Validator::from((Phase::PostFlopBetting, &seat, 0)).check().is_ok());
    }

    #[test]
    fn call_needs_a_bet_to_call() {
        let seat = seat(100, 0);
        let rules = Validator::from((Phase::PostTurnBetting, &seat, 0));
        assert!(illegal(rules.call(4)));
    }

    #[test]
    fn zero_payload_is_malformed() {
        let seat = seat(100, 0);
        let rules = Validator::from((Phase::PreFlopBetting, &seat, 2));
        assert!(matches!(rules.call(0), Err(Error::InvalidAction(_))));
        assert!(matches!(rules.raise(0), Err(Error::InvalidAction(_))));
    }

    #[test]
    fn raise_bounds() {
        let seat = seat(98, 2);
        let rules = Validator::from((Phase::PreFlopBetting, &seat, 10));
        assert!(rules.raise(11).is_ok());
        assert!(rules.raise(100).is_ok());
        assert!(illegal(rules.raise(10)));
        assert!(illegal(rules.raise(101)));
    }

    #[test]
    fn big_blind_may_call_its_own_bet() {
        let seat = seat(98, 2);
        let rules = Validator::from((Phase::PreFlopBetting, &seat, 2));
        assert!(rules.call(2).is_ok());
    }

    #[test]
    fn all_in_seat_has_no_decision() {
        let seat = seat(0, 7);
        let rules = Validator::from((Phase::PreFlopBetting, &seat, 20));
        assert!(illegal(rules.call(7)));
        assert!(rules.fold().is_ok());
    }
}
