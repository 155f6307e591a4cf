use super::error::Error;
use super::hand::Hand;
use super::hand::Seating;
use super::phase::Phase;
use super::ranking::Ranking;
use super::table::Table;
use crate::Chips;
use std::collections::HashSet;

/// One invariant checker shared by every phase. Phases differ only in what
/// they expect (board size, dealt holes, posted blinds, open betting,
/// reveals), which `Phase` answers for itself.
fn ensure(ok: bool, violation: impl FnOnce() -> String) -> Result<(), Error> {
    match ok {
        true => Ok(()),
        false => Err(Error::InvalidState(violation())),
    }
}

impl Table {
    pub fn audit(&self) -> Result<(), Error> {
        let ids = self.players().iter().map(|p| p.id()).collect::<HashSet<_>>();
        ensure(self.players().len() <= crate::MAX_PLAYERS, || {
            format!("{} players exceed the table limit", self.players().len())
        })?;
        ensure(ids.len() == self.players().len(), || "duplicate player id".into())?;
        ensure(self.players().is_empty() || self.button() < self.players().len(), || {
            format!("button {} off the table", self.button())
        })?;
        self.total().map(|_| ())
    }
}

impl Seating {
    pub fn audit(&self) -> Result<(), Error> {
        self.table().audit()?;
        let ids = self.seats().iter().collect::<HashSet<_>>();
        ensure(self.seats().len() >= crate::MIN_PLAYERS, || "too few players for a hand".into())?;
        ensure(ids.len() == self.seats().len(), || "player seated twice".into())?;
        for id in self.seats() {
            let stack = self.table().stack(id).unwrap_or_default();
            ensure(stack > 0, || format!("{} has no chips to play", id))?;
        }
        Ok(())
    }
}

impl Hand {
    pub fn audit(&self, phase: Phase) -> Result<(), Error> {
        self.table().audit()?;
        self.audit_seats()?;
        self.audit_cards(phase)?;
        self.audit_bets(phase)?;
        self.audit_pots()?;
        self.audit_chips()
    }

    /// Extra checks once a ranking has been accepted.
    pub fn audit_ranking(&self, ranking: &Ranking) -> Result<(), Error> {
        ranking.covers(&self.contenders()).map_err(Error::InvalidState)
    }

    fn audit_seats(&self) -> Result<(), Error> {
        let seats = self.seats();
        let ids = seats.iter().map(|s| s.id()).collect::<HashSet<_>>();
        ensure(seats.len() >= crate::MIN_PLAYERS, || "too few players in hand".into())?;
        ensure(ids.len() == seats.len(), || "player seated twice".into())?;
        ensure(self.unfolded() >= 1, || "everyone folded".into())?;
        let blinds = self.blinds();
        ensure(blinds.little > 0 && blinds.big > 0, || "blinds must be positive".into())?;
        ensure(blinds.little <= blinds.big, || "little blind above big blind".into())?;
        for seat in seats {
            ensure(self.table().stack(seat.id()).is_some(), || {
                format!("{} is not at the table", seat.id())
            })?;
            ensure(seat.is_folded() || seat.is_all_in() == (seat.stack() == 0), || {
                format!("{} all-in flag disagrees with stack", seat.id())
            })?;
        }
        Ok(())
    }

    fn audit_cards(&self, phase: Phase) -> Result<(), Error> {
        let holes = self.seats().iter().filter_map(|s| s.hole()).collect::<Vec<_>>();
        let cards = self
            .deck()
            .cards()
            .iter()
            .copied()
            .chain(holes.iter().flat_map(|h| h.cards()))
            .chain(self.board().cards().iter().copied())
            .collect::<Vec<_>>();
        let unique = cards.iter().collect::<HashSet<_>>();
        ensure(cards.len() == crate::DECK_SIZE, || {
            format!("{} cards in play", cards.len())
        })?;
        ensure(unique.len() == crate::DECK_SIZE, || "duplicate card".into())?;
        ensure(phase.n_board().contains(&self.board().len()), || {
            format!("{} board cards in {}", self.board().len(), phase)
        })?;
        let dealt = if phase.has_holes() { self.seats().len() } else { 0 };
        ensure(holes.len() == dealt, || format!("{} holes dealt in {}", holes.len(), phase))?;
        for seat in self.seats() {
            ensure(!seat.is_revealed() || phase.has_reveals(), || {
                format!("{} revealed before showdown", seat.id())
            })?;
            ensure(!seat.is_revealed() || !seat.is_folded(), || {
                format!("{} revealed a folded hand", seat.id())
            })?;
        }
        Ok(())
    }

    fn audit_bets(&self, phase: Phase) -> Result<(), Error> {
        let seats = self.seats();
        if phase.has_posted_blinds() {
            let blinds = self.blinds();
            let posts = [blinds.little, blinds.big];
            for (i, seat) in seats.iter().enumerate() {
                let expected = posts.get(i).map(|&b| b.min(seat.limit())).unwrap_or(0);
                ensure(seat.bet() == expected, || {
                    format!("{} posted {} instead of {}", seat.id(), seat.bet(), expected)
                })?;
            }
        } else if !phase.is_betting() {
            ensure(seats.iter().all(|s| s.bet() == 0), || format!("open bets in {}", phase))?;
        }
        match self.actor_position() {
            Some(i) => ensure(phase.is_betting() && i < seats.len(), || {
                format!("seat {} to act in {}", i, phase)
            }),
            None => Ok(()),
        }
    }

    fn audit_pots(&self) -> Result<(), Error> {
        let seated = self.order();
        let contenders = self.contenders();
        for pot in self.pots() {
            ensure(pot.players().iter().all(|p| seated.contains(p)), || {
                format!("pot {} has an outsider", pot)
            })?;
            ensure(!pot.eligible().is_empty(), || format!("pot {} has no winner", pot))?;
            ensure(pot.eligible().iter().all(|p| contenders.contains(p)), || {
                format!("pot {} has a folded winner", pot)
            })?;
        }
        let potted = self.pots().iter().map(|p| p.total()).sum::<Chips>();
        let spent = self.seats().iter().map(|s| s.spent()).sum::<Chips>();
        ensure(potted == spent, || format!("pots hold {} of {} spent", potted, spent))
    }

    fn audit_chips(&self) -> Result<(), Error> {
        let held = self
            .seats()
            .iter()
            .try_fold(0 as Chips, |sum, s| {
                sum.checked_add(s.stack())?
                    .checked_add(s.bet())?
                    .checked_add(s.spent())
            })
            .ok_or_else(|| Error::InvalidState("chip count overflows".into()))?;
        ensure(held == self.total(), || {
            format!("{} chips in the hand, {} expected", held, self.total())
        })
    }
}
