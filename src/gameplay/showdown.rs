use super::error::Error;
use super::player::PlayerId;
use super::pot::Pot;
use super::ranking::Ranking;
use crate::Chips;

/// Chips paid to one player when pots are distributed.
#[derive(Debug, Clone, PartialEq, Eq)]
#[derive(serde::Serialize, serde::Deserialize)]
pub struct Award {
    pub player: PlayerId,
    pub chips: Chips,
}

impl std::fmt::Display for Award {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{} +{}", self.player, self.chips)
    }
}

/// Ephemeral calculation of who wins what.
///
/// Each pot goes to the best ranked tier among its eligible players, split
/// evenly. Indivisible chips go one at a time to the tied winners in `order`,
/// which is seat order starting clockwise of the button.
pub struct Showdown<'a> {
    pots: &'a [Pot],
    ranking: &'a Ranking,
    order: &'a [PlayerId],
}

impl<'a> From<(&'a [Pot], &'a Ranking, &'a [PlayerId])> for Showdown<'a> {
    fn from((pots, ranking, order): (&'a [Pot], &'a Ranking, &'a [PlayerId])) -> Self {
        Self {
            pots,
            ranking,
            order,
        }
    }
}

impl Showdown<'_> {
    /// Payouts for every pot, in seat order. Nothing is paid unless every
    /// pot can be paid.
    pub fn settle(&self) -> Result<Vec<Award>, Error> {
        let mut awards = self
            .order
            .iter()
            .map(|p| Award {
                player: p.clone(),
                chips: 0,
            })
            .collect::<Vec<Award>>();
        for pot in self.pots {
            let winners = self.winners(pot)?;
            let n = winners.len() as Chips;
            let share = pot.total() / n;
            let remainder = (pot.total() % n) as usize;
            for (i, winner) in winners.iter().enumerate() {
                let bonus = if i < remainder { 1 } else { 0 };
                let award = awards
                    .iter_mut()
                    .find(|a| &a.player == winner)
                    .ok_or_else(|| Error::InvalidState(format!("{} is not seated", winner)))?;
                award.chips += share + bonus;
            }
        }
        Ok(awards.into_iter().filter(|a| a.chips > 0).collect())
    }

    /// Best ranked tier among the pot's eligible players, in seat order.
    fn winners(&self, pot: &Pot) -> Result<Vec<PlayerId>, Error> {
        self.ranking
            .tiers()
            .iter()
            .map(|tier| {
                self.order
                    .iter()
                    .filter(|p| tier.contains(p))
                    .filter(|p| pot.eligible().contains(p))
                    .cloned()
                    .collect::<Vec<_>>()
            })
            .find(|winners| !winners.is_empty())
            .ok_or_else(|| Error::InvalidState(format!("nobody ranked can win pot {}", pot)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gameplay::pot::Contribution;

    fn ids(players: &[&str]) -> Vec<PlayerId> {
        players.iter().map(|&p| PlayerId::from(p)).collect()
    }
    fn pots(stakes: &[(&str, Chips, bool)]) -> Vec<Pot> {
        let contributions = stakes
            .iter()
            .map(|&(p, chips, folded)| Contribution {
                player: PlayerId::from(p),
                chips,
                folded,
            })
            .collect::<Vec<_>>();
        Pot::allocate(&contributions).unwrap()
    }
    fn award(player: &str, chips: Chips) -> Award {
        Award {
            player: PlayerId::from(player),
            chips,
        }
    }

    #[test]
    fn best_hand_takes_everything() {
        let pots = pots(&[("a", 10, false), ("b", 10, false), ("c", 10, true)]);
        let ranking = Ranking::from(vec![ids(&["b"]), ids(&["a"])]);
        let order = ids(&["a", "b", "c"]);
        let awards = Showdown::from((pots.as_slice(), &ranking, order.as_slice())).settle();
        assert!(awards == Ok(vec![award("b", 30)]));
    }

    #[test]
    fn short_stack_wins_main_pot_only() {
        let pots = pots(&[("a", 50, false), ("b", 50, false), ("c", 20, false)]);
        let ranking = Ranking::from(vec![ids(&["c"]), ids(&["b"]), ids(&["a"])]);
        let order = ids(&["a", "b", "c"]);
        let awards = Showdown::from((pots.as_slice(), &ranking, order.as_slice())).settle();
        assert!(awards == Ok(vec![award("b", 60), award("c", 60)]));
    }

    #[test]
    fn split_pot_odd_chip_goes_clockwise() {
        let pots = pots(&[("a", 3, true), ("b", 4, false), ("c", 4, false)]);
        let ranking = Ranking::from(vec![ids(&["c", "b"])]);
        let order = ids(&["a", "b", "c"]);
        let awards = Showdown::from((pots.as_slice(), &ranking, order.as_slice())).settle();
        assert!(awards == Ok(vec![award("b", 6), award("c", 5)]));
    }

    #[test]
    fn incomplete_ranking_pays_nothing() {
        let pots = pots(&[("a", 10, false), ("b", 10, false)]);
        let ranking = Ranking::from(vec![ids(&["z"])]);
        let order = ids(&["a", "b"]);
        let awards = Showdown::from((pots.as_slice(), &ranking, order.as_slice())).settle();
        assert!(matches!(awards, Err(Error::InvalidState(_))));
    }
}
