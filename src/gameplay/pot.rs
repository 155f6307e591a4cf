use super::error::Error;
use super::player::PlayerId;
use crate::Chips;

/// What one hand player has put in across closed betting rounds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Contribution {
    pub player: PlayerId,
    pub chips: Chips,
    pub folded: bool,
}

/// One main or side pot.
///
/// Every contributor put in exactly `chips`. Folded contributors stay in
/// `players` but never in `eligible`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[derive(serde::Serialize, serde::Deserialize)]
pub struct Pot {
    players: Vec<PlayerId>,
    chips: Chips,
    eligible: Vec<PlayerId>,
}

impl Pot {
    pub fn players(&self) -> &[PlayerId] {
        &self.players
    }
    /// Stake per contributor.
    pub fn chips(&self) -> Chips {
        self.chips
    }
    pub fn eligible(&self) -> &[PlayerId] {
        &self.eligible
    }
    pub fn total(&self) -> Chips {
        self.chips * self.players.len() as Chips
    }

    /// Splits contributions into pots, one per distinct contribution level.
    ///
    /// Walking the levels upward, the pot between `prev` and `level` holds
    /// `level - prev` from everyone who reached `level`. A level reached only
    /// by folded players is won by whoever is still in with the largest
    /// contribution, so each pot keeps at least one eligible player.
    pub fn allocate(contributions: &[Contribution]) -> Result<Vec<Pot>, Error> {
        let live = contributions.iter().filter(|c| !c.folded).collect::<Vec<_>>();
        let mut levels = contributions
            .iter()
            .map(|c| c.chips)
            .filter(|&chips| chips > 0)
            .collect::<Vec<Chips>>();
        levels.sort_unstable();
        levels.dedup();
        if live.is_empty() && !levels.is_empty() {
            return Err(Error::InvalidState("pots with no live player".into()));
        }
        let mut pots = Vec::with_capacity(levels.len());
        let mut prev = 0;
        for level in levels {
            let players = contributions
                .iter()
                .filter(|c| c.chips >= level)
                .map(|c| c.player.clone())
                .collect::<Vec<_>>();
            let mut eligible = live
                .iter()
                .filter(|c| c.chips >= level)
                .map(|c| c.player.clone())
                .collect::<Vec<_>>();
            if eligible.is_empty() {
                let best = live.iter().map(|c| c.chips).max().unwrap_or_default();
                eligible = live
                    .iter()
                    .filter(|c| c.chips == best)
                    .map(|c| c.player.clone())
                    .collect();
            }
            pots.push(Pot {
                players,
                chips: level - prev,
                eligible,
            });
            prev = level;
        }
        Ok(pots)
    }
}

impl std::fmt::Display for Pot {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let eligible = self
            .eligible
            .iter()
            .map(|p| p.to_string())
            .collect::<Vec<_>>()
            .join(",");
        write!(f, "{:>6} [{}]", self.total(), eligible)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn contribution(player: &str, chips: Chips, folded: bool) -> Contribution {
        Contribution {
            player: PlayerId::from(player),
            chips,
            folded,
        }
    }
    fn ids(players: &[&str]) -> Vec<PlayerId> {
        players.iter().map(|&p| PlayerId::from(p)).collect()
    }

    #[test]
    fn short_all_in_makes_side_pot() {
        let pots = Pot::allocate(&[
            contribution("a", 50, false),
            contribution("b", 50, false),
            contribution("c", 20, false),
        ])
        .unwrap();
        assert!(pots.len() == 2);
        assert!(pots[0].players() == ids(&["a", "b", "c"]).as_slice());
        assert!(pots[0].chips() == 20);
        assert!(pots[0].total() == 60);
        assert!(pots[1].players() == ids(&["a", "b"]).as_slice());
        assert!(pots[1].chips() == 30);
        assert!(pots[1].total() == 60);
    }

    #[test]
    fn folded_chips_stay_in_but_cannot_win() {
        let pots = Pot::allocate(&[
            contribution("a", 10, false),
            contribution("b", 10, true),
            contribution("c", 10, false),
        ])
        .unwrap();
        assert!(pots.len() == 1);
        assert!(pots[0].total() == 30);
        assert!(pots[0].eligible() == ids(&["a", "c"]).as_slice());
    }

    #[test]
    fn dead_level_goes_to_deepest_live_player() {
        let pots = Pot::allocate(&[
            contribution("a", 4, false),
            contribution("b", 9, true),
            contribution("c", 2, false),
        ])
        .unwrap();
        assert!(pots.len() == 3);
        assert!(pots[2].players() == ids(&["b"]).as_slice());
        assert!(pots[2].eligible() == ids(&["a"]).as_slice());
    }

    #[test]
    fn nothing_contributed_means_no_pots() {
        let pots = Pot::allocate(&[contribution("a", 0, false), contribution("b", 0, false)]);
        assert!(pots == Ok(vec![]));
    }

    #[test]
    fn everyone_folded_is_invalid() {
        let pots = Pot::allocate(&[contribution("a", 3, true), contribution("b", 3, true)]);
        assert!(matches!(pots, Err(Error::InvalidState(_))));
    }

    proptest! {
        #[test]
        fn pots_conserve_contributions(
            stakes in prop::collection::vec((0u32..500, any::<bool>()), 2..10),
        ) {
            let mut contributions = stakes
                .iter()
                .enumerate()
                .map(|(i, &(chips, folded))| contribution(&format!("p{i}"), chips, folded))
                .collect::<Vec<_>>();
            contributions[0].folded = false;
            let pots = Pot::allocate(&contributions).unwrap();
            let total = pots.iter().map(Pot::total).sum::<Chips>();
            let expected = contributions.iter().map(|c| c.chips).sum::<Chips>();
            prop_assert_eq!(total, expected);
            for pot in pots.iter() {
                prop_assert!(pot.chips() > 0);
                prop_assert!(!pot.eligible().is_empty());
                for player in pot.eligible() {
                    let c = contributions.iter().find(|c| &c.player == player).unwrap();
                    prop_assert!(!c.folded);
                }
            }
        }
    }
}
