use super::player::PlayerId;
use crate::cards::Board;
use crate::cards::Hole;
use crate::cards::Rank;
use std::collections::HashSet;

/// Showdown order of the players still holding cards.
///
/// Tiers are best first; players within a tier hold equal hands.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[derive(serde::Serialize, serde::Deserialize)]
pub struct Ranking(Vec<Vec<PlayerId>>);

impl From<Vec<Vec<PlayerId>>> for Ranking {
    fn from(tiers: Vec<Vec<PlayerId>>) -> Self {
        Self(tiers)
    }
}

impl Ranking {
    pub fn tiers(&self) -> &[Vec<PlayerId>] {
        &self.0
    }
    pub fn players(&self) -> impl Iterator<Item = &PlayerId> {
        self.0.iter().flatten()
    }
    /// Checks that `expected` is named exactly once, with nothing else mixed in.
    pub fn covers(&self, expected: &[PlayerId]) -> Result<(), String> {
        let mut seen = HashSet::new();
        if self.0.iter().any(|tier| tier.is_empty()) {
            return Err("ranking has an empty tier".into());
        }
        for player in self.players() {
            if !seen.insert(player) {
                return Err(format!("{} ranked twice", player));
            }
            if !expected.contains(player) {
                return Err(format!("{} cannot be ranked", player));
            }
        }
        match expected.iter().find(|p| !seen.contains(p)) {
            Some(missing) => Err(format!("{} missing from ranking", missing)),
            None => Ok(()),
        }
    }
}

impl std::fmt::Display for Ranking {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let tiers = self
            .0
            .iter()
            .map(|tier| tier.iter().map(|p| p.to_string()).collect::<Vec<_>>().join("="))
            .collect::<Vec<_>>();
        write!(f, "{}", tiers.join(" > "))
    }
}

/// Orders showdown hands. Hand strength evaluation lives outside the referee;
/// anything that can compare holdings plugs in here.
pub trait Ranker {
    fn rank(&self, hands: &[(PlayerId, Hole)], board: &Board) -> Ranking;
}

impl<F> Ranker for F
where
    F: Fn(&[(PlayerId, Hole)], &Board) -> Ranking,
{
    fn rank(&self, hands: &[(PlayerId, Hole)], board: &Board) -> Ranking {
        self(hands, board)
    }
}

/// Compares the seven available card ranks, highest first, ignoring suits
/// and combinations. Deterministic and cheap; useful for simulations that
/// only need a total order, not real hand strength: a pair or a flush can
/// lose to a bare ace. Plug a proper evaluator in through [`Ranker`] wherever
/// payouts matter.
#[derive(Debug, Clone, Copy, Default)]
pub struct HighCard;

impl Ranker for HighCard {
    fn rank(&self, hands: &[(PlayerId, Hole)], board: &Board) -> Ranking {
        let mut scored = hands
            .iter()
            .map(|(id, hole)| {
                let mut ranks = hole
                    .cards()
                    .iter()
                    .chain(board.cards())
                    .map(|c| c.rank())
                    .collect::<Vec<Rank>>();
                ranks.sort_unstable_by(|a, b| b.cmp(a));
                (ranks, id.clone())
            })
            .collect::<Vec<_>>();
        scored.sort_by(|(a, _), (b, _)| b.cmp(a));
        let mut tiers: Vec<(Vec<Rank>, Vec<PlayerId>)> = Vec::new();
        for (ranks, id) in scored {
            match tiers.last_mut() {
                Some((best, tier)) if *best == ranks => tier.push(id),
                _ => tiers.push((ranks, vec![id])),
            }
        }
        Ranking(tiers.into_iter().map(|(_, tier)| tier).collect())
    }
}
