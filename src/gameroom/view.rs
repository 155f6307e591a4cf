use crate::Chips;
use crate::Position;
use crate::cards::Board;
use crate::cards::Hole;
use crate::gameplay::Action;
use crate::gameplay::Blinds;
use crate::gameplay::GameState;
use crate::gameplay::Hand;
use crate::gameplay::Phase;
use crate::gameplay::PlayerId;
use crate::gameplay::Pot;

/// One player's seat as seen by someone else at the table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeatView {
    pub id: PlayerId,
    pub stack: Chips,
    pub bet: Chips,
    pub spent: Chips,
    pub folded: bool,
    pub all_in: bool,
    /// Only for the viewer's own seat, or once revealed at showdown.
    pub hole: Option<Hole>,
}

/// Everything one player is entitled to know, self-contained enough to
/// decide on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct View {
    pub viewer: PlayerId,
    pub phase: Phase,
    pub button: Position,
    pub stacks: Vec<(PlayerId, Chips)>,
    pub blinds: Option<Blinds>,
    pub seats: Vec<SeatView>,
    pub board: Board,
    pub pots: Vec<Pot>,
    pub actor: Option<PlayerId>,
    pub largest: Chips,
    pub options: Vec<Action>,
}

impl View {
    pub fn seat(&self) -> Option<&SeatView> {
        self.seats.iter().find(|s| s.id == self.viewer)
    }
    pub fn is_turn(&self) -> bool {
        self.actor.as_ref() == Some(&self.viewer)
    }
}

impl From<(&GameState, &PlayerId)> for View {
    fn from((state, viewer): (&GameState, &PlayerId)) -> Self {
        let table = state.table();
        let hand = state.hand();
        let seats = hand
            .into_iter()
            .flat_map(Hand::seats)
            .map(|seat| SeatView {
                id: seat.id().clone(),
                stack: seat.stack(),
                bet: seat.bet(),
                spent: seat.spent(),
                folded: seat.is_folded(),
                all_in: seat.is_all_in(),
                hole: seat
                    .hole()
                    .filter(|_| seat.id() == viewer || seat.is_revealed()),
            })
            .collect();
        Self {
            viewer: viewer.clone(),
            phase: state.phase(),
            button: table.button(),
            stacks: table
                .players()
                .iter()
                .map(|p| (p.id().clone(), p.stack()))
                .collect(),
            blinds: hand.map(|h| h.blinds()),
            seats,
            board: hand.map(|h| h.board().clone()).unwrap_or_default(),
            pots: hand.map(|h| h.pots().to_vec()).unwrap_or_default(),
            actor: state.actor().cloned(),
            largest: hand.map(|h| h.largest()).unwrap_or_default(),
            options: state.options(viewer),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hides_other_holes() {
        let state = [
            Action::StartHand,
            Action::SetBlinds { little: 1, big: 2 },
            Action::PlaceBlinds,
            Action::ShuffleDeck { seed: 3 },
            Action::DealHoleCards,
        ]
        .iter()
        .try_fold(
            GameState::with_players(vec![
                (PlayerId::from("a"), 50),
                (PlayerId::from("b"), 50),
            ])
            .unwrap(),
            |state, action| state.apply(action),
        )
        .unwrap();
        let view = View::from((&state, &PlayerId::from("b")));
        assert!(view.seats.len() == 2);
        assert!(view.seats[0].hole.is_none());
        assert!(view.seats[1].hole.is_some());
        assert!(view.largest == 2);
        assert!(!view.is_turn());
        assert!(view.options.is_empty());
        let view = View::from((&state, &PlayerId::from("a")));
        assert!(view.is_turn());
        assert!(view.options.len() == 3);
    }
}
