use crate::gameplay::*;
use crate::gameroom::*;

/// Calling station: checks when it can, calls everything else, never raises.
#[derive(Debug, Default)]
pub struct Station;

#[async_trait::async_trait]
impl Agent for Station {
    async fn decide_action(&mut self, player: &PlayerId, view: &View) -> anyhow::Result<Action> {
        view.options
            .iter()
            .find(|a| a.is_check())
            .or_else(|| {
                view.options
                    .iter()
                    .find(|a| matches!(a, Action::PlayerCalls { .. }))
            })
            .cloned()
            .ok_or_else(|| anyhow::anyhow!("{} has nothing to check or call", player))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn station_calls_blinds() {
        let state = [
            Action::StartHand,
            Action::SetBlinds { little: 1, big: 2 },
            Action::PlaceBlinds,
            Action::ShuffleDeck { seed: 0 },
            Action::DealHoleCards,
        ]
        .iter()
        .try_fold(
            GameState::with_players(vec![(PlayerId::from("a"), 10), (PlayerId::from("b"), 10)])
                .unwrap(),
            |state, action| state.apply(action),
        )
        .unwrap();
        let player = PlayerId::from("a");
        let view = View::from((&state, &player));
        let action = Station.decide_action(&player, &view).await.unwrap();
        assert!(action == Action::PlayerCalls { player, bet: 2 });
    }
}
