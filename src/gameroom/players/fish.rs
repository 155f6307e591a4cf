use crate::gameplay::*;
use crate::gameroom::*;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use rand::seq::IndexedRandom;

/// Example agent that chooses uniformly from the options it is shown.
pub struct Fish(SmallRng);

impl From<u64> for Fish {
    fn from(seed: u64) -> Self {
        Self(SmallRng::seed_from_u64(seed))
    }
}

impl Default for Fish {
    fn default() -> Self {
        Self(SmallRng::from_rng(&mut rand::rng()))
    }
}

#[async_trait::async_trait]
impl Agent for Fish {
    async fn decide_action(&mut self, player: &PlayerId, view: &View) -> anyhow::Result<Action> {
        view.options
            .choose(&mut self.0)
            .cloned()
            .ok_or_else(|| anyhow::anyhow!("{} asked to act with no options", player))
    }
}
