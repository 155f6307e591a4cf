use super::*;
use crate::Chips;
use crate::config::Config;
use crate::config::Fallback;
use crate::gameplay::*;
use anyhow::Context;

/// Central coordinator for a game between agents.
/// Owns the single source of truth (the `GameState` value), asks the dealer
/// or the agent to act, and tells every agent what happened.
///
/// Room runs in a loop:
/// - Dealer: apply the dealer's action and broadcast it
/// - Decision: ask the agent to act with a deadline, validate, apply, broadcast
/// - GameOver: return the final table
///
/// A rejected submission leaves the state untouched; the agent is told why
/// and asked again, up to `retries` times. Timeouts, agent errors and
/// exhausted retries are replaced by the configured fallback.
pub struct Room {
    config: Config,
    dealer: Dealer,
    state: GameState,
    agents: Vec<(PlayerId, Box<dyn Agent>)>,
}

impl Room {
    /// Showdowns are ranked by [`HighCard`] until a real evaluator is plugged
    /// in with [`Room::with_ranker`]. It ignores pairs, straights and flushes,
    /// so pots can go to the wrong player; fine for exercising the referee,
    /// not for scoring agents.
    pub fn new(config: Config) -> anyhow::Result<Self> {
        config.validate().context("room config")?;
        Ok(Self {
            dealer: Dealer::from(&config),
            state: GameState::new(),
            agents: Vec::new(),
            config,
        })
    }
    /// Replaces the showdown ranker, e.g. with a seven-card hand evaluator.
    pub fn with_ranker<R>(mut self, ranker: R) -> Self
    where
        R: Ranker + Send + 'static,
    {
        self.dealer = self.dealer.with_ranker(ranker);
        self
    }
    /// Buys `player` in for `stack` and seats their agent.
    pub fn sit<A, P>(&mut self, player: P, stack: Chips, agent: A) -> anyhow::Result<()>
    where
        A: Agent + 'static,
        P: Into<PlayerId>,
    {
        let player = player.into();
        let action = Action::PlayerBuysIn {
            player: player.clone(),
            stack,
        };
        self.state = self
            .state
            .apply(&action)
            .with_context(|| format!("seating {}", player))?;
        self.agents.push((player, Box::new(agent)));
        Ok(())
    }
    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub async fn run(mut self) -> anyhow::Result<Table> {
        log::info!("game starting with {} players", self.agents.len());
        loop {
            if self.state.is_over() {
                let table = self.state.table();
                log::info!("game over after {} hands\n{}", self.dealer.hands(), table);
                return Ok(table);
            }
            match self.dealer.next(&self.state) {
                Some(action) => self.deal(action).await?,
                None => self.turn().await?,
            }
        }
    }
}

impl Room {
    async fn deal(&mut self, action: Action) -> anyhow::Result<()> {
        let awards = self.state.awards().context("previewing payouts")?;
        self.state = self
            .state
            .apply(&action)
            .with_context(|| format!("dealer {} in {}", action, self.state.phase()))?;
        if action == Action::StartHand {
            log::info!("hand {}", self.dealer.hands());
        }
        self.broadcast(&Event::Play(action)).await;
        for Award { player, chips } in awards {
            log::info!("{} wins {}", player, chips);
            self.broadcast(&Event::Award { player, chips }).await;
        }
        self.observe().await;
        Ok(())
    }

    async fn turn(&mut self) -> anyhow::Result<()> {
        let player = self
            .state
            .actor()
            .cloned()
            .ok_or_else(|| anyhow::anyhow!("nobody to act in {}", self.state.phase()))?;
        match self.ask(&player).await? {
            Some(action) => {
                self.broadcast(&Event::Play(action)).await;
            }
            None => {
                let action = self.fallback(&player);
                log::warn!("forcing {}", action);
                self.state = self
                    .state
                    .apply(&action)
                    .with_context(|| format!("fallback {} in {}", action, self.state.phase()))?;
                self.broadcast(&Event::Forced { player, action }).await;
            }
        }
        self.observe().await;
        Ok(())
    }

    /// Applies the agent's decision if one arrives in time and is legal.
    /// `None` means the fallback must stand in.
    async fn ask(&mut self, player: &PlayerId) -> anyhow::Result<Option<Action>> {
        let timeout = self.config.timeout();
        for attempt in 0..=self.config.retries {
            let view = View::from((&self.state, player));
            let agent = self.agent(player)?;
            let action = match tokio::time::timeout(timeout, agent.decide_action(player, &view)).await {
                Ok(Ok(action)) => action,
                Ok(Err(e)) => {
                    log::warn!("{} failed to decide: {:#}", player, e);
                    return Ok(None);
                }
                Err(_) => {
                    log::warn!("{} timed out after {:?}", player, timeout);
                    return Ok(None);
                }
            };
            let result = match action.player() {
                Some(p) if p == player => self.state.apply(&action),
                _ => Err(Error::InvalidAction(format!("{} submitted {}", player, action))),
            };
            match result {
                Ok(next) => {
                    self.state = next;
                    return Ok(Some(action));
                }
                Err(error) if error.is_retryable() => {
                    log::warn!("{} attempt {}: {}", player, attempt + 1, error);
                    let event = Event::Rejected {
                        player: player.clone(),
                        error,
                    };
                    self.agent(player)?.observe_event(&event).await;
                }
                Err(error) => return Err(error).context(format!("{} broke the game", action)),
            }
        }
        Ok(None)
    }

    /// Passive play checks, or takes a call that costs nothing more (the big
    /// blind's option in a limped pot). Anything else folds.
    fn fallback(&self, player: &PlayerId) -> Action {
        let fold = Action::PlayerFolds {
            player: player.clone(),
        };
        match self.config.fallback {
            Fallback::Fold => fold,
            Fallback::Passive => {
                let current = self
                    .state
                    .hand()
                    .and_then(|h| h.seat(player))
                    .map(|s| s.bet());
                self.state
                    .options(player)
                    .into_iter()
                    .find(|a| match a {
                        Action::PlayerChecks { .. } => true,
                        Action::PlayerCalls { bet, .. } => Some(*bet) == current,
                        _ => false,
                    })
                    .unwrap_or(fold)
            }
        }
    }

    fn agent(&mut self, player: &PlayerId) -> anyhow::Result<&mut Box<dyn Agent>> {
        self.agents
            .iter_mut()
            .find(|(id, _)| id == player)
            .map(|(_, agent)| agent)
            .ok_or_else(|| anyhow::anyhow!("no agent seated for {}", player))
    }
}

impl Room {
    async fn broadcast(&mut self, event: &Event) {
        log::trace!("{}", event);
        for (_, agent) in self.agents.iter_mut() {
            agent.observe_event(event).await;
        }
    }
    async fn observe(&mut self) {
        for (id, agent) in self.agents.iter_mut() {
            let view = View::from((&self.state, &*id));
            agent.observe_state(&view).await;
        }
    }
}
