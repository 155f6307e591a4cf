use super::event::Event;
use super::view::View;
use crate::gameplay::Action;
use crate::gameplay::PlayerId;

/// Anything that plays poker from the outside: local heuristics, a bot in
/// another process, a person at a terminal.
///
/// The room treats every returned action as untrusted input and validates it
/// against the game state before applying it. Decisions are awaited with a
/// deadline, so an agent that blocks only costs itself its turn.
#[async_trait::async_trait]
pub trait Agent: Send {
    /// Called after every transition with what this agent may see.
    async fn observe_state(&mut self, _: &View) {}
    /// Called for every public event and for rejections of this agent's actions.
    async fn observe_event(&mut self, _: &Event) {}
    /// Called when the game waits on `player`'s betting decision.
    async fn decide_action(&mut self, player: &PlayerId, view: &View) -> anyhow::Result<Action>;
}
