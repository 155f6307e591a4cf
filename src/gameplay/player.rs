use crate::Chips;

/// Stable identity of a player for the life of a game.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[derive(serde::Serialize, serde::Deserialize)]
pub struct PlayerId(String);

impl PlayerId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for PlayerId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}
impl From<String> for PlayerId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A player sitting at the table, with the chips they own between hands.
#[derive(Debug, Clone, PartialEq, Eq)]
#[derive(serde::Serialize, serde::Deserialize)]
pub struct Player {
    id: PlayerId,
    stack: Chips,
}

impl From<(PlayerId, Chips)> for Player {
    fn from((id, stack): (PlayerId, Chips)) -> Self {
        Self { id, stack }
    }
}

impl Player {
    pub fn id(&self) -> &PlayerId {
        &self.id
    }
    pub fn stack(&self) -> Chips {
        self.stack
    }
    pub fn reset_stack(&mut self, stack: Chips) {
        self.stack = stack;
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{} ${:>5}", self.id, self.stack)
    }
}
