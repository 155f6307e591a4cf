use super::error::Error;
use super::player::Player;
use super::player::PlayerId;
use crate::Chips;
use crate::Position;

/// Everyone in the game and where the button sits.
///
/// Persists across hands. Players who run out of chips keep their place
/// but are skipped when seating a hand.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[derive(serde::Serialize, serde::Deserialize)]
pub struct Table {
    players: Vec<Player>,
    button: Position,
}

impl Table {
    pub fn players(&self) -> &[Player] {
        &self.players
    }
    pub fn button(&self) -> Position {
        self.button
    }
    pub fn stack(&self, id: &PlayerId) -> Option<Chips> {
        self.players.iter().find(|p| p.id() == id).map(Player::stack)
    }
    /// Players with chips.
    pub fn funded(&self) -> usize {
        self.players.iter().filter(|p| p.stack() > 0).count()
    }
    pub fn total(&self) -> Result<Chips, Error> {
        self.players
            .iter()
            .try_fold(0 as Chips, |sum, p| sum.checked_add(p.stack()))
            .ok_or_else(|| Error::InvalidState("chip total overflows".into()))
    }

    /// Adds a player. The button moves to them so the first hand's little
    /// blind is the first player to sit.
    pub fn sit(&mut self, player: Player) {
        self.players.push(player);
        self.button = self.players.len() - 1;
    }
    /// Funded players clockwise from the one after the button.
    pub fn seating(&self) -> Vec<(PlayerId, Chips)> {
        let n = self.players.len();
        (1..=n)
            .map(|i| (self.button + i) % n)
            .map(|i| &self.players[i])
            .filter(|p| p.stack() > 0)
            .map(|p| (p.id().clone(), p.stack()))
            .collect()
    }
    /// Moves the button to the next funded player.
    pub fn advance(&mut self) {
        let n = self.players.len();
        if let Some(next) = (1..=n)
            .map(|i| (self.button + i) % n)
            .find(|&i| self.players[i].stack() > 0)
        {
            self.button = next;
        }
    }
    pub fn reset_stack(&mut self, id: &PlayerId, stack: Chips) {
        if let Some(player) = self.players.iter_mut().find(|p| p.id() == id) {
            player.reset_stack(stack);
        }
    }
}

impl std::fmt::Display for Table {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        for (i, player) in self.players.iter().enumerate() {
            let button = if i == self.button { "*" } else { " " };
            writeln!(f, "{}{}", button, player)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(stacks: &[(&str, Chips)]) -> Table {
        let mut table = Table::default();
        for &(id, stack) in stacks {
            table.sit(Player::from((PlayerId::from(id), stack)));
        }
        table
    }

    #[test]
    fn first_hand_starts_left_of_last_seat() {
        let table = table(&[("a", 100), ("b", 100), ("c", 100)]);
        let seating = table.seating();
        assert!(seating[0].0 == PlayerId::from("a"));
        assert!(seating[1].0 == PlayerId::from("b"));
        assert!(seating[2].0 == PlayerId::from("c"));
    }

    #[test]
    fn broke_players_are_skipped() {
        let mut table = table(&[("a", 100), ("b", 0), ("c", 100)]);
        assert!(table.funded() == 2);
        table.advance();
        assert!(table.button() == 0);
        table.advance();
        assert!(table.button() == 2);
        let seating = table.seating();
        assert!(seating.len() == 2);
        assert!(seating[0].0 == PlayerId::from("a"));
    }
}
