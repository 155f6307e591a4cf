use super::card::Card;

/// Community cards, in reveal order: three on the flop, then turn, then river.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
#[derive(serde::Serialize, serde::Deserialize)]
pub struct Board(Vec<Card>);

impl Board {
    pub fn empty() -> Self {
        Self(Vec::with_capacity(crate::BOARD_SIZE))
    }
    pub fn push(&mut self, card: Card) {
        self.0.push(card);
    }
    pub fn cards(&self) -> &[Card] {
        &self.0
    }
    pub fn len(&self) -> usize {
        self.0.len()
    }
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
    pub fn flop(&self) -> Option<&[Card]> {
        self.0.get(0..3)
    }
    pub fn turn(&self) -> Option<Card> {
        self.0.get(3).copied()
    }
    pub fn river(&self) -> Option<Card> {
        self.0.get(4).copied()
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        for card in self.0.iter() {
            write!(f, "{}  ", card)?;
        }
        Ok(())
    }
}
