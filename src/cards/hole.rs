use super::card::Card;

/// A player's two private cards, in the order they were dealt.
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, PartialOrd, Ord)]
#[derive(serde::Serialize, serde::Deserialize)]
pub struct Hole(Card, Card);

impl Hole {
    pub fn cards(&self) -> [Card; 2] {
        [self.0, self.1]
    }
}

impl TryFrom<(Card, Card)> for Hole {
    type Error = String;
    fn try_from((a, b): (Card, Card)) -> Result<Self, Self::Error> {
        if a == b {
            Err(format!("duplicate hole card {}", a))
        } else {
            Ok(Self(a, b))
        }
    }
}

impl std::fmt::Display for Hole {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{} {}", self.0, self.1)
    }
}
