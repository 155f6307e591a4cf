use super::rank::Rank;
use super::suit::Suit;

/// A playing card encoded as a single byte.
///
/// The 52 cards are bijectively mapped to `0..52` where the encoding is
/// `rank * 4 + suit`. This yields a natural ordering where cards are sorted
/// first by rank, then by suit within each rank.
///
/// Cards can be parsed from two-character strings like `"As"` (ace of spades)
/// or `"Tc"` (ten of clubs). Use [`Card::parse`] for multiple cards.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Card(u8);

impl Card {
    /// Extracts the rank component (2 through Ace).
    pub fn rank(&self) -> Rank {
        Rank::all()[(self.0 / 4) as usize]
    }
    /// Extracts the suit component (clubs, diamonds, hearts, spades).
    pub fn suit(&self) -> Suit {
        Suit::all()[(self.0 % 4) as usize]
    }
    /// Every card in encoding order.
    pub fn all() -> impl Iterator<Item = Card> {
        (0..crate::DECK_SIZE as u8).map(Card)
    }
}

/// (Rank, Suit) isomorphism
impl From<(Rank, Suit)> for Card {
    fn from((r, s): (Rank, Suit)) -> Self {
        Self(u8::from(r) * 4 + u8::from(s))
    }
}

/// u8 isomorphism
/// each card is mapped to its location in a sorted deck 0-51
/// Ts
/// 35
impl From<Card> for u8 {
    fn from(c: Card) -> u8 {
        c.0
    }
}
impl TryFrom<u8> for Card {
    type Error = String;
    fn try_from(n: u8) -> Result<Self, Self::Error> {
        if (n as usize) < crate::DECK_SIZE {
            Ok(Self(n))
        } else {
            Err(format!("invalid card u8: {}", n))
        }
    }
}

/// u64 representation
/// each card is just one bit turned on. this is a one-way morphism
impl From<Card> for u64 {
    fn from(c: Card) -> u64 {
        1 << u8::from(c)
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}{}", self.rank(), self.suit())
    }
}

/// str isomorphism
impl TryFrom<&str> for Card {
    type Error = String;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        let s = s.trim();
        match s.len() {
            2 => {
                let rank = Rank::try_from(&s[0..1])?;
                let suit = Suit::try_from(&s[1..2])?;
                Ok(Card::from((rank, suit)))
            }
            _ => Err("2 characters".into()),
        }
    }
}
impl Card {
    /// Parses a string of concatenated card notations into a vector of cards.
    ///
    /// Whitespace is ignored. Each card is two characters: rank then suit.
    /// Returns an error if any card fails to parse.
    pub fn parse(s: &str) -> Result<Vec<Self>, String> {
        s.replace(char::is_whitespace, "")
            .chars()
            .collect::<Vec<_>>()
            .chunks(2)
            .map(|pair| pair.iter().collect::<String>())
            .map(|pair| Self::try_from(pair.as_str()))
            .collect::<Result<Vec<Self>, _>>()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bijective_rank_suit() {
        for card in Card::all() {
            assert!(card == Card::from((card.rank(), card.suit())));
        }
    }

    #[test]
    fn bijective_u8() {
        for card in Card::all() {
            assert!(Ok(card) == Card::try_from(u8::from(card)));
        }
        assert!(Card::try_from(52u8).is_err());
    }

    #[test]
    fn ordered_by_rank() {
        let deuce = Card::from((Rank::Two, Suit::Spade));
        let trey = Card::from((Rank::Three, Suit::Club));
        assert!(deuce < trey);
    }

    #[test]
    fn parses_notation() {
        let cards = Card::parse("As Tc 2d").unwrap();
        assert_eq!(cards.len(), 3);
        assert_eq!(cards[0], Card::from((Rank::Ace, Suit::Spade)));
        assert_eq!(cards[1].to_string(), "Tc");
        assert!(Card::parse("Ax").is_err());
    }
}
