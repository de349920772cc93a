//! Hands and their scoring.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use crate::card::Card;

/// Values aces after every other card, one at a time.
///
/// Each ace counts 11 if the running total stays at or below 21, otherwise 1.
fn evaluate_cards(cards: &[Card]) -> u8 {
    let mut total: u8 = 0;
    let mut aces: u8 = 0;

    for card in cards {
        match card.rank.points() {
            Some(points) => total = total.saturating_add(points),
            None => aces += 1,
        }
    }

    for _ in 0..aces {
        if total.saturating_add(11) <= 21 {
            total += 11;
        } else {
            total = total.saturating_add(1);
        }
    }

    total
}

/// The cards held by one participant.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Hand {
    cards: Vec<Card>,
}

impl Hand {
    /// Creates a new empty hand.
    #[must_use]
    pub const fn new() -> Self {
        Self { cards: Vec::new() }
    }

    /// Creates a hand holding `cards`.
    #[must_use]
    pub fn from_cards(cards: &[Card]) -> Self {
        Self {
            cards: cards.to_vec(),
        }
    }

    /// Adds a card to the hand.
    pub fn add(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Empties the hand, dropping its cards.
    ///
    /// Use [`Hand::take_cards`] when the cards must go back to a deck.
    pub fn clear(&mut self) {
        self.cards.clear();
    }

    /// Removes and returns every card in the hand.
    pub fn take_cards(&mut self) -> Vec<Card> {
        core::mem::take(&mut self.cards)
    }

    /// Returns the cards in the hand.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Calculates the point total of the hand.
    #[must_use]
    pub fn total(&self) -> u8 {
        evaluate_cards(&self.cards)
    }

    /// Returns whether the total is over 21.
    #[must_use]
    pub fn is_busted(&self) -> bool {
        self.total() > 21
    }

    /// Returns whether the hand is a natural: two cards totaling 21.
    #[must_use]
    pub fn is_blackjack(&self) -> bool {
        self.cards.len() == 2 && self.total() == 21
    }

    /// Returns the number of cards in the hand.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

/// How much of a hand a view exposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reveal {
    /// Every card is shown.
    All,
    /// The first card is replaced by a placeholder.
    HideFirst,
}

/// A display snapshot of a hand.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HandView {
    /// Who holds the hand.
    pub owner: String,
    /// Cards in order; `None` marks a concealed card.
    pub cards: Vec<Option<Card>>,
    /// The full total, or `None` while a card is concealed.
    pub total: Option<u8>,
}

impl HandView {
    /// Builds a view of `hand` for `owner`.
    #[must_use]
    pub fn new(owner: &str, hand: &Hand, reveal: Reveal) -> Self {
        let hide_first = reveal == Reveal::HideFirst && !hand.is_empty();
        let cards = hand
            .cards()
            .iter()
            .enumerate()
            .map(|(index, card)| {
                if (hide_first && index == 0) || !card.is_face_up() {
                    None
                } else {
                    Some(*card)
                }
            })
            .collect::<Vec<_>>();
        let total = if cards.iter().all(Option::is_some) {
            Some(hand.total())
        } else {
            None
        };

        Self {
            owner: owner.into(),
            cards,
            total,
        }
    }

    /// Returns whether any card is concealed.
    #[must_use]
    pub fn is_concealed(&self) -> bool {
        self.cards.iter().any(Option::is_none)
    }
}

impl fmt::Display for HandView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: ", self.owner)?;
        if self.cards.is_empty() {
            write!(f, "(no cards)")?;
        }
        for (index, card) in self.cards.iter().enumerate() {
            if index > 0 {
                write!(f, ", ")?;
            }
            match card {
                Some(card) => write!(f, "{card}")?,
                None => write!(f, "[face down]")?,
            }
        }
        match self.total {
            Some(total) => write!(f, " (total {total})"),
            None => write!(f, " (total ?)"),
        }
    }
}
