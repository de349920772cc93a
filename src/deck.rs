//! The single-deck draw pile and its discard pile.

use alloc::collections::VecDeque;
use alloc::vec::Vec;

use rand::seq::SliceRandom;
use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::card::{Card, DECK_SIZE, Rank, Suit};
use crate::error::DeckError;

/// Where each shuffle gets its generator from.
#[derive(Debug, Clone)]
enum SeedSource {
    /// A fresh generator seeded from the operating system per shuffle.
    #[cfg(feature = "std")]
    Entropy,
    /// A fresh generator seeded from this master generator per shuffle.
    Seeded(ChaCha8Rng),
}

impl SeedSource {
    fn next_rng(&mut self) -> ChaCha8Rng {
        match self {
            #[cfg(feature = "std")]
            Self::Entropy => ChaCha8Rng::from_os_rng(),
            Self::Seeded(master) => ChaCha8Rng::seed_from_u64(master.next_u64()),
        }
    }
}

/// Builds the 52 standard cards, suits outer and ranks inner, all face up.
#[must_use]
pub fn build_standard_deck() -> Vec<Card> {
    let mut cards = Vec::with_capacity(DECK_SIZE);
    for suit in Suit::ALL {
        for rank in Rank::ALL {
            cards.push(Card::new(rank, suit));
        }
    }
    cards
}

/// A draw pile plus a discard pile.
///
/// Cards only ever move between the two piles and the hands they are dealt
/// to; the deck never creates or destroys a card.
#[derive(Debug, Clone)]
pub struct Deck {
    draw_pile: VecDeque<Card>,
    discard_pile: Vec<Card>,
    seeds: SeedSource,
}

impl Deck {
    /// Creates an unshuffled standard deck whose shuffles derive from `seed`.
    ///
    /// Every call to [`Deck::shuffle`] still uses a freshly seeded generator,
    /// so consecutive shuffles differ while the sequence stays reproducible.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self::with_source(
            build_standard_deck(),
            SeedSource::Seeded(ChaCha8Rng::seed_from_u64(seed)),
        )
    }

    /// Creates an unshuffled standard deck that reseeds from OS entropy on
    /// every shuffle.
    #[cfg(feature = "std")]
    #[cfg_attr(docsrs, doc(cfg(feature = "std")))]
    #[must_use]
    pub fn with_entropy() -> Self {
        Self::with_source(build_standard_deck(), SeedSource::Entropy)
    }

    /// Creates a deck that draws `cards` front to back.
    ///
    /// Intended for scripted play: no completeness check is made.
    #[must_use]
    pub fn from_cards(cards: Vec<Card>, seed: u64) -> Self {
        Self::with_source(cards, SeedSource::Seeded(ChaCha8Rng::seed_from_u64(seed)))
    }

    fn with_source(cards: Vec<Card>, seeds: SeedSource) -> Self {
        Self {
            draw_pile: cards.into(),
            discard_pile: Vec::new(),
            seeds,
        }
    }

    /// Shuffles the draw pile with a newly seeded generator.
    pub fn shuffle(&mut self) {
        let mut rng = self.seeds.next_rng();
        self.draw_pile.make_contiguous().shuffle(&mut rng);
    }

    /// Removes and returns the front card of the draw pile.
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::Empty`] if the draw pile is empty. The deck never
    /// pulls from the discard pile on its own.
    pub fn draw(&mut self) -> Result<Card, DeckError> {
        self.draw_pile.pop_front().ok_or(DeckError::Empty)
    }

    /// Puts a card on the discard pile.
    pub fn discard(&mut self, card: Card) {
        self.discard_pile.push(card);
    }

    /// Moves every discarded card back under the draw pile.
    ///
    /// The cards are not randomized; call [`Deck::shuffle`] afterwards.
    pub fn reshuffle_from_discard(&mut self) {
        self.draw_pile.extend(self.discard_pile.drain(..).rev());
    }

    /// Returns the number of cards left to draw.
    #[must_use]
    pub fn cards_remaining(&self) -> usize {
        self.draw_pile.len()
    }

    /// Returns the number of cards on the discard pile.
    #[must_use]
    pub fn discard_len(&self) -> usize {
        self.discard_pile.len()
    }

    /// Returns whether the draw pile is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.draw_pile.is_empty()
    }

    /// Iterates over the draw pile, front first.
    pub fn draw_pile(&self) -> impl Iterator<Item = &Card> {
        self.draw_pile.iter()
    }

    /// Returns the discard pile, oldest first.
    #[must_use]
    pub fn discard_pile(&self) -> &[Card] {
        &self.discard_pile
    }
}
