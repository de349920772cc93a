//! Seated players, the dealer, and the capabilities they share.

use alloc::string::String;

use crate::card::Card;
use crate::console::Console;
use crate::deck::Deck;
use crate::error::{BetError, DeckError};
use crate::hand::{Hand, HandView, Reveal};

/// What the engine needs from anyone holding a hand.
pub trait Participant {
    /// The participant's display name.
    fn name(&self) -> &str;

    /// The participant's hand.
    fn hand(&self) -> &Hand;

    /// Decides whether to take another card.
    fn wants_hit(&self, console: &mut dyn Console) -> bool;

    /// Builds the view shown at the table.
    fn show_hand(&self) -> HandView;

    /// The point total of the hand.
    fn hand_total(&self) -> u8 {
        self.hand().total()
    }
}

/// A human player with a bankroll.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    name: String,
    money: usize,
    bet: usize,
    hand: Hand,
}

impl Player {
    /// Creates a player with `money` and no bet.
    #[must_use]
    pub fn new(name: &str, money: usize) -> Self {
        Self {
            name: name.into(),
            money,
            bet: 0,
            hand: Hand::new(),
        }
    }

    /// Returns the money not currently at stake.
    #[must_use]
    pub const fn money(&self) -> usize {
        self.money
    }

    /// Returns the escrowed bet for the current round.
    #[must_use]
    pub const fn bet(&self) -> usize {
        self.bet
    }

    /// Returns whether the player has a bet riding this round.
    #[must_use]
    pub const fn is_in_round(&self) -> bool {
        self.bet > 0
    }

    /// Returns a mutable reference to the player's hand.
    pub const fn hand_mut(&mut self) -> &mut Hand {
        &mut self.hand
    }

    /// Places a bet, moving `amount` out of the player's money.
    ///
    /// # Errors
    ///
    /// Declines amounts of zero or less and amounts above the player's money.
    /// A declined bet leaves money and bet unchanged.
    pub fn place_bet(&mut self, amount: i64) -> Result<usize, BetError> {
        if amount <= 0 {
            return Err(BetError::NotPositive);
        }
        let amount = usize::try_from(amount).map_err(|_| BetError::InsufficientFunds)?;
        if amount > self.money {
            return Err(BetError::InsufficientFunds);
        }

        self.money -= amount;
        self.bet = amount;
        Ok(amount)
    }

    /// Pays the bet back plus an equal profit.
    ///
    /// Money saturates at `usize::MAX`.
    pub const fn win(&mut self) {
        self.credit(self.bet.saturating_mul(2));
    }

    /// Pays the bet back plus `profit`.
    pub const fn win_blackjack(&mut self, profit: usize) {
        self.credit(self.bet.saturating_add(profit));
    }

    /// Forfeits the bet.
    pub const fn lose(&mut self) {
        self.bet = 0;
    }

    /// Returns the bet on a tie.
    pub const fn push(&mut self) {
        self.credit(self.bet);
    }

    const fn credit(&mut self, amount: usize) {
        self.money = self.money.saturating_add(amount);
        self.bet = 0;
    }
}

impl Participant for Player {
    fn name(&self) -> &str {
        &self.name
    }

    fn hand(&self) -> &Hand {
        &self.hand
    }

    fn wants_hit(&self, console: &mut dyn Console) -> bool {
        console.decide_hit(&self.show_hand())
    }

    fn show_hand(&self) -> HandView {
        HandView::new(&self.name, &self.hand, Reveal::All)
    }
}

/// The house: owns the deck and hits on a fixed rule.
#[derive(Debug, Clone)]
pub struct Dealer {
    hand: Hand,
    deck: Deck,
    stands_on: u8,
    hole_revealed: bool,
}

impl Dealer {
    /// Display name used for the dealer's hand.
    pub const NAME: &'static str = "Dealer";

    /// Creates a dealer who owns `deck` and stands on `stands_on` or more.
    #[must_use]
    pub const fn new(deck: Deck, stands_on: u8) -> Self {
        Self {
            hand: Hand::new(),
            deck,
            stands_on,
            hole_revealed: false,
        }
    }

    /// Changes the total the dealer stands on.
    pub const fn set_stands_on(&mut self, total: u8) {
        self.stands_on = total;
    }

    /// Returns the total the dealer stands on.
    #[must_use]
    pub const fn stands_on(&self) -> u8 {
        self.stands_on
    }

    /// Returns whether the dealer's policy calls for another card.
    #[must_use]
    pub fn is_hitting(&self) -> bool {
        self.hand.total() < self.stands_on
    }

    /// Draws the next card from the deck.
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::Empty`] if the draw pile is exhausted.
    pub fn deal(&mut self) -> Result<Card, DeckError> {
        self.deck.draw()
    }

    /// Shuffles the draw pile.
    pub fn shuffle_deck(&mut self) {
        self.deck.shuffle();
    }

    /// Returns whether the draw pile is empty.
    #[must_use]
    pub fn deck_is_empty(&self) -> bool {
        self.deck.is_empty()
    }

    /// Returns the deck.
    #[must_use]
    pub const fn deck(&self) -> &Deck {
        &self.deck
    }

    /// Returns a mutable reference to the deck.
    pub const fn deck_mut(&mut self) -> &mut Deck {
        &mut self.deck
    }

    /// Returns a mutable reference to the dealer's hand.
    pub const fn hand_mut(&mut self) -> &mut Hand {
        &mut self.hand
    }

    /// Returns whether the hole card is showing.
    #[must_use]
    pub const fn is_hole_revealed(&self) -> bool {
        self.hole_revealed
    }

    /// Shows every card from now on.
    pub const fn reveal_hole(&mut self) {
        self.hole_revealed = true;
    }

    /// Conceals the hole card again for a new round.
    pub const fn hide_hole(&mut self) {
        self.hole_revealed = false;
    }

    /// Returns the hand's cards to the discard pile.
    pub fn discard_hand(&mut self) {
        for card in self.hand.take_cards() {
            self.deck.discard(card);
        }
    }
}

impl Participant for Dealer {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn hand(&self) -> &Hand {
        &self.hand
    }

    fn wants_hit(&self, _console: &mut dyn Console) -> bool {
        self.is_hitting()
    }

    fn show_hand(&self) -> HandView {
        let reveal = if self.hole_revealed {
            Reveal::All
        } else {
            Reveal::HideFirst
        };
        HandView::new(Self::NAME, &self.hand, reveal)
    }
}
