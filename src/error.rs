//! Error types for table operations.

use thiserror::Error;

use crate::game::RoundState;

/// Errors raised by the deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DeckError {
    /// The draw pile is empty.
    #[error("no cards left in the draw pile")]
    Empty,
}

/// Reasons a bet is declined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BetError {
    /// Bet amount is zero or negative.
    #[error("bet must be greater than zero")]
    NotPositive,
    /// Bet amount exceeds the player's money.
    #[error("insufficient funds")]
    InsufficientFunds,
}

/// Errors that can occur when seating a player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SeatError {
    /// Every seat at the table is taken.
    #[error("the table is full")]
    TableFull,
    /// A player with this name is already seated.
    #[error("a player with this name is already seated")]
    DuplicateName,
    /// The name is empty.
    #[error("player name is empty")]
    EmptyName,
}

/// Errors that abort a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RoundError {
    /// The phase was called out of order.
    #[error("invalid round state: expected {expected:?}, found {actual:?}")]
    InvalidState {
        /// The state the phase requires.
        expected: RoundState,
        /// The state the table was in.
        actual: RoundState,
    },
    /// No seated player was able to bet.
    #[error("no players able to bet")]
    NoPlayers,
    /// The console stopped providing input.
    #[error("input closed")]
    InputClosed,
    /// The deck ran out mid-round.
    #[error(transparent)]
    Deck(#[from] DeckError),
}
