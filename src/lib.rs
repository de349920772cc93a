//! A multi-player blackjack table with optional `no_std` support.
//!
//! The crate provides a [`Game`] type that runs each round through betting,
//! dealing, player turns, the dealer's turn, payouts and cleanup, keeping
//! win/loss statistics and a leaderboard across rounds. All input and output
//! go through a [`Console`], so the engine can be driven by a terminal or by
//! a script.
//!
//! # Example
//!
//! ```no_run
//! use blackjack_table::{Game, GameOptions, LineConsole};
//!
//! let mut game = Game::new(GameOptions::default(), 42);
//! game.add_player("Alice", 1000).unwrap();
//!
//! let stdin = std::io::stdin();
//! let mut console = LineConsole::new(stdin.lock(), std::io::stdout());
//! let result = game.run_round(&mut console).unwrap();
//! println!("dealer finished on {}", result.dealer_total);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod console;
pub mod deck;
pub mod error;
pub mod game;
pub mod hand;
pub mod journal;
pub mod options;
pub mod player;
pub mod result;
pub mod stats;

// Re-export main types
pub use card::{Card, DECK_SIZE, Rank, Suit};
#[cfg(feature = "std")]
pub use console::LineConsole;
pub use console::{Console, TableEvent};
pub use deck::{Deck, build_standard_deck};
pub use error::{BetError, DeckError, RoundError, SeatError};
pub use game::{Game, Profile, RoundState};
pub use hand::{Hand, HandView, Reveal};
pub use journal::{ActionLog, EventQueue, QueuedEvent};
pub use options::{GameOptions, RoundingMode, ScorePolicy};
pub use player::{Dealer, Participant, Player};
pub use result::{HandOutcome, PlayerResult, RoundResult};
pub use stats::{GameStats, Record, ScoreEntry};
