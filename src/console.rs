//! The boundary between the engine and whoever sits at the table.
//!
//! The engine never reads input or formats output itself. It asks a
//! [`Console`] for bets and hit/stand decisions and hands it
//! [`TableEvent`]s to display. Tests drive the engine with scripted consoles;
//! [`LineConsole`] plays over any line-oriented reader and writer.

use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;

use crate::error::BetError;
use crate::game::RoundState;
use crate::hand::HandView;
use crate::result::PlayerResult;

/// Something worth showing at the table.
#[derive(Debug, Clone, PartialEq)]
pub enum TableEvent {
    /// The round moved to a new phase.
    StateChanged(RoundState),
    /// A bet was accepted.
    BetAccepted {
        /// Who bet.
        player: String,
        /// How much.
        amount: usize,
    },
    /// A bet was declined and will be asked for again.
    BetDeclined {
        /// Who bet.
        player: String,
        /// Why it was declined.
        error: BetError,
    },
    /// The whole table after dealing or after the dealer's turn.
    Table {
        /// The dealer's hand.
        dealer: HandView,
        /// Every player in the round, in seating order.
        players: Vec<HandView>,
    },
    /// One hand changed.
    Hand(HandView),
    /// A player's hand was settled.
    Outcome(PlayerResult),
    /// The discard pile went back into the deck.
    Reshuffled {
        /// Cards in the draw pile afterwards.
        cards: usize,
    },
    /// A drained notification from the event queue.
    Notice {
        /// Its priority.
        priority: i32,
        /// What happened.
        description: String,
    },
}

/// Input and output capabilities the engine depends on.
pub trait Console {
    /// Asks for a whole number.
    ///
    /// Implementations re-ask on malformed input and return `None` only when
    /// no more input will ever arrive.
    fn prompt_integer(&mut self, prompt: &str) -> Option<i64>;

    /// Asks a yes/no question. Anything other than a clear yes is a no.
    fn prompt_yes_no(&mut self, prompt: &str) -> bool;

    /// Displays an event.
    fn render(&mut self, event: &TableEvent);

    /// Asks `player` for a bet.
    fn decide_bet(&mut self, player: &str, money: usize) -> Option<i64> {
        self.prompt_integer(&format!("{player}, place your bet (1-{money}): "))
    }

    /// Asks the owner of `hand` whether to hit.
    fn decide_hit(&mut self, hand: &HandView) -> bool {
        let total = hand.total.unwrap_or_default();
        self.prompt_yes_no(&format!("{}, you have {total}. Hit? (y/n): ", hand.owner))
    }
}

#[cfg(feature = "std")]
pub use line::LineConsole;

#[cfg(feature = "std")]
mod line {
    use std::io::{BufRead, Write};

    use log::warn;

    use super::{Console, TableEvent};

    /// A console that reads answers line by line and writes plain text.
    #[derive(Debug)]
    pub struct LineConsole<R, W> {
        input: R,
        output: W,
    }

    impl<R: BufRead, W: Write> LineConsole<R, W> {
        /// Creates a console over `input` and `output`.
        pub const fn new(input: R, output: W) -> Self {
            Self { input, output }
        }

        /// Returns the reader and writer.
        pub fn into_inner(self) -> (R, W) {
            (self.input, self.output)
        }

        /// Writes a line of text.
        ///
        /// Write errors are logged and otherwise ignored; only the input
        /// side can end a session.
        pub fn say(&mut self, text: &str) {
            if let Err(err) = writeln!(self.output, "{text}") {
                warn!("console write failed: {err}");
            }
        }

        /// Prompts and reads one trimmed line; `None` at end of input.
        pub fn read_line(&mut self, prompt: &str) -> Option<String> {
            if let Err(err) = write!(self.output, "{prompt}").and_then(|()| self.output.flush()) {
                warn!("console write failed: {err}");
            }

            let mut line = String::new();
            match self.input.read_line(&mut line) {
                Ok(0) | Err(_) => None,
                Ok(_) => Some(line.trim().into()),
            }
        }
    }

    impl<R: BufRead, W: Write> Console for LineConsole<R, W> {
        fn prompt_integer(&mut self, prompt: &str) -> Option<i64> {
            loop {
                let line = self.read_line(prompt)?;
                match line.parse::<i64>() {
                    Ok(value) => return Some(value),
                    Err(_) => self.say("Please enter a whole number."),
                }
            }
        }

        fn prompt_yes_no(&mut self, prompt: &str) -> bool {
            self.read_line(prompt)
                .is_some_and(|answer| matches!(answer.to_lowercase().as_str(), "y" | "yes"))
        }

        fn render(&mut self, event: &TableEvent) {
            let text = match event {
                TableEvent::StateChanged(_) => return,
                TableEvent::BetAccepted { player, amount } => {
                    format!("{player} bets ${amount}.")
                }
                TableEvent::BetDeclined { player, error } => {
                    format!("{player}: {error}. Try again.")
                }
                TableEvent::Table { dealer, players } => {
                    let mut text = format!("\n{dealer}");
                    for hand in players {
                        text.push('\n');
                        text.push_str(&hand.to_string());
                    }
                    text.push('\n');
                    text
                }
                TableEvent::Hand(hand) => hand.to_string(),
                TableEvent::Outcome(result) => format!(
                    "{}: {:?} with {} against {} (bet ${}, paid ${}, now ${})",
                    result.name,
                    result.outcome,
                    result.player_total,
                    result.dealer_total,
                    result.bet,
                    result.payout,
                    result.money,
                ),
                TableEvent::Reshuffled { cards } => {
                    format!("The dealer reshuffles: {cards} cards in the deck.")
                }
                TableEvent::Notice { description, .. } => format!("** {description}"),
            };
            self.say(&text);
        }
    }
}
