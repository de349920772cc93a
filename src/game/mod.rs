//! Table engine and round state management.

use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;

use log::{debug, error, info};

use crate::card::Card;
use crate::console::{Console, TableEvent};
use crate::deck::Deck;
use crate::error::{RoundError, SeatError};
use crate::journal::{ActionLog, EventQueue};
use crate::options::GameOptions;
use crate::player::{Dealer, Participant, Player};
use crate::result::RoundResult;
use crate::stats::GameStats;

mod actions;
mod bet;
mod dealer;
pub mod state;

pub use state::RoundState;

/// Priority of a natural blackjack notice.
const BLACKJACK_PRIORITY: i32 = 3;
/// Priority of a bust notice.
const BUST_PRIORITY: i32 = 2;
/// Priority of a reshuffle notice.
const RESHUFFLE_PRIORITY: i32 = 1;

/// What an external profile store keeps for a player.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Profile {
    /// Player name.
    pub name: String,
    /// Player money.
    pub money: usize,
    /// Recorded wins.
    pub wins: u32,
    /// Recorded losses.
    pub losses: u32,
}

/// A blackjack table: seated players, the dealer and the round state machine.
///
/// The table is the only owner of its players; everything else refers to
/// them by name. Each phase of a round is a method that checks it is called
/// in order, and [`Game::run_round`] runs them all. Input and output go
/// through a [`Console`].
#[derive(Debug)]
pub struct Game {
    /// Table options.
    pub options: GameOptions,
    state: RoundState,
    round: u32,
    players: Vec<Player>,
    dealer: Dealer,
    stats: GameStats,
    action_log: ActionLog,
    events: EventQueue,
    dealer_played: bool,
}

impl Game {
    /// Creates a table whose deck is shuffled from `seed`.
    ///
    /// # Example
    ///
    /// ```
    /// use blackjack_table::{Game, GameOptions, RoundState};
    ///
    /// let game = Game::new(GameOptions::default(), 42);
    /// assert_eq!(game.state(), RoundState::Betting);
    /// ```
    #[must_use]
    pub fn new(options: GameOptions, seed: u64) -> Self {
        let mut deck = Deck::new(seed);
        deck.shuffle();
        Self::with_deck(options, deck)
    }

    /// Creates a table whose deck reshuffles from OS entropy.
    #[cfg(feature = "std")]
    #[cfg_attr(docsrs, doc(cfg(feature = "std")))]
    #[must_use]
    pub fn with_entropy(options: GameOptions) -> Self {
        let mut deck = Deck::with_entropy();
        deck.shuffle();
        Self::with_deck(options, deck)
    }

    /// Creates a table dealing from `deck` as given, without shuffling it.
    #[must_use]
    pub fn with_deck(options: GameOptions, deck: Deck) -> Self {
        let dealer = Dealer::new(deck, options.dealer_stands_on);
        let stats = GameStats::new(options.score_policy);
        Self {
            options,
            state: RoundState::Betting,
            round: 0,
            players: Vec::new(),
            dealer,
            stats,
            action_log: ActionLog::new(),
            events: EventQueue::new(),
            dealer_played: false,
        }
    }

    /// Seats a new player.
    ///
    /// # Errors
    ///
    /// Returns an error if the name is blank, already seated, or the table
    /// is full.
    pub fn add_player(&mut self, name: &str, starting_money: usize) -> Result<(), SeatError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(SeatError::EmptyName);
        }
        if self.player(name).is_some() {
            return Err(SeatError::DuplicateName);
        }
        if self.players.len() >= self.options.max_players {
            return Err(SeatError::TableFull);
        }

        self.players.push(Player::new(name, starting_money));
        self.log_action(format!("{name} joins the table with ${starting_money}"));
        info!("{name} seated with {starting_money}");
        Ok(())
    }

    /// Removes a player from the table.
    ///
    /// Any cards they hold go to the discard pile and any bet riding is
    /// forfeited. Unknown names are ignored.
    pub fn remove_player(&mut self, name: &str) -> Option<Player> {
        let index = self.players.iter().position(|p| p.name() == name)?;
        let mut player = self.players.remove(index);
        for card in player.hand_mut().take_cards() {
            self.dealer.deck_mut().discard(card);
        }
        self.log_action(format!("{name} leaves the table"));
        info!("{name} left the table");
        Some(player)
    }

    /// Seats a player from a stored profile and restores their record.
    ///
    /// # Errors
    ///
    /// Returns the same errors as [`Game::add_player`].
    pub fn restore_profile(&mut self, profile: &Profile) -> Result<(), SeatError> {
        self.add_player(&profile.name, profile.money)?;
        self.apply_options();
        let name = profile.name.trim();
        self.stats.restore(name, profile.wins, profile.losses);
        self.stats.update_high_score(name, profile.money);
        Ok(())
    }

    /// Returns the storable profile of a seated player.
    #[must_use]
    pub fn profile(&self, name: &str) -> Option<Profile> {
        let player = self.player(name)?;
        Some(Profile {
            name: player.name().into(),
            money: player.money(),
            wins: self.stats.wins(name),
            losses: self.stats.losses(name),
        })
    }

    /// Returns the seated players in seating order.
    #[must_use]
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// Looks up a seated player by name.
    #[must_use]
    pub fn player(&self, name: &str) -> Option<&Player> {
        self.players.iter().find(|p| p.name() == name)
    }

    /// Returns the number of seated players.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.players.len()
    }

    /// Returns the dealer.
    #[must_use]
    pub const fn dealer(&self) -> &Dealer {
        &self.dealer
    }

    /// Returns a mutable reference to the dealer, e.g. to stack the deck.
    pub const fn dealer_mut(&mut self) -> &mut Dealer {
        &mut self.dealer
    }

    /// Returns the statistics.
    #[must_use]
    pub const fn stats(&self) -> &GameStats {
        &self.stats
    }

    /// Returns the action log.
    #[must_use]
    pub const fn action_log(&self) -> &ActionLog {
        &self.action_log
    }

    /// Returns the current round state.
    #[must_use]
    pub const fn state(&self) -> RoundState {
        self.state
    }

    /// Returns the number of the current or last round, 0 before the first.
    #[must_use]
    pub const fn round(&self) -> u32 {
        self.round
    }

    /// Appends an entry to the action log.
    pub fn log_action(&mut self, action: impl Into<String>) {
        self.action_log.push(action);
    }

    /// Queues a notification to be shown at the next drain.
    pub fn queue_event(&mut self, description: impl Into<String>, priority: i32) {
        self.events.push(description, priority);
    }

    /// Returns the number of queued notifications.
    #[must_use]
    pub fn pending_events(&self) -> usize {
        self.events.len()
    }

    /// Drains the notification queue, highest priority first.
    ///
    /// Each notification is logged and rendered.
    pub fn process_events(&mut self, console: &mut dyn Console) {
        for event in self.events.drain() {
            info!("event [{}]: {}", event.priority, event.description);
            self.action_log.push(format!("[event] {}", event.description));
            console.render(&TableEvent::Notice {
                priority: event.priority,
                description: event.description,
            });
        }
    }

    /// Plays one complete round, betting through cleanup.
    ///
    /// # Errors
    ///
    /// Returns an error if the table is not between rounds, nobody can bet,
    /// the console closes, or the deck runs out mid-round. In the last two
    /// cases escrowed bets are refunded and the table returns to betting.
    pub fn run_round(&mut self, console: &mut dyn Console) -> Result<RoundResult, RoundError> {
        self.place_bets(console)?;
        self.deal(console)?;
        self.player_turns(console)?;
        self.dealer_turn(console)?;
        let result = self.payouts(console)?;
        self.cleanup(console)?;
        Ok(result)
    }

    /// Plays rounds until the console declines another or nobody has money.
    ///
    /// Returns the number of rounds completed.
    ///
    /// # Errors
    ///
    /// Returns the first round error other than running out of players.
    pub fn play(&mut self, console: &mut dyn Console) -> Result<u32, RoundError> {
        let mut played = 0;
        loop {
            match self.run_round(console) {
                Ok(_) => played += 1,
                Err(RoundError::NoPlayers) => break,
                Err(err) => return Err(err),
            }
            if !console.prompt_yes_no("Play another round? (y/n): ") {
                break;
            }
        }
        info!("session over after {played} round(s)");
        Ok(played)
    }

    /// Pushes rule options held outside `options` to their owners, so edits
    /// to the public field take effect at the next phase.
    fn apply_options(&mut self) {
        self.dealer.set_stands_on(self.options.dealer_stands_on);
        self.stats.set_policy(self.options.score_policy);
    }

    fn ensure_state(&self, expected: RoundState) -> Result<(), RoundError> {
        if self.state == expected {
            Ok(())
        } else {
            Err(RoundError::InvalidState {
                expected,
                actual: self.state,
            })
        }
    }

    fn advance(&mut self, console: &mut dyn Console) {
        self.state = self.state.next();
        debug!("round {} enters {}", self.round, self.state);
        console.render(&TableEvent::StateChanged(self.state));
    }

    /// Indices of players with a bet riding, in seating order.
    fn seated(&self) -> Vec<usize> {
        self.players
            .iter()
            .enumerate()
            .filter(|(_, p)| p.is_in_round())
            .map(|(index, _)| index)
            .collect()
    }

    fn draw(&mut self) -> Result<Card, RoundError> {
        Ok(self.dealer.deal()?)
    }

    fn table_view(&self) -> TableEvent {
        TableEvent::Table {
            dealer: self.dealer.show_hand(),
            players: self
                .seated()
                .into_iter()
                .map(|index| self.players[index].show_hand())
                .collect(),
        }
    }

    /// Moves every card in every hand to the discard pile.
    fn collect_cards(&mut self) {
        for player in &mut self.players {
            for card in player.hand_mut().take_cards() {
                self.dealer.deck_mut().discard(card);
            }
        }
        self.dealer.discard_hand();
    }

    /// Refills the draw pile from the discard pile when it runs low.
    fn restock(&mut self, console: &mut dyn Console) {
        if !self.dealer.deck_is_empty()
            && self.dealer.deck().cards_remaining() >= self.options.reshuffle_threshold
        {
            return;
        }

        self.dealer.deck_mut().reshuffle_from_discard();
        self.dealer.shuffle_deck();
        let cards = self.dealer.deck().cards_remaining();

        info!("reshuffled discard pile: {cards} cards to draw");
        self.log_action(format!("Dealer reshuffles the deck ({cards} cards)"));
        self.queue_event("The deck was reshuffled", RESHUFFLE_PRIORITY);
        console.render(&TableEvent::Reshuffled { cards });
    }

    /// Passes `outcome` through, abandoning the round if it is an error.
    fn abort_on_error<T>(
        &mut self,
        outcome: Result<T, RoundError>,
        console: &mut dyn Console,
    ) -> Result<T, RoundError> {
        if let Err(err) = &outcome {
            error!("round {} aborted in {}: {err}", self.round, self.state);
            self.abort_round(console);
        }
        outcome
    }

    /// Refunds escrowed bets, returns all cards and goes back to betting.
    fn abort_round(&mut self, console: &mut dyn Console) {
        for player in &mut self.players {
            if player.is_in_round() {
                player.push();
            }
        }
        self.events.clear();
        self.collect_cards();
        self.restock(console);
        self.dealer.hide_hole();
        self.log_action(format!("Round {} abandoned", self.round));
        self.state = RoundState::Betting;
        console.render(&TableEvent::StateChanged(self.state));
    }
}
