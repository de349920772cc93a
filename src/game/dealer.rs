use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;

use log::{debug, info};

use crate::console::{Console, TableEvent};
use crate::error::RoundError;
use crate::options::RoundingMode;
use crate::player::Participant;
use crate::result::{HandOutcome, PlayerResult, RoundResult};

use super::{BUST_PRIORITY, Game, RoundState};

#[cfg(feature = "std")]
fn round_amount(amount: f64, mode: RoundingMode) -> usize {
    match mode {
        RoundingMode::Up => amount.ceil() as usize,
        RoundingMode::Down => amount.floor() as usize,
        RoundingMode::Nearest => amount.round() as usize,
    }
}

#[cfg(all(not(feature = "std"), feature = "alloc"))]
fn round_amount(amount: f64, mode: RoundingMode) -> usize {
    match mode {
        RoundingMode::Up => libm::ceil(amount) as usize,
        RoundingMode::Down => libm::floor(amount) as usize,
        RoundingMode::Nearest => libm::round(amount) as usize,
    }
}

/// Settles a standing hand against the dealer's final hand.
const fn settle(
    player_total: u8,
    player_blackjack: bool,
    dealer_total: u8,
    dealer_bust: bool,
) -> HandOutcome {
    if player_total > 21 {
        HandOutcome::Bust
    } else if dealer_bust || player_total > dealer_total {
        if player_blackjack {
            HandOutcome::Blackjack
        } else {
            HandOutcome::Win
        }
    } else if player_total == dealer_total {
        HandOutcome::Push
    } else {
        HandOutcome::Lose
    }
}

impl Game {
    /// Dealer phase: reveals the hole card and draws below the stand total.
    ///
    /// The dealer does not draw when every player has busted, unless
    /// `dealer_plays_when_all_bust` is set.
    ///
    /// # Errors
    ///
    /// Returns an error if the table is not in the dealer turn state or the
    /// deck runs out, in which case the round is abandoned.
    pub fn dealer_turn(&mut self, console: &mut dyn Console) -> Result<(), RoundError> {
        self.ensure_state(RoundState::DealerTurn)?;
        self.apply_options();

        self.dealer.reveal_hole();
        let outcome = self.play_dealer();
        self.abort_on_error(outcome, console)?;

        console.render(&self.table_view());
        self.advance(console);
        Ok(())
    }

    fn play_dealer(&mut self) -> Result<(), RoundError> {
        let anyone_standing = self
            .seated()
            .into_iter()
            .any(|index| !self.players[index].hand().is_busted());
        if !anyone_standing && !self.options.dealer_plays_when_all_bust {
            debug!("every player busted; dealer stands");
            return Ok(());
        }

        self.dealer_played = true;
        while self.dealer.is_hitting() {
            let card = self.draw()?;
            debug!("dealer draws {card}");
            self.dealer.hand_mut().add(card);
            self.log_action(format!("Dealer hits: {card}"));
        }

        let total = self.dealer.hand_total();
        if self.dealer.hand().is_busted() {
            info!("dealer busts with {total}");
            self.log_action(format!("Dealer busts with {total}"));
            self.queue_event(format!("Dealer busted with {total}"), BUST_PRIORITY);
        } else {
            self.log_action(format!("Dealer stands on {total}"));
        }
        Ok(())
    }

    /// Rounds a payout according to the rounding mode.
    fn round_payout(&self, amount: f64, mode: RoundingMode) -> usize {
        round_amount(amount, mode)
    }

    /// Payout phase: settles every hand, records statistics and updates the
    /// leaderboard.
    ///
    /// Busted hands lose. Otherwise a dealer bust or a higher total wins,
    /// equal totals push and a lower total loses. A winning natural is paid
    /// `blackjack_pays` times the bet as profit.
    ///
    /// # Errors
    ///
    /// Returns an error if the table is not in the payout state.
    pub fn payouts(&mut self, console: &mut dyn Console) -> Result<RoundResult, RoundError> {
        self.ensure_state(RoundState::Payout)?;
        self.apply_options();

        let dealer_total = self.dealer.hand_total();
        let dealer_bust = self.dealer.hand().is_busted();
        let mut players = Vec::new();

        for index in self.seated() {
            let player = &self.players[index];
            let name: String = player.name().into();
            let bet = player.bet();
            let before = player.money();
            let player_total = player.hand_total();
            let outcome = settle(
                player_total,
                player.hand().is_blackjack(),
                dealer_total,
                dealer_bust,
            );

            #[expect(
                clippy::cast_precision_loss,
                reason = "f64 has sufficient precision for monetary values"
            )]
            let blackjack_profit = self.round_payout(
                (bet as f64) * self.options.blackjack_pays,
                self.options.rounding_blackjack,
            );

            let player = &mut self.players[index];
            match outcome {
                HandOutcome::Win => player.win(),
                HandOutcome::Blackjack => player.win_blackjack(blackjack_profit),
                HandOutcome::Push => player.push(),
                HandOutcome::Lose | HandOutcome::Bust => player.lose(),
            }
            let money = player.money();

            if outcome.is_win() {
                self.stats.record_win(&name);
            } else if outcome.is_loss() {
                self.stats.record_loss(&name);
            }
            self.stats.update_high_score(&name, money);

            let result = PlayerResult {
                name,
                outcome,
                bet,
                payout: money - before,
                player_total,
                dealer_total,
                money,
            };
            info!(
                "{} {:?}: bet {}, paid {}, now {}",
                result.name, outcome, bet, result.payout, money
            );
            self.log_action(format!(
                "{} {:?} ({} vs {}), now ${}",
                result.name, outcome, player_total, dealer_total, money
            ));
            console.render(&TableEvent::Outcome(result.clone()));
            players.push(result);
        }

        self.process_events(console);
        self.advance(console);

        Ok(RoundResult {
            round: self.round,
            players,
            dealer_total,
            dealer_bust,
            dealer_played: self.dealer_played,
        })
    }

    /// Cleanup phase: returns every card to the discard pile and reshuffles
    /// when the draw pile is empty or below `reshuffle_threshold`.
    ///
    /// # Errors
    ///
    /// Returns an error if the table is not in the cleanup state.
    pub fn cleanup(&mut self, console: &mut dyn Console) -> Result<(), RoundError> {
        self.ensure_state(RoundState::Cleanup)?;

        self.collect_cards();
        self.restock(console);
        self.dealer.hide_hole();
        self.process_events(console);

        info!("round {} complete", self.round);
        self.log_action(format!("Round {} complete", self.round));
        self.advance(console);
        Ok(())
    }
}
