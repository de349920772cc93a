use alloc::format;
use alloc::string::String;

use log::{debug, info, warn};

use crate::console::{Console, TableEvent};
use crate::error::RoundError;
use crate::player::Participant;

use super::{Game, RoundState};

impl Game {
    /// Betting phase: asks every player with money for a bet.
    ///
    /// Declined bets are asked for again until one is accepted. Players
    /// without money sit the round out.
    ///
    /// # Errors
    ///
    /// Returns an error if the table is not in the betting state, nobody has
    /// money to bet, or the console closes. Bets already escrowed when the
    /// console closes are refunded.
    pub fn place_bets(&mut self, console: &mut dyn Console) -> Result<(), RoundError> {
        self.ensure_state(RoundState::Betting)?;
        if self.players.iter().all(|p| p.money() == 0) {
            return Err(RoundError::NoPlayers);
        }

        self.round += 1;
        self.dealer_played = false;
        info!("round {} begins", self.round);
        self.log_action(format!("Round {} begins", self.round));

        let outcome = self.collect_bets(console);
        self.abort_on_error(outcome, console)?;
        self.advance(console);
        Ok(())
    }

    fn collect_bets(&mut self, console: &mut dyn Console) -> Result<(), RoundError> {
        for index in 0..self.players.len() {
            let money = self.players[index].money();
            if money == 0 {
                debug!("{} sits out with no money", self.players[index].name());
                continue;
            }

            loop {
                let player = &mut self.players[index];
                let amount = console
                    .decide_bet(player.name(), money)
                    .ok_or(RoundError::InputClosed)?;

                match player.place_bet(amount) {
                    Ok(amount) => {
                        let name: String = player.name().into();
                        info!("{name} bets {amount}");
                        self.log_action(format!("{name} bets ${amount}"));
                        console.render(&TableEvent::BetAccepted {
                            player: name,
                            amount,
                        });
                        break;
                    }
                    Err(error) => {
                        warn!("{} bet of {amount} declined: {error}", player.name());
                        console.render(&TableEvent::BetDeclined {
                            player: player.name().into(),
                            error,
                        });
                    }
                }
            }
        }
        Ok(())
    }

    /// Dealing phase: two cards to every player in the round and the dealer.
    ///
    /// Cards go out one at a time: each player's first card, the dealer's
    /// first card, each player's second card, the dealer's second card.
    ///
    /// # Errors
    ///
    /// Returns an error if the table is not in the dealing state or the deck
    /// runs out, in which case the round is abandoned.
    pub fn deal(&mut self, console: &mut dyn Console) -> Result<(), RoundError> {
        self.ensure_state(RoundState::Dealing)?;

        let outcome = self.deal_opening_cards();
        self.abort_on_error(outcome, console)?;

        console.render(&self.table_view());
        self.advance(console);
        Ok(())
    }

    fn deal_opening_cards(&mut self) -> Result<(), RoundError> {
        self.collect_cards();
        self.dealer.hide_hole();

        let seated = self.seated();
        for _ in 0..2 {
            for &index in &seated {
                let card = self.draw()?;
                debug!("{} is dealt {card}", self.players[index].name());
                self.players[index].hand_mut().add(card);
            }
            let card = self.draw()?;
            debug!("dealer is dealt {card}");
            self.dealer.hand_mut().add(card);
        }

        self.log_action(format!("Dealt opening hands to {} player(s)", seated.len()));
        Ok(())
    }
}
