use alloc::format;
use alloc::string::String;

use log::{debug, info};

use crate::console::{Console, TableEvent};
use crate::error::RoundError;
use crate::player::Participant;

use super::{BLACKJACK_PRIORITY, BUST_PRIORITY, Game, RoundState};

impl Game {
    /// Player phase: each player in seating order hits until they stand,
    /// bust or reach 21.
    ///
    /// A natural blackjack stands without being asked.
    ///
    /// # Errors
    ///
    /// Returns an error if the table is not in the player turn state or the
    /// deck runs out, in which case the round is abandoned.
    pub fn player_turns(&mut self, console: &mut dyn Console) -> Result<(), RoundError> {
        self.ensure_state(RoundState::PlayerTurn)?;

        for index in self.seated() {
            let outcome = self.play_turn(index, console);
            self.abort_on_error(outcome, console)?;
        }

        self.advance(console);
        Ok(())
    }

    fn play_turn(&mut self, index: usize, console: &mut dyn Console) -> Result<(), RoundError> {
        let name: String = self.players[index].name().into();

        if self.players[index].hand().is_blackjack() {
            info!("{name} has blackjack");
            self.log_action(format!("{name} has blackjack"));
            self.queue_event(format!("{name} has blackjack!"), BLACKJACK_PRIORITY);
            return Ok(());
        }

        console.render(&TableEvent::Hand(self.players[index].show_hand()));
        while self.players[index].hand_total() < 21 && self.players[index].wants_hit(console) {
            let card = self.draw()?;
            debug!("{name} hits and draws {card}");
            self.players[index].hand_mut().add(card);
            self.log_action(format!("{name} hits: {card}"));
            console.render(&TableEvent::Hand(self.players[index].show_hand()));
        }

        let total = self.players[index].hand_total();
        if self.players[index].hand().is_busted() {
            info!("{name} busts with {total}");
            self.log_action(format!("{name} busts with {total}"));
            self.queue_event(format!("{name} busted with {total}"), BUST_PRIORITY);
        } else {
            self.log_action(format!("{name} stands on {total}"));
        }
        Ok(())
    }
}
