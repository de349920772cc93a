//! Table integration tests.

use std::collections::VecDeque;

use blackjack_table::{
    Card, Console, DECK_SIZE, Deck, DeckError, Game, GameOptions, HandOutcome, HandView,
    Participant, Profile, Rank, RoundError, RoundResult, RoundState, ScorePolicy, SeatError, Suit,
    TableEvent, build_standard_deck,
};

const fn card(rank: Rank, suit: Suit) -> Card {
    Card::new(rank, suit)
}

/// A console answering from queued replies and recording what it is shown.
#[derive(Default)]
struct Script {
    bets: VecDeque<i64>,
    answers: VecDeque<bool>,
    events: Vec<TableEvent>,
    hit_prompts: usize,
}

impl Script {
    fn new(bets: &[i64], answers: &[bool]) -> Self {
        Self {
            bets: bets.iter().copied().collect(),
            answers: answers.iter().copied().collect(),
            ..Self::default()
        }
    }

    fn notices(&self) -> Vec<&str> {
        self.events
            .iter()
            .filter_map(|event| match event {
                TableEvent::Notice { description, .. } => Some(description.as_str()),
                _ => None,
            })
            .collect()
    }

    fn declined_bets(&self) -> usize {
        self.events
            .iter()
            .filter(|event| matches!(event, TableEvent::BetDeclined { .. }))
            .count()
    }
}

impl Console for Script {
    fn prompt_integer(&mut self, _prompt: &str) -> Option<i64> {
        self.bets.pop_front()
    }

    fn prompt_yes_no(&mut self, _prompt: &str) -> bool {
        self.answers.pop_front().unwrap_or(false)
    }

    fn render(&mut self, event: &TableEvent) {
        self.events.push(event.clone());
    }

    fn decide_hit(&mut self, hand: &HandView) -> bool {
        self.hit_prompts += 1;
        self.prompt_yes_no(&format!("{} hit?", hand.owner))
    }
}

/// A full deck whose first cards are `top`, in draw order.
fn stacked(top: &[Card]) -> Deck {
    let mut cards = top.to_vec();
    cards.extend(build_standard_deck().into_iter().filter(|c| !top.contains(c)));
    Deck::from_cards(cards, 7)
}

fn table(options: GameOptions, top: &[Card]) -> Game {
    Game::with_deck(options, stacked(top))
}

/// Runs every phase after betting.
fn finish_round(game: &mut Game, console: &mut Script) -> RoundResult {
    game.deal(console).unwrap();
    game.player_turns(console).unwrap();
    game.dealer_turn(console).unwrap();
    let result = game.payouts(console).unwrap();
    game.cleanup(console).unwrap();
    result
}

fn sorted_deck_contents(game: &Game) -> Vec<Card> {
    let deck = game.dealer().deck();
    let mut cards: Vec<Card> = deck
        .draw_pile()
        .chain(deck.discard_pile())
        .copied()
        .collect();
    cards.sort_by_key(|c| (c.suit, c.rank));
    cards
}

#[test]
fn dealer_hits_sixteen_and_beats_standing_player() {
    let mut game = table(
        GameOptions::default(),
        &[
            card(Rank::Ten, Suit::Hearts), // Alice
            card(Rank::Six, Suit::Clubs), // dealer
            card(Rank::Seven, Suit::Diamonds), // Alice
            card(Rank::King, Suit::Spades), // dealer
            card(Rank::Five, Suit::Hearts), // dealer draw
        ],
    );
    game.add_player("Alice", 1000).unwrap();
    let mut console = Script::new(&[100], &[false]);

    game.place_bets(&mut console).unwrap();
    assert_eq!(game.player("Alice").unwrap().money(), 900);

    game.deal(&mut console).unwrap();
    game.player_turns(&mut console).unwrap();
    assert_eq!(game.player("Alice").unwrap().hand_total(), 17);

    game.dealer_turn(&mut console).unwrap();
    assert_eq!(game.dealer().hand_total(), 21);
    assert_eq!(game.dealer().hand().len(), 3);

    let result = game.payouts(&mut console).unwrap();
    let alice = result.player("Alice").unwrap();
    assert_eq!(alice.outcome, HandOutcome::Lose);
    assert_eq!(alice.money, 900);
    assert_eq!(alice.net(), -100);
    assert_eq!(game.player("Alice").unwrap().money(), 900);
    assert_eq!(game.stats().losses("Alice"), 1);
    assert_eq!(game.stats().wins("Alice"), 0);

    game.cleanup(&mut console).unwrap();
    assert_eq!(game.state(), RoundState::Betting);
}

#[test]
fn equal_totals_push_and_return_the_bet() {
    let mut game = table(
        GameOptions::default(),
        &[
            card(Rank::Ten, Suit::Hearts),
            card(Rank::King, Suit::Clubs),
            card(Rank::Queen, Suit::Diamonds),
            card(Rank::Ten, Suit::Spades),
        ],
    );
    game.add_player("Alice", 500).unwrap();
    let mut console = Script::new(&[50], &[false]);

    game.place_bets(&mut console).unwrap();
    assert_eq!(game.player("Alice").unwrap().money(), 450);

    let result = finish_round(&mut game, &mut console);
    assert_eq!(result.player("Alice").unwrap().outcome, HandOutcome::Push);
    assert_eq!(game.player("Alice").unwrap().money(), 500);
    assert_eq!(game.stats().wins("Alice"), 0);
    assert_eq!(game.stats().losses("Alice"), 0);
}

#[test]
fn bust_ends_turn_and_dealer_skips_drawing() {
    let mut game = table(
        GameOptions::default(),
        &[
            card(Rank::Ten, Suit::Hearts),
            card(Rank::Six, Suit::Clubs),
            card(Rank::Six, Suit::Diamonds),
            card(Rank::Five, Suit::Spades),
            card(Rank::Nine, Suit::Hearts), // Alice hits
        ],
    );
    game.add_player("Alice", 1000).unwrap();
    let mut console = Script::new(&[100], &[true, true]);

    let result = game.run_round(&mut console).unwrap();
    let alice = result.player("Alice").unwrap();
    assert_eq!(alice.outcome, HandOutcome::Bust);
    assert_eq!(alice.player_total, 25);
    assert_eq!(alice.money, 900);
    assert!(!result.dealer_played);
    assert_eq!(result.dealer_total, 11);
    // The second "hit" answer was never asked for.
    assert_eq!(console.hit_prompts, 1);
    assert_eq!(console.answers.len(), 1);
    assert_eq!(game.stats().losses("Alice"), 1);
    assert_eq!(console.notices(), vec!["Alice busted with 25"]);
}

#[test]
fn dealer_draws_after_all_bust_when_configured() {
    let mut game = table(
        GameOptions::default().with_dealer_plays_when_all_bust(true),
        &[
            card(Rank::Ten, Suit::Hearts),
            card(Rank::Six, Suit::Clubs),
            card(Rank::Six, Suit::Diamonds),
            card(Rank::Five, Suit::Spades),
            card(Rank::Nine, Suit::Hearts), // Alice hits
            card(Rank::Seven, Suit::Clubs), // dealer draw
        ],
    );
    game.add_player("Alice", 1000).unwrap();
    let mut console = Script::new(&[100], &[true]);

    let result = game.run_round(&mut console).unwrap();
    assert!(result.dealer_played);
    assert_eq!(result.dealer_total, 18);
    assert_eq!(result.player("Alice").unwrap().outcome, HandOutcome::Bust);
}

#[test]
fn dealer_bust_pays_standing_player() {
    let mut game = table(
        GameOptions::default(),
        &[
            card(Rank::Ten, Suit::Hearts),
            card(Rank::Ten, Suit::Clubs),
            card(Rank::Eight, Suit::Diamonds),
            card(Rank::Six, Suit::Spades),
            card(Rank::King, Suit::Hearts), // dealer draw
        ],
    );
    game.add_player("Alice", 1000).unwrap();
    let mut console = Script::new(&[100], &[false]);

    let result = game.run_round(&mut console).unwrap();
    assert!(result.dealer_bust);
    assert_eq!(result.dealer_total, 26);

    let alice = result.player("Alice").unwrap();
    assert_eq!(alice.outcome, HandOutcome::Win);
    assert_eq!(alice.payout, 200);
    assert_eq!(game.player("Alice").unwrap().money(), 1100);
    assert_eq!(game.stats().wins("Alice"), 1);
    assert_eq!(game.stats().high_score("Alice"), Some(1100));
    assert_eq!(console.notices(), vec!["Dealer busted with 26"]);
}

#[test]
fn natural_blackjack_stands_and_pays_even_money_by_default() {
    let mut game = table(
        GameOptions::default(),
        &[
            card(Rank::Ace, Suit::Hearts),
            card(Rank::Nine, Suit::Clubs),
            card(Rank::King, Suit::Diamonds),
            card(Rank::Eight, Suit::Spades),
        ],
    );
    game.add_player("Alice", 1000).unwrap();
    let mut console = Script::new(&[100], &[true]);

    let result = game.run_round(&mut console).unwrap();
    let alice = result.player("Alice").unwrap();
    assert_eq!(alice.outcome, HandOutcome::Blackjack);
    assert_eq!(alice.money, 1100);
    assert_eq!(console.hit_prompts, 0);
    assert_eq!(console.notices(), vec!["Alice has blackjack!"]);
}

#[test]
fn blackjack_payout_ratio_is_configurable() {
    let mut game = table(
        GameOptions::default().with_blackjack_pays(1.5),
        &[
            card(Rank::Ace, Suit::Hearts),
            card(Rank::Nine, Suit::Clubs),
            card(Rank::Queen, Suit::Diamonds),
            card(Rank::Eight, Suit::Spades),
        ],
    );
    game.add_player("Alice", 1000).unwrap();
    let mut console = Script::new(&[25], &[]);

    let result = game.run_round(&mut console).unwrap();
    // 25 * 1.5 = 37.5, rounded down.
    assert_eq!(result.player("Alice").unwrap().payout, 62);
    assert_eq!(game.player("Alice").unwrap().money(), 1037);
}

#[test]
fn natural_against_dealer_multi_card_twenty_one_pushes() {
    let mut game = table(
        GameOptions::default(),
        &[
            card(Rank::Ace, Suit::Hearts),
            card(Rank::Five, Suit::Clubs),
            card(Rank::Jack, Suit::Diamonds),
            card(Rank::Six, Suit::Spades),
            card(Rank::Ten, Suit::Hearts), // dealer draw
        ],
    );
    game.add_player("Alice", 1000).unwrap();
    let mut console = Script::new(&[100], &[]);

    let result = game.run_round(&mut console).unwrap();
    assert_eq!(result.dealer_total, 21);
    assert_eq!(result.player("Alice").unwrap().outcome, HandOutcome::Push);
    assert_eq!(game.player("Alice").unwrap().money(), 1000);
}

#[test]
fn hitting_to_twenty_one_stops_asking() {
    let mut game = table(
        GameOptions::default(),
        &[
            card(Rank::Five, Suit::Hearts),
            card(Rank::Ten, Suit::Clubs),
            card(Rank::Six, Suit::Diamonds),
            card(Rank::Seven, Suit::Spades),
            card(Rank::Ten, Suit::Hearts), // Alice hits to 21
        ],
    );
    game.add_player("Alice", 1000).unwrap();
    let mut console = Script::new(&[100], &[true, true, true]);

    let result = game.run_round(&mut console).unwrap();
    let alice = result.player("Alice").unwrap();
    assert_eq!(alice.player_total, 21);
    assert_eq!(alice.outcome, HandOutcome::Win);
    assert_eq!(console.hit_prompts, 1);
}

#[test]
fn cards_are_dealt_round_robin() {
    let top = [
        card(Rank::Two, Suit::Hearts), // Alice 1
        card(Rank::Three, Suit::Hearts), // Bob 1
        card(Rank::Four, Suit::Hearts), // dealer 1
        card(Rank::Five, Suit::Hearts), // Alice 2
        card(Rank::Six, Suit::Hearts), // Bob 2
        card(Rank::Seven, Suit::Hearts), // dealer 2
    ];
    let mut game = table(GameOptions::default(), &top);
    game.add_player("Alice", 100).unwrap();
    game.add_player("Bob", 100).unwrap();
    let mut console = Script::new(&[10, 20], &[]);

    game.place_bets(&mut console).unwrap();
    game.deal(&mut console).unwrap();
    assert_eq!(game.state(), RoundState::PlayerTurn);

    assert_eq!(game.player("Alice").unwrap().hand().cards(), &[top[0], top[3]]);
    assert_eq!(game.player("Bob").unwrap().hand().cards(), &[top[1], top[4]]);
    assert_eq!(game.dealer().hand().cards(), &[top[2], top[5]]);

    let dealer_view = game.dealer().show_hand();
    assert_eq!(dealer_view.cards, vec![None, Some(top[5])]);
    assert_eq!(dealer_view.total, None);
}

#[test]
fn stand_total_changed_after_construction_is_used() {
    let mut game = table(
        GameOptions::default(),
        &[
            card(Rank::Ten, Suit::Hearts), // Alice
            card(Rank::Six, Suit::Clubs), // dealer
            card(Rank::Seven, Suit::Diamonds), // Alice
            card(Rank::King, Suit::Spades), // dealer
            card(Rank::Five, Suit::Hearts), // not drawn
        ],
    );
    game.add_player("Alice", 1000).unwrap();
    game.options.dealer_stands_on = 16;
    let mut console = Script::new(&[100], &[false]);

    game.place_bets(&mut console).unwrap();
    let result = finish_round(&mut game, &mut console);

    assert_eq!(result.dealer_total, 16);
    assert_eq!(result.player("Alice").unwrap().outcome, HandOutcome::Win);
    assert_eq!(game.dealer().stands_on(), 16);
}

#[test]
fn score_policy_changed_after_construction_is_used() {
    let mut game = table(
        GameOptions::default(),
        &[
            card(Rank::Ten, Suit::Hearts), // Alice, round 1
            card(Rank::Ten, Suit::Clubs), // dealer
            card(Rank::Queen, Suit::Diamonds), // Alice
            card(Rank::Seven, Suit::Spades), // dealer
            card(Rank::Ten, Suit::Diamonds), // Alice, round 2
            card(Rank::Ten, Suit::Spades), // dealer
            card(Rank::Seven, Suit::Clubs), // Alice
            card(Rank::Nine, Suit::Hearts), // dealer
        ],
    );
    game.add_player("Alice", 1000).unwrap();
    game.options.score_policy = ScorePolicy::Peak;
    let mut console = Script::new(&[100, 100], &[false, false]);

    let first = game.run_round(&mut console).unwrap();
    assert_eq!(first.player("Alice").unwrap().money, 1100);
    let second = game.run_round(&mut console).unwrap();
    assert_eq!(second.player("Alice").unwrap().money, 1000);

    assert_eq!(game.stats().policy(), ScorePolicy::Peak);
    assert_eq!(game.stats().high_score("Alice"), Some(1100));
}

#[test]
fn huge_bankroll_saturates_instead_of_overflowing() {
    let mut game = table(
        GameOptions::default(),
        &[
            card(Rank::Ten, Suit::Hearts), // Rich
            card(Rank::Ten, Suit::Clubs), // dealer
            card(Rank::Queen, Suit::Diamonds), // Rich
            card(Rank::Seven, Suit::Spades), // dealer
        ],
    );
    game.add_player("Rich", usize::MAX).unwrap();
    let mut console = Script::new(&[1], &[false]);

    game.place_bets(&mut console).unwrap();
    let result = finish_round(&mut game, &mut console);

    let rich = result.player("Rich").unwrap();
    assert_eq!(rich.outcome, HandOutcome::Win);
    assert_eq!(rich.money, usize::MAX);
    assert_eq!(game.player("Rich").unwrap().money(), usize::MAX);
}

#[test]
fn dealer_reveals_after_its_turn() {
    let mut game = table(
        GameOptions::default(),
        &[
            card(Rank::Ten, Suit::Hearts),
            card(Rank::Ten, Suit::Clubs),
            card(Rank::Nine, Suit::Diamonds),
            card(Rank::Seven, Suit::Spades),
        ],
    );
    game.add_player("Alice", 100).unwrap();
    let mut console = Script::new(&[10], &[]);

    game.place_bets(&mut console).unwrap();
    game.deal(&mut console).unwrap();
    game.player_turns(&mut console).unwrap();
    assert!(!game.dealer().is_hole_revealed());
    game.dealer_turn(&mut console).unwrap();
    assert!(game.dealer().is_hole_revealed());

    let view = game.dealer().show_hand();
    assert!(!view.is_concealed());
    assert_eq!(view.total, Some(17));
    assert!(console.events.iter().any(|event| matches!(
        event,
        TableEvent::Table { dealer, .. } if dealer.total == Some(17)
    )));
}

#[test]
fn invalid_bets_are_asked_again() {
    let mut game = Game::new(GameOptions::default(), 3);
    game.add_player("Alice", 1000).unwrap();
    let mut console = Script::new(&[0, -5, 5000, 100], &[]);

    game.place_bets(&mut console).unwrap();
    assert_eq!(console.declined_bets(), 3);
    assert_eq!(game.player("Alice").unwrap().bet(), 100);
    assert_eq!(game.player("Alice").unwrap().money(), 900);
    assert_eq!(game.state(), RoundState::Dealing);
    assert!(
        game.action_log()
            .entries()
            .iter()
            .any(|entry| entry == "Alice bets $100")
    );
}

#[test]
fn closed_input_refunds_escrowed_bets() {
    let mut game = Game::new(GameOptions::default(), 3);
    game.add_player("Alice", 1000).unwrap();
    game.add_player("Bob", 1000).unwrap();
    let mut console = Script::new(&[100], &[]);

    assert_eq!(
        game.run_round(&mut console).unwrap_err(),
        RoundError::InputClosed
    );
    assert_eq!(game.player("Alice").unwrap().money(), 1000);
    assert_eq!(game.player("Alice").unwrap().bet(), 0);
    assert_eq!(game.state(), RoundState::Betting);
}

#[test]
fn broke_players_sit_out() {
    let mut game = Game::new(GameOptions::default(), 3);
    let mut console = Script::new(&[], &[]);
    assert_eq!(
        game.run_round(&mut console).unwrap_err(),
        RoundError::NoPlayers
    );

    game.add_player("Alice", 0).unwrap();
    assert_eq!(
        game.run_round(&mut console).unwrap_err(),
        RoundError::NoPlayers
    );

    game.add_player("Bob", 50).unwrap();
    let mut console = Script::new(&[50], &[]);
    let result = game.run_round(&mut console).unwrap();
    assert_eq!(result.players.len(), 1);
    assert_eq!(result.players[0].name, "Bob");
}

#[test]
fn phases_reject_calls_out_of_order() {
    let mut game = Game::new(GameOptions::default(), 1);
    let mut console = Script::new(&[], &[]);

    assert_eq!(
        game.deal(&mut console).unwrap_err(),
        RoundError::InvalidState {
            expected: RoundState::Dealing,
            actual: RoundState::Betting,
        }
    );
    assert!(game.payouts(&mut console).is_err());
    assert!(game.cleanup(&mut console).is_err());
}

#[test]
fn empty_deck_mid_round_is_fatal_and_refunds() {
    let cards = vec![
        card(Rank::Ten, Suit::Hearts),
        card(Rank::Ten, Suit::Clubs),
        card(Rank::Six, Suit::Diamonds),
        card(Rank::Seven, Suit::Spades),
    ];
    let mut game = Game::with_deck(GameOptions::default(), Deck::from_cards(cards, 1));
    game.add_player("Alice", 1000).unwrap();
    let mut console = Script::new(&[100], &[true]);

    assert_eq!(
        game.run_round(&mut console).unwrap_err(),
        RoundError::Deck(DeckError::Empty)
    );
    assert_eq!(game.state(), RoundState::Betting);
    assert_eq!(game.player("Alice").unwrap().money(), 1000);
    assert!(game.player("Alice").unwrap().hand().is_empty());
    assert!(game.dealer().hand().is_empty());

    let deck = game.dealer().deck();
    assert_eq!(deck.cards_remaining() + deck.discard_len(), 4);
    assert_eq!(deck.cards_remaining(), 4);

    // Only the reshuffle notice from restocking survives the abandoned round.
    assert_eq!(game.pending_events(), 1);
    game.process_events(&mut console);
    assert_eq!(console.notices(), vec!["The deck was reshuffled"]);
}

#[test]
fn cards_are_conserved_across_many_rounds() {
    let mut game = Game::new(GameOptions::default(), 2024);
    game.add_player("Alice", 1000).unwrap();
    game.add_player("Bob", 1000).unwrap();
    let expected = {
        let mut cards = build_standard_deck();
        cards.sort_by_key(|c| (c.suit, c.rank));
        cards
    };

    for round in 0..30 {
        let mut console = Script::new(&[10, 10], &[round % 2 == 0]);
        game.run_round(&mut console).unwrap();

        assert!(game.players().iter().all(|p| p.hand().is_empty()));
        assert!(game.dealer().hand().is_empty());
        let deck = game.dealer().deck();
        assert_eq!(deck.cards_remaining() + deck.discard_len(), DECK_SIZE);
        assert!(deck.cards_remaining() >= game.options.reshuffle_threshold);
        assert_eq!(sorted_deck_contents(&game), expected);
    }
    assert_eq!(game.round(), 30);
}

#[test]
fn cleanup_reshuffles_below_threshold() {
    let mut game = Game::new(GameOptions::default().with_reshuffle_threshold(DECK_SIZE), 9);
    game.add_player("Alice", 1000).unwrap();
    let mut console = Script::new(&[10], &[]);

    game.run_round(&mut console).unwrap();

    let deck = game.dealer().deck();
    assert_eq!(deck.cards_remaining(), DECK_SIZE);
    assert_eq!(deck.discard_len(), 0);
    assert!(
        console
            .events
            .iter()
            .any(|event| matches!(event, TableEvent::Reshuffled { cards: DECK_SIZE }))
    );
    assert!(console.notices().contains(&"The deck was reshuffled"));
}

#[test]
fn zero_threshold_still_reshuffles_an_empty_pile() {
    let cards = vec![
        card(Rank::Ten, Suit::Hearts),
        card(Rank::Ten, Suit::Clubs),
        card(Rank::Nine, Suit::Diamonds),
        card(Rank::Seven, Suit::Spades),
    ];
    let options = GameOptions::default().with_reshuffle_threshold(0);
    let mut game = Game::with_deck(options, Deck::from_cards(cards, 1));
    game.add_player("Alice", 1000).unwrap();
    let mut console = Script::new(&[10], &[false]);

    game.run_round(&mut console).unwrap();

    let deck = game.dealer().deck();
    assert_eq!(deck.cards_remaining(), 4);
    assert_eq!(deck.discard_len(), 0);
}

#[test]
fn events_drain_highest_priority_first() {
    let mut game = Game::new(GameOptions::default(), 1);
    let mut console = Script::new(&[], &[]);

    game.queue_event("low", 1);
    game.queue_event("high", 5);
    game.queue_event("mid", 3);
    game.queue_event("high again", 5);
    assert_eq!(game.pending_events(), 4);

    game.process_events(&mut console);
    assert_eq!(console.notices(), vec!["high", "high again", "mid", "low"]);
    assert_eq!(game.pending_events(), 0);
    assert_eq!(game.action_log().len(), 4);
    assert_eq!(game.action_log().entries()[0], "[event] high");
}

#[test]
fn seating_rules() {
    let mut game = Game::new(GameOptions::default().with_max_players(2), 1);

    game.add_player("Alice", 100).unwrap();
    assert_eq!(game.add_player("Alice", 100), Err(SeatError::DuplicateName));
    assert_eq!(game.add_player("   ", 100), Err(SeatError::EmptyName));
    game.add_player("Bob", 100).unwrap();
    assert_eq!(game.add_player("Carol", 100), Err(SeatError::TableFull));

    assert!(game.remove_player("Nobody").is_none());
    let bob = game.remove_player("Bob").unwrap();
    assert_eq!(bob.money(), 100);
    assert_eq!(game.player_count(), 1);
    game.add_player("Carol", 100).unwrap();
}

#[test]
fn profiles_round_trip_through_the_table() {
    let mut game = table(
        GameOptions::default(),
        &[
            card(Rank::Ten, Suit::Hearts),
            card(Rank::Ten, Suit::Clubs),
            card(Rank::Nine, Suit::Diamonds),
            card(Rank::Seven, Suit::Spades),
        ],
    );
    game.restore_profile(&Profile {
        name: "Alice".into(),
        money: 700,
        wins: 3,
        losses: 1,
    })
    .unwrap();
    assert_eq!(game.stats().high_score("Alice"), Some(700));

    let mut console = Script::new(&[100], &[]);
    game.run_round(&mut console).unwrap();

    assert_eq!(
        game.profile("Alice"),
        Some(Profile {
            name: "Alice".into(),
            money: 800,
            wins: 4,
            losses: 1,
        })
    );
    assert!(game.profile("Bob").is_none());
}

#[test]
fn play_stops_when_console_declines() {
    let mut game = Game::new(GameOptions::default(), 5);
    game.add_player("Alice", 1000).unwrap();
    let mut console = Script::new(&[10, 10, 10], &[]);

    assert_eq!(game.play(&mut console).unwrap(), 1);

    let mut empty = Game::new(GameOptions::default(), 5);
    assert_eq!(empty.play(&mut console).unwrap(), 0);
}
