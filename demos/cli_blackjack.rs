//! CLI blackjack table.
//!
//! Run with `RUST_LOG=debug` to follow the round engine's log output.

#![allow(clippy::missing_docs_in_private_items)]

use std::fs;
use std::io;
use std::path::PathBuf;

use blackjack_table::{Game, GameOptions, LineConsole, Participant, Profile, RoundError};

fn main() {
    env_logger::init();

    let options = GameOptions::default();
    let mut game = Game::with_entropy(options);
    let stdin = io::stdin();
    let mut console = LineConsole::new(stdin.lock(), io::stdout());

    console.say("Welcome to the blackjack table (type 'q' to quit)");
    loop {
        console.say(
            "\n1) Add player  2) Remove player  3) Play  4) Statistics  5) Leaderboard  6) Rules",
        );
        console.say("7) Table  8) Action log  9) Save profile  10) Load profile");
        let Some(choice) = console.read_line("Choice: ") else {
            break;
        };

        match choice.to_lowercase().as_str() {
            "1" | "add" => add_player(&mut game, &mut console),
            "2" | "remove" => remove_player(&mut game, &mut console),
            "3" | "play" => play(&mut game, &mut console),
            "4" | "stats" => show_stats(&game, &mut console),
            "5" | "leaderboard" => show_leaderboard(&game, &mut console),
            "6" | "rules" => show_rules(&game, &mut console),
            "7" | "table" => show_table(&game, &mut console),
            "8" | "log" => show_action_log(&game, &mut console),
            "9" | "save" => save_profile(&game, &mut console),
            "10" | "load" => load_profile(&mut game, &mut console),
            "q" | "quit" => break,
            _ => console.say("Unknown choice."),
        }
    }
    console.say("Goodbye.");
}

fn add_player<R: io::BufRead, W: io::Write>(game: &mut Game, console: &mut LineConsole<R, W>) {
    let Some(name) = console.read_line("Name: ") else {
        return;
    };
    let money = game.options.starting_money;
    match game.add_player(&name, money) {
        Ok(()) => console.say(&format!("{name} sits down with ${money}.")),
        Err(err) => console.say(&format!("Cannot seat {name}: {err}.")),
    }
}

fn remove_player<R: io::BufRead, W: io::Write>(game: &mut Game, console: &mut LineConsole<R, W>) {
    let Some(name) = console.read_line("Name: ") else {
        return;
    };
    match game.remove_player(&name) {
        Some(player) => console.say(&format!(
            "{name} leaves the table with ${}.",
            player.money()
        )),
        None => console.say(&format!("Nobody named {name} is seated.")),
    }
}

fn play<R: io::BufRead, W: io::Write>(game: &mut Game, console: &mut LineConsole<R, W>) {
    if game.player_count() == 0 {
        console.say("Seat a player first.");
        return;
    }

    match game.play(console) {
        Ok(0) => console.say("Nobody at the table has money left."),
        Ok(rounds) => console.say(&format!("{rounds} round(s) played.")),
        Err(RoundError::InputClosed) => console.say("Input closed; bets were returned."),
        Err(err) => console.say(&format!("The round was abandoned: {err}.")),
    }
}

fn show_stats<R: io::BufRead, W: io::Write>(game: &Game, console: &mut LineConsole<R, W>) {
    let records = game.stats().records();
    if records.is_empty() {
        console.say("No hands played yet.");
        return;
    }
    for (name, record) in records {
        console.say(&format!(
            "{name}: {} won, {} lost ({:.1}%)",
            record.wins,
            record.losses,
            record.win_rate() * 100.0
        ));
    }
}

fn show_leaderboard<R: io::BufRead, W: io::Write>(game: &Game, console: &mut LineConsole<R, W>) {
    let top = game.stats().top_scores(10);
    if top.is_empty() {
        console.say("The leaderboard is empty.");
        return;
    }
    for (place, entry) in top.iter().enumerate() {
        console.say(&format!("{:>2}. {:<12} ${}", place + 1, entry.name, entry.money));
    }
}

fn show_rules<R: io::BufRead, W: io::Write>(game: &Game, console: &mut LineConsole<R, W>) {
    let options = &game.options;
    console.say(&format!(
        "Up to {} players, each starting with ${}.",
        options.max_players, options.starting_money
    ));
    console.say("Get closer to 21 than the dealer without going over.");
    console.say("Face cards count 10; aces count 11 unless that would bust the hand.");
    console.say(&format!(
        "The dealer draws below {} and stands on {} or more.",
        options.dealer_stands_on, options.dealer_stands_on
    ));
    console.say(&format!(
        "A winning natural blackjack pays {}:1; ties return the bet.",
        options.blackjack_pays
    ));
}

fn show_table<R: io::BufRead, W: io::Write>(game: &Game, console: &mut LineConsole<R, W>) {
    console.say(&format!(
        "Round {}, {} of {} seats taken, {} cards left to draw.",
        game.round(),
        game.player_count(),
        game.options.max_players,
        game.dealer().deck().cards_remaining()
    ));
    for player in game.players() {
        console.say(&format!("  {:<12} ${}", player.name(), player.money()));
    }
}

fn show_action_log<R: io::BufRead, W: io::Write>(game: &Game, console: &mut LineConsole<R, W>) {
    let entries = game.action_log().entries();
    if entries.is_empty() {
        console.say("Nothing has happened yet.");
        return;
    }
    for entry in entries {
        console.say(entry);
    }
}

fn profile_path(name: &str) -> PathBuf {
    PathBuf::from(format!("{name}.profile"))
}

/// One `key=value` line per field.
fn format_profile(profile: &Profile) -> String {
    format!(
        "name={}\nmoney={}\nwins={}\nlosses={}\n",
        profile.name, profile.money, profile.wins, profile.losses
    )
}

fn parse_profile(text: &str) -> Option<Profile> {
    let mut profile = Profile {
        name: String::new(),
        money: 0,
        wins: 0,
        losses: 0,
    };
    for line in text.lines() {
        let (key, value) = line.split_once('=')?;
        match key.trim() {
            "name" => profile.name = value.trim().to_string(),
            "money" => profile.money = value.trim().parse().ok()?,
            "wins" => profile.wins = value.trim().parse().ok()?,
            "losses" => profile.losses = value.trim().parse().ok()?,
            _ => return None,
        }
    }
    (!profile.name.is_empty()).then_some(profile)
}

fn save_profile<R: io::BufRead, W: io::Write>(game: &Game, console: &mut LineConsole<R, W>) {
    let Some(name) = console.read_line("Name: ") else {
        return;
    };
    let Some(profile) = game.profile(&name) else {
        console.say(&format!("Nobody named {name} is seated."));
        return;
    };

    let path = profile_path(&profile.name);
    match fs::write(&path, format_profile(&profile)) {
        Ok(()) => console.say(&format!("Saved {name} to {}.", path.display())),
        Err(err) => console.say(&format!("Cannot save {}: {err}.", path.display())),
    }
}

fn load_profile<R: io::BufRead, W: io::Write>(game: &mut Game, console: &mut LineConsole<R, W>) {
    let Some(name) = console.read_line("Name: ") else {
        return;
    };

    let path = profile_path(&name);
    let text = match fs::read_to_string(&path) {
        Ok(text) => text,
        Err(err) => {
            console.say(&format!("Cannot read {}: {err}.", path.display()));
            return;
        }
    };
    let Some(profile) = parse_profile(&text) else {
        console.say(&format!("{} is not a valid profile.", path.display()));
        return;
    };

    match game.restore_profile(&profile) {
        Ok(()) => console.say(&format!(
            "{} returns with ${} ({} won, {} lost).",
            profile.name, profile.money, profile.wins, profile.losses
        )),
        Err(err) => console.say(&format!("Cannot seat {}: {err}.", profile.name)),
    }
}
