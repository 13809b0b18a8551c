//! CLI Crazy Eights example.
//!
//! Set `RUST_LOG=crazy_eights=debug` to watch the engine's transitions.

use std::io::{self, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use crazy_eights::{
    Card, Game, GameOptions, GameSnapshot, GameStatus, Player, Suit, ThreadSleep, TurnEvent,
};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    println!("Crazy Eights CLI example (type 'q' to quit)");
    println!("Match the suit or rank of the top card. Eights are wild.");

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let game = Game::new(GameOptions::default(), seed).with_pacer(ThreadSleep);

    loop {
        match game.start() {
            Ok(events) => print_events(&events),
            Err(err) => {
                println!("Deal error: {err}");
                return;
            }
        }

        if !play_round(&game) {
            println!("Goodbye.");
            return;
        }

        match prompt_line("Play again? (y/n): ").as_str() {
            "y" | "yes" => {}
            _ => {
                println!("Goodbye.");
                return;
            }
        }
    }
}

/// Runs one game to the end. Returns `false` if the player quit.
fn play_round(game: &Game) -> bool {
    loop {
        let table = game.snapshot();
        match table.status {
            GameStatus::Finished => {
                print_table(&table);
                match table.winner {
                    Some(Player::Human) => println!("You emptied your hand. You win!"),
                    Some(Player::Opponent) => println!("The opponent emptied its hand. You lose."),
                    None => {}
                }
                return true;
            }
            GameStatus::AwaitingWildSuit => {
                let Some(suit) = prompt_suit() else {
                    return false;
                };
                print_events(&game.choose_wild_suit(suit));
            }
            GameStatus::InProgress if table.turn == Player::Human => {
                print_table(&table);

                if !table.player_can_play {
                    prompt_line("No playable card. Press enter to skip your turn.");
                    print_events(&game.skip_turn(Player::Human));
                    continue;
                }

                let input = prompt_line("Card number: ");
                if input == "q" || input == "quit" {
                    return false;
                }
                let Some(card) = input
                    .parse::<usize>()
                    .ok()
                    .and_then(|n| n.checked_sub(1))
                    .and_then(|i| table.player_hand.get(i).copied())
                else {
                    println!("Enter a number from the list.");
                    continue;
                };

                let events = game.play_card(Player::Human, card);
                if events.is_empty() {
                    println!("{} cannot be played now.", format_card(&card));
                }
                print_events(&events);
            }
            GameStatus::InProgress => {
                print_events(&game.play_opponent_turn());
            }
            GameStatus::NotStarted => return true,
        }
    }
}

fn prompt_line(prompt: &str) -> String {
    print!("{prompt}");
    let _ = io::stdout().flush();

    let mut input = String::new();
    if io::stdin().read_line(&mut input).is_err() {
        return String::new();
    }
    input.trim().to_lowercase()
}

fn prompt_suit() -> Option<Suit> {
    loop {
        let input = prompt_line("Choose a suit ([h]earts [d]iamonds [c]lubs [s]pades): ");
        match input.as_str() {
            "h" | "hearts" => return Some(Suit::Hearts),
            "d" | "diamonds" => return Some(Suit::Diamonds),
            "c" | "clubs" => return Some(Suit::Clubs),
            "s" | "spades" => return Some(Suit::Spades),
            "q" | "quit" => return None,
            _ => println!("Unknown suit."),
        }
    }
}

fn print_table(table: &GameSnapshot) {
    println!();
    println!(
        "Opponent: {} card(s) | Stub: {} card(s)",
        table.opponent_hand.len(),
        table.stub.len()
    );

    let top = table.top_card().map_or_else(|| "(none)".to_string(), format_card);
    match table.wild_suit {
        Some(suit) => println!("Top card: {top} | wild suit {}", format_suit(suit)),
        None => println!("Top card: {top}"),
    }

    println!("Your hand:");
    for (index, card) in table.player_hand.iter().enumerate() {
        let playable = table
            .top_card()
            .is_some_and(|top| crazy_eights::is_legal_play(card, top, table.wild_suit));
        let marker = if playable { "*" } else { " " };
        println!("{marker} {:>2}) {}", index + 1, format_card(card));
    }
    println!();
}

fn print_events(events: &[TurnEvent]) {
    for event in events {
        match *event {
            TurnEvent::SessionStarted { starting_card } => {
                println!("\nNew game. Starting card: {}", format_card(&starting_card));
            }
            TurnEvent::CardPlayed {
                player: Player::Opponent,
                card,
            } => println!("Opponent plays {}.", format_card(&card)),
            TurnEvent::CardPlayed { .. } | TurnEvent::WildSuitRequested => {}
            TurnEvent::WildSuitChosen { player, suit } => match player {
                Player::Human => println!("You chose {}.", format_suit(suit)),
                Player::Opponent => println!("Opponent chose {}.", format_suit(suit)),
            },
            TurnEvent::TurnSkipped { player } => match player {
                Player::Human => println!("You skip your turn."),
                Player::Opponent => println!("Opponent has no playable card and skips."),
            },
            TurnEvent::GameWon { .. } => {}
        }
    }
}

fn colorize(text: &str, code: &str) -> String {
    format!("\u{1b}[{code}m{text}\u{1b}[0m")
}

fn format_suit(suit: Suit) -> String {
    let (symbol, color_code) = suit_style(suit);
    colorize(symbol, color_code)
}

const fn suit_style(suit: Suit) -> (&'static str, &'static str) {
    match suit {
        Suit::Hearts => ("H", "31"),
        Suit::Diamonds => ("D", "31"),
        Suit::Clubs => ("C", "32"),
        Suit::Spades => ("S", "34"),
    }
}

fn format_card(card: &Card) -> String {
    let (suit, color_code) = suit_style(card.suit);
    let rank = if card.is_wild() {
        colorize(card.rank.label(), "1;33")
    } else {
        card.rank.label().to_string()
    };
    format!("{rank}{}", colorize(suit, color_code))
}
