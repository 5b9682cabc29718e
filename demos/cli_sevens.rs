//! CLI sevens example.

use std::io::{self, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use sevens::{Card, Difficulty, GameOptions, Lobby, PlayerView, Room, Suit};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("Sevens CLI example (type 'q' to quit)");

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let lobby = Lobby::new(GameOptions::default(), seed);

    let name = match prompt_line("Your name: ") {
        name if name.is_empty() => String::from("you"),
        name => name,
    };
    let (code, me) = lobby.create_room(name);
    println!("Room {code} created.");

    let Some(opponents) = prompt_count("Number of AI opponents (1-3): ") else {
        return;
    };
    let difficulty = prompt_line("Difficulty (easy/medium/hard): ")
        .parse::<Difficulty>()
        .unwrap_or_default();

    let Some(handle) = lobby.room(code) else {
        println!("Room {code} disappeared.");
        return;
    };
    let mut room = handle.lock();
    room.set_difficulty(difficulty);
    for name in ["North", "East", "South"].into_iter().take(opponents) {
        if let Err(err) = room.add_ai(name) {
            println!("Could not add {name}: {err}");
        }
    }

    if let Err(err) = room.start() {
        println!("Start error: {err}");
        return;
    }

    loop {
        if let Err(err) = room.run_ai_turns() {
            println!("AI error: {err}");
            break;
        }

        let view = match room.view_for(me) {
            Ok(view) => view,
            Err(err) => {
                println!("View error: {err}");
                break;
            }
        };
        print_table(&view);

        if let Some(winner) = view.winner {
            let name = view
                .seats
                .iter()
                .find(|seat| seat.id == winner)
                .map_or("someone", |seat| seat.name.as_str());
            println!("{name} wins the game.");
            break;
        }

        if view.must_pass() {
            println!("No playable cards, passing.");
            if let Err(err) = room.pass(me) {
                println!("Pass error: {err}");
            }
            continue;
        }

        if !take_turn(&mut room, &view) {
            return;
        }
    }
}

/// Prompts until the player makes a valid move. Returns `false` on quit.
fn take_turn(room: &mut Room, view: &PlayerView) -> bool {
    loop {
        println!("Playable: {}", format_cards(&view.playable));
        let input = prompt_line("Card to play (e.g. 7h, 10s): ");
        if input == "q" || input == "quit" {
            return false;
        }

        let card = match input.parse::<Card>() {
            Ok(card) => card,
            Err(err) => {
                println!("{err}");
                continue;
            }
        };

        match room.play(view.player_id, card) {
            Ok(_) => return true,
            Err(err) => println!("Move error: {err}"),
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

fn prompt_count(prompt: &str) -> Option<usize> {
    loop {
        let input = prompt_line(prompt);
        if input == "q" || input == "quit" {
            return None;
        }
        match input.parse::<usize>() {
            Ok(value @ 1..=3) => return Some(value),
            _ => println!("Please enter a number from 1 to 3."),
        }
    }
}

fn print_table(view: &PlayerView) {
    println!("\nTurn {}: {}", view.turn_number, view.last_action);

    for (suit, run) in view.board.runs() {
        let row = if run.cards().is_empty() {
            String::from("-")
        } else {
            format_cards(run.cards())
        };
        println!("  {:<8} {row}", suit.name());
    }

    for seat in &view.seats {
        let marker = if Some(seat.id) == view.current_player {
            "*"
        } else {
            " "
        };
        let kind = if seat.is_ai { "AI" } else { "human" };
        println!(
            "{marker} {} ({kind}): {} card(s)",
            seat.name, seat.cards_left
        );
    }

    println!("Your hand: {}", format_cards(&view.hand));
}

fn format_cards(cards: &[Card]) -> String {
    let parts: Vec<String> = cards.iter().map(|&card| format_card(card)).collect();
    parts.join(" ")
}

fn format_card(card: Card) -> String {
    match card.suit {
        Suit::Hearts | Suit::Diamonds => colorize(&card.to_string(), "31"),
        Suit::Spades | Suit::Clubs => card.to_string(),
    }
}

fn colorize(text: &str, code: &str) -> String {
    format!("\u{1b}[{code}m{text}\u{1b}[0m")
}
