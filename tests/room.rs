//! Room and lobby tests.

use std::sync::Arc;
use std::thread;

use sevens::{
    Card, ChainError, Difficulty, GameOptions, JoinError, Lobby, MoveError, OPENING_CARD,
    Outcome, PassError, PlayerId, QueryError, Rank, Room, RoomCode, RoomStatus, StartError,
    Suit,
};

const fn card(rank: Rank, suit: Suit) -> Card {
    Card::new(rank, suit)
}

fn code(text: &str) -> RoomCode {
    text.parse().unwrap()
}

fn room() -> Room {
    Room::new(code("ABCD"), "Host", GameOptions::default(), 7)
}

/// Plays the first playable card for the human on turn, or passes.
fn human_turn(room: &mut Room) {
    let game = room.game().unwrap();
    let id = game.current_player().unwrap().id;
    match room.playable_for(id).unwrap().first() {
        Some(&c) => {
            room.play(id, c).unwrap();
        }
        None => {
            room.pass(id).unwrap();
        }
    }
}

#[test]
fn room_codes_are_four_letters() {
    assert_eq!(code("abcd").as_str(), "ABCD");
    assert_eq!(code(" WxYz ").to_string(), "WXYZ");
    assert!("ABC".parse::<RoomCode>().is_err());
    assert!("ABCDE".parse::<RoomCode>().is_err());
    assert!("AB1D".parse::<RoomCode>().is_err());
}

#[test]
fn host_takes_seat_zero() {
    let room = room();
    assert_eq!(room.status(), RoomStatus::Waiting);
    assert_eq!(room.host_name(), "Host");
    assert_eq!(room.players().len(), 1);
    assert!(room.players()[0].is_host);
    assert_eq!(room.players()[0].id, room.host_id());
    assert!(room.game().is_none());
}

#[test]
fn join_rules() {
    let mut room = room();

    let bob = room.join("Bob").unwrap();
    assert_ne!(bob, room.host_id());
    assert_eq!(room.join("bob").unwrap_err(), JoinError::NameTaken);
    assert_eq!(room.add_ai(" HOST ").unwrap_err(), JoinError::NameTaken);

    let bot = room.add_ai("Bot").unwrap();
    assert!(room.players().iter().any(|p| p.id == bot && p.is_ai));
    room.join("Cat").unwrap();
    assert_eq!(room.join("Dan").unwrap_err(), JoinError::RoomFull);

    room.start().unwrap();
    assert_eq!(room.status(), RoomStatus::Playing);
    assert_eq!(room.join("Eve").unwrap_err(), JoinError::GameAlreadyStarted);
}

#[test]
fn start_preconditions() {
    let mut room = room();
    assert_eq!(
        room.start().unwrap_err(),
        StartError::InsufficientPlayers { min: 2 }
    );
    assert_eq!(room.status(), RoomStatus::Waiting);

    assert_eq!(
        room.play(room.host_id(), OPENING_CARD).unwrap_err(),
        MoveError::GameNotStarted
    );
    assert_eq!(
        room.pass(room.host_id()).unwrap_err(),
        PassError::GameNotStarted
    );
    assert_eq!(
        room.view_for(room.host_id()).unwrap_err(),
        QueryError::GameNotStarted
    );
    assert_eq!(room.run_ai_turns(), Ok(0));

    room.join("Bob").unwrap();
    room.start().unwrap();
    assert_eq!(room.start().unwrap_err(), StartError::GameAlreadyStarted);
    assert_eq!(
        room.start_with_deck(Vec::new()).unwrap_err(),
        StartError::GameAlreadyStarted
    );
    assert_eq!(room.players().iter().map(|p| p.cards_left()).sum::<usize>(), 52);
}

#[test]
fn prepared_deck_with_repeats_is_rejected() {
    let mut room = room();
    room.join("Bob").unwrap();
    room.add_ai("Bot").unwrap();

    let two = card(Rank::Two, Suit::Clubs);
    assert_eq!(
        room.start_with_deck(vec![OPENING_CARD, OPENING_CARD, two, two, two, two])
            .unwrap_err(),
        StartError::InvalidDeck { card: OPENING_CARD }
    );
    assert_eq!(room.status(), RoomStatus::Waiting);
    assert!(room.game().is_none());
}

#[test]
fn winning_flips_status_to_finished() {
    let mut room = room();
    let bob = room.join("Bob").unwrap();
    room.start_with_deck(vec![
        card(Rank::Two, Suit::Clubs),
        OPENING_CARD,
        card(Rank::Three, Suit::Clubs),
    ])
    .unwrap();

    assert_eq!(room.play(bob, OPENING_CARD), Ok(Outcome::Won(bob)));
    assert_eq!(room.status(), RoomStatus::Finished);
    assert_eq!(room.game().unwrap().winner(), Some(bob));
    assert_eq!(
        room.pass(room.host_id()).unwrap_err(),
        PassError::GameOver
    );
}

#[test]
fn ai_turns_stop_at_human_seat() {
    let mut room = room();
    room.add_ai("Bot").unwrap();
    room.start_with_deck(vec![
        card(Rank::Six, Suit::Hearts),
        OPENING_CARD,
        card(Rank::Two, Suit::Clubs),
        card(Rank::Three, Suit::Clubs),
    ])
    .unwrap();
    assert!(room.is_ai_turn());

    assert_eq!(room.run_ai_turns(), Ok(1));
    assert!(!room.is_ai_turn());
    let game = room.game().unwrap();
    assert_eq!(game.current_player().unwrap().id, room.host_id());
    assert_eq!(game.last_action(), "Bot played 7♥");

    // A human on turn means there is nothing for the AI loop to do.
    assert_eq!(room.run_ai_turns(), Ok(0));
}

#[test]
fn ai_turn_limit_is_reported() {
    let options = GameOptions::default().with_ai_chain_limit(0);
    let mut room = Room::new(code("LIMT"), "Host", options, 1);
    room.add_ai("Bot").unwrap();
    room.start_with_deck(vec![
        card(Rank::Six, Suit::Hearts),
        OPENING_CARD,
        card(Rank::Two, Suit::Clubs),
        card(Rank::Three, Suit::Clubs),
    ])
    .unwrap();

    assert_eq!(
        room.run_ai_turns(),
        Err(ChainError::LimitExceeded { limit: 0 })
    );
    assert_eq!(room.game().unwrap().turn_number(), 1);
}

#[test]
fn full_game_against_three_ais_finishes() {
    for (seed, difficulty) in [
        (1, Difficulty::Easy),
        (2, Difficulty::Medium),
        (3, Difficulty::Hard),
    ] {
        let mut room = Room::new(code("GAME"), "Host", GameOptions::default(), seed);
        room.set_difficulty(difficulty);
        room.add_ai("North").unwrap();
        room.add_ai("East").unwrap();
        room.add_ai("South").unwrap();
        room.start().unwrap();

        for _ in 0..500 {
            if room.status() == RoomStatus::Finished {
                break;
            }
            if room.is_ai_turn() {
                room.run_ai_turns().unwrap();
            } else {
                human_turn(&mut room);
            }
        }

        assert_eq!(room.status(), RoomStatus::Finished);
        let game = room.game().unwrap();
        let winner = game.winner().unwrap();
        assert_eq!(game.player(winner).unwrap().cards_left(), 0);

        let in_hands: usize = game.players().iter().map(|p| p.cards_left()).sum();
        assert_eq!(in_hands + game.board().len(), 52);
        assert!(!room.is_ai_turn());
    }
}

#[test]
fn lobby_creates_and_joins_rooms() {
    let lobby = Lobby::new(GameOptions::default(), 11);
    assert!(lobby.is_empty());

    let (code, host) = lobby.create_room("Ada");
    assert_eq!(lobby.len(), 1);
    assert_eq!(host, PlayerId(0));

    let lower = code.as_str().to_ascii_lowercase();
    let (joined, bob) = lobby.join(&lower, "Bob").unwrap();
    assert_eq!(joined, code);
    assert_eq!(lobby.join(code.as_str(), "BOB").unwrap_err(), JoinError::NameTaken);
    assert_eq!(lobby.join("1234", "Cat").unwrap_err(), JoinError::RoomNotFound);

    let handle = lobby.room(code).unwrap();
    {
        let mut room = handle.lock();
        room.start().unwrap();
        assert!(room.game().unwrap().player(bob).is_some());
    }

    assert!(lobby.remove(code).is_some());
    assert!(lobby.room(code).is_none());
    assert!(lobby.remove(code).is_none());
    assert_eq!(lobby.join(code.as_str(), "Cat").unwrap_err(), JoinError::RoomNotFound);
}

#[test]
fn lobby_codes_are_unique() {
    let lobby = Lobby::new(GameOptions::default(), 5);
    let mut codes: Vec<RoomCode> = (0..200).map(|i| lobby.create_room(format!("host{i}")).0).collect();
    codes.sort();
    codes.dedup();
    assert_eq!(codes.len(), 200);
    assert_eq!(lobby.len(), 200);
}

#[test]
fn rooms_are_driven_from_many_threads() {
    let lobby = Arc::new(Lobby::new(GameOptions::default(), 99));

    let workers: Vec<_> = (0..4)
        .map(|i| {
            let lobby = Arc::clone(&lobby);
            thread::spawn(move || {
                let (code, _) = lobby.create_room(format!("host{i}"));
                let handle = lobby.room(code).unwrap();
                let mut room = handle.lock();
                room.add_ai("Bot").unwrap();
                room.start().unwrap();
                room.run_ai_turns().unwrap();
                code
            })
        })
        .collect();

    for worker in workers {
        let code = worker.join().unwrap();
        let handle = lobby.room(code).unwrap();
        let room = handle.lock();
        assert_eq!(room.status(), RoomStatus::Playing);
        assert!(!room.is_ai_turn());
    }
    assert_eq!(lobby.len(), 4);
}
