mod common;

use common::{player, quiz, quiz_with};
use pharosquiz_session::{Lobby, SessionConfig, SessionError, DEFAULT_LOBBY_CAPACITY};
use pharosquiz_types::{PlayerId, QuizStatus};

#[test]
fn new_lobby_is_empty() {
    let lobby = Lobby::new(quiz(), DEFAULT_LOBBY_CAPACITY).unwrap();
    assert!(lobby.is_empty());
    assert!(!lobby.is_full());
    assert_eq!(lobby.capacity(), 10);
    assert_eq!(lobby.code().to_string(), "123456");
}

#[test]
fn rejects_quiz_without_questions() {
    assert!(matches!(Lobby::new(quiz_with(vec![]), 10), Err(SessionError::Quiz(_))));
}

#[test]
fn join_resets_score() {
    let mut lobby = Lobby::new(quiz(), 10).unwrap();
    let veteran = player("Veteran", 900);
    lobby.join(veteran.clone()).unwrap();

    assert!(lobby.contains(&veteran.id));
    assert_eq!(lobby.players()[0].score, 0);
    assert!(lobby.standings().iter().all(|entry| entry.rank == 1));
}

#[test]
fn join_rejects_duplicates() {
    let mut lobby = Lobby::new(quiz(), 10).unwrap();
    let p = player("Alice", 0);
    lobby.join(p.clone()).unwrap();
    let err = lobby.join(p.clone()).unwrap_err();
    assert!(matches!(err, SessionError::DuplicatePlayer(id) if id == p.id));
    assert_eq!(lobby.len(), 1);
}

#[test]
fn join_rejects_when_full() {
    let mut lobby = Lobby::new(quiz(), 2).unwrap();
    lobby.join(player("A", 0)).unwrap();
    lobby.join(player("B", 0)).unwrap();
    assert!(lobby.is_full());

    let err = lobby.join(player("C", 0)).unwrap_err();
    assert!(matches!(err, SessionError::LobbyFull(2)));
    assert_eq!(lobby.len(), 2);
}

#[test]
fn leave_frees_a_seat() {
    let mut lobby = Lobby::new(quiz(), 1).unwrap();
    let a = player("A", 0);
    lobby.join(a.clone()).unwrap();

    assert!(lobby.leave(&a.id));
    assert!(!lobby.leave(&a.id));
    assert!(!lobby.leave(&PlayerId::new()));
    lobby.join(player("B", 0)).unwrap();
}

#[test]
fn into_session_starts_play() {
    let mut lobby = Lobby::new(quiz(), 10).unwrap();
    let me = player("You", 0);
    lobby.join(me.clone()).unwrap();
    lobby.join(player("Player1", 0)).unwrap();

    let session = lobby.into_session(me.id, SessionConfig::default()).unwrap();
    assert_eq!(session.quiz().status, QuizStatus::Active);
    assert_eq!(session.roster().len(), 2);
    assert_eq!(session.local_score(), 0);
    assert_eq!(session.cursor(), 0);
}

#[test]
fn into_session_requires_local_player() {
    let mut lobby = Lobby::new(quiz(), 10).unwrap();
    lobby.join(player("Player1", 0)).unwrap();
    let err = lobby.into_session(PlayerId::new(), SessionConfig::default()).unwrap_err();
    assert!(matches!(err, SessionError::LocalPlayerMissing(_)));
}
