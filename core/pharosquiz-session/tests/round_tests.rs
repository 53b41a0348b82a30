use pharosquiz_session::{Reveal, Round, RoundState, ScoringRule, SessionError, Submission};
use pharosquiz_types::{PlayerId, Question};
use std::time::Duration;

const LIMIT: Duration = Duration::from_secs(20);

fn question() -> Question {
    Question::multiple_choice("Pick C", ["a", "b", "c", "d"], 2).unwrap()
}

fn lock(round: &mut Round, q: &Question, selected: Option<usize>) -> Submission {
    round
        .lock(q, PlayerId::new(), selected, Duration::from_secs(4), &ScoringRule::default(), LIMIT)
        .unwrap()
}

#[test]
fn starts_unanswered() {
    let q = question();
    let round = Round::new(0, &q);
    assert_eq!(round.state(), &RoundState::Unanswered);
    assert!(!round.is_locked());
    assert!(round.answer().is_none());
    assert!(round.reveal().is_none());
}

#[test]
fn correct_selection_locks_with_points() {
    let q = question();
    let mut round = Round::new(0, &q);
    let Submission::Accepted(event) = lock(&mut round, &q, Some(2)) else {
        panic!("expected accepted");
    };
    assert!(event.is_correct);
    assert_eq!(event.points, 100);
    assert_eq!(event.question_id, q.id());
    assert!(round.is_locked());
    assert_eq!(
        round.reveal(),
        Some(Reveal { correct_option: 2, selected: Some(2), is_correct: true, points: 100 })
    );
}

#[test]
fn wrong_selection_locks_without_points() {
    let q = question();
    let mut round = Round::new(0, &q);
    let Submission::Accepted(event) = lock(&mut round, &q, Some(0)) else {
        panic!("expected accepted");
    };
    assert!(!event.is_correct);
    assert_eq!(event.points, 0);
    assert_eq!(round.reveal().unwrap().correct_option, 2);
}

#[test]
fn timeout_locks_with_no_selection() {
    let q = question();
    let mut round = Round::new(0, &q);
    let Submission::Accepted(event) = lock(&mut round, &q, None) else {
        panic!("expected accepted");
    };
    assert!(event.timed_out());
    assert!(!event.is_correct);
    assert_eq!(event.points, 0);
}

#[test]
fn second_lock_is_ignored() {
    let q = question();
    let mut round = Round::new(0, &q);
    assert!(lock(&mut round, &q, Some(0)).is_accepted());
    assert_eq!(lock(&mut round, &q, Some(2)), Submission::Ignored);
    assert_eq!(lock(&mut round, &q, None), Submission::Ignored);
    assert_eq!(round.answer().unwrap().selected, Some(0));
}

#[test]
fn out_of_range_is_error_and_keeps_round_open() {
    let q = question();
    let mut round = Round::new(0, &q);
    let err = round
        .lock(&q, PlayerId::new(), Some(4), Duration::ZERO, &ScoringRule::default(), LIMIT)
        .unwrap_err();
    assert!(matches!(err, SessionError::OptionOutOfRange { index: 4, options: 4 }));
    assert!(!round.is_locked());
}

#[test]
fn out_of_range_after_lock_is_ignored() {
    let q = question();
    let mut round = Round::new(0, &q);
    lock(&mut round, &q, Some(1));
    assert_eq!(lock(&mut round, &q, Some(9)), Submission::Ignored);
}

#[test]
fn latency_is_capped_at_limit() {
    let q = question();
    let mut round = Round::new(0, &q);
    let Submission::Accepted(event) = round
        .lock(&q, PlayerId::new(), None, Duration::from_secs(99), &ScoringRule::default(), LIMIT)
        .unwrap()
    else {
        panic!("expected accepted");
    };
    assert_eq!(event.latency, LIMIT);
}
