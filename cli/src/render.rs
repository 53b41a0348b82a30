//! Plain-text views of questions, reveals and results.

use pharosquiz_leaderboard::{Distribution, Standings, TxHash};
use pharosquiz_session::Reveal;
use pharosquiz_types::{PlayerId, Question};
use std::fmt::Write;

/// `1st`, `2nd`, `3rd`, `4th`, ... `11th`, `12th`, `13th`, `21st`.
#[must_use]
pub fn ordinal(n: u32) -> String {
    let suffix = match (n % 10, n % 100) {
        (_, 11..=13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    };
    format!("{n}{suffix}")
}

/// Accepts an option letter (`a`/`B`) or a 1-based number.
#[must_use]
pub fn parse_answer(input: &str, options: usize) -> Option<usize> {
    let input = input.trim();
    let index = if let Ok(number) = input.parse::<usize>() {
        number.checked_sub(1)?
    } else {
        let mut chars = input.chars();
        let (Some(c), None) = (chars.next(), chars.next()) else {
            return None;
        };
        if !c.is_ascii_alphabetic() {
            return None;
        }
        usize::from(c.to_ascii_uppercase() as u8 - b'A')
    };
    (index < options).then_some(index)
}

#[must_use]
pub fn render_question(index: usize, total: usize, question: &Question) -> String {
    let mut out = format!("\nQuestion {} of {}\n{}\n", index + 1, total, question.text());
    for (i, option) in question.options().iter().enumerate() {
        let _ = writeln!(out, "  {}) {option}", Question::option_label(i));
    }
    out
}

#[must_use]
pub fn render_reveal(reveal: &Reveal) -> String {
    let correct = Question::option_label(reveal.correct_option);
    match reveal.selected {
        None => format!("  Time's up! The correct answer is {correct}"),
        Some(_) if reveal.is_correct => format!("  Correct! +{} points", reveal.points),
        Some(_) => format!("  Incorrect. The correct answer is {correct}"),
    }
}

/// Top `limit` rows, plus the local player's row if it falls below them.
#[must_use]
pub fn render_standings(standings: &Standings, local: PlayerId, limit: usize) -> String {
    let mut out = String::new();
    let row = |out: &mut String, rank: u32, name: &str, score: i64, is_local: bool| {
        let marker = if is_local { " (you)" } else { "" };
        let _ = writeln!(out, "  {:>4}  {:<20} {:>6}{marker}", ordinal(rank), name, score);
    };

    for entry in standings.top(limit) {
        row(&mut out, entry.rank, &entry.player.name, entry.player.score, entry.player.id == local);
    }
    if let Some(position) = standings.position_of(&local) {
        if position >= limit {
            if let Some(entry) = standings.get(&local) {
                out.push_str("   ...\n");
                row(&mut out, entry.rank, &entry.player.name, entry.player.score, true);
            }
        }
    }
    out
}

/// Podium awards in rank order; `payouts[i]` is shown next to the i-th award.
#[must_use]
pub fn render_prizes(prizes: &Distribution, token: &str, payouts: &[TxHash]) -> String {
    let mut out = String::new();
    for (i, award) in prizes.awards.iter().enumerate() {
        let _ = write!(
            out,
            "  {:>4}  {:<20} {} {token}",
            ordinal(award.rank),
            award.name,
            award.amount
        );
        if let Some(tx) = payouts.get(i) {
            let _ = write!(out, "  tx {}", tx.abbreviated());
        }
        out.push('\n');
    }
    if prizes.undistributed > 0 {
        let _ = writeln!(out, "  {} {token} undistributed", prizes.undistributed);
    }
    out
}
