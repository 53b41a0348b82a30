//! Quiz session controller.
//!
//! `QuizSession` owns the roster, the question cursor and the current round.
//! All state changes go through its methods; after every score change the
//! roster is rebuilt and re-ranked before the method returns, so
//! [`QuizSession::standings`] is always current.

use crate::config::SessionConfig;
use crate::error::{SessionError, SessionResult};
use crate::round::{Round, Submission};
use pharosquiz_leaderboard::{distribute, Distribution, PrizePool, Standings};
use pharosquiz_types::{AnswerEvent, Player, PlayerId, Question, Quiz, QuizCode, QuizStatus};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::time::Duration;
use tracing::{debug, info};

/// Coarse view of where the session is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    /// Current question is open.
    Answering,
    /// Current question is locked and its answer shown.
    Revealed,
    /// No questions remain.
    Finished,
}

/// Result of moving past a locked question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Advance {
    /// Now on question `index`.
    Next(usize),
    /// Sequence exhausted.
    Finished(FinalStandings),
}

/// Handed to the results view when a session ends.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FinalStandings {
    pub quiz_code: QuizCode,
    pub title: String,
    pub local_player: PlayerId,
    pub standings: Standings,
    pub answers: Vec<AnswerEvent>,
    pub prize_pool: Option<PrizePool>,
    pub prizes: Option<Distribution>,
}

impl FinalStandings {
    #[must_use]
    pub fn local_rank(&self) -> Option<u32> {
        self.standings.rank_of(&self.local_player)
    }

    #[must_use]
    pub fn correct_answers(&self) -> usize {
        self.answers.iter().filter(|a| a.is_correct).count()
    }
}

/// A single player's live run through a quiz.
#[derive(Debug)]
pub struct QuizSession {
    quiz: Quiz,
    config: SessionConfig,
    prize_pool: Option<PrizePool>,
    local_player: PlayerId,
    roster: Vec<Player>,
    standings: Standings,
    cursor: usize,
    round: Round,
    answers: Vec<AnswerEvent>,
    finished: bool,
}

impl QuizSession {
    /// Starts a session on the first question.
    ///
    /// The quiz must be playable, roster ids unique and `local_player`
    /// present in the roster. A draft quiz is marked active; a completed or
    /// archived one is rejected.
    pub fn new(
        mut quiz: Quiz,
        roster: Vec<Player>,
        local_player: PlayerId,
        config: SessionConfig,
    ) -> SessionResult<Self> {
        quiz.validate()?;
        let prize_pool = quiz.prize_pool.as_deref().map(PrizePool::parse).transpose()?;

        let mut seen = HashSet::with_capacity(roster.len());
        for player in &roster {
            if !seen.insert(player.id) {
                return Err(SessionError::DuplicatePlayer(player.id));
            }
        }
        if !seen.contains(&local_player) {
            return Err(SessionError::LocalPlayerMissing(local_player));
        }

        if quiz.status != QuizStatus::Active {
            quiz.transition(QuizStatus::Active)?;
        }

        let round = Round::new(0, &quiz.questions[0]);
        let standings = Standings::from_players(&roster);
        info!(
            code = %quiz.code,
            questions = quiz.questions.len(),
            players = roster.len(),
            "session started"
        );

        Ok(Self {
            quiz,
            config,
            prize_pool,
            local_player,
            roster,
            standings,
            cursor: 0,
            round,
            answers: Vec::new(),
            finished: false,
        })
    }

    #[must_use]
    pub fn quiz(&self) -> &Quiz {
        &self.quiz
    }

    #[must_use]
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    #[must_use]
    pub fn local_player(&self) -> PlayerId {
        self.local_player
    }

    #[must_use]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    #[must_use]
    pub fn question_count(&self) -> usize {
        self.quiz.questions.len()
    }

    #[must_use]
    pub fn time_limit(&self) -> Duration {
        Duration::from_secs(u64::from(self.quiz.time_per_question_secs))
    }

    /// The open question, or `None` once finished.
    #[must_use]
    pub fn current_question(&self) -> Option<&Question> {
        if self.finished {
            return None;
        }
        self.quiz.questions.get(self.cursor)
    }

    #[must_use]
    pub fn round(&self) -> &Round {
        &self.round
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        if self.finished {
            Phase::Finished
        } else if self.round.is_locked() {
            Phase::Revealed
        } else {
            Phase::Answering
        }
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Current ranked snapshot. Cheap to clone.
    #[must_use]
    pub fn standings(&self) -> &Standings {
        &self.standings
    }

    #[must_use]
    pub fn roster(&self) -> &[Player] {
        &self.roster
    }

    #[must_use]
    pub fn local_score(&self) -> i64 {
        self.roster
            .iter()
            .find(|p| p.id == self.local_player)
            .map_or(0, |p| p.score)
    }

    /// Locked answers so far, in question order.
    #[must_use]
    pub fn answers(&self) -> &[AnswerEvent] {
        &self.answers
    }

    // ── Transitions ──────────────────────────────────────────────

    /// The local player picks `index` after `latency`.
    pub fn select_option(&mut self, index: usize, latency: Duration) -> SessionResult<Submission> {
        self.lock(Some(index), latency)
    }

    /// The countdown ran out.
    pub fn time_up(&mut self) -> SessionResult<Submission> {
        let limit = self.time_limit();
        self.lock(None, limit)
    }

    fn lock(&mut self, selected: Option<usize>, latency: Duration) -> SessionResult<Submission> {
        if self.finished {
            return Err(SessionError::SessionFinished);
        }
        let limit = self.time_limit();
        let question = &self.quiz.questions[self.cursor];
        let submission = self.round.lock(
            question,
            self.local_player,
            selected,
            latency,
            &self.config.scoring,
            limit,
        )?;

        match &submission {
            Submission::Accepted(event) => {
                debug!(
                    question = self.cursor,
                    selected = ?event.selected,
                    correct = event.is_correct,
                    points = event.points,
                    "answer locked"
                );
                self.answers.push(event.clone());
                if event.points != 0 {
                    self.apply(&[(self.local_player, event.points)])?;
                }
            }
            Submission::Ignored => {
                debug!(question = self.cursor, "answer ignored, round already locked");
            }
        }
        Ok(submission)
    }

    /// Moves to the next question, or finishes.
    pub fn advance(&mut self) -> SessionResult<Advance> {
        if self.finished {
            return Err(SessionError::SessionFinished);
        }
        if !self.round.is_locked() {
            return Err(SessionError::RoundNotLocked);
        }

        let next = self.cursor + 1;
        if next >= self.quiz.questions.len() {
            self.finished = true;
            self.quiz.transition(QuizStatus::Completed)?;
            info!(code = %self.quiz.code, score = self.local_score(), "session finished");
            return Ok(Advance::Finished(self.final_standings()));
        }

        self.cursor = next;
        self.round = Round::new(next, &self.quiz.questions[next]);
        info!(question = next, total = self.quiz.questions.len(), "next question");
        Ok(Advance::Next(next))
    }

    /// Adds `points` to one player's score.
    pub fn award(&mut self, player: PlayerId, points: i64) -> SessionResult<&Standings> {
        self.award_many(&[(player, points)])
    }

    /// Applies several score changes as one update.
    pub fn award_many(&mut self, deltas: &[(PlayerId, i64)]) -> SessionResult<&Standings> {
        if self.finished {
            return Err(SessionError::SessionFinished);
        }
        self.apply(deltas)?;
        Ok(&self.standings)
    }

    fn apply(&mut self, deltas: &[(PlayerId, i64)]) -> SessionResult<()> {
        if let Some((missing, _)) = deltas
            .iter()
            .find(|(id, _)| !self.roster.iter().any(|p| p.id == *id))
        {
            return Err(SessionError::UnknownPlayer(*missing));
        }

        self.roster = self
            .roster
            .iter()
            .map(|player| {
                let gained: i64 = deltas
                    .iter()
                    .filter(|(id, _)| *id == player.id)
                    .map(|(_, points)| *points)
                    .sum();
                player.with_points(gained)
            })
            .collect();
        self.standings = Standings::from_players(&self.roster);
        Ok(())
    }

    /// Snapshot for the results view. Also usable mid-session.
    #[must_use]
    pub fn final_standings(&self) -> FinalStandings {
        let prizes = self
            .prize_pool
            .as_ref()
            .map(|pool| distribute(&self.standings, pool, &self.config.prize_split));
        FinalStandings {
            quiz_code: self.quiz.code,
            title: self.quiz.title.clone(),
            local_player: self.local_player,
            standings: self.standings.clone(),
            answers: self.answers.clone(),
            prize_pool: self.prize_pool.clone(),
            prizes,
        }
    }
}
