//! Async drivers for the lobby and the live session.
//!
//! Each driver is a single task that owns its state outright. Commands come
//! in on one channel and events go out on another; countdown ticks, reveal
//! delays, score drift and mock joins are all branches of the same
//! `select!`, so nothing else ever mutates the roster. When the loop exits
//! (shutdown, dropped handle or end of quiz) the live countdown and every
//! interval are dropped with it.

use crate::config::LobbyConfig;
use crate::countdown::{Countdown, Urgency};
use crate::error::{SessionError, SessionResult};
use crate::lobby::Lobby;
use crate::round::{Reveal, Submission};
use crate::session::{Advance, FinalStandings, QuizSession};
use crate::simulate::Simulator;
use pharosquiz_leaderboard::Standings;
use pharosquiz_types::{AnswerEvent, Player, PlayerId, Question};
use rand::Rng;
use std::future::pending;
use std::pin::Pin;
use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;
use tokio::time::{interval_at, sleep, Instant, MissedTickBehavior, Sleep};
use tracing::{debug, info, warn};

const CHANNEL_CAPACITY: usize = 64;

/// Input to a running session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionCommand {
    /// Local player picks an option on the open question.
    Select(usize),
    Shutdown,
}

/// Output of a running session, in the order things happened.
#[derive(Debug, Clone, PartialEq)]
pub enum SessionEvent {
    QuestionStarted {
        index: usize,
        total: usize,
        question: Question,
        time_limit_secs: u32,
    },
    Tick {
        index: usize,
        remaining: u32,
        urgency: Urgency,
    },
    AnswerLocked {
        event: AnswerEvent,
        reveal: Reveal,
    },
    StandingsUpdated(Standings),
    Finished(FinalStandings),
}

/// Caller's side of a spawned [`SessionDriver`].
#[derive(Debug)]
pub struct DriverHandle {
    commands: mpsc::Sender<SessionCommand>,
    events: mpsc::Receiver<SessionEvent>,
    task: JoinHandle<QuizSession>,
}

impl DriverHandle {
    /// Sends the local player's choice.
    pub async fn select(&self, index: usize) -> SessionResult<()> {
        self.commands
            .send(SessionCommand::Select(index))
            .await
            .map_err(|_| SessionError::ChannelClosed)
    }

    /// Waits for the next event; `None` once the driver has stopped.
    pub async fn next_event(&mut self) -> Option<SessionEvent> {
        self.events.recv().await
    }

    /// Stops the driver and returns the session as it was left.
    pub async fn shutdown(self) -> SessionResult<QuizSession> {
        let Self {
            commands,
            events,
            task,
        } = self;
        // Closing the event stream first unblocks a driver stuck on a full channel.
        drop(events);
        let _ = commands.send(SessionCommand::Shutdown).await;
        task.await.map_err(|_| SessionError::ChannelClosed)
    }
}

/// Runs a [`QuizSession`] against real time.
pub struct SessionDriver<R> {
    session: QuizSession,
    simulator: Option<Simulator<R>>,
    commands: mpsc::Receiver<SessionCommand>,
    events: mpsc::Sender<SessionEvent>,
}

impl<R: Rng + Send + 'static> SessionDriver<R> {
    /// Spawns the driver on the current Tokio runtime.
    ///
    /// With a simulator, other players' scores drift every
    /// `drift_interval_ms` as long as `simulate_opponents` is set.
    pub fn spawn(session: QuizSession, simulator: Option<Simulator<R>>) -> DriverHandle {
        let (command_tx, command_rx) = mpsc::channel(CHANNEL_CAPACITY);
        let (event_tx, event_rx) = mpsc::channel(CHANNEL_CAPACITY);
        let driver = Self {
            session,
            simulator,
            commands: command_rx,
            events: event_tx,
        };
        DriverHandle {
            commands: command_tx,
            events: event_rx,
            task: tokio::spawn(driver.run()),
        }
    }

    async fn run(self) -> QuizSession {
        let Self {
            mut session,
            mut simulator,
            mut commands,
            events,
        } = self;

        let (expired_tx, mut expired_rx) = mpsc::unbounded_channel::<usize>();
        let reveal_delay = session.config().reveal_delay();
        let drifting = simulator.is_some() && session.config().simulate_opponents;
        let drift_period = session.config().drift_interval();
        let mut drift = interval_at(Instant::now() + drift_period, drift_period);
        drift.set_missed_tick_behavior(MissedTickBehavior::Delay);

        let (first, event) = match open_question(&session, &expired_tx) {
            Ok(opened) => opened,
            Err(err) => {
                warn!(%err, "could not open first question");
                return session;
            }
        };
        let mut ticks: Option<watch::Receiver<u32>> = Some(first.subscribe());
        let mut countdown: Option<Countdown> = Some(first);
        let mut reveal: Option<Pin<Box<Sleep>>> = None;
        let mut opened_at = Instant::now();
        if emit(&events, event).await.is_err() {
            return session;
        }

        loop {
            tokio::select! {
                command = commands.recv() => match command {
                    Some(SessionCommand::Select(index)) => {
                        match session.select_option(index, opened_at.elapsed()) {
                            Ok(Submission::Accepted(event)) => {
                                if let Some(active) = countdown.take() {
                                    active.cancel();
                                }
                                ticks = None;
                                if emit_locked(&events, &session, event).await.is_err() {
                                    break;
                                }
                                reveal = Some(Box::pin(sleep(reveal_delay)));
                            }
                            Ok(Submission::Ignored) => {}
                            Err(err) => warn!(%err, index, "selection rejected"),
                        }
                    }
                    Some(SessionCommand::Shutdown) | None => {
                        debug!("session driver shutting down");
                        break;
                    }
                },

                Some(index) = expired_rx.recv() => {
                    if index != session.cursor() || session.is_finished() {
                        debug!(index, "stale countdown expiry dropped");
                        continue;
                    }
                    if let Ok(Submission::Accepted(event)) = session.time_up() {
                        if let Some(active) = countdown.take() {
                            active.cancel();
                        }
                        ticks = None;
                        if emit_locked(&events, &session, event).await.is_err() {
                            break;
                        }
                        reveal = Some(Box::pin(sleep(reveal_delay)));
                    }
                },

                tick = next_tick(&mut ticks) => match tick {
                    Some(remaining) => {
                        let limit = session.quiz().time_per_question_secs;
                        let percent = f64::from(remaining) / f64::from(limit) * 100.0;
                        let event = SessionEvent::Tick {
                            index: session.cursor(),
                            remaining,
                            urgency: Urgency::from_percent(percent),
                        };
                        if emit(&events, event).await.is_err() {
                            break;
                        }
                    }
                    None => ticks = None,
                },

                () = reveal_elapsed(&mut reveal) => {
                    reveal = None;
                    match session.advance() {
                        Ok(Advance::Next(_)) => match open_question(&session, &expired_tx) {
                            Ok((started, event)) => {
                                ticks = Some(started.subscribe());
                                countdown = Some(started);
                                opened_at = Instant::now();
                                if emit(&events, event).await.is_err() {
                                    break;
                                }
                            }
                            Err(err) => {
                                warn!(%err, "could not open question");
                                break;
                            }
                        },
                        Ok(Advance::Finished(standings)) => {
                            let _ = emit(&events, SessionEvent::Finished(standings)).await;
                            break;
                        }
                        Err(err) => {
                            warn!(%err, "advance failed");
                            break;
                        }
                    }
                },

                _ = drift.tick(), if drifting => {
                    let Some(sim) = simulator.as_mut() else { continue };
                    let deltas = sim.drift(session.standings(), session.local_player());
                    match session.award_many(&deltas) {
                        Ok(standings) => {
                            let event = SessionEvent::StandingsUpdated(standings.clone());
                            if emit(&events, event).await.is_err() {
                                break;
                            }
                        }
                        Err(err) => warn!(%err, "score drift rejected"),
                    }
                },
            }
        }

        drop(countdown);
        session
    }
}

fn open_question(
    session: &QuizSession,
    expired_tx: &mpsc::UnboundedSender<usize>,
) -> SessionResult<(Countdown, SessionEvent)> {
    let index = session.cursor();
    let question = session
        .current_question()
        .ok_or(SessionError::SessionFinished)?
        .clone();
    let time_limit_secs = session.quiz().time_per_question_secs;

    let tx = expired_tx.clone();
    let countdown = Countdown::start(time_limit_secs, move || {
        let _ = tx.send(index);
    })?;

    info!(index, total = session.question_count(), "question opened");
    Ok((
        countdown,
        SessionEvent::QuestionStarted {
            index,
            total: session.question_count(),
            question,
            time_limit_secs,
        },
    ))
}

async fn emit_locked(
    events: &mpsc::Sender<SessionEvent>,
    session: &QuizSession,
    event: AnswerEvent,
) -> SessionResult<()> {
    let scored = event.points != 0;
    let reveal = session.round().reveal().ok_or(SessionError::RoundNotLocked)?;
    emit(events, SessionEvent::AnswerLocked { event, reveal }).await?;
    if scored {
        emit(events, SessionEvent::StandingsUpdated(session.standings().clone())).await?;
    }
    Ok(())
}

async fn emit<T>(events: &mpsc::Sender<T>, event: T) -> SessionResult<()> {
    events.send(event).await.map_err(|_| SessionError::ChannelClosed)
}

async fn next_tick(ticks: &mut Option<watch::Receiver<u32>>) -> Option<u32> {
    match ticks {
        Some(rx) => match rx.changed().await {
            Ok(()) => Some(*rx.borrow_and_update()),
            Err(_) => None,
        },
        None => pending().await,
    }
}

async fn reveal_elapsed(reveal: &mut Option<Pin<Box<Sleep>>>) {
    match reveal {
        Some(delay) => delay.as_mut().await,
        None => pending().await,
    }
}

// ── Lobby ────────────────────────────────────────────────────────

/// Input to a running lobby.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LobbyCommand {
    Join(Player),
    Leave(PlayerId),
    /// Begin the start countdown.
    Start,
    Cancel,
}

/// Output of a running lobby.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LobbyEvent {
    PlayerJoined(Player),
    PlayerLeft(PlayerId),
    JoinRejected { player: Player, reason: String },
    StartingIn(u32),
    Started,
}

/// Runs the lobby until the start countdown completes.
///
/// Returns the filled lobby, ready for [`Lobby::into_session`]. Cancelling,
/// closing the command channel or dropping the event receiver yields an
/// error and stops every timer.
pub async fn run_lobby<R: Rng>(
    mut lobby: Lobby,
    config: &LobbyConfig,
    mut simulator: Option<Simulator<R>>,
    mut commands: mpsc::Receiver<LobbyCommand>,
    events: mpsc::Sender<LobbyEvent>,
) -> SessionResult<Lobby> {
    let period = config.join_interval();
    let mut joins = interval_at(Instant::now() + period, period);
    joins.set_missed_tick_behavior(MissedTickBehavior::Delay);
    let simulate = config.simulate_joins && simulator.is_some();

    let (started_tx, mut started_rx) = mpsc::unbounded_channel::<()>();
    let mut start: Option<Countdown> = None;
    let mut ticks: Option<watch::Receiver<u32>> = None;

    loop {
        tokio::select! {
            command = commands.recv() => match command {
                Some(LobbyCommand::Join(player)) => match lobby.join(player.clone()) {
                    Ok(()) => emit(&events, LobbyEvent::PlayerJoined(player)).await?,
                    Err(err) => {
                        let reason = err.to_string();
                        emit(&events, LobbyEvent::JoinRejected { player, reason }).await?;
                    }
                },
                Some(LobbyCommand::Leave(id)) => {
                    if lobby.leave(&id) {
                        emit(&events, LobbyEvent::PlayerLeft(id)).await?;
                    }
                }
                Some(LobbyCommand::Start) => {
                    if start.is_some() {
                        continue;
                    }
                    if config.start_countdown_secs == 0 {
                        emit(&events, LobbyEvent::Started).await?;
                        return Ok(lobby);
                    }
                    let tx = started_tx.clone();
                    let countdown = Countdown::start(config.start_countdown_secs, move || {
                        let _ = tx.send(());
                    })?;
                    info!(code = %lobby.code(), players = lobby.len(), "quiz starting");
                    ticks = Some(countdown.subscribe());
                    start = Some(countdown);
                    emit(&events, LobbyEvent::StartingIn(config.start_countdown_secs)).await?;
                }
                Some(LobbyCommand::Cancel) | None => return Err(SessionError::Cancelled),
            },

            _ = joins.tick(), if simulate && start.is_none() && !lobby.is_full() => {
                let Some(sim) = simulator.as_mut() else { continue };
                let player = sim.next_joiner()?;
                lobby.join(player.clone())?;
                emit(&events, LobbyEvent::PlayerJoined(player)).await?;
            },

            tick = next_tick(&mut ticks) => match tick {
                Some(remaining) if remaining > 0 => {
                    emit(&events, LobbyEvent::StartingIn(remaining)).await?;
                }
                Some(_) => {}
                None => ticks = None,
            },

            Some(()) = started_rx.recv() => {
                emit(&events, LobbyEvent::Started).await?;
                return Ok(lobby);
            },
        }
    }
}
