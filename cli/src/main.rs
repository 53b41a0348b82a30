//! PharosQuiz terminal host
//!
//! Runs a whole quiz locally: a lobby that fills with simulated players, a
//! live session with countdowns and drifting opponent scores, and the final
//! standings with podium prizes.
//!
//! Usage:
//!   pharosquiz --name Alice
//!   pharosquiz --quiz my-quiz.json --config host.json --auto

use std::future::pending;
use std::path::PathBuf;
use std::pin::Pin;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use pharosquiz_cli::{
    demo_quiz, load_quiz, ordinal, parse_answer, render_prizes, render_question, render_reveal,
    render_standings, send_answer, HostConfig,
};
use pharosquiz_leaderboard::TxHash;
use pharosquiz_session::{
    run_lobby, FinalStandings, Lobby, LobbyCommand, LobbyConfig, LobbyEvent, QuizSession,
    SessionDriver, SessionEvent, Simulator, Urgency,
};
use pharosquiz_types::Player;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc;
use tokio::time::{sleep, Sleep};
use tracing::{debug, info, warn, Level};
use tracing_subscriber::FmtSubscriber;

const STANDINGS_ROWS: usize = 10;

#[derive(Parser, Debug)]
#[command(name = "pharosquiz")]
#[command(about = "Host and play a PharosQuiz session in the terminal")]
struct Args {
    /// Path to a JSON host config (session, lobby, explorer_url)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Path to a quiz definition; the built-in Web3 quiz is used otherwise
    #[arg(short, long)]
    quiz: Option<PathBuf>,

    /// Your display name
    #[arg(short, long, default_value = "You")]
    name: String,

    /// Override the quiz's seconds per question
    #[arg(long)]
    time_per_question: Option<u32>,

    /// Seconds to wait for players before starting
    #[arg(long, default_value = "12")]
    lobby_wait: u64,

    /// Answer with random picks instead of reading stdin
    #[arg(long)]
    auto: bool,

    /// Seed for the quiz code and simulated players
    #[arg(long)]
    seed: Option<u64>,

    /// Payout transaction hash to show beside each podium award, in order
    #[arg(long = "payout-tx")]
    payout_tx: Vec<String>,

    /// Enable verbose debug logging
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    let log_level = if args.verbose { Level::DEBUG } else { Level::WARN };
    FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .compact()
        .init();

    let config = HostConfig::load(args.config.as_deref())?;
    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let mut quiz = match &args.quiz {
        Some(path) => load_quiz(path)?,
        None => demo_quiz(&mut rng)?,
    };
    if let Some(secs) = args.time_per_question {
        quiz = quiz.with_time_per_question(secs);
        quiz.validate().context("Invalid --time-per-question")?;
    }
    let payouts = args
        .payout_tx
        .iter()
        .map(|hash| TxHash::parse(hash))
        .collect::<Result<Vec<_>, _>>()
        .context("Invalid --payout-tx")?;

    println!("\n========================================");
    println!("  {}", quiz.title);
    println!("========================================");
    println!("  Code:      {}", quiz.code);
    println!("  Host:      {}", quiz.host_name);
    println!("  Questions: {}", quiz.questions.len());
    if let Some(prize) = &quiz.prize_pool {
        println!("  Prize:     {prize}");
    }
    println!("========================================\n");

    let me = Player::new(args.name.as_str()).context("Invalid --name")?;
    let lobby = Lobby::new(quiz, config.lobby.capacity)?;
    let lobby = fill_lobby(
        lobby,
        config.lobby.clone(),
        me.clone(),
        Duration::from_secs(args.lobby_wait),
        StdRng::seed_from_u64(rng.r#gen()),
    )
    .await?;
    info!(players = lobby.len(), "lobby closed");

    let session = lobby.into_session(me.id, config.session.clone())?;
    let simulator = Simulator::new(StdRng::seed_from_u64(rng.r#gen()), config.session.max_drift);
    let results = play(session, simulator, args.auto, &mut rng).await?;

    println!("\n========================================");
    println!("  Final standings");
    println!("========================================");
    print!("{}", render_standings(&results.standings, me.id, STANDINGS_ROWS));
    println!(
        "\n  You answered {} of {} correctly",
        results.correct_answers(),
        results.answers.len()
    );
    if let Some(rank) = results.local_rank() {
        println!("  You finished {}", ordinal(rank));
    }

    if let (Some(pool), Some(prizes)) = (&results.prize_pool, &results.prizes) {
        println!("\n  Prizes ({pool})");
        print!("{}", render_prizes(prizes, &pool.token, &payouts));
        for tx in &payouts {
            debug!(url = %config.tx_url(tx.as_str()), "payout");
        }
    }
    println!();
    Ok(())
}

/// Runs the lobby with mock joins until the start countdown ends.
async fn fill_lobby(
    lobby: Lobby,
    config: LobbyConfig,
    me: Player,
    wait: Duration,
    rng: StdRng,
) -> Result<Lobby> {
    let (command_tx, command_rx) = mpsc::channel(16);
    let (event_tx, mut event_rx) = mpsc::channel(16);
    let simulator = Simulator::new(rng, 0);
    let task = tokio::spawn(async move {
        run_lobby(lobby, &config, Some(simulator), command_rx, event_tx).await
    });

    println!("Waiting for players...");
    command_tx
        .send(LobbyCommand::Join(me))
        .await
        .context("Lobby closed before joining")?;

    let start = sleep(wait);
    tokio::pin!(start);
    let mut starting = false;

    loop {
        tokio::select! {
            event = event_rx.recv() => match event {
                Some(LobbyEvent::PlayerJoined(player)) => println!("  + {} joined", player.name),
                Some(LobbyEvent::PlayerLeft(id)) => println!("  - {} left", id.short()),
                Some(LobbyEvent::JoinRejected { player, reason }) => {
                    warn!(player = %player.name, %reason, "join rejected");
                }
                Some(LobbyEvent::StartingIn(secs)) => println!("  Starting in {secs}..."),
                Some(LobbyEvent::Started) => println!("  Go!"),
                None => break,
            },
            () = &mut start, if !starting => {
                starting = true;
                command_tx
                    .send(LobbyCommand::Start)
                    .await
                    .context("Lobby closed before start")?;
            }
        }
    }

    let lobby = task.await.context("Lobby task failed")??;
    Ok(lobby)
}

/// Drives the live session, answering from stdin or at random.
async fn play(
    session: QuizSession,
    simulator: Simulator<StdRng>,
    auto: bool,
    rng: &mut StdRng,
) -> Result<FinalStandings> {
    let local = session.local_player();
    let mut handle = SessionDriver::spawn(session, Some(simulator));
    let mut stdin = BufReader::new(tokio::io::stdin()).lines();
    let mut stdin_open = !auto;
    let mut options = 0;
    let mut bot_pick: Option<(Pin<Box<Sleep>>, usize)> = None;
    let mut outcome = None;

    loop {
        tokio::select! {
            event = handle.next_event() => match event {
                Some(SessionEvent::QuestionStarted { index, total, question, time_limit_secs }) => {
                    print!("{}", render_question(index, total, &question));
                    println!("  {time_limit_secs}s to answer");
                    options = question.options().len();
                    if auto {
                        let limit_ms = u64::from(time_limit_secs) * 1_000;
                        let delay = Duration::from_millis(rng.gen_range(limit_ms / 10..limit_ms));
                        bot_pick = Some((Box::pin(sleep(delay)), rng.gen_range(0..options)));
                    }
                }
                Some(SessionEvent::Tick { remaining, urgency, .. }) => {
                    if urgency == Urgency::Urgent && remaining > 0 {
                        println!("  {remaining}s left!");
                    }
                }
                Some(SessionEvent::AnswerLocked { reveal, .. }) => {
                    bot_pick = None;
                    println!("{}", render_reveal(&reveal));
                }
                Some(SessionEvent::StandingsUpdated(standings)) => {
                    debug!(rank = ?standings.rank_of(&local), "standings updated");
                }
                Some(SessionEvent::Finished(results)) => outcome = Some(results),
                None => break,
            },

            line = stdin.next_line(), if stdin_open => match line.context("Failed to read stdin")? {
                Some(text) => match parse_answer(&text, options) {
                    Some(index) => send_answer(&handle, index, outcome.is_some()).await?,
                    None => println!("  Enter a letter or number for one of the {options} options"),
                },
                None => stdin_open = false,
            },

            index = bot_choice(&mut bot_pick) => {
                bot_pick = None;
                send_answer(&handle, index, outcome.is_some()).await?;
            }
        }
    }

    handle.shutdown().await?;
    outcome.context("Session ended before the last question")
}

async fn bot_choice(pick: &mut Option<(Pin<Box<Sleep>>, usize)>) -> usize {
    match pick {
        Some((delay, index)) => {
            delay.as_mut().await;
            *index
        }
        None => pending().await,
    }
}
