//! Big Two simulator CLI - plays all-AI games in memory.
//!
//! Useful for checking that skill policies behave and that long runs keep
//! every invariant. Prints a summary table, or one JSON object per game
//! with `--json`.

use big_two::core::SeatMap;
use big_two::game::{GameEvent, Score};
use big_two::{BigTwoGame, EngineConfig, Seat, SkillStrategy, SEAT_COUNT};
use clap::{Parser, ValueEnum};
use serde::Serialize;
use std::time::Instant;
use tracing::{info, warn};

#[derive(Parser)]
#[command(name = "bigtwo-sim")]
#[command(about = "Play all-AI Big Two games with skills")]
struct Args {
    /// Number of games to simulate
    #[arg(short, long, default_value = "1")]
    games: u32,

    /// Master seed; every game forks its own stream from it
    #[arg(long)]
    seed: Option<u64>,

    /// AI skill strategy
    #[arg(long, default_value = "random")]
    strategy: Strategy,

    /// Skill use probability for the random strategy
    #[arg(long, default_value = "0.6")]
    skill_probability: f64,

    /// Rounds between skill rounds
    #[arg(long, default_value = "4")]
    skill_interval: u32,

    /// Give up on a game after this many turns
    #[arg(long, default_value = "2000")]
    max_turns: u32,

    /// Print one JSON line per game instead of the summary
    #[arg(long)]
    json: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Show progress while running
    #[arg(long)]
    show_output: bool,
}

#[derive(Debug, Clone, ValueEnum)]
enum Strategy {
    Random,
    Situational,
}

/// Result of one simulated game.
#[derive(Debug, Serialize)]
struct GameSummary {
    game: u32,
    winner: Option<Seat>,
    turns: u32,
    rounds: u32,
    skill_rounds: u32,
    skills_used: u32,
    scores: SeatMap<Score>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let filter = if args.verbose {
        "debug"
    } else if args.show_output {
        "info"
    } else {
        "warn"
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let strategy = match args.strategy {
        Strategy::Random => SkillStrategy::Random {
            probability: args.skill_probability,
        },
        Strategy::Situational => SkillStrategy::Situational,
    };
    let seed = args.seed.unwrap_or_else(rand::random);

    let config = EngineConfig::default()
        .all_ai()
        .with_seed(seed)
        .with_skill_round_interval(args.skill_interval)
        .with_skill_strategy(strategy);

    info!(seed, games = args.games, "starting simulator");

    let start = Instant::now();
    let mut game = BigTwoGame::new(config);
    let mut summaries = Vec::with_capacity(args.games as usize);

    for game_num in 1..=args.games {
        if game_num > 1 {
            game.new_game();
        }

        let summary = run_game(&mut game, game_num, args.max_turns)?;
        if summary.winner.is_none() {
            warn!(game = game_num, turns = summary.turns, "game hit the turn limit");
        }

        if args.json {
            println!("{}", serde_json::to_string(&summary)?);
        }
        summaries.push(summary);
    }

    if !args.json {
        print_summary(&summaries, seed, start.elapsed().as_secs_f64());
    }

    Ok(())
}

fn run_game(
    game: &mut BigTwoGame,
    game_num: u32,
    max_turns: u32,
) -> Result<GameSummary, Box<dyn std::error::Error>> {
    let mut turns = 0;
    let mut skill_rounds = 0;
    let mut skills_used = 0;

    while game.winner().is_none() && turns < max_turns {
        let turn = game.play_ai_turn()?;
        turns += 1;

        if turn.skill.is_some() {
            skills_used += 1;
        }
        skill_rounds += turn
            .outcome
            .events
            .iter()
            .filter(|e| matches!(e, GameEvent::SkillsGranted { .. }))
            .count() as u32;
    }

    if !game.state().is_conserved() {
        return Err(format!("game {game_num} lost track of a card").into());
    }

    Ok(GameSummary {
        game: game_num,
        winner: game.winner(),
        turns,
        rounds: game.round_number(),
        skill_rounds,
        skills_used,
        scores: game.scores(),
    })
}

fn print_summary(summaries: &[GameSummary], seed: u64, seconds: f64) {
    let mut wins = [0u32; SEAT_COUNT];
    let mut points = [0u64; SEAT_COUNT];
    let mut unfinished = 0;

    for summary in summaries {
        match summary.winner {
            Some(seat) => wins[seat.index()] += 1,
            None => unfinished += 1,
        }
        for (seat, score) in summary.scores.iter() {
            points[seat.index()] += u64::from(score.points);
        }
    }

    let games = summaries.len().max(1) as f64;
    println!("{} games, seed {seed}, {seconds:.2}s", summaries.len());
    println!("{:<8} {:>6} {:>10}", "seat", "wins", "avg points");
    for seat in Seat::all() {
        let i = seat.index();
        println!("{:<8} {:>6} {:>10.1}", seat.to_string(), wins[i], points[i] as f64 / games);
    }
    if unfinished > 0 {
        println!("{unfinished} games hit the turn limit");
    }

    let total_turns: u32 = summaries.iter().map(|s| s.turns).sum();
    let total_skills: u32 = summaries.iter().map(|s| s.skills_used).sum();
    println!(
        "avg turns {:.1}, avg skills used {:.1}",
        f64::from(total_turns) / games,
        f64::from(total_skills) / games
    );
}
