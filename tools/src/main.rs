//! neon-hub: headless front end for the Neon arcade hub.
//!
//! Usage:
//!   neon-hub                         interactive line commands
//!   neon-hub --ipc-mode              JSON lines on stdin/stdout
//!   neon-hub --idle 30               let generators run for 30 seconds
//!   neon-hub --config hub.json --save path/to/game_save.json --seed 7

mod input;
mod minigames;

use anyhow::{Context, Result};
use input::{next_input, spawn_stdin_reader, Input};
use minigames::{Reaction, ReactionTest, SideGames};
use neon_core::{
    view::{format_thousands, ClickerView},
    Action, HubConfig, JsonFileStore, Minigame, Outcome, Session, SystemClock,
};
use std::{
    env,
    io::{self, Write},
    path::PathBuf,
    thread,
    time::{Duration, Instant},
};

type HubSession = Session<JsonFileStore, SystemClock>;

#[derive(serde::Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum IpcCommand {
    GetState,
    Poll,
    Action { action: Action },
    GameOver { game: String, score: u64 },
    Quit,
}

#[derive(serde::Serialize)]
struct IpcReply<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    outcome: Option<&'a Outcome>,
    state:   ClickerView,
}

fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let ipc_mode = args.iter().any(|a| a == "--ipc-mode");
    let idle_secs = parse_arg(&args, "--idle", 0u64);
    let seed = parse_arg(&args, "--seed", clock_seed());

    let mut config = match find_arg(&args, "--config") {
        Some(path) => HubConfig::load(&PathBuf::from(path))?,
        None => HubConfig::default(),
    };
    if let Some(path) = find_arg(&args, "--save") {
        config.save_path = PathBuf::from(path);
    }

    let store = JsonFileStore::open(&config.save_path);
    let mut session = Session::start(store, SystemClock::new(), config.autosave);

    if ipc_mode {
        run_ipc_loop(&mut session, &config)?;
    } else if idle_secs > 0 {
        run_idle(&mut session, &config, idle_secs)?;
    } else {
        println!("/// NEXUS HUB /// save: {}", config.save_path.display());
        run_line_loop(&mut session, &config, SideGames::new(seed))?;
    }

    Ok(())
}

fn run_idle(session: &mut HubSession, config: &HubConfig, secs: u64) -> Result<()> {
    let interval = Duration::from_secs_f64(config.poll_interval());
    let deadline = Instant::now() + Duration::from_secs(secs);
    while Instant::now() < deadline {
        session.poll();
        thread::sleep(interval);
    }
    print_status(&session.view());
    session.on_exit().context("final save failed")?;
    Ok(())
}

fn run_ipc_loop(session: &mut HubSession, config: &HubConfig) -> Result<()> {
    let interval = Duration::from_secs_f64(config.poll_interval());
    let lines = spawn_stdin_reader();
    let mut stdout = io::stdout();

    loop {
        session.poll();
        let buffer = match next_input(&lines, interval) {
            Input::Line(line) => line,
            Input::Idle => continue,
            Input::Closed => break,
        };
        session.poll();

        let cmd: IpcCommand = match serde_json::from_str(&buffer) {
            Ok(c) => c,
            Err(e) => {
                let err_json = serde_json::json!({ "error": e.to_string() });
                writeln!(stdout, "{}", err_json)?;
                stdout.flush()?;
                continue;
            }
        };

        let outcome = match cmd {
            IpcCommand::Quit => break,
            IpcCommand::GetState | IpcCommand::Poll => None,
            IpcCommand::Action { action } => {
                let outcome = session.handle(action)?;
                if outcome == Outcome::Exited {
                    reply(&mut stdout, session, Some(&outcome))?;
                    return Ok(());
                }
                Some(outcome)
            }
            IpcCommand::GameOver { game, score } => {
                match game.parse::<Minigame>() {
                    Ok(game) => {
                        session.record_if_better(game, score);
                    }
                    Err(e) => log::warn!("{e}"),
                }
                None
            }
        };
        reply(&mut stdout, session, outcome.as_ref())?;
    }

    session.on_exit().context("final save failed")?;
    Ok(())
}

fn reply(stdout: &mut io::Stdout, session: &HubSession, outcome: Option<&Outcome>) -> Result<()> {
    let state = IpcReply { outcome, state: session.view() };
    writeln!(stdout, "{}", serde_json::to_string(&state)?)?;
    stdout.flush()?;
    Ok(())
}

fn run_line_loop(session: &mut HubSession, config: &HubConfig, mut side: SideGames) -> Result<()> {
    let interval = Duration::from_secs_f64(config.poll_interval());
    let lines = spawn_stdin_reader();
    let mut stdout = io::stdout();
    let mut reaction: Option<ReactionTest> = None;
    print_help();

    loop {
        if session.poll().is_some() {
            log::debug!("tick credited while waiting for input");
        }
        if let Some(test) = reaction.as_mut() {
            if test.should_show_go(Instant::now()) {
                println!(">>> GO! press Enter <<<");
                stdout.flush()?;
            }
        }

        let line = match next_input(&lines, interval) {
            Input::Line(line) => line,
            Input::Idle => continue,
            Input::Closed => break,
        };
        session.poll();

        if let Some(test) = reaction.take() {
            match test.press(Instant::now()) {
                Reaction::TooSoon => println!("too soon!"),
                Reaction::Reacted(ms) => println!("reaction: {ms} ms"),
            }
            stdout.flush()?;
            continue;
        }

        let words: Vec<&str> = line.split_whitespace().collect();
        let Some(&verb) = words.first() else {
            continue;
        };

        match verb {
            "mine" | "m" => {
                let times = words.get(1).and_then(|w| w.parse().ok()).unwrap_or(1u32);
                for _ in 0..times {
                    session.handle(Action::Mine)?;
                }
                println!("CRYPTO: {}", format_thousands(session.view().score));
            }
            "buy" | "b" => match words.get(1).and_then(|w| w.parse::<usize>().ok()) {
                Some(index) => print_outcome(&session.handle(Action::Purchase { index })?),
                None => println!("usage: buy <0-3>"),
            },
            "ascend" => print_outcome(&session.handle(Action::Ascend)?),
            "status" | "s" => print_status(&session.view()),
            "record" => match (words.get(1), words.get(2).and_then(|w| w.parse::<u64>().ok())) {
                (Some(name), Some(score)) => match name.parse::<Minigame>() {
                    Ok(game) => {
                        let improved = session.record_if_better(game, score);
                        let best = session.high_score(game);
                        println!("{game}: {score} (best {best}){}", if improved { " NEW RECORD" } else { "" });
                    }
                    Err(e) => println!("{e}"),
                },
                _ => println!("usage: record <runner|snake> <score>"),
            },
            "flip" => println!("{}", side.coin_flip()),
            "8ball" => println!("{}", side.magic_8_ball()),
            "react" => {
                println!("wait for GO, then press Enter...");
                reaction = Some(side.reaction_test(Instant::now()));
            }
            "help" | "?" => print_help(),
            "exit" | "quit" | "q" => {
                session.handle(Action::Exit)?;
                return Ok(());
            }
            other => println!("unknown command '{other}' (try help)"),
        }
        stdout.flush()?;
    }

    // EOF counts as exit.
    session.on_exit().context("final save failed")?;
    Ok(())
}

fn print_outcome(outcome: &Outcome) {
    match outcome {
        Outcome::Applied { event } => println!("ok: {}", event.kind()),
        Outcome::Rejected { reason, .. } => println!("no effect: {reason}"),
        Outcome::Exited => println!("bye"),
    }
}

fn print_status(view: &ClickerView) {
    println!("CRYPTO: {}", format_thousands(view.score));
    println!("CPS: {}/sec | Multiplier: x{}", view.income_per_sec, view.multiplier);
    for (i, row) in view.generators.iter().enumerate() {
        let marker = if row.affordable { "*" } else { " " };
        println!("  [{i}]{marker} {}", row.label());
    }
    if view.can_ascend {
        println!("  ASCEND (Cost: {})", format_thousands(view.ascend_cost));
    }
    println!("High scores: runner {} | snake {}", view.runner_best, view.snake_best);
}

fn print_help() {
    println!("commands: mine [n] | buy <0-3> | ascend | status | record <game> <score>");
    println!("          flip | 8ball | react | help | quit");
}

fn find_arg<'a>(args: &'a [String], flag: &str) -> Option<&'a str> {
    args.windows(2)
        .find(|w| w[0] == flag)
        .map(|w| w[1].as_str())
}

fn parse_arg<T: std::str::FromStr + Copy>(args: &[String], flag: &str, default: T) -> T {
    find_arg(args, flag)
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

fn clock_seed() -> u64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}
