//! arena: headless ARENA session runner.
//!
//! Usage:
//!   arena [--variant classic|horde|treasure] [--config path.json] [--seconds N] [--wall-clock] [--dump]
//!
//! Starts the 60Hz loop, drives the player with a scripted key sequence
//! for the requested time, then shuts down and logs the session summary.

use std::path::PathBuf;
use std::process;
use std::time::{Duration, Instant};

use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use arena_app::game_loop::{spawn_game_loop, ClockMode};
use arena_app::state::{AppState, GameLoopCommand};
use arena_core::config::{ArenaConfig, Variant};
use arena_core::input::KeyBindings;

/// One leg of the demo walk: keys held for a duration.
struct Leg {
    keys: &'static [&'static str],
    millis: u64,
}

const DEMO_ROUTE: &[Leg] = &[
    Leg { keys: &["d"], millis: 1500 },
    Leg { keys: &["w", "d"], millis: 1000 },
    Leg { keys: &[], millis: 1000 },
    Leg { keys: &["p"], millis: 100 },
    Leg { keys: &[], millis: 500 },
    Leg { keys: &["Escape"], millis: 100 },
    Leg { keys: &["ArrowLeft", "ArrowDown"], millis: 1500 },
    Leg { keys: &["a"], millis: 1000 },
    Leg { keys: &[], millis: 1500 },
];

struct Options {
    variant: Variant,
    config_path: Option<PathBuf>,
    seconds: f64,
    clock: ClockMode,
    dump: bool,
}

fn main() {
    init_tracing();

    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.iter().any(|a| a == "--help" || a == "-h") {
        print_usage();
        return;
    }
    let options = match parse_options(&args) {
        Ok(options) => options,
        Err(message) => {
            eprintln!("{message}");
            print_usage();
            process::exit(2);
        }
    };

    let config = match load_config(&options) {
        Ok(config) => config,
        Err(err) => {
            error!(error = %err, "invalid configuration");
            process::exit(1);
        }
    };

    if let Err(err) = run_session(config, &options) {
        error!(error = %err, "session failed");
        process::exit(1);
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_names(true)
        .compact()
        .init();
}

fn print_usage() {
    eprintln!(
        "arena: headless ARENA session\n\
         \n\
           --variant <name>   classic | horde | treasure (default: classic)\n\
           --config <path>    JSON config file; missing fields use classic defaults\n\
           --seconds <N>      Session length in seconds (default: 10)\n\
           --wall-clock       Gate shot cooldowns on real time instead of frame time\n\
           --dump             Print the final snapshot as JSON on stdout\n"
    );
}

fn parse_options(args: &[String]) -> Result<Options, String> {
    let mut options = Options {
        variant: Variant::Classic,
        config_path: None,
        seconds: 10.0,
        clock: ClockMode::Frame,
        dump: false,
    };

    let mut i = 0;
    while i < args.len() {
        let value = args.get(i + 1);
        match (args[i].as_str(), value) {
            ("--variant", Some(v)) => {
                options.variant =
                    parse_variant(v).ok_or_else(|| format!("Unknown variant: {v}"))?;
                i += 1;
            }
            ("--config", Some(v)) => {
                options.config_path = Some(PathBuf::from(v));
                i += 1;
            }
            ("--seconds", Some(v)) => {
                options.seconds = v
                    .parse::<f64>()
                    .ok()
                    .filter(|s| s.is_finite() && *s >= 0.0)
                    .ok_or_else(|| format!("Invalid --seconds value: {v}"))?;
                i += 1;
            }
            ("--wall-clock", _) => options.clock = ClockMode::Wall,
            ("--dump", _) => options.dump = true,
            (flag, _) => return Err(format!("Unknown or incomplete argument: {flag}")),
        }
        i += 1;
    }
    Ok(options)
}

fn parse_variant(name: &str) -> Option<Variant> {
    match name.to_ascii_lowercase().as_str() {
        "classic" => Some(Variant::Classic),
        "horde" => Some(Variant::Horde),
        "treasure" => Some(Variant::Treasure),
        _ => None,
    }
}

/// A config file wins over the variant preset.
fn load_config(options: &Options) -> Result<ArenaConfig, arena_core::config::ConfigError> {
    let config = match &options.config_path {
        Some(path) => ArenaConfig::load(path)?,
        None => ArenaConfig::preset(options.variant),
    };
    config.validate()?;
    Ok(config)
}

fn run_session(config: ArenaConfig, options: &Options) -> std::io::Result<()> {
    info!(variant = ?options.variant, seconds = options.seconds, seed = config.seed, "starting session");

    let state = AppState::new();
    let (tx, handle) = spawn_game_loop(
        config,
        KeyBindings::default(),
        options.clock,
        state.latest_snapshot.clone(),
    )?;
    if let Ok(mut slot) = state.command_tx.lock() {
        *slot = Some(tx);
    }
    if let Ok(mut running) = state.running.lock() {
        *running = true;
    }

    drive_demo(&state, Duration::from_secs_f64(options.seconds));

    state.send(GameLoopCommand::Shutdown);
    let summary = handle
        .join()
        .map_err(|_| std::io::Error::other("game loop thread panicked"))?;
    if let Ok(mut running) = state.running.lock() {
        *running = false;
    }

    info!(
        ticks = summary.ticks,
        frames = summary.frames,
        kills = summary.score.kills,
        elite_kills = summary.score.elite_kills,
        shots = summary.score.shots_fired,
        drops = summary.score.drops_created,
        "session finished"
    );

    if options.dump {
        if let Some(snapshot) = state.snapshot() {
            let json = serde_json::to_string_pretty(&snapshot).map_err(std::io::Error::other)?;
            println!("{json}");
        }
    }
    Ok(())
}

/// Walk the demo route in a loop until `length` has elapsed.
fn drive_demo(state: &AppState, length: Duration) {
    let end = Instant::now() + length;
    'session: loop {
        for leg in DEMO_ROUTE {
            for key in leg.keys {
                state.key(key, true);
            }
            let remaining = end.saturating_duration_since(Instant::now());
            std::thread::sleep(Duration::from_millis(leg.millis).min(remaining));
            for key in leg.keys {
                state.key(key, false);
            }
            if Instant::now() >= end {
                break 'session;
            }
        }
    }
}
