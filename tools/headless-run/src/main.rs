//! headless-run: drive a FORGELINE simulation without a front end.
//!
//! Usage:
//!   headless-run run --seed 42 --ticks 3600 --wave hive_basic --modifier swarm
//!   headless-run run --seed 7 --ticks 600 --save ./saves --slot quick
//!   headless-run resume --save ./saves --slot quick --ticks 600
//!   headless-run waves

use std::path::PathBuf;
use std::process;

use forgeline_core::commands::PlayerCommand;
use forgeline_core::constants::DT;
use forgeline_core::enums::WaveModifier;
use forgeline_core::events::GameEvent;
use forgeline_core::waves::catalogue;
use forgeline_sim::persistence::{self, SaveData};
use forgeline_sim::{SimConfig, SimulationEngine};
use serde::Serialize;
use tracing::info;

fn main() {
    init_tracing();
    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        process::exit(1);
    }

    match args[1].as_str() {
        "run" => cmd_run(&args[2..]),
        "resume" => cmd_resume(&args[2..]),
        "waves" => cmd_waves(),
        "help" | "--help" | "-h" => print_usage(),
        other => {
            eprintln!("Unknown command: {other}");
            print_usage();
            process::exit(1);
        }
    }
}

/// Logs go to stderr; `LOG_FORMAT=json` switches to JSON lines.
fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    let json = matches!(std::env::var("LOG_FORMAT").as_deref(), Ok("json"));
    if json {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .json()
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .compact()
            .init();
    }
}

fn print_usage() {
    eprintln!(
        "headless-run: FORGELINE headless simulation driver\n\
         \n\
         Commands:\n\
         \n\
         run       Start a new world and advance it\n\
         \n\
           --seed <N>         RNG seed (default: 42)\n\
           --ticks <N>        Updates to run at 60 Hz (default: 3600)\n\
           --size <N>         Map width and height in tiles (default: 128)\n\
           --wave <id>        Summon a catalogue wave on the first tick\n\
           --modifier <m>     Wave modifier (can specify multiple)\n\
           --save <dir>       Write a save when done\n\
           --slot <name>      Save slot [A-Za-z0-9_-] (default: headless)\n\
         \n\
         resume    Load a save and advance it\n\
         \n\
           --save <dir>       Save directory\n\
           --slot <name>      Save slot [A-Za-z0-9_-] (default: headless)\n\
           --ticks <N>        Updates to run (default: 3600)\n\
         \n\
         waves     Print the wave catalogue as JSON\n\
         \n\
         The run summary is printed to stdout as JSON. Set RUST_LOG to\n\
         change log verbosity.\n"
    );
}

fn flag_value<'a>(args: &'a [String], flag: &str) -> Option<&'a str> {
    args.iter()
        .position(|a| a == flag)
        .and_then(|i| args.get(i + 1))
        .map(String::as_str)
}

fn flag_values<'a>(args: &'a [String], flag: &str) -> Vec<&'a str> {
    args.windows(2)
        .filter(|pair| pair[0] == flag)
        .map(|pair| pair[1].as_str())
        .collect()
}

fn parse_or_exit<T: std::str::FromStr>(args: &[String], flag: &str, default: T) -> T {
    match flag_value(args, flag) {
        None => default,
        Some(raw) => raw.parse().unwrap_or_else(|_| {
            eprintln!("Error: invalid value for {flag}: {raw}");
            process::exit(1);
        }),
    }
}

fn parse_modifier(raw: &str) -> Option<WaveModifier> {
    serde_json::from_value(serde_json::Value::String(raw.to_string())).ok()
}

/// What a run prints on completion.
#[derive(Serialize)]
struct RunSummary {
    seed: u64,
    ticks: u64,
    elapsed_secs: f64,
    phase: String,
    waves_completed: u32,
    buildings: usize,
    enemies_alive: usize,
    enemies_killed: u32,
    resources: serde_json::Value,
}

// --- Run command ---

fn cmd_run(args: &[String]) {
    let config = SimConfig {
        seed: parse_or_exit(args, "--seed", 42),
        map_width: parse_or_exit(args, "--size", forgeline_core::constants::DEFAULT_MAP_WIDTH),
        map_height: parse_or_exit(args, "--size", forgeline_core::constants::DEFAULT_MAP_HEIGHT),
        ..Default::default()
    };
    let ticks: u64 = parse_or_exit(args, "--ticks", 3600);

    let mut modifiers = Vec::new();
    for raw in flag_values(args, "--modifier") {
        match parse_modifier(raw) {
            Some(m) => modifiers.push(m),
            None => {
                eprintln!("Error: unknown modifier: {raw}");
                process::exit(1);
            }
        }
    }

    info!(seed = config.seed, ticks, "starting headless run");
    let mut engine = SimulationEngine::new(config.clone());
    if let Some(wave_id) = flag_value(args, "--wave") {
        engine.queue_command(PlayerCommand::StartWave {
            wave_id: wave_id.to_string(),
            modifiers,
        });
    }

    let summary = advance(&mut engine, config.seed, ticks);
    maybe_save(args, &engine);
    print_json(&summary);
}

// --- Resume command ---

fn cmd_resume(args: &[String]) {
    let Some(dir) = flag_value(args, "--save").map(PathBuf::from) else {
        eprintln!("Error: --save <dir> is required");
        process::exit(1);
    };
    let slot = flag_value(args, "--slot").unwrap_or("headless");
    let ticks: u64 = parse_or_exit(args, "--ticks", 3600);

    let data = match persistence::load_from_file(&dir, slot) {
        Ok(d) => d,
        Err(e) => {
            eprintln!("Error: {e}");
            process::exit(1);
        }
    };
    let seed = data.seed;
    info!(slot, tick = data.time.tick, "resuming saved world");

    let mut engine = SimulationEngine::from_world(data.restore());
    let summary = advance(&mut engine, seed, ticks);
    maybe_save(args, &engine);
    print_json(&summary);
}

// --- Waves command ---

fn cmd_waves() {
    print_json(&catalogue());
}

fn advance(engine: &mut SimulationEngine, seed: u64, ticks: u64) -> RunSummary {
    let mut killed = 0;
    let mut last = engine.snapshot();
    for _ in 0..ticks {
        last = engine.tick(DT);
        killed += last
            .events
            .iter()
            .filter(|e| matches!(e, GameEvent::EnemyKilled { .. }))
            .count() as u32;
        if last.events.contains(&GameEvent::CoreDestroyed) {
            break;
        }
    }

    info!(
        tick = last.time.tick,
        waves_completed = last.waves_completed,
        enemies_killed = killed,
        "headless run finished"
    );
    RunSummary {
        seed,
        ticks: last.time.tick,
        elapsed_secs: last.time.elapsed_secs,
        phase: format!("{:?}", last.phase),
        waves_completed: last.waves_completed,
        buildings: last.buildings.len(),
        enemies_alive: last.enemies.len(),
        enemies_killed: killed,
        resources: serde_json::to_value(&last.resources).unwrap_or_default(),
    }
}

fn maybe_save(args: &[String], engine: &SimulationEngine) {
    let Some(dir) = flag_value(args, "--save").map(PathBuf::from) else {
        return;
    };
    let slot = flag_value(args, "--slot").unwrap_or("headless");
    let data = SaveData::capture(engine.world(), slot);
    match persistence::save_to_file(&dir, slot, &data) {
        Ok(()) => info!(slot, dir = %dir.display(), "saved"),
        Err(e) => {
            eprintln!("Error: {e}");
            process::exit(1);
        }
    }
}

fn print_json<T: Serialize>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(json) => println!("{json}"),
        Err(e) => {
            eprintln!("Error serializing output: {e}");
            process::exit(1);
        }
    }
}
