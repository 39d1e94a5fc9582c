//! battle-runner: headless battles between stock bots.
//!
//! Usage:
//!   battle-runner --bots spinner,rambler,sentry --rounds 10 --seed 7
//!   RUST_LOG=tankarena_sim=debug battle-runner --bots charger,idle --ticks 500

use std::process;
use std::time::Instant;

use serde_json::json;
use tracing::info;
use tracing_subscriber::EnvFilter;

use tankarena_bots::{by_name, STOCK_BOTS};
use tankarena_core::enums::{DamageModel, WallPolicy};
use tankarena_core::types::RobotId;
use tankarena_core::Vec2;
use tankarena_sim::{ArenaEngine, SimConfig};

struct Options {
    bots: Vec<String>,
    rounds: u32,
    max_ticks: u64,
    config: SimConfig,
    json: bool,
}

struct RoundResult {
    round: u32,
    seed: u64,
    ticks: u64,
    winner: Option<String>,
    survivors: Vec<(String, f64)>,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.iter().any(|a| matches!(a.as_str(), "help" | "--help" | "-h")) {
        print_usage();
        return;
    }

    let options = match parse_args(&args) {
        Ok(options) => options,
        Err(message) => {
            eprintln!("Error: {message}");
            print_usage();
            process::exit(1);
        }
    };

    let started = Instant::now();
    let mut total_ticks = 0;
    for round in 0..options.rounds {
        let result = match run_round(&options, round) {
            Ok(result) => result,
            Err(message) => {
                eprintln!("Error: {message}");
                process::exit(1);
            }
        };
        total_ticks += result.ticks;
        report(&result, options.json);
    }

    let elapsed = started.elapsed().as_secs_f64();
    info!(
        rounds = options.rounds,
        total_ticks,
        ticks_per_sec = total_ticks as f64 / elapsed.max(f64::EPSILON),
        "done"
    );
}

fn print_usage() {
    eprintln!(
        "battle-runner: TANKARENA headless battle runner\n\
         \n\
         Options:\n\
         \n\
           --bots <a,b,...>     Stock bots to enter (default: spinner,rambler)\n\
           --rounds <N>         Rounds to play (default: 1)\n\
           --ticks <N>          Tick limit per round (default: 5000)\n\
           --seed <N>           Seed of the first round; round k uses seed+k (default: 42)\n\
           --size <WxH>         Arena size (default: 600x400)\n\
           --damage <model>     reference | classic (default: reference)\n\
           --walls <policy>     observe | contain (default: observe)\n\
           --cooling <rate>     Enable gun cooling at this heat per tick\n\
           --json               One JSON object per round on stdout\n\
         \n\
         Stock bots: {}\n",
        STOCK_BOTS.join(", ")
    );
}

fn parse_args(args: &[String]) -> Result<Options, String> {
    let mut options = Options {
        bots: vec!["spinner".into(), "rambler".into()],
        rounds: 1,
        max_ticks: 5000,
        config: SimConfig::default(),
        json: false,
    };

    let mut i = 0;
    while i < args.len() {
        let flag = args[i].as_str();
        if flag == "--json" {
            options.json = true;
            i += 1;
            continue;
        }

        let value = args
            .get(i + 1)
            .ok_or_else(|| format!("{flag} needs a value"))?;
        match flag {
            "--bots" => {
                options.bots = value.split(',').map(|s| s.trim().to_string()).collect();
            }
            "--rounds" => options.rounds = parse_number(flag, value)?,
            "--ticks" => options.max_ticks = parse_number(flag, value)?,
            "--seed" => options.config.seed = parse_number(flag, value)?,
            "--size" => options.config.size = parse_size(value)?,
            "--damage" => {
                options.config.damage_model = match value.as_str() {
                    "reference" => DamageModel::Reference,
                    "classic" => DamageModel::Classic,
                    other => return Err(format!("unknown damage model: {other}")),
                }
            }
            "--walls" => {
                options.config.wall_policy = match value.as_str() {
                    "observe" => WallPolicy::Observe,
                    "contain" => WallPolicy::Contain,
                    other => return Err(format!("unknown wall policy: {other}")),
                }
            }
            "--cooling" => options.config.gun_cooling = Some(parse_number(flag, value)?),
            other => return Err(format!("unknown option: {other}")),
        }
        i += 2;
    }

    if options.bots.is_empty() {
        return Err("at least one bot is required".into());
    }
    options.config.validate().map_err(|e| e.to_string())?;
    Ok(options)
}

fn parse_number<T: std::str::FromStr>(flag: &str, value: &str) -> Result<T, String> {
    value
        .parse()
        .map_err(|_| format!("{flag}: not a number: {value}"))
}

fn parse_size(value: &str) -> Result<Vec2, String> {
    let (w, h) = value
        .split_once('x')
        .ok_or_else(|| format!("--size expects WxH, got {value}"))?;
    Ok(Vec2::new(
        parse_number("--size", w)?,
        parse_number("--size", h)?,
    ))
}

fn run_round(options: &Options, round: u32) -> Result<RoundResult, String> {
    let seed = options.config.seed.wrapping_add(u64::from(round));
    let config = SimConfig {
        seed,
        ..options.config.clone()
    };
    let mut engine = ArenaEngine::new(config).map_err(|e| e.to_string())?;

    let mut entrants: Vec<(RobotId, String)> = Vec::new();
    for (slot, name) in options.bots.iter().enumerate() {
        let bot = by_name(name, seed.wrapping_add(slot as u64))
            .ok_or_else(|| format!("unknown bot: {name}"))?;
        let id = engine.add_controlled_robot(bot);
        entrants.push((id, format!("{name}#{}", id.0)));
    }
    let label = |id: RobotId| {
        entrants
            .iter()
            .find(|(entrant, _)| *entrant == id)
            .map(|(_, label)| label.clone())
            .unwrap_or_else(|| id.to_string())
    };

    while engine.time().tick < options.max_ticks {
        engine.tick();
        if entrants.len() > 1 && engine.is_finished() {
            break;
        }
    }

    let survivors = engine
        .robots()
        .into_iter()
        .filter(|r| r.is_alive())
        .map(|r| (label(r.id), r.energy))
        .collect();

    Ok(RoundResult {
        round,
        seed,
        ticks: engine.time().tick,
        winner: engine.winner().map(label),
        survivors,
    })
}

fn report(result: &RoundResult, as_json: bool) {
    if as_json {
        let line = json!({
            "round": result.round,
            "seed": result.seed,
            "ticks": result.ticks,
            "winner": result.winner,
            "survivors": result
                .survivors
                .iter()
                .map(|(name, energy)| json!({ "robot": name, "energy": energy }))
                .collect::<Vec<_>>(),
        });
        println!("{line}");
        return;
    }

    let winner = result.winner.as_deref().unwrap_or("none");
    println!(
        "round {:>3}  seed {:>6}  ticks {:>6}  winner {}",
        result.round, result.seed, result.ticks, winner
    );
    for (name, energy) in &result.survivors {
        println!("    {name:<16} {energy:>6.1}");
    }
}
