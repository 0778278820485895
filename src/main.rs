//! Gesture Recognizer - freehand gesture matching
//!
//! Matches recorded pointer traces against a database of named reference
//! shapes using per-axis dynamic time warping.

use gesture_recognizer::app::cli::{Cli, Commands, ConfigAction};
use gesture_recognizer::app::config::Config;
use gesture_recognizer::filter::motion::{MotionFilter, TracePoint};
use gesture_recognizer::recognizer::database::GestureDatabase;
use gesture_recognizer::Error;
use std::collections::BTreeMap;
use std::path::PathBuf;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    // Parse CLI arguments first so we can use --verbose to set log level
    let cli = Cli::parse_args();

    // Initialize tracing (--verbose enables debug-level output)
    let default_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .init();

    // Load config
    let config = if let Some(path) = &cli.config {
        Config::load(path)?
    } else {
        Config::load_default()?
    };

    // Execute command
    match cli.command {
        Commands::Recognize { input, ranked } => {
            run_recognize(&input, ranked, &config)?;
        }
        Commands::List { detailed } => {
            run_list(detailed)?;
        }
        Commands::Config { action } => {
            run_config(action, &config)?;
        }
    }

    Ok(())
}

fn run_recognize(input: &PathBuf, ranked: bool, config: &Config) -> anyhow::Result<()> {
    let content = std::fs::read_to_string(input)?;
    let trace: Vec<TracePoint> = serde_json::from_str(&content)?;
    info!("Loaded trace with {} points", trace.len());

    let filter = MotionFilter::with_thresholds(
        config.filter.idle_magnitude_threshold,
        config.filter.direction_angle_threshold_deg,
    );
    let query = filter.shape_from_trace(&trace);
    debug!("Filtered trace to {} moves", query.len());

    let mut db = GestureDatabase::with_default_gestures();
    db.rejection_threshold = config.matching.rejection_threshold;

    if ranked {
        for m in db.rank_matches(&query) {
            println!("{:8.4}  {}", m.distance, m.gesture.name);
        }
        return Ok(());
    }

    match db.recognize(&query) {
        Ok(matched) => {
            println!("{}", matched.name);
        }
        Err(Error::NoMatch { best_distance, threshold }) => {
            match best_distance {
                Some(d) => println!("no match (best distance {d:.4}, threshold {threshold})"),
                None => println!("no match (empty database)"),
            }
            std::process::exit(1);
        }
        Err(e) => return Err(e.into()),
    }

    Ok(())
}

fn run_list(detailed: bool) -> anyhow::Result<()> {
    let db = GestureDatabase::with_default_gestures();

    if detailed {
        for gesture in db.iter() {
            let moves: Vec<String> = gesture
                .shape
                .moves()
                .iter()
                .map(|v| format!("({:.3}, {:.3})", v.x, v.y))
                .collect();
            println!("{:8}  {}", gesture.name, moves.join(" "));
        }
        return Ok(());
    }

    let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
    for gesture in db.iter() {
        *counts.entry(gesture.name.as_str()).or_default() += 1;
    }
    for (name, count) in counts {
        println!("{name:8}  {count} exemplar(s)");
    }
    println!("{} gestures total", db.len());

    Ok(())
}

fn run_config(action: ConfigAction, config: &Config) -> anyhow::Result<()> {
    match action {
        ConfigAction::Show => {
            println!("{}", config.to_toml()?);
        }
        ConfigAction::Init { force } => {
            let path = Config::default_path();
            if path.exists() && !force {
                anyhow::bail!(
                    "config already exists at {} (use --force to overwrite)",
                    path.display()
                );
            }
            Config::default().save(&path)?;
            info!("Wrote default config to {}", path.display());
        }
    }

    Ok(())
}
