use anyhow::Result;
use clap::{ArgAction, Parser, Subcommand};
use omnibox_intent::{calculate_calories, parse_omnibox_input, ExerciseType, Intensity, Intent};
use std::io::{self, BufRead};
use time::format_description::well_known::Rfc3339;
use time::OffsetDateTime;
use tracing::info;

#[derive(Parser, Debug)]
#[command(
    name = "omni",
    version,
    about = "Omnibox intent parser CLI",
    disable_help_subcommand = true
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Parse omnibox input and print the resulting intent as JSON
    Parse {
        /// Input line; reads lines from stdin when omitted
        text: Option<String>,
        /// Wall-clock override as RFC 3339 (e.g. 2024-03-16T12:00:00Z)
        #[arg(long)]
        now: Option<String>,
        /// Print compact JSON instead of pretty
        #[arg(long, action = ArgAction::SetTrue)]
        compact: bool,
    },
    /// Estimate kilocalories for an exercise via the MET table
    Calories {
        /// Exercise type (running, cycling, strength, walking, swimming, yoga, other)
        #[arg(long)]
        exercise_type: ExerciseType,
        /// Session length in minutes
        #[arg(long, default_value_t = 30)]
        duration_min: u32,
        /// Intensity (low, moderate, high, ultra)
        #[arg(long, default_value = "moderate")]
        intensity: Intensity,
        /// Body weight in kilograms
        #[arg(long)]
        body_weight_kg: f64,
    },
}

fn main() -> Result<()> {
    setup_tracing();
    let cli = Cli::parse();

    match cli.command {
        Commands::Parse { text, now, compact } => parse(text.as_deref(), now.as_deref(), compact),
        Commands::Calories {
            exercise_type,
            duration_min,
            intensity,
            body_weight_kg,
        } => {
            let kcal = calculate_calories(exercise_type, duration_min, intensity, body_weight_kg);
            println!("{kcal}");
            Ok(())
        }
    }
}

fn setup_tracing() {
    // Best-effort; avoid panics if already set
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();
}

fn parse(text: Option<&str>, now: Option<&str>, compact: bool) -> Result<()> {
    let now = match now {
        Some(raw) => OffsetDateTime::parse(raw, &Rfc3339)
            .map_err(|e| anyhow::anyhow!("invalid --now timestamp '{raw}': {e}"))?,
        None => OffsetDateTime::now_utc(),
    };

    match text {
        Some(line) => print_intent(&parse_omnibox_input(line, now), compact),
        None => {
            let mut lines = 0u64;
            for line in io::stdin().lock().lines() {
                let line = line?;
                if line.trim().is_empty() {
                    continue;
                }
                // One JSON object per line when streaming.
                print_intent(&parse_omnibox_input(&line, now), true)?;
                lines += 1;
            }
            info!(lines, "parsed stdin lines");
            Ok(())
        }
    }
}

fn print_intent(intent: &Intent, compact: bool) -> Result<()> {
    let json = if compact {
        serde_json::to_string(intent)?
    } else {
        serde_json::to_string_pretty(intent)?
    };
    println!("{json}");
    Ok(())
}
