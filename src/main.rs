//! larder - pantry intelligence CLI
//!
//! Read-only queries over the household store: recipe feasibility,
//! consumption trends and repurchase suggestions.
//!
//! CHANGELOG:
//! - 10/16/2026 - Added suggest and shopping commands
//! - 10/15/2026 - Initial CLI skeleton

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;

use larder::commands;
use larder::config;
use larder::matching::ranker::{
    RankOptions, DEFAULT_LIMIT, DEFAULT_MAX_MISSING, DEFAULT_MIN_MATCH_SCORE,
};
use larder::model::Category;
use larder::output;
use larder::trends::analyzer::DEFAULT_LOOKBACK_DAYS;
use larder::trends::suggest::{SuggestOptions, DEFAULT_DAYS_TO_RUN_OUT, DEFAULT_USAGE_LEVEL};
use larder::trends::TrendQuery;

/// Pantry intelligence - recipe matching, consumption trends and shopping suggestions.
#[derive(Parser, Debug)]
#[command(name = "larder")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Database path (defaults to $LARDER_DB_PATH or the user data dir)
    #[arg(long, global = true)]
    db: Option<PathBuf>,

    /// Output as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Compact JSON output (no whitespace)
    #[arg(long, global = true)]
    compact: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    // =========================================================================
    // RECIPE COMMANDS
    // =========================================================================
    /// Suggest recipes that current inventory (nearly) covers
    Recipes {
        /// Minimum match score in percent (0-100)
        #[arg(long, default_value_t = DEFAULT_MIN_MATCH_SCORE)]
        min_match_score: u8,

        /// Maximum missing ingredients
        #[arg(long, default_value_t = DEFAULT_MAX_MISSING)]
        max_missing: usize,

        /// Max recipes to return
        #[arg(short, long, default_value_t = DEFAULT_LIMIT)]
        limit: usize,

        /// Only recipes of this category (e.g. "Vegetarian")
        #[arg(short, long)]
        category: Option<String>,
    },

    // =========================================================================
    // TREND COMMANDS
    // =========================================================================
    /// Show the consumption trend of one product
    Trend {
        /// Product barcode
        barcode: String,

        /// Storage category (fridge, freezer, pantry)
        #[arg(short, long, default_value = "fridge")]
        category: Category,

        /// Days to analyze
        #[arg(short, long, default_value_t = DEFAULT_LOOKBACK_DAYS)]
        days: u32,

        /// Units currently in stock, for the run-out prediction
        #[arg(short, long, default_value_t = 0)]
        quantity: u32,
    },

    /// Decide whether one product should be bought again
    Suggest {
        /// Product barcode
        barcode: String,

        /// Storage category (fridge, freezer, pantry)
        #[arg(short, long, default_value = "fridge")]
        category: Category,

        /// Units currently in stock
        #[arg(short, long)]
        quantity: u32,

        /// Fullness of the open unit (0-100)
        #[arg(short, long, default_value_t = DEFAULT_USAGE_LEVEL, value_parser = clap::value_parser!(u8).range(0..=100))]
        usage_level: u8,

        /// Suggest when the projected run-out is within this many days
        #[arg(long, default_value_t = DEFAULT_DAYS_TO_RUN_OUT)]
        days_to_run_out: u32,

        /// Days of history to analyze
        #[arg(short, long, default_value_t = DEFAULT_LOOKBACK_DAYS)]
        days: u32,
    },

    /// Auto-suggest items to add to the shopping list
    Shopping {
        /// Suggest when the projected run-out is within this many days
        #[arg(long, default_value_t = DEFAULT_DAYS_TO_RUN_OUT)]
        days_to_run_out: u32,

        /// Days of history to analyze
        #[arg(short, long, default_value_t = DEFAULT_LOOKBACK_DAYS)]
        days: u32,
    },
}

fn main() -> ExitCode {
    // Initialize tracing/logging
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .init();

    let cli = Cli::parse();

    let output_controls = output::OutputControls {
        json: cli.json,
        compact: cli.compact,
    };
    let db_path = cli.db.unwrap_or_else(config::default_db_path);

    let result = match cli.command {
        Command::Recipes { min_match_score, max_missing, limit, category } => {
            let options = RankOptions {
                min_match_score,
                max_missing,
                limit,
                category,
            };
            commands::recipes::run(&db_path, options, &output_controls)
        }
        Command::Trend { barcode, category, days, quantity } => {
            let query = TrendQuery {
                barcode: &barcode,
                category,
                lookback_days: days,
                current_quantity: quantity,
            };
            commands::trends::trend(&db_path, query, &output_controls)
        }
        Command::Suggest { barcode, category, quantity, usage_level, days_to_run_out, days } => {
            let options = SuggestOptions {
                usage_level,
                days_to_run_out,
                lookback_days: days,
            };
            commands::trends::suggest(&db_path, &barcode, category, quantity, options, &output_controls)
        }
        Command::Shopping { days_to_run_out, days } => {
            let options = SuggestOptions {
                days_to_run_out,
                lookback_days: days,
                ..SuggestOptions::default()
            };
            commands::shopping::run(&db_path, options, &output_controls)
        }
    };

    match result {
        Ok(()) => ExitCode::from(0),
        Err(e) => {
            if cli.json {
                eprintln!("{}", output::format_error(&format!("{:#}", e)));
            } else {
                eprintln!("Error: {:#}", e);
            }
            ExitCode::from(1)
        }
    }
}
