// In app/src/main.rs

use std::path::PathBuf;

use anyhow::{Context, Result};
use app_config::Settings;
use backtester::{Backtester, RunSummary, SequentialFeed};
use clap::{Parser, Subcommand};
use core_types::StrategyConfig;
use tracing_subscriber::prelude::*;

// --- Command-Line Interface Definition ---

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = "Replays historical OHLCV bars through a trading strategy.")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Runs a historical backtest of the configured strategy.
    Backtest {
        /// CSV file of bars. Overrides `data.csv_path` from the config.
        #[arg(short, long)]
        data: Option<PathBuf>,

        /// Overrides the strategy's short window.
        #[arg(long)]
        short_window: Option<usize>,

        /// Overrides the strategy's long window.
        #[arg(long)]
        long_window: Option<usize>,

        /// Number of times to replay the loaded bars.
        #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
        runs: u32,

        /// Only print the run summary, not one line per bar.
        #[arg(short, long)]
        quiet: bool,
    },
}

// --- Main Application Entry Point ---

fn main() -> Result<()> {
    // Load environment variables from a .env file, if it exists.
    dotenvy::dotenv().ok();

    // Parse command-line arguments.
    let cli = Cli::parse();

    let settings = app_config::load_settings()?;
    init_tracing(&settings.app.log_level)?;

    tracing::info!(environment = %settings.app.environment, "Starting bar-replay");

    match cli.command {
        Commands::Backtest {
            data,
            short_window,
            long_window,
            runs,
            quiet,
        } => {
            handle_backtest(settings, data, short_window, long_window, runs, quiet)?;
        }
    }

    tracing::info!("bar-replay has finished successfully.");

    Ok(())
}

fn init_tracing(log_level: &str) -> Result<()> {
    let level: tracing::Level = log_level
        .parse()
        .with_context(|| format!("Invalid log level '{}'", log_level))?;

    // Logs go to stderr so stdout carries only the signal report.
    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_filter(tracing_subscriber::filter::Targets::new().with_default(level));
    tracing_subscriber::registry().with(fmt_layer).init();

    Ok(())
}

/// Handles the logic for the `backtest` subcommand.
fn handle_backtest(
    settings: Settings,
    data: Option<PathBuf>,
    short_window: Option<usize>,
    long_window: Option<usize>,
    runs: u32,
    quiet: bool,
) -> Result<()> {
    // --- 1. Strategy ---
    let mut strategy_config = settings.strategy;
    apply_window_overrides(&mut strategy_config, short_window, long_window)?;
    let strategy = strategies::factory::create_strategy(&strategy_config)?;

    // --- 2. Load Data ---
    let csv_path = data.unwrap_or(settings.data.csv_path);
    tracing::info!(path = %csv_path.display(), "Loading historical data for backtest...");
    let bars = backtester::data::load_csv(&csv_path)
        .with_context(|| format!("Failed to load data from {}", csv_path.display()))?;
    let mut feed = SequentialFeed::new(bars);

    // --- 3. Run ---
    let mut backtester = Backtester::new(strategy);
    println!("Running strategy: {}", backtester.strategy_name());
    println!("Loaded {} bars", feed.size());
    println!("----------------------------------------");

    let first = backtester.run(&mut feed, |bar, signal| {
        if !quiet {
            println!("{} | Close: {} | Signal: {:<4}", bar.timestamp, bar.close, signal.signal_type);
        }
    })?;
    print_summary(1, &first);

    // Later runs reuse the loaded bars via reset; they must match the first.
    for run in 2..=runs {
        let summary = backtester.replay(&mut feed, |_, _| {})?;
        print_summary(run, &summary);
        if summary != first {
            tracing::warn!(run, "Replay diverged from the first run.");
        }
    }

    Ok(())
}

/// Writes `--short-window` / `--long-window` into the strategy's params table.
fn apply_window_overrides(
    config: &mut StrategyConfig,
    short_window: Option<usize>,
    long_window: Option<usize>,
) -> Result<()> {
    if short_window.is_none() && long_window.is_none() {
        return Ok(());
    }
    let Some(params) = config.params.as_table_mut() else {
        anyhow::bail!("Strategy params for '{}' must be a table.", config.name);
    };
    for (key, value) in [("short_window", short_window), ("long_window", long_window)] {
        if let Some(value) = value {
            let value = i64::try_from(value).context("Window size is too large")?;
            params.insert(key.to_string(), toml::Value::Integer(value));
        }
    }
    Ok(())
}

/// Helper function to print a run summary in a readable format.
fn print_summary(run: u32, summary: &RunSummary) {
    println!("----------------------------------------");
    println!(
        "Run {}: {} bars | BUY {} | SELL {} | HOLD {}",
        run, summary.bars, summary.buys, summary.sells, summary.holds
    );
    if let Some(signal) = &summary.last_signal {
        println!(
            "Final signal: {} at {} (strength {})",
            signal.signal_type, signal.timestamp, signal.strength
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strategies::Strategy;

    fn sma_config(params: &str) -> StrategyConfig {
        toml::from_str(&format!("name = \"sma_crossover\"\n{params}")).unwrap()
    }

    #[test]
    fn parses_backtest_arguments() {
        let cli = Cli::try_parse_from([
            "bar-replay",
            "backtest",
            "--data",
            "bars.csv",
            "--short-window",
            "3",
            "--long-window",
            "5",
            "--runs",
            "2",
            "--quiet",
        ])
        .unwrap();
        let Commands::Backtest {
            data,
            short_window,
            long_window,
            runs,
            quiet,
        } = cli.command;
        assert_eq!(data, Some(PathBuf::from("bars.csv")));
        assert_eq!(short_window, Some(3));
        assert_eq!(long_window, Some(5));
        assert_eq!(runs, 2);
        assert!(quiet);
    }

    #[test]
    fn rejects_zero_runs() {
        assert!(Cli::try_parse_from(["bar-replay", "backtest", "--runs", "0"]).is_err());
    }

    #[test]
    fn overrides_replace_configured_windows() {
        let mut config = sma_config("params = { short_window = 10, long_window = 50 }");
        apply_window_overrides(&mut config, Some(3), None).unwrap();
        let strategy = strategies::factory::create_strategy(&config).unwrap();
        assert_eq!(strategy.name(), "SMA_3_50");
    }

    #[test]
    fn overrides_fill_in_missing_params() {
        let mut config = sma_config("");
        apply_window_overrides(&mut config, Some(2), Some(4)).unwrap();
        let strategy = strategies::factory::create_strategy(&config).unwrap();
        assert_eq!(strategy.name(), "SMA_2_4");
    }

    #[test]
    fn overrides_require_a_params_table() {
        let mut config = sma_config("params = 7");
        assert!(apply_window_overrides(&mut config, Some(2), None).is_err());
        // No overrides, nothing to check.
        assert!(apply_window_overrides(&mut config, None, None).is_ok());
    }
}
