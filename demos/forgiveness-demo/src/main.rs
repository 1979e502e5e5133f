#![deny(unsafe_code)]
//! Forgiveness demo
//!
//! Confesses a hand-coded error state, witnesses it, releases it, and prints
//! a before/after report. All logic lives in `triadic-forgiveness`; this
//! binary only wires configuration, logging and output together.

use anyhow::Context;
use clap::{Parser, ValueEnum};
use colored::*;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use triadic_forgiveness::{ConfessionRecord, ForgivenessOperator};
use triadic_types::TriadicState;

mod config;
mod report;
mod summary;

use crate::config::DemoConfig;
use crate::report::Report;
use crate::summary::FacetSummary;

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

/// Forgiveness demo CLI
#[derive(Parser)]
#[command(name = "forgiveness-demo")]
#[command(about = "Confess, witness and release a hand-coded error state", long_about = None)]
#[command(version)]
struct Cli {
    /// Configuration file path
    #[arg(short, long, env = "TRIADIC_CONFIG")]
    config: Option<String>,

    /// Override the memory decay rate
    #[arg(long)]
    decay_rate: Option<f64>,

    /// Override the dwelling restore boost
    #[arg(long)]
    restore_boost: Option<f64>,

    /// Override the closure reduction
    #[arg(long)]
    closure_reduction: Option<f64>,

    /// Log level
    #[arg(long, env = "TRIADIC_LOG_LEVEL")]
    log_level: Option<String>,

    /// Enable JSON logging
    #[arg(long)]
    json_logs: bool,

    /// Report format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    output: OutputFormat,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = DemoConfig::load(cli.config.as_deref()).context("loading configuration")?;

    // Override with CLI args
    if let Some(decay_rate) = cli.decay_rate {
        config.release.decay_rate = decay_rate;
    }
    if let Some(restore_boost) = cli.restore_boost {
        config.release.restore_boost = restore_boost;
    }
    if let Some(closure_reduction) = cli.closure_reduction {
        config.release.closure_reduction = closure_reduction;
    }
    if let Some(level) = cli.log_level {
        config.logging.level = level;
    }
    config.logging.json |= cli.json_logs;

    init_tracing(&config);

    let report = run(&config)?;

    match cli.output {
        OutputFormat::Text => {
            print!("{}", report.render_text());
            println!();
            println!(
                "{}",
                "System can continue learning without permanent damage.".green()
            );
        }
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
    }

    Ok(())
}

fn init_tracing(config: &DemoConfig) {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| config.logging.level.clone().into());

    // Logs go to stderr so the report on stdout stays clean.
    if config.logging.json {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(std::io::stderr),
            )
            .init();
    } else {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}

fn run(config: &DemoConfig) -> anyhow::Result<Report> {
    let scenario = &config.scenario;
    let operator =
        ForgivenessOperator::new(config.release).context("invalid release parameters")?;

    let error_state = TriadicState::from_bounded(&scenario.error_state);
    let summary = FacetSummary::from_bounded(&error_state.project_bounded());

    let mut confession = ConfessionRecord::new(
        scenario.time,
        error_state,
        summary.coherence,
        summary.divergence,
        scenario.description.clone(),
    );
    if scenario.witnessed {
        confession.witness();
    }
    info!(
        confession_id = %confession.id(),
        witnessed = scenario.witnessed,
        "Confession recorded"
    );

    let restored = operator
        .release(&mut confession)
        .with_context(|| format!("releasing {}", confession.id()))?;

    Ok(Report::new(&confession, &restored, summary, config.release))
}
