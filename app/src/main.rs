//! Fitness Planner
//!
//! Computes a daily calorie target, a diet plan and a 7-day workout plan from
//! a body profile, and looks up nutrition facts for common foods.

use anyhow::Result;
use clap::Parser;
use fitness_planner_app::cli::{Cli, Commands};
use fitness_planner_app::commands::{food_command, plan_command};
use fitness_planner_app::config;
use fitness_planner_app::services::OutputFormat;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    init_tracing();

    let cli = Cli::parse();
    let config = config::AppConfig::load()?;

    info!(
        version = env!("CARGO_PKG_VERSION"),
        env = if config::AppConfig::is_production() { "production" } else { "development" },
        "Starting Fitness Planner"
    );

    let output = match &cli.command {
        Commands::Plan(args) => {
            let format = args.format.unwrap_or(config.display.default_format);
            plan_command(&config, args).map_err(|err| {
                error!(code = err.code(), "Plan calculation failed: {}", err);
                if format == OutputFormat::Json {
                    if let Ok(body) = serde_json::to_string_pretty(&err.to_response()) {
                        println!("{}", body);
                    }
                }
                err
            })?
        }
        Commands::Food(args) => food_command(&config, args).await?,
    };

    print!("{}", output);
    Ok(())
}

/// Initialize tracing/logging
///
/// Logs go to stderr so that plan output on stdout can be piped.
fn init_tracing() {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if config::AppConfig::is_production() {
            "fitness_planner_app=info".into()
        } else {
            "fitness_planner_app=debug,fitness_planner=debug".into()
        }
    });

    let subscriber = tracing_subscriber::registry().with(env_filter);

    if config::AppConfig::is_production() {
        // JSON logging for production (better for log aggregation)
        subscriber
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        subscriber
            .with(tracing_subscriber::fmt::layer().pretty().with_writer(std::io::stderr))
            .init();
    }
}
