//! Spothunt demo binary.
//!
//! Loads a scenario, runs the mover through it and prints every target
//! decision.
//!
//! ```bash
//! HUNT_SCENARIO=arena.ron HUNT_OUTPUT=json cargo run -p spothunt-client
//! ```
mod config;
mod report;
mod session;

use anyhow::Result;
use config::ClientConfig;
use hunt_core::HuntError as _;

fn main() -> Result<()> {
    // Load .env file if it exists (silently ignore if not found)
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let client = ClientConfig::from_env();
    let runtime = session::load_runtime_config(&client, |key| std::env::var(key).ok())?;
    let steps = runtime.steps;

    tracing::info!("Starting hunt: seed={} steps={}", runtime.seed, steps);
    tracing::debug!("Hunt config: {:?}", runtime.hunt);

    let mut hunt = session::load_hunt(&client, runtime)?;
    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    for step in 1..=steps {
        if hunt.is_finished() {
            tracing::info!("All goals collected after {} steps", step - 1);
            break;
        }

        match hunt.step() {
            Ok(decision) => report::write_decision(&mut out, client.output, step, &decision)?,
            Err(e) => {
                tracing::error!("Step {} failed [{}]: {}", step, e.error_code(), e);
                return Err(e.into());
            }
        }
    }

    Ok(())
}
