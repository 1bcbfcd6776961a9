//! Roguelite headless client binary.
//!
//! ```bash
//! ROGUELITE_SEED=42 ROGUELITE_RUNS=3 RUST_LOG=debug cargo run -p roguelite-client
//! ```

use anyhow::{Context, Result};
use roguelite_client::{Autopilot, ClientConfig, logging, play_run};
use roguelite_core::GameController;

fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let config = ClientConfig::from_env();
    let _log_guard = logging::setup_logging(config.log_dir.as_deref())?;

    let game_config = config
        .game_config()
        .context("loading game configuration")?;

    let mut controller = match config.seed {
        Some(seed) => GameController::with_seed(game_config, seed),
        None => GameController::new(game_config),
    };
    tracing::info!(
        title = controller.title(),
        runs = config.runs,
        max_actions = config.max_actions,
        "starting headless session"
    );

    let autopilot = Autopilot::default();
    for run in 1..=config.runs {
        if run > 1 {
            match config.seed {
                Some(seed) => controller.start_with_seed(seed.wrapping_add(run - 1)),
                None => controller.restart(),
            }
        }

        let summary = play_run(&mut controller, &autopilot, config.max_actions);
        tracing::info!(
            run,
            seed = summary.seed,
            floor = summary.floor,
            score = summary.score,
            actions = summary.actions,
            rejected = summary.rejected,
            status = %summary.status,
            "run finished"
        );
        tracing::info!("{}", controller.hud().status_line);
    }

    tracing::info!(best_score = controller.best_score(), "session complete");
    Ok(())
}
