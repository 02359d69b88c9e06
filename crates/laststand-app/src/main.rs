use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use laststand_app::config::AppConfig;
use laststand_app::game_loop::{run_game_loop, tick_duration};
use laststand_app::input::AutopilotInput;
use laststand_app::render::ConsoleRenderer;
use laststand_sim::engine::SimulationEngine;

fn main() {
    init_tracing();

    let (config, errors) = AppConfig::from_env();
    for err in &errors {
        warn!(%err, "ignoring invalid setting");
    }
    match serde_json::to_string(&config) {
        Ok(json) => info!(config = %json, "starting LAST STAND"),
        Err(err) => warn!(%err, "could not serialize config"),
    }

    let sim_config = config.sim_config();
    let frame_duration = tick_duration(sim_config.tick_rate);
    let mut renderer = ConsoleRenderer::stdout(sim_config.tick_rate);
    let mut engine = SimulationEngine::new(sim_config);
    let mut input = AutopilotInput::new(config.max_frames);

    let summary = run_game_loop(&mut engine, &mut input, &mut renderer, frame_duration);
    info!(frames = summary.frames, mode = ?summary.final_mode, panics = summary.panics, "goodbye");
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .init();
}
