use std::path::PathBuf;
use std::process::ExitCode;
use std::time::{Duration, Instant};

use tracing::{error, info};

use strafe_app::autopilot::Autopilot;
use strafe_app::game_loop::{spawn_game_loop, TICK_DURATION};
use strafe_app::presenter::{LogHud, LogRenderer, Presenter};
use strafe_core::enums::MatchPhase;
use strafe_sim::{ConfigError, SimConfig};

const DEFAULT_DEMO_SECONDS: u64 = 10;

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    let json = matches!(std::env::var("LOG_FORMAT").as_deref(), Ok("json"));
    if json {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .json()
            .with_current_span(true)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .compact()
            .init();
    }

    std::panic::set_hook(Box::new(|info| {
        let backtrace = std::backtrace::Backtrace::capture();
        tracing::error!(%info, ?backtrace, "panic");
    }));
}

/// `STRAFE_CONFIG` names a JSON config file; defaults otherwise.
fn load_config() -> Result<SimConfig, ConfigError> {
    match std::env::var_os("STRAFE_CONFIG") {
        Some(path) => SimConfig::load(&PathBuf::from(path)),
        None => Ok(SimConfig::default()),
    }
}

fn demo_duration() -> Duration {
    let secs = std::env::var("STRAFE_DEMO_SECONDS")
        .ok()
        .and_then(|value| value.parse().ok())
        .unwrap_or(DEFAULT_DEMO_SECONDS);
    Duration::from_secs(secs)
}

fn main() -> ExitCode {
    init_tracing();

    let config = match load_config() {
        Ok(config) => config,
        Err(err) => {
            error!(%err, "failed to load config");
            return ExitCode::FAILURE;
        }
    };

    let presenter = Presenter::new(LogRenderer::default(), LogHud::default());
    let app = match spawn_game_loop(config, presenter) {
        Ok(app) => app,
        Err(err) => {
            error!(%err, "failed to start game loop");
            return ExitCode::FAILURE;
        }
    };

    let mut autopilot = Autopilot::new();
    let deadline = Instant::now() + demo_duration();
    while Instant::now() < deadline {
        let snapshot = app.latest();
        if let Some(snapshot) = snapshot.as_ref().filter(|s| s.phase == MatchPhase::Ended) {
            info!(tick = snapshot.time.tick, "match over");
            break;
        }
        if !app.send_input(autopilot.next_input(snapshot.as_ref())) {
            break;
        }
        std::thread::sleep(TICK_DURATION);
    }

    app.shutdown();
    ExitCode::SUCCESS
}
