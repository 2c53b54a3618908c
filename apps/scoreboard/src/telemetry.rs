use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Filter used when `RUST_LOG` is unset: engine transitions at debug,
/// everything else at info.
pub const DEFAULT_LOG_FILTER: &str = "info,scoreboard=debug";

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER))
}

/// Install the JSON log subscriber for the scoreboard.
///
/// Each event is one JSON object with its structured fields (`game_id`,
/// `round`, ...) and without source locations or ANSI colour.
pub fn init_tracing() {
    let json_layer = fmt::layer()
        .json()
        .with_ansi(false)
        .with_target(false)
        .with_file(false)
        .with_line_number(false);

    tracing_subscriber::registry()
        .with(env_filter())
        .with(json_layer)
        .init();
}
