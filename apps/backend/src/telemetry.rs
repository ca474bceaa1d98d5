use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Install the process-wide subscriber for the binary.
///
/// `RUST_LOG` wins when set; the fallback keeps request-completion lines
/// visible while quieting the SQL layers. Output is one JSON object per
/// event with the fields flattened to the top level.
pub fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,sqlx=warn,sea_orm=warn"));

    let fmt_layer = fmt::layer()
        .json()
        .flatten_event(true)
        .with_target(false)
        .with_ansi(false);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .init();
}
