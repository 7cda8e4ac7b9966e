use jisho_config::log::{LogConfig, LogFormat};
use tracing::Level;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::MakeWriter;

/// Install the global subscriber.
///
/// Always writes to stderr: stdout carries the launcher feedback.
pub fn init(config: &LogConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("{},hyper=warn,reqwest=warn", config.filter)));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false);

    let result = match config.format {
        LogFormat::Json => builder.json().try_init(),
        LogFormat::Pretty => builder.with_ansi(atty::is(atty::Stream::Stderr)).try_init(),
    };

    if let Err(e) = result {
        eprintln!("failed to install tracing subscriber: {e}");
    }
}

/// Run `f` under a warn-level stderr subscriber, for work that happens
/// before the configured one can be installed.
pub fn with_bootstrap<T>(f: impl FnOnce() -> T) -> T {
    with_bootstrap_writer(std::io::stderr, f)
}

fn with_bootstrap_writer<W, T>(writer: W, f: impl FnOnce() -> T) -> T
where
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(Level::WARN)
        .with_writer(writer)
        .with_target(false)
        .with_ansi(false)
        .finish();

    tracing::subscriber::with_default(subscriber, f)
}
