use tracing_subscriber::EnvFilter;

pub const LOG_ENV: &str = "MEME_ROOM_LOG";
const DEFAULT_FILTER: &str = "warn";

/// Logs go to stderr so command output on stdout stays pipeable.
pub fn init_logging() {
    let filter =
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    if let Err(error) = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
    {
        eprintln!("logging disabled: {error}");
    }
}
