use tracing_subscriber::EnvFilter;

pub fn init_logging() {
    // Diagnostics go to stderr so stdout carries only query results.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
