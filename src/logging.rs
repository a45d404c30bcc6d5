use tracing_subscriber::filter::{EnvFilter, LevelFilter};

/// Diagnostics go to stderr so stdout carries nothing but report config.
pub(crate) fn init(verbose: bool) {
    let filter = if verbose {
        EnvFilter::builder()
            .with_default_directive(LevelFilter::INFO.into())
            .from_env_lossy()
    } else {
        EnvFilter::new("off")
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
