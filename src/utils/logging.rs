use tracing_subscriber::EnvFilter;

/// Filter used when neither `RUST_LOG` nor `--verbose` is given
const DEFAULT_DIRECTIVE: &str = "info";
const VERBOSE_DIRECTIVE: &str = "info,reqres_client=debug";

pub fn default_filter(verbose: bool) -> &'static str {
    if verbose {
        VERBOSE_DIRECTIVE
    } else {
        DEFAULT_DIRECTIVE
    }
}

/// Install the global tracing subscriber.
///
/// Logs go to stderr so stdout carries only the user listing. `RUST_LOG`
/// takes precedence over the verbose flag. Calling this twice is a no-op.
pub fn init_logging(verbose: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter(verbose)));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
