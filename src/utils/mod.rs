const DEFAULT_DIRECTIVE: &str = "expense_tracker=warn";

/// Installs the global tracing subscriber, logging to stderr so the report on
/// stdout stays clean. Callers guard against repeat calls; see [`crate::init`].
pub fn init_tracing() {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVE));

    // a subscriber may already be installed by an embedding application
    let _ = fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

#[cfg(test)]
mod tests {
    #[test]
    fn repeated_installs_are_harmless() {
        super::init_tracing();
        super::init_tracing();
        crate::init();
    }
}
