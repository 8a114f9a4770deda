//! tenxten sweep CLI entry point

fn main() {
    // Structured logging goes to stderr so the stdout report stays exact.
    // Quiet by default; raise with RUST_LOG=tenxten_sweep=debug.
    let _ = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .try_init();

    tenxten_sweep::cli::run();
}
