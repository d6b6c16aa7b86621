use opshift::commands::Cli;

fn main() -> anyhow::Result<()> {
    // Structured log output is only wanted in debug mode; normal runs
    // print through the message macros instead.
    if std::env::var("RUST_LOG").is_ok() || std::env::var("OPSHIFT_DEBUG").is_ok() {
        tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .init();
    }

    Cli::menu()
}
