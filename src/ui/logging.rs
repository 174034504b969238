//! Tracing subscriber setup

use is_terminal::IsTerminal;

use socket_configurator::Verbosity;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

/// Level directive when `RUST_LOG` is unset: `-v` beats the configured verbosity.
pub fn default_directive(verbose: u8, verbosity: Verbosity) -> &'static str {
    match verbose {
        0 => verbosity.level_directive(),
        1 => "debug",
        _ => "trace",
    }
}

/// Install the global subscriber. Logs go to stderr.
pub fn init(verbose: u8, verbosity: Verbosity) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose, verbosity)));

    let ansi = std::io::stderr().is_terminal();

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_ansi(ansi)
                .with_writer(std::io::stderr),
        )
        .init();
}
