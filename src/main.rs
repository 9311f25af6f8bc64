//! blogsift binary entrypoint kept minimal. The runtime lives in `blogsift::app`.

use std::fmt;
use std::sync::OnceLock;

use clap::Parser;

use blogsift::args::{Args, determine_log_level};

struct BlogsiftTimer;

impl tracing_subscriber::fmt::time::FormatTime for BlogsiftTimer {
    fn format_time(&self, w: &mut tracing_subscriber::fmt::format::Writer<'_>) -> fmt::Result {
        write!(w, "{}", chrono::Local::now().format("%Y-%m-%d %H:%M:%S"))
    }
}

static LOG_GUARD: OnceLock<tracing_appender::non_blocking::WorkerGuard> = OnceLock::new();

/// Build the log filter from `RUST_LOG`, falling back to the CLI level.
fn env_filter(level: &str) -> tracing_subscriber::EnvFilter {
    tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level))
}

#[tokio::main]
async fn main() {
    let args = Args::parse();
    let level = determine_log_level(&args);

    // Log to ~/.config/blogsift/logs/blogsift.log so stdout stays clean for output
    {
        let log_path = blogsift::config::logs_dir().join("blogsift.log");
        match std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_path)
        {
            Ok(file) => {
                let (non_blocking, guard) = tracing_appender::non_blocking(file);
                tracing_subscriber::fmt()
                    .with_env_filter(env_filter(&level))
                    .with_target(false)
                    .with_ansi(false)
                    .with_writer(non_blocking)
                    .with_timer(BlogsiftTimer)
                    .init();
                let _ = LOG_GUARD.set(guard);
                tracing::info!(path = %log_path.display(), "logging initialized");
            }
            Err(e) => {
                // Fallback: stderr logger
                tracing_subscriber::fmt()
                    .with_env_filter(env_filter(&level))
                    .with_target(false)
                    .with_ansi(true)
                    .with_writer(std::io::stderr)
                    .with_timer(BlogsiftTimer)
                    .init();
                tracing::warn!(error = %e, "failed to open log file; using stderr");
            }
        }
    }

    tracing::info!(version = env!("CARGO_PKG_VERSION"), "blogsift starting");
    if let Err(err) = blogsift::app::run(args).await {
        tracing::error!(error = %err, "blogsift failed");
        eprintln!("error: {err}");
        std::process::exit(1);
    }
    tracing::info!("blogsift exited");
}

#[cfg(test)]
mod tests {
    /// What: FormatTime impl writes a non-empty timestamp without panicking
    ///
    /// - Input: Tracing writer buffer
    /// - Output: Buffer receives some content
    #[test]
    fn blogsift_timer_formats_time_without_panic() {
        use tracing_subscriber::fmt::time::FormatTime;
        let mut buf = String::new();
        let mut writer = tracing_subscriber::fmt::format::Writer::new(&mut buf);
        let _ = super::BlogsiftTimer.format_time(&mut writer);
        assert!(!buf.is_empty());
    }
}
