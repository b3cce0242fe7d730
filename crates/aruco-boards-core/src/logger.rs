//! Stderr logger for the board crates.
//!
//! Records from `aruco_boards*` targets pass at the configured level; other
//! crates are held to `Warn` so their chatter does not drown board rebuild
//! messages. Lines read `[elapsed LEVEL crate] message`, where `crate` drops
//! the `aruco_boards_` prefix (`charuco`, `core`, ...).

use std::io::Write;
use std::sync::OnceLock;
use std::time::Instant;

use log::{Level, LevelFilter, Log, Metadata, Record};

#[cfg(feature = "tracing")]
use tracing_subscriber::fmt::format::FmtSpan;
#[cfg(feature = "tracing")]
use tracing_subscriber::util::SubscriberInitExt;
#[cfg(feature = "tracing")]
use tracing_subscriber::{fmt, EnvFilter};

const WORKSPACE_PREFIX: &str = "aruco_boards";

struct BoardLogger {
    level: LevelFilter,
    started: Instant,
}

fn is_board_target(target: &str) -> bool {
    target.starts_with(WORKSPACE_PREFIX)
}

/// Level filter that applies to records from `target`.
fn filter_for(level: LevelFilter, target: &str) -> LevelFilter {
    if is_board_target(target) {
        level
    } else {
        level.min(LevelFilter::Warn)
    }
}

/// Crate label printed in front of a message.
fn crate_label(target: &str) -> &str {
    let krate = target.split("::").next().unwrap_or(target);
    match krate.strip_prefix(WORKSPACE_PREFIX) {
        Some("") => "cli",
        Some(rest) => rest.trim_start_matches('_'),
        None => krate,
    }
}

impl Log for BoardLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= filter_for(self.level, metadata.target())
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let elapsed = self.started.elapsed().as_secs_f64();
        let mut stderr = std::io::stderr().lock();
        let _ = writeln!(
            stderr,
            "[{:7.3}s {:>5} {}] {}",
            elapsed,
            record.level(),
            crate_label(record.target()),
            record.args()
        );
        if record.level() == Level::Error {
            let _ = stderr.flush();
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

static LOGGER: OnceLock<BoardLogger> = OnceLock::new();

/// Install the stderr logger. `level` applies to the board crates; other
/// crates log at `Warn` or above.
///
/// Calling this more than once is a no-op after the first successful
/// initialization.
pub fn init_with_level(level: LevelFilter) -> Result<(), log::SetLoggerError> {
    if LOGGER.get().is_none() {
        let logger = LOGGER.get_or_init(|| BoardLogger {
            level,
            started: Instant::now(),
        });
        log::set_logger(logger)?;
        log::set_max_level(level);
    }
    Ok(())
}

/// Install a `tracing` subscriber filtered by `RUST_LOG` (default: `info` for
/// the board crates, `warn` elsewhere).
#[cfg(feature = "tracing")]
pub fn init_tracing(json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new("warn,aruco_boards=info,aruco_boards_core=info,aruco_boards_charuco=info")
    });
    if json {
        let _ = fmt()
            .with_env_filter(filter)
            .with_span_events(FmtSpan::CLOSE)
            .json()
            .flatten_event(true)
            .finish()
            .try_init();
    } else {
        let _ = fmt()
            .with_env_filter(filter)
            .with_span_events(FmtSpan::CLOSE)
            .with_timer(fmt::time::Uptime::default())
            .finish()
            .try_init();
    }
}
