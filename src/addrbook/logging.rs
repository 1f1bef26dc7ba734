//! Process-wide logger bootstrap.
//!
//! Library code only talks to the `log` facade. A binary calls
//! [`init_logging`] once to route records to stderr through `flexi_logger`.
//! Messages use a flat `event=name key=value` shape so they stay greppable.

use flexi_logger::{Logger, LoggerHandle};
use log::info;
use once_cell::sync::OnceCell;

static LOGGER: OnceCell<LoggingState> = OnceCell::new();

struct LoggingState {
    level: &'static str,
    _handle: LoggerHandle,
}

/// Maps a `-v` count to a log level.
pub fn level_for_verbosity(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Starts the stderr logger.
///
/// Repeated calls with the same level are no-ops. A later call asking for a
/// different level is rejected, since the first handle stays in charge.
pub fn init_logging(verbosity: u8) -> Result<(), String> {
    let level = level_for_verbosity(verbosity);

    let state = LOGGER.get_or_try_init(|| -> Result<LoggingState, String> {
        let handle = Logger::try_with_env_or_str(level)
            .map_err(|err| format!("invalid log level `{level}`: {err}"))?
            .log_to_stderr()
            .format(flexi_logger::default_format)
            .start()
            .map_err(|err| format!("failed to start logger: {err}"))?;

        info!(
            "event=app_start status=ok platform={} version={}",
            std::env::consts::OS,
            env!("CARGO_PKG_VERSION")
        );

        Ok(LoggingState {
            level,
            _handle: handle,
        })
    })?;

    if state.level != level {
        return Err(format!(
            "logging already initialized with level `{}`; refusing to switch to `{}`",
            state.level, level
        ));
    }
    Ok(())
}

/// Active level, or `None` before [`init_logging`] ran.
pub fn logging_level() -> Option<&'static str> {
    LOGGER.get().map(|state| state.level)
}
