use lantern_config::LoggingConfig;
use log::LevelFilter;
use simplelog::{ColorChoice, ConfigBuilder, TermLogger, TerminalMode};

use crate::error::ApiError;

/// Installs the global terminal logger described by the `[logging]` section.
///
/// Does nothing when logging is disabled. Fails if another logger is already installed.
pub fn init_logger(config: &LoggingConfig) -> Result<(), ApiError> {
    if !config.enabled {
        return Ok(());
    }

    let mut builder = ConfigBuilder::new();
    builder.set_thread_level(toggle(config.threads));
    builder.set_time_level(toggle(config.timestamp));
    builder.set_target_level(LevelFilter::Off);

    let color = if config.color {
        ColorChoice::Auto
    } else {
        ColorChoice::Never
    };

    TermLogger::init(config.level, builder.build(), TerminalMode::Mixed, color)?;
    log::debug!("logger initialized at level {}", config.level);
    Ok(())
}

// `Error` shows the field on every record, `Off` on none.
fn toggle(enabled: bool) -> LevelFilter {
    if enabled {
        LevelFilter::Error
    } else {
        LevelFilter::Off
    }
}
