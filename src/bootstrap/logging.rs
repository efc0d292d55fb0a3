//! Setup for the application logging.
//!
//! It redirects the log info to the standard output with the log level defined in the configuration.
//!
//! - `Off`
//! - `Error`
//! - `Warn`
//! - `Info`
//! - `Debug`
//! - `Trace`
//!
//! Refer to the [`hbnb-configuration`](hbnb_configuration) crate docs to know
//! how to change log settings.
use std::sync::Once;

use hbnb_configuration::Configuration;
use tracing::info;
use tracing::level_filters::LevelFilter;

static INIT: Once = Once::new();

/// It redirects the log info to the standard output with the log level defined in the configuration
pub fn setup(cfg: &Configuration) {
    let tracing_level = map_to_tracing_level_filter(&cfg.log_level);

    if tracing_level == LevelFilter::OFF {
        return;
    }

    INIT.call_once(|| {
        tracing_stdout_init(tracing_level, &TraceStyle::Default);
    });
}

/// Maps the configured level to a tracing level filter. A missing option
/// means `Info`.
///
/// # Panics
///
/// Will panic if the configured level is not one of: `off`, `error`, `warn`,
/// `info`, `debug` or `trace` (case is ignored).
fn map_to_tracing_level_filter(log_level: &Option<String>) -> LevelFilter {
    match log_level {
        None => LevelFilter::INFO,
        Some(level) => level
            .parse()
            .unwrap_or_else(|_| panic!("Unrecognized log level: \"{level}\". Options are: off, error, warn, info, debug, trace.")),
    }
}

fn tracing_stdout_init(filter: LevelFilter, style: &TraceStyle) {
    let builder = tracing_subscriber::fmt().with_max_level(filter).with_ansi(true);

    let () = match style {
        TraceStyle::Default => builder.init(),
        TraceStyle::Pretty(display_filename) => builder.pretty().with_file(*display_filename).init(),
        TraceStyle::Compact => builder.compact().init(),
        TraceStyle::Json => builder.json().init(),
    };

    info!("Logging initialized");
}

#[derive(Debug)]
pub enum TraceStyle {
    Default,
    Pretty(bool),
    Compact,
    Json,
}

impl std::fmt::Display for TraceStyle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let style = match self {
            TraceStyle::Default => "Default Style",
            TraceStyle::Pretty(path) => {
                if *path {
                    "Pretty Style with File Paths"
                } else {
                    "Pretty Style without File Paths"
                }
            }
            TraceStyle::Compact => "Compact Style",
            TraceStyle::Json => "Json Format",
        };

        f.write_str(style)
    }
}
