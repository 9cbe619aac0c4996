use std::path::Path;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::RollingFileAppender;
use tracing_appender::rolling::Rotation;
#[cfg(feature = "dev")]
use tracing_subscriber::EnvFilter;
use tracing_subscriber::Layer;
use tracing_subscriber::prelude::*;

use super::filter::DebugOnlyFilter;
#[cfg(not(feature = "dev"))]
use super::filter::ErrorOnlyFilter;
use super::filter::ErrorWarnFilter;
#[cfg(feature = "dev")]
use super::filter::InfoAndAboveFilter;
#[cfg(feature = "dev")]
use super::filter::TARGET_PREFIX;
use super::format::TabayyunFormat;
use crate::config::LoggingConfig;
use crate::error::ConfigError;

/// Keeps the non-blocking file writers flushing. Drop it last.
#[must_use = "log files stop being written once the guard is dropped"]
pub struct TracingGuard {
    _guards: Vec<WorkerGuard>,
}

pub fn setup_tracing(
    engine_name: &str,
    logging: &LoggingConfig,
) -> crate::Result<TracingGuard> {
    let base_logs_dir = Path::new(logging.directory());
    let debug_dir = base_logs_dir.join("debug");
    let error_dir = base_logs_dir.join("error");

    for dir in [base_logs_dir, debug_dir.as_path(), error_dir.as_path()] {
        std::fs::create_dir_all(dir)
            .map_err(|e| ConfigError::OpenFileError(format!("logs directory {}: {}", dir.display(), e)))?;
    }

    let log_file = format!("{}.log", engine_name);
    let debug_appender = RollingFileAppender::new(Rotation::DAILY, &debug_dir, &log_file);
    let error_appender = RollingFileAppender::new(Rotation::DAILY, &error_dir, &log_file);

    let (non_blocking_debug, debug_guard) = tracing_appender::non_blocking(debug_appender);
    let (non_blocking_error, error_guard) = tracing_appender::non_blocking(error_appender);
    let mut guards = vec![debug_guard, error_guard];

    let format = TabayyunFormat::new(engine_name);

    let subscriber = tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::Layer::default()
                .with_ansi(false)
                .event_format(format.clone())
                .with_writer(non_blocking_debug)
                .with_filter(DebugOnlyFilter),
        )
        .with(
            tracing_subscriber::fmt::Layer::default()
                .with_ansi(false)
                .event_format(format.clone())
                .with_writer(non_blocking_error)
                .with_filter(ErrorWarnFilter),
        );

    // prod: only errors on the terminal, stdout stays clean for reports
    #[cfg(not(feature = "dev"))]
    let subscriber = subscriber.with(
        tracing_subscriber::fmt::Layer::default()
            .with_ansi(true)
            .event_format(format.clone())
            .with_writer(std::io::stderr)
            .with_filter(ErrorOnlyFilter),
    );

    #[cfg(feature = "dev")]
    let subscriber = {
        let info_appender = RollingFileAppender::new(Rotation::DAILY, base_logs_dir, &log_file);
        let (non_blocking_info, info_guard) = tracing_appender::non_blocking(info_appender);
        guards.push(info_guard);

        let terminal_filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(format!("{}=info", TARGET_PREFIX)));

        subscriber
            .with(
                tracing_subscriber::fmt::Layer::default()
                    .with_ansi(true)
                    .event_format(format.clone())
                    .with_writer(std::io::stderr)
                    .with_filter(terminal_filter),
            )
            .with(
                tracing_subscriber::fmt::Layer::default()
                    .with_ansi(false)
                    .event_format(format.clone())
                    .with_writer(non_blocking_info)
                    .with_filter(InfoAndAboveFilter),
            )
    };

    match tracing::subscriber::set_global_default(subscriber) {
        Ok(_) => {
            tracing::info!("{}_logging_started::debug_logs::{}", engine_name, debug_dir.join(&log_file).display());
            tracing::info!("{}_logging_started::error_logs::{}", engine_name, error_dir.join(&log_file).display());
        },
        Err(e) => {
            // a subscriber is already installed; keep it and drop ours
            eprintln!("Error setting up logging: {}", e);
            guards.clear();
        },
    }

    Ok(TracingGuard { _guards: guards })
}
