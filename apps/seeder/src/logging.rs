//! Logging initialization for the seeder binary
//!
//! Human-readable or JSON output on stderr, optionally mirrored to a rolling
//! file. stdout is left to the progress lines and the manifest dump.

use std::fs;
use tracing_appender::non_blocking::{NonBlocking, WorkerGuard};
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::{FileRotation, LoggingConfig};

/// Keeps the non-blocking file writer alive; hold it until the process exits.
pub struct LoggingGuard {
    _file_guard: Option<WorkerGuard>,
}

/// Initialize logging from `LoggingConfig`.
///
/// `RUST_LOG` takes precedence over `config.level` when set.
pub fn init_logging(config: &LoggingConfig) -> anyhow::Result<LoggingGuard> {
    let env_filter = build_env_filter(config);

    let (file_writer, file_guard) = if config.file_enabled {
        let (writer, guard) = create_file_appender(config)?;
        (Some(writer), Some(guard))
    } else {
        (None, None)
    };

    let subscriber = tracing_subscriber::registry().with(env_filter);

    if config.json {
        let console_layer = fmt::layer()
            .json()
            .with_current_span(true)
            .with_span_list(false)
            .with_writer(std::io::stderr);
        let file_layer = file_writer.map(|writer| {
            fmt::layer()
                .json()
                .with_current_span(true)
                .with_span_list(false)
                .with_writer(writer)
        });

        subscriber.with(console_layer).with(file_layer).try_init()?;
    } else {
        let console_layer = fmt::layer().with_target(true).with_writer(std::io::stderr);
        let file_layer = file_writer.map(|writer| {
            fmt::layer()
                .with_target(true)
                .with_ansi(false)
                .with_writer(writer)
        });

        subscriber.with(console_layer).with(file_layer).try_init()?;
    }

    tracing::debug!(
        level = %config.level,
        json = config.json,
        file_enabled = config.file_enabled,
        "Logging initialized"
    );

    Ok(LoggingGuard {
        _file_guard: file_guard,
    })
}

fn build_env_filter(config: &LoggingConfig) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directives(config)))
}

fn default_directives(config: &LoggingConfig) -> String {
    format!(
        "uti_demo_seed={level},uti_demo_seeder={level},uti_demo_fhir_client={level},reqwest=warn,hyper=warn",
        level = config.level
    )
}

/// Rolling appender for `config.file_directory`, wrapped in a non-blocking writer.
fn create_file_appender(
    config: &LoggingConfig,
) -> anyhow::Result<(NonBlocking, WorkerGuard)> {
    fs::create_dir_all(&config.file_directory)?;

    let appender = RollingFileAppender::builder()
        .rotation(config.file_rotation.into())
        .filename_prefix(&config.file_prefix)
        .filename_suffix("log")
        .build(&config.file_directory)?;

    Ok(tracing_appender::non_blocking(appender))
}

impl From<FileRotation> for Rotation {
    fn from(rotation: FileRotation) -> Self {
        match rotation {
            FileRotation::Minutely => Rotation::MINUTELY,
            FileRotation::Hourly => Rotation::HOURLY,
            FileRotation::Daily => Rotation::DAILY,
            FileRotation::Never => Rotation::NEVER,
        }
    }
}
