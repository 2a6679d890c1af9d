use std::borrow::Cow;

use anyhow::Result;
use sentry::integrations::tracing::EventFilter;
use sentry::{ClientInitGuard, ClientOptions};
use tracing::Level;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

/// Starts the Sentry client, the guard must be held until the program exits.
///
/// Without a DSN the client is disabled and nothing is reported.
pub fn init_sentry(dsn: Option<String>, traces_sample_rate: f32) -> ClientInitGuard {
    let guard = sentry::init((
        dsn,
        ClientOptions {
            release: Some(Cow::Borrowed(env!("CARGO_PKG_VERSION"))),
            traces_sample_rate,
            ..Default::default()
        },
    ));
    sentry::configure_scope(|scope| {
        scope.set_tag("app.name", env!("CARGO_CRATE_NAME"));
    });
    guard
}

/// Logs to stderr, optionally to journald, and sends warnings and errors to Sentry.
///
/// `RUSTY_TELEGRAM_LOG` and `RUSTY_TELEGRAM_JOURNALD` override the `info` filters.
pub fn init(enable_journald: bool) -> Result<()> {
    let sentry_layer = sentry::integrations::tracing::layer()
        .event_filter(|metadata| match *metadata.level() {
            Level::ERROR | Level::WARN => EventFilter::Event,
            Level::INFO | Level::DEBUG => EventFilter::Breadcrumb,
            Level::TRACE => EventFilter::Ignore,
        })
        .span_filter(|metadata| *metadata.level() <= Level::DEBUG);

    // Stdout is reserved for the command output.
    let format_layer = tracing_subscriber::fmt::layer()
        .without_time()
        .with_writer(std::io::stderr)
        .with_filter(env_filter("RUSTY_TELEGRAM_LOG")?);

    let journald_layer = if enable_journald {
        let layer = tracing_journald::layer()?
            .with_field_prefix(None)
            .with_syslog_identifier("rusty-telegram".to_string())
            .with_filter(env_filter("RUSTY_TELEGRAM_JOURNALD")?);
        Some(layer)
    } else {
        None
    };

    tracing_subscriber::Registry::default()
        .with(sentry_layer)
        .with(format_layer)
        .with(journald_layer)
        .try_init()?;

    Ok(())
}

fn env_filter(key: &str) -> Result<EnvFilter> {
    Ok(EnvFilter::try_from_env(key).or_else(|_| EnvFilter::try_new("info"))?)
}
