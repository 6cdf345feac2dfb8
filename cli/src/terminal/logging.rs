use std::fmt;

use colored::*;
use herald_common::config::Config;
use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::FormatEvent;
use tracing_subscriber::fmt::format::{self, Writer};
use tracing_subscriber::registry::LookupSpan;

/// Target used by [`crate::terminal::print::print`] for raw terminal output.
pub const PRINT_TARGET: &str = "herald::print";

pub fn init_logging(cfg: &Config) -> anyhow::Result<()> {
    let from_env = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    let filter = build_filter(cfg, from_env.as_deref())?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .event_format(HeraldFormatter)
        .init();
    Ok(())
}

/// Builds the event filter from `RUST_LOG` (or the quietness default).
///
/// Raw terminal output always stays enabled at `info`, whatever the directives say.
pub fn build_filter(cfg: &Config, directives: Option<&str>) -> anyhow::Result<EnvFilter> {
    let default_level = if cfg.quiet > 1 { "warn" } else { "info" };
    let filter = EnvFilter::try_new(directives.unwrap_or(default_level))?;

    Ok(filter.add_directive(format!("{PRINT_TARGET}=info").parse()?))
}

pub struct HeraldFormatter;

impl<S, N> FormatEvent<S, N> for HeraldFormatter
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> format::FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        _ctx: &tracing_subscriber::fmt::FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> fmt::Result {
        let meta = event.metadata();
        let mut fields = EventFields::default();
        event.record(&mut fields);

        if meta.target() == PRINT_TARGET {
            if let Some(raw) = fields.raw_msg {
                return writeln!(writer, "{raw}");
            }
        }

        let (symbol, color_func): (&str, fn(ColoredString) -> ColoredString) = match *meta.level() {
            _ if fields.success => ("[✓]", |s| s.bright_green().bold()),
            Level::TRACE => ("[ ]", |s| s.dimmed()),
            Level::DEBUG => ("[?]", |s| s.blue()),
            Level::INFO => ("[+]", |s| s.green().bold()),
            Level::WARN => ("[*]", |s| s.yellow().bold()),
            Level::ERROR => ("[-]", |s| s.red().bold()),
        };

        write!(writer, "{} ", color_func(symbol.into()))?;
        if let Some(message) = fields.message {
            write!(writer, "{message}")?;
        }
        for (name, value) in fields.extra {
            write!(writer, " {}", format!("{name}={value}").dimmed())?;
        }

        writeln!(writer)
    }
}

#[derive(Default)]
struct EventFields {
    message: Option<String>,
    raw_msg: Option<String>,
    success: bool,
    extra: Vec<(&'static str, String)>,
}

impl Visit for EventFields {
    fn record_str(&mut self, field: &Field, value: &str) {
        match field.name() {
            "raw_msg" => self.raw_msg = Some(value.to_string()),
            "message" => self.message = Some(value.to_string()),
            name => self.extra.push((name, value.to_string())),
        }
    }

    fn record_bool(&mut self, field: &Field, value: bool) {
        match field.name() {
            "success" => self.success = value,
            name => self.extra.push((name, value.to_string())),
        }
    }

    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        match field.name() {
            "message" => self.message = Some(format!("{value:?}")),
            name => self.extra.push((name, format!("{value:?}"))),
        }
    }
}
