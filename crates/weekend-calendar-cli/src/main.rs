use std::fmt::Display;
use std::str::FromStr;

use anyhow::{Context, Result};
use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Utc};
use chrono_tz::Tz;
use clap::{Args, Parser, Subcommand, ValueEnum};
use serde::Serialize;
use tracing::{debug, info};
use weekend_calendar_core::{
    CalendarDate, Interval, WeekendError, each_weekend_of_interval, each_weekend_of_month,
    each_weekend_of_year,
};

#[derive(Parser)]
#[command(
    name = "weekend-calendar",
    about = "List the Saturdays and Sundays of a month, year or date range"
)]
struct Cli {
    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    log_level: String,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// IANA time zone to read dates in (e.g. Europe/Berlin)
    #[arg(long)]
    tz: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Weekend days of the month containing a date
    Month(DateArg),

    /// Weekend days of the year containing a date
    Year(DateArg),

    /// Weekend days between two dates, both included
    Interval {
        /// First date of the range
        #[arg(long)]
        start: DateInput,

        /// Last date of the range
        #[arg(long)]
        end: DateInput,
    },
}

#[derive(Args, Debug)]
#[group(required = true, multiple = false)]
struct DateArg {
    /// YYYY-MM-DD, YYYY-MM-DDTHH:MM:SS or an RFC 3339 timestamp
    date: Option<DateInput>,

    /// Milliseconds since the Unix epoch, read as a UTC instant
    #[arg(long, allow_hyphen_values = true)]
    millis: Option<i64>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    /// One date per line
    Text,
    /// JSON array
    Json,
}

/// A date as typed on the command line. The output mirrors this form.
#[derive(Clone, Debug, PartialEq)]
enum DateInput {
    Day(NaiveDate),
    Local(NaiveDateTime),
    Offset(DateTime<FixedOffset>),
}

impl FromStr for DateInput {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
            return Ok(DateInput::Offset(dt));
        }
        if let Ok(dt) = s.parse::<NaiveDateTime>() {
            return Ok(DateInput::Local(dt));
        }
        s.parse::<NaiveDate>()
            .map(DateInput::Day)
            .map_err(|e| format!("{s}: {e}"))
    }
}

/// A date resolved to the concrete type the query runs on.
#[derive(Clone, Debug, PartialEq)]
enum Resolved {
    Day(NaiveDate),
    Local(NaiveDateTime),
    Offset(DateTime<FixedOffset>),
    Utc(DateTime<Utc>),
    Zoned(DateTime<Tz>),
}

fn parse_tz(name: &str) -> Result<Tz> {
    name.parse::<Tz>()
        .map_err(|e| anyhow::anyhow!("unknown time zone {name}: {e}"))
}

fn resolve(input: DateInput, tz: Option<Tz>) -> Result<Resolved, WeekendError> {
    let Some(tz) = tz else {
        return Ok(match input {
            DateInput::Day(d) => Resolved::Day(d),
            DateInput::Local(dt) => Resolved::Local(dt),
            DateInput::Offset(dt) => Resolved::Offset(dt),
        });
    };

    // days and local times skipped by a zone transition do not exist
    let zoned = match input {
        DateInput::Day(d) => tz
            .from_utc_datetime(&d.and_time(NaiveTime::MIN))
            .at_start_of_day(d)
            .ok_or(WeekendError::InvalidDate)?,
        DateInput::Local(dt) => tz
            .from_local_datetime(&dt)
            .earliest()
            .ok_or(WeekendError::InvalidDate)?,
        DateInput::Offset(dt) => dt.with_timezone(&tz),
    };
    Ok(Resolved::Zoned(zoned))
}

fn resolve_millis(millis: i64, tz: Option<Tz>) -> Result<Resolved, WeekendError> {
    let utc = DateTime::<Utc>::from_timestamp_millis(millis).ok_or(WeekendError::InvalidDate)?;
    Ok(match tz {
        Some(tz) => Resolved::Zoned(utc.with_timezone(&tz)),
        None => Resolved::Utc(utc),
    })
}

fn resolve_arg(arg: DateArg, tz: Option<Tz>) -> Result<Resolved> {
    let resolved = match (arg.date, arg.millis) {
        (Some(date), _) => resolve(date, tz),
        (None, Some(millis)) => resolve_millis(millis, tz),
        (None, None) => anyhow::bail!("either a date or --millis is required"),
    };
    resolved.context("failed to read input date")
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Span {
    Month,
    Year,
}

fn render<D: Display + Serialize>(dates: &[D], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(dates
            .iter()
            .map(|d| d.to_string())
            .collect::<Vec<_>>()
            .join("\n")),
        OutputFormat::Json => {
            serde_json::to_string_pretty(dates).context("failed to serialize dates")
        }
    }
}

fn weekends_around<D>(date: &D, span: Span, format: OutputFormat) -> Result<String>
where
    D: CalendarDate + Display + Serialize,
{
    let weekends = match span {
        Span::Month => each_weekend_of_month(date).context("failed to list weekends of month")?,
        Span::Year => each_weekend_of_year(date).context("failed to list weekends of year")?,
    };
    info!("{date}: {} weekend day(s) in {span:?}", weekends.len());
    render(&weekends, format)
}

fn weekends_between<D>(start: D, end: D, format: OutputFormat) -> Result<String>
where
    D: CalendarDate + Display + Serialize,
{
    let interval = Interval::new(start, end);
    if interval.is_empty() {
        debug!("{} is after {}, nothing to list", interval.start, interval.end);
    }
    let weekends = each_weekend_of_interval(&interval);
    info!(
        "{} to {}: {} weekend day(s)",
        interval.start,
        interval.end,
        weekends.len()
    );
    render(&weekends, format)
}

fn cmd_span(arg: DateArg, span: Span, tz: Option<Tz>, format: OutputFormat) -> Result<String> {
    match resolve_arg(arg, tz)? {
        Resolved::Day(d) => weekends_around(&d, span, format),
        Resolved::Local(d) => weekends_around(&d, span, format),
        Resolved::Offset(d) => weekends_around(&d, span, format),
        Resolved::Utc(d) => weekends_around(&d, span, format),
        Resolved::Zoned(d) => weekends_around(&d, span, format),
    }
}

fn cmd_interval(
    start: DateInput,
    end: DateInput,
    tz: Option<Tz>,
    format: OutputFormat,
) -> Result<String> {
    let start = resolve(start, tz).context("failed to read start date")?;
    let end = resolve(end, tz).context("failed to read end date")?;

    match (start, end) {
        (Resolved::Day(s), Resolved::Day(e)) => weekends_between(s, e, format),
        (Resolved::Local(s), Resolved::Local(e)) => weekends_between(s, e, format),
        (Resolved::Offset(s), Resolved::Offset(e)) => weekends_between(s, e, format),
        (Resolved::Utc(s), Resolved::Utc(e)) => weekends_between(s, e, format),
        (Resolved::Zoned(s), Resolved::Zoned(e)) => weekends_between(s, e, format),
        (s, e) => anyhow::bail!(
            "start and end must use the same date form, got {s:?} and {e:?} (use --tz to mix forms)"
        ),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&cli.log_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    let tz = cli.tz.as_deref().map(parse_tz).transpose()?;

    let output = match cli.command {
        Commands::Month(arg) => cmd_span(arg, Span::Month, tz, cli.format)?,
        Commands::Year(arg) => cmd_span(arg, Span::Year, tz, cli.format)?,
        Commands::Interval { start, end } => cmd_interval(start, end, tz, cli.format)?,
    };

    if !output.is_empty() {
        println!("{output}");
    }

    Ok(())
}
