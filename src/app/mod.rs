//! Command-line entry point wiring argument parsing and logging to the library.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use jiff::{Zoned, civil};
use reuters_style::{
    Moment, SlugKind, format_date, format_dayofweek, format_time, suggest_wild_slug,
};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[derive(Parser, Debug)]
#[command(name = "reuters-style")]
#[command(about = "Format dates and times and check slugs against the Reuters Style Guide")]
struct Cli {
    /// IANA time zone attached to inputs written without one
    #[arg(long, global = true, env = "REUTERS_STYLE_TZ")]
    tz: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Format a date, e.g. `Sept. 1, 2021`
    Date { when: String },
    /// Format the day of the week
    Day {
        when: String,
        /// Three-letter form for tables
        #[arg(short, long, default_value_t = false)]
        tabular: bool,
    },
    /// Format a time of day, e.g. `12:30 p.m. SAST`
    Time {
        when: String,
        /// Print the GMT equivalent in brackets instead of the zone
        #[arg(long, default_value_t = false)]
        no_timezone: bool,
    },
    /// Check a slug and report the first rule it breaks
    Slug {
        text: String,
        #[arg(short, long, value_enum, default_value_t = KindArg::Full)]
        kind: KindArg,
    },
    /// Suggest a wild slug for free text
    Suggest { text: String },
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum KindArg {
    Full,
    Packaging,
    Wild,
}

impl From<KindArg> for SlugKind {
    fn from(kind: KindArg) -> Self {
        match kind {
            KindArg::Full => SlugKind::Full,
            KindArg::Packaging => SlugKind::Packaging,
            KindArg::Wild => SlugKind::Wild,
        }
    }
}

/// Parse arguments, install logging and print the result of one command.
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_tracing()?;

    let output = execute(&cli)?;
    println!("{output}");
    Ok(())
}

/// Log to stderr, filtered by `RUST_LOG` (warnings only by default).
fn init_tracing() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new("warn"))?;
    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .compact()
                .with_target(true),
        )
        .try_init()?;
    Ok(())
}

fn execute(cli: &Cli) -> Result<String> {
    let tz = cli.tz.as_deref();
    match &cli.command {
        Command::Date { when } => Ok(format_date(parse_moment(when, tz)?)),
        Command::Day { when, tabular } => Ok(format_dayofweek(parse_moment(when, tz)?, *tabular)),
        Command::Time { when, no_timezone } => {
            Ok(format_time(parse_moment(when, tz)?, !no_timezone))
        }
        Command::Slug { text, kind } => {
            SlugKind::from(*kind).validate(text)?;
            tracing::info!(slug = %text, "slug accepted");
            Ok("valid".to_string())
        }
        Command::Suggest { text } => {
            suggest_wild_slug(text).with_context(|| format!("No usable slug terms in {text:?}"))
        }
    }
}

/// Accept `2021-09-01T12:30[Africa/Johannesburg]`, `2021-09-01T12:30` or `2021-09-01`.
///
/// Inputs without a zone take `tz` when given and stay naive otherwise.
fn parse_moment(raw: &str, tz: Option<&str>) -> Result<Moment> {
    if let Ok(zdt) = raw.parse::<Zoned>() {
        return Ok(zdt.into());
    }

    let dt = raw
        .parse::<civil::DateTime>()
        .or_else(|_| raw.parse::<civil::Date>().map(civil::DateTime::from))
        .with_context(|| format!("Unrecognised date/time: {raw}"))?;

    match tz {
        Some(name) => {
            let zdt = dt
                .in_tz(name)
                .with_context(|| format!("Failed to place {dt} in time zone {name}"))?;
            Ok(zdt.into())
        }
        None => Ok(dt.into()),
    }
}
