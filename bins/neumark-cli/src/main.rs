//! neumark-cli: evaluate the Neumark issuance curve from the command line.
//!
//! Amounts are raw Ulps (decimal integers) by default, or whole-unit decimals
//! with `--units`. Results print as `key: value` lines or as a JSON object
//! whose amounts are decimal strings.

mod config;

use std::collections::BTreeMap;

use anyhow::{anyhow, bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use neumark_core::constants::{
    DECAY_STEP, DECIMALS, INITIAL_REWARD_FRACTION, NEUMARK_CAP, SATURATION_THRESHOLD,
};
use neumark_core::traits::IssuanceCurve;
use neumark_core::{format_units, parse_units, U256};
use neumark_curve::CurveEngine;
use serde::Serialize;
use tracing::{debug, info};

use crate::config::{CliConfig, LogFormat, OutputFormat};

/// Most rows a single `table` invocation prints.
const MAX_TABLE_STEPS: u32 = 10_000;

/// Neumark issuance curve calculator.
#[derive(Parser)]
#[command(name = "neumark-cli")]
#[command(version, about = "Capped, invertible issuance curve calculator.")]
struct Cli {
    /// Read and print amounts as whole-unit decimals instead of raw Ulps.
    #[arg(long, global = true)]
    units: bool,

    /// Result output format [env: NEUMARK_OUTPUT].
    #[arg(long, global = true, value_enum)]
    output: Option<OutputFormat>,

    /// Log level filter, overridden by RUST_LOG [env: NEUMARK_LOG_LEVEL].
    #[arg(long, global = true)]
    log_level: Option<String>,

    /// Log output format [env: NEUMARK_LOG_FORMAT].
    #[arg(long, global = true, value_enum)]
    log_format: Option<LogFormat>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Total issuance for a total contribution.
    Cumulative {
        /// Total contributed amount.
        contributed: String,
    },
    /// Contribution whose cumulative issuance matches an issued amount.
    Inverse {
        /// Cumulative issued amount.
        issued: String,
        #[command(flatten)]
        bracket: BracketArgs,
    },
    /// Issuance for contributing `delta` on top of `total`.
    Incremental {
        /// Total contributed before this contribution.
        total: String,
        /// Additional contribution.
        delta: String,
    },
    /// Contribution equivalent of retiring issuance at a total contribution.
    IncrementalInverse {
        /// Total contributed so far.
        total: String,
        /// Issuance being retired.
        issued: String,
        #[command(flatten)]
        bracket: BracketArgs,
    },
    /// Print the curve constants.
    Constants,
    /// Sample the curve at evenly spaced contributions.
    Table(TableArgs),
}

#[derive(Args)]
struct BracketArgs {
    /// Lower bound of the contribution search.
    #[arg(long)]
    min: Option<String>,
    /// Upper bound of the contribution search.
    #[arg(long)]
    max: Option<String>,
}

#[derive(Args)]
struct TableArgs {
    /// First contribution sampled.
    #[arg(long, default_value = "0")]
    from: String,
    /// Last contribution sampled (default: saturation threshold).
    #[arg(long)]
    to: Option<String>,
    /// Number of intervals between `from` and `to`.
    #[arg(long, default_value_t = 10)]
    steps: u32,
}

/// Amount codec selected by `--units`.
#[derive(Debug, Clone, Copy)]
struct Amounts {
    units: bool,
}

impl Amounts {
    fn parse(&self, name: &str, raw: &str) -> Result<U256> {
        if self.units {
            parse_units(raw).with_context(|| format!("invalid {name} {raw:?}"))
        } else {
            let digits = raw.trim().replace('_', "");
            if digits.is_empty() {
                bail!("invalid {name}: empty amount");
            }
            digits
                .parse::<U256>()
                .map_err(|e| anyhow!("invalid {name} {raw:?}: {e}"))
        }
    }

    fn parse_opt(&self, name: &str, raw: Option<&str>) -> Result<Option<U256>> {
        raw.map(|r| self.parse(name, r)).transpose()
    }

    fn show(&self, value: U256) -> String {
        if self.units {
            format_units(value)
        } else {
            value.to_string()
        }
    }
}

/// One command's result, as named amounts.
#[derive(Debug, Serialize)]
struct Report {
    operation: &'static str,
    #[serde(flatten)]
    values: BTreeMap<&'static str, String>,
}

#[derive(Debug, Serialize)]
struct TableRow {
    contributed: String,
    issued: String,
    /// Issuance since the previous row.
    marginal: String,
}

#[derive(Debug, Serialize)]
struct Table {
    operation: &'static str,
    rows: Vec<TableRow>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let cfg = resolve_config(&cli, CliConfig::from_env()?);
    init_logging(&cfg.log_level, cfg.log_format);
    debug!(?cfg, "configuration resolved");

    let engine = CurveEngine::new();
    let amounts = Amounts { units: cfg.units };

    match &cli.command {
        Commands::Table(args) => {
            let table = run_table(&engine, amounts, args)?;
            print_table(&table, cfg.output)
        }
        command => {
            let report = run(&engine, amounts, command)?;
            print_report(&report, cfg.output)
        }
    }
}

/// Overlay explicit command-line flags on the environment configuration.
fn resolve_config(cli: &Cli, mut cfg: CliConfig) -> CliConfig {
    if let Some(level) = &cli.log_level {
        cfg.log_level = level.clone();
    }
    if let Some(format) = cli.log_format {
        cfg.log_format = format;
    }
    if let Some(output) = cli.output {
        cfg.output = output;
    }
    if cli.units {
        cfg.units = true;
    }
    cfg
}

/// Initialize the tracing subscriber on stderr. `RUST_LOG` wins over `level`.
fn init_logging(level: &str, format: LogFormat) {
    use tracing_subscriber::filter::EnvFilter;
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    match format {
        LogFormat::Json => tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .init(),
        LogFormat::Text => tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_level(true)
                    .with_writer(std::io::stderr),
            )
            .init(),
    }
}

fn run<C: IssuanceCurve + ?Sized>(curve: &C, amounts: Amounts, command: &Commands) -> Result<Report> {
    let mut values = BTreeMap::new();
    let operation = match command {
        Commands::Cumulative { contributed } => {
            let contributed = amounts.parse("contribution", contributed)?;
            let issued = curve.cumulative(contributed).context("cumulative issuance")?;
            values.insert("contributed", amounts.show(contributed));
            values.insert("issued", amounts.show(issued));
            "cumulative"
        }
        Commands::Inverse { issued, bracket } => {
            let issued = amounts.parse("issued amount", issued)?;
            let min = amounts.parse_opt("--min", bracket.min.as_deref())?.unwrap_or(U256::ZERO);
            let max = amounts
                .parse_opt("--max", bracket.max.as_deref())?
                .unwrap_or(SATURATION_THRESHOLD);
            let contributed = curve
                .cumulative_inverse(issued, min, max)
                .context("inverse issuance")?;
            values.insert("issued", amounts.show(issued));
            values.insert("min", amounts.show(min));
            values.insert("max", amounts.show(max));
            values.insert("contributed", amounts.show(contributed));
            "inverse"
        }
        Commands::Incremental { total, delta } => {
            let total = amounts.parse("total", total)?;
            let delta = amounts.parse("delta", delta)?;
            let issued = curve.incremental(total, delta).context("incremental issuance")?;
            values.insert("total", amounts.show(total));
            values.insert("delta", amounts.show(delta));
            values.insert("issued", amounts.show(issued));
            "incremental"
        }
        Commands::IncrementalInverse { total, issued, bracket } => {
            let total = amounts.parse("total", total)?;
            let issued = amounts.parse("issued amount", issued)?;
            let min = amounts.parse_opt("--min", bracket.min.as_deref())?;
            let max = amounts.parse_opt("--max", bracket.max.as_deref())?;
            let refunded = if min.is_none() && max.is_none() {
                curve.incremental_inverse(total, issued)
            } else {
                let min = min.unwrap_or(U256::ZERO);
                let max = max.unwrap_or(total);
                values.insert("min", amounts.show(min));
                values.insert("max", amounts.show(max));
                curve.incremental_inverse_in(total, issued, min, max)
            }
            .context("incremental inverse")?;
            values.insert("total", amounts.show(total));
            values.insert("issued", amounts.show(issued));
            values.insert("contributed", amounts.show(refunded));
            "incremental-inverse"
        }
        Commands::Constants => {
            values.insert("cap", amounts.show(NEUMARK_CAP));
            values.insert("initial_reward_fraction", amounts.show(INITIAL_REWARD_FRACTION));
            values.insert("decay_step", amounts.show(DECAY_STEP));
            values.insert("saturation_threshold", amounts.show(SATURATION_THRESHOLD));
            values.insert("decimals", DECIMALS.to_string());
            "constants"
        }
        Commands::Table(_) => bail!("table is not a single-value command"),
    };
    info!(operation, "evaluated");
    Ok(Report { operation, values })
}

fn run_table<C: IssuanceCurve + ?Sized>(curve: &C, amounts: Amounts, args: &TableArgs) -> Result<Table> {
    let from = amounts.parse("--from", &args.from)?;
    let to = amounts
        .parse_opt("--to", args.to.as_deref())?
        .unwrap_or(SATURATION_THRESHOLD);
    if from > to {
        bail!("--from ({}) is above --to ({})", amounts.show(from), amounts.show(to));
    }
    if args.steps == 0 || args.steps > MAX_TABLE_STEPS {
        bail!("--steps must be between 1 and {MAX_TABLE_STEPS}, got {}", args.steps);
    }

    let span = to - from;
    let steps = U256::from(args.steps);
    // Scale before dividing unless `span * steps` would not fit.
    let exact = span.checked_mul(steps).is_some();
    let mut rows = Vec::with_capacity(args.steps as usize + 1);
    let mut previous = from;
    for i in 0..=args.steps {
        // offset <= span, so `from + offset` stays within [from, to].
        let offset = if exact {
            span * U256::from(i) / steps
        } else {
            span / steps * U256::from(i)
        };
        let contributed = if i == args.steps { to } else { from + offset };
        let issued = curve
            .cumulative(contributed)
            .with_context(|| format!("cumulative issuance at {contributed}"))?;
        let marginal = curve
            .incremental(previous, contributed - previous)
            .with_context(|| format!("marginal issuance from {previous} to {contributed}"))?;
        rows.push(TableRow {
            contributed: amounts.show(contributed),
            issued: amounts.show(issued),
            marginal: amounts.show(marginal),
        });
        previous = contributed;
    }
    info!(rows = rows.len(), "table sampled");
    Ok(Table { operation: "table", rows })
}

fn print_report(report: &Report, output: OutputFormat) -> Result<()> {
    match output {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(report).context("encode report")?);
        }
        OutputFormat::Text => {
            for (key, value) in &report.values {
                println!("{key}: {value}");
            }
        }
    }
    Ok(())
}

fn print_table(table: &Table, output: OutputFormat) -> Result<()> {
    match output {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(table).context("encode table")?);
        }
        OutputFormat::Text => {
            let cw = column_width(table.rows.iter().map(|r| r.contributed.as_str()), "contributed");
            let iw = column_width(table.rows.iter().map(|r| r.issued.as_str()), "issued");
            println!("{:>cw$}  {:>iw$}  marginal", "contributed", "issued");
            for row in &table.rows {
                println!("{:>cw$}  {:>iw$}  {}", row.contributed, row.issued, row.marginal);
            }
        }
    }
    Ok(())
}

fn column_width<'a>(cells: impl Iterator<Item = &'a str>, header: &str) -> usize {
    cells.map(str::len).max().unwrap_or(0).max(header.len())
}
