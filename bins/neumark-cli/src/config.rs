//! Configuration for the neumark-cli binary.
//!
//! Provides [`CliConfig`] with defaults, overlaid first from `NEUMARK_*`
//! environment variables and then from explicit command-line flags.

use anyhow::{bail, Result};
use clap::ValueEnum;

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    Text,
    Json,
}

/// Result output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

/// Configuration for one CLI invocation.
#[derive(Debug, Clone)]
pub struct CliConfig {
    /// Log level filter string (e.g. "info", "debug", "neumark_curve=trace").
    pub log_level: String,
    /// Log output format.
    pub log_format: LogFormat,
    /// Result output format.
    pub output: OutputFormat,
    /// Read and print amounts as whole-unit decimals instead of raw Ulps.
    pub units: bool,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            log_level: "warn".to_string(),
            log_format: LogFormat::Text,
            output: OutputFormat::Text,
            units: false,
        }
    }
}

impl CliConfig {
    /// Defaults overlaid with `NEUMARK_LOG_LEVEL`, `NEUMARK_LOG_FORMAT`,
    /// `NEUMARK_OUTPUT` and `NEUMARK_UNITS`.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut cfg = Self::default();
        if let Some(level) = lookup("NEUMARK_LOG_LEVEL") {
            cfg.log_level = level;
        }
        if let Some(format) = lookup("NEUMARK_LOG_FORMAT") {
            cfg.log_format = parse_enum(&format, "NEUMARK_LOG_FORMAT")?;
        }
        if let Some(output) = lookup("NEUMARK_OUTPUT") {
            cfg.output = parse_enum(&output, "NEUMARK_OUTPUT")?;
        }
        if let Some(units) = lookup("NEUMARK_UNITS") {
            cfg.units = match units.as_str() {
                "1" | "true" | "yes" => true,
                "0" | "false" | "no" => false,
                other => bail!("NEUMARK_UNITS: expected a boolean, got {other:?}"),
            };
        }
        Ok(cfg)
    }
}

fn parse_enum<T: ValueEnum>(value: &str, name: &str) -> Result<T> {
    match T::from_str(value, true) {
        Ok(v) => Ok(v),
        Err(_) => bail!("{name}: unsupported value {value:?}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults() {
        let cfg = CliConfig::default();
        assert_eq!(cfg.log_level, "warn");
        assert_eq!(cfg.log_format, LogFormat::Text);
        assert_eq!(cfg.output, OutputFormat::Text);
        assert!(!cfg.units);
    }

    #[test]
    fn empty_environment_keeps_defaults() {
        let cfg = CliConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(cfg.log_level, "warn");
        assert_eq!(cfg.output, OutputFormat::Text);
    }

    #[test]
    fn environment_overrides() {
        let cfg = CliConfig::from_lookup(lookup_from(&[
            ("NEUMARK_LOG_LEVEL", "debug"),
            ("NEUMARK_LOG_FORMAT", "json"),
            ("NEUMARK_OUTPUT", "JSON"),
            ("NEUMARK_UNITS", "true"),
        ]))
        .unwrap();
        assert_eq!(cfg.log_level, "debug");
        assert_eq!(cfg.log_format, LogFormat::Json);
        assert_eq!(cfg.output, OutputFormat::Json);
        assert!(cfg.units);
    }

    #[test]
    fn bad_environment_rejected() {
        assert!(CliConfig::from_lookup(lookup_from(&[("NEUMARK_OUTPUT", "xml")])).is_err());
        assert!(CliConfig::from_lookup(lookup_from(&[("NEUMARK_UNITS", "maybe")])).is_err());
    }

    #[test]
    fn config_is_clone_and_debug() {
        let cfg = CliConfig::default();
        let debug = format!("{:?}", cfg.clone());
        assert!(debug.contains("CliConfig"));
    }
}
