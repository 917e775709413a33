//! Run configuration assembled from the command line.

use anyhow::{Context, Result};
use clap::ValueEnum;
use encoding_rs::Encoding;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::analyzers::types::RiskCoefficients;
use crate::encoding::{DEFAULT_ENCODING_LABEL, resolve_encoding};

/// What to do with a score cell that does not parse as an integer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum ParsePolicy {
    /// Count the cell as a score of zero.
    #[default]
    CoerceZero,
    /// Abort the run.
    Reject,
    /// Leave the cell out of both the sum and the count.
    Skip,
}

/// Which values the report's data row carries.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum ReportLayout {
    /// Four subscale averages followed by the six risk indices.
    #[default]
    Full,
    /// Four subscale averages only, risk columns left blank.
    AveragesOnly,
}

#[derive(Debug, Clone)]
pub struct AnalysisConfig {
    pub encoding: &'static Encoding,
    pub parse_policy: ParsePolicy,
    pub layout: ReportLayout,
    pub coefficients: RiskCoefficients,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            encoding: encoding_rs::SHIFT_JIS,
            parse_policy: ParsePolicy::default(),
            layout: ReportLayout::default(),
            coefficients: RiskCoefficients::standard(),
        }
    }
}

impl AnalysisConfig {
    /// Builds a config, resolving the encoding label and optionally loading
    /// a coefficient table from a JSON file.
    pub fn new(
        encoding_label: Option<&str>,
        parse_policy: ParsePolicy,
        layout: ReportLayout,
        coefficients_path: Option<&str>,
    ) -> Result<Self> {
        let encoding = resolve_encoding(encoding_label.unwrap_or(DEFAULT_ENCODING_LABEL))?;
        let coefficients = match coefficients_path {
            Some(path) => load_coefficients(path)?,
            None => RiskCoefficients::standard(),
        };

        Ok(Self {
            encoding,
            parse_policy,
            layout,
            coefficients,
        })
    }
}

/// Loads a coefficient table from a JSON file shaped like:
/// ```json
/// {
///   "male":   { "workload": { "a": 8.7, "b": 0.076 }, "control": { ... }, ... },
///   "female": { ... }
/// }
/// ```
pub fn load_coefficients(path: &str) -> Result<RiskCoefficients> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("reading coefficient file {path}"))?;
    let coefficients: RiskCoefficients = serde_json::from_str(&content)
        .with_context(|| format!("parsing coefficient file {path}"))?;
    debug!(path, ?coefficients, "Loaded coefficient table");
    Ok(coefficients)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyzers::types::{Group, Subscale};
    use std::io::Write;

    #[test]
    fn test_default_config_uses_shift_jis_and_standard_table() {
        let config = AnalysisConfig::default();
        assert_eq!(config.encoding, encoding_rs::SHIFT_JIS);
        assert_eq!(config.parse_policy, ParsePolicy::CoerceZero);
        assert_eq!(config.layout, ReportLayout::Full);
        assert_eq!(config.coefficients, RiskCoefficients::standard());
    }

    #[test]
    fn test_new_rejects_unknown_encoding() {
        let result = AnalysisConfig::new(
            Some("not-an-encoding"),
            ParsePolicy::CoerceZero,
            ReportLayout::Full,
            None,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_load_coefficients_from_json() {
        let mut table = RiskCoefficients::standard();
        table.female.workload.a = 9.9;

        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{}", serde_json::to_string(&table).unwrap()).unwrap();

        let loaded = load_coefficients(file.path().to_str().unwrap()).unwrap();
        assert_eq!(loaded.get(Group::Female, Subscale::Workload).a, 9.9);
        assert_eq!(loaded.male, RiskCoefficients::standard().male);
    }

    #[test]
    fn test_load_coefficients_missing_file() {
        assert!(load_coefficients("/nonexistent/coefficients.json").is_err());
    }
}
