//! Report rendering and persistence for the group analysis.
//!
//! The report is a header row plus exactly one data row, CRLF-terminated and
//! encoded in the configured legacy encoding.

use anyhow::{Context, Result};
use csv::{Terminator, WriterBuilder};
use encoding_rs::Encoding;
use std::fs::{self, File, OpenOptions};
use tracing::{debug, info};

use crate::analyzers::types::{AnalysisSummary, RiskIndices, SubscaleAverages};
use crate::config::ReportLayout;
use crate::encoding::encode;

/// Default name of the report file written to the working directory.
pub const DEFAULT_REPORT_FILE: &str = "ストレスチェック集団分析.csv";

const HEADER: [&str; 29] = [
    // subscale averages
    "仕事の量的負担",
    "仕事のコントロール",
    "上司の支援",
    "同僚の支援",
    // risk indices
    "量・コントロール_男性",
    "職場の支援_男性",
    "総合健康リスク_男性",
    "量・コントロール_女性",
    "職場の支援_女性",
    "総合健康リスク_女性",
    // not populated by this analysis
    "量的負担_平均",
    "質的負担_平均",
    "身体負担_平均",
    "対人関係_平均",
    "職場環境_平均",
    "コントロール_平均",
    "技能活用_平均",
    "適性度_平均",
    "働き甲斐_平均",
    "活気_平均",
    "いらいら感_平均",
    "疲労感_平均",
    "不安感_平均",
    "抑うつ感_平均",
    "身体愁訴_平均",
    "上司支援_平均",
    "同僚支援_平均",
    "家族・友人支援_平均",
    "満足度_平均",
];

/// Column labels of the report, in order.
pub fn header() -> &'static [&'static str] {
    &HEADER
}

/// The single data row of a report, always as wide as [`header`].
#[derive(Debug, Clone, PartialEq)]
pub struct ReportRow {
    cells: Vec<String>,
}

impl ReportRow {
    pub fn cells(&self) -> &[String] {
        &self.cells
    }
}

/// Renders a number the way the legacy report does: shortest round-trip
/// digits, `NaN`/`+Inf`/`-Inf` for non-finite values, and an exponent with
/// at least two digits (`1e+21`, `1.5e-05`) outside `1e-4 <= |v| < 1e21`.
pub fn format_value(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "+Inf" } else { "-Inf" }.to_string();
    }

    let magnitude = value.abs();
    if magnitude != 0.0 && !(1e-4..1e21).contains(&magnitude) {
        let scientific = format!("{value:e}");
        if let Some((mantissa, exponent)) = scientific.split_once('e') {
            let (sign, digits) = match exponent.strip_prefix('-') {
                Some(digits) => ('-', digits),
                None => ('+', exponent),
            };
            return format!("{mantissa}e{sign}{digits:0>2}");
        }
        return scientific;
    }

    value.to_string()
}

/// Builds the data row: averages, then (for [`ReportLayout::Full`]) the risk
/// indices, then blank cells up to the header width.
pub fn build_report(
    averages: &SubscaleAverages,
    indices: &RiskIndices,
    layout: ReportLayout,
) -> ReportRow {
    let mut cells: Vec<String> = averages.values().into_iter().map(format_value).collect();
    if layout == ReportLayout::Full {
        cells.extend(indices.values().into_iter().map(format_value));
    }
    cells.resize(HEADER.len(), String::new());
    ReportRow { cells }
}

/// Renders header and data row as CRLF-terminated CSV in `encoding`.
pub fn render_report(row: &ReportRow, encoding: &'static Encoding) -> Result<Vec<u8>> {
    let mut writer = WriterBuilder::new()
        .terminator(Terminator::CRLF)
        .from_writer(Vec::new());

    writer.write_record(header())?;
    writer.write_record(row.cells())?;

    let buffer = writer
        .into_inner()
        .map_err(|e| anyhow::anyhow!("flushing report buffer: {}", e.error()))?;
    let text = String::from_utf8(buffer).context("report is not valid UTF-8")?;

    Ok(encode(&text, encoding))
}

/// Opens the status log for appending, creating it if needed.
pub fn open_log_file(path: &str) -> Result<File> {
    OpenOptions::new()
        .append(true)
        .create(true)
        .open(path)
        .with_context(|| format!("opening log file {path}"))
}

/// Writes rendered report bytes to `path`, replacing any existing file.
pub fn write_report(path: &str, bytes: &[u8]) -> Result<()> {
    debug!(path, bytes = bytes.len(), "Writing report");
    fs::write(path, bytes).with_context(|| format!("writing report {path}"))?;
    Ok(())
}

/// Logs the summary using Rust's debug pretty-print format.
pub fn print_pretty(summary: &AnalysisSummary) {
    debug!("{:#?}", summary);
}

/// Logs the summary as pretty-printed JSON.
pub fn print_json(summary: &AnalysisSummary) -> Result<()> {
    info!("{}", serde_json::to_string_pretty(summary)?);
    Ok(())
}
