use crate::analyzers::aggregate::aggregate_samples;
use crate::analyzers::risk::compute_risk_indices;
use crate::analyzers::types::AnalysisSummary;
use crate::config::AnalysisConfig;
use crate::output::{build_report, render_report, write_report};
use crate::parser::{decode_input, survey_reader};
use crate::stats::extract_subscales;
use anyhow::{Context, Result};
use std::fs::File;
use std::io::Read;
use tracing::info;

/// Runs extraction, averaging and the risk model over one survey export.
pub fn analyze_reader<R: Read>(input: R, config: &AnalysisConfig) -> Result<AnalysisSummary> {
    let text = decode_input(input, config.encoding)?;
    let samples = extract_subscales(&mut survey_reader(&text))?;
    let respondents = samples.len();

    let averages = aggregate_samples(samples, config.parse_policy)?;
    let indices = compute_risk_indices(&averages, &config.coefficients);

    info!(
        respondents,
        workload = averages.workload,
        control = averages.control,
        supervisor_support = averages.supervisor_support,
        coworker_support = averages.coworker_support,
        "Subscale averages computed"
    );
    info!(
        male_joint = indices.male.joint,
        female_joint = indices.female.joint,
        "Risk indices computed"
    );

    Ok(AnalysisSummary {
        respondents,
        averages,
        indices,
    })
}

/// Encoded report bytes for a finished analysis.
pub fn render_summary(summary: &AnalysisSummary, config: &AnalysisConfig) -> Result<Vec<u8>> {
    let row = build_report(&summary.averages, &summary.indices, config.layout);
    render_report(&row, config.encoding)
}

/// Reads `input_path`, analyzes the cohort, and writes the report to `output_path`.
#[tracing::instrument(skip(config), fields(layout = ?config.layout, policy = ?config.parse_policy))]
pub fn run(input_path: &str, output_path: &str, config: &AnalysisConfig) -> Result<AnalysisSummary> {
    let input = File::open(input_path).with_context(|| format!("opening input {input_path}"))?;
    let summary = analyze_reader(input, config)?;

    let bytes = render_summary(&summary, config)?;
    write_report(output_path, &bytes)?;

    info!(output_path, "Report written");
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ReportLayout;

    fn export(rows: &[[&str; 4]]) -> Vec<u8> {
        let mut lines = vec![vec!["項目".to_string(); 200].join(",")];
        for scores in rows {
            let mut cells = vec!["0".to_string(); 200];
            for (i, score) in scores.iter().enumerate() {
                cells[196 + i] = score.to_string();
            }
            lines.push(cells.join(","));
        }
        let text = lines.join("\r\n") + "\r\n";
        encoding_rs::SHIFT_JIS.encode(&text).0.into_owned()
    }

    #[test]
    fn test_analyze_reader_summary() {
        let input = export(&[["10", "20", "5", "8"], ["12", "18", "6", "9"]]);
        let summary = analyze_reader(&input[..], &AnalysisConfig::default()).unwrap();
        assert_eq!(summary.respondents, 2);
        assert_eq!(summary.averages.values(), [11.0, 19.0, 5.5, 8.5]);
        let male = summary.indices.male;
        let expected = male.workload_control * male.workplace_support / 100.0;
        assert!((male.joint - expected).abs() < 1e-9);
    }

    #[test]
    fn test_analyze_reader_header_only() {
        let input = export(&[]);
        let summary = analyze_reader(&input[..], &AnalysisConfig::default()).unwrap();
        assert_eq!(summary.respondents, 0);
        assert!(summary.averages.values().iter().all(|v| v.is_nan()));
        assert!(summary.indices.values().iter().all(|v| v.is_nan()));
    }

    #[test]
    fn test_render_summary_respects_layout() {
        let input = export(&[["10", "20", "5", "8"]]);
        let config = AnalysisConfig {
            layout: ReportLayout::AveragesOnly,
            ..AnalysisConfig::default()
        };
        let summary = analyze_reader(&input[..], &config).unwrap();
        let bytes = render_summary(&summary, &config).unwrap();
        let (text, _, _) = encoding_rs::SHIFT_JIS.decode(&bytes);
        let data_row = text.split("\r\n").nth(1).unwrap();
        assert_eq!(data_row, format!("10,20,5,8{}", ",".repeat(25)));
    }

    #[test]
    fn test_run_missing_input() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("out.csv");
        let result = run(
            "/nonexistent/survey.csv",
            out.to_str().unwrap(),
            &AnalysisConfig::default(),
        );
        assert!(result.is_err());
        assert!(!out.exists());
    }
}
