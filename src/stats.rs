//! Positional extraction of subscale scores from survey export rows.

use csv::StringRecord;
use serde::Serialize;
use tracing::{debug, info};

use crate::analyzers::types::Subscale;
use crate::error::AnalysisError;

// Zero-based column positions in the survey export.
/// 仕事の量的負担 (quantitative workload)
pub const WORKLOAD_COLUMN: usize = 196;
/// 仕事のコントロール (job control)
pub const CONTROL_COLUMN: usize = 197;
/// 上司の支援 (supervisor support)
pub const SUPERVISOR_SUPPORT_COLUMN: usize = 198;
/// 同僚の支援 (coworker support)
pub const COWORKER_SUPPORT_COLUMN: usize = 199;

/// Narrowest row that still carries every score column.
pub const MIN_COLUMNS: usize = COWORKER_SUPPORT_COLUMN + 1;

impl Subscale {
    pub fn column(self) -> usize {
        match self {
            Subscale::Workload => WORKLOAD_COLUMN,
            Subscale::Control => CONTROL_COLUMN,
            Subscale::SupervisorSupport => SUPERVISOR_SUPPORT_COLUMN,
            Subscale::CoworkerSupport => COWORKER_SUPPORT_COLUMN,
        }
    }
}

/// Raw score cells for the whole cohort, one collection per subscale, in row order.
#[derive(Debug, Default, Clone, PartialEq, Serialize)]
pub struct SubscaleSamples {
    pub workload: Vec<String>,
    pub control: Vec<String>,
    pub supervisor_support: Vec<String>,
    pub coworker_support: Vec<String>,
}

impl SubscaleSamples {
    /// Appends the four score cells of one respondent.
    ///
    /// `line` is only used for the error message.
    pub fn push_record(&mut self, record: &StringRecord, line: u64) -> Result<(), AnalysisError> {
        if record.len() < MIN_COLUMNS {
            return Err(AnalysisError::MalformedRow {
                line,
                found: record.len(),
                required: MIN_COLUMNS,
            });
        }

        for subscale in Subscale::ALL {
            self.get_mut(subscale)
                .push(record[subscale.column()].to_string());
        }
        Ok(())
    }

    fn get_mut(&mut self, subscale: Subscale) -> &mut Vec<String> {
        match subscale {
            Subscale::Workload => &mut self.workload,
            Subscale::Control => &mut self.control,
            Subscale::SupervisorSupport => &mut self.supervisor_support,
            Subscale::CoworkerSupport => &mut self.coworker_support,
        }
    }

    pub fn get(&self, subscale: Subscale) -> &[String] {
        match subscale {
            Subscale::Workload => &self.workload,
            Subscale::Control => &self.control,
            Subscale::SupervisorSupport => &self.supervisor_support,
            Subscale::CoworkerSupport => &self.coworker_support,
        }
    }

    /// Number of respondents collected.
    pub fn len(&self) -> usize {
        self.workload.len()
    }

    pub fn is_empty(&self) -> bool {
        self.workload.is_empty()
    }
}

/// Reads every respondent row from `reader` into per-subscale collections.
///
/// The first record is a title row and is discarded unconditionally. Any
/// record narrower than [`MIN_COLUMNS`] aborts extraction.
pub fn extract_subscales<R: std::io::Read>(
    reader: &mut csv::Reader<R>,
) -> Result<SubscaleSamples, AnalysisError> {
    let mut records = reader.records();

    match records.next() {
        Some(title) => {
            let title = title?;
            debug!(columns = title.len(), "Skipped title row");
        }
        None => {
            info!("Input is empty");
            return Ok(SubscaleSamples::default());
        }
    }

    let mut samples = SubscaleSamples::default();
    for record in records {
        let record = record?;
        let line = record.position().map(|p| p.line()).unwrap_or_default();
        samples.push_record(&record, line)?;
    }

    debug!(respondents = samples.len(), "Extracted subscale samples");
    Ok(samples)
}
