use tracing::warn;

use crate::config::ParsePolicy;
use crate::error::AnalysisError;

/// Rounds half up to `digits` decimal places: `floor(value * 10^digits + 0.5) / 10^digits`.
///
/// Ties always go up (2.45 -> 2.5), unlike `f64::round_ties_even`. Only
/// non-negative inputs are expected.
pub fn round_half_up(value: f64, digits: i32) -> f64 {
    let shift = 10f64.powi(digits);
    (value * shift + 0.5).floor() / shift
}

/// Mean of textual integer scores, rounded half up to one decimal.
///
/// Cells that are not integers count as zero. An empty slice divides by zero
/// and yields NaN.
pub fn average<S: AsRef<str>>(samples: &[S]) -> f64 {
    // coercion never rejects a cell
    average_with_policy(samples, ParsePolicy::CoerceZero, "samples").unwrap_or(f64::NAN)
}

/// Like [`average`], with an explicit policy for cells that fail to parse.
///
/// `subscale` only labels errors and log lines. Scores are summed in `i128`
/// so any run of `i64` cells adds up without overflow.
pub fn average_with_policy<S: AsRef<str>>(
    samples: &[S],
    policy: ParsePolicy,
    subscale: &str,
) -> Result<f64, AnalysisError> {
    let mut sum: i128 = 0;
    let mut count: usize = 0;
    let mut invalid: usize = 0;

    for sample in samples {
        let raw = sample.as_ref();
        match raw.parse::<i64>() {
            Ok(v) => {
                sum += i128::from(v);
                count += 1;
            }
            Err(_) => {
                invalid += 1;
                match policy {
                    ParsePolicy::CoerceZero => count += 1,
                    ParsePolicy::Skip => {}
                    ParsePolicy::Reject => {
                        return Err(AnalysisError::InvalidNumber {
                            subscale: subscale.to_string(),
                            value: raw.to_string(),
                        });
                    }
                }
            }
        }
    }

    if invalid > 0 {
        warn!(subscale, invalid, ?policy, "Non-numeric scores encountered");
    }

    Ok(round_half_up(sum as f64 / count as f64, 1))
}
