use crate::analyzers::types::{Subscale, SubscaleAverages};
use crate::analyzers::utility::average_with_policy;
use crate::config::ParsePolicy;
use crate::error::AnalysisError;
use crate::stats::SubscaleSamples;
use tracing::debug;

/// Reduces the per-subscale collections to their rounded cohort means.
///
/// The samples are consumed; with no respondents every average is NaN.
pub fn aggregate_samples(
    samples: SubscaleSamples,
    policy: ParsePolicy,
) -> Result<SubscaleAverages, AnalysisError> {
    let mean_of = |subscale: Subscale| -> Result<f64, AnalysisError> {
        let avg = average_with_policy(samples.get(subscale), policy, &subscale.to_string())?;
        debug!(%subscale, samples = samples.get(subscale).len(), avg, "Subscale average");
        Ok(avg)
    };

    Ok(SubscaleAverages {
        workload: mean_of(Subscale::Workload)?,
        control: mean_of(Subscale::Control)?,
        supervisor_support: mean_of(Subscale::SupervisorSupport)?,
        coworker_support: mean_of(Subscale::CoworkerSupport)?,
    })
}
