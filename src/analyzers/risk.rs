use crate::analyzers::types::{
    Coefficient, Group, GroupRisk, RiskCoefficients, RiskIndices, Subscale, SubscaleAverages,
};

/// `100 * exp((x - a1) * b1 + (y - a2) * b2)` for a pair of subscale averages.
pub fn sub_index(x: f64, first: Coefficient, y: f64, second: Coefficient) -> f64 {
    100.0 * ((x - first.a) * first.b + (y - second.a) * second.b).exp()
}

/// Computes both sub-indices and the joint risk for one group.
///
/// The joint risk renormalises the product of two percentage-scale indices
/// back to a percentage, so it is exactly `workload_control * workplace_support / 100`.
pub fn group_risk(
    averages: &SubscaleAverages,
    coefficients: &RiskCoefficients,
    group: Group,
) -> GroupRisk {
    let term = |subscale: Subscale| (averages.get(subscale), coefficients.get(group, subscale));

    let (workload, workload_coef) = term(Subscale::Workload);
    let (control, control_coef) = term(Subscale::Control);
    let workload_control = sub_index(workload, workload_coef, control, control_coef);

    let (supervisor, supervisor_coef) = term(Subscale::SupervisorSupport);
    let (coworker, coworker_coef) = term(Subscale::CoworkerSupport);
    let workplace_support = sub_index(supervisor, supervisor_coef, coworker, coworker_coef);

    let joint = workload_control * workplace_support / 100.0;

    GroupRisk {
        workload_control,
        workplace_support,
        joint,
    }
}

/// Derives the six risk indices from the four subscale averages.
///
/// Outputs are raw model results; no rounding is applied.
pub fn compute_risk_indices(
    averages: &SubscaleAverages,
    coefficients: &RiskCoefficients,
) -> RiskIndices {
    RiskIndices {
        male: group_risk(averages, coefficients, Group::Male),
        female: group_risk(averages, coefficients, Group::Female),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    fn averages(w: f64, c: f64, s: f64, k: f64) -> SubscaleAverages {
        SubscaleAverages {
            workload: w,
            control: c,
            supervisor_support: s,
            coworker_support: k,
        }
    }

    #[test]
    fn test_male_intercepts_give_baseline() {
        let indices = compute_risk_indices(
            &averages(8.7, 7.9, 7.5, 8.1),
            &RiskCoefficients::standard(),
        );
        assert_eq!(indices.male.workload_control, 100.0);
        assert_eq!(indices.male.workplace_support, 100.0);
        assert_eq!(indices.male.joint, 100.0);
    }

    #[test]
    fn test_female_intercepts_give_baseline() {
        let indices = compute_risk_indices(
            &averages(7.9, 7.2, 6.6, 8.2),
            &RiskCoefficients::standard(),
        );
        assert_eq!(indices.female.workload_control, 100.0);
        assert_eq!(indices.female.workplace_support, 100.0);
        assert_eq!(indices.female.joint, 100.0);
    }

    #[test]
    fn test_joint_is_renormalised_product() {
        let table = RiskCoefficients::standard();
        for avg in [
            averages(11.0, 19.0, 6.0, 8.0),
            averages(3.0, 3.0, 3.0, 3.0),
            averages(12.0, 6.5, 9.1, 10.4),
        ] {
            let indices = compute_risk_indices(&avg, &table);
            for risk in [indices.male, indices.female] {
                let expected = risk.workload_control * risk.workplace_support / 100.0;
                assert!((risk.joint - expected).abs() < EPS);
            }
        }
    }

    #[test]
    fn test_known_values() {
        let indices = compute_risk_indices(
            &averages(11.0, 19.0, 6.0, 8.0),
            &RiskCoefficients::standard(),
        );
        let expected = [
            44.34811415535746,
            116.78915160520621,
            51.793786274950335,
            59.92957878455384,
            108.06902960848967,
            64.76531424092263,
        ];
        for (got, want) in indices.values().iter().zip(expected) {
            assert!((got - want).abs() < EPS, "got {got}, want {want}");
        }
    }

    #[test]
    fn test_heavier_workload_raises_risk() {
        let table = RiskCoefficients::standard();
        let low = compute_risk_indices(&averages(8.0, 8.0, 8.0, 8.0), &table);
        let high = compute_risk_indices(&averages(12.0, 8.0, 8.0, 8.0), &table);
        assert!(high.male.workload_control > low.male.workload_control);
        assert!(high.female.joint > low.female.joint);
        // support terms do not depend on workload
        assert_eq!(high.male.workplace_support, low.male.workplace_support);
    }

    #[test]
    fn test_overridden_coefficient_changes_only_its_group() {
        let mut table = RiskCoefficients::standard();
        table.female.supervisor_support.a = 6.0;
        let avg = averages(7.9, 7.2, 6.0, 8.2);

        let standard = compute_risk_indices(&avg, &RiskCoefficients::standard());
        let overridden = compute_risk_indices(&avg, &table);
        assert_eq!(overridden.male, standard.male);
        assert_eq!(overridden.female.workplace_support, 100.0);
        assert_ne!(standard.female.workplace_support, 100.0);
    }

    #[test]
    fn test_nan_averages_propagate() {
        let indices = compute_risk_indices(
            &averages(f64::NAN, f64::NAN, f64::NAN, f64::NAN),
            &RiskCoefficients::standard(),
        );
        assert!(indices.values().iter().all(|v| v.is_nan()));
    }
}
