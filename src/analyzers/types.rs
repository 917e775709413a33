use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the four workplace-stress survey dimensions read from each row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Subscale {
    Workload,
    Control,
    SupervisorSupport,
    CoworkerSupport,
}

impl Subscale {
    pub const ALL: [Subscale; 4] = [
        Subscale::Workload,
        Subscale::Control,
        Subscale::SupervisorSupport,
        Subscale::CoworkerSupport,
    ];
}

impl fmt::Display for Subscale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Subscale::Workload => "workload",
            Subscale::Control => "control",
            Subscale::SupervisorSupport => "supervisor_support",
            Subscale::CoworkerSupport => "coworker_support",
        };
        f.write_str(name)
    }
}

/// Demographic group with its own model calibration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Group {
    Male,
    Female,
}

/// Intercept `a` and slope `b` of one term of the exponential risk model.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coefficient {
    pub a: f64,
    pub b: f64,
}

impl Coefficient {
    pub const fn new(a: f64, b: f64) -> Self {
        Self { a, b }
    }
}

/// Model terms for a single demographic group.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GroupCoefficients {
    pub workload: Coefficient,
    pub control: Coefficient,
    pub supervisor_support: Coefficient,
    pub coworker_support: Coefficient,
}

impl GroupCoefficients {
    pub fn get(&self, subscale: Subscale) -> Coefficient {
        match subscale {
            Subscale::Workload => self.workload,
            Subscale::Control => self.control,
            Subscale::SupervisorSupport => self.supervisor_support,
            Subscale::CoworkerSupport => self.coworker_support,
        }
    }
}

/// Full coefficient table keyed by group and subscale.
///
/// Built once at startup and only ever read afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RiskCoefficients {
    pub male: GroupCoefficients,
    pub female: GroupCoefficients,
}

impl RiskCoefficients {
    /// The published calibration of the occupational health-risk model.
    pub const fn standard() -> Self {
        Self {
            male: GroupCoefficients {
                workload: Coefficient::new(8.7, 0.076),
                control: Coefficient::new(7.9, -0.089),
                supervisor_support: Coefficient::new(7.5, -0.097),
                coworker_support: Coefficient::new(8.1, -0.097),
            },
            female: GroupCoefficients {
                workload: Coefficient::new(7.9, 0.048),
                control: Coefficient::new(7.2, -0.056),
                supervisor_support: Coefficient::new(6.6, -0.097),
                coworker_support: Coefficient::new(8.2, -0.097),
            },
        }
    }

    pub fn group(&self, group: Group) -> &GroupCoefficients {
        match group {
            Group::Male => &self.male,
            Group::Female => &self.female,
        }
    }

    pub fn get(&self, group: Group, subscale: Subscale) -> Coefficient {
        self.group(group).get(subscale)
    }
}

impl Default for RiskCoefficients {
    fn default() -> Self {
        Self::standard()
    }
}

/// Rounded cohort means of the four subscales.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SubscaleAverages {
    pub workload: f64,
    pub control: f64,
    pub supervisor_support: f64,
    pub coworker_support: f64,
}

impl SubscaleAverages {
    pub fn get(&self, subscale: Subscale) -> f64 {
        match subscale {
            Subscale::Workload => self.workload,
            Subscale::Control => self.control,
            Subscale::SupervisorSupport => self.supervisor_support,
            Subscale::CoworkerSupport => self.coworker_support,
        }
    }

    /// Values in report column order.
    pub fn values(&self) -> [f64; 4] {
        [
            self.workload,
            self.control,
            self.supervisor_support,
            self.coworker_support,
        ]
    }
}

/// Sub-indices and joint risk for one demographic group.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GroupRisk {
    pub workload_control: f64,
    pub workplace_support: f64,
    pub joint: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RiskIndices {
    pub male: GroupRisk,
    pub female: GroupRisk,
}

impl RiskIndices {
    /// The six indices in report column order, male first.
    pub fn values(&self) -> [f64; 6] {
        [
            self.male.workload_control,
            self.male.workplace_support,
            self.male.joint,
            self.female.workload_control,
            self.female.workplace_support,
            self.female.joint,
        ]
    }
}

/// Everything one analysis run produces.
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisSummary {
    pub respondents: usize,
    pub averages: SubscaleAverages,
    pub indices: RiskIndices,
}
