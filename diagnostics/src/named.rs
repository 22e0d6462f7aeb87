use core::fmt;
use core::str::FromStr;
use rand::Rng;
use serde::{Deserialize, Serialize};

use binary_curve::{CurveConfig, Sect163k1, Sect163r2, Sect233k1, Toy5};

use crate::{self_test, DiagnosticsError, SelfTestReport};

/// Runtime handle for the curves shipped with `binary-curve`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NamedCurve {
    Sect233k1,
    Sect163k1,
    Sect163r2,
    Toy5,
}

impl NamedCurve {
    pub const ALL: [NamedCurve; 4] = [
        NamedCurve::Sect233k1,
        NamedCurve::Sect163k1,
        NamedCurve::Sect163r2,
        NamedCurve::Toy5,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            NamedCurve::Sect233k1 => Sect233k1::PARAMS.name,
            NamedCurve::Sect163k1 => Sect163k1::PARAMS.name,
            NamedCurve::Sect163r2 => Sect163r2::PARAMS.name,
            NamedCurve::Toy5 => Toy5::PARAMS.name,
        }
    }

    /// Degree m of the coordinate field GF(2^m).
    pub fn degree(&self) -> usize {
        match self {
            NamedCurve::Sect233k1 => 233,
            NamedCurve::Sect163k1 | NamedCurve::Sect163r2 => 163,
            NamedCurve::Toy5 => 5,
        }
    }

    /// Run [`self_test`] on this curve.
    pub fn run_self_test<R: Rng + ?Sized>(
        &self,
        count: usize,
        rng: &mut R,
    ) -> Result<SelfTestReport, DiagnosticsError> {
        let report = match self {
            NamedCurve::Sect233k1 => self_test::<Sect233k1, R>(count, rng)?,
            NamedCurve::Sect163k1 => self_test::<Sect163k1, R>(count, rng)?,
            NamedCurve::Sect163r2 => self_test::<Sect163r2, R>(count, rng)?,
            NamedCurve::Toy5 => self_test::<Toy5, R>(count, rng)?,
        };
        Ok(report)
    }
}

impl fmt::Display for NamedCurve {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for NamedCurve {
    type Err = DiagnosticsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "sect233k1" | "k233" | "k-233" => Ok(NamedCurve::Sect233k1),
            "sect163k1" | "k163" | "k-163" => Ok(NamedCurve::Sect163k1),
            "sect163r2" | "b163" | "b-163" => Ok(NamedCurve::Sect163r2),
            "toy5" => Ok(NamedCurve::Toy5),
            _ => Err(DiagnosticsError::UnknownCurve(s.to_string())),
        }
    }
}
