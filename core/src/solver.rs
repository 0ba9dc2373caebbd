// core/src/solver.rs
use log::{debug, trace, warn};
use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, ConfigResult};
use crate::models::{EnvironmentConfig, RiderBikeConfig};
use crate::physics::calculate_power;

pub const SPEED_LOWER_KMH: f64 = -1000.0;
pub const SPEED_UPPER_KMH: f64 = 1000.0;
pub const MAX_ITERATIONS: usize = 100;
pub const POWER_TOLERANCE_W: f64 = 1e-4;

/// Søkegrenser og stoppkriterier for bisection.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SolverOptions {
    pub lower: f64,
    pub upper: f64,
    pub max_iterations: usize,
    pub tolerance: f64,
}

impl Default for SolverOptions {
    fn default() -> Self {
        Self {
            lower: SPEED_LOWER_KMH,
            upper: SPEED_UPPER_KMH,
            max_iterations: MAX_ITERATIONS,
            tolerance: POWER_TOLERANCE_W,
        }
    }
}

impl SolverOptions {
    /// Avviser grenser/toleranser som gir feil rot eller ubegrenset antall evalueringer.
    pub fn validate(&self) -> ConfigResult<()> {
        if !self.lower.is_finite() {
            return Err(ConfigError::NonFinite { field: "lower" });
        }
        if !self.upper.is_finite() {
            return Err(ConfigError::NonFinite { field: "upper" });
        }
        if self.lower >= self.upper {
            return Err(ConfigError::InvalidBounds {
                lower: self.lower,
                upper: self.upper,
            });
        }
        if !self.tolerance.is_finite() {
            return Err(ConfigError::NonFinite { field: "tolerance" });
        }
        if self.tolerance <= 0.0 {
            return Err(ConfigError::NonPositive {
                field: "tolerance",
                value: self.tolerance,
            });
        }
        if !(1..=MAX_ITERATIONS).contains(&self.max_iterations) {
            return Err(ConfigError::OutOfRange {
                field: "max_iterations",
                value: self.max_iterations as f64,
                min: 1.0,
                max: (MAX_ITERATIONS + 1) as f64,
            });
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bisection {
    pub value: f64,
    pub iterations: usize,
    /// `false` når iterasjonene gikk tom før toleransen ble nådd.
    pub converged: bool,
}

/// Finn x i [lower, upper] slik at f(x) ≈ target.
///
/// Forutsetter at f er monotont ikke-avtagende på intervallet; det sjekkes ikke.
/// Uten treff innen toleransen returneres siste midtpunkt.
pub fn bisect<F>(f: F, target: f64, options: &SolverOptions) -> Bisection
where
    F: Fn(f64) -> f64,
{
    let mut lower = options.lower;
    let mut upper = options.upper;
    let mut mid = 0.5 * (lower + upper);

    for i in 0..options.max_iterations {
        mid = 0.5 * (lower + upper);
        let value = f(mid);
        trace!("bisect #{i}: x={mid:.6} f(x)={value:.6}");

        if (value - target).abs() < options.tolerance {
            return Bisection { value: mid, iterations: i + 1, converged: true };
        }
        if value > target {
            upper = mid;
        } else {
            lower = mid;
        }
    }

    Bisection { value: mid, iterations: options.max_iterations, converged: false }
}

/// Fart (km/h) som krever `power_w` på pedalene, med diagnostikk.
pub fn solve_speed(
    power_w: f64,
    rider: &RiderBikeConfig,
    env: &EnvironmentConfig,
    options: &SolverOptions,
) -> Bisection {
    let out = bisect(|v| calculate_power(v, rider, env).leg, power_w, options);

    if out.converged {
        debug!(
            "solve_speed: {power_w:.2} W -> {:.3} km/h ({} iter)",
            out.value, out.iterations
        );
    } else {
        // typisk negativ målverdi: leg-effekten er positiv for alle v < 0,
        // så søket presses mot nedre grense
        warn!(
            "solve_speed: no root within {} W for target {power_w:.2} W after {} iterations, returning {:.3} km/h",
            options.tolerance, out.iterations, out.value
        );
    }
    out
}

/// Fart (km/h) som krever `power_w` på pedalene.
pub fn calculate_speed(power_w: f64, rider: &RiderBikeConfig, env: &EnvironmentConfig) -> f64 {
    solve_speed(power_w, rider, env, &SolverOptions::default()).value
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::DEFAULT_ENV;

    #[test]
    fn bisect_finds_square_root() {
        let opts = SolverOptions { lower: 0.0, upper: 10.0, tolerance: 1e-9, ..Default::default() };
        let out = bisect(|x| x * x, 2.0, &opts);
        assert!(out.converged);
        assert!((out.value - 2.0_f64.sqrt()).abs() < 1e-6);
        assert!(out.iterations <= MAX_ITERATIONS);
    }

    #[test]
    fn bisect_exits_on_first_midpoint() {
        let out = bisect(|x| x, 0.0, &SolverOptions::default());
        assert!(out.converged);
        assert_eq!(out.value, 0.0);
        assert_eq!(out.iterations, 1);
    }

    #[test]
    fn bisect_returns_last_midpoint_when_exhausted() {
        let opts = SolverOptions { max_iterations: 3, ..Default::default() };
        // målet ligger utenfor intervallet -> presses mot øvre grense
        let out = bisect(|x| x, 5000.0, &opts);
        assert!(!out.converged);
        assert_eq!(out.iterations, 3);
        assert_eq!(out.value, 750.0);
    }

    #[test]
    fn default_options_are_valid() {
        assert!(SolverOptions::default().validate().is_ok());
    }

    #[test]
    fn empty_or_inverted_bounds_are_rejected() {
        for (lower, upper) in [(0.0, 0.0), (1000.0, -1000.0)] {
            let opts = SolverOptions { lower, upper, ..Default::default() };
            assert_eq!(opts.validate(), Err(ConfigError::InvalidBounds { lower, upper }));
        }
        let opts = SolverOptions { upper: f64::INFINITY, ..Default::default() };
        assert_eq!(opts.validate(), Err(ConfigError::NonFinite { field: "upper" }));
    }

    #[test]
    fn tolerance_must_be_positive_and_finite() {
        let opts = SolverOptions { tolerance: -1.0, ..Default::default() };
        assert!(matches!(opts.validate(), Err(ConfigError::NonPositive { field: "tolerance", .. })));

        let opts = SolverOptions { tolerance: 0.0, ..Default::default() };
        assert!(opts.validate().is_err());

        let opts = SolverOptions { tolerance: f64::NAN, ..Default::default() };
        assert_eq!(opts.validate(), Err(ConfigError::NonFinite { field: "tolerance" }));
    }

    #[test]
    fn iteration_budget_is_capped() {
        for max_iterations in [0, MAX_ITERATIONS + 1, 5_000_000] {
            let opts = SolverOptions { max_iterations, ..Default::default() };
            assert!(
                matches!(opts.validate(), Err(ConfigError::OutOfRange { field: "max_iterations", .. })),
                "max_iterations={max_iterations}"
            );
        }
        let opts = SolverOptions { max_iterations: MAX_ITERATIONS, ..Default::default() };
        assert!(opts.validate().is_ok());
    }

    #[test]
    fn zero_power_means_standstill_on_flat() {
        let rider = RiderBikeConfig::new(75.0, 7.0);
        let v = calculate_speed(0.0, &rider, &DEFAULT_ENV);
        assert_eq!(v, 0.0);
    }

    #[test]
    fn inverts_flat_30kmh() {
        let rider = RiderBikeConfig::new(75.0, 7.0);
        let p = calculate_power(30.0, &rider, &DEFAULT_ENV).leg;
        let out = solve_speed(p, &rider, &DEFAULT_ENV, &SolverOptions::default());
        assert!(out.converged);
        assert!((out.value - 30.0).abs() < 1e-3, "v={}", out.value);
    }

    #[test]
    fn negative_target_is_not_found() {
        // kjent begrensning: leg(v) er ikke monoton over [-1000, 1000]
        let rider = RiderBikeConfig::new(75.0, 7.0);
        let down = EnvironmentConfig::with_gradient(-0.05);
        let out = solve_speed(-131.93, &rider, &down, &SolverOptions::default());
        assert!(!out.converged);
        assert!((out.value - SPEED_LOWER_KMH).abs() < 1e-9);
    }
}
