//! Sammenheng mellom tråkkeffekt og fart for en syklist: tyngdekraft,
//! rullemotstand og luftmotstand, med numerisk invertering effekt → fart.
//!
//! Inspirert av <https://www.gribble.org/cycling/power_v_speed.html>.

pub mod api;
pub mod error;
pub mod models;
pub mod payload;
pub mod physics;
pub mod solver;

#[cfg(feature = "python")]
mod py;

pub use api::{
    compute_power_from_speed, compute_speed_from_power, try_compute_power_from_speed,
    try_compute_speed_from_power,
};
pub use error::{ConfigError, ConfigResult};
pub use models::{EnvironmentConfig, RiderBikeConfig, DEFAULT_ENV};
pub use physics::{calculate_forces, calculate_power, ForceResult, PowerCalculator, PowerResult};
pub use solver::{bisect, calculate_speed, solve_speed, Bisection, SolverOptions};

#[cfg(feature = "python")]
use pyo3::prelude::*;

#[cfg(feature = "python")]
#[pymodule]
fn cyclepower_core(_py: Python, m: &PyModule) -> PyResult<()> {
    py::register(m)
}
