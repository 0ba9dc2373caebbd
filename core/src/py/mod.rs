// Python-bindinger. Flate funksjoner validerer input og kaster ValueError.
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use pyo3::wrap_pyfunction;

use crate::api;
use crate::error::ConfigError;
use crate::payload;

fn to_py_err(e: ConfigError) -> PyErr {
    PyErr::new::<PyValueError, _>(e.to_string())
}

/// Pedaleffekt (W) fra fart (km/h).
#[pyfunction]
#[allow(clippy::too_many_arguments)]
fn compute_power_from_speed(
    velocity_kmh: f64,
    gradient: f64,
    rider_weight: f64,
    bike_weight: f64,
    frontal_area: f64,
    drag_coef: f64,
    drivetrain_loss: f64,
    air_density: f64,
    wind_speed_kmh: f64,
    rolling_resistance_coef: f64,
) -> PyResult<f64> {
    api::try_compute_power_from_speed(
        velocity_kmh,
        gradient,
        rider_weight,
        bike_weight,
        frontal_area,
        drag_coef,
        drivetrain_loss,
        air_density,
        wind_speed_kmh,
        rolling_resistance_coef,
    )
    .map_err(to_py_err)
}

/// Fart (km/h) fra pedaleffekt (W).
#[pyfunction]
#[allow(clippy::too_many_arguments)]
fn compute_speed_from_power(
    power_w: f64,
    gradient: f64,
    rider_weight: f64,
    bike_weight: f64,
    frontal_area: f64,
    drag_coef: f64,
    drivetrain_loss: f64,
    air_density: f64,
    wind_speed_kmh: f64,
    rolling_resistance_coef: f64,
) -> PyResult<f64> {
    api::try_compute_speed_from_power(
        power_w,
        gradient,
        rider_weight,
        bike_weight,
        frontal_area,
        drag_coef,
        drivetrain_loss,
        air_density,
        wind_speed_kmh,
        rolling_resistance_coef,
    )
    .map_err(to_py_err)
}

#[pyfunction]
fn calculate_power_json(json_str: &str) -> PyResult<String> {
    payload::calculate_power_json(json_str).map_err(to_py_err)
}

#[pyfunction]
fn calculate_speed_json(json_str: &str) -> PyResult<String> {
    payload::calculate_speed_json(json_str).map_err(to_py_err)
}

pub fn register(m: &PyModule) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(compute_power_from_speed, m)?)?;
    m.add_function(wrap_pyfunction!(compute_speed_from_power, m)?)?;
    m.add_function(wrap_pyfunction!(calculate_power_json, m)?)?;
    m.add_function(wrap_pyfunction!(calculate_speed_json, m)?)?;
    Ok(())
}
