// core/src/payload.rs
//
// JSON-inngang for Python-laget. Dekoding rapporterer stien til feltet som feilet.
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, ConfigResult};
use crate::models::{EnvironmentConfig, RiderBikeConfig};
use crate::physics::{calculate_forces, calculate_power, ForceResult, PowerResult};
use crate::solver::{solve_speed, SolverOptions};

#[derive(Debug, Deserialize)]
struct PowerRequest {
    #[serde(alias = "velocity", alias = "v_kmh")]
    velocity_kmh: f64,
    #[serde(alias = "params")]
    rider: RiderBikeConfig,
    #[serde(default)]
    env: EnvironmentConfig,
}

#[derive(Debug, Serialize)]
struct PowerResponse {
    velocity_kmh: f64,
    forces: ForceResult,
    power: PowerResult,
}

#[derive(Debug, Deserialize)]
struct SpeedRequest {
    #[serde(alias = "power")]
    power_w: f64,
    #[serde(alias = "params")]
    rider: RiderBikeConfig,
    #[serde(default)]
    env: EnvironmentConfig,
    #[serde(default)]
    options: SolverOptions,
}

#[derive(Debug, Serialize)]
struct SpeedResponse {
    velocity_kmh: f64,
    iterations: usize,
    converged: bool,
}

fn parse<T: DeserializeOwned>(json_in: &str) -> ConfigResult<T> {
    let de = &mut serde_json::Deserializer::from_str(json_in);
    serde_path_to_error::deserialize(de)
        .map_err(|e| ConfigError::Payload(format!("{} (at `{}`)", e.inner(), e.path())))
}

fn to_json<T: Serialize>(value: &T) -> ConfigResult<String> {
    serde_json::to_string(value).map_err(|e| ConfigError::Payload(e.to_string()))
}

/// `{"velocity_kmh", "rider", "env"?}` → `{"velocity_kmh", "forces", "power"}`
pub fn calculate_power_json(json_in: &str) -> ConfigResult<String> {
    let req: PowerRequest = parse(json_in)?;
    req.rider.validate()?;
    req.env.validate()?;

    let forces = calculate_forces(req.velocity_kmh, &req.rider, &req.env);
    let power = calculate_power(req.velocity_kmh, &req.rider, &req.env);
    to_json(&PowerResponse { velocity_kmh: req.velocity_kmh, forces, power })
}

/// `{"power_w", "rider", "env"?, "options"?}` → `{"velocity_kmh", "iterations", "converged"}`
pub fn calculate_speed_json(json_in: &str) -> ConfigResult<String> {
    let req: SpeedRequest = parse(json_in)?;
    req.rider.validate()?;
    req.env.validate()?;
    req.options.validate()?;

    let out = solve_speed(req.power_w, &req.rider, &req.env, &req.options);
    to_json(&SpeedResponse {
        velocity_kmh: out.value,
        iterations: out.iterations,
        converged: out.converged,
    })
}
