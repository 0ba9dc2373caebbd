//! Flate inngangspunkter (kun tall inn/ut), for regneark-lignende kallere.

use crate::error::ConfigResult;
use crate::models::{EnvironmentConfig, RiderBikeConfig};
use crate::physics::calculate_power;
use crate::solver::calculate_speed;

#[allow(clippy::too_many_arguments)]
fn build_configs(
    gradient: f64,
    rider_weight: f64,
    bike_weight: f64,
    frontal_area: f64,
    drag_coef: f64,
    drivetrain_loss: f64,
    air_density: f64,
    wind_speed_kmh: f64,
    rolling_resistance_coef: f64,
) -> (RiderBikeConfig, EnvironmentConfig) {
    let rider = RiderBikeConfig {
        rider_weight,
        bike_weight,
        frontal_area,
        drag_coef,
        drivetrain_loss,
    };
    let env = EnvironmentConfig {
        gradient,
        head_wind: wind_speed_kmh,
        crr: rolling_resistance_coef,
        rho: air_density,
    };
    (rider, env)
}

fn validated(
    configs: (RiderBikeConfig, EnvironmentConfig),
) -> ConfigResult<(RiderBikeConfig, EnvironmentConfig)> {
    configs.0.validate()?;
    configs.1.validate()?;
    Ok(configs)
}

/// Pedaleffekt (W) ved gitt fart (km/h). Ingen validering.
#[allow(clippy::too_many_arguments)]
pub fn compute_power_from_speed(
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
) -> f64 {
    let (rider, env) = build_configs(
        gradient,
        rider_weight,
        bike_weight,
        frontal_area,
        drag_coef,
        drivetrain_loss,
        air_density,
        wind_speed_kmh,
        rolling_resistance_coef,
    );
    calculate_power(velocity_kmh, &rider, &env).leg
}

/// Estimert fart (km/h) ved gitt pedaleffekt (W). Ingen validering.
#[allow(clippy::too_many_arguments)]
pub fn compute_speed_from_power(
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
) -> f64 {
    let (rider, env) = build_configs(
        gradient,
        rider_weight,
        bike_weight,
        frontal_area,
        drag_coef,
        drivetrain_loss,
        air_density,
        wind_speed_kmh,
        rolling_resistance_coef,
    );
    calculate_speed(power_w, &rider, &env)
}

/// Som [`compute_power_from_speed`], men avviser ugyldig konfig.
#[allow(clippy::too_many_arguments)]
pub fn try_compute_power_from_speed(
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
) -> ConfigResult<f64> {
    let (rider, env) = validated(build_configs(
        gradient,
        rider_weight,
        bike_weight,
        frontal_area,
        drag_coef,
        drivetrain_loss,
        air_density,
        wind_speed_kmh,
        rolling_resistance_coef,
    ))?;
    Ok(calculate_power(velocity_kmh, &rider, &env).leg)
}

/// Som [`compute_speed_from_power`], men avviser ugyldig konfig.
#[allow(clippy::too_many_arguments)]
pub fn try_compute_speed_from_power(
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
) -> ConfigResult<f64> {
    let (rider, env) = validated(build_configs(
        gradient,
        rider_weight,
        bike_weight,
        frontal_area,
        drag_coef,
        drivetrain_loss,
        air_density,
        wind_speed_kmh,
        rolling_resistance_coef,
    ))?;
    Ok(calculate_speed(power_w, &rider, &env))
}
