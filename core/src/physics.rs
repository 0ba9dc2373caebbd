// core/src/physics.rs
use serde::{Deserialize, Serialize};

use crate::models::{EnvironmentConfig, RiderBikeConfig, DEFAULT_ENV};

pub const G: f64 = 9.8067; // gravitasjon (m/s²)
pub const KMH_PER_MS: f64 = 3600.0 / 1000.0;

#[inline]
pub fn kmh_to_ms(v_kmh: f64) -> f64 {
    v_kmh / KMH_PER_MS
}

/// Fortegn med sign(0) = 0 (f64::signum gir ±1 for ±0).
/// ±0 og NaN videreføres uendret.
#[inline]
fn sign(x: f64) -> f64 {
    if x > 0.0 {
        1.0
    } else if x < 0.0 {
        -1.0
    } else {
        x
    }
}

/// Krefter på systemet (N). Positiv = motvirker bevegelse fremover.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ForceResult {
    pub gravity: f64,
    pub rolling: f64,
    pub drag: f64,
}

impl ForceResult {
    #[inline]
    pub fn total(&self) -> f64 {
        self.gravity + self.rolling + self.drag
    }
}

/// Effektfordeling (W).
///
/// `leg` er effekten rytteren må levere på pedalene, `wheel` er netto effekt
/// mot bakke/luft. Enten `drivetrain_loss` (tråkker) eller `braking` (bremser)
/// er null, aldri begge.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PowerResult {
    pub leg: f64,
    pub wheel: f64,
    pub drivetrain_loss: f64,
    pub braking: f64,
    pub gravity: f64,
    pub rolling: f64,
    pub drag: f64,
}

/// Krefter ved gitt fart (km/h, kan være negativ).
pub fn calculate_forces(
    velocity_kmh: f64,
    rider: &RiderBikeConfig,
    env: &EnvironmentConfig,
) -> ForceResult {
    // stigning er et forhold (rise/run), ikke en vinkel
    let angle = env.gradient.atan();
    let weight = rider.total_weight();

    let gravity = G * weight * angle.sin();
    let rolling = G * weight * angle.cos() * env.crr * sign(velocity_kmh);

    // motvind legges direkte til farten langs kursen
    let air_kmh = velocity_kmh + env.head_wind;
    let air_ms = kmh_to_ms(air_kmh);
    let drag_strength = rider.frontal_area * rider.drag_coef * env.rho;
    let drag = 0.5 * drag_strength * air_ms * air_ms * sign(air_kmh);

    ForceResult { gravity, rolling, drag }
}

/// Effekt ved gitt fart. Drivverkstap gjelder kun når hjulet krever positiv effekt.
pub fn calculate_power(
    velocity_kmh: f64,
    rider: &RiderBikeConfig,
    env: &EnvironmentConfig,
) -> PowerResult {
    let forces = calculate_forces(velocity_kmh, rider, env);
    let v_ms = kmh_to_ms(velocity_kmh);

    let wheel = forces.total() * v_ms;
    let drivetrain_fraction = if wheel > 0.0 { 1.0 - rider.drivetrain_loss } else { 1.0 };
    let leg = wheel / drivetrain_fraction;

    let (drivetrain_loss, braking) = if leg > 0.0 {
        (leg - wheel, 0.0)
    } else {
        (0.0, -leg)
    };

    PowerResult {
        leg,
        wheel,
        drivetrain_loss,
        braking,
        gravity: forces.gravity * v_ms,
        rolling: forces.rolling * v_ms,
        drag: forces.drag * v_ms,
    }
}

/// Kalkulator bundet til én rytter/sykkel. `None` som miljø gir [`DEFAULT_ENV`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PowerCalculator {
    rider: RiderBikeConfig,
}

impl PowerCalculator {
    pub fn new(rider: RiderBikeConfig) -> Self {
        Self { rider }
    }

    pub fn rider(&self) -> &RiderBikeConfig {
        &self.rider
    }

    pub fn calculate_forces(&self, velocity_kmh: f64, env: Option<&EnvironmentConfig>) -> ForceResult {
        calculate_forces(velocity_kmh, &self.rider, env.unwrap_or(&DEFAULT_ENV))
    }

    pub fn calculate_power(&self, velocity_kmh: f64, env: Option<&EnvironmentConfig>) -> PowerResult {
        calculate_power(velocity_kmh, &self.rider, env.unwrap_or(&DEFAULT_ENV))
    }

    pub fn calculate_speed(&self, power_w: f64, env: Option<&EnvironmentConfig>) -> f64 {
        crate::solver::calculate_speed(power_w, &self.rider, env.unwrap_or(&DEFAULT_ENV))
    }
}
