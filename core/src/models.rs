use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, ConfigResult};

pub const DEFAULT_FRONTAL_AREA: f64 = 0.509; // m²
pub const DEFAULT_DRAG_COEF: f64 = 0.63;
pub const DEFAULT_DRIVETRAIN_LOSS: f64 = 0.02; // 2 %
pub const DEFAULT_CRR: f64 = 0.005;
pub const DEFAULT_RHO: f64 = 1.22601; // kg/m³

/// Flat, vindstille forhold ved havnivå. Brukes når ingen miljø er oppgitt.
pub const DEFAULT_ENV: EnvironmentConfig = EnvironmentConfig {
    gradient: 0.0,
    head_wind: 0.0,
    crr: DEFAULT_CRR,
    rho: DEFAULT_RHO,
};

fn default_frontal_area() -> f64 {
    DEFAULT_FRONTAL_AREA
}

fn default_drag_coef() -> f64 {
    DEFAULT_DRAG_COEF
}

fn default_drivetrain_loss() -> f64 {
    DEFAULT_DRIVETRAIN_LOSS
}

fn default_crr() -> f64 {
    DEFAULT_CRR
}

fn default_rho() -> f64 {
    DEFAULT_RHO
}

/// Rytter + sykkel.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RiderBikeConfig {
    #[serde(alias = "riderWeight")]
    pub rider_weight: f64, // kg
    #[serde(alias = "bikeWeight")]
    pub bike_weight: f64, // kg, inkl. utstyr
    #[serde(default = "default_frontal_area", alias = "frontalArea")]
    pub frontal_area: f64, // m²
    #[serde(default = "default_drag_coef", alias = "dragCoef")]
    pub drag_coef: f64,
    /// Andel tapt i drivverket (0.02 = 2 %).
    #[serde(default = "default_drivetrain_loss", alias = "drivetrainLoss")]
    pub drivetrain_loss: f64,
}

impl RiderBikeConfig {
    pub fn new(rider_weight: f64, bike_weight: f64) -> Self {
        Self {
            rider_weight,
            bike_weight,
            frontal_area: DEFAULT_FRONTAL_AREA,
            drag_coef: DEFAULT_DRAG_COEF,
            drivetrain_loss: DEFAULT_DRIVETRAIN_LOSS,
        }
    }

    /// Total masse (kg) = rytter + sykkel.
    #[inline]
    pub fn total_weight(&self) -> f64 {
        self.rider_weight + self.bike_weight
    }

    pub fn validate(&self) -> ConfigResult<()> {
        positive("rider_weight", self.rider_weight)?;
        positive("bike_weight", self.bike_weight)?;
        positive("frontal_area", self.frontal_area)?;
        positive("drag_coef", self.drag_coef)?;
        finite("drivetrain_loss", self.drivetrain_loss)?;
        if !(0.0..1.0).contains(&self.drivetrain_loss) {
            return Err(ConfigError::OutOfRange {
                field: "drivetrain_loss",
                value: self.drivetrain_loss,
                min: 0.0,
                max: 1.0,
            });
        }
        Ok(())
    }
}

/// Miljø: stigning, vind langs kursen, rullemotstand og lufttetthet.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EnvironmentConfig {
    /// Stigning som forhold (0.05 = 5 % opp, negativ = nedover).
    #[serde(default)]
    pub gradient: f64,
    /// km/h, positiv = motvind, negativ = medvind.
    #[serde(default, alias = "headWind", alias = "wind_speed_kmh")]
    pub head_wind: f64,
    #[serde(default = "default_crr")]
    pub crr: f64,
    #[serde(default = "default_rho", alias = "air_density")]
    pub rho: f64,
}

impl Default for EnvironmentConfig {
    fn default() -> Self {
        DEFAULT_ENV
    }
}

impl EnvironmentConfig {
    pub fn with_gradient(gradient: f64) -> Self {
        Self { gradient, ..DEFAULT_ENV }
    }

    pub fn validate(&self) -> ConfigResult<()> {
        finite("gradient", self.gradient)?;
        finite("head_wind", self.head_wind)?;
        finite("crr", self.crr)?;
        if self.crr < 0.0 {
            return Err(ConfigError::OutOfRange {
                field: "crr",
                value: self.crr,
                min: 0.0,
                max: f64::INFINITY,
            });
        }
        positive("rho", self.rho)
    }
}

fn finite(field: &'static str, value: f64) -> ConfigResult<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ConfigError::NonFinite { field })
    }
}

fn positive(field: &'static str, value: f64) -> ConfigResult<()> {
    finite(field, value)?;
    if value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::NonPositive { field, value })
    }
}
