//! Settings files describing a pintle injector.
//!
//! A settings file is TOML with five tables. Keys are descriptive labels that
//! carry their unit, and are case-sensitive:
//!
//! ```toml
//! [General]
//! Name = "demo"
//!
//! [PintleDim]
//! "Pintle Tip Diameter Dp[mm]" = 10.0
//! "Skip Distance Ls[mm]" = 15.0
//! "Fuel channel Outer Diameter Dfo[mm]" = 14.0
//! "Oxidizer channel Inner Diameter Doi[mm]" = 8.0
//! "Primary Oxidizer slot height Lo1[mm]" = 1.0
//! "Primary Oxidizer slot Circumferential size deltao1[mm]" = 1.0
//! "Secondary Oxidizer slot height Lo2[mm]" = 1.0
//! "Secondary Oxidizer slot Circumferential size deltao2[mm]" = 1.0
//! "Number of Primary slots N1" = 12
//! "Number of Secondary slots N2" = 8
//! "Distance between Primary and Secondary Oxidizer slots Lo12[mm]" = 3.0
//!
//! [OxidizerProp]
//! "Oxidizer Density[kg/m3]" = 1141.0
//! "Oxidizer Two Phase Density[kg/m3]" = 900.0
//! "Oxidizer mass flow rate[kg/s]" = 0.1
//!
//! [FuelProp]
//! "Fuel Density[kg/m3]" = 800.0
//! "Fuel Two Phase Density[kg/m3]" = 600.0
//! "Fuel mass flow rate[kg/s]" = 0.05
//!
//! [InjectorParam]
//! "Oxidizer injector Cd" = 0.7
//! "Fuel injector Cd" = 0.65
//! "Velocity a for FMR[m/s]" = 200.0
//! ```
//!
//! `"Velocity a for FMR[m/s]"` may also be the string `"two-phase"`, which
//! selects [`MixingVelocity::TwoPhaseEstimate`].
//!
//! Slot counts may be written as `12` or `12.0`, but must be whole numbers.
//!
//! Lengths are written in millimeters; [`Settings::design`] is the only place
//! they are turned into [`Length`] quantities.

use std::{
    fs, io,
    path::{Path, PathBuf},
    str::FromStr,
};

use serde::Deserialize;
use serde::de::{self, Deserializer, Unexpected};
use thiserror::Error;
use tracing::info;
use uom::si::{
    f64::{Length, MassDensity, MassRate, Velocity},
    length::millimeter,
    mass_density::kilogram_per_cubic_meter,
    mass_rate::kilogram_per_second,
    velocity::meter_per_second,
};

use crate::models::propulsion::pintle::{
    Design, Geometry, InjectorParameters, MixingVelocity, Propellant, Rows, SlotGeometry,
};

/// Settings file read when no path is given.
pub const DEFAULT_SETTINGS_FILE: &str = "setting.toml";

/// Errors that can occur while loading a settings file.
#[derive(Debug, Error)]
pub enum SettingsError {
    /// The settings file does not exist.
    #[error("settings file {} does not exist", .path.display())]
    NotFound { path: PathBuf },

    /// The settings file exists but could not be read.
    #[error("failed to read settings file {}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A table or key is missing, or a value has the wrong type.
    #[error("invalid settings in {}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// The contents of a settings file, with values in the units they were written in.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Settings {
    #[serde(rename = "General")]
    pub general: General,

    #[serde(rename = "PintleDim")]
    pub dimensions: PintleDimensions,

    #[serde(rename = "OxidizerProp")]
    pub oxidizer: OxidizerProperties,

    #[serde(rename = "FuelProp")]
    pub fuel: FuelProperties,

    #[serde(rename = "InjectorParam")]
    pub injector: InjectorSettings,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct General {
    #[serde(rename = "Name")]
    pub name: String,
}

/// Pintle dimensions in millimeters, plus slot counts.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PintleDimensions {
    #[serde(rename = "Pintle Tip Diameter Dp[mm]")]
    pub pintle_tip_diameter: f64,

    #[serde(rename = "Skip Distance Ls[mm]")]
    pub skip_distance: f64,

    #[serde(rename = "Fuel channel Outer Diameter Dfo[mm]")]
    pub fuel_channel_outer_diameter: f64,

    #[serde(rename = "Oxidizer channel Inner Diameter Doi[mm]")]
    pub oxidizer_channel_inner_diameter: f64,

    #[serde(rename = "Primary Oxidizer slot height Lo1[mm]")]
    pub primary_slot_height: f64,

    #[serde(rename = "Primary Oxidizer slot Circumferential size deltao1[mm]")]
    pub primary_slot_width: f64,

    #[serde(rename = "Secondary Oxidizer slot height Lo2[mm]")]
    pub secondary_slot_height: f64,

    #[serde(rename = "Secondary Oxidizer slot Circumferential size deltao2[mm]")]
    pub secondary_slot_width: f64,

    #[serde(rename = "Number of Primary slots N1", deserialize_with = "slot_count")]
    pub primary_slot_count: u32,

    #[serde(rename = "Number of Secondary slots N2", deserialize_with = "slot_count")]
    pub secondary_slot_count: u32,

    #[serde(rename = "Distance between Primary and Secondary Oxidizer slots Lo12[mm]")]
    pub row_spacing: f64,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct OxidizerProperties {
    #[serde(rename = "Oxidizer Density[kg/m3]")]
    pub density: f64,

    #[serde(rename = "Oxidizer Two Phase Density[kg/m3]")]
    pub two_phase_density: f64,

    #[serde(rename = "Oxidizer mass flow rate[kg/s]")]
    pub mass_flow: f64,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct FuelProperties {
    #[serde(rename = "Fuel Density[kg/m3]")]
    pub density: f64,

    #[serde(rename = "Fuel Two Phase Density[kg/m3]")]
    pub two_phase_density: f64,

    #[serde(rename = "Fuel mass flow rate[kg/s]")]
    pub mass_flow: f64,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct InjectorSettings {
    #[serde(rename = "Oxidizer injector Cd")]
    pub oxidizer_discharge_coefficient: f64,

    #[serde(rename = "Fuel injector Cd")]
    pub fuel_discharge_coefficient: f64,

    #[serde(rename = "Velocity a for FMR[m/s]")]
    pub mixing_velocity: MixingVelocitySetting,
}

/// Either a fixed mixing velocity in m/s or the name of an estimate.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum MixingVelocitySetting {
    MetersPerSecond(f64),
    Estimate(MixingEstimate),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MixingEstimate {
    TwoPhase,
}

impl FromStr for Settings {
    type Err = toml::de::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        toml::from_str(s)
    }
}

impl Settings {
    /// Reads and parses a settings file.
    ///
    /// # Errors
    ///
    /// Returns a [`SettingsError`] if the file does not exist, cannot be read,
    /// or is missing a key or has a value of the wrong type.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let path = path.as_ref();

        let contents = fs::read_to_string(path).map_err(|source| {
            if source.kind() == io::ErrorKind::NotFound {
                SettingsError::NotFound {
                    path: path.to_path_buf(),
                }
            } else {
                SettingsError::Read {
                    path: path.to_path_buf(),
                    source,
                }
            }
        })?;

        let settings: Self = contents.parse().map_err(|source| SettingsError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

        info!(path = %path.display(), name = %settings.general.name, "loaded pintle settings");
        Ok(settings)
    }

    /// Converts the settings into a [`Design`] with SI quantities.
    ///
    /// No physical validation happens here; that is left to sizing.
    #[must_use]
    pub fn design(&self) -> Design {
        let dims = &self.dimensions;

        Design {
            name: self.general.name.clone(),
            geometry: Geometry {
                pintle_tip_diameter: mm(dims.pintle_tip_diameter),
                skip_distance: mm(dims.skip_distance),
                fuel_channel_outer_diameter: mm(dims.fuel_channel_outer_diameter),
                oxidizer_channel_inner_diameter: mm(dims.oxidizer_channel_inner_diameter),
                slots: Rows::new(
                    SlotGeometry {
                        height: mm(dims.primary_slot_height),
                        width: mm(dims.primary_slot_width),
                        count: dims.primary_slot_count,
                    },
                    SlotGeometry {
                        height: mm(dims.secondary_slot_height),
                        width: mm(dims.secondary_slot_width),
                        count: dims.secondary_slot_count,
                    },
                ),
                row_spacing: mm(dims.row_spacing),
            },
            oxidizer: propellant(
                self.oxidizer.density,
                self.oxidizer.two_phase_density,
                self.oxidizer.mass_flow,
            ),
            fuel: propellant(
                self.fuel.density,
                self.fuel.two_phase_density,
                self.fuel.mass_flow,
            ),
            injector: InjectorParameters {
                oxidizer_discharge_coefficient: self.injector.oxidizer_discharge_coefficient,
                fuel_discharge_coefficient: self.injector.fuel_discharge_coefficient,
                mixing_velocity: match self.injector.mixing_velocity {
                    MixingVelocitySetting::MetersPerSecond(a) => {
                        MixingVelocity::Given(Velocity::new::<meter_per_second>(a))
                    }
                    MixingVelocitySetting::Estimate(MixingEstimate::TwoPhase) => {
                        MixingVelocity::TwoPhaseEstimate
                    }
                },
            },
        }
    }
}

/// Reads a slot count written either as an integer or as a whole float.
fn slot_count<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Count {
        Integer(u32),
        Float(f64),
    }

    let count = match Count::deserialize(deserializer)? {
        Count::Integer(count) => return Ok(count),
        Count::Float(count) => count,
    };

    if count.fract() == 0.0 && (0.0..=f64::from(u32::MAX)).contains(&count) {
        Ok(count as u32)
    } else {
        let unexpected = Unexpected::Float(count);
        Err(de::Error::invalid_value(unexpected, &"a whole slot count"))
    }
}

fn mm(value: f64) -> Length {
    Length::new::<millimeter>(value)
}

fn propellant(density: f64, two_phase_density: f64, mass_flow: f64) -> Propellant {
    Propellant {
        density: MassDensity::new::<kilogram_per_cubic_meter>(density),
        two_phase_density: MassDensity::new::<kilogram_per_cubic_meter>(two_phase_density),
        mass_flow: MassRate::new::<kilogram_per_second>(mass_flow),
    }
}
