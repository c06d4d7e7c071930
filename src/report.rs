//! Plain-text reports of sized injectors.
//!
//! [`Report`] implements [`Display`](fmt::Display), so the same rendering can
//! go to the console and to a file.

use std::{fmt, fs, io, path::Path};

use uom::si::{
    angle::degree, pressure::megapascal, ratio::ratio, time::second, velocity::meter_per_second,
};

use crate::models::propulsion::pintle::Metrics;

/// Report file written next to the working directory when no path is given.
pub const DEFAULT_REPORT_FILE: &str = "PintleParams.out";

const LABEL_WIDTH: usize = 44;

/// A labeled, fixed-precision rendering of [`Metrics`].
#[derive(Debug, Clone, Copy)]
pub struct Report<'a> {
    name: &'a str,
    metrics: &'a Metrics,
}

impl<'a> Report<'a> {
    #[must_use]
    pub fn new(name: &'a str, metrics: &'a Metrics) -> Self {
        Self { name, metrics }
    }

    /// Writes the report to `path`, replacing any existing file.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the file cannot be written.
    pub fn write_to_file(&self, path: impl AsRef<Path>) -> io::Result<()> {
        fs::write(path, self.to_string())
    }
}

fn line(f: &mut fmt::Formatter<'_>, label: &str, value: f64, precision: usize) -> fmt::Result {
    writeln!(f, "{label:<LABEL_WIDTH$}{value:.precision$}")
}

impl fmt::Display for Report<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let m = self.metrics;

        writeln!(f, "Injector: {}", self.name)?;
        writeln!(f)?;

        line(
            f,
            "TMR (Total Momentum Ratio):",
            m.total_momentum_ratio.get::<ratio>(),
            2,
        )?;
        line(
            f,
            "Primary slot flow ratio:",
            m.primary_flow_fraction.get::<ratio>(),
            2,
        )?;
        line(
            f,
            "Oxidizer outlet velocity vo1 [m/s]:",
            m.oxidizer_velocity.primary.get::<meter_per_second>(),
            1,
        )?;
        line(
            f,
            "Oxidizer outlet velocity vo2 [m/s]:",
            m.oxidizer_velocity.secondary.get::<meter_per_second>(),
            1,
        )?;
        line(
            f,
            "Fuel outlet velocity vf [m/s]:",
            m.fuel_velocity.get::<meter_per_second>(),
            1,
        )?;
        writeln!(f)?;

        line(
            f,
            "Non-dimensional skip distance Ls/Dp:",
            m.skip_distance_ratio.get::<ratio>(),
            2,
        )?;
        line(
            f,
            "Normalized skip distance Ls/vf [s]:",
            m.skip_time.get::<second>(),
            5,
        )?;
        line(
            f,
            "Theoretical atomizing cone angle [deg]:",
            m.cone_half_angle.get::<degree>(),
            2,
        )?;
        writeln!(f)?;

        line(
            f,
            "Primary slot blockage factor:",
            m.blockage_factor.primary.get::<ratio>(),
            2,
        )?;
        line(
            f,
            "Secondary slot blockage factor:",
            m.blockage_factor.secondary.get::<ratio>(),
            2,
        )?;
        line(
            f,
            "Fuel injector delta p [MPa]:",
            m.fuel_pressure_drop.get::<megapascal>(),
            2,
        )?;
        line(
            f,
            "Oxidizer injector delta p [MPa]:",
            m.oxidizer_pressure_drop.get::<megapascal>(),
            2,
        )?;
        writeln!(f)?;

        line(
            f,
            "Mixing velocity a [m/s]:",
            m.mixing_velocity.get::<meter_per_second>(),
            1,
        )?;
        line(
            f,
            "Primary mixing parameter:",
            m.mixing_parameter.primary.get::<ratio>(),
            2,
        )?;
        line(
            f,
            "Secondary mixing parameter:",
            m.mixing_parameter.secondary.get::<ratio>(),
            2,
        )?;
        line(
            f,
            "Primary mixing coefficient C1:",
            m.mixing_coefficient.primary.get::<ratio>(),
            2,
        )?;
        line(
            f,
            "Secondary mixing coefficient C2:",
            m.mixing_coefficient.secondary.get::<ratio>(),
            2,
        )
    }
}
