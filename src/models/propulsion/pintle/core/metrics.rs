//! Derived performance metrics of a sized pintle injector.

use uom::si::f64::{Angle, Area, Force, Pressure, Ratio, Time, Velocity};

use super::{Rows, SizingError};

/// Every quantity derived from a [`Design`](super::Design).
///
/// Produced by [`size`](super::size) and never modified afterwards.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Metrics {
    /// Open area of each oxidizer slot row.
    pub slot_area: Rows<Area>,

    /// Total oxidizer slot area.
    pub oxidizer_area: Area,

    /// Fuel annulus area.
    pub fuel_area: Area,

    /// Fraction of the pintle tip circumference occupied by each slot row.
    pub blockage_factor: Rows<Ratio>,

    /// Share of the oxidizer flow (by area) leaving through the primary row.
    pub primary_flow_fraction: Ratio,

    /// Oxidizer exit velocity in each slot row.
    pub oxidizer_velocity: Rows<Velocity>,

    /// Fuel exit velocity.
    pub fuel_velocity: Velocity,

    /// Oxidizer momentum flux `ρ v² A` in each slot row.
    pub oxidizer_momentum_flux: Rows<Force>,

    /// Sum of the per-row oxidizer momentum fluxes.
    pub total_oxidizer_momentum_flux: Force,

    /// Fuel momentum flux `ρ v² A`.
    pub fuel_momentum_flux: Force,

    /// Total momentum ratio (TMR), fuel over oxidizer momentum flux.
    pub total_momentum_ratio: Ratio,

    /// Skip distance over pintle tip diameter, `Ls / Dp`.
    pub skip_distance_ratio: Ratio,

    /// Skip distance over fuel velocity, `Ls / v_f`.
    pub skip_time: Time,

    /// Theoretical atomization cone half-angle, `atan(√TMR)`.
    pub cone_half_angle: Angle,

    /// Velocity `a` used by the mixing coefficients.
    pub mixing_velocity: Velocity,

    /// Mixing coefficient `C` of each slot row.
    pub mixing_coefficient: Rows<Ratio>,

    /// Mixing parameter of each slot row.
    pub mixing_parameter: Rows<Ratio>,

    /// Oxidizer injector pressure drop.
    pub oxidizer_pressure_drop: Pressure,

    /// Fuel injector pressure drop.
    pub fuel_pressure_drop: Pressure,
}

impl Metrics {
    /// Checks that every metric is a finite number.
    ///
    /// # Errors
    ///
    /// Returns [`SizingError::NonFinite`] naming the first non-finite metric.
    pub(super) fn check_finite(&self) -> Result<(), SizingError> {
        let values = [
            self.slot_area.primary.value,
            self.slot_area.secondary.value,
            self.oxidizer_area.value,
            self.fuel_area.value,
            self.blockage_factor.primary.value,
            self.blockage_factor.secondary.value,
            self.primary_flow_fraction.value,
            self.oxidizer_velocity.primary.value,
            self.oxidizer_velocity.secondary.value,
            self.fuel_velocity.value,
            self.oxidizer_momentum_flux.primary.value,
            self.oxidizer_momentum_flux.secondary.value,
            self.total_oxidizer_momentum_flux.value,
            self.fuel_momentum_flux.value,
            self.total_momentum_ratio.value,
            self.skip_distance_ratio.value,
            self.skip_time.value,
            self.cone_half_angle.value,
            self.mixing_velocity.value,
            self.mixing_coefficient.primary.value,
            self.mixing_coefficient.secondary.value,
            self.mixing_parameter.primary.value,
            self.mixing_parameter.secondary.value,
            self.oxidizer_pressure_drop.value,
            self.fuel_pressure_drop.value,
        ];

        for (metric, value) in METRIC_NAMES.into_iter().zip(values) {
            if !value.is_finite() {
                return Err(SizingError::NonFinite { metric });
            }
        }

        Ok(())
    }
}

/// Metric names, in the order [`Metrics::check_finite`] visits them.
const METRIC_NAMES: [&str; 25] = [
    "primary slot area",
    "secondary slot area",
    "oxidizer area",
    "fuel area",
    "primary blockage factor",
    "secondary blockage factor",
    "primary flow fraction",
    "primary oxidizer velocity",
    "secondary oxidizer velocity",
    "fuel velocity",
    "primary oxidizer momentum flux",
    "secondary oxidizer momentum flux",
    "total oxidizer momentum flux",
    "fuel momentum flux",
    "total momentum ratio",
    "skip distance ratio",
    "skip time",
    "cone half-angle",
    "mixing velocity",
    "primary mixing coefficient",
    "secondary mixing coefficient",
    "primary mixing parameter",
    "secondary mixing parameter",
    "oxidizer pressure drop",
    "fuel pressure drop",
];
