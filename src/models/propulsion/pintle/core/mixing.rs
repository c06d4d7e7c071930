//! Empirical mixing coefficients and mixing parameters.
//!
//! The mixing parameter of a slot row compares the fuel sheet's momentum,
//! acting over the annulus gap and an effective slot opening widened by the
//! mixing coefficient, against the oxidizer jet momentum through that row.

use std::f64::consts::PI;

use uom::si::{
    f64::{Length, MassDensity, Ratio, Velocity},
    ratio::ratio,
};

use super::{Design, MixingVelocity, SlotGeometry};

/// Resolves the velocity `a` used by the mixing coefficients.
pub(super) fn velocity(
    design: &Design,
    fuel_velocity: Velocity,
    primary_oxidizer_velocity: Velocity,
) -> Velocity {
    match design.injector.mixing_velocity {
        MixingVelocity::Given(a) => a,
        MixingVelocity::TwoPhaseEstimate => {
            let fuel = &design.fuel;
            let oxidizer = &design.oxidizer;
            let fuel_expansion: Ratio = fuel.density / fuel.two_phase_density;
            let oxidizer_expansion: Ratio = oxidizer.density / oxidizer.two_phase_density;

            let fuel_share = fuel_velocity * fuel.mass_flow * fuel_expansion.get::<ratio>();
            let oxidizer_share =
                primary_oxidizer_velocity * oxidizer.mass_flow * oxidizer_expansion.get::<ratio>();

            (fuel_share + oxidizer_share) / (fuel.mass_flow + oxidizer.mass_flow)
        }
    }
}

/// Mixing coefficient of one slot row,
/// `C = (Lo / v_f) · a / (π · Dp) · BLF / (1 − BLF)`.
///
/// `blockage` must lie in `[0, 1)`.
pub(super) fn coefficient(
    slot: &SlotGeometry,
    blockage: Ratio,
    fuel_velocity: Velocity,
    mixing_velocity: Velocity,
    pintle_tip_diameter: Length,
) -> Ratio {
    let blf = blockage.get::<ratio>();
    let residence = slot.height / fuel_velocity;
    residence * mixing_velocity / (pintle_tip_diameter * PI) * (blf / (1.0 - blf))
}

/// Fuel and oxidizer conditions seen by one slot row.
pub(super) struct RowFlow {
    pub(super) fuel_density: MassDensity,
    pub(super) fuel_velocity: Velocity,
    pub(super) annulus_gap: Length,
    pub(super) oxidizer_density: MassDensity,
    pub(super) oxidizer_velocity: Velocity,
}

/// Mixing parameter of one slot row,
/// `ρ_f v_f² · gap · (δo + 2 C Lo) / (ρ_o v_o² · δo · Lo)`.
pub(super) fn parameter(slot: &SlotGeometry, coefficient: Ratio, flow: &RowFlow) -> Ratio {
    let effective_opening = slot.width + slot.height * (2.0 * coefficient.get::<ratio>());

    let fuel_side = flow.fuel_density
        * flow.fuel_velocity
        * flow.fuel_velocity
        * flow.annulus_gap
        * effective_opening;
    let oxidizer_side = flow.oxidizer_density
        * flow.oxidizer_velocity
        * flow.oxidizer_velocity
        * slot.width
        * slot.height;

    fuel_side / oxidizer_side
}
