use uom::si::f64::Velocity;

/// Source of the empirical velocity `a` used by the mixing coefficients.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MixingVelocity {
    /// A fixed value, typically chosen from the 184–242 m/s range.
    Given(Velocity),

    /// Mass-weighted exit velocity with each stream scaled by its
    /// liquid-to-two-phase density ratio:
    ///
    /// `a = (v_f · ρ_f/ρ_gf · ṁ_f + v_o1 · ρ_o/ρ_go · ṁ_o) / (ṁ_f + ṁ_o)`
    TwoPhaseEstimate,
}

/// Injector coefficients.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InjectorParameters {
    /// Discharge coefficient of the oxidizer slots.
    pub oxidizer_discharge_coefficient: f64,

    /// Discharge coefficient of the fuel annulus.
    pub fuel_discharge_coefficient: f64,

    /// Velocity `a` for the mixing coefficients.
    pub mixing_velocity: MixingVelocity,
}
