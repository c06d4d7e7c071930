use uom::si::f64::{MassDensity, MassRate};

/// Properties and flow rate of one propellant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Propellant {
    /// Liquid (single-phase) density.
    pub density: MassDensity,

    /// Two-phase density at the injector exit.
    ///
    /// Only used by [`MixingVelocity::TwoPhaseEstimate`](super::MixingVelocity::TwoPhaseEstimate).
    pub two_phase_density: MassDensity,

    /// Mass flow rate through the injector.
    pub mass_flow: MassRate,
}
