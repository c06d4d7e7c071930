//! Pintle injector sizing model.
//!
//! [`PintleInjector`] is the [`twine_core::Model`] adapter; the formulas live
//! in the internal `core` module and are also reachable through [`size`].

pub(crate) mod core;

pub use self::core::{
    Design, Geometry, InjectorParameters, Metrics, MixingVelocity, Propellant, Rows, SizingError,
    SlotGeometry, SlotRow, size,
};

use twine_core::Model;

/// Sizes a pintle injector from its [`Design`].
///
/// The model is stateless, so one instance may be shared across threads and
/// called with any number of designs.
#[derive(Debug, Clone, Copy, Default)]
pub struct PintleInjector;

impl Model for PintleInjector {
    type Input = Design;
    type Output = Metrics;
    type Error = SizingError;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        size(input)
    }
}
