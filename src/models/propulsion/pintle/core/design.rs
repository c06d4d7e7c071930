//! Input types describing a pintle injector design.
//!
//! Every dimensional field is a [`uom`] quantity, so the millimeter values an
//! engineer writes in a settings file are converted exactly once, when the
//! quantity is constructed.
//! Fields are public: a caller may load a design, adjust a dimension, and
//! size it again without going back to the settings file.

mod geometry;
mod injector;
mod propellant;

pub use geometry::{Geometry, SlotGeometry};
pub use injector::{InjectorParameters, MixingVelocity};
pub use propellant::Propellant;

/// A complete pintle injector design ready for sizing.
#[derive(Debug, Clone, PartialEq)]
pub struct Design {
    /// Injector name, carried through to reports.
    pub name: String,

    /// Pintle and slot geometry.
    pub geometry: Geometry,

    /// Oxidizer properties and flow rate (exits through the slots).
    pub oxidizer: Propellant,

    /// Fuel properties and flow rate (exits through the annulus).
    pub fuel: Propellant,

    /// Discharge coefficients and the mixing velocity.
    pub injector: InjectorParameters,
}
