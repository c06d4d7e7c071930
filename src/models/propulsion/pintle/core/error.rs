use thiserror::Error;

use crate::support::constraint::ConstraintError;

use super::SlotRow;

/// Errors that make a design impossible to size.
///
/// A design that produces one of these errors parsed correctly but is
/// physically inconsistent: some formula would divide by zero, take the
/// square root of a negative number, or otherwise yield a non-finite result.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SizingError {
    /// An input value violates its numeric constraint.
    #[error("invalid {field}: {source}")]
    InvalidInput {
        /// Human-readable name of the offending input.
        field: String,

        /// The violated constraint.
        source: ConstraintError,
    },

    /// A slot row has no slots, so its area and velocity are undefined.
    #[error("{row} oxidizer row has no slots")]
    NoSlots { row: SlotRow },

    /// A slot row's blockage factor is one or greater.
    ///
    /// At one the slots occupy the whole pintle circumference and the mixing
    /// coefficient `BLF / (1 − BLF)` diverges.
    #[error("{row} blockage factor {blockage:.3} must be less than one")]
    Blockage { row: SlotRow, blockage: f64 },

    /// The fuel channel does not enclose the pintle tip, leaving no annulus.
    #[error(
        "fuel channel outer diameter ({outer_mm} mm) must exceed pintle tip diameter ({tip_mm} mm)"
    )]
    ClosedFuelAnnulus { outer_mm: f64, tip_mm: f64 },

    /// A derived metric overflowed or became undefined.
    #[error("{metric} is not finite")]
    NonFinite { metric: &'static str },
}

impl SizingError {
    /// Creates an invalid input error for `field`.
    pub(super) fn invalid(field: impl Into<String>, source: ConstraintError) -> Self {
        Self::InvalidInput {
            field: field.into(),
            source,
        }
    }
}
