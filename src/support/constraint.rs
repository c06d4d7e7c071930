//! Type-level numeric constraints for sizing inputs and intermediate results.
//!
//! Injector sizing is closed-form arithmetic, so the only ways it can go wrong
//! are physically meaningless inputs (a zero density, a negative flow rate) or
//! geometry that makes a formula singular (a blockage factor of one).
//! The types here turn those conditions into ordinary errors at the point a
//! value is first used, instead of letting `inf` or `NaN` leak into results.
//!
//! # Provided constraints
//!
//! - [`StrictlyPositive`]: Greater than zero
//! - [`UnitIntervalUpperOpen`]: Upper-open unit interval `0 ≤ x < 1`
//!
//! Each marker is used with the generic [`Constrained<T, C>`] wrapper,
//! where `C` is the marker type implementing [`Constraint<T>`].
//!
//! # Extending
//!
//! Other invariants can be expressed by implementing [`Constraint<T>`]
//! for a new zero-sized marker type.

mod strictly_positive;
mod unit_interval;

use std::marker::PhantomData;

use thiserror::Error;

pub use strictly_positive::StrictlyPositive;
pub use unit_interval::{UnitBounds, UnitIntervalUpperOpen};

/// A numeric invariant checked once, when a [`Constrained`] value is built.
pub trait Constraint<T> {
    /// Accepts or rejects `value`.
    ///
    /// # Errors
    ///
    /// Returns the [`ConstraintError`] describing how `value` falls outside
    /// the allowed range.
    fn check(value: &T) -> Result<(), ConstraintError>;
}

/// Why a value was rejected by a [`Constraint`].
///
/// Sizing errors wrap this together with the name of the offending input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ConstraintError {
    #[error("value must not be negative")]
    Negative,
    #[error("value must not be zero")]
    Zero,
    #[error("value is not a number")]
    NotANumber,
    #[error("value is below the minimum allowed")]
    BelowMinimum,
    #[error("value is above the maximum allowed")]
    AboveMaximum,
}

/// A value known to satisfy the constraint `C`.
///
/// # Example
///
/// ```
/// use pintle_models::support::constraint::{Constrained, StrictlyPositive};
/// use uom::si::{f64::MassDensity, mass_density::kilogram_per_cubic_meter};
///
/// let rho = MassDensity::new::<kilogram_per_cubic_meter>(1141.0);
/// let rho = Constrained::<_, StrictlyPositive>::new(rho).unwrap();
/// assert_eq!(rho.into_inner().get::<kilogram_per_cubic_meter>(), 1141.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Constrained<T, C: Constraint<T>> {
    value: T,
    _marker: PhantomData<C>,
}

impl<T, C: Constraint<T>> Constrained<T, C> {
    /// Checks `value` against `C` and wraps it.
    ///
    /// # Errors
    ///
    /// Returns the violation reported by `C`.
    pub fn new(value: T) -> Result<Self, ConstraintError> {
        C::check(&value)?;
        Ok(Self {
            value,
            _marker: PhantomData,
        })
    }

    /// Unwraps the checked value.
    pub fn into_inner(self) -> T {
        self.value
    }
}

impl<T, C: Constraint<T>> AsRef<T> for Constrained<T, C> {
    fn as_ref(&self) -> &T {
        &self.value
    }
}
