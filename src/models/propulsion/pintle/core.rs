//! Closed-form sizing of a two-row pintle injector.
//!
//! Oxidizer leaves radially through two rows of rectangular slots cut into
//! the pintle tip. Fuel leaves axially through the annulus between the tip
//! and the fuel channel and is turned by the oxidizer jets. Sizing evaluates
//! a fixed chain of areas, velocities, momentum fluxes, and pressure drops;
//! there is no iteration.

mod design;
mod error;
mod metrics;
mod mixing;
mod rows;

#[cfg(test)]
pub(crate) mod test_support;

pub use design::{Design, Geometry, InjectorParameters, MixingVelocity, Propellant, SlotGeometry};
pub use error::SizingError;
pub use metrics::Metrics;
pub use rows::{Rows, SlotRow};

use tracing::{debug, warn};
use uom::si::{
    angle::{degree, radian},
    f64::{Angle, Area, Force, MassDensity, MassRate, Pressure, Ratio, Velocity},
    length::millimeter,
    pressure::megapascal,
    ratio::ratio,
};

use crate::support::constraint::{Constrained, StrictlyPositive, UnitIntervalUpperOpen};

use mixing::RowFlow;

/// Sizes a pintle injector design.
///
/// Lengths, densities, flow rates, and coefficients are validated first;
/// then every metric is computed in dependency order. The result is either
/// fully populated or an error.
///
/// # Errors
///
/// Returns a [`SizingError`] if the design is physically inconsistent.
pub fn size(design: &Design) -> Result<Metrics, SizingError> {
    compute(design).inspect_err(|error| {
        warn!(name = %design.name, %error, "pintle design rejected");
    })
}

fn compute(design: &Design) -> Result<Metrics, SizingError> {
    validate(design)?;

    let geometry = &design.geometry;
    let oxidizer = &design.oxidizer;
    let fuel = &design.fuel;
    let dp = geometry.pintle_tip_diameter;

    let slot_area = geometry.slots.map(|_, slot| slot.open_area());
    let oxidizer_area = slot_area.primary + slot_area.secondary;
    let fuel_area = geometry.fuel_annulus_area();

    let blockage_factor = geometry.slots.try_map(|row, slot| {
        let blockage = slot.blockage_factor(dp);
        UnitIntervalUpperOpen::new(blockage)
            .map(Constrained::into_inner)
            .map_err(|_| SizingError::Blockage {
                row,
                blockage: blockage.get::<ratio>(),
            })
    })?;

    let primary_flow_fraction: Ratio = slot_area.primary / oxidizer_area;
    let flow_fraction = Rows::new(
        primary_flow_fraction,
        Ratio::new::<ratio>(1.0) - primary_flow_fraction,
    );

    let oxidizer_velocity = flow_fraction.zip(slot_area).map(|_, (fraction, area)| {
        exit_velocity(
            oxidizer.mass_flow * fraction.get::<ratio>(),
            oxidizer.density,
            area,
        )
    });
    let fuel_velocity = exit_velocity(fuel.mass_flow, fuel.density, fuel_area);

    let oxidizer_momentum_flux = oxidizer_velocity
        .zip(slot_area)
        .map(|_, (velocity, area)| momentum_flux(oxidizer.density, velocity, area));
    let total_oxidizer_momentum_flux =
        oxidizer_momentum_flux.primary + oxidizer_momentum_flux.secondary;
    let fuel_momentum_flux = momentum_flux(fuel.density, fuel_velocity, fuel_area);

    let total_momentum_ratio: Ratio = fuel_momentum_flux / total_oxidizer_momentum_flux;

    let skip_distance_ratio: Ratio = geometry.skip_distance / dp;
    let skip_time = geometry.skip_distance / fuel_velocity;

    let cone_half_angle = Angle::new::<radian>(total_momentum_ratio.get::<ratio>().sqrt().atan());

    let mixing_velocity = mixing::velocity(design, fuel_velocity, oxidizer_velocity.primary);
    let mixing_coefficient = geometry
        .slots
        .zip(blockage_factor)
        .map(|_, (slot, blockage)| {
            mixing::coefficient(&slot, blockage, fuel_velocity, mixing_velocity, dp)
        });
    let mixing_parameter = geometry
        .slots
        .zip(mixing_coefficient)
        .zip(oxidizer_velocity)
        .map(|_, ((slot, coefficient), oxidizer_velocity)| {
            let flow = RowFlow {
                fuel_density: fuel.density,
                fuel_velocity,
                annulus_gap: geometry.fuel_annulus_gap(),
                oxidizer_density: oxidizer.density,
                oxidizer_velocity,
            };
            mixing::parameter(&slot, coefficient, &flow)
        });

    let oxidizer_pressure_drop = pressure_drop(
        oxidizer.mass_flow,
        oxidizer.density,
        oxidizer_area,
        design.injector.oxidizer_discharge_coefficient,
    );
    let fuel_pressure_drop = pressure_drop(
        fuel.mass_flow,
        fuel.density,
        fuel_area,
        design.injector.fuel_discharge_coefficient,
    );

    let metrics = Metrics {
        slot_area,
        oxidizer_area,
        fuel_area,
        blockage_factor,
        primary_flow_fraction,
        oxidizer_velocity,
        fuel_velocity,
        oxidizer_momentum_flux,
        total_oxidizer_momentum_flux,
        fuel_momentum_flux,
        total_momentum_ratio,
        skip_distance_ratio,
        skip_time,
        cone_half_angle,
        mixing_velocity,
        mixing_coefficient,
        mixing_parameter,
        oxidizer_pressure_drop,
        fuel_pressure_drop,
    };
    metrics.check_finite()?;

    debug!(
        name = %design.name,
        tmr = total_momentum_ratio.get::<ratio>(),
        cone_half_angle_deg = cone_half_angle.get::<degree>(),
        oxidizer_dp_mpa = oxidizer_pressure_drop.get::<megapascal>(),
        fuel_dp_mpa = fuel_pressure_drop.get::<megapascal>(),
        "pintle design sized"
    );

    Ok(metrics)
}

/// Checks every raw input before any formula uses it.
fn validate(design: &Design) -> Result<(), SizingError> {
    let geometry = &design.geometry;

    positive("pintle tip diameter", geometry.pintle_tip_diameter)?;
    positive("skip distance", geometry.skip_distance)?;
    positive(
        "fuel channel outer diameter",
        geometry.fuel_channel_outer_diameter,
    )?;
    positive(
        "oxidizer channel inner diameter",
        geometry.oxidizer_channel_inner_diameter,
    )?;
    positive("slot row spacing", geometry.row_spacing)?;

    geometry.slots.try_map(|row, slot| {
        if slot.count == 0 {
            return Err(SizingError::NoSlots { row });
        }
        positive(format!("{row} slot height"), slot.height)?;
        positive(format!("{row} slot width"), slot.width)
    })?;

    if geometry.fuel_channel_outer_diameter <= geometry.pintle_tip_diameter {
        return Err(SizingError::ClosedFuelAnnulus {
            outer_mm: geometry.fuel_channel_outer_diameter.get::<millimeter>(),
            tip_mm: geometry.pintle_tip_diameter.get::<millimeter>(),
        });
    }

    for (name, propellant) in [("oxidizer", &design.oxidizer), ("fuel", &design.fuel)] {
        positive(format!("{name} density"), propellant.density)?;
        positive(
            format!("{name} two-phase density"),
            propellant.two_phase_density,
        )?;
        positive(format!("{name} mass flow rate"), propellant.mass_flow)?;
    }

    let injector = &design.injector;
    positive(
        "oxidizer discharge coefficient",
        injector.oxidizer_discharge_coefficient,
    )?;
    positive(
        "fuel discharge coefficient",
        injector.fuel_discharge_coefficient,
    )?;
    if let MixingVelocity::Given(a) = injector.mixing_velocity {
        positive("mixing velocity", a)?;
    }

    Ok(())
}

fn positive<T>(field: impl Into<String>, value: T) -> Result<T, SizingError>
where
    T: PartialOrd + num_traits::Zero,
{
    StrictlyPositive::new(value)
        .map(Constrained::into_inner)
        .map_err(|source| SizingError::invalid(field, source))
}

/// Bulk exit velocity `ṁ / (ρ A)`.
fn exit_velocity(mass_flow: MassRate, density: MassDensity, area: Area) -> Velocity {
    mass_flow / (density * area)
}

/// Momentum flux `ρ v² A` of a stream.
fn momentum_flux(density: MassDensity, velocity: Velocity, area: Area) -> Force {
    density * velocity * velocity * area
}

/// Injector pressure drop `ṁ² / (2 ρ A² Cd²)`.
fn pressure_drop(
    mass_flow: MassRate,
    density: MassDensity,
    area: Area,
    discharge_coefficient: f64,
) -> Pressure {
    mass_flow * mass_flow
        / (density * area * area * (2.0 * discharge_coefficient * discharge_coefficient))
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::f64::consts::PI;

    use approx::assert_relative_eq;
    use uom::si::{
        area::square_meter,
        f64::{Length, MassDensity, MassRate},
        force::newton,
        mass_density::kilogram_per_cubic_meter,
        mass_rate::kilogram_per_second,
        time::second,
        velocity::meter_per_second,
    };

    use crate::support::constraint::ConstraintError;

    use super::test_support::reference_design;

    #[test]
    fn slot_areas_add_up() {
        let metrics = size(&reference_design()).unwrap();

        assert_relative_eq!(
            (metrics.slot_area.primary + metrics.slot_area.secondary).get::<square_meter>(),
            metrics.oxidizer_area.get::<square_meter>(),
        );
        assert_relative_eq!(
            metrics.oxidizer_area.get::<square_meter>(),
            2e-5,
            max_relative = 1e-12
        );
    }

    #[test]
    fn primary_flow_fraction_is_area_share() {
        let metrics = size(&reference_design()).unwrap();
        let fraction = metrics.primary_flow_fraction.get::<ratio>();

        assert!((0.0..=1.0).contains(&fraction));
        assert_relative_eq!(fraction, 0.6, max_relative = 1e-12);
    }

    #[test]
    fn fuel_velocity_through_annulus() {
        let metrics = size(&reference_design()).unwrap();

        let annulus = PI / 4.0 * (0.014_f64.powi(2) - 0.010_f64.powi(2));
        assert_relative_eq!(
            metrics.fuel_area.get::<square_meter>(),
            7.54e-5,
            max_relative = 1e-3
        );
        assert_relative_eq!(
            metrics.fuel_velocity.get::<meter_per_second>(),
            0.05 / (800.0 * annulus),
            max_relative = 1e-12
        );
        assert_relative_eq!(
            metrics.fuel_velocity.get::<meter_per_second>(),
            0.829,
            epsilon = 1e-3
        );
    }

    #[test]
    fn oxidizer_velocity_is_uniform_across_rows() {
        // Splitting the flow by area gives both rows the bulk velocity.
        let velocity = size(&reference_design()).unwrap().oxidizer_velocity;
        let bulk = 0.1 / (1141.0 * 2e-5);

        assert_relative_eq!(
            velocity.primary.get::<meter_per_second>(),
            bulk,
            max_relative = 1e-12
        );
        assert_relative_eq!(
            velocity.secondary.get::<meter_per_second>(),
            bulk,
            max_relative = 1e-12
        );
    }

    #[test]
    fn total_momentum_ratio_matches_fluxes() {
        let metrics = size(&reference_design()).unwrap();

        let fuel = metrics.fuel_momentum_flux.get::<newton>();
        let oxidizer = metrics.oxidizer_momentum_flux.primary.get::<newton>()
            + metrics.oxidizer_momentum_flux.secondary.get::<newton>();

        assert_relative_eq!(
            metrics.total_oxidizer_momentum_flux.get::<newton>(),
            oxidizer,
            max_relative = 1e-12
        );
        assert_relative_eq!(
            metrics.total_momentum_ratio.get::<ratio>(),
            fuel / oxidizer,
            max_relative = 1e-12
        );
        // For a uniform stream ρ v² A reduces to ṁ v.
        assert_relative_eq!(
            fuel,
            0.05 * metrics.fuel_velocity.get::<meter_per_second>(),
            max_relative = 1e-12
        );
    }

    #[test]
    fn cone_half_angle_follows_tmr() {
        let metrics = size(&reference_design()).unwrap();
        let tmr = metrics.total_momentum_ratio.get::<ratio>();

        assert_relative_eq!(
            metrics.cone_half_angle.get::<degree>(),
            tmr.sqrt().atan().to_degrees(),
            max_relative = 1e-12
        );
    }

    #[test]
    fn skip_distance_metrics() {
        let metrics = size(&reference_design()).unwrap();

        assert_relative_eq!(
            metrics.skip_distance_ratio.get::<ratio>(),
            1.5,
            max_relative = 1e-12
        );
        assert_relative_eq!(
            metrics.skip_time.get::<second>(),
            0.015 / metrics.fuel_velocity.get::<meter_per_second>(),
            max_relative = 1e-12
        );
    }

    #[test]
    fn oxidizer_pressure_drop() {
        let metrics = size(&reference_design()).unwrap();
        let expected = 0.1_f64.powi(2) / (2.0 * 1141.0 * 2e-5_f64.powi(2) * 0.7_f64.powi(2)) / 1e6;

        assert_relative_eq!(
            metrics.oxidizer_pressure_drop.get::<megapascal>(),
            expected,
            max_relative = 1e-12
        );
        assert_relative_eq!(
            metrics.oxidizer_pressure_drop.get::<megapascal>(),
            0.02236,
            epsilon = 1e-5
        );
    }

    #[test]
    fn fuel_pressure_drop() {
        let metrics = size(&reference_design()).unwrap();
        let area = metrics.fuel_area.get::<square_meter>();
        let expected = 0.05_f64.powi(2) / (2.0 * 800.0 * area * area * 0.65_f64.powi(2)) / 1e6;

        assert_relative_eq!(
            metrics.fuel_pressure_drop.get::<megapascal>(),
            expected,
            max_relative = 1e-12
        );
    }

    #[test]
    fn mixing_metrics_use_given_velocity() {
        let metrics = size(&reference_design()).unwrap();
        let blf = 12.0 * 0.001 / (PI * 0.01);
        let v_f = metrics.fuel_velocity.get::<meter_per_second>();
        let c1 = 0.001 / v_f * 200.0 / (PI * 0.01) * blf / (1.0 - blf);

        assert_relative_eq!(metrics.mixing_velocity.get::<meter_per_second>(), 200.0);
        assert_relative_eq!(
            metrics.mixing_coefficient.primary.get::<ratio>(),
            c1,
            max_relative = 1e-12
        );

        let v_o = metrics.oxidizer_velocity.primary.get::<meter_per_second>();
        let mp1 = 800.0 * v_f * v_f * 0.002 * (0.001 + 2.0 * c1 * 0.001)
            / (1141.0 * v_o * v_o * 0.001 * 0.001);
        assert_relative_eq!(
            metrics.mixing_parameter.primary.get::<ratio>(),
            mp1,
            max_relative = 1e-12
        );
    }

    #[test]
    fn secondary_row_mixing_metrics() {
        let metrics = size(&reference_design()).unwrap();
        let v_f = metrics.fuel_velocity.get::<meter_per_second>();
        let oxidizer_velocity = metrics.oxidizer_velocity.secondary;
        let v_o = oxidizer_velocity.get::<meter_per_second>();

        // Eight 1 mm slots around a 10 mm tip.
        let blf = 8.0 * 0.001 / (PI * 0.01);
        let c2 = 0.001 / v_f * 200.0 / (PI * 0.01) * blf / (1.0 - blf);
        let mp2 = 800.0 * v_f * v_f * 0.002 * (0.001 + 2.0 * c2 * 0.001)
            / (1141.0 * v_o * v_o * 0.001 * 0.001);

        assert_relative_eq!(
            metrics.blockage_factor.secondary.get::<ratio>(),
            blf,
            max_relative = 1e-12
        );
        assert_relative_eq!(
            metrics.mixing_coefficient.secondary.get::<ratio>(),
            c2,
            max_relative = 1e-12
        );
        assert_relative_eq!(
            metrics.mixing_parameter.secondary.get::<ratio>(),
            mp2,
            max_relative = 1e-12
        );
    }

    #[test]
    fn rows_keep_their_own_blockage() {
        // The primary row blocks more of the circumference, so it must mix harder.
        let metrics = size(&reference_design()).unwrap();
        let blockage = metrics.blockage_factor;
        let coefficient = metrics.mixing_coefficient;

        assert!(blockage.primary > blockage.secondary);
        assert!(coefficient.primary > coefficient.secondary);
        assert!(metrics.mixing_parameter.primary > metrics.mixing_parameter.secondary);
    }

    #[test]
    fn sizing_is_idempotent() {
        let design = reference_design();
        assert_eq!(size(&design).unwrap(), size(&design).unwrap());
    }

    #[test]
    fn edited_design_is_resized() {
        let mut design = reference_design();
        let before = size(&design).unwrap();

        design.fuel.mass_flow = MassRate::new::<kilogram_per_second>(0.1);
        let after = size(&design).unwrap();

        assert_relative_eq!(
            after.fuel_velocity.get::<meter_per_second>(),
            2.0 * before.fuel_velocity.get::<meter_per_second>(),
            max_relative = 1e-12
        );
        assert_relative_eq!(
            after.total_momentum_ratio.get::<ratio>(),
            4.0 * before.total_momentum_ratio.get::<ratio>(),
            max_relative = 1e-12
        );
    }

    #[test]
    fn empty_primary_row_is_rejected() {
        let mut design = reference_design();
        design.geometry.slots.primary.count = 0;

        assert_eq!(
            size(&design),
            Err(SizingError::NoSlots {
                row: SlotRow::Primary
            })
        );
    }

    #[test]
    fn full_blockage_is_rejected() {
        let mut design = reference_design();
        // 32 slots of 1 mm around a 10 mm tip cover more than the circumference.
        design.geometry.slots.secondary.count = 32;

        let error = size(&design).unwrap_err();
        assert!(matches!(
            error,
            SizingError::Blockage {
                row: SlotRow::Secondary,
                ..
            }
        ));
    }

    #[test]
    fn blockage_of_one_is_rejected() {
        let mut design = reference_design();
        // Twelve slots spanning exactly the tip circumference, plus rounding margin.
        design.geometry.slots.primary.width =
            Length::new::<millimeter>(10.0 * PI / 12.0 * (1.0 + 1e-12));

        assert!(matches!(
            size(&design),
            Err(SizingError::Blockage {
                row: SlotRow::Primary,
                ..
            })
        ));
    }

    #[test]
    fn closed_fuel_annulus_is_rejected() {
        let mut design = reference_design();
        design.geometry.fuel_channel_outer_diameter = Length::new::<millimeter>(10.0);

        assert!(matches!(
            size(&design),
            Err(SizingError::ClosedFuelAnnulus { .. })
        ));
    }

    #[test]
    fn non_positive_inputs_are_rejected() {
        let mut design = reference_design();
        design.oxidizer.density = MassDensity::new::<kilogram_per_cubic_meter>(0.0);
        assert_eq!(
            size(&design),
            Err(SizingError::InvalidInput {
                field: "oxidizer density".to_owned(),
                source: ConstraintError::Zero,
            })
        );

        let mut design = reference_design();
        design.fuel.mass_flow = MassRate::new::<kilogram_per_second>(f64::NAN);
        assert_eq!(
            size(&design),
            Err(SizingError::InvalidInput {
                field: "fuel mass flow rate".to_owned(),
                source: ConstraintError::NotANumber,
            })
        );

        let mut design = reference_design();
        design.geometry.slots.secondary.height = Length::new::<millimeter>(-1.0);
        assert_eq!(
            size(&design),
            Err(SizingError::InvalidInput {
                field: "secondary slot height".to_owned(),
                source: ConstraintError::Negative,
            })
        );

        let mut design = reference_design();
        design.injector.fuel_discharge_coefficient = 0.0;
        assert!(matches!(
            size(&design),
            Err(SizingError::InvalidInput { .. })
        ));
    }

    #[test]
    fn overflow_is_reported() {
        let mut design = reference_design();
        design.fuel.density = MassDensity::new::<kilogram_per_cubic_meter>(1e-310);

        assert_eq!(
            size(&design),
            Err(SizingError::NonFinite {
                metric: "fuel velocity"
            })
        );
    }
}
