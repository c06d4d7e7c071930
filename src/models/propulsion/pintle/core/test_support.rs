use uom::si::{
    f64::{Length, MassDensity, MassRate, Velocity},
    length::millimeter,
    mass_density::kilogram_per_cubic_meter,
    mass_rate::kilogram_per_second,
    velocity::meter_per_second,
};

use super::{Design, Geometry, InjectorParameters, MixingVelocity, Propellant, Rows, SlotGeometry};

fn mm(value: f64) -> Length {
    Length::new::<millimeter>(value)
}

fn density(value: f64) -> MassDensity {
    MassDensity::new::<kilogram_per_cubic_meter>(value)
}

/// A small LOx/ethanol pintle.
///
/// The slot rows total 20 mm² of oxidizer area and the annulus runs between
/// a 10 mm tip and a 14 mm fuel channel.
pub(crate) fn reference_design() -> Design {
    Design {
        name: "reference".to_owned(),
        geometry: Geometry {
            pintle_tip_diameter: mm(10.0),
            skip_distance: mm(15.0),
            fuel_channel_outer_diameter: mm(14.0),
            oxidizer_channel_inner_diameter: mm(8.0),
            slots: Rows::new(
                SlotGeometry {
                    height: mm(1.0),
                    width: mm(1.0),
                    count: 12,
                },
                SlotGeometry {
                    height: mm(1.0),
                    width: mm(1.0),
                    count: 8,
                },
            ),
            row_spacing: mm(3.0),
        },
        oxidizer: Propellant {
            density: density(1141.0),
            two_phase_density: density(900.0),
            mass_flow: MassRate::new::<kilogram_per_second>(0.1),
        },
        fuel: Propellant {
            density: density(800.0),
            two_phase_density: density(600.0),
            mass_flow: MassRate::new::<kilogram_per_second>(0.05),
        },
        injector: InjectorParameters {
            oxidizer_discharge_coefficient: 0.7,
            fuel_discharge_coefficient: 0.65,
            mixing_velocity: MixingVelocity::Given(Velocity::new::<meter_per_second>(200.0)),
        },
    }
}
