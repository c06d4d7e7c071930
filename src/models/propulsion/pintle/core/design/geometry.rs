use std::f64::consts::PI;

use uom::si::f64::{Area, Length, Ratio};

use crate::models::propulsion::pintle::core::Rows;

/// Dimensions of one row of oxidizer slots.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SlotGeometry {
    /// Axial slot height `Lo`.
    pub height: Length,

    /// Circumferential slot width `δo`.
    pub width: Length,

    /// Number of slots in the row.
    pub count: u32,
}

impl SlotGeometry {
    /// Total open area of the row, `Lo · δo · N`.
    #[must_use]
    pub fn open_area(&self) -> Area {
        self.height * self.width * f64::from(self.count)
    }

    /// Fraction of the pintle tip circumference occupied by this row,
    /// `N · δo / (π · Dp)`.
    #[must_use]
    pub fn blockage_factor(&self, pintle_tip_diameter: Length) -> Ratio {
        self.width * f64::from(self.count) / (pintle_tip_diameter * PI)
    }
}

/// Pintle geometry.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Geometry {
    /// Pintle tip diameter `Dp`.
    pub pintle_tip_diameter: Length,

    /// Skip distance `Ls` from the pintle tip to the first spray interaction.
    pub skip_distance: Length,

    /// Outer diameter of the fuel channel `Dfo`.
    ///
    /// Fuel leaves through the annulus between `Dp` and `Dfo`.
    pub fuel_channel_outer_diameter: Length,

    /// Inner diameter of the oxidizer channel `Doi`.
    pub oxidizer_channel_inner_diameter: Length,

    /// Oxidizer slot rows.
    pub slots: Rows<SlotGeometry>,

    /// Axial distance between the primary and secondary slot rows `Lo12`.
    pub row_spacing: Length,
}

impl Geometry {
    /// Fuel annulus area, `π/4 · (Dfo² − Dp²)`.
    #[must_use]
    pub fn fuel_annulus_area(&self) -> Area {
        let dfo = self.fuel_channel_outer_diameter;
        let dp = self.pintle_tip_diameter;
        (dfo * dfo - dp * dp) * (PI / 4.0)
    }

    /// Radial width of the fuel annulus, `(Dfo − Dp) / 2`.
    #[must_use]
    pub fn fuel_annulus_gap(&self) -> Length {
        (self.fuel_channel_outer_diameter - self.pintle_tip_diameter) / 2.0
    }
}
