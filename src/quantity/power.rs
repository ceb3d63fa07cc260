use crate::quantity::{
    energy::{KilowattHours, WattHours},
    time::Hours,
};

quantity!(Watts, via: f64, suffix: "W", precision: 0);
quantity!(Kilowatts, via: f64, suffix: "kW", precision: 2);

quantity!(
    /// British thermal units per hour, the usual way cooling capacity is rated.
    Btu, via: f64, suffix: "BTU", precision: 0
);

quantity!(
    /// Power density, used for cooling and heat loads.
    WattsPerSquareMeter, via: f64, suffix: "W/m²", precision: 1
);

impl Btu {
    /// BTU/h in one kilowatt.
    pub const PER_KILOWATT: f64 = 3412.0;
}

impl From<Kilowatts> for Watts {
    fn from(kilowatts: Kilowatts) -> Self {
        Self(kilowatts.0 * 1000.0)
    }
}

impl From<Watts> for Kilowatts {
    fn from(watts: Watts) -> Self {
        Self(watts.0 / 1000.0)
    }
}

impl From<Btu> for Kilowatts {
    fn from(btu: Btu) -> Self {
        Self(btu.0 / Btu::PER_KILOWATT)
    }
}

implement_mul!(Watts, Hours, WattHours);
implement_mul!(Kilowatts, Hours, KilowattHours);
