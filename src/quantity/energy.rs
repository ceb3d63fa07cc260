use crate::quantity::{currency::Dong, price::KilowattHourPrice};

quantity!(WattHours, via: f64, suffix: "Wh", precision: 0);
quantity!(KilowattHours, via: f64, suffix: "kWh", precision: 2);

quantity!(
    /// Energy normalized by the floor area.
    WattHoursPerSquareMeter, via: f64, suffix: "Wh/m²", precision: 2
);

impl From<WattHours> for KilowattHours {
    fn from(watt_hours: WattHours) -> Self {
        Self(watt_hours.0 / 1000.0)
    }
}

implement_mul!(KilowattHours, KilowattHourPrice, Dong);
