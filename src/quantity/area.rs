use std::ops::Div;

use crate::quantity::power::{Watts, WattsPerSquareMeter};

quantity!(SquareMeters, via: f64, suffix: "m²", precision: 1);

impl Div<SquareMeters> for Watts {
    type Output = WattsPerSquareMeter;

    fn div(self, area: SquareMeters) -> Self::Output {
        WattsPerSquareMeter(self.0 / area.0)
    }
}

implement_mul!(WattsPerSquareMeter, SquareMeters, Watts);
