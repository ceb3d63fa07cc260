use std::fmt::{Debug, Display, Formatter};

use crate::quantity::{currency::Dong, energy::WattHours, ratios::Percentage};

/// Energy scaled to the largest fitting prefix: `Wh`, `kWh`, or `MWh`.
pub struct FormattedEnergy(pub WattHours);

impl Display for FormattedEnergy {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let value = self.0.0;
        if value >= 1_000_000.0 {
            write!(f, "{:.2} MWh", value / 1_000_000.0)
        } else if value >= 1_000.0 {
            write!(f, "{:.2} kWh", value / 1_000.0)
        } else {
            write!(f, "{value:.0} Wh")
        }
    }
}

/// Whole đồng with dots between the thousands.
pub struct FormattedCurrency(pub Dong);

impl Display for FormattedCurrency {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let rounded = format!("{:.0}", self.0.0.abs());
        let sign = if self.0.0 <= -0.5 { "-" } else { "" };
        let n_digits = rounded.len();
        let mut grouped = String::with_capacity(n_digits + n_digits / 3);
        for (i, digit) in rounded.chars().enumerate() {
            if i != 0 && (n_digits - i) % 3 == 0 {
                grouped.push('.');
            }
            grouped.push(digit);
        }
        write!(f, "{sign}{grouped} ₫")
    }
}

pub struct FormattedPercentage(pub Percentage);

impl Debug for FormattedPercentage {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        Display::fmt(self, f)
    }
}

impl Display for FormattedPercentage {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.1}%", self.0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_energy() {
        assert_eq!(FormattedEnergy(WattHours(999.4)).to_string(), "999 Wh");
        assert_eq!(FormattedEnergy(WattHours(1_000.0)).to_string(), "1.00 kWh");
        assert_eq!(FormattedEnergy(WattHours(123_456.0)).to_string(), "123.46 kWh");
        assert_eq!(FormattedEnergy(WattHours(2_500_000.0)).to_string(), "2.50 MWh");
    }

    #[test]
    fn test_currency() {
        assert_eq!(FormattedCurrency(Dong(0.0)).to_string(), "0 ₫");
        assert_eq!(FormattedCurrency(Dong(990.0)).to_string(), "990 ₫");
        assert_eq!(FormattedCurrency(Dong(1_234_567.4)).to_string(), "1.234.567 ₫");
        assert_eq!(FormattedCurrency(Dong(-12_000.0)).to_string(), "-12.000 ₫");
    }

    #[test]
    fn test_percentage() {
        assert_eq!(FormattedPercentage(Percentage(90.909)).to_string(), "90.9%");
    }
}
