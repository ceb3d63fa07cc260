use std::fmt::{Display, Formatter};

use bon::Builder;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::quantity::{energy::KilowattHours, power::Watts, time::Hours};

#[derive(
    Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash, Deserialize, Serialize, ValueEnum,
)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    AirConditioner,
    Showcase,
    Refrigerator,
    Lighting,
    Other,
}

impl Category {
    /// Refrigeration never stops, everything else follows the store opening hours.
    pub const fn runs_around_the_clock(self) -> bool {
        matches!(self, Self::Showcase | Self::Refrigerator)
    }
}

impl Display for Category {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::AirConditioner => "Air conditioner",
            Self::Showcase => "Showcase chiller",
            Self::Refrigerator => "Refrigerator",
            Self::Lighting => "LED lighting",
            Self::Other => "Other",
        })
    }
}

#[must_use]
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize, Builder)]
#[serde(rename_all = "camelCase")]
pub struct Device {
    pub id: u64,

    #[builder(into)]
    pub name: String,

    pub category: Category,
    pub power: Watts,
    pub hours_per_day: Hours,
    pub days_per_week: u8,
}

impl Device {
    /// Average number of weeks in a month.
    pub const WEEKS_PER_MONTH: f64 = 4.33;

    pub fn daily_consumption(&self) -> KilowattHours {
        (self.power * self.hours_per_day).into()
    }

    pub fn weekly_consumption(&self) -> KilowattHours {
        self.daily_consumption() * f64::from(self.days_per_week)
    }

    pub fn monthly_consumption(&self) -> KilowattHours {
        self.weekly_consumption() * Self::WEEKS_PER_MONTH
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;

    #[test]
    fn test_consumption() {
        let device = Device::builder()
            .id(1)
            .name("Sales floor air conditioner")
            .category(Category::AirConditioner)
            .power(Watts(3500.0))
            .hours_per_day(Hours(16.0))
            .days_per_week(7)
            .build();
        assert_abs_diff_eq!(device.daily_consumption().0, 56.0);
        assert_abs_diff_eq!(device.weekly_consumption().0, 392.0);
        assert_abs_diff_eq!(device.monthly_consumption().0, 1697.36, epsilon = 1e-9);
    }

    #[test]
    fn test_runs_around_the_clock() {
        assert!(Category::Refrigerator.runs_around_the_clock());
        assert!(Category::Showcase.runs_around_the_clock());
        assert!(!Category::Lighting.runs_around_the_clock());
        assert!(!Category::AirConditioner.runs_around_the_clock());
    }

    #[test]
    fn test_deserialize_device_ignores_derived_fields() -> crate::prelude::Result {
        // language=JSON
        const BLOB: &str = r#"
            {
                "id": 1717171717,
                "name": "Ice cream freezer",
                "category": "refrigerator",
                "power": 300,
                "hoursPerDay": 24,
                "daysPerWeek": 7,
                "dailyConsumption": 7.2
            }
        "#;
        let device = serde_json::from_str::<Device>(BLOB)?;
        assert_eq!(device.category, Category::Refrigerator);
        assert_abs_diff_eq!(device.daily_consumption().0, 7.2);
        Ok(())
    }
}
