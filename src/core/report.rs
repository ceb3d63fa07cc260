//! Location energy report: equipment overview, cooling load analysis, and the daily profile.

use std::ops::RangeInclusive;

use chrono::NaiveDate;

use crate::{
    api::benkon::{Equipment, Location},
    core::series::{EnergyReadings, HOURS_PER_DAY},
    quantity::{
        area::SquareMeters,
        energy::{KilowattHours, WattHours},
        power::{Btu, Kilowatts, Watts, WattsPerSquareMeter},
    },
};

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum EquipmentClass {
    AirConditioning,
    Lighting,
    Refrigeration,
    Other,
}

impl EquipmentClass {
    /// Classify the equipment by its free-form type.
    ///
    /// The classes are exclusive: the first matching class wins, so `"Backlight"` counts as
    /// air conditioning only and its power is never added to the lighting load as well.
    pub fn classify(kind: &str) -> Self {
        let kind = kind.to_lowercase();
        let matches = |needles: &[&str]| needles.iter().any(|needle| kind.contains(needle));
        if matches(&["ac", "air"]) {
            Self::AirConditioning
        } else if matches(&["light", "led"]) {
            Self::Lighting
        } else if matches(&["refriger", "freezer", "cooler"]) {
            Self::Refrigeration
        } else {
            Self::Other
        }
    }
}

#[must_use]
#[derive(Clone, Debug)]
pub struct Report {
    pub overview: EquipmentOverview,
    pub load: LoadAnalysis,
    pub daily: DailyConsumption,
    pub findings: Findings,
}

impl Report {
    pub fn new(location: &Location, equipment: &[Equipment], readings: &EnergyReadings) -> Self {
        let overview = EquipmentOverview::new(location, equipment);
        let load = LoadAnalysis::new(&overview, equipment);
        let daily = DailyConsumption::new(readings);
        let findings = Findings::new(&load, &daily);
        Self { overview, load, daily, findings }
    }
}

#[must_use]
#[derive(Clone, Debug)]
pub struct EquipmentOverview {
    pub location_name: String,
    pub area: SquareMeters,
    pub n_ac_units: usize,
    pub total_btu: Btu,
    pub cooling_capacity: Kilowatts,
    pub ac_rated_power: Watts,
}

impl EquipmentOverview {
    /// Served area when the location does not specify one.
    pub const FALLBACK_AREA: SquareMeters = SquareMeters(30.0);

    fn new(location: &Location, equipment: &[Equipment]) -> Self {
        let air_conditioners: Vec<_> = equipment
            .iter()
            .filter(|item| EquipmentClass::classify(&item.kind) == EquipmentClass::AirConditioning)
            .collect();
        let total_btu: Btu = air_conditioners.iter().map(|item| item.btu).sum();
        Self {
            location_name: if location.loc_name.is_empty() {
                "Unknown Location".to_owned()
            } else {
                location.loc_name.clone()
            },
            area: if location.area > SquareMeters::ZERO {
                location.area
            } else {
                Self::FALLBACK_AREA
            },
            n_ac_units: air_conditioners.len(),
            total_btu,
            cooling_capacity: total_btu.into(),
            ac_rated_power: air_conditioners.iter().map(|item| item.rated_power).sum(),
        }
    }
}

#[must_use]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum DesignStatus {
    WithinRange,
    NeedsAdjustment,
}

#[must_use]
#[derive(Copy, Clone, Debug, Default)]
pub struct PowerBreakdown {
    pub ac: Watts,
    pub lighting: Watts,
    pub refrigeration: Watts,
    pub other: Watts,
}

impl PowerBreakdown {
    fn new(equipment: &[Equipment]) -> Self {
        let mut breakdown = Self::default();
        for item in equipment {
            *match EquipmentClass::classify(&item.kind) {
                EquipmentClass::AirConditioning => &mut breakdown.ac,
                EquipmentClass::Lighting => &mut breakdown.lighting,
                EquipmentClass::Refrigeration => &mut breakdown.refrigeration,
                EquipmentClass::Other => &mut breakdown.other,
            } += item.rated_power;
        }
        breakdown
    }

    pub fn total(&self) -> Watts {
        self.ac + self.lighting + self.refrigeration + self.other
    }
}

#[must_use]
#[derive(Copy, Clone, Debug)]
pub struct HeatLoad {
    pub people: Watts,
    pub lighting: Watts,
    pub equipment: Watts,
    pub building: Watts,
}

impl HeatLoad {
    pub const PEOPLE: WattsPerSquareMeter = WattsPerSquareMeter(12.0);
    pub const BUILDING_ENVELOPE: WattsPerSquareMeter = WattsPerSquareMeter(18.0);

    pub fn total(&self) -> Watts {
        self.people + self.lighting + self.equipment + self.building
    }
}

#[must_use]
#[derive(Copy, Clone, Debug)]
pub struct LoadAnalysis {
    pub cooling_load: WattsPerSquareMeter,
    pub design_status: DesignStatus,
    pub heat_load: HeatLoad,

    /// Cooling capacity over the estimated heat load.
    pub safety_factor: f64,

    pub equipment: PowerBreakdown,
}

impl LoadAnalysis {
    pub const RECOMMENDED_RANGE: RangeInclusive<WattsPerSquareMeter> =
        WattsPerSquareMeter(150.0)..=WattsPerSquareMeter(200.0);
    pub const RECOMMENDED: WattsPerSquareMeter = WattsPerSquareMeter(160.0);

    fn new(overview: &EquipmentOverview, equipment: &[Equipment]) -> Self {
        let cooling_capacity = Watts::from(overview.cooling_capacity);
        let cooling_load = cooling_capacity / overview.area;
        let breakdown = PowerBreakdown::new(equipment);
        let heat_load = HeatLoad {
            people: (HeatLoad::PEOPLE * overview.area).round_to(0),
            lighting: breakdown.lighting,
            equipment: breakdown.refrigeration + breakdown.other,
            building: (HeatLoad::BUILDING_ENVELOPE * overview.area).round_to(0),
        };
        let heat_load_total = heat_load.total();
        Self {
            cooling_load,
            design_status: if Self::RECOMMENDED_RANGE.contains(&cooling_load) {
                DesignStatus::WithinRange
            } else {
                DesignStatus::NeedsAdjustment
            },
            heat_load,
            safety_factor: if heat_load_total > Watts::ZERO {
                cooling_capacity / heat_load_total
            } else {
                0.0
            },
            equipment: breakdown,
        }
    }

    pub fn is_oversized(&self) -> bool {
        &self.cooling_load > Self::RECOMMENDED_RANGE.end()
    }
}

/// Air-conditioning profile of the first reported day.
#[must_use]
#[derive(Copy, Clone, Debug)]
pub struct DailyConsumption {
    pub date: Option<NaiveDate>,
    pub total: KilowattHours,

    /// From 08:00 till 18:00.
    pub business_hours: KilowattHours,

    pub after_hours: KilowattHours,
    pub peak_hours: KilowattHours,
    pub off_peak_hours: KilowattHours,
}

impl DailyConsumption {
    pub const BUSINESS_HOURS: std::ops::Range<usize> = 8..18;
    const PEAK_SHARE: f64 = 0.4;
    const OFF_PEAK_SHARE: f64 = 0.3;

    /// After-hours consumption above this share of the total is worth a look.
    pub const AFTER_HOURS_THRESHOLD: f64 = 0.3;

    fn new(readings: &EnergyReadings) -> Self {
        let first_day = readings.ac.iter().next();
        let hourly: Vec<WattHours> = first_day
            .map(|(_, readings)| {
                readings.iter().take(HOURS_PER_DAY).map(|reading| reading.round_to(0)).collect()
            })
            .unwrap_or_default();

        let total = KilowattHours::from(hourly.iter().copied().sum::<WattHours>());
        let business_hours: WattHours = hourly
            .iter()
            .skip(Self::BUSINESS_HOURS.start)
            .take(Self::BUSINESS_HOURS.len())
            .copied()
            .sum();
        let business_hours = KilowattHours::from(business_hours);
        let after_hours = (total - business_hours).max(KilowattHours::ZERO);
        Self {
            date: first_day.map(|(date, _)| *date),
            total: total.round_to(2),
            business_hours: business_hours.round_to(2),
            after_hours: after_hours.round_to(2),
            peak_hours: (business_hours * Self::PEAK_SHARE).round_to(2),
            off_peak_hours: (after_hours * Self::OFF_PEAK_SHARE).round_to(2),
        }
    }

    pub fn has_significant_after_hours(&self) -> bool {
        self.after_hours > self.total * Self::AFTER_HOURS_THRESHOLD
    }
}

#[must_use]
#[derive(Clone, Debug)]
pub struct Findings {
    pub issues: Vec<&'static str>,
    pub recommendations: Vec<&'static str>,
}

impl Findings {
    fn new(load: &LoadAnalysis, daily: &DailyConsumption) -> Self {
        let mut issues = Vec::new();
        let mut recommendations = Vec::new();
        if daily.has_significant_after_hours() {
            issues.push("Significant consumption outside business hours.");
            recommendations
                .push("Review the operating schedule and the temperature set points after hours.");
        }
        if load.is_oversized() {
            issues.push("Design cooling capacity exceeds the recommendation for this business type.");
            recommendations.push("Consider adjusting the capacity or improving the insulation.");
        }
        if issues.is_empty() {
            issues.push("The system operates steadily and efficiently.");
        }
        if recommendations.is_empty() {
            recommendations.push("Keep the current operating mode.");
        }
        Self { issues, recommendations }
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;
    use crate::core::series::HourlySeries;

    fn equipment(kind: &str, btu: f64, rated_power: f64) -> Equipment {
        Equipment {
            kind: kind.to_owned(),
            btu: Btu(btu),
            rated_power: Watts(rated_power),
            ..Equipment::default()
        }
    }

    #[test]
    fn test_classify() {
        assert_eq!(EquipmentClass::classify("AC"), EquipmentClass::AirConditioning);
        assert_eq!(EquipmentClass::classify("Air Conditioner"), EquipmentClass::AirConditioning);
        assert_eq!(EquipmentClass::classify("LED panel"), EquipmentClass::Lighting);
        assert_eq!(EquipmentClass::classify("Freezer"), EquipmentClass::Refrigeration);
        assert_eq!(EquipmentClass::classify("Pump"), EquipmentClass::Other);
        assert_eq!(EquipmentClass::classify("Backlight"), EquipmentClass::AirConditioning);
        assert_eq!(EquipmentClass::classify(""), EquipmentClass::Other);
    }

    #[test]
    fn test_load_analysis() {
        let location = Location {
            loc_name: "Store".to_owned(),
            area: SquareMeters(100.0),
            ..Location::default()
        };
        let equipment = [
            equipment("AC", 34_120.0, 3000.0),
            equipment("AC", 17_060.0, 1500.0),
            equipment("Lighting", 0.0, 800.0),
            equipment("Freezer", 0.0, 400.0),
            equipment("Pump", 0.0, 100.0),
        ];
        let report = Report::new(&location, &equipment, &EnergyReadings::default());

        assert_eq!(report.overview.n_ac_units, 2);
        assert_abs_diff_eq!(report.overview.cooling_capacity.0, 15.0);
        assert_abs_diff_eq!(report.overview.ac_rated_power.0, 4500.0);

        assert_abs_diff_eq!(report.load.cooling_load.0, 150.0);
        assert_eq!(report.load.design_status, DesignStatus::WithinRange);
        assert_abs_diff_eq!(report.load.heat_load.people.0, 1200.0);
        assert_abs_diff_eq!(report.load.heat_load.building.0, 1800.0);
        assert_abs_diff_eq!(report.load.heat_load.equipment.0, 500.0);
        assert_abs_diff_eq!(report.load.heat_load.total().0, 4300.0);
        assert_abs_diff_eq!(report.load.safety_factor, 15_000.0 / 4300.0);
        assert_abs_diff_eq!(report.load.equipment.total().0, 5800.0);
        assert!(!report.load.is_oversized());
    }

    #[test]
    fn test_fallback_area_and_oversized() {
        let report = Report::new(
            &Location::default(),
            &[equipment("AC", 34_120.0, 3000.0)],
            &EnergyReadings::default(),
        );
        assert_eq!(report.overview.location_name, "Unknown Location");
        assert_abs_diff_eq!(report.overview.area.0, 30.0);
        assert_eq!(report.load.design_status, DesignStatus::NeedsAdjustment);
        assert!(report.load.is_oversized());
        assert_eq!(report.findings.issues.len(), 1);
    }

    #[test]
    fn test_daily_consumption() {
        let mut first_day = vec![WattHours(100.0); 24];
        first_day[8] = WattHours(1000.0);
        let readings = EnergyReadings {
            ac: HourlySeries::from([
                (NaiveDate::from_ymd_opt(2024, 1, 2).unwrap(), vec![WattHours(9999.0); 24]),
                (NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(), first_day),
            ]),
            ..EnergyReadings::default()
        };
        let daily = DailyConsumption::new(&readings);
        assert_eq!(daily.date, NaiveDate::from_ymd_opt(2024, 1, 1));
        assert_abs_diff_eq!(daily.total.0, 3.3);
        assert_abs_diff_eq!(daily.business_hours.0, 1.9);
        assert_abs_diff_eq!(daily.after_hours.0, 1.4);
        assert_abs_diff_eq!(daily.peak_hours.0, 0.76);
        assert_abs_diff_eq!(daily.off_peak_hours.0, 0.42);
        assert!(daily.has_significant_after_hours());

        let overview = EquipmentOverview::new(&Location::default(), &[]);
        let findings = Findings::new(&LoadAnalysis::new(&overview, &[]), &daily);
        assert_eq!(findings.issues.len(), 1);
        assert_eq!(findings.recommendations.len(), 1);
    }

    #[test]
    fn test_empty_findings() {
        let report = Report::new(&Location::default(), &[], &EnergyReadings::default());
        assert_eq!(report.findings.issues, ["The system operates steadily and efficiently."]);
        assert_eq!(report.findings.recommendations, ["Keep the current operating mode."]);
        assert_eq!(report.daily.date, None);
    }
}
