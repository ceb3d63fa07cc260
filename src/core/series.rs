use std::{
    collections::BTreeMap,
    fmt::{Display, Formatter},
};

use chrono::NaiveDate;
use indexmap::IndexMap;
use serde::Deserialize;
use serde_with::{DefaultOnNull, serde_as};

use crate::quantity::energy::{WattHours, WattHoursPerSquareMeter};

pub const HOURS_PER_DAY: usize = 24;

/// Date-keyed hourly readings, the index in each vector being the hour of day.
///
/// Dates iterate in ascending order, which also pins the tie-breaks that depend on the scan order.
pub type HourlySeries<V = WattHours> = BTreeMap<NaiveDate, Vec<V>>;

/// Iterate over the readings which fit into a day, scanning the dates in ascending order.
pub fn hourly_readings<V: Copy>(
    series: &HourlySeries<V>,
) -> impl Iterator<Item = (NaiveDate, HourOfDay, V)> + '_ {
    series.iter().flat_map(|(date, readings)| {
        readings
            .iter()
            .take(HOURS_PER_DAY)
            .enumerate()
            .map(|(hour, reading)| (*date, HourOfDay(hour), *reading))
    })
}

/// Location-level hourly energy, as four parallel series.
///
/// Missing and `null` series become empty, as do `null` daily arrays. A `null` reading counts as zero.
#[serde_as]
#[must_use]
#[derive(Clone, Default, Deserialize)]
pub struct EnergyReadings {
    #[serde(default, rename = "ac_energy_wh")]
    #[serde_as(as = "DefaultOnNull<BTreeMap<_, DefaultOnNull<Vec<DefaultOnNull>>>>")]
    pub ac: HourlySeries<WattHours>,

    #[serde(default, rename = "total_energy_wh")]
    #[serde_as(as = "DefaultOnNull<BTreeMap<_, DefaultOnNull<Vec<DefaultOnNull>>>>")]
    pub total: HourlySeries<WattHours>,

    #[serde(default, rename = "ac_energy_wh_per_m2")]
    #[serde_as(as = "DefaultOnNull<BTreeMap<_, DefaultOnNull<Vec<DefaultOnNull>>>>")]
    pub ac_per_area: HourlySeries<WattHoursPerSquareMeter>,

    #[serde(default, rename = "total_energy_wh_per_m2")]
    #[serde_as(as = "DefaultOnNull<BTreeMap<_, DefaultOnNull<Vec<DefaultOnNull>>>>")]
    pub total_per_area: HourlySeries<WattHoursPerSquareMeter>,
}

/// Per-equipment hourly energy, keyed by the equipment ID in the order the service returned them.
pub type EquipmentReadings = IndexMap<String, EquipmentSeries>;

#[serde_as]
#[must_use]
#[derive(Clone, Default, Deserialize)]
pub struct EquipmentSeries {
    #[serde(default, rename = "equip_name")]
    pub name: Option<String>,

    #[serde(default, rename = "energy_wh")]
    #[serde_as(as = "DefaultOnNull<BTreeMap<_, DefaultOnNull<Vec<DefaultOnNull>>>>")]
    pub energy: HourlySeries<WattHours>,
}

impl EquipmentSeries {
    pub fn total(&self) -> WattHours {
        hourly_readings(&self.energy).map(|(_, _, energy)| energy).sum()
    }

    /// Display name, falling back to the equipment ID when the name is absent or blank.
    pub fn display_name<'a>(&'a self, equip_id: &'a str) -> &'a str {
        self.name.as_deref().filter(|name| !name.is_empty()).unwrap_or(equip_id)
    }
}

#[must_use]
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Ord, PartialOrd)]
pub struct HourOfDay(usize);

impl HourOfDay {
    /// Returns [`None`] when the index does not fit into a day.
    pub fn from_index(index: usize) -> Option<Self> {
        (index < HOURS_PER_DAY).then_some(Self(index))
    }

    pub fn all() -> [Self; HOURS_PER_DAY] {
        std::array::from_fn(Self)
    }
}

impl Display for HourOfDay {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:02}:00", self.0)
    }
}
