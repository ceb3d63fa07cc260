use std::fmt::{Debug, Display, Formatter};

use crate::{
    core::series::EquipmentReadings,
    quantity::{energy::WattHours, ratios::Percentage},
};

/// One equipment's share of the total energy.
#[must_use]
#[derive(Clone, Debug)]
pub struct DistributionSlice {
    pub equip_id: String,
    pub name: String,

    /// Total energy over the whole period, rounded to whole watt-hours.
    pub value: WattHours,

    pub color: Rgb,

    /// Share of the grand total, rounded to two decimals.
    pub percentage: Percentage,
}

/// Build the per-equipment distribution, largest consumers first.
///
/// Colors follow the response order, so that the same equipment keeps its color
/// regardless of the ranking. Equal values keep the response order as well.
/// Returns nothing when the equipment consumed nothing at all.
pub fn build_distribution(readings: &EquipmentReadings) -> Vec<DistributionSlice> {
    let totals: Vec<_> =
        readings.iter().map(|(equip_id, series)| (equip_id, series, series.total())).collect();
    let grand_total: WattHours = totals.iter().map(|(_, _, total)| *total).sum();
    if grand_total == WattHours::ZERO {
        return Vec::new();
    }

    let mut slices: Vec<_> = totals
        .into_iter()
        .enumerate()
        .map(|(index, (equip_id, series, total))| DistributionSlice {
            equip_id: equip_id.clone(),
            name: series.display_name(equip_id).to_owned(),
            value: total.round_to(0),
            color: Palette::color(index),
            percentage: Percentage::of(total.0, grand_total.0).round_to(2),
        })
        .collect();
    slices.sort_by(|lhs, rhs| rhs.value.cmp(&lhs.value));
    slices
}

#[must_use]
#[derive(Copy, Clone, Eq, PartialEq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Display for Rgb {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.0, self.1, self.2)
    }
}

impl Debug for Rgb {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        Display::fmt(self, f)
    }
}

impl From<Rgb> for comfy_table::Color {
    fn from(rgb: Rgb) -> Self {
        Self::Rgb { r: rgb.0, g: rgb.1, b: rgb.2 }
    }
}

pub struct Palette;

impl Palette {
    pub const COLORS: [Rgb; 10] = [
        Rgb(0x3B, 0x82, 0xF6), // blue
        Rgb(0x10, 0xB9, 0x81), // emerald
        Rgb(0x22, 0xC5, 0x5E), // green
        Rgb(0xF5, 0x9E, 0x0B), // amber
        Rgb(0xEF, 0x44, 0x44), // red
        Rgb(0x8B, 0x5C, 0xF6), // purple
        Rgb(0xF9, 0x73, 0x16), // orange
        Rgb(0x06, 0xB6, 0xD4), // cyan
        Rgb(0x84, 0xCC, 0x16), // lime
        Rgb(0xEC, 0x48, 0x99), // pink
    ];

    pub const fn color(index: usize) -> Rgb {
        Self::COLORS[index % Self::COLORS.len()]
    }
}
