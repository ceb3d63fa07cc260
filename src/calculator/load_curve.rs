use indexmap::IndexMap;
use itertools::Itertools;

use crate::{
    calculator::{
        ViewMode,
        device::{Category, Device},
    },
    quantity::power::{Kilowatts, Watts},
};

/// Sampled hours of the day, both ends inclusive.
pub const SAMPLE_HOURS: [u32; 13] = [0, 2, 4, 6, 8, 10, 12, 14, 16, 18, 20, 22, 24];

/// The store opening hours, both ends inclusive.
pub const OPENING_HOURS: (u32, u32) = (6, 22);

/// Synthetic load at each of [`SAMPLE_HOURS`].
#[must_use]
#[derive(Clone, Debug, PartialEq)]
pub struct LoadCurve {
    pub label: String,
    pub loads: [Kilowatts; SAMPLE_HOURS.len()],
}

impl LoadCurve {
    fn of<'a>(label: impl Into<String>, devices: impl IntoIterator<Item = &'a Device>) -> Self {
        let devices = devices.into_iter().collect_vec();
        let loads = SAMPLE_HOURS.map(|hour| {
            let load: Watts = devices
                .iter()
                .filter(|device| is_running(device, hour))
                .map(|device| device.power)
                .sum();
            Kilowatts::from(load).round_to(2)
        });
        Self { label: label.into(), loads }
    }

    pub fn peak(&self) -> Kilowatts {
        self.loads.iter().copied().max().unwrap_or_default()
    }
}

fn is_running(device: &Device, hour: u32) -> bool {
    device.category.runs_around_the_clock()
        || (OPENING_HOURS.0..=OPENING_HOURS.1).contains(&hour)
}

/// Build the load curves for the view mode.
pub fn load_curves(devices: &[Device], view_mode: ViewMode) -> Vec<LoadCurve> {
    match view_mode {
        ViewMode::Device => devices
            .iter()
            .map(|device| LoadCurve::of(&device.name, [device]))
            .collect(),
        ViewMode::Category => {
            let mut groups: IndexMap<Category, Vec<&Device>> = IndexMap::new();
            for device in devices {
                groups.entry(device.category).or_default().push(device);
            }
            groups
                .into_iter()
                .map(|(category, devices)| LoadCurve::of(category.to_string(), devices))
                .collect()
        }
        ViewMode::Total => vec![LoadCurve::of("Whole store", devices)],
    }
}
