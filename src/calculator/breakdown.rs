use indexmap::IndexMap;
use itertools::Itertools;

use crate::{
    calculator::{ViewMode, device::Device, state::Calculator},
    quantity::energy::KilowattHours,
};

/// Monthly consumption grouped according to the view mode.
#[must_use]
#[derive(Clone, Debug)]
pub struct Breakdown {
    pub bars: Vec<(String, KilowattHours)>,
    pub average: KilowattHours,
}

impl Breakdown {
    const HIGH_MARK: f64 = 1.1;
    const LOW_MARK: f64 = 0.9;

    pub fn new(calculator: &Calculator, view_mode: ViewMode) -> Self {
        let bars: Vec<(String, KilowattHours)> = match view_mode {
            ViewMode::Device => calculator
                .devices()
                .iter()
                .map(|device| (device.name.clone(), device.monthly_consumption()))
                .collect(),
            ViewMode::Category => {
                let mut totals: IndexMap<_, KilowattHours> = IndexMap::new();
                for device in calculator.devices() {
                    *totals.entry(device.category).or_default() += device.monthly_consumption();
                }
                totals
                    .into_iter()
                    .map(|(category, total)| (category.to_string(), total))
                    .collect_vec()
            }
            ViewMode::Total => vec![(
                "Total consumption".to_owned(),
                calculator.devices().iter().map(Device::monthly_consumption).sum(),
            )],
        };
        let average = if bars.is_empty() {
            KilowattHours::ZERO
        } else {
            #[expect(clippy::cast_precision_loss)]
            let n_bars = bars.len() as f64;
            bars.iter().map(|(_, total)| *total).sum::<KilowattHours>() / n_bars
        };
        Self { bars, average }
    }

    /// Bars above this mark stand out as heavy consumers.
    pub fn high_mark(&self) -> KilowattHours {
        self.average * Self::HIGH_MARK
    }

    /// Bars below this mark stand out as light consumers.
    pub fn low_mark(&self) -> KilowattHours {
        self.average * Self::LOW_MARK
    }
}
