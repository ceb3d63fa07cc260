use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::{
    calculator::device::{Category, Device},
    prelude::*,
    quantity::{energy::KilowattHours, power::Watts, time::Hours},
};

/// Device parameters as entered by the user, before an ID is assigned.
#[must_use]
#[derive(Clone, Debug, bon::Builder)]
pub struct DeviceParams {
    #[builder(into)]
    pub name: String,

    pub category: Category,
    pub power: Watts,
    pub hours_per_day: Hours,
    pub days_per_week: u8,
}

impl DeviceParams {
    fn validate(&self) -> Result {
        ensure!(!self.name.trim().is_empty(), "the device name must not be empty");
        ensure!(self.power >= Watts::ZERO, "the power must not be negative");
        ensure!(
            (Hours::ZERO..=Hours(24.0)).contains(&self.hours_per_day),
            "the hours per day must be within 0…24"
        );
        ensure!((1..=7).contains(&self.days_per_week), "the days per week must be within 1…7");
        Ok(())
    }

    fn into_device(self, id: u64) -> Device {
        Device {
            id,
            name: self.name,
            category: self.category,
            power: self.power,
            hours_per_day: self.hours_per_day,
            days_per_week: self.days_per_week,
        }
    }
}

/// The calculator's device list.
///
/// Every update consumes the current state and returns the next one.
#[must_use]
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(transparent)]
pub struct Calculator {
    devices: Vec<Device>,
}

impl Calculator {
    pub const fn new(devices: Vec<Device>) -> Self {
        Self { devices }
    }

    pub fn devices(&self) -> &[Device] {
        &self.devices
    }

    pub fn is_empty(&self) -> bool {
        self.devices.is_empty()
    }

    pub fn with_device(mut self, params: DeviceParams) -> Result<Self> {
        params.validate()?;
        let id = self.next_id();
        self.devices.push(params.into_device(id));
        Ok(self)
    }

    /// Replace the device at `index`, keeping its ID.
    pub fn with_replaced_device(mut self, index: usize, params: DeviceParams) -> Result<Self> {
        params.validate()?;
        let device = self.devices.get_mut(index).with_context(|| no_device(index))?;
        *device = params.into_device(device.id);
        Ok(self)
    }

    pub fn without_device(mut self, index: usize) -> Result<Self> {
        ensure!(index < self.devices.len(), no_device(index));
        self.devices.remove(index);
        Ok(self)
    }

    fn next_id(&self) -> u64 {
        self.devices.iter().map(|device| device.id).max().map_or(1, |id| id + 1)
    }

    pub fn totals(&self) -> Totals {
        Totals {
            daily: self.devices.iter().map(Device::daily_consumption).sum(),
            weekly: self.devices.iter().map(Device::weekly_consumption).sum(),
            monthly: self.devices.iter().map(Device::monthly_consumption).sum(),
            n_devices: self.devices.len(),
        }
    }

    pub fn monthly_by_category(&self) -> BTreeMap<Category, KilowattHours> {
        let mut totals = BTreeMap::new();
        for device in &self.devices {
            *totals.entry(device.category).or_insert(KilowattHours::ZERO) +=
                device.monthly_consumption();
        }
        totals
    }

    /// Preset for a small convenience store open from 6:00 till 22:00.
    pub fn defaults() -> Self {
        let preset = [
            ("Sales floor air conditioner 1", Category::AirConditioner, 3500.0, 16.0),
            ("Sales floor air conditioner 2", Category::AirConditioner, 3500.0, 16.0),
            ("Checkout air conditioner", Category::AirConditioner, 2500.0, 16.0),
            ("Beverage showcase", Category::Showcase, 1200.0, 24.0),
            ("Fresh food showcase", Category::Showcase, 1500.0, 24.0),
            ("Ice cream freezer", Category::Refrigerator, 300.0, 24.0),
            ("Frozen food refrigerator", Category::Refrigerator, 400.0, 24.0),
            ("Beverage refrigerator", Category::Refrigerator, 250.0, 24.0),
            ("Storefront sign", Category::Lighting, 150.0, 16.0),
            ("Sales floor LED lighting", Category::Lighting, 800.0, 16.0),
            ("Checkout LED lighting", Category::Lighting, 200.0, 16.0),
            ("Storage LED lighting", Category::Lighting, 300.0, 16.0),
        ];
        Self::new(
            (1..)
                .zip(preset)
                .map(|(id, (name, category, power, hours_per_day))| {
                    Device::builder()
                        .id(id)
                        .name(name)
                        .category(category)
                        .power(Watts(power))
                        .hours_per_day(Hours(hours_per_day))
                        .days_per_week(7)
                        .build()
                })
                .collect(),
        )
    }
}

fn no_device(index: usize) -> String {
    format!("there is no device #{index}")
}

#[must_use]
#[derive(Copy, Clone, Debug)]
pub struct Totals {
    pub daily: KilowattHours,
    pub weekly: KilowattHours,
    pub monthly: KilowattHours,
    pub n_devices: usize,
}
