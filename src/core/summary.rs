use crate::{
    core::series::{EnergyReadings, HourOfDay, hourly_readings},
    quantity::{
        currency::Dong,
        energy::{KilowattHours, WattHours},
        price::KilowattHourPrice,
        ratios::Percentage,
    },
};

/// Headline figures over the raw, unaveraged readings.
#[must_use]
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SummaryStats {
    pub total_ac: WattHours,
    pub total: WattHours,

    /// Air-conditioning share of the total energy, capped at 100% when the series cover different dates.
    pub ac_share: Percentage,

    pub estimated_cost: Dong,

    /// Hour of the single largest AC reading. The first maximum wins.
    pub peak_hour: HourOfDay,

    /// Mean consumption per observed hour of the total series.
    pub average_hourly: WattHours,
}

impl SummaryStats {
    pub fn new(readings: &EnergyReadings, price: KilowattHourPrice) -> Self {
        let mut total_ac = WattHours::ZERO;
        let mut peak_reading = WattHours::ZERO;
        let mut peak_hour = HourOfDay::default();
        for (_, hour, reading) in hourly_readings(&readings.ac) {
            total_ac += reading;
            if reading > peak_reading {
                peak_reading = reading;
                peak_hour = hour;
            }
        }

        let mut total = WattHours::ZERO;
        let mut n_hours = 0_u32;
        for (_, _, reading) in hourly_readings(&readings.total) {
            total += reading;
            n_hours += 1;
        }

        let ac_share = if total > WattHours::ZERO {
            Percentage::of(total_ac.0, total.0).min(Percentage::FULL)
        } else {
            Percentage::ZERO
        };
        let average_hourly =
            if n_hours == 0 { WattHours::ZERO } else { total / f64::from(n_hours) };

        Self {
            total_ac: total_ac.round_to(0),
            total: total.round_to(0),
            ac_share: ac_share.round_to(2),
            estimated_cost: (KilowattHours::from(total) * price).round_to(0),
            peak_hour,
            average_hourly: average_hourly.round_to(2),
        }
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;
    use chrono::NaiveDate;

    use super::*;
    use crate::core::series::HourlySeries;

    fn date(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, day).unwrap()
    }

    fn day_of(values: &[f64]) -> Vec<WattHours> {
        let mut readings: Vec<_> = values.iter().copied().map(WattHours).collect();
        readings.resize(24, WattHours::ZERO);
        readings
    }

    #[test]
    fn test_single_day() {
        let readings = EnergyReadings {
            ac: HourlySeries::from([(date(1), day_of(&[100.0, 200.0]))]),
            total: HourlySeries::from([(date(1), day_of(&[110.0, 220.0]))]),
            ..EnergyReadings::default()
        };
        let stats = SummaryStats::new(&readings, KilowattHourPrice(3000.0));
        assert_abs_diff_eq!(stats.total_ac.0, 300.0);
        assert_abs_diff_eq!(stats.total.0, 330.0);
        assert_abs_diff_eq!(stats.ac_share.0, 90.91);
        assert_abs_diff_eq!(stats.estimated_cost.0, 990.0);
        assert_eq!(stats.peak_hour, HourOfDay::from_index(1).unwrap());
        assert_abs_diff_eq!(stats.average_hourly.0, 13.75);
    }

    #[test]
    fn test_sums_across_days() {
        let readings = EnergyReadings {
            ac: HourlySeries::from([(date(1), day_of(&[10.0])), (date(2), day_of(&[20.0]))]),
            total: HourlySeries::from([(date(1), day_of(&[40.0])), (date(2), day_of(&[40.0]))]),
            ..EnergyReadings::default()
        };
        let stats = SummaryStats::new(&readings, KilowattHourPrice(2000.0));
        assert_abs_diff_eq!(stats.total_ac.0, 30.0);
        assert_abs_diff_eq!(stats.total.0, 80.0);
        assert_abs_diff_eq!(stats.ac_share.0, 37.5);
        assert_abs_diff_eq!(stats.estimated_cost.0, 160.0);
        assert_abs_diff_eq!(stats.average_hourly.0, 1.67);
    }

    #[test]
    fn test_peak_hour_first_maximum_wins() {
        let readings = EnergyReadings {
            ac: HourlySeries::from([
                (date(2), day_of(&[0.0, 0.0, 0.0, 50.0])),
                (date(1), day_of(&[0.0, 0.0, 0.0, 0.0, 0.0, 50.0])),
            ]),
            ..EnergyReadings::default()
        };
        let stats = SummaryStats::new(&readings, KilowattHourPrice(3000.0));
        assert_eq!(stats.peak_hour.to_string(), "05:00");
    }

    #[test]
    fn test_empty() {
        let stats = SummaryStats::new(&EnergyReadings::default(), KilowattHourPrice(3000.0));
        assert_eq!(stats.total, WattHours::ZERO);
        assert_eq!(stats.total_ac, WattHours::ZERO);
        assert_eq!(stats.ac_share, Percentage::ZERO);
        assert_eq!(stats.estimated_cost, Dong::ZERO);
        assert_eq!(stats.peak_hour, HourOfDay::from_index(0).unwrap());
        assert_eq!(stats.average_hourly, WattHours::ZERO);
    }

    #[test]
    fn test_ac_share_capped_with_sparse_total() {
        let readings = EnergyReadings {
            ac: HourlySeries::from([(date(1), day_of(&[100.0]))]),
            total: HourlySeries::from([(date(2), day_of(&[10.0]))]),
            ..EnergyReadings::default()
        };
        let stats = SummaryStats::new(&readings, KilowattHourPrice(3000.0));
        assert_eq!(stats.ac_share, Percentage::FULL);
        assert_abs_diff_eq!(stats.total_ac.0, 100.0);
        assert_abs_diff_eq!(stats.total.0, 10.0);
    }

    #[test]
    fn test_ac_share_is_zero_without_total() {
        let readings = EnergyReadings {
            ac: HourlySeries::from([(date(1), day_of(&[10.0]))]),
            ..EnergyReadings::default()
        };
        let stats = SummaryStats::new(&readings, KilowattHourPrice(3000.0));
        assert_eq!(stats.ac_share, Percentage::ZERO);
        assert_abs_diff_eq!(stats.total_ac.0, 10.0);
    }
}
