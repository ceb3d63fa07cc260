use std::ops::AddAssign;

use crate::{
    core::series::{EnergyReadings, HOURS_PER_DAY, HourOfDay, HourlySeries},
    quantity::energy::{WattHours, WattHoursPerSquareMeter},
};

/// One hour of the averaged day.
#[must_use]
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ChartPoint {
    pub hour: HourOfDay,
    pub ac: WattHours,
    pub total: WattHours,
    pub ac_per_area: WattHoursPerSquareMeter,
    pub total_per_area: WattHoursPerSquareMeter,
}

impl ChartPoint {
    const fn zero(hour: HourOfDay) -> Self {
        Self {
            hour,
            ac: WattHours::ZERO,
            total: WattHours::ZERO,
            ac_per_area: WattHoursPerSquareMeter::ZERO,
            total_per_area: WattHoursPerSquareMeter::ZERO,
        }
    }
}

/// Average the readings per hour of day across all the dates of the AC series.
///
/// Each metric is summed independently: a date missing in one series contributes nothing
/// to that metric, but still counts towards the number of days.
/// Absolute metrics are rounded to whole watt-hours, per-area metrics to two decimals.
pub fn average_hourly(readings: &EnergyReadings) -> [ChartPoint; HOURS_PER_DAY] {
    let mut points = HourOfDay::all().map(ChartPoint::zero);

    let n_days = readings.ac.len();
    if n_days == 0 {
        return points;
    }

    let mut ac = [WattHours::ZERO; HOURS_PER_DAY];
    let mut total = [WattHours::ZERO; HOURS_PER_DAY];
    let mut ac_per_area = [WattHoursPerSquareMeter::ZERO; HOURS_PER_DAY];
    let mut total_per_area = [WattHoursPerSquareMeter::ZERO; HOURS_PER_DAY];
    for date in readings.ac.keys() {
        accumulate(&mut ac, &readings.ac, date);
        accumulate(&mut total, &readings.total, date);
        accumulate(&mut ac_per_area, &readings.ac_per_area, date);
        accumulate(&mut total_per_area, &readings.total_per_area, date);
    }

    #[expect(clippy::cast_precision_loss)]
    let n_days = n_days as f64;
    for (index, point) in points.iter_mut().enumerate() {
        point.ac = (ac[index] / n_days).round_to(0);
        point.total = (total[index] / n_days).round_to(0);
        point.ac_per_area = (ac_per_area[index] / n_days).round_to(2);
        point.total_per_area = (total_per_area[index] / n_days).round_to(2);
    }
    points
}

/// Average a single series per hour of day across its own dates, rounded to whole watt-hours.
pub fn average_series(series: &HourlySeries) -> [WattHours; HOURS_PER_DAY] {
    let mut sums = [WattHours::ZERO; HOURS_PER_DAY];
    if series.is_empty() {
        return sums;
    }
    for date in series.keys() {
        accumulate(&mut sums, series, date);
    }
    #[expect(clippy::cast_precision_loss)]
    let n_days = series.len() as f64;
    sums.map(|sum| (sum / n_days).round_to(0))
}

fn accumulate<V: Copy + AddAssign>(
    sums: &mut [V; HOURS_PER_DAY],
    series: &HourlySeries<V>,
    date: &chrono::NaiveDate,
) {
    let readings = series.get(date).map(Vec::as_slice).unwrap_or_default();
    for (sum, reading) in sums.iter_mut().zip(readings) {
        *sum += *reading;
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;
    use chrono::NaiveDate;

    use super::*;

    fn date(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, day).unwrap()
    }

    fn day_of(values: &[f64]) -> Vec<WattHours> {
        let mut readings: Vec<_> = values.iter().copied().map(WattHours).collect();
        readings.resize(HOURS_PER_DAY, WattHours::ZERO);
        readings
    }

    #[test]
    fn test_single_day() {
        let readings = EnergyReadings {
            ac: HourlySeries::from([(date(1), day_of(&[100.0, 200.0]))]),
            total: HourlySeries::from([(date(1), day_of(&[110.0, 220.0]))]),
            ..EnergyReadings::default()
        };
        let points = average_hourly(&readings);
        assert_eq!(points[0].hour.to_string(), "00:00");
        assert_abs_diff_eq!(points[0].ac.0, 100.0);
        assert_abs_diff_eq!(points[0].total.0, 110.0);
        assert_abs_diff_eq!(points[1].ac.0, 200.0);
        assert_abs_diff_eq!(points[1].total.0, 220.0);
        assert_abs_diff_eq!(points[2].total.0, 0.0);
    }

    #[test]
    fn test_divides_by_number_of_days() {
        let readings = EnergyReadings {
            ac: HourlySeries::from([
                (date(1), day_of(&[10.0, 0.0, 3.0])),
                (date(2), day_of(&[20.0, 5.0, 0.0])),
                (date(3), day_of(&[30.0, 0.0, 0.0])),
            ]),
            ac_per_area: HourlySeries::from([
                (date(1), vec![WattHoursPerSquareMeter(1.0)]),
                (date(2), vec![WattHoursPerSquareMeter(0.0)]),
                (date(3), vec![WattHoursPerSquareMeter(0.0)]),
            ]),
            ..EnergyReadings::default()
        };
        let points = average_hourly(&readings);
        assert_abs_diff_eq!(points[0].ac.0, 20.0);
        assert_abs_diff_eq!(points[1].ac.0, 2.0); // 5 / 3 rounded
        assert_abs_diff_eq!(points[2].ac.0, 1.0);
        assert_abs_diff_eq!(points[0].ac_per_area.0, 0.33);
    }

    #[test]
    fn test_missing_date_in_other_series_contributes_zero() {
        let readings = EnergyReadings {
            ac: HourlySeries::from([(date(1), day_of(&[10.0])), (date(2), day_of(&[30.0]))]),
            total: HourlySeries::from([(date(2), day_of(&[40.0]))]),
            ..EnergyReadings::default()
        };
        let points = average_hourly(&readings);
        assert_abs_diff_eq!(points[0].ac.0, 20.0);
        assert_abs_diff_eq!(points[0].total.0, 20.0);
    }

    #[test]
    fn test_dates_only_in_other_series_are_ignored() {
        let readings = EnergyReadings {
            ac: HourlySeries::from([(date(1), day_of(&[10.0]))]),
            total: HourlySeries::from([(date(1), day_of(&[10.0])), (date(2), day_of(&[90.0]))]),
            ..EnergyReadings::default()
        };
        assert_abs_diff_eq!(average_hourly(&readings)[0].total.0, 10.0);
    }

    #[test]
    fn test_empty() {
        let points = average_hourly(&EnergyReadings::default());
        assert_eq!(points.len(), 24);
        for (point, hour) in points.iter().zip(HourOfDay::all()) {
            assert_eq!(*point, ChartPoint::zero(hour));
        }
    }

    #[test]
    fn test_idempotent() {
        let readings = EnergyReadings {
            ac: HourlySeries::from([(date(1), day_of(&[1.5, 2.5])), (date(2), day_of(&[3.0]))]),
            total_per_area: HourlySeries::from([(date(1), vec![WattHoursPerSquareMeter(0.123)])]),
            ..EnergyReadings::default()
        };
        assert_eq!(average_hourly(&readings), average_hourly(&readings));
    }

    #[test]
    fn test_average_series() {
        let series = HourlySeries::from([
            (date(1), day_of(&[10.0, 0.0, 5.0])),
            (date(2), day_of(&[20.0, 1.0])),
        ]);
        let averages = average_series(&series);
        assert_abs_diff_eq!(averages[0].0, 15.0);
        assert_abs_diff_eq!(averages[1].0, 1.0); // 0.5 rounds away from zero
        assert_abs_diff_eq!(averages[2].0, 3.0);
        assert_eq!(average_series(&HourlySeries::new()), [WattHours::ZERO; HOURS_PER_DAY]);
    }
}
