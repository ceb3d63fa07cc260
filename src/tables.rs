use comfy_table::{Attribute, Cell, CellAlignment, Color, Table, modifiers, presets};

use crate::{
    api::benkon::{Equipment, Location},
    calculator::{
        breakdown::Breakdown,
        load_curve::{LoadCurve, SAMPLE_HOURS},
        state::Calculator,
    },
    core::{
        chart::ChartPoint,
        date_range::DateRange,
        distribution::DistributionSlice,
        report::{DesignStatus, LoadAnalysis, Report},
        series::{EquipmentReadings, HourOfDay},
        summary::SummaryStats,
    },
    fmt::{FormattedCurrency, FormattedEnergy, FormattedPercentage},
    quantity::{energy::WattHours, power::Kilowatts},
};

fn new_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(presets::UTF8_FULL_CONDENSED)
        .apply_modifier(modifiers::UTF8_ROUND_CORNERS)
        .enforce_styling();
    table
}

fn right(content: impl ToString) -> Cell {
    Cell::new(content).set_alignment(CellAlignment::Right)
}

pub fn build_location_table(location: &Location, range: &DateRange) -> Table {
    let mut table = new_table();
    table.set_header(vec![
        Cell::new(&location.loc_name).add_attribute(Attribute::Bold),
        Cell::new(range).add_attribute(Attribute::Dim),
    ]);
    table.add_row(vec![Cell::new("Address"), Cell::new(location.full_address())]);
    table.add_row(vec![Cell::new("Area"), Cell::new(location.area)]);
    table.add_row(vec![Cell::new("Total cooling"), Cell::new(location.total_btu)]);
    table.add_row(vec![
        Cell::new("GPS"),
        Cell::new(format!("{}, {}", location.gps_lat, location.gps_long))
            .add_attribute(Attribute::Dim),
    ]);
    table
}

pub fn build_summary_table(stats: &SummaryStats) -> Table {
    let mut table = new_table();
    table.set_header(vec![
        "Total AC",
        "Total",
        "AC share",
        "Estimated cost",
        "Peak hour",
        "Avg hourly",
    ]);
    table.add_row(vec![
        right(FormattedEnergy(stats.total_ac)),
        right(FormattedEnergy(stats.total)),
        right(FormattedPercentage(stats.ac_share)),
        right(FormattedCurrency(stats.estimated_cost)).fg(Color::DarkYellow),
        Cell::new(stats.peak_hour).fg(Color::Red),
        right(FormattedEnergy(stats.average_hourly)),
    ]);
    table
}

pub fn build_hourly_table(points: &[ChartPoint], per_area: bool) -> Table {
    let peak_total = points.iter().map(|point| point.total).max().unwrap_or(WattHours::ZERO);

    let mut table = new_table();
    if per_area {
        table.set_header(vec!["Hour", "AC", "Total", "AC per m²", "Total per m²"]);
    } else {
        table.set_header(vec!["Hour", "AC", "Total"]);
    }
    for point in points {
        let mut row = vec![
            Cell::new(point.hour),
            right(point.ac),
            right(point.total).fg(if point.total > WattHours::ZERO && point.total == peak_total {
                Color::Red
            } else {
                Color::Reset
            }),
        ];
        if per_area {
            row.push(right(point.ac_per_area));
            row.push(right(point.total_per_area));
        }
        table.add_row(row);
    }
    table
}

pub fn build_equipment_hourly_table(name: &str, averages: &[WattHours]) -> Table {
    let mut table = new_table();
    table.set_header(vec!["Hour", name]);
    for (hour, average) in HourOfDay::all().into_iter().zip(averages) {
        table.add_row(vec![Cell::new(hour), right(average)]);
    }
    table
}

pub fn build_distribution_table(slices: &[DistributionSlice]) -> Table {
    let mut table = new_table();
    table.set_header(vec!["", "Equipment", "Energy", "Share"]);
    for slice in slices {
        table.add_row(vec![
            Cell::new("●").fg(slice.color.into()),
            Cell::new(&slice.name),
            right(FormattedEnergy(slice.value)),
            right(FormattedPercentage(slice.percentage)),
        ]);
    }
    table
}

pub fn build_equipment_table(equipment: &[Equipment], readings: &EquipmentReadings) -> Table {
    let mut table = new_table();
    table.set_header(vec!["ID", "Name", "Type", "Cooling", "Rated power", "Energy"]);
    for item in equipment {
        let total = readings.get(&item.equip_id).map(|series| series.total());
        table.add_row(vec![
            Cell::new(&item.equip_id).add_attribute(Attribute::Dim),
            Cell::new(&item.name),
            Cell::new(&item.kind),
            right(item.btu),
            right(item.rated_power),
            total.map_or_else(
                || right("n/a").add_attribute(Attribute::Dim),
                |total| right(FormattedEnergy(total)),
            ),
        ]);
    }
    table
}

pub fn build_locations_table(locations: &[Location]) -> Table {
    let mut table = new_table();
    table.set_header(vec!["ID", "Name", "Address", "Area", "Cooling"]);
    for location in locations {
        table.add_row(vec![
            Cell::new(&location.loc_id).add_attribute(Attribute::Dim),
            Cell::new(&location.loc_name),
            Cell::new(location.full_address()),
            right(location.area),
            right(location.total_btu),
        ]);
    }
    table
}

pub fn build_overview_table(report: &Report) -> Table {
    let overview = &report.overview;
    let mut table = new_table();
    table.set_header(vec![
        Cell::new(&overview.location_name).add_attribute(Attribute::Bold),
        Cell::new("Air conditioning"),
    ]);
    table.add_row(vec![Cell::new("Units"), right(overview.n_ac_units)]);
    table.add_row(vec![
        Cell::new("Cooling capacity"),
        right(format!("{} ({:.1} kW)", overview.total_btu, overview.cooling_capacity.0)),
    ]);
    table.add_row(vec![Cell::new("Rated power"), right(overview.ac_rated_power)]);
    table.add_row(vec![Cell::new("Service area"), right(overview.area)]);
    table
}

pub fn build_load_table(report: &Report) -> Table {
    let load = &report.load;
    let mut table = new_table();
    table.set_header(vec!["Load analysis", ""]);
    table.add_row(vec![
        Cell::new("Cooling load"),
        right(load.cooling_load).fg(match load.design_status {
            DesignStatus::WithinRange => Color::Green,
            DesignStatus::NeedsAdjustment => Color::Red,
        }),
    ]);
    table.add_row(vec![
        Cell::new("Recommended").add_attribute(Attribute::Dim),
        right(LoadAnalysis::RECOMMENDED).add_attribute(Attribute::Dim),
    ]);
    table.add_row(vec![Cell::new("Design status"), right(format!("{:?}", load.design_status))]);
    table.add_row(vec![Cell::new("Heat load: people"), right(load.heat_load.people)]);
    table.add_row(vec![Cell::new("Heat load: lighting"), right(load.heat_load.lighting)]);
    table.add_row(vec![Cell::new("Heat load: equipment"), right(load.heat_load.equipment)]);
    table.add_row(vec![Cell::new("Heat load: building"), right(load.heat_load.building)]);
    table.add_row(vec![
        Cell::new("Heat load").add_attribute(Attribute::Bold),
        right(load.heat_load.total()).add_attribute(Attribute::Bold),
    ]);
    table.add_row(vec![Cell::new("Safety factor"), right(format!("{:.2}", load.safety_factor))]);
    table.add_row(vec![Cell::new("Rated power: AC"), right(load.equipment.ac)]);
    table.add_row(vec![Cell::new("Rated power: lighting"), right(load.equipment.lighting)]);
    table.add_row(vec![
        Cell::new("Rated power: refrigeration"),
        right(load.equipment.refrigeration),
    ]);
    table.add_row(vec![Cell::new("Rated power: other"), right(load.equipment.other)]);
    table.add_row(vec![
        Cell::new("Rated power").add_attribute(Attribute::Bold),
        right(load.equipment.total()).add_attribute(Attribute::Bold),
    ]);
    table
}

pub fn build_daily_table(report: &Report) -> Table {
    let daily = &report.daily;
    let mut table = new_table();
    table.set_header(vec![
        Cell::new("Daily AC consumption"),
        Cell::new(daily.date.map_or_else(|| "no data".to_owned(), |date| date.to_string()))
            .add_attribute(Attribute::Dim),
    ]);
    table.add_row(vec![Cell::new("Total"), right(daily.total)]);
    table.add_row(vec![Cell::new("Business hours"), right(daily.business_hours)]);
    table.add_row(vec![
        Cell::new("After hours"),
        right(daily.after_hours).fg(if daily.has_significant_after_hours() {
            Color::Red
        } else {
            Color::Reset
        }),
    ]);
    table.add_row(vec![Cell::new("Peak hours"), right(daily.peak_hours)]);
    table.add_row(vec![Cell::new("Off-peak hours"), right(daily.off_peak_hours)]);
    table
}

pub fn build_findings_table(report: &Report) -> Table {
    let mut table = new_table();
    table.set_header(vec!["Findings", "Recommendations"]);
    table.add_row(vec![
        Cell::new(report.findings.issues.join("\n")),
        Cell::new(report.findings.recommendations.join("\n")).fg(Color::Green),
    ]);
    table
}

pub fn build_devices_table(calculator: &Calculator) -> Table {
    let totals = calculator.totals();

    let mut table = new_table();
    table.set_header(vec![
        "#", "Name", "Category", "Power", "Hours/day", "Days/week", "Daily", "Weekly", "Monthly",
    ]);
    for (index, device) in calculator.devices().iter().enumerate() {
        table.add_row(vec![
            Cell::new(index).add_attribute(Attribute::Dim),
            Cell::new(&device.name),
            Cell::new(device.category),
            right(device.power),
            right(device.hours_per_day),
            right(device.days_per_week),
            right(device.daily_consumption()),
            right(device.weekly_consumption()),
            right(device.monthly_consumption()),
        ]);
    }
    table.add_row(vec![
        Cell::new(""),
        Cell::new(format!("{} devices", totals.n_devices)).add_attribute(Attribute::Bold),
        Cell::new(""),
        Cell::new(""),
        Cell::new(""),
        Cell::new(""),
        right(totals.daily).add_attribute(Attribute::Bold),
        right(totals.weekly).add_attribute(Attribute::Bold),
        right(totals.monthly).add_attribute(Attribute::Bold),
    ]);
    table
}

pub fn build_category_table(calculator: &Calculator) -> Table {
    let mut table = new_table();
    table.set_header(vec!["Category", "Monthly"]);
    for (category, total) in calculator.monthly_by_category() {
        table.add_row(vec![Cell::new(category), right(total)]);
    }
    table
}

pub fn build_breakdown_table(breakdown: &Breakdown) -> Table {
    let high_mark = breakdown.high_mark();
    let low_mark = breakdown.low_mark();

    let mut table = new_table();
    table.set_header(vec!["", "Monthly"]);
    for (label, total) in &breakdown.bars {
        table.add_row(vec![
            Cell::new(label),
            right(total).fg(if *total > high_mark {
                Color::Red
            } else if *total < low_mark {
                Color::Green
            } else {
                Color::Reset
            }),
        ]);
    }
    table.add_row(vec![
        Cell::new("Average").add_attribute(Attribute::Dim),
        right(format!("{} (+10%: {high_mark}, -10%: {low_mark})", breakdown.average))
            .add_attribute(Attribute::Dim),
    ]);
    table
}

pub fn build_load_curve_table(curves: &[LoadCurve]) -> Table {
    let mut table = new_table();
    let mut header = vec![Cell::new("Hour")];
    header.extend(curves.iter().map(|curve| Cell::new(&curve.label)));
    table.set_header(header);
    for (index, hour) in SAMPLE_HOURS.iter().enumerate() {
        let mut row = vec![Cell::new(format!("{hour:02}h"))];
        row.extend(curves.iter().map(|curve| {
            let load = curve.loads[index];
            right(load).fg(if load <= Kilowatts::ZERO {
                Color::Reset
            } else if load == curve.peak() {
                Color::Red
            } else {
                Color::DarkYellow
            })
        }));
        table.add_row(row);
    }
    table
}
