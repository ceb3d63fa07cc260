use clap::Parser;

use crate::{
    cli::{api::LocationArgs, date_range::DateRangeArgs},
    core::{chart::average_hourly, distribution::build_distribution, summary::SummaryStats},
    prelude::*,
    quantity::price::KilowattHourPrice,
    tables::{
        build_distribution_table,
        build_equipment_table,
        build_hourly_table,
        build_location_table,
        build_summary_table,
    },
};

#[derive(Parser)]
pub struct DashboardArgs {
    #[clap(flatten)]
    location: LocationArgs,

    #[clap(flatten)]
    range: DateRangeArgs,

    /// Electricity price used for the cost estimate.
    #[clap(long = "kilowatt-hour-price", env = "KILOWATT_HOUR_PRICE", default_value = "3000")]
    price: KilowattHourPrice,

    /// Show the per-square-meter metrics in the hourly table.
    #[clap(long)]
    per_area: bool,
}

impl DashboardArgs {
    #[instrument(skip_all, fields(loc_id = %self.location.loc_id))]
    pub async fn run(self) -> Result {
        let range = self.range.validate()?;
        let api = self.location.api.new_client()?;
        let (org_id, loc_id) = (&self.location.api.org_id, &self.location.loc_id);

        let (location, equipment, readings, equipment_readings) = tokio::try_join!(
            api.get_location(org_id, loc_id),
            api.get_equipment(org_id, loc_id),
            api.get_location_energy(org_id, loc_id, range),
            api.get_all_equipment_energy(org_id, loc_id, range),
        )?;

        let stats = SummaryStats::new(&readings, self.price);
        info!(total = %stats.total, peak_hour = %stats.peak_hour, "summarized");

        println!("{}", build_location_table(&location, &range));
        println!("{}", build_summary_table(&stats));
        println!("{}", build_hourly_table(&average_hourly(&readings), self.per_area));
        let distribution = build_distribution(&equipment_readings);
        if distribution.is_empty() {
            warn!("no equipment consumption in the range");
        } else {
            println!("{}", build_distribution_table(&distribution));
        }
        println!("{}", build_equipment_table(&equipment, &equipment_readings));
        Ok(())
    }
}
