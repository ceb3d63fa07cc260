use clap::Parser;

use crate::{
    cli::{api::LocationArgs, date_range::DateRangeArgs},
    core::chart::average_series,
    prelude::*,
    tables::build_equipment_hourly_table,
};

#[derive(Parser)]
pub struct EquipmentEnergyArgs {
    #[clap(flatten)]
    location: LocationArgs,

    #[clap(flatten)]
    range: DateRangeArgs,

    /// Equipment ID.
    #[clap(long)]
    equip_id: String,
}

impl EquipmentEnergyArgs {
    #[instrument(skip_all, fields(equip_id = %self.equip_id))]
    pub async fn run(self) -> Result {
        let range = self.range.validate()?;
        let (org_id, loc_id) = (&self.location.api.org_id, &self.location.loc_id);
        let series = self
            .location
            .api
            .new_client()?
            .get_equipment_energy(org_id, loc_id, &self.equip_id, range)
            .await?;
        if series.is_empty() {
            warn!(%range, "no readings in the range");
        }
        println!("{}", build_equipment_hourly_table(&self.equip_id, &average_series(&series)));
        Ok(())
    }
}
