use clap::Parser;

use crate::{
    cli::{api::LocationArgs, date_range::DateRangeArgs},
    core::report::Report,
    prelude::*,
    tables::{build_daily_table, build_findings_table, build_load_table, build_overview_table},
};

#[derive(Parser)]
pub struct ReportArgs {
    #[clap(flatten)]
    location: LocationArgs,

    #[clap(flatten)]
    range: DateRangeArgs,
}

impl ReportArgs {
    #[instrument(skip_all, fields(loc_id = %self.location.loc_id))]
    pub async fn run(self) -> Result {
        let range = self.range.validate()?;
        let api = self.location.api.new_client()?;
        let (org_id, loc_id) = (&self.location.api.org_id, &self.location.loc_id);

        let (location, equipment, readings) = tokio::try_join!(
            api.get_location(org_id, loc_id),
            api.get_equipment(org_id, loc_id),
            api.get_location_energy(org_id, loc_id, range),
        )?;

        let report = Report::new(&location, &equipment, &readings);
        info!(
            cooling_load = %report.load.cooling_load,
            n_issues = report.findings.issues.len(),
            "compiled the report",
        );
        println!("{}", build_overview_table(&report));
        println!("{}", build_load_table(&report));
        println!("{}", build_daily_table(&report));
        println!("{}", build_findings_table(&report));
        Ok(())
    }
}
