use clap::Parser;

use crate::{cli::api::ApiArgs, prelude::*, tables::build_locations_table};

#[derive(Parser)]
pub struct LocationsArgs {
    #[clap(flatten)]
    api: ApiArgs,
}

impl LocationsArgs {
    pub async fn run(self) -> Result {
        let locations = self.api.new_client()?.get_locations(&self.api.org_id).await?;
        println!("{}", build_locations_table(&locations));
        Ok(())
    }
}
