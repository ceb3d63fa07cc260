use clap::Parser;
use reqwest::Url;

use crate::{api::benkon::Api, prelude::*};

#[derive(Parser)]
pub struct ApiArgs {
    #[clap(
        long = "api-base-url",
        env = "BENKON_API_BASE_URL",
        default_value = Api::DEFAULT_BASE_URL
    )]
    base_url: Url,

    /// Request timeout.
    #[clap(long = "api-timeout", env = "BENKON_API_TIMEOUT", default_value = "30s")]
    timeout: humantime::Duration,

    /// Organisation ID.
    #[clap(long, env = "BENKON_ORG_ID")]
    pub org_id: String,
}

impl ApiArgs {
    pub fn new_client(&self) -> Result<Api> {
        Api::new(self.base_url.clone(), self.timeout.into())
    }
}

#[derive(Parser)]
pub struct LocationArgs {
    #[clap(flatten)]
    pub api: ApiArgs,

    /// Location ID.
    #[clap(long, env = "BENKON_LOC_ID")]
    pub loc_id: String,
}
