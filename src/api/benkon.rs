mod error;
mod models;

use std::time::Duration;

use reqwest::{
    Client,
    Url,
    header::{ACCEPT, HeaderMap, HeaderValue},
};
use serde::de::DeserializeOwned;

pub use self::{
    error::ApiError,
    models::{Equipment, Location},
};
use self::error::ErrorBody;
use crate::{
    core::{
        date_range::DateRange,
        series::{EnergyReadings, EquipmentReadings, EquipmentSeries, HourlySeries},
    },
    prelude::*,
};

/// BenKon data analytics service.
pub struct Api {
    client: Client,
    base_url: Url,
}

impl Api {
    pub const DEFAULT_BASE_URL: &'static str =
        "https://data-analytics-868579264401.us-central1.run.app";

    pub fn new(base_url: Url, timeout: Duration) -> Result<Self> {
        ensure!(!base_url.cannot_be_a_base(), "`{base_url}` cannot be used as a base URL");
        let headers =
            HeaderMap::from_iter([(ACCEPT, HeaderValue::from_static("application/json"))]);
        let client = Client::builder()
            .user_agent(concat!("benkon/", env!("CARGO_PKG_VERSION")))
            .default_headers(headers)
            .timeout(timeout)
            .build()?;
        Ok(Self { client, base_url })
    }

    #[instrument(skip_all, fields(org_id = org_id, loc_id = loc_id))]
    pub async fn get_location(&self, org_id: &str, loc_id: &str) -> Result<Location> {
        let location: Option<Location> =
            self.call(&["orgs", org_id, "locations", loc_id], None).await?;
        let location = location.ok_or(ApiError::LocationNotFound)?;
        info!(name = %location.loc_name, "fetched");
        Ok(location)
    }

    #[instrument(skip_all, fields(org_id = org_id))]
    pub async fn get_locations(&self, org_id: &str) -> Result<Vec<Location>> {
        let locations: Vec<Location> =
            self.call::<Option<_>>(&["orgs", org_id, "locations"], None).await?.unwrap_or_default();
        info!(n_locations = locations.len(), "fetched");
        Ok(locations)
    }

    #[instrument(skip_all, fields(org_id = org_id, loc_id = loc_id))]
    pub async fn get_equipment(&self, org_id: &str, loc_id: &str) -> Result<Vec<Equipment>> {
        let equipment: Vec<Equipment> = self
            .call::<Option<_>>(&["orgs", org_id, "locations", loc_id, "equips"], None)
            .await?
            .unwrap_or_default();
        info!(n_equipment = equipment.len(), "fetched");
        Ok(equipment)
    }

    #[instrument(skip_all, fields(org_id = org_id, loc_id = loc_id, range = %range))]
    pub async fn get_location_energy(
        &self,
        org_id: &str,
        loc_id: &str,
        range: DateRange,
    ) -> Result<EnergyReadings> {
        let readings: EnergyReadings = self
            .call::<Option<_>>(
                &["orgs", org_id, "locations", loc_id, "data", "hourlyEnergy"],
                Some(range),
            )
            .await?
            .unwrap_or_default();
        info!(n_days = readings.ac.len(), "fetched");
        Ok(readings)
    }

    #[instrument(
        skip_all,
        fields(org_id = org_id, loc_id = loc_id, equip_id = equip_id, range = %range),
    )]
    pub async fn get_equipment_energy(
        &self,
        org_id: &str,
        loc_id: &str,
        equip_id: &str,
        range: DateRange,
    ) -> Result<HourlySeries> {
        let series = self
            .call::<Option<EquipmentSeries>>(
                &["orgs", org_id, "locations", loc_id, "equips", equip_id, "data", "hourlyEnergy"],
                Some(range),
            )
            .await?
            .unwrap_or_default()
            .energy;
        info!(n_days = series.len(), "fetched");
        Ok(series)
    }

    #[instrument(skip_all, fields(org_id = org_id, loc_id = loc_id, range = %range))]
    pub async fn get_all_equipment_energy(
        &self,
        org_id: &str,
        loc_id: &str,
        range: DateRange,
    ) -> Result<EquipmentReadings> {
        let readings: EquipmentReadings = self
            .call::<Option<_>>(
                &["orgs", org_id, "locations", loc_id, "equipsData", "hourlyEnergy"],
                Some(range),
            )
            .await?
            .unwrap_or_default();
        info!(n_equipment = readings.len(), "fetched");
        Ok(readings)
    }

    #[instrument(skip_all, level = Level::DEBUG, fields(path = ?segments))]
    async fn call<R: DeserializeOwned>(
        &self,
        segments: &[&str],
        range: Option<DateRange>,
    ) -> Result<R> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| anyhow!("`{}` cannot be used as a base URL", self.base_url))?
            .pop_if_empty()
            .extend(segments);
        if let Some(range) = range {
            url.query_pairs_mut()
                .append_pair("startDate", &range.start().to_string())
                .append_pair("endDate", &range.end().to_string());
        }
        debug!(%url, "requesting…");

        let response = self.client.get(url).send().await.map_err(ApiError::from)?;
        let status = response.status();
        if !status.is_success() {
            let message = response.json::<ErrorBody>().await.ok().and_then(|body| body.error);
            warn!(%status, ?message, "request failed");
            return Err(ApiError::from_status(status, message).into());
        }
        response.json::<R>().await.context("failed to deserialize the response")
    }
}
