use itertools::Itertools;
use serde::{Deserialize, Serialize};

use crate::quantity::{
    area::SquareMeters,
    power::{Btu, Watts},
};

#[must_use]
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct Location {
    pub org_id: String,
    pub loc_id: String,
    pub loc_name: String,
    pub address: String,
    pub ward: String,
    pub district: String,
    pub city: String,

    #[serde(rename = "area_in_m2")]
    pub area: SquareMeters,

    pub gps_long: String,
    pub gps_lat: String,
    pub total_btu: Btu,
    pub btu_per_m2: f64,
    pub rated_btu_per_m2: f64,
    pub rated_energy_wh_per_m2_per_day: f64,
}

impl Location {
    /// Human-readable address, skipping the empty parts.
    #[must_use]
    pub fn full_address(&self) -> String {
        [&self.address, &self.ward, &self.district, &self.city]
            .into_iter()
            .filter(|part| !part.is_empty())
            .join(", ")
    }
}

#[must_use]
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct Equipment {
    pub org_id: String,
    pub loc_id: String,
    pub equip_id: String,

    #[serde(rename = "equip_name")]
    pub name: String,

    #[serde(rename = "type")]
    pub kind: String,

    pub btu: Btu,

    #[serde(rename = "rated_power_w")]
    pub rated_power: Watts,
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;
    use crate::prelude::*;

    #[test]
    fn test_deserialize_location_ok() -> Result {
        // language=JSON
        const RESPONSE: &str = r#"
            {
                "org_id": "7411698114757914624",
                "loc_id": "7407763056947015680",
                "loc_name": "Store 42",
                "address": "12 Nguyen Trai",
                "ward": "",
                "district": "District 1",
                "city": "Ho Chi Minh City",
                "area_in_m2": 120.5,
                "gps_long": "106.69",
                "gps_lat": "10.77",
                "total_btu": 48000,
                "btu_per_m2": 398.3,
                "rated_btu_per_m2": 600,
                "rated_energy_wh_per_m2_per_day": 250
            }
        "#;
        let location = serde_json::from_str::<Location>(RESPONSE)?;
        assert_eq!(location.loc_name, "Store 42");
        assert_abs_diff_eq!(location.area.0, 120.5);
        assert_abs_diff_eq!(location.total_btu.0, 48_000.0);
        assert_eq!(location.full_address(), "12 Nguyen Trai, District 1, Ho Chi Minh City");
        Ok(())
    }

    #[test]
    fn test_deserialize_equipment_ok() -> Result {
        // language=JSON
        const RESPONSE: &str = r#"
            [
                {
                    "org_id": "1",
                    "loc_id": "2",
                    "equip_id": "3",
                    "equip_name": "Daikin FTKC35",
                    "type": "AC",
                    "btu": 12000,
                    "rated_power_w": 1050
                },
                { "equip_id": "4" }
            ]
        "#;
        let equipment = serde_json::from_str::<Vec<Equipment>>(RESPONSE)?;
        assert_eq!(equipment.len(), 2);
        assert_eq!(equipment[0].kind, "AC");
        assert_abs_diff_eq!(equipment[0].rated_power.0, 1050.0);
        assert_abs_diff_eq!(equipment[1].btu.0, 0.0);
        Ok(())
    }
}
