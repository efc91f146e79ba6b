use async_trait::async_trait;

use crate::{
    checks::{common_weather_checks, require_str},
    client::ApiClient,
    config::Config,
    error::CheckError,
};

use super::Scenario;

/// Current weather looked up by city name.
#[derive(Debug)]
pub struct CurrentByCity;

#[async_trait]
impl Scenario for CurrentByCity {
    fn name(&self) -> &'static str {
        "current-by-city"
    }

    fn description(&self) -> &'static str {
        "current weather looked up by city name"
    }

    async fn run(&self, client: &ApiClient, config: &Config) -> Result<(), CheckError> {
        let data = client
            .get_json("weather", &[("q", config.city.clone())])
            .await?;

        let name = require_str(&data, "name")?;
        if name != config.city {
            return Err(CheckError::ValueMismatch {
                field: "name".to_string(),
                expected: config.city.clone(),
                actual: name.to_string(),
            });
        }

        common_weather_checks(&data)
    }
}

/// Current weather looked up by geographic coordinates. The returned `name`
/// must still equal the configured city, so this also validates that the
/// coordinates resolve to the expected location.
#[derive(Debug)]
pub struct CurrentByCoordinates;

#[async_trait]
impl Scenario for CurrentByCoordinates {
    fn name(&self) -> &'static str {
        "current-by-coordinates"
    }

    fn description(&self) -> &'static str {
        "current weather looked up by latitude/longitude"
    }

    async fn run(&self, client: &ApiClient, config: &Config) -> Result<(), CheckError> {
        let data = client
            .get_json(
                "weather",
                &[
                    ("lat", config.lat.to_string()),
                    ("lon", config.lon.to_string()),
                ],
            )
            .await?;

        let name = require_str(&data, "name")?;
        if name != config.city {
            return Err(CheckError::ValueMismatch {
                field: "name".to_string(),
                expected: config.city.clone(),
                actual: name.to_string(),
            });
        }

        common_weather_checks(&data)
    }
}
