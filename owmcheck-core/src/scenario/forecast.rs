use async_trait::async_trait;

use crate::{
    checks::{check_plausible_temperature, require, require_f64, require_str},
    client::ApiClient,
    config::Config,
    error::CheckError,
};

use super::Scenario;

/// Number of forecast entries requested and required in the response.
pub const FORECAST_COUNT: usize = 5;

/// Multi-day forecast for the configured city. Requests exactly
/// [`FORECAST_COUNT`] entries and requires the same count back, with a
/// plausible temperature in every entry.
#[derive(Debug)]
pub struct FiveDayForecast;

#[async_trait]
impl Scenario for FiveDayForecast {
    fn name(&self) -> &'static str {
        "five-day-forecast"
    }

    fn description(&self) -> &'static str {
        "5-entry forecast looked up by city name"
    }

    async fn run(&self, client: &ApiClient, config: &Config) -> Result<(), CheckError> {
        let data = client
            .get_json(
                "forecast",
                &[
                    ("q", config.city.clone()),
                    ("cnt", FORECAST_COUNT.to_string()),
                ],
            )
            .await?;

        let name = require_str(&data, "city.name")?;
        if name != config.city {
            return Err(CheckError::ValueMismatch {
                field: "city.name".to_string(),
                expected: config.city.clone(),
                actual: name.to_string(),
            });
        }

        let list = require(&data, "list")?
            .as_array()
            .ok_or_else(|| CheckError::MissingField("list".to_string()))?;

        if list.len() != FORECAST_COUNT {
            return Err(CheckError::ValueMismatch {
                field: "list length".to_string(),
                expected: FORECAST_COUNT.to_string(),
                actual: list.len().to_string(),
            });
        }

        for (i, entry) in list.iter().enumerate() {
            let temp = require_f64(entry, "main.temp")?;
            check_plausible_temperature(temp, &format!("list[{i}].main.temp"))?;
        }

        Ok(())
    }
}
