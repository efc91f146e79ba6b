use crate::{
    client::ApiClient,
    config::Config,
    error::CheckError,
    report::{Outcome, Report},
};
use async_trait::async_trait;
use chrono::Utc;
use std::{convert::TryFrom, fmt::Debug, time::Instant};

pub mod current;
pub mod forecast;

use current::{CurrentByCity, CurrentByCoordinates};
use forecast::FiveDayForecast;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScenarioId {
    CurrentByCity,
    CurrentByCoordinates,
    FiveDayForecast,
}

impl ScenarioId {
    pub fn as_str(&self) -> &'static str {
        match self {
            ScenarioId::CurrentByCity => "current-by-city",
            ScenarioId::CurrentByCoordinates => "current-by-coordinates",
            ScenarioId::FiveDayForecast => "five-day-forecast",
        }
    }

    pub const fn all() -> &'static [ScenarioId] {
        &[
            ScenarioId::CurrentByCity,
            ScenarioId::CurrentByCoordinates,
            ScenarioId::FiveDayForecast,
        ]
    }
}

impl std::fmt::Display for ScenarioId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for ScenarioId {
    type Error = anyhow::Error;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let lower = value.to_lowercase();

        match lower.as_str() {
            "current-by-city" => Ok(ScenarioId::CurrentByCity),
            "current-by-coordinates" => Ok(ScenarioId::CurrentByCoordinates),
            "five-day-forecast" => Ok(ScenarioId::FiveDayForecast),
            _ => Err(anyhow::anyhow!(
                "Unknown scenario '{value}'. Supported scenarios: \
                 current-by-city, current-by-coordinates, five-day-forecast."
            )),
        }
    }
}

/// One conformance scenario: a request against the live API plus the
/// assertions over its response. A scenario fails on the first violated
/// condition; other scenarios are unaffected.
#[async_trait]
pub trait Scenario: Send + Sync + Debug {
    fn name(&self) -> &'static str;
    fn description(&self) -> &'static str;
    async fn run(&self, client: &ApiClient, config: &Config) -> Result<(), CheckError>;
}

pub fn scenario_for(id: ScenarioId) -> Box<dyn Scenario> {
    match id {
        ScenarioId::CurrentByCity => Box::new(CurrentByCity),
        ScenarioId::CurrentByCoordinates => Box::new(CurrentByCoordinates),
        ScenarioId::FiveDayForecast => Box::new(FiveDayForecast),
    }
}

/// All scenarios in their fixed execution order.
pub fn all_scenarios() -> Vec<Box<dyn Scenario>> {
    ScenarioId::all().iter().map(|id| scenario_for(*id)).collect()
}

/// Run the scenarios sequentially, capturing each result into the report.
pub async fn run_suite(
    client: &ApiClient,
    config: &Config,
    scenarios: &[Box<dyn Scenario>],
) -> Report {
    let started_at = Utc::now();
    let mut outcomes = Vec::with_capacity(scenarios.len());

    for scenario in scenarios {
        let start = Instant::now();
        let result = scenario.run(client, config).await;
        outcomes.push(Outcome::new(scenario.name(), result, start.elapsed()));
    }

    Report {
        started_at,
        outcomes,
    }
}
