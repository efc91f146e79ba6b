//! Field-presence and plausibility checks over untyped response documents.

use serde_json::Value;

use crate::error::CheckError;

/// Plausible surface temperature range, degrees Celsius, both ends exclusive.
pub const MIN_PLAUSIBLE_C: f64 = -90.0;
pub const MAX_PLAUSIBLE_C: f64 = 60.0;

pub fn kelvin_to_celsius(kelvin: f64) -> f64 {
    kelvin - 273.15
}

/// Look up a dotted path such as `sys.country` in a JSON document.
pub fn require<'a>(doc: &'a Value, path: &str) -> Result<&'a Value, CheckError> {
    let mut current = doc;
    for segment in path.split('.') {
        current = current
            .get(segment)
            .ok_or_else(|| CheckError::MissingField(path.to_string()))?;
    }
    Ok(current)
}

pub fn require_str<'a>(doc: &'a Value, path: &str) -> Result<&'a str, CheckError> {
    require(doc, path)?
        .as_str()
        .ok_or_else(|| CheckError::MissingField(path.to_string()))
}

pub fn require_f64(doc: &Value, path: &str) -> Result<f64, CheckError> {
    require(doc, path)?
        .as_f64()
        .ok_or_else(|| CheckError::MissingField(path.to_string()))
}

/// A surface temperature is plausible strictly between the bounds; the bounds
/// themselves are rejected.
pub fn is_plausible_celsius(celsius: f64) -> bool {
    MIN_PLAUSIBLE_C < celsius && celsius < MAX_PLAUSIBLE_C
}

/// Reject a Kelvin temperature whose Celsius value falls outside the
/// plausible range. `context` names the field for the failure message.
pub fn check_plausible_temperature(kelvin: f64, context: &str) -> Result<(), CheckError> {
    let celsius = kelvin_to_celsius(kelvin);
    if !is_plausible_celsius(celsius) {
        return Err(CheckError::ImplausibleTemperature {
            context: context.to_string(),
            kelvin,
            celsius,
        });
    }
    Ok(())
}

/// Shared checks for a current-weather document: the document is a non-empty
/// object, `name` and `sys.country` are present, and `main.temp` holds a
/// plausible temperature.
pub fn common_weather_checks(data: &Value) -> Result<(), CheckError> {
    if data.as_object().is_none_or(serde_json::Map::is_empty) {
        return Err(CheckError::EmptyDocument);
    }

    require(data, "name")?;
    require(data, "sys.country")?;
    let temp = require_f64(data, "main.temp")?;
    check_plausible_temperature(temp, "main.temp")
}
