use reqwest::StatusCode;
use thiserror::Error;

/// A failed conformance check.
///
/// One variant per failure category: unexpected HTTP status, missing response
/// field, implausible value, mismatched value, and transport/decode failures.
/// None of these are retried or recovered; each aborts the scenario it
/// occurred in.
#[derive(Debug, Error)]
pub enum CheckError {
    /// The remote answered with a status other than 200.
    #[error("expected HTTP 200, got {status}: {body}")]
    UnexpectedStatus { status: StatusCode, body: String },

    /// A dotted path such as `sys.country` is absent from the response
    /// document, or present with a non-conforming type.
    #[error("response is missing expected field '{0}'")]
    MissingField(String),

    /// A temperature outside the plausible range after Kelvin conversion.
    #[error(
        "implausible temperature at {context}: {kelvin} K is {celsius:.2} °C, \
         outside the plausible range"
    )]
    ImplausibleTemperature {
        context: String,
        kelvin: f64,
        celsius: f64,
    },

    /// A returned value differs from the expected constant.
    #[error("expected {field} to be '{expected}', got '{actual}'")]
    ValueMismatch {
        field: String,
        expected: String,
        actual: String,
    },

    /// The response document is empty or not a JSON object.
    #[error("response document is empty")]
    EmptyDocument,

    /// Connection, DNS, or timeout failure from the HTTP client.
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// A 200 response whose body is not valid JSON.
    #[error("failed to decode response body as JSON: {0}")]
    Decode(#[from] serde_json::Error),
}
