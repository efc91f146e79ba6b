//! Core library for the `owmcheck` conformance suite.
//!
//! This crate defines:
//! - Configuration & credentials handling
//! - The HTTP client the scenarios share
//! - Check primitives over untyped JSON documents
//! - The conformance scenarios and run reports
//!
//! It is used by `owmcheck-cli`, but can also be reused by other binaries or services.

pub mod checks;
pub mod client;
pub mod config;
pub mod error;
pub mod report;
pub mod scenario;

pub use client::ApiClient;
pub use config::Config;
pub use error::CheckError;
pub use report::{Outcome, Report, Verdict};
pub use scenario::{Scenario, ScenarioId};
