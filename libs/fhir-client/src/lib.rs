//! FHIR REST Client
//!
//! This crate provides a small async client for creating resources on a remote
//! FHIR server (`POST [base]/[type]`). Responses are always read as JSON, and
//! any status at or above 400 is surfaced as [`Error::HttpStatus`] carrying the
//! server's error body (usually an `OperationOutcome`).
//!
//! # Examples
//!
//! ```rust,no_run
//! use std::time::Duration;
//! use uti_demo_fhir_client::FhirClient;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = FhirClient::new("https://hapi.fhir.org/baseR4", Duration::from_secs(30))?;
//! let patient = serde_json::json!({"resourceType": "Patient", "gender": "other"});
//! let created = client.create("Patient", &patient).await?;
//! println!("POST Patient -> {}", created.status);
//! # Ok(())
//! # }
//! ```
//!
pub mod client;
pub mod error;
pub mod models;

pub use client::FhirClient;
pub use error::{Error, Result};
pub use models::{CreatedResource, FHIR_JSON};
