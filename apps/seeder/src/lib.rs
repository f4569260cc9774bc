//! UTI demo seeder
//!
//! Builds synthetic UTI demo cases, stores each one as a JSON string inside a
//! `Patient` extension on a remote FHIR server, and records the created ids in
//! a run manifest.
//!
//! - `cases`: the demo case model and catalogue
//! - `payload`: Patient payload construction
//! - `submitter`: transport seam (implemented by the FHIR client)
//! - `seeder`: sequential run orchestration
//! - `manifest`: run manifest persistence

pub mod cases;
pub mod config;
pub mod error;
pub mod logging;
pub mod manifest;
pub mod payload;
pub mod seeder;
pub mod submitter;

pub use cases::{builtin_cases, CatheterPeriod, DemoCase, DemoDefinition};
pub use config::SeederConfig;
pub use error::{Error, Result};
pub use manifest::{PatientEntry, RunManifest};
pub use payload::{build_payload, PatientResource};
pub use seeder::{preview_payloads, Seeder, SeederSettings};
pub use submitter::{PatientSubmitter, Submitted};
