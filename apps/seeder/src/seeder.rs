//! Seeding run orchestration
//!
//! Strictly sequential: each case is built, submitted and recorded before the
//! next one starts. The first failure ends the run and the manifest is only
//! written once every case has been created.

use crate::cases::DemoDefinition;
use crate::config::SeederConfig;
use crate::error::{Error, Result};
use crate::manifest::{PatientEntry, RunManifest};
use crate::payload::build_payload;
use crate::submitter::PatientSubmitter;
use chrono::Utc;
use std::io::Write;
use std::path::PathBuf;
use uti_demo_fhir_client::Error as ClientError;

/// Where a run sends its cases and records its result.
#[derive(Debug, Clone, PartialEq)]
pub struct SeederSettings {
    pub fhir_base: String,
    pub extension_url: String,
    pub output_path: PathBuf,
}

impl From<&SeederConfig> for SeederSettings {
    fn from(cfg: &SeederConfig) -> Self {
        Self {
            fhir_base: cfg.fhir_base.clone(),
            extension_url: cfg.extension_url.clone(),
            output_path: cfg.output_path.clone(),
        }
    }
}

pub struct Seeder<S> {
    submitter: S,
    settings: SeederSettings,
    cases: Vec<DemoDefinition>,
}

impl<S: PatientSubmitter> Seeder<S> {
    pub fn new(submitter: S, settings: SeederSettings, cases: Vec<DemoDefinition>) -> Self {
        Self {
            submitter,
            settings,
            cases,
        }
    }

    pub fn submitter(&self) -> &S {
        &self.submitter
    }

    pub fn cases(&self) -> &[DemoDefinition] {
        &self.cases
    }

    /// Submit every case in order, then write and print the manifest.
    ///
    /// Progress goes to `out`. Whenever the server answered, the status line
    /// is printed before the error is returned, followed by the server's body
    /// for an error status. No later case is attempted and the output file is
    /// left untouched.
    pub async fn run<W: Write>(&self, out: &mut W) -> Result<RunManifest> {
        tracing::info!(
            fhir_base = %self.settings.fhir_base,
            cases = self.cases.len(),
            "Seeding demo patients"
        );

        let mut patients = Vec::with_capacity(self.cases.len());

        for def in &self.cases {
            writeln!(out, "\n=== create {} ===", def.title)?;

            let payload = build_payload(&def.title, &def.case, &self.settings.extension_url)?;
            let result = self.submitter.submit(&payload).await;

            if let Err(err) = &result {
                if let Some(status) = err.http_status() {
                    writeln!(out, "POST {} -> {}", payload.resource_type, status)?;
                    if let Error::Client(ClientError::HttpStatus { body, .. }) = err {
                        writeln!(out, "{}", serde_json::to_string_pretty(body)?)?;
                    }
                    tracing::error!(title = %def.title, status, "Create failed, aborting run");
                }
            }
            let submitted = result?;

            writeln!(out, "POST {} -> {}", payload.resource_type, submitted.status)?;

            let id = submitted.resource.id.ok_or_else(|| Error::MissingId {
                title: def.title.clone(),
            })?;

            tracing::info!(title = %def.title, patient_id = %id, "Created demo patient");
            patients.push(PatientEntry::new(def.title.clone(), id));
        }

        let manifest = RunManifest::new(
            Utc::now(),
            self.settings.fhir_base.clone(),
            self.settings.extension_url.clone(),
            patients,
        );
        manifest.write(&self.settings.output_path)?;

        tracing::info!(
            path = %self.settings.output_path.display(),
            patients = manifest.patients.len(),
            "Manifest written"
        );

        writeln!(out, "\ndone. wrote {}", self.settings.output_path.display())?;
        writeln!(out, "{}", manifest.to_pretty_json()?)?;

        Ok(manifest)
    }
}

/// Print the payload of every case without contacting a server.
pub fn preview_payloads<W: Write>(
    cases: &[DemoDefinition],
    extension_url: &str,
    out: &mut W,
) -> Result<()> {
    for def in cases {
        let payload = build_payload(&def.title, &def.case, extension_url)?;
        writeln!(out, "=== {} ===", def.title)?;
        writeln!(out, "{}", serde_json::to_string_pretty(&payload)?)?;
    }
    Ok(())
}
