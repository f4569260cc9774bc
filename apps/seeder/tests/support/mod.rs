//! Shared helpers for seeder integration tests

#![allow(dead_code)]

use async_trait::async_trait;
use serde_json::Value;
use std::path::Path;
use std::sync::Mutex;
use uti_demo_fhir_client::Error as ClientError;
use uti_demo_seeder::{
    builtin_cases, Error, PatientResource, PatientSubmitter, Result, Seeder, SeederSettings,
    Submitted,
};

pub const TEST_EXTENSION_URL: &str = "https://example.org/fhir/StructureDefinition/uti-demo-input";

/// In-memory stand-in for a FHIR server.
///
/// Records every payload, assigns `demo-<n>` ids, and can reject the n-th
/// submission (0-based) with a given status and body.
pub struct FakeSubmitter {
    received: Mutex<Vec<PatientResource>>,
    reject_at: Option<(usize, u16, Value)>,
    omit_ids: bool,
}

impl FakeSubmitter {
    pub fn accepting() -> Self {
        Self {
            received: Mutex::new(Vec::new()),
            reject_at: None,
            omit_ids: false,
        }
    }

    pub fn rejecting_at(index: usize, status: u16, body: Value) -> Self {
        Self {
            reject_at: Some((index, status, body)),
            ..Self::accepting()
        }
    }

    pub fn without_ids() -> Self {
        Self {
            omit_ids: true,
            ..Self::accepting()
        }
    }

    pub fn received(&self) -> Vec<PatientResource> {
        self.received.lock().unwrap().clone()
    }
}

#[async_trait]
impl PatientSubmitter for FakeSubmitter {
    async fn submit(&self, resource: &PatientResource) -> Result<Submitted> {
        let index = {
            let mut received = self.received.lock().unwrap();
            received.push(resource.clone());
            received.len() - 1
        };

        if let Some((at, status, body)) = &self.reject_at {
            if *at == index {
                return Err(Error::Client(ClientError::HttpStatus {
                    status: *status,
                    body: body.clone(),
                }));
            }
        }

        let mut created = resource.clone();
        if !self.omit_ids {
            created.id = Some(format!("demo-{}", index + 1));
        }
        Ok(Submitted {
            status: 201,
            resource: created,
        })
    }
}

pub fn settings(fhir_base: &str, output_path: &Path) -> SeederSettings {
    SeederSettings {
        fhir_base: fhir_base.to_string(),
        extension_url: TEST_EXTENSION_URL.to_string(),
        output_path: output_path.to_path_buf(),
    }
}

/// Seeder over the built-in catalogue.
pub fn seeder_with<S: PatientSubmitter>(submitter: S, output_path: &Path) -> Seeder<S> {
    Seeder::new(
        submitter,
        settings("https://fhir.example.org/r4", output_path),
        builtin_cases().expect("built-in catalogue parses"),
    )
}
