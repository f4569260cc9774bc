//! Patient payload construction
//!
//! A demo case travels to the server as a minimal `Patient` whose single
//! extension carries the case as a compact JSON string in `valueString`.

use crate::cases::DemoCase;
use crate::error::Result;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// Family name given to every demo patient.
pub const DEMO_FAMILY: &str = "Demo";

/// Placeholder only; the case's `ageYears` is authoritative.
pub const PLACEHOLDER_BIRTH_DATE: &str = "1970-01-01";

pub const DEMO_GENDER: &str = "other";

/// FHIR Patient, reduced to what the seeder writes and reads back.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PatientResource {
    /// Resource type - always "Patient"
    #[serde(default = "default_resource_type")]
    pub resource_type: String,

    /// Logical id, assigned by the server
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub name: Vec<HumanName>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub birth_date: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub extension: Vec<Extension>,

    /// Anything else the server adds (meta, text, ...)
    #[serde(flatten)]
    pub additional: BTreeMap<String, Value>,
}

fn default_resource_type() -> String {
    "Patient".to_string()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HumanName {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub family: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub given: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Extension {
    pub url: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub value_string: Option<String>,
}

impl PatientResource {
    /// The first given name, which holds the demo title.
    pub fn title(&self) -> Option<&str> {
        self.name
            .first()
            .and_then(|n| n.given.first())
            .map(String::as_str)
    }

    /// Decode the demo case embedded under `extension_url`.
    ///
    /// Returns `Ok(None)` when no such extension carries a `valueString`.
    pub fn demo_case(&self, extension_url: &str) -> Result<Option<DemoCase>> {
        let raw = self
            .extension
            .iter()
            .filter(|ext| ext.url == extension_url)
            .find_map(|ext| ext.value_string.as_deref());

        match raw {
            Some(raw) => Ok(Some(serde_json::from_str(raw)?)),
            None => Ok(None),
        }
    }
}

/// Build the Patient payload for one demo case.
///
/// Deterministic for a given input. The case is embedded as compact JSON with
/// non-ASCII text kept as-is. Field ranges are not checked here; the server
/// is the only validator.
pub fn build_payload(title: &str, case: &DemoCase, extension_url: &str) -> Result<PatientResource> {
    let value_string = serde_json::to_string(case)?;

    Ok(PatientResource {
        resource_type: default_resource_type(),
        id: None,
        name: vec![HumanName {
            family: Some(DEMO_FAMILY.to_string()),
            given: vec![title.to_string()],
        }],
        gender: Some(DEMO_GENDER.to_string()),
        birth_date: Some(PLACEHOLDER_BIRTH_DATE.to_string()),
        extension: vec![Extension {
            url: extension_url.to_string(),
            value_string: Some(value_string),
        }],
        additional: BTreeMap::new(),
    })
}
