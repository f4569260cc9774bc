//! Run manifest: the record of which patients a seeding run created

use crate::error::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::ffi::OsString;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RunManifest {
    pub generated_at: DateTime<Utc>,
    pub fhir_base: String,
    pub extension_url: String,

    /// One entry per created patient, in catalogue order
    pub patients: Vec<PatientEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PatientEntry {
    pub title: String,
    pub patient_id: String,

    /// Relative reference, `Patient/<id>`
    pub patient_ref: String,
}

impl PatientEntry {
    pub fn new(title: impl Into<String>, patient_id: impl Into<String>) -> Self {
        let patient_id = patient_id.into();
        Self {
            title: title.into(),
            patient_ref: format!("Patient/{}", patient_id),
            patient_id,
        }
    }
}

impl RunManifest {
    pub fn new(
        generated_at: DateTime<Utc>,
        fhir_base: impl Into<String>,
        extension_url: impl Into<String>,
        patients: Vec<PatientEntry>,
    ) -> Self {
        Self {
            generated_at,
            fhir_base: fhir_base.into(),
            extension_url: extension_url.into(),
            patients,
        }
    }

    /// Pretty JSON, 2-space indent, non-ASCII kept literally.
    pub fn to_pretty_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Write the manifest to `path`, replacing any existing file.
    ///
    /// The content goes to a sibling `.tmp` file first and is renamed into
    /// place, so readers never observe a half-written manifest.
    pub fn write(&self, path: &Path) -> Result<()> {
        let json = self.to_pretty_json()?;
        let tmp = tmp_path(path);

        fs::write(&tmp, json.as_bytes())?;
        if let Err(e) = fs::rename(&tmp, path) {
            let _ = fs::remove_file(&tmp);
            return Err(e.into());
        }
        Ok(())
    }

    /// Read a manifest written by a previous run. `Ok(None)` if there is none.
    pub fn load(path: &Path) -> Result<Option<Self>> {
        let raw = match fs::read_to_string(path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };
        Ok(Some(serde_json::from_str(&raw)?))
    }
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut name = OsString::from(path.as_os_str());
    name.push(".tmp");
    PathBuf::from(name)
}
