//! Transport seam between the seeder and the FHIR server

use crate::error::Result;
use crate::payload::PatientResource;
use async_trait::async_trait;
use uti_demo_fhir_client::FhirClient;

/// A created Patient together with the HTTP status that produced it.
#[derive(Debug, Clone, PartialEq)]
pub struct Submitted {
    pub status: u16,
    pub resource: PatientResource,
}

/// Creates Patient resources on a server.
///
/// Each call creates a new resource; there is no lookup-before-create, so
/// submitting the same payload twice yields two distinct ids.
#[async_trait]
pub trait PatientSubmitter: Send + Sync {
    async fn submit(&self, resource: &PatientResource) -> Result<Submitted>;
}

#[async_trait]
impl PatientSubmitter for FhirClient {
    async fn submit(&self, resource: &PatientResource) -> Result<Submitted> {
        let created = self.create(&resource.resource_type, resource).await?;
        let status = created.status;
        let resource = serde_json::from_value(created.body)?;
        Ok(Submitted { status, resource })
    }
}
