use http::Method;
use tokio_util::sync::CancellationToken;

use super::StatuspageClient;
use super::transport::HttpClient;
use super::types::{Incident, IncidentEnvelope, UpdateIncidentParams};
use crate::error::StatuspageError;

/// Incident operations, scoped to a page.
///
/// API docs: <https://developer.statuspage.io/#tag/incidents>
pub struct IncidentService<'c, T: HttpClient> {
    client: &'c StatuspageClient<T>,
}

impl<'c, T: HttpClient> IncidentService<'c, T> {
    pub(crate) fn new(client: &'c StatuspageClient<T>) -> Self {
        Self { client }
    }

    /// List incidents for a page.
    ///
    /// Only what a single call returns is surfaced; further pages of
    /// results are not requested.
    pub async fn list(
        &self,
        cancel: &CancellationToken,
        page_id: &str,
    ) -> Result<Vec<Incident>, StatuspageError> {
        let path = format!("v1/pages/{page_id}/incidents");
        self.client
            .send::<(), _>(cancel, Method::GET, &path, None)
            .await
    }

    pub async fn create(
        &self,
        cancel: &CancellationToken,
        page_id: &str,
        params: &UpdateIncidentParams,
    ) -> Result<Incident, StatuspageError> {
        let path = format!("v1/pages/{page_id}/incidents");
        let payload = IncidentEnvelope { incident: params };
        self.client
            .send(cancel, Method::POST, &path, Some(&payload))
            .await
    }

    pub async fn get(
        &self,
        cancel: &CancellationToken,
        page_id: &str,
        incident_id: &str,
    ) -> Result<Incident, StatuspageError> {
        let path = format!("v1/pages/{page_id}/incidents/{incident_id}");
        self.client
            .send::<(), _>(cancel, Method::GET, &path, None)
            .await
    }

    pub async fn update(
        &self,
        cancel: &CancellationToken,
        page_id: &str,
        incident_id: &str,
        params: &UpdateIncidentParams,
    ) -> Result<Incident, StatuspageError> {
        let path = format!("v1/pages/{page_id}/incidents/{incident_id}");
        let payload = IncidentEnvelope { incident: params };
        self.client
            .send(cancel, Method::PATCH, &path, Some(&payload))
            .await
    }

    /// Delete an incident, returning it as it was just before deletion.
    pub async fn delete(
        &self,
        cancel: &CancellationToken,
        page_id: &str,
        incident_id: &str,
    ) -> Result<Incident, StatuspageError> {
        let path = format!("v1/pages/{page_id}/incidents/{incident_id}");
        self.client
            .send::<(), _>(cancel, Method::DELETE, &path, None)
            .await
    }
}
