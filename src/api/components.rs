use http::Method;
use tokio_util::sync::CancellationToken;

use super::StatuspageClient;
use super::transport::HttpClient;
use super::types::{Component, ComponentEnvelope, UpdateComponentParams};
use crate::error::StatuspageError;

/// Component operations, scoped to a page.
pub struct ComponentService<'c, T: HttpClient> {
    client: &'c StatuspageClient<T>,
}

impl<'c, T: HttpClient> ComponentService<'c, T> {
    pub(crate) fn new(client: &'c StatuspageClient<T>) -> Self {
        Self { client }
    }

    pub async fn list(
        &self,
        cancel: &CancellationToken,
        page_id: &str,
    ) -> Result<Vec<Component>, StatuspageError> {
        let path = format!("v1/pages/{page_id}/components");
        self.client
            .send::<(), _>(cancel, Method::GET, &path, None)
            .await
    }

    pub async fn create(
        &self,
        cancel: &CancellationToken,
        page_id: &str,
        params: &UpdateComponentParams,
    ) -> Result<Component, StatuspageError> {
        let path = format!("v1/pages/{page_id}/components");
        let payload = ComponentEnvelope { component: params };
        self.client
            .send(cancel, Method::POST, &path, Some(&payload))
            .await
    }

    pub async fn get(
        &self,
        cancel: &CancellationToken,
        page_id: &str,
        component_id: &str,
    ) -> Result<Component, StatuspageError> {
        let path = format!("v1/pages/{page_id}/components/{component_id}");
        self.client
            .send::<(), _>(cancel, Method::GET, &path, None)
            .await
    }

    pub async fn update(
        &self,
        cancel: &CancellationToken,
        page_id: &str,
        component_id: &str,
        params: &UpdateComponentParams,
    ) -> Result<Component, StatuspageError> {
        let path = format!("v1/pages/{page_id}/components/{component_id}");
        let payload = ComponentEnvelope { component: params };
        self.client
            .send(cancel, Method::PATCH, &path, Some(&payload))
            .await
    }

    /// Delete a component. The provider answers with an empty body.
    pub async fn delete(
        &self,
        cancel: &CancellationToken,
        page_id: &str,
        component_id: &str,
    ) -> Result<(), StatuspageError> {
        let path = format!("v1/pages/{page_id}/components/{component_id}");
        self.client
            .send_without_result::<()>(cancel, Method::DELETE, &path, None)
            .await
    }
}
