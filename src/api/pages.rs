use http::Method;
use tokio_util::sync::CancellationToken;

use super::StatuspageClient;
use super::transport::HttpClient;
use super::types::{Page, PageEnvelope, UpdatePageParams};
use crate::error::StatuspageError;

/// Operations on the pages the API key can access.
pub struct PageService<'c, T: HttpClient> {
    client: &'c StatuspageClient<T>,
}

impl<'c, T: HttpClient> PageService<'c, T> {
    pub(crate) fn new(client: &'c StatuspageClient<T>) -> Self {
        Self { client }
    }

    pub async fn list(&self, cancel: &CancellationToken) -> Result<Vec<Page>, StatuspageError> {
        self.client
            .send::<(), _>(cancel, Method::GET, "v1/pages", None)
            .await
    }

    pub async fn get(
        &self,
        cancel: &CancellationToken,
        page_id: &str,
    ) -> Result<Page, StatuspageError> {
        let path = format!("v1/pages/{page_id}");
        self.client
            .send::<(), _>(cancel, Method::GET, &path, None)
            .await
    }

    pub async fn update(
        &self,
        cancel: &CancellationToken,
        page_id: &str,
        params: &UpdatePageParams,
    ) -> Result<Page, StatuspageError> {
        let path = format!("v1/pages/{page_id}");
        let payload = PageEnvelope { page: params };
        self.client
            .send(cancel, Method::PATCH, &path, Some(&payload))
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::stub::StubTransport;
    use crate::config::Config;
    use http::StatusCode;
    use serde_json::json;

    fn client(transport: &StubTransport) -> StatuspageClient<StubTransport> {
        StatuspageClient::with_transport(
            Config::new("key").with_api_url("https://api.example.test/"),
            transport.clone(),
        )
    }

    #[tokio::test]
    async fn test_list_pages() {
        let transport = StubTransport::new().respond(
            StatusCode::OK,
            r#"[{"id": "p1", "name": "Acme Status", "subdomain": "acme", "time_zone": "UTC"}]"#,
        );

        let pages = client(&transport)
            .pages()
            .list(&CancellationToken::new())
            .await
            .unwrap();

        assert_eq!(pages.len(), 1);
        assert_eq!(pages[0].subdomain.as_deref(), Some("acme"));
        assert!(pages[0].domain.is_none());
        assert_eq!(
            transport.requests()[0].url,
            "https://api.example.test/v1/pages"
        );
    }

    #[tokio::test]
    async fn test_get_page() {
        let transport = StubTransport::new().respond(
            StatusCode::OK,
            r#"{"id": "p1", "allow_sms_subscribers": false, "updated_at": "2023-11-20T08:00:00.000Z"}"#,
        );

        let page = client(&transport)
            .pages()
            .get(&CancellationToken::new(), "p1")
            .await
            .unwrap();

        assert_eq!(page.allow_sms_subscribers, Some(false));
        assert!(page.allow_email_subscribers.is_none());
        assert!(page.updated_at.is_some());
    }

    #[tokio::test]
    async fn test_update_page_sends_envelope() {
        let transport = StubTransport::new().respond(
            StatusCode::OK,
            r#"{"id": "p1", "headline": "All good"}"#,
        );
        let params = UpdatePageParams {
            headline: Some("All good".to_string()),
            hidden_from_search: Some(true),
            ..Default::default()
        };

        let page = client(&transport)
            .pages()
            .update(&CancellationToken::new(), "p1", &params)
            .await
            .unwrap();

        assert_eq!(page.headline.as_deref(), Some("All good"));
        assert_eq!(transport.requests()[0].method, Method::PATCH);
        assert_eq!(
            transport.json_body(0),
            json!({"page": {"headline": "All good", "hidden_from_search": true}})
        );
    }
}
