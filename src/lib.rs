//! Client for the Statuspage REST API.
//!
//! ```no_run
//! use statuspage::{Config, StatuspageClient, UpdateIncidentParams};
//! use tokio_util::sync::CancellationToken;
//!
//! # async fn run() -> anyhow::Result<()> {
//! let client = StatuspageClient::new(Config::from_env()?)?;
//! let cancel = CancellationToken::new();
//!
//! let incidents = client.incidents().list(&cancel, "page-id").await?;
//! println!("{} incidents", incidents.len());
//!
//! let params = UpdateIncidentParams {
//!     name: Some("Degraded API performance".to_string()),
//!     status: Some("investigating".to_string()),
//!     ..Default::default()
//! };
//! client.incidents().create(&cancel, "page-id", &params).await?;
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod config;
pub mod error;
pub mod timestamp;

pub use api::StatuspageClient;
pub use api::components::ComponentService;
pub use api::incidents::IncidentService;
pub use api::pages::PageService;
pub use api::transport::{HttpClient, HttpRequest, HttpResponse, ReqwestTransport};
pub use api::types::{
    Component, Incident, IncidentUpdate, Page, UpdateComponentParams, UpdateIncidentParams,
    UpdatePageParams,
};
pub use config::Config;
pub use error::{StatuspageError, TransportError};
pub use timestamp::Timestamp;
