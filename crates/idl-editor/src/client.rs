use idl_store::SchemaName;
use reqwest::{header, StatusCode};
use serde::{Deserialize, Serialize};
use url::Url;

/// What `GET /user-idl/{name}` answers.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct UserIdl {
    #[serde(rename = "schemaIDL")]
    pub schema_idl: String,
    /// Present in extension mode only.
    #[serde(rename = "extensionIDL", default, skip_serializing_if = "Option::is_none")]
    pub extension_idl: Option<String>,
    /// Absent means editing is allowed.
    #[serde(rename = "editMode", default, skip_serializing_if = "Option::is_none")]
    pub edit_mode: Option<bool>,
}

#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("{0}")]
    NotFound(String),
    /// The server answered with an error, the message is its body.
    #[error("{0}")]
    Rejected(String),
    #[error("{0}")]
    Http(#[from] reqwest::Error),
    #[error("invalid url: {0}")]
    Url(#[from] url::ParseError),
}

/// Loads and saves IDL documents for the editor.
#[async_trait::async_trait]
pub trait IdlClient: Send + Sync {
    async fn fetch(&self, name: &SchemaName) -> Result<UserIdl, ClientError>;

    async fn persist(&self, name: &SchemaName, idl: &str) -> Result<(), ClientError>;
}

/// Talks to a running faker server.
#[derive(Clone)]
pub struct HttpIdlClient {
    http_client: reqwest::Client,
    base_url: Url,
}

impl HttpIdlClient {
    pub fn new(mut base_url: Url) -> Self {
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }

        Self {
            http_client: reqwest::Client::new(),
            base_url,
        }
    }

    fn url(&self, name: &SchemaName) -> Result<Url, url::ParseError> {
        if name.is_default() {
            self.base_url.join("user-idl")
        } else {
            self.base_url.join(&format!("user-idl/{name}"))
        }
    }
}

#[derive(Deserialize)]
struct NotFoundBody {
    error: String,
}

#[async_trait::async_trait]
impl IdlClient for HttpIdlClient {
    async fn fetch(&self, name: &SchemaName) -> Result<UserIdl, ClientError> {
        let url = self.url(name)?;
        let response = self.http_client.get(url).send().await?;

        match response.status() {
            StatusCode::NOT_FOUND => {
                let body: NotFoundBody = response.json().await?;
                Err(ClientError::NotFound(body.error))
            }
            status if status.is_success() => Ok(response.json().await?),
            _ => Err(ClientError::Rejected(response.text().await?)),
        }
    }

    async fn persist(&self, name: &SchemaName, idl: &str) -> Result<(), ClientError> {
        let url = self.url(name)?;

        let response = self
            .http_client
            .post(url)
            .header(header::CONTENT_TYPE, "text/plain; charset=utf-8")
            .body(idl.to_owned())
            .send()
            .await?;

        if response.status().is_success() {
            tracing::debug!("schema {name} persisted");
            Ok(())
        } else {
            let message = response.text().await?;
            tracing::warn!("persisting schema {name} was rejected: {message}");
            Err(ClientError::Rejected(message))
        }
    }
}
