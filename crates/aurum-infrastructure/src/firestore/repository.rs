//! FirestoreCatalogRepository - catalog gateway over the Firestore REST API.
//!
//! Talks to `projects/{project}/databases/{database}/documents/{collection}`
//! directly with reqwest; no SDK is involved.

use super::document::{Document, ListDocumentsResponse, decode_item, document_id, encode_item};
use aurum_core::catalog::{CatalogRepository, Item, NewItem};
use aurum_core::config::{DEFAULT_COLLECTION, DEFAULT_FIRESTORE_BASE_URL, FirestoreSettings};
use aurum_core::{AurumError, Result};
use reqwest::{Client, Method, RequestBuilder};

const SERVICE: &str = "firestore";
const PAGE_SIZE: &str = "300";

/// Catalog gateway backed by a Firestore collection.
#[derive(Clone)]
pub struct FirestoreCatalogRepository {
    client: Client,
    base_url: String,
    project_id: String,
    database: String,
    collection: String,
    api_key: Option<String>,
}

impl FirestoreCatalogRepository {
    /// Creates a repository for `project_id` using the default database and collection.
    pub fn new(project_id: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: DEFAULT_FIRESTORE_BASE_URL.to_string(),
            project_id: project_id.into(),
            database: "(default)".to_string(),
            collection: DEFAULT_COLLECTION.to_string(),
            api_key: None,
        }
    }

    /// Builds the repository from configuration.
    ///
    /// Fails with `NotConfigured` when no project id is set.
    pub fn from_settings(settings: &FirestoreSettings) -> Result<Self> {
        let project_id = settings
            .project_id
            .as_deref()
            .filter(|_| settings.is_configured())
            .ok_or_else(|| AurumError::not_configured("firestore project_id"))?;

        let mut repository = Self::new(project_id)
            .with_base_url(&settings.base_url)
            .with_database(&settings.database)
            .with_collection(&settings.collection);
        if let Some(api_key) = settings.api_key.as_deref().filter(|key| !key.is_empty()) {
            repository = repository.with_api_key(api_key);
        }
        Ok(repository)
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn with_database(mut self, database: impl Into<String>) -> Self {
        self.database = database.into();
        self
    }

    pub fn with_collection(mut self, collection: impl Into<String>) -> Self {
        self.collection = collection.into();
        self
    }

    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    fn collection_url(&self) -> String {
        format!(
            "{}/projects/{}/databases/{}/documents/{}",
            self.base_url, self.project_id, self.database, self.collection
        )
    }

    fn request(&self, method: Method, url: String) -> RequestBuilder {
        let builder = self.client.request(method, url);
        match &self.api_key {
            Some(key) => builder.query(&[("key", key.as_str())]),
            None => builder,
        }
    }

    async fn send(&self, builder: RequestBuilder) -> Result<reqwest::Response> {
        let response = builder.send().await.map_err(|err| {
            AurumError::gateway(
                SERVICE,
                format!("request failed: {err}"),
                None,
                err.is_connect() || err.is_timeout(),
            )
        })?;

        if response.status().is_success() {
            return Ok(response);
        }

        let status = response.status();
        let body = response
            .text()
            .await
            .unwrap_or_else(|_| "Failed to read Firestore error body".to_string());
        Err(AurumError::http_status(SERVICE, status.as_u16(), &body))
    }

    async fn list_page(&self, page_token: Option<&str>) -> Result<ListDocumentsResponse> {
        let mut builder = self
            .request(Method::GET, self.collection_url())
            .query(&[("pageSize", PAGE_SIZE)]);
        if let Some(token) = page_token {
            builder = builder.query(&[("pageToken", token)]);
        }

        let response = self.send(builder).await?;
        response.json().await.map_err(|err| AurumError::Serialization {
            format: "JSON".to_string(),
            message: format!("failed to parse Firestore list response: {err}"),
        })
    }
}

#[async_trait::async_trait]
impl CatalogRepository for FirestoreCatalogRepository {
    async fn list_all(&self) -> Result<Vec<Item>> {
        let mut items = Vec::new();
        let mut page_token: Option<String> = None;

        loop {
            let page = self.list_page(page_token.as_deref()).await?;
            for document in &page.documents {
                match decode_item(document) {
                    Ok(item) => items.push(item),
                    Err(err) => tracing::warn!("Skipping malformed catalog document: {}", err),
                }
            }

            match page.next_page_token.filter(|token| !token.is_empty()) {
                Some(token) => page_token = Some(token),
                None => break,
            }
        }

        tracing::debug!(
            "Listed {} catalog items from {}/{}",
            items.len(),
            self.project_id,
            self.collection
        );
        Ok(items)
    }

    async fn create(&self, item: &NewItem) -> Result<String> {
        let builder = self
            .request(Method::POST, self.collection_url())
            .json(&encode_item(item));
        let response = self.send(builder).await?;

        let document: Document = response.json().await.map_err(|err| AurumError::Serialization {
            format: "JSON".to_string(),
            message: format!("failed to parse Firestore create response: {err}"),
        })?;
        let id = document_id(&document.name)
            .ok_or_else(|| AurumError::internal(format!(
                "Firestore returned a document without id: '{}'",
                document.name
            )))?
            .to_string();

        tracing::debug!("Created catalog document {}", id);
        Ok(id)
    }

    async fn delete(&self, id: &str) -> Result<()> {
        let url = format!("{}/{}", self.collection_url(), id);
        match self.send(self.request(Method::DELETE, url)).await {
            Ok(_) => {
                tracing::debug!("Deleted catalog document {}", id);
                Ok(())
            }
            Err(AurumError::Gateway {
                status: Some(404), ..
            }) => {
                tracing::debug!("Catalog document {} was already absent", id);
                Ok(())
            }
            Err(err) => Err(err),
        }
    }
}
