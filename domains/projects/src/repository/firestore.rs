//! Firestore REST Store Implementation
//!
//! Reads the project collection through the Firestore `documents.list`
//! endpoint at
//! `{base_url}/v1/projects/{project}/databases/(default)/documents/{collection}`.
//! Field values arrive as typed envelopes (`stringValue`, `integerValue`,
//! `arrayValue`, ...) which are decoded with per-field defaults: missing
//! `tech` becomes an empty list, missing `order` becomes 0, and missing
//! timestamps fall back to the document times, then to now.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::domain::entities::{sort_by_order, Project};
use crate::repository::{FirestoreConfig, ProjectStore, ProjectsError};

/// Firestore REST read client
pub struct FirestoreStore {
    http: reqwest::Client,
    documents_url: String,
    api_key: Option<String>,
}

impl FirestoreStore {
    /// Create a new store client from configuration
    pub fn new(config: &FirestoreConfig) -> Self {
        let documents_url = format!(
            "{}/v1/projects/{}/databases/(default)/documents/{}",
            config.base_url.trim_end_matches('/'),
            config.project_id,
            config.collection,
        );
        Self {
            http: reqwest::Client::new(),
            documents_url,
            api_key: config.api_key.clone(),
        }
    }

    async fn fetch_page(
        &self,
        page_token: Option<&str>,
    ) -> Result<ListDocumentsResponse, ProjectsError> {
        let mut request = self
            .http
            .get(&self.documents_url)
            .query(&[("orderBy", "order")]);
        if let Some(key) = &self.api_key {
            request = request.query(&[("key", key)]);
        }
        if let Some(token) = page_token {
            request = request.query(&[("pageToken", token)]);
        }

        let response = request
            .send()
            .await
            .map_err(|e| ProjectsError::Request(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Failed to read response body".to_string());
            return Err(ProjectsError::Response(format!(
                "Firestore returned {}: {}",
                status, body
            )));
        }

        response
            .json::<ListDocumentsResponse>()
            .await
            .map_err(|e| ProjectsError::Decode(e.to_string()))
    }
}

#[async_trait::async_trait]
impl ProjectStore for FirestoreStore {
    async fn list_projects(&self) -> Result<Vec<Project>, ProjectsError> {
        let mut projects = Vec::new();
        let mut page_token: Option<String> = None;

        // All-or-nothing: a failure on any page rejects the whole read
        loop {
            let page = self.fetch_page(page_token.as_deref()).await?;
            projects.extend(page.documents.into_iter().map(FirestoreDocument::into_project));

            match page.next_page_token {
                Some(token) if !token.is_empty() => page_token = Some(token),
                _ => break,
            }
        }

        sort_by_order(&mut projects);
        tracing::debug!(count = projects.len(), "Fetched project collection");
        Ok(projects)
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct ListDocumentsResponse {
    documents: Vec<FirestoreDocument>,
    next_page_token: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct FirestoreDocument {
    /// Full resource name; the document id is the last path segment
    name: String,
    fields: HashMap<String, FirestoreValue>,
    create_time: Option<DateTime<Utc>>,
    update_time: Option<DateTime<Utc>>,
}

impl FirestoreDocument {
    fn doc_id(&self) -> String {
        self.name
            .rsplit('/')
            .next()
            .unwrap_or_default()
            .to_string()
    }

    fn into_project(self) -> Project {
        let id = self.doc_id();
        let str_field = |fields: &HashMap<String, FirestoreValue>, key: &str| {
            fields
                .get(key)
                .and_then(FirestoreValue::as_str)
                .unwrap_or_default()
                .to_string()
        };

        let created_at = self
            .fields
            .get("createdAt")
            .and_then(FirestoreValue::as_timestamp)
            .or(self.create_time)
            .unwrap_or_else(Utc::now);
        let updated_at = self
            .fields
            .get("updatedAt")
            .and_then(FirestoreValue::as_timestamp)
            .or(self.update_time)
            .unwrap_or_else(Utc::now);

        Project {
            id,
            title: str_field(&self.fields, "title"),
            description: str_field(&self.fields, "description"),
            image_src: str_field(&self.fields, "imageSrc"),
            url: str_field(&self.fields, "url"),
            tech: self
                .fields
                .get("tech")
                .map(FirestoreValue::as_string_list)
                .unwrap_or_default(),
            order: self
                .fields
                .get("order")
                .and_then(FirestoreValue::as_i64)
                .unwrap_or(0),
            created_at,
            updated_at,
        }
    }
}

/// One typed Firestore value envelope; exactly one variant field is set
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct FirestoreValue {
    string_value: Option<String>,
    // Firestore serializes 64-bit integers as decimal strings
    integer_value: Option<String>,
    double_value: Option<f64>,
    timestamp_value: Option<DateTime<Utc>>,
    array_value: Option<ArrayValue>,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct ArrayValue {
    #[serde(default)]
    values: Vec<FirestoreValue>,
}

impl FirestoreValue {
    fn as_str(&self) -> Option<&str> {
        self.string_value.as_deref()
    }

    fn as_i64(&self) -> Option<i64> {
        if let Some(raw) = &self.integer_value {
            return raw.parse().ok();
        }
        self.double_value.map(|d| d as i64)
    }

    fn as_timestamp(&self) -> Option<DateTime<Utc>> {
        self.timestamp_value
    }

    fn as_string_list(&self) -> Vec<String> {
        self.array_value
            .as_ref()
            .map(|array| {
                array
                    .values
                    .iter()
                    .filter_map(|v| v.as_str().map(str::to_string))
                    .collect()
            })
            .unwrap_or_default()
    }
}
