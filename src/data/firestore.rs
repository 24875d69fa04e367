use std::collections::HashMap;
use std::future::Future;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use reqwest::Client;
use serde::Deserialize;
use serde_json::{Value, json};
use tracing::{debug, info};

use crate::{
    data::repository::ShowRepository,
    domain::{
        dates::canonical,
        show::{BadgeType, Show},
    },
};

const FIRESTORE_URL: &str = "https://firestore.googleapis.com/v1";
pub const DEFAULT_COLLECTION: &str = "shows";

#[derive(Debug, Clone)]
pub struct FirestoreClient {
    client: Client,
    base_url: String,
    project_id: String,
    collection: String,
    api_key: Option<String>,
}

impl FirestoreClient {
    pub fn new(project_id: impl Into<String>) -> Result<Self> {
        Self::with_base_url(FIRESTORE_URL, project_id)
    }

    pub fn with_base_url(
        base_url: impl Into<String>,
        project_id: impl Into<String>,
    ) -> Result<Self> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(10))
            .build()
            .context("building firestore http client failed")?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            project_id: project_id.into(),
            collection: DEFAULT_COLLECTION.to_string(),
            api_key: None,
        })
    }

    #[must_use]
    pub fn collection(mut self, collection: impl Into<String>) -> Self {
        self.collection = collection.into();
        self
    }

    #[must_use]
    pub fn api_key(mut self, api_key: Option<String>) -> Self {
        self.api_key = api_key;
        self
    }

    fn query_url(&self) -> String {
        format!(
            "{}/projects/{}/databases/(default)/documents:runQuery",
            self.base_url, self.project_id
        )
    }

    pub async fn fetch_upcoming(&self, today: NaiveDate) -> Result<Vec<Show>> {
        let url = self.query_url();
        debug!(%url, collection = %self.collection, %today, "querying upcoming shows");

        let mut request = self
            .client
            .post(&url)
            .json(&upcoming_query(&self.collection, today));
        if let Some(key) = self.api_key.as_deref() {
            request = request.query(&[("key", key)]);
        }

        let rows: Vec<QueryRow> = request
            .send()
            .await
            .context("show query request failed")?
            .error_for_status()
            .context("show query returned non-success status")?
            .json()
            .await
            .context("failed to decode show query response")?;

        let shows = rows
            .into_iter()
            .filter_map(|row| row.document)
            .map(show_from_document)
            .collect::<Result<Vec<_>>>()?;

        info!(count = shows.len(), "fetched upcoming shows");
        Ok(shows)
    }
}

impl ShowRepository for FirestoreClient {
    fn list_upcoming(&self, today: NaiveDate) -> impl Future<Output = Result<Vec<Show>>> + Send {
        self.fetch_upcoming(today)
    }
}

fn upcoming_query(collection: &str, today: NaiveDate) -> Value {
    json!({
        "structuredQuery": {
            "from": [{ "collectionId": collection }],
            "where": {
                "fieldFilter": {
                    "field": { "fieldPath": "date" },
                    "op": "GREATER_THAN_OR_EQUAL",
                    "value": { "stringValue": canonical(today) }
                }
            },
            "orderBy": [{
                "field": { "fieldPath": "date" },
                "direction": "ASCENDING"
            }]
        }
    })
}

#[derive(Debug, Deserialize)]
struct QueryRow {
    document: Option<Document>,
}

#[derive(Debug, Deserialize)]
struct Document {
    name: String,
    #[serde(default)]
    fields: HashMap<String, FieldValue>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct FieldValue {
    string_value: Option<String>,
    integer_value: Option<String>,
    double_value: Option<f64>,
}

impl FieldValue {
    fn as_text(&self) -> Option<String> {
        self.string_value
            .clone()
            .or_else(|| self.integer_value.clone())
            .or_else(|| self.double_value.map(|v| v.to_string()))
    }
}

fn show_from_document(document: Document) -> Result<Show> {
    let id = document
        .name
        .rsplit('/')
        .next()
        .unwrap_or_default()
        .to_string();
    let text = |key: &str| document.fields.get(key).and_then(FieldValue::as_text);
    let required = |key: &str| {
        text(key).with_context(|| format!("show document {id} is missing field `{key}`"))
    };

    Ok(Show {
        date: required("date")?,
        band_name: required("bandName")?,
        time: text("time").unwrap_or_default(),
        cover: text("cover").unwrap_or_default(),
        badge: text("badge").filter(|badge| !badge.trim().is_empty()),
        badge_type: text("badgeType").and_then(|tag| BadgeType::from_tag(&tag)),
        id,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::date;

    fn document(value: Value) -> Document {
        serde_json::from_value(value).expect("valid document fixture")
    }

    #[test]
    fn flattens_typed_fields() {
        let show = show_from_document(document(json!({
            "name": "projects/p/databases/(default)/documents/shows/abc123",
            "fields": {
                "date": { "stringValue": "2026-02-14" },
                "bandName": { "stringValue": "The Valentines" },
                "time": { "stringValue": "8:00 PM" },
                "cover": { "integerValue": "15" },
                "badge": { "stringValue": "Valentine's" },
                "badgeType": { "stringValue": "special" }
            }
        })))
        .expect("complete document");

        assert_eq!(show.id, "abc123");
        assert_eq!(show.cover, "15");
        assert_eq!(show.badge_type, Some(BadgeType::Special));
    }

    #[test]
    fn optional_fields_fall_back() {
        let show = show_from_document(document(json!({
            "name": "projects/p/databases/(default)/documents/shows/x",
            "fields": {
                "date": { "stringValue": "2026-02-07" },
                "bandName": { "stringValue": "Quiet Night" },
                "badge": { "stringValue": "" },
                "badgeType": { "nullValue": null }
            }
        })))
        .expect("document without extras");

        assert_eq!(show.time, "");
        assert_eq!(show.badge, None);
        assert_eq!(show.badge_type, None);
    }

    #[test]
    fn missing_band_name_is_an_error() {
        let err = show_from_document(document(json!({
            "name": "projects/p/databases/(default)/documents/shows/x",
            "fields": { "date": { "stringValue": "2026-02-07" } }
        })))
        .expect_err("bandName is required");
        assert!(err.to_string().contains("bandName"));
    }

    #[test]
    fn query_filters_and_orders_by_date() {
        let query = upcoming_query("shows", date("2026-02-06"));
        let structured = &query["structuredQuery"];
        assert_eq!(structured["from"][0]["collectionId"], "shows");
        assert_eq!(
            structured["where"]["fieldFilter"]["value"]["stringValue"],
            "2026-02-06"
        );
        assert_eq!(structured["orderBy"][0]["direction"], "ASCENDING");
    }

    #[test]
    fn query_url_targets_default_database() {
        let client = FirestoreClient::with_base_url("http://localhost:8080/v1/", "demo")
            .expect("client");
        assert_eq!(
            client.query_url(),
            "http://localhost:8080/v1/projects/demo/databases/(default)/documents:runQuery"
        );
    }
}
