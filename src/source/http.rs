use std::time::Duration;

use async_trait::async_trait;
use percent_encoding::{AsciiSet, CONTROLS, utf8_percent_encode};
use reqwest::{Client, Method, StatusCode};
use serde_json::Value;
use tracing::{debug, warn};

use crate::domain::{ENTITY_ID_KEY, EntityData, FieldValue, PageConfig, parse_page_config};

use super::{PageSource, SourceError};

pub const DEFAULT_BASE_URL: &str = "https://my-json-server.typicode.com/MosheHM/learning-angular-db";

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Characters escaped inside a single path segment.
const SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

/// JSON REST backend: `pages/{page}` for configurations, `data/{page}` for
/// entity collections.
#[derive(Debug, Clone)]
pub struct HttpPageSource {
    client: Client,
    base_url: String,
}

impl HttpPageSource {
    pub fn new(base_url: impl Into<String>) -> Result<Self, SourceError> {
        let client = Client::builder().timeout(DEFAULT_TIMEOUT).build()?;
        Ok(Self::with_client(client, base_url))
    }

    pub fn with_client(client: Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { client, base_url }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, segments: &[&str]) -> String {
        let mut url = self.base_url.clone();
        for segment in segments {
            url.push('/');
            url.extend(utf8_percent_encode(segment, SEGMENT));
        }
        url
    }

    async fn send(
        &self,
        method: Method,
        url: &str,
        body: Option<&EntityData>,
    ) -> Result<Value, SourceError> {
        debug!(%method, url, "sending request");
        let mut request = self.client.request(method, url);
        if let Some(body) = body {
            request = request.json(body);
        }
        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            let message = response
                .text()
                .await
                .ok()
                .filter(|text| !text.trim().is_empty())
                .or_else(|| status.canonical_reason().map(str::to_string))
                .unwrap_or_default();
            warn!(url, code = status.as_u16(), "request rejected");
            return Err(SourceError::Status {
                code: status.as_u16(),
                message,
            });
        }
        if status == StatusCode::NO_CONTENT {
            return Ok(Value::Null);
        }
        let bytes = response.bytes().await?;
        if bytes.is_empty() {
            return Ok(Value::Null);
        }
        Ok(serde_json::from_slice(&bytes)?)
    }
}

#[async_trait]
impl PageSource for HttpPageSource {
    async fn load_page_config(&self, page_id: &str) -> Result<PageConfig, SourceError> {
        let url = self.url(&["pages", page_id]);
        let document = match self.send(Method::GET, &url, None).await {
            Err(err) if err.is_not_found() => {
                return Err(SourceError::NotFound(page_id.to_string()));
            }
            other => other?,
        };
        Ok(parse_page_config(&document)?)
    }

    async fn load_page_data(
        &self,
        page_id: &str,
        entity_id: &str,
    ) -> Result<Option<EntityData>, SourceError> {
        let url = self.url(&["data", page_id]);
        let collection = match self.send(Method::GET, &url, None).await {
            Err(err) if err.is_not_found() => return Ok(None),
            other => other?,
        };
        Ok(find_entity(&collection, entity_id))
    }

    async fn save_page_data(&self, page_id: &str, values: &EntityData) -> Result<(), SourceError> {
        let entity_id = values
            .get(ENTITY_ID_KEY)
            .map(FieldValue::as_text)
            .filter(|id| !id.is_empty());
        let url = match &entity_id {
            Some(id) => self.url(&["data", page_id, id]),
            None => self.url(&["data", page_id]),
        };
        let method = if entity_id.is_some() {
            Method::PUT
        } else {
            Method::POST
        };
        self.send(method, &url, Some(values)).await?;
        debug!(page_id, ?entity_id, "entity saved");
        Ok(())
    }
}

/// Picks the entity whose `id` matches by string form out of a collection.
/// A bare object is treated as a one-element collection.
fn find_entity(collection: &Value, entity_id: &str) -> Option<EntityData> {
    let candidates: &[Value] = match collection {
        Value::Array(items) => items.as_slice(),
        Value::Object(_) => std::slice::from_ref(collection),
        _ => &[],
    };
    candidates
        .iter()
        .filter_map(Value::as_object)
        .find(|entity| {
            entity
                .get(ENTITY_ID_KEY)
                .map(|id| FieldValue::from_json(id).as_text() == entity_id)
                .unwrap_or(false)
        })
        .map(|entity| {
            entity
                .iter()
                .filter(|(key, _)| key.as_str() != ENTITY_ID_KEY)
                .map(|(key, value)| (key.clone(), FieldValue::from_json(value)))
                .collect()
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn encodes_path_segments() {
        let source = HttpPageSource::with_client(Client::new(), "http://localhost:9/api/");
        assert_eq!(
            source.url(&["data", "my page", "a/b"]),
            "http://localhost:9/api/data/my%20page/a%2Fb"
        );
    }

    #[test]
    fn finds_entities_by_string_form_of_id() {
        let collection = json!([
            {"id": 1, "email": "one@example.com"},
            {"id": "2", "email": "two@example.com"}
        ]);
        let first = find_entity(&collection, "1").expect("numeric id matches");
        assert_eq!(first["email"], FieldValue::text("one@example.com"));
        assert!(!first.contains_key("id"));
        assert!(find_entity(&collection, "2").is_some());
        assert!(find_entity(&collection, "3").is_none());
    }
}
