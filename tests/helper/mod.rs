//! Endpoint test utilities

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use axum::Router;
use axum::body::Body;
use axum::http::{Request, header};
use axum::response::Response;
use serde_json::{Value, json};

use release_gen::api::server::{AppState, GETPARAMS_PATH, router};
use release_gen::config::Config;
use release_gen::release::error::FetchError;
use release_gen::release::source::TagSource;
use release_gen::release::types::{Commit, Release};

/// Token the test router accepts
pub const TEST_TOKEN: &str = "test-token";

/// Tag source serving a fixed in-memory tag list per repository
pub struct StaticTags {
    tags: HashMap<String, Vec<Release>>,
}

impl StaticTags {
    pub fn new() -> Self {
        Self {
            tags: HashMap::new(),
        }
    }

    pub fn with_tags(mut self, repository: &str, names: Vec<&str>) -> Self {
        self.tags.insert(
            repository.to_string(),
            names.into_iter().map(release).collect(),
        );
        self
    }
}

#[async_trait]
impl TagSource for StaticTags {
    async fn fetch_tags(&self, repository: &str) -> Result<Vec<Release>, FetchError> {
        match self.tags.get(repository) {
            Some(releases) => Ok(releases.clone()),
            None => Err(FetchError::NotFound(repository.to_string())),
        }
    }
}

/// Creates a release with commit metadata derived from the tag name,
/// slugs unset as they arrive from the hosting API
pub fn release(name: &str) -> Release {
    Release {
        name: name.to_string(),
        name_slug: String::new(),
        tag_slug: String::new(),
        commit: Commit {
            sha: format!("sha-{name}"),
            url: format!("https://api.example.com/commits/{name}"),
        },
        node_id: format!("node-{name}"),
    }
}

/// Builds an application router around a static tag source
pub fn test_router(tags: StaticTags) -> Router {
    let config = Config {
        auth_token: TEST_TOKEN.to_string(),
        github_token: None,
        port: 8080,
        log_level: "info".to_string(),
    };

    router(AppState {
        config: Arc::new(config),
        tags: Arc::new(tags),
    })
}

/// Builds an authorized getparams request for the given parameters object
pub fn getparams_request(token: &str, parameters: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(GETPARAMS_PATH)
        .header(header::AUTHORIZATION, format!("Bearer {token}"))
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(
            json!({"input": {"parameters": parameters}}).to_string(),
        ))
        .unwrap()
}

/// Expected response body for (name, name_slug, tag_slug) triples over
/// releases built by [`release`]
pub fn envelope(entries: &[(&str, &str, &str)]) -> Value {
    let parameters: Vec<Value> = entries
        .iter()
        .map(|(name, name_slug, tag_slug)| {
            json!({
                "name": name,
                "name_slug": name_slug,
                "tag_slug": tag_slug,
                "commit": {
                    "sha": format!("sha-{name}"),
                    "url": format!("https://api.example.com/commits/{name}"),
                },
                "node_id": format!("node-{name}"),
            })
        })
        .collect();

    json!({"output": {"parameters": parameters}})
}

/// Reads a response body as JSON
pub async fn read_json(response: Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}
